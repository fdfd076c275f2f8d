use crate::theme::{contains_framework_import, has_theme_block};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const FRAMEWORK_PACKAGE: &str = "tailwindcss";
const CONFIG_FILES: &[&str] = &[
    "tailwind.config.js",
    "tailwind.config.cjs",
    "tailwind.config.mjs",
    "tailwind.config.ts",
];
const POSTCSS_FILES: &[&str] = &["postcss.config.js", "postcss.config.cjs", "postcss.config.mjs"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameworkMarker {
    ConfigFile(PathBuf),
    ManifestDependency(PathBuf),
    PostcssPlugin(PathBuf),
    Stylesheet(PathBuf),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PackageManifest {
    dependencies: BTreeMap<String, serde_json::Value>,
    dev_dependencies: BTreeMap<String, serde_json::Value>,
}

impl PackageManifest {
    fn depends_on(&self, package: &str) -> bool {
        self.dependencies.contains_key(package) || self.dev_dependencies.contains_key(package)
    }
}

pub fn find_marker(project_root: &Path, stylesheets: &[PathBuf]) -> Option<FrameworkMarker> {
    for name in CONFIG_FILES {
        let path = project_root.join(name);
        if path.is_file() {
            return Some(FrameworkMarker::ConfigFile(path));
        }
    }

    let manifest_path = project_root.join("package.json");
    if manifest_declares_framework(&manifest_path) {
        return Some(FrameworkMarker::ManifestDependency(manifest_path));
    }

    for name in POSTCSS_FILES {
        let path = project_root.join(name);
        if fs::read_to_string(&path).is_ok_and(|text| text.contains(FRAMEWORK_PACKAGE)) {
            return Some(FrameworkMarker::PostcssPlugin(path));
        }
    }

    stylesheets.iter().find_map(|path| {
        let css = fs::read_to_string(path).ok()?;
        (contains_framework_import(&css) || has_theme_block(&css))
            .then(|| FrameworkMarker::Stylesheet(path.clone()))
    })
}

fn manifest_declares_framework(path: &Path) -> bool {
    let Ok(text) = fs::read_to_string(path) else {
        return false;
    };
    match serde_json::from_str::<PackageManifest>(&text) {
        Ok(manifest) => manifest.depends_on(FRAMEWORK_PACKAGE),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to parse package manifest");
            false
        }
    }
}

#[derive(Debug, Default)]
pub struct FrameworkDetector {
    cache: HashMap<PathBuf, bool>,
}

impl FrameworkDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detect(&mut self, project_root: &Path, stylesheets: &[PathBuf]) -> bool {
        if let Some(found) = self.cache.get(project_root) {
            return *found;
        }
        let marker = find_marker(project_root, stylesheets);
        debug!(root = %project_root.display(), marker = ?marker, "framework marker detection");
        let found = marker.is_some();
        self.cache.insert(project_root.to_path_buf(), found);
        found
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameworkDetector, FrameworkMarker, find_marker};
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        TempDir::new().expect("temp dir should be created")
    }

    #[test]
    fn empty_project_has_no_marker() {
        let dir = project();
        assert_eq!(find_marker(dir.path(), &[]), None);
    }

    #[test]
    fn config_file_is_a_marker() {
        let dir = project();
        fs::write(dir.path().join("tailwind.config.ts"), "export default {}")
            .expect("config should be written");
        assert!(matches!(
            find_marker(dir.path(), &[]),
            Some(FrameworkMarker::ConfigFile(_))
        ));
    }

    #[test]
    fn manifest_dependency_is_a_marker() {
        let dir = project();
        fs::write(
            dir.path().join("package.json"),
            r#"{ "name": "app", "devDependencies": { "tailwindcss": "^4.0.0" } }"#,
        )
        .expect("manifest should be written");
        assert!(matches!(
            find_marker(dir.path(), &[]),
            Some(FrameworkMarker::ManifestDependency(_))
        ));
    }

    #[test]
    fn unrelated_or_broken_manifest_is_not_a_marker() {
        let dir = project();
        let manifest = dir.path().join("package.json");
        fs::write(&manifest, r#"{ "dependencies": { "tailwind-merge": "2" } }"#)
            .expect("manifest should be written");
        assert_eq!(find_marker(dir.path(), &[]), None);
        fs::write(&manifest, "{ not json").expect("manifest should be written");
        assert_eq!(find_marker(dir.path(), &[]), None);
    }

    #[test]
    fn postcss_plugin_is_a_marker() {
        let dir = project();
        fs::write(
            dir.path().join("postcss.config.mjs"),
            "export default { plugins: { '@tailwindcss/postcss': {} } }",
        )
        .expect("postcss config should be written");
        assert!(matches!(
            find_marker(dir.path(), &[]),
            Some(FrameworkMarker::PostcssPlugin(_))
        ));
    }

    #[test]
    fn stylesheet_import_or_theme_is_a_marker() {
        let dir = project();
        let plain = dir.path().join("plain.css");
        let app = dir.path().join("app.css");
        fs::write(&plain, ".a {}").expect("stylesheet should be written");
        fs::write(&app, "@import 'tailwindcss';").expect("stylesheet should be written");
        assert_eq!(
            find_marker(dir.path(), &[plain.clone(), app.clone()]),
            Some(FrameworkMarker::Stylesheet(app))
        );
        let themed = dir.path().join("theme.css");
        fs::write(&themed, "@theme { --color-brand: red; }").expect("stylesheet should be written");
        assert_eq!(
            find_marker(dir.path(), &[plain, themed.clone()]),
            Some(FrameworkMarker::Stylesheet(themed))
        );
    }

    #[test]
    fn detection_is_cached_per_root_until_cleared() {
        let dir = project();
        let mut detector = FrameworkDetector::new();
        assert!(!detector.detect(dir.path(), &[]));
        fs::write(dir.path().join("tailwind.config.js"), "").expect("config should be written");
        assert!(!detector.detect(dir.path(), &[]));
        detector.clear();
        assert!(detector.detect(dir.path(), &[]));
    }
}
