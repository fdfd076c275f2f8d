use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{self, Component, Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Security Error: baseDir must not contain null bytes")]
    NullByte,
    #[error("Security Error: baseDir must be within project directory")]
    OutsideProject { base_dir: PathBuf },
    #[error("failed to resolve project root {}: {source}", path.display())]
    ProjectRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawOptions {
    #[serde(alias = "cssFiles")]
    pub css_files: Vec<String>,
    #[serde(alias = "excludePatterns")]
    pub exclude_patterns: Vec<String>,
    #[serde(alias = "baseDir")]
    pub base_dir: Option<String>,
    #[serde(alias = "ignorePatterns")]
    pub ignore_patterns: Vec<String>,
    #[serde(alias = "ignoreTailwind")]
    pub ignore_tailwind: bool,
    #[serde(alias = "requireTailwindConfig")]
    pub require_tailwind_config: bool,
    #[serde(alias = "allowDynamicClasses")]
    pub allow_dynamic_classes: bool,
    pub debug: bool,
}

impl Default for RawOptions {
    fn default() -> Self {
        Self {
            css_files: vec!["**/*.css".to_string()],
            exclude_patterns: vec!["**/node_modules/**".to_string()],
            base_dir: None,
            ignore_patterns: Vec::new(),
            ignore_tailwind: true,
            require_tailwind_config: false,
            allow_dynamic_classes: true,
            debug: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Recommended,
    Strict,
    Framework,
}

impl Preset {
    pub fn options(self) -> RawOptions {
        match self {
            Preset::Recommended => RawOptions::default(),
            Preset::Strict => RawOptions {
                allow_dynamic_classes: false,
                require_tailwind_config: true,
                ..RawOptions::default()
            },
            Preset::Framework => RawOptions {
                ignore_tailwind: true,
                ..RawOptions::default()
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct IgnoreConfig {
    pub project_root: PathBuf,
    pub base_dir: PathBuf,
    pub css_files: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub ignore_patterns: Vec<Regex>,
    pub ignore_tailwind: bool,
    pub require_tailwind_config: bool,
    pub allow_dynamic_classes: bool,
    pub debug: bool,
}

impl IgnoreConfig {
    pub fn from_options(raw: RawOptions, project_root: &Path) -> Result<Self, ConfigError> {
        let project_root = absolute_root(project_root)?;
        let base_dir = resolve_base_dir(raw.base_dir.as_deref(), &project_root)?;
        let ignore_patterns = compile_ignore_patterns(&raw.ignore_patterns);

        Ok(Self {
            project_root,
            base_dir,
            css_files: raw.css_files,
            exclude_patterns: raw.exclude_patterns,
            ignore_patterns,
            ignore_tailwind: raw.ignore_tailwind,
            require_tailwind_config: raw.require_tailwind_config,
            allow_dynamic_classes: raw.allow_dynamic_classes,
            debug: raw.debug,
        })
    }

    pub fn is_ignored(&self, class: &str) -> bool {
        self.ignore_patterns
            .iter()
            .any(|pattern| pattern.is_match(class))
    }
}

pub fn load(path: &Path) -> Result<RawOptions, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Anchors a relative root at the working directory so containment checks
/// never compare against an empty path.
fn absolute_root(project_root: &Path) -> Result<PathBuf, ConfigError> {
    let root = if project_root.as_os_str().is_empty() {
        Path::new(".")
    } else {
        project_root
    };
    let absolute = path::absolute(root).map_err(|source| ConfigError::ProjectRoot {
        path: project_root.to_path_buf(),
        source,
    })?;
    Ok(normalize_lexically(&absolute))
}

/// Resolves `base_dir` against `project_root` without touching the
/// filesystem. The result must stay inside the root.
fn resolve_base_dir(base_dir: Option<&str>, project_root: &Path) -> Result<PathBuf, ConfigError> {
    let Some(base_dir) = base_dir else {
        return Ok(project_root.to_path_buf());
    };
    if base_dir.contains('\0') {
        return Err(ConfigError::NullByte);
    }
    let resolved = normalize_lexically(&project_root.join(base_dir));
    if !resolved.starts_with(project_root) {
        return Err(ConfigError::OutsideProject { base_dir: resolved });
    }
    Ok(resolved)
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                );
                if at_root {
                    if !out.has_root() {
                        out.push("..");
                    }
                } else if out.ends_with("..") {
                    out.push("..");
                } else {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn compile_ignore_patterns(patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| {
            if has_nested_quantifier(pattern) {
                debug!(pattern = %pattern, "dropping ignore pattern with nested quantifiers");
                return None;
            }
            match Regex::new(pattern) {
                Ok(regex) => Some(regex),
                Err(err) => {
                    debug!(pattern = %pattern, error = %err, "dropping invalid ignore pattern");
                    None
                }
            }
        })
        .collect()
}

fn has_nested_quantifier(pattern: &str) -> bool {
    static SHAPE: OnceLock<Option<Regex>> = OnceLock::new();
    if !(pattern.contains('(') && pattern.contains('+') && pattern.contains('*')) {
        return false;
    }
    SHAPE
        .get_or_init(|| Regex::new(r"(\(.*[+*].*\)[+*])|([+*].*[+*])").ok())
        .as_ref()
        .is_some_and(|shape| shape.is_match(pattern))
}
