use crate::ast::SiteNode;
use crate::classifier::{Classifier, matches_theme};
use crate::config::IgnoreConfig;
use crate::detector::FrameworkDetector;
use crate::extract::{ClassToken, Site, extract};
use crate::index::{ClassIndex, DefinedClassSet, StylesheetQuery, discover_stylesheets};
use crate::lru::DEFAULT_CAPACITY;
use crate::theme::{ThemeClasses, ThemeTokens};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, trace};

const MODULE_SCOPED_PREFIXES: &[&str] = &["module-", "styles-"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Dynamic,
    IgnoredPattern,
    ModuleScoped,
    Utility,
    ThemeToken,
    Defined,
    LocallyDefined,
    Undefined,
}

impl Verdict {
    pub fn is_undefined(self) -> bool {
        self == Verdict::Undefined
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndefinedClasses {
    Single(String),
    Multiple(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub site: Site,
    pub classes: UndefinedClasses,
}

impl Diagnostic {
    fn from_names(site: Site, mut names: Vec<String>) -> Option<Self> {
        let classes = match names.len() {
            0 => return None,
            1 => UndefinedClasses::Single(names.remove(0)),
            _ => UndefinedClasses::Multiple(names),
        };
        Some(Self { site, classes })
    }

    pub fn class_names(&self) -> Vec<&str> {
        match &self.classes {
            UndefinedClasses::Single(name) => vec![name.as_str()],
            UndefinedClasses::Multiple(names) => names.iter().map(String::as_str).collect(),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.classes {
            UndefinedClasses::Single(name) => {
                write!(f, "CSS class '{}' is not defined in any CSS file", name)
            }
            UndefinedClasses::Multiple(names) => write!(
                f,
                "CSS classes {} are not defined in any CSS file",
                names.join(", ")
            ),
        }
    }
}

#[derive(Debug)]
pub struct Analyzer {
    config: IgnoreConfig,
    index: ClassIndex,
    detector: FrameworkDetector,
    classifier: Classifier,
    stylesheets: Option<Arc<[PathBuf]>>,
    theme: Option<Arc<ThemeClasses>>,
}

impl Analyzer {
    pub fn new(config: IgnoreConfig) -> Self {
        Self {
            config,
            index: ClassIndex::new(),
            detector: FrameworkDetector::new(),
            classifier: Classifier::new(DEFAULT_CAPACITY),
            stylesheets: None,
            theme: None,
        }
    }

    pub fn config(&self) -> &IgnoreConfig {
        &self.config
    }

    fn query(&self) -> StylesheetQuery {
        StylesheetQuery {
            base_dir: self.config.base_dir.clone(),
            includes: self.config.css_files.clone(),
            excludes: self.config.exclude_patterns.clone(),
        }
    }

    /// Classes defined by the configured stylesheets. Repeated calls return
    /// the same allocation until [`Analyzer::clear_caches`].
    pub fn build_known_classes(&mut self) -> Arc<DefinedClassSet> {
        let query = self.query();
        self.index.build(&query)
    }

    pub fn theme_classes(&mut self) -> Arc<ThemeClasses> {
        if let Some(theme) = &self.theme {
            return Arc::clone(theme);
        }
        let paths = self.stylesheet_paths();
        let theme = Arc::new(ThemeTokens::from_files(&paths).utility_classes());
        debug!(count = theme.len(), "generated theme utility classes");
        self.theme = Some(Arc::clone(&theme));
        theme
    }

    fn stylesheet_paths(&mut self) -> Arc<[PathBuf]> {
        if let Some(paths) = &self.stylesheets {
            return Arc::clone(paths);
        }
        let paths: Arc<[PathBuf]> = discover_stylesheets(&self.query()).into();
        self.stylesheets = Some(Arc::clone(&paths));
        paths
    }

    pub fn framework_exempt(&mut self) -> bool {
        if !self.config.ignore_tailwind {
            return false;
        }
        if !self.config.require_tailwind_config {
            return true;
        }
        let paths = self.stylesheet_paths();
        let root = self.config.project_root.clone();
        self.detector.detect(&root, &paths)
    }

    pub fn verdict(&mut self, token: &ClassToken) -> Verdict {
        self.decide(token, None)
    }

    fn decide(&mut self, token: &ClassToken, local: Option<&DefinedClassSet>) -> Verdict {
        let verdict = self.decide_uncached(token, local);
        if self.config.debug {
            debug!(class = %token.value, dynamic = token.dynamic, verdict = ?verdict, "class verdict");
        } else {
            trace!(class = %token.value, dynamic = token.dynamic, verdict = ?verdict, "class verdict");
        }
        verdict
    }

    fn decide_uncached(&mut self, token: &ClassToken, local: Option<&DefinedClassSet>) -> Verdict {
        let value = token.value.as_str();
        if self.config.allow_dynamic_classes && (token.dynamic || has_placeholder(value)) {
            return Verdict::Dynamic;
        }
        if self.config.is_ignored(value) {
            return Verdict::IgnoredPattern;
        }
        if MODULE_SCOPED_PREFIXES
            .iter()
            .any(|prefix| value.starts_with(prefix))
        {
            return Verdict::ModuleScoped;
        }
        if self.framework_exempt() {
            if self.classifier.is_framework_class(value) {
                return Verdict::Utility;
            }
            if matches_theme(value, &self.theme_classes()) {
                return Verdict::ThemeToken;
            }
        }
        if self.build_known_classes().contains(value) {
            return Verdict::Defined;
        }
        if local.is_some_and(|local| local.contains(value)) {
            return Verdict::LocallyDefined;
        }
        Verdict::Undefined
    }

    /// Checks the tokens of one site and reports every undefined one in
    /// encounter order.
    pub fn check_site(&mut self, site: &Site, tokens: &[ClassToken]) -> Option<Diagnostic> {
        self.check(site, tokens, None)
    }

    pub fn check_component_site(
        &mut self,
        site: &Site,
        tokens: &[ClassToken],
        local: &DefinedClassSet,
    ) -> Option<Diagnostic> {
        self.check(site, tokens, Some(local))
    }

    pub fn check_node(&mut self, node: &SiteNode) -> Option<Diagnostic> {
        let tokens = extract(node);
        self.check_site(&Site::of(node), &tokens)
    }

    pub fn check_component_node(
        &mut self,
        node: &SiteNode,
        local: &DefinedClassSet,
    ) -> Option<Diagnostic> {
        let tokens = extract(node);
        self.check_component_site(&Site::of(node), &tokens, local)
    }

    fn check(
        &mut self,
        site: &Site,
        tokens: &[ClassToken],
        local: Option<&DefinedClassSet>,
    ) -> Option<Diagnostic> {
        let mut undefined: Vec<String> = Vec::new();
        for token in tokens {
            if self.decide(token, local).is_undefined() {
                undefined.push(token.value.clone());
            }
        }
        Diagnostic::from_names(*site, undefined)
    }

    pub fn clear_caches(&mut self) {
        self.index.clear();
        self.detector.clear();
        self.classifier.clear();
        self.stylesheets = None;
        self.theme = None;
    }
}

fn has_placeholder(value: &str) -> bool {
    value.contains("${") || value.contains("{{")
}

#[cfg(test)]
mod tests {
    use super::{Analyzer, Diagnostic, UndefinedClasses, Verdict};
    use crate::ast::Span;
    use crate::config::{IgnoreConfig, RawOptions};
    use crate::extract::{ClassToken, Site, SiteKind};
    use crate::index::DefinedClassSet;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn site() -> Site {
        Site::new(SiteKind::JsxAttribute, Span::new(4, 20))
    }

    fn tokens(values: &[&str]) -> Vec<ClassToken> {
        values
            .iter()
            .map(|value| ClassToken::literal(*value, site()))
            .collect()
    }

    fn analyzer(dir: &TempDir, options: RawOptions) -> Analyzer {
        let config =
            IgnoreConfig::from_options(options, dir.path()).expect("config should validate");
        Analyzer::new(config)
    }

    fn project(css: &str) -> TempDir {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("app.css"), css).expect("stylesheet should be written");
        dir
    }

    #[test]
    fn single_and_plural_messages() {
        let single = Diagnostic {
            site: site(),
            classes: UndefinedClasses::Single("ghost".to_string()),
        };
        assert_eq!(
            single.message(),
            "CSS class 'ghost' is not defined in any CSS file"
        );
        let plural = Diagnostic {
            site: site(),
            classes: UndefinedClasses::Multiple(vec!["a".to_string(), "b".to_string()]),
        };
        assert_eq!(
            plural.message(),
            "CSS classes a, b are not defined in any CSS file"
        );
        assert_eq!(plural.class_names(), vec!["a", "b"]);
    }

    #[test]
    fn reports_every_undefined_class_in_order() {
        let dir = project(".btn {}");
        let mut analyzer = analyzer(&dir, RawOptions::default());
        let diagnostic = analyzer
            .check_site(&site(), &tokens(&["zeta", "btn", "alpha", "zeta"]))
            .expect("undefined classes should be reported");
        assert_eq!(diagnostic.site, site());
        assert_eq!(
            diagnostic.classes,
            UndefinedClasses::Multiple(vec![
                "zeta".to_string(),
                "alpha".to_string(),
                "zeta".to_string()
            ])
        );
        assert!(analyzer.check_site(&site(), &tokens(&["btn"])).is_none());
        assert!(analyzer.check_site(&site(), &[]).is_none());
    }

    #[test]
    fn verdicts_follow_policy_order() {
        let dir = project(".card {} .p-4 {}");
        let options = RawOptions {
            ignore_patterns: vec!["^card".to_string()],
            ..RawOptions::default()
        };
        let mut analyzer = analyzer(&dir, options);
        let verdict = |analyzer: &mut Analyzer, value: &str| {
            analyzer.verdict(&ClassToken::literal(value, site()))
        };
        assert_eq!(verdict(&mut analyzer, "card"), Verdict::IgnoredPattern);
        assert_eq!(verdict(&mut analyzer, "module-header"), Verdict::ModuleScoped);
        assert_eq!(verdict(&mut analyzer, "styles-root"), Verdict::ModuleScoped);
        assert_eq!(verdict(&mut analyzer, "p-4"), Verdict::Utility);
        assert_eq!(verdict(&mut analyzer, "bg-${tone}"), Verdict::Dynamic);
        assert_eq!(verdict(&mut analyzer, "mystery"), Verdict::Undefined);
        assert_eq!(
            analyzer.verdict(&ClassToken::dynamic("theme-", site())),
            Verdict::Dynamic
        );
    }

    #[test]
    fn disabled_framework_falls_back_to_stylesheets() {
        let dir = project(".p-4 {}");
        let options = RawOptions {
            ignore_tailwind: false,
            ..RawOptions::default()
        };
        let mut analyzer = analyzer(&dir, options);
        assert_eq!(
            analyzer.verdict(&ClassToken::literal("p-4", site())),
            Verdict::Defined
        );
        assert_eq!(
            analyzer.verdict(&ClassToken::literal("flex", site())),
            Verdict::Undefined
        );
    }

    #[test]
    fn disallowed_dynamic_tokens_are_checked_literally() {
        let dir = project(".theme- {}");
        let options = RawOptions {
            allow_dynamic_classes: false,
            ..RawOptions::default()
        };
        let mut analyzer = analyzer(&dir, options);
        assert_eq!(
            analyzer.verdict(&ClassToken::dynamic("theme-", site())),
            Verdict::Defined
        );
        assert_eq!(
            analyzer.verdict(&ClassToken::dynamic("tone-", site())),
            Verdict::Undefined
        );
    }

    #[test]
    fn theme_tokens_count_as_known() {
        let dir = project("@import \"tailwindcss\";\n@theme { --color-brand: #123456; }");
        let mut analyzer = analyzer(&dir, RawOptions::default());
        assert_eq!(
            analyzer.verdict(&ClassToken::literal("bg-brand", site())),
            Verdict::ThemeToken
        );
        assert_eq!(
            analyzer.verdict(&ClassToken::literal("hover:text-brand/40", site())),
            Verdict::ThemeToken
        );
        assert_eq!(
            analyzer.verdict(&ClassToken::literal("bg-other", site())),
            Verdict::Undefined
        );
    }

    #[test]
    fn component_styles_define_local_classes() {
        let dir = project(".global {}");
        let mut analyzer = analyzer(&dir, RawOptions::default());
        let local: DefinedClassSet = ["local"].into_iter().collect();
        assert!(
            analyzer
                .check_component_site(&site(), &tokens(&["global", "local"]), &local)
                .is_none()
        );
        let diagnostic = analyzer
            .check_site(&site(), &tokens(&["local"]))
            .expect("local class is unknown without component styles");
        assert_eq!(diagnostic.classes, UndefinedClasses::Single("local".to_string()));
    }

    #[test]
    fn caches_hold_until_cleared() {
        let dir = project(".a {}");
        let mut analyzer = analyzer(&dir, RawOptions::default());
        let first = analyzer.build_known_classes();
        fs::write(dir.path().join("more.css"), ".b {}").expect("stylesheet should be written");
        let second = analyzer.build_known_classes();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(!second.contains("b"));

        analyzer.clear_caches();
        let third = analyzer.build_known_classes();
        assert!(third.contains("b"));
    }
}
