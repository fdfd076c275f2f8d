//! Finds CSS class references that no stylesheet, utility grammar or theme
//! token defines.
//!
//! A host walks its templates and hands each class-bearing attribute or
//! expression to an [`Analyzer`] as a [`SiteNode`]. The analyzer extracts the
//! literal class tokens, decides each one, and returns at most one
//! [`Diagnostic`] per site.

pub mod ast;
pub mod classifier;
pub mod config;
pub mod detector;
pub mod engine;
pub mod extract;
pub mod index;
pub mod lru;
pub mod scales;
pub mod scanner;
pub mod stylesheet;
pub mod theme;
pub mod utilities;
pub mod variants;

pub use ast::{AttributeValue, Expr, SiteNode, Span, SveltePart};
pub use classifier::{Classifier, is_dynamic_utility_class, is_utility_class, matches_theme};
pub use config::{ConfigError, IgnoreConfig, Preset, RawOptions};
pub use engine::{Analyzer, Diagnostic, UndefinedClasses, Verdict};
pub use extract::{ClassToken, Site, SiteKind, extract};
pub use index::{DefinedClassSet, DiscoveryError, StylesheetQuery};
pub use stylesheet::StylesheetError;
pub use theme::{ThemeClasses, ThemeTokens};
