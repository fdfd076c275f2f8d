use crate::stylesheet;
use globset::{Glob, GlobSet, GlobSetBuilder, GlobBuilder};
use ignore::WalkBuilder;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("failed to walk stylesheet tree: {0}")]
    Walk(#[from] ignore::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinedClassSet {
    names: HashSet<String>,
}

impl DefinedClassSet {
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn from_component_source(source: &str) -> Self {
        stylesheet::component_classes(source).into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for DefinedClassSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Extend<String> for DefinedClassSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.names.extend(iter);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StylesheetQuery {
    pub base_dir: PathBuf,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ClassIndex {
    cache: HashMap<StylesheetQuery, Arc<DefinedClassSet>>,
}

impl ClassIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(&mut self, query: &StylesheetQuery) -> Arc<DefinedClassSet> {
        if let Some(cached) = self.cache.get(query) {
            debug!(base_dir = %query.base_dir.display(), "defined-class cache hit");
            return Arc::clone(cached);
        }
        debug!(base_dir = %query.base_dir.display(), "defined-class cache miss");
        let set = Arc::new(read_defined_classes(&discover_stylesheets(query)));
        self.cache.insert(query.clone(), Arc::clone(&set));
        set
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn cached_queries(&self) -> usize {
        self.cache.len()
    }
}

pub fn read_defined_classes(paths: &[PathBuf]) -> DefinedClassSet {
    let mut set = DefinedClassSet::default();
    for path in paths {
        let css = match fs::read_to_string(path) {
            Ok(css) => css,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read stylesheet");
                continue;
            }
        };
        match stylesheet::parse(&css) {
            Ok(parsed) => {
                for err in &parsed.skipped {
                    warn!(path = %path.display(), error = %err, "skipping selector");
                }
                set.extend(parsed.defined_names().cloned());
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to parse stylesheet");
            }
        }
    }
    set
}

/// Files under `query.base_dir` matching any include glob and no exclude
/// glob, sorted. Globs match against the path relative to the base
/// directory only.
pub fn discover_stylesheets(query: &StylesheetQuery) -> Vec<PathBuf> {
    let includes = build_globset(&query.includes);
    let excludes = build_globset(&query.excludes);
    if includes.is_empty() {
        return Vec::new();
    }

    let base = query.base_dir.clone();
    let prune_set = excludes.clone();
    let prune_base = base.clone();
    let mut builder = WalkBuilder::new(&base);
    builder
        .hidden(false)
        .ignore(false)
        .parents(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            !is_dir || entry.depth() == 0 || !is_excluded_dir(&prune_set, &prune_base, entry.path())
        });

    let mut paths = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %DiscoveryError::from(err), "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.path();
        let Ok(relative) = path.strip_prefix(&base) else {
            continue;
        };
        if !includes.is_match(relative) || excludes.is_match(relative) {
            continue;
        }
        paths.push(path.to_path_buf());
    }

    paths.sort();
    paths.dedup();
    debug!(base_dir = %base.display(), count = paths.len(), "discovered stylesheets");
    paths
}

fn is_excluded_dir(excludes: &GlobSet, base: &Path, dir: &Path) -> bool {
    if excludes.is_empty() {
        return false;
    }
    dir.strip_prefix(base)
        .is_ok_and(|relative| excludes.is_match(relative.join("_")))
}

fn build_globset(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match compile_glob(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(err) => warn!(error = %err, "ignoring glob"),
        }
    }
    builder.build().unwrap_or_else(|err| {
        warn!(error = %err, "failed to build glob set");
        GlobSet::empty()
    })
}

fn compile_glob(pattern: &str) -> Result<Glob, DiscoveryError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|source| DiscoveryError::InvalidGlob {
            pattern: pattern.to_string(),
            source,
        })
}
