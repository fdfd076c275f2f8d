#![allow(dead_code)]

use classlint::{Analyzer, ClassToken, IgnoreConfig, RawOptions, Site, SiteKind, Span};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir should be created"),
        }
    }

    pub fn with_file(self, relative: &str, contents: &str) -> Self {
        self.write(relative, contents);
        self
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("fixture dir should be created");
        }
        fs::write(path, contents).expect("fixture should be written");
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn analyzer(&self, options: RawOptions) -> Analyzer {
        let config =
            IgnoreConfig::from_options(options, self.root()).expect("options should validate");
        Analyzer::new(config)
    }
}

pub fn site() -> Site {
    Site::new(SiteKind::JsxAttribute, Span::new(0, 1))
}

pub fn literal_tokens(list: &str) -> Vec<ClassToken> {
    list.split_whitespace()
        .map(|value| ClassToken::literal(value, site()))
        .collect()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
