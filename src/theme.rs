use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const SEMANTIC_COLOR_ALIASES: &[&str] = &[
    "primary",
    "secondary",
    "accent",
    "muted",
    "surface",
    "background",
    "foreground",
    "canvas",
    "border",
    "input",
    "ring",
    "card",
    "popover",
    "destructive",
];

const COLOR_UTILITIES: &[&str] = &[
    "bg",
    "text",
    "border",
    "border-x",
    "border-y",
    "border-t",
    "border-r",
    "border-b",
    "border-l",
    "ring",
    "ring-offset",
    "outline",
    "divide",
    "placeholder",
    "caret",
    "accent",
    "fill",
    "stroke",
    "decoration",
    "shadow",
    "from",
    "via",
    "to",
];

const SPACING_UTILITIES: &[&str] = &[
    "p", "px", "py", "pt", "pr", "pb", "pl", "ps", "pe", "gap", "gap-x", "gap-y", "w", "h",
    "min-w", "max-w", "min-h", "max-h", "size", "inset", "inset-x", "inset-y", "top", "right",
    "bottom", "left", "start", "end",
];

const MARGIN_UTILITIES: &[&str] = &["m", "mx", "my", "mt", "mr", "mb", "ml", "ms", "me"];

const RADIUS_UTILITIES: &[&str] = &[
    "rounded",
    "rounded-t",
    "rounded-r",
    "rounded-b",
    "rounded-l",
    "rounded-tl",
    "rounded-tr",
    "rounded-br",
    "rounded-bl",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeTokens {
    pub colors: BTreeSet<String>,
    pub fonts: BTreeSet<String>,
    pub spacing: BTreeSet<String>,
    pub radii: BTreeSet<String>,
    pub shadows: BTreeSet<String>,
}

impl ThemeTokens {
    pub fn parse(css: &str) -> Self {
        let mut tokens = Self::default();
        for body in extract_theme_blocks(css) {
            for (name, _) in extract_theme_variable_declarations(body) {
                tokens.insert_variable(name);
            }
        }
        tokens
    }

    pub fn from_files(paths: &[PathBuf]) -> Self {
        let mut tokens = Self::default();
        for path in paths {
            let css = match fs::read_to_string(path) {
                Ok(css) => css,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "failed to read stylesheet");
                    continue;
                }
            };
            if !declares_theme(&css) {
                continue;
            }
            debug!(path = %path.display(), "collecting theme tokens");
            tokens.merge(Self::parse(&css));
        }
        tokens
    }

    pub fn merge(&mut self, other: Self) {
        self.colors.extend(other.colors);
        self.fonts.extend(other.fonts);
        self.spacing.extend(other.spacing);
        self.radii.extend(other.radii);
        self.shadows.extend(other.shadows);
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.fonts.is_empty()
            && self.spacing.is_empty()
            && self.radii.is_empty()
            && self.shadows.is_empty()
    }

    pub fn utility_classes(&self) -> ThemeClasses {
        let mut names = HashSet::new();
        for color in &self.colors {
            for prefix in COLOR_UTILITIES {
                names.insert(format!("{}-{}", prefix, color));
            }
        }
        for font in &self.fonts {
            names.insert(format!("font-{}", font));
        }
        for step in &self.spacing {
            for prefix in SPACING_UTILITIES {
                names.insert(format!("{}-{}", prefix, step));
            }
            for prefix in MARGIN_UTILITIES {
                names.insert(format!("{}-{}", prefix, step));
                names.insert(format!("-{}-{}", prefix, step));
            }
        }
        for radius in &self.radii {
            for prefix in RADIUS_UTILITIES {
                names.insert(format!("{}-{}", prefix, radius));
            }
        }
        for shadow in &self.shadows {
            names.insert(format!("shadow-{}", shadow));
            names.insert(format!("drop-shadow-{}", shadow));
        }
        ThemeClasses { names }
    }

    fn insert_variable(&mut self, name: &str) {
        let Some(name) = name.strip_prefix("--") else {
            return;
        };
        let buckets: [(&str, &mut BTreeSet<String>); 5] = [
            ("color-", &mut self.colors),
            ("font-", &mut self.fonts),
            ("spacing-", &mut self.spacing),
            ("radius-", &mut self.radii),
            ("shadow-", &mut self.shadows),
        ];
        for (namespace, bucket) in buckets {
            if let Some(token) = name.strip_prefix(namespace) {
                if is_token_name(token) {
                    bucket.insert(token.to_string());
                }
                return;
            }
        }
        if SEMANTIC_COLOR_ALIASES.contains(&name) {
            self.colors.insert(name.to_string());
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeClasses {
    names: HashSet<String>,
}

impl ThemeClasses {
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

pub fn declares_theme(css: &str) -> bool {
    contains_framework_import(css) && has_theme_block(css)
}

pub fn has_theme_block(css: &str) -> bool {
    !extract_theme_blocks(css).is_empty()
}

pub fn contains_framework_import(css: &str) -> bool {
    css.lines().any(|line| {
        let Some(rest) = line.trim_start().strip_prefix("@import") else {
            return false;
        };
        import_target(rest).is_some_and(|target| {
            target == "tailwindcss" || target.starts_with("tailwindcss/")
        })
    })
}

fn import_target(rest: &str) -> Option<&str> {
    let mut rest = rest.trim_start();
    if let Some(inner) = rest.strip_prefix("url(") {
        rest = inner.trim_start();
    }
    let quote = rest.chars().next()?;
    if matches!(quote, '"' | '\'' | '`') {
        let inner = &rest[1..];
        let end = inner.find(quote)?;
        return Some(&inner[..end]);
    }
    let end = rest
        .find(|c: char| c.is_whitespace() || c == ';' || c == ')')
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

fn is_token_name(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
}

fn extract_theme_blocks(css: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut cursor = 0usize;

    while let Some(rel_start) = css[cursor..].find("@theme") {
        let theme_idx = cursor + rel_start;
        if !is_top_level_position(css, theme_idx) {
            cursor = theme_idx + "@theme".len();
            continue;
        }
        let Some(open_rel) = css[theme_idx..].find('{') else {
            break;
        };
        let open_idx = theme_idx + open_rel;
        let header = &css[theme_idx + "@theme".len()..open_idx];
        if header.contains(';') {
            cursor = theme_idx + "@theme".len();
            continue;
        }
        let Some(close_idx) = find_matching_brace(css, open_idx) else {
            break;
        };
        blocks.push(&css[open_idx + 1..close_idx]);
        cursor = close_idx + 1;
    }

    blocks
}

fn is_top_level_position(css: &str, target_idx: usize) -> bool {
    let mut depth = 0usize;
    let mut in_comment = false;
    let mut in_string: Option<char> = None;
    let mut escaped = false;
    let mut chars = css.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if idx >= target_idx {
            return depth == 0 && !in_comment && in_string.is_none();
        }

        if in_comment {
            if ch == '*' && matches!(chars.peek(), Some((_, '/'))) {
                let _ = chars.next();
                in_comment = false;
            }
            continue;
        }

        if let Some(quote) = in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == quote {
                in_string = None;
            }
            continue;
        }

        match ch {
            '/' if matches!(chars.peek(), Some((_, '*'))) => {
                let _ = chars.next();
                in_comment = true;
            }
            '"' | '\'' => in_string = Some(ch),
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    depth == 0 && !in_comment && in_string.is_none()
}

fn find_matching_brace(css: &str, open_idx: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_comment = false;
    let mut chars = css[open_idx..].char_indices().peekable();

    while let Some((rel_idx, ch)) = chars.next() {
        if in_comment {
            if ch == '*' && matches!(chars.peek(), Some((_, '/'))) {
                let _ = chars.next();
                in_comment = false;
            }
            continue;
        }

        match ch {
            '/' if matches!(chars.peek(), Some((_, '*'))) => {
                let _ = chars.next();
                in_comment = true;
            }
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(open_idx + rel_idx);
                }
            }
            _ => {}
        }
    }

    None
}

fn extract_theme_variable_declarations(body: &str) -> Vec<(&str, &str)> {
    let mut declarations = Vec::new();
    let mut depth = 0usize;
    let mut segment_start = 0usize;

    for (idx, ch) in body.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ';' if depth == 0 => {
                if let Some(declaration) = parse_declaration(&body[segment_start..idx]) {
                    declarations.push(declaration);
                }
                segment_start = idx + 1;
            }
            _ => {}
        }
    }
    if let Some(declaration) = parse_declaration(&body[segment_start..]) {
        declarations.push(declaration);
    }

    declarations
}

fn parse_declaration(segment: &str) -> Option<(&str, &str)> {
    let segment = strip_leading_comments(segment.trim());
    let (name, value) = segment.split_once(':')?;
    let name = name.trim();
    let value = value.trim();
    if !name.starts_with("--") || value.is_empty() {
        return None;
    }
    Some((name, value))
}

fn strip_leading_comments(mut segment: &str) -> &str {
    while let Some(rest) = segment.strip_prefix("/*") {
        match rest.find("*/") {
            Some(end) => segment = rest[end + 2..].trim_start(),
            None => return "",
        }
    }
    segment
}
