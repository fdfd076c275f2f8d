use crate::lru::LruCache;
use crate::scales::{is_color_name, is_fraction, is_shaded_color, is_spacing_value};
use crate::theme::ThemeClasses;
use crate::utilities::{accepts_arbitrary_value, accepts_negative_value, scale_table};
use crate::variants::{PSEUDO_ELEMENTS, is_valid_variant, split_modifiers, split_scope};

const DYNAMIC_VALUE_PREFIXES: &[&str] = &[
    "text", "bg", "border", "ring", "from", "via", "to", "fill", "stroke", "outline",
    "decoration", "divide", "placeholder", "caret", "accent", "shadow", "drop-shadow", "content",
    "animate", "will-change", "basis", "grow", "shrink", "order",
];

const CSS_FUNCTION_PREFIXES: &[&str] = &[
    "rgb(", "rgba(", "hsl(", "hsla(", "hwb(", "oklch(", "oklab(", "lab(", "lch(", "color(",
    "var(", "calc(", "min(", "max(", "clamp(", "url(", "linear-gradient(", "radial-gradient(",
    "conic-gradient(",
];

const TYPED_ARBITRARY_HINTS: &[&str] = &[
    "color:", "length:", "image:", "position:", "size:", "url:", "number:", "percentage:",
];

pub fn is_utility_class(token: &str) -> bool {
    let Some(base) = strip_modifiers(token) else {
        return false;
    };
    if is_standalone_special(base) {
        return true;
    }
    if decompose(base).is_some() {
        return true;
    }
    let Some((head, opacity)) = split_opacity(base) else {
        return false;
    };
    if !is_opacity_value(opacity) {
        return false;
    }
    matches!(
        decompose(head),
        Some(Decomposition::Split { prefix, suffix })
            if takes_opacity(prefix, suffix)
    )
}

pub fn is_dynamic_utility_class(token: &str) -> bool {
    if token.contains("${") || token.contains("{{") {
        return true;
    }
    let Some(base) = strip_modifiers(token) else {
        return false;
    };
    if is_arbitrary_property(base) {
        return true;
    }
    let base = base.strip_prefix('-').unwrap_or(base);
    let base = split_opacity(base).map(|(head, _)| head).unwrap_or(base);
    let Some(open) = base.find("-[") else {
        return false;
    };
    let prefix = &base[..open];
    let Some(inner) = base[open + 1..]
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return false;
    };
    if inner.is_empty() {
        return false;
    }
    (DYNAMIC_VALUE_PREFIXES.contains(&prefix) || accepts_arbitrary_value(prefix))
        && is_raw_css_value(inner)
}

pub fn matches_theme(token: &str, theme: &ThemeClasses) -> bool {
    if theme.is_empty() {
        return false;
    }
    let Some(base) = strip_modifiers(token) else {
        return false;
    };
    if theme.contains(base) {
        return true;
    }
    match split_opacity(base) {
        Some((head, opacity)) => is_opacity_value(opacity) && theme.contains(head),
        None => false,
    }
}

#[derive(Debug, Clone)]
pub struct Classifier {
    cache: LruCache<String, bool>,
}

impl Classifier {
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(capacity),
        }
    }

    pub fn is_framework_class(&mut self, token: &str) -> bool {
        if let Some(verdict) = self.cache.get(token) {
            return *verdict;
        }
        let verdict = is_utility_class(token) || is_dynamic_utility_class(token);
        self.cache.put(token.to_string(), verdict);
        verdict
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(crate::lru::DEFAULT_CAPACITY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decomposition<'a> {
    Exact,
    Split { prefix: &'a str, suffix: &'a str },
}

fn strip_modifiers(token: &str) -> Option<&str> {
    let token = strip_important(token);
    let (variants, base) = split_modifiers(token);
    if !variants.iter().all(|variant| is_valid_variant(variant)) {
        return None;
    }
    let base = strip_important(base);
    if base.is_empty() {
        return None;
    }
    Some(base)
}

fn strip_important(class: &str) -> &str {
    let mut class = class;
    while let Some(rest) = class.strip_prefix('!') {
        class = rest;
    }
    if class.len() > 1 {
        if let Some(stripped) = class.strip_suffix('!') {
            return stripped;
        }
    }
    class
}

fn is_standalone_special(base: &str) -> bool {
    if PSEUDO_ELEMENTS.contains(&base) || is_arbitrary_property(base) {
        return true;
    }
    let (core, name) = split_scope(base);
    core == "@container"
        && name.is_none_or(|name| {
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
}

fn is_arbitrary_property(base: &str) -> bool {
    let Some(inner) = base
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return false;
    };
    let Some((property, value)) = inner.split_once(':') else {
        return false;
    };
    !property.is_empty()
        && !value.is_empty()
        && property
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Tries an exact table hit, then every dash position from left to right,
/// returning the first split the scale tables accept.
fn decompose(base: &str) -> Option<Decomposition<'_>> {
    let negative = base.starts_with('-');
    let positive = if negative { &base[1..] } else { base };
    if positive.is_empty() {
        return None;
    }

    if !negative && scale_table().is_complete(positive) {
        return Some(Decomposition::Exact);
    }

    for (idx, _) in positive.match_indices('-') {
        let prefix = &positive[..idx];
        let suffix = &positive[idx + 1..];
        if prefix.is_empty() || suffix.is_empty() {
            continue;
        }
        if negative && !accepts_negative_value(prefix) {
            continue;
        }
        if accepts_pair(prefix, suffix) {
            return Some(Decomposition::Split { prefix, suffix });
        }
    }
    None
}

fn accepts_pair(prefix: &str, suffix: &str) -> bool {
    if is_arbitrary_value(suffix) {
        return accepts_arbitrary_value(prefix);
    }
    let Some(scale) = scale_table().suffixes(prefix) else {
        return false;
    };
    if scale.contains(suffix) {
        return true;
    }
    if scale.colors && (is_shaded_color(suffix) || is_color_name(suffix)) {
        return true;
    }
    if !scale.narrow && is_spacing_value(suffix) {
        return true;
    }
    if suffix.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(value) = suffix.parse::<u32>() {
            if scale.accepts_integer(value) {
                return true;
            }
        }
    }
    is_fraction(suffix)
}

fn is_arbitrary_value(suffix: &str) -> bool {
    let bracketed = suffix.len() > 2 && suffix.starts_with('[') && suffix.ends_with(']');
    let shorthand = suffix.len() > 4 && suffix.starts_with("(--") && suffix.ends_with(')');
    bracketed || shorthand
}

fn takes_opacity(prefix: &str, suffix: &str) -> bool {
    if is_arbitrary_value(suffix) {
        return true;
    }
    scale_table()
        .suffixes(prefix)
        .is_some_and(|scale| scale.colors)
}

fn split_opacity(base: &str) -> Option<(&str, &str)> {
    let (head, modifier) = split_scope(base);
    let modifier = modifier?;
    if head.is_empty() {
        return None;
    }
    Some((head, modifier))
}

fn is_opacity_value(raw: &str) -> bool {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return is_arbitrary_value(raw);
    }
    raw.parse::<u32>().is_ok_and(|value| value <= 100)
}

fn is_raw_css_value(inner: &str) -> bool {
    if inner.starts_with('#') {
        let hex = &inner[1..];
        return (3..=8).contains(&hex.len()) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if CSS_FUNCTION_PREFIXES
        .iter()
        .any(|function| inner.starts_with(function))
    {
        return true;
    }
    if TYPED_ARBITRARY_HINTS.iter().any(|hint| inner.starts_with(hint)) {
        return true;
    }
    is_length(inner)
}

fn is_length(value: &str) -> bool {
    let digits_end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(value.len());
    if digits_end == 0 {
        return false;
    }
    let unit = &value[digits_end..];
    matches!(
        unit,
        "" | "px"
            | "em"
            | "rem"
            | "vh"
            | "vw"
            | "svh"
            | "dvh"
            | "lvh"
            | "ch"
            | "ex"
            | "%"
            | "cm"
            | "mm"
            | "in"
            | "pc"
            | "pt"
            | "fr"
            | "deg"
            | "ms"
            | "s"
    )
}
