use crate::scanner::style_blocks;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StylesheetError {
    #[error("unterminated comment starting at byte {0}")]
    UnterminatedComment(usize),
    #[error("unterminated string starting at byte {0}")]
    UnterminatedString(usize),
    #[error("unbalanced brace at byte {0}")]
    UnbalancedBrace(usize),
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedStylesheet {
    pub classes: BTreeSet<String>,
    pub keyframes: BTreeSet<String>,
    pub skipped: Vec<StylesheetError>,
}

impl ParsedStylesheet {
    pub fn defined_names(&self) -> impl Iterator<Item = &String> {
        self.classes.iter().chain(self.keyframes.iter())
    }
}

const KEYFRAMES_RULES: &[&str] = &[
    "@keyframes",
    "@-webkit-keyframes",
    "@-moz-keyframes",
    "@-o-keyframes",
];

pub fn parse(css: &str) -> Result<ParsedStylesheet, StylesheetError> {
    let masked = mask_comments_and_strings(css)?;
    check_balance(&masked)?;
    let mut parsed = ParsedStylesheet::default();
    walk_rules(&masked, css, &mut parsed);
    Ok(parsed)
}

pub fn component_classes(source: &str) -> BTreeSet<String> {
    let mut classes = BTreeSet::new();
    for block in style_blocks(source) {
        match parse(block) {
            Ok(parsed) => classes.extend(parsed.defined_names().cloned()),
            Err(err) => {
                debug!(error = %err, "style block fallback scan");
                classes.extend(fallback_class_scan(block));
            }
        }
    }
    classes
}

fn fallback_class_scan(css: &str) -> impl Iterator<Item = String> + '_ {
    static CLASS_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    let pattern = CLASS_PATTERN
        .get_or_init(|| Regex::new(r"\.([A-Za-z_-][\w-]*)").ok())
        .as_ref();
    pattern
        .into_iter()
        .flat_map(move |pattern| pattern.captures_iter(css))
        .filter_map(|captures| captures.get(1).map(|name| name.as_str().to_string()))
}

fn mask_comments_and_strings(css: &str) -> Result<String, StylesheetError> {
    let bytes = css.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut idx = 0usize;

    while idx < bytes.len() {
        let byte = bytes[idx];
        if byte == b'\\' {
            out.push(byte);
            idx += 1;
            if let Some(&next) = bytes.get(idx) {
                if next.is_ascii() {
                    out.push(next);
                    idx += 1;
                }
            }
            continue;
        }
        if byte == b'/' && bytes.get(idx + 1) == Some(&b'*') {
            let Some(rel_end) = css[idx + 2..].find("*/") else {
                return Err(StylesheetError::UnterminatedComment(idx));
            };
            let end = idx + 2 + rel_end + 2;
            out.extend(std::iter::repeat_n(b' ', end - idx));
            idx = end;
            continue;
        }
        if byte == b'"' || byte == b'\'' {
            idx = mask_string(bytes, idx, &mut out)?;
            continue;
        }
        out.push(byte);
        idx += 1;
    }

    String::from_utf8(out).map_err(|_| StylesheetError::UnterminatedString(0))
}

fn mask_string(bytes: &[u8], start: usize, out: &mut Vec<u8>) -> Result<usize, StylesheetError> {
    let quote = bytes[start];
    out.push(quote);
    let mut idx = start + 1;
    loop {
        let Some(&current) = bytes.get(idx) else {
            return Err(StylesheetError::UnterminatedString(start));
        };
        if current == b'\\' {
            out.push(b'_');
            idx += 1;
            if let Some(&next) = bytes.get(idx) {
                if next.is_ascii() {
                    out.push(b'_');
                    idx += 1;
                }
            }
            continue;
        }
        if current == b'\n' {
            return Err(StylesheetError::UnterminatedString(start));
        }
        if current == quote {
            out.push(quote);
            return Ok(idx + 1);
        }
        out.push(if current.is_ascii() { b'_' } else { current });
        idx += 1;
    }
}

fn check_balance(masked: &str) -> Result<(), StylesheetError> {
    let mut open = Vec::new();
    for (idx, ch) in masked.char_indices() {
        match ch {
            '{' => open.push(idx),
            '}' => {
                if open.pop().is_none() {
                    return Err(StylesheetError::UnbalancedBrace(idx));
                }
            }
            _ => {}
        }
    }
    match open.pop() {
        Some(idx) => Err(StylesheetError::UnbalancedBrace(idx)),
        None => Ok(()),
    }
}

/// Walks the rules of `masked`. `original` is the unmasked source at the same
/// offsets; only quoted keyframe names are read from it.
fn walk_rules(masked: &str, original: &str, parsed: &mut ParsedStylesheet) {
    let mut cursor = 0usize;

    while cursor < masked.len() {
        let Some(open_rel) = masked[cursor..].find('{') else {
            break;
        };
        let open = cursor + open_rel;
        let Some(close) = find_matching_brace(masked, open) else {
            break;
        };

        let header_start = masked[cursor..open]
            .rfind([';', '}'])
            .map(|idx| cursor + idx + 1)
            .unwrap_or(cursor);
        let raw_header = &masked[header_start..open];
        let header = raw_header.trim();
        let header_offset = header_start + (raw_header.len() - raw_header.trim_start().len());

        if header.starts_with('@') {
            let rule = header
                .split(|c: char| c.is_whitespace() || c == '(')
                .next()
                .unwrap_or(header);
            if KEYFRAMES_RULES.contains(&rule) {
                let name = original[header_offset + rule.len()..open]
                    .trim()
                    .trim_matches(|c| c == '"' || c == '\'');
                if !name.is_empty() {
                    parsed.keyframes.insert(name.to_string());
                }
            } else {
                walk_rules(
                    &masked[open + 1..close],
                    &original[open + 1..close],
                    parsed,
                );
            }
        } else {
            collect_selector_classes(header, parsed);
            walk_rules(
                &masked[open + 1..close],
                &original[open + 1..close],
                parsed,
            );
        }

        cursor = close + 1;
    }
}

fn find_matching_brace(css: &str, open_idx: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (rel_idx, ch) in css[open_idx..].char_indices() {
        match ch {
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

fn collect_selector_classes(header: &str, parsed: &mut ParsedStylesheet) {
    for selector in split_top_level_commas(header) {
        let selector = selector.trim();
        if selector.is_empty() {
            continue;
        }
        match selector_classes(selector) {
            Ok(classes) => parsed.classes.extend(classes),
            Err(err) => parsed.skipped.push(err),
        }
    }
}

fn split_top_level_commas(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (idx, ch) in value.char_indices() {
        match ch {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&value[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);
    parts
}

fn selector_classes(selector: &str) -> Result<Vec<String>, StylesheetError> {
    let invalid = |reason: &str| StylesheetError::InvalidSelector {
        selector: selector.to_string(),
        reason: reason.to_string(),
    };
    let mut classes = Vec::new();
    let mut chars = selector.char_indices().peekable();
    let mut paren_depth = 0usize;

    while let Some((_, ch)) = chars.next() {
        match ch {
            '\\' => {
                let _ = chars.next();
            }
            '[' => {
                let mut depth = 1usize;
                for (_, inner) in chars.by_ref() {
                    match inner {
                        '[' => depth += 1,
                        ']' => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {}
                    }
                }
                if depth != 0 {
                    return Err(invalid("unclosed attribute selector"));
                }
            }
            ']' => return Err(invalid("unexpected ']'")),
            '(' => paren_depth += 1,
            ')' => {
                if paren_depth == 0 {
                    return Err(invalid("unexpected ')'"));
                }
                paren_depth -= 1;
            }
            '.' => {
                let mut name = String::new();
                let mut escaped_flags = Vec::new();
                while let Some(&(_, next)) = chars.peek() {
                    if next == '\\' {
                        let _ = chars.next();
                        let decoded =
                            read_escape(&mut chars).ok_or_else(|| invalid("dangling escape"))?;
                        name.push(decoded);
                        escaped_flags.push(true);
                        continue;
                    }
                    if !is_ident_char(next) {
                        break;
                    }
                    name.push(next);
                    escaped_flags.push(false);
                    let _ = chars.next();
                }
                if !is_ident_start(&name, &escaped_flags) {
                    return Err(invalid("class selector without a valid name"));
                }
                classes.push(name);
            }
            _ => {}
        }
    }

    if paren_depth != 0 {
        return Err(invalid("unclosed parenthesis"));
    }
    Ok(classes)
}

fn read_escape<I>(chars: &mut std::iter::Peekable<I>) -> Option<char>
where
    I: Iterator<Item = (usize, char)>,
{
    let &(_, first) = chars.peek()?;
    if !first.is_ascii_hexdigit() {
        let _ = chars.next();
        return Some(first);
    }
    let mut hex = String::new();
    while let Some(&(_, next)) = chars.peek() {
        if hex.len() == 6 || !next.is_ascii_hexdigit() {
            break;
        }
        hex.push(next);
        let _ = chars.next();
    }
    if let Some(&(_, ' ')) = chars.peek() {
        let _ = chars.next();
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .or(Some(char::REPLACEMENT_CHARACTER))
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || !ch.is_ascii()
}

fn is_ident_start(name: &str, escaped: &[bool]) -> bool {
    let mut chars = name.chars().zip(escaped.iter().copied());
    match chars.next() {
        None => false,
        Some(('-', false)) => match chars.next() {
            Some((next, was_escaped)) => was_escaped || !next.is_ascii_digit(),
            None => false,
        },
        Some((first, was_escaped)) => was_escaped || !first.is_ascii_digit(),
    }
}
