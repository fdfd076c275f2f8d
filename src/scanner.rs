#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Expression(&'a str),
}

pub fn style_blocks(source: &str) -> Vec<&str> {
    const OPEN: &str = "<style";
    const CLOSE: &str = "</style>";
    let lower = source.to_ascii_lowercase();
    let mut blocks = Vec::new();
    let mut cursor = 0usize;

    while let Some(rel_start) = lower[cursor..].find(OPEN) {
        let tag_start = cursor + rel_start;
        let after_name = tag_start + OPEN.len();
        let boundary = lower[after_name..].chars().next();
        if !boundary.is_some_and(|c| c.is_whitespace() || c == '>' || c == '/') {
            cursor = after_name;
            continue;
        }
        let Some(rel_gt) = lower[after_name..].find('>') else {
            break;
        };
        let body_start = after_name + rel_gt + 1;
        let Some(rel_close) = lower[body_start..].find(CLOSE) else {
            break;
        };
        let body_end = body_start + rel_close;
        blocks.push(&source[body_start..body_end]);
        cursor = body_end + CLOSE.len();
    }

    blocks
}

pub fn class_attribute_values(text: &str) -> Vec<&str> {
    const ATTR: &str = "class";
    let mut out = Vec::new();

    for (idx, _) in text.match_indices(ATTR) {
        if !is_attr_boundary(text, idx, ATTR.len()) {
            continue;
        }
        let mut pos = skip_whitespace(text, idx + ATTR.len());
        if !text[pos..].starts_with('=') {
            continue;
        }
        pos = skip_whitespace(text, pos + 1);
        let Some((quote, size)) = next_char(text, pos) else {
            continue;
        };
        if quote != '"' && quote != '\'' {
            continue;
        }
        if let Some(value) = parse_quoted_value(text, pos + size, quote) {
            out.push(value);
        }
    }

    out
}

pub fn split_mustache(value: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut text_start = 0usize;
    let mut idx = 0usize;

    while idx < value.len() {
        let Some((ch, size)) = next_char(value, idx) else {
            break;
        };
        if ch != '{' {
            idx += size;
            continue;
        }
        let Some(close) = find_closing_brace(value, idx) else {
            break;
        };
        if text_start < idx {
            segments.push(Segment::Text(&value[text_start..idx]));
        }
        segments.push(Segment::Expression(&value[idx + 1..close]));
        idx = close + 1;
        text_start = idx;
    }

    if text_start < value.len() {
        segments.push(Segment::Text(&value[text_start..]));
    }
    segments
}

/// Whitespace-splits a class list, keeping bracketed and parenthesized runs
/// such as `grid-cols-[1fr_auto]` or `bg-(--brand)` in one token. A group
/// left open at the end is split on plain whitespace instead.
pub fn tokenize_class_list(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut bracket_depth: usize = 0;
    let mut paren_depth: usize = 0;
    let mut idx = 0;

    while idx < input.len() {
        let Some((ch, size)) = next_char(input, idx) else {
            break;
        };
        if ch == '\\' {
            let next_idx = idx + size;
            if let Some((next, next_size)) = next_char(input, next_idx) {
                current.push('\\');
                current.push(next);
                idx = next_idx + next_size;
                continue;
            }
        }

        match ch {
            '[' => bracket_depth += 1,
            ']' => bracket_depth = bracket_depth.saturating_sub(1),
            '(' => paren_depth += 1,
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ => {}
        }

        if ch.is_whitespace() && bracket_depth == 0 && paren_depth == 0 {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            idx += size;
            continue;
        }

        current.push(ch);
        idx += size;
    }

    if bracket_depth > 0 || paren_depth > 0 {
        tokens.extend(current.split_whitespace().map(str::to_string));
    } else if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

fn find_closing_brace(text: &str, open_idx: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (rel_idx, ch) in text[open_idx..].char_indices() {
        if let Some(active) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == active {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' | '`' => quote = Some(ch),
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

fn parse_quoted_value(text: &str, start: usize, quote: char) -> Option<&str> {
    let mut idx = start;
    while idx < text.len() {
        let (ch, size) = next_char(text, idx)?;
        if ch == '\\' {
            idx += size;
            if let Some((_, next_size)) = next_char(text, idx) {
                idx += next_size;
            }
            continue;
        }
        if ch == '{' {
            idx = find_closing_brace(text, idx)? + 1;
            continue;
        }
        if ch == quote {
            return Some(&text[start..idx]);
        }
        idx += size;
    }
    None
}

fn is_attr_boundary(text: &str, idx: usize, len: usize) -> bool {
    let prev = text[..idx].chars().next_back();
    let next = text[idx + len..].chars().next();

    let prev_ok = prev.is_none_or(is_boundary_char);
    let next_ok = next.is_none_or(|c| c.is_whitespace() || c == '=');

    prev_ok && next_ok
}

fn is_boundary_char(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == ':' || c == '.')
}

fn skip_whitespace(text: &str, mut idx: usize) -> usize {
    while let Some((ch, size)) = next_char(text, idx) {
        if !ch.is_whitespace() {
            break;
        }
        idx += size;
    }
    idx
}

fn next_char(text: &str, idx: usize) -> Option<(char, usize)> {
    text.get(idx..)?.chars().next().map(|ch| (ch, ch.len_utf8()))
}
