use crate::scales::{BREAKPOINTS, CONTAINER_SIZES};

const PSEUDO_CLASSES: &[&str] = &[
    "hover",
    "focus",
    "focus-within",
    "focus-visible",
    "active",
    "visited",
    "target",
    "first",
    "last",
    "only",
    "odd",
    "even",
    "first-of-type",
    "last-of-type",
    "only-of-type",
    "empty",
    "disabled",
    "enabled",
    "checked",
    "indeterminate",
    "default",
    "optional",
    "required",
    "valid",
    "invalid",
    "user-valid",
    "user-invalid",
    "in-range",
    "out-of-range",
    "placeholder-shown",
    "details-content",
    "autofill",
    "read-only",
    "open",
    "inert",
];

pub const PSEUDO_ELEMENTS: &[&str] = &[
    "before",
    "after",
    "first-letter",
    "first-line",
    "marker",
    "selection",
    "file",
    "backdrop",
    "placeholder",
];

const MEDIA_VARIANTS: &[&str] = &[
    "dark",
    "light",
    "motion-safe",
    "motion-reduce",
    "contrast-more",
    "contrast-less",
    "forced-colors",
    "not-forced-colors",
    "inverted-colors",
    "pointer-fine",
    "pointer-coarse",
    "pointer-none",
    "any-pointer-fine",
    "any-pointer-coarse",
    "any-pointer-none",
    "portrait",
    "landscape",
    "noscript",
    "print",
    "screen",
    "starting",
    "rtl",
    "ltr",
    "*",
    "**",
];

const ARIA_STATES: &[&str] = &[
    "busy", "checked", "disabled", "expanded", "hidden", "pressed", "readonly", "required",
    "selected",
];

/// Byte offsets of `sep` that sit outside every `[..]` and `(..)` group.
fn top_level(text: &str, sep: char) -> impl Iterator<Item = usize> + '_ {
    text.char_indices().scan(0usize, move |nesting, (idx, ch)| {
        let hit = match ch {
            '[' | '(' => {
                *nesting += 1;
                false
            }
            ']' | ')' => {
                *nesting = nesting.saturating_sub(1);
                false
            }
            _ => ch == sep && *nesting == 0,
        };
        Some(hit.then_some(idx))
    })
    .flatten()
}

pub fn split_modifiers(class: &str) -> (Vec<&str>, &str) {
    let mut modifiers = Vec::new();
    let mut start = 0usize;
    for colon in top_level(class, ':') {
        modifiers.push(&class[start..colon]);
        start = colon + 1;
    }
    (modifiers, &class[start..])
}

pub fn split_scope(raw: &str) -> (&str, Option<&str>) {
    match top_level(raw, '/').next() {
        Some(slash) => (&raw[..slash], Some(&raw[slash + 1..])),
        None => (raw, None),
    }
}

pub fn is_valid_variant(variant: &str) -> bool {
    if variant.is_empty() {
        return false;
    }
    if is_bracketed(variant) {
        return true;
    }
    if is_simple_variant(variant) || MEDIA_VARIANTS.contains(&variant) {
        return true;
    }
    if is_responsive_variant(variant) || is_container_variant(variant) {
        return true;
    }
    if variant == "group" || variant == "peer" {
        return true;
    }
    if let Some(raw) = variant
        .strip_prefix("group-")
        .or_else(|| variant.strip_prefix("peer-"))
    {
        return is_group_or_peer_condition(raw);
    }
    if let Some(raw) = variant
        .strip_prefix("group/")
        .or_else(|| variant.strip_prefix("peer/"))
    {
        return is_scope_name(raw);
    }
    if let Some(raw) = variant.strip_prefix("not-") {
        return is_bracketed(raw)
            || is_simple_variant(raw)
            || MEDIA_VARIANTS.contains(&raw)
            || is_supports_variant(raw)
            || is_attribute_variant(raw);
    }
    if variant != "in-range" {
        if let Some(raw) = variant.strip_prefix("in-") {
            return is_bracketed(raw) || is_simple_variant(raw);
        }
    }
    if let Some(raw) = variant.strip_prefix("has-") {
        return is_bracketed(raw) || is_simple_variant(raw);
    }
    is_supports_variant(variant) || is_attribute_variant(variant)
}

fn is_simple_variant(variant: &str) -> bool {
    PSEUDO_CLASSES.contains(&variant)
        || PSEUDO_ELEMENTS.contains(&variant)
        || is_nth_variant(variant)
}

fn is_nth_variant(variant: &str) -> bool {
    let raw = variant
        .strip_prefix("nth-last-of-type-")
        .or_else(|| variant.strip_prefix("nth-of-type-"))
        .or_else(|| variant.strip_prefix("nth-last-"))
        .or_else(|| variant.strip_prefix("nth-"));
    let Some(raw) = raw else {
        return false;
    };
    is_bracketed(raw) || (!raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()))
}

fn is_responsive_variant(variant: &str) -> bool {
    if BREAKPOINTS.contains(&variant) {
        return true;
    }
    if let Some(key) = variant.strip_prefix("max-") {
        return BREAKPOINTS.contains(&key) || is_bracketed(key);
    }
    if let Some(key) = variant.strip_prefix("min-") {
        return is_bracketed(key);
    }
    false
}

fn is_container_variant(variant: &str) -> bool {
    let Some(rest) = variant.strip_prefix('@') else {
        return false;
    };
    let (query, name) = split_scope(rest);
    if name.is_some_and(|name| !is_scope_name(name)) {
        return false;
    }
    let query = query
        .strip_prefix("max-")
        .or_else(|| query.strip_prefix("min-"))
        .unwrap_or(query);
    query == "container" || CONTAINER_SIZES.contains(&query) || is_bracketed(query)
}

fn is_supports_variant(variant: &str) -> bool {
    variant
        .strip_prefix("supports-")
        .is_some_and(|raw| !raw.is_empty())
}

fn is_attribute_variant(variant: &str) -> bool {
    if let Some(raw) = variant.strip_prefix("data-") {
        return !raw.is_empty();
    }
    if let Some(raw) = variant.strip_prefix("aria-") {
        return is_bracketed(raw) || ARIA_STATES.contains(&raw);
    }
    false
}

fn is_group_or_peer_condition(raw: &str) -> bool {
    let (core, name) = split_scope(raw);
    if name.is_some_and(|name| !is_scope_name(name)) {
        return false;
    }
    if is_bracketed(core) || is_simple_variant(core) || is_attribute_variant(core) {
        return true;
    }
    if let Some(has_raw) = core.strip_prefix("has-") {
        return is_bracketed(has_raw) || is_simple_variant(has_raw);
    }
    false
}

fn is_scope_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn is_bracketed(raw: &str) -> bool {
    raw.len() > 2 && raw.starts_with('[') && raw.ends_with(']')
}

#[cfg(test)]
mod tests {
    use super::{is_valid_variant, split_modifiers, split_scope};

    #[test]
    fn splits_variants_outside_brackets() {
        let (variants, base) = split_modifiers("md:hover:[&>*]:bg-[url(a:b)]");
        assert_eq!(variants, vec!["md", "hover", "[&>*]"]);
        assert_eq!(base, "bg-[url(a:b)]");
    }

    #[test]
    fn plain_class_has_no_variants() {
        let (variants, base) = split_modifiers("p-4");
        assert!(variants.is_empty());
        assert_eq!(base, "p-4");
    }

    #[test]
    fn named_scope_split_ignores_bracketed_slash() {
        assert_eq!(split_scope("hover/card"), ("hover", Some("card")));
        assert_eq!(split_scope("[a/b]"), ("[a/b]", None));
        assert_eq!(split_scope("bg-[url(a/b)]/50"), ("bg-[url(a/b)]", Some("50")));
        assert_eq!(split_modifiers("[&:hover]:w-(--w)").0, vec!["[&:hover]"]);
    }

    #[test]
    fn accepts_framework_modifiers() {
        for variant in [
            "sm",
            "2xl",
            "max-md",
            "min-[900px]",
            "hover",
            "focus-visible",
            "dark",
            "motion-reduce",
            "before",
            "file",
            "group-hover",
            "group-hover/card",
            "peer-checked",
            "group-has-[:checked]",
            "group-data-[state=open]",
            "has-[img]",
            "aria-expanded",
            "aria-[sort=ascending]",
            "data-[state=open]",
            "supports-[display:grid]",
            "@container",
            "@lg",
            "@md/sidebar",
            "@[400px]",
            "nth-3",
            "not-first",
            "in-focus",
            "[&_p]",
            "*",
        ] {
            assert!(is_valid_variant(variant), "{} should be valid", variant);
        }
    }

    #[test]
    fn rejects_unknown_modifiers() {
        for variant in [
            "",
            "hovr",
            "xxl",
            "group-wiggle",
            "aria-whatever",
            "@huge",
            "nth-",
            "not-wobbly",
            "[]",
        ] {
            assert!(!is_valid_variant(variant), "{} should be invalid", variant);
        }
    }
}
