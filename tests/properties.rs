use classlint::scales::{COLOR_FAMILIES, SHADES};
use classlint::{Classifier, ThemeTokens, is_utility_class, matches_theme};
use proptest::prelude::*;
use proptest::sample::select;

fn class_like() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,6}(-[a-z0-9]{1,4}){0,3}",
        "(sm|md|hover|dark|group-hover):[a-z]{1,5}-[0-9]{1,3}",
        "-?[a-z]{1,4}-\\[[0-9]{1,3}(px|rem|%)\\]",
        "![a-z]{2,5}-[a-z0-9/]{1,6}",
    ]
}

proptest! {
    #[test]
    fn classification_is_deterministic(class in class_like()) {
        let mut classifier = Classifier::new(8);
        let first = classifier.is_framework_class(&class);
        let second = classifier.is_framework_class(&class);
        prop_assert_eq!(first, second);
        let mut fresh = Classifier::new(8);
        prop_assert_eq!(fresh.is_framework_class(&class), first);
    }

    #[test]
    fn palette_colors_accept_any_opacity(
        prefix in select(vec!["bg", "text", "border"]),
        family in select(COLOR_FAMILIES.to_vec()),
        shade in select(SHADES.to_vec()),
        opacity in 0u8..=100,
    ) {
        let base = format!("{}-{}-{}", prefix, family, shade);
        let with_opacity = format!("{}/{}", base, opacity);
        prop_assert!(is_utility_class(&base));
        prop_assert_eq!(is_utility_class(&with_opacity), is_utility_class(&base));
    }

    #[test]
    fn declared_colors_become_theme_utilities(token in "[a-z]{3,8}") {
        let name = format!("zz{}", token);
        let css = format!("@theme {{ --color-{}: #336699; }}", name);
        let classes = ThemeTokens::parse(&css).utility_classes();
        for prefix in ["bg", "text", "border"] {
            let class = format!("{}-{}", prefix, name);
            prop_assert!(matches_theme(&class, &classes), "{}", class);
        }
        let faded = format!("bg-{}/50", name);
        let hovered = format!("hover:text-{}", name);
        prop_assert!(matches_theme(&faded, &classes));
        prop_assert!(matches_theme(&hovered, &classes));
        let undeclared = format!("bg-{}x", name);
        prop_assert!(!matches_theme(&undeclared, &classes));
    }
}
