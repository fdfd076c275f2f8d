mod common;

use classlint::{
    ConfigError, DefinedClassSet, Expr, IgnoreConfig, Preset, RawOptions, SiteNode, Span,
    UndefinedClasses, Verdict, is_utility_class,
};
use common::{Project, init_tracing, literal_tokens, site};
use std::sync::Arc;

fn template_node(quasis: &[&str], expressions: Vec<Expr>) -> SiteNode {
    SiteNode::JsxAttribute {
        name: "className".to_string(),
        value: Some(Expr::JSXExpressionContainer {
            expression: Box::new(Expr::template(quasis, expressions)),
        }),
        span: Span::new(10, 40),
    }
}

#[test]
fn classes_nested_in_at_rules_are_defined() {
    init_tracing();
    let project = Project::new().with_file(
        "styles/app.css",
        r#"
        .top {}
        @media (min-width: 640px) { .wide {} }
        @supports (display: grid) { @media print { .print-grid {} } }
        @keyframes pulse-soft { from { opacity: 0.5; } }
        "#,
    );
    let mut analyzer = project.analyzer(RawOptions::default());
    let known = analyzer.build_known_classes();
    for name in ["top", "wide", "print-grid", "pulse-soft"] {
        assert!(known.contains(name), "{} should be defined", name);
    }
}

#[test]
fn known_class_set_is_built_once_per_run() {
    let project = Project::new().with_file("a.css", ".a {}");
    let mut analyzer = project.analyzer(RawOptions::default());
    let first = analyzer.build_known_classes();
    let second = analyzer.build_known_classes();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn reports_only_the_missing_button_variant() {
    let project = Project::new().with_file("buttons.css", ".btn{} .btn-primary{}");
    let mut analyzer = project.analyzer(RawOptions::default());
    let diagnostic = analyzer
        .check_site(&site(), &literal_tokens("btn btn-primary btn-danger"))
        .expect("btn-danger should be reported");
    assert_eq!(
        diagnostic.classes,
        UndefinedClasses::Single("btn-danger".to_string())
    );
    assert_eq!(
        diagnostic.message(),
        "CSS class 'btn-danger' is not defined in any CSS file"
    );
}

#[test]
fn repeated_undefined_class_is_listed_each_time() {
    let project = Project::new().with_file("a.css", ".card {}");
    let mut analyzer = project.analyzer(RawOptions::default());
    let diagnostic = analyzer
        .check_site(&site(), &literal_tokens("ghost card ghost"))
        .expect("ghost should be reported");
    assert_eq!(
        diagnostic.classes,
        UndefinedClasses::Multiple(vec!["ghost".to_string(), "ghost".to_string()])
    );
    assert_eq!(
        diagnostic.message(),
        "CSS classes ghost, ghost are not defined in any CSS file"
    );
}

#[test]
fn utilities_need_a_marker_when_one_is_required() {
    let project = Project::new().with_file("plain.css", ".card {}");
    let options = RawOptions {
        require_tailwind_config: true,
        ..RawOptions::default()
    };
    let mut analyzer = project.analyzer(options.clone());
    let diagnostic = analyzer
        .check_site(&site(), &literal_tokens("card flex"))
        .expect("flex should be reported without a marker");
    assert_eq!(diagnostic.class_names(), vec!["flex"]);

    project.write("tailwind.config.js", "module.exports = {}");
    let mut analyzer = project.analyzer(options);
    assert!(
        analyzer
            .check_site(&site(), &literal_tokens("card flex"))
            .is_none()
    );
}

#[test]
fn relaxed_policy_exempts_utilities_without_a_marker() {
    let project = Project::new().with_file("plain.css", ".card {}");
    let mut analyzer = project.analyzer(RawOptions::default());
    assert!(
        analyzer
            .check_site(&site(), &literal_tokens("card flex md:hover:bg-blue-500/50 -mt-4"))
            .is_none()
    );
}

#[test]
fn partial_template_class_follows_dynamic_policy() {
    let project = Project::new().with_file("a.css", ".card {}");
    let node = template_node(&["theme-", ""], vec![Expr::ident("variant")]);

    let mut analyzer = project.analyzer(RawOptions::default());
    assert!(analyzer.check_node(&node).is_none());

    let strict = RawOptions {
        allow_dynamic_classes: false,
        ..RawOptions::default()
    };
    let mut analyzer = project.analyzer(strict);
    let diagnostic = analyzer
        .check_node(&node)
        .expect("literal prefix should be checked");
    assert_eq!(diagnostic.class_names(), vec!["theme-"]);
    assert_eq!(diagnostic.site.span, Span::new(10, 40));
}

#[test]
fn ignore_patterns_exempt_matching_classes() {
    let project = Project::new().with_file("a.css", ".card {}");
    let options = RawOptions {
        ignore_patterns: vec!["^legacy-".to_string()],
        ..RawOptions::default()
    };
    let mut analyzer = project.analyzer(options);
    let diagnostic = analyzer
        .check_site(&site(), &literal_tokens("legacy-widget unknown-widget"))
        .expect("unknown-widget should be reported");
    assert_eq!(diagnostic.class_names(), vec!["unknown-widget"]);
}

#[test]
fn unknown_prefix_with_arbitrary_value_is_not_a_utility() {
    assert!(!is_utility_class("foo-[10px]"));
    let project = Project::new().with_file("a.css", ".card {}");
    let mut analyzer = project.analyzer(RawOptions::default());
    let diagnostic = analyzer
        .check_site(&site(), &literal_tokens("w-[10px] foo-[10px]"))
        .expect("foo-[10px] should be reported");
    assert_eq!(diagnostic.class_names(), vec!["foo-[10px]"]);
}

#[test]
fn theme_tokens_generate_known_utilities() {
    let project = Project::new().with_file(
        "theme.css",
        "@import \"tailwindcss\";\n@theme {\n  --color-ink: oklch(0.2 0 0);\n  --font-display: \"Inter\";\n  --radius-card: 12px;\n}\n",
    );
    let mut analyzer = project.analyzer(RawOptions::default());
    assert!(
        analyzer
            .check_site(
                &site(),
                &literal_tokens("bg-ink text-ink border-ink bg-ink/50 font-display rounded-t-card")
            )
            .is_none()
    );
    let diagnostic = analyzer
        .check_site(&site(), &literal_tokens("bg-paper text-paper"))
        .expect("undeclared tokens should be reported");
    assert_eq!(
        diagnostic.message(),
        "CSS classes bg-paper, text-paper are not defined in any CSS file"
    );
}

#[test]
fn checks_nodes_handed_over_as_json() {
    let project = Project::new().with_file("a.css", ".nav {} .nav-item {}");
    let mut analyzer = project.analyzer(RawOptions::default());
    let node: SiteNode = serde_json::from_str(
        r#"{
            "kind": "jsx_attribute",
            "name": "className",
            "value": {
                "type": "JSXExpressionContainer",
                "expression": {
                    "type": "CallExpression",
                    "callee": { "type": "Identifier", "name": "clsx" },
                    "arguments": [
                        { "type": "Literal", "value": "nav" },
                        { "type": "ObjectExpression", "properties": [
                            { "type": "Property", "key": { "type": "Identifier", "name": "nav-item" },
                              "value": { "type": "Identifier", "name": "on" } },
                            { "type": "Property", "key": { "type": "Literal", "value": "nav-ghost" },
                              "value": { "type": "Identifier", "name": "off" } }
                        ] },
                        { "type": "LogicalExpression", "operator": "&&",
                          "left": { "type": "Identifier", "name": "x" },
                          "right": { "type": "Literal", "value": "never-seen" } }
                    ]
                }
            },
            "span": { "start": 5, "end": 50 }
        }"#,
    )
    .expect("node should deserialize");
    let diagnostic = analyzer.check_node(&node).expect("nav-ghost should be reported");
    assert_eq!(diagnostic.class_names(), vec!["nav-ghost"]);
}

#[test]
fn component_style_blocks_count_for_their_component() {
    let project = Project::new().with_file("a.css", ".global {}");
    let mut analyzer = project.analyzer(RawOptions::default());
    let component = r#"
        <div class="global local"></div>
        <style>.local { color: red; }</style>
    "#;
    let local = DefinedClassSet::from_component_source(component);
    let node = SiteNode::SvelteAttribute {
        name: "class".to_string(),
        parts: Vec::new(),
        raw: Some(component.to_string()),
        span: Span::default(),
    };
    assert!(analyzer.check_component_node(&node, &local).is_none());
    assert!(analyzer.check_node(&node).is_some());
}

#[test]
fn base_dir_limits_discovery_and_must_stay_in_root() {
    let project = Project::new()
        .with_file("src/styles/app.css", ".inside {}")
        .with_file("vendor/lib.css", ".outside {}");
    let options = RawOptions {
        base_dir: Some("src".to_string()),
        ..RawOptions::default()
    };
    let mut analyzer = project.analyzer(options);
    let known = analyzer.build_known_classes();
    assert!(known.contains("inside"));
    assert!(!known.contains("outside"));

    let escaping = RawOptions {
        base_dir: Some("../elsewhere".to_string()),
        ..RawOptions::default()
    };
    let err = IgnoreConfig::from_options(escaping, project.root())
        .expect_err("escaping base dir should fail");
    assert!(matches!(err, ConfigError::OutsideProject { .. }));
}

#[test]
fn strict_preset_requires_marker_and_checks_dynamic_fragments() {
    let project = Project::new()
        .with_file("app.css", "@import 'tailwindcss';\n.card {}")
        .with_file("package.json", r#"{ "name": "demo" }"#);
    let mut analyzer = project.analyzer(Preset::Strict.options());
    assert_eq!(
        analyzer.verdict(&classlint::ClassToken::literal("flex", site())),
        Verdict::Utility
    );
    assert_eq!(
        analyzer.verdict(&classlint::ClassToken::dynamic("card", site())),
        Verdict::Defined
    );
}

#[test]
fn node_modules_stylesheets_are_excluded_by_default() {
    let project = Project::new()
        .with_file("app.css", ".mine {}")
        .with_file("node_modules/ui/dist.css", ".theirs {}");
    let mut analyzer = project.analyzer(RawOptions::default());
    let diagnostic = analyzer
        .check_site(&site(), &literal_tokens("mine theirs"))
        .expect("vendored class should be unknown");
    assert_eq!(diagnostic.class_names(), vec!["theirs"]);
}
