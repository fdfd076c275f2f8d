use crate::ast::{AttributeValue, Expr, SiteNode, Span, SveltePart};
use crate::scanner::{Segment, class_attribute_values, split_mustache, tokenize_class_list};

pub const CLASS_HELPERS: &[&str] = &[
    "clsx",
    "classnames",
    "classNames",
    "cn",
    "cx",
    "twMerge",
    "twJoin",
    "cva",
];

const JSX_CLASS_ATTRIBUTES: &[&str] = &["className", "class"];
const VUE_CLASS_ATTRIBUTES: &[&str] = &["class", ":class", "v-bind:class"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteKind {
    JsxAttribute,
    VueAttribute,
    SvelteAttribute,
    ClassNameAssignment,
    ClassListCall,
    Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub kind: SiteKind,
    pub span: Span,
}

impl Site {
    pub fn new(kind: SiteKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn of(node: &SiteNode) -> Self {
        let kind = match node {
            SiteNode::JsxAttribute { .. } => SiteKind::JsxAttribute,
            SiteNode::VueAttribute { .. } => SiteKind::VueAttribute,
            SiteNode::SvelteAttribute { .. } => SiteKind::SvelteAttribute,
            SiteNode::ClassNameAssignment { .. } => SiteKind::ClassNameAssignment,
            SiteNode::ClassListCall { .. } => SiteKind::ClassListCall,
            SiteNode::Expression { .. } => SiteKind::Expression,
        };
        Self::new(kind, node.span())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToken {
    pub value: String,
    pub dynamic: bool,
    pub site: Site,
}

impl ClassToken {
    pub fn literal(value: impl Into<String>, site: Site) -> Self {
        Self {
            value: value.into(),
            dynamic: false,
            site,
        }
    }

    pub fn dynamic(value: impl Into<String>, site: Site) -> Self {
        Self {
            value: value.into(),
            dynamic: true,
            site,
        }
    }
}

pub fn extract(node: &SiteNode) -> Vec<ClassToken> {
    let mut collector = Collector {
        site: Site::of(node),
        tokens: Vec::new(),
    };

    match node {
        SiteNode::JsxAttribute { name, value, .. } => {
            if JSX_CLASS_ATTRIBUTES.contains(&name.as_str()) {
                if let Some(value) = value {
                    collector.class_value(value, false);
                }
            }
        }
        SiteNode::VueAttribute { name, value, .. } => {
            if VUE_CLASS_ATTRIBUTES.contains(&name.as_str()) {
                match value {
                    AttributeValue::Static { value } => collector.literal(value),
                    AttributeValue::Bound { expression } => {
                        collector.class_value(expression, true)
                    }
                }
            }
        }
        SiteNode::SvelteAttribute {
            name, parts, raw, ..
        } => {
            if name == "class" {
                if parts.is_empty() {
                    if let Some(raw) = raw {
                        collector.raw_attribute(raw);
                    }
                } else {
                    let pieces: Vec<Piece<'_>> = parts
                        .iter()
                        .map(|part| match part {
                            SveltePart::Text { data } => Piece::Text(data),
                            SveltePart::MustacheTag { expression } => {
                                Piece::Interpolation(Some(expression))
                            }
                        })
                        .collect();
                    collector.interpolated(&pieces);
                }
            }
        }
        SiteNode::ClassNameAssignment { value, .. } => collector.class_value(value, false),
        SiteNode::ClassListCall {
            method, arguments, ..
        } => collector.class_list_call(method, arguments),
        SiteNode::Expression { expression, .. } => {
            if let Expr::CallExpression { callee, arguments } = expression {
                if let Some(helper) = helper_name(callee) {
                    collector.helper_call(helper, arguments);
                }
            }
        }
    }

    collector.tokens
}

pub fn helper_name(callee: &Expr) -> Option<&str> {
    let name = match callee {
        Expr::Identifier { name } => name.as_str(),
        Expr::MemberExpression {
            property,
            computed: false,
            ..
        } => match property.as_ref() {
            Expr::Identifier { name } => name.as_str(),
            _ => return None,
        },
        _ => return None,
    };
    CLASS_HELPERS.contains(&name).then_some(name)
}

#[derive(Debug, Clone, Copy)]
enum Piece<'a> {
    Text(&'a str),
    Interpolation(Option<&'a Expr>),
}

struct Collector {
    site: Site,
    tokens: Vec<ClassToken>,
}

impl Collector {
    fn push(&mut self, value: String, dynamic: bool) {
        self.tokens.push(ClassToken {
            value,
            dynamic,
            site: self.site,
        });
    }

    fn literal(&mut self, text: &str) {
        for token in tokenize_class_list(text) {
            self.push(token, false);
        }
    }

    fn class_value(&mut self, expr: &Expr, collections: bool) {
        match expr {
            Expr::Literal { .. } => {
                if let Some(text) = expr.as_str() {
                    self.literal(text);
                }
            }
            Expr::TemplateLiteral {
                quasis,
                expressions,
            } => {
                let mut pieces = Vec::with_capacity(quasis.len() + expressions.len());
                for (idx, quasi) in quasis.iter().enumerate() {
                    pieces.push(Piece::Text(quasi.text()));
                    if let Some(expression) = expressions.get(idx) {
                        pieces.push(Piece::Interpolation(Some(expression)));
                    }
                }
                self.interpolated(&pieces);
            }
            Expr::ConditionalExpression {
                consequent,
                alternate,
                ..
            } => {
                self.class_value(consequent, collections);
                self.class_value(alternate, collections);
            }
            Expr::CallExpression { callee, arguments } => {
                if let Some(helper) = helper_name(callee) {
                    self.helper_call(helper, arguments);
                }
            }
            Expr::JSXExpressionContainer { expression } => {
                self.class_value(expression, collections)
            }
            Expr::ArrayExpression { elements } if collections => {
                for element in elements.iter().flatten() {
                    self.class_value(element, true);
                }
            }
            Expr::ObjectExpression { properties } if collections => self.object_keys(properties),
            _ => {}
        }
    }

    fn helper_call(&mut self, helper: &str, arguments: &[Expr]) {
        if helper == "cva" {
            let mut arguments = arguments.iter();
            if let Some(base) = arguments.next() {
                self.class_value(base, true);
            }
            for config in arguments {
                self.variant_config(config);
            }
            return;
        }
        for argument in arguments {
            self.class_value(argument, true);
        }
    }

    fn object_keys(&mut self, properties: &[Expr]) {
        for property in properties {
            let Expr::Property {
                key,
                computed: false,
                ..
            } = property
            else {
                continue;
            };
            match key.as_ref() {
                Expr::Identifier { name } => self.push(name.clone(), false),
                literal @ Expr::Literal { .. } => self.class_value(literal, false),
                _ => {}
            }
        }
    }

    fn variant_config(&mut self, config: &Expr) {
        for (key, value) in properties(config) {
            match key {
                "variants" => {
                    for (_, options) in properties(value) {
                        for (_, classes) in properties(options) {
                            self.class_value(classes, true);
                        }
                    }
                }
                "compoundVariants" => {
                    let Expr::ArrayExpression { elements } = value else {
                        continue;
                    };
                    for compound in elements.iter().flatten() {
                        for (entry, classes) in properties(compound) {
                            if entry == "class" || entry == "className" {
                                self.class_value(classes, true);
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn class_list_call(&mut self, method: &str, arguments: &[Expr]) {
        let arguments = match method {
            "add" => arguments,
            "toggle" => &arguments[..arguments.len().min(1)],
            _ => return,
        };
        for argument in arguments {
            if let Some(text) = argument.as_str() {
                self.literal(text);
            }
        }
    }

    fn raw_attribute(&mut self, raw: &str) {
        for value in class_attribute_values(raw) {
            let pieces: Vec<Piece<'_>> = split_mustache(value)
                .into_iter()
                .map(|segment| match segment {
                    Segment::Text(text) => Piece::Text(text),
                    Segment::Expression(_) => Piece::Interpolation(None),
                })
                .collect();
            self.interpolated(&pieces);
        }
    }

    /// Literal text interleaved with interpolations. Text glued to an
    /// interpolation becomes a dynamic token; an interpolation standing
    /// alone between whitespace is read as a class value itself.
    fn interpolated(&mut self, pieces: &[Piece<'_>]) {
        let pieces: Vec<Piece<'_>> = pieces
            .iter()
            .copied()
            .filter(|piece| !matches!(piece, Piece::Text(text) if text.is_empty()))
            .collect();
        for (idx, piece) in pieces.iter().enumerate() {
            let glued_before = idx
                .checked_sub(1)
                .and_then(|prev| pieces.get(prev))
                .is_some_and(|prev| glues_at_end(prev));
            let glued_after = pieces
                .get(idx + 1)
                .is_some_and(|next| glues_at_start(next));

            match piece {
                Piece::Text(text) => {
                    self.text_between_interpolations(text, glued_before, glued_after)
                }
                Piece::Interpolation(Some(expression)) if !glued_before && !glued_after => {
                    self.class_value(expression, false)
                }
                Piece::Interpolation(_) => {}
            }
        }
    }

    fn text_between_interpolations(&mut self, text: &str, after_interp: bool, before_interp: bool) {
        let mut tokens = tokenize_class_list(text);
        if tokens.is_empty() {
            return;
        }
        let follows = after_interp && !text.starts_with(char::is_whitespace);
        let precedes = before_interp && !text.ends_with(char::is_whitespace);
        let last = tokens.len() - 1;
        let tail = if precedes { tokens.pop() } else { None };

        for (idx, token) in tokens.into_iter().enumerate() {
            self.push(token, follows && idx == 0);
        }
        if let Some(tail) = tail {
            if (follows && last == 0) || is_plain_fragment(&tail) {
                self.push(tail, true);
            }
        }
    }
}

fn glues_at_end(piece: &Piece<'_>) -> bool {
    match piece {
        Piece::Text(text) => !text.is_empty() && !text.ends_with(char::is_whitespace),
        Piece::Interpolation(_) => true,
    }
}

fn glues_at_start(piece: &Piece<'_>) -> bool {
    match piece {
        Piece::Text(text) => !text.is_empty() && !text.starts_with(char::is_whitespace),
        Piece::Interpolation(_) => true,
    }
}

fn is_plain_fragment(fragment: &str) -> bool {
    !fragment.is_empty()
        && fragment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn properties(expr: &Expr) -> Vec<(&str, &Expr)> {
    let Expr::ObjectExpression { properties } = expr else {
        return Vec::new();
    };
    properties
        .iter()
        .filter_map(|property| match property {
            Expr::Property {
                key,
                value: Some(value),
                computed: false,
            } => {
                let name = match key.as_ref() {
                    Expr::Identifier { name } => name.as_str(),
                    other => other.as_str()?,
                };
                Some((name, value.as_ref()))
            }
            _ => None,
        })
        .collect()
}
