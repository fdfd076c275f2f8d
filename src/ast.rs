use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Expr {
    Literal {
        value: Value,
    },
    TemplateLiteral {
        quasis: Vec<TemplateElement>,
        expressions: Vec<Expr>,
    },
    ConditionalExpression {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    CallExpression {
        callee: Box<Expr>,
        #[serde(default)]
        arguments: Vec<Expr>,
    },
    ArrayExpression {
        elements: Vec<Option<Expr>>,
    },
    ObjectExpression {
        properties: Vec<Expr>,
    },
    Property {
        key: Box<Expr>,
        #[serde(default)]
        value: Option<Box<Expr>>,
        #[serde(default)]
        computed: bool,
    },
    MemberExpression {
        object: Box<Expr>,
        property: Box<Expr>,
        #[serde(default)]
        computed: bool,
    },
    Identifier {
        name: String,
    },
    JSXExpressionContainer {
        expression: Box<Expr>,
    },
    #[serde(other)]
    Unsupported,
}

impl Expr {
    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal {
            value: Value::String(value.into()),
        }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier { name: name.into() }
    }

    pub fn conditional(test: Expr, consequent: Expr, alternate: Expr) -> Self {
        Expr::ConditionalExpression {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
    }

    pub fn call(callee: Expr, arguments: Vec<Expr>) -> Self {
        Expr::CallExpression {
            callee: Box::new(callee),
            arguments,
        }
    }

    pub fn member(object: Expr, property: &str) -> Self {
        Expr::MemberExpression {
            object: Box::new(object),
            property: Box::new(Expr::ident(property)),
            computed: false,
        }
    }

    /// A template literal built from alternating text and expressions.
    /// `quasis` must be one longer than `expressions`.
    pub fn template(quasis: &[&str], expressions: Vec<Expr>) -> Self {
        Expr::TemplateLiteral {
            quasis: quasis
                .iter()
                .map(|raw| TemplateElement {
                    value: TemplateValue {
                        raw: (*raw).to_string(),
                        cooked: Some((*raw).to_string()),
                    },
                })
                .collect(),
            expressions,
        }
    }

    pub fn object(entries: Vec<(Expr, Expr)>) -> Self {
        Expr::ObjectExpression {
            properties: entries
                .into_iter()
                .map(|(key, value)| Expr::Property {
                    key: Box::new(key),
                    value: Some(Box::new(value)),
                    computed: false,
                })
                .collect(),
        }
    }

    pub fn array(elements: Vec<Expr>) -> Self {
        Expr::ArrayExpression {
            elements: elements.into_iter().map(Some).collect(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expr::Literal {
                value: Value::String(text),
            } => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateElement {
    pub value: TemplateValue,
}

impl TemplateElement {
    pub fn text(&self) -> &str {
        self.value.cooked.as_deref().unwrap_or(&self.value.raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateValue {
    pub raw: String,
    #[serde(default)]
    pub cooked: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum AttributeValue {
    Static { value: String },
    Bound { expression: Expr },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum SveltePart {
    Text { data: String },
    MustacheTag { expression: Expr },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SiteNode {
    JsxAttribute {
        name: String,
        #[serde(default)]
        value: Option<Expr>,
        #[serde(default)]
        span: Span,
    },
    VueAttribute {
        name: String,
        value: AttributeValue,
        #[serde(default)]
        span: Span,
    },
    SvelteAttribute {
        name: String,
        #[serde(default)]
        parts: Vec<SveltePart>,
        #[serde(default)]
        raw: Option<String>,
        #[serde(default)]
        span: Span,
    },
    ClassNameAssignment {
        value: Expr,
        #[serde(default)]
        span: Span,
    },
    ClassListCall {
        method: String,
        arguments: Vec<Expr>,
        #[serde(default)]
        span: Span,
    },
    Expression {
        expression: Expr,
        #[serde(default)]
        span: Span,
    },
}

impl SiteNode {
    pub fn span(&self) -> Span {
        match self {
            SiteNode::JsxAttribute { span, .. }
            | SiteNode::VueAttribute { span, .. }
            | SiteNode::SvelteAttribute { span, .. }
            | SiteNode::ClassNameAssignment { span, .. }
            | SiteNode::ClassListCall { span, .. }
            | SiteNode::Expression { span, .. } => *span,
        }
    }
}
