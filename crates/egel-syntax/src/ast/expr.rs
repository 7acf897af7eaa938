use miette::SourceSpan;

use super::common::{Literal, Path};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: SourceSpan,
}

/// Expression forms of the raw tree.
///
/// The same type is used for patterns: a pattern is an expression read in
/// binding position, so variables in it introduce names while combinators
/// still refer to existing constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Literal(Literal),
    /// A local variable (binding or use, depending on position).
    Variable(String),
    /// `_`, matches anything and binds nothing.
    Wildcard,
    /// A global: function, value or data constructor.
    Combinator(Path),
    Operator(Path),
    Application {
        head: Box<Expr>,
        args: Vec<Expr>,
    },
    Tuple(Vec<Expr>),
    List {
        items: Vec<Expr>,
        tail: Option<Box<Expr>>,
    },
    /// `[ arm | arm ... ]`
    Lambda(Vec<MatchArm>),
    /// A single arm in expression position.
    Match(Box<MatchArm>),
    /// `let p0 p1 = value in body`
    Let {
        bindings: Vec<Expr>,
        value: Box<Expr>,
        body: Box<Expr>,
    },
    /// `payload : Tag`, the payload binds and the tag refers.
    Tag {
        payload: Box<Expr>,
        tag: Box<Expr>,
    },
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Try {
        body: Box<Expr>,
        handler: Box<Expr>,
    },
    Throw(Box<Expr>),
    /// `e0; e1; ...`
    Sequence(Vec<Expr>),
}

/// `p0 p1 ... if guard -> body`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchArm {
    pub patterns: Vec<Expr>,
    pub guard: Option<Box<Expr>>,
    pub body: Box<Expr>,
    pub span: SourceSpan,
}

impl Expr {
    pub fn new(kind: ExprKind, span: SourceSpan) -> Self {
        Self { kind, span }
    }

    pub fn with_span(mut self, span: impl Into<SourceSpan>) -> Self {
        self.span = span.into();
        self
    }
}
