//! Shorthand constructors for raw trees.
//!
//! Used by drivers that build trees programmatically and heavily by the
//! test suites. Every node gets an empty span at offset 0; use
//! `with_span` on the result to place it.

use miette::SourceSpan;

use crate::ast::{
    DataDecl, Decl, Definition, Expr, ExprKind, Field, Literal, MatchArm, Name, NamespaceDecl,
    ObjectDecl, Path, Program, UsingDecl,
};
use crate::error::SyntaxError;

fn no_span() -> SourceSpan {
    SourceSpan::from((0, 0))
}

fn expr(kind: ExprKind) -> Expr {
    Expr::new(kind, no_span())
}

fn path_of(segments: &[&str], name: &str) -> Path {
    Path::new(segments.iter().map(|s| s.to_string()).collect(), name)
}

pub fn int(value: i64) -> Expr {
    expr(ExprKind::Literal(Literal::Int(value)))
}

pub fn text(value: &str) -> Expr {
    expr(ExprKind::Literal(Literal::Text(value.to_string())))
}

pub fn var(name: &str) -> Expr {
    expr(ExprKind::Variable(name.to_string()))
}

pub fn wildcard() -> Expr {
    expr(ExprKind::Wildcard)
}

pub fn comb(name: &str) -> Expr {
    expr(ExprKind::Combinator(Path::simple(name)))
}

/// `segments::name` as a combinator reference.
pub fn qcomb(segments: &[&str], name: &str) -> Expr {
    expr(ExprKind::Combinator(path_of(segments, name)))
}

pub fn op(name: &str) -> Expr {
    expr(ExprKind::Operator(Path::simple(name)))
}

/// `segments::name` as an operator reference.
pub fn qop(segments: &[&str], name: &str) -> Expr {
    expr(ExprKind::Operator(path_of(segments, name)))
}

pub fn app(head: Expr, args: Vec<Expr>) -> Expr {
    expr(ExprKind::Application { head: Box::new(head), args })
}

/// `lhs op rhs`, written as the application of the operator.
pub fn binop(name: &str, lhs: Expr, rhs: Expr) -> Expr {
    app(op(name), vec![lhs, rhs])
}

pub fn tuple(items: Vec<Expr>) -> Expr {
    expr(ExprKind::Tuple(items))
}

pub fn list(items: Vec<Expr>, tail: Option<Expr>) -> Expr {
    expr(ExprKind::List { items, tail: tail.map(Box::new) })
}

pub fn arm(patterns: Vec<Expr>, guard: Option<Expr>, body: Expr) -> MatchArm {
    MatchArm {
        patterns,
        guard: guard.map(Box::new),
        body: Box::new(body),
        span: no_span(),
    }
}

/// A single arm in expression position.
pub fn matches(patterns: Vec<Expr>, guard: Option<Expr>, body: Expr) -> Expr {
    expr(ExprKind::Match(Box::new(arm(patterns, guard, body))))
}

pub fn lambda(arms: Vec<MatchArm>) -> Expr {
    expr(ExprKind::Lambda(arms))
}

pub fn let_in(bindings: Vec<Expr>, value: Expr, body: Expr) -> Expr {
    expr(ExprKind::Let {
        bindings,
        value: Box::new(value),
        body: Box::new(body),
    })
}

pub fn tag(payload: Expr, tag: Expr) -> Expr {
    expr(ExprKind::Tag { payload: Box::new(payload), tag: Box::new(tag) })
}

pub fn if_then_else(cond: Expr, then_branch: Expr, else_branch: Expr) -> Expr {
    expr(ExprKind::If {
        cond: Box::new(cond),
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    })
}

pub fn try_catch(body: Expr, handler: Expr) -> Expr {
    expr(ExprKind::Try { body: Box::new(body), handler: Box::new(handler) })
}

pub fn throw(e: Expr) -> Expr {
    expr(ExprKind::Throw(Box::new(e)))
}

pub fn seq(items: Vec<Expr>) -> Expr {
    expr(ExprKind::Sequence(items))
}

pub fn name(text: &str) -> Name {
    Name::new(Path::simple(text), no_span())
}

pub fn data(names: &[&str]) -> Decl {
    Decl::Data(data_decl(names.iter().map(|n| name(n)).collect()))
}

pub fn data_decl(names: Vec<Name>) -> DataDecl {
    DataDecl { names, span: no_span() }
}

pub fn definition(name: Name, body: Expr) -> Definition {
    Definition { name, body, span: no_span() }
}

pub fn def(n: &str, body: Expr) -> Decl {
    Decl::Definition(definition(name(n), body))
}

pub fn val(n: &str, body: Expr) -> Decl {
    Decl::Value(definition(name(n), body))
}

pub fn operator(n: &str, body: Expr) -> Decl {
    Decl::Operator(definition(name(n), body))
}

pub fn field_data(names: &[&str]) -> Field {
    Field::Data(data_decl(names.iter().map(|n| name(n)).collect()))
}

pub fn field_def(n: &str, body: Expr) -> Field {
    Field::Definition(definition(name(n), body))
}

pub fn field_val(n: &str, body: Expr) -> Field {
    Field::Value(definition(name(n), body))
}

pub fn object(tag: &str, params: Vec<Expr>, fields: Vec<Field>, embedded: Vec<Expr>) -> Decl {
    Decl::Object(ObjectDecl {
        tag: name(tag),
        params,
        fields,
        embedded,
        span: no_span(),
    })
}

pub fn namespace(path: &[&str], decls: Vec<Decl>) -> Result<Decl, SyntaxError> {
    let path = path.iter().map(|s| s.to_string()).collect();
    NamespaceDecl::new(path, decls, no_span()).map(Decl::Namespace)
}

pub fn using(path: &[&str]) -> Result<Decl, SyntaxError> {
    let path = path.iter().map(|s| s.to_string()).collect();
    UsingDecl::new(path, no_span()).map(Decl::Using)
}

pub fn program(decls: Vec<Decl>) -> Program {
    Program { decls, span: no_span() }
}
