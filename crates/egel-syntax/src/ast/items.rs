use miette::SourceSpan;

use super::common::{Name, SEPARATOR};
use super::expr::Expr;
use crate::error::SyntaxError;

/// The root wrapper handed over by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Program {
    pub decls: Vec<Decl>,
    pub span: SourceSpan,
}

/// Declarations as they appear in a unit or inside a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Decl {
    Data(DataDecl),
    Definition(Definition),
    Value(Definition),
    Operator(Definition),
    Object(ObjectDecl),
    Namespace(NamespaceDecl),
    Using(UsingDecl),
}

/// `data a, b, c`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataDecl {
    pub names: Vec<Name>,
    pub span: SourceSpan,
}

/// Shared by `def`, `val` and operator declarations: one bound name and
/// its body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Definition {
    pub name: Name,
    pub body: Expr,
    pub span: SourceSpan,
}

/// `object Tag P0 P1 (fields) extends e0, e1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectDecl {
    pub tag: Name,
    /// Constructor arguments, bound for the whole object body.
    pub params: Vec<Expr>,
    pub fields: Vec<Field>,
    /// Expressions embedded in the object (the objects it extends).
    pub embedded: Vec<Expr>,
    pub span: SourceSpan,
}

/// Members of an object body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    /// `data x, init...`: `x` is the field, the rest are references.
    Data(DataDecl),
    Definition(Definition),
    Value(Definition),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceDecl {
    pub path: Vec<String>,
    pub decls: Vec<Decl>,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UsingDecl {
    pub path: Vec<String>,
    pub span: SourceSpan,
}

impl Field {
    /// The field name this member introduces.
    pub fn field_name(&self) -> Option<&Name> {
        match self {
            Field::Data(d) => d.names.first(),
            Field::Definition(d) | Field::Value(d) => Some(&d.name),
        }
    }
}

impl NamespaceDecl {
    pub fn new(path: Vec<String>, decls: Vec<Decl>, span: SourceSpan) -> Result<Self, SyntaxError> {
        if path.is_empty() {
            return Err(SyntaxError::EmptyNamespace { span });
        }
        check_segments(&path, span)?;
        Ok(Self { path, decls, span })
    }
}

impl UsingDecl {
    pub fn new(path: Vec<String>, span: SourceSpan) -> Result<Self, SyntaxError> {
        if path.is_empty() {
            return Err(SyntaxError::EmptyUsing { span });
        }
        check_segments(&path, span)?;
        Ok(Self { path, span })
    }
}

fn check_segments(path: &[String], span: SourceSpan) -> Result<(), SyntaxError> {
    match path.iter().find(|segment| segment.is_empty() || segment.contains(SEPARATOR)) {
        Some(_) => Err(SyntaxError::MalformedName { text: path.join(SEPARATOR), span }),
        None => Ok(()),
    }
}
