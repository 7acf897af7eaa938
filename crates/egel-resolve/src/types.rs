//! Output of name resolution.

use std::fmt;

use egel_syntax::{DataDecl, Definition, ObjectDecl};

use crate::symbol::NameTable;

/// A resolved top-level declaration.
///
/// Names are fully qualified (a single path segment holding the canonical
/// form), every combinator reference in a body is qualified the same way
/// and every pattern variable carries its fresh name. Namespaces and using
/// directives have been flattened away.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Declaration {
    Data(DataDecl),
    Definition(Definition),
    Value(Definition),
    Operator(Definition),
    Object(ObjectDecl),
}

impl Declaration {
    /// The qualified names this declaration introduces, in order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Declaration::Data(d) => d.names.iter().map(|n| n.path.name.as_str()).collect(),
            Declaration::Definition(d) | Declaration::Value(d) | Declaration::Operator(d) => {
                vec![d.name.path.name.as_str()]
            }
            Declaration::Object(o) => vec![o.tag.path.name.as_str()],
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::Data(d) => write!(f, "{}", d),
            Declaration::Definition(d) => write!(f, "def {} = {}", d.name.path, d.body),
            Declaration::Value(d) => write!(f, "val {} = {}", d.name.path, d.body),
            Declaration::Operator(d) => write!(f, "def ({}) = {}", d.name.path, d.body),
            Declaration::Object(o) => write!(f, "{}", o),
        }
    }
}

/// A fully resolved compilation unit.
#[derive(Debug, Clone)]
pub struct ResolvedProgram {
    /// Declarations in the order they were visited.
    pub declarations: Vec<Declaration>,
    /// Every global symbol of the unit.
    pub table: NameTable,
}

impl ResolvedProgram {
    pub fn find(&self, canonical: &str) -> Option<&Declaration> {
        self.declarations
            .iter()
            .find(|decl| decl.names().contains(&canonical))
    }
}

impl fmt::Display for ResolvedProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for decl in &self.declarations {
            writeln!(f, "{}", decl)?;
        }
        Ok(())
    }
}
