//! Source-like rendering of trees, used in diagnostics and snapshots.

use std::fmt::{self, Display, Formatter, Write};

use crate::ast::{
    DataDecl, Decl, Definition, Expr, ExprKind, Field, Literal, MatchArm, NamespaceDecl,
    ObjectDecl, Program, UsingDecl, SEPARATOR,
};

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "{}", value),
            Literal::Float(value) => write!(f, "{:?}", value),
            Literal::Char(c) => write!(f, "{:?}", c),
            Literal::Text(s) => write!(f, "{:?}", s),
        }
    }
}

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Literal(lit) => write!(f, "{}", lit),
            ExprKind::Variable(name) => f.write_str(name),
            ExprKind::Wildcard => f.write_char('_'),
            ExprKind::Combinator(path) => write!(f, "{}", path),
            ExprKind::Operator(path) => write!(f, "({})", path),
            ExprKind::Application { head, args } => {
                write!(f, "({}", head)?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                f.write_char(')')
            }
            ExprKind::Tuple(items) => {
                f.write_char('(')?;
                write_list(f, items, ", ")?;
                f.write_char(')')
            }
            ExprKind::List { items, tail } => {
                f.write_char('{')?;
                write_list(f, items, ", ")?;
                if let Some(tail) = tail {
                    write!(f, " | {}", tail)?;
                }
                f.write_char('}')
            }
            ExprKind::Lambda(arms) => {
                f.write_str("[ ")?;
                write_list(f, arms, " | ")?;
                f.write_str(" ]")
            }
            ExprKind::Match(arm) => write!(f, "{}", arm),
            ExprKind::Let { bindings, value, body } => {
                f.write_str("let ")?;
                write_list(f, bindings, " ")?;
                write!(f, " = {} in {}", value, body)
            }
            ExprKind::Tag { payload, tag } => write!(f, "{}:{}", payload, tag),
            ExprKind::If { cond, then_branch, else_branch } => {
                write!(f, "if {} then {} else {}", cond, then_branch, else_branch)
            }
            ExprKind::Try { body, handler } => write!(f, "try {} catch {}", body, handler),
            ExprKind::Throw(e) => write!(f, "throw {}", e),
            ExprKind::Sequence(items) => write_list(f, items, "; "),
        }
    }
}

impl Display for MatchArm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, &self.patterns, " ")?;
        if let Some(guard) = &self.guard {
            if !self.patterns.is_empty() {
                f.write_char(' ')?;
            }
            write!(f, "if {}", guard)?;
        }
        if !self.patterns.is_empty() || self.guard.is_some() {
            f.write_char(' ')?;
        }
        write!(f, "-> {}", self.body)
    }
}

impl Display for DataDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("data ")?;
        let names: Vec<_> = self.names.iter().map(|n| &n.path).collect();
        write_list(f, &names, ", ")
    }
}

fn write_definition(f: &mut Formatter<'_>, keyword: &str, def: &Definition) -> fmt::Result {
    write!(f, "{} {} = {}", keyword, def.name.path, def.body)
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Field::Data(d) => write!(f, "{}", d),
            Field::Definition(d) => write_definition(f, "def", d),
            Field::Value(d) => write_definition(f, "val", d),
        }
    }
}

impl Display for ObjectDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "object {}", self.tag.path)?;
        for param in &self.params {
            write!(f, " {}", param)?;
        }
        f.write_str(" (")?;
        write_list(f, &self.fields, "; ")?;
        f.write_char(')')?;
        if !self.embedded.is_empty() {
            f.write_str(" extends ")?;
            write_list(f, &self.embedded, ", ")?;
        }
        Ok(())
    }
}

impl Display for NamespaceDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "namespace {} (", self.path.join(SEPARATOR))?;
        for decl in &self.decls {
            writeln!(f, "{}", decl)?;
        }
        f.write_char(')')
    }
}

impl Display for UsingDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "using {}", self.path.join(SEPARATOR))
    }
}

impl Display for Decl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Decl::Data(d) => write!(f, "{}", d),
            Decl::Definition(d) => write_definition(f, "def", d),
            Decl::Value(d) => write_definition(f, "val", d),
            Decl::Operator(d) => write!(f, "def ({}) = {}", d.name.path, d.body),
            Decl::Object(o) => write!(f, "{}", o),
            Decl::Namespace(n) => write!(f, "{}", n),
            Decl::Using(u) => write!(f, "{}", u),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for decl in &self.decls {
            writeln!(f, "{}", decl)?;
        }
        Ok(())
    }
}
