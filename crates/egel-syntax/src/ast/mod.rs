pub mod common;
pub mod expr;
pub mod items;

pub use expr::{Expr, ExprKind, MatchArm};
pub use common::{Literal, Name, Path, SEPARATOR};
pub use items::{DataDecl, Decl, Definition, Field, NamespaceDecl, ObjectDecl, Program, UsingDecl};
