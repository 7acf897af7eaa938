//! Name resolution for Egel.
//!
//! Takes the raw tree produced by the parser and returns a flat list of
//! declarations in which every name is bound: globals are fully qualified,
//! pattern variables carry unit-unique fresh names and namespaces are
//! gone. Resolution runs in two passes over the tree:
//!
//! - `definitions` registers all globals in a `NameTable`
//! - `resolve_expr` resolves every occurrence using a `ScopeStack`

pub mod core;
pub mod definitions;
pub mod error;
pub mod resolve_expr;
pub mod scopes;
pub mod symbol;
pub mod types;

pub use core::Resolver;
pub use definitions::declare_program;
pub use error::ResolveError;
pub use resolve_expr::{identify_program, Identifier, Mode};
pub use scopes::{FrameId, ScopeStack};
pub use symbol::{GlobalSymbol, NameTable, QualifiedName, SymbolEntry, SymbolKind};
pub use types::{Declaration, ResolvedProgram};

use egel_source::ResolverConfig;
use egel_syntax::Program;

/// Resolves `program` with the given configuration.
pub fn resolve_program(
    program: &Program,
    config: &ResolverConfig,
) -> Result<ResolvedProgram, ResolveError> {
    Resolver::new(config.clone()).resolve(program)
}
