// Core resolver logic orchestrating the two passes.

use egel_source::ResolverConfig;
use egel_syntax::Program;

use crate::definitions::declare_program;
use crate::error::ResolveError;
use crate::resolve_expr::identify_program;
use crate::symbol::NameTable;
use crate::types::ResolvedProgram;

/// Resolves one compilation unit.
///
/// Each call builds its own `NameTable` and scope arena, so independent
/// units can be resolved on separate threads with separate resolvers or
/// with one shared `&Resolver`.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Runs both passes over `program`.
    ///
    /// 1. **Declare:** registers every constructor, definition, value,
    ///    operator, object tag and object field under its qualified name.
    /// 2. **Identify:** binds every occurrence against the lexical scopes
    ///    and the table, renames pattern variables and flattens namespaces.
    ///
    /// The identify pass only starts once the table is complete; the first
    /// error of either pass is returned and nothing else.
    pub fn resolve(&self, program: &Program) -> Result<ResolvedProgram, ResolveError> {
        log::debug!("Resolving unit with {} top-level declarations", program.decls.len());

        let mut table = NameTable::new(self.config.field_namespace.clone());
        declare_program(program, &mut table)?;

        let declarations = identify_program(program, &table, &self.config.fresh_prefix)?;

        Ok(ResolvedProgram { declarations, table })
    }
}
