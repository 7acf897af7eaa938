#![allow(dead_code)]

use egel_resolve::{resolve_program, ResolveError, ResolvedProgram};
use egel_source::ResolverConfig;
use egel_syntax::Program;

/// Routes `log` output through the test harness; run with
/// `RUST_LOG=trace` to see every declaration and fresh binding.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn resolve(program: &Program) -> Result<ResolvedProgram, ResolveError> {
    init_logging();
    resolve_program(program, &ResolverConfig::default())
}

/// Resolves and renders the whole unit, one declaration per line.
pub fn render(program: &Program) -> String {
    match resolve(program) {
        Ok(resolved) => resolved.to_string(),
        Err(err) => panic!("resolution failed: {}", err),
    }
}

/// Resolves a unit that must fail and returns its error.
pub fn resolve_err(program: &Program) -> ResolveError {
    match resolve(program) {
        Ok(resolved) => panic!("expected an error, got:\n{}", resolved),
        Err(err) => err,
    }
}

pub fn undeclared_name(err: &ResolveError) -> &str {
    match err {
        ResolveError::Undeclared { name, .. } => name,
        other => panic!("expected an undeclared name, got {:?}", other),
    }
}
