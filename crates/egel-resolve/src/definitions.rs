// Pass 1: register every globally visible name under its fully qualified
// form. Nothing here looks at local variables or rewrites the tree.

use egel_syntax::{Decl, Name, ObjectDecl, Program};
use fxhash::FxHashMap;
use miette::SourceSpan;

use crate::error::ResolveError;
use crate::symbol::{NameTable, QualifiedName};

/// Where a declared name goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclareState {
    /// Into the current namespace.
    Global,
    /// Into the shared field namespace (names inside an object body).
    Field,
}

/// Per-call state of the declare walk.
#[derive(Debug, Clone, Copy)]
struct DeclareContext<'a> {
    state: DeclareState,
    /// Segments of the enclosing namespaces.
    prefix: &'a [String],
}

/// Runs the declare pass over a whole program.
pub fn declare_program(program: &Program, table: &mut NameTable) -> Result<(), ResolveError> {
    let cx = DeclareContext {
        state: DeclareState::Global,
        prefix: &[],
    };
    let before = table.len();
    declare_decls(table, cx, &program.decls)?;
    log::debug!("Declare pass registered {} symbols", table.len() - before);
    Ok(())
}

fn declare_decls(
    table: &mut NameTable,
    cx: DeclareContext<'_>,
    decls: &[Decl],
) -> Result<(), ResolveError> {
    for decl in decls {
        declare_decl(table, cx, decl)?;
    }
    Ok(())
}

fn declare_decl(
    table: &mut NameTable,
    cx: DeclareContext<'_>,
    decl: &Decl,
) -> Result<(), ResolveError> {
    match decl {
        Decl::Data(data) => {
            for name in &data.names {
                declare_name(table, cx, name)?;
            }
            Ok(())
        }
        Decl::Definition(def) | Decl::Value(def) | Decl::Operator(def) => {
            declare_name(table, cx, &def.name)
        }
        Decl::Object(object) => declare_object(table, cx, object),
        Decl::Namespace(ns) => {
            let extended: Vec<String> = cx.prefix.iter().chain(ns.path.iter()).cloned().collect();
            let inner = DeclareContext {
                state: cx.state,
                prefix: &extended,
            };
            declare_decls(table, inner, &ns.decls)
        }
        // directives only matter when identifying
        Decl::Using(_) => Ok(()),
    }
}

fn declare_object(
    table: &mut NameTable,
    cx: DeclareContext<'_>,
    object: &ObjectDecl,
) -> Result<(), ResolveError> {
    declare_name(table, cx, &object.tag)?;

    let fields = DeclareContext {
        state: DeclareState::Field,
        prefix: cx.prefix,
    };
    // One object may not list the same field twice, even though objects
    // share field symbols among each other.
    let mut seen: FxHashMap<String, SourceSpan> = FxHashMap::default();
    for field in &object.fields {
        let Some(name) = field.field_name() else {
            continue;
        };
        let canonical = table.field_name(&name.path).canonical().to_string();
        if let Some(&previous_span) = seen.get(&canonical) {
            return Err(ResolveError::Redeclaration {
                name: canonical,
                span: name.span,
                previous_span,
            });
        }
        seen.insert(canonical, name.span);
        declare_name(table, fields, name)?;
    }
    Ok(())
}

fn declare_name(
    table: &mut NameTable,
    cx: DeclareContext<'_>,
    name: &Name,
) -> Result<(), ResolveError> {
    match cx.state {
        DeclareState::Global => {
            table.declare(QualifiedName::from_path(cx.prefix, &name.path), name.span)?;
        }
        DeclareState::Field => {
            table.declare_field(&name.path, name.span)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use egel_syntax::make::*;

    fn declared(program: &Program) -> Vec<String> {
        let mut table = NameTable::default();
        declare_program(program, &mut table).unwrap();
        table.iter().map(|(_, e)| e.name.canonical().to_string()).collect()
    }

    #[test]
    fn test_data_group_declares_every_constructor() {
        let prog = program(vec![data(&["nil", "cons"])]);
        assert_eq!(declared(&prog), vec!["nil", "cons"]);
    }

    #[test]
    fn test_namespace_prefix_is_restored() {
        let prog = program(vec![
            namespace(
                &["A"],
                vec![def("f", int(1)), namespace(&["B"], vec![val("g", int(2))]).unwrap()],
            )
            .unwrap(),
            operator("+", int(0)),
        ]);
        assert_eq!(declared(&prog), vec!["A::f", "A::B::g", "+"]);
    }

    #[test]
    fn test_object_declares_tag_and_fields() {
        let prog = program(vec![object(
            "point",
            vec![var("X")],
            vec![field_data(&["x", "none"]), field_def("norm", int(0))],
            vec![],
        )]);
        assert_eq!(declared(&prog), vec!["point", "OO::x", "OO::norm"]);
    }

    #[test]
    fn test_duplicate_field_in_one_object() {
        let prog = program(vec![object(
            "o",
            vec![],
            vec![field_data(&["x"]), field_val("x", int(1))],
            vec![],
        )]);
        let mut table = NameTable::default();
        let err = declare_program(&prog, &mut table).unwrap_err();
        assert_eq!(err.name(), Some("OO::x"));
    }

    #[test]
    fn test_using_declares_nothing() {
        let prog = program(vec![using(&["System"]).unwrap()]);
        assert!(declared(&prog).is_empty());
    }
}
