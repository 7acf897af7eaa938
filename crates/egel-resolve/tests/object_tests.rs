mod common;

use common::{render, resolve, resolve_err};
use egel_resolve::{ResolveError, SymbolKind};
use egel_syntax::make::*;

#[test]
fn test_objects_share_field_symbols() {
    let prog = program(vec![
        object("p", vec![], vec![field_data(&["x"])], vec![]),
        object("q", vec![], vec![field_data(&["x"])], vec![]),
    ]);
    let resolved = resolve(&prog).unwrap();

    let fields: Vec<_> = resolved
        .table
        .iter()
        .filter(|(_, entry)| entry.kind == SymbolKind::Field)
        .map(|(_, entry)| entry.name.canonical().to_string())
        .collect();
    assert_eq!(fields, vec!["OO::x"]);
    assert_eq!(resolved.to_string(), "object p (data OO::x)\nobject q (data OO::x)\n");
}

#[test]
fn test_field_bodies_see_object_parameters() {
    let prog = program(vec![
        operator("+", int(0)),
        object(
            "point",
            vec![var("X"), var("Y")],
            vec![field_val("x", var("X")), field_def("sum", binop("+", var("X"), var("Y")))],
            vec![],
        ),
    ]);
    assert_eq!(
        render(&prog),
        "def (+) = 0\nobject point V_0 V_1 (val OO::x = V_0; def OO::sum = ((+) V_0 V_1))\n"
    );
}

#[test]
fn test_data_field_names_references_after_the_first() {
    let prog = program(vec![
        data(&["int"]),
        object("cell", vec![], vec![field_data(&["value", "int"])], vec![]),
    ]);
    assert_eq!(render(&prog), "data int\nobject cell (data OO::value, int)\n");
}

#[test]
fn test_embedded_objects_are_resolved_with_parameters() {
    let prog = program(vec![
        object("base", vec![var("A")], vec![], vec![]),
        object("derived", vec![var("B")], vec![], vec![app(comb("base"), vec![var("B")])]),
    ]);
    assert_eq!(
        render(&prog),
        "object base V_0 ()\nobject derived V_1 () extends (base V_1)\n"
    );
}

#[test]
fn test_duplicate_field_in_one_object() {
    let prog = program(vec![object(
        "p",
        vec![],
        vec![field_data(&["x"]), field_val("x", int(1))],
        vec![],
    )]);
    match resolve_err(&prog) {
        ResolveError::Redeclaration { name, .. } => assert_eq!(name, "OO::x"),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_field_namespace_is_reserved() {
    let prog = program(vec![
        namespace(&["OO"], vec![def("x", int(1))]).unwrap(),
        object("p", vec![], vec![field_data(&["x"])], vec![]),
    ]);
    let err = resolve_err(&prog);
    assert_eq!(err.name(), Some("OO::x"));
}

#[test]
fn test_object_in_namespace_keeps_fields_global() {
    let point = object("point", vec![], vec![field_data(&["x"])], vec![]);
    let prog = program(vec![namespace(&["Geo"], vec![point]).unwrap()]);
    assert_eq!(render(&prog), "object Geo::point (data OO::x)\n");
}
