//! The raw, scope-free syntax tree of Egel.
//!
//! Trees are produced by the parser (or by the `make` helpers) and handed
//! to name resolution. Nothing here is bound: variables are plain source
//! names and combinators carry the qualification they were written with.

pub mod ast;
pub mod display;
pub mod error;
pub mod make;

pub use ast::{
    DataDecl, Decl, Definition, Expr, ExprKind, Field, Literal, MatchArm, Name, NamespaceDecl,
    ObjectDecl, Path, Program, UsingDecl, SEPARATOR,
};
pub use error::SyntaxError;

#[cfg(test)]
mod tests {
    use super::make::*;
    use super::*;

    #[test]
    fn test_display_definition_with_lambda() {
        let decl = def(
            "fac",
            lambda(vec![
                arm(vec![int(0)], None, int(1)),
                arm(
                    vec![var("N")],
                    None,
                    binop("*", var("N"), app(comb("fac"), vec![binop("-", var("N"), int(1))])),
                ),
            ]),
        );
        expect_test::expect!["def fac = [ 0 -> 1 | N -> ((*) N (fac ((-) N 1))) ]"]
            .assert_eq(&decl.to_string());
    }

    #[test]
    fn test_display_namespace_and_using() {
        let prog = program(vec![
            using(&["System"]).unwrap(),
            namespace(
                &["A", "B"],
                vec![data(&["nil", "cons"]), val("x", qcomb(&["A"], "y"))],
            )
            .unwrap(),
        ]);
        expect_test::expect![[r#"
            using System
            namespace A::B (
            data nil, cons
            val x = A::y
            )
        "#]]
        .assert_eq(&prog.to_string());
    }

    #[test]
    fn test_display_object() {
        let decl = object(
            "point",
            vec![var("X"), var("Y")],
            vec![
                field_data(&["x", "none"]),
                field_def("get", lambda(vec![arm(vec![], None, var("X"))])),
            ],
            vec![comb("base")],
        );
        expect_test::expect!["object point X Y (data x, none; def get = [ -> X ]) extends base"]
            .assert_eq(&decl.to_string());
    }

    #[test]
    fn test_display_let_tag_and_guard() {
        let e = let_in(
            vec![tag(var("X"), comb("int"))],
            int(3),
            matches(vec![var("Y")], Some(comb("true")), list(vec![var("X")], Some(var("Y")))),
        );
        expect_test::expect!["let X:int = 3 in Y if true -> {X | Y}"].assert_eq(&e.to_string());
    }

    #[test]
    fn test_namespace_requires_path() {
        let span = miette::SourceSpan::from((4, 2));
        let err = NamespaceDecl::new(vec![], vec![], span).unwrap_err();
        assert_eq!(err, SyntaxError::EmptyNamespace { span });
        let err = UsingDecl::new(vec!["A::B".to_string()], span).unwrap_err();
        assert!(matches!(err, SyntaxError::MalformedName { .. }));
    }
}
