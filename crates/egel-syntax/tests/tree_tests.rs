use egel_syntax::make::*;
use egel_syntax::{Decl, NamespaceDecl, Path, SyntaxError, UsingDecl};
use miette::SourceSpan;

fn span() -> SourceSpan {
    SourceSpan::from((3, 7))
}

#[test]
fn test_path_parse_splits_qualification() {
    let path = Path::parse("System::IO::print", span()).unwrap();
    assert_eq!(path.segments, vec!["System", "IO"]);
    assert_eq!(path.name, "print");
    assert!(path.is_qualified());
    assert_eq!(path.to_string(), "System::IO::print");
}

#[test]
fn test_path_parse_rejects_empty_segments() {
    let err = Path::parse("System::::print", span()).unwrap_err();
    assert_eq!(
        err,
        SyntaxError::MalformedName {
            text: "System::::print".to_string(),
            span: span(),
        }
    );
}

#[test]
fn test_empty_namespace_and_using_are_rejected() {
    assert_eq!(
        NamespaceDecl::new(vec![], vec![], span()).unwrap_err(),
        SyntaxError::EmptyNamespace { span: span() }
    );
    assert_eq!(
        UsingDecl::new(vec![], span()).unwrap_err(),
        SyntaxError::EmptyUsing { span: span() }
    );
}

#[test]
fn test_builders_report_bad_paths() {
    let empty = SourceSpan::from((0, 0));
    assert_eq!(namespace(&[], vec![]).unwrap_err(), SyntaxError::EmptyNamespace { span: empty });
    assert_eq!(using(&[]).unwrap_err(), SyntaxError::EmptyUsing { span: empty });
    assert!(matches!(
        using(&["A::B"]),
        Err(SyntaxError::MalformedName { ref text, .. }) if text == "A::B"
    ));
    assert!(matches!(using(&["System"]), Ok(Decl::Using(_))));
}

#[test]
fn test_program_display() {
    let prog = program(vec![
        data(&["nil", "cons"]),
        namespace(
            &["List"],
            vec![
                using(&["System"]).unwrap(),
                def(
                    "length",
                    lambda(vec![
                        arm(vec![comb("nil")], None, int(0)),
                        arm(
                            vec![app(comb("cons"), vec![wildcard(), var("T")])],
                            None,
                            binop("+", int(1), app(comb("length"), vec![var("T")])),
                        ),
                    ]),
                ),
            ],
        )
        .unwrap(),
    ]);
    expect_test::expect![[r#"
        data nil, cons
        namespace List (
        using System
        def length = [ nil -> 0 | (cons _ T) -> ((+) 1 (length T)) ]
        )
    "#]]
    .assert_eq(&prog.to_string());
}
