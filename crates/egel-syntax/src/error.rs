use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Shape errors detected while building a raw tree.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Malformed name `{text}`")]
    #[diagnostic(
        code(egel_syntax::malformed_name),
        help("names are identifiers separated by `::`")
    )]
    MalformedName {
        text: String,
        #[label("in this name")]
        span: SourceSpan,
    },

    #[error("Namespace declaration without a name")]
    #[diagnostic(code(egel_syntax::empty_namespace))]
    EmptyNamespace {
        #[label("namespace declared here")]
        span: SourceSpan,
    },

    #[error("Using directive without a namespace")]
    #[diagnostic(code(egel_syntax::empty_using))]
    EmptyUsing {
        #[label("directive here")]
        span: SourceSpan,
    },
}
