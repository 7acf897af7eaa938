use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Errors that abort name resolution of a compilation unit.
///
/// Both passes stop at the first error; no partially resolved program is
/// ever returned alongside one.
#[derive(Debug, Error, Diagnostic, Clone, Hash, PartialEq, Eq)]
pub enum ResolveError {
    /// A fully qualified name (or a field name) was registered twice.
    #[error("Redeclaration of `{name}`")]
    #[diagnostic(code(egel_resolve::redeclaration))]
    Redeclaration {
        /// Canonical name that was already taken.
        name: String,
        #[label("declared again here")]
        span: SourceSpan,
        #[label("first declared here")]
        previous_span: SourceSpan,
    },

    /// A variable or combinator that is bound neither locally nor by any
    /// namespace visible at the point of use.
    #[error("Undeclared `{name}`")]
    #[diagnostic(code(egel_resolve::undeclared))]
    Undeclared {
        /// The name as written, including any qualification.
        name: String,
        #[label("referenced here")]
        span: SourceSpan,
        #[help]
        /// Which namespaces were searched, when any were.
        help: Option<String>,
    },

    /// The passes reached a state that well-formed input cannot produce,
    /// e.g. identifying a declaration the declare pass never registered.
    #[error("Internal resolver error: {message}")]
    #[diagnostic(code(egel_resolve::invariant_violation))]
    InvariantViolation {
        message: String,
        #[label("while resolving this")]
        span: Option<SourceSpan>,
    },
}

impl ResolveError {
    /// Position of the offending occurrence.
    pub fn span(&self) -> Option<SourceSpan> {
        match self {
            ResolveError::Redeclaration { span, .. } | ResolveError::Undeclared { span, .. } => {
                Some(*span)
            }
            ResolveError::InvariantViolation { span, .. } => *span,
        }
    }

    /// The user-facing name the error is about, if it is a semantic error.
    pub fn name(&self) -> Option<&str> {
        match self {
            ResolveError::Redeclaration { name, .. } | ResolveError::Undeclared { name, .. } => {
                Some(name)
            }
            ResolveError::InvariantViolation { .. } => None,
        }
    }
}
