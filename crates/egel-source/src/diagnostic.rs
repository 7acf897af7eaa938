//! Rendering support for front-end diagnostics.
//!
//! Errors produced by the passes only carry spans. To show them with the
//! offending source lines, miette needs the text as well; `Report` bundles
//! the two without the error types having to own any source.

use std::error::Error;
use std::fmt::{self, Display};
use std::sync::Arc;

use miette::{Diagnostic, Severity};
use thiserror::Error;

use crate::SourceFile;

/// A diagnostic together with the text of the unit it refers to.
#[derive(Debug, Clone, Error)]
pub struct Report {
    /// Name of the unit, used as the miette source name.
    pub location: String,

    /// The source code text for context in error displays
    pub source_code: String,

    /// The error report
    pub report: Arc<dyn EgelError>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.report.fmt(f)
    }
}

/// Delegates everything to the wrapped diagnostic except the source code,
/// which comes from the report itself.
impl miette::Diagnostic for Report {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        self.report.code()
    }

    fn diagnostic_source(&self) -> Option<&dyn Diagnostic> {
        self.report.diagnostic_source()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.report.help()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        self.report.labels()
    }

    fn related<'a>(&'a self) -> Option<Box<dyn Iterator<Item = &'a dyn Diagnostic> + 'a>> {
        self.report.related()
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.source_code)
    }

    fn url<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.report.url()
    }

    fn severity(&self) -> Option<Severity> {
        self.report.severity()
    }
}

/// Errors that can be rendered against a `SourceFile`.
pub trait EgelError: Diagnostic + Send + Sync + Display + Error + 'static {
    /// Attach the unit's text to this error.
    fn report(self, file: &SourceFile) -> Report;
}

impl<T: Diagnostic + Send + Sync + Display + Error + 'static> EgelError for T {
    fn report(self, file: &SourceFile) -> Report {
        Report {
            location: file.location().to_string(),
            source_code: file.contents().to_string(),
            report: Arc::new(self),
        }
    }
}
