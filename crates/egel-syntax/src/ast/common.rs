use miette::SourceSpan;

use crate::error::SyntaxError;

/// Separator between namespace segments in written names.
pub const SEPARATOR: &str = "::";

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Char(char),
    Text(String),
}

impl Eq for Literal {}
impl std::hash::Hash for Literal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Literal::Int(value) => value.hash(state),
            Literal::Float(value) => value.to_bits().hash(state),
            Literal::Char(c) => c.hash(state),
            Literal::Text(s) => s.hash(state),
        }
    }
}

/// A possibly namespace-qualified name as written: `A::B::f` has
/// segments `["A", "B"]` and name `f`.
///
/// After resolution the segments are empty and `name` holds the full
/// canonical name of the global it denotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    pub segments: Vec<String>,
    pub name: String,
}

impl Path {
    pub fn new(segments: Vec<String>, name: impl Into<String>) -> Self {
        Self { segments, name: name.into() }
    }

    /// An unqualified path.
    pub fn simple(name: impl Into<String>) -> Self {
        Self { segments: Vec::new(), name: name.into() }
    }

    /// Splits written text such as `System::print` into a path.
    pub fn parse(text: &str, span: SourceSpan) -> Result<Self, SyntaxError> {
        let mut parts: Vec<&str> = text.split(SEPARATOR).collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(SyntaxError::MalformedName {
                text: text.to_string(),
                span,
            });
        }
        // split always yields at least one element
        let name = parts.pop().unwrap_or_default().to_string();
        Ok(Self {
            segments: parts.into_iter().map(str::to_string).collect(),
            name,
        })
    }

    pub fn is_qualified(&self) -> bool {
        !self.segments.is_empty()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            write!(f, "{}{}", segment, SEPARATOR)?;
        }
        write!(f, "{}", self.name)
    }
}

/// A name in declaring position (constructor, definition, operator or
/// object tag), with the span used to report redeclarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    pub path: Path,
    pub span: SourceSpan,
}

impl Name {
    pub fn new(path: Path, span: SourceSpan) -> Self {
        Self { path, span }
    }

    pub fn with_span(mut self, span: impl Into<SourceSpan>) -> Self {
        self.span = span.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_span() -> SourceSpan {
        SourceSpan::from((0, 0))
    }

    #[test]
    fn test_parse_qualified() {
        let path = Path::parse("System::IO::print", dummy_span()).unwrap();
        assert_eq!(path.segments, vec!["System".to_string(), "IO".to_string()]);
        assert_eq!(path.name, "print");
        assert!(path.is_qualified());
        assert_eq!(path.to_string(), "System::IO::print");
    }

    #[test]
    fn test_parse_simple() {
        let path = Path::parse("f", dummy_span()).unwrap();
        assert_eq!(path, Path::simple("f"));
        assert!(!path.is_qualified());
    }

    #[test]
    fn test_parse_rejects_empty_segment() {
        assert!(Path::parse("A::::f", dummy_span()).is_err());
        assert!(Path::parse("A::", dummy_span()).is_err());
        assert!(Path::parse("", dummy_span()).is_err());
    }
}
