/// A compilation unit's source text.
///
/// The front-end never reads files itself; the driver hands over the
/// text so diagnostics can be rendered against it.
///
/// # Example
///
/// ```rust
/// use egel_source::SourceFile;
///
/// let file = SourceFile::new("main.eg", "def main = 42");
/// assert_eq!(file.location(), "main.eg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceFile {
    location: String,
    contents: String,
}

impl SourceFile {
    pub fn new(location: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            contents: contents.into(),
        }
    }

    /// Path or pseudo-path of the unit (e.g. `main.eg`, `<stdin>`).
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}
