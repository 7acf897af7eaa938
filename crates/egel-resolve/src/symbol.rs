//! Global symbols and the table that owns them.
//!
//! Every globally visible name of a unit (constructors, definitions,
//! values, operators, object tags and object fields) is registered here
//! exactly once under its canonical form, `Seg::Seg::name`.

use std::fmt;

use egel_syntax::{Path, SEPARATOR};
use fxhash::FxHashMap;
use miette::SourceSpan;

use crate::error::ResolveError;

/// A namespace-qualified name, kept in its canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    canonical: String,
}

impl QualifiedName {
    pub fn new(segments: Vec<String>, name: impl Into<String>) -> Self {
        let mut canonical = segments.join(SEPARATOR);
        if !canonical.is_empty() {
            canonical.push_str(SEPARATOR);
        }
        canonical.push_str(&name.into());
        Self { canonical }
    }

    /// `prefix::path`, where `path` may itself be qualified.
    pub fn from_path(prefix: &[String], path: &Path) -> Self {
        let segments = prefix.iter().chain(path.segments.iter()).cloned().collect();
        Self::new(segments, path.name.clone())
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The single-segment path the resolved tree carries.
    pub fn to_path(&self) -> Path {
        Path::simple(self.canonical.clone())
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

/// Handle to an entry in a `NameTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlobalSymbol(u32);

impl GlobalSymbol {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Whether a symbol names an ordinary global or a shared object field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Global,
    Field,
}

#[derive(Debug, Clone)]
pub struct SymbolEntry {
    pub name: QualifiedName,
    pub kind: SymbolKind,
    /// Where the name was first declared.
    pub span: SourceSpan,
}

/// Registry of all global symbols of one compilation unit.
///
/// Written by the declare pass only; the identify pass reads it.
#[derive(Debug, Clone)]
pub struct NameTable {
    entries: Vec<SymbolEntry>,
    by_name: FxHashMap<String, GlobalSymbol>,
    field_namespace: String,
}

impl Default for NameTable {
    fn default() -> Self {
        Self::new(egel_source::default_field_namespace())
    }
}

impl NameTable {
    /// Creates an empty table whose field symbols live under
    /// `field_namespace`.
    pub fn new(field_namespace: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            by_name: FxHashMap::default(),
            field_namespace: field_namespace.into(),
        }
    }

    pub fn field_namespace(&self) -> &str {
        &self.field_namespace
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers `name`; fails if its canonical form is already taken.
    pub fn declare(
        &mut self,
        name: QualifiedName,
        span: SourceSpan,
    ) -> Result<GlobalSymbol, ResolveError> {
        self.insert(name, SymbolKind::Global, span)
    }

    /// Registers `field` in the shared field namespace.
    ///
    /// Declaring a field name that another object already declared yields
    /// the existing symbol, so all objects share one symbol per field name.
    /// Colliding with an ordinary global of the same canonical form is a
    /// redeclaration.
    pub fn declare_field(
        &mut self,
        field: &Path,
        span: SourceSpan,
    ) -> Result<GlobalSymbol, ResolveError> {
        let name = self.field_name(field);
        match self.by_name.get(name.canonical()) {
            Some(&symbol) if self.entries[symbol.index()].kind == SymbolKind::Field => {
                log::trace!("Field `{}` shared with an earlier object", name);
                Ok(symbol)
            }
            _ => self.insert(name, SymbolKind::Field, span),
        }
    }

    /// The qualified name a field is registered under.
    pub fn field_name(&self, field: &Path) -> QualifiedName {
        QualifiedName::from_path(std::slice::from_ref(&self.field_namespace), field)
    }

    fn insert(
        &mut self,
        name: QualifiedName,
        kind: SymbolKind,
        span: SourceSpan,
    ) -> Result<GlobalSymbol, ResolveError> {
        if let Some(&existing) = self.by_name.get(name.canonical()) {
            return Err(ResolveError::Redeclaration {
                name: name.canonical().to_string(),
                span,
                previous_span: self.entries[existing.index()].span,
            });
        }
        let symbol = GlobalSymbol(self.entries.len() as u32);
        log::trace!("Declared {:?} `{}` as {:?}", kind, name, symbol);
        self.by_name.insert(name.canonical().to_string(), symbol);
        self.entries.push(SymbolEntry { name, kind, span });
        Ok(symbol)
    }

    /// Exact lookup by canonical form.
    pub fn get(&self, canonical: &str) -> Option<GlobalSymbol> {
        self.by_name.get(canonical).copied()
    }

    pub fn entry(&self, symbol: GlobalSymbol) -> &SymbolEntry {
        &self.entries[symbol.index()]
    }

    pub fn qualified_name(&self, symbol: GlobalSymbol) -> &QualifiedName {
        &self.entries[symbol.index()].name
    }

    /// All symbols in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (GlobalSymbol, &SymbolEntry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (GlobalSymbol(i as u32), entry))
    }

    /// Finds `path` as written, then under each prefix in turn.
    ///
    /// Prefixes are tried in the order given; the first registered
    /// candidate wins.
    pub fn lookup<'p>(
        &self,
        prefixes: impl IntoIterator<Item = &'p [String]>,
        path: &Path,
    ) -> Option<GlobalSymbol> {
        let direct = QualifiedName::from_path(&[], path);
        if let Some(symbol) = self.get(direct.canonical()) {
            return Some(symbol);
        }
        prefixes
            .into_iter()
            .find_map(|prefix| self.get(QualifiedName::from_path(prefix, path).canonical()))
    }

    /// Like `lookup`, but reports an `Undeclared` error at `span`.
    pub fn resolve<'p>(
        &self,
        prefixes: impl IntoIterator<Item = &'p [String]> + Clone,
        path: &Path,
        span: SourceSpan,
    ) -> Result<GlobalSymbol, ResolveError> {
        if let Some(symbol) = self.lookup(prefixes.clone(), path) {
            log::trace!("Resolved `{}` to `{}`", path, self.qualified_name(symbol));
            return Ok(symbol);
        }
        let searched: Vec<String> = prefixes
            .into_iter()
            .map(|prefix| prefix.join(SEPARATOR))
            .collect();
        let help = if searched.is_empty() {
            None
        } else {
            Some(format!("searched namespaces: {}", searched.join(", ")))
        };
        Err(ResolveError::Undeclared {
            name: path.to_string(),
            span,
            help,
        })
    }
}
