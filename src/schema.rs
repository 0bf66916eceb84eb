//! Output data model for extracted API records
//!
//! These types are what the downstream documentation renderer consumes. They
//! are constructed once per run by the module aggregator and serialized as a
//! flat JSON array of records.

use std::fmt;

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

/// Syntactic category of an exported declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Function,
    Class,
    Variable,
    Interface,
    TypeAlias,
    Enum,
    /// Any declaration kind without a dedicated formatter
    Other,
}

impl DeclKind {
    /// Get the canonical name used in output records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Class => "class",
            Self::Variable => "variable",
            Self::Interface => "interface",
            Self::TypeAlias => "typeAlias",
            Self::Enum => "enum",
            Self::Other => "other",
        }
    }

    /// Check whether declarations of this kind carry structured documentation
    /// comments.
    ///
    /// Only these kinds are run through the tag parser; everything else gets
    /// an empty information list without any parsing attempt.
    pub fn carries_docs(&self) -> bool {
        matches!(
            self,
            Self::Function | Self::Class | Self::Interface | Self::TypeAlias | Self::Enum
        )
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DeclKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One parsed documentation tag: a tag name plus its ordered body lines.
///
/// The synthetic tag name `info` marks free text appearing before any explicit
/// `@tag` marker. Serialized as a flat array: `[name, line, line, ...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub name: String,
    pub lines: Vec<String>,
}

impl TagEntry {
    /// Create a tag entry with no body lines yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    /// Drop trailing empty lines from the end of the body.
    ///
    /// Interior empty lines are preserved; only the tail is trimmed so blank
    /// lines before the next tag or end-of-comment do not pollute output.
    pub fn trim_trailing_blanks(&mut self) {
        while self.lines.last().is_some_and(|l| l.is_empty()) {
            self.lines.pop();
        }
    }
}

impl Serialize for TagEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.lines.len() + 1))?;
        seq.serialize_element(&self.name)?;
        for line in &self.lines {
            seq.serialize_element(line)?;
        }
        seq.end()
    }
}

/// One API record per exported symbol
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiRecord {
    /// Module name, derived from the entry point's containing directory
    pub module: String,
    /// Exported symbol name
    pub api: String,
    /// Kind of the symbol's first declaration
    pub kind: DeclKind,
    /// One synthesized signature per overload declaration, in source order
    pub signatures: Vec<String>,
    /// Parsed documentation tags from the first declaration only
    pub information: Vec<TagEntry>,
}
