//! Declaration model: the contract this crate requires from its AST provider
//!
//! The core formatters never touch tree-sitter types. They consume this
//! immutable snapshot, built once per run by the provider (or directly by
//! tests). Formatters only read it and synthesize new strings; the snapshot
//! itself is never mutated, so formatting one overload cannot affect
//! another's view of shared structure.

use crate::schema::DeclKind;

/// One declaration bound to an exported symbol
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Kind tag reported by the provider
    pub kind: DeclKind,
    /// Raw source text of the declaration
    pub text: String,
    /// Raw `/** ... */` documentation blocks attached to the declaration,
    /// delimiters included, in source order
    pub docs: Vec<String>,
    /// Per-kind payload
    pub detail: DeclDetail,
}

impl Declaration {
    /// Create a declaration with no documentation blocks
    pub fn new(kind: DeclKind, text: impl Into<String>, detail: DeclDetail) -> Self {
        Self {
            kind,
            text: text.into(),
            docs: Vec::new(),
            detail,
        }
    }

    /// Attach documentation blocks
    pub fn with_docs(mut self, docs: Vec<String>) -> Self {
        self.docs = docs;
        self
    }
}

/// Per-kind declaration payload
#[derive(Debug, Clone)]
pub enum DeclDetail {
    Function {
        /// Declaration text with the implementation body removed, computed by
        /// the provider from the node's spans. A synthesized copy: the source
        /// structure is untouched.
        text_without_body: String,
    },
    Class {
        name: String,
        type_params: Vec<String>,
        /// Extended base type text, when a heritage clause is present
        base: Option<String>,
        /// Implemented interface texts, in clause order
        implements: Vec<String>,
        members: Vec<ClassMember>,
    },
    Variable {
        name: String,
        /// Opaque resolved type text supplied by the provider. Passed through
        /// with line-ending normalization only.
        type_text: String,
    },
    Interface {
        name: String,
        type_params: Vec<String>,
        /// This interface's own property declaration texts
        properties: Vec<String>,
        /// Directly-extended bases, in clause order
        bases: Vec<BaseRef>,
    },
    TypeAlias,
    Enum,
    Other,
}

impl DeclDetail {
    /// Kind implied by the payload variant, used for mismatch reporting
    pub fn kind(&self) -> DeclKind {
        match self {
            Self::Function { .. } => DeclKind::Function,
            Self::Class { .. } => DeclKind::Class,
            Self::Variable { .. } => DeclKind::Variable,
            Self::Interface { .. } => DeclKind::Interface,
            Self::TypeAlias => DeclKind::TypeAlias,
            Self::Enum => DeclKind::Enum,
            Self::Other => DeclKind::Other,
        }
    }
}

/// Member visibility inside a class body.
///
/// A member with no explicit accessibility modifier defaults to `Public`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}

/// One class body member
#[derive(Debug, Clone)]
pub struct ClassMember {
    pub visibility: Visibility,
    /// Full member declaration text
    pub text: String,
    /// For methods, the member text with its body removed. `None` marks a
    /// property.
    pub text_without_body: Option<String>,
}

impl ClassMember {
    /// Create a property member
    pub fn property(visibility: Visibility, text: impl Into<String>) -> Self {
        Self {
            visibility,
            text: text.into(),
            text_without_body: None,
        }
    }

    /// Create a method member from its full text and its body-stripped text
    pub fn method(
        visibility: Visibility,
        text: impl Into<String>,
        text_without_body: impl Into<String>,
    ) -> Self {
        Self {
            visibility,
            text: text.into(),
            text_without_body: Some(text_without_body.into()),
        }
    }

    pub fn is_method(&self) -> bool {
        self.text_without_body.is_some()
    }
}

/// A directly-extended base of an interface.
///
/// `interface` is `Some` only when the reference resolved to an interface
/// declaration; anything else (a class, an unresolved import) contributes
/// nothing to flattening. The payload carries only the base's OWN properties,
/// never its bases' properties, which makes the one-level flattening rule
/// structural and rules out recursion entirely.
#[derive(Debug, Clone)]
pub struct BaseRef {
    pub name: String,
    pub interface: Option<BaseInterface>,
}

/// Own property declarations of a resolved base interface
#[derive(Debug, Clone)]
pub struct BaseInterface {
    pub properties: Vec<String>,
}

/// A name exported by an entry-point module, bound to one or more
/// declarations. The sequence is non-empty and longer than one only for
/// function overloads; source declaration order is preserved.
#[derive(Debug, Clone)]
pub struct ExportedSymbol {
    pub name: String,
    pub declarations: Vec<Declaration>,
}

/// One entry-point module's exported surface, in the provider's enumeration
/// order (which is source order, not alphabetical)
#[derive(Debug, Clone)]
pub struct ModuleExports {
    pub name: String,
    pub symbols: Vec<ExportedSymbol>,
}
