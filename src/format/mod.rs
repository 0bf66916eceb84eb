//! Signature formatters and the declaration classifier
//!
//! One formatter per declaration kind, dispatched by an exhaustive match over
//! the kind tag. Each formatter asserts that the payload it receives matches
//! its expected kind and fails fast with `KindMismatch` otherwise; with
//! correct wiring that never fires, but it guards against misclassification.

mod class;
mod function;
mod interface;
mod raw;
mod variable;

use crate::decl::Declaration;
use crate::error::{ApiSurfaceError, Result};
use crate::schema::DeclKind;

/// Format one declaration into its canonical signature string
pub fn format_declaration(decl: &Declaration) -> Result<String> {
    match decl.kind {
        DeclKind::Function => function::format(decl),
        DeclKind::Class => class::format(decl),
        DeclKind::Variable => variable::format(decl),
        DeclKind::Interface => interface::format(decl),
        DeclKind::TypeAlias => raw::format_type_alias(decl),
        DeclKind::Enum => raw::format_enum(decl),
        DeclKind::Other => Ok(raw::format_fallback(decl)),
    }
}

/// Build the contract-violation error for a formatter that received a payload
/// of the wrong kind
fn kind_mismatch(expected: DeclKind, decl: &Declaration) -> ApiSurfaceError {
    ApiSurfaceError::KindMismatch {
        expected,
        actual: decl.detail.kind(),
    }
}

/// Render `<T, U extends V>`-style type parameter lists shared by the class
/// and interface formatters
fn push_type_params(sig: &mut String, type_params: &[String]) {
    use crate::sanitize::sanitize_inline;

    if type_params.is_empty() {
        return;
    }
    sig.push('<');
    let params: Vec<String> = type_params.iter().map(|p| sanitize_inline(p)).collect();
    sig.push_str(&params.join(", "));
    sig.push('>');
}
