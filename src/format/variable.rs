//! Variable signature formatter

use crate::decl::{DeclDetail, Declaration};
use crate::error::Result;
use crate::sanitize::normalize_line_endings;
use crate::schema::DeclKind;

use super::kind_mismatch;

/// Render `const name: ResolvedTypeText`.
///
/// The type text is opaque provider output: only line endings are normalized,
/// the expression itself is never reinterpreted.
pub(super) fn format(decl: &Declaration) -> Result<String> {
    let DeclDetail::Variable { name, type_text } = &decl.detail else {
        return Err(kind_mismatch(DeclKind::Variable, decl));
    };
    Ok(format!("const {}: {}", name, normalize_line_endings(type_text)))
}
