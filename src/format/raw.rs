//! Raw-text formatters: type aliases, enums, and the fallback

use crate::decl::{DeclDetail, Declaration};
use crate::error::Result;
use crate::sanitize::{normalize_line_endings, sanitize_block};
use crate::schema::DeclKind;

use super::kind_mismatch;

/// Sanitized declaration text with the export keyword removed, trimmed
pub(super) fn format_type_alias(decl: &Declaration) -> Result<String> {
    let DeclDetail::TypeAlias = &decl.detail else {
        return Err(kind_mismatch(DeclKind::TypeAlias, decl));
    };
    let text = sanitize_block(&decl.text);
    let text = text.strip_prefix("export ").unwrap_or(&text);
    Ok(text.trim().to_string())
}

/// Enum text passes through with line-ending normalization only.
///
/// Inline trailing comments on members are kept deliberately: they are the
/// only description mechanism enum members have.
pub(super) fn format_enum(decl: &Declaration) -> Result<String> {
    let DeclDetail::Enum = &decl.detail else {
        return Err(kind_mismatch(DeclKind::Enum, decl));
    };
    Ok(normalize_line_endings(&decl.text).trim().to_string())
}

/// Fallback for kinds without a dedicated formatter: sanitized raw text
pub(super) fn format_fallback(decl: &Declaration) -> String {
    sanitize_block(&decl.text)
}
