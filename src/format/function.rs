//! Function signature formatter

use crate::decl::{DeclDetail, Declaration};
use crate::error::Result;
use crate::sanitize::sanitize_inline;
use crate::schema::DeclKind;

use super::kind_mismatch;

/// Leading tokens stripped down to the bare `function name(...)` shape
const PREFIX_TOKENS: &[&str] = &["export", "default", "declare"];

/// Synthesize a function signature from the body-stripped declaration text
pub(super) fn format(decl: &Declaration) -> Result<String> {
    let DeclDetail::Function { text_without_body } = &decl.detail else {
        return Err(kind_mismatch(DeclKind::Function, decl));
    };

    let mut sig = sanitize_inline(text_without_body);
    loop {
        let Some(stripped) = strip_prefix_token(&sig) else {
            break;
        };
        sig = stripped;
    }
    Ok(sig.trim_end_matches(';').trim().to_string())
}

/// Remove one leading export/visibility prefix token, if present
fn strip_prefix_token(sig: &str) -> Option<String> {
    for token in PREFIX_TOKENS {
        if let Some(rest) = sig.strip_prefix(token) {
            if rest.starts_with(char::is_whitespace) {
                return Some(rest.trim_start().to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix_token_requires_word_boundary() {
        // "exported" is an identifier, not the export keyword
        assert!(strip_prefix_token("exported(): void").is_none());
        assert_eq!(
            strip_prefix_token("export function f(): void").as_deref(),
            Some("function f(): void")
        );
    }
}
