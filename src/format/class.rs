//! Class signature formatter

use crate::decl::{DeclDetail, Declaration};
use crate::error::Result;
use crate::sanitize::sanitize_inline;
use crate::schema::DeclKind;

use super::{kind_mismatch, push_type_params};

/// Assemble `class Name<T> extends Base implements I1, I2 { ... }` from the
/// class payload, keeping only public members and stripping method bodies
pub(super) fn format(decl: &Declaration) -> Result<String> {
    let DeclDetail::Class {
        name,
        type_params,
        base,
        implements,
        members,
    } = &decl.detail
    else {
        return Err(kind_mismatch(DeclKind::Class, decl));
    };

    let mut sig = String::from("class ");
    sig.push_str(name);
    push_type_params(&mut sig, type_params);

    if let Some(base) = base {
        sig.push_str(" extends ");
        sig.push_str(&sanitize_inline(base));
    }

    if !implements.is_empty() {
        sig.push_str(" implements ");
        let names: Vec<String> = implements.iter().map(|i| sanitize_inline(i)).collect();
        sig.push_str(&names.join(", "));
    }

    // A member with no explicit visibility modifier defaults to public.
    let properties: Vec<String> = members
        .iter()
        .filter(|m| m.visibility.is_public() && !m.is_method())
        .map(|m| sanitize_inline(&m.text))
        .collect();
    let methods: Vec<String> = members
        .iter()
        .filter(|m| m.visibility.is_public())
        .filter_map(|m| m.text_without_body.as_deref())
        .map(sanitize_inline)
        .collect();

    if properties.is_empty() && methods.is_empty() {
        sig.push_str(" {}");
    } else {
        let mut blocks = Vec::new();
        if !properties.is_empty() {
            blocks.push(properties.join("\n"));
        }
        if !methods.is_empty() {
            blocks.push(methods.join("\n"));
        }
        sig.push_str(" {\n");
        sig.push_str(&blocks.join("\n\n"));
        sig.push_str("\n}");
    }

    Ok(sig)
}
