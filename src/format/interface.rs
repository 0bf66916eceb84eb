//! Interface signature formatter with one-level base flattening

use crate::decl::{DeclDetail, Declaration};
use crate::error::Result;
use crate::sanitize::sanitize_inline;
use crate::schema::DeclKind;

use super::{kind_mismatch, push_type_params};

/// Assemble `interface Name<T> { ... }` with the interface's own properties
/// followed by each directly-extended base's own properties.
///
/// Flattening is one level deep: a base contributes only its own properties,
/// never anything it inherits in turn, and bases that did not resolve to an
/// interface contribute nothing.
pub(super) fn format(decl: &Declaration) -> Result<String> {
    let DeclDetail::Interface {
        name,
        type_params,
        properties,
        bases,
    } = &decl.detail
    else {
        return Err(kind_mismatch(DeclKind::Interface, decl));
    };

    let mut sig = String::from("interface ");
    sig.push_str(name);
    push_type_params(&mut sig, type_params);

    let mut lines: Vec<String> = properties.iter().map(|p| sanitize_inline(p)).collect();
    for base in bases {
        let Some(base_interface) = &base.interface else {
            continue;
        };
        lines.push(format!("// from {}", base.name));
        lines.extend(base_interface.properties.iter().map(|p| sanitize_inline(p)));
    }

    if lines.is_empty() {
        sig.push_str(" {}");
    } else {
        sig.push_str(" {\n");
        sig.push_str(&lines.join("\n"));
        sig.push_str("\n}");
    }

    Ok(sig)
}
