//! Module aggregation: exported symbols in, API records out
//!
//! A single synchronous pass over the provider's snapshot. Modules are
//! processed independently and their record lists concatenated in
//! enumeration order, so output ordering is fully determined by source
//! declaration order and runs are byte-for-byte reproducible.

use crate::decl::ModuleExports;
use crate::error::Result;
use crate::format::format_declaration;
use crate::schema::ApiRecord;
use crate::tags::parse_doc_blocks;

/// Build the records for one module's exported surface.
///
/// Every declaration bound to a symbol is formatted (one signature per
/// overload), so `signatures.len()` always equals the declaration count.
/// The information list comes from the first declaration only; documentation
/// on later overloads is not captured. That mirrors the upstream renderer's
/// record shape and is a documented limitation, not something to widen
/// silently.
pub fn collect_module(module: &ModuleExports) -> Result<Vec<ApiRecord>> {
    let mut records = Vec::with_capacity(module.symbols.len());

    for symbol in &module.symbols {
        let Some(first) = symbol.declarations.first() else {
            // Provider contract: the sequence is non-empty.
            continue;
        };

        let mut signatures = Vec::with_capacity(symbol.declarations.len());
        for declaration in &symbol.declarations {
            signatures.push(format_declaration(declaration)?);
        }

        let information = if first.kind.carries_docs() {
            parse_doc_blocks(&first.docs)
        } else {
            Vec::new()
        };

        records.push(ApiRecord {
            module: module.name.clone(),
            api: symbol.name.clone(),
            kind: first.kind,
            signatures,
            information,
        });
    }

    Ok(records)
}

/// Concatenate all modules' record lists into the final ordered payload
pub fn collect_api(modules: &[ModuleExports]) -> Result<Vec<ApiRecord>> {
    let mut records = Vec::new();
    for module in modules {
        records.extend(collect_module(module)?);
    }
    Ok(records)
}
