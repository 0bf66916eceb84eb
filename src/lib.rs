//! api-surface: TypeScript API surface extraction
//!
//! This library extracts the exported API surface of TypeScript packages into
//! a flat, deterministic list of records. It uses tree-sitter for parsing,
//! renders one compact signature per exported declaration (one per overload),
//! flattens directly-extended interface bases one level deep, and parses
//! leading doc comments into tagged information entries.
//!
//! # Pipeline
//!
//! - Discover package entry points (`<root>/<package>/index.ts`)
//! - Parse each entry into its exported declarations
//! - Format per-kind signatures and doc-comment tag entries
//! - Aggregate everything into one ordered record list
//!
//! # Example
//!
//! ```ignore
//! use api_surface::{collect_api, SurfaceParser};
//!
//! let source = r#"
//! /** Greets a user. */
//! export function greet(name: string): string {
//!     return `hi ${name}`;
//! }
//! "#;
//!
//! let mut parser = SurfaceParser::new()?;
//! let module = parser.parse_module("greeter", source)?;
//! let records = collect_api(&[module])?;
//! println!("{}", serde_json::to_string_pretty(&records)?);
//! ```

pub mod aggregate;
pub mod cli;
pub mod decl;
pub mod discover;
pub mod error;
pub mod format;
pub mod provider;
pub mod sanitize;
pub mod schema;
pub mod tags;

// Re-export commonly used types
pub use aggregate::{collect_api, collect_module};
pub use cli::Cli;
pub use decl::{
    BaseInterface, BaseRef, ClassMember, DeclDetail, Declaration, ExportedSymbol, ModuleExports,
    Visibility,
};
pub use discover::discover_entries;
pub use error::{ApiSurfaceError, Result};
pub use format::format_declaration;
pub use provider::SurfaceParser;
pub use schema::{ApiRecord, DeclKind, TagEntry};
pub use tags::{parse_block, parse_doc_blocks};
