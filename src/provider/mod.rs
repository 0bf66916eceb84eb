//! Tree-sitter based TypeScript AST provider
//!
//! Parses entry-point files and builds the declaration snapshot the core
//! consumes. This is the only module that touches tree-sitter types; the
//! formatters and the aggregator never see a `Node`.
//!
//! Scope notes:
//! - Export enumeration walks top-level `export` statements in source order.
//! - Consecutive function overload signatures group under one symbol with
//!   the implementing declaration.
//! - Interface base references resolve against interface declarations in the
//!   same entry file; anything else stays unresolved.
//! - Variable type text is the annotation when present, a literal-shape
//!   guess from the initializer otherwise, `"unknown"` as a last resort.
//!   There is no semantic type resolution.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tree_sitter::{Language, Node, Parser};

use crate::decl::{
    BaseInterface, BaseRef, ClassMember, DeclDetail, Declaration, ExportedSymbol, ModuleExports,
    Visibility,
};
use crate::error::{ApiSurfaceError, Result};
use crate::schema::DeclKind;

/// Placeholder type text when neither an annotation nor a recognizable
/// initializer is available
const UNRESOLVED_TYPE: &str = "unknown";

/// Reusable TypeScript parser wrapping the tree-sitter grammar
pub struct SurfaceParser {
    parser: Parser,
}

impl SurfaceParser {
    /// Create a parser with the TypeScript grammar loaded
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into();
        parser
            .set_language(&language)
            .map_err(|e| ApiSurfaceError::ParseFailure {
                message: format!("Failed to load TypeScript grammar: {:?}", e),
            })?;
        Ok(Self { parser })
    }

    /// Parse one entry-point file into its exported surface.
    ///
    /// The module name derives from the entry point's containing directory.
    pub fn parse_entry(&mut self, path: &Path) -> Result<ModuleExports> {
        let source = fs::read_to_string(path)?;
        let name = module_name_from_path(path);
        self.parse_module(&name, &source)
    }

    /// Parse TypeScript source into the exported surface of a named module
    pub fn parse_module(&mut self, name: &str, source: &str) -> Result<ModuleExports> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ApiSurfaceError::ParseFailure {
                message: format!("Failed to parse module '{}'", name),
            })?;
        let root = tree.root_node();
        let registry = collect_interface_registry(&root, source);

        let mut symbols: Vec<ExportedSymbol> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut pending_docs: Vec<String> = Vec::new();

        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                "comment" => {
                    let text = node_text(&child, source);
                    if text.starts_with("/**") {
                        pending_docs.push(text);
                    } else {
                        pending_docs.clear();
                    }
                }
                "export_statement" => {
                    let docs = std::mem::take(&mut pending_docs);
                    if let Some(declaration) = child.child_by_field_name("declaration") {
                        add_exported_declaration(
                            &declaration,
                            source,
                            &registry,
                            docs,
                            &mut symbols,
                            &mut index,
                        );
                    }
                }
                _ => pending_docs.clear(),
            }
        }

        Ok(ModuleExports {
            name: name.to_string(),
            symbols,
        })
    }
}

/// Derive a module name from the entry point's containing directory
pub fn module_name_from_path(path: &Path) -> String {
    path.parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("root")
        .to_string()
}

// ============================================================================
// Export enumeration
// ============================================================================

/// Build declarations from one exported declaration node and bind them to
/// symbols, grouping function overloads under a single name
fn add_exported_declaration(
    node: &Node,
    source: &str,
    registry: &HashMap<String, Vec<String>>,
    docs: Vec<String>,
    symbols: &mut Vec<ExportedSymbol>,
    index: &mut HashMap<String, usize>,
) {
    match node.kind() {
        "function_declaration" | "function_signature" => {
            let Some(name) = field_text(node, "name", source) else {
                return;
            };
            let declaration = build_function(node, source).with_docs(docs);
            push_symbol(symbols, index, name, declaration);
        }
        "class_declaration" | "abstract_class_declaration" => {
            let Some(name) = field_text(node, "name", source) else {
                return;
            };
            let declaration = build_class(node, &name, source).with_docs(docs);
            push_symbol(symbols, index, name, declaration);
        }
        "interface_declaration" => {
            let Some(name) = field_text(node, "name", source) else {
                return;
            };
            let declaration = build_interface(node, &name, source, registry).with_docs(docs);
            push_symbol(symbols, index, name, declaration);
        }
        "type_alias_declaration" => {
            let Some(name) = field_text(node, "name", source) else {
                return;
            };
            let declaration =
                Declaration::new(DeclKind::TypeAlias, node_text(node, source), DeclDetail::TypeAlias)
                    .with_docs(docs);
            push_symbol(symbols, index, name, declaration);
        }
        "enum_declaration" => {
            let Some(name) = field_text(node, "name", source) else {
                return;
            };
            let declaration =
                Declaration::new(DeclKind::Enum, node_text(node, source), DeclDetail::Enum)
                    .with_docs(docs);
            push_symbol(symbols, index, name, declaration);
        }
        "lexical_declaration" | "variable_declaration" => {
            let mut cursor = node.walk();
            for declarator in node.named_children(&mut cursor) {
                if declarator.kind() != "variable_declarator" {
                    continue;
                }
                let Some(name) = field_text(&declarator, "name", source) else {
                    continue;
                };
                let declaration =
                    build_variable(node, &declarator, &name, source).with_docs(docs.clone());
                push_symbol(symbols, index, name, declaration);
            }
        }
        _ => {
            // Kinds without a dedicated formatter still surface, by raw text,
            // when they carry a name.
            let Some(name) = field_text(node, "name", source) else {
                return;
            };
            let declaration =
                Declaration::new(DeclKind::Other, node_text(node, source), DeclDetail::Other)
                    .with_docs(docs);
            push_symbol(symbols, index, name, declaration);
        }
    }
}

/// Append a declaration to an existing symbol of the same name (overloads)
/// or open a new symbol, preserving source order
fn push_symbol(
    symbols: &mut Vec<ExportedSymbol>,
    index: &mut HashMap<String, usize>,
    name: String,
    declaration: Declaration,
) {
    if let Some(&at) = index.get(&name) {
        symbols[at].declarations.push(declaration);
    } else {
        index.insert(name.clone(), symbols.len());
        symbols.push(ExportedSymbol {
            name,
            declarations: vec![declaration],
        });
    }
}

// ============================================================================
// Per-kind declaration builders
// ============================================================================

fn build_function(node: &Node, source: &str) -> Declaration {
    let text = node_text(node, source);
    let text_without_body = text_without_field(node, "body", source);
    Declaration::new(
        DeclKind::Function,
        text,
        DeclDetail::Function { text_without_body },
    )
}

fn build_class(node: &Node, name: &str, source: &str) -> Declaration {
    let type_params = type_parameter_texts(node, source);
    let mut base = None;
    let mut implements = Vec::new();

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() != "class_heritage" {
            continue;
        }
        let mut heritage_cursor = child.walk();
        for clause in child.named_children(&mut heritage_cursor) {
            match clause.kind() {
                "extends_clause" => {
                    let text = node_text(&clause, source);
                    let stripped = text.trim_start_matches("extends").trim().to_string();
                    if !stripped.is_empty() {
                        base = Some(stripped);
                    }
                }
                "implements_clause" => {
                    implements = clause_type_texts(&clause, source);
                }
                _ => {}
            }
        }
    }

    let mut members = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        let mut body_cursor = body.walk();
        for member in body.named_children(&mut body_cursor) {
            match member.kind() {
                "method_definition" => {
                    members.push(ClassMember::method(
                        member_visibility(&member, source),
                        node_text(&member, source),
                        text_without_field(&member, "body", source),
                    ));
                }
                "method_signature" | "abstract_method_signature" => {
                    members.push(ClassMember::method(
                        member_visibility(&member, source),
                        node_text(&member, source),
                        node_text(&member, source),
                    ));
                }
                "public_field_definition" | "field_definition" => {
                    members.push(ClassMember::property(
                        member_visibility(&member, source),
                        node_text(&member, source),
                    ));
                }
                _ => {}
            }
        }
    }

    Declaration::new(
        DeclKind::Class,
        node_text(node, source),
        DeclDetail::Class {
            name: name.to_string(),
            type_params,
            base,
            implements,
            members,
        },
    )
}

fn build_interface(
    node: &Node,
    name: &str,
    source: &str,
    registry: &HashMap<String, Vec<String>>,
) -> Declaration {
    let type_params = type_parameter_texts(node, source);
    let properties = interface_property_texts(node, source);

    let mut bases = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        // Interface heritage: `extends_type_clause` in current grammars,
        // `extends_clause` in older ones.
        if !matches!(child.kind(), "extends_type_clause" | "extends_clause") {
            continue;
        }
        let mut clause_cursor = child.walk();
        for base in child.named_children(&mut clause_cursor) {
            if base.kind() == "type_arguments" {
                continue;
            }
            let text = node_text(&base, source);
            let bare = base_bare_name(&base, source);
            bases.push(BaseRef {
                name: text,
                interface: registry.get(&bare).map(|properties| BaseInterface {
                    properties: properties.clone(),
                }),
            });
        }
    }

    Declaration::new(
        DeclKind::Interface,
        node_text(node, source),
        DeclDetail::Interface {
            name: name.to_string(),
            type_params,
            properties,
            bases,
        },
    )
}

fn build_variable(
    statement: &Node,
    declarator: &Node,
    name: &str,
    source: &str,
) -> Declaration {
    let type_text = match declarator.child_by_field_name("type") {
        Some(annotation) => {
            let text = node_text(&annotation, source);
            text.trim_start_matches(':').trim().to_string()
        }
        None => match declarator.child_by_field_name("value") {
            Some(value) => literal_type_text(&value),
            None => UNRESOLVED_TYPE.to_string(),
        },
    };

    Declaration::new(
        DeclKind::Variable,
        node_text(statement, source),
        DeclDetail::Variable {
            name: name.to_string(),
            type_text,
        },
    )
}

/// Guess a type text from an initializer's literal shape.
///
/// This is deliberately shallow: anything that is not an obvious literal
/// stays `unknown`, since real type resolution is out of scope.
fn literal_type_text(value: &Node) -> String {
    match value.kind() {
        "string" | "template_string" => "string",
        "number" => "number",
        "true" | "false" => "boolean",
        "null" => "null",
        "array" => "unknown[]",
        "object" => "object",
        _ => UNRESOLVED_TYPE,
    }
    .to_string()
}

// ============================================================================
// Interface registry for base resolution
// ============================================================================

/// Map every interface declared in the file (exported or not) to its own
/// property texts, for single-level base flattening
fn collect_interface_registry(root: &Node, source: &str) -> HashMap<String, Vec<String>> {
    let mut registry = HashMap::new();
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        let interface = if child.kind() == "interface_declaration" {
            Some(child)
        } else if child.kind() == "export_statement" {
            child
                .child_by_field_name("declaration")
                .filter(|d| d.kind() == "interface_declaration")
        } else {
            None
        };
        let Some(interface) = interface else {
            continue;
        };
        if let Some(name) = field_text(&interface, "name", source) {
            registry.insert(name, interface_property_texts(&interface, source));
        }
    }
    registry
}

/// An interface's own property declaration texts, in source order
fn interface_property_texts(node: &Node, source: &str) -> Vec<String> {
    let mut properties = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            if member.kind() == "property_signature" {
                properties.push(node_text(&member, source));
            }
        }
    }
    properties
}

/// Bare base name for registry lookup: the name part of a generic type,
/// otherwise the node text itself
fn base_bare_name(node: &Node, source: &str) -> String {
    if node.kind() == "generic_type" {
        if let Some(name) = field_text(node, "name", source) {
            return name;
        }
    }
    node_text(node, source)
}

// ============================================================================
// Node helpers
// ============================================================================

/// Get text content of a node
fn node_text(node: &Node, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or("").to_string()
}

/// Text of a named field's node, when present
fn field_text(node: &Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .map(|n| node_text(&n, source))
}

/// Node text with the given field's span excluded, for body removal.
///
/// A synthesized copy of the source slice; the tree itself is never touched,
/// so formatting one overload cannot affect another's view.
fn text_without_field(node: &Node, field: &str, source: &str) -> String {
    match node.child_by_field_name(field) {
        Some(child) => source
            .get(node.start_byte()..child.start_byte())
            .unwrap_or("")
            .to_string(),
        None => node_text(node, source),
    }
}

/// Texts of a declaration's type parameters, in order
fn type_parameter_texts(node: &Node, source: &str) -> Vec<String> {
    let mut params = Vec::new();
    if let Some(list) = node.child_by_field_name("type_parameters") {
        let mut cursor = list.walk();
        for param in list.named_children(&mut cursor) {
            if param.kind() == "type_parameter" {
                params.push(node_text(&param, source));
            }
        }
    }
    params
}

/// Entry texts of an implements clause, merging detached type-argument nodes
/// into the preceding entry
fn clause_type_texts(clause: &Node, source: &str) -> Vec<String> {
    let mut texts: Vec<String> = Vec::new();
    let mut cursor = clause.walk();
    for child in clause.named_children(&mut cursor) {
        let text = node_text(&child, source);
        if child.kind() == "type_arguments" {
            if let Some(last) = texts.last_mut() {
                last.push_str(&text);
            }
        } else {
            texts.push(text);
        }
    }
    texts
}

/// Visibility from an explicit accessibility modifier; public by default
fn member_visibility(member: &Node, source: &str) -> Visibility {
    let mut cursor = member.walk();
    for child in member.named_children(&mut cursor) {
        if child.kind() == "accessibility_modifier" {
            return match node_text(&child, source).as_str() {
                "private" => Visibility::Private,
                "protected" => Visibility::Protected,
                _ => Visibility::Public,
            };
        }
    }
    Visibility::Public
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> ModuleExports {
        let mut parser = SurfaceParser::new().unwrap();
        parser.parse_module("test", source).unwrap()
    }

    #[test]
    fn test_exported_function_with_docs() {
        let module = parse(
            r#"
/**
 * Greets a user.
 * @param name who to greet
 */
export function greet(name: string): string {
  return `hi ${name}`;
}
"#,
        );
        assert_eq!(module.symbols.len(), 1);
        let symbol = &module.symbols[0];
        assert_eq!(symbol.name, "greet");
        let decl = &symbol.declarations[0];
        assert_eq!(decl.kind, DeclKind::Function);
        assert_eq!(decl.docs.len(), 1);
        assert!(decl.docs[0].contains("@param name"));
        let DeclDetail::Function { text_without_body } = &decl.detail else {
            panic!("expected function detail");
        };
        assert!(text_without_body.contains("greet(name: string): string"));
        assert!(!text_without_body.contains("return"));
    }

    #[test]
    fn test_overloads_group_under_one_symbol() {
        let module = parse(
            r#"
export function pick(v: string): string;
export function pick(v: number): number;
export function pick(v: unknown): unknown {
  return v;
}
"#,
        );
        assert_eq!(module.symbols.len(), 1);
        assert_eq!(module.symbols[0].declarations.len(), 3);
    }

    #[test]
    fn test_overload_docs_stay_per_declaration() {
        let module = parse(
            r#"
/** String form. */
export function pick(v: string): string;
/** Number form. */
export function pick(v: number): number;
export function pick(v: unknown): unknown {
  return v;
}
"#,
        );
        let declarations = &module.symbols[0].declarations;
        assert!(declarations[0].docs[0].contains("String form"));
        assert!(declarations[1].docs[0].contains("Number form"));
        assert!(declarations[2].docs.is_empty());
    }

    #[test]
    fn test_non_doc_comment_breaks_attachment() {
        let module = parse(
            "/** Real docs. */\n// a stray note\nexport function f(): void {}\n",
        );
        assert!(module.symbols[0].declarations[0].docs.is_empty());
    }

    #[test]
    fn test_class_members_and_heritage() {
        let module = parse(
            r#"
export class Button extends Base implements Clickable {
  label: string;
  private secret: number;
  click(): void { this.fire(); }
  protected fire(): void {}
}
"#,
        );
        let decl = &module.symbols[0].declarations[0];
        let DeclDetail::Class {
            name,
            base,
            implements,
            members,
            ..
        } = &decl.detail
        else {
            panic!("expected class detail");
        };
        assert_eq!(name, "Button");
        assert_eq!(base.as_deref(), Some("Base"));
        assert_eq!(implements, &vec!["Clickable".to_string()]);
        assert_eq!(members.len(), 4);
        assert_eq!(members[0].visibility, Visibility::Public);
        assert!(!members[0].is_method());
        assert_eq!(members[1].visibility, Visibility::Private);
        assert_eq!(members[2].visibility, Visibility::Public);
        assert!(members[2].is_method());
        let method = members[2].text_without_body.as_deref().unwrap();
        assert!(!method.contains("fire()"));
        assert_eq!(members[3].visibility, Visibility::Protected);
    }

    #[test]
    fn test_interface_bases_resolve_one_level() {
        let module = parse(
            r#"
interface A { x: number }
interface B extends A { y: string }
export interface C extends B { z: boolean }
"#,
        );
        let decl = &module.symbols[0].declarations[0];
        let DeclDetail::Interface {
            properties, bases, ..
        } = &decl.detail
        else {
            panic!("expected interface detail");
        };
        assert_eq!(properties, &vec!["z: boolean".to_string()]);
        assert_eq!(bases.len(), 1);
        assert_eq!(bases[0].name, "B");
        let base = bases[0].interface.as_ref().unwrap();
        // Only B's own properties, never A's.
        assert_eq!(base.properties, vec!["y: string".to_string()]);
    }

    #[test]
    fn test_interface_base_to_class_is_unresolved() {
        let module = parse(
            r#"
class Widget { label: string; }
export interface Fancy extends Widget { depth: number }
"#,
        );
        let decl = &module.symbols[0].declarations[0];
        let DeclDetail::Interface { bases, .. } = &decl.detail else {
            panic!("expected interface detail");
        };
        assert_eq!(bases.len(), 1);
        assert!(bases[0].interface.is_none());
    }

    #[test]
    fn test_variable_annotation_and_literal_guess() {
        let module = parse(
            r#"
export const VERSION: string = '1.0';
export const COUNT = 42;
export const MYSTERY = makeThing();
"#,
        );
        let type_of = |i: usize| {
            let DeclDetail::Variable { type_text, .. } = &module.symbols[i].declarations[0].detail
            else {
                panic!("expected variable detail");
            };
            type_text.clone()
        };
        assert_eq!(module.symbols.len(), 3);
        assert_eq!(type_of(0), "string");
        assert_eq!(type_of(1), "number");
        assert_eq!(type_of(2), "unknown");
    }

    #[test]
    fn test_enum_text_keeps_member_comments() {
        let module = parse(
            "export enum Direction {\n  Up = 1, // towards the top\n  Down,\n}\n",
        );
        let decl = &module.symbols[0].declarations[0];
        assert_eq!(decl.kind, DeclKind::Enum);
        assert!(decl.text.contains("// towards the top"));
    }

    #[test]
    fn test_type_alias_export() {
        let module = parse("export type Size = 'small' | 'large';\n");
        let decl = &module.symbols[0].declarations[0];
        assert_eq!(decl.kind, DeclKind::TypeAlias);
        assert!(decl.text.starts_with("type Size"));
    }

    #[test]
    fn test_enumeration_preserves_source_order() {
        let module = parse(
            r#"
export const zeta = 1;
export function alpha(): void {}
export interface Mid { a: number }
"#,
        );
        let names: Vec<&str> = module.symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "Mid"]);
    }

    #[test]
    fn test_module_name_from_path() {
        assert_eq!(
            module_name_from_path(Path::new("/pkg/button/index.ts")),
            "button"
        );
        assert_eq!(module_name_from_path(Path::new("index.ts")), "root");
    }
}
