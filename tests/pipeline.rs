//! End-to-end pipeline tests over a real package tree on disk

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use api_surface::{collect_api, discover_entries, ApiRecord, DeclKind, SurfaceParser};

fn write_package(root: &Path, name: &str, source: &str) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.ts"), source).unwrap();
}

fn build_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_package(
        temp.path(),
        "button",
        r#"
/**
 * A clickable thing.
 * @remarks Stable since 1.0.
 */
export interface ButtonProps extends BaseProps {
  label: string;
}

interface BaseProps {
  id: string;
}

export function render(props: ButtonProps): string {
  return props.label;
}
"#,
    );
    write_package(
        temp.path(),
        "util",
        r#"
export function pick(v: string): string;
export function pick(v: number): number;
export function pick(v: unknown): unknown {
  return v;
}

export const VERSION: string = '1.0.0';
"#,
    );
    temp
}

fn extract(root: &Path) -> Vec<ApiRecord> {
    let entries = discover_entries(root).unwrap();
    let mut parser = SurfaceParser::new().unwrap();
    let modules: Vec<_> = entries
        .iter()
        .map(|e| parser.parse_entry(e).unwrap())
        .collect();
    collect_api(&modules).unwrap()
}

#[test]
fn test_full_pipeline_over_package_tree() {
    let temp = build_tree();
    let records = extract(temp.path());

    // Packages sorted, symbols in source order within each.
    let keys: Vec<(&str, &str)> = records
        .iter()
        .map(|r| (r.module.as_str(), r.api.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("button", "ButtonProps"),
            ("button", "render"),
            ("util", "pick"),
            ("util", "VERSION"),
        ]
    );

    let props = &records[0];
    assert_eq!(props.kind, DeclKind::Interface);
    assert_eq!(props.signatures.len(), 1);
    assert!(props.signatures[0].starts_with("interface ButtonProps {"));
    assert!(props.signatures[0].contains("label: string"));
    assert!(props.signatures[0].contains("// from BaseProps"));
    assert!(props.signatures[0].contains("id: string"));

    let render = &records[1];
    assert_eq!(render.kind, DeclKind::Function);
    assert_eq!(
        render.signatures[0],
        "function render(props: ButtonProps): string"
    );

    let pick = &records[2];
    assert_eq!(pick.signatures.len(), 3);
    assert_eq!(pick.signatures[0], "function pick(v: string): string");
    assert_eq!(pick.signatures[2], "function pick(v: unknown): unknown");

    let version = &records[3];
    assert_eq!(version.kind, DeclKind::Variable);
    assert_eq!(version.signatures[0], "const VERSION: string");
    assert!(version.information.is_empty());
}

#[test]
fn test_doc_information_survives_to_records() {
    let temp = build_tree();
    let records = extract(temp.path());

    let props = &records[0];
    assert_eq!(props.information.len(), 2);
    assert_eq!(props.information[0].name, "info");
    assert_eq!(props.information[0].lines, vec!["A clickable thing."]);
    assert_eq!(props.information[1].name, "remarks");
    assert_eq!(props.information[1].lines, vec!["Stable since 1.0."]);
}

#[test]
fn test_json_payload_shape() {
    let temp = build_tree();
    let records = extract(temp.path());
    let payload = serde_json::to_string_pretty(&records).unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

    let first = &value[0];
    assert_eq!(first["module"], "button");
    assert_eq!(first["kind"], "interface");
    // Tag entries serialize as flat arrays: [name, line, line, ...].
    assert_eq!(first["information"][0][0], "info");
    assert_eq!(first["information"][0][1], "A clickable thing.");
    assert_eq!(first["information"][1][0], "remarks");

    assert_eq!(value[3]["kind"], "variable");
}

#[test]
fn test_runs_are_byte_identical() {
    let temp = build_tree();
    let first = serde_json::to_string_pretty(&extract(temp.path())).unwrap();
    let second = serde_json::to_string_pretty(&extract(temp.path())).unwrap();
    assert_eq!(first, second);
}
