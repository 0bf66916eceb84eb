//! Documentation tag parser
//!
//! Converts raw `/** ... */` comment blocks into an ordered list of tag
//! entries. A line starting with `@` opens a new entry; other lines continue
//! the currently open entry, and leading free text becomes a synthetic
//! `info` entry. The parser never fails on malformed text: any line that is
//! not a tag start is a continuation, so the worst outcome is oddly-grouped
//! output, never an error.

use crate::sanitize::normalize_line_endings;
use crate::schema::TagEntry;

/// Parser state: either no entry is open, or lines continue the entry at the
/// recorded index.
enum OpenEntry {
    None,
    At(usize),
}

/// Parse every documentation block attached to one declaration.
///
/// Blocks are processed in source order and their entries concatenated. Tag
/// indices are not reset to merge same-named tags across blocks; each block's
/// entries stay separate in the output order.
pub fn parse_doc_blocks(blocks: &[String]) -> Vec<TagEntry> {
    let mut entries = Vec::new();
    for block in blocks {
        entries.extend(parse_block(block));
    }
    entries
}

/// Parse a single documentation block, delimiters included
pub fn parse_block(block: &str) -> Vec<TagEntry> {
    let mut entries: Vec<TagEntry> = Vec::new();
    let mut open = OpenEntry::None;

    for line in block_lines(block) {
        if let Some(rest) = line.strip_prefix('@') {
            let (name, description) = split_tag_line(rest);
            let mut entry = TagEntry::new(name);
            if !description.is_empty() {
                entry.lines.push(description.to_string());
            }
            entries.push(entry);
            open = OpenEntry::At(entries.len() - 1);
        } else {
            match open {
                OpenEntry::At(index) => entries[index].lines.push(line),
                OpenEntry::None => {
                    // Leading free text: open the implicit info entry on the
                    // first non-empty line. Blanks before any content are
                    // skipped so they cannot create an empty entry.
                    if !line.is_empty() {
                        let mut entry = TagEntry::new("info");
                        entry.lines.push(line);
                        entries.push(entry);
                        open = OpenEntry::At(entries.len() - 1);
                    }
                }
            }
        }
    }

    for entry in &mut entries {
        entry.trim_trailing_blanks();
    }
    entries
}

/// Split a block into content lines: drop the opening delimiter line, strip
/// the closing delimiter, and strip each line's leading `*` marker and
/// surrounding whitespace.
fn block_lines(block: &str) -> Vec<String> {
    let normalized = normalize_line_endings(block);
    let body = normalized
        .trim_end()
        .strip_suffix("*/")
        .unwrap_or(&normalized);

    let mut lines = Vec::new();
    for (i, raw) in body.split('\n').enumerate() {
        let line = raw.trim();
        if i == 0 {
            // Opening delimiter line. A one-line comment keeps the text after
            // the delimiter.
            let rest = line.trim_start_matches('/').trim_start_matches('*').trim();
            if !rest.is_empty() {
                lines.push(rest.to_string());
            }
            continue;
        }
        let line = line.strip_prefix('*').unwrap_or(line).trim();
        lines.push(line.to_string());
    }
    lines
}

/// Split `@tag` line remainder into the tag name and its optional inline
/// description (the first whitespace run is the separator)
fn split_tag_line(rest: &str) -> (&str, &str) {
    match rest.find(char::is_whitespace) {
        Some(pos) => (&rest[..pos], rest[pos..].trim()),
        None => (rest, ""),
    }
}
