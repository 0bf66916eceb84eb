//! Text sanitization used by every signature formatter
//!
//! Three building blocks (line-ending normalization, line-comment stripping,
//! whitespace-run collapsing) plus the two combinations the formatters use.
//! All transforms are pure and idempotent: applying one twice yields the same
//! result as applying it once.

/// Normalize all line endings to `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Strip single-line comment content.
///
/// Text from a `//` marker to end of line is removed; a line that, after
/// trimming, starts with the marker is removed entirely.
pub fn strip_line_comments(text: &str) -> String {
    let mut out = Vec::new();
    for line in text.split('\n') {
        if line.trim_start().starts_with("//") {
            continue;
        }
        match line.find("//") {
            Some(pos) => out.push(line[..pos].trim_end()),
            None => out.push(line),
        }
    }
    out.join("\n")
}

/// Collapse every run of two or more consecutive whitespace characters to a
/// single replacement character.
///
/// When `collapse_newlines` is false, newlines are left intact and break
/// runs. When it is true, a run containing a newline is always replaced,
/// even a run of one: the output must read as a single line.
pub fn collapse_whitespace(text: &str, collapse_newlines: bool, replacement: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;
    let mut run_has_newline = false;
    let mut run_start = String::new();
    for c in text.chars() {
        let collapsible = c.is_whitespace() && (collapse_newlines || c != '\n');
        if collapsible {
            if run == 0 {
                run_start.clear();
                run_start.push(c);
            }
            run += 1;
            run_has_newline |= c == '\n';
        } else {
            flush_run(&mut out, run, run_has_newline, &run_start, replacement);
            run = 0;
            run_has_newline = false;
            out.push(c);
        }
    }
    flush_run(&mut out, run, run_has_newline, &run_start, replacement);
    out
}

/// A run of one keeps its original character unless it is a newline slated
/// for collapsing; longer runs become the replacement.
fn flush_run(out: &mut String, run: usize, has_newline: bool, run_start: &str, replacement: char) {
    match run {
        0 => {}
        1 if !has_newline => out.push_str(run_start),
        _ => out.push(replacement),
    }
}

/// Full sanitization to a single line: normalize endings, strip line
/// comments, collapse all whitespace runs (newlines included) to one space,
/// trim. Used for every signature fragment that must read as one line.
pub fn sanitize_inline(text: &str) -> String {
    let normalized = normalize_line_endings(text);
    let stripped = strip_line_comments(&normalized);
    collapse_whitespace(&stripped, true, ' ').trim().to_string()
}

/// Sanitization that preserves line structure: normalize endings, strip line
/// comments, collapse horizontal whitespace runs only, trim. Used where a
/// declaration's multi-line shape is part of its signature.
pub fn sanitize_block(text: &str) -> String {
    let normalized = normalize_line_endings(text);
    let stripped = strip_line_comments(&normalized);
    collapse_whitespace(&stripped, false, ' ').trim().to_string()
}
