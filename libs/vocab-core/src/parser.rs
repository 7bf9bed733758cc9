//! Parser for plain-text vocabulary lists.
//!
//! # Format
//! ```text
//! [verbs] to run: courir
//! cat: chat
//! time: temps: durée
//! ```
//!
//! An optional leading `[tag]` is dropped. The first `:` separates the source
//! term from the target term; any further colons belong to the target.
//! Blank lines, lines without a colon and lines with an empty side are skipped.

use crate::types::WordPair;

/// Parse vocabulary text into word pairs. Never fails; malformed lines are skipped.
pub fn parse(content: &str) -> Vec<WordPair> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<WordPair> {
    let line = strip_tag(line.trim());
    let (source, target) = line.split_once(':')?;
    let source = source.trim();
    let target = target.trim();

    if source.is_empty() || target.is_empty() {
        return None;
    }

    Some(WordPair::new(source, target))
}

/// Drop a leading `[...]` prefix. A line with an unclosed bracket is kept as is.
fn strip_tag(line: &str) -> &str {
    if !line.starts_with('[') {
        return line;
    }
    match line.find(']') {
        Some(end) => line[end + 1..].trim(),
        None => line,
    }
}
