//! Single-pass scanner for the comma/parenthesis field notation.
//!
//! The accepted grammar:
//!
//! ```text
//! forest := entry (',' entry)*
//! entry  := name ('(' forest ')')?
//! name   := any run of characters excluding ',' '(' ')'
//! ```
//!
//! One left-to-right scan tracks a pending text buffer and the parenthesis
//! depth. Groups nested deeper than the current level are accumulated as
//! raw text and handed to a recursive call once their top-level close is
//! found, so only depth transitions through 0 are ever matched structurally.

use tracing::instrument;

use crate::item::Item;

/// Parse field notation into a forest of items.
///
/// Never fails: whitespace around names and commas is trimmed, empty
/// entries from stray commas are dropped, and unbalanced parentheses
/// degrade to a best-effort partial structure.
#[instrument(level = "debug", skip(input))]
pub fn parse(input: &str) -> Vec<Item> {
    let mut items: Vec<Item> = Vec::new();
    let mut buffer = String::new();
    // Signed: a stray ')' drives depth negative, which keeps the depth-0
    // rules disarmed for the rest of the scan.
    let mut depth: i32 = 0;

    for ch in input.chars() {
        match ch {
            '(' => {
                if depth == 0 {
                    let name = buffer.trim();
                    if !name.is_empty() {
                        items.push(Item::Node {
                            name: name.to_string(),
                            children: Vec::new(),
                        });
                        buffer.clear();
                    }
                }
                buffer.push('(');
                depth += 1;
            }
            ')' => {
                depth -= 1;
                buffer.push(')');
                if depth == 0 {
                    let children = parse(strip_outer_parens(&buffer));
                    match items.last_mut() {
                        Some(Item::Node { children: slot, .. }) => *slot = children,
                        // Close with no preceding named group: the parsed
                        // children take over the whole sequence.
                        _ => items = children,
                    }
                    buffer.clear();
                }
            }
            ',' if depth == 0 => {
                let name = buffer.trim();
                if !name.is_empty() {
                    items.push(Item::Leaf(name.to_string()));
                }
                buffer.clear();
            }
            _ => buffer.push(ch),
        }
    }

    let name = buffer.trim();
    if !name.is_empty() {
        items.push(Item::Leaf(name.to_string()));
    }
    items
}

/// Trim a buffered group and strip its outermost parenthesis pair.
fn strip_outer_parens(buffer: &str) -> &str {
    let trimmed = buffer.trim();
    let trimmed = trimmed.strip_prefix('(').unwrap_or(trimmed);
    trimmed.strip_suffix(')').unwrap_or(trimmed)
}
