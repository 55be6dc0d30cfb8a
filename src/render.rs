//! Renderers for a parsed forest: the indented hierarchy dump and a
//! box-drawing tree via termtree.

use std::io::{self, Write};

use termtree::Tree;

use crate::item::Item;

/// Unit of indentation in the hierarchy dump.
const INDENT: &str = "  ";

/// Write the indented hierarchy dump: one `- name` line per item, children
/// one indent level deeper than their parent, depth-first.
pub fn write_items<W: Write>(out: &mut W, items: &[Item], indent: usize) -> io::Result<()> {
    for item in items {
        writeln!(out, "{}- {}", INDENT.repeat(indent), item.name())?;
        if let Item::Node { children, .. } = item {
            write_items(out, children, indent + 1)?;
        }
    }
    Ok(())
}

/// Dump the forest to stdout, starting at indent 0.
pub fn print_items(items: &[Item]) -> io::Result<()> {
    let stdout = io::stdout();
    write_items(&mut stdout.lock(), items, 0)
}

/// Render the hierarchy dump into a string.
pub fn render(items: &[Item]) -> String {
    let mut out = Vec::new();
    write_items(&mut out, items, 0).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("dump is valid UTF-8")
}

/// Conversion into a termtree rendering.
pub trait ToTree {
    fn to_tree(&self) -> Tree<String>;
}

impl ToTree for Item {
    fn to_tree(&self) -> Tree<String> {
        // Recursively construct the children
        let leaves: Vec<_> = self.children().iter().map(|c| c.to_tree()).collect();

        Tree::new(self.name().to_string()).with_leaves(leaves)
    }
}
