//! Placeholder resolution: finding and rewriting marker text
//!
//! Every lookup walks the tree first and returns a snapshot of locations;
//! callers mutate afterwards. A marker that is not present is not an error.

use crate::tree::{for_each_paragraph, Block, RunContent, TreePath};

/// Position of a single text node
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TextLocation {
    /// Path of the paragraph holding the node
    pub paragraph: TreePath,
    /// Run index within the paragraph
    pub run: usize,
    /// Content index within the run
    pub item: usize,
}

impl TextLocation {
    pub fn enclosing_cell(&self) -> Option<TreePath> {
        self.paragraph.enclosing_cell()
    }
}

/// Every text node containing `marker`, in document order.
pub fn find_marker(blocks: &[Block], marker: &str) -> Vec<TextLocation> {
    let mut found = Vec::new();
    for_each_paragraph(blocks, |path, paragraph| {
        for (r, run) in paragraph.runs.iter().enumerate() {
            for (i, item) in run.content.iter().enumerate() {
                if let RunContent::Text(text) = item
                    && text.contains(marker)
                {
                    found.push(TextLocation {
                        paragraph: path.clone(),
                        run: r,
                        item: i,
                    });
                }
            }
        }
    });
    found
}

/// First text node containing `marker`.
pub fn locate_marker(blocks: &[Block], marker: &str) -> Option<TextLocation> {
    find_marker(blocks, marker).into_iter().next()
}

/// Innermost cell around the first occurrence of `marker`.
pub fn locate_marker_cell(blocks: &[Block], marker: &str) -> Option<TreePath> {
    locate_marker(blocks, marker)?.enclosing_cell()
}

/// Replace every occurrence of `old` in every text node. Returns how many
/// nodes were rewritten.
pub fn replace_text(blocks: &mut [Block], old: &str, new: &str) -> usize {
    if old.is_empty() {
        return 0;
    }
    let locations = find_marker(blocks, old);
    for location in &locations {
        if let Some(text) = text_mut(blocks, location) {
            *text = text.replace(old, new);
        }
    }
    locations.len()
}

/// Remove every `prefix + suffix` combination from all text nodes.
pub fn clear_markers(blocks: &mut [Block], prefixes: &[&str], suffixes: &[&str]) -> usize {
    let mut cleared = 0;
    for prefix in prefixes {
        for suffix in suffixes {
            cleared += replace_text(blocks, &format!("{prefix}{suffix}"), "");
        }
    }
    cleared
}

pub(crate) fn text_mut<'a>(blocks: &'a mut [Block], location: &TextLocation) -> Option<&'a mut String> {
    let paragraph = crate::tree::paragraph_mut(blocks, &location.paragraph)?;
    match paragraph.runs.get_mut(location.run)?.content.get_mut(location.item)? {
        RunContent::Text(text) => Some(text),
        RunContent::Break(_) => None,
    }
}
