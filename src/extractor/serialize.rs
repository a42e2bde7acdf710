//! Tree to bullet-outline rendering.
//!
//! The inverse of [`parse_outline`](crate::extractor::parse_outline): used to
//! put an edited tree back into conversation context for the model.

use std::fmt::Write;

use crate::types::OutlineNode;

/// Render `tree` as indented bullet lines, starting at `depth`.
///
/// Each node becomes `"<2*depth spaces>- <name>\n"`, followed by its
/// children one level deeper, in order.
///
/// # Examples
///
/// ```
/// use response_extract::extractor::outline_to_text;
/// use response_extract::OutlineNode;
///
/// let tree = OutlineNode::new("Root").with_child(OutlineNode::new("Leaf"));
/// assert_eq!(outline_to_text(&tree, 0), "- Root\n  - Leaf\n");
/// ```
pub fn outline_to_text(tree: &OutlineNode, depth: usize) -> String {
    let mut out = String::new();
    write_node(&mut out, tree, depth);
    out
}

fn write_node(out: &mut String, node: &OutlineNode, depth: usize) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{:indent$}- {}", "", node.name, indent = depth * 2);
    for child in &node.children {
        write_node(out, child, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::outline::parse_outline;

    fn sample_tree() -> OutlineNode {
        OutlineNode::new("Biology")
            .with_child(
                OutlineNode::new("Cells")
                    .with_child(OutlineNode::new("Mitochondria"))
                    .with_child(OutlineNode::new("Nucleus").with_child(OutlineNode::new("DNA"))),
            )
            .with_child(OutlineNode::new("Ecology"))
    }

    #[test]
    fn test_renders_nested_tree() {
        let text = outline_to_text(&sample_tree(), 0);
        assert_eq!(
            text,
            "- Biology\n  - Cells\n    - Mitochondria\n    - Nucleus\n      - DNA\n  - Ecology\n"
        );
    }

    #[test]
    fn test_starting_depth_offsets_everything() {
        let tree = OutlineNode::new("a").with_child(OutlineNode::new("b"));
        assert_eq!(outline_to_text(&tree, 2), "    - a\n      - b\n");
    }

    #[test]
    fn test_single_leaf() {
        assert_eq!(OutlineNode::new("x").to_outline(), "- x\n");
    }

    #[test]
    fn test_round_trip_preserves_structure() {
        let tree = sample_tree();
        let parsed = parse_outline(&outline_to_text(&tree, 0));
        assert_eq!(parsed.tree, Some(tree));
    }

    #[test]
    fn test_round_trip_deep_chain() {
        let mut tree = OutlineNode::new("level 11");
        for i in (0..11).rev() {
            tree = OutlineNode::new(format!("level {}", i)).with_child(tree);
        }
        let parsed = parse_outline(&tree.to_outline()).tree.unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn test_round_trip_wide_tree() {
        let tree = (0..20).fold(OutlineNode::new("hub"), |t, i| {
            t.with_child(OutlineNode::new(format!("spoke {}", i)))
        });
        assert_eq!(parse_outline(&tree.to_outline()).tree, Some(tree));
    }
}
