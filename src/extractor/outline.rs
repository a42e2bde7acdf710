//! Bullet outline extraction, interpreted as a tree (mind map).
//!
//! Every line whose trimmed content starts with `-` or `*` is a list line.
//! Leading whitespace sets its depth; nesting is rebuilt with an indentation
//! stack. Several top-level items are gathered under a synthesized root.

use crate::config::{RootLabel, DEFAULT_ROOT_LABEL};
use crate::extractor::scan::lines_with_offsets;
use crate::types::OutlineNode;

/// Result of scanning a response for a bullet outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineExtraction {
    /// Text before the first list line, trimmed. The whole input when there
    /// are no list lines.
    pub intro_text: String,
    /// The rebuilt tree, if any list line carried a label.
    pub tree: Option<OutlineNode>,
    /// Byte offset of the first list line.
    pub start: Option<usize>,
    /// Byte offset just past the last list line, terminator included.
    pub end: Option<usize>,
}

/// Parse the bullet outline in `text` using the default root label policy.
///
/// # Examples
///
/// ```
/// use response_extract::extractor::parse_outline;
///
/// let out = parse_outline("- Root\n  - Child1\n    - Grandchild\n  - Child2");
/// let root = out.tree.unwrap();
/// assert_eq!(root.name, "Root");
/// assert_eq!(root.children.len(), 2);
/// assert_eq!(root.children[0].children[0].name, "Grandchild");
/// ```
pub fn parse_outline(text: &str) -> OutlineExtraction {
    parse_outline_with(text, &RootLabel::FromIntro, DEFAULT_ROOT_LABEL)
}

/// Parse the bullet outline in `text`, naming any synthetic root with `policy`.
///
/// Depth is the raw count of leading whitespace characters; tabs and spaces
/// are not normalized. A line at the same or lower depth than an open item
/// closes it, so equal indentation always means sibling. Lines whose label
/// is empty after removing the bullet are skipped.
pub fn parse_outline_with(text: &str, policy: &RootLabel, fallback: &str) -> OutlineExtraction {
    let items: Vec<(usize, usize, usize, &str)> = lines_with_offsets(text)
        .filter_map(|line| {
            let trimmed = line.text.trim();
            if !(trimmed.starts_with('-') || trimmed.starts_with('*')) {
                return None;
            }
            let indent = line.text.chars().take_while(|c| c.is_whitespace()).count();
            Some((line.start, line.end, indent, trimmed[1..].trim()))
        })
        .collect();

    let (Some(&(start, _, _, _)), Some(&(_, end, _, _))) = (items.first(), items.last()) else {
        return OutlineExtraction {
            intro_text: text.to_string(),
            tree: None,
            start: None,
            end: None,
        };
    };

    let intro_text = text[..start].trim().to_string();

    let mut builder = TreeBuilder::default();
    for &(_, _, indent, label) in &items {
        if !label.is_empty() {
            builder.push(label, indent);
        }
    }
    let mut roots = builder.finish();

    let tree = match roots.len() {
        0 => None,
        1 => roots.pop(),
        _ => Some(OutlineNode {
            name: policy.resolve(&intro_text, fallback),
            children: roots,
        }),
    };

    OutlineExtraction {
        intro_text,
        tree,
        start: Some(start),
        end: Some(end),
    }
}

/// Indentation stack. Each open node is held with its indent until a line at
/// the same or lower indent closes it, at which point it is attached to its
/// parent (or becomes a top-level node).
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<(OutlineNode, usize)>,
    roots: Vec<OutlineNode>,
}

impl TreeBuilder {
    fn push(&mut self, label: &str, indent: usize) {
        self.close_while(|open| open >= indent);
        self.stack.push((OutlineNode::new(label), indent));
    }

    fn finish(mut self) -> Vec<OutlineNode> {
        self.close_while(|_| true);
        self.roots
    }

    fn close_while(&mut self, should_close: impl Fn(usize) -> bool) {
        while let Some(&(_, open)) = self.stack.last() {
            if !should_close(open) {
                break;
            }
            let Some((node, _)) = self.stack.pop() else {
                break;
            };
            match self.stack.last_mut() {
                Some((parent, _)) => parent.children.push(node),
                None => self.roots.push(node),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn leaf(name: &str) -> OutlineNode {
        OutlineNode::new(name)
    }

    #[test]
    fn test_single_rooted_outline() {
        let out = parse_outline("- Root\n  - Child1\n    - Grandchild\n  - Child2");
        let expected = OutlineNode::new("Root")
            .with_child(OutlineNode::new("Child1").with_child(leaf("Grandchild")))
            .with_child(leaf("Child2"));
        assert_eq!(out.tree, Some(expected));
        assert_eq!(out.intro_text, "");
        assert_eq!(out.start, Some(0));
    }

    #[test]
    fn test_span_covers_bullet_run_only() {
        let text = "Topics:\n- a\n  - b\n\nThat's all.";
        let out = parse_outline(text);
        let (start, end) = (out.start.unwrap(), out.end.unwrap());
        assert_eq!(&text[start..end], "- a\n  - b\n");
        assert_eq!(&text[end..], "\nThat's all.");
    }

    #[test]
    fn test_multiple_top_level_items_get_synthetic_root() {
        let out = parse_outline("- A\n  - B\n  - C\n- D");
        let tree = out.tree.unwrap();
        assert_eq!(tree.name, DEFAULT_ROOT_LABEL);
        assert_eq!(
            tree.children,
            vec![
                OutlineNode::new("A").with_child(leaf("B")).with_child(leaf("C")),
                leaf("D"),
            ]
        );
    }

    #[test]
    fn test_equal_indent_is_sibling() {
        let tree = parse_outline("- A\n- B").tree.unwrap();
        assert_eq!(tree.children, vec![leaf("A"), leaf("B")]);
    }

    #[test]
    fn test_synthetic_root_named_from_intro() {
        let text = "Sure!\nKey ideas of biology:\n- Cells\n- Genes";
        let out = parse_outline(text);
        assert_eq!(out.intro_text, "Sure!\nKey ideas of biology:");
        assert_eq!(out.tree.unwrap().name, "Key ideas of biology");
    }

    #[test]
    fn test_synthetic_root_with_fixed_policy() {
        let policy = RootLabel::Fixed("Topics".into());
        let out = parse_outline_with("Intro:\n- a\n- b", &policy, "X");
        assert_eq!(out.tree.unwrap().name, "Topics");
    }

    #[test]
    fn test_synthetic_root_with_custom_policy_fallback() {
        let policy = RootLabel::Custom(Arc::new(|_: &str| None));
        let out = parse_outline_with("- a\n- b", &policy, "Fallback");
        assert_eq!(out.tree.unwrap().name, "Fallback");
    }

    #[test]
    fn test_no_list_lines_returns_full_text() {
        let text = "  Just prose.\nNothing else.  ";
        let out = parse_outline(text);
        assert_eq!(out.intro_text, text);
        assert!(out.tree.is_none());
        assert!(out.start.is_none());
        assert!(out.end.is_none());
    }

    #[test]
    fn test_asterisk_bullets_and_mixed_markers() {
        let tree = parse_outline("* Root\n  - a\n  * b").tree.unwrap();
        assert_eq!(tree.name, "Root");
        assert_eq!(tree.children, vec![leaf("a"), leaf("b")]);
    }

    #[test]
    fn test_empty_labels_skipped() {
        let tree = parse_outline("- Root\n  -\n  - a\n  *   \n  - b").tree.unwrap();
        assert_eq!(tree.children, vec![leaf("a"), leaf("b")]);
    }

    #[test]
    fn test_all_empty_labels_yield_no_tree() {
        let out = parse_outline("Intro\n-\n*");
        assert!(out.tree.is_none());
        assert_eq!(out.intro_text, "Intro");
        assert_eq!(out.start, Some(6));
        assert_eq!(out.end, Some(9));
    }

    #[test]
    fn test_dedent_closes_subtree() {
        let text = "- A\n    - B\n        - C\n  - D\n- E";
        let tree = parse_outline(text).tree.unwrap();
        let a = &tree.children[0];
        assert_eq!(a.name, "A");
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.children[0].children, vec![leaf("C")]);
        assert_eq!(a.children[1], leaf("D"));
        assert_eq!(tree.children[1], leaf("E"));
    }

    #[test]
    fn test_tabs_count_as_single_characters() {
        // One tab (indent 1) nests under indent 0; two spaces (indent 2) nest under the tab.
        let tree = parse_outline("- A\n\t- B\n  - C").tree.unwrap();
        assert_eq!(tree.name, "A");
        assert_eq!(tree.children[0].name, "B");
        assert_eq!(tree.children[0].children, vec![leaf("C")]);
    }

    #[test]
    fn test_first_line_indented_deeper_than_later_lines() {
        let tree = parse_outline("    - deep\n- shallow").tree.unwrap();
        assert_eq!(tree.children, vec![leaf("deep"), leaf("shallow")]);
    }

    #[test]
    fn test_non_list_lines_between_items_are_ignored() {
        let tree = parse_outline("- Root\n  some prose\n  - child").tree.unwrap();
        assert_eq!(tree.children, vec![leaf("child")]);
    }

    #[test]
    fn test_label_strips_marker_and_whitespace() {
        let tree = parse_outline("-    spaced out   ").tree.unwrap();
        assert_eq!(tree.name, "spaced out");
    }

    #[test]
    fn test_outline_is_idempotent() {
        let text = "Plan:\n- a\n  - b\n- c";
        assert_eq!(parse_outline(text), parse_outline(text));
    }
}
