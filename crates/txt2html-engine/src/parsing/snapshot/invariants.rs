use crate::parsing::blocks::{Block, Member};
use crate::parsing::node::{Child, Node};
use crate::parsing::rules::SyntaxKind;

/// Panics if the scanned tree or its grouping breaks a structural invariant.
pub fn check(root: &Node, body: &Block) {
    check_node(root);

    let mut grouped = Vec::new();
    flatten(body, &mut grouped);
    assert_eq!(
        grouped.len(),
        root.children.len(),
        "grouping changed the number of root children"
    );
    for (i, (a, b)) in grouped.iter().zip(&root.children).enumerate() {
        assert_eq!(*a, b, "grouping reordered root child {i}");
    }
}

fn check_node(node: &Node) {
    let mut previous_was_text = false;
    for child in &node.children {
        match child {
            Child::Text(text) => {
                assert!(!text.is_empty(), "empty text leaf under {:?}", node.kind);
                assert!(
                    !previous_was_text,
                    "adjacent text leaves under {:?}",
                    node.kind
                );
                previous_was_text = true;
            }
            Child::Modifier(modifier) => {
                assert_eq!(modifier.kind, SyntaxKind::Modifier);
                assert!(
                    modifier
                        .children
                        .iter()
                        .all(|c| matches!(c, Child::Text(_))),
                    "modifier holds nested constructs"
                );
                previous_was_text = false;
            }
            Child::Node(inner) => {
                assert_ne!(inner.kind, SyntaxKind::Modifier, "modifier stored as a node");
                assert!(!inner.delimiter.is_empty(), "{:?} has no delimiter", inner.kind);
                check_node(inner);
                previous_was_text = false;
            }
        }
    }
}

fn flatten<'a>(block: &'a Block, out: &mut Vec<&'a Child>) {
    for member in &block.members {
        match member {
            Member::Child(child) => out.push(child),
            Member::Block(inner) => flatten(inner, out),
        }
    }
}
