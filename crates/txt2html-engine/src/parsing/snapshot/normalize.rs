use crate::parsing::blocks::{Block, Member};
use crate::parsing::node::{Child, Node};

const INDENT: &str = "  ";

/// Dumps a block tree, one line per block, node or text leaf.
///
/// Body members start at column zero. There is no trailing newline.
pub fn dump_blocks(body: &Block) -> String {
    let mut lines = Vec::new();
    for member in &body.members {
        member_lines(member, 0, &mut lines);
    }
    lines.join("\n")
}

/// Dumps the children of `node` (typically the root) without the node itself.
pub fn dump_children(node: &Node) -> String {
    let mut lines = Vec::new();
    for child in &node.children {
        child_lines(child, 0, &mut lines);
    }
    lines.join("\n")
}

fn member_lines(member: &Member, depth: usize, lines: &mut Vec<String>) {
    match member {
        Member::Child(child) => child_lines(child, depth, lines),
        Member::Block(block) => {
            lines.push(format!("{}{:?}", INDENT.repeat(depth), block.kind));
            for inner in &block.members {
                member_lines(inner, depth + 1, lines);
            }
        }
    }
}

fn child_lines(child: &Child, depth: usize, lines: &mut Vec<String>) {
    let pad = INDENT.repeat(depth);
    match child {
        Child::Text(text) => lines.push(format!("{pad}Text {text:?}")),
        Child::Node(node) | Child::Modifier(node) => {
            lines.push(format!("{pad}{:?} {:?}", node.kind, node.delimiter));
            for inner in &node.children {
                child_lines(inner, depth + 1, lines);
            }
        }
    }
}
