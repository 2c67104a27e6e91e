use std::collections::VecDeque;

use crate::parsing::node::Child;

use super::types::{Block, BlockKind, Member};

/// Groups the root's flat children into a [`BlockKind::Body`] tree.
pub fn group(children: Vec<Child>) -> Block {
    let mut builder = BlockBuilder::new(children);
    builder.collect(BlockKind::Body)
}

/// Consumes a queue of scanned children front to back, building blocks.
pub struct BlockBuilder {
    queue: VecDeque<Child>,
}

impl BlockBuilder {
    pub fn new(children: Vec<Child>) -> Self {
        Self {
            queue: children.into(),
        }
    }

    /// Collects a maximal admissible run into a block of `kind`.
    ///
    /// Stops at the first child that neither opens a nested block nor is
    /// admissible, leaving it for the enclosing container.
    pub fn collect(&mut self, kind: BlockKind) -> Block {
        let mut block = Block::new(kind);

        'scan: while let Some(head) = self.queue.front() {
            for &nested in kind.nested() {
                if !nested.starts_on(head) {
                    continue;
                }
                let before = self.queue.len();
                let inner = self.collect(nested);
                if self.queue.len() < before {
                    block.members.push(Member::Block(inner));
                    continue 'scan;
                }
                // Nothing consumed; fall through to direct membership.
                break;
            }

            let Some(head) = self.queue.front() else {
                break;
            };
            if !kind.admits(head, self.queue.get(1)) {
                break;
            }
            if let Some(child) = self.queue.pop_front() {
                block.members.push(Member::Child(child));
            }
        }

        block
    }

    /// Children left unconsumed. Empty after grouping a Body.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}
