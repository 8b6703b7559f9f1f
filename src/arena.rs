//! Fixed-capacity parse tree arena
//!
//! Nodes are appended to a contiguous table and addressed by
//! [`NodeId`](crate::parser::tree::NodeId), their index. There is no
//! per-node free: a session's whole tree is dropped together with its arena.
//! Running out of room is an ordinary error value, not a panic.

use crate::parser::tree::{NodeId, TreeNode};
use std::fmt;
use std::ops::Index;

/// Allocation failure: the arena's node table is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfMemory {
    pub used: usize,
    pub capacity: usize,
}

impl fmt::Display for OutOfMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Out of memory: {} nodes in use, capacity is {}",
            self.used, self.capacity
        )
    }
}

impl std::error::Error for OutOfMemory {}

/// Append-only node table with a hard capacity.
#[derive(Debug)]
pub struct NodeArena {
    nodes: Vec<TreeNode>,
    capacity: usize,
}

impl NodeArena {
    /// Creates an arena that can hold at most `capacity` nodes. The backing
    /// storage is reserved up front, so allocation never reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a node and returns its id. Ids are dense, start at 0, and
    /// stay valid for the arena's lifetime. At capacity the arena is left
    /// untouched and [`OutOfMemory`] is returned.
    pub fn alloc(&mut self, node: TreeNode) -> Result<NodeId, OutOfMemory> {
        if self.nodes.len() >= self.capacity {
            return Err(OutOfMemory {
                used: self.nodes.len(),
                capacity: self.capacity,
            });
        }
        let id = self.nodes.len();
        self.nodes.push(node);
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Index<NodeId> for NodeArena {
    type Output = TreeNode;

    fn index(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tree::TreeNode;

    fn leaf(text: &str) -> TreeNode {
        TreeNode::Terminal {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_alloc_returns_dense_ids() {
        let mut arena = NodeArena::with_capacity(4);
        assert_eq!(arena.alloc(leaf("1")).expect("alloc"), 0);
        assert_eq!(arena.alloc(leaf("2")).expect("alloc"), 1);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.capacity(), 4);
    }

    #[test]
    fn test_exhaustion_is_clean_and_nodes_survive() {
        let mut arena = NodeArena::with_capacity(2);
        let a = arena.alloc(leaf("a")).expect("alloc");
        let b = arena.alloc(leaf("b")).expect("alloc");

        let err = arena.alloc(leaf("c")).unwrap_err();
        assert_eq!(
            err,
            OutOfMemory {
                used: 2,
                capacity: 2
            }
        );

        // The failed allocation must not disturb earlier nodes.
        assert_eq!(arena[a], leaf("a"));
        assert_eq!(arena[b], leaf("b"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_zero_capacity_rejects_first_alloc() {
        let mut arena = NodeArena::with_capacity(0);
        assert!(arena.alloc(leaf("x")).is_err());
        assert!(arena.is_empty());
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let arena = NodeArena::with_capacity(1);
        assert!(arena.get(0).is_none());
    }

    #[test]
    fn test_out_of_memory_message() {
        let err = OutOfMemory {
            used: 8,
            capacity: 8,
        };
        assert_eq!(
            err.to_string(),
            "Out of memory: 8 nodes in use, capacity is 8"
        );
    }
}
