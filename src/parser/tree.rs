//! Parse tree nodes and the tree dump
//!
//! Every rule application materialises as a [`TreeNode`] in a
//! [`NodeArena`](crate::arena::NodeArena): nonterminal nodes record which
//! symbol they expand plus their ordered children, terminal nodes record
//! surface text. The ε production is a nonterminal node with no children.

use crate::arena::NodeArena;
use std::fmt;

/// Index of a node inside its [`NodeArena`].
pub type NodeId = usize;

/// Grammar nonterminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarSymbol {
    S,
    SPrime,
    E,
}

impl fmt::Display for GrammarSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarSymbol::S => f.write_str("S"),
            GrammarSymbol::SPrime => f.write_str("S'"),
            GrammarSymbol::E => f.write_str("E"),
        }
    }
}

/// One parse tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// A nonterminal and the rule body it expanded to, in order. An empty
    /// child list is the ε production.
    Sequence {
        symbol: GrammarSymbol,
        children: Vec<NodeId>,
    },
    /// A consumed terminal: an integer literal's text, `(`, `)`, or `+`.
    Terminal { text: String },
}

/// Regenerates rule-application lines from a finished tree, pre-order, two
/// spaces of indent per level.
///
/// The dump mirrors the live trace with one difference: the brackets and the
/// plus sign of a rule body also appear as standalone lines at child depth,
/// while integer literals do not (their text already sits in the parent's
/// `E -> <text>` line).
pub fn dump_tree(arena: &NodeArena, root: NodeId) -> Vec<String> {
    let mut lines = Vec::new();
    dump_node(arena, root, 0, &mut lines);
    lines
}

fn dump_node(arena: &NodeArena, id: NodeId, depth: usize, lines: &mut Vec<String>) {
    let node = match arena.get(id) {
        Some(node) => node,
        None => return,
    };
    let indent = "  ".repeat(depth);
    match node {
        TreeNode::Sequence { symbol, children } => {
            lines.push(format!(
                "{}{}",
                indent,
                production_line(arena, *symbol, children)
            ));
            for &child in children {
                dump_node(arena, child, depth + 1, lines);
            }
        }
        TreeNode::Terminal { text } => {
            if text == "(" || text == ")" || text == "+" {
                lines.push(format!("{}{}", indent, text));
            }
        }
    }
}

/// Derives the rule line a [`TreeNode::Sequence`] was built from.
fn production_line(arena: &NodeArena, symbol: GrammarSymbol, children: &[NodeId]) -> String {
    match symbol {
        GrammarSymbol::S => "S -> E S'".to_string(),
        GrammarSymbol::SPrime => {
            if children.is_empty() {
                "S' -> ε".to_string()
            } else {
                "S' -> + S".to_string()
            }
        }
        GrammarSymbol::E => match children.first().and_then(|&c| arena.get(c)) {
            Some(TreeNode::Terminal { text }) if text == "(" => "E -> ( S )".to_string(),
            Some(TreeNode::Terminal { text }) => format!("E -> {}", text),
            _ => symbol.to_string(),
        },
    }
}
