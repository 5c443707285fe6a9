//! Constituency trees
//!
//! Two shapes of tree flow through the pipeline:
//!
//! - [`Tree`]: what parsers and binarizers produce and consume. Labels are plain
//!   strings and nodes carry no position information.
//! - [`IndexedTree`]: the result of the span indexing pass. Every node knows the
//!   half-open range of token positions it covers. Spans are assigned once, on
//!   construction, and there is no way to change them afterwards. Only the
//!   labels of internal nodes stay writable, and only from inside the crate.
//!
//! Label projection is only defined on [`IndexedTree`], so projecting onto a
//! tree that was never indexed does not type check.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Sentinel label given to internal nodes that carry no annotation.
pub const UNKNOWN_LABEL: &str = "-1";

/// Structural violations found while walking a tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("internal node '{label}' has no children")]
    EmptyNode { label: String },
}

/// A node in a rooted, ordered constituency tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tree {
    /// A token of the sentence.
    Leaf(String),
    /// A phrase or part-of-speech node.
    Node { label: String, children: Vec<Tree> },
}

impl Tree {
    pub fn leaf(word: impl Into<String>) -> Self {
        Tree::Leaf(word.into())
    }

    pub fn node(label: impl Into<String>, children: Vec<Tree>) -> Self {
        Tree::Node {
            label: label.into(),
            children,
        }
    }

    /// A part-of-speech node directly above a word.
    pub fn preterminal(tag: impl Into<String>, word: impl Into<String>) -> Self {
        Tree::node(tag, vec![Tree::leaf(word)])
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    pub fn is_internal(&self) -> bool {
        !self.is_leaf()
    }

    /// True for an internal node whose only child is a leaf.
    pub fn is_preterminal(&self) -> bool {
        match self {
            Tree::Node { children, .. } => children.len() == 1 && children[0].is_leaf(),
            Tree::Leaf(_) => false,
        }
    }

    /// The label of an internal node, `None` for leaves.
    pub fn label(&self) -> Option<&str> {
        match self {
            Tree::Node { label, .. } => Some(label),
            Tree::Leaf(_) => None,
        }
    }

    /// The word of a leaf, `None` for internal nodes.
    pub fn word(&self) -> Option<&str> {
        match self {
            Tree::Leaf(word) => Some(word),
            Tree::Node { .. } => None,
        }
    }

    pub fn children(&self) -> &[Tree] {
        match self {
            Tree::Node { children, .. } => children,
            Tree::Leaf(_) => &[],
        }
    }

    /// The words at the leaves, left to right.
    pub fn yield_words(&self) -> Vec<&str> {
        let mut words = Vec::new();
        self.collect_words(&mut words);
        words
    }

    fn collect_words<'a>(&'a self, words: &mut Vec<&'a str>) {
        match self {
            Tree::Leaf(word) => words.push(word),
            Tree::Node { children, .. } => {
                for child in children {
                    child.collect_words(words);
                }
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Tree::Leaf(_) => 1,
            Tree::Node { children, .. } => children.iter().map(Tree::leaf_count).sum(),
        }
    }

    /// Fails on the first internal node without children.
    pub fn validate(&self) -> Result<(), TreeError> {
        match self {
            Tree::Leaf(_) => Ok(()),
            Tree::Node { label, children } => {
                if children.is_empty() {
                    return Err(TreeError::EmptyNode {
                        label: label.clone(),
                    });
                }
                children.iter().try_for_each(Tree::validate)
            }
        }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Leaf(word) => write!(f, "{}", word),
            Tree::Node { label, children } => {
                write!(f, "({}", label)?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Half-open range `[start, end)` of token positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `self` lies inside `other` without touching either boundary.
    pub fn strictly_inside(&self, other: &Span) -> bool {
        self.start > other.start && self.end < other.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.start, self.end)
    }
}

/// A tree whose nodes carry the token span they cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedTree {
    span: Span,
    node: IndexedNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum IndexedNode {
    Leaf {
        word: String,
    },
    Internal {
        label: String,
        children: Vec<IndexedTree>,
    },
}

impl IndexedTree {
    /// Assigns spans in a single top-down, left-to-right pass. The leftmost
    /// leaf covers `(0,1)` and the root covers `(0, leaf count)`.
    pub fn index(tree: Tree) -> Result<Self, TreeError> {
        let mut cursor = 0;
        Self::index_from(tree, &mut cursor)
    }

    fn index_from(tree: Tree, cursor: &mut usize) -> Result<Self, TreeError> {
        match tree {
            Tree::Leaf(word) => {
                let span = Span::new(*cursor, *cursor + 1);
                *cursor += 1;
                Ok(IndexedTree {
                    span,
                    node: IndexedNode::Leaf { word },
                })
            }
            Tree::Node { label, children } => {
                if children.is_empty() {
                    return Err(TreeError::EmptyNode { label });
                }
                let start = *cursor;
                let children = children
                    .into_iter()
                    .map(|child| Self::index_from(child, cursor))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(IndexedTree {
                    span: Span::new(start, *cursor),
                    node: IndexedNode::Internal { label, children },
                })
            }
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node, IndexedNode::Leaf { .. })
    }

    pub fn label(&self) -> Option<&str> {
        match &self.node {
            IndexedNode::Internal { label, .. } => Some(label),
            IndexedNode::Leaf { .. } => None,
        }
    }

    pub fn word(&self) -> Option<&str> {
        match &self.node {
            IndexedNode::Leaf { word } => Some(word),
            IndexedNode::Internal { .. } => None,
        }
    }

    pub fn children(&self) -> &[IndexedTree] {
        match &self.node {
            IndexedNode::Internal { children, .. } => children,
            IndexedNode::Leaf { .. } => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> &mut [IndexedTree] {
        match &mut self.node {
            IndexedNode::Internal { children, .. } => children,
            IndexedNode::Leaf { .. } => &mut [],
        }
    }

    /// Overwrites the label of an internal node. Leaves have no label and are
    /// left alone, in which case `false` is returned.
    pub(crate) fn set_label(&mut self, value: &str) -> bool {
        match &mut self.node {
            IndexedNode::Internal { label, .. } => {
                *label = value.to_string();
                true
            }
            IndexedNode::Leaf { .. } => false,
        }
    }

    /// All nodes in pre-order.
    pub fn nodes(&self) -> Vec<&IndexedTree> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().iter().rev());
        }
        out
    }

    /// The first node, top-down, whose span equals `span`.
    pub fn find(&self, span: Span) -> Option<&IndexedTree> {
        self.nodes().into_iter().find(|node| node.span == span)
    }

    /// Drops the span information.
    pub fn into_tree(self) -> Tree {
        match self.node {
            IndexedNode::Leaf { word } => Tree::Leaf(word),
            IndexedNode::Internal { label, children } => Tree::Node {
                label,
                children: children.into_iter().map(IndexedTree::into_tree).collect(),
            },
        }
    }
}

impl fmt::Display for IndexedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node {
            IndexedNode::Leaf { word } => write!(f, "{}", word),
            IndexedNode::Internal { label, children } => {
                write!(f, "({}", label)?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}
