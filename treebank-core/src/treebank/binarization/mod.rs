//! Binarization
//!
//! The [`Binarizer`] seam turns an n-ary constituency tree into one where every
//! internal node has at most two children. [`TreeBinarizer`] does this around
//! the head child chosen by a [`HeadFinder`]:
//!
//! - dependents left of the head are peeled off first, outermost,
//! - then dependents right of the head,
//! - so the head ends up in the innermost node.
//!
//! Intermediate nodes are labeled `@` plus the phrase category:
//!
//!     (VP (RB really) (VBD liked) (NP it) (. .))
//!     →
//!     (VP (RB really) (@VP (@VP (VBD liked) (NP it)) (. .)))
//!
//! Unary nodes and pre-terminals are left as they are; the unary collapsing
//! stage deals with chains later.

pub mod head_finder;

pub use head_finder::{base_category, EnglishHeadFinder, HeadFinder, HeadRules};

use crate::treebank::tree::Tree;

/// Turns any constituency tree into a binary one. Implementations must be
/// deterministic and shareable across threads.
pub trait Binarizer: Send + Sync {
    fn binarize(&self, tree: Tree) -> Tree;
}

/// Head-driven binarizer.
pub struct TreeBinarizer {
    head_finder: Box<dyn HeadFinder>,
}

impl TreeBinarizer {
    pub fn new(rules: HeadRules) -> Self {
        Self::with_head_finder(rules.head_finder())
    }

    pub fn with_head_finder(head_finder: Box<dyn HeadFinder>) -> Self {
        TreeBinarizer { head_finder }
    }

    fn binarize_node(&self, tree: Tree) -> Tree {
        match tree {
            Tree::Leaf(_) => tree,
            Tree::Node { label, children } => {
                let children: Vec<Tree> = children
                    .into_iter()
                    .map(|child| self.binarize_node(child))
                    .collect();
                if children.len() <= 2 {
                    return Tree::Node { label, children };
                }
                let head = self.head_finder.head_child(&label, &children);
                let intermediate = format!("@{}", base_category(&label));
                factor(label, &intermediate, children, head)
            }
        }
    }
}

impl Default for TreeBinarizer {
    fn default() -> Self {
        Self::new(HeadRules::default())
    }
}

impl Binarizer for TreeBinarizer {
    fn binarize(&self, tree: Tree) -> Tree {
        self.binarize_node(tree)
    }
}

/// Builds the binary spine for `children` around `head`.
fn factor(label: String, intermediate: &str, mut children: Vec<Tree>, head: usize) -> Tree {
    if children.len() <= 2 {
        return Tree::Node { label, children };
    }
    let head = head.min(children.len() - 1);
    if head > 0 {
        let rest = children.split_off(1);
        let inner = factor(intermediate.to_string(), intermediate, rest, head - 1);
        children.push(inner);
        Tree::Node { label, children }
    } else {
        let last = children.pop().into_iter();
        let inner = factor(intermediate.to_string(), intermediate, children, head);
        Tree::Node {
            label,
            children: std::iter::once(inner).chain(last).collect(),
        }
    }
}
