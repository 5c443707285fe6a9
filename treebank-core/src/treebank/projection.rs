//! Span label projection
//!
//! Puts each annotated span's label on the tree node covering exactly that
//! span. In a binary tree at most one internal node chain shares a given span,
//! and the topmost of them gets the label. Spans that cross a constituent
//! boundary have no node and are dropped.

use crate::treebank::annotation::SpanLabelMap;
use crate::treebank::tree::{IndexedTree, Span};
use tracing::debug;

/// Labels the topmost node whose span equals `span`. Returns whether one was
/// found.
///
/// A subtree that lies strictly inside the target span cannot contain a node
/// covering all of it, so it is not searched.
pub fn project_label(tree: &mut IndexedTree, span: Span, value: &str) -> bool {
    if tree.span() == span {
        return tree.set_label(value);
    }
    if tree.span().strictly_inside(&span) {
        return false;
    }
    tree.children_mut()
        .iter_mut()
        .any(|child| project_label(child, span, value))
}

impl IndexedTree {
    /// See [`project_label`].
    pub fn project_label(&mut self, span: Span, value: &str) -> bool {
        project_label(self, span, value)
    }
}

/// What happened to each span of a [`SpanLabelMap`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionReport {
    pub applied: Vec<Span>,
    pub dropped: Vec<Span>,
}

/// Projects every span of `labels` onto `tree`.
pub fn project_labels(tree: &mut IndexedTree, labels: &SpanLabelMap) -> ProjectionReport {
    let mut report = ProjectionReport::default();
    for (span, label) in labels {
        if project_label(tree, *span, label) {
            report.applied.push(*span);
        } else {
            debug!(%span, label = %label, "span does not match a constituent, dropping");
            report.dropped.push(*span);
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::treebank::testing::{indexed, internal_labels};

    // The(0) movie(1) was(2) great(3)
    const TREE: &str = "(-1 (-1 The) (-1 (-1 (-1 movie) (-1 was)) (-1 great)))";

    #[test]
    fn test_exact_span_is_labeled() {
        let mut tree = indexed(TREE);
        assert!(project_label(&mut tree, Span::new(1, 3), "POS"));
        assert_eq!(
            tree.to_string(),
            "(-1 (-1 The) (-1 (POS (-1 movie) (-1 was)) (-1 great)))"
        );
    }

    #[test]
    fn test_only_the_matching_node_changes() {
        let mut tree = indexed(TREE);
        let before = internal_labels(&tree);
        project_label(&mut tree, Span::new(1, 3), "POS");
        let after = internal_labels(&tree);
        let changed: Vec<usize> = (0..before.len()).filter(|&i| before[i] != after[i]).collect();
        assert_eq!(changed.len(), 1);
        assert_eq!(after[changed[0]], "POS");
    }

    #[test]
    fn test_non_constituent_is_dropped() {
        let mut tree = indexed(TREE);
        assert!(!project_label(&mut tree, Span::new(2, 4), "NEG"));
        assert!(!project_label(&mut tree, Span::new(0, 2), "NEG"));
        assert_eq!(tree.to_string(), TREE);
    }

    #[test]
    fn test_topmost_of_a_chain_wins() {
        let mut tree = indexed("(-1 (-1 (-1 fine)) (-1 day))");
        assert!(project_label(&mut tree, Span::new(0, 1), "3"));
        assert_eq!(tree.to_string(), "(-1 (3 (-1 fine)) (-1 day))");
    }

    #[test]
    fn test_leaves_are_never_relabeled() {
        let mut tree = indexed("(-1 fine day)");
        assert!(!project_label(&mut tree, Span::new(0, 1), "3"));
        assert_eq!(tree.to_string(), "(-1 fine day)");
    }

    #[test]
    fn test_root_span() {
        let mut tree = indexed(TREE);
        assert!(tree.project_label(Span::new(0, 4), "4"));
        assert_eq!(tree.label(), Some("4"));
    }

    #[test]
    fn test_report_splits_applied_and_dropped() {
        let mut tree = indexed(TREE);
        let mut labels = SpanLabelMap::new();
        labels.insert(Span::new(1, 3), "POS");
        labels.insert(Span::new(2, 4), "NEG");
        labels.insert(Span::new(3, 4), "NEU");
        let report = project_labels(&mut tree, &labels);
        assert_eq!(report.applied, vec![Span::new(1, 3), Span::new(3, 4)]);
        assert_eq!(report.dropped, vec![Span::new(2, 4)]);
        assert_eq!(
            tree.to_string(),
            "(-1 (-1 The) (-1 (POS (-1 movie) (-1 was)) (NEU great)))"
        );
    }
}
