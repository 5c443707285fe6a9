//! Head finding
//!
//! A head finder picks, for a phrase and its children, the child that heads the
//! phrase. The binarizer keeps the head innermost and attaches the remaining
//! children around it.
//!
//! The English rules follow the Collins head table. Each category has an
//! ordered list of rules, and each rule is a search direction plus the
//! categories it looks for:
//!
//! - `Left`: for each category in priority order, scan the children left to right.
//! - `Right`: the same, scanning right to left.
//! - `LeftDis` / `RightDis`: scan the children once and stop at the first child
//!   whose category is in the set.
//!
//! When no rule matches, the first rule's direction decides between the leftmost
//! and the rightmost child.

use crate::treebank::tree::Tree;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Chooses the head child of a phrase.
pub trait HeadFinder: Send + Sync {
    /// Index into `children` of the head. `children` is never empty.
    fn head_child(&self, label: &str, children: &[Tree]) -> usize;
}

/// The head-finding strategies that can be selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadRules {
    #[default]
    English,
    Leftmost,
    Rightmost,
}

impl HeadRules {
    pub fn head_finder(self) -> Box<dyn HeadFinder> {
        match self {
            HeadRules::English => Box::new(EnglishHeadFinder),
            HeadRules::Leftmost => Box::new(LeftmostHeadFinder),
            HeadRules::Rightmost => Box::new(RightmostHeadFinder),
        }
    }
}

impl FromStr for HeadRules {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "english" => Ok(HeadRules::English),
            "leftmost" => Ok(HeadRules::Leftmost),
            "rightmost" => Ok(HeadRules::Rightmost),
            other => Err(format!(
                "unknown head rules '{}' (expected english, leftmost or rightmost)",
                other
            )),
        }
    }
}

impl fmt::Display for HeadRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeadRules::English => "english",
            HeadRules::Leftmost => "leftmost",
            HeadRules::Rightmost => "rightmost",
        };
        write!(f, "{}", name)
    }
}

pub struct LeftmostHeadFinder;

impl HeadFinder for LeftmostHeadFinder {
    fn head_child(&self, _label: &str, _children: &[Tree]) -> usize {
        0
    }
}

pub struct RightmostHeadFinder;

impl HeadFinder for RightmostHeadFinder {
    fn head_child(&self, _label: &str, children: &[Tree]) -> usize {
        children.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
    LeftDis,
    RightDis,
}

type Rule = (Direction, &'static [&'static str]);

fn rule(direction: Direction, targets: &'static [&'static str]) -> Rule {
    (direction, targets)
}

static ENGLISH_RULES: Lazy<HashMap<&'static str, Vec<Rule>>> = Lazy::new(|| {
    use Direction::*;
    let mut rules: HashMap<&'static str, Vec<Rule>> = HashMap::new();
    rules.insert(
        "ADJP",
        vec![rule(
            Left,
            &[
                "NNS", "QP", "NN", "$", "ADVP", "JJ", "VBN", "VBG", "ADJP", "JJR", "NP", "JJS",
                "DT", "FW", "RBR", "RBS", "SBAR", "RB",
            ],
        )],
    );
    rules.insert(
        "ADVP",
        vec![rule(
            Right,
            &[
                "RB", "RBR", "RBS", "FW", "ADVP", "TO", "CD", "JJR", "JJ", "IN", "NP", "JJS", "NN",
            ],
        )],
    );
    rules.insert("CONJP", vec![rule(Right, &["CC", "RB", "IN"])]);
    rules.insert("FRAG", vec![rule(Right, &[])]);
    rules.insert("INTJ", vec![rule(Left, &[])]);
    rules.insert("LST", vec![rule(Right, &["LS", ":"])]);
    rules.insert(
        "NAC",
        vec![rule(
            Left,
            &[
                "NN", "NNS", "NNP", "NNPS", "NP", "NAC", "EX", "$", "CD", "QP", "PRP", "VBG", "JJ",
                "JJS", "JJR", "ADJP", "FW",
            ],
        )],
    );
    rules.insert(
        "NP",
        vec![
            rule(RightDis, &["NN", "NNP", "NNPS", "NNS", "NX", "POS", "JJR"]),
            rule(Left, &["NP"]),
            rule(RightDis, &["$", "ADJP", "PRN"]),
            rule(Right, &["CD"]),
            rule(RightDis, &["JJ", "JJS", "RB", "QP"]),
        ],
    );
    rules.insert("PP", vec![rule(Right, &["IN", "TO", "VBG", "VBN", "RP", "FW"])]);
    rules.insert("PRN", vec![rule(Left, &[])]);
    rules.insert("PRT", vec![rule(Right, &["RP"])]);
    rules.insert(
        "QP",
        vec![rule(
            Left,
            &["$", "IN", "NNS", "NN", "JJ", "RB", "DT", "CD", "NCD", "QP", "JJR", "JJS"],
        )],
    );
    rules.insert("RRC", vec![rule(Right, &["VP", "NP", "ADVP", "ADJP", "PP"])]);
    rules.insert(
        "S",
        vec![
            rule(Left, &["TO", "IN", "VP", "S", "SBAR", "ADJP", "UCP", "NP"]),
            rule(LeftDis, &["MD", "VBD", "VBZ", "VBP", "VB", "VBG", "VBN"]),
        ],
    );
    rules.insert(
        "SBAR",
        vec![rule(
            Left,
            &[
                "WHNP", "WHPP", "WHADVP", "WHADJP", "IN", "DT", "S", "SQ", "SINV", "SBAR", "FRAG",
            ],
        )],
    );
    rules.insert("SBARQ", vec![rule(Left, &["SQ", "S", "SINV", "SBARQ", "FRAG"])]);
    rules.insert(
        "SINV",
        vec![rule(
            Left,
            &["VBZ", "VBD", "VBP", "VB", "MD", "VP", "S", "SINV", "ADJP", "NP"],
        )],
    );
    rules.insert(
        "SQ",
        vec![rule(Left, &["VBZ", "VBD", "VBP", "VB", "MD", "VP", "SQ"])],
    );
    rules.insert("UCP", vec![rule(Right, &[])]);
    rules.insert(
        "VP",
        vec![rule(
            Left,
            &[
                "TO", "VBD", "VBN", "MD", "VBZ", "VB", "VBG", "VBP", "VP", "ADJP", "NN", "NNS",
                "NP",
            ],
        )],
    );
    rules.insert("WHADJP", vec![rule(Left, &["CC", "WRB", "JJ", "ADJP"])]);
    rules.insert("WHADVP", vec![rule(Right, &["CC", "WRB"])]);
    rules.insert(
        "WHNP",
        vec![rule(Left, &["WDT", "WP", "WP$", "WHADJP", "WHPP", "WHNP"])],
    );
    rules.insert("WHPP", vec![rule(Right, &["IN", "TO", "FW"])]);
    rules.insert("ROOT", vec![rule(Left, &["S", "SQ", "SINV", "SBARQ", "FRAG"])]);
    rules
});

/// Collins-style head rules for English Penn Treebank categories.
pub struct EnglishHeadFinder;

impl HeadFinder for EnglishHeadFinder {
    fn head_child(&self, label: &str, children: &[Tree]) -> usize {
        let categories: Vec<&str> = children
            .iter()
            .map(|child| child.label().map(base_category).unwrap_or(""))
            .collect();

        let Some(rules) = ENGLISH_RULES.get(base_category(label)) else {
            return 0;
        };

        for (direction, targets) in rules {
            if let Some(index) = apply_rule(*direction, targets, &categories) {
                return index;
            }
        }

        match rules.first().map(|(direction, _)| *direction) {
            Some(Direction::Right) | Some(Direction::RightDis) => categories.len().saturating_sub(1),
            _ => 0,
        }
    }
}

fn apply_rule(direction: Direction, targets: &[&str], categories: &[&str]) -> Option<usize> {
    match direction {
        Direction::Left => targets
            .iter()
            .find_map(|target| categories.iter().position(|c| c == target)),
        Direction::Right => targets
            .iter()
            .find_map(|target| categories.iter().rposition(|c| c == target)),
        Direction::LeftDis => categories.iter().position(|c| targets.contains(c)),
        Direction::RightDis => categories.iter().rposition(|c| targets.contains(c)),
    }
}

/// Strips binarization markers and function tags: `@NP-SBJ=2` → `NP`.
/// Bracket escapes such as `-LRB-` are returned unchanged.
pub fn base_category(label: &str) -> &str {
    let label = label.strip_prefix('@').unwrap_or(label);
    if label.starts_with('-') {
        return label;
    }
    match label.find(['-', '=']) {
        Some(0) | None => label,
        Some(end) => &label[..end],
    }
}
