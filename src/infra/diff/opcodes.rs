use std::hash::Hash;
use std::ops::Range;

use similar::DiffTag;

use super::matcher::SequenceMatcher;
use crate::domain::Algorithm;

/// One edit operation with the ranges it covers in each sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    pub tag: DiffTag,
    pub old: Range<usize>,
    pub new: Range<usize>,
}

impl Opcode {
    pub fn new(tag: DiffTag, old: Range<usize>, new: Range<usize>) -> Self {
        Self { tag, old, new }
    }
}

/// Computes opcodes for `old` → `new` with the requested algorithm.
pub fn compute_opcodes<T>(algorithm: Algorithm, old: &[T], new: &[T]) -> Vec<Opcode>
where
    T: Eq + Hash + Ord,
{
    match algorithm {
        Algorithm::RatcliffObershelp => SequenceMatcher::new(old, new).opcodes(),
        Algorithm::Myers => from_similar(similar::Algorithm::Myers, old, new),
        Algorithm::Patience => from_similar(similar::Algorithm::Patience, old, new),
    }
}

fn from_similar<T>(algorithm: similar::Algorithm, old: &[T], new: &[T]) -> Vec<Opcode>
where
    T: Eq + Hash + Ord,
{
    similar::capture_diff_slices(algorithm, old, new)
        .iter()
        .map(|op| {
            let (tag, old, new) = op.as_tag_tuple();
            Opcode::new(tag, old, new)
        })
        .filter(|op| !(op.old.is_empty() && op.new.is_empty()))
        .collect()
}
