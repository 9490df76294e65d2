//! Comparators for unlabeled sequences

use crate::model::CellValue;

use super::{CellComparator, Check, Comparison, LengthScope, Location, Mismatch, StringContext};

/// Compare two flat sequences element-wise within `tolerance`.
///
/// Values are compared over the shared length first; a length difference
/// is only reported once that whole prefix matched.
pub fn compare_sequence(seq1: &[CellValue], seq2: &[CellValue], tolerance: f64) -> Comparison {
    let check = Check::Sequence;
    let comparator = CellComparator::Tolerance(tolerance);

    if let Some(index) = seq1
        .iter()
        .zip(seq2)
        .position(|(a, b)| !comparator.equal(a, b))
    {
        return Comparison::different(
            check,
            Mismatch::Value {
                location: Location::Position { index },
                left: seq1[index].clone(),
                right: seq2[index].clone(),
            },
        );
    }

    if seq1.len() != seq2.len() {
        return Comparison::different(
            check,
            Mismatch::Length {
                scope: LengthScope::Sequence,
                left: seq1.len(),
                right: seq2.len(),
                context: None,
            },
        );
    }

    Comparison::equal(check)
}

/// Compare two sequences of strings.
///
/// For the first position whose strings differ, a difference in character
/// count is reported unless `skip_length_check` is set; otherwise the first
/// differing character is. When one string is a prefix of the other, the
/// reported character position is the shorter length and the missing side
/// is `None`. A difference in list length is reported after the shared
/// positions all matched, with the first unmatched element as context.
///
/// `_tolerance` keeps the argument list in line with the other sequence
/// comparators; strings always compare exactly.
pub fn compare_string_sequence<S: AsRef<str>>(
    seq1: &[S],
    seq2: &[S],
    _tolerance: f64,
    show_context: bool,
    skip_length_check: bool,
) -> Comparison {
    let check = Check::StringSequence;

    for (index, (a, b)) in seq1.iter().zip(seq2).enumerate() {
        let (a, b) = (a.as_ref(), b.as_ref());
        if a == b {
            continue;
        }

        let (len_a, len_b) = (a.chars().count(), b.chars().count());
        if !skip_length_check && len_a != len_b {
            return Comparison::different(
                check,
                Mismatch::Length {
                    scope: LengthScope::StringAt { index },
                    left: len_a,
                    right: len_b,
                    context: None,
                },
            );
        }

        let position = a
            .chars()
            .zip(b.chars())
            .position(|(x, y)| x != y)
            .unwrap_or(len_a.min(len_b));

        return Comparison::different(
            check,
            Mismatch::Character {
                index,
                position,
                left: a.chars().nth(position),
                right: b.chars().nth(position),
                context: show_context.then(|| StringContext {
                    left: Some(a.to_string()),
                    right: Some(b.to_string()),
                }),
            },
        );
    }

    if seq1.len() != seq2.len() {
        let shared = seq1.len().min(seq2.len());
        return Comparison::different(
            check,
            Mismatch::Length {
                scope: LengthScope::Sequence,
                left: seq1.len(),
                right: seq2.len(),
                context: show_context.then(|| StringContext {
                    left: seq1.get(shared).map(|s| s.as_ref().to_string()),
                    right: seq2.get(shared).map(|s| s.as_ref().to_string()),
                }),
            },
        );
    }

    Comparison::equal(check)
}

/// Compare two sequences of sequences.
///
/// Outer lengths, then each inner length, then per element the runtime
/// kind and the tolerance; the first failing check is reported.
pub fn compare_nested_sequence(
    seq1: &[Vec<CellValue>],
    seq2: &[Vec<CellValue>],
    tolerance: f64,
) -> Comparison {
    let check = Check::NestedSequence;

    if seq1.len() != seq2.len() {
        return Comparison::different(
            check,
            Mismatch::Length {
                scope: LengthScope::Outer,
                left: seq1.len(),
                right: seq2.len(),
                context: None,
            },
        );
    }

    let comparator = CellComparator::Tolerance(tolerance);
    for (row, (inner1, inner2)) in seq1.iter().zip(seq2).enumerate() {
        if inner1.len() != inner2.len() {
            return Comparison::different(
                check,
                Mismatch::Length {
                    scope: LengthScope::Inner { row },
                    left: inner1.len(),
                    right: inner2.len(),
                    context: None,
                },
            );
        }

        for (column, (a, b)) in inner1.iter().zip(inner2).enumerate() {
            let location = Location::Nested { row, column };
            if a.cell_type() != b.cell_type() {
                return Comparison::different(
                    check,
                    Mismatch::ElementType {
                        location,
                        left: a.cell_type(),
                        right: b.cell_type(),
                    },
                );
            }
            if !comparator.equal(a, b) {
                return Comparison::different(
                    check,
                    Mismatch::Value {
                        location,
                        left: a.clone(),
                        right: b.clone(),
                    },
                );
            }
        }
    }

    Comparison::equal(check)
}
