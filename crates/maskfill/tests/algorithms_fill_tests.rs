//! Tests for gap-bounded forward and backward fill.
//!
//! These tests verify the fill routines used to propagate valid values into
//! missing positions:
//! - Unbounded and gap-bounded forward fill
//! - Leading-edge behavior (no predecessor)
//! - Backward fill as mirrored forward fill
//!
//! ## Test Organization
//!
//! 1. **Forward Fill** - Unbounded propagation and no-op cases
//! 2. **Gap Bounds** - Runs shorter, equal and longer than `max_gap`
//! 3. **Backward Fill** - Mirror property and trailing edge
//! 4. **Properties** - Idempotence and immutability of inputs

use maskfill::prelude::*;

fn seq(values: &[Option<f64>]) -> MaskedSequence<f64> {
    MaskedSequence::from_options(values)
}

// ============================================================================
// Forward Fill Tests
// ============================================================================

/// Test unbounded forward fill propagates the last valid value.
#[test]
fn test_forward_fill_unbounded() {
    let input = seq(&[Some(1.0), None, None, Some(4.0), None]);
    let out = forward_fill(&input, None).unwrap();

    assert_eq!(
        out.to_options(),
        vec![Some(1.0), Some(1.0), Some(1.0), Some(4.0), Some(4.0)]
    );
    assert!(!out.has_missing());
}

/// Test forward fill with no missing values returns an equal sequence.
#[test]
fn test_forward_fill_no_missing_is_noop() {
    let input = MaskedSequence::unmasked(vec![1.0, 2.0, 3.0]);

    assert_eq!(forward_fill(&input, None).unwrap(), input);
    assert_eq!(forward_fill(&input, Some(0)).unwrap(), input);
    assert_eq!(forward_fill(&input, Some(5)).unwrap(), input);
}

/// Test forward fill on an empty sequence.
#[test]
fn test_forward_fill_empty() {
    let input: MaskedSequence<f64> = MaskedSequence::unmasked(vec![]);
    let out = forward_fill(&input, Some(2)).unwrap();

    assert!(out.is_empty());
}

/// Test that a missing first position is never filled.
///
/// Verifies the leading edge does not wrap around to the last element.
#[test]
fn test_forward_fill_leading_edge_not_filled() {
    let input = seq(&[None, None, Some(3.0), None, Some(9.0)]);
    let out = forward_fill(&input, None).unwrap();

    assert_eq!(
        out.to_options(),
        vec![None, None, Some(3.0), Some(3.0), Some(9.0)]
    );
}

/// Test that position 0 stays missing even when the last element is valid.
#[test]
fn test_forward_fill_no_wraparound_with_bound() {
    let input = seq(&[None, Some(2.0), Some(7.0)]);
    let out = forward_fill(&input, Some(3)).unwrap();

    assert!(out.is_missing(0));
    assert_eq!(out.get(0), None);
}

/// Test forward fill on an all-missing sequence.
#[test]
fn test_forward_fill_all_missing() {
    let input = seq(&[None, None, None]);
    let out = forward_fill(&input, None).unwrap();

    assert_eq!(out.count_missing(), 3);
}

/// Test that filled values keep the underlying value of the predecessor.
#[test]
fn test_forward_fill_copies_data_value() {
    let input = MaskedSequence::new(vec![2.5, -1.0, -1.0], vec![false, true, true]).unwrap();
    let out = forward_fill(&input, None).unwrap();

    assert_eq!(out.data(), &[2.5, 2.5, 2.5]);
    assert_eq!(out.mask(), &[false, false, false]);
}

// ============================================================================
// Gap Bound Tests
// ============================================================================

/// Test the documented example: `[1, _, _, 4, _, 6]` with `max_gap = 1`.
#[test]
fn test_forward_fill_max_gap_example() {
    let input = seq(&[Some(1.0), None, None, Some(4.0), None, Some(6.0)]);
    let out = forward_fill(&input, Some(1)).unwrap();

    assert_eq!(
        out.to_options(),
        vec![Some(1.0), None, None, Some(4.0), Some(4.0), Some(6.0)]
    );
}

/// Test that a run is filled iff its length does not exceed `max_gap`.
///
/// Verifies every combination of run length 1..=5 and bound 0..=5 for a run
/// enclosed by valid values.
#[test]
fn test_forward_fill_gap_bound_respected() {
    for gap in 1..=5usize {
        let mut values = vec![Some(10.0)];
        values.extend(core::iter::repeat(None).take(gap));
        values.push(Some(20.0));
        let input = seq(&values);

        for max_gap in 0..=5usize {
            let out = forward_fill(&input, Some(max_gap)).unwrap();
            let run = 1..=gap;
            if gap <= max_gap {
                assert!(
                    run.clone().all(|i| out.get(i) == Some(10.0)),
                    "gap {gap} should be filled with max_gap {max_gap}"
                );
            } else {
                assert!(
                    run.clone().all(|i| out.is_missing(i)),
                    "gap {gap} should stay missing with max_gap {max_gap}"
                );
            }
        }
    }
}

/// Test that `max_gap = 0` fills nothing.
#[test]
fn test_forward_fill_zero_max_gap() {
    let input = seq(&[Some(1.0), None, Some(3.0), None]);
    let out = forward_fill(&input, Some(0)).unwrap();

    assert_eq!(out, input);
}

/// Test multiple runs with mixed lengths under one bound.
#[test]
fn test_forward_fill_mixed_runs() {
    let input = seq(&[
        Some(1.0),
        None,
        None,
        Some(2.0),
        None,
        None,
        None,
        Some(3.0),
        None,
    ]);
    let out = forward_fill(&input, Some(2)).unwrap();

    assert_eq!(
        out.to_options(),
        vec![
            Some(1.0),
            Some(1.0),
            Some(1.0),
            Some(2.0),
            None,
            None,
            None,
            Some(3.0),
            Some(3.0),
        ]
    );
}

/// Test a trailing run longer than the bound stays missing.
#[test]
fn test_forward_fill_trailing_run_exceeds_bound() {
    let input = seq(&[Some(5.0), None, None, None]);
    let out = forward_fill(&input, Some(2)).unwrap();

    assert_eq!(out.to_options(), vec![Some(5.0), None, None, None]);
}

/// Test that reverting a run restores the hidden values of the input.
#[test]
fn test_forward_fill_reverted_run_restores_data() {
    let input = seq(&[Some(1.0), None, None, Some(4.0)]);
    let out = forward_fill(&input, Some(1)).unwrap();

    assert_eq!(out, input);
    assert_eq!(out.data(), input.data());
    assert_eq!(out.mask(), input.mask());
}

/// Test that hidden values survive a revert in backward fill too.
#[test]
fn test_backward_fill_reverted_run_restores_data() {
    let input = MaskedSequence::new(
        vec![1.0, -7.0, -8.0, -9.0, 5.0],
        vec![false, true, true, true, false],
    )
    .unwrap();
    let out = backward_fill(&input, Some(2)).unwrap();

    assert_eq!(out.data(), &[1.0, -7.0, -8.0, -9.0, 5.0]);
    assert_eq!(out.mask(), input.mask());
}

// ============================================================================
// Backward Fill Tests
// ============================================================================

/// Test unbounded backward fill propagates the next valid value.
#[test]
fn test_backward_fill_unbounded() {
    let input = seq(&[None, Some(2.0), None, None, Some(5.0), None]);
    let out = backward_fill(&input, None).unwrap();

    assert_eq!(
        out.to_options(),
        vec![Some(2.0), Some(2.0), Some(5.0), Some(5.0), Some(5.0), None]
    );
}

/// Test backward fill equals reversed forward fill of the reversed input.
#[test]
fn test_backward_fill_mirror_property() {
    let input = seq(&[
        None,
        Some(1.0),
        None,
        None,
        Some(4.0),
        None,
        None,
        None,
        Some(8.0),
        None,
    ]);

    for max_gap in [None, Some(0), Some(1), Some(2), Some(3), Some(10)] {
        let backward = backward_fill(&input, max_gap).unwrap();
        let mirrored = forward_fill(&input.reversed(), max_gap).unwrap().reversed();
        assert_eq!(backward, mirrored, "mirror property failed for {max_gap:?}");
    }
}

/// Test that the last position is never backward filled.
#[test]
fn test_backward_fill_trailing_edge_not_filled() {
    let input = seq(&[Some(3.0), None]);
    let out = backward_fill(&input, None).unwrap();

    assert!(out.is_missing(1));
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test that unbounded forward fill is idempotent.
#[test]
fn test_forward_fill_idempotent() {
    let input = seq(&[
        None,
        Some(1.0),
        None,
        Some(3.0),
        None,
        None,
        Some(6.0),
        None,
    ]);
    let once = forward_fill(&input, None).unwrap();
    let twice = forward_fill(&once, None).unwrap();

    assert_eq!(once, twice);
}

/// Test that the input sequence is not modified.
#[test]
fn test_fill_does_not_mutate_input() {
    let input = seq(&[Some(1.0), None, Some(3.0)]);
    let snapshot = input.clone();

    let _ = forward_fill(&input, None).unwrap();
    let _ = backward_fill(&input, Some(1)).unwrap();

    assert_eq!(input, snapshot);
}

/// Test fill works with `f32` values and option vectors as input.
#[test]
fn test_forward_fill_f32_options_input() {
    let values: Vec<Option<f32>> = vec![Some(1.5), None, Some(2.5)];
    let out = forward_fill(&values, None).unwrap();

    assert_eq!(out.to_options(), vec![Some(1.5f32), Some(1.5), Some(2.5)]);
}

/// Test fill on integer sequences.
#[test]
fn test_fill_integer_values() {
    let values: Vec<Option<i64>> = vec![Some(3), None, None, Some(9), None];

    assert_eq!(
        forward_fill(&values, Some(2)).unwrap().to_options(),
        vec![Some(3), Some(3), Some(3), Some(9), Some(9)]
    );
    assert_eq!(
        backward_fill(&values, None).unwrap().to_options(),
        vec![Some(3), Some(9), Some(9), Some(9), None]
    );
}
