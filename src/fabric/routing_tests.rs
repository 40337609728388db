use super::*;
use crate::fabric::BUTTERFLIES;

/// Positions `(p, p + h)` paired by the in-place DIF stage with span `h`,
/// in the order they are assigned to butterflies.
fn stage_pairs(span: usize) -> [(usize, usize); BUTTERFLIES] {
    let mut pairs = [(0, 0); BUTTERFLIES];
    let lower = (0..SLOTS).filter(|p| (p & span) == 0);
    for (b, p) in lower.enumerate() {
        pairs[b] = (p, p + span);
    }
    pairs
}

/// Slot holding each DIF position once the stage with `span` has run.
fn locations_after(span: usize) -> [usize; SLOTS] {
    let mut loc = [0; SLOTS];
    for (b, (lo, hi)) in stage_pairs(span).into_iter().enumerate() {
        loc[lo] = 2 * b;
        loc[hi] = 2 * b + 1;
    }
    loc
}

/// Feedback slot each destination must read to run the stage with `span`.
fn expected_feedback(span: usize) -> [u8; SLOTS] {
    let previous = locations_after(span << 1);
    let mut expected = [0; SLOTS];
    for (b, (lo, hi)) in stage_pairs(span).into_iter().enumerate() {
        expected[2 * b] = previous[lo] as u8;
        expected[2 * b + 1] = previous[hi] as u8;
    }
    expected
}

fn column<const W: usize>(table: &[[Source; W]; SLOTS], index: usize) -> [Source; SLOTS] {
    core::array::from_fn(|slot| table[slot][index])
}

fn feedback_column(expected: [u8; SLOTS]) -> [Source; SLOTS] {
    core::array::from_fn(|slot| Source::Feedback(expected[slot]))
}

fn distinct_words() -> [PackedComplex; SLOTS] {
    core::array::from_fn(|i| PackedComplex::from_parts(i as i8 + 1, -(i as i8)))
}

#[test]
fn test_bypass_pairs_stride_eight() {
    for (b, (lo, hi)) in stage_pairs(8).into_iter().enumerate() {
        assert_eq!(BYPASS[2 * b], Source::Fresh(lo as u8));
        assert_eq!(BYPASS[2 * b + 1], Source::Fresh(hi as u8));
    }
}

#[test]
fn test_layer_tables_match_dif_decomposition() {
    let stride4 = feedback_column(expected_feedback(4));
    let stride2 = feedback_column(expected_feedback(2));
    let stride1 = feedback_column(expected_feedback(1));

    assert_eq!(column(&LAYER_A, 1), stride4);
    assert_eq!(column(&LAYER_A, 2), stride2);
    assert_eq!(column(&LAYER_B, 1), stride1);
    assert_eq!(column(&LAYER_C, 1), stride4);
    assert_eq!(column(&LAYER_C, 2), stride2);
    assert_eq!(column(&LAYER_C, 3), stride1);
}

#[test]
fn test_last_stage_leaves_dif_order_in_place() {
    let loc = locations_after(1);
    for (p, slot) in loc.into_iter().enumerate() {
        assert_eq!(p, slot);
    }
}

#[test]
fn test_feedback_columns_are_permutations() {
    for col in [column(&LAYER_A, 1), column(&LAYER_A, 2), column(&LAYER_B, 1), column(&LAYER_C, 3)] {
        let mut seen = [false; SLOTS];
        for source in col {
            let Source::Feedback(i) = source else {
                panic!("expected a feedback source, got {:?}", source);
            };
            assert!(!seen[usize::from(i)], "slot {} read twice", i);
            seen[usize::from(i)] = true;
        }
    }
}

#[test]
fn test_selector_zero_reads_fresh_in_place() {
    for slot in 0..SLOTS {
        let fresh = Source::Fresh(slot as u8);
        assert_eq!(LAYER_A[slot][0], fresh);
        assert_eq!(LAYER_B[slot][0], fresh);
        assert_eq!(LAYER_C[slot][0], fresh);
    }
}

#[test]
fn test_reserved_layer_a_encoding_is_zero() {
    let fresh = distinct_words();
    let feedback = distinct_words();
    let mode = ModeVector::new(0, 3, 0, Select::LayerA).unwrap();

    assert_eq!(route(&fresh, &feedback, mode), [PackedComplex::ZERO; SLOTS]);
}

#[test]
fn test_route_final_layer() {
    let fresh = distinct_words();
    let feedback: [PackedComplex; SLOTS] =
        core::array::from_fn(|i| PackedComplex::from_parts(-(i as i8) - 20, 7));

    let bypass = route(&fresh, &feedback, ModeVector::bypass());
    assert_eq!(bypass[0], fresh[0]);
    assert_eq!(bypass[1], fresh[8]);
    assert_eq!(bypass[15], fresh[15]);

    let a = route(&fresh, &feedback, ModeVector::new(0, 1, 0, Select::LayerA).unwrap());
    assert_eq!(a[1], feedback[8]);
    assert_eq!(a[8], feedback[1]);

    let b = route(&fresh, &feedback, ModeVector::new(1, 0, 0, Select::LayerB).unwrap());
    assert_eq!(b[1], feedback[2]);
    assert_eq!(b[2], feedback[1]);

    let c = route(&fresh, &feedback, ModeVector::new(0, 0, 2, Select::LayerC).unwrap());
    assert_eq!(c[4], feedback[1]);
    assert_eq!(c[9], feedback[12]);
}

#[test]
fn test_unselected_layers_are_ignored() {
    let fresh = distinct_words();
    let feedback = [PackedComplex::from_parts(9, 9); SLOTS];

    // s1 and s3 do not matter while layer A is selected
    let base = route(&fresh, &feedback, ModeVector::new(0, 2, 0, Select::LayerA).unwrap());
    let other = route(&fresh, &feedback, ModeVector::new(1, 2, 3, Select::LayerA).unwrap());
    assert_eq!(base, other);
}
