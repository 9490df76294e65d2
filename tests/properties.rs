//! Property tests for the comparators

use proptest::prelude::*;

use framecheck::diff::{
    compare_nested_sequence, compare_rows_unordered, compare_sequence, compare_series_exact,
    compare_series_numeric, compare_string_sequence, compare_table_exact, compare_table_numeric,
};
use framecheck::{CellValue, Series, Table};

// ---------------------------------------------------------------------------
// Strategy generators
// ---------------------------------------------------------------------------

/// Numbers and holes, the way a computed result column looks
fn arb_numeric_cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        4 => (-1_000.0f64..1_000.0).prop_map(CellValue::Float),
        2 => (-1_000i64..1_000).prop_map(CellValue::Int),
        1 => Just(CellValue::Null),
        1 => Just(CellValue::Float(f64::NAN)),
        1 => Just(CellValue::Float(f64::INFINITY)),
        1 => Just(CellValue::Float(f64::NEG_INFINITY)),
    ]
}

/// Finite numbers plus NaN and both infinities, with no sentinel step to hide them
fn arb_raw_number() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        6 => (-100.0f64..100.0).prop_map(CellValue::Float),
        1 => Just(CellValue::Float(f64::NAN)),
        1 => Just(CellValue::Float(f64::INFINITY)),
        1 => Just(CellValue::Float(f64::NEG_INFINITY)),
    ]
}

fn arb_text_cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        4 => "[a-d]{0,3}".prop_map(CellValue::from),
        1 => Just(CellValue::Null),
    ]
}

fn arb_table(cell: BoxedStrategy<CellValue>) -> impl Strategy<Value = Table> {
    (1usize..5, 1usize..4).prop_flat_map(move |(rows, cols)| {
        proptest::collection::vec(proptest::collection::vec(cell.clone(), cols), rows).prop_map(
            move |values| {
                Table::from_rows(0..rows as i64, (0..cols).map(|c| format!("c{}", c)), values)
                    .unwrap()
            },
        )
    })
}

fn arb_table_pair(cell: BoxedStrategy<CellValue>) -> impl Strategy<Value = (Table, Table)> {
    (1usize..4, 1usize..3).prop_flat_map(move |(rows, cols)| {
        let values =
            || proptest::collection::vec(proptest::collection::vec(cell.clone(), cols), rows);
        (values(), values()).prop_map(move |(a, b)| {
            let build = |v| {
                Table::from_rows(0..rows as i64, (0..cols).map(|c| format!("c{}", c)), v).unwrap()
            };
            (build(a), build(b))
        })
    })
}

fn arb_sequence() -> impl Strategy<Value = Vec<CellValue>> {
    proptest::collection::vec(arb_raw_number(), 0..8)
}

fn arb_rows() -> impl Strategy<Value = Vec<Vec<CellValue>>> {
    (1usize..4).prop_flat_map(|width| {
        proptest::collection::vec(
            proptest::collection::vec(
                prop_oneof![
                    4 => (-10i64..10).prop_map(CellValue::Int),
                    1 => arb_raw_number(),
                ],
                width,
            ),
            1..6,
        )
    })
}

fn sentinel() -> CellValue {
    CellValue::Int(-999)
}

// ---------------------------------------------------------------------------
// Reflexivity
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_numeric_table_reflexive(table in arb_table(arb_numeric_cell().boxed())) {
        prop_assert!(compare_table_numeric(&table, &table.clone(), 0.011, &sentinel(), true).is_equal());
    }

    #[test]
    fn prop_exact_table_reflexive(table in arb_table(arb_text_cell().boxed())) {
        prop_assert!(compare_table_exact(&table, &table.clone(), &CellValue::from(""), true).is_equal());
    }

    #[test]
    fn prop_series_reflexive(values in proptest::collection::vec(arb_numeric_cell(), 0..10)) {
        let series = Series::from_values(Some("s"), values);
        prop_assert!(compare_series_numeric(&series, &series.clone(), 0.011, &sentinel(), true, true).is_equal());
        prop_assert!(compare_series_exact(&series, &series.clone(), &sentinel(), true, true).is_equal());
    }

    #[test]
    fn prop_sequences_reflexive(seq in arb_sequence()) {
        prop_assert!(compare_sequence(&seq, &seq, 0.001).is_equal());
        let nested = vec![seq.clone(), seq];
        prop_assert!(compare_nested_sequence(&nested, &nested, 0.001).is_equal());
    }

    #[test]
    fn prop_rows_reflexive(rows in arb_rows()) {
        prop_assert!(compare_rows_unordered(&rows, &rows.clone(), 0.011).is_equal());
    }

    #[test]
    fn prop_strings_reflexive(strings in proptest::collection::vec("[a-z]{0,6}", 0..6)) {
        prop_assert!(compare_string_sequence(&strings, &strings, 0.001, true, false).is_equal());
    }
}

// ---------------------------------------------------------------------------
// Boolean symmetry
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_numeric_table_symmetric((a, b) in arb_table_pair(arb_numeric_cell().boxed())) {
        prop_assert_eq!(
            compare_table_numeric(&a, &b, 0.5, &sentinel(), false).is_equal(),
            compare_table_numeric(&b, &a, 0.5, &sentinel(), false).is_equal()
        );
    }

    #[test]
    fn prop_exact_table_symmetric((a, b) in arb_table_pair(arb_text_cell().boxed())) {
        prop_assert_eq!(
            compare_table_exact(&a, &b, &CellValue::from(""), true).is_equal(),
            compare_table_exact(&b, &a, &CellValue::from(""), true).is_equal()
        );
    }

    #[test]
    fn prop_sequence_symmetric(a in arb_sequence(), b in arb_sequence()) {
        prop_assert_eq!(
            compare_sequence(&a, &b, 1.0).is_equal(),
            compare_sequence(&b, &a, 1.0).is_equal()
        );
    }

    #[test]
    fn prop_strings_symmetric(
        a in proptest::collection::vec("[ab]{0,3}", 0..4),
        b in proptest::collection::vec("[ab]{0,3}", 0..4),
        skip in any::<bool>(),
    ) {
        prop_assert_eq!(
            compare_string_sequence(&a, &b, 0.001, false, skip).is_equal(),
            compare_string_sequence(&b, &a, 0.001, false, skip).is_equal()
        );
    }
}

// ---------------------------------------------------------------------------
// Tolerance boundary and row order
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_difference_equal_to_tolerance_is_not_equal(base in -1_000i64..1_000, step in 1i64..8) {
        // Powers of two keep the difference exact in binary floating point
        let tolerance = 2f64.powi(-(step as i32));
        let a = vec![CellValue::Float(base as f64)];
        let at = vec![CellValue::Float(base as f64 + tolerance)];
        let inside = vec![CellValue::Float(base as f64 + tolerance / 2.0)];

        prop_assert!(!compare_sequence(&a, &at, tolerance).is_equal());
        prop_assert!(compare_sequence(&a, &inside, tolerance).is_equal());
        prop_assert!(!compare_nested_sequence(&[a.clone()], &[at.clone()], tolerance).is_equal());
        prop_assert!(!compare_rows_unordered(&[a.clone()], &[at.clone()], tolerance).is_equal());

        let table = |v: &Vec<CellValue>| Table::from_rows([0], ["x"], vec![v.clone()]).unwrap();
        prop_assert!(!compare_table_numeric(&table(&a), &table(&at), tolerance, &sentinel(), false).is_equal());
        prop_assert!(compare_table_numeric(&table(&a), &table(&inside), tolerance, &sentinel(), false).is_equal());

        let left = Series::from_values(None, a);
        let right = Series::from_values(None, at);
        prop_assert!(!compare_series_numeric(&left, &right, tolerance, &sentinel(), false, false).is_equal());
    }

    #[test]
    fn prop_rows_match_any_permutation(rows in arb_rows(), seed in any::<u64>()) {
        let mut shuffled = rows.clone();
        let len = shuffled.len();
        let mut state = seed;
        for i in (1..len).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            shuffled.swap(i, (state >> 33) as usize % (i + 1));
        }
        prop_assert!(compare_rows_unordered(&rows, &shuffled, 0.001).is_equal());
        prop_assert!(compare_rows_unordered(&shuffled, &rows, 0.001).is_equal());
    }

    #[test]
    fn prop_missing_positions_filled_with_shared_sentinel(
        values in proptest::collection::vec(-100.0f64..100.0, 1..6),
        hole in any::<prop::sample::Index>(),
    ) {
        let hole = hole.index(values.len());
        let mut with_nan: Vec<CellValue> = values.iter().map(|v| CellValue::Float(*v)).collect();
        let mut with_null = with_nan.clone();
        with_nan[hole] = CellValue::Float(f64::NAN);
        with_null[hole] = CellValue::Null;

        let a = Table::from_rows(0..values.len() as i64, ["x"], with_nan.into_iter().map(|v| vec![v]).collect()).unwrap();
        let b = Table::from_rows(0..values.len() as i64, ["x"], with_null.into_iter().map(|v| vec![v]).collect()).unwrap();

        prop_assert!(compare_table_numeric(&a, &b, 0.011, &sentinel(), false).is_equal());
    }
}
