//! End-to-end grading scenarios through the public API

use predicates::prelude::*;

use framecheck::config::OutputFormat;
use framecheck::diff::{
    compare_nested_sequence, compare_rows_unordered, compare_sequence, compare_string_sequence,
    compare_table_numeric, LengthScope, Location,
};
use framecheck::output::render_to_string;
use framecheck::{CellValue, Checker, Config, Mismatch, Table};

fn frame(rows: &[[f64; 2]]) -> Table {
    Table::from_rows(
        0..rows.len() as i64,
        ["a", "b"],
        rows.iter()
            .map(|r| r.iter().map(|v| CellValue::Float(*v)).collect())
            .collect(),
    )
    .unwrap()
}

fn floats(values: &[f64]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::Float(*v)).collect()
}

#[test]
fn test_table_within_tolerance() {
    let a = frame(&[[1.0, 2.0], [3.0, 4.0]]);
    let b = frame(&[[1.0, 2.0], [3.0, 4.005]]);

    assert!(compare_table_numeric(&a, &b, 0.011, &CellValue::Int(-999), false).is_equal());
}

#[test]
fn test_table_outside_tolerance_reports_cell() {
    let a = frame(&[[1.0, 2.0], [3.0, 4.0]]);
    let b = frame(&[[1.0, 2.0], [3.0, 4.005]]);
    let result = compare_table_numeric(&a, &b, 0.001, &CellValue::Int(-999), false);

    match result.mismatch() {
        Some(Mismatch::Value {
            location:
                Location::Cell {
                    row,
                    row_label,
                    column_label,
                    ..
                },
            left,
            right,
        }) => {
            assert_eq!(*row, 1);
            assert_eq!(*row_label, CellValue::Int(1));
            assert_eq!(column_label, "b");
            assert_eq!(*left, CellValue::Float(4.0));
            assert_eq!(*right, CellValue::Float(4.005));
        }
        other => panic!("unexpected mismatch: {other:?}"),
    }

    let text = render_to_string(&result, OutputFormat::Terminal).unwrap();
    assert!(predicate::str::contains("Problem at labels: 1 b").eval(&text));
    assert!(predicate::str::contains("4.0 != 4.005").eval(&text));
}

#[test]
fn test_sequence_prefix_is_a_length_mismatch() {
    let result = compare_sequence(&floats(&[1.0, 2.0, 3.0]), &floats(&[1.0, 2.0, 3.0, 4.0]), 0.001);

    assert!(matches!(
        result.mismatch(),
        Some(Mismatch::Length {
            scope: LengthScope::Sequence,
            left: 3,
            right: 4,
            ..
        })
    ));
    let text = render_to_string(&result, OutputFormat::Terminal).unwrap();
    assert!(predicate::str::contains("lengths differ").eval(&text));
    assert!(predicate::str::contains("contents differ").not().eval(&text));
}

#[test]
fn test_rows_in_any_order() {
    let a = vec![floats(&[1.0, 2.0]), floats(&[3.0, 4.0])];
    let b = vec![floats(&[3.0, 4.0]), floats(&[1.0, 2.0])];
    assert!(compare_rows_unordered(&a, &b, 0.001).is_equal());
}

#[test]
fn test_string_character_mismatch() {
    let result = compare_string_sequence(&["abc"], &["abd"], 0.001, true, false);

    assert!(matches!(
        result.mismatch(),
        Some(Mismatch::Character {
            index: 0,
            position: 2,
            left: Some('c'),
            right: Some('d'),
            ..
        })
    ));
    let text = render_to_string(&result, OutputFormat::Terminal).unwrap();
    assert!(predicate::str::contains("Strings differ at character: 2").eval(&text));
    assert!(predicate::str::contains("c != d").eval(&text));
}

#[test]
fn test_non_finite_values_equal_themselves() {
    let nested = vec![floats(&[1.0, f64::NAN]), floats(&[f64::INFINITY, 2.0])];
    assert!(compare_nested_sequence(&nested, &nested.clone(), 0.001).is_equal());
    assert!(compare_rows_unordered(&nested, &nested.clone(), 0.011).is_equal());
    assert!(compare_sequence(&nested[0], &nested[0].clone(), 0.001).is_equal());

    let table = frame(&[[f64::INFINITY, 1.0]]);
    let sentinel = CellValue::Int(-999);
    assert!(compare_table_numeric(&table, &table.clone(), 0.011, &sentinel, true).is_equal());
}

#[test]
fn test_caller_tables_untouched() {
    let mut a = frame(&[[1.0, 2.0]]);
    a.rows[0].cells[1] = CellValue::Null;
    let before = a.clone();
    let b = frame(&[[1.0, -999.0]]);

    assert!(compare_table_numeric(&a, &b, 0.011, &CellValue::Int(-999), false).is_equal());
    assert_eq!(a, before);
}

#[test]
fn test_checker_json_for_harnesses() {
    let checker = Checker::new(Config::new().with_output_format(OutputFormat::Json));
    let result = compare_sequence(&floats(&[1.0]), &floats(&[2.0]), 0.001);
    let mut out = termcolor::NoColor::new(Vec::new());

    assert!(!checker.report_to(result, &mut out));
    let json: serde_json::Value = serde_json::from_slice(&out.into_inner()).unwrap();
    assert_eq!(json["check"], "sequence");
    assert_eq!(json["mismatch"]["location"]["at"], "position");
    assert_eq!(json["mismatch"]["location"]["index"], 0);
}
