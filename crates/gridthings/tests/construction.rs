//! End-to-end tests for building grids from the supported input shapes

use gridthings::prelude::*;
use gridthings::{InRange, IntGrid, NonEmpty, ValueGrid};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

/// Column maps, records and rows all produce the same grid
#[test]
fn test_input_shapes_agree() {
    let rows = vec![vec![1i64, 2, 3], vec![4, 5, 6]];

    let by_rows = IntGrid::builder().from_rows(rows.clone()).unwrap();

    let records = rows
        .iter()
        .map(|r| r.iter().copied().enumerate().collect::<BTreeMap<_, _>>());
    let by_records = IntGrid::builder().from_records(records).unwrap();

    let mut columns: BTreeMap<usize, BTreeMap<usize, i64>> = BTreeMap::new();
    for (row, values) in rows.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            columns.entry(col).or_default().insert(row, *value);
        }
    }
    let by_columns = IntGrid::builder().from_columns(columns).unwrap();

    assert_eq!(by_rows.to_values(), rows);
    assert_eq!(by_records.to_values(), rows);
    assert_eq!(by_columns.to_values(), rows);
    assert_eq!(by_columns.flatten(), by_rows.flatten());
}

/// Text options control line and field separators
#[test]
fn test_text_options() {
    let options = TextOptions::with_sep("|").line_sep(";");
    let grid = GridBuilder::<String>::new()
        .from_text("a|bb;c|dd", &options)
        .unwrap();
    assert_eq!(grid.values(), vec![vec!["a", "bb"], vec!["c", "dd"]]);

    let err = GridBuilder::<String>::new()
        .from_text("abc", &TextOptions::default().line_sep(""))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidOptions(_)));
}

/// Whitespace stripping can be turned off
#[test]
fn test_keep_whitespace() {
    let options = TextOptions::with_sep(",").strip_whitespace(false);
    let grid = GridBuilder::<String>::new()
        .from_text(" a,b \nc,d", &options)
        .unwrap();
    assert_eq!(grid.get(0, 0).unwrap().value(), " a");
    assert_eq!(grid.get(0, 1).unwrap().value(), "b ");
}

/// Dynamic values detect numbers and booleans
#[test]
fn test_value_grid() {
    let grid: ValueGrid = GridBuilder::new()
        .from_text("3,x\n4,true", &TextOptions::with_sep(","))
        .unwrap();
    assert_eq!(grid.get_column(0).sum().unwrap(), 7.0);
    assert!(matches!(
        grid.get_column(1).sum(),
        Err(Error::TypeMismatch { .. })
    ));
    assert!(matches!(
        grid.get_column(1).sorted(),
        Err(Error::TypeMismatch { .. })
    ));
    assert_eq!(grid.out_of_bounds_fill(), &Value::Empty);
}

/// Validators reject the first bad cell with its coordinates
#[test]
fn test_validators() {
    let err = GridBuilder::<i64>::new()
        .validator(InRange::new(1, 5))
        .from_text("12\n36", &TextOptions::default())
        .unwrap_err();
    assert_eq!(err, Error::validation(1, 1, "6 is outside 1..=5"));

    let err = GridBuilder::<Value>::new()
        .validator(NonEmpty)
        .from_text("a,,b", &TextOptions::with_sep(","))
        .unwrap_err();
    assert!(matches!(err, Error::Validation { row: 0, col: 1, .. }));
}

/// Grids can be shared between threads
#[test]
fn test_shared_across_threads() {
    let grid = std::sync::Arc::new(
        GridBuilder::<i64>::new()
            .from_text("12\n34", &TextOptions::default())
            .unwrap(),
    );
    let handles: Vec<_> = (0..2)
        .map(|row| {
            let grid = std::sync::Arc::clone(&grid);
            std::thread::spawn(move || grid.get_row(row).sum().unwrap())
        })
        .collect();
    let sums: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(sums, vec![3.0, 7.0]);
}
