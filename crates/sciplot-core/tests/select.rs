// File: crates/sciplot-core/tests/select.rs
// Purpose: Validate the plot-type selection ladder.

use sciplot_core::{select, Data, Series, Variant};

#[test]
fn empty_series_selects_line() {
    let series = Series::normalize(&Data::Seq(vec![])).unwrap();
    assert_eq!(select(&series), Variant::Line);
}

#[test]
fn matrix_rows_select_matrix() {
    let series =
        Series::normalize(&Data::from(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])).unwrap();
    assert_eq!(select(&series), Variant::Matrix);
}

#[test]
fn duplicate_numeric_keys_select_scatter() {
    let series = Series::normalize(&Data::from(vec![(1.0, 1.0), (1.0, 2.0), (2.0, 3.0)])).unwrap();
    assert_eq!(select(&series), Variant::Scatter);
}

#[test]
fn duplicate_string_keys_select_scatter() {
    // Duplicates win over the string-key bar rule.
    let series =
        Series::normalize(&Data::from(vec![("a", 1.0), ("a", 2.0), ("b", 3.0)])).unwrap();
    assert_eq!(select(&series), Variant::Scatter);
}

#[test]
fn unique_string_keys_select_bar() {
    let series =
        Series::normalize(&Data::from(vec![("John", 3.5), ("Mary", 4.0), ("Charlie", 2.2)]))
            .unwrap();
    assert_eq!(select(&series), Variant::Bar);
}

#[test]
fn unique_numeric_keys_select_line() {
    let series = Series::normalize(&Data::from(vec![3.0, 1.0, 4.0, 1.5])).unwrap();
    assert_eq!(select(&series), Variant::Line);
}
