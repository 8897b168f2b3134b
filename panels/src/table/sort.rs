//! Client-side row sorting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::options::TableOptions;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// A cell value as seen by the sorter.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Missing value; orders before everything else when ascending.
    Null,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Null => 0,
            SortValue::Bool(_) => 1,
            SortValue::Number(_) => 2,
            SortValue::Text(_) => 3,
        }
    }
}

impl From<Option<i64>> for SortValue {
    fn from(value: Option<i64>) -> Self {
        value.map_or(SortValue::Null, |n| SortValue::Number(n as f64))
    }
}

impl From<Option<f64>> for SortValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(SortValue::Null, SortValue::Number)
    }
}

impl From<Option<&str>> for SortValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(SortValue::Null, |s| SortValue::Text(s.to_string()))
    }
}

/// Trait for rows that can be sorted by column name.
pub trait Sortable {
    /// Value of the cell in `column`. Unknown columns return `Null`.
    fn sort_value(&self, column: &str) -> SortValue;
}

/// Compare two cell values in ascending order.
///
/// Text compares case-insensitively first so "batman" and "Batman" sit
/// together, then by raw bytes for a stable tie-break.
pub fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Null, SortValue::Null) => Ordering::Equal,
        (SortValue::Number(x), SortValue::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (SortValue::Text(x), SortValue::Text(y)) => x
            .to_lowercase()
            .cmp(&y.to_lowercase())
            .then_with(|| x.cmp(y)),
        (SortValue::Bool(x), SortValue::Bool(y)) => x.cmp(y),
        _ => a.rank().cmp(&b.rank()),
    }
}

fn compare_by<T: Sortable>(a: &T, b: &T, key: &str, direction: SortDirection) -> Ordering {
    direction.apply(compare_values(&a.sort_value(key), &b.sort_value(key)))
}

/// Sort rows in place by the table's primary and secondary keys.
///
/// The sort is stable, so rows that compare equal on both keys keep their
/// incoming (server) order.
pub fn sort_rows<T: Sortable>(rows: &mut [T], options: &TableOptions) {
    let primary = options.sort_key.as_str();
    let secondary = options.secondary_sort_key.as_deref();
    rows.sort_by(|a, b| {
        let ordering = compare_by(a, b, primary, options.sort_direction);
        match secondary {
            Some(key) if ordering == Ordering::Equal => compare_by(
                a,
                b,
                key,
                options.secondary_sort_direction.unwrap_or_default(),
            ),
            _ => ordering,
        }
    });
}

/// Sorted copy of `rows`.
pub fn sorted_rows<T: Sortable + Clone>(rows: &[T], options: &TableOptions) -> Vec<T> {
    let mut rows = rows.to_vec();
    sort_rows(&mut rows, options);
    rows
}
