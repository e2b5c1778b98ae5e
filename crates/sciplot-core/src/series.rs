// File: crates/sciplot-core/src/series.rs
// Summary: Series model and the shape normalizer turning caller input into
// ordered (key, value) pairs.

use std::collections::HashSet;

use crate::data::{Data, Datum};
use crate::error::{PlotError, Result};

/// Key of one series entry. Integer indices from enumeration are carried as
/// `Num`; matrix rows have no key.
#[derive(Clone, Debug, PartialEq)]
pub enum Key {
    Num(f64),
    Str(String),
    None,
}

impl Key {
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Key::Num(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Scalar(f64),
    Row(Vec<f64>),
}

impl Value {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_row(&self) -> Option<&[f64]> {
        match self {
            Value::Row(r) => Some(r),
            _ => None,
        }
    }
}

/// Ordered (key, value) pairs feeding a plot. Immutable after construction.
///
/// Invariants (enforced by [`Series::normalize`]): all keys share the same
/// variant, and all values share the same shape (all scalars, or all rows of
/// equal length).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pairs: Vec<(Key, Value)>,
}

impl Series {
    /// Normalize arbitrary supported input into a Series.
    ///
    /// - mapping -> its entries, insertion order;
    /// - sequence of 2-element sequences -> those pairs verbatim;
    /// - sequence of sequences of length != 2 -> matrix rows keyed by `None`;
    /// - sequence of scalars -> `(index, value)` enumerated from 0;
    /// - empty sequence -> empty Series.
    ///
    /// Anything else fails with `UnsupportedDataShape` naming the shape.
    pub fn normalize(data: &Data) -> Result<Series> {
        match data {
            Data::Map(entries) => Self::from_map(entries),
            Data::Seq(items) => Self::from_seq(items),
        }
    }

    fn from_map(entries: &[(Datum, Datum)]) -> Result<Series> {
        let mut pairs = Vec::with_capacity(entries.len());
        for (k, v) in entries {
            let key = match k {
                Datum::Num(n) => Key::Num(*n),
                Datum::Str(s) => Key::Str(s.clone()),
                Datum::Seq(_) => {
                    return Err(PlotError::shape("mapping with sequence key"));
                }
            };
            let value = match v {
                Datum::Num(n) => Value::Scalar(*n),
                other => {
                    return Err(PlotError::shape(format!(
                        "mapping with {} value",
                        other.type_name()
                    )));
                }
            };
            pairs.push((key, value));
        }
        Series::from_pairs(pairs)
    }

    fn from_seq(items: &[Datum]) -> Result<Series> {
        if items.is_empty() {
            return Ok(Series::default());
        }
        let all_seq = items.iter().all(|d| matches!(d, Datum::Seq(_)));
        if all_seq {
            let lens: Vec<usize> = items
                .iter()
                .map(|d| match d {
                    Datum::Seq(s) => s.len(),
                    _ => unreachable!(),
                })
                .collect();
            if lens.iter().all(|&l| l == 2) {
                return Self::from_pair_seq(items);
            }
            if lens.iter().all(|&l| l != 2) {
                return Self::from_rows(items, &lens);
            }
            return Err(PlotError::shape(
                "sequence mixing 2-element pairs and other-length rows",
            ));
        }
        let all_num = items.iter().all(|d| matches!(d, Datum::Num(_)));
        if all_num {
            let pairs = items
                .iter()
                .enumerate()
                .map(|(i, d)| match d {
                    Datum::Num(n) => (Key::Num(i as f64), Value::Scalar(*n)),
                    _ => unreachable!(),
                })
                .collect();
            return Series::from_pairs(pairs);
        }
        // Mixed or string elements: name the first offending element type.
        let offender = items
            .iter()
            .find(|d| !matches!(d, Datum::Num(_)))
            .map(|d| d.type_name())
            .unwrap_or("unknown");
        Err(PlotError::shape(format!("sequence of {} elements", offender)))
    }

    fn from_pair_seq(items: &[Datum]) -> Result<Series> {
        let mut pairs = Vec::with_capacity(items.len());
        for item in items {
            let (k, v) = match item {
                Datum::Seq(s) => (&s[0], &s[1]),
                _ => unreachable!(),
            };
            let key = match k {
                Datum::Num(n) => Key::Num(*n),
                Datum::Str(s) => Key::Str(s.clone()),
                Datum::Seq(_) => return Err(PlotError::shape("pair with sequence key")),
            };
            let value = match v {
                Datum::Num(n) => Value::Scalar(*n),
                other => {
                    return Err(PlotError::shape(format!(
                        "pair with {} value",
                        other.type_name()
                    )));
                }
            };
            pairs.push((key, value));
        }
        Series::from_pairs(pairs)
    }

    fn from_rows(items: &[Datum], lens: &[usize]) -> Result<Series> {
        let first_len = lens[0];
        if lens.iter().any(|&l| l != first_len) {
            return Err(PlotError::shape("ragged matrix rows"));
        }
        let mut pairs = Vec::with_capacity(items.len());
        for item in items {
            let row = match item {
                Datum::Seq(s) => s,
                _ => unreachable!(),
            };
            let mut cells = Vec::with_capacity(row.len());
            for cell in row {
                match cell {
                    Datum::Num(n) => cells.push(*n),
                    other => {
                        return Err(PlotError::shape(format!(
                            "matrix row with {} cell",
                            other.type_name()
                        )));
                    }
                }
            }
            pairs.push((Key::None, Value::Row(cells)));
        }
        Series::from_pairs(pairs)
    }

    /// Build from explicit pairs, checking the key/value shape invariants.
    pub fn from_pairs(pairs: Vec<(Key, Value)>) -> Result<Series> {
        if let Some((first_key, first_value)) = pairs.first() {
            let key_tag = std::mem::discriminant(first_key);
            if pairs.iter().any(|(k, _)| std::mem::discriminant(k) != key_tag) {
                return Err(PlotError::shape("series mixing key types"));
            }
            match first_value {
                Value::Scalar(_) => {
                    if pairs.iter().any(|(_, v)| !matches!(v, Value::Scalar(_))) {
                        return Err(PlotError::shape("series mixing scalar and row values"));
                    }
                }
                Value::Row(r) => {
                    let len = r.len();
                    if pairs
                        .iter()
                        .any(|(_, v)| v.as_row().map(|r| r.len()) != Some(len))
                    {
                        return Err(PlotError::shape("series mixing row lengths"));
                    }
                }
            }
        }
        Ok(Series { pairs })
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Key, Value)> {
        self.pairs.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.pairs.iter().map(|(k, _)| k)
    }

    /// Scalar values, in series order. Empty for matrix series.
    pub fn scalar_values(&self) -> Vec<f64> {
        self.pairs
            .iter()
            .filter_map(|(_, v)| v.as_scalar())
            .collect()
    }

    /// Matrix rows, in series order, when this is a row-valued series.
    pub fn rows(&self) -> Option<Vec<&[f64]>> {
        if !self.has_rows() {
            return None;
        }
        Some(self.pairs.iter().filter_map(|(_, v)| v.as_row()).collect())
    }

    pub fn has_rows(&self) -> bool {
        matches!(self.pairs.first(), Some((_, Value::Row(_))))
    }

    pub fn keys_are_strings(&self) -> bool {
        matches!(self.pairs.first(), Some((Key::Str(_), _)))
    }

    /// Number of distinct keys. `None` keys all collapse to one.
    pub fn distinct_key_count(&self) -> usize {
        match self.pairs.first() {
            None => 0,
            Some((Key::None, _)) => 1,
            Some((Key::Str(_), _)) => {
                let set: HashSet<&str> =
                    self.pairs.iter().filter_map(|(k, _)| k.as_str()).collect();
                set.len()
            }
            Some((Key::Num(_), _)) => {
                let mut nums: Vec<f64> =
                    self.pairs.iter().filter_map(|(k, _)| k.as_num()).collect();
                nums.sort_by(f64::total_cmp);
                nums.dedup_by(|a, b| a.total_cmp(b).is_eq());
                nums.len()
            }
        }
    }
}
