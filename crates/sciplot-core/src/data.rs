// File: crates/sciplot-core/src/data.rs
// Summary: Loosely-typed caller input tree plus conversions from common Rust shapes.

use std::collections::BTreeMap;

/// One element of caller-supplied data: a number, a string, or a nested
/// sequence. This mirrors what a dynamic plotting API would accept and lets
/// the normalizer classify shapes at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum Datum {
    Num(f64),
    Str(String),
    Seq(Vec<Datum>),
}

impl Datum {
    pub fn type_name(&self) -> &'static str {
        match self {
            Datum::Num(_) => "number",
            Datum::Str(_) => "string",
            Datum::Seq(_) => "sequence",
        }
    }
}

/// Top-level input: either a key-value mapping (keys unique, insertion order
/// preserved) or a finite sequence of elements.
#[derive(Clone, Debug, PartialEq)]
pub enum Data {
    Map(Vec<(Datum, Datum)>),
    Seq(Vec<Datum>),
}

impl Data {
    pub fn type_name(&self) -> &'static str {
        match self {
            Data::Map(_) => "mapping",
            Data::Seq(_) => "sequence",
        }
    }
}

impl From<f64> for Datum {
    fn from(v: f64) -> Self {
        Datum::Num(v)
    }
}

impl From<i64> for Datum {
    fn from(v: i64) -> Self {
        Datum::Num(v as f64)
    }
}

impl From<&str> for Datum {
    fn from(v: &str) -> Self {
        Datum::Str(v.to_string())
    }
}

impl From<String> for Datum {
    fn from(v: String) -> Self {
        Datum::Str(v)
    }
}

impl<T: Into<Datum>> From<Vec<T>> for Datum {
    fn from(v: Vec<T>) -> Self {
        Datum::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<f64>> for Data {
    fn from(v: Vec<f64>) -> Self {
        Data::Seq(v.into_iter().map(Datum::Num).collect())
    }
}

impl From<&[f64]> for Data {
    fn from(v: &[f64]) -> Self {
        Data::Seq(v.iter().copied().map(Datum::Num).collect())
    }
}

impl From<Vec<(f64, f64)>> for Data {
    fn from(v: Vec<(f64, f64)>) -> Self {
        Data::Seq(
            v.into_iter()
                .map(|(k, y)| Datum::Seq(vec![Datum::Num(k), Datum::Num(y)]))
                .collect(),
        )
    }
}

impl From<Vec<(&str, f64)>> for Data {
    fn from(v: Vec<(&str, f64)>) -> Self {
        Data::Seq(
            v.into_iter()
                .map(|(k, y)| Datum::Seq(vec![Datum::Str(k.to_string()), Datum::Num(y)]))
                .collect(),
        )
    }
}

impl From<Vec<(String, f64)>> for Data {
    fn from(v: Vec<(String, f64)>) -> Self {
        Data::Seq(
            v.into_iter()
                .map(|(k, y)| Datum::Seq(vec![Datum::Str(k), Datum::Num(y)]))
                .collect(),
        )
    }
}

impl From<Vec<Vec<f64>>> for Data {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Data::Seq(
            rows.into_iter()
                .map(|r| Datum::Seq(r.into_iter().map(Datum::Num).collect()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, f64>> for Data {
    fn from(m: BTreeMap<String, f64>) -> Self {
        Data::Map(
            m.into_iter()
                .map(|(k, v)| (Datum::Str(k), Datum::Num(v)))
                .collect(),
        )
    }
}

impl From<BTreeMap<i64, f64>> for Data {
    fn from(m: BTreeMap<i64, f64>) -> Self {
        Data::Map(
            m.into_iter()
                .map(|(k, v)| (Datum::Num(k as f64), Datum::Num(v)))
                .collect(),
        )
    }
}
