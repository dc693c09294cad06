//! Positional statement arguments
//!
//! Values are always bound, never formatted into SQL text. List filters bind
//! a single array parameter and compare with `= ANY($n)`.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A single typed positional parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    SmallInt(Option<i16>),
    Int(Option<i32>),
    BigInt(Option<i64>),
    Bool(Option<bool>),
    Text(Option<String>),
    Uuid(Option<Uuid>),
    Date(Option<NaiveDate>),
    Timestamp(Option<DateTime<Utc>>),
    SmallIntArray(Vec<i16>),
    BigIntArray(Vec<i64>),
    TextArray(Vec<String>),
}

macro_rules! scalar_value {
    ($($ty:ty => $variant:ident),+ $(,)?) => {$(
        impl From<$ty> for SqlValue {
            fn from(value: $ty) -> Self {
                SqlValue::$variant(Some(value))
            }
        }

        impl From<Option<$ty>> for SqlValue {
            fn from(value: Option<$ty>) -> Self {
                SqlValue::$variant(value)
            }
        }
    )+};
}

scalar_value! {
    i16 => SmallInt,
    i32 => Int,
    i64 => BigInt,
    bool => Bool,
    String => Text,
    Uuid => Uuid,
    NaiveDate => Date,
    DateTime<Utc> => Timestamp,
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(Some(value.to_string()))
    }
}

impl From<&String> for SqlValue {
    fn from(value: &String) -> Self {
        SqlValue::Text(Some(value.clone()))
    }
}

impl From<&Option<String>> for SqlValue {
    fn from(value: &Option<String>) -> Self {
        SqlValue::Text(value.clone())
    }
}

impl From<Vec<i16>> for SqlValue {
    fn from(value: Vec<i16>) -> Self {
        SqlValue::SmallIntArray(value)
    }
}

impl From<&[i16]> for SqlValue {
    fn from(value: &[i16]) -> Self {
        SqlValue::SmallIntArray(value.to_vec())
    }
}

impl From<Vec<i64>> for SqlValue {
    fn from(value: Vec<i64>) -> Self {
        SqlValue::BigIntArray(value)
    }
}

impl From<&[i64]> for SqlValue {
    fn from(value: &[i64]) -> Self {
        SqlValue::BigIntArray(value.to_vec())
    }
}

impl From<Vec<String>> for SqlValue {
    fn from(value: Vec<String>) -> Self {
        SqlValue::TextArray(value)
    }
}

/// Ordered positional arguments for one statement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: Vec<SqlValue>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value without returning its placeholder
    pub fn push(&mut self, value: impl Into<SqlValue>) -> &mut Self {
        self.values.push(value.into());
        self
    }

    /// Append a value and return its `$n` placeholder
    pub fn bind(&mut self, value: impl Into<SqlValue>) -> String {
        self.values.push(value.into());
        format!("${}", self.values.len())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SqlValue> {
        self.values.get(index)
    }

    pub fn into_values(self) -> Vec<SqlValue> {
        self.values
    }
}

/// Build [`Args`] from a list of expressions convertible into [`SqlValue`]
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut args = $crate::Args::new();
        $(args.push($value);)+
        args
    }};
}

/// Bind `#[repr(i16)]` code enums as their `SMALLINT` value
#[macro_export]
macro_rules! small_int_code {
    ($($ty:ty),+ $(,)?) => {$(
        impl From<$ty> for $crate::SqlValue {
            fn from(value: $ty) -> Self {
                $crate::SqlValue::SmallInt(Some(value as i16))
            }
        }
    )+};
}
