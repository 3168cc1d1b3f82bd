//! Typed comparison predicate gating whether a node contributes a result.
//!
//! Dispatch is on the operand's type:
//! - string: `=` only
//! - number: all five operators, integers compared exactly
//! - bool: `=` only; a non-bool compared value counts as `false`
//! - anything else never matches

use crate::path::{DottedPath, extract};
use anyhow::bail;
use serde::Deserialize;
use serde_json::{Number, Value};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Operator {
    #[default]
    Equal,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl Operator {
    fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::Equal => ordering == Ordering::Equal,
            Self::Greater => ordering == Ordering::Greater,
            Self::GreaterOrEqual => ordering != Ordering::Less,
            Self::Less => ordering == Ordering::Less,
            Self::LessOrEqual => ordering != Ordering::Greater,
        }
    }
}

impl FromStr for Operator {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> crate::Result<Self> {
        let op = match raw.trim().to_ascii_lowercase().as_str() {
            "=" | "==" | "eq" => Self::Equal,
            ">" | "gt" => Self::Greater,
            ">=" | "gte" => Self::GreaterOrEqual,
            "<" | "lt" => Self::Less,
            "<=" | "lte" => Self::LessOrEqual,
            _ => bail!("invalid comparator: {:?}", raw),
        };
        Ok(op)
    }
}

impl TryFrom<String> for Operator {
    type Error = anyhow::Error;

    fn try_from(raw: String) -> crate::Result<Self> {
        raw.parse()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Condition {
    /// Where to find the compared value when the input is a mapping.
    #[serde(rename = "sourcePath", alias = "path")]
    pub path: DottedPath,

    #[serde(rename = "comparator", alias = "operator")]
    pub operator: Operator,

    #[serde(rename = "value", alias = "operand")]
    pub operand: Value,
}

impl Condition {
    /// Test `input` against this condition.
    ///
    /// A mapping input is compared through `path` (a missing key compares as
    /// null); a mapping input with no `path` never matches. Any other input is
    /// compared directly.
    pub fn evaluate(&self, input: &Value) -> bool {
        let compared: Cow<'_, Value> = match input {
            Value::Object(_) if self.path.is_root() => return false,
            Value::Object(_) => extract(input, &self.path),
            _ => Cow::Borrowed(input),
        };

        match &self.operand {
            Value::String(expected) => {
                self.operator == Operator::Equal && compared.as_str() == Some(expected.as_str())
            }
            Value::Number(expected) => match compared.as_ref() {
                Value::Number(actual) => compare_numbers(actual, expected)
                    .is_some_and(|ordering| self.operator.holds(ordering)),
                _ => false,
            },
            Value::Bool(expected) => {
                if self.operator != Operator::Equal {
                    return false;
                }
                match compared.as_bool() {
                    Some(actual) => actual == *expected,
                    None => !*expected,
                }
            }
            _ => false,
        }
    }
}

fn compare_numbers(actual: &Number, expected: &Number) -> Option<Ordering> {
    if let (Some(a), Some(b)) = (actual.as_i64(), expected.as_i64()) {
        return Some(a.cmp(&b));
    }
    if let (Some(a), Some(b)) = (actual.as_u64(), expected.as_u64()) {
        return Some(a.cmp(&b));
    }
    actual.as_f64()?.partial_cmp(&expected.as_f64()?)
}
