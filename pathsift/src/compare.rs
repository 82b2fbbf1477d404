//! Comparison expressions such as `>1MB` or `<7d`.
//!
//! An expression is parsed once, when a matcher is built, into a
//! [`Comparison`] holding an operator and a threshold in base units (bytes
//! for sizes, seconds for ages). Matching a file is then a single float
//! comparison.
//!
//! Grammar (whitespace allowed between parts):
//!
//! ```text
//! expression := operator? number unit?
//! operator   := "<" | ">" | "<=" | ">=" | "==" | "="
//! number     := digits ("." digits)?
//! ```
//!
//! A missing operator means equality.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,
    /// `==` or `=`
    Equal,
}

impl Operator {
    /// Evaluate `actual <op> threshold`.
    #[must_use]
    pub fn apply(self, actual: f64, threshold: f64) -> bool {
        match self {
            Self::Less => actual < threshold,
            Self::LessOrEqual => actual <= threshold,
            Self::Greater => actual > threshold,
            Self::GreaterOrEqual => actual >= threshold,
            Self::Equal => (actual - threshold).abs() < f64::EPSILON,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Equal => "==",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Which family of units an expression is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Byte sizes: `b`, `k`/`kb`, `m`/`mb`, `g`/`gb`, `t`/`tb` (powers of 1024).
    Size,
    /// Durations: `s`, `m`/`min`, `h`, `d`, `w`. Bare numbers are seconds.
    Age,
}

impl UnitKind {
    fn multiplier(self, unit: &str) -> Option<f64> {
        let unit = unit.to_ascii_lowercase();
        let factor = match (self, unit.as_str()) {
            (_, "") => 1.0,
            (Self::Size, "b") => 1.0,
            (Self::Size, "k" | "kb") => 1024.0,
            (Self::Size, "m" | "mb") => 1024.0 * 1024.0,
            (Self::Size, "g" | "gb") => 1024.0 * 1024.0 * 1024.0,
            (Self::Size, "t" | "tb") => 1024.0 * 1024.0 * 1024.0 * 1024.0,
            (Self::Age, "s") => 1.0,
            (Self::Age, "m" | "min") => 60.0,
            (Self::Age, "h") => 3_600.0,
            (Self::Age, "d") => 86_400.0,
            (Self::Age, "w") => 604_800.0,
            _ => return None,
        };
        Some(factor)
    }
}

/// A parsed comparison expression.
///
/// # Examples
///
/// ```
/// use pathsift::compare::{Comparison, Operator, UnitKind};
///
/// let cmp = Comparison::parse(">1MB", UnitKind::Size).unwrap();
/// assert_eq!(cmp.operator(), Operator::Greater);
/// assert_eq!(cmp.threshold(), 1_048_576.0);
/// assert!(cmp.matches(2_000_000.0));
/// assert!(!cmp.matches(1_000.0));
///
/// let week = Comparison::parse("<7d", UnitKind::Age).unwrap();
/// assert!(week.matches(3_600.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    operator: Operator,
    value: f64,
    unit: Option<String>,
    threshold: f64,
}

impl Comparison {
    /// Parse `expression` in units of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExpression`] if the text does not match the
    /// grammar or names a unit that `kind` does not know.
    pub fn parse(expression: &str, kind: UnitKind) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidExpression {
            expression: expression.to_string(),
            reason: reason.to_string(),
        };

        let rest = expression.trim();
        let (operator, rest) = split_operator(rest);
        let rest = rest.trim_start();

        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, unit) = rest.split_at(number_len);
        if number.is_empty() {
            return Err(invalid("expected a number"));
        }
        if number.starts_with('.') || number.ends_with('.') || number.matches('.').count() > 1 {
            return Err(invalid("malformed number"));
        }
        let value: f64 = number.parse().map_err(|_| invalid("malformed number"))?;

        let unit = unit.trim();
        if !unit.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid("unexpected characters after number"));
        }
        let factor = kind
            .multiplier(unit)
            .ok_or_else(|| invalid(&format!("unknown {kind:?} unit '{unit}'").to_lowercase()))?;

        Ok(Self {
            operator,
            value,
            unit: (!unit.is_empty()).then(|| unit.to_string()),
            threshold: value * factor,
        })
    }

    /// The comparison operator.
    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The number as written, before unit scaling.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The unit as written, if any.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// The threshold in base units.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Test a measured value, in base units, against this comparison.
    #[must_use]
    pub fn matches(&self, actual: f64) -> bool {
        self.operator.apply(actual, self.threshold)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.operator, self.value, self.unit().unwrap_or(""))
    }
}

fn split_operator(s: &str) -> (Operator, &str) {
    // Two-character operators first so "<=" is not read as "<".
    for (prefix, op) in [
        ("<=", Operator::LessOrEqual),
        (">=", Operator::GreaterOrEqual),
        ("==", Operator::Equal),
        ("<", Operator::Less),
        (">", Operator::Greater),
        ("=", Operator::Equal),
    ] {
        if let Some(rest) = s.strip_prefix(prefix) {
            return (op, rest);
        }
    }
    (Operator::Equal, s)
}
