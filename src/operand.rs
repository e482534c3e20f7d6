//! Operand shapes accepted by the binary vector operations.

use crate::error::{Result, VectorError};
use std::fmt;
use std::str::FromStr;

/// Right- or left-hand side of a binary vector operation: either a vector of
/// the same kind or a plain number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<V> {
    Vector(V),
    Scalar(f64),
}

impl<V> From<f64> for Operand<V> {
    fn from(s: f64) -> Self {
        Operand::Scalar(s)
    }
}

/// The four component-wise arithmetic families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn eval(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide => a / b,
        }
    }

    /// Only addition accepts a scalar on the left.
    pub fn is_commutative(self) -> bool {
        matches!(self, BinaryOp::Add)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BinaryOp::Add => "add",
            BinaryOp::Subtract => "subtract",
            BinaryOp::Multiply => "multiply",
            BinaryOp::Divide => "divide",
        };
        f.write_str(name)
    }
}

/// Unit for signed angle results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    pub fn convert_radians(self, rad: f64) -> f64 {
        match self {
            AngleUnit::Radians => rad,
            AngleUnit::Degrees => rad.to_degrees(),
        }
    }
}

impl FromStr for AngleUnit {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rad" => Ok(AngleUnit::Radians),
            "deg" => Ok(AngleUnit::Degrees),
            other => Err(VectorError::invalid_operand(format!(
                "unknown angle unit `{other}`, expected `rad` or `deg`"
            ))),
        }
    }
}

/// Reads a required numeric field out of a JSON object.
pub(crate) fn number_field(obj: &serde_json::Value, field: &str, op: &str) -> Result<f64> {
    obj.get(field)
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| {
            VectorError::invalid_operand(format!("{op}: field `{field}` missing or not a number"))
        })
}

/// Reads the first `N` entries of a number sequence.
pub(crate) fn leading<const N: usize>(seq: &[f64], op: &str) -> Result<[f64; N]> {
    match seq.get(..N) {
        Some(head) => {
            let mut out = [0.0; N];
            out.copy_from_slice(head);
            Ok(out)
        }
        None => Err(VectorError::invalid_operand(format!(
            "{op}: expected at least {N} components, got {}",
            seq.len()
        ))),
    }
}

/// Number of leading components kept by `to_array`: zero or absent means all.
pub(crate) fn take_count(n: Option<usize>, dims: usize) -> usize {
    match n {
        None | Some(0) => dims,
        Some(k) => k.min(dims),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_angle_unit_parse() {
        assert_eq!("rad".parse::<AngleUnit>(), Ok(AngleUnit::Radians));
        assert_eq!("deg".parse::<AngleUnit>(), Ok(AngleUnit::Degrees));
        assert!(matches!(
            "grad".parse::<AngleUnit>(),
            Err(VectorError::InvalidOperand(_))
        ));
    }

    #[test]
    fn test_binary_op_eval() {
        assert_eq!(BinaryOp::Subtract.eval(5.0, 2.0), 3.0);
        assert!(BinaryOp::Divide.eval(1.0, 0.0).is_infinite());
        assert!(BinaryOp::Add.is_commutative());
        assert!(!BinaryOp::Divide.is_commutative());
    }

    #[test]
    fn test_number_field() {
        let obj = json!({ "x": 1.5, "y": "nope" });
        assert_eq!(number_field(&obj, "x", "t"), Ok(1.5));
        assert!(number_field(&obj, "y", "t").is_err());
        assert!(number_field(&obj, "z", "t").is_err());
    }

    #[test]
    fn test_leading_and_take_count() {
        assert_eq!(leading::<2>(&[1.0, 2.0, 3.0], "t"), Ok([1.0, 2.0]));
        assert!(leading::<3>(&[1.0, 2.0], "t").is_err());
        assert_eq!(take_count(None, 3), 3);
        assert_eq!(take_count(Some(0), 2), 2);
        assert_eq!(take_count(Some(1), 2), 1);
        assert_eq!(take_count(Some(9), 2), 2);
    }
}
