//! Two-component vector.
//!
//! Arithmetic returns a new vector and leaves `self` alone. The only methods
//! that mutate are the ones taking `&mut self`: `divide_scalar`,
//! `set_magnitude` and the `randomize*`/`add_random*` family. They return
//! `&mut Self` for chaining.

use crate::error::{Result, VectorError};
use crate::operand::{self, AngleUnit, BinaryOp, Operand};
use crate::random::uniform;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::f64::consts::TAU;
use tracing::warn;

/// A point or a displacement in 2D space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

pub type Operand2 = Operand<Vector2>;

impl From<Vector2> for Operand2 {
    fn from(v: Vector2) -> Self {
        Operand::Vector(v)
    }
}

impl TryFrom<&Value> for Operand2 {
    type Error = VectorError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(Operand::Scalar).ok_or_else(|| {
                VectorError::invalid_operand(format!("{n} is not representable as f64"))
            }),
            Value::Object(_) => Vector2::from_object(value).map(Operand::Vector),
            other => Err(VectorError::invalid_operand(format!(
                "expected a Vector2 or a number, got {other}"
            ))),
        }
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2 { x, y }
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}

impl_vector_ops!(Vector2 { x, y });

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    /// Unit vector pointing at `theta` radians.
    pub fn from_angle(theta: f64) -> Self {
        Vector2::new(theta.cos(), theta.sin())
    }

    /// Displacement from `p` to `q`.
    pub fn from_points(p: Vector2, q: Vector2) -> Self {
        q - p
    }

    /// Reads the numeric fields `x` and `y` of a JSON object.
    pub fn from_object(obj: &Value) -> Result<Self> {
        Ok(Vector2::new(
            operand::number_field(obj, "x", "Vector2::from_object")?,
            operand::number_field(obj, "y", "Vector2::from_object")?,
        ))
    }

    /// Reads the first two entries of `seq`.
    pub fn from_array(seq: &[f64]) -> Result<Self> {
        operand::leading::<2>(seq, "Vector2::from_array").map(Vector2::from)
    }

    /// Random vector inside the unit disk.
    ///
    /// Length and angle are each drawn uniformly, so samples cluster towards
    /// the centre; this is not an area-uniform disk sample.
    pub fn random_unit() -> Self {
        Vector2::random_unit_with(&mut rand::rng())
    }

    pub fn random_unit_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let length = rng.random::<f64>();
        let angle = rng.random::<f64>() * TAU;
        Vector2::new(angle.cos() * length, angle.sin() * length)
    }

    /// Unit vector at a uniformly random angle.
    pub fn random_direction() -> Self {
        Vector2::random_direction_with(&mut rand::rng())
    }

    pub fn random_direction_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Vector2::from_angle(rng.random::<f64>() * TAU)
    }

    // -- general binary operations ------------------------------------------

    fn combine(self, op: BinaryOp, rhs: Operand2) -> Vector2 {
        match rhs {
            Operand::Vector(v) => Vector2::new(op.eval(self.x, v.x), op.eval(self.y, v.y)),
            Operand::Scalar(s) => Vector2::new(op.eval(self.x, s), op.eval(self.y, s)),
        }
    }

    /// Static form of the four arithmetic families with either side being a
    /// vector or a scalar.
    ///
    /// A scalar on the left is only accepted for [`BinaryOp::Add`]; two
    /// scalars are always rejected.
    pub fn apply(op: BinaryOp, lhs: Operand2, rhs: Operand2) -> Result<Vector2> {
        match (lhs, rhs) {
            (Operand::Vector(a), rhs) => Ok(a.combine(op, rhs)),
            (Operand::Scalar(s), Operand::Vector(b)) if op.is_commutative() => {
                Ok(b.combine(op, Operand::Scalar(s)))
            }
            (Operand::Scalar(_), Operand::Vector(_)) => Err(VectorError::invalid_operand(
                format!("Vector2::{op} does not accept a number on the left"),
            )),
            (Operand::Scalar(_), Operand::Scalar(_)) => Err(VectorError::invalid_operand(
                format!("Vector2::{op} requires at least one Vector2"),
            )),
        }
    }

    /// [`Vector2::apply`] for dynamically typed operands.
    pub fn apply_json(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Vector2> {
        Vector2::apply(op, Operand2::try_from(lhs)?, Operand2::try_from(rhs)?)
    }

    /// Static `add`, accepting the operands in either order.
    pub fn sum(lhs: impl Into<Operand2>, rhs: impl Into<Operand2>) -> Result<Vector2> {
        Vector2::apply(BinaryOp::Add, lhs.into(), rhs.into())
    }

    pub fn add(self, rhs: impl Into<Operand2>) -> Vector2 {
        self.combine(BinaryOp::Add, rhs.into())
    }

    pub fn subtract(self, rhs: impl Into<Operand2>) -> Vector2 {
        self.combine(BinaryOp::Subtract, rhs.into())
    }

    pub fn multiply(self, rhs: impl Into<Operand2>) -> Vector2 {
        self.combine(BinaryOp::Multiply, rhs.into())
    }

    /// Component-wise division. Dividing by zero yields `inf`/`NaN`.
    pub fn divide(self, rhs: impl Into<Operand2>) -> Vector2 {
        self.combine(BinaryOp::Divide, rhs.into())
    }

    // -- single-axis and scalar variants ------------------------------------

    pub fn add_x(self, s: f64) -> Vector2 {
        Vector2::new(self.x + s, self.y)
    }

    pub fn add_y(self, s: f64) -> Vector2 {
        Vector2::new(self.x, self.y + s)
    }

    pub fn subtract_x(self, s: f64) -> Vector2 {
        Vector2::new(self.x - s, self.y)
    }

    pub fn subtract_y(self, s: f64) -> Vector2 {
        Vector2::new(self.x, self.y - s)
    }

    pub fn multiply_x(self, s: f64) -> Vector2 {
        Vector2::new(self.x * s, self.y)
    }

    pub fn multiply_y(self, s: f64) -> Vector2 {
        Vector2::new(self.x, self.y * s)
    }

    pub fn divide_x(self, s: f64) -> Vector2 {
        Vector2::new(self.x / s, self.y)
    }

    pub fn divide_y(self, s: f64) -> Vector2 {
        Vector2::new(self.x, self.y / s)
    }

    pub fn add_scalar(self, s: f64) -> Vector2 {
        self.add(s)
    }

    pub fn subtract_scalar(self, s: f64) -> Vector2 {
        self.subtract(s)
    }

    pub fn multiply_scalar(self, s: f64) -> Vector2 {
        self.multiply(s)
    }

    /// Divides in place.
    ///
    /// A divisor of exactly zero leaves the vector untouched and logs a
    /// warning instead of producing `inf`/`NaN`. Use [`Vector2::divide`] for
    /// plain IEEE division.
    pub fn divide_scalar(&mut self, s: f64) -> &mut Self {
        if s == 0.0 {
            warn!(x = self.x, y = self.y, "cannot divide Vector2 by zero, leaving it unchanged");
            return self;
        }
        self.x /= s;
        self.y /= s;
        self
    }

    pub fn add_scalar_x(self, s: f64) -> Vector2 {
        self.add_x(s)
    }

    pub fn add_scalar_y(self, s: f64) -> Vector2 {
        self.add_y(s)
    }

    pub fn subtract_scalar_x(self, s: f64) -> Vector2 {
        self.subtract_x(s)
    }

    pub fn subtract_scalar_y(self, s: f64) -> Vector2 {
        self.subtract_y(s)
    }

    pub fn multiply_scalar_x(self, s: f64) -> Vector2 {
        self.multiply_x(s)
    }

    pub fn multiply_scalar_y(self, s: f64) -> Vector2 {
        self.multiply_y(s)
    }

    pub fn divide_scalar_x(self, s: f64) -> Vector2 {
        self.divide_x(s)
    }

    pub fn divide_scalar_y(self, s: f64) -> Vector2 {
        self.divide_y(s)
    }

    // -- geometry -----------------------------------------------------------

    pub fn negative(self) -> Vector2 {
        -self
    }

    pub fn dot(self, v: Vector2) -> f64 {
        self.x * v.x + self.y * v.y
    }

    /// z-component of the 3D cross product of the two vectors lifted to z = 0.
    pub fn cross(self, v: Vector2) -> f64 {
        self.x * v.y - self.y * v.x
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn magnitude(self) -> f64 {
        self.length()
    }

    /// Rescales in place to `len`. A zero vector has no direction and is
    /// left as is.
    pub fn set_magnitude(&mut self, len: f64) -> &mut Self {
        let current = self.length();
        if current != 0.0 {
            *self = *self * (len / current);
        }
        self
    }

    /// `self / |self|`. Components are `NaN` for the zero vector.
    pub fn unit(self) -> Vector2 {
        self.divide(self.length())
    }

    /// Signed angle of the line from `self` to `other`.
    pub fn angle_to(self, other: Vector2, unit: AngleUnit) -> f64 {
        unit.convert_radians((other.y - self.y).atan2(other.x - self.x))
    }

    /// [`Vector2::angle_to`] with the unit given as `"rad"` or `"deg"`.
    pub fn angle_to_unit(self, other: Vector2, unit: &str) -> Result<f64> {
        Ok(self.angle_to(other, unit.parse()?))
    }

    /// Unsigned angle between the two vectors, in radians.
    pub fn angle_to_alternative(self, other: Vector2) -> f64 {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    pub fn angle_between(a: Vector2, b: Vector2) -> f64 {
        a.angle_to_alternative(b)
    }

    /// Negated slope of the line through both points (screen coordinates
    /// grow downwards). Vertical lines give an infinite result.
    pub fn slope(self, other: Vector2) -> f64 {
        (other.y - self.y) / (other.x - self.x) * -1.0
    }

    /// y-intercept of the line with the given slope through `self`.
    pub fn intercept(self, slope: f64) -> f64 {
        self.y - slope * self.x
    }

    pub fn midpoint(self, other: Vector2) -> Vector2 {
        (self + other) / 2.0
    }

    pub fn to_angle(self) -> f64 {
        -(-self.y).atan2(self.x)
    }

    /// Smallest component.
    pub fn min(self) -> f64 {
        self.x.min(self.y)
    }

    /// Largest component.
    pub fn max(self) -> f64 {
        self.x.max(self.y)
    }

    pub fn component_min(a: Vector2, b: Vector2) -> Vector2 {
        Vector2::new(a.x.min(b.x), a.y.min(b.y))
    }

    pub fn component_max(a: Vector2, b: Vector2) -> Vector2 {
        Vector2::new(a.x.max(b.x), a.y.max(b.y))
    }

    pub fn lerp(a: Vector2, b: Vector2, t: f64) -> Vector2 {
        a + (b - a) * t
    }

    /// Exact component equality.
    pub fn equals(self, v: Vector2) -> bool {
        self == v
    }

    /// First `n` components; `None` or `Some(0)` keeps both.
    pub fn to_array(self, n: Option<usize>) -> Vec<f64> {
        let all: [f64; 2] = self.into();
        all[..operand::take_count(n, 2)].to_vec()
    }

    pub fn copy(self) -> Vector2 {
        self
    }

    // -- randomization (mutating) -------------------------------------------

    pub fn randomize(&mut self, min: f64, max: f64) -> &mut Self {
        self.randomize_with(&mut rand::rng(), min, max)
    }

    pub fn randomize_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        min: f64,
        max: f64,
    ) -> &mut Self {
        self.x = uniform(rng, min, max);
        self.y = uniform(rng, min, max);
        self
    }

    pub fn randomize_x(&mut self, min: f64, max: f64) -> &mut Self {
        self.randomize_x_with(&mut rand::rng(), min, max)
    }

    pub fn randomize_x_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        min: f64,
        max: f64,
    ) -> &mut Self {
        self.x = uniform(rng, min, max);
        self
    }

    pub fn randomize_y(&mut self, min: f64, max: f64) -> &mut Self {
        self.randomize_y_with(&mut rand::rng(), min, max)
    }

    pub fn randomize_y_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        min: f64,
        max: f64,
    ) -> &mut Self {
        self.y = uniform(rng, min, max);
        self
    }

    pub fn add_random(&mut self, min: f64, max: f64) -> &mut Self {
        self.add_random_with(&mut rand::rng(), min, max)
    }

    pub fn add_random_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        min: f64,
        max: f64,
    ) -> &mut Self {
        self.x += uniform(rng, min, max);
        self.y += uniform(rng, min, max);
        self
    }

    pub fn add_random_x(&mut self, min: f64, max: f64) -> &mut Self {
        self.add_random_x_with(&mut rand::rng(), min, max)
    }

    pub fn add_random_x_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        min: f64,
        max: f64,
    ) -> &mut Self {
        self.x += uniform(rng, min, max);
        self
    }

    pub fn add_random_y(&mut self, min: f64, max: f64) -> &mut Self {
        self.add_random_y_with(&mut rand::rng(), min, max)
    }

    pub fn add_random_y_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        min: f64,
        max: f64,
    ) -> &mut Self {
        self.y += uniform(rng, min, max);
        self
    }
}
