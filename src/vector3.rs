//! Three-component vector.
//!
//! Mirrors [`Vector2`](crate::Vector2) with a `z` axis. The differences are
//! a vector-valued [`Vector3::cross`], spherical angle conversions, and a
//! spherical-uniform [`Vector3::random_unit`].

use crate::error::{Result, VectorError};
use crate::operand::{self, BinaryOp, Operand};
use crate::random::uniform;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::f64::consts::TAU;
use tracing::warn;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Azimuth `theta` (in the x/z plane, from +x towards +z) and elevation `phi`
/// (towards +y), in radians.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalAngles {
    pub theta: f64,
    pub phi: f64,
}

pub type Operand3 = Operand<Vector3>;

impl From<Vector3> for Operand3 {
    fn from(v: Vector3) -> Self {
        Operand::Vector(v)
    }
}

impl TryFrom<&Value> for Operand3 {
    type Error = VectorError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(Operand::Scalar).ok_or_else(|| {
                VectorError::invalid_operand(format!("{n} is not representable as f64"))
            }),
            Value::Object(_) => Vector3::from_object(value).map(Operand::Vector),
            other => Err(VectorError::invalid_operand(format!(
                "expected a Vector3 or a number, got {other}"
            ))),
        }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3 { x, y, z }
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl_vector_ops!(Vector3 { x, y, z });

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Re-initialises all three components in place.
    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        *self = Vector3::new(x, y, z);
        self
    }

    /// Spherical to Cartesian: `(cos θ cos φ, sin φ, sin θ cos φ)`.
    pub fn from_angles(theta: f64, phi: f64) -> Self {
        Vector3::new(theta.cos() * phi.cos(), phi.sin(), theta.sin() * phi.cos())
    }

    pub fn from_points(p: Vector3, q: Vector3) -> Self {
        q - p
    }

    /// Reads the numeric fields `x`, `y` and `z` of a JSON object.
    pub fn from_object(obj: &Value) -> Result<Self> {
        Ok(Vector3::new(
            operand::number_field(obj, "x", "Vector3::from_object")?,
            operand::number_field(obj, "y", "Vector3::from_object")?,
            operand::number_field(obj, "z", "Vector3::from_object")?,
        ))
    }

    pub fn from_array(seq: &[f64]) -> Result<Self> {
        operand::leading::<3>(seq, "Vector3::from_array").map(Vector3::from)
    }

    /// Uniformly random direction on the sphere, scaled by a length drawn
    /// uniformly from `[0, 1)`.
    pub fn random_unit() -> Self {
        Vector3::random_unit_with(&mut rand::rng())
    }

    pub fn random_unit_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let length = rng.random::<f64>();
        let angle = rng.random::<f64>() * TAU;
        let z = uniform(rng, -1.0, 1.0);
        let a = (1.0 - z * z).sqrt();
        Vector3::new(a * angle.cos(), a * angle.sin(), z) * length
    }

    /// Unit vector with a direction uniform over the sphere.
    pub fn random_direction() -> Self {
        Vector3::random_direction_with(&mut rand::rng())
    }

    pub fn random_direction_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let theta = rng.random::<f64>() * TAU;
        let phi = uniform(rng, -1.0, 1.0).asin();
        Vector3::from_angles(theta, phi)
    }

    fn combine(self, op: BinaryOp, rhs: Operand3) -> Vector3 {
        match rhs {
            Operand::Vector(v) => Vector3::new(
                op.eval(self.x, v.x),
                op.eval(self.y, v.y),
                op.eval(self.z, v.z),
            ),
            Operand::Scalar(s) => {
                Vector3::new(op.eval(self.x, s), op.eval(self.y, s), op.eval(self.z, s))
            }
        }
    }

    /// See [`Vector2::apply`](crate::Vector2::apply).
    pub fn apply(op: BinaryOp, lhs: Operand3, rhs: Operand3) -> Result<Vector3> {
        match (lhs, rhs) {
            (Operand::Vector(a), rhs) => Ok(a.combine(op, rhs)),
            (Operand::Scalar(s), Operand::Vector(b)) if op.is_commutative() => {
                Ok(b.combine(op, Operand::Scalar(s)))
            }
            (Operand::Scalar(_), Operand::Vector(_)) => Err(VectorError::invalid_operand(
                format!("Vector3::{op} does not accept a number on the left"),
            )),
            (Operand::Scalar(_), Operand::Scalar(_)) => Err(VectorError::invalid_operand(
                format!("Vector3::{op} requires at least one Vector3"),
            )),
        }
    }

    pub fn apply_json(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Vector3> {
        Vector3::apply(op, Operand3::try_from(lhs)?, Operand3::try_from(rhs)?)
    }

    pub fn sum(lhs: impl Into<Operand3>, rhs: impl Into<Operand3>) -> Result<Vector3> {
        Vector3::apply(BinaryOp::Add, lhs.into(), rhs.into())
    }

    pub fn add(self, rhs: impl Into<Operand3>) -> Vector3 {
        self.combine(BinaryOp::Add, rhs.into())
    }

    pub fn subtract(self, rhs: impl Into<Operand3>) -> Vector3 {
        self.combine(BinaryOp::Subtract, rhs.into())
    }

    pub fn multiply(self, rhs: impl Into<Operand3>) -> Vector3 {
        self.combine(BinaryOp::Multiply, rhs.into())
    }

    pub fn divide(self, rhs: impl Into<Operand3>) -> Vector3 {
        self.combine(BinaryOp::Divide, rhs.into())
    }

    pub fn add_x(self, s: f64) -> Vector3 {
        Vector3::new(self.x + s, self.y, self.z)
    }

    pub fn add_y(self, s: f64) -> Vector3 {
        Vector3::new(self.x, self.y + s, self.z)
    }

    pub fn add_z(self, s: f64) -> Vector3 {
        Vector3::new(self.x, self.y, self.z + s)
    }

    pub fn subtract_x(self, s: f64) -> Vector3 {
        Vector3::new(self.x - s, self.y, self.z)
    }

    pub fn subtract_y(self, s: f64) -> Vector3 {
        Vector3::new(self.x, self.y - s, self.z)
    }

    pub fn subtract_z(self, s: f64) -> Vector3 {
        Vector3::new(self.x, self.y, self.z - s)
    }

    pub fn multiply_x(self, s: f64) -> Vector3 {
        Vector3::new(self.x * s, self.y, self.z)
    }

    pub fn multiply_y(self, s: f64) -> Vector3 {
        Vector3::new(self.x, self.y * s, self.z)
    }

    pub fn multiply_z(self, s: f64) -> Vector3 {
        Vector3::new(self.x, self.y, self.z * s)
    }

    pub fn divide_x(self, s: f64) -> Vector3 {
        Vector3::new(self.x / s, self.y, self.z)
    }

    pub fn divide_y(self, s: f64) -> Vector3 {
        Vector3::new(self.x, self.y / s, self.z)
    }

    pub fn divide_z(self, s: f64) -> Vector3 {
        Vector3::new(self.x, self.y, self.z / s)
    }

    pub fn add_scalar(self, s: f64) -> Vector3 {
        self.add(s)
    }

    pub fn add_scalar_x(self, s: f64) -> Vector3 {
        self.add_x(s)
    }

    pub fn add_scalar_y(self, s: f64) -> Vector3 {
        self.add_y(s)
    }

    pub fn add_scalar_z(self, s: f64) -> Vector3 {
        self.add_z(s)
    }

    pub fn subtract_scalar(self, s: f64) -> Vector3 {
        self.subtract(s)
    }

    pub fn multiply_scalar(self, s: f64) -> Vector3 {
        self.multiply(s)
    }

    /// Divides in place; exactly zero is a logged no-op, as on `Vector2`.
    pub fn divide_scalar(&mut self, s: f64) -> &mut Self {
        if s == 0.0 {
            warn!(
                x = self.x,
                y = self.y,
                z = self.z,
                "cannot divide Vector3 by zero, leaving it unchanged"
            );
            return self;
        }
        *self /= s;
        self
    }

    pub fn negative(self) -> Vector3 {
        -self
    }

    pub fn dot(self, v: Vector3) -> f64 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    pub fn cross(self, v: Vector3) -> Vector3 {
        Vector3::new(
            self.y * v.z - self.z * v.y,
            self.z * v.x - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn magnitude(self) -> f64 {
        self.length()
    }

    /// `self / |self|`; `NaN` components for the zero vector.
    pub fn unit(self) -> Vector3 {
        self.divide(self.length())
    }

    /// Inverse of [`Vector3::from_angles`], up to length.
    pub fn to_angles(self) -> SphericalAngles {
        SphericalAngles {
            theta: self.z.atan2(self.x),
            phi: (self.y / self.length()).asin(),
        }
    }

    /// Unsigned angle between the two vectors, in radians.
    pub fn angle_to(self, other: Vector3) -> f64 {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    pub fn angle_between(a: Vector3, b: Vector3) -> f64 {
        a.angle_to(b)
    }

    pub fn min(self) -> f64 {
        self.x.min(self.y).min(self.z)
    }

    pub fn max(self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    pub fn component_min(a: Vector3, b: Vector3) -> Vector3 {
        Vector3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
    }

    pub fn component_max(a: Vector3, b: Vector3) -> Vector3 {
        Vector3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
    }

    pub fn lerp(a: Vector3, b: Vector3, t: f64) -> Vector3 {
        a + (b - a) * t
    }

    pub fn equals(self, v: Vector3) -> bool {
        self == v
    }

    pub fn to_array(self, n: Option<usize>) -> Vec<f64> {
        let all: [f64; 3] = self.into();
        all[..operand::take_count(n, 3)].to_vec()
    }

    pub fn copy(self) -> Vector3 {
        self
    }

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
        self.z = uniform(rng, min, max);
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

    pub fn randomize_z(&mut self, min: f64, max: f64) -> &mut Self {
        self.randomize_z_with(&mut rand::rng(), min, max)
    }

    pub fn randomize_z_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        min: f64,
        max: f64,
    ) -> &mut Self {
        self.z = uniform(rng, min, max);
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
        self.z += uniform(rng, min, max);
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

    pub fn add_random_z(&mut self, min: f64, max: f64) -> &mut Self {
        self.add_random_z_with(&mut rand::rng(), min, max)
    }

    pub fn add_random_z_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        min: f64,
        max: f64,
    ) -> &mut Self {
        self.z += uniform(rng, min, max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::tests::Saturated;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_cross_is_a_vector() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert!(x.cross(y).equals(Vector3::new(0.0, 0.0, 1.0)));
        assert_eq!(y.cross(x), Vector3::new(0.0, 0.0, -1.0));
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a.cross(a), Vector3::default());
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector3::new(2.0, 4.0, 6.0);
        let b = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a.add(b), Vector3::new(3.0, 6.0, 9.0));
        assert_eq!(a.subtract(1.0), Vector3::new(1.0, 3.0, 5.0));
        assert_eq!(a.multiply(b), Vector3::new(2.0, 8.0, 18.0));
        assert_eq!(a.divide(2.0), b);
        assert_eq!(a.negative(), Vector3::new(-2.0, -4.0, -6.0));
        assert_eq!(a.add_z(1.0), Vector3::new(2.0, 4.0, 7.0));
        assert_eq!(a.subtract_y(1.0), Vector3::new(2.0, 3.0, 6.0));
        assert_eq!(a.multiply_x(0.5), Vector3::new(1.0, 4.0, 6.0));
        assert_eq!(a.divide_z(3.0), Vector3::new(2.0, 4.0, 2.0));
        assert_eq!(a.add_scalar_z(1.0), a.add_z(1.0));
        assert_eq!(a.multiply_scalar(2.0), a * 2.0);
        assert_eq!(Vector3::sum(1.0, b), Ok(Vector3::new(2.0, 3.0, 4.0)));
        assert!(Vector3::sum(1.0, 1.0).is_err());
        assert!(Vector3::apply(BinaryOp::Multiply, Operand::Scalar(2.0), b.into()).is_err());
    }

    #[test]
    fn test_apply_json() {
        let v = json!({ "x": 1, "y": 2, "z": 3 });
        assert_eq!(
            Vector3::apply_json(BinaryOp::Add, &json!(1), &v),
            Ok(Vector3::new(2.0, 3.0, 4.0))
        );
        assert!(matches!(
            Vector3::apply_json(BinaryOp::Add, &v, &json!("1")),
            Err(VectorError::InvalidOperand(_))
        ));
        // a Vector2-shaped object is not a Vector3
        assert!(Vector3::apply_json(BinaryOp::Add, &v, &json!({ "x": 1, "y": 2 })).is_err());
    }

    #[test]
    fn test_divide_scalar_zero_is_noop() {
        let mut v = Vector3::new(3.0, 6.0, 9.0);
        v.divide_scalar(0.0);
        assert_eq!(v, Vector3::new(3.0, 6.0, 9.0));
        v.divide_scalar(3.0);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        let d = Vector3::new(1.0, -1.0, 0.0).divide(0.0);
        assert_eq!(d.x, f64::INFINITY);
        assert_eq!(d.y, f64::NEG_INFINITY);
        assert!(d.z.is_nan());
    }

    #[test]
    fn test_spherical_angles() {
        let v = Vector3::from_angles(FRAC_PI_2, 0.0);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.z, 1.0, epsilon = 1e-12);

        let up = Vector3::from_angles(0.0, FRAC_PI_2);
        assert_abs_diff_eq!(up.y, 1.0, epsilon = 1e-12);

        let angles = Vector3::from_angles(0.7, -0.3).multiply(4.0).to_angles();
        assert_relative_eq!(angles.theta, 0.7, epsilon = 1e-12);
        assert_relative_eq!(angles.phi, -0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_to() {
        let x = Vector3::new(2.0, 0.0, 0.0);
        assert_relative_eq!(x.angle_to(Vector3::new(0.0, 0.0, 5.0)), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(x.angle_to(Vector3::new(1.0, 1.0, 0.0)), FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(Vector3::angle_between(x, -x), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_min_max_both_shapes() {
        let a = Vector3::new(3.0, -2.0, 7.0);
        let b = Vector3::new(1.0, 5.0, 7.5);
        assert_eq!(a.min(), -2.0);
        assert_eq!(a.max(), 7.0);
        assert_eq!(Vector3::component_min(a, b), Vector3::new(1.0, -2.0, 7.0));
        assert_eq!(Vector3::component_max(a, b), Vector3::new(3.0, 5.0, 7.5));
    }

    #[test]
    fn test_conversions() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.to_array(None), vec![1.0, 2.0, 3.0]);
        assert_eq!(v.to_array(Some(2)), vec![1.0, 2.0]);
        assert_eq!(Vector3::from_array(&v.to_array(None)), Ok(v));
        assert!(Vector3::from_array(&[1.0, 2.0]).is_err());
        assert_eq!(Vector3::from_object(&serde_json::to_value(v).unwrap()), Ok(v));
        assert!(Vector3::from_object(&json!({ "x": 1, "y": 2, "z": null })).is_err());
        assert_eq!(Vector3::from_points(v, Vector3::default()), -v);
    }

    #[test]
    fn test_set_and_lerp() {
        let mut v = Vector3::default();
        v.set(1.0, 2.0, 3.0).add_random_z(0.0, 0.0);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        let b = Vector3::new(5.0, 6.0, 7.0);
        assert_eq!(Vector3::lerp(v, b, 0.0), v);
        assert_eq!(Vector3::lerp(v, b, 1.0), b);
        assert_eq!(Vector3::lerp(v, b, 0.25), Vector3::new(2.0, 3.0, 4.0));
        assert!(v.copy().equals(v));
    }

    #[test]
    fn test_randomize_family() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut v = Vector3::new(9.0, 9.0, 9.0);
        v.randomize_with(&mut rng, 0.0, 1.0);
        assert!(v.to_array(None).iter().all(|c| (0.0..1.0).contains(c)));

        v.set(0.0, 0.0, 0.0)
            .randomize_z_with(&mut rng, 10.0, 11.0)
            .add_random_x_with(&mut rng, 1.0, 2.0)
            .add_random_y_with(&mut rng, -2.0, -1.0);
        assert!((1.0..2.0).contains(&v.x));
        assert!((-2.0..-1.0).contains(&v.y));
        assert!((10.0..11.0).contains(&v.z));

        let before = v;
        v.add_random(0.0, 0.5).randomize_x(0.0, 0.5).randomize_y(0.0, 0.5);
        assert!(v.z >= before.z && v.z < before.z + 0.5);
    }

    #[test]
    fn test_randomize_never_reaches_upper_bound() {
        let mut v = Vector3::default();
        v.randomize_with(&mut Saturated, 1.0, 2.0);
        assert!(v.to_array(None).iter().all(|c| (1.0..2.0).contains(c)), "got {v:?}");

        let mut w = Vector3::default();
        w.add_random_z_with(&mut Saturated, 1.0, 2.0);
        assert!(w.z < 2.0);
    }

    #[test]
    fn test_random_direction_uniform_on_sphere() {
        let mut rng = StdRng::seed_from_u64(77);
        let n = 20_000;
        let mut mean = Vector3::default();
        let mut upper = 0;
        for _ in 0..n {
            let d = Vector3::random_direction_with(&mut rng);
            assert_relative_eq!(d.length(), 1.0, epsilon = 1e-9);
            mean += d;
            if d.y > 0.5 {
                upper += 1;
            }
        }
        mean /= n as f64;
        assert_abs_diff_eq!(mean.length(), 0.0, epsilon = 0.03);
        // the cap y > 0.5 covers a quarter of the sphere's area
        assert_abs_diff_eq!(upper as f64 / n as f64, 0.25, epsilon = 0.02);
    }

    #[test]
    fn test_random_unit_inside_ball() {
        let mut rng = StdRng::seed_from_u64(5);
        let n = 20_000;
        let mut total_len = 0.0;
        for _ in 0..n {
            let v = Vector3::random_unit_with(&mut rng);
            assert!(v.length() < 1.0 + 1e-12);
            total_len += v.length();
        }
        assert_abs_diff_eq!(total_len / n as f64, 0.5, epsilon = 0.02);
    }
}
