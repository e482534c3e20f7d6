//! 2D and 3D vector math for animation and canvas-style rendering code.
//!
//! [`Vector2`] and [`Vector3`] are plain `Copy` values. Arithmetic returns new
//! vectors; the few operations that change a vector in place take `&mut self`
//! and return it for chaining (`divide_scalar`, `set_magnitude`,
//! `randomize*`, `add_random*`, and `Vector3::set`).
//!
//! Sharing one vector between threads while mutating it is the caller's
//! problem; the types carry no synchronisation.
//!
//! ```
//! use vecsaurus::{AngleUnit, Vector2, Vector3};
//!
//! let a = Vector2::new(3.0, 4.0);
//! assert_eq!(a.length(), 5.0);
//! assert_eq!(a.add(1.0), Vector2::new(4.0, 5.0));
//! let right = Vector2::new(1.0, 0.0).angle_to(Vector2::new(1.0, 1.0), AngleUnit::Degrees);
//! assert!((right - 90.0).abs() < 1e-9);
//!
//! let z = Vector3::new(1.0, 0.0, 0.0).cross(Vector3::new(0.0, 1.0, 0.0));
//! assert!(z.equals(Vector3::new(0.0, 0.0, 1.0)));
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod operand;
mod random;
pub mod vector2;
pub mod vector3;

pub use error::{Result, VectorError};
pub use operand::{AngleUnit, BinaryOp, Operand};
pub use vector2::{Operand2, Vector2};
pub use vector3::{Operand3, SphericalAngles, Vector3};
