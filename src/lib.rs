//! Quaternion rotations for 3D vectors.
//!
//! [`Quaternion`] composes, normalizes and applies rotations, converts from
//! axis-angle form, extracts roll/pitch/yaw, and derives the shortest-arc
//! rotation between two directions. Rotations work with any type that
//! implements [`Vector`] and hand back a value of that same type.
//!
//! ```
//! use quatern::{Quaternion, Vec3};
//!
//! let q = Quaternion::from_axis_angle(&Vec3::unit_z(), std::f64::consts::FRAC_PI_2);
//! let v = q.rotate(&Vec3::unit_x());
//! assert!((v.y - 1.0).abs() < 1e-12);
//! ```

pub mod config;
pub mod error;
pub mod quaternion;
pub mod vector;

pub use crate::error::{ConfigError, QuatError, QuatResult};
pub use crate::quaternion::Quaternion;
pub use crate::vector::{Vec3, Vector};
