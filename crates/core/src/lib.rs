//! Immutable 3D Vector Arithmetic Library
//!
//! A foundational numeric primitive for geometry, physics, and graphics
//! code: the [`Vec3`] value type plus pure free functions combining several
//! vectors (distance, spherical conversion, interpolation, averaging,
//! projection).
//!
//! Every operation is pure and O(1): nothing mutates its inputs, results
//! never alias their inputs, and floating-point edge cases propagate
//! IEEE-754 infinities/NaN instead of raising errors.
//!
//! ```
//! use vec3_core::{project, Vec3};
//!
//! let v = Vec3::new(-2.0, 3.5, 0.4);
//! assert_eq!(project(v, Vec3::X), Vec3::new(-2.0, 0.0, 0.0));
//! assert_eq!(v * 2.0, Vec3::new(-4.0, 7.0, 0.8));
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` derives on [`Vec3`]
//! - `nalgebra`: lossless `From` conversions to/from `nalgebra::Vector3<f64>`

pub mod ops;
pub mod vec3;

pub use ops::{average, distance, from_spherical, lerp, project, weighted_average};
pub use vec3::Vec3;
