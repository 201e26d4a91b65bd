//! Computes the topological relationship of two planar geometries
//! using the Dimensionally Extended nine-Intersection Model (DE-9IM).
//!
//! 1. [Intersection Matrix](#intersection-matrix)
//! 1. [Relate](#relate)
//! 1. [Named Predicates](#named-predicates)
//!
//! # Intersection Matrix
//!
//! An [`IntersectionMatrix`] holds the dimension of the intersection
//! of the interior, boundary and exterior of one geometry with those
//! of another. It serializes to the 9-character code of the OGC
//! Simple Features standard, and can be compared against patterns
//! using `T`, `F`, `*` and digits.
//!
//! # Relate
//!
//! Geometries are converted into a [`Steric`] (a point, a line, a
//! polygon or a collection) and related by [`relate`], or by a
//! [`RelateOp`] configured with a custom tolerance. The geo types
//! implement [`Relate`] for convenience.
//!
//! ```rust
//! use geo::polygon;
//! use geo_relate::Relate;
//!
//! let outer = polygon![
//!     (x: 0., y: 0.), (x: 10., y: 0.), (x: 10., y: 10.), (x: 0., y: 10.),
//! ];
//! let inner = polygon![
//!     (x: 2., y: 2.), (x: 4., y: 2.), (x: 4., y: 4.), (x: 2., y: 4.),
//! ];
//! let im = inner.relate(&outer).unwrap();
//! assert_eq!(im.to_string(), "2FF1FF212");
//! assert!(im.matches("T*F**F***").unwrap());
//! ```
//!
//! # Named Predicates
//!
//! The OGC predicates (equals, disjoint, intersects, touches, crosses,
//! within, contains, overlaps, covers, covered-by) are fixed patterns
//! matched against a computed matrix. See [`Predicate`].
mod error;
pub use error::{RelateError, Result};

pub mod matrix;
pub use matrix::{matches, Dimension, IntersectionMatrix, Location};

mod steric;
pub use steric::{LineMatrix, PolygonMatrix, Steric, StericKind};

pub mod predicates;
pub use predicates::{Containment, DEFAULT_TOLERANCE};

pub mod relate;
pub use relate::{relate, CollectionRelate, Relate, RelateOp, RelateStrategy};

pub mod pattern;
pub use pattern::Predicate;

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;
