//! The relate dispatcher.
//!
//! Each subject kind has a strategy ([`PointRelate`], [`LineRelate`],
//! [`PolygonRelate`], [`CollectionRelate`]) that fills an
//! [`IntersectionMatrix`] against an operand of any kind. A strategy
//! never implements the mirror image of a pair covered by a
//! lower-dimensional strategy: it delegates and transposes.
use geo::{
    Coordinate, GeoFloat, Geometry, GeometryCollection, Line, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, Rect, Triangle,
};
use log::{debug, trace};
use num_traits::NumCast;

use crate::{
    error::Result,
    matrix::{Dimension, IntersectionMatrix, Location},
    pattern::Predicate,
    predicates::DEFAULT_TOLERANCE,
    steric::Steric,
};

mod line;
mod point;
mod polygon;

pub use line::LineRelate;
pub use point::PointRelate;
pub use polygon::{PolygonRelate, PolygonState};

/// A relate strategy bound to a subject geometry.
pub trait RelateStrategy<T: GeoFloat> {
    /// Dimensions of the subject's interior and boundary.
    fn dimensions(&self) -> (Dimension, Dimension);

    /// Compute the matrix against a non-empty operand.
    fn compute(&self, other: &Steric<T>) -> Result<IntersectionMatrix>;

    /// Compute the matrix of the subject against `other`.
    fn intersection_matrix(&self, other: &Steric<T>) -> Result<IntersectionMatrix> {
        let subject = self.dimensions();
        if subject.0.is_empty() || other.is_empty() {
            return Ok(relate_empty(
                subject,
                (other.dimension(), other.boundary_dimension()),
            ));
        }
        self.compute(other)
    }
}

/// Matrix of two geometries at least one of which is empty.
///
/// Only the non-empty side intersects anything, and it can only meet
/// the exterior of the other side.
fn relate_empty(
    (a_dim, a_boundary): (Dimension, Dimension),
    (b_dim, b_boundary): (Dimension, Dimension),
) -> IntersectionMatrix {
    let mut im = IntersectionMatrix::new();
    im.set_at_least(Location::Interior, Location::Exterior, a_dim);
    im.set_at_least(Location::Boundary, Location::Exterior, a_boundary);
    im.set_at_least(Location::Exterior, Location::Interior, b_dim);
    im.set_at_least(Location::Exterior, Location::Boundary, b_boundary);
    im.set_at_least(Location::Exterior, Location::Exterior, Dimension::Surface);
    im
}

/// Relates the members of a collection one at a time and merges the
/// results cell-wise.
#[derive(Debug)]
pub struct CollectionRelate<'a, T: GeoFloat> {
    members: &'a [Steric<T>],
    op: &'a RelateOp<T>,
}

impl<'a, T: GeoFloat> CollectionRelate<'a, T> {
    pub fn new(members: &'a [Steric<T>], op: &'a RelateOp<T>) -> Self {
        CollectionRelate { members, op }
    }
}

impl<'a, T: GeoFloat> RelateStrategy<T> for CollectionRelate<'a, T> {
    fn dimensions(&self) -> (Dimension, Dimension) {
        self.members.iter().fold(
            (Dimension::Empty, Dimension::Empty),
            |(dim, boundary), m| {
                (
                    dim.max(m.dimension()),
                    boundary.max(m.boundary_dimension()),
                )
            },
        )
    }

    fn compute(&self, other: &Steric<T>) -> Result<IntersectionMatrix> {
        let mut im = IntersectionMatrix::new();
        for member in self.members.iter().filter(|m| !m.is_empty()) {
            let member_im = self.op.relate(member, other)?;
            trace!("collection member {:?}: {}", member.kind(), member_im);
            im.set_at_least_from(&member_im);
        }
        Ok(im)
    }
}

/// Configured entry point of the relate engine.
///
/// Holds the tolerance used by every "lies on" decision of the
/// geometric predicates.
#[derive(Debug, Clone, Copy)]
pub struct RelateOp<T: GeoFloat> {
    tolerance: T,
}

impl<T: GeoFloat> Default for RelateOp<T> {
    fn default() -> Self {
        let tolerance = <T as NumCast>::from(DEFAULT_TOLERANCE).unwrap_or_else(T::epsilon);
        RelateOp { tolerance }
    }
}

impl<T: GeoFloat> RelateOp<T> {
    /// Create an op with an absolute distance tolerance.
    pub fn new(tolerance: T) -> Self {
        RelateOp { tolerance }
    }

    #[inline]
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Compute the DE-9IM matrix of `subject` against `other`.
    pub fn relate(&self, subject: &Steric<T>, other: &Steric<T>) -> Result<IntersectionMatrix> {
        debug!(
            "relate {:?} against {:?}",
            subject.kind(),
            other.kind()
        );
        if subject.is_empty() || other.is_empty() {
            return Ok(relate_empty(
                (subject.dimension(), subject.boundary_dimension()),
                (other.dimension(), other.boundary_dimension()),
            ));
        }

        let tol = self.tolerance;
        match (subject, other) {
            (Steric::Collection(members), _) => {
                CollectionRelate::new(members, self).intersection_matrix(other)
            }
            (_, Steric::Collection(members)) => Ok(CollectionRelate::new(members, self)
                .intersection_matrix(subject)?
                .transpose()),
            (Steric::Point(p), _) => PointRelate::new(*p, tol).intersection_matrix(other),
            (Steric::Line(l), _) => LineRelate::new(l, tol).intersection_matrix(other),
            (Steric::Polygon(p), _) => PolygonRelate::new(p, tol).intersection_matrix(other),
        }
    }
}

/// Compute the DE-9IM matrix of `subject` against `other` with the
/// default tolerance.
pub fn relate<T: GeoFloat>(subject: &Steric<T>, other: &Steric<T>) -> Result<IntersectionMatrix> {
    RelateOp::default().relate(subject, other)
}

/// Relate operations on anything convertible to a [`Steric`].
pub trait Relate<T: GeoFloat> {
    fn to_steric(&self) -> Steric<T>;

    fn relate<O: Relate<T>>(&self, other: &O) -> Result<IntersectionMatrix> {
        relate(&self.to_steric(), &other.to_steric())
    }

    fn relate_with<O: Relate<T>>(
        &self,
        other: &O,
        op: &RelateOp<T>,
    ) -> Result<IntersectionMatrix> {
        op.relate(&self.to_steric(), &other.to_steric())
    }

    /// Evaluate a named predicate of `self` against `other`.
    fn satisfies<O: Relate<T>>(&self, other: &O, predicate: Predicate) -> Result<bool> {
        self.satisfies_with(other, predicate, &RelateOp::default())
    }

    fn satisfies_with<O: Relate<T>>(
        &self,
        other: &O,
        predicate: Predicate,
        op: &RelateOp<T>,
    ) -> Result<bool> {
        let a = self.to_steric();
        let b = other.to_steric();
        let im = op.relate(&a, &b)?;
        Ok(predicate.evaluate(&im, a.dimension(), b.dimension()))
    }
}

impl<T: GeoFloat> Relate<T> for Steric<T> {
    fn to_steric(&self) -> Steric<T> {
        self.clone()
    }
}

impl<T: GeoFloat> Relate<T> for Coordinate<T> {
    fn to_steric(&self) -> Steric<T> {
        Steric::Point(*self)
    }
}

macro_rules! impl_relate {
    ($($ty:ident),*) => {
        $(
            impl<T: GeoFloat> Relate<T> for $ty<T> {
                fn to_steric(&self) -> Steric<T> {
                    self.into()
                }
            }
        )*
    };
}

impl_relate!(
    Point,
    Line,
    LineString,
    Polygon,
    Rect,
    Triangle,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Geometry
);
