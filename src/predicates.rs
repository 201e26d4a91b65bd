//! Point containment and segment intersection predicates.
//!
//! Orientation signs come from the robust kernel of `geo`. All
//! "lies on" decisions are made against an explicit tolerance: a
//! point whose distance to an edge is at most `tol` is on that edge.
//! A distance of exactly `tol` counts as on the edge.
use geo::{
    kernels::{Kernel, Orientation},
    Coordinate, GeoFloat, Line,
};
use itertools::Itertools;
use log::trace;

use crate::{
    matrix::Location,
    steric::{LineMatrix, PolygonMatrix},
};

/// Default absolute distance under which a point is considered to
/// lie on a segment.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Position of a point relative to a ring or polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Containment {
    Inside,
    OnBoundary,
    Outside,
}

impl From<Containment> for Location {
    fn from(c: Containment) -> Self {
        match c {
            Containment::Inside => Location::Interior,
            Containment::OnBoundary => Location::Boundary,
            Containment::Outside => Location::Exterior,
        }
    }
}

#[inline]
fn distance<T: GeoFloat>(p: Coordinate<T>, q: Coordinate<T>) -> T {
    (p.x - q.x).hypot(p.y - q.y)
}

/// Whether two coordinates are within `tol` of each other.
#[inline]
pub fn coincident<T: GeoFloat>(p: Coordinate<T>, q: Coordinate<T>, tol: T) -> bool {
    distance(p, q) <= tol
}

/// Distance from `c` to the closest point of `seg`.
///
/// A zero-length segment behaves as a point.
pub fn distance_to_segment<T: GeoFloat>(c: Coordinate<T>, seg: Line<T>) -> T {
    let d = seg.delta();
    let len2 = d.x * d.x + d.y * d.y;
    if len2 == T::zero() {
        return distance(c, seg.start);
    }
    let t = ((c.x - seg.start.x) * d.x + (c.y - seg.start.y) * d.y) / len2;
    let t = t.max(T::zero()).min(T::one());
    let closest = Coordinate {
        x: seg.start.x + d.x * t,
        y: seg.start.y + d.y * t,
    };
    distance(c, closest)
}

#[inline]
pub fn point_on_segment<T: GeoFloat>(c: Coordinate<T>, seg: Line<T>, tol: T) -> bool {
    distance_to_segment(c, seg) <= tol
}

/// Whether two segments cross, touch or overlap.
///
/// Touching and collinear overlap always place an endpoint of one
/// segment on the other, which the tolerance test catches. What
/// remains is a proper crossing, decided by orientation signs.
pub fn segments_intersect<T: GeoFloat>(a: Line<T>, b: Line<T>, tol: T) -> bool {
    if point_on_segment(a.start, b, tol)
        || point_on_segment(a.end, b, tol)
        || point_on_segment(b.start, a, tol)
        || point_on_segment(b.end, a, tol)
    {
        return true;
    }

    let o1 = T::Ker::orient2d(a.start, a.end, b.start);
    let o2 = T::Ker::orient2d(a.start, a.end, b.end);
    let o3 = T::Ker::orient2d(b.start, b.end, a.start);
    let o4 = T::Ker::orient2d(b.start, b.end, a.end);

    let straddles = |p: Orientation, q: Orientation| {
        p != Orientation::Collinear && q != Orientation::Collinear && p != q
    };
    straddles(o1, o2) && straddles(o3, o4)
}

/// Locate a point relative to a ring.
///
/// Uses the crossing-number rule over the ring's edges, with the
/// closing edge added if the ring is not explicitly closed. Points
/// within `tol` of an edge are `OnBoundary`. An empty ring contains
/// nothing.
pub fn point_in_ring<T: GeoFloat>(c: Coordinate<T>, ring: &LineMatrix<T>, tol: T) -> Containment {
    let coords = ring.coords();
    if coords.is_empty() {
        return Containment::Outside;
    }
    if coords.len() == 1 || coords.iter().all(|p| *p == coords[0]) {
        return if coincident(c, coords[0], tol) {
            Containment::OnBoundary
        } else {
            Containment::Outside
        };
    }

    let mut inside = false;
    for seg in ring.ring_lines() {
        if point_on_segment(c, seg, tol) {
            trace!("{:?} on ring edge {:?}", c, seg);
            return Containment::OnBoundary;
        }
        let (a, b) = (seg.start, seg.end);
        if (a.y > c.y) != (b.y > c.y) {
            let x = a.x + (c.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if c.x < x {
                inside = !inside;
            }
        }
    }

    if inside {
        Containment::Inside
    } else {
        Containment::Outside
    }
}

/// Locate a point relative to a polygon with holes.
///
/// A point inside the shell and inside a hole is `Outside`; a point
/// on any ring is `OnBoundary`.
pub fn point_in_polygon<T: GeoFloat>(
    c: Coordinate<T>,
    poly: &PolygonMatrix<T>,
    tol: T,
) -> Containment {
    let shell = match poly.shell() {
        Some(shell) => shell,
        None => return Containment::Outside,
    };
    match point_in_ring(c, shell, tol) {
        Containment::Inside => {}
        other => return other,
    }
    for hole in poly.holes() {
        match point_in_ring(c, hole, tol) {
            Containment::Inside => return Containment::Outside,
            Containment::OnBoundary => return Containment::OnBoundary,
            Containment::Outside => {}
        }
    }
    Containment::Inside
}

/// Locate a point relative to a line string.
///
/// The endpoints of an open line form its boundary; a closed line has
/// no boundary.
pub fn point_on_line<T: GeoFloat>(c: Coordinate<T>, line: &LineMatrix<T>, tol: T) -> Location {
    if let Some([start, end]) = line.boundary() {
        if coincident(c, start, tol) || coincident(c, end, tol) {
            return Location::Boundary;
        }
    }
    let on_line = match line.coords() {
        [] => false,
        [only] => coincident(c, *only, tol),
        _ => line.lines().any(|seg| point_on_segment(c, seg, tol)),
    };
    if on_line {
        Location::Interior
    } else {
        Location::Exterior
    }
}

/// Whether the boundary of `ring_a` intersects the boundary of
/// `ring_b` anywhere: a proper crossing, a touch, or a collinear
/// overlap.
pub fn is_intersection_edge<T: GeoFloat>(
    ring_a: &LineMatrix<T>,
    ring_b: &LineMatrix<T>,
    tol: T,
) -> bool {
    let b_lines: Vec<_> = ring_b.ring_lines().collect();
    ring_a
        .ring_lines()
        .cartesian_product(b_lines.iter())
        .any(|(a, b)| segments_intersect(a, *b, tol))
}
