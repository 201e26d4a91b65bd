use std::cmp::Ordering;

use geo::{
    algorithm::line_intersection::{line_intersection, LineIntersection},
    Coordinate, GeoFloat, Line,
};
use log::trace;
use smallvec::SmallVec;

use super::{PointRelate, RelateStrategy};
use crate::{
    error::{RelateError, Result},
    matrix::{Dimension, IntersectionMatrix, Location},
    predicates::{coincident, point_in_polygon, point_on_line, point_on_segment},
    steric::{LineMatrix, PolygonMatrix, Steric, StericKind},
};

/// Intersection points found on one segment.
type Nodes<T> = SmallVec<[Coordinate<T>; 4]>;

/// How two segments meet.
#[derive(Debug, Clone, Copy)]
enum Meet<T: GeoFloat> {
    Point(Coordinate<T>),
    Overlap(Line<T>),
}

/// All the ways segments `a` and `b` meet.
///
/// Besides the exact intersection, endpoints lying within `tol` of
/// the other segment are reported, so that splitting agrees with the
/// tolerant location tests.
fn meets<T: GeoFloat>(a: Line<T>, b: Line<T>, tol: T) -> SmallVec<[Meet<T>; 4]> {
    let mut out = SmallVec::new();
    match line_intersection(a, b) {
        Some(LineIntersection::SinglePoint { intersection, .. }) => {
            out.push(Meet::Point(intersection))
        }
        Some(LineIntersection::Collinear { intersection }) => {
            if coincident(intersection.start, intersection.end, tol) {
                out.push(Meet::Point(intersection.start));
            } else {
                out.push(Meet::Overlap(intersection));
            }
        }
        None => {}
    }
    for (p, seg) in [(a.start, b), (a.end, b), (b.start, a), (b.end, a)] {
        if point_on_segment(p, seg, tol) {
            out.push(Meet::Point(p));
        }
    }
    out
}

#[inline]
fn midpoint<T: GeoFloat>(l: Line<T>) -> Coordinate<T> {
    let two = T::one() + T::one();
    Coordinate {
        x: (l.start.x + l.end.x) / two,
        y: (l.start.y + l.end.y) / two,
    }
}

/// Split `seg` at the given nodes, dropping pieces shorter than
/// `tol`. A zero-length segment yields no pieces.
fn split<T: GeoFloat>(seg: Line<T>, nodes: &[Coordinate<T>], tol: T) -> SmallVec<[Line<T>; 4]> {
    let d = seg.delta();
    let len2 = d.x * d.x + d.y * d.y;
    if len2 == T::zero() {
        return SmallVec::new();
    }
    let at = |t: T| Coordinate {
        x: seg.start.x + d.x * t,
        y: seg.start.y + d.y * t,
    };

    let mut params: SmallVec<[T; 8]> = nodes
        .iter()
        .map(|n| ((n.x - seg.start.x) * d.x + (n.y - seg.start.y) * d.y) / len2)
        .filter(|t| *t > T::zero() && *t < T::one())
        .collect();
    params.push(T::zero());
    params.push(T::one());
    params.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    params
        .windows(2)
        .map(|w| Line::new(at(w[0]), at(w[1])))
        .filter(|piece| !coincident(piece.start, piece.end, tol))
        .collect()
}

/// Relate strategy for a line subject.
///
/// A line whose segments are all shorter than the tolerance has no
/// pieces to classify; its interior is located as a single point.
#[derive(Debug, Clone, Copy)]
pub struct LineRelate<'a, T: GeoFloat> {
    line: &'a LineMatrix<T>,
    tol: T,
}

impl<'a, T: GeoFloat> LineRelate<'a, T> {
    pub fn new(line: &'a LineMatrix<T>, tol: T) -> Self {
        LineRelate { line, tol }
    }

    /// Relate two line strings.
    ///
    /// Both lines are split at every point where they meet. Each
    /// meeting point is located on both lines; each piece is located
    /// on the other line by its midpoint.
    pub fn relate_line(&self, other: &LineMatrix<T>) -> IntersectionMatrix {
        let tol = self.tol;
        let mut im = IntersectionMatrix::new();

        let a_lines: Vec<_> = self.line.lines().collect();
        let b_lines: Vec<_> = other.lines().collect();
        let mut a_nodes = vec![Nodes::new(); a_lines.len()];
        let mut b_nodes = vec![Nodes::new(); b_lines.len()];

        for (i, a) in a_lines.iter().enumerate() {
            for (j, b) in b_lines.iter().enumerate() {
                for meet in meets(*a, *b, tol) {
                    match meet {
                        Meet::Point(p) => {
                            a_nodes[i].push(p);
                            b_nodes[j].push(p);
                        }
                        Meet::Overlap(l) => {
                            trace!("collinear overlap {:?}", l);
                            im.set_at_least(Location::Interior, Location::Interior, Dimension::Line);
                            a_nodes[i].extend([l.start, l.end]);
                            b_nodes[j].extend([l.start, l.end]);
                        }
                    }
                }
            }
        }

        for p in a_nodes.iter().flatten() {
            let la = point_on_line(*p, self.line, tol);
            let lb = point_on_line(*p, other, tol);
            if la != Location::Exterior && lb != Location::Exterior {
                im.set_at_least(la, lb, Dimension::Point);
            }
        }

        let mut a_collapsed = true;
        for (a, nodes) in a_lines.iter().zip(a_nodes.iter()) {
            for piece in split(*a, nodes, tol) {
                a_collapsed = false;
                match point_on_line(midpoint(piece), other, tol) {
                    Location::Boundary => {
                        im.set_at_least(Location::Interior, Location::Boundary, Dimension::Point)
                    }
                    loc => im.set_at_least(Location::Interior, loc, Dimension::Line),
                }
            }
        }
        if a_collapsed {
            if let Some(p) = self.line.coords().first() {
                let loc = point_on_line(*p, other, tol);
                im.set_at_least(Location::Interior, loc, Dimension::Point);
            }
        }

        let mut b_collapsed = true;
        for (b, nodes) in b_lines.iter().zip(b_nodes.iter()) {
            for piece in split(*b, nodes, tol) {
                b_collapsed = false;
                match point_on_line(midpoint(piece), self.line, tol) {
                    Location::Boundary => {
                        im.set_at_least(Location::Boundary, Location::Interior, Dimension::Point)
                    }
                    loc => im.set_at_least(loc, Location::Interior, Dimension::Line),
                }
            }
        }
        if b_collapsed {
            if let Some(p) = other.coords().first() {
                let loc = point_on_line(*p, self.line, tol);
                im.set_at_least(loc, Location::Interior, Dimension::Point);
            }
        }

        if let Some(boundary) = self.line.boundary() {
            for p in boundary.iter() {
                let loc = point_on_line(*p, other, tol);
                im.set_at_least(Location::Boundary, loc, Dimension::Point);
            }
        }
        if let Some(boundary) = other.boundary() {
            for p in boundary.iter() {
                let loc = point_on_line(*p, self.line, tol);
                im.set_at_least(loc, Location::Boundary, Dimension::Point);
            }
        }

        im.set_at_least(Location::Exterior, Location::Exterior, Dimension::Surface);
        im
    }

    /// Relate a line string to a polygon.
    ///
    /// The line is split where it meets any ring, and each piece is
    /// classified as inside, on or outside the polygon. The rings are
    /// split the same way to find out whether the line covers the
    /// whole polygon boundary.
    pub fn relate_polygon(&self, polygon: &PolygonMatrix<T>) -> IntersectionMatrix {
        let tol = self.tol;
        let mut im = IntersectionMatrix::new();

        let a_lines: Vec<_> = self.line.lines().collect();
        let ring_lines: Vec<_> = polygon
            .rings()
            .iter()
            .flat_map(|ring| ring.ring_lines())
            .collect();
        let mut a_nodes = vec![Nodes::new(); a_lines.len()];
        let mut ring_nodes = vec![Nodes::new(); ring_lines.len()];

        for (i, a) in a_lines.iter().enumerate() {
            for (j, r) in ring_lines.iter().enumerate() {
                for meet in meets(*a, *r, tol) {
                    match meet {
                        Meet::Point(p) => {
                            a_nodes[i].push(p);
                            ring_nodes[j].push(p);
                        }
                        Meet::Overlap(l) => {
                            a_nodes[i].extend([l.start, l.end]);
                            ring_nodes[j].extend([l.start, l.end]);
                        }
                    }
                }
            }
        }

        for p in a_nodes.iter().flatten() {
            let loc = point_on_line(*p, self.line, tol);
            if loc != Location::Exterior {
                im.set_at_least(loc, Location::Boundary, Dimension::Point);
            }
        }

        let mut collapsed = true;
        for (a, nodes) in a_lines.iter().zip(a_nodes.iter()) {
            for piece in split(*a, nodes, tol) {
                collapsed = false;
                let loc = point_in_polygon(midpoint(piece), polygon, tol);
                trace!("line piece {:?} is {:?}", piece, loc);
                im.set_at_least(Location::Interior, loc.into(), Dimension::Line);
            }
        }
        if collapsed {
            if let Some(p) = self.line.coords().first() {
                let loc = point_in_polygon(*p, polygon, tol);
                trace!("collapsed line at {:?} is {:?}", p, loc);
                im.set_at_least(Location::Interior, loc.into(), Dimension::Point);
            }
        }

        if let Some(boundary) = self.line.boundary() {
            for p in boundary.iter() {
                let loc = point_in_polygon(*p, polygon, tol);
                im.set_at_least(Location::Boundary, loc.into(), Dimension::Point);
            }
        }

        let boundary_uncovered = ring_lines
            .iter()
            .zip(ring_nodes.iter())
            .flat_map(|(r, nodes)| split(*r, nodes, tol))
            .any(|piece| point_on_line(midpoint(piece), self.line, tol) == Location::Exterior);
        if boundary_uncovered {
            im.set_at_least(Location::Exterior, Location::Boundary, Dimension::Line);
        }

        im.set_at_least(Location::Exterior, Location::Interior, Dimension::Surface);
        im.set_at_least(Location::Exterior, Location::Exterior, Dimension::Surface);
        im
    }
}

impl<'a, T: GeoFloat> RelateStrategy<T> for LineRelate<'a, T> {
    fn dimensions(&self) -> (Dimension, Dimension) {
        if self.line.is_empty() {
            return (Dimension::Empty, Dimension::Empty);
        }
        let boundary = if self.line.boundary().is_some() {
            Dimension::Point
        } else {
            Dimension::Empty
        };
        (Dimension::Line, boundary)
    }

    fn compute(&self, other: &Steric<T>) -> Result<IntersectionMatrix> {
        match other {
            Steric::Point(p) => Ok(PointRelate::new(*p, self.tol)
                .relate_line(self.line)
                .transpose()),
            Steric::Line(l) => Ok(self.relate_line(l)),
            Steric::Polygon(p) => Ok(self.relate_polygon(p)),
            Steric::Collection(_) => Err(RelateError::UnsupportedKindPair {
                subject: StericKind::Line,
                other: other.kind(),
            }),
        }
    }
}
