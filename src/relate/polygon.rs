use geo::{Coordinate, GeoFloat};
use log::debug;

use super::{LineRelate, PointRelate, RelateStrategy};
use crate::{
    error::{RelateError, Result},
    matrix::{Dimension, IntersectionMatrix},
    predicates::{is_intersection_edge, point_in_ring, Containment},
    steric::{PolygonMatrix, Steric, StericKind},
};

/// Classification of one polygon against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonState {
    /// The subject lies inside the other polygon.
    Contained,
    /// The boundaries cross, touch or overlap.
    Crossing,
    /// The interiors do not meet.
    Disjoint,
    /// The other polygon lies inside the subject.
    Containing,
}

impl PolygonState {
    /// The DE-9IM code of the subject against the other polygon.
    pub fn code(self) -> &'static str {
        match self {
            PolygonState::Contained => "2FF1FF212",
            PolygonState::Crossing => "212101212",
            PolygonState::Disjoint => "FF2FF1212",
            PolygonState::Containing => "212FF1FF2",
        }
    }
}

/// Relate strategy for a polygon subject.
#[derive(Debug, Clone, Copy)]
pub struct PolygonRelate<'a, T: GeoFloat> {
    polygon: &'a PolygonMatrix<T>,
    tol: T,
}

impl<'a, T: GeoFloat> PolygonRelate<'a, T> {
    pub fn new(polygon: &'a PolygonMatrix<T>, tol: T) -> Self {
        PolygonRelate { polygon, tol }
    }

    /// Whether `probe` is strictly inside `polygon`: inside its shell
    /// and inside none of its holes.
    fn probe_inside(&self, probe: Coordinate<T>, polygon: &PolygonMatrix<T>) -> bool {
        let in_shell = polygon
            .shell()
            .map(|shell| point_in_ring(probe, shell, self.tol) == Containment::Inside)
            .unwrap_or(false);
        in_shell
            && !polygon
                .holes()
                .iter()
                .any(|hole| point_in_ring(probe, hole, self.tol) == Containment::Inside)
    }

    /// Classify the subject against `other`.
    ///
    /// The boundaries are first tested for any contact between the
    /// subject's shell and the rings of `other`, and between the
    /// subject's holes and the shell of `other`. Without contact, the
    /// first vertex of the subject's shell decides containment: inside
    /// the shell of `other` means contained, unless it sits in one of
    /// its holes. Failing that, the first vertex of `other` is probed
    /// against the subject the same way.
    ///
    /// The single-vertex probe is only sound when boundaries do not
    /// touch; a vertex on the other boundary is already a contact.
    pub fn classify(&self, other: &PolygonMatrix<T>) -> PolygonState {
        let tol = self.tol;
        let (shell, other_shell) = match (self.polygon.shell(), other.shell()) {
            (Some(s), Some(o)) => (s, o),
            _ => return PolygonState::Disjoint,
        };

        let crossing = other
            .rings()
            .iter()
            .any(|ring| is_intersection_edge(shell, ring, tol))
            || self
                .polygon
                .holes()
                .iter()
                .any(|hole| is_intersection_edge(hole, other_shell, tol));
        if crossing {
            return PolygonState::Crossing;
        }

        let mut state = match shell.coords().first() {
            Some(probe) => {
                if point_in_ring(*probe, other_shell, tol) == Containment::Inside {
                    PolygonState::Contained
                } else {
                    PolygonState::Disjoint
                }
            }
            None => PolygonState::Disjoint,
        };
        if state == PolygonState::Contained {
            if let Some(probe) = shell.coords().first() {
                let in_hole = other
                    .holes()
                    .iter()
                    .any(|hole| point_in_ring(*probe, hole, tol) == Containment::Inside);
                if in_hole {
                    state = PolygonState::Disjoint;
                }
            }
        }

        if state == PolygonState::Disjoint {
            if let Some(probe) = other_shell.coords().first() {
                if self.probe_inside(*probe, self.polygon) {
                    state = PolygonState::Containing;
                }
            }
        }
        state
    }

    /// Merge the classification of the subject against `other` into
    /// `im`.
    pub fn compute_polygon(
        &self,
        other: &PolygonMatrix<T>,
        im: &mut IntersectionMatrix,
    ) -> Result<()> {
        let state = self.classify(other);
        debug!("polygon classified as {:?}", state);
        im.set_at_least_str(state.code())
    }
}

impl<'a, T: GeoFloat> RelateStrategy<T> for PolygonRelate<'a, T> {
    fn dimensions(&self) -> (Dimension, Dimension) {
        if self.polygon.is_empty() {
            (Dimension::Empty, Dimension::Empty)
        } else {
            (Dimension::Surface, Dimension::Line)
        }
    }

    fn compute(&self, other: &Steric<T>) -> Result<IntersectionMatrix> {
        match other {
            Steric::Point(p) => Ok(PointRelate::new(*p, self.tol)
                .relate_polygon(self.polygon)
                .transpose()),
            Steric::Line(l) => Ok(LineRelate::new(l, self.tol)
                .relate_polygon(self.polygon)
                .transpose()),
            Steric::Polygon(p) => {
                let mut im = IntersectionMatrix::new();
                self.compute_polygon(p, &mut im)?;
                Ok(im)
            }
            Steric::Collection(_) => Err(RelateError::UnsupportedKindPair {
                subject: StericKind::Polygon,
                other: other.kind(),
            }),
        }
    }
}
