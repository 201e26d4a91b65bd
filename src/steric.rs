//! Geometry representation consumed by the relate engine.
//!
//! A [`Steric`] is a read-only snapshot of a planar geometry, taken
//! when a relate call starts. Values from the `geo` crate convert
//! into it via `From`.
use geo::{
    Coordinate, GeoFloat, Geometry, GeometryCollection, Line, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, Rect, Triangle,
};

use crate::matrix::Dimension;

/// The kind of a [`Steric`], without its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StericKind {
    Point,
    Line,
    Polygon,
    Collection,
}

/// An ordered sequence of coordinates.
///
/// Used both for line strings and polygon rings. A ring need not
/// repeat its first coordinate; it is closed implicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMatrix<T: GeoFloat>(pub Vec<Coordinate<T>>);

impl<T: GeoFloat> LineMatrix<T> {
    #[inline]
    pub fn coords(&self) -> &[Coordinate<T>] {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the first and last coordinates coincide.
    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => self.0.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Boundary points of the line: both endpoints of an open line,
    /// nothing for a closed or empty one.
    pub fn boundary(&self) -> Option<[Coordinate<T>; 2]> {
        if self.is_closed() || self.0.len() < 2 {
            return None;
        }
        Some([self.0[0], self.0[self.0.len() - 1]])
    }

    /// Segments of the line, in order.
    pub fn lines(&self) -> impl Iterator<Item = Line<T>> + '_ {
        self.0.windows(2).map(|w| Line::new(w[0], w[1]))
    }

    /// Segments of the line read as a ring, including the closing
    /// segment if the last coordinate differs from the first.
    pub fn ring_lines(&self) -> impl Iterator<Item = Line<T>> + '_ {
        let closing = match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) if first != last => Some(Line::new(*last, *first)),
            _ => None,
        };
        self.lines().chain(closing)
    }
}

/// A polygon as a list of rings: the shell first, then the holes.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonMatrix<T: GeoFloat>(pub Vec<LineMatrix<T>>);

impl<T: GeoFloat> PolygonMatrix<T> {
    /// The outer ring, if any.
    #[inline]
    pub fn shell(&self) -> Option<&LineMatrix<T>> {
        self.0.first()
    }

    /// The rings after the shell.
    #[inline]
    pub fn holes(&self) -> &[LineMatrix<T>] {
        self.0.get(1..).unwrap_or(&[])
    }

    #[inline]
    pub fn rings(&self) -> &[LineMatrix<T>] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.shell().map(|s| s.is_empty()).unwrap_or(true)
    }
}

/// A planar geometry as seen by the relate engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Steric<T: GeoFloat> {
    Point(Coordinate<T>),
    Line(LineMatrix<T>),
    Polygon(PolygonMatrix<T>),
    Collection(Vec<Steric<T>>),
}

impl<T: GeoFloat> Steric<T> {
    pub fn kind(&self) -> StericKind {
        match self {
            Steric::Point(_) => StericKind::Point,
            Steric::Line(_) => StericKind::Line,
            Steric::Polygon(_) => StericKind::Polygon,
            Steric::Collection(_) => StericKind::Collection,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Steric::Point(_) => false,
            Steric::Line(l) => l.is_empty(),
            Steric::Polygon(p) => p.is_empty(),
            Steric::Collection(c) => c.iter().all(Steric::is_empty),
        }
    }

    /// Topological dimension of the geometry; `Empty` if it has no
    /// points.
    pub fn dimension(&self) -> Dimension {
        if self.is_empty() {
            return Dimension::Empty;
        }
        match self {
            Steric::Point(_) => Dimension::Point,
            Steric::Line(_) => Dimension::Line,
            Steric::Polygon(_) => Dimension::Surface,
            Steric::Collection(c) => c
                .iter()
                .map(Steric::dimension)
                .max()
                .unwrap_or(Dimension::Empty),
        }
    }

    /// Dimension of the geometry's boundary.
    pub fn boundary_dimension(&self) -> Dimension {
        if self.is_empty() {
            return Dimension::Empty;
        }
        match self {
            Steric::Point(_) => Dimension::Empty,
            Steric::Line(l) => {
                if l.boundary().is_some() {
                    Dimension::Point
                } else {
                    Dimension::Empty
                }
            }
            Steric::Polygon(_) => Dimension::Line,
            Steric::Collection(c) => c
                .iter()
                .map(Steric::boundary_dimension)
                .max()
                .unwrap_or(Dimension::Empty),
        }
    }
}

impl<T: GeoFloat> From<Coordinate<T>> for Steric<T> {
    fn from(c: Coordinate<T>) -> Self {
        Steric::Point(c)
    }
}

impl<T: GeoFloat> From<&Point<T>> for Steric<T> {
    fn from(p: &Point<T>) -> Self {
        Steric::Point(p.0)
    }
}

impl<T: GeoFloat> From<&Line<T>> for Steric<T> {
    fn from(l: &Line<T>) -> Self {
        Steric::Line(LineMatrix(vec![l.start, l.end]))
    }
}

impl<T: GeoFloat> From<&LineString<T>> for LineMatrix<T> {
    fn from(ls: &LineString<T>) -> Self {
        LineMatrix(ls.0.clone())
    }
}

impl<T: GeoFloat> From<&LineString<T>> for Steric<T> {
    fn from(ls: &LineString<T>) -> Self {
        Steric::Line(ls.into())
    }
}

impl<T: GeoFloat> From<&Polygon<T>> for PolygonMatrix<T> {
    fn from(poly: &Polygon<T>) -> Self {
        let mut rings = Vec::with_capacity(1 + poly.interiors().len());
        rings.push(poly.exterior().into());
        rings.extend(poly.interiors().iter().map(LineMatrix::from));
        PolygonMatrix(rings)
    }
}

impl<T: GeoFloat> From<&Polygon<T>> for Steric<T> {
    fn from(poly: &Polygon<T>) -> Self {
        Steric::Polygon(poly.into())
    }
}

impl<T: GeoFloat> From<&Rect<T>> for Steric<T> {
    fn from(rect: &Rect<T>) -> Self {
        (&rect.to_polygon()).into()
    }
}

impl<T: GeoFloat> From<&Triangle<T>> for Steric<T> {
    fn from(tri: &Triangle<T>) -> Self {
        (&tri.to_polygon()).into()
    }
}

impl<T: GeoFloat> From<&MultiPoint<T>> for Steric<T> {
    fn from(mp: &MultiPoint<T>) -> Self {
        Steric::Collection(mp.0.iter().map(Steric::from).collect())
    }
}

impl<T: GeoFloat> From<&MultiLineString<T>> for Steric<T> {
    fn from(mls: &MultiLineString<T>) -> Self {
        Steric::Collection(mls.0.iter().map(Steric::from).collect())
    }
}

impl<T: GeoFloat> From<&MultiPolygon<T>> for Steric<T> {
    fn from(mp: &MultiPolygon<T>) -> Self {
        Steric::Collection(mp.0.iter().map(Steric::from).collect())
    }
}

impl<T: GeoFloat> From<&GeometryCollection<T>> for Steric<T> {
    fn from(gc: &GeometryCollection<T>) -> Self {
        Steric::Collection(gc.0.iter().map(Steric::from).collect())
    }
}

impl<T: GeoFloat> From<&Geometry<T>> for Steric<T> {
    fn from(geom: &Geometry<T>) -> Self {
        match geom {
            Geometry::Point(g) => g.into(),
            Geometry::Line(g) => g.into(),
            Geometry::LineString(g) => g.into(),
            Geometry::Polygon(g) => g.into(),
            Geometry::MultiPoint(g) => g.into(),
            Geometry::MultiLineString(g) => g.into(),
            Geometry::MultiPolygon(g) => g.into(),
            Geometry::GeometryCollection(g) => g.into(),
            Geometry::Rect(g) => g.into(),
            Geometry::Triangle(g) => g.into(),
        }
    }
}

/// Owned conversions forward to the borrowed ones.
macro_rules! from_owned {
    ($($ty:ident),*) => {
        $(
            impl<T: GeoFloat> From<$ty<T>> for Steric<T> {
                fn from(g: $ty<T>) -> Self {
                    Steric::from(&g)
                }
            }
        )*
    };
}

from_owned!(
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

#[cfg(test)]
mod tests {
    use std::error::Error;

    use geo::{line_string, polygon};
    use wkt::TryFromWkt;

    use super::*;

    #[test]
    fn test_ring_lines_close_implicitly() {
        let open = LineMatrix(vec![
            Coordinate::from((0., 0.)),
            (1., 0.).into(),
            (1., 1.).into(),
        ]);
        assert_eq!(open.lines().count(), 2);
        assert_eq!(open.ring_lines().count(), 3);

        let closed = LineMatrix(vec![
            Coordinate::from((0., 0.)),
            (1., 0.).into(),
            (1., 1.).into(),
            (0., 0.).into(),
        ]);
        assert!(closed.is_closed());
        assert_eq!(closed.ring_lines().count(), 3);
    }

    #[test]
    fn test_line_boundary() {
        let ls = line_string![(x: 0., y: 0.), (x: 2., y: 0.), (x: 2., y: 2.)];
        let lm = LineMatrix::from(&ls);
        assert_eq!(lm.boundary(), Some([(0., 0.).into(), (2., 2.).into()]));

        let ring = line_string![(x: 0., y: 0.), (x: 2., y: 0.), (x: 2., y: 2.), (x: 0., y: 0.)];
        assert_eq!(LineMatrix::from(&ring).boundary(), None);
    }

    #[test]
    fn test_polygon_rings() {
        let poly = polygon!(
            exterior: [(x: 0., y: 0.), (x: 10., y: 0.), (x: 10., y: 10.), (x: 0., y: 10.)],
            interiors: [[(x: 2., y: 2.), (x: 4., y: 2.), (x: 4., y: 4.)]],
        );
        let pm = PolygonMatrix::from(&poly);
        assert_eq!(pm.rings().len(), 2);
        assert_eq!(pm.holes().len(), 1);
        assert!(!pm.is_empty());
    }

    #[test]
    fn test_dimensions() -> Result<(), Box<dyn Error>> {
        let geom = Geometry::<f64>::try_from_wkt_str(
            "GEOMETRYCOLLECTION(POINT(0 0),LINESTRING(0 0,1 1))",
        )?;
        let steric = Steric::from(&geom);
        assert_eq!(steric.kind(), StericKind::Collection);
        assert_eq!(steric.dimension(), Dimension::Line);
        assert_eq!(steric.boundary_dimension(), Dimension::Point);

        let geom = Geometry::<f64>::try_from_wkt_str("MULTIPOLYGON(((0 0,1 0,1 1,0 0)))")?;
        let steric = Steric::from(&geom);
        assert_eq!(steric.dimension(), Dimension::Surface);
        assert_eq!(steric.boundary_dimension(), Dimension::Line);

        let empty: Steric<f64> = Steric::Collection(vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.dimension(), Dimension::Empty);
        Ok(())
    }
}
