use geo::{Coordinate, GeoFloat};
use log::trace;

use super::RelateStrategy;
use crate::{
    error::{RelateError, Result},
    matrix::{Dimension, IntersectionMatrix, Location},
    predicates::{coincident, point_in_polygon, point_on_line},
    steric::{LineMatrix, PolygonMatrix, Steric, StericKind},
};

/// Relate strategy for a point subject.
#[derive(Debug, Clone, Copy)]
pub struct PointRelate<T: GeoFloat> {
    point: Coordinate<T>,
    tol: T,
}

impl<T: GeoFloat> PointRelate<T> {
    pub fn new(point: Coordinate<T>, tol: T) -> Self {
        PointRelate { point, tol }
    }

    pub fn relate_point(&self, other: Coordinate<T>) -> IntersectionMatrix {
        let mut im = IntersectionMatrix::new();
        if coincident(self.point, other, self.tol) {
            im.set_at_least(Location::Interior, Location::Interior, Dimension::Point);
        } else {
            im.set_at_least(Location::Interior, Location::Exterior, Dimension::Point);
            im.set_at_least(Location::Exterior, Location::Interior, Dimension::Point);
        }
        im.set_at_least(Location::Exterior, Location::Exterior, Dimension::Surface);
        im
    }

    pub fn relate_line(&self, line: &LineMatrix<T>) -> IntersectionMatrix {
        let mut im = IntersectionMatrix::new();
        let loc = point_on_line(self.point, line, self.tol);
        trace!("point {:?} is {:?} of line", self.point, loc);
        im.set_at_least(Location::Interior, loc, Dimension::Point);

        im.set_at_least(Location::Exterior, Location::Interior, Dimension::Line);
        if let Some(boundary) = line.boundary() {
            // The point covers at most one of the two endpoints.
            if boundary
                .iter()
                .any(|b| !coincident(self.point, *b, self.tol))
            {
                im.set_at_least(Location::Exterior, Location::Boundary, Dimension::Point);
            }
        }
        im.set_at_least(Location::Exterior, Location::Exterior, Dimension::Surface);
        im
    }

    pub fn relate_polygon(&self, polygon: &PolygonMatrix<T>) -> IntersectionMatrix {
        let mut im = IntersectionMatrix::new();
        let loc = point_in_polygon(self.point, polygon, self.tol);
        trace!("point {:?} is {:?} polygon", self.point, loc);
        im.set_at_least(Location::Interior, loc.into(), Dimension::Point);

        im.set_at_least(Location::Exterior, Location::Interior, Dimension::Surface);
        im.set_at_least(Location::Exterior, Location::Boundary, Dimension::Line);
        im.set_at_least(Location::Exterior, Location::Exterior, Dimension::Surface);
        im
    }
}

impl<T: GeoFloat> RelateStrategy<T> for PointRelate<T> {
    fn dimensions(&self) -> (Dimension, Dimension) {
        (Dimension::Point, Dimension::Empty)
    }

    fn compute(&self, other: &Steric<T>) -> Result<IntersectionMatrix> {
        match other {
            Steric::Point(q) => Ok(self.relate_point(*q)),
            Steric::Line(l) => Ok(self.relate_line(l)),
            Steric::Polygon(p) => Ok(self.relate_polygon(p)),
            Steric::Collection(_) => Err(RelateError::UnsupportedKindPair {
                subject: StericKind::Point,
                other: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::relate::tests::check_relate;

    #[test]
    fn test_point_point() -> Result<(), Box<dyn Error>> {
        assert_eq!(check_relate("POINT(1 1)", "POINT(1 1)")?, "0FFFFFFF2");
        assert_eq!(check_relate("POINT(1 1)", "POINT(2 1)")?, "FF0FFF0F2");
        Ok(())
    }

    #[test]
    fn test_point_line() -> Result<(), Box<dyn Error>> {
        // Interior vertex and interior of a segment.
        assert_eq!(
            check_relate("POINT(2 0)", "LINESTRING(0 0,2 0,2 2)")?,
            "0FFFFF102"
        );
        assert_eq!(
            check_relate("POINT(1 0)", "LINESTRING(0 0,2 0,2 2)")?,
            "0FFFFF102"
        );
        // Endpoint
        assert_eq!(
            check_relate("POINT(0 0)", "LINESTRING(0 0,2 0,2 2)")?,
            "F0FFFF102"
        );
        assert_eq!(
            check_relate("POINT(5 5)", "LINESTRING(0 0,2 0,2 2)")?,
            "FF0FFF102"
        );
        // A closed line has no boundary.
        assert_eq!(
            check_relate("POINT(0 0)", "LINESTRING(0 0,2 0,2 2,0 0)")?,
            "0FFFFF1F2"
        );
        Ok(())
    }

    #[test]
    fn test_point_polygon() -> Result<(), Box<dyn Error>> {
        let square = "POLYGON((0 0,10 0,10 10,0 10,0 0))";
        assert_eq!(check_relate("POINT(5 5)", square)?, "0FFFFF212");
        assert_eq!(check_relate("POINT(5 0)", square)?, "F0FFFF212");
        assert_eq!(check_relate("POINT(15 5)", square)?, "FF0FFF212");

        let triangle = "POLYGON((0 0,4 0,0 4,0 0))";
        assert_eq!(check_relate("POINT(2 2)", triangle)?, "F0FFFF212");
        assert_eq!(check_relate("POINT(1 1)", triangle)?, "0FFFFF212");

        let holed = "POLYGON((0 0,10 0,10 10,0 10,0 0),(4 4,6 4,6 6,4 6,4 4))";
        assert_eq!(check_relate("POINT(5 5)", holed)?, "FF0FFF212");
        assert_eq!(check_relate("POINT(5 4)", holed)?, "F0FFFF212");
        Ok(())
    }
}
