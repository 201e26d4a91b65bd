//! Named spatial predicates on top of DE-9IM pattern matching.
//!
//! Every predicate is one or more fixed patterns compared against a
//! computed [`IntersectionMatrix`]. `Crosses` and `Overlaps` pick
//! their pattern from the dimensions of the two geometries.
use crate::matrix::{Dimension, IntersectionMatrix};

pub const EQUALS: &str = "T*F**FFF*";
pub const DISJOINT: &str = "FF*FF****";
pub const TOUCHES: [&str; 3] = ["FT*******", "F**T*****", "F***T****"];
pub const WITHIN: &str = "T*F**F***";
pub const CONTAINS: &str = "T*****FF*";
pub const COVERS: [&str; 4] = ["T*****FF*", "*T****FF*", "***T**FF*", "****T*FF*"];
pub const COVERED_BY: [&str; 4] = ["T*F**F***", "*TF**F***", "**FT*F***", "**F*TF***"];

/// A named spatial predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    Equals,
    Disjoint,
    Intersects,
    Touches,
    Crosses,
    Within,
    Contains,
    Overlaps,
    Covers,
    CoveredBy,
}

impl Predicate {
    pub const ALL: [Predicate; 10] = [
        Predicate::Equals,
        Predicate::Disjoint,
        Predicate::Intersects,
        Predicate::Touches,
        Predicate::Crosses,
        Predicate::Within,
        Predicate::Contains,
        Predicate::Overlaps,
        Predicate::Covers,
        Predicate::CoveredBy,
    ];

    /// Evaluate the predicate on `im`, the matrix of a geometry of
    /// dimension `dim_a` against one of dimension `dim_b`.
    pub fn evaluate(self, im: &IntersectionMatrix, dim_a: Dimension, dim_b: Dimension) -> bool {
        match self {
            Predicate::Equals => fits(im, EQUALS),
            Predicate::Disjoint => fits(im, DISJOINT),
            Predicate::Intersects => !fits(im, DISJOINT),
            Predicate::Touches => TOUCHES.iter().any(|p| fits(im, p)),
            Predicate::Crosses => crosses(im, dim_a, dim_b),
            Predicate::Within => fits(im, WITHIN),
            Predicate::Contains => fits(im, CONTAINS),
            Predicate::Overlaps => overlaps(im, dim_a, dim_b),
            Predicate::Covers => COVERS.iter().any(|p| fits(im, p)),
            Predicate::CoveredBy => COVERED_BY.iter().any(|p| fits(im, p)),
        }
    }
}

/// Patterns here are constants known to be well formed.
#[inline]
fn fits(im: &IntersectionMatrix, pattern: &str) -> bool {
    im.matches(pattern).unwrap_or(false)
}

fn crosses(im: &IntersectionMatrix, dim_a: Dimension, dim_b: Dimension) -> bool {
    if dim_a == Dimension::Line && dim_b == Dimension::Line {
        fits(im, "0********")
    } else if dim_a < dim_b {
        fits(im, "T*T******")
    } else if dim_a > dim_b {
        fits(im, "T*****T**")
    } else {
        false
    }
}

fn overlaps(im: &IntersectionMatrix, dim_a: Dimension, dim_b: Dimension) -> bool {
    if dim_a != dim_b {
        return false;
    }
    match dim_a {
        Dimension::Point | Dimension::Surface => fits(im, "T*T***T**"),
        Dimension::Line => fits(im, "1*T***T**"),
        Dimension::Empty => false,
    }
}
