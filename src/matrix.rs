//! The DE-9IM intersection matrix.
//!
//! An [`IntersectionMatrix`] records, for every pair of locations
//! (interior, boundary, exterior) of two geometries, the dimension of
//! their intersection. Rows are indexed by the locations of the
//! subject geometry and columns by those of the other geometry.
//!
//! The matrix only exposes monotone merges: a cell may be raised
//! towards [`Dimension::Surface`] but never lowered.
use std::{fmt, str::FromStr};

use crate::error::{RelateError, Result};

/// Number of characters in a DE-9IM code or pattern.
pub const PATTERN_LEN: usize = 9;

/// Dimension of an intersection.
///
/// The derived ordering is the merge order: `Empty < Point < Line <
/// Surface`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Empty,
    Point,
    Line,
    Surface,
}

impl Dimension {
    /// Parse a code character (`F`, `0`, `1` or `2`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'F' => Some(Dimension::Empty),
            '0' => Some(Dimension::Point),
            '1' => Some(Dimension::Line),
            '2' => Some(Dimension::Surface),
            _ => None,
        }
    }

    /// The code character of this dimension.
    pub fn as_char(self) -> char {
        match self {
            Dimension::Empty => 'F',
            Dimension::Point => '0',
            Dimension::Line => '1',
            Dimension::Surface => '2',
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Dimension::Empty
    }
}

/// Topological location relative to a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Location {
    Interior,
    Boundary,
    Exterior,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::Interior, Location::Boundary, Location::Exterior];

    #[inline]
    fn index(self) -> usize {
        match self {
            Location::Interior => 0,
            Location::Boundary => 1,
            Location::Exterior => 2,
        }
    }
}

/// The 3x3 DE-9IM matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntersectionMatrix {
    cells: [[Dimension; 3]; 3],
}

impl Default for IntersectionMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl IntersectionMatrix {
    /// A matrix with every cell [`Dimension::Empty`].
    pub fn new() -> Self {
        IntersectionMatrix {
            cells: [[Dimension::Empty; 3]; 3],
        }
    }

    /// Get the dimension at `(row, col)`.
    #[inline]
    pub fn get(&self, row: Location, col: Location) -> Dimension {
        self.cells[row.index()][col.index()]
    }

    /// Raise the cell at `(row, col)` to at least `value`.
    #[inline]
    pub fn set_at_least(&mut self, row: Location, col: Location, value: Dimension) {
        let cell = &mut self.cells[row.index()][col.index()];
        if value > *cell {
            *cell = value;
        }
    }

    /// Merge a 9-character code, row-major, into this matrix.
    ///
    /// Each character must be one of `F`, `0`, `1` or `2`. The whole
    /// code is validated before any cell is touched, so on error the
    /// matrix is unchanged.
    pub fn set_at_least_str(&mut self, code: &str) -> Result<()> {
        let dims = parse_code(code)?;
        for (idx, dim) in dims.iter().enumerate() {
            let cell = &mut self.cells[idx / 3][idx % 3];
            if *dim > *cell {
                *cell = *dim;
            }
        }
        Ok(())
    }

    /// Cell-wise merge of another matrix into this one.
    pub fn set_at_least_from(&mut self, other: &IntersectionMatrix) {
        for row in Location::ALL {
            for col in Location::ALL {
                self.set_at_least(row, col, other.get(row, col));
            }
        }
    }

    /// A new matrix with rows and columns swapped.
    pub fn transpose(&self) -> IntersectionMatrix {
        let mut cells = self.cells;
        for (i, row) in cells.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.cells[j][i];
            }
        }
        IntersectionMatrix { cells }
    }

    /// Compare against a DE-9IM pattern.
    ///
    /// Pattern characters: `T` matches any non-empty cell, `F` an
    /// empty one, a digit exactly that dimension and `*` anything.
    pub fn matches(&self, pattern: &str) -> Result<bool> {
        check_len(pattern)?;
        let mut matched = true;
        for (idx, c) in pattern.chars().enumerate() {
            let cell = self.cells[idx / 3][idx % 3];
            let ok = match c {
                '*' => true,
                'T' => !cell.is_empty(),
                _ => match Dimension::from_char(c) {
                    Some(dim) => cell == dim,
                    None => {
                        return Err(RelateError::invalid_pattern(
                            pattern,
                            format!("unexpected character {:?} at {}", c, idx),
                        ))
                    }
                },
            };
            matched &= ok;
        }
        Ok(matched)
    }
}

/// Compare a computed DE-9IM code against a pattern.
///
/// The code must use only `F`, `0`, `1` and `2`; the pattern may also
/// use `T` and `*`.
pub fn matches(code: &str, pattern: &str) -> Result<bool> {
    code.parse::<IntersectionMatrix>()?.matches(pattern)
}

impl fmt::Display for IntersectionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for cell in row.iter() {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for IntersectionMatrix {
    type Err = RelateError;

    fn from_str(code: &str) -> Result<Self> {
        let mut im = IntersectionMatrix::new();
        im.set_at_least_str(code)?;
        Ok(im)
    }
}

fn check_len(pattern: &str) -> Result<()> {
    let len = pattern.chars().count();
    if len != PATTERN_LEN {
        return Err(RelateError::invalid_pattern(
            pattern,
            format!("expected {} characters, got {}", PATTERN_LEN, len),
        ));
    }
    Ok(())
}

fn parse_code(code: &str) -> Result<[Dimension; PATTERN_LEN]> {
    check_len(code)?;
    let mut dims = [Dimension::Empty; PATTERN_LEN];
    for (idx, c) in code.chars().enumerate() {
        dims[idx] = Dimension::from_char(c).ok_or_else(|| {
            RelateError::invalid_pattern(code, format!("unexpected character {:?} at {}", c, idx))
        })?;
    }
    Ok(dims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let im = IntersectionMatrix::new();
        assert_eq!(im.to_string(), "FFFFFFFFF");
        for row in Location::ALL {
            for col in Location::ALL {
                assert_eq!(im.get(row, col), Dimension::Empty);
            }
        }
    }

    #[test]
    fn test_dimension_ordering() {
        assert!(Dimension::Empty < Dimension::Point);
        assert!(Dimension::Point < Dimension::Line);
        assert!(Dimension::Line < Dimension::Surface);
    }

    #[test]
    fn test_set_at_least_never_lowers() {
        let mut im = IntersectionMatrix::new();
        im.set_at_least(Location::Interior, Location::Boundary, Dimension::Line);
        im.set_at_least(Location::Interior, Location::Boundary, Dimension::Point);
        assert_eq!(
            im.get(Location::Interior, Location::Boundary),
            Dimension::Line
        );
        im.set_at_least(Location::Interior, Location::Boundary, Dimension::Surface);
        assert_eq!(
            im.get(Location::Interior, Location::Boundary),
            Dimension::Surface
        );
    }

    #[test]
    fn test_code_round_trip() {
        for code in &["2FF1FF212", "212101212", "FF2FF1212", "0FFFFFFF2", "FFFFFFFFF"] {
            let mut im = IntersectionMatrix::new();
            im.set_at_least_str(code).unwrap();
            assert_eq!(&im.to_string(), code);
        }
    }

    #[test]
    fn test_merge_is_monotone() {
        let mut im: IntersectionMatrix = "212101212".parse().unwrap();
        let before = im;
        im.set_at_least_str("FF2FF1012").unwrap();
        assert_eq!(im.to_string(), "212101212");
        for row in Location::ALL {
            for col in Location::ALL {
                assert!(im.get(row, col) >= before.get(row, col));
            }
        }

        let mut im: IntersectionMatrix = "0FFFFFFF2".parse().unwrap();
        im.set_at_least_str("FF0FFF0F2").unwrap();
        assert_eq!(im.to_string(), "0F0FFF0F2");
    }

    #[test]
    fn test_invalid_patterns() {
        let mut im = IntersectionMatrix::new();
        assert!(matches!(
            im.set_at_least_str("2FF1FF21"),
            Err(RelateError::InvalidPattern { .. })
        ));
        assert!(matches!(
            im.set_at_least_str("2FF1FF2120"),
            Err(RelateError::InvalidPattern { .. })
        ));
        assert!(matches!(
            im.set_at_least_str("2FF1FF21T"),
            Err(RelateError::InvalidPattern { .. })
        ));
        assert!(matches!(
            im.set_at_least_str("2FF1FF213"),
            Err(RelateError::InvalidPattern { .. })
        ));
        // A rejected code leaves the matrix untouched.
        assert_eq!(im, IntersectionMatrix::new());

        assert!(im.matches("T*****FF").is_err());
        assert!(im.matches("T*****FFx").is_err());
    }

    #[test]
    fn test_transpose() {
        let im: IntersectionMatrix = "2FF1FF212".parse().unwrap();
        assert_eq!(im.transpose().to_string(), "212FF1FF2");
        assert_eq!(im.transpose().transpose(), im);

        let im: IntersectionMatrix = "F0FFFF102".parse().unwrap();
        assert_eq!(im.transpose().to_string(), "FF10F0FF2");
    }

    #[test]
    fn test_matches() {
        let im: IntersectionMatrix = "2FF1FF212".parse().unwrap();
        assert!(im.matches("T*F**F***").unwrap());
        assert!(im.matches("*********").unwrap());
        assert!(im.matches("2FF1FF212").unwrap());
        assert!(!im.matches("T*****FF*").unwrap());
        assert!(!im.matches("1********").unwrap());
        assert!(!im.matches("FF*FF****").unwrap());
    }

    #[test]
    fn test_matches_codes() {
        assert!(matches("212101212", "T*T***T**").unwrap());
        assert!(matches("FF2FF1212", "FF*FF****").unwrap());
        assert!(!matches("FF2FF1212", "T********").unwrap());
        assert!(matches("FF2FF121", "FF*FF****").is_err());
        assert!(matches("FF2FF121T", "FF*FF****").is_err());
    }
}
