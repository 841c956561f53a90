//! Actuator grid geometry and the fused coordinate encoding.
//!
//! Positions are 1-based `(column, row)` pairs. On the wire a position is
//! fused into a single decimal integer by concatenating the column digits
//! with the row digits, so `(3, 5)` becomes `35`. Downstream consumers parse
//! that integer back by splitting its two digits, which is why grids are
//! limited to [`MAX_GRID_DIMENSION`] columns and rows.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Largest column or row value the fused encoding can round-trip.
pub const MAX_GRID_DIMENSION: u8 = 9;

/// Dimensions of the actuator grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridSize {
    /// Number of columns.
    pub width: u8,
    /// Number of rows.
    pub height: u8,
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: 4,
            height: 6,
        }
    }
}

impl GridSize {
    /// Creates a grid size.
    pub fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    /// Total number of actuators on the grid.
    pub fn capacity(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns true if the position lies on the grid.
    pub fn contains(&self, pos: GridPosition) -> bool {
        (1..=self.width).contains(&pos.column) && (1..=self.height).contains(&pos.row)
    }

    /// Iterates all positions row by row.
    pub fn positions(&self) -> impl Iterator<Item = GridPosition> + '_ {
        (1..=self.height)
            .flat_map(move |row| (1..=self.width).map(move |column| GridPosition::new(column, row)))
    }
}

/// A 1-based `(column, row)` actuator position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPosition {
    /// Column, starting at 1.
    pub column: u8,
    /// Row, starting at 1.
    pub row: u8,
}

impl GridPosition {
    /// Creates a position.
    pub fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    /// Fuses the position into its wire integer.
    pub fn encode(self) -> u32 {
        encode_coord(self)
    }

    /// Decodes a wire integer into a position.
    pub fn decode(fused: i64) -> Result<Self, SpecError> {
        decode_coord(fused)
    }
}

impl From<(u8, u8)> for GridPosition {
    fn from((column, row): (u8, u8)) -> Self {
        Self::new(column, row)
    }
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Concatenates the decimal digits of column and row.
///
/// For single-digit values this is `column * 10 + row`.
pub fn encode_coord(pos: GridPosition) -> u32 {
    let mut scale = 10u32;
    while u32::from(pos.row) >= scale {
        scale *= 10;
    }
    u32::from(pos.column) * scale + u32::from(pos.row)
}

/// Splits a two-digit fused coordinate back into `(column, row)`.
pub fn decode_coord(fused: i64) -> Result<GridPosition, SpecError> {
    if !(11..=99).contains(&fused) {
        return Err(SpecError::InvalidCoordinate(fused));
    }
    let column = (fused / 10) as u8;
    let row = (fused % 10) as u8;
    if row == 0 {
        return Err(SpecError::InvalidCoordinate(fused));
    }
    Ok(GridPosition::new(column, row))
}

/// Serde adapter writing a [`GridPosition`] as its fused integer.
pub mod fused {
    use super::{decode_coord, encode_coord, GridPosition};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    /// Serializes the fused integer.
    pub fn serialize<S: Serializer>(pos: &GridPosition, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(encode_coord(*pos))
    }

    /// Deserializes a fused integer.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<GridPosition, D::Error> {
        let fused = i64::deserialize(deserializer)?;
        decode_coord(fused).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_concatenates_digits() {
        assert_eq!(encode_coord(GridPosition::new(1, 1)), 11);
        assert_eq!(encode_coord(GridPosition::new(4, 6)), 46);
        assert_eq!(encode_coord(GridPosition::new(2, 3)), 23);
    }

    #[test]
    fn test_encode_multi_digit_row_matches_string_concat() {
        // Not decodable, but must match the legacy concatenation.
        assert_eq!(encode_coord(GridPosition::new(1, 12)), 112);
        assert_eq!(encode_coord(GridPosition::new(10, 2)), 102);
    }

    #[test]
    fn test_decode_two_digit_values() {
        assert_eq!(decode_coord(35).unwrap(), GridPosition::new(3, 5));
        assert_eq!(decode_coord(99).unwrap(), GridPosition::new(9, 9));
    }

    #[test]
    fn test_decode_rejects_malformed_values() {
        assert!(decode_coord(0).is_err());
        assert!(decode_coord(7).is_err());
        assert!(decode_coord(30).is_err());
        assert!(decode_coord(100).is_err());
        assert!(decode_coord(-12).is_err());
    }

    #[test]
    fn test_every_default_grid_position_round_trips() {
        let grid = GridSize::default();
        assert_eq!(grid.positions().count(), 24);
        for pos in grid.positions() {
            assert!(grid.contains(pos));
            assert_eq!(decode_coord(i64::from(pos.encode())).unwrap(), pos);
        }
    }

    #[test]
    fn test_contains_checks_both_axes() {
        let grid = GridSize::new(4, 6);
        assert!(grid.contains(GridPosition::new(4, 6)));
        assert!(!grid.contains(GridPosition::new(0, 1)));
        assert!(!grid.contains(GridPosition::new(5, 1)));
        assert!(!grid.contains(GridPosition::new(1, 7)));
        assert_eq!(grid.capacity(), 24);
    }
}
