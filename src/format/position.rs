//! 2D positions of roots and instances.

/// Bias subtracted from every raw 10-bit coordinate field.
///
/// On disk a coordinate is a 10-bit unsigned value (0..=1023); the decoded
/// signed coordinate is that value minus 500, giving the range [-500, 523].
pub const POSITION_BIAS: i16 = 500;

/// A node's position within a project or another node.
///
/// Encoded on disk as two 10-bit unsigned fields packed across byte
/// boundaries; held here already bias-corrected as signed coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Horizontal coordinate, in [-500, 523].
    pub x: i16,
    /// Vertical coordinate, in [-500, 523].
    pub y: i16,
}

impl Position {
    /// Build a position from two raw 10-bit field values, applying the bias.
    #[must_use]
    pub(crate) fn from_raw(x: i16, y: i16) -> Self {
        Position {
            x: x - POSITION_BIAS,
            y: y - POSITION_BIAS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bias_arithmetic_is_exact() {
        assert_eq!(Position::from_raw(0, 0), Position { x: -500, y: -500 });
        assert_eq!(Position::from_raw(1023, 1023), Position { x: 523, y: 523 });
        assert_eq!(Position::from_raw(500, 512), Position { x: 0, y: 12 });
    }
}
