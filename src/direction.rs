use glam::Vec2;
use strum_macros::{AsRefStr, EnumIter};

/// The eight compass directions a windrose animation can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumIter)]
#[repr(usize)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    #[default]
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions in clockwise order, starting at north.
    /// Index `i` holds the direction whose `as_usize` is `i`.
    pub const DIRECTIONS: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        Self::DIRECTIONS[(self.as_usize() + 4) % 8]
    }

    /// Returns the direction as a usize (0-7), clockwise from north.
    /// This is useful for indexing into arrays.
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    /// Returns the unit vector for this direction (y points up, north is +Y).
    pub fn as_vec2(self) -> Vec2 {
        let angle = self.as_usize() as f32 * std::f32::consts::FRAC_PI_4;
        // Clockwise from north: x = sin, y = cos
        Vec2::new(angle.sin(), angle.cos())
    }

    /// Snaps an arbitrary vector to the nearest compass direction.
    ///
    /// Returns `None` for zero-length or non-finite vectors, which have no heading.
    pub fn from_vec2(v: Vec2) -> Option<Direction> {
        if !v.is_finite() || v.length_squared() <= f32::EPSILON {
            return None;
        }

        // Angle measured clockwise from +Y, in [0, 2π)
        let angle = v.x.atan2(v.y).rem_euclid(std::f32::consts::TAU);
        let sector = (angle / std::f32::consts::FRAC_PI_4).round() as usize % 8;
        Some(Self::DIRECTIONS[sector])
    }

    /// The number of eighth-turns separating two directions, taking the shorter way round (0-4).
    pub const fn steps_between(a: Direction, b: Direction) -> usize {
        let diff = (a.as_usize() + 8 - b.as_usize()) % 8;
        if diff > 4 {
            8 - diff
        } else {
            diff
        }
    }
}
