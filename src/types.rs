use glam::DVec2;

/// World and screen coordinates share one value type.
pub type Vector2 = DVec2;

/// Heading used when a ship reports a zero-length (or non-finite) rotation vector.
pub const DEFAULT_HEADING: Vector2 = DVec2::X;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ship {
    pub position: Vector2,
    pub rotation_vector: Vector2,
}

impl Ship {
    /// Unit-length heading. Degenerate rotation vectors map to [`DEFAULT_HEADING`].
    pub fn heading(&self) -> Vector2 {
        self.rotation_vector.try_normalize().unwrap_or(DEFAULT_HEADING)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bullet {
    pub position: Vector2,
}

/// One complete update from the server. Never merged with a previous one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorldSnapshot {
    pub ships: Vec<Ship>,
    pub bullets: Vec<Bullet>,
}
