use nalgebra::Vector2;

/// Two dimensional vector used for positions and tangents.
pub type Vec2 = Vector2<f64>;

/// Vertex represents point through which curve passes together with its tangents.
/// - `position` - point on the curve,
/// - `entry_tangent` - derivative with respect to curve parameter when arriving at the vertex,
/// - `exit_tangent` - derivative with respect to curve parameter when leaving the vertex.
///
/// Tangents are zero until given explicitly or computed by a [TangentFinder](crate::TangentFinder).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    position: Vec2,
    entry_tangent: Vec2,
    exit_tangent: Vec2,
}

impl Vertex {
    /// Creates [Vertex] at `position` with zero tangents.
    pub fn new(position: Vec2) -> Self {
        Vertex { position, entry_tangent: Vec2::zeros(), exit_tangent: Vec2::zeros() }
    }

    /// Shorthand of [Vertex::new] from coordinates.
    pub fn at(x: f64, y: f64) -> Self {
        Vertex::new(Vec2::new(x, y))
    }

    /// Creates [Vertex] with explicit tangents.
    /// # Example
    /// ```
    /// use cubic_curve::{Vec2, Vertex};
    ///
    /// let vertex = Vertex::with_tangents(Vec2::new(1.0, 1.0), Vec2::new(1.0, 2.0), Vec2::new(1.0, 0.0));
    /// assert_eq!(Vec2::new(1.0, 2.0), *vertex.entry_tangent());
    /// assert_eq!(Vec2::new(1.0, 0.0), *vertex.exit_tangent());
    /// ```
    pub fn with_tangents(position: Vec2, entry_tangent: Vec2, exit_tangent: Vec2) -> Self {
        Vertex { position, entry_tangent, exit_tangent }
    }

    /// Creates [Vertex] with a single tangent used for both entry and exit.
    pub fn with_tangent(position: Vec2, tangent: Vec2) -> Self {
        Vertex { position, entry_tangent: tangent, exit_tangent: tangent }
    }

    pub fn position(&self) -> &Vec2 {
        &self.position
    }

    pub fn entry_tangent(&self) -> &Vec2 {
        &self.entry_tangent
    }

    pub fn exit_tangent(&self) -> &Vec2 {
        &self.exit_tangent
    }

    pub(crate) fn set_tangents(&mut self, entry_tangent: Vec2, exit_tangent: Vec2) {
        self.entry_tangent = entry_tangent;
        self.exit_tangent = exit_tangent;
    }
}

impl From<Vec2> for Vertex {
    fn from(position: Vec2) -> Self {
        Vertex::new(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let vertex = Vertex::new(Vec2::new(1.0, 2.5));

        assert_eq!(Vec2::new(1.0, 2.5), vertex.position);
        assert_eq!(Vec2::zeros(), vertex.entry_tangent);
        assert_eq!(Vec2::zeros(), vertex.exit_tangent);
    }

    #[test]
    fn test_at() {
        assert_eq!(Vertex::new(Vec2::new(-1.0, 3.0)), Vertex::at(-1.0, 3.0));
    }

    #[test]
    fn test_with_tangent() {
        let tangent = Vec2::new(0.5, -0.5);
        let vertex = Vertex::with_tangent(Vec2::new(1.0, 2.5), tangent);

        assert_eq!(tangent, vertex.entry_tangent);
        assert_eq!(tangent, vertex.exit_tangent);
    }

    #[test]
    fn test_set_tangents_keeps_position() {
        let mut vertex = Vertex::at(4.0, 5.0);
        vertex.set_tangents(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));

        assert_eq!(Vec2::new(4.0, 5.0), vertex.position);
        assert_eq!(Vec2::new(1.0, 0.0), vertex.entry_tangent);
        assert_eq!(Vec2::new(0.0, 1.0), vertex.exit_tangent);
    }
}
