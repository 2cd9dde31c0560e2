use linear_math::Vector2D;
use tracing::debug;

/// One explicit Euler step of a point under constant acceleration
#[derive(Debug, Clone, Copy)]
pub struct Kinematics {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
}

impl Kinematics {
    /// Advance by one unit of time, returning every labeled quantity in
    /// display order
    pub fn step(&self) -> Vec<(&'static str, Vector2D)> {
        let new_velocity = self.velocity + self.acceleration;
        let new_position = self.position + new_velocity;
        debug!(
            "Stepped {:?} to position {new_position} with velocity {new_velocity}",
            self
        );

        vec![
            ("position", self.position),
            ("acceleration", self.acceleration),
            ("velocity", self.velocity),
            ("new_velocity", new_velocity),
            ("new_position", new_position),
        ]
    }
}
