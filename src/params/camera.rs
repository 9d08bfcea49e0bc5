//! Orbit camera configuration.

/// Damped orbit camera parameters
#[derive(Debug, Clone)]
pub struct OrbitParams {
    /// Initial eye position
    pub position: [f32; 3],

    /// Point the camera orbits around
    pub target: [f32; 3],

    /// Fraction of the pending motion applied (and removed) per update, in (0, 1]
    pub damping_factor: f32,

    /// Radians of rotation per pixel of drag
    pub rotate_speed: f32,

    /// Relative zoom per wheel line
    pub zoom_speed: f32,

    /// Closest allowed distance to the target
    pub min_distance: f32,

    /// Farthest allowed distance to the target
    pub max_distance: f32,

    /// Keep the polar angle this far (radians) from straight up or down
    pub polar_margin: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            position: [1.0, 1.0, 1.0],
            target: [0.0, 0.0, 0.0],
            damping_factor: 0.05,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            min_distance: 0.2,
            max_distance: 20.0,
            polar_margin: 0.01,
        }
    }
}
