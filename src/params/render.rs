//! Window, mesh and projection configuration.

use crate::color::Rgb;

use super::water::BACKGROUND_COLOR;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Side length of the square water plane (mesh units)
    pub plane_size: f32,

    /// Grid subdivisions per side (512 = 263,169 vertices)
    pub subdivisions: usize,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane
    pub near_plane: f32,

    /// Far clipping plane
    pub far_plane: f32,

    /// Clear color behind the water
    pub clear_color: Rgb,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            plane_size: 2.0,
            subdivisions: 512,
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 100.0,
            clear_color: BACKGROUND_COLOR,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }

    /// Record the window's physical size, zero included
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }

    /// A zero-area window has nothing to draw into
    pub fn is_minimized(&self) -> bool {
        self.window_width == 0 || self.window_height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_survives_zero_height() {
        let config = RenderConfig {
            window_height: 0,
            ..Default::default()
        };
        assert_eq!(config.aspect_ratio(), 1280.0);
    }

    #[test]
    fn test_minimize_and_restore() {
        let mut config = RenderConfig::default();
        assert!(!config.is_minimized());

        config.set_window_size(0, 0);
        assert!(config.is_minimized());
        config.set_window_size(800, 0);
        assert!(config.is_minimized());

        config.set_window_size(800, 600);
        assert!(!config.is_minimized());
        assert_eq!((config.window_width, config.window_height), (800, 600));
    }
}
