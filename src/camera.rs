//! Damped orbit camera around the water plane.

use glam::{Mat4, Vec3};

use crate::params::{OrbitParams, RenderConfig};

/// Orbit camera in spherical coordinates around a target
///
/// Drag and wheel input queue motion; [`OrbitCamera::update`] releases a
/// `damping_factor` share of the queued rotation per frame, so the view keeps
/// gliding after the mouse stops.
pub struct OrbitCamera {
    params: OrbitParams,
    target: Vec3,
    radius: f32,
    /// Azimuth around +Y, measured from +Z toward +X
    theta: f32,
    /// Polar angle from +Y
    phi: f32,
    pending_theta: f32,
    pending_phi: f32,
    dragging: bool,
    last_cursor: Option<(f64, f64)>,
}

impl OrbitCamera {
    pub fn new(params: OrbitParams) -> Self {
        let target = Vec3::from_array(params.target);
        let offset = Vec3::from_array(params.position) - target;
        let radius = offset
            .length()
            .clamp(params.min_distance, params.max_distance);
        let theta = offset.x.atan2(offset.z);
        let phi = if offset.length() > 0.0 {
            (offset.y / offset.length()).clamp(-1.0, 1.0).acos()
        } else {
            std::f32::consts::FRAC_PI_2
        };

        let mut camera = Self {
            params,
            target,
            radius,
            theta,
            phi,
            pending_theta: 0.0,
            pending_phi: 0.0,
            dragging: false,
            last_cursor: None,
        };
        camera.phi = camera.clamp_phi(camera.phi);
        camera
    }

    pub fn position(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        self.target + self.radius * Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta)
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    /// Queue rotation for a cursor drag of `dx`, `dy` pixels
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.pending_theta -= dx * self.params.rotate_speed;
        self.pending_phi -= dy * self.params.rotate_speed;
    }

    /// Zoom by wheel `lines` (positive moves closer)
    pub fn zoom(&mut self, lines: f32) {
        let scale = (1.0 - self.params.zoom_speed).powf(lines);
        self.radius =
            (self.radius * scale).clamp(self.params.min_distance, self.params.max_distance);
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
        if !dragging {
            self.last_cursor = None;
        }
    }

    /// Feed absolute cursor positions; rotates while dragging
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        if self.dragging {
            if let Some((last_x, last_y)) = self.last_cursor {
                self.rotate((x - last_x) as f32, (y - last_y) as f32);
            }
        }
        self.last_cursor = Some((x, y));
    }

    /// Apply a damped share of the queued rotation; call once per frame
    pub fn update(&mut self) {
        let damping = self.params.damping_factor.clamp(0.0, 1.0);

        self.theta += self.pending_theta * damping;
        self.phi = self.clamp_phi(self.phi + self.pending_phi * damping);

        self.pending_theta *= 1.0 - damping;
        self.pending_phi *= 1.0 - damping;
    }

    fn clamp_phi(&self, phi: f32) -> f32 {
        let margin = self.params.polar_margin;
        phi.clamp(margin, std::f32::consts::PI - margin)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, camera_position)
    pub fn create_view_proj_matrix(&self, render_config: &RenderConfig) -> (Mat4, Vec3) {
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane,
            render_config.far_plane,
        );

        (proj * self.view_matrix(), self.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(a.distance(b) < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_starts_at_configured_position() {
        let camera = OrbitCamera::new(OrbitParams::default());
        assert_close(camera.position(), Vec3::new(1.0, 1.0, 1.0));
        assert!((camera.distance() - 3.0_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_damping_releases_full_rotation_over_time() {
        let mut camera = OrbitCamera::new(OrbitParams::default());
        let start_theta = camera.theta;

        camera.rotate(-100.0, 0.0);
        camera.update();
        let after_one = camera.theta - start_theta;

        for _ in 0..1000 {
            camera.update();
        }
        let total = camera.theta - start_theta;

        // 100 px * 0.005 rad/px, released 5% at a time
        assert!((after_one - 0.5 * 0.05).abs() < 1e-6);
        assert!((total - 0.5).abs() < 1e-4);
        assert!((camera.distance() - 3.0_f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_polar_angle_is_clamped() {
        let mut camera = OrbitCamera::new(OrbitParams::default());
        camera.rotate(0.0, 1.0e6);
        for _ in 0..200 {
            camera.update();
        }
        assert!(camera.phi >= 0.01 - 1e-6);
        assert!(camera.position().y > 0.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = OrbitCamera::new(OrbitParams::default());
        camera.zoom(1000.0);
        assert_eq!(camera.distance(), 0.2);
        camera.zoom(-1000.0);
        assert_eq!(camera.distance(), 20.0);
    }

    #[test]
    fn test_drag_only_rotates_while_pressed() {
        let mut camera = OrbitCamera::new(OrbitParams::default());
        camera.cursor_moved(10.0, 10.0);
        camera.cursor_moved(50.0, 10.0);
        assert_eq!(camera.pending_theta, 0.0);

        camera.set_dragging(true);
        camera.cursor_moved(50.0, 10.0);
        camera.cursor_moved(70.0, 10.0);
        assert!((camera.pending_theta + 20.0 * 0.005).abs() < 1e-6);
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = OrbitCamera::new(OrbitParams::default());
        let (view_proj, eye) = camera.create_view_proj_matrix(&RenderConfig::default());

        assert_ne!(view_proj, Mat4::IDENTITY);
        assert_ne!(view_proj, Mat4::ZERO);
        assert!(eye.is_finite());

        // Target projects to the center of the screen
        let clip = view_proj * Vec3::ZERO.extend(1.0);
        assert!((clip.x / clip.w).abs() < 1e-5);
        assert!((clip.y / clip.w).abs() < 1e-5);
    }

    #[test]
    fn test_clip_w_is_view_depth() {
        // Fog reads clip w as the depth along the view axis
        let camera = OrbitCamera::new(OrbitParams::default());
        let (view_proj, _) = camera.create_view_proj_matrix(&RenderConfig::default());
        let view = camera.view_matrix();

        for point in [Vec3::ZERO, Vec3::new(1.0, 0.0, -1.0), Vec3::new(-0.8, 0.2, 0.9)] {
            let clip = view_proj * point.extend(1.0);
            let depth = -(view * point.extend(1.0)).z;
            assert!((clip.w - depth).abs() < 1e-5, "{} != {}", clip.w, depth);
        }

        // Off-axis points are nearer in depth than in straight-line distance
        let edge = Vec3::new(1.0, 0.0, -1.0);
        let clip = view_proj * edge.extend(1.0);
        assert!(clip.w < edge.distance(camera.position()));
    }
}
