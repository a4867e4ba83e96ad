//! Perspective projection and screen mapping.

use nalgebra::{Matrix4, Point3, Vector4};

/// Symmetric-frustum perspective configuration, fixed for a session.
///
/// Invariants: `0 < fov < 180` (degrees), `aspect > 0`, `near > 0`,
/// `far > near`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Field of view in degrees.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        debug_assert!(fov > 0.0 && fov < 180.0);
        debug_assert!(aspect > 0.0);
        debug_assert!(near > 0.0 && far > near);
        Self {
            fov,
            aspect,
            near,
            far,
        }
    }

    /// Create the perspective projection matrix
    pub fn matrix(&self) -> Matrix4<f32> {
        let f = 1.0 / (self.fov.to_radians() / 2.0).tan();
        Matrix4::new(
            f / self.aspect,
            0.0,
            0.0,
            0.0,
            0.0,
            f,
            0.0,
            0.0,
            0.0,
            0.0,
            (self.far + self.near) / (self.near - self.far),
            2.0 * self.far * self.near / (self.near - self.far),
            0.0,
            0.0,
            -1.0,
            0.0,
        )
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(90.0, 1.0, 0.1, 100.0)
    }
}

/// Project a 3D point through a composed matrix to integer screen
/// coordinates.
///
/// Returns `None` when the transformed `w` vanishes: the point sits on
/// the camera plane and has no screen image, so it is skipped instead of
/// dividing by zero. Off-canvas coordinates are returned as-is; clipping
/// is the canvas's concern.
pub fn project_to_screen(
    matrix: &Matrix4<f32>,
    point: &Point3<f32>,
    width: u32,
    height: u32,
) -> Option<(i32, i32)> {
    let clip = matrix * Vector4::new(point.x, point.y, point.z, 1.0);
    if clip.w.abs() < 1e-6 {
        return None;
    }

    let ndc_x = clip.x / clip.w;
    let ndc_y = clip.y / clip.w;

    let screen_x = (ndc_x * width as f32 / 2.0 + width as f32 / 2.0) as i32;
    let screen_y = (ndc_y * height as f32 / 2.0 + height as f32 / 2.0) as i32;
    Some((screen_x, screen_y))
}
