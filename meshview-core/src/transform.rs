//! Transformation matrices and the interaction state they are built from.

use nalgebra::{Matrix4, Vector3};

/// Angle step applied per discrete rotation event, in radians.
pub const ROTATE_STEP: f32 = 0.1;

/// Zoom step applied per scroll event.
pub const ZOOM_STEP: f32 = 0.01;

/// Depth translation per unit of zoom.
pub const ZOOM_DEPTH: f32 = 10.0;

/// Discrete control events produced by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    RotateUp,
    RotateDown,
    RotateLeft,
    RotateRight,
    RollPositive,
    RollNegative,
    ScrollUp,
    ScrollDown,
    Quit,
}

/// Interaction state: rotation about three axes plus depth zoom.
///
/// Angles are in radians and unbounded; they stay periodic through their
/// trigonometric use. `zoom` is clamped at zero from below and has no
/// upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub angle_x: f32,
    pub angle_y: f32,
    pub angle_z: f32,
    pub zoom: f32,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            angle_x: 0.0,
            angle_y: 0.0,
            angle_z: 0.0,
            zoom: 0.0,
        }
    }

    /// Apply one control event. `Quit` is the render loop's concern and
    /// leaves the state untouched.
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::RotateUp => self.angle_x += ROTATE_STEP,
            ControlEvent::RotateDown => self.angle_x -= ROTATE_STEP,
            ControlEvent::RotateLeft => self.angle_y += ROTATE_STEP,
            ControlEvent::RotateRight => self.angle_y -= ROTATE_STEP,
            ControlEvent::RollPositive => self.angle_z += ROTATE_STEP,
            ControlEvent::RollNegative => self.angle_z -= ROTATE_STEP,
            ControlEvent::ScrollUp => self.zoom = (self.zoom - ZOOM_STEP).max(0.0),
            ControlEvent::ScrollDown => self.zoom += ZOOM_STEP,
            ControlEvent::Quit => {}
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transform builder for the projection pipeline.
pub struct Transform;

impl Transform {
    /// Rotation about the x axis, identity at `theta = 0`.
    pub fn rotation_x(theta: f32) -> Matrix4<f32> {
        Matrix4::new_rotation(Vector3::new(theta, 0.0, 0.0))
    }

    /// Rotation about the y axis, identity at `theta = 0`.
    pub fn rotation_y(theta: f32) -> Matrix4<f32> {
        Matrix4::new_rotation(Vector3::new(0.0, theta, 0.0))
    }

    /// Rotation about the z axis, identity at `theta = 0`.
    pub fn rotation_z(theta: f32) -> Matrix4<f32> {
        Matrix4::new_rotation(Vector3::new(0.0, 0.0, theta))
    }

    /// Create a translation matrix
    pub fn translation(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }

    /// Combined rotation for a view state.
    ///
    /// Applied to a point, the z rotation acts first, then y, then x:
    /// `Rx * Ry * Rz`. The order is part of the rendering contract.
    pub fn rotation_matrix(view: &ViewState) -> Matrix4<f32> {
        Self::rotation_x(view.angle_x)
            * Self::rotation_y(view.angle_y)
            * Self::rotation_z(view.angle_z)
    }

    /// Full per-frame matrix: projection, then the zoom-driven depth
    /// translation, then rotation.
    ///
    /// Rotation must act on the point before the translation does;
    /// swapping them changes the picture whenever any angle is non-zero.
    pub fn composed(projection: &Matrix4<f32>, view: &ViewState) -> Matrix4<f32> {
        projection
            * Self::translation(0.0, 0.0, ZOOM_DEPTH * view.zoom)
            * Self::rotation_matrix(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_view_state_starts_at_rest() {
        let state = ViewState::new();
        assert_eq!(state.angle_x, 0.0);
        assert_eq!(state.angle_y, 0.0);
        assert_eq!(state.angle_z, 0.0);
        assert_eq!(state.zoom, 0.0);
    }

    #[test]
    fn test_rotation_events_step_angles() {
        let mut state = ViewState::new();
        state.apply(ControlEvent::RotateUp);
        state.apply(ControlEvent::RotateLeft);
        state.apply(ControlEvent::RollNegative);
        assert_relative_eq!(state.angle_x, 0.1);
        assert_relative_eq!(state.angle_y, 0.1);
        assert_relative_eq!(state.angle_z, -0.1);

        state.apply(ControlEvent::RotateDown);
        state.apply(ControlEvent::RotateDown);
        assert_relative_eq!(state.angle_x, -0.1);
    }

    #[test]
    fn test_scroll_events_step_zoom() {
        let mut state = ViewState::new();
        state.apply(ControlEvent::ScrollDown);
        state.apply(ControlEvent::ScrollDown);
        assert_relative_eq!(state.zoom, 0.02);
        state.apply(ControlEvent::ScrollUp);
        assert_relative_eq!(state.zoom, 0.01);
    }

    #[test]
    fn test_zoom_clamped_at_zero() {
        let mut state = ViewState::new();
        for _ in 0..10 {
            state.apply(ControlEvent::ScrollUp);
        }
        assert_eq!(state.zoom, 0.0);
    }

    #[test]
    fn test_quit_leaves_state_untouched() {
        let mut state = ViewState::new();
        state.apply(ControlEvent::Quit);
        assert_eq!(state, ViewState::new());
    }

    #[test]
    fn test_identity_rotation() {
        let matrix = Transform::rotation_matrix(&ViewState::new());
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
        assert!((Transform::rotation_x(0.0) - Matrix4::identity()).norm() < 1e-6);
        assert!((Transform::rotation_y(0.0) - Matrix4::identity()).norm() < 1e-6);
        assert!((Transform::rotation_z(0.0) - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_translation_column() {
        let m = Transform::translation(1.0, -2.0, 3.0);
        assert_relative_eq!(m[(0, 3)], 1.0);
        assert_relative_eq!(m[(1, 3)], -2.0);
        assert_relative_eq!(m[(2, 3)], 3.0);
        assert_relative_eq!(m[(3, 3)], 1.0);
    }
}
