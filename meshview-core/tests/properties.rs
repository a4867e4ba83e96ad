//! Property tests for the transform and projection contracts.

use meshview_core::{project_to_screen, ControlEvent, Projection, Transform, ViewState};
use nalgebra::Matrix4;
use proptest::prelude::*;

const TOL: f32 = 1e-4;

fn is_orthogonal(m: &Matrix4<f32>) -> bool {
    (m * m.transpose() - Matrix4::identity()).norm() < TOL && (m.determinant() - 1.0).abs() < TOL
}

proptest! {
    #[test]
    fn rotations_are_orthogonal(theta in -10.0f32..10.0) {
        prop_assert!(is_orthogonal(&Transform::rotation_x(theta)),
            "rotation_x({theta}) is not orthogonal");
        prop_assert!(is_orthogonal(&Transform::rotation_y(theta)),
            "rotation_y({theta}) is not orthogonal");
        prop_assert!(is_orthogonal(&Transform::rotation_z(theta)),
            "rotation_z({theta}) is not orthogonal");
    }
}

proptest! {
    #[test]
    fn zoom_never_drops_below_zero(scrolls in proptest::collection::vec(any::<bool>(), 0..200)) {
        let mut state = ViewState::new();
        for up in scrolls {
            state.apply(if up { ControlEvent::ScrollUp } else { ControlEvent::ScrollDown });
            prop_assert!(state.zoom >= 0.0, "zoom went negative: {}", state.zoom);
        }
    }
}

#[test]
fn composition_order_is_observable() {
    // Rotate-then-translate and translate-then-rotate land the same vertex
    // on different screen cells whenever both transforms are non-trivial.
    let projection = Projection::default().matrix();
    let rotation = Transform::rotation_y(0.5);
    let translation = Transform::translation(0.0, 0.0, 5.0);
    let vertex = nalgebra::Point3::new(1.0, 0.5, 4.0);

    let tr = project_to_screen(&(projection * translation * rotation), &vertex, 800, 600);
    let rt = project_to_screen(&(projection * rotation * translation), &vertex, 800, 600);
    assert_ne!(tr.unwrap(), rt.unwrap());
}
