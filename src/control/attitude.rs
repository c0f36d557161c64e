//! Orientation bookkeeping for the lander.
//!
//! Orientation is stored as xyz Euler angles in degrees. The body-to-world
//! rotation is `Rx(x) · Ry(y) · Rz(z)`, and the lander's "up" axis is body +z.

use crate::utils::vector3d::Vector3D;

fn rotate_x(v: Vector3D, angle: f64) -> Vector3D {
    let (sin, cos) = angle.sin_cos();
    Vector3D::new(v.x, v.y * cos - v.z * sin, v.y * sin + v.z * cos)
}

fn rotate_y(v: Vector3D, angle: f64) -> Vector3D {
    let (sin, cos) = angle.sin_cos();
    Vector3D::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos)
}

fn rotate_z(v: Vector3D, angle: f64) -> Vector3D {
    let (sin, cos) = angle.sin_cos();
    Vector3D::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos, v.z)
}

/// Rotate a body-frame vector into the world frame.
pub fn body_to_world(orientation: &Vector3D, v: Vector3D) -> Vector3D {
    let v = rotate_z(v, orientation.z.to_radians());
    let v = rotate_y(v, orientation.y.to_radians());
    rotate_x(v, orientation.x.to_radians())
}

/// World-frame direction of the lander's up axis, along which the engine pushes.
pub fn thrust_direction(orientation: &Vector3D) -> Vector3D {
    body_to_world(orientation, Vector3D::new(0.0, 0.0, 1.0))
}

/// Euler angles that point the up axis radially away from the planet.
///
/// The base then faces the surface. Roll about the up axis is left at zero.
pub fn stabilized_orientation(position: &Vector3D) -> Vector3D {
    let up = position.norm();
    let pitch = up.x.clamp(-1.0, 1.0).asin();
    let roll = (-up.y).atan2(up.z);
    Vector3D::new(roll.to_degrees(), pitch.to_degrees(), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPSILON: f64 = 1e-9;

    fn assert_vec_eq(a: Vector3D, b: Vector3D) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = EPSILON);
        assert_abs_diff_eq!(a.y, b.y, epsilon = EPSILON);
        assert_abs_diff_eq!(a.z, b.z, epsilon = EPSILON);
    }

    #[test]
    fn test_identity_orientation_points_up_z() {
        assert_vec_eq(thrust_direction(&Vector3D::ZERO), Vector3D::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_quarter_turns() {
        // Pitch of 90 degrees tips the up axis onto +x.
        assert_vec_eq(
            thrust_direction(&Vector3D::new(0.0, 90.0, 0.0)),
            Vector3D::new(1.0, 0.0, 0.0),
        );
        // Roll of 90 degrees tips it onto -y.
        assert_vec_eq(
            thrust_direction(&Vector3D::new(90.0, 0.0, 0.0)),
            Vector3D::new(0.0, -1.0, 0.0),
        );
        // Yaw alone leaves it unchanged.
        assert_vec_eq(
            thrust_direction(&Vector3D::new(0.0, 0.0, 90.0)),
            Vector3D::new(0.0, 0.0, 1.0),
        );
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vector3D::new(3.0, -4.0, 12.0);
        let rotated = body_to_world(&Vector3D::new(12.0, -47.0, 133.0), v);
        assert_abs_diff_eq!(rotated.abs(), v.abs(), epsilon = EPSILON);
    }

    #[test]
    fn test_stabilized_orientation_points_radially_outward() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let position = Vector3D::new(
                rng.gen_range(-5.0e6..5.0e6),
                rng.gen_range(-5.0e6..5.0e6),
                rng.gen_range(-5.0e6..5.0e6),
            );
            let orientation = stabilized_orientation(&position);
            assert_vec_eq(thrust_direction(&orientation), position.norm());
        }
    }

    #[test]
    fn test_stabilized_orientation_for_descent_scenario() {
        let orientation = stabilized_orientation(&Vector3D::new(0.0, -3_396_000.0, 0.0));
        assert_abs_diff_eq!(orientation.x, 90.0, epsilon = EPSILON);
        assert_abs_diff_eq!(orientation.y, 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(orientation.z, 0.0, epsilon = EPSILON);
    }
}
