use glam::{Vec2, Vec3};

use crate::{Axis, Face, FACES};

/// Width/height/depth of the virtual box the rig captures from inside.
///
/// Invariant: all components must be positive for geometry to be defined.
/// A component <= 0 disables recomputation; callers keep their prior valid
/// projections untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorDimensions {
    /// Box width (X axis).
    pub width: f32,
    /// Box height (Y axis).
    pub height: f32,
    /// Box depth (Z axis).
    pub depth: f32,
}

impl SensorDimensions {
    /// Create sensor dimensions from explicit width/height/depth.
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// The box dimension along a given axis.
    pub fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
            Axis::Z => self.depth,
        }
    }

    /// Returns true if every component is strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.depth > 0.0
    }
}

impl From<Vec3> for SensorDimensions {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Derived projection parameters for one face of the rig.
///
/// Recomputed wholesale from [`SensorDimensions`] and the rig configuration
/// on every change; never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceProjection {
    /// Image-plane size in box units (width, height).
    pub aspect: Vec2,
    /// Distance from the camera to the face, along the face's depth axis.
    pub half_depth: f32,
    /// Full vertical field of view, in degrees.
    pub fov_y_degrees: f32,
    /// Lens shift (horizontal, vertical) as a fraction of the sensor.
    pub lens_shift: Vec2,
    /// Camera offset along the rig's local up axis.
    pub position_offset: f32,
    /// Near clip plane distance.
    pub near_clip: f32,
    /// Far clip plane distance.
    pub far_clip: f32,
}

/// Vertical translation of the up/down split plane relative to mid-height,
/// as `horizon_level` sweeps from -0.5 (split at the bottom) to +0.5
/// (split at the top).
fn vertical_offset(height: f32, horizon_level: f32) -> f32 {
    let t = horizon_level + 0.5;
    -(height * t - height / 2.0)
}

/// Compute the projection parameters for one face.
///
/// Returns `None` when any sensor dimension is non-positive: geometry is
/// undefined and downstream consumers must skip the face, keeping whatever
/// projection was last valid. Pure and deterministic — identical inputs
/// yield bit-identical outputs.
pub fn compute_face_projection(
    face: Face,
    dims: SensorDimensions,
    horizon_level: f32,
    near_clip_factor: f32,
    far_clip_factor: f32,
) -> Option<FaceProjection> {
    if !dims.is_valid() {
        return None;
    }

    let (aw, ah) = face.aspect_axes();
    let aspect = Vec2::new(dims.axis(aw), dims.axis(ah));
    let offset = vertical_offset(dims.height, horizon_level);

    // The up and down faces measure depth from the horizon split plane,
    // not from the box center, so their frustums foreshorten or elongate
    // as the split moves. Side faces keep the nominal half dimension and
    // instead shift their image plane to track the horizon.
    let (half_depth, lens_shift, position_offset) = if face.is_vertical() {
        let nominal = dims.height / 2.0;
        let depth = match face {
            Face::Up => nominal - offset,
            _ => nominal + offset,
        };
        (depth, Vec2::ZERO, 0.0)
    } else {
        (
            dims.axis(face.depth_axis()) / 2.0,
            Vec2::new(0.0, horizon_level),
            offset,
        )
    };

    let fov_y_degrees = 2.0 * ((aspect.y / 2.0) / half_depth).atan().to_degrees();

    Some(FaceProjection {
        aspect,
        half_depth,
        fov_y_degrees,
        lens_shift,
        position_offset,
        near_clip: half_depth * near_clip_factor,
        far_clip: half_depth * far_clip_factor,
    })
}

/// Compute projections for all six faces in capture order.
///
/// Either every entry is `Some` or every entry is `None`; validity depends
/// only on the sensor dimensions, which are shared by all faces.
pub fn compute_all_projections(
    dims: SensorDimensions,
    horizon_level: f32,
    near_clip_factor: f32,
    far_clip_factor: f32,
) -> [Option<FaceProjection>; 6] {
    let mut out = [None; 6];
    for face in FACES {
        out[face.index()] =
            compute_face_projection(face, dims, horizon_level, near_clip_factor, far_clip_factor);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn proj(face: Face, dims: SensorDimensions, horizon: f32) -> FaceProjection {
        compute_face_projection(face, dims, horizon, 0.1, 1000.0).unwrap()
    }

    #[test]
    fn test_front_face_scenario() {
        let dims = SensorDimensions::new(3.0, 2.0, 5.0);
        let p = proj(Face::Front, dims, 0.0);
        assert!((p.half_depth - 2.5).abs() < EPS);
        // 2 * atan(1 / 2.5) in degrees
        let expected_fov = 2.0 * (1.0f32 / 2.5).atan().to_degrees();
        assert!((p.fov_y_degrees - expected_fov).abs() < EPS);
        assert!((p.fov_y_degrees - 43.60).abs() < 0.01);
        assert!((p.near_clip - 0.25).abs() < EPS);
        assert!((p.far_clip - 2500.0).abs() < EPS);
        assert_eq!(p.aspect, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_opposing_pairs_share_fov_at_level_horizon() {
        let dims = SensorDimensions::new(4.0, 2.5, 7.0);
        for (a, b) in [
            (Face::Front, Face::Back),
            (Face::Left, Face::Right),
            (Face::Up, Face::Down),
        ] {
            let pa = proj(a, dims, 0.0);
            let pb = proj(b, dims, 0.0);
            assert!(
                (pa.fov_y_degrees - pb.fov_y_degrees).abs() < EPS,
                "{a:?} vs {b:?}"
            );
        }
    }

    #[test]
    fn test_horizon_split_conserves_height() {
        let dims = SensorDimensions::new(3.0, 2.0, 5.0);
        for horizon in [-0.5, -0.25, 0.0, 0.1, 0.25, 0.5] {
            let up = proj(Face::Up, dims, horizon);
            let down = proj(Face::Down, dims, horizon);
            assert!(
                (up.half_depth + down.half_depth - dims.height).abs() < EPS,
                "horizon {horizon}"
            );
        }
    }

    #[test]
    fn test_raised_horizon_scenario() {
        let dims = SensorDimensions::new(3.0, 2.0, 5.0);
        // verticalOffset = -(2 * 0.75 - 1) = -0.5
        let front = proj(Face::Front, dims, 0.25);
        assert!((front.position_offset - (-0.5)).abs() < EPS);
        assert!((front.lens_shift.y - 0.25).abs() < EPS);

        let up = proj(Face::Up, dims, 0.25);
        let down = proj(Face::Down, dims, 0.25);
        assert!((up.half_depth - 1.5).abs() < EPS);
        assert!((down.half_depth - 0.5).abs() < EPS);
        assert_eq!(up.lens_shift, Vec2::ZERO);
        assert_eq!(down.lens_shift, Vec2::ZERO);
        assert_eq!(up.position_offset, 0.0);
    }

    #[test]
    fn test_side_faces_keep_nominal_half_depth_under_horizon_shift() {
        let dims = SensorDimensions::new(3.0, 2.0, 5.0);
        let level = proj(Face::Left, dims, 0.0);
        let shifted = proj(Face::Left, dims, 0.4);
        assert!((level.half_depth - shifted.half_depth).abs() < EPS);
        assert!((shifted.half_depth - 1.5).abs() < EPS);
    }

    #[test]
    fn test_clip_planes_scale_with_half_depth() {
        let dims = SensorDimensions::new(2.0, 2.0, 8.0);
        let front = compute_face_projection(Face::Front, dims, 0.0, 0.5, 10.0).unwrap();
        let left = compute_face_projection(Face::Left, dims, 0.0, 0.5, 10.0).unwrap();
        assert!((front.near_clip - 2.0).abs() < EPS);
        assert!((front.far_clip - 40.0).abs() < EPS);
        assert!((left.near_clip - 0.5).abs() < EPS);
        assert!((left.far_clip - 10.0).abs() < EPS);
    }

    #[test]
    fn test_cube_gives_ninety_degree_faces() {
        let dims = SensorDimensions::new(2.0, 2.0, 2.0);
        for face in FACES {
            let p = proj(face, dims, 0.0);
            assert!((p.fov_y_degrees - 90.0).abs() < EPS, "{face:?}");
        }
    }

    #[test]
    fn test_degenerate_dimensions_are_undefined() {
        for dims in [
            SensorDimensions::new(0.0, 2.0, 5.0),
            SensorDimensions::new(3.0, -1.0, 5.0),
            SensorDimensions::new(3.0, 2.0, 0.0),
        ] {
            let all = compute_all_projections(dims, 0.0, 0.1, 1000.0);
            assert!(all.iter().all(Option::is_none), "{dims:?}");
        }
    }

    #[test]
    fn test_projection_is_deterministic() {
        let dims = SensorDimensions::new(3.7, 1.9, 4.2);
        for face in FACES {
            let a = compute_face_projection(face, dims, 0.17, 0.3, 500.0);
            let b = compute_face_projection(face, dims, 0.17, 0.3, 500.0);
            assert_eq!(a, b);
        }
    }
}
