use cuboid_geom::{Axis, Face, ResolvedResolution, SensorDimensions, FACES};

/// One planned capture output: which face, at what pixel size, and where it
/// sits in the fixed external ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureTarget {
    /// The face being captured.
    pub face: Face,
    /// Tag the capture pipeline uses to discover the face's camera.
    pub tag: &'static str,
    /// Output width in pixels.
    pub pixel_width: u32,
    /// Output height in pixels.
    pub pixel_height: u32,
    /// One-based capture index (front=1 .. down=6) for deterministic
    /// external ordering.
    pub face_index: u32,
}

fn axis_pixels(resolution: ResolvedResolution, axis: Axis) -> u32 {
    match axis {
        Axis::X => resolution.x,
        Axis::Y => resolution.y,
        Axis::Z => resolution.z,
    }
}

/// Build one capture target per enabled face.
///
/// `mask` is indexed in capture order (front, right, back, left, up, down).
/// Each face's pixel size applies its aspect-axis mapping to the resolved
/// resolution triple, so adjacent faces share edge pixel densities. The
/// sensor dimensions are accepted for interface symmetry with the rest of
/// the pipeline but the aspect mapping itself is purely axis-based.
pub fn plan_capture_targets(
    mask: [bool; 6],
    _dims: SensorDimensions,
    resolution: ResolvedResolution,
) -> Vec<CaptureTarget> {
    FACES
        .iter()
        .filter(|face| mask[face.index()])
        .map(|&face| {
            let (aw, ah) = face.aspect_axes();
            CaptureTarget {
                face,
                tag: face.tag(),
                pixel_width: axis_pixels(resolution, aw),
                pixel_height: axis_pixels(resolution, ah),
                face_index: face.capture_index(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [bool; 6] = [true; 6];

    fn resolution() -> ResolvedResolution {
        ResolvedResolution {
            x: 1920,
            y: 1080,
            z: 600,
        }
    }

    fn dims() -> SensorDimensions {
        SensorDimensions::new(16.0, 9.0, 5.0)
    }

    #[test]
    fn test_plan_covers_all_faces_in_capture_order() {
        let targets = plan_capture_targets(ALL, dims(), resolution());
        assert_eq!(targets.len(), 6);
        let indices: Vec<u32> = targets.iter().map(|t| t.face_index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_pixel_sizes_follow_aspect_axes() {
        let targets = plan_capture_targets(ALL, dims(), resolution());
        let by_tag = |tag: &str| targets.iter().find(|t| t.tag == tag).unwrap();

        let front = by_tag("front");
        assert_eq!((front.pixel_width, front.pixel_height), (1920, 1080));

        let left = by_tag("left");
        assert_eq!((left.pixel_width, left.pixel_height), (600, 1080));

        let up = by_tag("up");
        assert_eq!((up.pixel_width, up.pixel_height), (1920, 600));
    }

    #[test]
    fn test_mask_filters_faces() {
        // Only front and down enabled
        let mask = [true, false, false, false, false, true];
        let targets = plan_capture_targets(mask, dims(), resolution());
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].tag, "front");
        assert_eq!(targets[1].tag, "down");
        assert_eq!(targets[1].face_index, 6);
    }

    #[test]
    fn test_empty_mask_plans_nothing() {
        let targets = plan_capture_targets([false; 6], dims(), resolution());
        assert!(targets.is_empty());
    }
}
