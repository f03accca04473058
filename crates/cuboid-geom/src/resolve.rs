use crate::SensorDimensions;

/// Requested output resolution along the three box axes. A value of 0 means
/// "unset, infer from the other axes using the box's aspect ratios."
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputResolutionRequest {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl OutputResolutionRequest {
    /// Request with the given per-axis pixel counts (0 = infer).
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Request a vertical resolution and infer the other two axes.
    pub fn from_height(y: u32) -> Self {
        Self { x: 0, y, z: 0 }
    }
}

/// A fully resolved per-axis pixel resolution. All components are positive
/// and aspect-consistent with the sensor dimensions to within rounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedResolution {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

/// Derive `this` axis's pixel count from another axis's requested count and
/// the ratio of the two sensor dimensions.
fn derive(other_pixels: u32, this_sensor: f32, other_sensor: f32) -> u32 {
    let px = (other_pixels as f32 * this_sensor / other_sensor).round() as u32;
    px.max(1)
}

/// Complete a partially specified resolution triple from the box's aspect
/// ratios.
///
/// Each unset (zero) axis is derived from the first non-zero requested axis
/// in a fixed scan order: x from y else z, z from x else y, y from x else z.
/// Returns `None` when every requested axis is zero or the sensor
/// dimensions are degenerate — the caller must supply its own fallback and
/// keep it distinguishable from a derived result.
pub fn resolve_output_dimensions(
    dims: SensorDimensions,
    request: OutputResolutionRequest,
) -> Option<ResolvedResolution> {
    if !dims.is_valid() {
        return None;
    }
    if request.x == 0 && request.y == 0 && request.z == 0 {
        return None;
    }

    let x = if request.x != 0 {
        request.x
    } else if request.y != 0 {
        derive(request.y, dims.width, dims.height)
    } else {
        derive(request.z, dims.width, dims.depth)
    };

    let z = if request.z != 0 {
        request.z
    } else if request.x != 0 {
        derive(request.x, dims.depth, dims.width)
    } else {
        derive(request.y, dims.depth, dims.height)
    };

    let y = if request.y != 0 {
        request.y
    } else if request.x != 0 {
        derive(request.x, dims.height, dims.width)
    } else {
        derive(request.z, dims.height, dims.depth)
    };

    Some(ResolvedResolution { x, y, z })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_only_request_derives_both_axes() {
        let dims = SensorDimensions::new(16.0, 9.0, 5.0);
        let resolved =
            resolve_output_dimensions(dims, OutputResolutionRequest::from_height(1080)).unwrap();
        assert_eq!(resolved.x, 1920);
        assert_eq!(resolved.y, 1080);
        assert_eq!(resolved.z, 600);
    }

    #[test]
    fn test_fully_specified_request_passes_through() {
        let dims = SensorDimensions::new(16.0, 9.0, 5.0);
        let request = OutputResolutionRequest::new(123, 456, 789);
        let resolved = resolve_output_dimensions(dims, request).unwrap();
        assert_eq!(
            resolved,
            ResolvedResolution {
                x: 123,
                y: 456,
                z: 789
            }
        );
    }

    #[test]
    fn test_all_zero_request_is_undefined() {
        let dims = SensorDimensions::new(16.0, 9.0, 5.0);
        assert!(resolve_output_dimensions(dims, OutputResolutionRequest::default()).is_none());
    }

    #[test]
    fn test_width_only_request() {
        let dims = SensorDimensions::new(4.0, 2.0, 8.0);
        let resolved =
            resolve_output_dimensions(dims, OutputResolutionRequest::new(400, 0, 0)).unwrap();
        assert_eq!(resolved.y, 200);
        assert_eq!(resolved.z, 800);
    }

    #[test]
    fn test_depth_only_request() {
        let dims = SensorDimensions::new(4.0, 2.0, 8.0);
        let resolved =
            resolve_output_dimensions(dims, OutputResolutionRequest::new(0, 0, 800)).unwrap();
        assert_eq!(resolved.x, 400);
        assert_eq!(resolved.y, 200);
    }

    #[test]
    fn test_result_is_aspect_consistent() {
        let dims = SensorDimensions::new(3.0, 2.0, 5.0);
        let resolved =
            resolve_output_dimensions(dims, OutputResolutionRequest::from_height(720)).unwrap();
        let px_per_unit = resolved.y as f32 / dims.height;
        assert!((resolved.x as f32 - dims.width * px_per_unit).abs() <= 0.5);
        assert!((resolved.z as f32 - dims.depth * px_per_unit).abs() <= 0.5);
    }

    #[test]
    fn test_degenerate_dimensions_are_undefined() {
        let dims = SensorDimensions::new(0.0, 9.0, 5.0);
        assert!(
            resolve_output_dimensions(dims, OutputResolutionRequest::from_height(1080)).is_none()
        );
    }

    #[test]
    fn test_tiny_ratio_never_produces_zero() {
        let dims = SensorDimensions::new(1000.0, 1.0, 1000.0);
        let resolved =
            resolve_output_dimensions(dims, OutputResolutionRequest::new(0, 0, 100)).unwrap();
        assert!(resolved.y >= 1);
    }
}
