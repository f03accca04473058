use glam::Vec2;

/// Policy for reconciling the physical sensor's aspect ratio with the
/// output surface's aspect ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateFit {
    /// Stretch the sensor to fill the output (host default).
    #[default]
    Fill,
    /// No stretching or cropping; sensor and output aspect must already
    /// match. The rig always uses this so each face exactly fills its
    /// rectangle.
    None,
}

/// Where a camera's output goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputRouting {
    /// All faces composite onto one shared surface; `draw_order` decides
    /// stacking (the rig uses the face index).
    Shared { draw_order: u32 },
    /// Each face renders to its own dedicated surface.
    Dedicated { surface_index: u32 },
}

impl Default for OutputRouting {
    fn default() -> Self {
        Self::Shared { draw_order: 0 }
    }
}

/// Settable projection state of a camera-like render source.
///
/// Mirrors a host engine's physical-camera surface: sensor size in world
/// units, lens shift as a sensor fraction, explicit clip planes, and output
/// routing. The rig overwrites every field on each geometry application.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraParams {
    /// Physical-sensor mode toggle.
    pub physical: bool,
    /// Sensor width and height in world units.
    pub sensor_size: Vec2,
    /// Sensor/output aspect reconciliation policy.
    pub gate_fit: GateFit,
    /// Full vertical field of view, in degrees.
    pub fov_y_degrees: f32,
    /// Lens shift (horizontal, vertical) as a fraction of the sensor.
    pub lens_shift: Vec2,
    /// Near clip plane distance.
    pub near_clip: f32,
    /// Far clip plane distance.
    pub far_clip: f32,
    /// Output surface and draw-order routing.
    pub routing: OutputRouting,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            physical: false,
            sensor_size: Vec2::new(36.0, 24.0),
            gate_fit: GateFit::Fill,
            fov_y_degrees: 60.0,
            lens_shift: Vec2::ZERO,
            near_clip: 0.3,
            far_clip: 1000.0,
            routing: OutputRouting::default(),
        }
    }
}
