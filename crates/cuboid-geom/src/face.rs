use glam::Quat;

/// One of the six fixed viewing directions of the cuboid rig.
///
/// Each face carries a fixed orientation relative to the rig's local frame
/// and a fixed rule for which two box axes form its image plane and which
/// axis forms its view depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Right,
    Back,
    Left,
    Up,
    Down,
}

/// A box axis: width (X), height (Y), or depth (Z).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// All six faces in capture order (front, right, back, left, up, down).
pub const FACES: [Face; 6] = [
    Face::Front,
    Face::Right,
    Face::Back,
    Face::Left,
    Face::Up,
    Face::Down,
];

impl Face {
    /// Zero-based slot index, also the draw-order depth in shared-target mode.
    pub fn index(self) -> usize {
        match self {
            Face::Front => 0,
            Face::Right => 1,
            Face::Back => 2,
            Face::Left => 3,
            Face::Up => 4,
            Face::Down => 5,
        }
    }

    /// One-based capture index used by the external capture pipeline
    /// (front=1, right=2, back=3, left=4, up=5, down=6).
    pub fn capture_index(self) -> u32 {
        self.index() as u32 + 1
    }

    /// Tag string the capture pipeline uses to discover the face's node.
    pub fn tag(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Right => "right",
            Face::Back => "back",
            Face::Left => "left",
            Face::Up => "up",
            Face::Down => "down",
        }
    }

    /// Orientation of the face's camera relative to the rig's local frame.
    ///
    /// Side faces rotate about the rig's up axis in 90-degree steps; the up
    /// and down faces pitch a quarter turn off the horizon.
    pub fn rotation(self) -> Quat {
        match self {
            Face::Front => Quat::IDENTITY,
            Face::Right => Quat::from_rotation_y(90f32.to_radians()),
            Face::Back => Quat::from_rotation_y(180f32.to_radians()),
            Face::Left => Quat::from_rotation_y(270f32.to_radians()),
            Face::Up => Quat::from_rotation_x(90f32.to_radians()),
            Face::Down => Quat::from_rotation_x(-90f32.to_radians()),
        }
    }

    /// The two box axes forming this face's image plane, as (width, height).
    pub fn aspect_axes(self) -> (Axis, Axis) {
        match self {
            Face::Front | Face::Back => (Axis::X, Axis::Y),
            Face::Left | Face::Right => (Axis::Z, Axis::Y),
            Face::Up | Face::Down => (Axis::X, Axis::Z),
        }
    }

    /// The box axis along which this face looks.
    pub fn depth_axis(self) -> Axis {
        match self {
            Face::Front | Face::Back => Axis::Z,
            Face::Left | Face::Right => Axis::X,
            Face::Up | Face::Down => Axis::Y,
        }
    }

    /// Returns true for the up and down faces, whose frustum depth is
    /// measured from the horizon split plane rather than the box center.
    pub fn is_vertical(self) -> bool {
        matches!(self, Face::Up | Face::Down)
    }
}
