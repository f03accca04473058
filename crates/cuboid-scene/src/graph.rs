use std::collections::HashMap;

use glam::{Quat, Vec3};

use crate::CameraParams;

/// Opaque handle to a scene node. Stale after the node is destroyed;
/// handles are never reused within one scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

/// Errors surfaced by a scene-graph collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The referenced node does not exist (destroyed or never created).
    #[error("unknown scene node {0:?}")]
    UnknownNode(NodeId),

    /// The node exists but has no camera attached.
    #[error("no camera attached to node {0:?}")]
    NoCamera(NodeId),
}

/// The slice of a host scene graph the cuboid rig depends on.
///
/// Implementations must serialize access externally; the rig assumes a
/// single-threaded host update loop.
pub trait SceneGraph {
    /// Create a named, tagged child node under `parent` with the given
    /// local rotation, marked non-editable so operators cannot move rig
    /// faces by hand.
    fn create_child(
        &mut self,
        parent: NodeId,
        name: &str,
        tag: &str,
        rotation: Quat,
    ) -> Result<NodeId, SceneError>;

    /// Destroy a node and anything attached to it. Destroying an already
    /// destroyed node is a no-op returning `false`.
    fn destroy_node(&mut self, node: NodeId) -> bool;

    /// Returns true if the node currently exists.
    fn node_exists(&self, node: NodeId) -> bool;

    /// Set a node's local position.
    fn set_local_position(&mut self, node: NodeId, position: Vec3) -> Result<(), SceneError>;

    /// Attach a camera-like render source to a node with default
    /// parameters. Attaching twice replaces the previous camera.
    fn attach_camera(&mut self, node: NodeId) -> Result<(), SceneError>;

    /// Mutable access to a node's camera parameters.
    fn camera_mut(&mut self, node: NodeId) -> Result<&mut CameraParams, SceneError>;

    /// Read access to a node's camera parameters.
    fn camera(&self, node: NodeId) -> Result<&CameraParams, SceneError>;

    /// Returns true if the node is a linked template (prefab) instance,
    /// in which case structural changes under it must be refused.
    fn is_template_instance(&self, node: NodeId) -> bool;

    /// Find a node by its tag, if any.
    fn find_by_tag(&self, tag: &str) -> Option<NodeId>;
}

struct Node {
    name: String,
    tag: String,
    parent: Option<NodeId>,
    rotation: Quat,
    position: Vec3,
    locked: bool,
    template_instance: bool,
    camera: Option<CameraParams>,
}

/// In-memory [`SceneGraph`] used by tests and the demo binary.
pub struct MemoryScene {
    nodes: HashMap<NodeId, Node>,
    root: NodeId,
    next_id: u64,
}

impl MemoryScene {
    /// Create a scene containing a single root node named `root_name`.
    pub fn new(root_name: &str) -> Self {
        let root = NodeId(0);
        let mut nodes = HashMap::new();
        let _ = nodes.insert(
            root,
            Node {
                name: root_name.to_string(),
                tag: String::new(),
                parent: None,
                rotation: Quat::IDENTITY,
                position: Vec3::ZERO,
                locked: false,
                template_instance: false,
                camera: None,
            },
        );
        Self {
            nodes,
            root,
            next_id: 1,
        }
    }

    /// The root node created at construction.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Mark a node as a linked template instance (test/demo hook; in a
    /// real host this flag comes from the editor).
    pub fn set_template_instance(&mut self, node: NodeId, value: bool) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.template_instance = value;
        }
    }

    /// Total number of live nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// A node's display name.
    pub fn node_name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).map(|n| n.name.as_str())
    }

    /// A node's local rotation.
    pub fn node_rotation(&self, node: NodeId) -> Option<Quat> {
        self.nodes.get(&node).map(|n| n.rotation)
    }

    /// A node's local position.
    pub fn node_position(&self, node: NodeId) -> Option<Vec3> {
        self.nodes.get(&node).map(|n| n.position)
    }

    /// Whether a node is locked against operator edits.
    pub fn node_locked(&self, node: NodeId) -> Option<bool> {
        self.nodes.get(&node).map(|n| n.locked)
    }
}

impl SceneGraph for MemoryScene {
    fn create_child(
        &mut self,
        parent: NodeId,
        name: &str,
        tag: &str,
        rotation: Quat,
    ) -> Result<NodeId, SceneError> {
        if !self.nodes.contains_key(&parent) {
            return Err(SceneError::UnknownNode(parent));
        }
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let _ = self.nodes.insert(
            id,
            Node {
                name: name.to_string(),
                tag: tag.to_string(),
                parent: Some(parent),
                rotation,
                position: Vec3::ZERO,
                locked: true,
                template_instance: false,
                camera: None,
            },
        );
        Ok(id)
    }

    fn destroy_node(&mut self, node: NodeId) -> bool {
        if self.nodes.remove(&node).is_none() {
            return false;
        }
        // Cascade to children so a destroyed subtree leaves nothing behind.
        let orphans: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|(_, n)| n.parent == Some(node))
            .map(|(id, _)| *id)
            .collect();
        for child in orphans {
            let _ = self.destroy_node(child);
        }
        true
    }

    fn node_exists(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn set_local_position(&mut self, node: NodeId, position: Vec3) -> Result<(), SceneError> {
        let n = self
            .nodes
            .get_mut(&node)
            .ok_or(SceneError::UnknownNode(node))?;
        n.position = position;
        Ok(())
    }

    fn attach_camera(&mut self, node: NodeId) -> Result<(), SceneError> {
        let n = self
            .nodes
            .get_mut(&node)
            .ok_or(SceneError::UnknownNode(node))?;
        n.camera = Some(CameraParams::default());
        Ok(())
    }

    fn camera_mut(&mut self, node: NodeId) -> Result<&mut CameraParams, SceneError> {
        let n = self
            .nodes
            .get_mut(&node)
            .ok_or(SceneError::UnknownNode(node))?;
        n.camera.as_mut().ok_or(SceneError::NoCamera(node))
    }

    fn camera(&self, node: NodeId) -> Result<&CameraParams, SceneError> {
        let n = self.nodes.get(&node).ok_or(SceneError::UnknownNode(node))?;
        n.camera.as_ref().ok_or(SceneError::NoCamera(node))
    }

    fn is_template_instance(&self, node: NodeId) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|n| n.template_instance)
    }

    fn find_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, n)| n.tag == tag)
            .map(|(id, _)| *id)
    }
}
