use cuboid_scene::SceneError;

/// Errors surfaced by rig orchestration.
#[derive(Debug, thiserror::Error)]
pub enum RigError {
    /// Geometry was applied before the rig was initialized.
    #[error("rig is not initialized")]
    NotInitialized,

    /// A structural change was requested while the rig's root node is a
    /// linked template instance. The rig is left unchanged; operators see
    /// this as a warning, not a fatal fault.
    #[error("reinitialize refused: rig root is a linked template instance")]
    ReinitializeRefused,

    /// The scene-graph collaborator rejected an operation.
    #[error(transparent)]
    Scene(#[from] SceneError),
}
