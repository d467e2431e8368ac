//! Common rendering contracts shared between renderer backends.

use visuals_ui::{Environment, LayoutTree};

pub use visuals_graphics::Brush;

/// Retained draw list produced from one settled layout.
pub trait RenderScene {
    fn clear(&mut self);

    /// Number of recorded draw operations.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Abstraction implemented by concrete renderer backends.
pub trait Renderer {
    type Scene: RenderScene;
    type Error;

    fn scene(&self) -> &Self::Scene;
    fn scene_mut(&mut self) -> &mut Self::Scene;

    /// Replaces the scene with the contents of `layout_tree`, resolving
    /// styles and anchors against `environment`.
    fn rebuild_scene(
        &mut self,
        layout_tree: &LayoutTree,
        environment: &Environment,
    ) -> Result<(), Self::Error>;
}
