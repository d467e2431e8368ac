//! Frame driver: rebuild, lay out, let the root react, repeat until stable.

use log::{debug, warn};
use visuals_graphics::Size;

use crate::layout::{LayoutEngine, LayoutTree};
use crate::node::Node;

/// Anything that can describe itself as a node tree.
pub trait View {
    fn body(&self) -> Node;
}

impl<F> View for F
where
    F: Fn() -> Node,
{
    fn body(&self) -> Node {
        self()
    }
}

/// Top of a composition. May keep state derived from a finished layout.
pub trait RootView {
    fn body(&self) -> Node;

    /// Called after every layout pass. Returning `true` requests another
    /// pass because the body would now differ.
    fn on_layout(&mut self, _tree: &LayoutTree) -> bool {
        false
    }
}

pub struct Composition<R> {
    root: R,
    engine: LayoutEngine,
    max_passes: usize,
}

impl<R: RootView> Composition<R> {
    pub const DEFAULT_MAX_PASSES: usize = 4;

    pub fn new(root: R) -> Self {
        Self {
            root,
            engine: LayoutEngine::new(),
            max_passes: Self::DEFAULT_MAX_PASSES,
        }
    }

    /// Upper bound on layout passes per frame; at least one.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut R {
        &mut self.root
    }

    /// Produces the settled layout for `viewport`.
    pub fn compute_frame(&mut self, viewport: Size) -> LayoutTree {
        let mut pass = 1;
        loop {
            let tree = self.engine.compute_layout(&self.root.body(), viewport);
            if !self.root.on_layout(&tree) {
                debug!("frame settled after {pass} layout pass(es)");
                return tree;
            }
            if pass >= self.max_passes {
                warn!(
                    "layout still changing after {} passes; using the latest state",
                    pass
                );
                return self.engine.compute_layout(&self.root.body(), viewport);
            }
            pass += 1;
        }
    }
}

#[cfg(test)]
#[path = "tests/composition_tests.rs"]
mod tests;
