//! Readiness gate in front of a map renderer

use siteplan_core::{PlanError, PlanResult};

use crate::MapRenderer;

/// Owns the renderer and drops instructions while the map is not ready
#[derive(Debug)]
pub struct RenderSurface<R> {
    renderer: R,
}

impl<R: MapRenderer> RenderSurface<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn is_ready(&self) -> bool {
        self.renderer.is_ready()
    }

    /// Run `f` against the renderer if the surface is ready.
    ///
    /// Nothing is queued: a dropped instruction is re-issued by the next
    /// state change that redraws the same layer.
    pub fn draw(&mut self, f: impl FnOnce(&mut R)) -> PlanResult<()> {
        if !self.renderer.is_ready() {
            tracing::trace!("Render instruction dropped: map surface not ready");
            return Err(PlanError::RenderingUnavailable);
        }
        f(&mut self.renderer);
        Ok(())
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
