//! Deep-link scrolling driven by an explicit content-ready signal.
//!
//! Each navigation gets a new generation. Rendering reports content-ready for
//! the generation it rendered; reports for an older generation are dropped,
//! so a slow view can never scroll a newer one.

use crate::render::RenderedPage;

/// Upward offset applied so the target is not hidden under the page top.
pub const SCROLL_OFFSET_PX: u32 = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollTo {
    pub id: String,
    pub offset: u32,
    pub smooth: bool,
}

#[derive(Debug, Default)]
pub struct DeepLink {
    generation: u64,
    pending: Option<String>,
}

impl DeepLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a navigation, cancelling whatever target was pending.
    pub fn navigate(&mut self, fragment: Option<&str>) -> u64 {
        self.generation += 1;
        self.pending = fragment.filter(|f| !f.is_empty()).map(str::to_string);
        self.generation
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Consumes the pending target if `generation` is current and the page has it.
    pub fn content_ready(&mut self, generation: u64, page: &RenderedPage) -> Option<ScrollTo> {
        if generation != self.generation {
            return None;
        }
        let id = self.pending.take()?;
        if !page.has_anchor(&id) {
            return None;
        }
        Some(ScrollTo {
            id,
            offset: SCROLL_OFFSET_PX,
            smooth: true,
        })
    }
}
