//! The container view a HUD is displayed in.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::color::Color;
use crate::geometry::{EdgeInsets, Rect};

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a view attached to a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

impl ViewId {
    pub fn next() -> Self {
        ViewId(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Capabilities a HUD needs from the view that hosts it.
pub trait HostSurface {
    fn add_child(&mut self, child: ViewId);

    fn remove_child(&mut self, child: ViewId);

    /// True while a non-idle status is displayed or animating
    fn is_active(&self) -> bool;

    /// Full bounds in the host's own coordinate space
    fn bounds(&self) -> Rect;

    /// Part of `bounds` not covered by system chrome
    fn safe_area(&self) -> Rect;

    /// Current dim-overlay tint
    fn background(&self) -> Color;

    fn set_background(&mut self, color: Color);
}

pub type HostRef = Rc<RefCell<dyn HostSurface>>;

/// A full-screen overlay host that keeps its state in memory.
///
/// It records every background change, so it also works as a test double for
/// a real view hierarchy.
#[derive(Debug, Clone)]
pub struct OverlayHost {
    bounds: Rect,
    safe_area_insets: EdgeInsets,
    background: Color,
    active: bool,
    children: Vec<ViewId>,
    background_history: Vec<Color>,
}

impl OverlayHost {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            safe_area_insets: EdgeInsets::ZERO,
            background: Color::TRANSPARENT,
            active: false,
            children: Vec::new(),
            background_history: Vec::new(),
        }
    }

    pub fn safe_area_insets(mut self, insets: EdgeInsets) -> Self {
        self.safe_area_insets = insets;
        self
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn set_safe_area_insets(&mut self, insets: EdgeInsets) {
        self.safe_area_insets = insets;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn children(&self) -> &[ViewId] {
        &self.children
    }

    pub fn background_history(&self) -> &[Color] {
        &self.background_history
    }

    pub fn into_shared(self) -> Rc<RefCell<OverlayHost>> {
        Rc::new(RefCell::new(self))
    }
}

impl HostSurface for OverlayHost {
    fn add_child(&mut self, child: ViewId) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }

    fn remove_child(&mut self, child: ViewId) {
        self.children.retain(|c| *c != child);
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn safe_area(&self) -> Rect {
        self.bounds.inset_by(self.safe_area_insets)
    }

    fn background(&self) -> Color {
        self.background
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
        self.background_history.push(color);
    }
}
