//! Interruption-safe status HUD transitions.
//!
//! A [`StatusSession`](session::StatusSession) owns the current
//! [`Status`](status::Status) of an overlay host and hands every change to a
//! [`HudResponder`](responder::HudResponder), which creates, positions,
//! animates and tears down the indicator surface. A new status arriving
//! mid-animation force-stops the running transition before the next one
//! starts, and layout changes made while the HUD is visible wait until it is
//! hidden.
//!
//! ```ignore
//! let scheduler = FrameScheduler::new();
//! let responder = HudResponder::new(
//!     &HudConfig::default(),
//!     Rc::new(CubicAnimatorProvider::new(&scheduler)),
//! );
//! let host = OverlayHost::new(Rect::new(0.0, 0.0, 390.0, 844.0)).into_shared();
//! let mut session = StatusSession::new(host, Rc::new(responder));
//!
//! session.show_loading(Some("Uploading".to_string()));
//! // once per frame:
//! scheduler.tick(Duration::from_millis(16));
//! ```

pub mod animation;
pub mod color;
pub mod geometry;
pub mod host;
pub mod indicator;
pub mod layout;
pub mod responder;
pub mod session;
pub mod status;
pub mod transform;

use color::Color;
use indicator::BackgroundStyle;
use layout::HudLayout;

pub mod prelude {
    pub use crate::animation::{
        AnimatingState, AnimationPosition, Animator, AnimatorProvider, CubicAnimatorProvider,
        FrameScheduler, SpringAnimatorProvider, SpringConfig, TimingFunction,
    };
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::host::{HostRef, HostSurface, OverlayHost};
    pub use crate::indicator::{
        BackgroundStyle, HudIndicatorProvider, IndicatorContent, IndicatorProvider,
        IndicatorSurface, StatusView,
    };
    pub use crate::layout::{HudLayout, LayoutError, Position};
    pub use crate::responder::{HudResponder, StatusResponder};
    pub use crate::session::StatusSession;
    pub use crate::status::Status;
    pub use crate::transform::AffineTransform;
    pub use crate::HudConfig;
}

/// Appearance and placement of a HUD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudConfig {
    /// Host tint while a status is shown
    pub dim_color: Color,
    /// Scale of the indicator before it appears and after it hides
    pub hidden_scale: f32,
    pub background_style: BackgroundStyle,
    pub layout: HudLayout,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            dim_color: Color::BLACK.with_alpha(0.3),
            hidden_scale: 0.2,
            background_style: BackgroundStyle::Dark,
            layout: HudLayout::default(),
        }
    }
}

impl HudConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dim_color(mut self, color: Color) -> Self {
        self.dim_color = color;
        self
    }

    pub fn hidden_scale(mut self, scale: f32) -> Self {
        self.hidden_scale = scale;
        self
    }

    pub fn background_style(mut self, style: BackgroundStyle) -> Self {
        self.background_style = style;
        self
    }

    pub fn layout(mut self, layout: HudLayout) -> Self {
        self.layout = layout;
        self
    }
}
