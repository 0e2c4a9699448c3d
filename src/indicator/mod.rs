//! The visible status indicator and the content it renders.

mod status_view;

pub use status_view::{BackgroundStyle, StatusView};

use crate::geometry::{Rect, Size};
use crate::host::{HostSurface, ViewId};
use crate::status::Status;
use crate::transform::AffineTransform;

/// What the indicator draws for a status.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorContent {
    /// Indeterminate activity
    Spinner,
    /// Determinate progress ring, `0.0..=1.0`
    Ring { progress: f32 },
    Checkmark,
    Cross,
    /// Named application symbol
    Symbol(String),
}

impl IndicatorContent {
    /// Whether switching from `self` to `other` needs a new drawing rather
    /// than an update of the existing one.
    pub fn same_kind(&self, other: &IndicatorContent) -> bool {
        match (self, other) {
            (IndicatorContent::Symbol(a), IndicatorContent::Symbol(b)) => a == b,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

/// Renders indicator content appropriate to a status.
pub trait IndicatorProvider {
    /// `None` means nothing is drawn (idle)
    fn content_for(&self, status: &Status) -> Option<IndicatorContent>;
}

/// Default content: spinner, progress ring, checkmark, cross, or a named symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct HudIndicatorProvider;

impl IndicatorProvider for HudIndicatorProvider {
    fn content_for(&self, status: &Status) -> Option<IndicatorContent> {
        match status {
            Status::Idle => None,
            Status::Loading { .. } => Some(IndicatorContent::Spinner),
            Status::Progress { value, .. } => {
                // The variant can be built without `Status::progress`
                let progress = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
                Some(IndicatorContent::Ring { progress })
            }
            Status::Success { .. } => Some(IndicatorContent::Checkmark),
            Status::Failure { .. } => Some(IndicatorContent::Cross),
            Status::Custom { name, .. } => Some(IndicatorContent::Symbol(name.clone())),
        }
    }
}

/// The view a responder animates between statuses.
///
/// The responder owns the surface exclusively and calls the hooks in this
/// order for every transition: `prepare_status` once before the run starts,
/// then `update_status` inside the animated body.
pub trait IndicatorSurface {
    fn id(&self) -> ViewId;

    /// Natural size before the layout's minimum is applied.
    fn intrinsic_size(&self) -> Size;

    fn prepare_status(&mut self, host: &mut dyn HostSurface, from: &Status, to: &Status);

    fn update_status(&mut self, host: &mut dyn HostSurface, from: &Status, to: &Status);

    fn alpha(&self) -> f32;

    fn set_alpha(&mut self, alpha: f32);

    fn transform(&self) -> AffineTransform;

    fn set_transform(&mut self, transform: AffineTransform);

    /// Add to `host` at `frame`.
    fn attach(&mut self, host: &mut dyn HostSurface, frame: Rect);

    fn detach(&mut self, host: &mut dyn HostSurface);

    /// Move or resize while attached.
    fn set_frame(&mut self, frame: Rect);

    /// Frame inside the host, `None` while detached.
    fn frame(&self) -> Option<Rect>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider_mapping() {
        let p = HudIndicatorProvider;
        assert_eq!(p.content_for(&Status::Idle), None);
        assert_eq!(
            p.content_for(&Status::loading(None)),
            Some(IndicatorContent::Spinner)
        );
        assert_eq!(
            p.content_for(&Status::progress(None, 0.4)),
            Some(IndicatorContent::Ring { progress: 0.4 })
        );
        assert_eq!(
            p.content_for(&Status::custom("upload", None)),
            Some(IndicatorContent::Symbol("upload".to_string()))
        );
    }

    #[test]
    fn test_ring_progress_is_clamped() {
        let p = HudIndicatorProvider;
        let over = Status::Progress {
            message: None,
            value: 1.7,
        };
        let nan = Status::Progress {
            message: None,
            value: f32::NAN,
        };
        assert_eq!(
            p.content_for(&over),
            Some(IndicatorContent::Ring { progress: 1.0 })
        );
        assert_eq!(
            p.content_for(&nan),
            Some(IndicatorContent::Ring { progress: 0.0 })
        );
    }

    #[test]
    fn test_same_kind() {
        let a = IndicatorContent::Ring { progress: 0.1 };
        let b = IndicatorContent::Ring { progress: 0.9 };
        assert!(a.same_kind(&b));
        assert!(!a.same_kind(&IndicatorContent::Spinner));
        assert!(!IndicatorContent::Symbol("a".into()).same_kind(&IndicatorContent::Symbol("b".into())));
    }
}
