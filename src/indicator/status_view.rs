use std::rc::Rc;

use super::{IndicatorContent, IndicatorProvider, IndicatorSurface};
use crate::color::Color;
use crate::geometry::{Rect, Size};
use crate::host::{HostSurface, ViewId};
use crate::status::Status;
use crate::transform::AffineTransform;

/// Space between the panel edge and the indicator or label
const CONTENT_INSET: f32 = 16.0;
const LABEL_LINE_HEIGHT: f32 = 20.0;
const LABEL_SPACING: f32 = 8.0;

/// Panel behind the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundStyle {
    #[default]
    Dark,
    Light,
}

impl BackgroundStyle {
    pub fn panel_color(&self) -> Color {
        match self {
            BackgroundStyle::Dark => Color::rgba(0.1, 0.1, 0.1, 0.9),
            BackgroundStyle::Light => Color::rgba(0.95, 0.95, 0.95, 0.9),
        }
    }

    pub fn foreground_color(&self) -> Color {
        match self {
            BackgroundStyle::Dark => Color::WHITE,
            BackgroundStyle::Light => Color::rgb(0.1, 0.1, 0.1),
        }
    }
}

/// Default HUD panel: an indicator drawn by an [`IndicatorProvider`] above
/// an optional message label.
pub struct StatusView {
    id: ViewId,
    style: BackgroundStyle,
    indicator_size: Size,
    provider: Rc<dyn IndicatorProvider>,
    alpha: f32,
    transform: AffineTransform,
    frame: Option<Rect>,
    content: Option<IndicatorContent>,
    message: Option<String>,
    staged: Option<IndicatorContent>,
    /// Every content switch, oldest first
    content_history: Vec<IndicatorContent>,
}

impl StatusView {
    pub fn new(
        style: BackgroundStyle,
        indicator_size: Size,
        provider: Rc<dyn IndicatorProvider>,
    ) -> Self {
        Self {
            id: ViewId::next(),
            style,
            indicator_size,
            provider,
            alpha: 1.0,
            transform: AffineTransform::IDENTITY,
            frame: None,
            content: None,
            message: None,
            staged: None,
            content_history: Vec::new(),
        }
    }

    pub fn style(&self) -> BackgroundStyle {
        self.style
    }

    pub fn content(&self) -> Option<&IndicatorContent> {
        self.content.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn content_history(&self) -> &[IndicatorContent] {
        &self.content_history
    }

    /// Content rendered ahead of the next update, if any
    pub fn staged_content(&self) -> Option<&IndicatorContent> {
        self.staged.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.frame.is_some()
    }
}

impl IndicatorSurface for StatusView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn intrinsic_size(&self) -> Size {
        let mut size = Size::new(
            self.indicator_size.width + CONTENT_INSET * 2.0,
            self.indicator_size.height + CONTENT_INSET * 2.0,
        );
        if self.message.is_some() {
            size.height += LABEL_SPACING + LABEL_LINE_HEIGHT;
        }
        size
    }

    fn prepare_status(&mut self, _host: &mut dyn HostSurface, _from: &Status, to: &Status) {
        // Hiding keeps the current content while it fades out.
        if to.is_idle() {
            self.staged = None;
            return;
        }
        let next = self.provider.content_for(to);
        let needs_new_drawing = match (&self.content, &next) {
            (Some(current), Some(next)) => !current.same_kind(next),
            (None, Some(_)) => true,
            _ => false,
        };
        self.staged = if needs_new_drawing { next } else { None };
    }

    fn update_status(&mut self, _host: &mut dyn HostSurface, _from: &Status, to: &Status) {
        if to.is_idle() {
            return;
        }
        let content = self
            .staged
            .take()
            .or_else(|| self.provider.content_for(to));
        if let Some(content) = &content {
            self.content_history.push(content.clone());
        }
        self.content = content;
        self.message = to.message().map(str::to_owned);
    }

    fn alpha(&self) -> f32 {
        self.alpha
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    fn transform(&self) -> AffineTransform {
        self.transform
    }

    fn set_transform(&mut self, transform: AffineTransform) {
        self.transform = transform;
    }

    fn attach(&mut self, host: &mut dyn HostSurface, frame: Rect) {
        host.add_child(self.id);
        self.frame = Some(frame);
    }

    fn detach(&mut self, host: &mut dyn HostSurface) {
        host.remove_child(self.id);
        self.frame = None;
    }

    fn set_frame(&mut self, frame: Rect) {
        if self.frame.is_some() {
            self.frame = Some(frame);
        }
    }

    fn frame(&self) -> Option<Rect> {
        self.frame
    }
}
