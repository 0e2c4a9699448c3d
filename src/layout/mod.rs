//! Placement of the status indicator inside its host.
//!
//! A [`HudLayout`] is pure data. The responder resolves it into a frame once,
//! when the indicator surface is created; replacing the layout only affects
//! the next surface.

mod frame;

use thiserror::Error;

use crate::geometry::{EdgeInsets, Point, Size};

/// Vertical anchor of the indicator within the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Centered in the host bounds; `offset.y` moves it down
    #[default]
    Center,
    /// Top edge pinned to the safe area top; `offset.y` moves it down
    Top,
    /// Bottom edge pinned to the safe area bottom; `offset.y` moves it up
    Bottom,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("indicator size must be finite and non-negative, got {width}x{height}")]
    InvalidIndicatorSize { width: f32, height: f32 },
    #[error("offset must be finite, got ({x}, {y})")]
    InvalidOffset { x: f32, y: f32 },
    #[error("padding must be finite and non-negative, got {0:?}")]
    InvalidPadding(EdgeInsets),
}

/// Size and anchoring of the HUD indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudLayout {
    /// Minimum size of the indicator surface
    pub indicator_size: Size,
    pub position: Position,
    pub offset: Point,
    /// Minimum distance from each safe area edge
    pub padding: EdgeInsets,
}

impl HudLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indicator_size(mut self, size: Size) -> Self {
        self.indicator_size = size;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    /// Check that every dimension is usable for frame resolution.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let Size { width, height } = self.indicator_size;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(LayoutError::InvalidIndicatorSize { width, height });
        }

        let Point { x, y } = self.offset;
        if !x.is_finite() || !y.is_finite() {
            return Err(LayoutError::InvalidOffset { x, y });
        }

        if self
            .padding
            .values()
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(LayoutError::InvalidPadding(self.padding));
        }

        Ok(())
    }
}

impl Default for HudLayout {
    fn default() -> Self {
        Self {
            indicator_size: Size::new(60.0, 60.0),
            position: Position::Center,
            offset: Point::ZERO,
            padding: EdgeInsets::all(50.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_valid() {
        assert_eq!(HudLayout::default().validate(), Ok(()));
    }

    #[test]
    fn test_builder_chain() {
        let layout = HudLayout::new()
            .position(Position::Bottom)
            .offset(Point::new(0.0, 24.0))
            .indicator_size(Size::new(80.0, 80.0));
        assert_eq!(layout.position, Position::Bottom);
        assert_eq!(layout.offset.y, 24.0);
        assert_eq!(layout.padding, EdgeInsets::all(50.0));
    }

    #[test]
    fn test_validate_rejects_negative_size() {
        let layout = HudLayout::new().indicator_size(Size::new(-1.0, 10.0));
        assert_eq!(
            layout.validate(),
            Err(LayoutError::InvalidIndicatorSize {
                width: -1.0,
                height: 10.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan_offset() {
        let layout = HudLayout::new().offset(Point::new(f32::NAN, 0.0));
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::InvalidOffset { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_infinite_padding() {
        let mut padding = EdgeInsets::all(8.0);
        padding.left = f32::INFINITY;
        let layout = HudLayout::new().padding(padding);
        assert_eq!(layout.validate(), Err(LayoutError::InvalidPadding(padding)));
    }
}
