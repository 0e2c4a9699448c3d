use super::{HudLayout, Position};
use crate::geometry::{Rect, Size};

impl HudLayout {
    /// Resolve the indicator frame inside a host.
    ///
    /// `bounds` is the host's full rect and `safe_area` the part not covered
    /// by system chrome. The frame is centered horizontally (plus
    /// `offset.x`), anchored vertically per [`Position`], and then pushed back
    /// inside `safe_area` shrunk by `padding`. When the frame cannot fit, the
    /// left and top edges win.
    pub fn resolve_frame(&self, bounds: Rect, safe_area: Rect, content: Size) -> Rect {
        let size = content.max(self.indicator_size);
        let center = bounds.center();

        let x = center.x + self.offset.x - size.width / 2.0;
        let y = match self.position {
            Position::Center => center.y + self.offset.y - size.height / 2.0,
            Position::Top => safe_area.min_y() + self.offset.y,
            Position::Bottom => safe_area.max_y() - self.offset.y - size.height,
        };

        let allowed = safe_area.inset_by(self.padding);
        Rect::new(
            clamp_edge(x, size.width, allowed.min_x(), allowed.max_x()),
            clamp_edge(y, size.height, allowed.min_y(), allowed.max_y()),
            size.width,
            size.height,
        )
    }
}

fn clamp_edge(origin: f32, extent: f32, min: f32, max: f32) -> f32 {
    origin.min(max - extent).max(min)
}
