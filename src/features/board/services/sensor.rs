use super::drag::DragKind;

/// Pointer travel, in CSS pixels, required before a pointer-down gesture is
/// promoted to a drag. Anything shorter stays a click, so click-to-edit
/// keeps working on draggable items.
pub const DRAG_ACTIVATION_DISTANCE: f64 = 3.0;

/// A pointer-down that has not yet travelled far enough to count as a drag.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDrag {
    pub kind: DragKind,
    pub id: String,
    origin_x: f64,
    origin_y: f64,
}

impl PendingDrag {
    pub fn new(kind: DragKind, id: String, x: f64, y: f64) -> Self {
        Self {
            kind,
            id,
            origin_x: x,
            origin_y: y,
        }
    }

    /// True once the pointer has moved past the activation threshold.
    pub fn activated_by(&self, x: f64, y: f64) -> bool {
        let dx = x - self.origin_x;
        let dy = y - self.origin_y;
        (dx * dx + dy * dy).sqrt() >= DRAG_ACTIVATION_DISTANCE
    }
}
