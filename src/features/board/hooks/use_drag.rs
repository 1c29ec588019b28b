use leptos::prelude::*;
use crate::features::board::services::{DragCoordinator, PendingDrag};

/// Drag wiring shared by the page, its columns, and their cards. Provided
/// as context so a card can arm the sensor without threading props through
/// every layer in between.
#[derive(Clone, Copy)]
pub struct DragContext {
    /// Armed on pointer-down; promoted to a real drag once the pointer
    /// travels past the activation threshold.
    pub pending: RwSignal<Option<PendingDrag>>,
    pub coordinator: RwSignal<DragCoordinator>,
    /// Set between a drag's release and the next pointer-down, while the
    /// browser's synthetic click must not reach click-to-edit handlers.
    pub suppress_click: RwSignal<bool>,
}

impl DragContext {
    /// True while `id` is the item being dragged. Its in-list rendering is
    /// the placeholder the preview floats above.
    pub fn is_dragging_id(&self, id: &str) -> bool {
        self.coordinator.with(|c| c.active_id() == Some(id))
    }

    /// False while the synthetic click that follows a drag release is still
    /// expected. Click handlers that mutate or open editors check this so
    /// letting go of a drag never counts as a click on whatever was under
    /// the pointer.
    pub fn click_allowed(&self) -> bool {
        !self.suppress_click.get_untracked()
    }
}

/// Creates the drag signals and shares them through context.
pub fn use_drag() -> DragContext {
    let context = DragContext {
        pending: RwSignal::new(None),
        coordinator: RwSignal::new(DragCoordinator::new()),
        suppress_click: RwSignal::new(false),
    };
    provide_context(context);
    context
}
