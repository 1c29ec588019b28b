pub mod drag;
pub mod sensor;

pub use drag::{DragCoordinator, DragKind, DragState, DragTarget};
pub use sensor::{PendingDrag, DRAG_ACTIVATION_DISTANCE};
