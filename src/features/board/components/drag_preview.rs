use leptos::prelude::*;
use crate::core::store::BoardStore;
use crate::features::board::hooks::DragContext;
use crate::features::board::services::DragState;

/// Floating copy of the dragged item, pinned to the pointer. It ignores
/// pointer events entirely (see the stylesheet) so hit-testing reaches the
/// lists underneath, where the dimmed original acts as the placeholder.
#[component]
pub fn DragPreview(
    board: RwSignal<BoardStore>,
    pointer: ReadSignal<(f64, f64)>,
) -> impl IntoView {
    let drag = use_context::<DragContext>().expect("drag context");

    move || {
        let state = drag.coordinator.with(|c| c.state().clone());
        let (x, y) = pointer.get();
        let left = format!("{}px", x + 8.0);
        let top = format!("{}px", y + 8.0);
        match state {
            DragState::Idle => view! {}.into_any(),
            DragState::DraggingColumn(id) => {
                // The column can vanish mid-drag; render nothing until the
                // coordinator notices
                let Some(title) = board.with(|b| b.column(&id).map(|c| c.title.clone())) else {
                    return view! {}.into_any();
                };
                let count = board.with(|b| b.tasks_in(&id).len());
                view! {
                    <div class="drag-preview column-preview" style:left=left style:top=top>
                        <span class="task-count">{count}</span>
                        <span class="column-title">{title}</span>
                    </div>
                }
                .into_any()
            }
            DragState::DraggingTask(id) => {
                let Some(content) = board.with(|b| b.task(&id).map(|t| t.content.clone())) else {
                    return view! {}.into_any();
                };
                view! {
                    <div class="drag-preview task-preview" style:left=left style:top=top>
                        {content}
                    </div>
                }
                .into_any()
            }
        }
    }
}
