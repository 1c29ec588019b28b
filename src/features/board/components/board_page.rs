use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::features::board::components::{BoardColumn, DragPreview};
use crate::features::board::hooks::{use_board, use_drag, BoardHook};
use crate::features::board::services::DragTarget;

/// Resolve the entity under the pointer from the event target. The nearest
/// task marker wins over its containing column; the floating preview is
/// transparent to pointer events, so hits land on the lists beneath it.
fn hovered_target(ev: &ev::PointerEvent) -> Option<DragTarget> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let marker = element
        .closest("[data-task-id], [data-column-id]")
        .ok()
        .flatten()?;
    if let Some(id) = marker.get_attribute("data-task-id") {
        return Some(DragTarget::Task(id));
    }
    marker.get_attribute("data-column-id").map(DragTarget::Column)
}

#[component]
pub fn BoardPage() -> impl IntoView {
    let BoardHook {
        board,
        add_column,
        rename_column,
        remove_column,
        add_task,
        update_task_content,
        remove_task,
    } = use_board();

    // Shared drag wiring; columns and cards pick it up from context
    let drag = use_drag();

    // Pointer position drives the floating drag preview
    let (pointer, set_pointer) = signal((0.0_f64, 0.0_f64));

    // Last target handed to the coordinator. Drag-over is only re-evaluated
    // when the hovered target changes, so a settled hover cannot keep
    // re-shuffling the same two entities.
    let last_target = RwSignal::new(Option::<DragTarget>::None);

    let on_pointer_down = move |ev: ev::PointerEvent| {
        // A fresh gesture; clicks are allowed again
        drag.suppress_click.set(false);

        // Touch and pen implicitly capture the pointer on the pressed
        // element, which would pin every later hit-test to it
        if let Some(element) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            let _ = element.release_pointer_capture(ev.pointer_id());
        }
    };

    let on_pointer_move = move |ev: ev::PointerEvent| {
        let x = f64::from(ev.client_x());
        let y = f64::from(ev.client_y());
        set_pointer.set((x, y));

        // Promote an armed press once it travels past the threshold; short
        // presses fall through to the click handlers instead
        if let Some(pending) = drag.pending.get_untracked() {
            if pending.activated_by(x, y) {
                drag.pending.set(None);
                drag.coordinator
                    .update(|c| c.start(pending.kind, pending.id.clone()));
            }
        }

        if !drag.coordinator.with_untracked(|c| c.is_dragging()) {
            return;
        }

        let Some(target) = hovered_target(&ev) else {
            return;
        };
        if last_target.with_untracked(|last| last.as_ref() == Some(&target)) {
            return;
        }
        last_target.set(Some(target.clone()));

        // Apply against a scratch copy and publish only real changes, so a
        // no-op hover never triggers a re-render
        let mut next = board.get_untracked();
        let changed = drag
            .coordinator
            .with_untracked(|c| c.drag_over(&target, &mut next));
        if changed {
            board.set(next);
        }
    };

    // Release and cancel take the same path: drop the pending press, clear
    // the active item, and forget the last hover target
    let end_drag = move |suppress: bool| {
        drag.pending.set(None);
        last_target.set(None);
        if drag.coordinator.with_untracked(|c| c.is_dragging()) {
            if suppress {
                // The click the browser fires on release must not reach the
                // click-to-edit handlers
                drag.suppress_click.set(true);
            }
            drag.coordinator.update(|c| c.finish());
        }
    };

    view! {
        <div
            class="board-page"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=move |_| end_drag(true)
            on:pointercancel=move |_| end_drag(false)
            on:pointerleave=move |_| end_drag(false)
        >
            <div class="board-columns">
                {move || {
                    board.with(|b| {
                        b.columns()
                            .iter()
                            .cloned()
                            .map(|column| {
                                view! {
                                    <BoardColumn
                                        column=column
                                        board=board
                                        on_rename=rename_column
                                        on_remove=remove_column
                                        on_add_task=add_task
                                        on_update_task=update_task_content
                                        on_remove_task=remove_task
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
                <button
                    class="add-column-btn"
                    on:click=move |_| {
                        if drag.click_allowed() {
                            add_column.run(());
                        }
                    }
                >
                    "+ Add Column"
                </button>
            </div>
            <DragPreview board=board pointer=pointer />
        </div>
    }
}
