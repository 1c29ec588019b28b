use leptos::{ev, prelude::*};
use crate::core::models::Column;
use crate::core::store::BoardStore;
use crate::features::board::components::TaskCard;
use crate::features::board::hooks::DragContext;
use crate::features::board::services::{DragKind, PendingDrag};

#[component]
pub fn BoardColumn(
    column: Column,
    board: RwSignal<BoardStore>,
    on_rename: Callback<(String, String)>,
    on_remove: Callback<String>,
    on_add_task: Callback<String>,
    on_update_task: Callback<(String, String)>,
    on_remove_task: Callback<String>,
) -> impl IntoView {
    let drag = use_context::<DragContext>().expect("drag context");

    // Inline title editing; the input replaces the heading until commit
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(column.title.clone());
    let input_ref: NodeRef<leptos::html::Input> = NodeRef::new();

    // Focus the title input as soon as edit mode opens
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let enter_edit = {
        let title = column.title.clone();
        move |ev: ev::MouseEvent| {
            ev.stop_propagation();
            if !drag.click_allowed() {
                return;
            }
            set_draft.set(title.clone());
            set_editing.set(true);
        }
    };

    // Commits on blur and on Enter; the editing guard keeps the blur that
    // follows an Enter commit from renaming twice
    let commit_title = {
        let id = column.id.clone();
        move || {
            if !editing.get_untracked() {
                return;
            }
            set_editing.set(false);
            on_rename.run((id.clone(), draft.get_untracked()));
        }
    };

    // Column drags start from the header. While the title is being edited
    // the sensor stays unarmed, so text selection works normally
    let arm_column_drag = {
        let id = column.id.clone();
        move |ev: ev::PointerEvent| {
            if editing.get_untracked() {
                return;
            }
            drag.pending.set(Some(PendingDrag::new(
                DragKind::Column,
                id.clone(),
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
            )));
        }
    };

    let id_for_class = column.id.clone();
    let id_for_count = column.id.clone();
    let id_for_tasks = column.id.clone();
    let id_for_remove = column.id.clone();
    let id_for_add = column.id.clone();
    let title_for_view = column.title.clone();

    view! {
        <div
            class="board-column"
            class:dragging=move || drag.is_dragging_id(&id_for_class)
            data-column-id=column.id.clone()
        >
            <div class="column-header" on:pointerdown=arm_column_drag>
                <span class="task-count">
                    {move || board.with(|b| b.tasks_in(&id_for_count).len())}
                </span>
                {move || {
                    let enter_edit = enter_edit.clone();
                    let commit_blur = commit_title.clone();
                    let commit_key = commit_title.clone();
                    let title = title_for_view.clone();
                    if editing.get() {
                        view! {
                            <input
                                type="text"
                                class="column-title-input"
                                node_ref=input_ref
                                prop:value=move || draft.get()
                                on:input=move |ev| set_draft.set(event_target_value(&ev))
                                on:blur=move |_| commit_blur()
                                on:keydown=move |ev: ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        commit_key();
                                    }
                                }
                            />
                        }
                        .into_any()
                    } else {
                        view! {
                            <h3 class="column-title" on:click=enter_edit>{title}</h3>
                        }
                        .into_any()
                    }
                }}
                <button
                    class="column-delete"
                    on:pointerdown=move |ev: ev::PointerEvent| ev.stop_propagation()
                    on:click=move |ev: ev::MouseEvent| {
                        ev.stop_propagation();
                        if !drag.click_allowed() {
                            return;
                        }
                        on_remove.run(id_for_remove.clone());
                    }
                >
                    "🗑"
                </button>
            </div>
            <div class="column-content">
                {move || {
                    board.with(|b| {
                        b.tasks_in(&id_for_tasks)
                            .into_iter()
                            .map(|task| {
                                view! {
                                    <TaskCard
                                        task=task
                                        on_update=on_update_task
                                        on_remove=on_remove_task
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>
            <button
                class="add-task-btn"
                on:click=move |_| {
                    if drag.click_allowed() {
                        on_add_task.run(id_for_add.clone());
                    }
                }
            >
                "+ Add Task"
            </button>
        </div>
    }
}
