use leptos::{ev, prelude::*};
use crate::core::models::Task;
use crate::features::board::hooks::DragContext;
use crate::features::board::services::{DragKind, PendingDrag};

#[component]
pub fn TaskCard(
    task: Task,
    on_update: Callback<(String, String)>,
    on_remove: Callback<String>,
) -> impl IntoView {
    let drag = use_context::<DragContext>().expect("drag context");

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(task.content.clone());
    // Hover state drives the reveal of the delete button
    let (hovering, set_hovering) = signal(false);
    let textarea_ref: NodeRef<leptos::html::Textarea> = NodeRef::new();

    Effect::new(move |_| {
        if editing.get() {
            if let Some(area) = textarea_ref.get() {
                let _ = area.focus();
            }
        }
    });

    let arm_task_drag = {
        let id = task.id.clone();
        move |ev: ev::PointerEvent| {
            // An open editor suspends the drag sensor so dragging over the
            // text selects it instead of moving the card
            if editing.get_untracked() {
                return;
            }
            drag.pending.set(Some(PendingDrag::new(
                DragKind::Task,
                id.clone(),
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
            )));
        }
    };

    let enter_edit = {
        let content = task.content.clone();
        move |ev: ev::MouseEvent| {
            ev.stop_propagation();
            // The click the browser fires after a drag release lands here;
            // it is not a request to edit
            if !drag.click_allowed() {
                return;
            }
            set_draft.set(content.clone());
            set_editing.set(true);
        }
    };

    let commit = {
        let id = task.id.clone();
        move || {
            if !editing.get_untracked() {
                return;
            }
            set_editing.set(false);
            on_update.run((id.clone(), draft.get_untracked()));
        }
    };

    let id_for_class = task.id.clone();
    let id_for_remove = task.id.clone();
    let content_for_view = task.content.clone();

    view! {
        <div
            class="task-card"
            class:dragging=move || drag.is_dragging_id(&id_for_class)
            data-task-id=task.id.clone()
            on:pointerdown=arm_task_drag
            on:pointerenter=move |_| set_hovering.set(true)
            on:pointerleave=move |_| set_hovering.set(false)
        >
            {move || {
                let enter_edit = enter_edit.clone();
                let commit_blur = commit.clone();
                let commit_key = commit.clone();
                let content = content_for_view.clone();
                if editing.get() {
                    view! {
                        <textarea
                            class="task-editor"
                            rows="3"
                            node_ref=textarea_ref
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:blur=move |_| commit_blur()
                            on:keydown=move |ev: ev::KeyboardEvent| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    commit_key();
                                }
                            }
                        ></textarea>
                    }
                    .into_any()
                } else {
                    view! {
                        <p class="task-content" on:click=enter_edit>{content}</p>
                    }
                    .into_any()
                }
            }}
            {move || {
                let id = id_for_remove.clone();
                (hovering.get() && !editing.get()).then(|| {
                    view! {
                        <button
                            class="task-delete"
                            on:pointerdown=move |ev: ev::PointerEvent| ev.stop_propagation()
                            on:click=move |ev: ev::MouseEvent| {
                                ev.stop_propagation();
                                if !drag.click_allowed() {
                                    return;
                                }
                                on_remove.run(id.clone());
                            }
                        >
                            "🗑"
                        </button>
                    }
                })
            }}
        </div>
    }
}
