use leptos::prelude::*;
use crate::core::store::BoardStore;

/// Board state plus the mutation callbacks components wire to gestures.
pub struct BoardHook {
    pub board: RwSignal<BoardStore>,
    pub add_column: Callback<()>,
    pub rename_column: Callback<(String, String)>,
    pub remove_column: Callback<String>,
    pub add_task: Callback<String>,
    pub update_task_content: Callback<(String, String)>,
    pub remove_task: Callback<String>,
}

pub fn use_board() -> BoardHook {
    let board = RwSignal::new(BoardStore::new());

    let add_column = Callback::new(move |_: ()| {
        board.update(|b| b.add_column());
    });

    let rename_column = Callback::new(move |(id, title): (String, String)| {
        let mut found = false;
        board.update(|b| found = b.rename_column(&id, title));
        if !found {
            web_sys::console::warn_1(&format!("rename_column: no column with id {}", id).into());
        }
    });

    let remove_column = Callback::new(move |id: String| {
        let mut found = false;
        board.update(|b| found = b.remove_column(&id));
        if !found {
            web_sys::console::warn_1(&format!("remove_column: no column with id {}", id).into());
        }
    });

    let add_task = Callback::new(move |column_id: String| {
        board.update(|b| b.add_task(&column_id));
    });

    let update_task_content = Callback::new(move |(id, content): (String, String)| {
        let mut found = false;
        board.update(|b| found = b.update_task_content(&id, content));
        if !found {
            web_sys::console::warn_1(&format!("update_task_content: no task with id {}", id).into());
        }
    });

    let remove_task = Callback::new(move |id: String| {
        let mut found = false;
        board.update(|b| found = b.remove_task(&id));
        if !found {
            web_sys::console::warn_1(&format!("remove_task: no task with id {}", id).into());
        }
    });

    BoardHook {
        board,
        add_column,
        rename_column,
        remove_column,
        add_task,
        update_task_content,
        remove_task,
    }
}
