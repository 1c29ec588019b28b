use leptos::prelude::*;
use crate::features::board::BoardPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <BoardPage />
        </main>
    }
}
