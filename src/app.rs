use leptos::*;

use crate::pages::Dashboard;
use crate::program::{PROGRAM_SUBTITLE, PROGRAM_TITLE};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <header>
                <h1 class="text-gradient">{PROGRAM_TITLE}</h1>
                <p><strong>{PROGRAM_SUBTITLE}</strong></p>
            </header>
            <Dashboard />
            <footer>
                <p>"Progress is stored in this browser only."</p>
            </footer>
        </div>
    }
}
