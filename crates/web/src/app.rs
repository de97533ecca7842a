use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Link rel="stylesheet" href="/style/main.css"/>
        <Title text="Taskdash"/>

        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/tasks" view=TasksPage/>
                <Route path="/posts" view=PostsPage/>
            </Routes>
        </Router>
    }
}
