//! Leptos components for the Taskdash web UI

use leptos::*;
use leptos_router::*;

use crate::types::{
    authors_with_posts, filter_posts, short_date, FeedData, FilterPayload, Post, StatusPayload,
    Task, TaskBoard, TaskPayload, TaskStats, User,
};

// =============================================================================
// Layout Components
// =============================================================================

/// Main layout component with sidebar navigation
#[component]
pub fn Layout(
    /// Page title shown in header
    title: String,
    /// Active section for sidebar highlighting
    #[prop(optional, into)]
    active_section: String,
    /// Page content
    children: Children,
) -> impl IntoView {
    let active = if active_section.is_empty() {
        None
    } else {
        Some(active_section)
    };
    view! {
        <aside class="sidebar">
            <Sidebar active_section=active/>
        </aside>

        <div class="main-wrapper">
            <header>
                <h1>{title}</h1>
            </header>
            <main>{children()}</main>
        </div>
    }
}

/// Sidebar navigation component
#[component]
fn Sidebar(active_section: Option<String>) -> impl IntoView {
    let is_active = move |section: &str| {
        active_section
            .as_ref()
            .map(|s| s.as_str() == section)
            .unwrap_or(false)
    };

    view! {
        <a href="/" class="sidebar-logo">"Taskdash"</a>

        <div class="sidebar-section">
            <div class="sidebar-section-title">"Overview"</div>
            <SidebarLink href="/" icon="\u{25A3}" label="Dashboard" active=is_active("dashboard")/>
        </div>

        <div class="sidebar-section">
            <div class="sidebar-section-title">"Work"</div>
            <SidebarLink href="/tasks" icon="\u{2610}" label="Tasks" active=is_active("tasks")/>
        </div>

        <div class="sidebar-section">
            <div class="sidebar-section-title">"Content"</div>
            <SidebarLink href="/posts" icon="\u{2709}" label="Posts" active=is_active("posts")/>
        </div>
    }
}

/// Helper component for a single sidebar link
#[component]
fn SidebarLink(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
    #[prop(optional)] active: bool,
) -> impl IntoView {
    let class_name = if active {
        "sidebar-link active"
    } else {
        "sidebar-link"
    };

    view! {
        <A href=href class=class_name>
            <span class="sidebar-icon">{icon}</span>
            " "
            {label}
        </A>
    }
}

// =============================================================================
// Shared Components
// =============================================================================

/// Status badge component
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = format!("badge badge-status {}", status);
    let label = status.replace('-', " ");
    view! { <span class=class>{label}</span> }
}

/// Priority badge component
#[component]
pub fn PriorityBadge(#[prop(into)] priority: String) -> impl IntoView {
    let class = format!("badge badge-priority {}", priority);
    view! { <span class=class>{priority}</span> }
}

/// Empty state component
#[component]
pub fn EmptyState(message: &'static str) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>{message}</p>
        </div>
    }
}

/// Loading state component
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            "Loading"
        </div>
    }
}

/// Combined fetch-failure state with a full-reload retry
#[component]
pub fn ErrorState(#[prop(into)] message: String) -> impl IntoView {
    let reload = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class="error-state">
            <p class="error">{message}</p>
            <button class="button" on:click=reload>"Try Again"</button>
        </div>
    }
}

/// Stats card component
#[component]
pub fn StatCard(value: usize, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message("Are you sure you want to delete this task?").ok())
        .unwrap_or(false)
}

// =============================================================================
// Dashboard Page
// =============================================================================

/// Dashboard/index page
#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = create_resource(|| (), |_| async move { fetch_stats().await });

    view! {
        <Layout title="Dashboard".to_string() active_section="dashboard".to_string()>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    stats
                        .get()
                        .map(|stats| {
                            let stats = stats.unwrap_or_default();
                            view! {
                                <div class="stats">
                                    <StatCard value=stats.total label="Total Tasks"/>
                                    <StatCard value=stats.pending label="Pending"/>
                                    <StatCard value=stats.in_progress label="In Progress"/>
                                    <StatCard value=stats.completed label="Completed"/>
                                </div>

                                <h2>"Quick Links"</h2>
                                <div class="card">
                                    <p>
                                        <a href="/tasks">"Manage Tasks"</a>
                                        " - Create, update, and track your tasks"
                                    </p>
                                    <p>
                                        <a href="/posts">"Browse Posts"</a>
                                        " - Explore posts from the demo feed"
                                    </p>
                                </div>
                            }
                        })
                }}

            </Suspense>
        </Layout>
    }
}

// =============================================================================
// Tasks Page
// =============================================================================

/// Task management page: stats, filter tabs, table, and the add/edit modal
#[component]
pub fn TasksPage() -> impl IntoView {
    let board = create_resource(|| (), |_| async move { fetch_board().await });

    let (show_modal, set_show_modal) = create_signal(false);
    let (editing, set_editing) = create_signal(None::<Task>);

    // Modal form fields
    let (form_title, set_form_title) = create_signal(String::new());
    let (form_description, set_form_description) = create_signal(String::new());
    let (form_status, set_form_status) = create_signal(String::from("pending"));
    let (form_priority, set_form_priority) = create_signal(String::from("medium"));
    let (form_due, set_form_due) = create_signal(String::new());

    let reset_form = move || {
        set_form_title.set(String::new());
        set_form_description.set(String::new());
        set_form_status.set(String::from("pending"));
        set_form_priority.set(String::from("medium"));
        set_form_due.set(String::new());
    };

    let open_add = move || {
        reset_form();
        set_editing.set(None);
        set_show_modal.set(true);
    };

    let open_edit = move |task: Task| {
        set_form_title.set(task.title.clone());
        set_form_description.set(task.description.clone());
        set_form_status.set(task.status.clone());
        set_form_priority.set(task.priority.clone());
        set_form_due.set(task.due_date.clone());
        set_editing.set(Some(task));
        set_show_modal.set(true);
    };

    let close_modal = move || {
        set_show_modal.set(false);
        set_editing.set(None);
        reset_form();
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let payload = TaskPayload {
            title: form_title.get(),
            description: form_description.get(),
            status: form_status.get(),
            priority: form_priority.get(),
            due_date: form_due.get(),
        };
        let editing_task = editing.get();
        spawn_local(async move {
            let result = match &editing_task {
                Some(task) => update_task(&task.id, &payload).await,
                None => create_task(&payload).await,
            };
            if let Err(e) = result {
                logging::error!("Failed to save task: {}", e);
            }
            board.refetch();
        });
        close_modal();
    };

    view! {
        <Layout title="Task Management".to_string() active_section="tasks".to_string()>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    board
                        .get()
                        .map(|result| {
                            match result {
                                Ok(data) => {
                                    let stats = data.stats;
                                    view! {
                                        <div class="stats">
                                            <StatCard value=stats.total label="Total Tasks"/>
                                            <StatCard value=stats.pending label="Pending"/>
                                            <StatCard value=stats.in_progress label="In Progress"/>
                                            <StatCard value=stats.completed label="Completed"/>
                                        </div>

                                        <div class="card">
                                            <div class="card-header">
                                                <div>
                                                    <h3>"Task Management"</h3>
                                                    <p class="muted">"Manage and track your tasks"</p>
                                                </div>
                                                <div class="card-header-actions">
                                                    <FilterTabs active=data.filter.clone() board=board/>
                                                    <button class="button primary" on:click=move |_| open_add()>
                                                        "+ Add Task"
                                                    </button>
                                                </div>
                                            </div>

                                            <TasksTable tasks=data.tasks board=board on_edit=open_edit/>
                                        </div>
                                    }
                                        .into_view()
                                }
                                Err(e) => {
                                    view! { <ErrorState message=format!("Error loading tasks: {}", e)/> }
                                        .into_view()
                                }
                            }
                        })
                }}

            </Suspense>

            {move || {
                show_modal
                    .get()
                    .then(|| {
                        view! {
                            <div class="modal-overlay">
                                <div class="modal">
                                    <h3>
                                        {move || {
                                            if editing.get().is_some() { "Edit Task" } else { "Add New Task" }
                                        }}

                                    </h3>

                                    <form on:submit=handle_submit>
                                        <div class="form-group">
                                            <label for="task-title">"Title"</label>
                                            <input
                                                id="task-title"
                                                type="text"
                                                required
                                                prop:value=move || form_title.get()
                                                on:input=move |ev| set_form_title.set(event_target_value(&ev))
                                            />
                                        </div>

                                        <div class="form-group">
                                            <label for="task-description">"Description"</label>
                                            <textarea
                                                id="task-description"
                                                rows="3"
                                                required
                                                prop:value=move || form_description.get()
                                                on:input=move |ev| set_form_description.set(event_target_value(&ev))
                                            ></textarea>
                                        </div>

                                        <div class="form-row">
                                            <div class="form-group">
                                                <label for="task-status">"Status"</label>
                                                <select
                                                    id="task-status"
                                                    prop:value=move || form_status.get()
                                                    on:change=move |ev| set_form_status.set(event_target_value(&ev))
                                                >
                                                    <option value="pending">"Pending"</option>
                                                    <option value="in-progress">"In Progress"</option>
                                                    <option value="completed">"Completed"</option>
                                                </select>
                                            </div>

                                            <div class="form-group">
                                                <label for="task-priority">"Priority"</label>
                                                <select
                                                    id="task-priority"
                                                    prop:value=move || form_priority.get()
                                                    on:change=move |ev| set_form_priority.set(event_target_value(&ev))
                                                >
                                                    <option value="low">"Low"</option>
                                                    <option value="medium">"Medium"</option>
                                                    <option value="high">"High"</option>
                                                </select>
                                            </div>
                                        </div>

                                        <div class="form-group">
                                            <label for="task-due">"Due Date"</label>
                                            <input
                                                id="task-due"
                                                type="date"
                                                required
                                                prop:value=move || form_due.get()
                                                on:input=move |ev| set_form_due.set(event_target_value(&ev))
                                            />
                                        </div>

                                        <div class="form-actions">
                                            <button type="button" class="button" on:click=move |_| close_modal()>
                                                "Cancel"
                                            </button>
                                            <button type="submit" class="button primary">
                                                {move || {
                                                    if editing.get().is_some() { "Update Task" } else { "Create Task" }
                                                }}

                                            </button>
                                        </div>
                                    </form>
                                </div>
                            </div>
                        }
                    })
            }}

        </Layout>
    }
}

/// Status filter tabs; clicks dispatch the filter change and refetch
#[component]
fn FilterTabs(
    active: String,
    board: Resource<(), Result<TaskBoard, String>>,
) -> impl IntoView {
    const FILTERS: [(&str, &str); 4] = [
        ("all", "All"),
        ("pending", "Pending"),
        ("in-progress", "In Progress"),
        ("completed", "Completed"),
    ];

    view! {
        <div class="filter-tabs">
            {FILTERS
                .into_iter()
                .map(|(value, label)| {
                    let class = if active == value { "filter-tab active" } else { "filter-tab" };
                    view! {
                        <button
                            class=class
                            on:click=move |_| {
                                spawn_local(async move {
                                    if let Err(e) = set_board_filter(value).await {
                                        logging::error!("Failed to set filter: {}", e);
                                    }
                                    board.refetch();
                                });
                            }
                        >

                            {label}
                        </button>
                    }
                })
                .collect_view()}

        </div>
    }
}

/// Tasks table component
#[component]
fn TasksTable(
    tasks: Vec<Task>,
    board: Resource<(), Result<TaskBoard, String>>,
    #[prop(into)] on_edit: Callback<Task>,
) -> impl IntoView {
    if tasks.is_empty() {
        return view! { <EmptyState message="No tasks found. Try a different filter, or add one."/> }
            .into_view();
    }

    view! {
        <table>
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Status"</th>
                    <th>"Priority"</th>
                    <th>"Due"</th>
                    <th>"Created"</th>
                    <th>"Updated"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {tasks
                    .into_iter()
                    .map(|task| {
                        let status_id = task.id.clone();
                        let delete_id = task.id.clone();
                        let edit_task = task.clone();
                        view! {
                            <tr>
                                <td>
                                    <div class="task-title">{task.title.clone()}</div>
                                    <div class="muted">{task.description.clone()}</div>
                                </td>
                                <td>
                                    <StatusBadge status=task.status.clone()/>
                                </td>
                                <td>
                                    <PriorityBadge priority=task.priority.clone()/>
                                </td>
                                <td>{task.due_date.clone()}</td>
                                <td>{short_date(&task.created_at).to_string()}</td>
                                <td>{short_date(&task.updated_at).to_string()}</td>
                                <td>
                                    <div class="row-actions">
                                        <select
                                            prop:value=task.status.clone()
                                            on:change=move |ev| {
                                                let status = event_target_value(&ev);
                                                let id = status_id.clone();
                                                spawn_local(async move {
                                                    if let Err(e) = change_status(&id, &status).await {
                                                        logging::error!("Failed to update status: {}", e);
                                                    }
                                                    board.refetch();
                                                });
                                            }
                                        >

                                            <option value="pending">"Pending"</option>
                                            <option value="in-progress">"In Progress"</option>
                                            <option value="completed">"Completed"</option>
                                        </select>
                                        <button
                                            class="button small"
                                            on:click=move |_| on_edit.call(edit_task.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="button small danger"
                                            on:click=move |_| {
                                                if !confirm_delete() {
                                                    return;
                                                }
                                                let id = delete_id.clone();
                                                spawn_local(async move {
                                                    if let Err(e) = delete_task(&id).await {
                                                        logging::error!("Failed to delete task: {}", e);
                                                    }
                                                    board.refetch();
                                                });
                                            }
                                        >

                                            "Delete"
                                        </button>
                                    </div>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}

            </tbody>
        </table>
    }
    .into_view()
}

// =============================================================================
// Posts Page
// =============================================================================

/// Posts page: two jointly awaited fetches, then client-side filtering
#[component]
pub fn PostsPage() -> impl IntoView {
    let feed = create_resource(|| (), |_| async move { fetch_feed().await });

    view! {
        <Layout title="Posts".to_string() active_section="posts".to_string()>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    feed.get()
                        .map(|result| {
                            match result {
                                Ok(data) => view! { <PostsContent data=data/> }.into_view(),
                                Err(e) => {
                                    view! { <ErrorState message=format!("Failed to load posts: {}", e)/> }
                                        .into_view()
                                }
                            }
                        })
                }}

            </Suspense>
        </Layout>
    }
}

/// Posts content with search and author filtering derived client-side
#[component]
fn PostsContent(data: FeedData) -> impl IntoView {
    let (search, set_search) = create_signal(String::new());
    let (author, set_author) = create_signal(None::<u64>);

    let total = data.posts.len();
    let authors = authors_with_posts(&data.users, &data.posts);
    let author_count = authors.len();

    let users = data.users;
    let posts = data.posts;
    let filtered = create_memo(move |_| filter_posts(&posts, &search.get(), author.get()));

    view! {
        <div class="stats">
            <StatCard value=total label="Total Posts"/>
            <StatCard value=author_count label="Authors"/>
            <div class="stat-card">
                <div class="stat-value">{move || filtered.get().len()}</div>
                <div class="stat-label">"Filtered Results"</div>
            </div>
        </div>

        <div class="card">
            <div class="card-header">
                <div>
                    <h3>"Posts"</h3>
                    <p class="muted">"Explore posts from the demo feed"</p>
                </div>
                <div class="card-header-actions">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search posts..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <select
                        prop:value=move || author.get().map(|id| id.to_string()).unwrap_or_default()
                        on:change=move |ev| {
                            set_author.set(event_target_value(&ev).parse::<u64>().ok());
                        }
                    >

                        <option value="">"All Authors"</option>
                        {authors
                            .into_iter()
                            .map(|user| {
                                let value = user.id.to_string();
                                view! { <option value=value>{user.name}</option> }
                            })
                            .collect_view()}

                    </select>
                </div>
            </div>

            {move || {
                let visible = filtered.get();
                if visible.is_empty() {
                    view! { <EmptyState message="No posts match the current search and filters."/> }
                        .into_view()
                } else {
                    let users = users.clone();
                    view! {
                        <div class="card-grid">
                            {visible
                                .into_iter()
                                .map(|post| {
                                    let author = users.iter().find(|u| u.id == post.user_id).cloned();
                                    view! { <PostCard post=post author=author/> }
                                })
                                .collect_view()}

                        </div>
                    }
                        .into_view()
                }
            }}

            {move || {
                let count = filtered.get().len();
                (count > 0)
                    .then(|| {
                        view! {
                            <div class="card-footer">
                                <p class="muted">"Showing " {count} " of " {total} " posts"</p>
                            </div>
                        }
                    })
            }}

        </div>
    }
}

/// A single post card with author attribution
#[component]
fn PostCard(post: Post, author: Option<User>) -> impl IntoView {
    let (author_name, author_handle) = match author {
        Some(user) => (user.name, user.username),
        None => ("Unknown Author".to_string(), "unknown".to_string()),
    };

    view! {
        <div class="post-card">
            <div class="post-author">
                <span class="post-id">{post.id}</span>
                <div>
                    <div class="author-name">{author_name}</div>
                    <div class="muted">"@" {author_handle}</div>
                </div>
            </div>
            <h4>{post.title}</h4>
            <p class="post-body">{post.body}</p>
            <div class="card-footer">
                <span class="muted">"Post #" {post.id}</span>
            </div>
        </div>
    }
}

// =============================================================================
// API Fetching Functions
// =============================================================================

#[cfg(feature = "csr")]
mod http {
    use gloo_net::http::Request;
    use serde::de::DeserializeOwned;
    use serde::Serialize;

    pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
        let resp = Request::get(url).send().await.map_err(|e| e.to_string())?;

        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }

        resp.json().await.map_err(|e| e.to_string())
    }

    pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<(), String> {
        let resp = Request::post(url)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }

        Ok(())
    }

    pub async fn put_json<B: Serialize>(url: &str, body: &B) -> Result<(), String> {
        let resp = Request::put(url)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }

        Ok(())
    }

    pub async fn delete(url: &str) -> Result<(), String> {
        let resp = Request::delete(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }

        Ok(())
    }
}

#[cfg(not(feature = "csr"))]
mod http {
    use serde::de::DeserializeOwned;
    use serde::Serialize;

    pub async fn get_json<T: DeserializeOwned>(_url: &str) -> Result<T, String> {
        Err("client-side rendering is disabled".to_string())
    }

    pub async fn post_json<B: Serialize>(_url: &str, _body: &B) -> Result<(), String> {
        Err("client-side rendering is disabled".to_string())
    }

    pub async fn put_json<B: Serialize>(_url: &str, _body: &B) -> Result<(), String> {
        Err("client-side rendering is disabled".to_string())
    }

    pub async fn delete(_url: &str) -> Result<(), String> {
        Err("client-side rendering is disabled".to_string())
    }
}

async fn fetch_stats() -> Result<TaskStats, String> {
    http::get_json("/api/stats").await
}

async fn fetch_board() -> Result<TaskBoard, String> {
    http::get_json("/api/tasks").await
}

/// Fetch posts and users concurrently; failure of either is overall failure
async fn fetch_feed() -> Result<FeedData, String> {
    let (posts, users) = futures::join!(
        http::get_json::<Vec<Post>>("/api/posts"),
        http::get_json::<Vec<User>>("/api/users"),
    );
    Ok(FeedData {
        posts: posts?,
        users: users?,
    })
}

async fn create_task(payload: &TaskPayload) -> Result<(), String> {
    http::post_json("/api/tasks", payload).await
}

async fn update_task(id: &str, payload: &TaskPayload) -> Result<(), String> {
    http::put_json(&format!("/api/tasks/{}", id), payload).await
}

async fn change_status(id: &str, status: &str) -> Result<(), String> {
    let payload = StatusPayload {
        status: status.to_string(),
    };
    http::put_json(&format!("/api/tasks/{}", id), &payload).await
}

async fn delete_task(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/tasks/{}", id)).await
}

async fn set_board_filter(filter: &str) -> Result<(), String> {
    let payload = FilterPayload {
        filter: filter.to_string(),
    };
    http::post_json("/api/filter", &payload).await
}
