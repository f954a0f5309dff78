use crate::components::{Pagination, TaskForm, TaskList};
use crate::routes::{Navigate, Route, RouterNavigator};
use crate::services::{Services, use_services};
use crate::stores::{SessionState, SessionStore, TaskState, TaskStore};
use shared::models::{NewTask, TaskChanges, TaskStatus};
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::{Dispatch, use_store};

/// Start one task operation; it writes into the shared state as it completes.
fn spawn_task_action<F, Fut>(services: &Services, dispatch: &Dispatch<TaskState>, action: F)
where
    F: FnOnce(TaskStore) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    spawn_local(action(TaskStore::new(services, dispatch.clone())));
}

/// Protected task board.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let services = use_services();
    let (tasks, task_dispatch) = use_store::<TaskState>();
    let (session, session_dispatch) = use_store::<SessionState>();
    let navigator = use_navigator();
    let creating = use_state(|| false);

    {
        let services = services.clone();
        let task_dispatch = task_dispatch.clone();
        let session_dispatch = session_dispatch.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            spawn_task_action(&services, &task_dispatch, |store| async move {
                store.fetch_todos(1).await;
            });
            if let Some(navigator) = navigator {
                let store = SessionStore::new(
                    &services,
                    Rc::new(RouterNavigator(navigator)),
                    session_dispatch,
                );
                spawn_local(async move {
                    if let Err(err) = store.load_user().await {
                        log::debug!("dashboard user refresh failed: {err}");
                    }
                });
            }
            || ()
        });
    }

    let on_create = {
        let services = services.clone();
        let dispatch = task_dispatch.clone();
        let creating = creating.clone();
        Callback::from(move |new_task: NewTask| {
            creating.set(true);
            let creating = creating.clone();
            spawn_task_action(&services, &dispatch, |store| async move {
                store.add_todo(new_task).await;
                creating.set(false);
            });
        })
    };

    let on_status_change = {
        let services = services.clone();
        let dispatch = task_dispatch.clone();
        Callback::from(move |(id, status): (u64, TaskStatus)| {
            spawn_task_action(&services, &dispatch, move |store| async move {
                store.update_todo(id, TaskChanges::status(status)).await;
            });
        })
    };

    let on_delete = {
        let services = services.clone();
        let dispatch = task_dispatch.clone();
        Callback::from(move |id: u64| {
            spawn_task_action(&services, &dispatch, move |store| async move {
                store.delete_todo(id).await;
            });
        })
    };

    let on_page = {
        let services = services.clone();
        let dispatch = task_dispatch.clone();
        Callback::from(move |page: u32| {
            spawn_task_action(&services, &dispatch, move |store| async move {
                store.fetch_todos(page).await;
            });
        })
    };

    let on_dismiss = {
        let dispatch = task_dispatch.clone();
        Callback::from(move |_| dispatch.reduce_mut(TaskState::clear_messages))
    };

    let on_logout = {
        let services = services.clone();
        let session_dispatch = session_dispatch.clone();
        let task_dispatch = task_dispatch.clone();
        Callback::from(move |_| {
            let Some(navigator) = navigator.clone() else {
                log::error!("logout requested outside a router");
                return;
            };
            let navigator = Rc::new(RouterNavigator(navigator));
            SessionStore::new(&services, navigator.clone(), session_dispatch.clone()).logout();
            task_dispatch.set(TaskState::default());
            navigator.navigate(Route::Home);
        })
    };

    let greeting = session.user.as_ref().map_or_else(
        || "Your tasks".to_string(),
        |user| format!("{}'s tasks", user.name),
    );

    html! {
        <div class="p-4 space-y-6 max-w-3xl mx-auto">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{ greeting }</h1>
                <button class="btn btn-outline btn-sm" type="button" onclick={on_logout}>
                    {"Log out"}
                </button>
            </div>

            if let Some(error) = &tasks.error {
                <div class="alert alert-error" onclick={on_dismiss.clone()}>
                    <span>{ error.clone() }</span>
                </div>
            }
            if let Some(message) = &tasks.success_message {
                <div class="alert alert-success" onclick={on_dismiss}>
                    <span>{ message.clone() }</span>
                </div>
            }

            <TaskForm on_submit={on_create} disabled={*creating} />

            <div class="card bg-base-200 shadow-md">
                <TaskList
                    tasks={tasks.todos.clone()}
                    {on_status_change}
                    {on_delete}
                />
            </div>

            <div class="flex justify-center">
                <Pagination
                    current_page={tasks.current_page}
                    total_pages={tasks.total_pages}
                    has_previous={tasks.has_previous_page()}
                    has_next={tasks.has_next_page()}
                    {on_page}
                />
            </div>
        </div>
    }
}
