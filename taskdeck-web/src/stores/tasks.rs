//! One page of tasks plus create, update and delete against it.

use crate::api::ApiClient;
use crate::services::Services;
use shared::models::{MessageResponse, NewTask, Task, TaskChanges, TaskCreated, TaskPage};
use yewdux::{Dispatch, Store};

pub const FETCH_FAILED: &str = "Failed to fetch todos";
pub const ADD_FAILED: &str = "Failed to add todo";
pub const DELETE_FAILED: &str = "Failed to delete todo";
pub const UPDATE_FAILED: &str = "Failed to update todo";

/// Reactive snapshot of the task board.
///
/// `current_page` and `total_pages` always come from the same fetch as the
/// list they were fetched with; create/update/delete then edit that list.
#[derive(Debug, Clone, PartialEq, Store)]
pub struct TaskState {
    pub todos: Vec<Task>,
    pub error: Option<String>,
    pub success_message: Option<String>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for TaskState {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            error: None,
            success_message: None,
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl TaskState {
    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Dismiss the error and success banners.
    pub fn clear_messages(&mut self) {
        self.error = None;
        self.success_message = None;
    }
}

/// Task operations, all through the authenticated client.
///
/// Every response is applied to the current [`TaskState`] in the shared
/// container once it arrives, so overlapping operations each land their own
/// edit instead of publishing a snapshot taken before the request.
pub struct TaskStore {
    dispatch: Dispatch<TaskState>,
    api: ApiClient,
}

impl TaskStore {
    pub fn new(services: &Services, dispatch: Dispatch<TaskState>) -> Self {
        Self {
            dispatch,
            api: services.auth_api.clone(),
        }
    }

    fn fail(&self, message: &str) {
        let message = message.to_string();
        self.dispatch.reduce_mut(|state| state.error = Some(message));
    }

    /// Replace the cached page with page `page` from the server.
    pub async fn fetch_todos(&self, page: u32) {
        match self.api.get::<TaskPage>(&format!("task?page={page}")).await {
            Ok(response) => {
                let TaskPage {
                    data,
                    current_page,
                    last_page,
                } = response.data;
                self.dispatch.reduce_mut(|state| {
                    state.todos = data;
                    state.current_page = current_page;
                    state.total_pages = last_page;
                });
            }
            Err(err) => {
                log::error!("fetching page {page} failed: {err}");
                self.fail(FETCH_FAILED);
            }
        }
    }

    /// Create a task and append the submitted fields under the new id.
    ///
    /// Dashes in the due date are turned into slashes before submission. The
    /// local entry is not re-read from the server.
    pub async fn add_todo(&self, new_task: NewTask) {
        let new_task = new_task.normalized();
        match self
            .api
            .post::<_, TaskCreated>("task/create", &new_task)
            .await
        {
            Ok(response) => {
                let TaskCreated { id, message } = response.data;
                self.dispatch.reduce_mut(|state| {
                    state.todos.push(Task::from_new(id, new_task));
                    state.success_message = message;
                });
            }
            Err(err) => {
                log::error!("creating task failed: {err}");
                self.fail(ADD_FAILED);
            }
        }
    }

    pub async fn delete_todo(&self, id: u64) {
        match self
            .api
            .delete::<Option<MessageResponse>>(&format!("task/{id}"))
            .await
        {
            Ok(response) => {
                let message = response.data.and_then(|body| body.message);
                self.dispatch.reduce_mut(|state| {
                    state.todos.retain(|task| task.id != id);
                    state.success_message = message;
                });
            }
            Err(err) => {
                log::error!("deleting task {id} failed: {err}");
                self.fail(DELETE_FAILED);
            }
        }
    }

    /// Send the present fields of `changes` and merge them into the cached
    /// task with the same id, if it is on the page at that point.
    pub async fn update_todo(&self, id: u64, changes: TaskChanges) {
        match self
            .api
            .put::<_, Option<MessageResponse>>(&format!("task/{id}"), &changes)
            .await
        {
            Ok(response) => {
                let message = response.data.and_then(|body| body.message);
                self.dispatch.reduce_mut(|state| {
                    if let Some(task) = state.todos.iter_mut().find(|task| task.id == id) {
                        changes.apply_to(task);
                    }
                    state.success_message = message;
                });
            }
            Err(err) => {
                log::error!("updating task {id} failed: {err}");
                self.fail(UPDATE_FAILED);
            }
        }
    }
}

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;
