//! Request, response and domain types exchanged with the task API.

pub mod errors;
pub mod task;
pub mod user;

pub use errors::{FieldErrors, GENERIC_ERROR_MESSAGE};
pub use task::{
    MessageResponse, NewTask, Task, TaskChanges, TaskCreated, TaskPage, TaskPriority, TaskStatus,
    normalize_due_date,
};
pub use user::{AuthResponse, CurrentUser, RegisterRequest, SignInRequest, User};
