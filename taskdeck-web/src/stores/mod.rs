//! Client-side state containers.
//!
//! DESIGN
//! ======
//! Each store owns a plain state struct (also a yewdux `Store`) and the API
//! handles it needs. Views build a store from the current snapshot, run one
//! operation and publish the resulting state back through the dispatch.

pub mod session;
pub mod tasks;

pub use session::{SessionState, SessionStore};
pub use tasks::{TaskState, TaskStore};
