//! Wire models for the TaskDeck API.
//!
//! Everything here is plain serde data: users and auth envelopes, tasks and
//! their pagination wrapper, and the flattening of error payloads into the
//! field-to-message map shown next to forms.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
