//! Shared types for tasktrack.
//!
//! The task entity, its lifecycle status, and the request payloads accepted
//! by the API live here so the server and the CLI client agree on one wire
//! shape. Validation happens on these types, before anything touches the
//! store.

mod payload;
mod task;

pub use payload::{NewTask, TaskPatch};
pub use task::{InvalidTask, Task, TaskStatus};
