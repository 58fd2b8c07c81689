//! Controller Layer
//!
//! Routes user interactions into the task store and re-renders.

mod input;
mod task_list;

pub use input::{EditOutcome, InputController, SubmitOutcome};
pub use task_list::TaskList;
