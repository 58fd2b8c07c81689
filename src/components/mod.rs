//! UI Components
//!
//! Leptos components for the task list.

mod new_task_form;
mod category_selector;
mod progress_bar;
mod task_list_view;
mod task_item;
mod edit_field;

pub use new_task_form::NewTaskForm;
pub use category_selector::CategorySelector;
pub use progress_bar::ProgressBar;
pub use task_list_view::TaskListView;
pub use task_item::TaskItem;
pub use edit_field::EditField;
