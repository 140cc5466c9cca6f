//! Domain Layer
//!
//! State held for the lifetime of a panel instance.
//! This layer has NO external dependencies and never touches the host.

mod todo_list;

pub use todo_list::TodoList;
