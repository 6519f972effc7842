//! Wire record module declarations.

pub mod employee;
pub mod task;

pub use employee::Employee;
pub use task::Task;
