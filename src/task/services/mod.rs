//! Service layer for task lifecycle orchestration.

pub mod lifecycle;

pub use lifecycle::{
    CreateTaskRequest, EditTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskService,
};
