pub mod column;
pub mod task;

// Export the Column and Task types for use throughout the app
pub use column::Column;
pub use task::Task;
