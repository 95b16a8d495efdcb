pub mod cars;
pub mod forms;
