pub mod check;
pub mod enroll;
pub mod learning_path;
pub mod list;
pub mod resolve;
