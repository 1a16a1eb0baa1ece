pub mod todos;
pub mod utility;
