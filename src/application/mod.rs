pub mod calculator;
pub mod greeting;
pub mod random;
pub mod todo_service;
