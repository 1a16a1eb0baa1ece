pub mod memory_repo;
