pub mod fs;
pub mod persist;
pub mod repository;
pub mod watcher;
