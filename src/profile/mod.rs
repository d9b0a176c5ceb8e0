pub mod model;
pub mod repository;

#[cfg(test)]
pub mod memory_repository;
