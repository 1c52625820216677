pub mod export;
pub mod import;
pub mod payload;
pub mod repository;
