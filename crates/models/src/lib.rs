//! SeaORM entities and data access for the company registry.

pub mod company;
pub mod db;
pub mod errors;

#[cfg(test)]
mod tests;
