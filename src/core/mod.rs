pub mod athletes;
pub mod cars;
pub mod catalog;
pub mod directory;
pub mod error;
pub mod products;
pub mod service;
