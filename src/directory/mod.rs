pub mod client;
pub mod models;

pub use client::{DirectoryClient, DirectoryError};
pub use models::Person;
