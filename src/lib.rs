// Library exports so the binary and integration tests share the same modules

pub mod config;
pub mod directory;
pub mod search;
pub mod ui;
