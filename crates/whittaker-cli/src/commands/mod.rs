pub mod config;
pub mod minor;
pub mod project;
