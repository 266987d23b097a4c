pub mod browse;
pub mod config;
pub mod sections;
pub mod show;
