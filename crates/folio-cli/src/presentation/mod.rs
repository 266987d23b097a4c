pub mod components;
pub mod renderers;
pub mod views;
