//! Core system components of the presence node
pub mod event;
pub mod hcsr04;
pub mod indicator;
pub mod resources;
pub mod uptime;
