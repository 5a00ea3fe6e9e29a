pub mod config;
pub mod demo;
pub mod events;
pub mod output;
pub mod sessions;
pub mod speakers;
