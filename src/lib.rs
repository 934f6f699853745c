//! Daily desktop wallpaper changer
//!
//! Downloads a random image from a Picsum-compatible service, keeps every
//! download in a local cache, and falls back to a random cached image when
//! the service can't be reached.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod freshness;
pub mod notify;
pub mod output;
pub mod picsum;
pub mod platform;
pub mod refresh;
pub mod store;
