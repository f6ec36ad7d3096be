#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]

pub mod client;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod models;
