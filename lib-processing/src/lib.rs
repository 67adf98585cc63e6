#![cfg_attr(not(test), no_std)]

pub use math::Vector;

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod sample;
pub use sample::*;

pub mod step_detection;
pub use step_detection::*;

pub mod pedometer;
pub use pedometer::*;

#[cfg(test)]
mod tests;
