//! Core domain models and client-side logic for the Pujante learning platform

pub mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
pub mod format;
mod models;
pub mod player;
#[cfg(feature = "ssr")]
pub mod proxy;
pub mod validation;
pub mod wizard;

pub use error::ApiError;
pub use models::*;
