pub mod api;
pub mod auth;
pub mod common;
pub mod icon;
pub mod navbar;
pub mod pages;
pub mod player;
pub mod session;
pub mod trilha_card;

pub use icon::{Icon, icons};
