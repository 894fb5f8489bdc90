//! Issue history endpoints

pub mod dto;
pub mod handlers;
