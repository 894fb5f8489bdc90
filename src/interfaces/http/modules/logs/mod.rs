//! Activity log endpoints

pub mod dto;
pub mod handlers;
