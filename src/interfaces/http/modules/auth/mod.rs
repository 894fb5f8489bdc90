//! Login and session rehydration endpoints

pub mod dto;
pub mod handlers;
