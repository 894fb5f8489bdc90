//! Admin-only account management endpoints

pub mod dto;
pub mod handlers;
