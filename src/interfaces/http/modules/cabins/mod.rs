//! Cabin board endpoints: status queries and workflow transitions

pub mod dto;
pub mod handlers;
