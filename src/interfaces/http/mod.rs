//! HTTP REST API
//!
//! - `common`: response envelope and validated JSON extractor
//! - `error`: the single DomainError → HTTP status mapping
//! - `modules`: one directory per resource (dto + handlers)
//! - `router`: route table, auth wiring, Swagger documentation

pub mod common;
pub mod error;
pub mod modules;
pub mod router;

pub use router::create_api_router;
