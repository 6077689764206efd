//! Application layer - Use cases and the ports they depend on
//!
//! This layer contains:
//! - DTOs: request/response bodies
//! - Ports: interfaces required from infrastructure
//! - Services: validation and queue orchestration

pub mod dto;
pub mod ports;
pub mod services;
