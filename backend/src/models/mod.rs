//! Data models shared across validation and API handlers.

pub mod attendance;
