//! HTTP API surface

pub mod evaluate;
pub mod health;
pub mod router;
pub mod state;
pub mod types;
