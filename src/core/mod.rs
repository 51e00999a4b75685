//! Orchestration over the pure calendar and classification primitives.

pub mod services;
