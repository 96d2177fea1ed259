//! Service layer calling into the aggregation engine.

pub mod services;
