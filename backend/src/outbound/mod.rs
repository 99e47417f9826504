//! Outbound adapters (driven side).

pub mod persistence;
pub mod storage;
