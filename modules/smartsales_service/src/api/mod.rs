//! API layer - REST and native client

pub mod native;
pub mod rest;
