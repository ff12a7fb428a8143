//! Novated Lease Estimation Engine for Australian Salary Packaging
//!
//! This crate estimates the whole-of-life cost of a novated car lease under the
//! 2025-26 Australian tax rules: income tax and Medicare levy, the ATO residual
//! table, amortized finance, statutory-method FBT and GST savings. It
//! compares the lease against buying outright, projects end-of-lease options
//! and checks a provider's quoted figures against its own.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod sharing;
pub mod storage;
