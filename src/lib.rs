//! Import pipeline for VAT transaction files: field validation, business-rule adjustment,
//! persistence and Euro conversion against an exchange rate snapshot.

pub mod config;
pub mod conversion;
pub mod engine;
pub mod models;
pub mod rates;
pub mod storage;
pub mod types;
pub mod validation;
