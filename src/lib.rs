//! Synthetic credit-rating-change dataset with a filterable dashboard
//! contract: scale registry → sample generator → filter/aggregation engine →
//! presentation payload (terminal report, JSON, CSV export).

pub mod analysis;
pub mod cache;
pub mod config;
pub mod events;
pub mod export;
pub mod filter;
pub mod generator;
pub mod report;
pub mod scale;
pub mod types;
