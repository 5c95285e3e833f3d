//! # Receipt Rewards API
//!
//! HTTP surface for submitting receipts and reading back their points.
//!
//! ## Request Flow
//! ```text
//! ┌────────────┐   ┌──────────────┐   ┌────────────────┐   ┌──────────────┐
//! │   routes   │──►│   service    │──►│  rewards-core  │   │ rewards-store│
//! │   (axum)   │   │ submit/lookup│   │ validate/score │   │  id → points │
//! └─────┬──────┘   └──────┬───────┘   └────────────────┘   └──────▲───────┘
//!       │                 └──────────────────────────────────────┘
//!       ▼
//!    error::ApiError ──► status + {"description", "details"}
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod service;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use routes::{router, PointsResponse, ProcessResponse};
pub use service::ReceiptService;
