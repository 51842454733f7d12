//! # Receipt API
//!
//! HTTP server that scores retail receipts and serves the points back.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API                                     │
//! │                                                                         │
//! │  ┌──────────────────────────┐   ┌─────────────────────────────────────┐│
//! │  │  POST /receipts/process  │   │  GET /receipts/{id}/points          ││
//! │  │                          │   │                                     ││
//! │  │ • parse JSON body        │   │ • look up id                        ││
//! │  │ • validate               │   │ • 200 {"points": n}                 ││
//! │  │ • score + store          │   │ • 404 when unknown                  ││
//! │  │ • 200 {"id": "..."}      │   │                                     ││
//! │  └──────────────────────────┘   └─────────────────────────────────────┘│
//! │                     │                            │                      │
//! │                     ▼                            ▼                      │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │            AppState (ReceiptStore + ApiConfig)                    │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `PORT` - HTTP port (default: 3000)
//! - `BIND_ADDR` - Bind address (default: 0.0.0.0)
//! - `MAX_BODY_BYTES` - Request body limit (default: 1048576)
//! - `RUST_LOG` - Log filter (default: `info,receipt_api=debug,receipt_store=debug`)

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
