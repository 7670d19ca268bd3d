//! IP reputation checks against AbuseIPDB.
//!
//! Looks up one or more IP addresses, classifies each confidence score into a
//! risk level, and reports the outcome as a JSON document whose status code
//! doubles as the process exit code.
//!
//! # Features
//!
//! - **Single check** - Full result for one address, including the public flag
//! - **Batch check** - Comma-separated list, deduplicated, with per-address errors
//! - **Risk levels** - `HIGH` at or above a configurable threshold, `MEDIUM` from 25, else `LOW`
//! - **Partial failure** - One failed lookup never aborts a batch
//!
//! # Output
//!
//! ```json
//! {
//!   "step_status": { "code": 0, "message": "partial_success" },
//!   "api_object": {
//!     "summary": {
//!       "total": 3,
//!       "successful": 1,
//!       "failed": 2,
//!       "risk_counts": { "HIGH": 0, "MEDIUM": 0, "LOW": 1 }
//!     },
//!     "results": { "8.8.8.8": { "risk_level": "LOW", "...": "..." } },
//!     "errors": { "1.1.1.1": "API error", "invalid-ip": "Invalid IP address format" }
//!   }
//! }
//! ```

pub mod batch;
pub mod config;
pub mod input;
pub mod output;
pub mod providers;
pub mod report;
pub mod risk;
pub mod single;

pub use batch::{check_batch, BatchReport, BatchSummary};
pub use config::Config;
pub use output::Output;
pub use risk::RiskLevel;
pub use single::check_single;
