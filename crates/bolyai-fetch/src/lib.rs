//! Best-effort downloading of the competition archive.
//!
//! # Architecture
//!
//! - [`data`] - Outcome and report types
//! - [`core`] - Pure decisions on responses
//! - [`effects`] - Network and filesystem I/O behind the [`HttpClient`] trait
//!
//! Every task goes through the same linear path: check existence, skip or
//! fetch, check status, discard or save. Tasks are processed one at a time and
//! a failing task never stops the run.

mod core;
mod data;
mod effects;
mod error;

pub use crate::core::is_success;
pub use data::{Outcome, RunReport};
pub use effects::{BoxStream, Fetcher, HttpClient, HttpResponse, run};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{Error, Result};
