//! I/O side of the crate: the network seam and the filesystem writes.

mod fetcher;
mod http;

pub use fetcher::{Fetcher, run};
pub use http::{BoxStream, HttpClient, HttpResponse};
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
