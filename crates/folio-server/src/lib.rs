//! Static file server for built folio resume sites.
//!
//! Serves a single directory, maps `/` to its `index.html`, and answers
//! everything else it cannot find with a plain-text 404.

pub mod server;

pub use server::{router, ServerConfig, ServerError, StaticServer, DEFAULT_PORT};
