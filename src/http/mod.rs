//! HTTP server module.
//!
//! Binds the configured address, serves the router over plain HTTP and drains
//! in-flight requests on SIGTERM/SIGINT before exiting. TLS termination is left
//! to whatever sits in front of the probe endpoint.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
pub use shutdown::setup_shutdown_handler;
