//! Process setup for binaries embedding the access key helpers.

mod tracing_init;

pub use tracing_init::{init_tracing, DEFAULT_FILTER};
