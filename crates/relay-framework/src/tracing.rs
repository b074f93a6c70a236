//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing` subscriber used by every binary
//! in the workspace.
//!
//! ## Configuration
//!
//! - **Filtering** via `RUST_LOG`; when unset the filter falls back to
//!   `warn` so that an interactive shell on the same terminal stays readable.
//! - **Compact format** without the module path (`with_target(false)`).
//! - **stderr** as the sink, leaving stdout to the program's own output.
//!
//! ```bash
//! # Only rejections and failures (default)
//! cargo run
//!
//! # State mutations: orders created and updated, messages handled
//! RUST_LOG=info cargo run
//!
//! # Full payloads and every lookup
//! RUST_LOG=debug cargo run
//!
//! # One crate only
//! RUST_LOG=relay_framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: start and shutdown with final depth and processed count
//! - **Queue**: enqueue, dequeue and rejection with `depth` / `capacity`
//! - **Store**: Create, Get and Update with the record id
//! - **Clients**: one span per call via `#[instrument]`

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
