use anyhow::Result;

/// Edrt entry point: a fixed derive → sign → verify round trip.
/// Command-line arguments are ignored; the exit status reports the outcome.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    edrt_cli::roundtrip::run()
}
