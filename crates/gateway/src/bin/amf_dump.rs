//! amf-dump
//!
//! Prints a captured request envelope as JSON.
//!
//! Usage: `amf-dump <request.bin>`. Set `RUST_LOG=debug` to see parse events.

use std::path::PathBuf;
use std::process::ExitCode;

use amf_gate::{decode_envelope, parse_request};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: amf-dump <request.bin>");
        return ExitCode::from(2);
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("{}: {}", path.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let decoded = parse_request(&bytes).and_then(|routing| {
        let envelope = decode_envelope(&bytes)?;
        Ok((routing, envelope))
    });
    match decoded {
        Ok((routing, envelope)) => {
            let out = serde_json::json!({
                "routing": routing,
                "envelope": envelope.to_json(),
            });
            println!("{:#}", out);
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.position() {
                Some(offset) => eprintln!("{}: {} (offset {})", path.display(), err, offset),
                None => eprintln!("{}: {}", path.display(), err),
            }
            ExitCode::FAILURE
        }
    }
}
