//! One-time readiness check for the cryptographic subsystem.

use std::sync::OnceLock;
use thiserror::Error;

/// The cryptographic subsystem cannot be used safely.
#[derive(Debug, Clone, Error)]
pub enum InitError {
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}

static SUBSYSTEM: OnceLock<Result<(), InitError>> = OnceLock::new();

/// Ensure the cryptographic subsystem is usable.
///
/// Probes the operating system entropy source exactly once per process;
/// every later call, from any thread, returns the cached outcome. Callers
/// must not perform any cryptographic operation if this returns an error.
pub fn init() -> Result<(), InitError> {
    SUBSYSTEM
        .get_or_init(|| {
            let mut probe = [0u8; 16];
            getrandom::fill(&mut probe)
                .map_err(|err| InitError::EntropyUnavailable(err.to_string()))
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_succeeds() {
        assert!(init().is_ok());
    }

    #[test]
    fn test_init_is_idempotent() {
        assert!(init().is_ok());
        assert!(init().is_ok());
    }

    #[test]
    fn test_init_is_safe_under_concurrent_calls() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| init().is_ok()))
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
