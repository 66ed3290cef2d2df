//! The derive → sign → verify demonstration pipeline.

use anyhow::{Context, Result};
use edrt_sig::{init, open, sign, to_hex, KeyPair, Seed};
use tracing::info;

/// Seed used to regenerate the demonstration key pair.
pub const DEMO_SEED_HEX: &str =
    "eb6d092894154bdbd66e6369b6d84c981292742c3bd27682dd176ca7a4fbc1a2";

/// Message signed and verified by the demonstration.
pub const DEMO_MESSAGE: &[u8] = b"test";

/// Run the full round trip with the fixed demonstration inputs.
///
/// Each stage is a precondition for the next: a failed initialization stops
/// the pipeline before any key material is touched, and a failed
/// verification surfaces as the returned error.
pub fn run() -> Result<()> {
    init().context("the cryptographic subsystem could not be initialized")?;

    let seed = Seed::from_hex(DEMO_SEED_HEX).context("demonstration seed is malformed")?;
    let pair = KeyPair::derive(&seed);

    println!("Generated a signing/verifying key pair:");
    println!("\tSecret key: {}", to_hex(&pair.secret_bytes()));
    println!("\tPublic key: {}", to_hex(&pair.public_bytes()));

    info!(message_len = DEMO_MESSAGE.len(), "signing the test message");
    print!("Signing a test message ...");
    let signed = sign(&pair, DEMO_MESSAGE);
    println!(" Done");

    print!("Verifying the test signed message ...");
    match open(&signed, &pair.public_bytes()) {
        Ok(recovered) => {
            println!(" OK");
            if recovered != DEMO_MESSAGE {
                anyhow::bail!("recovered message does not match the original");
            }
            Ok(())
        }
        Err(err) => {
            println!(" invalid signature");
            Err(err.into())
        }
    }
}
