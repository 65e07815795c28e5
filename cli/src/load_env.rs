use std::path::Path;

use anyhow::Context;
use solana_sdk::{
    bs58,
    signature::Keypair,
};

pub const SECRET_KEY_VAR: &str = "SOLBANK_SECRET_KEY";

/// Loads the wallet from `path` if given, otherwise from the `SOLBANK_SECRET_KEY` environment
/// variable. Returns `None` when neither is set; read-only commands don't need a wallet.
pub fn wallet_keypair(path: Option<&Path>) -> anyhow::Result<Option<Keypair>> {
    if let Some(path) = path {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Couldn't read keypair file {}", path.display()))?;
        return parse_keypair(&contents).map(Some);
    }

    match std::env::var(SECRET_KEY_VAR) {
        Ok(kp_str) => parse_keypair(&kp_str)
            .with_context(|| format!("Environment variable {SECRET_KEY_VAR} is invalid"))
            .map(Some),
        Err(_) => Ok(None),
    }
}

/// Accepts either a JSON byte array (the Solana CLI keypair file format) or a base58 string.
pub fn parse_keypair(kp_str: &str) -> anyhow::Result<Keypair> {
    let kp_str = kp_str.trim();
    let byte_vec: Vec<u8> = if kp_str.starts_with('[') {
        serde_json::from_str(kp_str).context("Invalid JSON keypair")?
    } else {
        bs58::decode(kp_str)
            .into_vec()
            .context("Invalid base58 keypair")?
    };

    Keypair::try_from(byte_vec.as_slice()).map_err(|e| anyhow::anyhow!("Invalid keypair bytes: {e}"))
}
