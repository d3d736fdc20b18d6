//! Access gate in front of the menu.
//!
//! The gate keeps casual readers out of a collection; it is not a security
//! boundary, since the file itself is only ROT13-obfuscated. The check is a
//! `CredentialVerifier` chosen at startup from config and environment.

use zeroize::Zeroizing;

use crate::config::{GateMode, SecuritySection};
use crate::ui::Console;

/// Decides whether an entered secret opens the gate.
pub trait CredentialVerifier {
    fn verify(&self, entered: &str) -> bool;

    /// Whether the user should be asked for a secret at all.
    fn requires_prompt(&self) -> bool {
        true
    }
}

/// A single shared password compared for exact equality.
pub struct SharedSecret {
    secret: Zeroizing<String>,
}

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Zeroizing::new(secret.into()),
        }
    }
}

impl CredentialVerifier for SharedSecret {
    fn verify(&self, entered: &str) -> bool {
        let expected = self.secret.as_bytes();
        let entered = entered.as_bytes();
        if expected.len() != entered.len() {
            return false;
        }
        expected
            .iter()
            .zip(entered)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

/// Gate explicitly turned off in config.
pub struct OpenGate;

impl CredentialVerifier for OpenGate {
    fn verify(&self, _entered: &str) -> bool {
        true
    }

    fn requires_prompt(&self) -> bool {
        false
    }
}

/// Build the verifier for this run.
///
/// The secret comes from `env_secret` (the `NOTESTOOL_PASSWORD` variable)
/// when set, then `security.password`, and otherwise is empty, so a bare
/// Enter opens the gate.
pub fn verifier_from_config(
    security: &SecuritySection,
    env_secret: Option<String>,
) -> Box<dyn CredentialVerifier> {
    match security.gate {
        GateMode::Disabled => Box::new(OpenGate),
        GateMode::Password => {
            let secret = env_secret
                .or_else(|| security.password.clone())
                .unwrap_or_default();
            Box::new(SharedSecret::new(secret))
        }
    }
}

/// Outcome of the password prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Denied,
}

/// Ask for the password once. There is no retry; end of input denies.
pub fn check_access(console: &mut Console<'_>, verifier: &dyn CredentialVerifier) -> Access {
    if !verifier.requires_prompt() {
        return Access::Granted;
    }

    let entered = match console.ask_secret("\nEnter password: ") {
        Some(line) => Zeroizing::new(line),
        None => return Access::Denied,
    };
    // Secret reads do not echo a newline on their own.
    console.say("");
    if verifier.verify(&entered) {
        Access::Granted
    } else {
        Access::Denied
    }
}
