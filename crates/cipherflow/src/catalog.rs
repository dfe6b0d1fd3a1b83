//! Built-in diagram catalog.
//!
//! One module per documented protocol flow. Each definition is declarative
//! data: node producers picking color tokens per appearance mode, static
//! edge lists, and a narrow variant where the page layout calls for one.

mod aead;
mod blake3_derive;
mod hmac;
mod ml_dsa;
mod ml_kem;
mod session_key;
mod sign_encrypt;
mod x25519;

use crate::variant::FlowDefinition;

/// Names accepted by [`by_name`], in display order.
pub const NAMES: &[&str] = &[
    "aead",
    "hmac",
    "blake3-derive",
    "x25519",
    "session-key",
    "sign-encrypt",
    "ml-kem",
    "ml-dsa",
];

/// Looks up a catalog definition by its public name.
pub fn by_name(name: &str) -> Option<FlowDefinition> {
    match name {
        "aead" => Some(aead()),
        "hmac" => Some(hmac()),
        "blake3-derive" => Some(blake3_derive()),
        "x25519" => Some(x25519()),
        "session-key" => Some(session_key()),
        "sign-encrypt" => Some(sign_encrypt()),
        "ml-kem" => Some(ml_kem()),
        "ml-dsa" => Some(ml_dsa()),
        _ => None,
    }
}

/// Authenticated encryption: plaintext, key and nonce into ciphertext + tag.
pub fn aead() -> FlowDefinition {
    aead::definition()
}

/// HMAC generation and verification.
pub fn hmac() -> FlowDefinition {
    hmac::definition()
}

/// BLAKE3 key derivation fan-out from one master secret.
pub fn blake3_derive() -> FlowDefinition {
    blake3_derive::definition()
}

/// Two-party X25519 key agreement.
pub fn x25519() -> FlowDefinition {
    x25519::definition()
}

/// Session key derivation from an X25519 exchange.
pub fn session_key() -> FlowDefinition {
    session_key::definition()
}

/// Sign-then-encrypt round trip with EdDSA.
pub fn sign_encrypt() -> FlowDefinition {
    sign_encrypt::definition()
}

/// ML-KEM encapsulation and decapsulation.
pub fn ml_kem() -> FlowDefinition {
    ml_kem::definition()
}

/// ML-DSA signing and verification.
pub fn ml_dsa() -> FlowDefinition {
    ml_dsa::definition()
}

// Color token pairs shared by the flow definitions. The darker token is
// used in dark mode, the lighter one in light mode.

pub(crate) fn indigo(dark: bool) -> &'static str {
    if dark { "#6366f1" } else { "#818cf8" }
}

pub(crate) fn green(dark: bool) -> &'static str {
    if dark { "#22c55e" } else { "#4ade80" }
}

pub(crate) fn violet(dark: bool) -> &'static str {
    if dark { "#8b5cf6" } else { "#a78bfa" }
}

pub(crate) fn amber(dark: bool) -> &'static str {
    if dark { "#f59e0b" } else { "#fbbf24" }
}

pub(crate) fn emerald(dark: bool) -> &'static str {
    if dark { "#16a34a" } else { "#22c55e" }
}

pub(crate) fn olive(dark: bool) -> &'static str {
    if dark { "#a3a322" } else { "#d4d462" }
}
