//! Yampi webhook signature verification.
//!
//! Yampi signs each webhook with HMAC-SHA256 over the raw request body and
//! sends the base64-encoded digest in the `x-yampi-hmac-sha256` header.
//! Verification must hash the exact bytes received on the wire: parsing and
//! re-serializing the body changes the byte sequence and silently breaks
//! the comparison.

use base64::prelude::*;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the base64 HMAC-SHA256 digest.
pub const SIGNATURE_HEADER: &str = "x-yampi-hmac-sha256";

/// Compute the base64-encoded HMAC-SHA256 digest of a raw body.
pub fn compute_signature(secret: &str, raw_body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(raw_body);
    BASE64_STANDARD.encode(mac.finalize().into_bytes())
}

/// Verify a Yampi webhook signature against the raw request body.
///
/// Returns `true` only when the header value matches the recomputed digest
/// byte for byte. All-or-nothing: no partial trust, no replay window.
pub fn verify_signature(secret: &str, raw_body: &[u8], signature: &str) -> bool {
    if secret.is_empty() || signature.is_empty() {
        warn!(
            has_secret = !secret.is_empty(),
            has_signature = !signature.is_empty(),
            "yampi_signature_missing_fields"
        );
        return false;
    }

    let expected = compute_signature(secret, raw_body);

    let valid = constant_time_compare(&expected, signature);

    if !valid {
        warn!(
            expected_length = expected.len(),
            actual_length = signature.len(),
            "yampi_signature_mismatch"
        );
    }

    valid
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
