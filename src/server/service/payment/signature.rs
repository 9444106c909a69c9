//! Payment signature verification.
//!
//! The gateway signs a completed checkout with HMAC-SHA256 over
//! `"<order_id>|<payment_id>"`, keyed by the account's key secret, hex-encoded.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Lower-case hex HMAC-SHA256 of `message` keyed by `secret`.
fn hmac_hex(secret: &str, message: &str) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(message.as_bytes());

    Some(hex::encode(mac.finalize().into_bytes()))
}

/// Signature the gateway is expected to send for this order and payment.
pub fn expected_signature(order_id: &str, payment_id: &str, secret: &str) -> Option<String> {
    hmac_hex(secret, &format!("{}|{}", order_id, payment_id))
}

/// Checks a checkout signature in constant time.
///
/// # Returns
/// - `true` - Signature matches exactly
/// - `false` - Any mismatch
pub fn verify_signature(order_id: &str, payment_id: &str, signature: &str, secret: &str) -> bool {
    let Some(expected) = expected_signature(order_id, payment_id, secret) else {
        return false;
    };

    constant_time_eq::constant_time_eq(expected.as_bytes(), signature.as_bytes())
}
