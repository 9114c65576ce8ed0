use chrono::Local;
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Timestamp format the service expects in `requestTimestamp`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Signed authentication header attached to every outbound call.
///
/// Headers must be recomputed immediately before each request. The service
/// enforces a short validity window per signature and rejects a reused or
/// stale one with its replay fault code, so caching a header is never valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeader {
    pub timestamp: String,
    pub signature: String,
}

/// Computes a fresh header for one call, reading the wall clock.
pub fn sign(user_id: &str, encryption_key: &str) -> AuthHeader {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    sign_at(&timestamp, user_id, encryption_key)
}

/// Deterministic core of `sign`: the header for an explicit timestamp.
///
/// `signature = hex(HMAC-SHA1(key = encryption_key, msg = timestamp + user_id))`,
/// lowercase.
pub fn sign_at(timestamp: &str, user_id: &str, encryption_key: &str) -> AuthHeader {
    let mut mac = HmacSha1::new_from_slice(encryption_key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(timestamp.as_bytes());
    mac.update(user_id.as_bytes());

    AuthHeader {
        timestamp: timestamp.to_string(),
        signature: hex::encode(mac.finalize().into_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_is_deterministic_for_fixed_inputs() {
        let a = sign_at("2015-07-06 19:00:02 +0900", "user", "key");
        let b = sign_at("2015-07-06 19:00:02 +0900", "user", "key");

        assert_eq!(a, b);
        assert_eq!(a.signature.len(), 40);
        assert_eq!(a.signature, a.signature.to_lowercase());
    }

    #[test]
    fn varying_the_timestamp_changes_the_signature() {
        let a = sign_at("2015-07-06 19:00:02 +0900", "user", "key");
        let b = sign_at("2015-07-06 19:00:03 +0900", "user", "key");

        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn varying_the_key_changes_the_signature() {
        let a = sign_at("2015-07-06 19:00:02 +0900", "user", "key");
        let b = sign_at("2015-07-06 19:00:02 +0900", "user", "other");

        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn fresh_headers_carry_a_parseable_timestamp() {
        let header = sign("user", "key");
        assert!(chrono::DateTime::parse_from_str(&header.timestamp, TIMESTAMP_FORMAT).is_ok());
    }
}
