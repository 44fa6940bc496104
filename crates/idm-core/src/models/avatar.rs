use md5::{Digest, Md5};

const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar";

/// Hex MD5 of the trimmed, lower-cased email. Used as the avatar key.
pub fn avatar_hash(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    hex::encode(Md5::digest(normalized.as_bytes()))
}

pub fn avatar_url(email: &str, size: u32) -> String {
    format!(
        "{}/{}?s={}&d=identicon",
        GRAVATAR_BASE_URL,
        avatar_hash(email),
        size
    )
}
