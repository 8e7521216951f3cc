use md5::{Digest, Md5};

/// Lowercase hex MD5 of the UTF-8 bytes of `text` (always 32 chars).
pub fn md5_hex(text: &str) -> String {
    hex::encode(Md5::digest(text.as_bytes()))
}
