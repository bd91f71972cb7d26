// shortcuts-vdf/src/appid.rs

//! Shortcut app ID derivation.
//!
//! The host computes the same ID from the same bytes, so the key layout
//! (`"` + exe + `"` + name, no separator) is part of the format.

/// High bit set on every generated ID, marking it as a non-catalog app.
pub const SHORTCUT_ID_FLAG: u32 = 0x8000_0000;

/// CRC-32 (IEEE) of `"<exe_path>"<app_name>` with bit 31 set.
pub fn generate(exe_path: &str, app_name: &str) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(b"\"");
    hasher.update(exe_path.as_bytes());
    hasher.update(b"\"");
    hasher.update(app_name.as_bytes());
    hasher.finalize() | SHORTCUT_ID_FLAG
}
