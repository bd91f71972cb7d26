// shortcuts-vdf/src/encode.rs

//! Binary VDF encoder, the byte-exact inverse of [`crate::decode`].

use std::io::Write;

use byteorder::{ByteOrder, LittleEndian};
use log::warn;

use crate::tag::{ROOT_KEY, TAG_END, TAG_OBJECT};
use crate::value::{Document, Object, Value};

/// Serializes a document.
///
/// Layout: `0x00 "shortcuts\0" <shortcuts body> 0x08 0x08`. The first
/// trailing sentinel closes the shortcuts object, the second the root.
///
/// Never fails. Keys and strings are NUL-terminated on the wire, so one
/// holding an interior NUL is cut at that NUL; the round trip is exact only
/// for NUL-free documents.
pub fn encode(doc: &Document) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(doc.shortcuts()) + ROOT_KEY.len() + 3);
    buf.push(TAG_OBJECT);
    write_cstring(&mut buf, ROOT_KEY);
    write_object_body(&mut buf, doc.shortcuts());
    buf.push(TAG_END);
    buf
}

/// Serializes a document into any writer in one `write_all`.
pub fn encode_to<W: Write>(doc: &Document, writer: &mut W) -> std::io::Result<()> {
    writer.write_all(&encode(doc))
}

/// Serializes one object body: its entries followed by the `0x08` sentinel.
pub fn encode_object(obj: &Object) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(obj));
    write_object_body(&mut buf, obj);
    buf
}

fn write_object_body(buf: &mut Vec<u8>, obj: &Object) {
    for (key, value) in obj.iter() {
        buf.push(value.tag().byte());
        write_cstring(buf, key);
        match value {
            Value::Object(child) => write_object_body(buf, child),
            Value::Str(s) => write_cstring(buf, s),
            Value::Int32(n) => {
                let mut word = [0u8; 4];
                LittleEndian::write_u32(&mut word, *n);
                buf.extend_from_slice(&word);
            }
        }
    }
    buf.push(TAG_END);
}

/// Writes `s` up to its first NUL, then the terminator. Anything after an
/// interior NUL cannot be represented and is dropped.
fn write_cstring(buf: &mut Vec<u8>, s: &str) {
    let bytes = s.as_bytes();
    let end = match bytes.iter().position(|&b| b == 0) {
        Some(nul) => {
            warn!("Truncating string at interior NUL (offset {} of {}).", nul, bytes.len());
            nul
        }
        None => bytes.len(),
    };
    buf.extend_from_slice(&bytes[..end]);
    buf.push(0);
}

fn cstring_len(s: &str) -> usize {
    s.bytes().position(|b| b == 0).unwrap_or(s.len()) + 1
}

/// Exact size of an encoded object body, sentinel included.
fn encoded_len(obj: &Object) -> usize {
    obj.iter()
        .map(|(key, value)| {
            1 + cstring_len(key)
                + match value {
                    Value::Object(child) => encoded_len(child),
                    Value::Str(s) => cstring_len(s),
                    Value::Int32(_) => 4,
                }
        })
        .sum::<usize>()
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_layout() {
        let bytes = encode(&Document::new());
        assert_eq!(bytes, b"\x00shortcuts\0\x08\x08".to_vec());
    }

    #[test]
    fn test_entry_layout() {
        let mut entry = Object::new();
        entry.insert("appid", 0x8000_0001u32);
        entry.insert("AppName", "Game");
        entry.insert("tags", Object::new());
        let mut shortcuts = Object::new();
        shortcuts.insert("0", entry);

        let bytes = encode(&Document::from_shortcuts(shortcuts));
        let mut expected = b"\x00shortcuts\0".to_vec();
        expected.extend_from_slice(b"\x000\0");
        expected.extend_from_slice(b"\x02appid\0\x01\x00\x00\x80");
        expected.extend_from_slice(b"\x01AppName\0Game\0");
        expected.extend_from_slice(b"\x00tags\0\x08");
        expected.extend_from_slice(b"\x08\x08\x08");
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_encoded_len_matches_output() {
        let mut inner = Object::new();
        inner.insert("s", "héllo");
        inner.insert("n", 5u32);
        let mut obj = Object::new();
        obj.insert("inner", inner);
        obj.insert("after", "x");
        assert_eq!(encode_object(&obj).len(), encoded_len(&obj));
    }

    #[test]
    fn test_interior_nul_is_truncated() {
        let mut shortcuts = Object::new();
        shortcuts.insert("k", "a\0b");
        shortcuts.insert("x\0y", 7u32);
        shortcuts.insert("after", "z");
        let doc = Document::from_shortcuts(shortcuts);
        let bytes = encode(&doc);

        let mut expected = b"\x00shortcuts\0".to_vec();
        expected.extend_from_slice(b"\x01k\0a\0");
        expected.extend_from_slice(b"\x02x\0\x07\x00\x00\x00");
        expected.extend_from_slice(b"\x01after\0z\0");
        expected.extend_from_slice(b"\x08\x08");
        assert_eq!(bytes, expected);
        assert_eq!(bytes.len(), encoded_len(doc.shortcuts()) + ROOT_KEY.len() + 3);

        let decoded = crate::decode::decode(&bytes).unwrap();
        assert_eq!(decoded.shortcuts().get_str("k"), Some("a"));
        assert_eq!(decoded.shortcuts().get_u32("x"), Some(7));
        assert_eq!(decoded.shortcuts().get_str("after"), Some("z"));
    }

    #[test]
    fn test_encode_to_writer() {
        let doc = Document::new();
        let mut out = Vec::new();
        encode_to(&doc, &mut out).unwrap();
        assert_eq!(out, encode(&doc));
    }
}
