// shortcuts-vdf/src/decode.rs

//! Binary VDF decoder.
//!
//! Recursive descent over a forward-only cursor. The cursor lives in a small
//! `Decoder` owned by one `decode` call, so every read is bounds-checked
//! against the buffer and fails with a typed [`FormatError`].

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, trace, warn};

use crate::error::FormatError;
use crate::tag::{ROOT_KEY, TAG_END, TAG_OBJECT, Tag};
use crate::value::{Document, Object, Value};

/// Deepest object nesting accepted. Shortcut files use three levels.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parses a shortcuts buffer into a [`Document`].
///
/// An empty buffer, or one that does not open with the object tag, yields an
/// empty document. A buffer that ends cleanly between entries, before an
/// object's `0x08` sentinel, reads as a shorter tree: the open objects close
/// there and a warning is logged. Any other structural error (a cut inside
/// a string or int32, an unknown tag) aborts the whole decode.
pub fn decode(bytes: &[u8]) -> Result<Document, FormatError> {
    if bytes.is_empty() {
        return Ok(Document::new());
    }
    if bytes[0] != TAG_OBJECT {
        warn!(
            "Buffer starts with {:#04x} instead of the object tag; treating as no shortcuts.",
            bytes[0]
        );
        return Ok(Document::new());
    }

    let mut decoder = Decoder::new(bytes);
    decoder.reader.set_position(1);

    let root_key = decoder.read_cstring()?;
    if root_key != ROOT_KEY {
        debug!("Root key is {:?}, expected {:?}; decoding anyway.", root_key, ROOT_KEY);
    }

    let shortcuts = decoder.parse_object()?;

    let rest = decoder.remaining();
    if rest != [TAG_END] {
        debug!(
            "{} byte(s) after the shortcuts object (expected a single root terminator).",
            rest.len()
        );
    }

    Ok(Document::from_shortcuts(shortcuts))
}

/// Parses one object body (entries up to and including the `0x08`
/// sentinel) starting at the beginning of `bytes`.
pub fn decode_object(bytes: &[u8]) -> Result<Object, FormatError> {
    Decoder::new(bytes).parse_object()
}

struct Decoder<'a> {
    reader: Cursor<&'a [u8]>,
    depth: usize,
}

impl<'a> Decoder<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            reader: Cursor::new(bytes),
            depth: 0,
        }
    }

    fn position(&self) -> usize {
        self.reader.position() as usize
    }

    fn remaining(&self) -> &'a [u8] {
        let data: &'a [u8] = *self.reader.get_ref();
        &data[self.position().min(data.len())..]
    }

    fn parse_object(&mut self) -> Result<Object, FormatError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(FormatError::NestingTooDeep {
                offset: self.position(),
                limit: MAX_NESTING_DEPTH,
            });
        }
        self.depth += 1;

        let mut obj = Object::new();
        loop {
            let tag_offset = self.position();
            let byte = match self.reader.read_u8() {
                Ok(b) => b,
                Err(_) => {
                    warn!(
                        "Buffer ended at offset {} before the object terminator.",
                        tag_offset
                    );
                    break;
                }
            };
            if byte == TAG_END {
                break;
            }

            let tag = Tag::from_byte(byte).ok_or(FormatError::UnknownTag {
                tag: byte,
                offset: tag_offset,
            })?;
            let key = self.read_cstring()?;
            trace!("{:?} entry {:?} at offset {}", tag, key, tag_offset);

            let value = match tag {
                Tag::Object => Value::Object(self.parse_object()?),
                Tag::Str => Value::Str(self.read_cstring()?),
                Tag::Int32 => Value::Int32(self.read_int32()?),
            };
            obj.insert(key, value);
        }

        self.depth -= 1;
        Ok(obj)
    }

    /// Reads bytes up to the next NUL and consumes the NUL. Invalid UTF-8 is
    /// replaced, never rejected.
    fn read_cstring(&mut self) -> Result<String, FormatError> {
        let offset = self.position();
        let rest = self.remaining();
        let nul = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(FormatError::UnterminatedString { offset })?;
        let s = String::from_utf8_lossy(&rest[..nul]).into_owned();
        self.reader.set_position((offset + nul + 1) as u64);
        Ok(s)
    }

    fn read_int32(&mut self) -> Result<u32, FormatError> {
        let offset = self.position();
        let available = self.remaining().len();
        self.reader
            .read_u32::<LittleEndian>()
            .map_err(|_| FormatError::Truncated { offset, available })
    }
}
