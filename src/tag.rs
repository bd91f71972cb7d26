// shortcuts-vdf/src/tag.rs

//! Type-tag bytes of the binary VDF format.
//!
//! Every entry inside an object starts with one tag byte naming the kind of
//! value that follows its key. A lone `0x08` closes the enclosing object.

pub const TAG_OBJECT: u8 = 0x00;
pub const TAG_STRING: u8 = 0x01;
pub const TAG_INT32: u8 = 0x02;
pub const TAG_END: u8 = 0x08;

/// Key of the single child of the synthetic root object.
pub const ROOT_KEY: &str = "shortcuts";

/// A value-bearing tag. The end sentinel is not a `Tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Tag {
    Object = TAG_OBJECT,
    Str = TAG_STRING,
    Int32 = TAG_INT32,
}

impl Tag {
    /// Maps a raw byte to a tag. Returns `None` for the sentinel and for
    /// any byte outside the closed set.
    #[inline]
    #[must_use]
    pub const fn from_byte(b: u8) -> Option<Self> {
        match b {
            TAG_OBJECT => Some(Tag::Object),
            TAG_STRING => Some(Tag::Str),
            TAG_INT32 => Some(Tag::Int32),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte() {
        assert_eq!(Tag::from_byte(0x00), Some(Tag::Object));
        assert_eq!(Tag::from_byte(0x01), Some(Tag::Str));
        assert_eq!(Tag::from_byte(0x02), Some(Tag::Int32));
        assert_eq!(Tag::from_byte(TAG_END), None);
        assert_eq!(Tag::from_byte(0x07), None);
    }

    #[test]
    fn test_byte_matches_constants() {
        assert_eq!(Tag::Object.byte(), TAG_OBJECT);
        assert_eq!(Tag::Str.byte(), TAG_STRING);
        assert_eq!(Tag::Int32.byte(), TAG_INT32);
    }
}
