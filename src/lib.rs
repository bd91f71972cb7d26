// shortcuts-vdf/src/lib.rs

//! Codec for the binary VDF `shortcuts.vdf` format and the collection
//! operations that keep its entries keyed `"0"`, `"1"`, ...
//!
//! ```
//! use shortcuts_vdf::{decode, encode, shortcuts, Document, NewShortcut};
//!
//! let mut doc = Document::new();
//! let app_id = shortcuts::add(doc.shortcuts_mut(), NewShortcut::new("Game", "/opt/game/run.sh"));
//! assert_ne!(app_id & 0x8000_0000, 0);
//!
//! let bytes = encode(&doc);
//! assert_eq!(decode(&bytes).unwrap(), doc);
//! ```

pub mod appid;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod shortcuts;
pub mod store;
pub mod tag;
pub mod value;

pub use crate::config::ShortcutDefaults;
pub use crate::decode::decode;
pub use crate::encode::encode;
pub use crate::error::{FormatError, Result, VdfError};
pub use crate::shortcuts::{NewShortcut, Shortcut};
pub use crate::value::{Document, Object, Value};
