// shortcuts-vdf/src/shortcuts.rs

//! Operations on the shortcut collection: the object under `"shortcuts"`
//! whose keys are positional (`"0"`, `"1"`, ...) and whose values are
//! shortcut entries. `AppName` is the human-facing identity of an entry.

use std::path::{Component, Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::appid;
use crate::config::ShortcutDefaults;
use crate::value::{Object, Value};

pub const FIELD_APP_ID: &str = "appid";
pub const FIELD_APP_NAME: &str = "AppName";
pub const FIELD_EXE: &str = "Exe";
pub const FIELD_START_DIR: &str = "StartDir";
pub const FIELD_ICON: &str = "icon";
pub const FIELD_SHORTCUT_PATH: &str = "ShortcutPath";
pub const FIELD_LAUNCH_OPTIONS: &str = "LaunchOptions";
pub const FIELD_IS_HIDDEN: &str = "IsHidden";
pub const FIELD_ALLOW_DESKTOP_CONFIG: &str = "AllowDesktopConfig";
pub const FIELD_ALLOW_OVERLAY: &str = "AllowOverlay";
pub const FIELD_OPEN_VR: &str = "OpenVR";
pub const FIELD_DEVKIT: &str = "Devkit";
pub const FIELD_DEVKIT_GAME_ID: &str = "DevkitGameID";
pub const FIELD_DEVKIT_OVERRIDE_APP_ID: &str = "DevkitOverrideAppID";
pub const FIELD_LAST_PLAY_TIME: &str = "LastPlayTime";
pub const FIELD_FLATPAK_APP_ID: &str = "FlatpakAppID";
pub const FIELD_TAGS: &str = "tags";

/// Request to add one shortcut. Optional parts default to empty strings and
/// the start directory defaults to the parent of `exe_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortcut {
    pub app_name: String,
    pub exe_path: String,
    pub start_dir: Option<String>,
    pub launch_options: String,
    pub icon: String,
    pub defaults: ShortcutDefaults,
}

impl NewShortcut {
    pub fn new(app_name: impl Into<String>, exe_path: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            exe_path: exe_path.into(),
            start_dir: None,
            launch_options: String::new(),
            icon: String::new(),
            defaults: ShortcutDefaults::default(),
        }
    }

    pub fn start_dir(mut self, dir: impl Into<String>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }

    pub fn launch_options(mut self, options: impl Into<String>) -> Self {
        self.launch_options = options.into();
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn defaults(mut self, defaults: ShortcutDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    fn to_entry(&self, app_id: u32) -> Object {
        let start_dir = self
            .start_dir
            .clone()
            .unwrap_or_else(|| parent_dir(&self.exe_path));
        let flag = |b: bool| u32::from(b);

        let mut entry = Object::new();
        entry.insert(FIELD_APP_ID, app_id);
        entry.insert(FIELD_APP_NAME, self.app_name.as_str());
        entry.insert(FIELD_EXE, quote(&self.exe_path));
        entry.insert(FIELD_START_DIR, quote(&start_dir));
        entry.insert(FIELD_ICON, self.icon.as_str());
        entry.insert(FIELD_SHORTCUT_PATH, "");
        entry.insert(FIELD_LAUNCH_OPTIONS, self.launch_options.as_str());
        entry.insert(FIELD_IS_HIDDEN, flag(self.defaults.is_hidden));
        entry.insert(FIELD_ALLOW_DESKTOP_CONFIG, flag(self.defaults.allow_desktop_config));
        entry.insert(FIELD_ALLOW_OVERLAY, flag(self.defaults.allow_overlay));
        entry.insert(FIELD_OPEN_VR, flag(self.defaults.open_vr));
        entry.insert(FIELD_DEVKIT, flag(self.defaults.devkit));
        entry.insert(FIELD_DEVKIT_GAME_ID, "");
        entry.insert(FIELD_DEVKIT_OVERRIDE_APP_ID, 0u32);
        entry.insert(FIELD_LAST_PLAY_TIME, 0u32);
        entry.insert(FIELD_FLATPAK_APP_ID, "");
        entry.insert(FIELD_TAGS, Object::new());
        entry
    }
}

/// Object-valued entries of the collection, in order.
pub fn entries(collection: &Object) -> impl Iterator<Item = (&str, &Object)> {
    collection
        .iter()
        .filter_map(|(key, value)| value.as_object().map(|entry| (key, entry)))
}

/// First entry whose `AppName` equals `name` exactly.
pub fn find_by_name<'a>(collection: &'a Object, name: &str) -> Option<(&'a str, &'a Object)> {
    entries(collection).find(|(_, entry)| entry.get_str(FIELD_APP_NAME) == Some(name))
}

/// One past the largest all-digit key, or `"0"` for a collection without any.
///
/// Keys are compared and incremented as decimal strings, so a key of any
/// length yields a fresh successor instead of overflowing.
pub fn next_key(collection: &Object) -> String {
    collection
        .keys()
        .filter(|key| !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()))
        .map(|key| key.trim_start_matches('0'))
        .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
        .map(increment_decimal)
        .unwrap_or_else(|| "0".to_string())
}

/// Adds one to a decimal digit string without leading zeros ("" is zero).
fn increment_decimal(digits: &str) -> String {
    let mut out = digits.as_bytes().to_vec();
    for b in out.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&out).into_owned();
        }
    }
    out.insert(0, b'1');
    String::from_utf8_lossy(&out).into_owned()
}

/// Appends a new entry at [`next_key`] and returns its generated app ID.
/// Existing entries are left untouched and no name deduplication happens.
pub fn add(collection: &mut Object, shortcut: NewShortcut) -> u32 {
    let key = next_key(collection);
    let app_id = appid::generate(&shortcut.exe_path, &shortcut.app_name);
    debug!(
        "Adding shortcut {:?} at key {} with app id {:#010x}",
        shortcut.app_name, key, app_id
    );
    collection.insert(key, shortcut.to_entry(app_id));
    app_id
}

/// Removes the first entry named `app_name` and rekeys the survivors
/// `"0"..n` in their original order. Returns false, without touching the
/// collection, when no entry has that name.
pub fn remove(collection: &mut Object, app_name: &str) -> bool {
    let Some(pos) = find_by_name(collection, app_name).and_then(|(key, _)| collection.position(key))
    else {
        return false;
    };

    let entries = collection.entries_mut();
    entries.remove(pos);
    for (index, (key, _)) in entries.iter_mut().enumerate() {
        *key = index.to_string();
    }
    debug!(
        "Removed shortcut {:?}; {} shortcut(s) remain",
        app_name,
        entries.len()
    );
    true
}

/// Parent directory of `exe_path` with POSIX path semantics: a bare file
/// name gives `"."`, the root gives itself, and repeated separators or `.`
/// components are collapsed.
pub fn parent_dir(exe_path: &str) -> String {
    let mut components: Vec<Component<'_>> = Path::new(exe_path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if matches!(
        components.last(),
        Some(Component::Normal(_) | Component::ParentDir)
    ) {
        components.pop();
    }
    if components.is_empty() {
        return ".".to_string();
    }
    components
        .into_iter()
        .collect::<PathBuf>()
        .to_string_lossy()
        .into_owned()
}

fn quote(s: &str) -> String {
    format!("\"{s}\"")
}

fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(s)
}

/// Typed, read-only view of a shortcut entry.
///
/// `exe` and `start_dir` are unquoted. Missing or mistyped fields read as
/// the schema defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    pub app_id: u32,
    pub app_name: String,
    pub exe: String,
    pub start_dir: String,
    pub icon: String,
    pub shortcut_path: String,
    pub launch_options: String,
    pub is_hidden: bool,
    pub allow_desktop_config: bool,
    pub allow_overlay: bool,
    pub open_vr: bool,
    pub devkit: bool,
    pub devkit_game_id: String,
    pub devkit_override_app_id: u32,
    pub last_play_time: u32,
    pub flatpak_app_id: String,
    pub tags: Vec<String>,
}

impl Shortcut {
    pub fn from_entry(entry: &Object) -> Self {
        let text = |field: &str| entry.get_str(field).unwrap_or_default().to_string();
        let number = |field: &str| entry.get_u32(field).unwrap_or(0);
        let flag = |field: &str, default: bool| {
            entry.get_u32(field).map(|n| n != 0).unwrap_or(default)
        };
        let defaults = ShortcutDefaults::default();

        let tags = entry
            .get(FIELD_TAGS)
            .and_then(Value::as_object)
            .map(|tags| {
                tags.iter()
                    .filter_map(|(_, v)| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        Shortcut {
            app_id: number(FIELD_APP_ID),
            app_name: text(FIELD_APP_NAME),
            exe: unquote(entry.get_str(FIELD_EXE).unwrap_or_default()).to_string(),
            start_dir: unquote(entry.get_str(FIELD_START_DIR).unwrap_or_default()).to_string(),
            icon: text(FIELD_ICON),
            shortcut_path: text(FIELD_SHORTCUT_PATH),
            launch_options: text(FIELD_LAUNCH_OPTIONS),
            is_hidden: flag(FIELD_IS_HIDDEN, defaults.is_hidden),
            allow_desktop_config: flag(FIELD_ALLOW_DESKTOP_CONFIG, defaults.allow_desktop_config),
            allow_overlay: flag(FIELD_ALLOW_OVERLAY, defaults.allow_overlay),
            open_vr: flag(FIELD_OPEN_VR, defaults.open_vr),
            devkit: flag(FIELD_DEVKIT, defaults.devkit),
            devkit_game_id: text(FIELD_DEVKIT_GAME_ID),
            devkit_override_app_id: number(FIELD_DEVKIT_OVERRIDE_APP_ID),
            last_play_time: number(FIELD_LAST_PLAY_TIME),
            flatpak_app_id: text(FIELD_FLATPAK_APP_ID),
            tags,
        }
    }
}
