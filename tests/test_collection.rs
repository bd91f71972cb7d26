//! End-to-end: add and remove shortcuts through a file on disk.

use shortcuts_vdf::shortcuts::{self, find_by_name, NewShortcut};
use shortcuts_vdf::store::{read_document, write_document};
use shortcuts_vdf::{appid, Shortcut, ShortcutDefaults};

#[test]
fn test_add_remove_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config").join("shortcuts.vdf");

    let mut doc = read_document(&path).unwrap();
    assert!(doc.shortcuts().is_empty());

    let ids: Vec<u32> = ["Alpha", "Beta", "Gamma"]
        .iter()
        .map(|name| {
            let exe = format!("/games/{}/start", name.to_lowercase());
            shortcuts::add(doc.shortcuts_mut(), NewShortcut::new(*name, exe))
        })
        .collect();
    write_document(&path, &doc).unwrap();

    let mut reloaded = read_document(&path).unwrap();
    assert_eq!(reloaded, doc);
    assert_eq!(
        reloaded.shortcuts().keys().collect::<Vec<_>>(),
        vec!["0", "1", "2"]
    );
    let (_, beta) = find_by_name(reloaded.shortcuts(), "Beta").unwrap();
    assert_eq!(Shortcut::from_entry(beta).app_id, ids[1]);
    assert_eq!(ids[1], appid::generate("/games/beta/start", "Beta"));

    assert!(shortcuts::remove(reloaded.shortcuts_mut(), "Beta"));
    assert!(!shortcuts::remove(reloaded.shortcuts_mut(), "Beta"));
    write_document(&path, &reloaded).unwrap();

    let after = read_document(&path).unwrap();
    let names: Vec<(String, String)> = shortcuts::entries(after.shortcuts())
        .map(|(key, entry)| (key.to_string(), Shortcut::from_entry(entry).app_name))
        .collect();
    assert_eq!(
        names,
        vec![
            ("0".to_string(), "Alpha".to_string()),
            ("1".to_string(), "Gamma".to_string()),
        ]
    );

    // Next add continues after the compacted keys.
    shortcuts::add(
        reloaded.shortcuts_mut(),
        NewShortcut::new("Delta", "delta").defaults(ShortcutDefaults {
            is_hidden: true,
            ..ShortcutDefaults::default()
        }),
    );
    let (key, delta) = find_by_name(reloaded.shortcuts(), "Delta").unwrap();
    assert_eq!(key, "2");
    let view = Shortcut::from_entry(delta);
    assert!(view.is_hidden);
    assert_eq!(view.start_dir, ".");
}
