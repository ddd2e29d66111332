use super::*;

fn key(name: &str) -> Key {
    Key(name.to_owned())
}

#[test]
fn escape_closes_menu_regardless_of_modifiers() {
    assert_eq!(shortcut_for(&key("Escape"), Modifiers::default()), Some(Shortcut::CloseMenu));
    assert_eq!(shortcut_for(&key("Escape"), Modifiers { ctrl: true, meta: false }), Some(Shortcut::CloseMenu));
}

#[test]
fn ctrl_or_meta_d_toggles_theme() {
    assert_eq!(shortcut_for(&key("d"), Modifiers { ctrl: true, meta: false }), Some(Shortcut::ToggleTheme));
    assert_eq!(shortcut_for(&key("d"), Modifiers { ctrl: false, meta: true }), Some(Shortcut::ToggleTheme));
}

#[test]
fn plain_d_is_not_a_shortcut() {
    assert_eq!(shortcut_for(&key("d"), Modifiers::default()), None);
}

#[test]
fn uppercase_d_is_not_matched() {
    assert_eq!(shortcut_for(&key("D"), Modifiers { ctrl: true, meta: false }), None);
}

#[test]
fn only_theme_toggle_prevents_default() {
    assert!(Shortcut::ToggleTheme.prevents_default());
    assert!(!Shortcut::CloseMenu.prevents_default());
}
