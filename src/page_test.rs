use super::*;
use crate::scroll::EntrancePlan;
use crate::theme::MemoryStore;

fn page(store: MemoryStore, system: Option<bool>) -> PageCore<MemoryStore> {
    PageCore::new(PageConfig::default(), store, system, 6)
}

fn sections() -> Vec<SectionBounds> {
    [("home", 0.0), ("about", 700.0), ("skills", 1500.0), ("experience", 2300.0), ("projects", 3100.0), ("contact", 3900.0)]
        .iter()
        .map(|(id, top)| SectionBounds { id: (*id).to_owned(), top: *top })
        .collect()
}

// =============================================================
// Startup / theme
// =============================================================

#[test]
fn init_applies_stored_theme() {
    let mut page = page(MemoryStore::with_value("dark"), Some(false));
    let actions = page.init();
    assert!(actions.contains(&Action::SetDarkMode(true)));
    assert_eq!(page.theme(), Theme::Dark);
}

#[test]
fn init_without_storage_follows_system_and_persists() {
    let mut page = page(MemoryStore::new(), Some(true));
    page.init();
    assert_eq!(page.theme(), Theme::Dark);
    assert_eq!(page.store().load().as_deref(), Some("dark"));
}

#[test]
fn init_defaults_to_light() {
    let mut page = page(MemoryStore::new(), None);
    let actions = page.init();
    assert_eq!(actions, vec![Action::SetDarkMode(false), Action::SetThemeIcon("fas fa-moon")]);
}

#[test]
fn set_theme_forces_value() {
    let mut page = page(MemoryStore::new(), None);
    page.set_theme(Theme::Dark);
    page.set_theme(Theme::Dark);
    assert_eq!(page.theme(), Theme::Dark);
    assert_eq!(page.store().load().as_deref(), Some("dark"));
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn ctrl_d_toggles_theme_and_prevents_default() {
    let mut page = page(MemoryStore::with_value("light"), None);
    page.init();
    let outcome = page.on_key(&Key("d".to_owned()), Modifiers { ctrl: true, meta: false });
    assert!(outcome.prevent_default);
    assert!(outcome.actions.contains(&Action::SetDarkMode(true)));
    assert_eq!(page.store().load().as_deref(), Some("dark"));
}

#[test]
fn escape_closes_open_menu() {
    let mut page = page(MemoryStore::new(), None);
    page.toggle_menu();
    assert_eq!(page.menu(), MenuState::Open);
    let outcome = page.on_key(&Key("Escape".to_owned()), Modifiers::default());
    assert!(!outcome.prevent_default);
    assert_eq!(outcome.actions, vec![Action::SetMenuOpen(false)]);
    assert_eq!(page.menu(), MenuState::Closed);
}

#[test]
fn other_keys_do_nothing() {
    let mut page = page(MemoryStore::new(), None);
    assert_eq!(page.on_key(&Key("a".to_owned()), Modifiers::default()), KeyOutcome::default());
}

// =============================================================
// Menu
// =============================================================

#[test]
fn outside_click_closes_menu() {
    let mut page = page(MemoryStore::new(), None);
    page.toggle_menu();
    assert_eq!(page.on_document_click(ClickTarget::default()), vec![Action::SetMenuOpen(false)]);
    assert_eq!(page.menu(), MenuState::Closed);
}

#[test]
fn click_on_trigger_leaves_menu_to_its_own_handler() {
    let mut page = page(MemoryStore::new(), None);
    page.toggle_menu();
    assert!(page.on_document_click(ClickTarget { in_panel: false, in_trigger: true }).is_empty());
    assert_eq!(page.menu(), MenuState::Open);
}

#[test]
fn resize_past_breakpoint_closes_menu() {
    let mut page = page(MemoryStore::new(), None);
    page.toggle_menu();
    assert!(page.on_resize(600.0).is_empty());
    assert_eq!(page.on_resize(1024.0), vec![Action::SetMenuOpen(false)]);
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn header_scrolled_follows_offset() {
    let mut page = page(MemoryStore::new(), None);
    let sections = sections();
    assert!(page.on_scroll(60.0, &sections).contains(&Action::SetHeaderScrolled(true)));
    assert!(page.is_header_scrolled());
    assert!(page.on_scroll(10.0, &sections).contains(&Action::SetHeaderScrolled(false)));
    assert!(!page.is_header_scrolled());
}

#[test]
fn scroll_past_third_section_marks_it_active() {
    let mut page = page(MemoryStore::new(), None);
    let sections = sections();
    // 100 past the third section's top, still before the fourth's.
    let actions = page.on_scroll(1600.0, &sections);
    assert_eq!(actions.last(), Some(&Action::SetActiveLink(Some("skills".to_owned()))));
    assert_eq!(page.active_section(), Some("skills"));
}

#[test]
fn visible_again_resyncs_active_link() {
    let mut page = page(MemoryStore::new(), None);
    let sections = sections();
    assert!(page.on_visibility_change(true, 800.0, &sections).is_empty());
    assert_eq!(
        page.on_visibility_change(false, 800.0, &sections),
        vec![Action::SetActiveLink(Some("about".to_owned()))]
    );
}

#[test]
fn visibility_notice_names_the_new_state() {
    assert_eq!(visibility_notice(true), "Page hidden");
    assert_eq!(visibility_notice(false), "Page visible");
}

// =============================================================
// Entrance animations
// =============================================================

#[test]
fn section_reveals_once() {
    let mut page = page(MemoryStore::new(), None);
    let first = page.on_section_intersect(2, true, 2);
    assert_eq!(first, vec![Action::RevealSection { index: 2, plan: EntrancePlan::new(2, 80) }]);
    assert_eq!(page.entrance_state(2), Some(EntranceState::Animated));

    assert!(page.on_section_intersect(2, false, 2).is_empty());
    assert!(page.on_section_intersect(2, true, 2).is_empty());
    assert_eq!(page.entrance_state(1), Some(EntranceState::Pending));
}
