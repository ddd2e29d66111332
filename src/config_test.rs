use super::*;

#[test]
fn default_matches_page_constants() {
    let config = PageConfig::default();
    assert_eq!(config.header_scrolled_threshold, 50.0);
    assert_eq!(config.section_header_offset, 100.0);
    assert_eq!(config.nav_breakpoint, 768.0);
    assert_eq!(config.entrance_stagger_ms, 80);
    assert_eq!(config.chart_init_delay_ms, 500);
    assert_eq!(config.spinner_hide_delay_ms, 1200);
}

#[test]
fn partial_json_keeps_defaults_for_missing_fields() {
    let config: PageConfig = serde_json::from_str(r#"{ "nav_breakpoint": 1024.0 }"#).expect("config should parse");
    assert_eq!(config.nav_breakpoint, 1024.0);
    assert_eq!(config.scroll_debounce_ms, 10);
    assert_eq!(config.resize_debounce_ms, 250);
}
