use super::*;

fn palette() -> ChartPalette {
    ChartPalette::from_raw(" #1e293b", "#94a3b8 ", "  #475569  ")
}

#[test]
fn palette_trims_computed_values() {
    let palette = palette();
    assert_eq!(palette.text_primary, "#1e293b");
    assert_eq!(palette.text_light, "#94a3b8");
    assert_eq!(palette.text_secondary, "#475569");
}

#[test]
fn config_is_a_radar_with_six_axes() {
    let config = radar_config(&palette());
    assert_eq!(config["type"], "radar");
    let labels = config["data"]["labels"].as_array().expect("labels array");
    assert_eq!(labels.len(), 6);
    assert_eq!(labels[0], "Public Health Analysis");
    assert_eq!(labels[5], "Clinical Data Interpretation");
}

#[test]
fn config_has_one_dataset_within_scale() {
    let config = radar_config(&palette());
    let datasets = config["data"]["datasets"].as_array().expect("datasets array");
    assert_eq!(datasets.len(), 1);
    let values = datasets[0]["data"].as_array().expect("data array");
    assert_eq!(values.len(), 6);
    assert!(values.iter().all(|v| v.as_u64().is_some_and(|n| n <= 100)));
    assert_eq!(values[0], 90);
}

#[test]
fn scale_is_fixed_zero_to_hundred_step_twenty() {
    let config = radar_config(&palette());
    let r = &config["options"]["scales"]["r"];
    assert_eq!(r["beginAtZero"], true);
    assert_eq!(r["max"], 100);
    assert_eq!(r["ticks"]["stepSize"], 20);
}

#[test]
fn colors_come_from_palette() {
    let config = radar_config(&palette());
    assert_eq!(config["options"]["plugins"]["legend"]["labels"]["color"], "#1e293b");
    assert_eq!(config["options"]["scales"]["r"]["ticks"]["color"], "#94a3b8");
    assert_eq!(config["options"]["scales"]["r"]["pointLabels"]["color"], "#475569");
}

#[test]
fn tooltip_label_appends_expertise() {
    assert_eq!(tooltip_label(90.0), "90% expertise");
    assert_eq!(tooltip_label(87.5), "87.5% expertise");
}
