use donut_widgets::core::{ChartInput, ColorResolver, build_slices, fallback_color, label_hue};
use indexmap::IndexMap;

#[test]
fn status_colors_override_without_consuming_palette_slot() {
    let input = ChartInput::new()
        .with_data([("A", 10), ("B", 20)])
        .with_status_colors([("A", "#FF0000")])
        .with_default_colors(["#00FF00", "#0000FF"]);
    let slices = build_slices(&input);

    assert_eq!(slices[0].color, "#FF0000");
    assert_eq!(slices[1].color, "#00FF00");
}

#[test]
fn default_colors_cycle_in_encounter_order() {
    let input = ChartInput::new()
        .with_data([("A", 10), ("B", 20), ("C", 30)])
        .with_default_colors(["#111", "#222"]);
    let colors: Vec<String> = build_slices(&input).into_iter().map(|s| s.color).collect();

    assert_eq!(colors, ["#111", "#222", "#111"]);
}

#[test]
fn filtered_out_labels_do_not_advance_palette() {
    let input = ChartInput::new()
        .with_data([("A", 0), ("B", 5), ("C", 5)])
        .with_default_colors(["#111", "#222"]);
    let colors: Vec<String> = build_slices(&input).into_iter().map(|s| s.color).collect();

    assert_eq!(colors, ["#111", "#222"]);
}

#[test]
fn empty_palette_falls_back_to_generated_color() {
    let input = ChartInput::new()
        .with_data([("Only", 10)])
        .with_default_colors(Vec::<String>::new());
    let slices = build_slices(&input);

    assert_eq!(slices[0].color, fallback_color("Only"));
}

#[test]
fn fallback_color_is_pinned_per_label() {
    let input = ChartInput::new().with_data([("Only", 10)]);
    let first = build_slices(&input);
    let second = build_slices(&input.clone());

    assert_eq!(first[0].color, second[0].color);
    assert_eq!(first[0].color, "hsl(205, 70%, 55%)");
    assert_eq!(fallback_color("Completed"), "hsl(90, 70%, 55%)");
}

#[test]
fn fallback_colors_are_hsl_with_fixed_saturation_and_lightness() {
    for label in ["North", "South", "East", "West", ""] {
        let color = fallback_color(label);
        assert!(color.starts_with("hsl("));
        assert!(color.ends_with(", 70%, 55%)"));
        assert!(label_hue(label) < 360);
    }
}

#[test]
fn status_color_hits_mixed_with_fallback() {
    let status: IndexMap<String, String> =
        [("B".to_owned(), "#abc".to_owned())].into_iter().collect();
    let mut resolver = ColorResolver::new(Some(&status), None);

    assert_eq!(resolver.resolve("B"), "#abc");
    assert_eq!(resolver.resolve("A"), fallback_color("A"));
    assert_eq!(resolver.palette_cursor(), 0);
}

#[test]
fn palette_cursor_advances_only_on_palette_hits() {
    let status: IndexMap<String, String> =
        [("X".to_owned(), "#000".to_owned())].into_iter().collect();
    let palette = vec!["#1".to_owned(), "#2".to_owned()];
    let mut resolver = ColorResolver::new(Some(&status), Some(palette.as_slice()));

    assert_eq!(resolver.resolve("A"), "#1");
    assert_eq!(resolver.resolve("X"), "#000");
    assert_eq!(resolver.resolve("B"), "#2");
    assert_eq!(resolver.resolve("C"), "#1");
    assert_eq!(resolver.palette_cursor(), 3);
}
