//! Fixture tests for the static dataset registry.

use corpusvis::data::{
    ALL_TABS, CULTURAL_APPROACHES, PALETTE_USAGE, SECTION_COLORS, TYPOGRAPHY_SCORES, Tab,
    VISUAL_ELEMENTS, parse_color,
};

#[test]
fn dataset_cardinalities_are_fixed() {
    assert_eq!(PALETTE_USAGE.len(), 7);
    assert_eq!(VISUAL_ELEMENTS.len(), 6);
    assert_eq!(CULTURAL_APPROACHES.len(), 3);
    assert_eq!(TYPOGRAPHY_SCORES.len(), 6);
}

#[test]
fn cultural_percentages_are_45_35_20_and_sum_to_100() {
    let percentages: Vec<u8> = CULTURAL_APPROACHES.iter().map(|e| e.percentage).collect();
    assert_eq!(percentages, vec![45, 35, 20]);
    assert_eq!(percentages.iter().map(|p| u32::from(*p)).sum::<u32>(), 100);
}

#[test]
fn blanco_beige_is_palette_maximum() {
    let entry = PALETTE_USAGE
        .iter()
        .find(|e| e.name == "Blanco/Beige")
        .expect("Blanco/Beige should be in the palette");
    assert_eq!(entry.frequency, 95);

    let max = PALETTE_USAGE.iter().map(|e| e.frequency).max().unwrap();
    assert_eq!(max, entry.frequency);
}

#[test]
fn morado_is_palette_minimum() {
    let entry = PALETTE_USAGE
        .iter()
        .find(|e| e.name == "Morado")
        .expect("Morado should be in the palette");
    assert_eq!(entry.frequency, 30);

    let min = PALETTE_USAGE.iter().map(|e| e.frequency).min().unwrap();
    assert_eq!(min, entry.frequency);
}

#[test]
fn palette_declaration_order_is_preserved() {
    assert_eq!(PALETTE_USAGE[0].name, "Rojo");
    assert_eq!(PALETTE_USAGE[6].name, "Blanco/Beige");
}

#[test]
fn all_fixture_colors_parse() {
    for entry in &PALETTE_USAGE {
        parse_color(entry.hex)
            .unwrap_or_else(|e| panic!("palette color {} should parse: {e}", entry.hex));
    }
    for hex in SECTION_COLORS {
        parse_color(hex).unwrap_or_else(|e| panic!("section color {hex} should parse: {e}"));
    }
}

#[test]
fn all_values_are_percentages() {
    assert!(PALETTE_USAGE.iter().all(|e| e.frequency <= 100));
    assert!(VISUAL_ELEMENTS.iter().all(|e| e.frequency <= 100));
    assert!(CULTURAL_APPROACHES.iter().all(|e| e.percentage <= 100));
    assert!(TYPOGRAPHY_SCORES.iter().all(|e| e.score <= 100));
}

#[test]
fn tab_cycle_covers_all_tabs_in_order() {
    assert_eq!(Tab::default(), Tab::Palette);
    assert_eq!(
        ALL_TABS,
        [Tab::Palette, Tab::Elements, Tab::Cultural, Tab::Typography]
    );

    let mut tab = Tab::Palette;
    for expected in ALL_TABS.iter().skip(1) {
        tab = tab.next();
        assert_eq!(tab, *expected);
    }
    assert_eq!(tab.next(), Tab::Palette);
    assert_eq!(Tab::Palette.prev(), Tab::Typography);
}

#[test]
fn tab_labels_match_source_dashboard() {
    assert_eq!(Tab::Palette.label(), "Paleta de Colores");
    assert_eq!(Tab::Elements.label(), "Elementos Visuales");
    assert_eq!(Tab::Cultural.label(), "Enfoque Cultural");
    assert_eq!(Tab::Typography.label(), "Tipografía");
}
