//! Panel renderer tests against an in-memory terminal backend.
//!
//! The renderer is a pure function of the tab value, so each test drives it
//! with a TestBackend and inspects the produced buffer as text.

use corpusvis::data::{
    CULTURAL_APPROACHES, PALETTE_USAGE, TYPOGRAPHY_SCORES, Tab, VISUAL_ELEMENTS,
};
use corpusvis::tui::{Model, draw_panel};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

const WIDTH: u16 = 170;
const HEIGHT: u16 = 45;

fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    let mut out = String::new();
    for (i, cell) in buffer.content.iter().enumerate() {
        out.push_str(cell.symbol());
        if (i + 1) % width == 0 {
            out.push('\n');
        }
    }
    out
}

fn render_tab(tab: Tab) -> String {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).expect("terminal should initialize");
    terminal
        .draw(|frame| draw_panel(frame, frame.area(), tab))
        .expect("draw should succeed");
    buffer_text(terminal.backend().buffer())
}

#[test]
fn palette_panel_shows_all_palette_entries() {
    let text = render_tab(Tab::Palette);
    for entry in &PALETTE_USAGE {
        assert!(text.contains(entry.name), "missing palette entry {}", entry.name);
        assert!(text.contains(entry.usage), "missing usage for {}", entry.name);
    }
    assert!(text.contains("Frecuencia de Uso"));
    assert!(text.contains("Insights Clave"));
}

#[test]
fn palette_panel_excludes_other_datasets() {
    let text = render_tab(Tab::Palette);
    assert!(!text.contains("Bocadillos de diálogo"));
    assert!(!text.contains("Híbrido"));
    assert!(!text.contains("Contraste idiomas"));
}

#[test]
fn elements_panel_shows_all_elements_and_nothing_else() {
    let text = render_tab(Tab::Elements);
    for entry in &VISUAL_ELEMENTS {
        assert!(text.contains(entry.name), "missing element {}", entry.name);
    }
    assert!(text.contains("Observaciones"));

    assert!(!text.contains("Blanco/Beige"));
    assert!(!text.contains("Oriental"));
    assert!(!text.contains("Jerarquía visual"));
}

#[test]
fn cultural_panel_shows_distribution_and_nothing_else() {
    let text = render_tab(Tab::Cultural);
    for entry in &CULTURAL_APPROACHES {
        assert!(text.contains(entry.name), "missing approach {}", entry.name);
        assert!(
            text.contains(entry.description),
            "missing description for {}",
            entry.name
        );
    }
    assert!(text.contains("45%"));
    assert!(text.contains("35%"));
    assert!(text.contains("20%"));
    assert!(text.contains("Hallazgos Culturales"));

    assert!(!text.contains("Morado"));
    assert!(!text.contains("Funcionalidad"));
    assert!(!text.contains("Marcos/Bordes"));
}

#[test]
fn typography_panel_shows_all_aspects_and_nothing_else() {
    let text = render_tab(Tab::Typography);
    for entry in &TYPOGRAPHY_SCORES {
        assert!(text.contains(entry.aspect), "missing aspect {}", entry.aspect);
        assert!(
            text.contains(&format!("{:>3}/100", entry.score)),
            "missing score for {}",
            entry.aspect
        );
    }

    assert!(!text.contains("Blanco/Beige"));
    assert!(!text.contains("Híbrido"));
    assert!(!text.contains("Fotografías reales"));
}

#[test]
fn rendering_is_idempotent() {
    for tab in [Tab::Palette, Tab::Elements, Tab::Cultural, Tab::Typography] {
        assert_eq!(render_tab(tab), render_tab(tab), "render differs for {tab:?}");
    }
}

#[test]
fn initial_mount_renders_palette_panel() {
    let model = Model::new(Tab::default());
    assert_eq!(model.active_tab, Tab::Palette);

    let text = render_tab(model.active_tab);
    assert!(text.contains("Análisis de Paleta de Colores"));
    for entry in &PALETTE_USAGE {
        assert!(text.contains(entry.name));
    }
    assert!(!text.contains("Elementos Visuales Predominantes"));
    assert!(!text.contains("Enfoques Culturales en el Diseño"));
    assert!(!text.contains("Análisis Tipográfico"));
}

#[test]
fn selecting_typography_then_cultural_drops_typography_panel() {
    let mut model = Model::new(Tab::default());
    model.select_tab(Tab::Typography);
    model.select_tab(Tab::Cultural);
    assert_eq!(model.active_tab, Tab::Cultural);

    let text = render_tab(model.active_tab);
    assert!(text.contains("Enfoques Culturales en el Diseño"));
    assert!(!text.contains("Análisis Tipográfico"));
    assert!(!text.contains("Contraste idiomas"));
}
