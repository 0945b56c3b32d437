//! Static dataset registry for the corpus analysis dashboard.
//!
//! Every value here is a hand-authored research finding from the visual
//! analysis of the Chinese-Spanish didactic corpus. The numbers are fixtures,
//! not computed quantities; nothing in the crate derives or mutates them.

use csscolorparser::Color as CssColor;
use palette::Srgb;

/// The four mutually exclusive display modes of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Color palette frequency analysis
    #[default]
    Palette,
    /// Predominant visual elements
    Elements,
    /// Cultural approach distribution
    Cultural,
    /// Typography evaluation
    Typography,
}

/// All tabs in display order.
pub const ALL_TABS: [Tab; 4] = [Tab::Palette, Tab::Elements, Tab::Cultural, Tab::Typography];

impl Tab {
    /// Label shown in the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Palette => "Paleta de Colores",
            Tab::Elements => "Elementos Visuales",
            Tab::Cultural => "Enfoque Cultural",
            Tab::Typography => "Tipografía",
        }
    }

    /// Heading shown above the panel content.
    pub fn heading(self) -> &'static str {
        match self {
            Tab::Palette => "Análisis de Paleta de Colores",
            Tab::Elements => "Elementos Visuales Predominantes",
            Tab::Cultural => "Enfoques Culturales en el Diseño",
            Tab::Typography => "Análisis Tipográfico",
        }
    }

    /// Position within [`ALL_TABS`].
    pub fn index(self) -> usize {
        match self {
            Tab::Palette => 0,
            Tab::Elements => 1,
            Tab::Cultural => 2,
            Tab::Typography => 3,
        }
    }

    /// Next tab in display order, wrapping around.
    pub fn next(self) -> Tab {
        ALL_TABS[(self.index() + 1) % ALL_TABS.len()]
    }

    /// Previous tab in display order, wrapping around.
    pub fn prev(self) -> Tab {
        ALL_TABS[(self.index() + ALL_TABS.len() - 1) % ALL_TABS.len()]
    }
}

/// Dashboard title and attribution, from the source study.
pub const DASHBOARD_TITLE: &str = "Análisis Visual: Corpus Didáctico Chino-Español";
pub const DASHBOARD_AUTHOR: &str = "Investigación de Javiera Cabezas - Universidad de Chile";

/// One color of the corpus palette with its observed usage frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    /// Observed frequency of use, 0-100.
    pub frequency: u8,
    /// Representative color in #RRGGBB form.
    pub hex: &'static str,
    pub usage: &'static str,
}

/// Color usage frequencies across the corpus. Declaration order is the
/// display order.
pub const PALETTE_USAGE: [PaletteEntry; 7] = [
    PaletteEntry {
        name: "Rojo",
        frequency: 85,
        hex: "#DC2626",
        usage: "Elementos chinos, acentos",
    },
    PaletteEntry {
        name: "Azul",
        frequency: 70,
        hex: "#2563EB",
        usage: "Marcos, elementos estructurales",
    },
    PaletteEntry {
        name: "Rosa/Magenta",
        frequency: 45,
        hex: "#EC4899",
        usage: "Elementos femeninos, decorativos",
    },
    PaletteEntry {
        name: "Amarillo/Naranja",
        frequency: 60,
        hex: "#F59E0B",
        usage: "Acentos, fondos cálidos",
    },
    PaletteEntry {
        name: "Verde",
        frequency: 35,
        hex: "#10B981",
        usage: "Elementos naturales, secundarios",
    },
    PaletteEntry {
        name: "Morado",
        frequency: 30,
        hex: "#8B5CF6",
        usage: "Marcos, elementos decorativos",
    },
    PaletteEntry {
        name: "Blanco/Beige",
        frequency: 95,
        hex: "#F9FAFB",
        usage: "Fondos, espacios negativos",
    },
];

/// One visual element category with its observed frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualElementEntry {
    pub name: &'static str,
    /// Observed frequency of use, 0-100.
    pub frequency: u8,
}

/// Predominant visual elements across the corpus.
pub const VISUAL_ELEMENTS: [VisualElementEntry; 6] = [
    VisualElementEntry {
        name: "Bocadillos de diálogo",
        frequency: 65,
    },
    VisualElementEntry {
        name: "Ilustraciones vectoriales",
        frequency: 80,
    },
    VisualElementEntry {
        name: "Fotografías reales",
        frequency: 25,
    },
    VisualElementEntry {
        name: "Marcos/Bordes",
        frequency: 70,
    },
    VisualElementEntry {
        name: "Iconografía cultural",
        frequency: 40,
    },
    VisualElementEntry {
        name: "Elementos decorativos",
        frequency: 55,
    },
];

/// One cultural design approach with its share of the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CulturalApproachEntry {
    pub name: &'static str,
    /// Share of the corpus, 0-100. The three entries sum to 100.
    pub percentage: u8,
    pub description: &'static str,
}

/// Cultural approach distribution. Percentages sum to 100 (advisory, see
/// the fixture tests).
pub const CULTURAL_APPROACHES: [CulturalApproachEntry; 3] = [
    CulturalApproachEntry {
        name: "Híbrido",
        percentage: 45,
        description: "Mezcla elementos chinos y occidentales",
    },
    CulturalApproachEntry {
        name: "Occidental",
        percentage: 35,
        description: "Estética principalmente occidental",
    },
    CulturalApproachEntry {
        name: "Oriental",
        percentage: 20,
        description: "Elementos tradicionales chinos dominantes",
    },
];

/// One evaluated typography aspect with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypographyAspectEntry {
    pub aspect: &'static str,
    /// Evaluation score, 0-100.
    pub score: u8,
}

/// Typography evaluation scores.
pub const TYPOGRAPHY_SCORES: [TypographyAspectEntry; 6] = [
    TypographyAspectEntry {
        aspect: "Contraste idiomas",
        score: 85,
    },
    TypographyAspectEntry {
        aspect: "Legibilidad",
        score: 90,
    },
    TypographyAspectEntry {
        aspect: "Jerarquía visual",
        score: 75,
    },
    TypographyAspectEntry {
        aspect: "Integración cultural",
        score: 60,
    },
    TypographyAspectEntry {
        aspect: "Modernidad",
        score: 70,
    },
    TypographyAspectEntry {
        aspect: "Funcionalidad",
        score: 95,
    },
];

/// Accent colors used by the cultural distribution chart, one per approach.
pub const SECTION_COLORS: [&str; 3] = ["#DC2626", "#2563EB", "#F59E0B"];

// ----------------------------------------------------------------------------
// Editorial commentary (static strings, not derived from the data)
// ----------------------------------------------------------------------------

pub const PALETTE_INSIGHTS_TITLE: &str = "Insights Clave";
pub const PALETTE_INSIGHTS: [&str; 3] = [
    "El rojo domina como código cultural chino (85% de frecuencia)",
    "El azul proporciona estructura y neutralidad",
    "Paleta limitada pero efectiva para diferenciación idiomática",
];

pub const ELEMENT_OBSERVATIONS_TITLE: &str = "Observaciones";
pub const ELEMENT_OBSERVATIONS: [&str; 3] = [
    "Las ilustraciones vectoriales dominan sobre fotografías (80% vs 25%)",
    "Los bocadillos facilitan la comunicación intercultural",
    "Marcos y bordes estructuran la información eficazmente",
];

pub const CULTURAL_FINDINGS_TITLE: &str = "Hallazgos Culturales";
pub const CULTURAL_FINDINGS: [&str; 3] = [
    "El 45% adopta un enfoque híbrido, ideal para comunicación intercultural",
    "Prevalencia occidental (35%) sugiere adaptación al contexto chileno",
    "Elementos orientales (20%) mantienen autenticidad cultural",
];

pub const TYPOGRAPHY_NOTES_TITLE: &str = "Evaluación Tipográfica";
pub const TYPOGRAPHY_NOTES: [&str; 3] = [
    "Excelente funcionalidad y legibilidad (90-95%)",
    "Fuerte contraste entre idiomas facilita el aprendizaje",
    "Oportunidad de mejora en integración cultural tipográfica",
];

pub const CONCLUSIONS_TITLE: &str = "Conclusiones del Análisis";

pub const STRENGTHS_TITLE: &str = "Fortalezas Identificadas";
pub const STRENGTHS: [&str; 4] = [
    "Código cromático eficaz (rojo = chino)",
    "Alta legibilidad y funcionalidad",
    "Enfoque híbrido culturalmente apropiado",
    "Uso efectivo de elementos visuales",
];

pub const IMPROVEMENTS_TITLE: &str = "Oportunidades de Mejora";
pub const IMPROVEMENTS: [&str; 4] = [
    "Mayor integración de elementos orientales",
    "Explorar tipografías con carácter cultural",
    "Ampliar paleta para mayor riqueza visual",
    "Incorporar más iconografía cultural",
];

/// Parse a color string in any CSS format to sRGB.
pub fn parse_color(input: &str) -> Result<Srgb<u8>, String> {
    let css_color: CssColor = input
        .parse()
        .map_err(|e| format!("Invalid color '{}': {}", input, e))?;
    let [r, g, b, _a] = css_color.to_rgba8();
    Ok(Srgb::new(r, g, b))
}
