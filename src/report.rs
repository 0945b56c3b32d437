//! Serializable analysis report for the non-interactive `--dump` mode.
//!
//! The report mirrors the dashboard contents: the four datasets plus the
//! conclusions block, assembled from the constants in [`crate::data`].

use serde::Serialize;

use crate::data;

/// Full analysis report in serializable form.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub title: String,
    pub author: String,
    pub palette: Vec<PaletteRecord>,
    pub visual_elements: Vec<VisualElementRecord>,
    pub cultural_approaches: Vec<CulturalApproachRecord>,
    pub typography: Vec<TypographyRecord>,
    pub conclusions: Conclusions,
}

#[derive(Debug, Serialize)]
pub struct PaletteRecord {
    pub name: String,
    pub frequency: u8,
    pub hex: String,
    pub usage: String,
}

#[derive(Debug, Serialize)]
pub struct VisualElementRecord {
    pub name: String,
    pub frequency: u8,
}

#[derive(Debug, Serialize)]
pub struct CulturalApproachRecord {
    pub name: String,
    pub percentage: u8,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct TypographyRecord {
    pub aspect: String,
    pub score: u8,
}

#[derive(Debug, Serialize)]
pub struct Conclusions {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

impl AnalysisReport {
    /// Assemble the report from the static dataset registry.
    pub fn build() -> Self {
        Self {
            title: data::DASHBOARD_TITLE.to_string(),
            author: data::DASHBOARD_AUTHOR.to_string(),
            palette: data::PALETTE_USAGE
                .iter()
                .map(|e| PaletteRecord {
                    name: e.name.to_string(),
                    frequency: e.frequency,
                    hex: e.hex.to_string(),
                    usage: e.usage.to_string(),
                })
                .collect(),
            visual_elements: data::VISUAL_ELEMENTS
                .iter()
                .map(|e| VisualElementRecord {
                    name: e.name.to_string(),
                    frequency: e.frequency,
                })
                .collect(),
            cultural_approaches: data::CULTURAL_APPROACHES
                .iter()
                .map(|e| CulturalApproachRecord {
                    name: e.name.to_string(),
                    percentage: e.percentage,
                    description: e.description.to_string(),
                })
                .collect(),
            typography: data::TYPOGRAPHY_SCORES
                .iter()
                .map(|e| TypographyRecord {
                    aspect: e.aspect.to_string(),
                    score: e.score,
                })
                .collect(),
            conclusions: Conclusions {
                strengths: data::STRENGTHS.iter().map(|s| s.to_string()).collect(),
                improvements: data::IMPROVEMENTS.iter().map(|s| s.to_string()).collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_mirrors_the_registry() {
        let report = AnalysisReport::build();
        assert_eq!(report.palette.len(), data::PALETTE_USAGE.len());
        assert_eq!(report.visual_elements.len(), data::VISUAL_ELEMENTS.len());
        assert_eq!(
            report.cultural_approaches.len(),
            data::CULTURAL_APPROACHES.len()
        );
        assert_eq!(report.typography.len(), data::TYPOGRAPHY_SCORES.len());
        assert_eq!(report.conclusions.strengths.len(), 4);
        assert_eq!(report.conclusions.improvements.len(), 4);
    }

    #[test]
    fn report_serializes_to_yaml() {
        let report = AnalysisReport::build();
        let yaml = serde_yaml::to_string(&report).unwrap();
        assert!(yaml.contains("Blanco/Beige"));
        assert!(yaml.contains("percentage: 45"));
    }
}
