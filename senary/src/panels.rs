//! Headless three-panel synchronisation
//!
//! One panel per measurement system, all showing the same quantity in the
//! currently selected dimension. Editing a panel re-renders the other two.

use serde::Serialize;
use tracing::{debug, warn};
use senary_core::{codes, SenaryError};
use senary_numeral::encode;
use senary_plugin::DEFAULT_SEXIMAL_PRECISION;
use senary_units::{convert, default_unit, parse_value, unit, ConversionError, Dimension, MeasurementSystem};

/// Text shown in a target panel whose conversion failed
pub const ERROR_TEXT: &str = "Error";

/// Significant digits in rendered decimal values
const DECIMAL_SIGNIFICANT_DIGITS: usize = 8;

/// Plain notation covers `[EXPONENT_BELOW, EXPONENT_FROM)`
const EXPONENT_BELOW: f64 = 1e-6;
const EXPONENT_FROM: f64 = 1e21;

/// The state of one system's panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub system: MeasurementSystem,
    pub unit: String,
    pub text: String,
}

/// What an edit did to the panels
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Empty input; every panel was cleared
    Cleared,
    /// The source text could not be parsed; only the source panel changed
    SourceOnly(SenaryError),
    /// Target panels were re-rendered; `failures` of them show `"Error"`
    Synced { failures: usize },
}

#[derive(Debug, Clone, Serialize)]
pub struct Panels {
    dimension: Dimension,
    active: MeasurementSystem,
    panels: [Panel; 3],
    #[serde(skip)]
    precision: u32,
}

fn slot(system: MeasurementSystem) -> usize {
    match system {
        MeasurementSystem::Si => 0,
        MeasurementSystem::Us => 1,
        MeasurementSystem::Seximal => 2,
    }
}

fn seed(dimension: Dimension) -> [Panel; 3] {
    MeasurementSystem::ALL.map(|system| Panel {
        system,
        unit: default_unit(dimension, system).unwrap_or_default(),
        text: String::new(),
    })
}

impl Panels {
    /// Panels for `dimension` with default units, empty texts and SI active
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            active: MeasurementSystem::Si,
            panels: seed(dimension),
            precision: DEFAULT_SEXIMAL_PRECISION,
        }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The panel most recently edited
    pub fn active(&self) -> MeasurementSystem {
        self.active
    }

    pub fn panel(&self, system: MeasurementSystem) -> &Panel {
        &self.panels[slot(system)]
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Switch dimension: default units again, all texts cleared
    pub fn set_dimension(&mut self, dimension: Dimension) {
        debug!(dimension = %dimension, "dimension changed");
        self.dimension = dimension;
        self.panels = seed(dimension);
    }

    /// Replace the text of one panel and propagate it to the others
    pub fn edit(&mut self, system: MeasurementSystem, text: &str) -> EditOutcome {
        self.active = system;

        if text.is_empty() {
            for panel in &mut self.panels {
                panel.text.clear();
            }
            return EditOutcome::Cleared;
        }

        self.panels[slot(system)].text = text.to_string();
        self.sync_from(system)
    }

    /// Select a unit for one panel; re-syncs from the active panel when it holds text
    pub fn select_unit(&mut self, system: MeasurementSystem, unit_key: &str) -> Result<Option<EditOutcome>, ConversionError> {
        let definition = unit(self.dimension, system, unit_key)?;
        self.panels[slot(system)].unit = definition.key.into_owned();

        if self.panel(self.active).text.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.sync_from(self.active)))
    }

    fn sync_from(&mut self, source: MeasurementSystem) -> EditOutcome {
        let source_panel = &self.panels[slot(source)];
        let value = match parse_value(&source_panel.text, source) {
            Ok(v) => v,
            Err(e) => {
                debug!(system = %source, text = %source_panel.text, error = %e, "source not parseable");
                return EditOutcome::SourceOnly(e.into());
            }
        };
        let source_unit = source_panel.unit.clone();

        let mut failures = 0;
        for target in MeasurementSystem::ALL {
            if target == source {
                continue;
            }
            let target_unit = self.panels[slot(target)].unit.clone();
            let rendered = convert(value, self.dimension, &source_unit, source, &target_unit, target)
                .map_err(SenaryError::from)
                .and_then(|v| self.render(v, target));

            self.panels[slot(target)].text = match rendered {
                Ok(text) => text,
                Err(e) => {
                    warn!(
                        dimension = %self.dimension,
                        from = %source,
                        to = %target,
                        error = %e,
                        "conversion error"
                    );
                    failures += 1;
                    ERROR_TEXT.to_string()
                }
            };
        }
        EditOutcome::Synced { failures }
    }

    fn render(&self, value: f64, system: MeasurementSystem) -> Result<String, SenaryError> {
        if !value.is_finite() {
            return Err(SenaryError::new(codes::NON_FINITE, "Conversion result is not a finite number"));
        }
        if system.is_seximal() {
            Ok(encode(value, self.precision)?)
        } else {
            Ok(format_decimal(value))
        }
    }
}

/// Eight significant digits, then the shortest representation of that value.
/// Magnitudes of 1e21 and above or below 1e-6 use exponent notation.
pub fn format_decimal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let rounded: f64 = format!("{:.*e}", DECIMAL_SIGNIFICANT_DIGITS - 1, value)
        .parse()
        .unwrap_or(value);
    let magnitude = rounded.abs();
    if (EXPONENT_BELOW..EXPONENT_FROM).contains(&magnitude) {
        rounded.to_string()
    } else {
        format!("{:e}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(328.0839895013123), "328.08399");
        assert_eq!(format_decimal(32.0), "32");
        assert_eq!(format_decimal(0.1 + 0.2), "0.3");
        assert_eq!(format_decimal(-0.0), "0");
        assert_eq!(format_decimal(123456789.0), "123456790");
    }

    #[test]
    fn test_format_decimal_extremes_use_exponent() {
        assert_eq!(format_decimal(1e300), "1e300");
        assert_eq!(format_decimal(-1.234567891e25), "-1.2345679e25");
        assert_eq!(format_decimal(1.23456789e-7), "1.2345679e-7");
        assert_eq!(format_decimal(1e-6), "0.000001");
        assert_eq!(format_decimal(1e20), "100000000000000000000");
    }

    #[test]
    fn test_new_seeds_default_units() {
        let panels = Panels::new(Dimension::Length);
        assert_eq!(panels.panel(MeasurementSystem::Si).unit, "meter");
        assert_eq!(panels.panel(MeasurementSystem::Us).unit, "inch");
        assert_eq!(panels.panel(MeasurementSystem::Seximal).unit, "thumb");
        assert!(panels.panels().iter().all(|p| p.text.is_empty()));
        assert_eq!(panels.active(), MeasurementSystem::Si);
    }

    #[test]
    fn test_edit_syncs_other_panels() {
        let mut panels = Panels::new(Dimension::Temperature);
        let outcome = panels.edit(MeasurementSystem::Si, "35");
        assert_eq!(outcome, EditOutcome::Synced { failures: 0 });
        // 35 °C = 95 °F = 35 celce = "55" in base 6
        assert_eq!(panels.panel(MeasurementSystem::Us).text, "95");
        assert_eq!(panels.panel(MeasurementSystem::Seximal).text, "55");
    }

    #[test]
    fn test_edit_from_seximal() {
        let mut panels = Panels::new(Dimension::Length);
        panels.select_unit(MeasurementSystem::Us, "inch").unwrap();
        panels.edit(MeasurementSystem::Seximal, "1");
        assert_eq!(panels.active(), MeasurementSystem::Seximal);
        assert_eq!(panels.panel(MeasurementSystem::Us).text, "2.29867");
        assert_eq!(panels.panel(MeasurementSystem::Si).text, "0.058386218");
    }

    #[test]
    fn test_invalid_source_updates_only_source() {
        let mut panels = Panels::new(Dimension::Temperature);
        panels.edit(MeasurementSystem::Si, "35");

        let outcome = panels.edit(MeasurementSystem::Seximal, "56");
        assert!(matches!(outcome, EditOutcome::SourceOnly(_)));
        assert_eq!(panels.panel(MeasurementSystem::Seximal).text, "56");
        // siblings keep their last good values
        assert_eq!(panels.panel(MeasurementSystem::Si).text, "35");
        assert_eq!(panels.panel(MeasurementSystem::Us).text, "95");

        let outcome = panels.edit(MeasurementSystem::Us, "abc");
        assert!(matches!(outcome, EditOutcome::SourceOnly(_)));
    }

    #[test]
    fn test_empty_edit_clears_everything() {
        let mut panels = Panels::new(Dimension::Mass);
        panels.edit(MeasurementSystem::Si, "1");
        assert_eq!(panels.edit(MeasurementSystem::Us, ""), EditOutcome::Cleared);
        assert!(panels.panels().iter().all(|p| p.text.is_empty()));
    }

    #[test]
    fn test_select_unit_resyncs_active_panel() {
        let mut panels = Panels::new(Dimension::Length);
        panels.edit(MeasurementSystem::Si, "100");

        let outcome = panels.select_unit(MeasurementSystem::Us, "foot").unwrap();
        assert_eq!(outcome, Some(EditOutcome::Synced { failures: 0 }));
        assert_eq!(panels.panel(MeasurementSystem::Us).text, "328.08399");
        assert_eq!(panels.panel(MeasurementSystem::Si).text, "100");

        assert!(panels.select_unit(MeasurementSystem::Us, "furlong").is_err());
        assert_eq!(panels.panel(MeasurementSystem::Us).unit, "foot");
    }

    #[test]
    fn test_select_unit_without_text() {
        let mut panels = Panels::new(Dimension::Length);
        let outcome = panels.select_unit(MeasurementSystem::Seximal, "KILA-thumb").unwrap();
        assert_eq!(outcome, None);
        assert_eq!(panels.panel(MeasurementSystem::Seximal).unit, "kila-thumb");
    }

    #[test]
    fn test_failed_target_is_isolated() {
        let mut panels = Panels::new(Dimension::Length);
        panels.select_unit(MeasurementSystem::Us, "mile").unwrap();
        // in thumbs the value overflows to infinity; in miles it does not
        let outcome = panels.edit(MeasurementSystem::Si, "1e308");
        assert_eq!(outcome, EditOutcome::Synced { failures: 1 });
        assert_eq!(panels.panel(MeasurementSystem::Seximal).text, ERROR_TEXT);
        assert_ne!(panels.panel(MeasurementSystem::Us).text, ERROR_TEXT);
    }

    #[test]
    fn test_set_dimension_resets() {
        let mut panels = Panels::new(Dimension::Length);
        panels.edit(MeasurementSystem::Si, "5");
        panels.set_dimension(Dimension::Power);
        assert_eq!(panels.dimension(), Dimension::Power);
        assert_eq!(panels.panel(MeasurementSystem::Us).unit, "horsepower");
        assert!(panels.panels().iter().all(|p| p.text.is_empty()));
    }
}
