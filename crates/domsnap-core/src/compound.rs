//! Compound component synthesis.
//!
//! Some controls (date pickers, sliders, media players) are one DOM element
//! but several logical sub-controls. We synthesize those sub-components and
//! attach them to the owning node for richer description, without altering
//! the real tree shape.

use std::collections::HashMap;
use std::fmt;

/// A synthesized sub-control of a compound element.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundComponent {
    pub role: String,
    pub name: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl CompoundComponent {
    fn new(role: &str, name: &str) -> Self {
        Self {
            role: role.to_string(),
            name: name.to_string(),
            min: None,
            max: None,
        }
    }

    fn ranged(role: &str, name: &str, min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::new(role, name)
        }
    }
}

impl fmt::Display for CompoundComponent {
    /// Compact `role:name[:min-max]` form used in serialized output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.role, self.name)?;
        if let (Some(min), Some(max)) = (self.min, self.max) {
            write!(f, ":{}-{}", format_num(min), format_num(max))?;
        }
        Ok(())
    }
}

fn format_num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Parse a numeric attribute, falling back to a default when missing or
/// unparseable.
pub fn parse_numeric_attribute(attributes: &HashMap<String, String>, name: &str, default: f64) -> f64 {
    attributes
        .get(name)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(default)
}

/// Synthesize sub-components for a fixed set of tags and input types.
/// Returns an empty vec for everything else.
pub fn synthesize(tag_name: &str, attributes: &HashMap<String, String>) -> Vec<CompoundComponent> {
    match tag_name {
        "input" => {
            let input_type = attributes
                .get("type")
                .map(|t| t.to_ascii_lowercase())
                .unwrap_or_default();
            synthesize_input(&input_type, attributes)
        }
        "select" => vec![
            CompoundComponent::new("combobox", "value"),
            CompoundComponent::new("button", "open"),
        ],
        "details" => vec![CompoundComponent::new("button", "toggle")],
        "audio" | "video" => vec![
            CompoundComponent::new("button", "play"),
            CompoundComponent::ranged("slider", "seek", 0.0, 100.0),
            CompoundComponent::new("button", "mute"),
        ],
        _ => Vec::new(),
    }
}

fn synthesize_input(
    input_type: &str,
    attributes: &HashMap<String, String>,
) -> Vec<CompoundComponent> {
    match input_type {
        "date" => vec![
            CompoundComponent::ranged("spinbutton", "day", 1.0, 31.0),
            CompoundComponent::ranged("spinbutton", "month", 1.0, 12.0),
            CompoundComponent::ranged("spinbutton", "year", 1.0, 275760.0),
        ],
        "datetime-local" => vec![
            CompoundComponent::ranged("spinbutton", "day", 1.0, 31.0),
            CompoundComponent::ranged("spinbutton", "month", 1.0, 12.0),
            CompoundComponent::ranged("spinbutton", "year", 1.0, 275760.0),
            CompoundComponent::ranged("spinbutton", "hour", 0.0, 23.0),
            CompoundComponent::ranged("spinbutton", "minute", 0.0, 59.0),
        ],
        "time" => vec![
            CompoundComponent::ranged("spinbutton", "hour", 0.0, 23.0),
            CompoundComponent::ranged("spinbutton", "minute", 0.0, 59.0),
        ],
        "month" => vec![
            CompoundComponent::ranged("spinbutton", "month", 1.0, 12.0),
            CompoundComponent::ranged("spinbutton", "year", 1.0, 275760.0),
        ],
        "week" => vec![
            CompoundComponent::ranged("spinbutton", "week", 1.0, 53.0),
            CompoundComponent::ranged("spinbutton", "year", 1.0, 275760.0),
        ],
        "range" => {
            let min = parse_numeric_attribute(attributes, "min", 0.0);
            let max = parse_numeric_attribute(attributes, "max", 100.0);
            vec![CompoundComponent::ranged("slider", "value", min, max)]
        }
        "number" => {
            let min = parse_numeric_attribute(attributes, "min", f64::NEG_INFINITY);
            let max = parse_numeric_attribute(attributes, "max", f64::INFINITY);
            let mut component = CompoundComponent::new("spinbutton", "value");
            if min.is_finite() && max.is_finite() {
                component.min = Some(min);
                component.max = Some(max);
            }
            vec![component]
        }
        "color" => vec![CompoundComponent::new("button", "color-picker")],
        "file" => vec![CompoundComponent::new("button", "choose-file")],
        _ => Vec::new(),
    }
}
