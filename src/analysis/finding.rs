use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Severity indicator attached to every finding
///
/// Codes outside the known four are kept as `Unknown` and render in black
/// with no explanation. Non-string values are unknown codes too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum ColorCode {
    Red,
    Yellow,
    Purple,
    White,
    Unknown(String),
}

impl From<String> for ColorCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "red" => ColorCode::Red,
            "yellow" => ColorCode::Yellow,
            "purple" => ColorCode::Purple,
            "white" => ColorCode::White,
            _ => ColorCode::Unknown(code),
        }
    }
}

impl From<Value> for ColorCode {
    fn from(value: Value) -> Self {
        match value {
            Value::String(code) => ColorCode::from(code),
            other => ColorCode::Unknown(other.to_string()),
        }
    }
}

impl ColorCode {
    pub fn css_color(&self) -> &'static str {
        match self {
            ColorCode::Red => "red",
            ColorCode::Yellow => "yellow",
            ColorCode::Purple => "purple",
            ColorCode::White => "white",
            ColorCode::Unknown(_) => "black",
        }
    }

    pub fn explanation(&self) -> Option<&'static str> {
        match self {
            ColorCode::Red => Some(
                "This ingredient is harmful due to its high saturated fat content and potential health risks.",
            ),
            ColorCode::Yellow => Some(
                "This ingredient is moderate; it may have benefits but also potential risks in high amounts.",
            ),
            ColorCode::Purple => Some(
                "This ingredient is generally safe but may cause allergies or reactions in sensitive individuals.",
            ),
            ColorCode::White => {
                Some("This ingredient is considered non-harmful and safe for most people.")
            }
            ColorCode::Unknown(_) => None,
        }
    }

    /// Font Awesome icon class for the card heading
    pub fn icon(&self) -> &'static str {
        match self {
            ColorCode::White => "fa-check-circle",
            _ => "fa-exclamation-circle",
        }
    }
}

/// Any JSON scalar or structure, rendered as text
fn any_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// One ingredient's assessment as returned by the model
///
/// Only `name` and `color_code` drive rendering and must be present; the
/// remaining fields are kept as whatever JSON the model sent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IngredientFinding {
    #[serde(deserialize_with = "any_as_text")]
    pub name: String,
    pub is_harmful: Option<Value>,
    pub can_cause: Option<Value>,
    pub category: Option<Value>,
    pub color_code: ColorCode,
}
