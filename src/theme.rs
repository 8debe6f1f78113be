//! Theme parameters consulted while resolving guide defaults.
//!
//! A guide never owns a theme; the rendering pipeline lends one to
//! [`GuideConfig::resolve_defaults`](crate::GuideConfig::resolve_defaults) and the
//! style accessors. Anything implementing [`ThemeLookup`] can stand in for the
//! bundled [`Theme`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{ConfigurationError, Result};
use crate::models::{Alignment, ElementText, expect_opt_parsed, expect_opt_struct};

pub const LEGEND_TITLE_ALIGN: &str = "legend_title_align";
pub const LEGEND_TITLE: &str = "legend_title";
pub const LEGEND_TEXT: &str = "legend_text";
pub const LEGEND_KEY_SIZE: &str = "legend_key_size";
pub const LEGEND_KEY_WIDTH: &str = "legend_key_width";
pub const LEGEND_KEY_HEIGHT: &str = "legend_key_height";

/// Keyed, read-only access to theme parameters.
pub trait ThemeLookup {
    /// Raw parameter value. `None` and JSON `null` both mean unset.
    fn param(&self, key: &str) -> Option<&Value>;

    /// The configured `legend_title_align`, or `None` when unset.
    fn legend_title_align(&self) -> Result<Option<Alignment>> {
        match self.param(LEGEND_TITLE_ALIGN) {
            None => Ok(None),
            Some(v) => expect_opt_parsed(LEGEND_TITLE_ALIGN, v, "left, center or right"),
        }
    }

    /// A text element parameter such as `legend_title`.
    fn element_text(&self, key: &str) -> Result<Option<ElementText>> {
        match self.param(key) {
            None => Ok(None),
            Some(v) => expect_opt_struct(key, v, "a text element"),
        }
    }

    /// A numeric parameter; non-numeric values read as unset.
    fn number(&self, key: &str) -> Option<f64> {
        self.param(key).and_then(Value::as_f64)
    }
}

/// A flat map of theme parameters, as loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    params: BTreeMap<String, Value>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style parameter assignment.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.params.insert(key.into(), value.into());
    }

    /// Theme with `legend_title_align` set.
    pub fn with_title_align(self, align: Alignment) -> Self {
        self.with_param(LEGEND_TITLE_ALIGN, align.as_str())
    }
}

impl ThemeLookup for Theme {
    fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }
}

impl TryFrom<Value> for Theme {
    type Error = ConfigurationError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Theme {
                params: map.into_iter().collect(),
            }),
            other => Err(ConfigurationError::invalid_value(
                "theme",
                "an object of theme parameters",
                &other,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_and_null_align_read_as_none() {
        assert_eq!(Theme::new().legend_title_align().unwrap(), None);
        let t = Theme::new().with_param(LEGEND_TITLE_ALIGN, Value::Null);
        assert_eq!(t.legend_title_align().unwrap(), None);
    }

    #[test]
    fn explicit_align_is_parsed() {
        let t = Theme::new().with_title_align(Alignment::Right);
        assert_eq!(t.legend_title_align().unwrap(), Some(Alignment::Right));
    }

    #[test]
    fn bogus_align_is_an_error() {
        let t = Theme::new().with_param(LEGEND_TITLE_ALIGN, "middle");
        assert!(matches!(
            t.legend_title_align(),
            Err(ConfigurationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn theme_from_json_object() {
        let t = Theme::try_from(json!({
            "legend_title": {"size": 11, "face": "bold"},
            "legend_key_size": 1.2
        }))
        .unwrap();
        let title = t.element_text(LEGEND_TITLE).unwrap().unwrap();
        assert_eq!(title.size, Some(11.0));
        assert_eq!(t.number(LEGEND_KEY_SIZE), Some(1.2));
        assert!(Theme::try_from(json!([1, 2])).is_err());
    }
}
