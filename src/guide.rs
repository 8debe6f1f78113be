//! Settings shared by every guide (legend, colorbar).
//!
//! A [`GuideConfig`] is built from named option overrides and later normalized by
//! [`GuideConfig::resolve_defaults`], which fills in title/label placement and the
//! guide direction from whichever of them the user did set.
//!
//! ```
//! use plotguide::{Direction, GuideConfig, Position, Theme};
//! use serde_json::json;
//!
//! let opts = json!({"direction": "vertical", "reverse": true});
//! let mut cfg = GuideConfig::from_options(opts.as_object().unwrap())?;
//! cfg.resolve_defaults(&Theme::new())?;
//! assert_eq!(cfg.title_position, Some(Position::Top));
//! assert_eq!(cfg.label_position, Some(Position::Right));
//! assert_eq!(cfg.direction, Some(Direction::Vertical));
//! # Ok::<(), plotguide::ConfigurationError>(())
//! ```

use log::{debug, trace};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{ConfigurationError, Result};
use crate::models::{
    Alignment, Direction, ElementText, Options, Position, Title, expect_bool, expect_int,
    expect_opt_f64, expect_opt_parsed, expect_opt_positive_f64, expect_opt_struct,
    expect_string,
};
use crate::theme::{
    LEGEND_KEY_HEIGHT, LEGEND_KEY_SIZE, LEGEND_KEY_WIDTH, LEGEND_TEXT, LEGEND_TITLE, ThemeLookup,
};

/// Type name used in errors for a bare [`GuideConfig`].
pub const BASE_KIND: &str = "guide";

/// Every option name a [`GuideConfig`] accepts.
pub const OPTION_NAMES: [&str; 17] = [
    "title",
    "title_position",
    "title_theme",
    "title_hjust",
    "title_vjust",
    "label",
    "label_position",
    "label_theme",
    "label_hjust",
    "label_vjust",
    "keywidth",
    "keyheight",
    "direction",
    "default_unit",
    "override_aes",
    "reverse",
    "order",
];

const POSITION_SHAPE: &str = "one of top, bottom, left, right or null";
const DIRECTION_SHAPE: &str = "horizontal, vertical or null";
const ELEMENT_SHAPE: &str = "a text element or null";

/// Declarative guide settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuideConfig {
    #[serde(skip_serializing_if = "Title::is_derive")]
    pub title: Title,
    pub title_position: Option<Position>,
    pub title_theme: Option<ElementText>,
    pub title_hjust: Option<f64>,
    pub title_vjust: Option<f64>,

    /// Whether labels are drawn.
    pub label: bool,
    pub label_position: Option<Position>,
    pub label_theme: Option<ElementText>,
    pub label_hjust: Option<f64>,
    pub label_vjust: Option<f64>,

    pub keywidth: Option<f64>,
    pub keyheight: Option<f64>,

    pub direction: Option<Direction>,
    /// Unit for `keywidth` and `keyheight`.
    pub default_unit: String,
    /// Aesthetic overrides applied to every legend key.
    pub override_aes: BTreeMap<String, Value>,
    /// Reverse the order of the entries.
    pub reverse: bool,
    /// Position among multiple guides; expected in `[0, 99]`.
    pub order: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    title_alignment: Option<Alignment>,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            title: Title::Derive,
            title_position: None,
            title_theme: None,
            title_hjust: None,
            title_vjust: None,
            label: true,
            label_position: None,
            label_theme: None,
            label_hjust: None,
            label_vjust: None,
            keywidth: None,
            keyheight: None,
            direction: None,
            default_unit: "line".to_string(),
            override_aes: BTreeMap::new(),
            reverse: false,
            order: 0,
            title_alignment: None,
        }
    }
}

impl GuideConfig {
    /// Build a config from option overrides, rejecting unknown names.
    pub fn from_options(options: &Options) -> Result<Self> {
        let mut cfg = Self::default();
        for (name, value) in options {
            cfg.set(name, value)?;
        }
        Ok(cfg)
    }

    /// Set a single option by name.
    pub fn set(&mut self, name: &str, value: &Value) -> Result<()> {
        if self.apply(name, value)? {
            Ok(())
        } else {
            Err(ConfigurationError::UnknownAttribute {
                kind: BASE_KIND.to_string(),
                name: name.to_string(),
            })
        }
    }

    /// Set `name` if it is one of [`OPTION_NAMES`]. Returns `Ok(false)` for any other name.
    pub(crate) fn apply(&mut self, name: &str, value: &Value) -> Result<bool> {
        match name {
            "title" => {
                self.title = match value {
                    Value::Null => Title::Hidden,
                    Value::String(s) => Title::Text(s.clone()),
                    other => {
                        return Err(ConfigurationError::invalid_value(
                            name,
                            "a string or null",
                            other,
                        ));
                    }
                }
            }
            "title_position" => {
                self.title_position = expect_opt_parsed(name, value, POSITION_SHAPE)?
            }
            "title_theme" => self.title_theme = expect_opt_struct(name, value, ELEMENT_SHAPE)?,
            "title_hjust" => self.title_hjust = expect_opt_f64(name, value)?,
            "title_vjust" => self.title_vjust = expect_opt_f64(name, value)?,
            "label" => self.label = expect_bool(name, value)?,
            "label_position" => {
                self.label_position = expect_opt_parsed(name, value, POSITION_SHAPE)?
            }
            "label_theme" => self.label_theme = expect_opt_struct(name, value, ELEMENT_SHAPE)?,
            "label_hjust" => self.label_hjust = expect_opt_f64(name, value)?,
            "label_vjust" => self.label_vjust = expect_opt_f64(name, value)?,
            "keywidth" => self.keywidth = expect_opt_positive_f64(name, value)?,
            "keyheight" => self.keyheight = expect_opt_positive_f64(name, value)?,
            "direction" => self.direction = expect_opt_parsed(name, value, DIRECTION_SHAPE)?,
            "default_unit" => self.default_unit = expect_string(name, value)?,
            "override_aes" => {
                self.override_aes = match value {
                    Value::Null => BTreeMap::new(),
                    Value::Object(map) => map.clone().into_iter().collect(),
                    other => {
                        return Err(ConfigurationError::invalid_value(
                            name,
                            "an object or null",
                            other,
                        ));
                    }
                }
            }
            "reverse" => self.reverse = expect_bool(name, value)?,
            "order" => self.order = expect_int(name, value)?,
            _ => return Ok(false),
        }
        trace!("guide option {} = {}", name, value);
        Ok(true)
    }

    /// Fill unset placement fields and check that they are consistent.
    ///
    /// Steps, in order:
    /// 1. title position from direction (vertical: top, horizontal: left);
    /// 2. direction from label position (left/right: vertical, otherwise horizontal);
    /// 3. label position from direction (vertical: right, horizontal: bottom), which
    ///    must then be orthogonal to the direction;
    /// 4. title alignment from the theme's `legend_title_align`, else from direction
    ///    (vertical: left, horizontal: center).
    ///
    /// Step 1 runs before the direction is derived, so a config with neither a title
    /// position nor a direction fails at step 1.
    ///
    /// Fields that are already set are never overwritten, so calling this twice with
    /// the same theme is a no-op the second time.
    pub fn resolve_defaults<T: ThemeLookup + ?Sized>(&mut self, theme: &T) -> Result<()> {
        if self.title_position.is_none() {
            self.title_position = self.direction.map(|d| match d {
                Direction::Vertical => Position::Top,
                Direction::Horizontal => Position::Left,
            });
        }
        let title_position = self
            .title_position
            .ok_or_else(|| ConfigurationError::InvalidTitlePosition("unset".to_string()))?;

        let direction = match self.direction {
            Some(d) => d,
            None => {
                let d = if self.label_position.is_some_and(Position::is_lateral) {
                    Direction::Vertical
                } else {
                    Direction::Horizontal
                };
                self.direction = Some(d);
                d
            }
        };

        let label_position = *self.label_position.get_or_insert(match direction {
            Direction::Vertical => Position::Right,
            Direction::Horizontal => Position::Bottom,
        });
        if !direction.accepts_label_at(label_position) {
            return Err(ConfigurationError::InvalidLabelPosition(
                label_position.to_string(),
            ));
        }

        let alignment = match theme.legend_title_align()? {
            Some(a) => a,
            None => match direction {
                Direction::Vertical => Alignment::Left,
                Direction::Horizontal => Alignment::Center,
            },
        };
        self.title_alignment = Some(alignment);

        debug!(
            "resolved guide: direction={} title_position={} label_position={} title_alignment={}",
            direction, title_position, label_position, alignment
        );
        Ok(())
    }

    /// Title alignment chosen by [`resolve_defaults`](Self::resolve_defaults).
    pub fn title_alignment(&self) -> Option<Alignment> {
        self.title_alignment
    }

    pub fn is_resolved(&self) -> bool {
        self.title_alignment.is_some()
    }

    /// Title text to draw; `fallback` is the aesthetic or label name.
    pub fn title_text<'a>(&'a self, fallback: &'a str) -> Option<&'a str> {
        self.title.text(fallback)
    }

    /// Title style: `title_theme` over the theme's `legend_title`, with
    /// `title_hjust`/`title_vjust` on top.
    pub fn title_style<T: ThemeLookup + ?Sized>(&self, theme: &T) -> Result<ElementText> {
        let mut style = merge_style(self.title_theme.as_ref(), theme.element_text(LEGEND_TITLE)?);
        style.hjust = self.title_hjust.or(style.hjust);
        style.vjust = self.title_vjust.or(style.vjust);
        Ok(style)
    }

    /// Label style: `label_theme` over the theme's `legend_text`, with
    /// `label_hjust`/`label_vjust` on top.
    pub fn label_style<T: ThemeLookup + ?Sized>(&self, theme: &T) -> Result<ElementText> {
        let mut style = merge_style(self.label_theme.as_ref(), theme.element_text(LEGEND_TEXT)?);
        style.hjust = self.label_hjust.or(style.hjust);
        style.vjust = self.label_vjust.or(style.vjust);
        Ok(style)
    }

    /// Key width in `default_unit`, falling back to the theme.
    pub fn key_width<T: ThemeLookup + ?Sized>(&self, theme: &T) -> Option<f64> {
        self.keywidth
            .or_else(|| theme.number(LEGEND_KEY_WIDTH))
            .or_else(|| theme.number(LEGEND_KEY_SIZE))
    }

    /// Key height in `default_unit`, falling back to the theme.
    pub fn key_height<T: ThemeLookup + ?Sized>(&self, theme: &T) -> Option<f64> {
        self.keyheight
            .or_else(|| theme.number(LEGEND_KEY_HEIGHT))
            .or_else(|| theme.number(LEGEND_KEY_SIZE))
    }
}

fn merge_style(own: Option<&ElementText>, inherited: Option<ElementText>) -> ElementText {
    let parent = inherited.unwrap_or_default();
    match own {
        Some(el) => el.inherit(&parent),
        None => parent,
    }
}
