//! Concrete guide kinds.
//!
//! The set of guides is closed: a [`GuideKind`] names one, and [`Guide`] pairs the
//! shared [`GuideConfig`] with that kind's own parameters. Options are routed to the
//! kind first, then to the shared config.

use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigurationError, Result};
use crate::guide::GuideConfig;
use crate::models::{Options, expect_bool, expect_int, expect_opt_count, expect_opt_positive_f64};
use crate::theme::ThemeLookup;

/// Registered guide kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideKind {
    /// Discrete keys with labels.
    Legend,
    /// Continuous color bar.
    Colorbar,
}

impl GuideKind {
    pub const ALL: [GuideKind; 2] = [GuideKind::Legend, GuideKind::Colorbar];

    pub fn name(self) -> &'static str {
        match self {
            GuideKind::Legend => "legend",
            GuideKind::Colorbar => "colorbar",
        }
    }

    /// Type name used in error messages.
    pub fn type_name(self) -> &'static str {
        match self {
            GuideKind::Legend => "guide_legend",
            GuideKind::Colorbar => "guide_colorbar",
        }
    }

    /// Option names specific to this kind (on top of [`crate::guide::OPTION_NAMES`]).
    pub fn option_names(self) -> &'static [&'static str] {
        match self {
            GuideKind::Legend => &["nrow", "ncol", "byrow"],
            GuideKind::Colorbar => &[
                "barwidth",
                "barheight",
                "nbin",
                "raster",
                "ticks",
                "draw_ulim",
                "draw_llim",
            ],
        }
    }

    /// Look a kind up by name. Accepts `colourbar` as well.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "legend" => Some(GuideKind::Legend),
            "colorbar" | "colourbar" => Some(GuideKind::Colorbar),
            _ => None,
        }
    }

    /// Build a guide of this kind from option overrides.
    pub fn build(self, options: &Options) -> Result<Guide> {
        Guide::new(self, options)
    }
}

impl fmt::Display for GuideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GuideKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        GuideKind::from_name(s).ok_or_else(|| format!("unknown guide kind '{}'", s))
    }
}

/// Legend layout parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LegendParams {
    pub nrow: Option<u32>,
    pub ncol: Option<u32>,
    /// Fill the key grid row by row instead of column by column.
    pub byrow: bool,
}

impl LegendParams {
    fn apply(&mut self, name: &str, value: &Value) -> Result<bool> {
        match name {
            "nrow" => self.nrow = expect_opt_count(name, value)?,
            "ncol" => self.ncol = expect_opt_count(name, value)?,
            "byrow" => self.byrow = expect_bool(name, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn validate(&self) -> Result<()> {
        at_least_one("nrow", self.nrow)?;
        at_least_one("ncol", self.ncol)
    }
}

/// Colorbar parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorbarParams {
    pub barwidth: Option<f64>,
    pub barheight: Option<f64>,
    /// Number of bins the bar is drawn with.
    pub nbin: u32,
    pub raster: bool,
    pub ticks: bool,
    /// Draw the tick at the upper limit.
    pub draw_ulim: bool,
    /// Draw the tick at the lower limit.
    pub draw_llim: bool,
}

impl Default for ColorbarParams {
    fn default() -> Self {
        Self {
            barwidth: None,
            barheight: None,
            nbin: 20,
            raster: true,
            ticks: true,
            draw_ulim: true,
            draw_llim: true,
        }
    }
}

impl ColorbarParams {
    fn apply(&mut self, name: &str, value: &Value) -> Result<bool> {
        match name {
            "barwidth" => self.barwidth = expect_opt_positive_f64(name, value)?,
            "barheight" => self.barheight = expect_opt_positive_f64(name, value)?,
            "nbin" => {
                let n = expect_int(name, value)?;
                self.nbin = u32::try_from(n).map_err(|_| {
                    ConfigurationError::invalid_value(name, "a non-negative integer", value)
                })?;
            }
            "raster" => self.raster = expect_bool(name, value)?,
            "ticks" => self.ticks = expect_bool(name, value)?,
            "draw_ulim" => self.draw_ulim = expect_bool(name, value)?,
            "draw_llim" => self.draw_llim = expect_bool(name, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn validate(&self) -> Result<()> {
        at_least_one("nbin", Some(self.nbin))
    }

    /// Bar width, falling back to the guide's key width.
    pub fn bar_width<T: ThemeLookup + ?Sized>(
        &self,
        config: &GuideConfig,
        theme: &T,
    ) -> Option<f64> {
        self.barwidth.or_else(|| config.key_width(theme))
    }

    /// Bar height, falling back to the guide's key height.
    pub fn bar_height<T: ThemeLookup + ?Sized>(
        &self,
        config: &GuideConfig,
        theme: &T,
    ) -> Option<f64> {
        self.barheight.or_else(|| config.key_height(theme))
    }
}

fn at_least_one(name: &str, value: Option<u32>) -> Result<()> {
    match value {
        Some(0) => Err(ConfigurationError::InvalidValue {
            name: name.to_string(),
            expected: "at least 1".to_string(),
            got: "0".to_string(),
        }),
        _ => Ok(()),
    }
}

/// Kind-specific parameters of a [`Guide`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KindParams {
    Legend(LegendParams),
    Colorbar(ColorbarParams),
}

impl KindParams {
    fn defaults_for(kind: GuideKind) -> Self {
        match kind {
            GuideKind::Legend => KindParams::Legend(LegendParams::default()),
            GuideKind::Colorbar => KindParams::Colorbar(ColorbarParams::default()),
        }
    }

    fn apply(&mut self, name: &str, value: &Value) -> Result<bool> {
        match self {
            KindParams::Legend(p) => p.apply(name, value),
            KindParams::Colorbar(p) => p.apply(name, value),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            KindParams::Legend(p) => p.validate(),
            KindParams::Colorbar(p) => p.validate(),
        }
    }
}

/// A guide: its kind, the shared settings, and the kind's own parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guide {
    pub kind: GuideKind,
    #[serde(flatten)]
    pub config: GuideConfig,
    pub params: KindParams,
}

impl Guide {
    /// Build a guide from option overrides, rejecting names neither the kind nor
    /// the shared config understands.
    pub fn new(kind: GuideKind, options: &Options) -> Result<Self> {
        let mut guide = Guide {
            kind,
            config: GuideConfig::default(),
            params: KindParams::defaults_for(kind),
        };
        for (name, value) in options {
            guide.set(name, value)?;
        }
        Ok(guide)
    }

    /// Set a single option by name.
    pub fn set(&mut self, name: &str, value: &Value) -> Result<()> {
        if self.params.apply(name, value)? || self.config.apply(name, value)? {
            return Ok(());
        }
        Err(ConfigurationError::UnknownAttribute {
            kind: self.kind.type_name().to_string(),
            name: name.to_string(),
        })
    }

    /// Resolve the shared settings, then check the kind's parameters.
    pub fn resolve_defaults<T: ThemeLookup + ?Sized>(&mut self, theme: &T) -> Result<()> {
        self.config.resolve_defaults(theme)?;
        self.params.validate()?;
        debug!("resolved {} guide", self.kind);
        Ok(())
    }

    pub fn legend(&self) -> Option<&LegendParams> {
        match &self.params {
            KindParams::Legend(p) => Some(p),
            KindParams::Colorbar(_) => None,
        }
    }

    pub fn colorbar(&self) -> Option<&ColorbarParams> {
        match &self.params {
            KindParams::Colorbar(p) => Some(p),
            KindParams::Legend(_) => None,
        }
    }
}
