//! plotguide
//!
//! Guide (legend and colorbar) settings for a grammar-of-graphics plotting stack.
//! A guide is configured from named options, then normalized against the active
//! theme before rendering: title and label placement, the guide direction and the
//! title alignment are filled in from whatever the user did set.
//!
//! ### Features
//! - Strict option handling: unknown option names are rejected with the guide type
//! - Default resolution for title/label position, direction and title alignment
//! - Legend and colorbar kinds with their own parameters
//! - Per-plot guide sets sorted by `order`
//! - JSON loading for options and themes
//!
//! ### Example
//! ```
//! use plotguide::{Alignment, Direction, GuideKind, GuideSet, Theme};
//! use serde_json::json;
//!
//! let opts = json!({"title_position": "top", "label_position": "left"});
//! let legend = GuideKind::Legend.build(opts.as_object().unwrap())?;
//! let mut set = GuideSet::new();
//! set.insert("colour", legend);
//!
//! let theme = Theme::new().with_title_align(Alignment::Right);
//! let resolved = set.resolve(&theme)?;
//! assert_eq!(resolved[0].guide.config.direction, Some(Direction::Vertical));
//! assert_eq!(resolved[0].guide.config.title_alignment(), Some(Alignment::Right));
//! # Ok::<(), plotguide::ConfigurationError>(())
//! ```

pub mod error;
pub mod guide;
pub mod guide_set;
pub mod kinds;
pub mod models;
pub mod storage;
pub mod theme;

pub use error::ConfigurationError;
pub use guide::GuideConfig;
pub use guide_set::{AestheticGuide, GuideSet};
pub use kinds::{ColorbarParams, Guide, GuideKind, KindParams, LegendParams};
pub use models::{Alignment, Direction, ElementText, Options, Position, Title};
pub use theme::{Theme, ThemeLookup};
