//! The guides attached to one plot.

use log::debug;

use crate::error::{ConfigurationError, Result};
use crate::kinds::Guide;
use crate::theme::ThemeLookup;

/// Valid range for [`GuideConfig::order`](crate::GuideConfig::order).
pub const ORDER_RANGE: std::ops::RangeInclusive<i64> = 0..=99;

/// A guide together with the aesthetic it explains.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AestheticGuide {
    pub aesthetic: String,
    /// Title to draw, derived from the aesthetic when the guide has no explicit
    /// text. Filled in by [`GuideSet::resolve`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text: Option<String>,
    #[serde(flatten)]
    pub guide: Guide,
}

/// Guides keyed by aesthetic, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct GuideSet {
    entries: Vec<AestheticGuide>,
}

impl GuideSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `guide` to `aesthetic`, replacing any guide already there.
    pub fn insert(&mut self, aesthetic: impl Into<String>, guide: Guide) {
        let aesthetic = aesthetic.into();
        match self.entries.iter_mut().find(|e| e.aesthetic == aesthetic) {
            Some(entry) => entry.guide = guide,
            None => self.entries.push(AestheticGuide {
                aesthetic,
                title_text: None,
                guide,
            }),
        }
    }

    pub fn get(&self, aesthetic: &str) -> Option<&Guide> {
        self.entries
            .iter()
            .find(|e| e.aesthetic == aesthetic)
            .map(|e| &e.guide)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve every guide against `theme` and return them sorted by `order`.
    ///
    /// Equal orders keep insertion order. Fails on the first guide that does not
    /// resolve or whose order is outside [`ORDER_RANGE`].
    pub fn resolve<T: ThemeLookup + ?Sized>(mut self, theme: &T) -> Result<Vec<AestheticGuide>> {
        for entry in &mut self.entries {
            let order = entry.guide.config.order;
            if !ORDER_RANGE.contains(&order) {
                return Err(ConfigurationError::OrderOutOfRange(order));
            }
            entry.guide.resolve_defaults(theme)?;
            entry.title_text = entry
                .guide
                .config
                .title_text(&entry.aesthetic)
                .map(str::to_string);
        }
        // Stable sort keeps insertion order among equal keys.
        self.entries.sort_by_key(|e| e.guide.config.order);
        debug!("resolved {} guides", self.entries.len());
        Ok(self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::GuideKind;
    use crate::theme::Theme;
    use serde_json::json;

    fn guide(kind: GuideKind, v: serde_json::Value) -> Guide {
        kind.build(v.as_object().unwrap()).unwrap()
    }

    #[test]
    fn insert_replaces_same_aesthetic() {
        let mut set = GuideSet::new();
        set.insert("colour", guide(GuideKind::Legend, json!({})));
        set.insert("colour", guide(GuideKind::Colorbar, json!({})));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("colour").unwrap().kind, GuideKind::Colorbar);
    }

    #[test]
    fn order_outside_range_is_rejected() {
        let mut set = GuideSet::new();
        set.insert(
            "fill",
            guide(GuideKind::Legend, json!({"order": 100, "direction": "vertical"})),
        );
        assert_eq!(
            set.resolve(&Theme::new()).unwrap_err(),
            ConfigurationError::OrderOutOfRange(100)
        );
    }
}
