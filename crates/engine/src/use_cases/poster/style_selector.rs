//! Random selection over the visual style catalog.

use std::sync::Arc;

use blockbustr_domain::{style_catalog, StyleDescriptor};

use crate::infrastructure::ports::RandomPort;

/// Picks a style uniformly at random for rich-tier prompts.
///
/// Randomness comes through `RandomPort` so tests can pin the draw.
pub struct StyleSelector {
    random: Arc<dyn RandomPort>,
}

impl StyleSelector {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// Select a style. The catalog is non-empty by construction, so this
    /// cannot fail; an out-of-range draw from a misbehaving port is clamped
    /// into the catalog instead of panicking.
    pub fn select(&self) -> &'static StyleDescriptor {
        let catalog = style_catalog();
        let drawn = self.random.gen_range(0, (catalog.len() - 1) as i32);
        let index = (drawn.max(0) as usize).min(catalog.len() - 1);
        &catalog[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedRandom, SystemRandom};
    use std::collections::HashSet;

    #[test]
    fn test_fixed_draw_selects_by_index() {
        let selector = StyleSelector::new(Arc::new(FixedRandom(3)));
        assert_eq!(selector.select().name, style_catalog()[3].name);
    }

    #[test]
    fn test_out_of_range_draw_is_clamped() {
        let selector = StyleSelector::new(Arc::new(FixedRandom(i32::MAX)));
        let last = style_catalog().len() - 1;
        assert_eq!(selector.select().name, style_catalog()[last].name);

        let selector = StyleSelector::new(Arc::new(FixedRandom(-5)));
        assert_eq!(selector.select().name, style_catalog()[0].name);
    }

    #[test]
    fn test_many_draws_stay_in_catalog_and_vary() {
        let selector = StyleSelector::new(Arc::new(SystemRandom::new()));
        let catalog_names: HashSet<&str> = style_catalog().iter().map(|s| s.name).collect();

        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let style = selector.select();
            assert!(catalog_names.contains(style.name));
            seen.insert(style.name);
        }
        // 1000 uniform draws over ~49 styles collide with more than one name
        // overwhelmingly often.
        assert!(seen.len() > 1);
    }
}
