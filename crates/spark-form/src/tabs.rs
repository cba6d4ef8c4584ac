//! Tab panel switching.

/// Exactly-one-active tab selection.
///
/// Mirrors the markup contract: a row of trigger buttons, each tagged with
/// a panel id, and one panel per id. Activation is synchronous and
/// idempotent. Ids not in the strip are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStrip {
    ids: Vec<String>,
    active: usize,
}

impl TabStrip {
    /// Build a strip from panel ids in document order. The first id starts
    /// active. Returns `None` when `ids` is empty.
    pub fn new(ids: Vec<String>) -> Option<Self> {
        if ids.is_empty() {
            None
        } else {
            Some(Self { ids, active: 0 })
        }
    }

    /// Seed the active tab, for markup that marks one trigger active.
    /// Unknown ids leave the selection unchanged.
    pub fn with_active(mut self, id: &str) -> Self {
        if let Some(index) = self.index_of(id) {
            self.active = index;
        }
        self
    }

    /// The active tab id.
    pub fn active(&self) -> &str {
        &self.ids[self.active]
    }

    /// Whether `id` is the active tab.
    pub fn is_active(&self, id: &str) -> bool {
        self.active() == id
    }

    /// Whether the strip contains `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Iterate tab ids in document order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Number of tabs.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the strip has no tabs (never true once constructed).
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Make `id` active. Returns whether the selection changed. Unknown
    /// ids are ignored.
    pub fn activate(&mut self, id: &str) -> bool {
        match self.index_of(id) {
            Some(index) if index != self.active => {
                self.active = index;
                true
            }
            _ => false,
        }
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }
}

/// Applies tab selection to the page.
pub trait TabSurface {
    /// Reflect a trigger's selected state (`active` class, `aria-selected`).
    fn set_trigger_selected(&mut self, id: &str, selected: bool);

    /// Reflect a panel's visibility (`active` class, `hidden` attribute).
    fn set_panel_visible(&mut self, id: &str, visible: bool);
}

/// Drives a [`TabSurface`] from a [`TabStrip`].
pub struct TabController<S> {
    strip: TabStrip,
    surface: S,
}

impl<S: TabSurface> TabController<S> {
    /// Create a controller. Call [`apply`](Self::apply) to synchronize the
    /// page with the initial selection.
    pub fn new(strip: TabStrip, surface: S) -> Self {
        Self { strip, surface }
    }

    /// The active tab id.
    pub fn active(&self) -> &str {
        self.strip.active()
    }

    /// The underlying strip.
    pub fn strip(&self) -> &TabStrip {
        &self.strip
    }

    /// The underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Make `id` the sole visible panel and re-apply attributes. Ids not
    /// in the strip are ignored entirely.
    pub fn activate(&mut self, id: &str) {
        if !self.strip.contains(id) {
            return;
        }
        self.strip.activate(id);
        self.apply();
    }

    /// Synchronize every trigger and panel with the current selection.
    pub fn apply(&mut self) {
        for id in self.strip.ids() {
            let selected = self.strip.is_active(id);
            self.surface.set_trigger_selected(id, selected);
            self.surface.set_panel_visible(id, selected);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_strip(ids: &[&str]) -> TabStrip {
        TabStrip::new(ids.iter().map(|id| id.to_string()).collect()).unwrap()
    }

    #[derive(Debug, Default)]
    struct RecordingSurface {
        triggers: Vec<(String, bool)>,
        panels: Vec<(String, bool)>,
    }

    impl TabSurface for RecordingSurface {
        fn set_trigger_selected(&mut self, id: &str, selected: bool) {
            self.triggers.push((id.to_string(), selected));
        }

        fn set_panel_visible(&mut self, id: &str, visible: bool) {
            self.panels.push((id.to_string(), visible));
        }
    }

    // === Strip Tests ===

    #[test]
    fn test_strip_requires_ids() {
        assert!(TabStrip::new(Vec::new()).is_none());
    }

    #[test]
    fn test_first_tab_active_by_default() {
        let strip = make_strip(&["features", "pricing", "faq"]);
        assert_eq!(strip.active(), "features");
        assert!(strip.is_active("features"));
        assert!(!strip.is_active("pricing"));
    }

    #[test]
    fn test_with_active_seeds_selection() {
        let strip = make_strip(&["features", "pricing"]).with_active("pricing");
        assert_eq!(strip.active(), "pricing");
        // Unknown ids leave the seed untouched.
        let strip = make_strip(&["features", "pricing"]).with_active("missing");
        assert_eq!(strip.active(), "features");
    }

    #[test]
    fn test_activate_reports_changes() {
        let mut strip = make_strip(&["features", "pricing"]);
        assert!(strip.activate("pricing"));
        assert_eq!(strip.active(), "pricing");
        assert!(!strip.activate("pricing"));
        assert!(!strip.activate("missing"));
        assert_eq!(strip.active(), "pricing");
    }

    // === Controller Tests ===

    #[test]
    fn test_apply_marks_exactly_one_active() {
        let strip = make_strip(&["features", "pricing", "faq"]);
        let mut controller = TabController::new(strip, RecordingSurface::default());

        controller.apply();

        let surface = controller.surface();
        assert_eq!(
            surface.triggers,
            vec![
                ("features".to_string(), true),
                ("pricing".to_string(), false),
                ("faq".to_string(), false),
            ]
        );
        assert_eq!(surface.panels, surface.triggers);
    }

    #[test]
    fn test_activate_switches_panels() {
        let strip = make_strip(&["features", "pricing"]);
        let mut controller = TabController::new(strip, RecordingSurface::default());

        controller.activate("pricing");

        assert_eq!(controller.active(), "pricing");
        let surface = controller.surface();
        assert_eq!(
            surface.panels,
            vec![
                ("features".to_string(), false),
                ("pricing".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let strip = make_strip(&["features", "pricing"]);
        let mut controller = TabController::new(strip, RecordingSurface::default());

        controller.activate("missing");

        assert_eq!(controller.active(), "features");
        assert!(controller.surface().triggers.is_empty());
        assert!(controller.surface().panels.is_empty());
    }

    #[test]
    fn test_reactivating_same_tab_is_idempotent() {
        let strip = make_strip(&["features", "pricing"]);
        let mut controller = TabController::new(strip, RecordingSurface::default());

        controller.activate("pricing");
        controller.activate("pricing");

        assert_eq!(controller.active(), "pricing");
        let surface = controller.surface();
        // Both passes applied the same attribute values.
        assert_eq!(surface.panels.len(), 4);
        assert_eq!(surface.panels[1], ("pricing".to_string(), true));
        assert_eq!(surface.panels[3], ("pricing".to_string(), true));
    }
}
