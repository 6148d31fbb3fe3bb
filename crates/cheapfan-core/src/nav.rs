//! Mobile navigation toggle.

/// DOM state implied by the menu flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavView {
    pub open: bool,
}

impl NavView {
    /// Value for the toggle's `aria-expanded`.
    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// Inline `overflow` for `<body>`; empty restores the stylesheet value.
    #[must_use]
    pub const fn body_overflow(self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}

#[derive(Debug, Default)]
pub struct NavigationToggle {
    open: bool,
}

impl NavigationToggle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the state already rendered in the markup.
    #[must_use]
    pub fn with_state(open: bool) -> Self {
        Self { open }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn view(&self) -> NavView {
        NavView { open: self.open }
    }

    pub fn toggle(&mut self) -> NavView {
        self.open = !self.open;
        self.view()
    }

    /// A link inside the menu was followed.
    pub fn link_clicked(&mut self) -> NavView {
        self.open = false;
        self.view()
    }

    /// Keyboard input anywhere on the page. Only `Escape` on an open menu
    /// produces an update.
    pub fn key_pressed(&mut self, key: &str) -> Option<NavView> {
        if key != "Escape" || !self.open {
            return None;
        }
        self.open = false;
        Some(self.view())
    }
}
