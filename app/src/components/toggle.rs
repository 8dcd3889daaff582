//! Open/closed view state for the header's collapsible panels.
//!
//! Each collapsible panel (the mobile menu and every dropdown group) owns one
//! `Toggle`. The panel's checkbox is bound to it in both directions. Before
//! hydration the checkbox alone reveals its panel through a `peer-checked:`
//! class; once hydrated the signal also drives visibility, glyph swaps and
//! `aria-expanded`.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Toggle {
    open: RwSignal<bool>,
}

impl Toggle {
    /// Creates a closed toggle owned by the current reactive owner.
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn set_open(&self, open: bool) {
        self.open.set(open);
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys that activate a focused toggle label, as `KeyboardEvent.code` values.
pub fn is_activation_key(code: &str) -> bool {
    matches!(code, "Space" | "Enter")
}

/// Keyboard activation of a focused toggle label.
///
/// Flips `toggle` when `code` is an activation key and returns whether the key's
/// default action must be suppressed.
pub fn activate_on_key(toggle: &Toggle, code: &str) -> bool {
    if !is_activation_key(code) {
        return false;
    }
    toggle.toggle();
    true
}
