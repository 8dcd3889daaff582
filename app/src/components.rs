//! Components that make up the documentation site chrome.
//!
//! `header` is the entry point; it composes `entries` for each navigation list and
//! draws its glyphs from `icons`. `toggle` holds the open/closed state shared by
//! the mobile menu and the dropdown groups.

pub mod entries;
pub mod error_template;
pub mod header;
pub mod icons;
pub mod search;
pub mod toggle;
