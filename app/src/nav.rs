//! Navigation data shown in the site header.
//!
//! A navigation list is an ordered `Vec<NavEntry>`. Each entry is either a plain
//! link or a labelled group of links rendered as a dropdown. Lists are plain data:
//! they are built once (the default list below, or a caller override) and only read
//! while rendering.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Social glyphs available from the icon catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Discord,
    GitHub,
    Twitter,
    YouTube,
    Mastodon,
}

/// A single clickable navigation item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub content: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl LinkEntry {
    pub fn new(content: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            href: href.into(),
            icon: None,
        }
    }

    #[must_use]
    pub const fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// A labelled dropdown of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEntry {
    pub content: String,
    pub children: Vec<LinkEntry>,
}

impl GroupEntry {
    pub fn new(content: impl Into<String>, children: Vec<LinkEntry>) -> Self {
        Self {
            content: content.into(),
            children,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavEntry {
    Link(LinkEntry),
    Group(GroupEntry),
}

impl NavEntry {
    /// The visible label of the entry.
    pub fn content(&self) -> &str {
        match self {
            Self::Link(link) => &link.content,
            Self::Group(group) => &group.content,
        }
    }
}

impl From<LinkEntry> for NavEntry {
    fn from(link: LinkEntry) -> Self {
        Self::Link(link)
    }
}

impl From<GroupEntry> for NavEntry {
    fn from(group: GroupEntry) -> Self {
        Self::Group(group)
    }
}

/// The built-in navigation list.
pub fn default_entries() -> Vec<NavEntry> {
    vec![
        GroupEntry::new(
            "模块",
            vec![
                LinkEntry::new("标准库", "/std"),
                LinkEntry::new("第三方模块", "/x"),
                LinkEntry::new("NPM", "/manual/node"),
            ],
        )
        .into(),
        GroupEntry::new(
            "文档",
            vec![
                LinkEntry::new("手册", "/manual"),
                LinkEntry::new("API", "/api"),
            ],
        )
        .into(),
        LinkEntry::new("部署", "https://deno.com/deploy").into(),
        GroupEntry::new(
            "社区",
            vec![
                LinkEntry::new("Discord", "https://discord.gg/deno").with_icon(Icon::Discord),
                LinkEntry::new("GitHub", "https://github.com/denoland").with_icon(Icon::GitHub),
                LinkEntry::new("Twitter", "https://twitter.com/deno_land").with_icon(Icon::Twitter),
                LinkEntry::new("YouTube", "https://www.youtube.com/c/deno_land")
                    .with_icon(Icon::YouTube),
                LinkEntry::new("Mastodon", "https://fosstodon.org/@deno_land")
                    .with_icon(Icon::Mastodon),
            ],
        )
        .into(),
    ]
}

/// Group labels that appear more than once in `entries`, in first-repeat order.
///
/// Group labels double as the id of the group's toggle control, so a repeated
/// label makes two labels point at the same control.
pub fn duplicate_group_labels(entries: &[NavEntry]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for entry in entries {
        if let NavEntry::Group(group) = entry {
            let label = group.content.as_str();
            if !seen.insert(label) && !duplicates.contains(&label) {
                duplicates.push(label);
            }
        }
    }
    duplicates
}
