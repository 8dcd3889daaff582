//! Server-side renders of the site header, checked against the emitted HTML.

use app::components::{
    entries,
    header::{self, HeaderOptions},
};
use app::nav::{GroupEntry, Icon, LinkEntry, NavEntry, default_entries};
use app::types::NavConfig;
use leptos::prelude::*;

fn render_header(options: HeaderOptions) -> String {
    let owner = Owner::new();
    owner.with(|| header::component(options).to_html())
}

fn render_entries(list: Vec<NavEntry>) -> String {
    let owner = Owner::new();
    owner.with(|| entries::component(list).to_html())
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in rendered header"))
}

fn docs_group() -> NavEntry {
    GroupEntry::new(
        "文档",
        vec![LinkEntry::new("手册", "/manual"), LinkEntry::new("API", "/api")],
    )
    .into()
}

#[test]
fn default_header_lists_default_entries_in_order() {
    let html = render_header(HeaderOptions::default());
    let labels = ["模块", "文档", "部署", "社区"];
    let positions: Vec<_> = labels.iter().map(|label| position(&html, label)).collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(html.matches("data-nav-entry=").count(), default_entries().len());
}

#[test]
fn plain_entry_renders_anchor_with_href_and_label() {
    let html = render_entries(vec![LinkEntry::new("标准库", "/std").into()]);
    let anchor = position(&html, "<a ");
    let tag_end = anchor + position(&html[anchor..], ">");
    assert!(html[anchor..tag_end].contains(r#"href="/std""#));
    let close = position(&html, "</a>");
    assert!(html[tag_end..close].contains("标准库"));
}

#[test]
fn group_renders_one_closed_toggle_and_all_children_in_order() {
    let html = render_entries(vec![docs_group()]);

    assert_eq!(html.matches(r#"type="checkbox""#).count(), 1);
    assert!(html.contains(r#"id="文档""#));
    assert!(html.contains(r#"for="文档""#));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(!html.contains("checked=\"\""));

    assert_eq!(html.matches("data-nav-link").count(), 2);
    assert!(position(&html, r#"href="/manual""#) < position(&html, r#"href="/api""#));

    let panel = position(&html, "data-nav-panel");
    let panel_tag = &html[panel..panel + position(&html[panel..], ">")];
    assert!(panel_tag.split(['"', ' ']).any(|class| class == "hidden"));
}

#[test]
fn group_child_icons_are_rendered_before_labels() {
    let html = render_entries(vec![
        GroupEntry::new(
            "社区",
            vec![LinkEntry::new("GitHub", "https://github.com/denoland").with_icon(Icon::GitHub)],
        )
        .into(),
    ]);
    let anchor = position(&html, r#"href="https://github.com/denoland""#);
    let icon = anchor + position(&html[anchor..], "<svg");
    let label = anchor + position(&html[anchor..], "GitHub");
    assert!(icon < label);
    assert!(html[icon..label].contains("text-mainBlue"));
}

#[test]
fn entries_overwrite_replaces_default_list() {
    let html = render_header(
        HeaderOptions::default().entries_overwrite(vec![LinkEntry::new("博客", "/blog").into()]),
    );
    assert!(html.contains(r#"href="/blog""#));
    for entry in default_entries() {
        assert!(!html.contains(entry.content()), "{} leaked", entry.content());
    }
    assert_eq!(html.matches("data-nav-entry=").count(), 1);
}

#[test]
fn after_entries_follow_the_default_list() {
    let html = render_header(
        HeaderOptions::default().after_entries(vec![LinkEntry::new("登录", "/login").into()]),
    );
    assert!(position(&html, "社区") < position(&html, r#"href="/login""#));
    assert_eq!(html.matches("data-nav-entry=").count(), default_entries().len() + 1);
}

#[test]
fn missing_search_renders_no_slot() {
    let html = render_header(HeaderOptions::default());
    assert!(!html.contains("data-search"));
}

#[test]
fn search_sits_between_entries_and_after_entries() {
    let html = render_header(
        HeaderOptions::default()
            .search(|| view! { <form data-search="probe"><input type="search" name="q"/></form> })
            .after_entries(vec![LinkEntry::new("登录", "/login").into()]),
    );
    assert_eq!(html.matches(r#"data-search="probe""#).count(), 1);
    assert!(html.contains(r#"<input type="search" name="q""#));

    let search = position(&html, r#"data-search="probe""#);
    assert!(position(&html, "社区") < search);
    assert!(search < position(&html, r#"href="/login""#));
}

#[test]
fn header_options_from_nav_config() {
    let config = NavConfig {
        entries: Some(vec![docs_group()]),
        after_entries: Some(vec![LinkEntry::new("登录", "/login").into()]),
    };
    let html = render_header(config.into());
    assert_eq!(html.matches("data-nav-entry=").count(), 2);
    assert!(!html.contains("模块"));
}

#[test]
fn repeated_group_labels_still_render() {
    let html = render_entries(vec![docs_group(), docs_group()]);
    assert_eq!(html.matches(r#"data-nav-entry="group""#).count(), 2);
    assert_eq!(html.matches(r#"id="文档""#).count(), 2);
}

#[test]
fn mobile_menu_label_is_keyboard_focusable() {
    let html = render_header(HeaderOptions::default());
    let label = position(&html, "<label");
    let tag = &html[label..label + position(&html[label..], ">")];
    assert!(tag.contains(r#"for="menuToggle""#));
    assert!(tag.contains(r#"tabindex="0""#));
    assert!(tag.contains(r#"aria-expanded="false""#));
}
