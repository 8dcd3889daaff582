//! Icon catalog used by the header.
//!
//! Glyph paths come from `icondata`; the logo mark and the wordmark are drawn inline.

use icondata::{BsDash, BsDiscord, BsGithub, BsList, BsMastodon, BsPlus, BsTwitter, BsX, BsYoutube};
use leptos::{
    prelude::*,
    svg::{circle, path, svg, text},
};

use crate::nav::Icon;

fn glyph(icon: icondata::Icon, class: &'static str) -> impl IntoView {
    view! {
        <svg
            viewBox=icon.view_box
            fill="currentColor"
            aria-hidden="true"
            class=format!("size-6 {class}")
            inner_html=icon.data
        ></svg>
    }
}

pub fn logo(class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", "0 0 30 30")
        .attr("fill", "none")
        .attr("aria-hidden", "true")
        .class(class)
        .child((
            circle()
                .attr("cx", "15")
                .attr("cy", "15")
                .attr("r", "14")
                .attr("fill", "currentColor"),
            path()
                .attr("d", "M14.5 8c-3.6 0-6.5 2.2-6.5 5.1 0 2.8 2.7 4.6 6.1 4.5l1.3 7.4 3.6-1.1-1.6-7.9c.9-.6 1.5-1.4 1.6-2.4C19.2 10 17.2 8 14.5 8z")
                .attr("fill", "white"),
            circle()
                .attr("cx", "15.5")
                .attr("cy", "11")
                .attr("r", "1")
                .attr("fill", "currentColor"),
        ))
}

pub fn wordmark(class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", "0 0 64 24")
        .attr("fill", "currentColor")
        .attr("role", "img")
        .attr("aria-label", "Deno")
        .class(class)
        .child(
            text()
                .attr("x", "0")
                .attr("y", "19")
                .attr("font-size", "20")
                .attr("font-weight", "700")
                .child("deno"),
        )
}

pub fn menu(class: &'static str) -> impl IntoView {
    glyph(BsList, class)
}

pub fn cross(class: &'static str) -> impl IntoView {
    glyph(BsX, class)
}

pub fn plus(class: &'static str) -> impl IntoView {
    glyph(BsPlus, class)
}

pub fn minus(class: &'static str) -> impl IntoView {
    glyph(BsDash, class)
}

pub fn social(icon: Icon, class: &'static str) -> impl IntoView {
    let data = match icon {
        Icon::Discord => BsDiscord,
        Icon::GitHub => BsGithub,
        Icon::Twitter => BsTwitter,
        Icon::YouTube => BsYoutube,
        Icon::Mastodon => BsMastodon,
    };
    glyph(data, class)
}
