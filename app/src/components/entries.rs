//! Renders a navigation list: plain links and dropdown groups, in list order.

use leptos::{
    ev,
    html::{a, div, input, label, span},
    logging,
    prelude::*,
};

use crate::{
    components::{
        icons,
        toggle::{Toggle, activate_on_key},
    },
    nav::{GroupEntry, LinkEntry, NavEntry, duplicate_group_labels},
};

/// Renders every entry of `entries` inside one list container.
///
/// Groups use their label text as the id of their toggle control, so labels must
/// be unique within one list. A repeated label is logged and rendered anyway.
pub fn component(entries: Vec<NavEntry>) -> impl IntoView {
    for label in duplicate_group_labels(&entries) {
        logging::warn!("navigation group label {label:?} is repeated; its toggle id collides");
    }

    div()
        .class("leading-loose divide-y lg:flex-none lg:space-x-3.5 lg:select-none lg:divide-y-0 lg:*:inline-block")
        .child(entries.into_iter().map(entry).collect_view())
}

fn entry(entry: NavEntry) -> AnyView {
    match entry {
        NavEntry::Group(group_entry) => group(group_entry).into_any(),
        NavEntry::Link(link_entry) => link(link_entry).into_any(),
    }
}

fn link(LinkEntry { content, href, .. }: LinkEntry) -> impl IntoView {
    div().attr("data-nav-entry", "link").child(
        a().class("block w-full px-1 my-3 lg:w-auto lg:m-0 lg:px-2 lg:rounded-md lg:hover:bg-azure3")
            .href(href)
            .child(content),
    )
}

fn group(GroupEntry { content, children }: GroupEntry) -> impl IntoView {
    let state = Toggle::new();
    let control_id = content.clone();

    div()
        .attr("data-nav-entry", "group")
        .class("group z-10 lg:relative lg:inline-block")
        .child((
            input()
                .r#type("checkbox")
                .id(control_id.clone())
                .class("hidden peer")
                .attr("autocomplete", "off")
                .prop("checked", move || state.is_open())
                .on(ev::change, move |ev| state.set_open(event_target_checked(&ev))),
            label()
                .attr("for", control_id)
                .attr("tabindex", "0")
                .attr("aria-expanded", move || state.is_open().to_string())
                .class("rounded-md flex items-center justify-between px-1 my-3 lg:px-2 lg:my-0 lg:pointer-events-none lg:group-hover:shadow lg:group-hover:bg-azure3")
                .on(ev::keydown, move |ev| {
                    if activate_on_key(&state, &ev.code()) {
                        ev.prevent_default();
                    }
                })
                .child((
                    span().child(content),
                    div().class("lg:hidden text-[#9CA0AA]").child((
                        span().class(("hidden", move || state.is_open())).child(icons::plus("")),
                        span().class(("hidden", move || !state.is_open())).child(icons::minus("")),
                    )),
                )),
            div()
                .attr("data-nav-panel", "")
                .class("peer-checked:block lg:absolute lg:-bottom-5 lg:pt-[5px] lg:w-full lg:drop-shadow lg:group-hover:block")
                .class(("hidden", move || !state.is_open()))
                .child((
                    div().class("hidden lg:block w-full h-[15px] bg-azure3 [clip-path:polygon(calc(50%-10px)_15px,50%_0,calc(50%+10px)_15px)]"),
                    div()
                        .class("pb-2 pl-2 mb-3 space-y-1.5 lg:absolute lg:pl-0 lg:py-2 lg:-mt-px lg:mb-0 lg:space-y-0 lg:rounded-md lg:overflow-hidden lg:divide-y lg:divide-white lg:bg-azure3")
                        .child(children.into_iter().map(child_row).collect_view()),
                )),
        ))
}

fn child_row(LinkEntry { content, href, icon }: LinkEntry) -> impl IntoView {
    div()
        .attr("data-nav-link", "")
        .class("text-sm font-semibold lg:top-1 lg:text-base lg:font-normal lg:flex")
        .child(
            a().class("flex gap-2 items-center whitespace-nowrap py-3 pl-1 lg:py-3.5 lg:px-4 w-full !leading-tight lg:hover:bg-azure2")
                .href(href)
                .child((
                    icon.map(|icon| icons::social(icon, "!w-5 text-mainBlue flex-none")),
                    content,
                )),
        )
}
