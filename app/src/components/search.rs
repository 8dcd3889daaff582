use leptos::{
    html::{form, input},
    prelude::*,
};

/// Search box placed in the header's search slot on manual pages.
pub fn component() -> impl IntoView {
    form()
        .attr("role", "search")
        .attr("data-search", "")
        .action("/manual")
        .method("get")
        .class("flex items-center lg:w-64")
        .child(
            input()
                .r#type("search")
                .name("q")
                .placeholder("搜索手册")
                .attr("aria-label", "搜索手册")
                .class("py-1.5 px-3 w-full text-sm rounded-md border border-border bg-azure2 focus:outline-none focus:ring-2 focus:ring-mainBlue"),
        )
}
