// Core application modules and components
use crate::components::error_template;
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    SsrMode, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod api;
pub mod components;
mod home;
mod manual;
pub mod nav;
pub mod types;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    provide_meta_context();

    let html_comp = html().lang("zh-CN").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/docs.css")
                    .build(),
            ),
            Title(TitleProps::builder().text("Deno 中文文档").build()),
        )),
        body().class("bg-white text-gray-900").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <FlatRoutes fallback=|| {
                let mut outside_errors = Errors::default();
                outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                error_template::component(outside_errors)
            }>
                <Route path=StaticSegment("") view=home::component ssr=SsrMode::InOrder/>
                <Route path=StaticSegment("manual") view=manual::component ssr=SsrMode::InOrder/>
            </FlatRoutes>
        </Router>
    }
}
