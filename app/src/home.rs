//! Landing page: the site header followed by a short introduction.

use leptos::{
    html::{a, div, h1, p, section},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};

use crate::{
    api::{navigation, navigation_or_default},
    components::header,
};

pub fn component() -> impl IntoView {
    // Fetched once so the hydrated header renders the same entries as the server.
    let nav = Resource::new_blocking(
        || (),
        move |()| async move { navigation_or_default(navigation().await) },
    );

    div().child((
        Title(TitleProps::builder().text("Deno 中文文档").build()),
        Suspense(
            SuspenseProps::builder()
                .fallback(|| ())
                .children(TypedChildren::to_children(move || {
                    move || nav.get().map(|config| header::component(config.into()))
                }))
                .build(),
        ),
        section().class("px-4 pt-16 pb-24 mx-auto max-w-4xl text-center").child((
            h1().class("mb-6 text-5xl font-bold").child("Deno 中文文档"),
            p().class("mb-8 text-lg text-gray-600")
                .child("现代的 JavaScript 与 TypeScript 运行时。"),
            a().href("/manual")
                .class("inline-block py-2 px-5 font-semibold text-white rounded-md bg-mainBlue hover:opacity-90")
                .child("阅读手册"),
        )),
    ))
}
