//! Manual page. Uses the header's manual border and puts a search box in its slot.

use leptos::{
    html::{div, h1, main, p},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};

use crate::{
    api::{navigation, navigation_or_default},
    components::{header, search},
};

pub fn component() -> impl IntoView {
    let nav = Resource::new_blocking(
        || (),
        move |()| async move { navigation_or_default(navigation().await) },
    );

    div().child((
        Title(TitleProps::builder().text("手册 | Deno 中文文档").build()),
        Suspense(
            SuspenseProps::builder()
                .fallback(|| ())
                .children(TypedChildren::to_children(move || {
                    move || {
                        nav.get().map(|config| {
                            header::component(
                                header::HeaderOptions::from(config)
                                    .manual(true)
                                    .search(search::component),
                            )
                        })
                    }
                }))
                .build(),
        ),
        main().class("px-4 py-10 mx-auto max-w-3xl").child((
            h1().class("mb-4 text-3xl font-bold").child("手册"),
            p().class("text-gray-600").child("从安装到部署，Deno 的完整使用指南。"),
        )),
    ))
}
