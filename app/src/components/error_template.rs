//! Error page rendered by the router fallback.
//!
//! On the server it also sets the response status of the first `AppError`.

use http::status::StatusCode;
use leptos::{
    html::{div, h1},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("页面未找到")]
    NotFound,
}

impl AppError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders every `AppError` found in `errors`.
pub fn component(errors: Errors) -> impl IntoView {
    let errors: Vec<AppError> = errors
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    div().class("grid place-content-center px-4 py-24 antialiased").child((
        h1().class("mb-6 text-center text-2xl font-bold").child(if errors.len() > 1 { "错误" } else { "出错了" }),
        errors
            .into_iter()
            .map(|error| {
                div().class("flex flex-col gap-1 justify-center items-center").child((
                    h1().class("text-xl tracking-widest text-gray-500").child(format!(
                        "{} | {error}",
                        error.status_code().as_u16()
                    )),
                    div().class("mt-6 text-center hover:text-mainBlue").child(A(AProps::builder()
                        .href("/")
                        .children(ToChildren::to_children(|| "返回首页"))
                        .build())),
                ))
            })
            .collect_view(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "页面未找到");
    }
}
