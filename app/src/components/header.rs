use crate::{
    components::{
        entries, icons,
        toggle::{Toggle, activate_on_key},
    },
    nav::{NavEntry, default_entries},
    types::NavConfig,
};
use leptos::{ev::KeyboardEvent, prelude::*};

/// Inputs of the site header.
#[derive(Clone, Default)]
pub struct HeaderOptions {
    /// Only draws the bottom border from the `lg` breakpoint up.
    pub manual: bool,
    /// Rendered as-is between the primary entries and `after_entries`.
    pub search: Option<ViewFn>,
    /// Replaces the built-in navigation list.
    pub entries_overwrite: Option<Vec<NavEntry>>,
    pub after_entries: Option<Vec<NavEntry>>,
}

impl HeaderOptions {
    #[must_use]
    pub const fn manual(mut self, manual: bool) -> Self {
        self.manual = manual;
        self
    }

    #[must_use]
    pub fn search(mut self, search: impl Into<ViewFn>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn entries_overwrite(mut self, entries: Vec<NavEntry>) -> Self {
        self.entries_overwrite = Some(entries);
        self
    }

    #[must_use]
    pub fn after_entries(mut self, entries: Vec<NavEntry>) -> Self {
        self.after_entries = Some(entries);
        self
    }
}

impl From<NavConfig> for HeaderOptions {
    fn from(NavConfig { entries, after_entries }: NavConfig) -> Self {
        Self {
            entries_overwrite: entries,
            after_entries,
            ..Self::default()
        }
    }
}

pub fn component(options: HeaderOptions) -> impl IntoView {
    let HeaderOptions {
        manual,
        search,
        entries_overwrite,
        after_entries,
    } = options;
    let menu = Toggle::new();
    let border = if manual { "lg:border-b" } else { "border-b" };

    // Labels without native key handling still open the menu from the keyboard.
    let on_label_keydown = move |ev: KeyboardEvent| {
        if activate_on_key(&menu, &ev.code()) {
            ev.prevent_default();
        }
    };

    view! {
        <div class=format!("{border} border-border")>
            <div class="px-4 py-4.5 mx-auto h-full max-w-screen-2xl md:px-8">
                <nav class="flex flex-col justify-between h-full lg:flex-row lg:gap-6">
                    <input
                        type="checkbox"
                        id="menuToggle"
                        class="hidden peer"
                        autocomplete="off"
                        prop:checked=move || menu.is_open()
                        on:change=move |ev| menu.set_open(event_target_checked(&ev))
                    />

                    <div class="flex flex-1 gap-3 justify-between items-center w-full h-9 select-none md:gap-6 lg:gap-8 lg:justify-start lg:w-min">
                        <a href="/" class="flex flex-none gap-4 items-center" aria-label="Landing Page">
                            {icons::logo("h-10 flex-none")}
                            {icons::wordmark("h-6 flex-none")}
                        </a>

                        <label
                            for="menuToggle"
                            tabindex="0"
                            class="cursor-pointer touch-manipulation lg:hidden"
                            aria-expanded=move || menu.is_open().to_string()
                            on:keydown=on_label_keydown
                        >
                            <span class:hidden=move || menu.is_open()>{icons::menu("")}</span>
                            <span class:hidden=move || !menu.is_open()>{icons::cross("")}</span>
                        </label>
                    </div>

                    <div
                        data-nav-menu=""
                        class="flex flex-col gap-x-5 gap-y-4 mx-2 mt-5 font-medium peer-checked:flex lg:flex lg:flex-row lg:items-center lg:mx-0 lg:mt-0"
                        class:hidden=move || !menu.is_open()
                    >
                        {entries::component(entries_overwrite.unwrap_or_else(default_entries))}
                        {search.map(|search| search.run())}
                        {after_entries.map(entries::component)}
                    </div>
                </nav>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(options: HeaderOptions) -> String {
        let owner = Owner::new();
        owner.with(|| component(options).to_html())
    }

    #[test]
    fn manual_only_changes_the_border() {
        let regular = render(HeaderOptions::default());
        let manual = render(HeaderOptions::default().manual(true));
        assert!(regular.starts_with(r#"<div class="border-b border-border""#));
        assert!(manual.starts_with(r#"<div class="lg:border-b border-border""#));
        assert_eq!(
            regular.replace("border-b border-border", ""),
            manual.replace("lg:border-b border-border", "")
        );
    }

    #[test]
    fn renders_home_link_and_menu_toggle() {
        let html = render(HeaderOptions::default());
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains(r#"aria-label="Landing Page""#));
        assert!(html.contains(r#"id="menuToggle""#));
        assert!(html.contains(r#"for="menuToggle""#));
    }

    #[test]
    fn menu_starts_closed() {
        let html = render(HeaderOptions::default());
        let menu_label = html.find("<label").unwrap();
        let label_tag = &html[menu_label..menu_label + html[menu_label..].find('>').unwrap()];
        assert!(label_tag.contains(r#"for="menuToggle""#));
        assert!(label_tag.contains(r#"aria-expanded="false""#));

        let panel = html.find("data-nav-menu").unwrap();
        let panel_tag = &html[panel..panel + html[panel..].find('>').unwrap()];
        assert!(panel_tag.split(['"', ' ']).any(|class| class == "hidden"));
    }

    #[test]
    fn menu_checkbox_reveals_panel_without_hydration() {
        let html = render(HeaderOptions::default());

        let input = html.find(r#"id="menuToggle""#).unwrap();
        let input_start = html[..input].rfind('<').unwrap();
        let input_tag = &html[input_start..input + html[input..].find('>').unwrap()];
        assert!(input_tag.split(['"', ' ']).any(|class| class == "peer"));

        let panel = html.find("data-nav-menu").unwrap();
        let panel_tag = &html[panel..panel + html[panel..].find('>').unwrap()];
        assert!(panel_tag.split(['"', ' ']).any(|class| class == "peer-checked:flex"));
        assert!(input_start < panel);
    }
}
