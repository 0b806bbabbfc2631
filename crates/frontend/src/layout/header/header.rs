use crate::favorites::use_favorites;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

const NAV_LINKS: [(&str, &str); 3] = [
    ("/", "Random Cats"),
    ("/breeds", "Breeds"),
    ("/favorites", "Favorites"),
];

/// `/` is active only on the root; other links also match nested paths.
pub fn is_nav_active(path: &str, current: &str) -> bool {
    if path == "/" {
        current == "/"
    } else {
        current.starts_with(path)
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;
    let favorites = use_favorites();
    let (mobile_open, set_mobile_open) = signal(false);

    let link_class = move |path: &'static str, base: &'static str| {
        let active = pathname.with(|current| is_nav_active(path, current));
        format!("{} {}--{}", base, base, if active { "active" } else { "inactive" })
    };

    view! {
        <header class="header">
            <div class="header__content">
                <span class="header__title">"Cat Lovers App"</span>
                <nav class="header__nav">
                    {NAV_LINKS.into_iter().map(|(path, label)| view! {
                        <a href=path class=move || link_class(path, "nav-link")>
                            {label}
                            {(path == "/favorites").then(|| view! {
                                <span class="nav-link__count">{move || favorites.count()}</span>
                            })}
                        </a>
                    }).collect_view()}
                </nav>
            </div>
            <div class="header__actions">
                <a
                    href="https://github.com"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="header__github"
                    aria-label="GitHub"
                >
                    {icon("github")}
                </a>
                <button
                    type="button"
                    class="button button--ghost header__menu-toggle"
                    aria-controls="mobile-menu"
                    aria-expanded=move || mobile_open.get().to_string()
                    aria-label="Open main menu"
                    on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                >
                    {move || if mobile_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>

            <div
                id="mobile-menu"
                class=move || if mobile_open.get() { "mobile-menu mobile-menu--open" } else { "mobile-menu" }
            >
                {NAV_LINKS.into_iter().map(|(path, label)| view! {
                    <a
                        href=path
                        class=move || link_class(path, "mobile-nav-link")
                        on:click=move |_| set_mobile_open.set(false)
                    >
                        {label}
                    </a>
                }).collect_view()}
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_exact() {
        assert!(is_nav_active("/", "/"));
        assert!(!is_nav_active("/", "/breeds"));
    }

    #[test]
    fn test_prefix_match() {
        assert!(is_nav_active("/breeds", "/breeds"));
        assert!(is_nav_active("/favorites", "/favorites/123"));
        assert!(!is_nav_active("/favorites", "/breeds"));
    }
}
