mod stack;

pub use stack::{use_modal_stack, ModalStack};

use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Map a width name to its CSS modifier; unknown names fall back to "lg".
fn max_width_class(max_width: Option<&str>) -> &'static str {
    match max_width {
        Some("sm") => "modal--sm",
        Some("md") => "modal--md",
        Some("xl") => "modal--xl",
        Some("2xl") => "modal--2xl",
        Some("4xl") => "modal--4xl",
        _ => "modal--lg",
    }
}

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// "sm", "md", "lg" (default), "xl", "2xl" or "4xl"
    #[prop(optional, into)]
    max_width: Option<String>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let stack = use_modal_stack();
    let modal_id = stack.register();

    // Escape closes the topmost modal only
    let handle = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" && stack.is_topmost(modal_id) {
            on_close.run(());
        }
    });
    on_cleanup(move || {
        handle.remove();
        stack.unregister(modal_id);
    });

    // Handle overlay click
    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    let width_class = max_width_class(max_width.as_deref());

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class=format!("modal {}", width_class) role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <div class="modal-header-actions">
                        <button class="button button--icon modal__close" aria-label="Close" on:click=handle_close>
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_width_class() {
        assert_eq!(max_width_class(Some("4xl")), "modal--4xl");
        assert_eq!(max_width_class(Some("2xl")), "modal--2xl");
        assert_eq!(max_width_class(None), "modal--lg");
        assert_eq!(max_width_class(Some("huge")), "modal--lg");
    }
}
