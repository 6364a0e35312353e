use dioxus::prelude::*;

/// Previous/Next navigation, strictly sequential. With zero pages there is
/// no valid page and both controls are disabled.
#[component]
pub fn PaginationControls(
    page: usize,
    total_pages: usize,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "button-row",
            button {
                class: "nav-button",
                disabled: page == 1,
                onclick: move |_| on_previous.call(()),
                "Previous"
            }
            button {
                class: "nav-button",
                disabled: page == total_pages || total_pages == 0,
                onclick: move |_| on_next.call(()),
                "Next"
            }
            p { class: "page-indicator", "Page {page} of {total_pages}" }
        }
    }
}
