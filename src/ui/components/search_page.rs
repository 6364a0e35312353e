use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::directory::{DirectoryClient, Person};
use crate::search;
use crate::ui::components::{PaginationControls, ResultsTable};

/// How long the input must stay quiet before a typed term is committed.
const DEBOUNCE_MS: u64 = 500;

/// Debounced search over the remote directory, filtered by name and shown
/// ten rows at a time.
#[component]
pub fn SearchPage() -> Element {
    let client = use_context::<DirectoryClient>();

    let mut search = use_signal(String::new);
    let mut debounced = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut rows = use_signal(Vec::<Person>::new);
    let mut total_pages = use_signal(|| 1usize);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Pending debounce commit. Every keystroke cancels the previous one,
    // so only the final term after a pause ever lands in `debounced`.
    // Tasks die with the component, so teardown cancels a pending commit.
    let mut pending_commit = use_signal(|| None::<Task>);

    // Handle for the in-flight retrieval. Cancelling drops the future
    // before any state write, so a superseded fetch can never overwrite a
    // newer one. Cancellation is advisory towards the transport; only the
    // discard of the result is guaranteed.
    let mut inflight = use_signal(|| None::<Task>);

    // Retrieval engine: runs on mount and whenever the debounced term or
    // the page changes.
    use_effect(move || {
        let term = debounced();
        let current_page = page();
        let client = client.clone();

        if let Some(previous) = inflight.write().take() {
            previous.cancel();
        }

        let task = spawn(async move {
            debug!("fetching directory (term: {:?}, page: {})", term, current_page);
            loading.set(true);
            error.set(None);

            match client.fetch_people().await {
                Ok(people) => {
                    let filtered = search::filter_by_name(&people, &term);
                    total_pages.set(search::total_pages(filtered.len()));
                    rows.set(search::page_slice(&filtered, current_page));
                }
                Err(e) => {
                    warn!("directory fetch failed: {}", e);
                    // Previously shown rows stay visible under the banner
                    error.set(Some("Failed to fetch directory.".to_string()));
                }
            }

            loading.set(false);
        });

        inflight.set(Some(task));
    });

    rsx! {
        div { class: "container",
            h2 { class: "title", "Search Users" }

            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search by name...",
                value: "{search}",
                oninput: move |event: FormEvent| {
                    let term = event.value();
                    search.set(term.clone());

                    if let Some(previous) = pending_commit.write().take() {
                        previous.cancel();
                    }

                    let task = spawn(async move {
                        tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS)).await;
                        page.set(1);
                        debounced.set(term);
                    });

                    pending_commit.set(Some(task));
                },
            }

            if loading() {
                div { class: "loader", "Loading..." }
            }

            if let Some(message) = error.read().as_ref() {
                h2 { class: "error", "{message}" }
            }

            ResultsTable { rows: rows(), page: page() }

            PaginationControls {
                page: page(),
                total_pages: total_pages(),
                on_previous: move |_| {
                    page.set(page() - 1);
                },
                on_next: move |_| {
                    page.set(page() + 1);
                },
            }
        }
    }
}
