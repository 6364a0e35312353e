use dioxus::desktop::{Config as DioxusConfig, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use crate::config::Config;
use crate::directory::DirectoryClient;
use crate::ui::components::SearchPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    // One shared client for the whole tree
    use_context_provider(|| DirectoryClient::new(Config::load().directory_url));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SearchPage {}
    }
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("roster")
        .with_always_on_top(false)
        .with_inner_size(LogicalSize::new(900, 700))
}
