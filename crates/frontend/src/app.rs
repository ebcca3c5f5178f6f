use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::load_page_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Config is read once from the embedded defaults and the page query string.
    provide_context(load_page_config());

    let ctx = AppGlobalContext::new();
    ctx.init_url_integration();
    provide_context(ctx);

    view! {
        <Shell />
    }
}
