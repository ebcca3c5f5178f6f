use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Bottom drawer container (overlay + sliding surface).
///
/// Renders nothing while `is_open` is false. Escape and a full click on the overlay
/// both call `on_close`; the host decides what closing means.
#[component]
pub fn DrawerFrame(
    #[prop(into)]
    is_open: Signal<bool>,
    on_close: Callback<()>,
    /// Extra class for the drawer surface (`div.drawer`).
    #[prop(optional, into)]
    drawer_class: MaybeProp<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself,
    // so a text selection that ends outside the drawer does not dismiss it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Defer close to next tick: the overlay is removed during its own click dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let key_handle = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if is_open.get_untracked() && ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || key_handle.remove());

    let surface_class = move || match drawer_class.get() {
        Some(cls) => format!("drawer {cls}"),
        None => "drawer".to_string(),
    };

    view! {
        <Show when=move || is_open.get()>
            <div
                class="drawer-overlay"
                on:mousedown=handle_overlay_mouse_down
                on:click=handle_overlay_click
            >
                <div
                    class=surface_class
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                >
                    {children()}
                </div>
            </div>
        </Show>
    }
}
