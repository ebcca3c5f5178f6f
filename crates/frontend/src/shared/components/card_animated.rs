//! CardAnimated - Thaw `Card` with the `card-appear` entrance animation.
//!
//! Dashboards pass increasing `delay_ms` values for a stagger effect:
//! ```text
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=80>  // card 2
//! ```

use leptos::prelude::*;
use thaw::Card;

pub fn animation_style(delay_ms: u32, extra: &str) -> String {
    let base = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    if extra.is_empty() {
        base
    } else {
        format!("{} {}", base, extra)
    }
}

#[component]
pub fn CardAnimated(
    /// Animation delay in ms.
    #[prop(optional)]
    delay_ms: u32,
    /// Inline styles appended after the animation.
    #[prop(optional, into)]
    style: String,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card class=class attr:style=animation_style(delay_ms, &style)>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_style() {
        assert_eq!(
            animation_style(80, ""),
            "animation: card-appear 0.28s ease-out 80ms both;"
        );
        assert!(animation_style(0, "padding: 0;").ends_with("both; padding: 0;"));
    }
}
