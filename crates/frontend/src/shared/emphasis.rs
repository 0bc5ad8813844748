//! Minimal `**bold**` rendering for generated narrative text.

use leptos::prelude::*;

/// Split text on `**` markers into `(is_bold, text)` segments.
///
/// An unmatched trailing marker is kept as literal text.
pub fn emphasis_segments(text: &str) -> Vec<(bool, String)> {
    let mut parts: Vec<String> = text.split("**").map(str::to_string).collect();
    if parts.len() % 2 == 0 {
        if let Some(tail) = parts.pop() {
            if let Some(last) = parts.last_mut() {
                last.push_str("**");
                last.push_str(&tail);
            }
        }
    }

    parts
        .into_iter()
        .enumerate()
        .filter(|(_, s)| !s.is_empty())
        .map(|(i, s)| (i % 2 == 1, s))
        .collect()
}

#[component]
pub fn EmphasisText(
    /// Text with optional `**bold**` segments
    #[prop(into)]
    text: String,
) -> impl IntoView {
    emphasis_segments(&text)
        .into_iter()
        .map(|(bold, segment)| {
            if bold {
                view! { <strong>{segment}</strong> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect_view()
}
