//! Navigation helpers shared by pages.

use leptos_router::NavigateOptions;

/// Go back in history, or home when this view is the first entry (a deep
/// link into the app must not leave the visitor stranded).
pub fn go_back(navigate: &(impl Fn(&str, NavigateOptions) + Clone + 'static)) {
    let history = web_sys::window().and_then(|w| w.history().ok());
    let depth = history
        .as_ref()
        .and_then(|h| h.length().ok())
        .unwrap_or(0);
    if depth > 1 {
        if let Some(h) = history {
            let _ = h.back();
        }
    } else {
        navigate("/", NavigateOptions::default());
    }
}
