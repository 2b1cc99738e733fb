use crate::routes::routes::AppRoutes;
use crate::shared::i18n::LanguageContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Active language is process-wide configuration, provided once here
    // and read by pages via context.
    provide_context(LanguageContext::new());

    view! {
        <AppRoutes />
    }
}
