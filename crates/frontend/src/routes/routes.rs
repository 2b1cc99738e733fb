use crate::blog::{BlogListPage, BlogPostPage};
use crate::landing::LandingPage;
use crate::pages::entity_selection::EntitySelectionPage;
use crate::pages::not_found::NotFoundPage;
use crate::questionnaire::QuestionnairePage;
use crate::support::SupportPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/help") view=SupportPage />
                <Route path=path!("/blog") view=BlogListPage />
                <Route path=path!("/blog/:slug") view=BlogPostPage />
                <Route path=path!("/entity-selection") view=EntitySelectionPage />
                <Route path=path!("/questionnaire/:entity") view=QuestionnairePage />
            </Routes>
        </Router>
    }
}
