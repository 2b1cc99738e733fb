use contracts::blog::{reading_time_minutes, BlogPost};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use wasm_bindgen_futures::spawn_local;

use crate::shared::date_utils::format_publish_date;
use crate::shared::i18n::{back_label, use_language, Language};
use crate::shared::icons::icon;
use crate::shared::nav::go_back;

use super::api;
use super::list::retry_label;

/// Loading lifecycle of a single post. "No such post" is its own terminal
/// state so the view can offer the right way out (browse, not retry).
#[derive(Clone)]
enum PostState {
    Loading,
    Loaded(Box<BlogPost>),
    NotFound,
    Failed(String),
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let lang = use_language();
    let params = use_params_map();
    let slug = Memo::new(move |_| params.with(|p| p.get("slug").unwrap_or_default()));

    let state = RwSignal::new(PostState::Loading);
    let attempt = RwSignal::new(0u32);

    Effect::new(move |_| {
        let current = slug.get();
        attempt.get();
        state.set(PostState::Loading);
        spawn_local(async move {
            let next = match api::fetch_post(&current).await {
                Ok(Some(post)) => PostState::Loaded(Box::new(post)),
                Ok(None) => PostState::NotFound,
                Err(e) => {
                    log::error!("failed to load blog post '{current}': {e}");
                    PostState::Failed(e)
                }
            };
            state.try_set(next);
        });
    });

    let navigate = use_navigate();

    view! {
        <div class="blog-post page">
            <button
                class="button button--ghost blog-post__back"
                on:click=move |_| go_back(&navigate)
            >
                {icon("arrow-left")}
                {move || back_label(lang.current.get())}
            </button>

            {move || match state.get() {
                PostState::Loading => view! {
                    <div class="blog-post__loading">
                        <div class="spinner"></div>
                    </div>
                }.into_any(),
                PostState::Failed(_) => view! {
                    <div class="blog-post__error" role="alert">
                        {icon("alert-circle")}
                        <p>{error_text(lang.current.get())}</p>
                        <button
                            class="button button--secondary"
                            on:click=move |_| attempt.update(|n| *n += 1)
                        >
                            {retry_label(lang.current.get())}
                        </button>
                    </div>
                }.into_any(),
                PostState::NotFound => view! {
                    <div class="blog-post__not-found">
                        <h1>{not_found_title(lang.current.get())}</h1>
                        <p>{not_found_body(lang.current.get())}</p>
                        <a href="/blog" class="button button--primary">
                            {browse_label(lang.current.get())}
                        </a>
                    </div>
                }.into_any(),
                PostState::Loaded(post) => view! {
                    <PostArticle post=*post />
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn PostArticle(post: BlogPost) -> impl IntoView {
    let lang = use_language();
    let cover = post
        .cover
        .as_ref()
        .map(|m| (api::media_url(&m.url), m.alternative_text.clone()));
    let date = format_publish_date(&post.published_at);
    let minutes = reading_time_minutes(&post.content);
    let category = post.category.as_ref().map(|c| c.name.clone());
    let title = post.title.clone();

    // The CMS stores plain text with blank-line paragraph breaks.
    let paragraphs: Vec<String> = post
        .content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    view! {
        <article class="blog-post__article">
            <header class="blog-post__header">
                {category.map(|name| view! {
                    <span class="blog-post__category">{icon("tag")}{name}</span>
                })}
                <h1 class="blog-post__title">{title.clone()}</h1>
                <div class="blog-post__meta">
                    <span>{icon("calendar")}{date}</span>
                    <span>
                        {icon("clock")}
                        {move || reading_time_label(minutes, lang.current.get())}
                    </span>
                </div>
            </header>
            {cover.map(|(src, alt)| view! {
                <img
                    class="blog-post__cover"
                    src=src
                    alt=alt.unwrap_or(title)
                />
            })}
            <div class="blog-post__content">
                {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
            </div>
        </article>
    }
}

fn reading_time_label(minutes: u32, language: Language) -> String {
    match language {
        Language::Fr => format!("{minutes} min de lecture"),
        Language::En => format!("{minutes} min read"),
    }
}

fn error_text(language: Language) -> &'static str {
    match language {
        Language::Fr => "Impossible de charger cet article.",
        Language::En => "Could not load this article.",
    }
}

fn not_found_title(language: Language) -> &'static str {
    match language {
        Language::Fr => "Article introuvable",
        Language::En => "Article not found",
    }
}

fn not_found_body(language: Language) -> &'static str {
    match language {
        Language::Fr => "Cet article n'existe pas ou n'est plus publié.",
        Language::En => "This article does not exist or is no longer published.",
    }
}

fn browse_label(language: Language) -> &'static str {
    match language {
        Language::Fr => "Voir tous les articles",
        Language::En => "Browse all articles",
    }
}
