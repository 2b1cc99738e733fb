use contracts::blog::{BlogPost, Pagination};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::date_utils::format_publish_date;
use crate::shared::i18n::{use_language, Language};
use crate::shared::icons::icon;

use super::api;

const PAGE_SIZE: u32 = 9;

/// Paginated list of published posts, newest first.
#[component]
pub fn BlogListPage() -> impl IntoView {
    let lang = use_language();

    let page = RwSignal::new(1u32);
    let posts = RwSignal::new(Vec::<BlogPost>::new());
    let pagination = RwSignal::new(None::<Pagination>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    // Bumped by the retry button to re-run the fetch effect.
    let attempt = RwSignal::new(0u32);

    Effect::new(move |_| {
        let current = page.get();
        attempt.get();
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_posts(current, PAGE_SIZE).await {
                Ok(response) => {
                    posts.try_set(response.data);
                    pagination.try_set(response.meta.pagination);
                }
                Err(e) => {
                    log::error!("failed to load blog posts: {e}");
                    error.try_set(Some(e));
                }
            }
            loading.try_set(false);
        });
    });

    let page_count = move || pagination.get().map(|p| p.page_count).unwrap_or(1);
    let has_prev = move || page.get() > 1;
    let has_next = move || page.get() < page_count();

    view! {
        <div class="blog page">
            <header class="blog__header">
                <h1 class="blog__title">{move || page_title(lang.current.get())}</h1>
                <p class="blog__subtitle">{move || page_subtitle(lang.current.get())}</p>
            </header>

            {move || {
                if loading.get() {
                    return view! {
                        <div class="blog__loading">
                            <div class="spinner"></div>
                            <p>{loading_text(lang.current.get())}</p>
                        </div>
                    }.into_any();
                }
                if error.get().is_some() {
                    return view! {
                        <div class="blog__error" role="alert">
                            {icon("alert-circle")}
                            <p>{error_text(lang.current.get())}</p>
                            <button
                                class="button button--secondary"
                                on:click=move |_| attempt.update(|n| *n += 1)
                            >
                                {retry_label(lang.current.get())}
                            </button>
                        </div>
                    }.into_any();
                }
                if posts.with(Vec::is_empty) {
                    return view! {
                        <div class="blog__empty">
                            <p>{empty_text(lang.current.get())}</p>
                        </div>
                    }.into_any();
                }
                view! {
                    <div class="blog__grid">
                        {posts.get().into_iter().map(|post| view! {
                            <BlogCard post />
                        }).collect_view()}
                    </div>
                }.into_any()
            }}

            {move || (page_count() > 1 && !loading.get() && error.get().is_none()).then(|| view! {
                <nav class="blog__pagination">
                    <button
                        class="button button--ghost"
                        disabled=move || !has_prev()
                        on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                    >
                        {icon("chevron-left")}
                    </button>
                    <span class="blog__pagination-status">
                        {move || format!("{} / {}", page.get(), page_count())}
                    </span>
                    <button
                        class="button button--ghost"
                        disabled=move || !has_next()
                        on:click=move |_| page.update(|p| *p += 1)
                    >
                        {icon("chevron-right")}
                    </button>
                </nav>
            })}
        </div>
    }
}

#[component]
fn BlogCard(post: BlogPost) -> impl IntoView {
    let href = format!("/blog/{}", post.slug);
    let image = post.card_image_path().map(api::media_url);
    let alt = post
        .cover
        .as_ref()
        .and_then(|m| m.alternative_text.clone())
        .unwrap_or_else(|| post.title.clone());
    let date = format_publish_date(&post.published_at);
    let category = post.category.as_ref().map(|c| c.name.clone());

    view! {
        <a href=href class="blog-card">
            {image.map(|src| view! {
                <img class="blog-card__image" src=src alt=alt loading="lazy" />
            })}
            <div class="blog-card__body">
                {category.map(|name| view! {
                    <span class="blog-card__category">{name}</span>
                })}
                <h2 class="blog-card__title">{post.title}</h2>
                <p class="blog-card__excerpt">{post.excerpt}</p>
                <div class="blog-card__meta">
                    {icon("calendar")}
                    <span>{date}</span>
                </div>
            </div>
        </a>
    }
}

fn page_title(language: Language) -> &'static str {
    match language {
        Language::Fr => "Actualités",
        Language::En => "News",
    }
}

fn page_subtitle(language: Language) -> &'static str {
    match language {
        Language::Fr => "Suivez nos opérations et la vie du service dans les communes.",
        Language::En => "Follow our operations and the life of the service across municipalities.",
    }
}

fn loading_text(language: Language) -> &'static str {
    match language {
        Language::Fr => "Chargement des articles...",
        Language::En => "Loading articles...",
    }
}

fn error_text(language: Language) -> &'static str {
    match language {
        Language::Fr => "Impossible de charger les articles.",
        Language::En => "Could not load the articles.",
    }
}

pub(super) fn retry_label(language: Language) -> &'static str {
    match language {
        Language::Fr => "Réessayer",
        Language::En => "Try again",
    }
}

fn empty_text(language: Language) -> &'static str {
    match language {
        Language::Fr => "Aucun article publié pour le moment.",
        Language::En => "No articles published yet.",
    }
}
