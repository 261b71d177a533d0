use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::carousel::Slide;
use crate::components::carousel::Carousel;
use crate::components::image::ImageWithFallback;
use crate::components::reveal::RevealSection;
use crate::components::spinner::LoadingSpinner;
use crate::config;
use crate::content::gallery::{self, GalleryImage, CATEGORIES};
use crate::feed::FeedDisplay;
use crate::hooks::use_instagram_feed;

struct GalleryContent {
    images: Rc<[GalleryImage]>,
    slides: Rc<[Slide]>,
}

impl GalleryContent {
    fn load() -> Self {
        let images: Vec<GalleryImage> = gallery::load_gallery().unwrap_or_else(|err| {
            error!("Gallery configuration unusable: {}", err);
            Vec::new()
        });
        Self {
            slides: gallery::slides(&images).into(),
            images: images.into(),
        }
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let content = use_memo(|_| GalleryContent::load(), ());
    let feed = use_instagram_feed(config::FEED_TIMEOUT_MS);

    let feed_view = match feed.display() {
        FeedDisplay::Loading | FeedDisplay::Remote => html! {
            <div class="instagram-feed">
                {
                    if feed.display() == FeedDisplay::Loading {
                        html! { <LoadingSpinner message="Loading our latest designs..." minimal={true} /> }
                    } else {
                        html! {}
                    }
                }
                <div class="instagram-embed">
                    <blockquote
                        class="instagram-media"
                        data-instgrm-permalink={config::instagram_permalink()}
                        data-instgrm-version="14"
                    >
                        <a href={config::instagram_profile_url()} target="_blank" rel="noopener noreferrer">
                            {format!("@{}", config::INSTAGRAM_HANDLE)}
                        </a>
                    </blockquote>
                </div>
            </div>
        },
        FeedDisplay::Fallback => html! {
            <FallbackGallery images={content.images.clone()} />
        },
    };

    html! {
        <RevealSection id="gallery" class="gallery">
            <style>
                {r#"
                    .gallery {
                        background: #FFFFFF;
                    }
                    .instagram-feed {
                        max-width: 720px;
                        margin: 0 auto;
                    }
                    .instagram-embed {
                        display: flex;
                        justify-content: center;
                    }
                    .instagram-media {
                        width: 100%;
                        max-width: 540px;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: #FAFAFA;
                        text-align: center;
                    }
                    .gallery-follow {
                        text-align: center;
                        margin-top: 3rem;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-header">
                    <span class="eyebrow">{"📸 Instagram"}</span>
                    <h2>{"Our Latest Creations"}</h2>
                    <p>{"A glimpse of the designs our clients are wearing right now"}</p>
                </div>
                <Carousel slides={content.slides.clone()} />
                { feed_view }
                <div class="gallery-follow">
                    <a
                        href={config::instagram_profile_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-primary"
                    >
                        {format!("Follow @{}", config::INSTAGRAM_HANDLE)}
                    </a>
                </div>
            </div>
        </RevealSection>
    }
}

#[derive(Clone, PartialEq)]
enum Filter {
    Category(&'static str),
    Tag(String),
}

#[derive(Properties, PartialEq)]
struct FallbackGalleryProps {
    images: Rc<[GalleryImage]>,
}

/// Local designs shown when the Instagram embed does not come up.
#[function_component(FallbackGallery)]
fn fallback_gallery(props: &FallbackGalleryProps) -> Html {
    let filter = use_state(|| Filter::Category("all"));

    let visible = match &*filter {
        Filter::Category(category) => gallery::by_category(&props.images, category),
        Filter::Tag(tag) => gallery::by_tag(&props.images, tag),
    };
    let highlights = gallery::featured(&props.images);
    let newest = gallery::recent(&props.images, 3);

    let on_tag = {
        let filter = filter.clone();
        Callback::from(move |tag: String| filter.set(Filter::Tag(tag)))
    };
    let clear_tag = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| filter.set(Filter::Category("all")))
    };

    html! {
        <div class="fallback-gallery">
            <style>
                {r#"
                    .fallback-gallery {
                        animation: fadeIn 0.5s ease-out;
                    }
                    .featured-strip {
                        display: flex;
                        gap: 1rem;
                        overflow-x: auto;
                        padding-bottom: 1rem;
                        margin-bottom: 2.5rem;
                    }
                    .featured-thumb {
                        flex: 0 0 160px;
                        height: 160px;
                        border-radius: 1rem;
                        overflow: hidden;
                    }
                    .just-added {
                        text-align: center;
                        color: #4A4A4A;
                        margin-bottom: 1.5rem;
                    }
                    .filter-bar {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-bottom: 2.5rem;
                    }
                    .filter-button {
                        padding: 0.5rem 1.25rem;
                        border-radius: 999px;
                        border: 1px solid #D4AF37;
                        background: transparent;
                        color: #0A0A0A;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .filter-button.active,
                    .filter-button:hover {
                        background: #D4AF37;
                        color: #FFFFFF;
                    }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                        gap: 1.5rem;
                    }
                    .gallery-card {
                        position: relative;
                        border-radius: 1.25rem;
                        overflow: hidden;
                        background: #FFFFFF;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                    }
                    .gallery-card-image {
                        height: 260px;
                    }
                    .gallery-card-body {
                        padding: 1.25rem;
                    }
                    .gallery-card-body h3 {
                        font-size: 1.15rem;
                        margin-bottom: 0.35rem;
                    }
                    .gallery-card-body p {
                        color: #6B6B6B;
                        font-size: 0.95rem;
                    }
                    .gallery-card-meta {
                        display: flex;
                        justify-content: space-between;
                        margin-top: 0.75rem;
                        font-size: 0.8rem;
                        color: #8A8A8A;
                        text-transform: capitalize;
                    }
                    .featured-badge {
                        position: absolute;
                        top: 0.75rem;
                        left: 0.75rem;
                        z-index: 2;
                        padding: 0.25rem 0.75rem;
                        border-radius: 999px;
                        background: rgba(10, 10, 10, 0.7);
                        color: #D4AF37;
                        font-size: 0.75rem;
                    }
                    .tag-list {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.4rem;
                        margin-top: 0.75rem;
                    }
                    .tag-chip {
                        border: none;
                        padding: 0.2rem 0.6rem;
                        border-radius: 999px;
                        background: #F7E7CE;
                        color: #8A6D1F;
                        font-size: 0.75rem;
                        cursor: pointer;
                    }
                    .tag-filter-note {
                        text-align: center;
                        margin-bottom: 1.5rem;
                        color: #4A4A4A;
                    }
                    .empty-gallery {
                        text-align: center;
                        color: #8A8A8A;
                        padding: 2rem;
                    }
                "#}
            </style>

            <div class="featured-strip">
                { for highlights.iter().map(|image| html! {
                    <div class="featured-thumb" key={image.id}>
                        <ImageWithFallback src={image.path()} alt={image.title.clone()} />
                    </div>
                }) }
            </div>

            <p class="just-added">
                <strong>{"Just added: "}</strong>
                { newest.iter().map(|image| image.title.as_str()).collect::<Vec<_>>().join(" · ") }
            </p>

            <div class="filter-bar">
                { for CATEGORIES.iter().map(|(value, label)| {
                    let value: &'static str = *value;
                    let active = *filter == Filter::Category(value);
                    let onclick = {
                        let filter = filter.clone();
                        Callback::from(move |_: MouseEvent| filter.set(Filter::Category(value)))
                    };
                    html! {
                        <button
                            key={value}
                            class={classes!("filter-button", active.then(|| "active"))}
                            onclick={onclick}
                        >
                            {*label}
                        </button>
                    }
                }) }
            </div>

            {
                if let Filter::Tag(tag) = &*filter {
                    html! {
                        <p class="tag-filter-note">
                            {format!("Designs tagged #{} ", tag)}
                            <button class="tag-chip" onclick={clear_tag}>{"✕ clear"}</button>
                        </p>
                    }
                } else {
                    html! {}
                }
            }

            {
                if visible.is_empty() {
                    html! { <p class="empty-gallery">{"New designs in this collection are coming soon."}</p> }
                } else {
                    html! {
                        <div class="gallery-grid">
                            { for visible.iter().map(|image| gallery_card(image, &on_tag)) }
                        </div>
                    }
                }
            }
        </div>
    }
}

fn gallery_card(image: &GalleryImage, on_tag: &Callback<String>) -> Html {
    let added = image
        .date_added
        .map(|date| format!("Added {}", date.format("%B %Y")));

    html! {
        <article class="gallery-card" key={image.id}>
            {
                if image.featured {
                    html! { <span class="featured-badge">{"★ Featured"}</span> }
                } else {
                    html! {}
                }
            }
            <div class="gallery-card-image">
                <ImageWithFallback
                    src={image.path()}
                    alt={image.title.clone()}
                    title={Some(AttrValue::from(image.title.clone()))}
                />
            </div>
            <div class="gallery-card-body">
                <h3>{&image.title}</h3>
                <p>{&image.description}</p>
                <div class="tag-list">
                    { for image.tags.iter().map(|tag| {
                        let label = format!("#{}", tag);
                        let tag = tag.clone();
                        let onclick = on_tag.reform(move |_: MouseEvent| tag.clone());
                        html! {
                            <button class="tag-chip" key={label.clone()} onclick={onclick}>{label}</button>
                        }
                    }) }
                </div>
                <div class="gallery-card-meta">
                    <span>{image.category.as_str()}</span>
                    { for added }
                </div>
            </div>
        </article>
    }
}
