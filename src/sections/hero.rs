use yew::prelude::*;

use crate::components::image::ImageWithFallback;
use crate::config;
use crate::content::gallery::image_path;
use crate::hooks::scroll_to_section;

#[function_component(Hero)]
pub fn hero() -> Html {
    let view_work = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("gallery");
    });

    html! {
        <section id="home" class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding: 8rem 0 4rem;
                        background: linear-gradient(135deg, #FFFFFF 0%, #F7E7CE 100%);
                    }
                    .hero-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .hero-text h1 {
                        font-size: 3.75rem;
                        margin-bottom: 1.5rem;
                        animation: fadeIn 0.8s ease-out;
                    }
                    .hero-text h1 em {
                        font-style: italic;
                        color: #D4AF37;
                    }
                    .hero-text p {
                        font-size: 1.15rem;
                        color: #4A4A4A;
                        margin-bottom: 2.5rem;
                        max-width: 520px;
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                    .hero-image {
                        border-radius: 2rem;
                        overflow: hidden;
                        aspect-ratio: 4 / 5;
                        box-shadow: 0 30px 60px rgba(0, 0, 0, 0.15);
                    }
                    @media (max-width: 900px) {
                        .hero-grid {
                            grid-template-columns: 1fr;
                            text-align: center;
                        }
                        .hero-text h1 {
                            font-size: 2.5rem;
                        }
                        .hero-text p {
                            margin-left: auto;
                            margin-right: auto;
                        }
                        .hero-actions {
                            justify-content: center;
                        }
                    }
                "#}
            </style>
            <div class="container hero-grid">
                <div class="hero-text">
                    <span class="eyebrow">{"PREMIUM NAIL ARTISTRY"}</span>
                    <h1>{"Elevate Your Style with "}<em>{"Artistic Nails"}</em></h1>
                    <p>
                        {"Discover the perfect blend of luxury and creativity. Our expert nail artists craft stunning designs that reflect your unique personality and style."}
                    </p>
                    <div class="hero-actions">
                        <a
                            href={config::instagram_profile_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-primary"
                        >
                            {"Book Now"}
                        </a>
                        <a href="#gallery" class="btn btn-secondary" onclick={view_work}>
                            {"View Our Work"}
                        </a>
                    </div>
                </div>
                <div class="hero-image">
                    <ImageWithFallback
                        src={image_path("updated-hero-nail-art.png")}
                        alt="Elegant nail art showcase"
                        lazy={false}
                    />
                </div>
            </div>
        </section>
    }
}
