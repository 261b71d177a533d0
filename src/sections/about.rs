use yew::prelude::*;

use crate::components::reveal::RevealSection;
use crate::config;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <RevealSection id="about" class="about">
            <style>
                {r#"
                    .about {
                        background: linear-gradient(135deg, #F7E7CE 0%, #FFFFFF 100%);
                    }
                    .about-grid {
                        display: grid;
                        grid-template-columns: 3fr 2fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .about-text h2 {
                        font-size: 2.75rem;
                        margin-bottom: 1.5rem;
                    }
                    .about-text p {
                        color: #4A4A4A;
                        margin-bottom: 1.25rem;
                    }
                    .instagram-card {
                        padding: 2.5rem;
                        border-radius: 1.5rem;
                        text-align: center;
                        background: #FFFFFF;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
                    }
                    .instagram-card-icon {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .instagram-card h3 {
                        margin-bottom: 0.5rem;
                    }
                    .instagram-card p {
                        color: #6B6B6B;
                        margin-bottom: 1.5rem;
                    }
                    @media (max-width: 900px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container about-grid">
                <div class="about-text">
                    <span class="eyebrow">{"OUR STORY"}</span>
                    <h2>{"Crafted with Passion"}</h2>
                    <p>
                        {"Nakhakala was born from a love of colour, detail and the quiet joy of a perfect manicure. Every set we create is designed by hand to suit the person wearing it."}
                    </p>
                    <p>
                        {"From minimal French tips to intricate hand-painted art, we use premium products and careful technique so your nails look beautiful and stay healthy."}
                    </p>
                </div>
                <div class="instagram-card">
                    <div class="instagram-card-icon">{"📸"}</div>
                    <h3>{format!("@{}", config::INSTAGRAM_HANDLE)}</h3>
                    <p>{"Follow along for new designs, offers and booking slots."}</p>
                    <a
                        href={config::instagram_profile_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-primary"
                    >
                        {"Follow on Instagram"}
                    </a>
                </div>
            </div>
        </RevealSection>
    }
}
