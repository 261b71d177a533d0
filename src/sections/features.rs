use yew::prelude::*;

use crate::components::reveal::RevealSection;
use crate::content::site::FEATURES;

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <RevealSection id="features" class="features">
            <style>
                {r#"
                    .features {
                        background: #FFFFFF;
                    }
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .feature-card {
                        padding: 2.5rem 2rem;
                        border-radius: 1.5rem;
                        text-align: center;
                        background: #FAFAFA;
                        border: 1px solid rgba(212, 175, 55, 0.15);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .feature-card:hover {
                        transform: translateY(-8px);
                        box-shadow: 0 20px 40px rgba(212, 175, 55, 0.15);
                    }
                    .feature-icon {
                        font-size: 2.5rem;
                        margin-bottom: 1.25rem;
                    }
                    .feature-card h3 {
                        font-size: 1.4rem;
                        margin-bottom: 0.75rem;
                    }
                    .feature-card p {
                        color: #6B6B6B;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-header">
                    <h2>{"Why Choose Nakhakala"}</h2>
                    <p>{"Experience the difference of true nail artistry"}</p>
                </div>
                <div class="features-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card" key={feature.title}>
                            <div class="feature-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </RevealSection>
    }
}
