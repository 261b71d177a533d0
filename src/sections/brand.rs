use yew::prelude::*;

use crate::components::reveal::RevealSection;
use crate::content::site::BRAND_DESCRIPTION;

#[function_component(BrandFeature)]
pub fn brand_feature() -> Html {
    html! {
        <RevealSection class="brand-feature">
            <style>
                {r#"
                    .brand-feature {
                        text-align: center;
                        background: #0A0A0A;
                        color: #FFFFFF;
                    }
                    .brand-feature h2 {
                        color: #FFFFFF;
                        font-size: 3rem;
                        margin-bottom: 1.5rem;
                    }
                    .brand-feature h2 em {
                        color: #D4AF37;
                    }
                    .brand-feature p {
                        max-width: 680px;
                        margin: 0 auto;
                        color: #CFCFCF;
                        font-size: 1.15rem;
                    }
                    @media (max-width: 768px) {
                        .brand-feature h2 {
                            font-size: 2rem;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <h2>{"Where Art Meets "}<em>{"Your Fingertips"}</em></h2>
                <p>{BRAND_DESCRIPTION}</p>
            </div>
        </RevealSection>
    }
}
