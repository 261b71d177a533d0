use yew::prelude::*;

use crate::config;
use crate::content::site::{NAV_ITEMS, SERVICES};
use crate::hooks::scroll_to_section;

#[function_component(Footer)]
pub fn footer() -> Html {
    let profile = config::instagram_profile_url();

    html! {
        <footer id="contact" class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #0A0A0A;
                        color: #BDBDBD;
                        padding: 5rem 0 2rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr 1fr;
                        gap: 3rem;
                        margin-bottom: 3rem;
                    }
                    .footer-brand h3 {
                        color: #FFFFFF;
                        font-size: 1.75rem;
                        margin-bottom: 1rem;
                    }
                    .footer-brand h3 span {
                        color: #D4AF37;
                    }
                    .site-footer h4 {
                        color: #FFFFFF;
                        margin-bottom: 1rem;
                    }
                    .footer-links {
                        list-style: none;
                    }
                    .footer-links li {
                        margin-bottom: 0.5rem;
                    }
                    .footer-links a,
                    .footer-links button {
                        background: none;
                        border: none;
                        font: inherit;
                        color: #BDBDBD;
                        text-decoration: none;
                        cursor: pointer;
                        transition: color 0.2s ease;
                    }
                    .footer-links a:hover,
                    .footer-links button:hover {
                        color: #D4AF37;
                    }
                    .footer-bottom {
                        border-top: 1px solid #2A2A2A;
                        padding-top: 2rem;
                        text-align: center;
                        font-size: 0.9rem;
                    }
                    @media (max-width: 900px) {
                        .footer-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    @media (max-width: 560px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3>{"Nakha"}<span>{"kala"}</span></h3>
                        <p>{"Premium nail artistry and custom press-on nails, crafted with love."}</p>
                    </div>
                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul class="footer-links">
                            { for NAV_ITEMS.iter().filter(|item| item.id != "contact").map(|item| {
                                let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(item.id));
                                html! {
                                    <li key={item.id}>
                                        <button onclick={onclick}>{item.label}</button>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Services"}</h4>
                        <ul class="footer-links">
                            { for SERVICES.iter().take(5).map(|service| html! {
                                <li key={service.title}>
                                    <button onclick={Callback::from(|_: MouseEvent| scroll_to_section("services"))}>
                                        {service.title}
                                    </button>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Connect"}</h4>
                        <ul class="footer-links">
                            <li>
                                <a href={profile.clone()} target="_blank" rel="noopener noreferrer">
                                    {format!("📸 @{}", config::INSTAGRAM_HANDLE)}
                                </a>
                            </li>
                            <li>
                                <a href={profile} target="_blank" rel="noopener noreferrer">
                                    {"💌 Book via DM"}
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    {"© 2024 Nakhakala. All rights reserved. Crafted with love for beautiful nails."}
                </div>
            </div>
        </footer>
    }
}
