use yew::prelude::*;

use crate::config;

#[function_component(FloatingContact)]
pub fn floating_contact() -> Html {
    let open = use_state(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let profile = config::instagram_profile_url();

    html! {
        <div class="floating-contact">
            <style>
                {r#"
                    .floating-contact {
                        position: fixed;
                        bottom: 20px;
                        right: 20px;
                        z-index: 1030;
                        display: flex;
                        flex-direction: column;
                        align-items: flex-end;
                        gap: 12px;
                    }
                    .contact-options {
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                        align-items: flex-end;
                        animation: fadeIn 0.3s ease-out;
                    }
                    .contact-option {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.25rem;
                        border-radius: 999px;
                        background: #FFFFFF;
                        color: #0A0A0A;
                        text-decoration: none;
                        box-shadow: 0 4px 15px rgba(0, 0, 0, 0.15);
                        transition: transform 0.2s ease;
                    }
                    .contact-option:hover {
                        transform: scale(1.05);
                    }
                    .contact-main {
                        position: relative;
                        width: 60px;
                        height: 60px;
                        border-radius: 50%;
                        border: none;
                        font-size: 24px;
                        cursor: pointer;
                        color: #FFFFFF;
                        background: linear-gradient(45deg, #f09433 0%, #e6683c 25%, #dc2743 50%, #cc2366 75%, #bc1888 100%);
                        box-shadow: 0 8px 25px rgba(220, 39, 67, 0.35);
                        transition: transform 0.3s ease;
                    }
                    .contact-main.open {
                        transform: rotate(45deg);
                    }
                    .contact-pulse {
                        position: absolute;
                        inset: -4px;
                        border-radius: 50%;
                        border: 2px solid rgba(220, 39, 67, 0.5);
                        animation: pulse 2s ease-in-out infinite;
                        pointer-events: none;
                    }
                "#}
            </style>
            {
                if *open {
                    html! {
                        <div class="contact-options">
                            <a class="contact-option" href={profile.clone()} target="_blank" rel="noopener noreferrer">
                                <span>{"📸"}</span>
                                <span>{"Instagram DM"}</span>
                            </a>
                            <a class="contact-option" href={profile} target="_blank" rel="noopener noreferrer">
                                <span>{"💌"}</span>
                                <span>{"Book Now"}</span>
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <button
                class={classes!("contact-main", (*open).then(|| "open"))}
                onclick={toggle}
                aria-label={if *open { "Close booking options" } else { "Open booking options" }}
                aria-expanded={open.to_string()}
            >
                <span class="contact-pulse"></span>
                { if *open { "✕" } else { "📸" } }
            </button>
        </div>
    }
}
