use yew::prelude::*;

use crate::content::site::NAV_ITEMS;
use crate::hooks::{scroll_to_top, use_navigation};

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let nav = use_navigation();

    let on_logo = {
        let close_menu = nav.close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            close_menu.emit(());
            scroll_to_top();
        })
    };

    let on_overlay = nav.close_menu.reform(|_: MouseEvent| ());

    let menu_class = if nav.menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", nav.scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 1000;
                        padding: 1.5rem 0;
                        background: transparent;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 0;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.08);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-family: 'Playfair Display', Georgia, serif;
                        font-size: 1.75rem;
                        font-weight: 700;
                        color: #0A0A0A;
                        text-decoration: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .nav-logo span {
                        color: #D4AF37;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                        list-style: none;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        font: inherit;
                        font-weight: 500;
                        color: #1A1A1A;
                        cursor: pointer;
                        position: relative;
                        padding: 0.25rem 0;
                    }
                    .nav-link::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        bottom: -4px;
                        width: 0;
                        height: 2px;
                        background: #D4AF37;
                        transition: width 0.3s ease;
                    }
                    .nav-link:hover::after,
                    .nav-link.active::after {
                        width: 100%;
                    }
                    .nav-link.active {
                        color: #D4AF37;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                        z-index: 1001;
                    }
                    .burger-menu span {
                        width: 25px;
                        height: 2px;
                        background: #0A0A0A;
                        transition: all 0.3s ease;
                    }
                    .burger-menu.open span:nth-child(1) {
                        transform: rotate(45deg) translate(5px, 5px);
                    }
                    .burger-menu.open span:nth-child(2) {
                        opacity: 0;
                    }
                    .burger-menu.open span:nth-child(3) {
                        transform: rotate(-45deg) translate(5px, -5px);
                    }
                    .nav-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(10, 10, 10, 0.4);
                        z-index: 999;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-links {
                            position: fixed;
                            top: 0;
                            right: -100%;
                            width: 75%;
                            height: 100vh;
                            flex-direction: column;
                            justify-content: center;
                            align-items: center;
                            background: #FFFFFF;
                            box-shadow: -5px 0 30px rgba(0, 0, 0, 0.1);
                            transition: right 0.3s ease;
                            z-index: 1000;
                        }
                        .nav-links.mobile-menu-open {
                            right: 0;
                        }
                        .nav-link {
                            font-size: 1.25rem;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={on_logo}>
                    {"Nakha"}<span>{"kala"}</span>
                </a>

                <button
                    class={classes!("burger-menu", nav.menu_open.then(|| "open"))}
                    onclick={nav.toggle_menu.clone()}
                    aria-label="Toggle navigation"
                    aria-expanded={nav.menu_open.to_string()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={menu_class}>
                    { for NAV_ITEMS.iter().map(|item| {
                        let onclick = nav.scroll_to.reform(move |_: MouseEvent| item.id.to_string());
                        html! {
                            <li key={item.id}>
                                <button
                                    class={classes!("nav-link", (nav.active == item.id).then(|| "active"))}
                                    onclick={onclick}
                                >
                                    {item.label}
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            </div>
            {
                if nav.menu_open {
                    html! { <div class="nav-overlay" onclick={on_overlay}></div> }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
