use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::hooks::scroll_to_top;
use crate::navigation;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();

    if !navigation::back_to_top_visible(scroll_y) {
        return html! {};
    }

    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <>
            <style>
                {r#"
                    .back-to-top {
                        position: fixed;
                        bottom: 20px;
                        left: 20px;
                        width: 50px;
                        height: 50px;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #D4AF37 0%, #E6C76B 50%, #B8941F 100%);
                        border: none;
                        color: #FFFFFF;
                        font-size: 20px;
                        cursor: pointer;
                        z-index: 1020;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        animation: fadeIn 0.3s ease-out;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .back-to-top:hover {
                        transform: scale(1.1);
                        box-shadow: 0 8px 25px rgba(212, 175, 55, 0.4);
                    }
                    .back-to-top:focus-visible {
                        outline: 2px solid #D4AF37;
                        outline-offset: 4px;
                    }
                    @media (max-width: 640px) {
                        .back-to-top {
                            bottom: 16px;
                            left: 16px;
                            width: 45px;
                            height: 45px;
                            font-size: 18px;
                        }
                    }
                "#}
            </style>
            <button class="back-to-top" onclick={onclick} aria-label="Back to top" title="Back to top">
                {"↑"}
            </button>
        </>
    }
}
