use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(AttrValue::Static("Loading beautiful nail art..."))]
    pub message: AttrValue,
    #[prop_or_default]
    pub minimal: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div class={classes!("loading-container", props.minimal.then(|| "minimal"))}>
            <style>
                {r#"
                    @keyframes spin {
                        0% { transform: rotate(0deg); }
                        100% { transform: rotate(360deg); }
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.5; }
                    }
                    .loading-container {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                        min-height: 200px;
                        animation: fadeIn 0.5s ease-out;
                    }
                    .loading-container.minimal {
                        min-height: 100px;
                    }
                    .loading-spinner {
                        width: 50px;
                        height: 50px;
                        border: 3px solid #E8E8E8;
                        border-top: 3px solid #D4AF37;
                        border-radius: 50%;
                        animation: spin 1s linear infinite;
                        margin-bottom: 1rem;
                    }
                    .loading-emoji {
                        font-size: 1.5rem;
                        margin-bottom: 0.5rem;
                        animation: pulse 2s ease-in-out infinite;
                    }
                    .loading-text {
                        color: #525252;
                        font-weight: 500;
                        animation: pulse 1.5s ease-in-out infinite;
                        margin: 0;
                    }
                "#}
            </style>
            {
                if props.minimal {
                    html! { <div class="loading-spinner"></div> }
                } else {
                    html! {
                        <>
                            <span class="loading-emoji">{"💅"}</span>
                            <div class="loading-spinner"></div>
                            <p class="loading-text">{props.message.clone()}</p>
                        </>
                    }
                }
            }
        </div>
    }
}
