use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ImageStatus {
    Loading,
    Loaded,
    Failed,
}

#[derive(Properties, PartialEq)]
pub struct ImageWithFallbackProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or(true)]
    pub lazy: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// An `<img>` that shows a placeholder while loading and a "coming soon" card
/// if the file is missing.
#[function_component(ImageWithFallback)]
pub fn image_with_fallback(props: &ImageWithFallbackProps) -> Html {
    let status = use_state(|| ImageStatus::Loading);

    // A new source starts over.
    {
        let status = status.clone();
        use_effect_with_deps(
            move |_| {
                status.set(ImageStatus::Loading);
                || ()
            },
            props.src.clone(),
        );
    }

    let onload = {
        let status = status.clone();
        Callback::from(move |_: Event| status.set(ImageStatus::Loaded))
    };
    let onerror = {
        let status = status.clone();
        Callback::from(move |_: Event| status.set(ImageStatus::Failed))
    };

    if *status == ImageStatus::Failed {
        let label = props.title.clone().unwrap_or_else(|| props.alt.clone());
        return html! {
            <div class={classes!("image-frame", props.class.clone())}>
                <div class="image-placeholder">
                    <div class="image-placeholder-icon">{"🎨"}</div>
                    <div class="image-placeholder-text">
                        {label}
                        <br />
                        <small>{"Image coming soon"}</small>
                    </div>
                </div>
            </div>
        };
    }

    let loading = *status == ImageStatus::Loading;
    html! {
        <div class={classes!("image-frame", props.class.clone())}>
            {
                if loading {
                    html! {
                        <div class="image-placeholder">
                            <div class="image-placeholder-icon">{"✨"}</div>
                            <div class="image-placeholder-text">{"Loading..."}</div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                loading={if props.lazy { "lazy" } else { "eager" }}
                onload={onload}
                onerror={onerror}
                style={if loading { "display: none;" } else { "display: block;" }}
            />
        </div>
    }
}
