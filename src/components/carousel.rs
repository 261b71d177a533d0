use std::rc::Rc;

use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::carousel::{AutoplayOptions, Slide};
use crate::components::image::ImageWithFallback;
use crate::hooks::use_carousel;
use crate::input::{self, CarouselCommand};

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Rc<[Slide]>,
    #[prop_or_default]
    pub options: AutoplayOptions,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let carousel = use_carousel(props.slides.clone(), props.options);
    let region = use_node_ref();

    if carousel.len == 0 {
        return html! {};
    }
    let len = carousel.len;
    let index = carousel.index.min(len - 1);

    let onkeydown = {
        let region = region.clone();
        let dispatch = carousel.dispatch.clone();
        Callback::from(move |e: KeyboardEvent| {
            let Some(region) = region.cast::<Element>() else {
                return;
            };
            if let Some(command) = input::keyboard_command(&e, &region, len) {
                e.prevent_default();
                dispatch.emit(command);
            }
        })
    };
    let on_previous = carousel.dispatch.reform(|_: MouseEvent| CarouselCommand::Previous);
    let on_next = carousel.dispatch.reform(|_: MouseEvent| CarouselCommand::Next);

    html! {
        <div
            ref={region}
            class="carousel"
            tabindex="0"
            role="region"
            aria-roledescription="carousel"
            aria-label="Nail art gallery"
            onkeydown={onkeydown}
        >
            <style>
                {r#"
                    .carousel {
                        position: relative;
                        max-width: 720px;
                        margin: 0 auto 3rem;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        background: #FFFFFF;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.12);
                        outline: none;
                    }
                    .carousel:focus-visible {
                        box-shadow: 0 0 0 3px #D4AF37, 0 10px 30px rgba(0, 0, 0, 0.12);
                    }
                    .carousel-viewport {
                        position: relative;
                        aspect-ratio: 4 / 3;
                    }
                    .carousel-slide {
                        position: absolute;
                        inset: 0;
                        margin: 0;
                        opacity: 0;
                        transform: translateX(40px);
                        transition: opacity 0.5s ease, transform 0.5s ease;
                        pointer-events: none;
                    }
                    .carousel-slide.active {
                        opacity: 1;
                        transform: translateX(0);
                        pointer-events: auto;
                    }
                    .carousel-slide figcaption {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1.5rem;
                        color: #FFFFFF;
                        background: linear-gradient(transparent, rgba(10, 10, 10, 0.75));
                        text-align: left;
                    }
                    .carousel-slide figcaption h3 {
                        color: #FFFFFF;
                        font-size: 1.5rem;
                        margin-bottom: 0.25rem;
                    }
                    .carousel-slide figcaption p {
                        margin: 0;
                        color: #F7E7CE;
                    }
                    .carousel-control {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        width: 44px;
                        height: 44px;
                        border-radius: 50%;
                        border: none;
                        background: rgba(255, 255, 255, 0.85);
                        color: #0A0A0A;
                        font-size: 1.5rem;
                        cursor: pointer;
                        z-index: 2;
                        transition: background 0.2s ease;
                    }
                    .carousel-control:hover {
                        background: #D4AF37;
                        color: #FFFFFF;
                    }
                    .carousel-control.prev { left: 1rem; }
                    .carousel-control.next { right: 1rem; }
                    .carousel-indicators {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 1rem;
                    }
                    .carousel-indicator {
                        width: 10px;
                        height: 10px;
                        padding: 0;
                        border-radius: 50%;
                        border: none;
                        background: #D3D3D3;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .carousel-indicator.active {
                        background: #D4AF37;
                        width: 28px;
                        border-radius: 5px;
                    }
                    .carousel-counter {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 999px;
                        background: rgba(10, 10, 10, 0.6);
                        color: #FFFFFF;
                        font-size: 0.875rem;
                        z-index: 2;
                    }
                "#}
            </style>
            <div class="carousel-viewport" aria-live="polite">
                { for props.slides.iter().enumerate().map(|(i, slide)| {
                    let active = i == index;
                    html! {
                        <figure
                            key={slide.source.clone()}
                            class={classes!("carousel-slide", active.then(|| "active"))}
                            aria-hidden={(!active).to_string()}
                        >
                            <ImageWithFallback
                                src={slide.source.clone()}
                                alt={slide.alt_text.clone()}
                                title={Some(AttrValue::from(slide.alt_text.clone()))}
                                lazy={i != 0}
                            />
                            <figcaption>
                                <h3>{&slide.alt_text}</h3>
                                <p>{&slide.caption}</p>
                            </figcaption>
                        </figure>
                    }
                }) }
            </div>
            <span class="carousel-counter">{format!("{} / {}", index + 1, len)}</span>
            <button class="carousel-control prev" aria-label="Previous design" onclick={on_previous}>{"‹"}</button>
            <button class="carousel-control next" aria-label="Next design" onclick={on_next}>{"›"}</button>
            <div class="carousel-indicators">
                { for (0..len).map(|i| {
                    let onclick = carousel.dispatch.reform(move |_: MouseEvent| CarouselCommand::GoTo(i));
                    html! {
                        <button
                            class={classes!("carousel-indicator", (i == index).then(|| "active"))}
                            aria-label={format!("Show design {}", i + 1)}
                            aria-current={(i == index).then(|| "true")}
                            onclick={onclick}
                        />
                    }
                }) }
            </div>
        </div>
    }
}
