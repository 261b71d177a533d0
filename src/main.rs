use log::info;
use yew::prelude::*;

mod carousel;
mod config;
mod embed;
mod error;
mod feed;
mod hooks;
mod input;
mod navigation;
mod styles;
mod timer;

mod content {
    pub mod gallery;
    pub mod site;
}
mod components {
    pub mod back_to_top;
    pub mod carousel;
    pub mod floating_contact;
    pub mod image;
    pub mod reveal;
    pub mod spinner;
}
mod sections {
    pub mod about;
    pub mod brand;
    pub mod features;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod navigation;
    pub mod services;
}

use components::{back_to_top::BackToTop, floating_contact::FloatingContact};
use sections::{
    about::About,
    brand::BrandFeature,
    features::Features,
    footer::Footer,
    gallery::Gallery,
    hero::Hero,
    navigation::Navigation,
    services::Services,
};
use styles::GlobalStyles;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <GlobalStyles />
            <Navigation />
            <main>
                <Hero />
                <Features />
                <Services />
                <Gallery />
                <BrandFeature />
                <About />
            </main>
            <Footer />
            <FloatingContact />
            <BackToTop />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
