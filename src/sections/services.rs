use yew::prelude::*;

use crate::components::image::ImageWithFallback;
use crate::components::reveal::RevealSection;
use crate::config;
use crate::content::site::{Service, BOOKING_STEPS, SERVICES};

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    html! {
        <article class={classes!("service-card", service.popular.then(|| "popular"))}>
            {
                if service.popular {
                    html! { <span class="popular-badge">{"Popular Choice"}</span> }
                } else {
                    html! {}
                }
            }
            <div class="service-image">
                <ImageWithFallback src={service.image} alt={service.title} />
            </div>
            <div class="service-body">
                <div class="service-heading">
                    <span class="service-icon">{service.icon}</span>
                    <h3>{service.title}</h3>
                </div>
                <div class="service-price">{service.price}</div>
                <p class="service-description">{service.description}</p>
                <ul class="service-features">
                    { for service.features.iter().map(|feature| html! {
                        <li>{*feature}</li>
                    }) }
                </ul>
            </div>
        </article>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <RevealSection id="services" class="services">
            <style>
                {r#"
                    .services {
                        background: linear-gradient(180deg, #FAFAFA 0%, #FFFFFF 100%);
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                        gap: 2rem;
                        margin-bottom: 5rem;
                    }
                    .service-card {
                        position: relative;
                        background: #FFFFFF;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .service-card:hover {
                        transform: translateY(-6px);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                    }
                    .service-card.popular {
                        border: 2px solid #D4AF37;
                    }
                    .popular-badge {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        z-index: 2;
                        padding: 0.35rem 0.9rem;
                        border-radius: 999px;
                        background: #D4AF37;
                        color: #FFFFFF;
                        font-size: 0.8rem;
                        font-weight: 600;
                    }
                    .service-image {
                        height: 220px;
                    }
                    .service-body {
                        padding: 1.75rem;
                    }
                    .service-heading {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 0.5rem;
                    }
                    .service-icon {
                        font-size: 1.5rem;
                    }
                    .service-heading h3 {
                        font-size: 1.3rem;
                    }
                    .service-price {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #D4AF37;
                        margin-bottom: 0.75rem;
                    }
                    .service-description {
                        color: #6B6B6B;
                        margin-bottom: 1rem;
                    }
                    .service-features {
                        list-style: none;
                    }
                    .service-features li {
                        padding: 0.3rem 0;
                        color: #4A4A4A;
                    }
                    .service-features li::before {
                        content: '✓';
                        color: #D4AF37;
                        margin-right: 0.5rem;
                    }
                    .booking {
                        text-align: center;
                        padding: 3.5rem 2rem;
                        border-radius: 2rem;
                        background: #0A0A0A;
                        color: #FFFFFF;
                    }
                    .booking h3 {
                        color: #FFFFFF;
                        font-size: 2rem;
                        margin-bottom: 2.5rem;
                    }
                    .booking-steps {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                        margin-bottom: 2.5rem;
                    }
                    .booking-step-number {
                        width: 48px;
                        height: 48px;
                        margin: 0 auto 1rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #D4AF37;
                        font-weight: 700;
                    }
                    .booking-step h4 {
                        color: #FFFFFF;
                        margin-bottom: 0.5rem;
                    }
                    .booking-step p {
                        color: #BDBDBD;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-header">
                    <span class="eyebrow">{"💅 Service Menu"}</span>
                    <h2>{"Our Services"}</h2>
                    <p>{"Professional nail care and artistry at prices that make luxury accessible"}</p>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <ServiceCard key={service.title} service={*service} />
                    }) }
                </div>
                <div class="booking">
                    <h3>{"How to Book"}</h3>
                    <div class="booking-steps">
                        { for BOOKING_STEPS.iter().enumerate().map(|(i, (title, description))| html! {
                            <div class="booking-step" key={*title}>
                                <div class="booking-step-number">{i + 1}</div>
                                <h4>{*title}</h4>
                                <p>{*description}</p>
                            </div>
                        }) }
                    </div>
                    <a
                        href={config::instagram_profile_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-primary"
                    >
                        {"Book Now on Instagram"}
                    </a>
                </div>
            </div>
        </RevealSection>
    }
}
