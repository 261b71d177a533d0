use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Reset, palette and the classes shared by every section.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            *, *::before, *::after {
                box-sizing: border-box;
                margin: 0;
                padding: 0;
            }

            html {
                scroll-behavior: smooth;
            }

            body {
                font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                line-height: 1.6;
                color: #1A1A1A;
                background: #FAFAFA;
                -webkit-font-smoothing: antialiased;
            }

            h1, h2, h3, h4 {
                font-family: 'Playfair Display', Georgia, serif;
                color: #0A0A0A;
                line-height: 1.2;
            }

            a {
                color: inherit;
            }

            img {
                max-width: 100%;
                display: block;
            }

            @keyframes fadeIn {
                from { opacity: 0; transform: translateY(10px); }
                to { opacity: 1; transform: translateY(0); }
            }

            .container {
                max-width: 1200px;
                margin: 0 auto;
                padding: 0 1.5rem;
            }

            .page-section {
                padding: 6rem 0;
            }

            .section-header {
                text-align: center;
                margin-bottom: 3.5rem;
            }

            .section-header h2 {
                font-size: 2.75rem;
                margin-bottom: 1rem;
            }

            .section-header p {
                color: #6B6B6B;
                max-width: 640px;
                margin: 0 auto;
            }

            .eyebrow {
                display: inline-block;
                color: #D4AF37;
                font-size: 0.8rem;
                font-weight: 600;
                letter-spacing: 0.2em;
                margin-bottom: 1rem;
            }

            .reveal {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.8s ease, transform 0.8s ease;
            }

            .reveal.revealed {
                opacity: 1;
                transform: translateY(0);
            }

            .image-frame {
                position: relative;
                width: 100%;
                height: 100%;
                overflow: hidden;
                background: #F5F5F5;
            }

            .image-frame img {
                width: 100%;
                height: 100%;
                object-fit: cover;
            }

            .image-placeholder {
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                min-height: 200px;
                height: 100%;
                gap: 0.5rem;
                color: #8A8A8A;
                text-align: center;
                background: linear-gradient(135deg, #F7E7CE 0%, #FAFAFA 100%);
            }

            .image-placeholder-icon {
                font-size: 2.5rem;
            }

            .btn {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
                padding: 0.9rem 2rem;
                border-radius: 999px;
                font-size: 1rem;
                font-weight: 600;
                text-decoration: none;
                cursor: pointer;
                border: 2px solid transparent;
                transition: all 0.3s ease;
            }

            .btn-primary {
                background: linear-gradient(135deg, #D4AF37 0%, #E6C76B 50%, #B8941F 100%);
                color: #FFFFFF;
            }

            .btn-primary:hover {
                transform: translateY(-2px);
                box-shadow: 0 8px 25px rgba(212, 175, 55, 0.4);
            }

            .btn-secondary {
                background: transparent;
                color: #0A0A0A;
                border-color: #0A0A0A;
            }

            .btn-secondary:hover {
                background: #0A0A0A;
                color: #FFFFFF;
            }

            @media (max-width: 768px) {
                .page-section {
                    padding: 4rem 0;
                }
                .section-header h2 {
                    font-size: 2rem;
                }
            }

            @media (prefers-reduced-motion: reduce) {
                .reveal {
                    opacity: 1;
                    transform: none;
                    transition: none;
                }
            }
        "#)} />
    }
}
