use yew::prelude::*;
use yew_router::components::Link;

use crate::components::language::{use_language, LanguageToggle};
use crate::config::{BRAND, CONTACT_EMAIL};
use crate::Route;

#[derive(Clone, Copy, PartialEq)]
pub enum LegalDocument {
    Privacy,
    Terms,
}

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub document: LegalDocument,
}

#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    let language = use_language();
    let legal = &language.content().legal;
    let (title, body) = match props.document {
        LegalDocument::Privacy => (legal.privacy_title, legal.privacy_body),
        LegalDocument::Terms => (legal.terms_title, legal.terms_body),
    };

    // Legal pages are reached from the footer; start at the top.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        props.document,
    );

    html! {
        <div class="legal-page">
            <LanguageToggle />
            <h1>{title}</h1>
            { for body.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
            <p class="legal-contact">{BRAND}{" · "}<a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a></p>
            <Link<Route> to={Route::Home} classes="legal-back">{legal.back}</Link<Route>>
            <style>{r#"
                .legal-page {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 6rem 2rem 4rem;
                    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
                    color: #1f2937;
                    line-height: 1.7;
                }
                .legal-page h1 {
                    font-size: 2.25rem;
                    margin-bottom: 2rem;
                }
                .legal-contact {
                    color: #6b7280;
                    margin-top: 2rem;
                }
                .legal-back {
                    display: inline-block;
                    margin-top: 1.5rem;
                    color: #2563eb;
                    font-weight: 600;
                    text-decoration: none;
                }
            "#}</style>
        </div>
    }
}
