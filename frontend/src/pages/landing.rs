use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{window, HtmlElement};
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::contact_form::ContactForm;
use crate::components::faq::{FaqItem, FAQ_CSS};
use crate::components::language::{use_language, LanguageToggle};
use crate::components::particle_field::ParticleField;
use crate::components::quick_launcher::{LauncherEntry, QuickLauncher};
use crate::components::stats_bar::StatsBar;
use crate::components::tilt_card::TiltCard;
use crate::config::{ExternalApp, BRAND, CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE};
use crate::i18n::Language;
use crate::utils::document::{current_year, enclosing_link, in_page_anchor, scroll_to_anchor};
use crate::Route;

const SCROLLED_THRESHOLD: f64 = 20.0;

fn accent(app: ExternalApp) -> &'static str {
    match app {
        ExternalApp::SnapLog => "accent-blue",
        ExternalApp::FuelTrack => "accent-amber",
        ExternalApp::Field360 => "accent-purple",
    }
}

pub fn launcher_entries(language: Language) -> Vec<LauncherEntry> {
    let systems = &language.content().systems;
    ExternalApp::ALL
        .iter()
        .map(|&app| LauncherEntry {
            label: app.label().into(),
            href: app.url().into(),
            icon: app.icon().into(),
            description: systems.module(app).short.into(),
        })
        .collect()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let language = use_language();
    let t = language.content();
    let scrolled = use_state(|| false);
    let menu_open = use_state(|| false);
    let header_ref = use_node_ref();

    // Header picks up a background once the page scrolls.
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    if let Some(scroll_y) = window().and_then(|w| w.scroll_y().ok()) {
                        scrolled.set(scroll_y > SCROLLED_THRESHOLD);
                    }
                };
                update();
                let listener = window().map(|w| EventListener::new(&w, "scroll", move |_| update()));
                move || drop(listener)
            },
            (),
        );
    }

    // In-page links scroll smoothly and stop short of the fixed header.
    {
        let menu_open = menu_open.clone();
        let header_ref = header_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().and_then(|w| w.document()).map(|document| {
                    EventListener::new_with_options(
                        &document,
                        "click",
                        EventListenerOptions::enable_prevent_default(),
                        move |event| {
                            let Some(link) = enclosing_link(event.target()) else {
                                return;
                            };
                            let Some(href) = link.get_attribute("href") else {
                                return;
                            };
                            let Some(selector) = in_page_anchor(&href) else {
                                return;
                            };
                            let header = header_ref.cast::<HtmlElement>();
                            match scroll_to_anchor(selector, header.as_ref()) {
                                Ok(true) => {
                                    event.prevent_default();
                                    menu_open.set(false);
                                }
                                Ok(false) => {}
                                Err(e) => log::warn!("Failed to scroll to {}: {:?}", selector, e),
                            }
                        },
                    )
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_links = |class: &'static str| {
        t.menu
            .items()
            .iter()
            .map(|(id, label)| html! { <a key={*id} href={format!("#{}", id)} class={class}>{*label}</a> })
            .collect::<Html>()
    };

    html! {
        <div class="landing-page">
            <ParticleField />
            <QuickLauncher
                entries={launcher_entries(language)}
                placeholder={t.launcher.placeholder}
                no_results={t.launcher.no_results}
            />
            <LanguageToggle />

            <header ref={header_ref} class={classes!("site-header", (*scrolled).then_some("scrolled"))}>
                <div class="header-inner">
                    <div class="brand">
                        <img src="/logo.png" alt={BRAND} />
                        <span>{BRAND}</span>
                    </div>
                    <nav class="primary-nav" aria-label="Primary">
                        { nav_links("nav-link") }
                        <a href="#contact" class="nav-cta">{t.request_demo}</a>
                    </nav>
                    <button
                        class="menu-button"
                        onclick={toggle_menu}
                        aria-label={if *menu_open { t.close_menu } else { t.open_menu }}
                        aria-expanded={(*menu_open).to_string()}
                        aria-controls="mobile-menu"
                    >
                        {if *menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
                if *menu_open {
                    <div id="mobile-menu" class="mobile-menu">
                        { nav_links("mobile-link") }
                        <a href="#contact" class="mobile-link mobile-cta">{t.request_demo}</a>
                    </div>
                }
            </header>

            <main>
                <section id="home" class="hero">
                    <h1>{t.hero.title}</h1>
                    <p class="hero-subtitle">{t.hero.subtitle}</p>
                    <div class="hero-cta-group">
                        <a href="#systems" class="cta-primary">{t.hero.explore}</a>
                        <a href="#contact" class="cta-secondary">{t.hero.demo}</a>
                    </div>
                    <StatsBar />
                    <p class="launcher-tip">
                        {t.launcher.tip}{" "}<kbd>{"⌘K"}</kbd>{" / "}<kbd>{"Ctrl+K"}</kbd>{"."}
                    </p>
                </section>

                <section id="services" class="section alt">
                    <div class="section-head">
                        <h2>{t.services.title}</h2>
                        <p>{t.services.subtitle}</p>
                    </div>
                    <div class="card-grid">
                        { for t.services.roles.iter().map(|role| html! {
                            <div class="role-card">
                                <h3>{role.title}</h3>
                                <p>{role.body}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="systems" class="section">
                    <div class="section-head">
                        <h2>{t.systems.title}</h2>
                        <p>{t.systems.subtitle}</p>
                    </div>
                    <div class="card-grid">
                        { for ExternalApp::ALL.iter().map(|&app| html! {
                            <TiltCard key={app.anchor()} class={classes!("module-card")}>
                                <div class={classes!("module-banner", accent(app))}>
                                    <div class="module-icon">{app.icon()}</div>
                                    <h3>{app.label()}</h3>
                                </div>
                                <div class="module-body">
                                    <p>{t.systems.module(app).description}</p>
                                    <a href={app.url()} target="_blank" rel="noreferrer" class={classes!("module-open", accent(app))}>
                                        {t.systems.open_app}
                                    </a>
                                </div>
                            </TiltCard>
                        }) }
                    </div>

                    { for ExternalApp::ALL.iter().map(|&app| {
                        let module = t.systems.module(app);
                        html! {
                            <div id={app.anchor()} class="module-detail">
                                <h3>
                                    {app.label()}
                                    if app == ExternalApp::Field360 {
                                        <>{" — "}{t.systems.flagship}</>
                                    }
                                </h3>
                                <p>{module.description}</p>
                                <ul>
                                    { for module.bullets.iter().map(|bullet| html! { <li>{*bullet}</li> }) }
                                </ul>
                                <a href={app.url()} target="_blank" rel="noreferrer" class={classes!("detail-open", accent(app))}>
                                    {t.systems.open_app}
                                </a>
                            </div>
                        }
                    }) }
                </section>

                <section id="pricing" class="section alt">
                    <div class="section-head">
                        <h2>{t.pricing.title}</h2>
                        <p>{t.pricing.subtitle}</p>
                    </div>
                    <div class="card-grid">
                        { for t.pricing.plans.iter().map(|plan| html! {
                            <div key={plan.name} class="plan-card">
                                <h3>{plan.name}</h3>
                                <div class="plan-price">{plan.price}</div>
                                <ul>
                                    { for plan.items.iter().map(|item| html! { <li>{"• "}{*item}</li> }) }
                                </ul>
                                <a href="#contact" class="plan-cta">{t.pricing.cta}</a>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="faq" class="section">
                    <div class="section-head narrow">
                        <h2>{t.faq.title}</h2>
                    </div>
                    <div class="faq-list narrow">
                        { for t.faq.items.iter().enumerate().map(|(i, item)| html! {
                            <FaqItem key={i} id={format!("faq-{}", i + 1)} question={item.question}>
                                <p>{item.answer}</p>
                            </FaqItem>
                        }) }
                    </div>
                </section>

                <section id="contact" class="section dark">
                    <div class="contact-inner">
                        <h2>{t.contact.title}</h2>
                        <p class="contact-subtitle">{t.contact.subtitle}</p>
                        <ContactForm />
                        <p class="contact-direct">
                            {t.contact.direct}{" "}
                            <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                        </p>
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="brand">
                            <img src="/logo.png" alt={BRAND} />
                            <span>{BRAND}</span>
                        </div>
                        <p>{t.footer.tagline}</p>
                        <div>{t.footer.cities}</div>
                    </div>
                    <div>
                        <h4>{t.footer.links}</h4>
                        <ul>
                            { for t.menu.items().iter().map(|(id, label)| html! {
                                <li><a href={format!("#{}", id)}>{*label}</a></li>
                            }) }
                            <li><Link<Route> to={Route::Privacy}>{t.footer.privacy}</Link<Route>></li>
                            <li><Link<Route> to={Route::Terms}>{t.footer.terms}</Link<Route>></li>
                        </ul>
                    </div>
                    <div>
                        <h4>{t.footer.contact}</h4>
                        <ul>
                            <li>{"📧 "}{CONTACT_EMAIL}</li>
                            <li>{"📞 "}{CONTACT_PHONE}</li>
                            <li>{"📍 "}{CONTACT_LOCATION}</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} {}. {}", current_year(), BRAND, t.footer.rights)}</p>
                </div>
            </footer>

            <style>{LANDING_CSS}</style>
            <style>{FAQ_CSS}</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
        background: linear-gradient(135deg, #f8fafc, #f1f5f9);
        color: #1f2937;
    }
    .site-header {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 40;
        transition: all 0.3s ease;
        background: transparent;
    }
    .site-header.scrolled {
        background: rgba(255, 255, 255, 0.95);
        backdrop-filter: blur(12px);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .header-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 1rem 2rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        font-size: 1.25rem;
        font-weight: 700;
    }
    .brand img {
        width: 2.5rem;
        height: 2.5rem;
        object-fit: contain;
    }
    .primary-nav {
        display: flex;
        align-items: center;
        gap: 1.5rem;
        margin-right: 7rem;
    }
    .nav-link {
        color: #374151;
        font-weight: 500;
        text-decoration: none;
    }
    .nav-link:hover {
        color: #2563eb;
    }
    .nav-cta,
    .plan-cta {
        background: #2563eb;
        color: #fff;
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        font-weight: 600;
        text-decoration: none;
    }
    .menu-button {
        display: none;
        border: none;
        background: none;
        font-size: 1.5rem;
        color: #374151;
        cursor: pointer;
    }
    .mobile-menu {
        display: flex;
        flex-direction: column;
        gap: 0.25rem;
        padding: 0.5rem 1rem 1rem;
        background: rgba(255, 255, 255, 0.95);
        border-radius: 0 0 0.75rem 0.75rem;
    }
    .mobile-link {
        padding: 0.5rem 0.75rem;
        color: #374151;
        text-decoration: none;
        font-weight: 500;
    }
    .mobile-cta {
        background: #2563eb;
        color: #fff;
        border-radius: 0.5rem;
    }
    .hero {
        padding: 8rem 2rem 5rem;
        text-align: center;
        max-width: 80rem;
        margin: 0 auto;
    }
    .hero h1 {
        font-size: 3.75rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: #4b5563;
        max-width: 48rem;
        margin: 0 auto 2rem;
    }
    .hero-cta-group {
        display: flex;
        gap: 1rem;
        justify-content: center;
    }
    .cta-primary {
        background: linear-gradient(90deg, #2563eb, #9333ea);
        color: #fff;
        padding: 1rem 2rem;
        border-radius: 0.75rem;
        font-weight: 600;
        text-decoration: none;
    }
    .cta-secondary {
        border: 2px solid #d1d5db;
        color: #374151;
        padding: 1rem 2rem;
        border-radius: 0.75rem;
        font-weight: 600;
        text-decoration: none;
    }
    .cta-secondary:hover {
        border-color: #2563eb;
        color: #2563eb;
    }
    .launcher-tip {
        margin-top: 0.75rem;
        font-size: 0.75rem;
        color: #94a3b8;
    }
    .launcher-tip kbd {
        padding: 0.125rem 0.25rem;
        border-radius: 0.25rem;
        background: #e2e8f0;
    }
    .section {
        padding: 5rem 2rem;
    }
    .section.alt {
        background: #fff;
    }
    .section.dark {
        background: #111827;
        color: #fff;
    }
    .section-head {
        text-align: center;
        margin: 0 auto 3.5rem;
        max-width: 48rem;
    }
    .section-head h2 {
        font-size: 2.25rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .section-head p {
        font-size: 1.25rem;
        color: #4b5563;
    }
    .narrow {
        max-width: 64rem;
        margin-left: auto;
        margin-right: auto;
    }
    .card-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .role-card,
    .plan-card {
        background: #fff;
        border-radius: 1rem;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
        border: 1px solid #f3f4f6;
        padding: 2rem;
    }
    .role-card h3,
    .plan-card h3 {
        font-size: 1.5rem;
        margin: 0 0 0.75rem;
    }
    .role-card p {
        color: #4b5563;
        line-height: 1.6;
    }
    .plan-price {
        font-size: 1.875rem;
        font-weight: 800;
        color: #2563eb;
        margin-bottom: 1rem;
    }
    .plan-card ul,
    .site-footer ul {
        list-style: none;
        padding: 0;
    }
    .plan-card li {
        color: #4b5563;
        margin-bottom: 0.5rem;
    }
    .plan-cta {
        display: block;
        text-align: center;
        padding: 0.75rem 1.5rem;
    }
    .module-card {
        background-color: #fff;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
        border: 1px solid #e5e7eb;
        overflow: hidden;
    }
    .module-banner {
        padding: 1.5rem;
        color: #fff;
    }
    .module-banner h3 {
        margin: 0;
        font-size: 1.5rem;
    }
    .module-icon {
        font-size: 2.25rem;
        margin-bottom: 1rem;
    }
    .module-body {
        padding: 1.5rem;
    }
    .module-body p {
        color: #4b5563;
        line-height: 1.6;
        margin-bottom: 1.5rem;
    }
    .module-open,
    .detail-open {
        color: #fff;
        font-weight: 600;
        border-radius: 0.5rem;
        text-decoration: none;
        text-align: center;
    }
    .module-open {
        display: block;
        padding: 0.75rem 1.5rem;
    }
    .detail-open {
        display: inline-flex;
        padding: 0.75rem 1.25rem;
    }
    .accent-blue {
        background: linear-gradient(90deg, #3b82f6, #06b6d4);
    }
    .accent-amber {
        background: linear-gradient(90deg, #f59e0b, #f97316);
    }
    .accent-purple {
        background: linear-gradient(90deg, #a855f7, #ec4899);
    }
    .module-detail {
        max-width: 80rem;
        margin: 2rem auto 0;
        padding: 2rem;
        background: #fff;
        border-radius: 1rem;
        border: 1px solid #e5e7eb;
        box-sizing: border-box;
    }
    .module-detail:first-of-type {
        margin-top: 4rem;
    }
    .module-detail h3 {
        font-size: 1.5rem;
        margin: 0 0 0.5rem;
    }
    .module-detail p,
    .module-detail li {
        color: #4b5563;
    }
    .module-detail ul {
        padding-left: 1.5rem;
        margin-bottom: 1.5rem;
    }
    .contact-inner {
        max-width: 56rem;
        margin: 0 auto;
        text-align: center;
    }
    .contact-inner h2 {
        font-size: 2.25rem;
        margin-bottom: 1.5rem;
    }
    .contact-subtitle {
        font-size: 1.25rem;
        color: #d1d5db;
        margin-bottom: 2rem;
    }
    .contact-direct {
        color: #9ca3af;
    }
    .contact-direct a {
        color: #60a5fa;
    }
    .site-footer {
        background: #111827;
        color: #fff;
        padding: 3rem 2rem;
    }
    .footer-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 2fr 1fr 1fr;
        gap: 2rem;
    }
    .footer-brand p,
    .footer-brand div:last-child,
    .site-footer li {
        color: #9ca3af;
    }
    .site-footer li {
        margin-bottom: 0.5rem;
    }
    .site-footer a {
        color: inherit;
        text-decoration: none;
    }
    .site-footer a:hover {
        color: #fff;
    }
    .footer-bottom {
        border-top: 1px solid #1f2937;
        margin-top: 2rem;
        padding-top: 2rem;
        text-align: center;
        color: #9ca3af;
    }
    @media (max-width: 768px) {
        .primary-nav {
            display: none;
        }
        .menu-button {
            display: block;
            margin-right: 6rem;
        }
        .hero h1 {
            font-size: 2.25rem;
        }
        .hero-cta-group {
            flex-direction: column;
        }
        .card-grid,
        .footer-grid {
            grid-template-columns: 1fr;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::quick_launcher::filter_entries;

    #[test]
    fn launcher_lists_the_three_apps_in_page_order() {
        let entries = launcher_entries(Language::En);
        let labels: Vec<_> = entries.iter().map(|e| e.label.to_string()).collect();
        assert_eq!(labels, vec!["RB SnapLog 360", "RB FuelTrack 360", "RB Field360"]);
        assert_eq!(entries[2].href.as_str(), ExternalApp::Field360.url());
    }

    #[test]
    fn launcher_descriptions_follow_language() {
        let en = launcher_entries(Language::En);
        let es = launcher_entries(Language::Es);
        assert_eq!(en[1].description.as_str(), "Fuel audit & route control");
        assert_eq!(es[1].description.as_str(), "Auditoría de combustible y rutas");
    }

    #[test]
    fn searching_field_finds_only_field360() {
        let entries = launcher_entries(Language::Es);
        let hits = filter_entries(&entries, "field");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label.as_str(), "RB Field360");
        assert_eq!(filter_entries(&entries, "RB").len(), 3);
    }
}
