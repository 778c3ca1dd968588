use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod i18n;
mod pages;
mod utils;

use components::language::LanguageContext;
use i18n::Language;
use pages::landing::Landing;
use pages::legal::{LegalDocument, LegalPage};
use utils::document::apply_metadata;
use utils::storage::{load_language, save_language, LocalStore};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Landing /> },
        Route::Privacy => html! { <LegalPage document={LegalDocument::Privacy} /> },
        Route::Terms => html! { <LegalPage document={LegalDocument::Terms} /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let language = use_state(|| load_language(&LocalStore));

    // Persist the choice and keep <title>, <meta description> and <html lang> in step.
    use_effect_with_deps(
        |language: &Language| {
            if !save_language(&LocalStore, *language) {
                log::info!("Language preference not persisted");
            }
            if let Err(e) = apply_metadata(*language) {
                log::warn!("Failed to update document metadata: {:?}", e);
            }
            || ()
        },
        *language,
    );

    let context = LanguageContext {
        language: *language,
        set_language: {
            let language = language.clone();
            Callback::from(move |next: Language| language.set(next))
        },
    };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<LanguageContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::get_log_level()));
    log::info!("Starting {} landing page", config::SUITE);
    yew::Renderer::<App>::new().render();
}
