use yew::prelude::*;

use crate::i18n::Language;

#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub set_language: Callback<Language>,
}

/// Active language, or the default when rendered outside the provider.
#[hook]
pub fn use_language() -> Language {
    use_context::<LanguageContext>()
        .map(|ctx| ctx.language)
        .unwrap_or_default()
}

#[function_component(LanguageToggle)]
pub fn language_toggle() -> Html {
    let ctx = use_context::<LanguageContext>();
    let Some(ctx) = ctx else {
        return html! {};
    };

    html! {
        <div class="language-toggle">
            { for Language::ALL.iter().map(|&language| {
                let onclick = {
                    let set_language = ctx.set_language.clone();
                    Callback::from(move |_: MouseEvent| set_language.emit(language))
                };
                html! {
                    <button
                        class={classes!("lang-button", (ctx.language == language).then_some("active"))}
                        aria-pressed={(ctx.language == language).to_string()}
                        {onclick}
                    >
                        {language.toggle_label()}
                    </button>
                }
            }) }
            <style>{r#"
                .language-toggle {
                    position: fixed;
                    top: 1rem;
                    right: 1rem;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(4px);
                    border-radius: 9999px;
                    padding: 0.25rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .lang-button {
                    border: none;
                    background: transparent;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .lang-button:hover {
                    color: #2563eb;
                }
                .lang-button.active {
                    background: #2563eb;
                    color: #fff;
                }
            "#}</style>
        </div>
    }
}
