use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub id: AttrValue,
    pub children: Children,
}

/// Whether a location hash such as `#faq-2` points at the item `id`.
pub fn hash_targets(hash: &str, id: &str) -> bool {
    hash.strip_prefix('#') == Some(id)
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);
    let pending_scroll = use_mut_ref(|| None::<Timeout>);

    // Open when the URL hash points at this item, on mount and on every hash change.
    {
        let is_open = is_open.clone();
        let pending_scroll = pending_scroll.clone();
        let id = props.id.clone();

        use_effect_with_deps(
            move |_| {
                let check_hash = {
                    let pending_scroll = pending_scroll.clone();
                    move || {
                        let Some(window) = web_sys::window() else {
                            return;
                        };
                        let hash = window.location().hash().unwrap_or_default();
                        if hash_targets(&hash, &id) {
                            is_open.set(true);
                            // Give the answer a moment to expand before scrolling to it.
                            let id = id.clone();
                            *pending_scroll.borrow_mut() = Some(Timeout::new(100, move || {
                                if let Some(element) = web_sys::window()
                                    .and_then(|w| w.document())
                                    .and_then(|doc| doc.get_element_by_id(&id))
                                {
                                    element.scroll_into_view_with_bool(true);
                                }
                            }));
                        }
                    }
                };

                check_hash();

                let listener = web_sys::window()
                    .map(|window| EventListener::new(&window, "hashchange", move |_| check_hash()));
                move || {
                    drop(listener);
                    pending_scroll.borrow_mut().take();
                }
            },
            (),
        );
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div id={props.id.clone()} class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{"▼"}</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

pub const FAQ_CSS: &str = r#"
    .faq-list {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .faq-item {
        background: #fff;
        border: 1px solid #e5e7eb;
        border-radius: 0.75rem;
        padding: 1.5rem;
        transition: box-shadow 0.2s ease;
    }
    .faq-item:hover {
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07);
    }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        align-items: center;
        border: none;
        background: none;
        padding: 0;
        font-size: 1rem;
        font-weight: 600;
        color: #1f2937;
        text-align: left;
        cursor: pointer;
    }
    .toggle-icon {
        color: #9ca3af;
        transition: transform 0.2s ease;
    }
    .faq-item.open .toggle-icon {
        transform: rotate(180deg);
    }
    .faq-answer {
        margin-top: 0.75rem;
        color: #4b5563;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_exact_item_hash_matches() {
        assert!(hash_targets("#faq-2", "faq-2"));
        assert!(!hash_targets("#faq-20", "faq-2"));
        assert!(!hash_targets("faq-2", "faq-2"));
        assert!(!hash_targets("", "faq-2"));
    }
}
