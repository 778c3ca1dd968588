use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct LauncherEntry {
    pub label: AttrValue,
    pub href: AttrValue,
    pub icon: AttrValue,
    pub description: AttrValue,
}

/// Entries whose label contains `query`, ignoring case, in their original order.
pub fn filter_entries<'a>(entries: &'a [LauncherEntry], query: &str) -> Vec<&'a LauncherEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.label.to_lowercase().contains(&needle))
        .collect()
}

/// Sibling key for a result row. Labels come from the caller and may repeat.
pub fn entry_key(index: usize, entry: &LauncherEntry) -> String {
    format!("{}:{}", index, entry.href)
}

/// (Meta | Ctrl) + K, any case.
pub fn is_toggle_hotkey(key: &str, meta: bool, ctrl: bool) -> bool {
    (meta || ctrl) && key.eq_ignore_ascii_case("k")
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LauncherState {
    pub open: bool,
    pub query: String,
}

pub enum LauncherAction {
    Toggle,
    Close,
    SetQuery(String),
}

#[derive(Debug, PartialEq)]
pub enum LauncherView<'a> {
    Closed,
    Results(Vec<&'a LauncherEntry>),
    NoResults,
}

impl LauncherState {
    pub fn view<'a>(&self, entries: &'a [LauncherEntry]) -> LauncherView<'a> {
        if !self.open {
            return LauncherView::Closed;
        }
        let matches = filter_entries(entries, &self.query);
        if matches.is_empty() {
            LauncherView::NoResults
        } else {
            LauncherView::Results(matches)
        }
    }
}

impl Reducible for LauncherState {
    type Action = LauncherAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LauncherAction::Toggle => Rc::new(Self {
                open: !self.open,
                query: self.query.clone(),
            }),
            LauncherAction::Close if self.open => Rc::new(Self {
                open: false,
                query: self.query.clone(),
            }),
            LauncherAction::Close => self,
            LauncherAction::SetQuery(query) => Rc::new(Self {
                open: self.open,
                query,
            }),
        }
    }
}

fn open_in_new_tab(href: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.open_with_url_and_target(href, "_blank") {
            log::warn!("Failed to open {}: {:?}", href, e);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct QuickLauncherProps {
    pub entries: Vec<LauncherEntry>,
    pub placeholder: AttrValue,
    pub no_results: AttrValue,
}

#[function_component(QuickLauncher)]
pub fn quick_launcher(props: &QuickLauncherProps) -> Html {
    let state = use_reducer(LauncherState::default);
    let input_ref = use_node_ref();

    // Window-wide hotkeys. Not passive, so the browser's own Ctrl+K can be suppressed.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|window| {
                    EventListener::new_with_options(
                        &window,
                        "keydown",
                        EventListenerOptions::enable_prevent_default(),
                        move |event| {
                            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                                return;
                            };
                            let key = event.key();
                            if is_toggle_hotkey(&key, event.meta_key(), event.ctrl_key()) {
                                event.prevent_default();
                                dispatcher.dispatch(LauncherAction::Toggle);
                            }
                            if key == "Escape" {
                                dispatcher.dispatch(LauncherAction::Close);
                            }
                        },
                    )
                });
                move || drop(listener)
            },
            (),
        );
    }

    {
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if *open {
                    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                        if let Err(e) = input.focus() {
                            log::warn!("Failed to focus launcher input: {:?}", e);
                        }
                    }
                }
                || ()
            },
            state.open,
        );
    }

    let entries = props.entries.clone();
    let results = match state.view(&entries) {
        LauncherView::Closed => return html! {},
        LauncherView::NoResults => html! {
            <li class="launcher-empty">{props.no_results.clone()}</li>
        },
        LauncherView::Results(matches) => matches
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let onclick = {
                    let dispatcher = state.dispatcher();
                    Callback::from(move |_: MouseEvent| dispatcher.dispatch(LauncherAction::Close))
                };
                html! {
                    <li key={entry_key(index, entry)}>
                        <a href={entry.href.clone()} target="_blank" rel="noreferrer" class="launcher-entry" {onclick}>
                            <span class="launcher-icon">{entry.icon.clone()}</span>
                            <div>
                                <div class="launcher-label">{entry.label.clone()}</div>
                                <div class="launcher-desc">{entry.description.clone()}</div>
                            </div>
                        </a>
                    </li>
                }
            })
            .collect::<Html>(),
    };

    let on_backdrop = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(LauncherAction::Close))
    };
    let on_panel = Callback::from(|e: MouseEvent| e.stop_propagation());
    let oninput = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(LauncherAction::SetQuery(input.value()));
        })
    };
    let onkeydown = {
        let dispatcher = state.dispatcher();
        let first = filter_entries(&entries, &state.query).first().map(|entry| entry.href.clone());
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                if let Some(href) = &first {
                    e.prevent_default();
                    open_in_new_tab(href);
                    dispatcher.dispatch(LauncherAction::Close);
                }
            }
        })
    };

    html! {
        <div class="launcher-backdrop" onclick={on_backdrop}>
            <div class="launcher-panel" role="dialog" aria-modal="true" onclick={on_panel}>
                <div class="launcher-search">
                    <input
                        ref={input_ref}
                        value={state.query.clone()}
                        placeholder={props.placeholder.clone()}
                        {oninput}
                        {onkeydown}
                    />
                </div>
                <ul class="launcher-results">
                    { results }
                </ul>
            </div>
            <style>{r#"
                .launcher-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.4);
                    backdrop-filter: blur(4px);
                    display: flex;
                    align-items: flex-start;
                    justify-content: center;
                    padding: 1rem;
                }
                .launcher-panel {
                    width: 100%;
                    max-width: 32rem;
                    margin-top: 10vh;
                    border-radius: 1rem;
                    background: #fff;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    overflow: hidden;
                }
                .launcher-search {
                    padding: 0.75rem 1rem;
                    border-bottom: 1px solid #e2e8f0;
                }
                .launcher-search input {
                    width: 100%;
                    border: none;
                    outline: none;
                    font-size: 1rem;
                    color: #1e293b;
                }
                .launcher-results {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    max-height: 18rem;
                    overflow: auto;
                }
                .launcher-results li + li {
                    border-top: 1px solid #f1f5f9;
                }
                .launcher-entry {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.75rem 1rem;
                    color: inherit;
                    text-decoration: none;
                }
                .launcher-entry:hover {
                    background: #f8fafc;
                }
                .launcher-icon {
                    font-size: 1.25rem;
                }
                .launcher-label {
                    font-weight: 600;
                    color: #0f172a;
                }
                .launcher-desc {
                    font-size: 0.75rem;
                    color: #64748b;
                }
                .launcher-empty {
                    padding: 1.5rem 1rem;
                    text-align: center;
                    color: #94a3b8;
                    font-size: 0.875rem;
                }
            "#}</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &'static str) -> LauncherEntry {
        LauncherEntry {
            label: label.into(),
            href: "https://example.com".into(),
            icon: "*".into(),
            description: "".into(),
        }
    }

    fn suite() -> Vec<LauncherEntry> {
        vec![entry("RB SnapLog 360"), entry("RB FuelTrack 360"), entry("RB Field360")]
    }

    fn labels(entries: &[&LauncherEntry]) -> Vec<String> {
        entries.iter().map(|e| e.label.to_string()).collect()
    }

    fn apply(state: LauncherState, action: LauncherAction) -> LauncherState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let entries = suite();
        assert_eq!(
            labels(&filter_entries(&entries, "")),
            vec!["RB SnapLog 360", "RB FuelTrack 360", "RB Field360"]
        );
    }

    #[test]
    fn query_matches_label_substring_ignoring_case() {
        let entries = suite();
        assert_eq!(labels(&filter_entries(&entries, "field")), vec!["RB Field360"]);
        assert_eq!(
            labels(&filter_entries(&entries, "RB")),
            vec!["RB SnapLog 360", "RB FuelTrack 360", "RB Field360"]
        );
        assert_eq!(labels(&filter_entries(&entries, "TRACK")), vec!["RB FuelTrack 360"]);
    }

    #[test]
    fn description_is_not_searched() {
        let mut entries = suite();
        entries[0].description = "fuel audit".into();
        assert_eq!(labels(&filter_entries(&entries, "audit")), Vec::<String>::new());
    }

    #[test]
    fn repeated_labels_get_distinct_keys() {
        let entries = vec![entry("RB Field360"), entry("RB Field360")];
        let matches = filter_entries(&entries, "field");
        assert_eq!(matches.len(), 2);
        let keys: Vec<String> = matches.iter().enumerate().map(|(i, e)| entry_key(i, e)).collect();
        assert_ne!(keys[0], keys[1]);
    }

    #[test]
    fn no_match_is_distinct_from_closed() {
        let entries = suite();
        let closed = LauncherState::default();
        assert_eq!(closed.view(&entries), LauncherView::Closed);

        let open = apply(closed, LauncherAction::Toggle);
        let open = apply(open, LauncherAction::SetQuery("zzz".into()));
        assert_eq!(open.view(&entries), LauncherView::NoResults);
    }

    #[test]
    fn hotkey_twice_returns_to_closed() {
        let state = apply(LauncherState::default(), LauncherAction::Toggle);
        assert!(state.open);
        let state = apply(state, LauncherAction::Toggle);
        assert!(!state.open);
    }

    #[test]
    fn escape_closes_only_when_open() {
        let closed = Rc::new(LauncherState::default());
        let after = closed.clone().reduce(LauncherAction::Close);
        assert!(Rc::ptr_eq(&closed, &after));

        let open = apply(LauncherState::default(), LauncherAction::Toggle);
        assert!(!apply(open, LauncherAction::Close).open);
    }

    #[test]
    fn selecting_closes_and_keeps_query() {
        let state = apply(LauncherState::default(), LauncherAction::Toggle);
        let state = apply(state, LauncherAction::SetQuery("snap".into()));
        let state = apply(state, LauncherAction::Close);
        assert_eq!(state, LauncherState { open: false, query: "snap".into() });
    }

    #[test]
    fn hotkey_needs_a_modifier() {
        assert!(is_toggle_hotkey("k", false, true));
        assert!(is_toggle_hotkey("K", true, false));
        assert!(!is_toggle_hotkey("k", false, false));
        assert!(!is_toggle_hotkey("j", true, true));
    }
}
