use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

pub const MAX_TILT_DEG: f64 = 10.0;
const PERSPECTIVE: &str = "perspective(900px)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const FLAT: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Rotation for a pointer at normalized (`px`, `py`) inside the card.
    pub fn from_normalized(px: f64, py: f64) -> Self {
        Self {
            rotate_x: (py - 0.5) * -2.0 * MAX_TILT_DEG,
            rotate_y: (px - 0.5) * 2.0 * MAX_TILT_DEG,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "{} rotateX({}deg) rotateY({}deg) translateZ(0)",
            PERSPECTIVE, self.rotate_x, self.rotate_y
        )
    }
}

/// Pointer position relative to a box, in [0, 1] on both axes while inside.
pub fn normalize(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> (f64, f64) {
    let axis = |offset: f64, extent: f64| if extent > 0.0 { offset / extent } else { 0.5 };
    (axis(client_x - left, width), axis(client_y - top, height))
}

pub fn spotlight_position(px: f64, py: f64) -> (String, String) {
    (format!("{}%", px * 100.0), format!("{}%", py * 100.0))
}

fn apply(el: &HtmlElement, tilt: Tilt, spotlight: Option<(f64, f64)>) -> Result<(), JsValue> {
    let style = el.style();
    style.set_property("transform", &tilt.transform())?;
    if let Some((px, py)) = spotlight {
        let (mx, my) = spotlight_position(px, py);
        style.set_property("--mx", &mx)?;
        style.set_property("--my", &my)?;
    }
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let card_ref = use_node_ref();

    {
        let card_ref = card_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = card_ref.cast::<HtmlElement>().map(|el| {
                    let pending: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

                    let on_move = {
                        let card = el.clone();
                        let pending = pending.clone();
                        EventListener::new(&el, "mousemove", move |event| {
                            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                                return;
                            };
                            let rect = card.get_bounding_client_rect();
                            let (px, py) = normalize(
                                event.client_x() as f64,
                                event.client_y() as f64,
                                rect.left(),
                                rect.top(),
                                rect.width(),
                                rect.height(),
                            );
                            let card = card.clone();
                            // Replacing the handle cancels the frame queued by the previous move.
                            *pending.borrow_mut() = Some(request_animation_frame(move |_| {
                                if let Err(e) = apply(&card, Tilt::from_normalized(px, py), Some((px, py))) {
                                    log::warn!("Failed to tilt card: {:?}", e);
                                }
                            }));
                        })
                    };

                    let on_leave = {
                        let card = el.clone();
                        let pending = pending.clone();
                        EventListener::new(&el, "mouseleave", move |_| {
                            pending.borrow_mut().take();
                            if let Err(e) = apply(&card, Tilt::FLAT, None) {
                                log::warn!("Failed to reset card tilt: {:?}", e);
                            }
                        })
                    };

                    (on_move, on_leave, pending)
                });

                move || {
                    if let Some((on_move, on_leave, pending)) = listeners {
                        drop(on_move);
                        drop(on_leave);
                        pending.borrow_mut().take();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div ref={card_ref} class={classes!("tilt-card", props.class.clone())}>
            { for props.children.iter() }
            <style>{r#"
                .tilt-card {
                    position: relative;
                    border-radius: 1rem;
                    transition: transform 0.2s ease-out;
                    will-change: transform;
                    background-image: radial-gradient(400px circle at var(--mx, 50%) var(--my, 50%), rgba(255, 255, 255, 0.08), transparent 40%);
                }
            "#}</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_flat() {
        let (px, py) = normalize(150.0, 100.0, 100.0, 50.0, 100.0, 100.0);
        assert_eq!((px, py), (0.5, 0.5));
        assert_eq!(Tilt::from_normalized(px, py), Tilt::FLAT);
    }

    #[test]
    fn top_left_corner_tilts_fully() {
        let (px, py) = normalize(100.0, 50.0, 100.0, 50.0, 200.0, 80.0);
        let tilt = Tilt::from_normalized(px, py);
        assert_eq!(tilt.rotate_x, MAX_TILT_DEG);
        assert_eq!(tilt.rotate_y, -MAX_TILT_DEG);
    }

    #[test]
    fn bottom_right_corner_mirrors_top_left() {
        let tilt = Tilt::from_normalized(1.0, 1.0);
        assert_eq!(tilt.rotate_x, -MAX_TILT_DEG);
        assert_eq!(tilt.rotate_y, MAX_TILT_DEG);
    }

    #[test]
    fn reset_transform_has_no_rotation() {
        assert_eq!(
            Tilt::FLAT.transform(),
            "perspective(900px) rotateX(0deg) rotateY(0deg) translateZ(0)"
        );
        assert_eq!(
            Tilt::from_normalized(0.75, 0.25).transform(),
            "perspective(900px) rotateX(5deg) rotateY(5deg) translateZ(0)"
        );
    }

    #[test]
    fn empty_box_does_not_divide_by_zero() {
        assert_eq!(normalize(10.0, 10.0, 0.0, 0.0, 0.0, 0.0), (0.5, 0.5));
    }

    #[test]
    fn spotlight_is_expressed_in_percent() {
        assert_eq!(spotlight_position(0.25, 1.0), ("25%".to_string(), "100%".to_string()));
    }
}
