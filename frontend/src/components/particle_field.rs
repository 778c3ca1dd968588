use std::cell::RefCell;
use std::collections::HashMap;
use std::f64::consts::TAU;
use std::ops::ControlFlow;
use std::rc::Rc;

use gloo_events::EventListener;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::utils::frame::FrameLoop;

pub const DEFAULT_PARTICLE_COUNT: usize = 80;
pub const MAX_SPEED: f64 = 0.5;
pub const ATTRACTION_RADIUS: f64 = 140.0;
pub const ATTRACTION_STRENGTH: f64 = 0.003;
pub const LINK_DISTANCE: f64 = 120.0;
pub const LINK_MAX_ALPHA: f64 = 0.3;
pub const DOT_RADIUS: f64 = 1.2;
/// Above this many particles the all-pairs link pass is replaced by grid buckets.
pub const NAIVE_LINK_LIMIT: usize = 150;
/// Pointer position before the first move event; far enough to never attract.
pub const POINTER_SENTINEL: (f64, f64) = (-9999.0, -9999.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f64,
}

/// Opacity of a connecting line for two particles `d2` (squared px) apart.
pub fn link_alpha(d2: f64) -> f64 {
    let max = LINK_DISTANCE * LINK_DISTANCE;
    if d2 >= max {
        0.0
    } else {
        (1.0 - d2 / max) * LINK_MAX_ALPHA
    }
}

/// Hue in degrees, sweeping blue to purple over roughly 21 seconds.
pub fn hue(timestamp: f64) -> f64 {
    210.0 + 60.0 * (timestamp * 0.0003).sin()
}

pub struct ParticleSystem {
    particles: Vec<Particle>,
    count: usize,
    width: f64,
    height: f64,
    pointer: (f64, f64),
    rng: SmallRng,
}

impl ParticleSystem {
    pub fn new(count: usize, width: f64, height: f64, rng: SmallRng) -> Self {
        let mut system = Self {
            particles: Vec::with_capacity(count),
            count,
            width,
            height,
            pointer: POINTER_SENTINEL,
            rng,
        };
        system.populate();
        system
    }

    fn populate(&mut self) {
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles = (0..self.count)
            .map(|_| Particle {
                x: rng.gen::<f64>() * w,
                y: rng.gen::<f64>() * h,
                vx: (rng.gen::<f64>() * 2.0 - 1.0) * MAX_SPEED,
                vy: (rng.gen::<f64>() * 2.0 - 1.0) * MAX_SPEED,
            })
            .collect();
    }

    /// Replaces every particle with a fresh one inside the new bounds.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Whether the last pointer position lies on the current surface.
    /// A stale position left outside by a shrink must not pull particles out.
    fn pointer_inside(&self) -> bool {
        let (mx, my) = self.pointer;
        (0.0..=self.width).contains(&mx) && (0.0..=self.height).contains(&my)
    }

    /// Advances every particle by one frame.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        let (mx, my) = self.pointer;
        let attract = self.pointer_inside();
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x < 0.0 || p.x > w {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > h {
                p.vy = -p.vy;
            }

            let dx = mx - p.x;
            let dy = my - p.y;
            if attract && dx.hypot(dy) < ATTRACTION_RADIUS {
                p.x += dx * ATTRACTION_STRENGTH;
                p.y += dy * ATTRACTION_STRENGTH;
            }
        }
    }

    pub fn links(&self) -> Vec<Link> {
        if self.particles.len() <= NAIVE_LINK_LIMIT {
            self.links_all_pairs()
        } else {
            self.links_bucketed()
        }
    }

    fn link_between(&self, a: usize, b: usize) -> Option<Link> {
        let (p, q) = (&self.particles[a], &self.particles[b]);
        let dx = p.x - q.x;
        let dy = p.y - q.y;
        let alpha = link_alpha(dx * dx + dy * dy);
        (alpha > 0.0).then_some(Link { a, b, alpha })
    }

    fn links_all_pairs(&self) -> Vec<Link> {
        let n = self.particles.len();
        let mut links = Vec::new();
        for a in 0..n {
            for b in (a + 1)..n {
                if let Some(link) = self.link_between(a, b) {
                    links.push(link);
                }
            }
        }
        links
    }

    // Any pair closer than LINK_DISTANCE sits in the same or an adjacent cell.
    fn links_bucketed(&self) -> Vec<Link> {
        let cell_of = |p: &Particle| {
            (
                (p.x / LINK_DISTANCE).floor() as i64,
                (p.y / LINK_DISTANCE).floor() as i64,
            )
        };
        let mut grid: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
        for (i, p) in self.particles.iter().enumerate() {
            grid.entry(cell_of(p)).or_default().push(i);
        }

        let mut links = Vec::new();
        for (a, p) in self.particles.iter().enumerate() {
            let (cx, cy) = cell_of(p);
            for gx in cx - 1..=cx + 1 {
                for gy in cy - 1..=cy + 1 {
                    let Some(bucket) = grid.get(&(gx, gy)) else {
                        continue;
                    };
                    for &b in bucket.iter().filter(|&&b| b > a) {
                        if let Some(link) = self.link_between(a, b) {
                            links.push(link);
                        }
                    }
                }
            }
        }
        links
    }
}

struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Surface {
    fn acquire(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Sizes the backing buffer in device pixels and returns the CSS size.
    fn fit(&self) -> Result<(f64, f64), JsValue> {
        let dpr = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let w = self.canvas.client_width() as f64;
        let h = self.canvas.client_height() as f64;
        self.canvas.set_width((w * dpr).round() as u32);
        self.canvas.set_height((h * dpr).round() as u32);
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        Ok((w, h))
    }

    fn draw(&self, system: &ParticleSystem, links: &[Link], timestamp: f64) -> Result<(), JsValue> {
        let (w, h) = system.size();
        let hue = hue(timestamp);
        let particles = system.particles();
        self.ctx.clear_rect(0.0, 0.0, w, h);

        self.ctx.set_fill_style_str(&format!("hsla({}, 90%, 60%, .9)", hue));
        for p in particles {
            self.ctx.begin_path();
            self.ctx.arc(p.x, p.y, DOT_RADIUS, 0.0, TAU)?;
            self.ctx.fill();
        }

        self.ctx.set_line_width(1.0);
        for link in links {
            let (a, b) = (&particles[link.a], &particles[link.b]);
            self.ctx.begin_path();
            self.ctx.move_to(a.x, a.y);
            self.ctx.line_to(b.x, b.y);
            self.ctx.set_stroke_style_str(&format!("hsla({}, 100%, 70%, {})", hue, link.alpha));
            self.ctx.stroke();
        }
        Ok(())
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    #[prop_or(DEFAULT_PARTICLE_COUNT)]
    pub count: usize,
}

/// Full-viewport constellation backdrop.
#[function_component(ParticleField)]
pub fn particle_field(props: &ParticleFieldProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |count: &usize| {
                let handles = mount(&canvas_ref, *count)
                    .map_err(|e| log::warn!("Particle field disabled: {:?}", e))
                    .ok();
                // Dropping the handles cancels the frame loop and detaches both listeners.
                move || drop(handles)
            },
            props.count,
        );
    }

    html! {
        <>
            <canvas ref={canvas_ref} class="particle-field" aria-hidden="true"></canvas>
            <style>{r#"
                .particle-field {
                    position: fixed;
                    inset: 0;
                    width: 100vw;
                    height: 100vh;
                    z-index: -1;
                    pointer-events: none;
                }
            "#}</style>
        </>
    }
}

fn mount(canvas_ref: &NodeRef, count: usize) -> Result<(FrameLoop, EventListener, EventListener), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or_else(|| JsValue::from_str("canvas not mounted"))?;
    let surface = Rc::new(Surface::acquire(canvas)?);
    let (w, h) = surface.fit()?;
    let system = Rc::new(RefCell::new(ParticleSystem::new(count, w, h, SmallRng::from_entropy())));
    log::info!("Particle field mounted: {} particles on {}x{}", count, w, h);

    let on_resize = {
        let surface = surface.clone();
        let system = system.clone();
        EventListener::new(&window, "resize", move |_| match surface.fit() {
            Ok((w, h)) => system.borrow_mut().resize(w, h),
            Err(e) => log::warn!("Failed to resize particle surface: {:?}", e),
        })
    };

    let on_pointer = {
        let surface = surface.clone();
        let system = system.clone();
        EventListener::new(&window, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let rect = surface.canvas.get_bounding_client_rect();
                system
                    .borrow_mut()
                    .set_pointer(event.client_x() as f64 - rect.left(), event.client_y() as f64 - rect.top());
            }
        })
    };

    let frames = FrameLoop::start(move |timestamp| {
        let mut system = system.borrow_mut();
        system.step();
        let links = system.links();
        if let Err(e) = surface.draw(&system, &links, timestamp) {
            log::error!("Particle frame failed, stopping: {:?}", e);
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    });

    Ok((frames, on_resize, on_pointer))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(count: usize, w: f64, h: f64, seed: u64) -> ParticleSystem {
        ParticleSystem::new(count, w, h, SmallRng::seed_from_u64(seed))
    }

    fn within(p: &Particle, w: f64, h: f64, slack: f64) -> bool {
        p.x >= -slack && p.x <= w + slack && p.y >= -slack && p.y <= h + slack
    }

    #[test]
    fn initial_particles_are_inside_bounds_with_small_velocity() {
        let s = system(DEFAULT_PARTICLE_COUNT, 800.0, 600.0, 1);
        assert_eq!(s.particles().len(), 80);
        for p in s.particles() {
            assert!(within(p, 800.0, 600.0, 0.0), "{:?}", p);
            assert!(p.vx.abs() <= MAX_SPEED && p.vy.abs() <= MAX_SPEED);
        }
    }

    #[test]
    fn particles_never_drift_more_than_one_frame_outside() {
        let mut s = system(DEFAULT_PARTICLE_COUNT, 320.0, 240.0, 7);
        s.set_pointer(160.0, 120.0);
        for _ in 0..5_000 {
            s.step();
            for p in s.particles() {
                assert!(within(p, 320.0, 240.0, MAX_SPEED + 1e-9), "{:?}", p);
            }
        }
    }

    #[test]
    fn sentinel_pointer_does_not_move_particles() {
        let mut s = system(10, 500.0, 500.0, 3);
        let before = s.particles().to_vec();
        s.step();
        for (a, b) in before.iter().zip(s.particles()) {
            assert_eq!(b.x, a.x + a.vx);
            assert_eq!(b.y, a.y + a.vy);
        }
    }

    #[test]
    fn pointer_pulls_nearby_particle_toward_it() {
        let mut s = system(1, 500.0, 500.0, 4);
        s.particles[0] = Particle { x: 100.0, y: 100.0, vx: 0.0, vy: 0.0 };
        s.set_pointer(200.0, 100.0);
        s.step();
        let p = s.particles()[0];
        assert!((p.x - 100.3).abs() < 1e-9, "{:?}", p);
        assert_eq!(p.y, 100.0);

        s.set_pointer(400.0, 400.0);
        s.step();
        assert_eq!(s.particles()[0].x, p.x);
    }

    #[test]
    fn resize_replaces_the_whole_set_inside_new_bounds() {
        let mut s = system(DEFAULT_PARTICLE_COUNT, 1920.0, 1080.0, 5);
        for _ in 0..100 {
            s.step();
        }
        s.resize(300.0, 200.0);
        assert_eq!(s.particles().len(), DEFAULT_PARTICLE_COUNT);
        assert_eq!(s.size(), (300.0, 200.0));
        for p in s.particles() {
            assert!(within(p, 300.0, 200.0, 0.0), "{:?}", p);
        }
    }

    #[test]
    fn stale_pointer_outside_shrunk_surface_does_not_drag_particles_out() {
        let mut s = system(DEFAULT_PARTICLE_COUNT, 800.0, 600.0, 11);
        s.set_pointer(790.0, 300.0);
        s.resize(700.0, 600.0);
        assert_eq!(s.pointer, (790.0, 300.0));
        for _ in 0..5_000 {
            s.step();
            for p in s.particles() {
                assert!(within(p, 700.0, 600.0, MAX_SPEED + 1e-9), "{:?}", p);
            }
        }

        // Growing back puts the same pointer on the surface again.
        s.resize(800.0, 600.0);
        s.particles[0] = Particle { x: 700.0, y: 300.0, vx: 0.0, vy: 0.0 };
        s.step();
        assert!((s.particles()[0].x - 700.27).abs() < 1e-9);
    }

    #[test]
    fn zero_sized_surface_is_tolerated() {
        let mut s = system(5, 0.0, 0.0, 6);
        s.step();
        assert_eq!(s.particles().len(), 5);
    }

    #[test]
    fn link_alpha_fades_with_distance() {
        assert_eq!(link_alpha(LINK_DISTANCE * LINK_DISTANCE), 0.0);
        assert_eq!(link_alpha(200.0 * 200.0), 0.0);
        assert!((link_alpha(0.0) - LINK_MAX_ALPHA).abs() < 1e-12);
        let mut last = f64::INFINITY;
        for d in 0..120 {
            let d = d as f64;
            let alpha = link_alpha(d * d);
            assert!(alpha < last);
            last = alpha;
        }
    }

    #[test]
    fn links_only_connect_close_pairs() {
        let mut s = system(3, 1000.0, 1000.0, 8);
        s.particles = vec![
            Particle { x: 0.0, y: 0.0, vx: 0.0, vy: 0.0 },
            Particle { x: 60.0, y: 0.0, vx: 0.0, vy: 0.0 },
            Particle { x: 500.0, y: 500.0, vx: 0.0, vy: 0.0 },
        ];
        let links = s.links();
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert!((links[0].alpha - 0.225).abs() < 1e-12);
    }

    #[test]
    fn bucketed_links_match_all_pairs() {
        let mut s = system(600, 1280.0, 720.0, 9);
        for _ in 0..50 {
            s.step();
        }
        let key = |l: &Link| (l.a, l.b);
        let mut naive = s.links_all_pairs();
        let mut bucketed = s.links_bucketed();
        naive.sort_by_key(key);
        bucketed.sort_by_key(key);
        assert_eq!(naive, bucketed);
        assert!(!naive.is_empty());
    }

    #[test]
    fn hue_stays_in_blue_purple_band() {
        for t in (0..100_000).step_by(250) {
            let h = hue(t as f64);
            assert!((150.0..=270.0).contains(&h));
        }
        assert_eq!(hue(0.0), 210.0);
    }
}
