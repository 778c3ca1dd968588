use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

/// A self-rescheduling `requestAnimationFrame` chain.
///
/// The tick receives the frame timestamp in milliseconds and returns
/// `ControlFlow::Break(())` to end the chain. Dropping the loop (or calling
/// [`FrameLoop::cancel`]) cancels the pending frame, so no callback fires
/// after the owner is gone.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

struct LoopInner {
    pending: RefCell<Option<AnimationFrame>>,
    cancelled: Cell<bool>,
    tick: RefCell<Box<dyn FnMut(f64) -> ControlFlow<()>>>,
}

impl FrameLoop {
    pub fn start<F>(tick: F) -> Self
    where
        F: FnMut(f64) -> ControlFlow<()> + 'static,
    {
        let inner = Rc::new(LoopInner {
            pending: RefCell::new(None),
            cancelled: Cell::new(false),
            tick: RefCell::new(Box::new(tick)),
        });
        LoopInner::schedule(&inner);
        Self { inner }
    }

    pub fn cancel(&self) {
        self.inner.cancelled.set(true);
        // Dropping the handle cancels the frame and releases the Rc cycle.
        self.inner.pending.borrow_mut().take();
    }
}

impl LoopInner {
    fn schedule(this: &Rc<Self>) {
        if this.cancelled.get() {
            return;
        }
        let next = Rc::clone(this);
        let frame = request_animation_frame(move |timestamp| {
            if next.cancelled.get() {
                return;
            }
            let flow = (&mut *next.tick.borrow_mut())(timestamp);
            match flow {
                ControlFlow::Continue(()) => LoopInner::schedule(&next),
                ControlFlow::Break(()) => {
                    next.cancelled.set(true);
                    next.pending.borrow_mut().take();
                }
            }
        });
        *this.pending.borrow_mut() = Some(frame);
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
