use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use super::easing::Easing;
use crate::error::SiteError;

/// A numeric property moving from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
    /// Extra iterations after the first.
    pub repeat: u32,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::Linear,
            repeat: 0,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn repeat(mut self, repeat: u32) -> Self {
        self.repeat = repeat;
        self
    }

    fn iteration_ms(&self) -> f64 {
        if self.duration_ms.is_nan() {
            1.0
        } else {
            self.duration_ms.max(1.0)
        }
    }

    pub fn total_ms(&self) -> f64 {
        self.delay_ms + self.iteration_ms() * (self.repeat as f64 + 1.0)
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.total_ms()
    }

    pub fn sample(&self, elapsed_ms: f64) -> f64 {
        let t = elapsed_ms - self.delay_ms;
        if t.is_nan() || t <= 0.0 {
            return self.from;
        }
        if self.is_done(elapsed_ms) {
            return self.to;
        }
        let span = self.iteration_ms();
        let local = (t % span) / span;
        self.from + (self.to - self.from) * self.easing.apply(local)
    }
}

/// How animations are played in this browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Animator {
    /// Sampled on `requestAnimationFrame`.
    Frames,
    /// End state assigned at once.
    Immediate,
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

impl Animator {
    pub fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            return Animator::Immediate;
        };

        let has_frames = web_sys::js_sys::Reflect::has(&window, &JsValue::from_str("requestAnimationFrame"))
            .unwrap_or(false);
        let reduced_motion = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);

        if has_frames && !reduced_motion {
            Animator::Frames
        } else {
            debug!("animations disabled (frames: {}, reduced motion: {})", has_frames, reduced_motion);
            Animator::Immediate
        }
    }

    pub fn run<A, D>(self, tween: Tween, apply: A, on_done: D)
    where
        A: FnMut(f64) + 'static,
        D: FnOnce() + 'static,
    {
        let apply = Rc::new(RefCell::new(apply));
        let on_done = Rc::new(RefCell::new(Some(on_done)));

        if self == Animator::Frames {
            match drive(tween, apply.clone(), on_done.clone()) {
                Ok(()) => return,
                Err(e) => warn!("falling back to immediate animation: {}", e),
            }
        }
        settle(&apply, &on_done, tween.to);
    }
}

fn settle<A, D>(apply: &Rc<RefCell<A>>, on_done: &Rc<RefCell<Option<D>>>, value: f64)
where
    A: FnMut(f64),
    D: FnOnce(),
{
    (&mut *apply.borrow_mut())(value);
    let done = on_done.borrow_mut().take();
    if let Some(done) = done {
        done();
    }
}

fn request_frame(window: &Window, slot: &FrameSlot) -> Result<(), SiteError> {
    let slot = slot.borrow();
    let callback = slot
        .as_ref()
        .ok_or_else(|| SiteError::Js("frame callback already released".to_string()))?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}

fn drive<A, D>(
    tween: Tween,
    apply: Rc<RefCell<A>>,
    on_done: Rc<RefCell<Option<D>>>,
) -> Result<(), SiteError>
where
    A: FnMut(f64) + 'static,
    D: FnOnce() + 'static,
{
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    let slot: FrameSlot = Rc::new(RefCell::new(None));

    let inner = slot.clone();
    let frame_window = window.clone();
    let frame_apply = apply.clone();
    let frame_done = on_done.clone();
    let mut started: Option<f64> = None;

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let start = *started.get_or_insert(now);
        let elapsed = now - start;

        let finished = if tween.is_done(elapsed) {
            true
        } else {
            (&mut *frame_apply.borrow_mut())(tween.sample(elapsed));
            match request_frame(&frame_window, &inner) {
                Ok(()) => false,
                Err(e) => {
                    warn!("animation frame lost, jumping to end: {}", e);
                    true
                }
            }
        };

        if finished {
            settle(&frame_apply, &frame_done, tween.to);
            // breaks the closure's reference to itself
            let _ = inner.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    if let Err(e) = request_frame(&window, &slot) {
        let _ = slot.borrow_mut().take();
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_holds_during_delay_and_lands_on_target() {
        let tween = Tween::new(0.0, 100.0, 200.0).delay(50.0);
        assert_eq!(tween.sample(0.0), 0.0);
        assert_eq!(tween.sample(50.0), 0.0);
        assert!((tween.sample(150.0) - 50.0).abs() < 1e-9);
        assert_eq!(tween.sample(250.0), 100.0);
        assert_eq!(tween.sample(10_000.0), 100.0);
        assert!(tween.is_done(250.0));
        assert!(!tween.is_done(249.0));
    }

    #[test]
    fn easing_shapes_intermediate_samples() {
        let linear = Tween::new(0.0, 1.0, 100.0);
        let eased = linear.easing(Easing::CubicOut);
        assert!(eased.sample(30.0) > linear.sample(30.0));
    }

    #[test]
    fn repeat_restarts_each_iteration() {
        let tween = Tween::new(0.0, 10.0, 100.0).repeat(2);
        assert_eq!(tween.total_ms(), 300.0);
        assert!((tween.sample(50.0) - 5.0).abs() < 1e-9);
        assert!((tween.sample(150.0) - 5.0).abs() < 1e-9);
        assert_eq!(tween.sample(300.0), 10.0);
    }

    #[test]
    fn zero_duration_finishes_after_one_millisecond() {
        let tween = Tween::new(3.0, -3.0, 0.0);
        assert_eq!(tween.total_ms(), 1.0);
        assert_eq!(tween.sample(1.0), -3.0);
    }

    #[test]
    fn immediate_animator_lands_on_end_state_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let done = Rc::new(std::cell::Cell::new(0));

        let record = seen.clone();
        let finished = done.clone();
        Animator::Immediate.run(
            Tween::new(0.0, 42.0, 300.0).easing(Easing::EaseInOut),
            move |v| record.borrow_mut().push(v),
            move || finished.set(finished.get() + 1),
        );

        assert_eq!(*seen.borrow(), vec![42.0]);
        assert_eq!(done.get(), 1);
    }

    #[test]
    fn negative_delay_is_ignored() {
        let tween = Tween::new(0.0, 1.0, 10.0).delay(-40.0);
        assert_eq!(tween.delay_ms, 0.0);
    }
}
