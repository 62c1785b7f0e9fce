//! Gallery lightbox: open/close state and the shared-element flights
//! between a thumbnail and the centred full view.

use std::rc::Rc;
use yew::prelude::*;

use crate::motion::easing::FLIGHT;

pub const MAX_WIDTH_FRACTION: f64 = 0.92;
pub const MAX_HEIGHT_FRACTION: f64 = 0.86;

pub const OPEN_FLIGHT_MS: u32 = 520;
pub const OPEN_FADE_MS: u32 = 260;
pub const OPEN_FALLBACK_MS: u32 = 700;
pub const CLOSE_FLIGHT_MS: u32 = 420;
pub const CLOSE_FADE_MS: u32 = 180;
pub const CLOSE_FALLBACK_MS: u32 = 600;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn from_dom(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Largest rect with the source's aspect ratio that fits the viewport
/// fractions, centred.
pub fn fit_centered(source: Rect, viewport: Viewport) -> Rect {
    let max_w = (viewport.width * MAX_WIDTH_FRACTION).round();
    let max_h = (viewport.height * MAX_HEIGHT_FRACTION).round();
    let aspect = if source.width > 0.0 && source.height > 0.0 {
        source.width / source.height
    } else {
        1.0
    };

    let mut width = max_w.min((max_h * aspect).round());
    let mut height = (width / aspect).round();
    if height > max_h {
        height = max_h;
        width = (height * aspect).round();
    }

    Rect {
        left: ((viewport.width - width) / 2.0).round(),
        top: ((viewport.height - height) / 2.0).round(),
        width,
        height,
    }
}

/// Translate + scale taking `from` onto `to`, with a `0 0` transform origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flight {
    pub dx: f64,
    pub dy: f64,
    pub scale: f64,
}

impl Flight {
    pub fn between(from: Rect, to: Rect) -> Self {
        Self {
            dx: to.left - from.left,
            dy: to.top - from.top,
            scale: if from.width > 0.0 { to.width / from.width } else { 1.0 },
        }
    }

    pub fn transform(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.dx, self.dy, self.scale)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Picture {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Opening,
    Closing,
}

/// The temporary copy that flies between the thumbnail and the full view.
#[derive(Clone, Debug, PartialEq)]
pub struct StandIn {
    pub picture: Picture,
    pub from: Rect,
    pub to: Rect,
    pub direction: Direction,
    /// False for the first frame, so the transition has a start state.
    pub launched: bool,
}

impl StandIn {
    pub fn fallback_ms(&self) -> u32 {
        match self.direction {
            Direction::Opening => OPEN_FALLBACK_MS,
            Direction::Closing => CLOSE_FALLBACK_MS,
        }
    }

    pub fn transform(&self) -> String {
        if self.launched {
            Flight::between(self.from, self.to).transform()
        } else {
            "translate(0px, 0px) scale(1)".to_string()
        }
    }

    pub fn style(&self) -> String {
        let (z, flight_ms, fade_ms) = match self.direction {
            Direction::Opening => (2100, OPEN_FLIGHT_MS, OPEN_FADE_MS),
            Direction::Closing => (2200, CLOSE_FLIGHT_MS, CLOSE_FADE_MS),
        };
        let opacity = match (self.direction, self.launched) {
            (Direction::Closing, true) => "0.95",
            _ => "1",
        };
        format!(
            "position:fixed;left:{}px;top:{}px;width:{}px;height:{}px;margin:0;z-index:{};\
             box-sizing:border-box;object-fit:cover;transform-origin:0 0;\
             transition:transform {}ms {}, opacity {}ms ease;transform:{};opacity:{};",
            self.from.left,
            self.from.top,
            self.from.width,
            self.from.height,
            z,
            flight_ms,
            FLIGHT.css(),
            fade_ms,
            self.transform(),
            opacity,
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    #[default]
    Closed,
    Opening(StandIn),
    Open(Picture),
    Closing(StandIn),
}

#[derive(Clone, Debug, PartialEq)]
pub enum LightboxAction {
    /// A thumbnail was activated.
    Activate {
        picture: Picture,
        rect: Rect,
        viewport: Viewport,
        page_overflow: String,
    },
    /// One frame after a flight started.
    Launch(u32),
    /// Flight finished, via `transitionend` or the fallback timer.
    Settled(u32),
    /// `displayed` is the full view's rect, `trigger` the matching thumbnail's.
    Close {
        displayed: Option<Rect>,
        trigger: Option<Rect>,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightboxState {
    pub phase: Phase,
    /// Identifies the current flight; older timers compare against it.
    pub generation: u32,
    saved_overflow: Option<String>,
    restore_overflow: Option<String>,
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.is_open() {
            "false"
        } else {
            "true"
        }
    }

    pub fn stand_in(&self) -> Option<&StandIn> {
        match &self.phase {
            Phase::Opening(stand_in) | Phase::Closing(stand_in) => Some(stand_in),
            _ => None,
        }
    }

    pub fn displayed(&self) -> Option<&Picture> {
        match &self.phase {
            Phase::Open(picture) => Some(picture),
            _ => None,
        }
    }

    /// Inline `overflow` the page body should carry, or `None` to leave it.
    pub fn body_overflow(&self) -> Option<String> {
        if self.is_open() {
            Some("hidden".to_string())
        } else {
            self.restore_overflow.clone()
        }
    }

    fn close_now(&mut self) {
        self.restore_overflow = self.saved_overflow.take();
        self.phase = Phase::Closed;
    }

    fn fly(&mut self, stand_in: StandIn, opening: bool) {
        self.generation = self.generation.wrapping_add(1);
        self.phase = if opening {
            Phase::Opening(stand_in)
        } else {
            Phase::Closing(stand_in)
        };
    }

    pub fn apply(&mut self, action: LightboxAction) {
        match action {
            LightboxAction::Activate {
                picture,
                rect,
                viewport,
                page_overflow,
            } => {
                if self.saved_overflow.is_none() {
                    self.saved_overflow = Some(page_overflow);
                }
                self.restore_overflow = None;
                let stand_in = StandIn {
                    picture,
                    from: rect,
                    to: fit_centered(rect, viewport),
                    direction: Direction::Opening,
                    launched: false,
                };
                self.fly(stand_in, true);
            }
            LightboxAction::Launch(generation) => {
                if generation != self.generation {
                    return;
                }
                if let Phase::Opening(stand_in) | Phase::Closing(stand_in) = &mut self.phase {
                    stand_in.launched = true;
                }
            }
            LightboxAction::Settled(generation) => {
                if generation != self.generation {
                    return;
                }
                match std::mem::take(&mut self.phase) {
                    // the full view replaces the stand-in in the same render
                    Phase::Opening(stand_in) => self.phase = Phase::Open(stand_in.picture),
                    Phase::Closing(_) => self.close_now(),
                    other => self.phase = other,
                }
            }
            LightboxAction::Close { displayed, trigger } => match std::mem::take(&mut self.phase) {
                Phase::Open(picture) => match (displayed, trigger) {
                    (Some(from), Some(to)) => {
                        let stand_in = StandIn {
                            picture,
                            from,
                            to,
                            direction: Direction::Closing,
                            launched: false,
                        };
                        self.fly(stand_in, false);
                    }
                    _ => self.close_now(),
                },
                Phase::Opening(_) => self.close_now(),
                other => self.phase = other,
            },
        }
    }
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1000.0,
        height: 800.0,
    };

    fn picture(src: &str) -> Picture {
        Picture {
            src: src.to_string(),
            alt: String::new(),
        }
    }

    fn activate(src: &str, rect: Rect, overflow: &str) -> LightboxAction {
        LightboxAction::Activate {
            picture: picture(src),
            rect,
            viewport: VIEWPORT,
            page_overflow: overflow.to_string(),
        }
    }

    /// Applies the action and mirrors what the adapter writes to the body.
    fn step(state: &mut LightboxState, page_overflow: &mut String, action: LightboxAction) {
        state.apply(action);
        if let Some(overflow) = state.body_overflow() {
            *page_overflow = overflow;
        }
    }

    #[test]
    fn fit_landscape_is_width_bound() {
        let fitted = fit_centered(Rect::new(10.0, 20.0, 400.0, 200.0), VIEWPORT);
        // max 920 x 688; 688 * 2 = 1376 > 920
        assert_eq!(fitted, Rect::new(40.0, 170.0, 920.0, 460.0));
    }

    #[test]
    fn fit_portrait_is_height_bound() {
        let fitted = fit_centered(Rect::new(0.0, 0.0, 100.0, 200.0), VIEWPORT);
        assert_eq!(fitted.height, 688.0);
        assert_eq!(fitted.width, 344.0);
        assert_eq!(fitted.left, 328.0);
        assert_eq!(fitted.top, 56.0);
    }

    #[test]
    fn fit_degenerate_source_uses_square() {
        let fitted = fit_centered(Rect::new(0.0, 0.0, 0.0, 50.0), VIEWPORT);
        assert_eq!(fitted.width, fitted.height);
    }

    #[test]
    fn flight_translates_and_scales() {
        let flight = Flight::between(Rect::new(10.0, 20.0, 100.0, 50.0), Rect::new(110.0, 0.0, 300.0, 150.0));
        assert_eq!(flight, Flight { dx: 100.0, dy: -20.0, scale: 3.0 });
        assert_eq!(flight.transform(), "translate(100px, -20px) scale(3)");
        assert_eq!(Flight::between(Rect::default(), Rect::new(0.0, 0.0, 5.0, 5.0)).scale, 1.0);
    }

    #[test]
    fn open_places_stand_in_over_thumbnail_then_launches() {
        let mut state = LightboxState::default();
        let thumb = Rect::new(50.0, 60.0, 200.0, 100.0);
        state.apply(activate("a.jpg", thumb, ""));

        let stand_in = state.stand_in().unwrap();
        assert_eq!(stand_in.from, thumb);
        assert!(!stand_in.launched);
        assert!(stand_in.style().contains("left:50px;top:60px;width:200px;height:100px"));
        assert!(stand_in.style().contains("transform:translate(0px, 0px) scale(1)"));
        assert_eq!(state.aria_hidden(), "false");

        let generation = state.generation;
        state.apply(LightboxAction::Launch(generation));
        assert!(state.stand_in().unwrap().launched);
        assert!(state.stand_in().unwrap().style().contains("scale(4.6)"));
    }

    #[test]
    fn settle_swaps_stand_in_for_full_view_once() {
        let mut state = LightboxState::default();
        state.apply(activate("a.jpg", Rect::new(0.0, 0.0, 100.0, 100.0), ""));
        let generation = state.generation;

        state.apply(LightboxAction::Settled(generation));
        assert!(state.stand_in().is_none());
        assert_eq!(state.displayed(), Some(&picture("a.jpg")));

        // the fallback timer firing afterwards changes nothing
        let snapshot = state.clone();
        state.apply(LightboxAction::Settled(generation));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn stale_timer_from_previous_flight_is_ignored() {
        let mut state = LightboxState::default();
        state.apply(activate("a.jpg", Rect::new(0.0, 0.0, 10.0, 10.0), ""));
        let old = state.generation;
        state.apply(activate("b.jpg", Rect::new(5.0, 5.0, 10.0, 10.0), "hidden"));

        state.apply(LightboxAction::Settled(old));
        assert!(matches!(state.phase, Phase::Opening(_)));
    }

    #[test]
    fn round_trip_restores_overflow_and_leaves_no_stand_in() {
        let mut state = LightboxState::default();
        let mut page = "scroll".to_string();
        let thumb = Rect::new(20.0, 30.0, 160.0, 120.0);

        step(&mut state, &mut page, activate("a.jpg", thumb, "scroll"));
        assert_eq!(page, "hidden");
        let g = state.generation;
        step(&mut state, &mut page, LightboxAction::Launch(g));
        step(&mut state, &mut page, LightboxAction::Settled(g));
        assert_eq!(page, "hidden");

        let shown = fit_centered(thumb, VIEWPORT);
        step(
            &mut state,
            &mut page,
            LightboxAction::Close {
                displayed: Some(shown),
                trigger: Some(thumb),
            },
        );
        let closing = state.stand_in().unwrap();
        assert_eq!(closing.direction, Direction::Closing);
        assert_eq!(closing.from, shown);
        assert_eq!(closing.to, thumb);
        assert!(state.is_open());

        let g = state.generation;
        step(&mut state, &mut page, LightboxAction::Settled(g));
        assert_eq!(state.phase, Phase::Closed);
        assert!(state.stand_in().is_none());
        assert_eq!(page, "scroll");
        assert_eq!(state.aria_hidden(), "true");
    }

    #[test]
    fn close_without_matching_thumbnail_is_immediate() {
        let mut state = LightboxState::default();
        let mut page = String::new();
        step(&mut state, &mut page, activate("a.jpg", Rect::new(0.0, 0.0, 10.0, 10.0), ""));
        let g = state.generation;
        step(&mut state, &mut page, LightboxAction::Settled(g));

        step(
            &mut state,
            &mut page,
            LightboxAction::Close {
                displayed: Some(Rect::new(0.0, 0.0, 50.0, 50.0)),
                trigger: None,
            },
        );
        assert_eq!(state.phase, Phase::Closed);
        assert_eq!(page, "");
    }

    #[test]
    fn closing_mid_flight_drops_the_stand_in() {
        let mut state = LightboxState::default();
        let mut page = "auto".to_string();
        step(&mut state, &mut page, activate("a.jpg", Rect::new(0.0, 0.0, 10.0, 10.0), "auto"));
        step(
            &mut state,
            &mut page,
            LightboxAction::Close {
                displayed: None,
                trigger: None,
            },
        );
        assert!(state.stand_in().is_none());
        assert_eq!(page, "auto");
    }

    #[test]
    fn reopen_keeps_first_saved_overflow() {
        let mut state = LightboxState::default();
        let mut page = "visible".to_string();
        step(&mut state, &mut page, activate("a.jpg", Rect::new(0.0, 0.0, 10.0, 10.0), "visible"));
        // page now reads "hidden"; a second activation must not save that
        step(&mut state, &mut page, activate("b.jpg", Rect::new(0.0, 0.0, 10.0, 10.0), "hidden"));
        let g = state.generation;
        step(&mut state, &mut page, LightboxAction::Settled(g));
        step(
            &mut state,
            &mut page,
            LightboxAction::Close {
                displayed: None,
                trigger: None,
            },
        );
        assert_eq!(page, "visible");
    }

    #[test]
    fn close_when_closed_is_a_no_op() {
        let state = Rc::new(LightboxState::default());
        let after = state.clone().reduce(LightboxAction::Close {
            displayed: None,
            trigger: None,
        });
        assert!(Rc::ptr_eq(&state, &after));
        assert_eq!(after.body_overflow(), None);
    }
}
