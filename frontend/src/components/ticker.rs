use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use web_sys::HtmlElement;

use crate::dom;
use crate::motion::easing::Easing;
use crate::motion::tween::{Animator, Tween};

pub const TICKER_MS: f64 = 320.0;

/// Which label of a ticker is in the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickerState {
    Resting,
    Raised,
}

impl TickerState {
    /// `translateY` percentages of (current label, alt label).
    pub fn offsets(self) -> (f64, f64) {
        match self {
            TickerState::Resting => (0.0, 100.0),
            TickerState::Raised => (-100.0, 0.0),
        }
    }
}

pub fn translate_y_percent(value: f64) -> String {
    format!("translateY({}%)", value)
}

/// One label's transform. Only the most recent slide may write it, so a
/// leave that interrupts an enter takes over from where the enter got to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    generation: u32,
    value: f64,
}

impl Track {
    pub fn at(value: f64) -> Self {
        Self { generation: 0, value }
    }

    /// Starts a new slide; returns its generation and the value to start from.
    pub fn begin(&mut self) -> (u32, f64) {
        self.generation = self.generation.wrapping_add(1);
        (self.generation, self.value)
    }

    /// False once a newer slide has begun.
    pub fn write(&mut self, generation: u32, value: f64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.value = value;
        true
    }
}

fn slide(node: &NodeRef, track: &Rc<RefCell<Track>>, to: f64, animator: Animator) {
    let Some(label) = node.cast::<HtmlElement>() else {
        return;
    };
    let (generation, from) = track.borrow_mut().begin();
    let tween = Tween::new(from, to, TICKER_MS).easing(Easing::EaseInOut);
    let track = track.clone();
    animator.run(
        tween,
        move |v| {
            if track.borrow_mut().write(generation, v) {
                dom::set_style(&label, "transform", &translate_y_percent(v));
            }
        },
        || (),
    );
}

#[derive(Properties, PartialEq)]
pub struct TickerProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub alt: Option<AttrValue>,
}

#[function_component(Ticker)]
pub fn ticker(props: &TickerProps) -> Html {
    let current_ref = use_node_ref();
    let alt_ref = use_node_ref();
    let animator = *use_state(Animator::detect);
    let state = use_mut_ref(|| TickerState::Resting);
    let current_track = use_mut_ref(|| Track::at(TickerState::Resting.offsets().0));
    let alt_track = use_mut_ref(|| Track::at(TickerState::Resting.offsets().1));

    let move_to = {
        let current_ref = current_ref.clone();
        let alt_ref = alt_ref.clone();
        move |target: TickerState| {
            let from = *state.borrow();
            if from == target {
                return;
            }
            *state.borrow_mut() = target;
            let (current_to, alt_to) = target.offsets();
            slide(&current_ref, &current_track, current_to, animator);
            slide(&alt_ref, &alt_track, alt_to, animator);
        }
    };

    let enter = {
        let move_to = move_to.clone();
        Callback::from(move |_: MouseEvent| move_to(TickerState::Raised))
    };
    let leave = {
        let move_to = move_to.clone();
        Callback::from(move |_: MouseEvent| move_to(TickerState::Resting))
    };
    let focus_in = {
        let move_to = move_to.clone();
        Callback::from(move |_: FocusEvent| move_to(TickerState::Raised))
    };
    let focus_out = Callback::from(move |_: FocusEvent| move_to(TickerState::Resting));

    let alt = props.alt.clone().unwrap_or_else(|| props.label.clone());

    html! {
        <span class="ticker"
            onmouseenter={enter}
            onmouseleave={leave}
            onfocusin={focus_in}
            onfocusout={focus_out}
        >
            <span class="label" ref={current_ref}>{ props.label.clone() }</span>
            <span class="label alt" ref={alt_ref} aria-hidden="true">{ alt }</span>
        </span>
    }
}
