use super::easing::Easing;
use super::progress::{clamp01, remap, Phase};

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Maps a slice of a parent progress onto a value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rule {
    pub window: (f64, f64),
    pub from: f64,
    pub to: f64,
    pub easing: Easing,
}

impl Rule {
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            window: (0.0, 1.0),
            from,
            to,
            easing: Easing::Linear,
        }
    }

    pub fn within(mut self, lo: f64, hi: f64) -> Self {
        self.window = (lo, hi);
        self
    }

    pub fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn local(&self, parent: f64) -> f64 {
        self.easing.apply(remap(parent, self.window.0, self.window.1))
    }

    pub fn value(&self, parent: f64) -> f64 {
        lerp(self.from, self.to, self.local(parent))
    }
}

/// Opacity driven by an enter and an exit progress at once. An exit that
/// outruns the enter is fully hidden, never negative.
pub fn net_opacity(enter: f64, exit: f64) -> f64 {
    clamp01(clamp01(enter) - clamp01(exit))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinState {
    Before,
    Pinned,
    After,
}

impl PinState {
    pub fn class(self) -> &'static str {
        match self {
            PinState::Before => "",
            PinState::Pinned => "is-pinned",
            PinState::After => "is-after",
        }
    }
}

/// Scroll offsets between which an element is held in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinWindow {
    pub start: f64,
    pub end: f64,
}

impl PinWindow {
    pub fn state(&self, offset: f64) -> PinState {
        if offset.is_nan() || offset < self.start {
            PinState::Before
        } else if offset < self.end {
            PinState::Pinned
        } else {
            PinState::After
        }
    }

    /// Counter-translation that keeps the element still while pinned.
    pub fn shift(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        (offset - self.start).clamp(0.0, (self.end - self.start).max(0.0))
    }
}

/// Measurements taken on attach and on every resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroGeometry {
    pub hero_height: f64,
    pub viewport_height: f64,
    /// Document offset of the about block's top edge.
    pub about_top: f64,
    pub about_height: f64,
}

pub const HERO_MIN_SCALE: f64 = 0.45;
pub const HERO_LIFT: f64 = 0.35;
pub const SHRINK_FRACTION: f64 = 0.75;
pub const FILL_FALLOFF: f64 = 0.55;
pub const MIN_FILL_RANGE: f64 = 200.0;

pub const INK: &str = "#000";
pub const PAPER: &str = "#f3f4f6";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFrame {
    pub shrink: f64,
    pub scale: f64,
    pub translate_y: f64,
    pub revealed_lines: usize,
    pub proximity: f64,
    pub filled_chars: usize,
    pub chars_active: bool,
    pub about_pin: PinState,
    pub about_shift: f64,
    pub about_opacity: f64,
}

impl HeroFrame {
    pub fn hero_transform(&self) -> String {
        format!("translateY({:.2}px) scale({:.4})", self.translate_y, self.scale)
    }

    pub fn about_transform(&self) -> String {
        format!("translateY({:.2}px)", self.about_shift)
    }

    pub fn line_revealed(&self, index: usize) -> bool {
        index < self.revealed_lines
    }

    pub fn char_color(&self, index: usize) -> &'static str {
        if index < self.filled_chars {
            INK
        } else {
            PAPER
        }
    }
}

/// Phases and rules of the hero/about scene for one geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroChoreography {
    geometry: HeroGeometry,
    shrink: Phase,
    fill_range: f64,
    pin: PinWindow,
    scale: Rule,
    lift: Rule,
    about_enter: Rule,
    about_exit: Phase,
}

impl HeroChoreography {
    pub fn new(geometry: HeroGeometry) -> Self {
        let hero_height = geometry.hero_height.max(0.0);
        let viewport = geometry.viewport_height.max(0.0);
        let shrink = Phase::new(0.0, (hero_height * SHRINK_FRACTION).max(1.0));
        let fill_range = (viewport * 0.3).max(MIN_FILL_RANGE);

        // pinned from the moment the about block is centred in the viewport
        let pin_start = geometry.about_top + geometry.about_height / 2.0 - viewport / 2.0;
        let pin = PinWindow {
            start: pin_start,
            end: pin_start + fill_range,
        };

        Self {
            geometry,
            shrink,
            fill_range,
            pin,
            scale: Rule::new(1.0, HERO_MIN_SCALE),
            lift: Rule::new(0.0, -hero_height * HERO_LIFT),
            about_enter: Rule::new(0.0, 1.0).within(0.2, 0.6).eased(Easing::CubicOut),
            about_exit: Phase::new(pin.end, fill_range),
        }
    }

    pub fn fill_range(&self) -> f64 {
        self.fill_range
    }

    /// `about_center_y` is the about block's untransformed centre in viewport
    /// coordinates, read from layout on the same frame.
    pub fn frame(
        &self,
        scroll_y: f64,
        about_center_y: f64,
        line_count: usize,
        char_count: usize,
    ) -> HeroFrame {
        let p = self.shrink.progress(scroll_y);

        let revealed_lines = ((p * line_count as f64) + 1e-4).floor() as usize;

        let shift = self.pin.shift(scroll_y);
        let viewport = self.geometry.viewport_height.max(0.0);
        let max_dist = (viewport * FILL_FALLOFF).max(1.0);
        let distance = (viewport / 2.0 - (about_center_y + shift)).abs();
        let proximity = clamp01(1.0 - distance / max_dist);
        let filled_chars = (char_count as f64 * proximity).floor() as usize;

        let enter = self.about_enter.value(p);
        let exit = self.about_exit.progress(scroll_y);

        HeroFrame {
            shrink: p,
            scale: self.scale.value(p),
            translate_y: self.lift.value(p),
            revealed_lines: revealed_lines.min(line_count),
            proximity,
            filled_chars: filled_chars.min(char_count),
            chars_active: proximity > 0.0,
            about_pin: self.pin.state(scroll_y),
            about_shift: shift,
            about_opacity: net_opacity(enter, exit),
        }
    }
}
