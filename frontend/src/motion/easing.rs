/// Timing curves shared by choreography rules, tweens and CSS transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS `ease-in-out`, cubic-bezier(.42, 0, .58, 1).
    EaseInOut,
    /// `1 - (1 - t)^3`
    CubicOut,
    CubicBezier(f64, f64, f64, f64),
}

/// The curve the lightbox flights use.
pub const FLIGHT: Easing = Easing::CubicBezier(0.22, 0.9, 0.36, 1.0);

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicBezier(x1, y1, x2, y2) => bezier(x1, y1, x2, y2, t),
        }
    }

    pub fn css(self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicOut => "cubic-bezier(.33,1,.68,1)".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({},{},{},{})", x1, y1, x2, y2)
            }
        }
    }
}

fn curve(a1: f64, a2: f64, s: f64) -> f64 {
    // B(s) for a bezier anchored at 0 and 1
    let inv = 1.0 - s;
    3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
}

fn curve_slope(a1: f64, a2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * a1 + 6.0 * inv * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
}

fn bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut s = x;
    for _ in 0..8 {
        let err = curve(x1, x2, s) - x;
        if err.abs() < 1e-7 {
            return curve(y1, y2, s);
        }
        let slope = curve_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    // Newton stalled, bisect
    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..40 {
        let v = curve(x1, x2, s);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    curve(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [Easing::Linear, Easing::EaseInOut, Easing::CubicOut, FLIGHT];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn input_outside_unit_range_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.5), 1.0);
            assert_eq!(easing.apply(f64::NAN), 0.0);
        }
    }

    #[test]
    fn cubic_out_matches_closed_form() {
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let expected = 1.0 - (1.0 - t).powi(3);
            assert!((Easing::CubicOut.apply(t) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_and_monotonic() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-4);
        let mut last = 0.0;
        for i in 1..=100 {
            let v = Easing::EaseInOut.apply(i as f64 / 100.0);
            assert!(v >= last);
            last = v;
        }
        let a = Easing::EaseInOut.apply(0.2);
        let b = Easing::EaseInOut.apply(0.8);
        assert!((a + b - 1.0).abs() < 1e-4);
    }

    #[test]
    fn flight_curve_front_loads_motion() {
        // steep start: most of the distance is covered early
        assert!(FLIGHT.apply(0.3) > 0.6);
    }

    #[test]
    fn css_strings() {
        assert_eq!(Easing::EaseInOut.css(), "ease-in-out");
        assert_eq!(FLIGHT.css(), "cubic-bezier(0.22,0.9,0.36,1)");
    }
}
