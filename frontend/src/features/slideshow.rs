//! Crossfade between two stacked layers. Owned by the hero component.

pub const HOLD_MS: u32 = 2800;
pub const CROSSFADE_MS: u32 = 1200;

pub const IMAGES: [&str; 11] = [
    "/assets/images/ATLANTIS IMPACT (1).jpg",
    "/assets/images/ATLANTIS IMPACT (2).JPG",
    "/assets/images/ATLANTIS IMPACT (3).JPG",
    "/assets/images/ATLANTIS IMPACT (4).JPG",
    "/assets/images/ATLANTIS IMPACT (5).JPG",
    "/assets/images/ATLANTIS IMPACT (6).JPG",
    "/assets/images/ATLANTIS IMPACT (7).JPG",
    "/assets/images/ATLANTIS IMPACT (8).JPG",
    "/assets/images/ATLANTIS IMPACT (9).JPG",
    "/assets/images/ATLANTIS IMPACT (10).JPG",
    "/assets/images/ATLANTIS IMPACT (11).JPG",
];

pub fn tick_ms() -> u32 {
    HOLD_MS + CROSSFADE_MS
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    pub image: usize,
    pub visible: bool,
}

impl Layer {
    pub fn opacity(&self) -> &'static str {
        if self.visible {
            "1"
        } else {
            "0"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slideshow {
    len: usize,
    index: usize,
    pub a: Layer,
    pub b: Layer,
}

impl Slideshow {
    /// `None` when there is nothing to show.
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            len,
            index: 0,
            a: Layer { image: 0, visible: true },
            b: Layer { image: 1 % len, visible: false },
        })
    }

    /// Whether ticking changes anything at all.
    pub fn animates(&self) -> bool {
        self.len > 1
    }

    pub fn tick(&mut self) {
        let next = (self.index + 1) % self.len;
        let (incoming, outgoing) = if self.a.visible {
            (&mut self.b, &mut self.a)
        } else {
            (&mut self.a, &mut self.b)
        };
        incoming.image = next;
        incoming.visible = true;
        outgoing.visible = false;
        self.index = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_first_two_images_and_a_on_top() {
        let show = Slideshow::new(IMAGES.len()).unwrap();
        assert_eq!(show.a, Layer { image: 0, visible: true });
        assert_eq!(show.b, Layer { image: 1, visible: false });
        assert_eq!(show.a.opacity(), "1");
        assert_eq!(show.b.opacity(), "0");
    }

    #[test]
    fn tick_loads_next_image_into_hidden_layer_and_swaps() {
        let mut show = Slideshow::new(3).unwrap();
        show.tick();
        assert_eq!(show.index, 1);
        assert!(!show.a.visible);
        assert_eq!(show.b, Layer { image: 1, visible: true });

        show.tick();
        assert_eq!(show.index, 2);
        assert!(show.a.visible);
        assert_eq!(show.a, Layer { image: 2, visible: true });
        assert!(!show.b.visible);

        show.tick();
        assert_eq!(show.index, 0);
        assert_eq!(show.b.image, 0);
    }

    #[test]
    fn empty_list_has_no_slideshow() {
        assert!(Slideshow::new(0).is_none());
    }

    #[test]
    fn single_image_never_animates() {
        let show = Slideshow::new(1).unwrap();
        assert!(!show.animates());
        assert_eq!(show.b.image, 0);
    }

    #[test]
    fn loop_period_is_hold_plus_crossfade() {
        assert_eq!(tick_ms(), 4000);
    }
}
