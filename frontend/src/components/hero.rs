use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::info;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::features::slideshow::{tick_ms, Slideshow, CROSSFADE_MS, IMAGES};

#[derive(Clone, PartialEq)]
struct Deck(Option<Slideshow>);

impl Reducible for Deck {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        let mut next = self.0.clone();
        if let Some(show) = next.as_mut() {
            show.tick();
        }
        Rc::new(Deck(next))
    }
}

fn preload(sources: &[&str]) -> Vec<HtmlImageElement> {
    let images: Vec<HtmlImageElement> = sources
        .iter()
        .filter_map(|src| {
            let img = HtmlImageElement::new().ok()?;
            img.set_src(src);
            Some(img)
        })
        .collect();
    gloo_console::log!("preloading hero images:", images.len());
    images
}

fn layer_style(image: usize, opacity: &str) -> String {
    format!(
        "background-image: url('{}'); opacity: {}; transition: opacity {}ms ease-in-out;",
        IMAGES.get(image).copied().unwrap_or_default(),
        opacity,
        CROSSFADE_MS,
    )
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let deck = use_reducer(|| Deck(Slideshow::new(IMAGES.len())));

    {
        let deck = deck.clone();
        use_effect_with_deps(
            move |_| {
                let animates = deck.0.as_ref().map(Slideshow::animates).unwrap_or(false);
                let preloaded = preload(&IMAGES);
                let interval = animates.then(|| {
                    info!("Hero slideshow started ({} images)", IMAGES.len());
                    let deck = deck.clone();
                    Interval::new(tick_ms(), move || deck.dispatch(()))
                });
                move || {
                    drop(interval);
                    drop(preloaded);
                }
            },
            (),
        );
    }

    let layers = match &deck.0 {
        Some(show) => html! {
            <>
                <div class="layer layer-a" style={layer_style(show.a.image, show.a.opacity())}></div>
                <div class="layer layer-b" style={layer_style(show.b.image, show.b.opacity())}></div>
            </>
        },
        None => html! {},
    };

    html! {
        <section class="hero" id="top">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        overflow: hidden;
                        background: #fff;
                    }
                    .hero-inner {
                        position: absolute;
                        inset: 0;
                        transform-origin: 50% 0;
                        will-change: transform;
                    }
                    .hero-mask {
                        position: absolute;
                        inset: 6rem 2rem 2rem;
                        border-radius: 24px;
                        overflow: hidden;
                    }
                    .hero .layer {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                    }
                    .hero-title {
                        position: absolute;
                        left: 3rem;
                        bottom: 3rem;
                        margin: 0;
                        color: #fff;
                        font-size: clamp(2.5rem, 7vw, 6rem);
                        line-height: 0.95;
                        text-shadow: 0 2px 24px rgba(0, 0, 0, 0.35);
                    }
                "#}
            </style>
            <div class="hero-inner">
                <div class="hero-mask">
                    { layers }
                    <h1 class="hero-title">{"Celebrate"}<br/>{"Atlantis"}</h1>
                </div>
            </div>
        </section>
    }
}
