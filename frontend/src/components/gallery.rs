use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent, TransitionEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;
use crate::features::lightbox::{LightboxAction, LightboxState, Picture, Rect, Viewport};

const PICTURES: [(&str, &str); 6] = [
    ("/assets/images/ATLANTIS IMPACT (3).JPG", "Crowd at the harbour"),
    ("/assets/images/ATLANTIS IMPACT (4).JPG", "Lanterns over the water"),
    ("/assets/images/ATLANTIS IMPACT (5).JPG", "Drummers in the parade"),
    ("/assets/images/ATLANTIS IMPACT (6).JPG", "Evening on the pier"),
    ("/assets/images/ATLANTIS IMPACT (7).JPG", "Children dancing"),
    ("/assets/images/ATLANTIS IMPACT (8).JPG", "Boats coming in"),
];

fn rect_of(node: &NodeRef) -> Option<Rect> {
    node.cast::<Element>()
        .map(|el| Rect::from_dom(&el.get_bounding_client_rect()))
}

fn body_overflow() -> String {
    dom::document()
        .ok()
        .and_then(|d| d.body())
        .and_then(|b| b.style().get_property_value("overflow").ok())
        .unwrap_or_default()
}

fn set_body_overflow(value: &str) {
    let Some(body) = dom::document().ok().and_then(|d| d.body()) else {
        return;
    };
    if value.is_empty() {
        let _ = body.style().remove_property("overflow");
    } else {
        dom::set_style(&body, "overflow", value);
    }
}

fn next_frame(callback: impl FnOnce() + 'static) {
    let Ok(window) = dom::window() else {
        callback();
        return;
    };
    let closure = Closure::once_into_js(callback);
    if window.request_animation_frame(closure.unchecked_ref()).is_err() {
        debug!("no animation frame for lightbox launch");
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let lightbox = use_reducer(LightboxState::default);
    let thumbs = use_memo(
        |_| (0..PICTURES.len()).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        (),
    );
    let overlay_ref = use_node_ref();
    let final_ref = use_node_ref();

    // start each flight one frame after its start position is on screen
    {
        let generation = lightbox.generation;
        let pending = lightbox.stand_in().map(|s| !s.launched).unwrap_or(false);
        let lightbox = lightbox.clone();
        use_effect_with_deps(
            move |(generation, pending)| {
                if *pending {
                    let generation = *generation;
                    next_frame(move || lightbox.dispatch(LightboxAction::Launch(generation)));
                }
                || ()
            },
            (generation, pending),
        );
    }

    // settles the flight if transitionend never arrives
    {
        let generation = lightbox.generation;
        let fallback = lightbox.stand_in().map(|s| s.fallback_ms());
        let lightbox = lightbox.clone();
        use_effect_with_deps(
            move |(generation, fallback)| {
                let generation = *generation;
                let timeout = fallback.map(|ms| {
                    Timeout::new(ms, move || lightbox.dispatch(LightboxAction::Settled(generation)))
                });
                move || drop(timeout)
            },
            (generation, fallback),
        );
    }

    use_effect_with_deps(
        |overflow| {
            if let Some(value) = overflow {
                set_body_overflow(value);
            }
            || ()
        },
        lightbox.body_overflow(),
    );

    let close = {
        let lightbox = lightbox.clone();
        let final_ref = final_ref.clone();
        let thumbs = thumbs.clone();
        Callback::from(move |_: ()| {
            let trigger = lightbox.displayed().and_then(|picture| {
                PICTURES
                    .iter()
                    .position(|(src, _)| *src == picture.src)
                    .and_then(|i| rect_of(&thumbs[i]))
            });
            lightbox.dispatch(LightboxAction::Close {
                displayed: rect_of(&final_ref),
                trigger,
            });
        })
    };

    {
        let close = close.clone();
        let open = lightbox.is_open();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                close.emit(());
            }
        });
    }

    let on_backdrop = {
        let close = close.clone();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let on_overlay = match (e.target_dyn_into::<Element>(), overlay_ref.cast::<Element>()) {
                (Some(target), Some(overlay)) => target == overlay,
                _ => false,
            };
            if on_overlay {
                close.emit(());
            }
        })
    };

    let on_close_button = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let items = PICTURES.iter().enumerate().map(|(i, (src, alt))| {
        let node = thumbs[i].clone();
        let onclick = {
            let lightbox = lightbox.clone();
            let node = node.clone();
            let picture = Picture {
                src: src.to_string(),
                alt: alt.to_string(),
            };
            Callback::from(move |_: MouseEvent| {
                let Some(rect) = rect_of(&node) else {
                    return;
                };
                let (width, height) = dom::viewport();
                info!("Opening lightbox for {}", picture.src);
                lightbox.dispatch(LightboxAction::Activate {
                    picture: picture.clone(),
                    rect,
                    viewport: Viewport { width, height },
                    page_overflow: body_overflow(),
                });
            })
        };
        html! {
            <figure class="wipe">
                <img class="gallery-thumb" src={*src} alt={*alt} loading="lazy" ref={node} {onclick} />
            </figure>
        }
    });

    let stand_in = lightbox.stand_in().map(|stand_in| {
        let generation = lightbox.generation;
        let ontransitionend = {
            let lightbox = lightbox.clone();
            Callback::from(move |e: TransitionEvent| {
                if e.property_name() == "transform" {
                    lightbox.dispatch(LightboxAction::Settled(generation));
                }
            })
        };
        let node = html! {
            <img
                class="lightbox-stand-in"
                src={stand_in.picture.src.clone()}
                alt=""
                style={stand_in.style()}
                {ontransitionend}
            />
        };
        match dom::document().ok().and_then(|d| d.body()) {
            Some(body) => create_portal(node, body.into()),
            None => node,
        }
    });

    let full_view = lightbox.displayed().map(|picture| {
        html! {
            <img
                class="lightbox-final"
                src={picture.src.clone()}
                alt={picture.alt.clone()}
                ref={final_ref.clone()}
            />
        }
    });

    html! {
        <section class="gallery" id="gallery">
            <style>
                {r#"
                    .gallery {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
                        gap: 1.25rem;
                        padding: 10vh 2rem;
                    }
                    .wipe {
                        margin: 0;
                        overflow: hidden;
                        clip-path: inset(0 100% 0 0);
                        transition: clip-path 0.9s cubic-bezier(.22,.9,.36,1);
                    }
                    .wipe.visible {
                        clip-path: inset(0 0 0 0);
                    }
                    .gallery-thumb {
                        display: block;
                        width: 100%;
                        aspect-ratio: 4 / 3;
                        object-fit: cover;
                        cursor: zoom-in;
                    }
                    .lightbox {
                        position: fixed;
                        inset: 0;
                        z-index: 2000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.85);
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.26s ease;
                    }
                    .lightbox.open {
                        opacity: 1;
                        pointer-events: auto;
                    }
                    .lightbox-final {
                        max-width: 92vw;
                        max-height: 86vh;
                        width: auto;
                        height: auto;
                        animation: lightbox-fade 220ms ease both;
                    }
                    .lightbox-close {
                        position: absolute;
                        top: 1rem;
                        right: 1.25rem;
                        border: 0;
                        background: none;
                        color: #fff;
                        font-size: 2rem;
                        cursor: pointer;
                    }
                    @keyframes lightbox-fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                "#}
            </style>
            { for items }
            <div
                id={dom::LIGHTBOX}
                class={classes!("lightbox", lightbox.is_open().then(|| "open"))}
                aria-hidden={lightbox.aria_hidden()}
                ref={overlay_ref}
                onclick={on_backdrop}
            >
                <button class="lightbox-close" aria-label="Close" onclick={on_close_button}>{"×"}</button>
                <div class="lightbox-inner">
                    { for full_view }
                </div>
            </div>
            { for stand_in }
        </section>
    }
}
