use log::{debug, info};
use yew::prelude::*;

use crate::components::about::About;
use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::components::hero::Hero;
use crate::components::history::History;
use crate::dom;
use crate::error::SiteError;
use crate::features::{entrances, scroll_scene, smooth_scroll};

/// Keeps an attached feature alive, or logs why it was skipped.
fn keep<T>(name: &str, attached: Result<T, SiteError>) -> Option<T> {
    match attached {
        Ok(handle) => Some(handle),
        Err(e) => {
            debug!("{} skipped: {}", name, e);
            None
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let loaded = use_state(|| false);

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let anchors = keep("smooth scroll", smooth_scroll::attach());
                let scene = keep("scroll scene", scroll_scene::attach());
                let history = keep("history timeline", entrances::attach_history());
                let wipes = keep("gallery wipes", entrances::attach_gallery_wipes());
                loaded.set(true);
                info!("Home page behaviours attached");

                move || {
                    drop(wipes);
                    drop(history);
                    drop(scene);
                    drop(anchors);
                }
            },
            (),
        );
    }

    html! {
        <>
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: "Inter", system-ui, sans-serif;
                        color: #111;
                        background: #fff;
                    }
                    .preloader {
                        position: fixed;
                        inset: 0;
                        z-index: 3000;
                        background: #fff;
                        transition: opacity 0.6s ease, visibility 0.6s;
                    }
                    .preloader.loaded {
                        opacity: 0;
                        visibility: hidden;
                    }
                    .contact {
                        padding: 15vh 2rem;
                    }
                "#}
            </style>
            <div id={dom::PRELOADER} class={classes!("preloader", (*loaded).then(|| "loaded"))}></div>
            <main>
                <Hero />
                <About />
                <History />
                <Gallery />
                <section class="contact" id="contact">
                    <h2>{"Get in touch"}</h2>
                    <ContactForm />
                </section>
            </main>
            <Footer />
        </>
    }
}
