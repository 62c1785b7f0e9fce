use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::ticker::Ticker;
use crate::config;
use crate::dom;
use crate::features::toggle::{Toggle, ToggleAction};

const LINKS: [(&str, &str, &str); 4] = [
    ("#about", "About", "Who we are"),
    ("#history", "History", "Since 1998"),
    ("#gallery", "Gallery", "See it"),
    ("#contact", "Contact", "Say hello"),
];

fn contains(node: &NodeRef, target: &Node) -> bool {
    node.cast::<Node>()
        .map(|n| n.contains(Some(target)))
        .unwrap_or(false)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_reducer(Toggle::default);
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    {
        let menu = menu.clone();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            if !menu.is_open() {
                return;
            }
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            if !contains(&menu_ref, &target) && !contains(&toggle_ref, &target) {
                debug!("menu closed by outside click");
                menu.dispatch(ToggleAction::OutsideClick);
            }
        });
    }

    {
        let menu = menu.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu.dispatch(ToggleAction::Escape);
            }
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(ToggleAction::Toggle))
    };

    let navigate = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(ToggleAction::Navigate))
    };

    let menu_class = classes!("main-nav", menu.is_open().then(|| "open"));

    html! {
        <header class="top-nav">
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 1000;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 2rem;
                        background: rgba(255, 255, 255, 0.92);
                        backdrop-filter: blur(8px);
                    }
                    .nav-logo {
                        font-weight: 700;
                        letter-spacing: 0.04em;
                        color: #000;
                        text-decoration: none;
                    }
                    .main-nav {
                        display: flex;
                        gap: 2rem;
                    }
                    .main-nav a {
                        color: #111;
                        text-decoration: none;
                        text-transform: uppercase;
                        font-size: 0.85rem;
                    }
                    .ticker {
                        position: relative;
                        display: inline-block;
                        overflow: hidden;
                        vertical-align: bottom;
                    }
                    .ticker .label {
                        display: inline-block;
                        will-change: transform;
                    }
                    .ticker .label.alt {
                        position: absolute;
                        left: 0;
                        top: 0;
                        transform: translateY(100%);
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: 0;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #111;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: block;
                        }
                        .main-nav {
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1.5rem 2rem;
                            background: #fff;
                            transform: translateY(-8px);
                            opacity: 0;
                            pointer-events: none;
                            transition: opacity 0.2s ease, transform 0.2s ease;
                        }
                        .main-nav.open {
                            transform: none;
                            opacity: 1;
                            pointer-events: auto;
                        }
                    }
                "#}
            </style>
            <a href="#top" class="nav-logo">{ config::SITE_NAME }</a>
            <button
                id={dom::MOBILE_TOGGLE}
                class="burger-menu"
                aria-controls={dom::MAIN_NAV}
                aria-label="Menu"
                aria-expanded={menu.aria_expanded()}
                ref={toggle_ref}
                onclick={toggle_menu}
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <nav id={dom::MAIN_NAV} class={menu_class} ref={menu_ref}>
                { for LINKS.iter().map(|(href, label, alt)| html! {
                    <a href={*href} onclick={navigate.clone()}>
                        <Ticker label={*label} alt={Some(AttrValue::from(*alt))} />
                    </a>
                }) }
            </nav>
        </header>
    }
}
