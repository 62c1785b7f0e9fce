//! Hero shrink, line reveal and letter fill, driven by scroll position.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, HtmlElement, Window};

use crate::dom;
use crate::error::SiteError;
use crate::motion::choreography::{HeroChoreography, HeroFrame, HeroGeometry, PinState};
use crate::motion::progress::FrameGate;

struct Scene {
    hero: HtmlElement,
    hero_inner: HtmlElement,
    stage: HtmlElement,
    about: HtmlElement,
    lines: Vec<Element>,
    chars: Vec<HtmlElement>,
    choreography: HeroChoreography,
    gate: FrameGate,
    last: Option<HeroFrame>,
}

impl Scene {
    fn locate() -> Result<Self, SiteError> {
        let hero = dom::html(dom::query(dom::HERO)?, dom::HERO)?;
        let hero_inner = dom::html(dom::query(dom::HERO_INNER)?, dom::HERO_INNER)?;
        let about = dom::html(dom::by_id(dom::ABOUT_LINES)?, dom::ABOUT_LINES)?;
        let stage = about
            .parent_element()
            .ok_or(SiteError::MissingElement("about stage"))
            .and_then(|parent| dom::html(parent, "about stage"))?;

        let lines = dom::query_all(&about, dom::ABOUT_LINE)?;
        let chars = dom::query_all(&about, dom::CHAR)?
            .into_iter()
            .filter_map(|c| c.dyn_into::<HtmlElement>().ok())
            .collect();

        let placeholder = HeroGeometry {
            hero_height: 0.0,
            viewport_height: 0.0,
            about_top: 0.0,
            about_height: 0.0,
        };

        Ok(Self {
            hero,
            hero_inner,
            stage,
            about,
            lines,
            chars,
            choreography: HeroChoreography::new(placeholder),
            gate: FrameGate::default(),
            last: None,
        })
    }

    /// Rebuilds phase boundaries from current layout.
    fn measure(&mut self) {
        let (_, viewport_height) = dom::viewport();
        let rect = self.about.get_bounding_client_rect();
        let shift = self.last.map(|f| f.about_shift).unwrap_or(0.0);

        self.choreography = HeroChoreography::new(HeroGeometry {
            hero_height: self.hero.offset_height() as f64,
            viewport_height,
            about_top: rect.top() + dom::scroll_y() - shift,
            about_height: rect.height(),
        });

        // room to scroll through while the block is held
        dom::set_style(
            &self.stage,
            "padding-bottom",
            &format!("{}px", self.choreography.fill_range()),
        );
    }

    fn render(&mut self) {
        let rect = self.about.get_bounding_client_rect();
        let shift = self.last.map(|f| f.about_shift).unwrap_or(0.0);
        let centre = rect.top() + rect.height() / 2.0 - shift;

        let frame = self
            .choreography
            .frame(dom::scroll_y(), centre, self.lines.len(), self.chars.len());
        self.apply(&frame);
        self.last = Some(frame);
    }

    fn apply(&self, frame: &HeroFrame) {
        let previous = self.last;

        dom::set_style(&self.hero_inner, "transform", &frame.hero_transform());

        if previous.map(|p| p.revealed_lines) != Some(frame.revealed_lines) {
            for (i, line) in self.lines.iter().enumerate() {
                dom::set_class(line, "revealed", frame.line_revealed(i));
            }
        }

        if previous.map(|p| p.filled_chars) != Some(frame.filled_chars) {
            for (i, ch) in self.chars.iter().enumerate() {
                dom::set_style(ch, "color", frame.char_color(i));
            }
        }

        dom::set_class(&self.about, "chars-active", frame.chars_active);
        for state in [PinState::Pinned, PinState::After] {
            dom::set_class(&self.about, state.class(), frame.about_pin == state);
        }
        dom::set_style(&self.about, "transform", &frame.about_transform());
        dom::set_style(&self.about, "opacity", &format!("{:.3}", frame.about_opacity));
    }
}

/// Keeps the listeners alive; detaches them and any queued frame when dropped.
pub struct SceneHandle {
    window: Window,
    scene: Rc<RefCell<Scene>>,
    on_scroll: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
    _frame: Rc<Closure<dyn FnMut(f64)>>,
}

impl Drop for SceneHandle {
    fn drop(&mut self) {
        if let Some(handle) = self.scene.borrow_mut().gate.cancel() {
            let _ = self.window.cancel_animation_frame(handle);
        }
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
    }
}

fn schedule(window: &Window, scene: &Rc<RefCell<Scene>>, frame: &Closure<dyn FnMut(f64)>) {
    if !scene.borrow_mut().gate.request() {
        return;
    }
    match window.request_animation_frame(frame.as_ref().unchecked_ref()) {
        Ok(handle) => scene.borrow_mut().gate.scheduled(handle),
        Err(e) => {
            warn!("no animation frame, rendering inline: {:?}", e);
            let mut scene = scene.borrow_mut();
            scene.gate.begin_frame();
            scene.render();
        }
    }
}

pub fn attach() -> Result<SceneHandle, SiteError> {
    let window = dom::window()?;
    let mut scene = Scene::locate()?;
    scene.measure();
    scene.render();
    info!(
        "Scroll scene attached ({} lines, {} chars)",
        scene.lines.len(),
        scene.chars.len()
    );
    let scene = Rc::new(RefCell::new(scene));

    let frame = {
        let scene = scene.clone();
        Rc::new(Closure::wrap(Box::new(move |_timestamp: f64| {
            let mut scene = scene.borrow_mut();
            scene.gate.begin_frame();
            scene.render();
        }) as Box<dyn FnMut(f64)>))
    };

    let on_scroll = {
        let scene = scene.clone();
        let frame = frame.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            schedule(&window, &scene, &frame);
        }) as Box<dyn FnMut()>)
    };

    let on_resize = {
        let scene = scene.clone();
        let frame = frame.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            scene.borrow_mut().measure();
            schedule(&window, &scene, &frame);
        }) as Box<dyn FnMut()>)
    };

    let mut passive = AddEventListenerOptions::new();
    #[allow(deprecated)]
    passive.passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &passive,
    )?;
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

    Ok(SceneHandle {
        window,
        scene,
        on_scroll,
        on_resize,
        _frame: frame,
    })
}
