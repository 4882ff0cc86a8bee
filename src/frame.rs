use crate::constants::{FLAKE_SIZE_PX, FLAKE_Z_INDEX};
use crate::dom;
use crate::render::CanvasSurface;
use card_core::{
    Clock, ConfettiParams, FrameScheduler, ParticleSystem, PlannedBurst, Shower, ShowerFlake,
    Starfield, StarfieldParams,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` behind the engine's scheduling seam.
struct RafScheduler<'a> {
    tick: &'a TickSlot,
}

impl FrameScheduler for RafScheduler<'_> {
    fn request_frame(&mut self) {
        dom::request_frame(self.tick);
    }
}

struct ConfettiStage {
    system: ParticleSystem<StdRng>,
    surface: CanvasSurface,
}

/// Confetti engine bound to a canvas. Cheap to clone; clones share the engine.
#[derive(Clone)]
pub struct ConfettiLoop {
    stage: Rc<RefCell<ConfettiStage>>,
    tick: TickSlot,
}

impl ConfettiLoop {
    pub fn new(canvas: Option<web::HtmlCanvasElement>) -> Self {
        let surface = CanvasSurface::bind(canvas);
        let system = ParticleSystem::new(
            surface.metrics(),
            ConfettiParams::default(),
            StdRng::from_entropy(),
        );
        let stage = Rc::new(RefCell::new(ConfettiStage { system, surface }));

        let tick: TickSlot = Rc::new(RefCell::new(None));
        let tick_self = tick.clone();
        let stage_tick = stage.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut st = stage_tick.borrow_mut();
            let ConfettiStage { system, surface } = &mut *st;
            let mut painter = surface.painter();
            system.tick(&mut painter, &mut RafScheduler { tick: &tick_self });
        }) as Box<dyn FnMut()>));

        let stage_resize = stage.clone();
        dom::on_resize(move || {
            let mut st = stage_resize.borrow_mut();
            let metrics = st.surface.resize();
            st.system.resize(metrics);
        });

        Self { stage, tick }
    }

    /// Burst at CSS-pixel coordinates.
    pub fn burst(&self, x: f64, y: f64, amount: usize) {
        let mut sched = RafScheduler { tick: &self.tick };
        self.stage.borrow_mut().system.burst(x, y, amount, &mut sched);
    }

    /// Burst at a fraction of the current surface size.
    pub fn burst_at(&self, anchor: [f64; 2], amount: usize) {
        let (x, y) = self.stage.borrow().surface.metrics().anchor(anchor[0], anchor[1]);
        self.burst(x, y, amount);
    }

    /// Fire a planned volley; later shots resolve their anchor when they fire.
    pub fn play(&self, plan: &[PlannedBurst]) {
        for shot in plan.iter().copied() {
            if shot.delay_ms <= 0 {
                self.burst_at(shot.anchor, shot.amount);
            } else {
                let this = self.clone();
                dom::set_timeout(shot.delay_ms, move || this.burst_at(shot.anchor, shot.amount));
            }
        }
    }
}

struct StarStage {
    field: Starfield<StdRng>,
    surface: CanvasSurface,
}

/// Draw the starfield now, on every resize, and on the twinkle timer.
pub fn start_starfield(canvas: Option<web::HtmlCanvasElement>) {
    let surface = CanvasSurface::bind(canvas);
    let field = Starfield::new(
        surface.metrics(),
        StarfieldParams::default(),
        StdRng::from_entropy(),
    );
    let period = field.params().twinkle_interval_ms as i32;
    let stage = Rc::new(RefCell::new(StarStage { field, surface }));

    {
        let mut st = stage.borrow_mut();
        let StarStage { field, surface } = &mut *st;
        field.redraw(&mut surface.painter());
        log::info!("[stars] {} stars", field.count());
    }

    let stage_resize = stage.clone();
    dom::on_resize(move || {
        let mut st = stage_resize.borrow_mut();
        let StarStage { field, surface } = &mut *st;
        let metrics = surface.resize();
        field.resize(metrics, &mut surface.painter());
    });

    dom::set_interval(period, move || {
        let mut st = stage.borrow_mut();
        let StarStage { field, surface } = &mut *st;
        field.twinkle(&mut surface.painter());
    });
}

/// Run the one-shot wish shower as fixed-position elements over the page.
pub fn start_shower(document: web::Document, clock: impl Clock + 'static) {
    let Some(body) = document.body() else {
        return;
    };
    let mut shower = Shower::new(clock.now_ms(), StdRng::from_entropy());
    let mut elements: Vec<Option<web::HtmlElement>> = Vec::new();

    dom::animation_loop(move || {
        let frame = shower.step(clock.now_ms(), dom::viewport_height());
        for id in frame.spawned {
            if elements.len() <= id {
                elements.resize(id + 1, None);
            }
            elements[id] = create_flake(&document, &body);
        }
        for id in frame.removed {
            if let Some(el) = elements.get_mut(id).and_then(Option::take) {
                el.remove();
            }
        }
        for flake in shower.flakes() {
            if let Some(Some(el)) = elements.get(flake.id) {
                place_flake(el, flake);
            }
        }
        !shower.is_finished()
    });
}

fn create_flake(document: &web::Document, body: &web::HtmlElement) -> Option<web::HtmlElement> {
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    let style = el.style();
    let size = format!("{FLAKE_SIZE_PX}px");
    _ = style.set_property("position", "fixed");
    _ = style.set_property("width", &size);
    _ = style.set_property("height", &size);
    _ = style.set_property("border-radius", "50%");
    _ = style.set_property("pointer-events", "none");
    _ = style.set_property("z-index", &FLAKE_Z_INDEX.to_string());
    _ = body.append_child(&el);
    Some(el)
}

fn place_flake(el: &web::HtmlElement, flake: &ShowerFlake) {
    let style = el.style();
    _ = style.set_property("background-color", flake.color);
    _ = style.set_property("left", &format!("{}%", flake.x));
    _ = style.set_property("top", &format!("{}px", flake.y));
    _ = style.set_property("transform", &format!("rotate({}deg)", flake.rot));
}
