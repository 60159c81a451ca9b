use crate::dom;
use crate::input;
use field_core::Simulator;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub sim: Rc<RefCell<Simulator>>,
    /// Shared clock origin; handlers and the frame loop read the same timeline.
    pub epoch: Instant,
}

impl InputWiring {
    #[inline]
    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointercancel");
}

type PointerClosure = wasm_bindgen::closure::Closure<dyn FnMut(web::PointerEvent)>;

fn add_window_listener(event: &str, closure: PointerClosure) {
    if let Some(wnd) = web::window() {
        if let Err(e) =
            wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::error!("[input] failed to listen for {}: {:?}", event, e);
        }
    }
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = dom::client_rect(&w.canvas);
        let ndc = input::client_to_ndc(ev.client_x() as f32, ev.client_y() as f32, rect);
        w.sim.borrow_mut().pointer_move(ndc);
    }) as Box<dyn FnMut(_)>);
    add_window_listener("pointermove", closure);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = dom::client_rect(&w.canvas);
        let ndc = input::client_to_ndc(ev.client_x() as f32, ev.client_y() as f32, rect);
        let now = w.now();
        let mut sim = w.sim.borrow_mut();
        // a tap without a preceding move still lands where it was pressed
        sim.pointer_move(ndc);
        sim.pointer_down(now);
        log::debug!("[input] down at ({:.2},{:.2})", ndc.x, ndc.y);
    }) as Box<dyn FnMut(_)>);
    add_window_listener("pointerdown", closure);
}

fn wire_pointerup(w: &InputWiring, event: &'static str) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let now = w.now();
        let mut sim = w.sim.borrow_mut();
        if sim.pointer().held {
            sim.pointer_up(now);
            log::debug!("[input] {}", event);
        }
    }) as Box<dyn FnMut(_)>);
    add_window_listener(event, closure);
}
