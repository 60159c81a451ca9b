use crate::dom;
use crate::render;
use field_core::Simulator;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub sim: Rc<RefCell<Simulator>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
    pub epoch: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = self.epoch.elapsed().as_secs_f64();

        // Viewport follows the canvas; cheap when nothing changed.
        let (w, h) = (self.canvas.width(), self.canvas.height());
        if (w, h) != self.gpu.size() {
            self.gpu.resize_if_needed(w, h);
            self.sim.borrow_mut().set_viewport(w, h);
        }

        let view_proj = {
            let mut sim = self.sim.borrow_mut();
            sim.frame(now);
            self.gpu.upload_positions(sim.positions());
            sim.camera().view_proj()
        };

        if let Err(e) = self.gpu.render(view_proj) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    max_points: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, max_points).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn resize_handler(
    canvas: &web::HtmlCanvasElement,
    sim: &Rc<RefCell<Simulator>>,
) -> Closure<dyn FnMut()> {
    let canvas = canvas.clone();
    let sim = sim.clone();
    Closure::wrap(Box::new(move || {
        if let Some((w, h)) = dom::sync_canvas_backing_size(&canvas) {
            sim.borrow_mut().set_viewport(w, h);
        }
    }) as Box<dyn FnMut()>)
}

/// Keep the backing store in step with the canvas CSS box. Layout changes are
/// caught by a `ResizeObserver` on the canvas; window `resize` stays wired as
/// a fallback for browsers without one.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, sim: Rc<RefCell<Simulator>>) {
    dom::sync_canvas_backing_size(canvas);
    sim.borrow_mut().set_viewport(canvas.width(), canvas.height());

    let observer_closure = resize_handler(canvas, &sim);
    match web::ResizeObserver::new(observer_closure.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(canvas);
            // lives as long as the page
            std::mem::forget(observer);
            observer_closure.forget();
        }
        Err(e) => log::warn!("[resize] ResizeObserver unavailable: {:?}", e),
    }

    let window_closure = resize_handler(canvas, &sim);
    if let Some(window) = web::window() {
        if let Err(e) = window
            .add_event_listener_with_callback("resize", window_closure.as_ref().unchecked_ref())
        {
            log::error!("[resize] failed to listen for resize: {:?}", e);
        }
    }
    window_closure.forget();
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}
