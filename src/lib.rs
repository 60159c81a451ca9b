#![cfg(target_arch = "wasm32")]
use field_core::Simulator;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod viewport;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-field starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // No canvas on this page: nothing to decorate.
    let canvas = match dom::find_canvas(&document, constants::CANVAS_ID) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[init] {}; background disabled", e);
            return Ok(());
        }
    };

    let params = config::field_params_from_attrs(
        canvas.get_attribute(constants::VARIANT_ATTR).as_deref(),
        canvas.get_attribute(constants::PARTICLES_ATTR).as_deref(),
    );
    let max_points = params.particle_count;
    let sim = match Simulator::new(params) {
        Ok(s) => Rc::new(RefCell::new(s)),
        Err(e) => {
            log::error!("[init] invalid field parameters: {}", e);
            return Ok(());
        }
    };

    frame::wire_canvas_resize(&canvas, sim.clone());

    let Some(gpu) = frame::init_gpu(&canvas, max_points).await else {
        return Ok(());
    };

    let epoch = Instant::now();
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        sim: sim.clone(),
        epoch,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        canvas,
        gpu,
        epoch,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
