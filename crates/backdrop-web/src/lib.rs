#![cfg(target_arch = "wasm32")]
use backdrop_core::{InstantClock, SceneParams, SceneSession, SubmitSequence, EFFECT_POOL_CAPACITY};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod effects;
mod events;
mod form;
mod frame;
mod page;
mod recovery;
mod style;
mod surface;

use constants::CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    let document = web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if page::waits_for_content(document.ready_state()) {
        log::debug!("[init] waiting for DOMContentLoaded");
        let mut pending = true;
        dom::listen(&document, "DOMContentLoaded", move |_: web::Event| {
            if std::mem::take(&mut pending) {
                spawn_init();
            }
        });
    } else {
        spawn_init();
    }
    Ok(())
}

fn spawn_init() {
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let mut session = SceneSession::new(&SceneParams::default(), &mut rand::thread_rng())?;
    session.camera.set_viewport(width, height);

    let gpu = match surface::GpuSurface::new(&canvas, &session).await {
        Ok(gpu) => Some(gpu),
        Err(e) => {
            log::warn!("[init] no WebGPU background: {:?}", e);
            None
        }
    };
    let effects = effects::EffectLayer::new(document.clone(), EFFECT_POOL_CAPACITY)?;
    let bindings = form::FormBindings::find(&document);
    let submit = SubmitSequence::default();
    let cancel = submit.cancel_token();

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        gpu,
        effects,
        submit,
        form: bindings.clone(),
        clock: InstantClock::default(),
    }));

    events::wire_pointer(&window, ctx.clone());
    events::wire_resize(&window, canvas, ctx.clone());
    form::wire(&document, bindings.as_ref(), ctx.clone());
    if bindings.is_some() {
        events::wire_cancel(&window, cancel);
    }

    frame::start_loop(ctx);
    log::info!("[init] frame loop running");
    Ok(())
}
