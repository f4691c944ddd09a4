use crate::effects::EffectLayer;
use crate::form::FormBindings;
use crate::recovery::{recovery_for, Recovery};
use crate::surface::GpuSurface;
use backdrop_core::{Clock, InstantClock, SceneSession, SubmitSequence};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the frame loop and the event handlers share.
pub struct FrameContext {
    pub session: SceneSession,
    /// `None` once the GPU has given up; the form layer keeps running.
    pub gpu: Option<GpuSurface>,
    pub effects: EffectLayer,
    pub submit: SubmitSequence,
    pub form: Option<FormBindings>,
    pub clock: InstantClock,
}

impl FrameContext {
    /// Run one frame. The submit timeline and the effects advance on the
    /// clock whether or not the scene could be drawn.
    pub fn frame(&mut self) {
        let now = self.clock.now_ms();
        self.session.tick(now);
        self.advance_form(now);
        self.render_scene();
    }

    fn advance_form(&mut self, now: f64) {
        let actions = self.submit.advance(now);
        if let Some(form) = &self.form {
            for action in &actions {
                form.apply(action, &mut self.effects, now);
            }
        }
        self.effects.frame(now);
    }

    fn render_scene(&mut self) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let Err(err) = gpu.render(&self.session) else {
            return;
        };
        match recovery_for(&err) {
            Recovery::Reconfigure => gpu.reconfigure(),
            Recovery::SkipFrame => match err {
                wgpu::SurfaceError::Timeout => log::debug!("[frame] surface timeout, frame skipped"),
                e => log::warn!("[frame] render error: {:?}", e),
            },
            Recovery::ReleaseSurface => {
                log::error!("[frame] out of GPU memory, background stopped");
                self.gpu = None;
            }
        }
    }

    /// New backing size of the canvas, in device pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.session.camera.set_viewport(width, height);
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize(width, height);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Ok(mut ctx) = frame_ctx.try_borrow_mut() {
            ctx.frame();
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
