//! Contact form bindings: card tilt, field focus styling and the simulated
//! submit sequence.

use crate::constants::*;
use crate::dom::{client_rect, field_value, listen, query_html, set_style};
use crate::effects::EffectLayer;
use crate::frame::FrameContext;
use crate::style;
use backdrop_core::{border_color_for, label_color, Clock, FormAction, Tilt, BORDER_EMPTY_COLOR};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handles to the form pieces the submit sequence touches. Everything but
/// the form itself is optional.
#[derive(Clone)]
pub struct FormBindings {
    form: web::HtmlFormElement,
    success: Option<web::Element>,
    button: Option<web::Element>,
    button_text: Option<web::Element>,
    fields: Vec<web::HtmlElement>,
}

impl FormBindings {
    pub fn find(document: &web::Document) -> Option<Self> {
        let Some(form) = document
            .get_element_by_id(FORM_ID)
            .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
        else {
            log::warn!("[form] no #{FORM_ID}; submit sequence disabled");
            return None;
        };
        let success = document.get_element_by_id(SUCCESS_ID);
        if success.is_none() {
            log::warn!("[form] no #{SUCCESS_ID}");
        }
        let button = form.query_selector(SUBMIT_BUTTON_SELECTOR).ok().flatten();
        let button_text = button
            .as_ref()
            .and_then(|b| b.query_selector(BUTTON_TEXT_SELECTOR).ok().flatten());
        if button_text.is_none() {
            log::warn!("[form] no {SUBMIT_BUTTON_SELECTOR} {BUTTON_TEXT_SELECTOR}");
        }
        Some(Self {
            form,
            success,
            button,
            button_text,
            fields: collect_fields(document),
        })
    }

    pub fn apply(&self, action: &FormAction, effects: &mut EffectLayer, now_ms: f64) {
        let form: &web::HtmlElement = self.form.as_ref();
        match action {
            FormAction::BeginLoading { label } => {
                if let Some(b) = &self.button {
                    let _ = b.class_list().add_1(LOADING_CLASS);
                }
                self.set_button_text(label);
            }
            FormAction::SpawnTypedText => effects.spawn_typed(now_ms),
            FormAction::SpawnConfetti => effects.spawn_confetti(now_ms),
            FormAction::FadeOutForm => {
                set_style(form, "opacity", "0");
                set_style(form, "transform", &style::scale(FORM_HIDDEN_SCALE));
            }
            FormAction::HideFormShowSuccess => {
                set_style(form, "display", "none");
                if let Some(s) = &self.success {
                    let _ = s.class_list().add_1(SHOW_CLASS);
                }
            }
            FormAction::HideSuccess => {
                if let Some(s) = &self.success {
                    let _ = s.class_list().remove_1(SHOW_CLASS);
                }
            }
            FormAction::RestoreForm { label } => {
                self.form.reset();
                set_style(form, "display", "block");
                set_style(form, "opacity", "1");
                set_style(form, "transform", &style::scale(1.0));
                if let Some(b) = &self.button {
                    let _ = b.class_list().remove_1(LOADING_CLASS);
                }
                self.set_button_text(label);
                for field in &self.fields {
                    set_style(field, "border-color", BORDER_EMPTY_COLOR);
                }
            }
        }
    }

    fn set_button_text(&self, label: &str) {
        if let Some(t) = &self.button_text {
            t.set_text_content(Some(label));
        }
    }
}

fn collect_fields(document: &web::Document) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(FIELD_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Lean the form card towards the pointer, flat again on leave.
pub fn wire_tilt(document: &web::Document) {
    let Some(container) = document
        .query_selector(FORM_CONTAINER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::warn!("[form] no {FORM_CONTAINER_SELECTOR}; tilt disabled");
        return;
    };
    let card = container.clone();
    listen(&container, "mousemove", move |ev: web::MouseEvent| {
        let tilt = Tilt::from_pointer(client_rect(&card), ev.client_x() as f64, ev.client_y() as f64);
        set_style(&card, "transform", &tilt.css_transform());
    });
    let card = container.clone();
    listen(&container, "mouseleave", move |_: web::MouseEvent| {
        set_style(&card, "transform", &Tilt::NEUTRAL.css_transform());
    });
}

/// Focus, blur and input styling for every field, plus the focus burst.
pub fn wire_fields(fields: &[web::HtmlElement], ctx: Rc<RefCell<FrameContext>>) {
    for field in fields {
        let label = field
            .closest(FIELD_GROUP_SELECTOR)
            .ok()
            .flatten()
            .and_then(|group| query_html(&group, FIELD_LABEL_SELECTOR));

        let (el, lbl, ctx_focus) = (field.clone(), label.clone(), ctx.clone());
        listen(field, "focus", move |_: web::FocusEvent| {
            if let Some(l) = &lbl {
                set_style(l, "color", label_color(true));
            }
            let origin = client_rect(&el).center();
            let Ok(mut ctx) = ctx_focus.try_borrow_mut() else {
                return;
            };
            let now = ctx.clock.now_ms();
            ctx.effects.spawn_burst(origin, now);
        });

        let lbl = label;
        listen(field, "blur", move |_: web::FocusEvent| {
            if let Some(l) = &lbl {
                set_style(l, "color", label_color(false));
            }
        });

        let el = field.clone();
        listen(field, "input", move |_: web::Event| {
            set_style(&el, "border-color", border_color_for(&field_value(&el)));
        });
    }
}

/// Intercept submission and run the sequence instead.
pub fn wire_submit(bindings: &FormBindings, ctx: Rc<RefCell<FrameContext>>) {
    let form = bindings.form.clone();
    listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let mut guard = ctx.borrow_mut();
        let ctx = &mut *guard;
        let now = ctx.clock.now_ms();
        match ctx.submit.start(now) {
            Ok(actions) => {
                log::info!("[form] submit started");
                if let Some(form) = &ctx.form {
                    for action in &actions {
                        form.apply(action, &mut ctx.effects, now);
                    }
                }
            }
            Err(e) => log::warn!("[form] {e}"),
        }
    });
}

/// Wire every form behaviour that has its elements on the page.
pub fn wire(
    document: &web::Document,
    bindings: Option<&FormBindings>,
    ctx: Rc<RefCell<FrameContext>>,
) {
    wire_tilt(document);
    let fields = match bindings {
        Some(b) => b.fields.clone(),
        None => collect_fields(document),
    };
    wire_fields(&fields, ctx.clone());
    if let Some(b) = bindings {
        wire_submit(b, ctx);
    }
}
