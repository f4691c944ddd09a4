//! DOM side of the transient effects. Each running effect owns the elements
//! it created; the frame loop restyles them and removes each piece as soon
//! as it samples to `None`.

use crate::constants::TYPED_BOX_CSS;
use crate::dom::set_style;
use crate::style;
use backdrop_core::{ConfettiBurst, Effect, EffectPool, ParamsError, ParticleBurst, TypedText, TYPED_TEXT};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements bound to one effect, indexed like its pieces. A slot turns
/// `None` once that piece has been removed from the page.
pub struct EffectNodes(Vec<Option<web::HtmlElement>>);

impl EffectNodes {
    fn remove_all(self) {
        for el in self.0.into_iter().flatten() {
            el.remove();
        }
    }
}

pub struct EffectLayer {
    document: web::Document,
    pool: EffectPool<EffectNodes>,
}

impl EffectLayer {
    pub fn new(document: web::Document, capacity: usize) -> Result<Self, ParamsError> {
        Ok(Self {
            document,
            pool: EffectPool::with_capacity(capacity)?,
        })
    }

    pub fn spawn_burst(&mut self, origin: (f64, f64), now_ms: f64) {
        let burst = ParticleBurst::spawn(origin, now_ms, &mut rand::thread_rng());
        self.spawn(Effect::Burst(burst));
    }

    pub fn spawn_confetti(&mut self, now_ms: f64) {
        let confetti = ConfettiBurst::spawn(now_ms, &mut rand::thread_rng());
        self.spawn(Effect::Confetti(confetti));
    }

    pub fn spawn_typed(&mut self, now_ms: f64) {
        self.spawn(Effect::Typed(TypedText::new(TYPED_TEXT, now_ms)));
    }

    fn spawn(&mut self, effect: Effect) {
        let document = &self.document;
        self.pool.try_spawn(effect, |e| bind_nodes(document, e));
    }

    /// Restyle every live piece for `now_ms` and drop finished effects.
    pub fn frame(&mut self, now_ms: f64) {
        for (_, effect, nodes) in self.pool.iter_mut() {
            for (index, slot) in nodes.0.iter_mut().enumerate() {
                let Some(el) = slot.as_ref() else { continue };
                if !apply_piece(effect, index, el, now_ms) {
                    el.remove();
                    *slot = None;
                }
            }
        }
        self.pool.reap(now_ms, |_, nodes| nodes.remove_all());
    }

    pub fn clear(&mut self) {
        self.pool.clear(|_, nodes| nodes.remove_all());
    }
}

/// Style `el` for piece `index` at `now_ms`; `false` once the piece is done.
fn apply_piece(effect: &Effect, index: usize, el: &web::HtmlElement, now_ms: f64) -> bool {
    match effect {
        Effect::Burst(b) => match b.sample(index, now_ms) {
            Some(f) => {
                set_style(el, "transform", &style::piece_transform(&f));
                set_style(el, "opacity", &style::opacity(f.opacity));
                true
            }
            None => false,
        },
        Effect::Confetti(c) => match c.sample(index, now_ms) {
            Some(f) => {
                set_style(el, "transform", &style::piece_transform(&f));
                set_style(el, "opacity", &style::opacity(f.opacity));
                true
            }
            None => false,
        },
        Effect::Typed(t) => match t.sample(now_ms) {
            Some(f) => {
                let shown = t.prefix(f.visible_chars);
                if el.text_content().as_deref() != Some(shown) {
                    el.set_text_content(Some(shown));
                }
                set_style(el, "opacity", &style::opacity(f.opacity));
                set_style(el, "transform", &style::typed_transform(&f));
                true
            }
            None => false,
        },
    }
}

fn bind_nodes(document: &web::Document, effect: &Effect) -> EffectNodes {
    let styles: Vec<String> = match effect {
        Effect::Burst(b) => vec![style::burst_dot_css(b.origin()); b.pieces().len()],
        Effect::Confetti(c) => c
            .pieces()
            .iter()
            .map(|p| style::confetti_css(p.color, p.round))
            .collect(),
        Effect::Typed(_) => vec![TYPED_BOX_CSS.to_string()],
    };
    EffectNodes(styles.iter().map(|css| append_div(document, css)).collect())
}

fn append_div(document: &web::Document, css: &str) -> Option<web::HtmlElement> {
    let body = document.body()?;
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    let _ = el.set_attribute("style", css);
    if body.append_child(&el).is_err() {
        log::warn!("[effects] could not attach effect element");
        return None;
    }
    Some(el)
}
