use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::model::Bag;
use crate::state::game::Game;
use crate::util::clog;

pub const BACKGROUND_SRC: &str = "img/background.png";
pub const BAG_SRCS: [&str; 3] = ["img/sacs_1.png", "img/sacs_4.png", "img/sacs_5.png"];

const GLOW_INNER: &str = "rgba(255, 165, 0, 0.5)";
const GLOW_OUTER: &str = "rgba(255, 165, 0, 0)";

/// Draws the beach: background first, then every bag as glow + sprite.
/// Images that have not finished loading are skipped for that frame.
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    background: HtmlImageElement,
    bag_sprites: Vec<HtmlImageElement>,
    glow_size: f64,
}

fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    let label = src.to_string();
    let onload = Closure::wrap(Box::new(move || {
        clog(&format!("loaded {}", label));
    }) as Box<dyn FnMut()>);
    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();
    img.set_src(src);
    Ok(img)
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement, glow_size: f64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let bag_sprites = BAG_SRCS
            .iter()
            .map(|src| load_image(src))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            canvas,
            ctx,
            background: load_image(BACKGROUND_SRC)?,
            bag_sprites,
            glow_size,
        })
    }

    pub fn palette_len(&self) -> usize {
        self.bag_sprites.len()
    }

    pub fn draw(&self, game: &Game) {
        let ctx = &self.ctx;
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        ctx.clear_rect(0.0, 0.0, w, h);
        if self.background.complete() {
            let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(&self.background, 0.0, 0.0, w, h);
        }
        for bag in game.bags() {
            let Some(img) = self.bag_sprites.get(bag.sprite.0) else {
                continue;
            };
            if !img.complete() {
                continue;
            }
            self.draw_glow(bag);
            let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(img, bag.x, bag.y, bag.width, bag.height);
        }
    }

    fn draw_glow(&self, bag: &Bag) {
        let g = self.glow_size;
        let cx = bag.x + bag.width / 2.0;
        let cy = bag.y + bag.height / 2.0;
        let r = bag.width / 2.0;
        let Ok(gradient) = self.ctx.create_radial_gradient(cx, cy, r, cx, cy, r + g) else {
            return;
        };
        let _ = gradient.add_color_stop(0.0, GLOW_INNER);
        let _ = gradient.add_color_stop(1.0, GLOW_OUTER);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx
            .fill_rect(bag.x - g, bag.y - g, bag.width + g * 2.0, bag.height + g * 2.0);
    }
}
