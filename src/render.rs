//! 2D canvas rendering
//!
//! Draws the whole field every frame: backdrop strips, pipe pairs, the
//! character, and the HUD text. Sprites are optional `<img>` elements in the
//! page; when one is missing the renderer falls back to flat-color
//! rectangles so the game stays playable with zero assets.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::sim::{GameState, Rect, RunState};

const SKY_COLOR: &str = "#70c5ce";
const HILL_COLOR: &str = "#5fa052";
const PIPE_COLOR: &str = "#73bf2e";
const CAPY_COLOR: &str = "#a0713c";
const TEXT_COLOR: &str = "#ffffff";

/// Renderer over a 2D canvas context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    capy_sprite: Option<HtmlImageElement>,
    pipe_sprite: Option<HtmlImageElement>,
    backdrop_sprite: Option<HtmlImageElement>,
}

impl CanvasRenderer {
    /// Wrap a context, picking up whatever sprites the page provides
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            capy_sprite: lookup_sprite("capy-sprite"),
            pipe_sprite: lookup_sprite("pipe-sprite"),
            backdrop_sprite: lookup_sprite("backdrop-sprite"),
        }
    }

    /// Draw one frame of the session
    pub fn render(&self, state: &GameState, fps: Option<u32>) {
        let field_w = state.config.field_width as f64;
        let field_h = state.config.field_height as f64;

        self.ctx.set_fill_style_str(SKY_COLOR);
        self.ctx.fill_rect(0.0, 0.0, field_w, field_h);

        self.draw_backdrop(state, field_w, field_h);
        self.draw_pipes(state);
        self.draw_capy(state);
        self.draw_hud(state, field_w, fps);
    }

    fn draw_backdrop(&self, state: &GameState, field_w: f64, field_h: f64) {
        for &strip_x in &state.level.backdrop {
            match &self.backdrop_sprite {
                Some(img) => {
                    let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                        img,
                        strip_x as f64,
                        0.0,
                        field_w,
                        field_h,
                    );
                }
                None => {
                    // Low hills along the bottom quarter of the strip
                    self.ctx.set_fill_style_str(HILL_COLOR);
                    self.ctx.fill_rect(
                        strip_x as f64,
                        field_h * 0.75,
                        field_w,
                        field_h * 0.25,
                    );
                }
            }
        }
    }

    fn draw_pipes(&self, state: &GameState) {
        let field_h = state.config.field_height;
        for pipe in &state.level.pipes {
            self.fill_pipe_rect(&pipe.top_rect());
            self.fill_pipe_rect(&pipe.bottom_rect(field_h));
        }
    }

    fn fill_pipe_rect(&self, rect: &Rect) {
        match &self.pipe_sprite {
            Some(img) => {
                let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    img,
                    rect.x as f64,
                    rect.y as f64,
                    rect.width as f64,
                    rect.height as f64,
                );
            }
            None => {
                self.ctx.set_fill_style_str(PIPE_COLOR);
                self.ctx.fill_rect(
                    rect.x as f64,
                    rect.y as f64,
                    rect.width as f64,
                    rect.height as f64,
                );
            }
        }
    }

    fn draw_capy(&self, state: &GameState) {
        let bounds = state.capy.bounds();
        match &self.capy_sprite {
            Some(img) => {
                let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    img,
                    bounds.x as f64,
                    bounds.y as f64,
                    bounds.width as f64,
                    bounds.height as f64,
                );
            }
            None => {
                self.ctx.set_fill_style_str(CAPY_COLOR);
                self.ctx.fill_rect(
                    bounds.x as f64,
                    bounds.y as f64,
                    bounds.width as f64,
                    bounds.height as f64,
                );
            }
        }
    }

    fn draw_hud(&self, state: &GameState, field_w: f64, fps: Option<u32>) {
        self.ctx.set_fill_style_str(TEXT_COLOR);
        self.ctx.set_font("bold 36px sans-serif");
        self.ctx.set_text_align("center");
        let _ = self
            .ctx
            .fill_text(&state.score.to_string(), field_w / 2.0, 60.0);

        if state.run_state == RunState::Idle {
            self.ctx.set_font("20px sans-serif");
            let _ = self.ctx.fill_text("tap to flap", field_w / 2.0, 110.0);
        }

        if let Some(fps) = fps {
            self.ctx.set_font("12px monospace");
            self.ctx.set_text_align("left");
            let _ = self.ctx.fill_text(&format!("{fps} fps"), 8.0, 16.0);
        }
    }
}

fn lookup_sprite(id: &str) -> Option<HtmlImageElement> {
    let element = web_sys::window()?.document()?.get_element_by_id(id);
    match element {
        Some(el) => el.dyn_into::<HtmlImageElement>().ok(),
        None => {
            log::warn!("Sprite #{id} not found - using rectangle fallback");
            None
        }
    }
}
