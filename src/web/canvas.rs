//! Canvas 2D backend for [`Painter`] and renderer mounting

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, trace};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent};

use super::dom;
use super::frame_loop::AnimationLoop;
use super::handle::Handle;
use crate::core::scene::{Painter, Point, Scene};
use crate::core::{Helix, ParticleField, Radar, SiteConfig};
use crate::theme::Rgba;

pub const PARTICLES_CANVAS: &str = "particles-canvas";
pub const HELIX_CANVAS: &str = "dna-canvas";
pub const MAP_CANVAS: &str = "map-canvas";

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("2d context not supported")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    fn circle_path(&self, (x, y): Point, radius: f64) {
        self.ctx.begin_path();
        self.ctx.arc(x, y, radius.max(0.0), 0.0, TAU).ok();
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.circle_path(center, radius);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba, line_width: f64) {
        self.circle_path(center, radius);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(line_width);
        self.ctx.stroke();
    }

    fn line(&mut self, (x1, y1): Point, (x2, y2): Point, color: Rgba, line_width: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(line_width);
        self.ctx.stroke();
    }
}

/// Match the canvas backing store to its on-screen size.
fn sync_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = canvas.offset_width().max(0) as u32;
    let height = canvas.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (width as f64, height as f64)
}

fn canvas_by_id(root: &Element, id: &str) -> Option<HtmlCanvasElement> {
    dom::by_id(root, id)?.dyn_into::<HtmlCanvasElement>().ok()
}

/// Drive `scene` on `canvas`: resize tracking plus a per-frame redraw.
pub fn mount_scene<S>(canvas: &HtmlCanvasElement, scene: Rc<RefCell<S>>) -> Result<Handle, JsValue>
where
    S: Scene + 'static,
{
    let name = scene.borrow().name();
    let mut handle = Handle::new(name);
    let mut painter = CanvasPainter::new(canvas)?;

    let (width, height) = sync_size(canvas);
    scene.borrow_mut().resize(width, height);

    let window = dom::window().ok_or("no window")?;
    {
        let canvas = canvas.clone();
        let scene = scene.clone();
        handle.listen(&window, "resize", move |_| {
            let (width, height) = sync_size(&canvas);
            trace!(width, height, "Canvas resized");
            scene.borrow_mut().resize(width, height);
        })?;
    }

    let animation = AnimationLoop::start(move |_| {
        scene.borrow_mut().frame(&mut painter);
        true
    })?;
    handle.keep_loop(animation);

    debug!(scene = name, width, height, "Renderer started");
    Ok(handle)
}

pub fn init_particles(root: &Element, config: &SiteConfig) -> Result<Option<Handle>, JsValue> {
    let Some(canvas) = canvas_by_id(root, PARTICLES_CANVAS) else {
        return Ok(None);
    };

    let (width, height) = sync_size(&canvas);
    let field = Rc::new(RefCell::new(ParticleField::new(
        config.particles.clone(),
        width,
        height,
        &mut SmallRng::from_entropy(),
    )));
    let mut handle = mount_scene(&canvas, field.clone())?;

    {
        let field = field.clone();
        let target = canvas.clone();
        handle.listen(&canvas, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            field.borrow_mut().set_pointer(
                event.client_x() as f64 - rect.left(),
                event.client_y() as f64 - rect.top(),
            );
        })?;
    }
    handle.listen(&canvas, "mouseleave", move |_| {
        field.borrow_mut().clear_pointer();
    })?;

    Ok(Some(handle))
}

pub fn init_helix(root: &Element, config: &SiteConfig) -> Result<Option<Handle>, JsValue> {
    let Some(canvas) = canvas_by_id(root, HELIX_CANVAS) else {
        return Ok(None);
    };
    let helix = Rc::new(RefCell::new(Helix::new(config.helix.clone(), 0.0, 0.0)));
    mount_scene(&canvas, helix).map(Some)
}

pub fn init_radar(root: &Element, config: &SiteConfig) -> Result<Option<Handle>, JsValue> {
    let Some(canvas) = canvas_by_id(root, MAP_CANVAS) else {
        return Ok(None);
    };
    let radar = Rc::new(RefCell::new(Radar::new(config.radar.clone(), 0.0, 0.0)));
    mount_scene(&canvas, radar).map(Some)
}
