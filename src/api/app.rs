//! Browser app - the page controls, one canvas panel per body, and the
//! requestAnimationFrame loop.
//!
//! Expects `#heightInput`, `#startBtn`, `#pauseBtn`, `#resetBtn`, `#simArea`
//! and `.planetCheck` checkboxes whose `value` is a body key. Charts are left
//! to the page: `on_charts` is called with the chart JSON after every reset
//! and every frame.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlInputElement};

use crate::domain::bodies::BodyId;
use crate::domain::config::SimConfig;
use crate::simulation::{BodyFrame, FrameSink, RunToken, SimulationCore};
use crate::systems::chart::ChartData;

use super::dom;

struct Panel {
    body: BodyId,
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    time_el: Element,
    pos_el: Element,
    vel_el: Element,
}

struct DomSink {
    panels: Vec<Panel>,
    on_charts: js_sys::Function,
}

impl FrameSink for DomSink {
    fn draw_body(&mut self, frame: &BodyFrame) {
        let Some(panel) = self.panels.iter().find(|p| p.body == frame.body) else {
            return;
        };

        let ctx = &panel.ctx;
        ctx.clear_rect(0.0, 0.0, panel.width, panel.height);
        ctx.begin_path();
        ctx.arc(frame.ball_x, frame.ball_y, frame.radius, 0.0, std::f64::consts::TAU)
            .ok();
        ctx.set_fill_style_str(frame.color);
        ctx.fill();
        ctx.stroke();

        dom::set_text(&panel.time_el, &frame.readouts.time);
        dom::set_text(&panel.pos_el, &frame.readouts.position);
        dom::set_text(&panel.vel_el, &frame.readouts.velocity);
    }

    fn update_charts(&mut self, charts: &ChartData) {
        let json = JsValue::from_str(&charts.to_json());
        if let Err(e) = self.on_charts.call1(&JsValue::NULL, &json) {
            console_warn!("chart callback failed: {:?}", e);
        }
    }
}

impl DomSink {
    /// Swap in fresh panels for the core's current bodies. The old panels are
    /// dropped first, so a failed build leaves nothing to draw rather than
    /// canvases of bodies that are no longer in the run.
    fn rebuild_panels(&mut self, core: &SimulationCore) -> Result<(), String> {
        self.panels.clear();
        self.panels = build_panels(core)?;
        Ok(())
    }
}

struct App {
    core: SimulationCore,
    sink: DomSink,
}

type SharedApp = Rc<RefCell<App>>;

/// Run the page. Call once after the DOM is ready.
#[wasm_bindgen]
pub fn mount(on_charts: js_sys::Function) -> Result<(), JsValue> {
    mount_inner(on_charts).map_err(|e| JsValue::from_str(&e))
}

fn mount_inner(on_charts: js_sys::Function) -> Result<(), String> {
    let app: SharedApp = Rc::new(RefCell::new(App {
        core: SimulationCore::new(SimConfig::default()),
        sink: DomSink {
            panels: Vec::new(),
            on_charts,
        },
    }));

    wire_controls(&app)?;
    reset_from_controls(&app)?;
    console_log!("freefall page mounted");
    Ok(())
}

fn wire_controls(app: &SharedApp) -> Result<(), String> {
    let a = app.clone();
    let start_cb = Closure::<dyn FnMut()>::new(move || {
        let token = a.borrow_mut().core.start();
        if let Some(token) = token {
            if let Err(e) = spawn_frame_loop(a.clone(), token) {
                console_warn!("{}", e);
                a.borrow_mut().core.pause();
            }
        }
    });
    dom::get_html("startBtn")?.set_onclick(Some(start_cb.as_ref().unchecked_ref()));
    start_cb.forget();

    let a = app.clone();
    let pause_cb = Closure::<dyn FnMut()>::new(move || {
        a.borrow_mut().core.pause();
    });
    dom::get_html("pauseBtn")?.set_onclick(Some(pause_cb.as_ref().unchecked_ref()));
    pause_cb.forget();

    // Reset button, height edits and body toggles all rebuild the run
    let a = app.clone();
    let reset_cb = Closure::<dyn FnMut()>::new(move || {
        if let Err(e) = reset_from_controls(&a) {
            console_warn!("reset failed: {}", e);
        }
    });
    dom::get_html("resetBtn")?.set_onclick(Some(reset_cb.as_ref().unchecked_ref()));
    dom::get_html("heightInput")?.set_onchange(Some(reset_cb.as_ref().unchecked_ref()));
    for check in body_checkboxes()? {
        check.set_onchange(Some(reset_cb.as_ref().unchecked_ref()));
    }
    reset_cb.forget();

    Ok(())
}

fn body_checkboxes() -> Result<Vec<HtmlInputElement>, String> {
    let nodes = dom::document()?
        .query_selector_all(".planetCheck")
        .map_err(|e| format!("query .planetCheck: {e:?}"))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<HtmlInputElement>().ok())
        .collect())
}

/// Height and selection as currently shown by the controls. An unparsable
/// height becomes NaN, which the core treats as an empty run.
fn read_controls() -> Result<(f64, Vec<BodyId>), String> {
    let height = dom::get_typed::<HtmlInputElement>("heightInput")?
        .value()
        .trim()
        .parse::<f64>()
        .unwrap_or(f64::NAN);

    let mut bodies = Vec::new();
    for check in body_checkboxes()?.iter().filter(|c| c.checked()) {
        match BodyId::from_key(&check.value()) {
            Ok(id) => bodies.push(id),
            Err(e) => console_warn!("{}", e),
        }
    }
    Ok((height, bodies))
}

fn reset_from_controls(app: &SharedApp) -> Result<(), String> {
    let (height, bodies) = read_controls()?;

    let mut guard = app.borrow_mut();
    let App { core, sink } = &mut *guard;

    let config = SimConfig {
        height,
        bodies,
        ..core.config().clone()
    };
    core.set_config(config)?;

    sink.rebuild_panels(core)?;
    core.present(sink);
    Ok(())
}

fn build_panels(core: &SimulationCore) -> Result<Vec<Panel>, String> {
    let area = dom::get_el("simArea")?;
    area.set_inner_html("");

    let config = core.config();
    let mut panels = Vec::with_capacity(core.states().len());
    for state in core.states() {
        let body = state.body.body();

        let div = dom::create_el("div")?;
        div.set_class_name("planet-canvas");
        div.set_id(&format!("canvas-{}", body.key));

        let canvas = dom::create_el("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "created <canvas> is not a canvas".to_string())?;
        canvas.set_width(config.canvas_width);
        canvas.set_height(config.canvas_height);
        canvas.set_id(&format!("fallCanvas-{}", body.key));

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("{e:?}"))?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "not a 2d context")?;

        let data = dom::create_el("div")?;
        data.set_class_name("planet-data");
        data.set_inner_html(&format!(
            "<b>{name}</b><br>\
             Time: <span id=\"timeDisplay-{key}\">0.00</span> s<br>\
             Position: <span id=\"posDisplay-{key}\">0.00</span> m<br>\
             Velocity: <span id=\"velDisplay-{key}\">0.00</span> m/s",
            name = body.name,
            key = body.key,
        ));

        div.append_child(&canvas).map_err(|e| format!("{e:?}"))?;
        div.append_child(&data).map_err(|e| format!("{e:?}"))?;
        area.append_child(&div).map_err(|e| format!("{e:?}"))?;

        panels.push(Panel {
            body: state.body,
            ctx,
            width: config.canvas_width as f64,
            height: config.canvas_height as f64,
            time_el: dom::get_el(&format!("timeDisplay-{}", body.key))?,
            pos_el: dom::get_el(&format!("posDisplay-{}", body.key))?,
            vel_el: dom::get_el(&format!("velDisplay-{}", body.key))?,
        });
    }
    Ok(panels)
}

/// One closure per run. It keeps requesting frames while its token is
/// current and bodies are falling, then drops itself.
fn spawn_frame_loop(app: SharedApp, token: RunToken) -> Result<(), String> {
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        let outcome = {
            let mut guard = app.borrow_mut();
            let App { core, sink } = &mut *guard;
            core.drive_frame(token, timestamp, sink)
        };

        if outcome.should_reschedule() {
            if let Some(cb) = f.borrow().as_ref() {
                if let Err(e) = dom::request_animation_frame(cb) {
                    console_warn!("{}", e);
                }
            }
        } else {
            // Drop our handle so the closure is freed once it returns
            let _ = f.borrow_mut().take();
        }
    }));

    let first = g.borrow();
    let cb = first.as_ref().ok_or("frame closure missing")?;
    dom::request_animation_frame(cb)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn detached_panel(body: BodyId) -> Panel {
        let canvas = dom::create_el("canvas")
            .unwrap()
            .dyn_into::<HtmlCanvasElement>()
            .unwrap();
        let ctx = canvas
            .get_context("2d")
            .unwrap()
            .unwrap()
            .dyn_into::<CanvasRenderingContext2d>()
            .unwrap();
        Panel {
            body,
            ctx,
            width: 120.0,
            height: 240.0,
            time_el: dom::create_el("span").unwrap(),
            pos_el: dom::create_el("span").unwrap(),
            vel_el: dom::create_el("span").unwrap(),
        }
    }

    #[wasm_bindgen_test]
    fn failed_rebuild_drops_the_old_panels() {
        // The test page has no #simArea, so building panels fails
        assert!(dom::get_el("simArea").is_err());

        let core = SimulationCore::with_bodies(10.0, &[BodyId::Moon]);
        let mut sink = DomSink {
            panels: vec![detached_panel(BodyId::Earth), detached_panel(BodyId::Mars)],
            on_charts: js_sys::Function::new_no_args(""),
        };

        let err = sink.rebuild_panels(&core).unwrap_err();
        assert!(err.contains("simArea"), "{err}");
        assert!(sink.panels.is_empty());
    }
}
