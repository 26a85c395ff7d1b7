use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::document::{export_document, render_document};
use super::error::RenderError;
use super::frame::FrameLoop;
use super::render;
use super::state::ForceGraphState;
use super::types::{GraphScene, RenderMode};
use crate::APP_TITLE;

type SharedState = Rc<RefCell<Option<ForceGraphState>>>;
type SharedFrames = Rc<RefCell<FrameLoop<Closure<dyn FnMut()>>>>;

/// Renders the scene in whichever mode is selected.
#[component]
pub fn RiskGraph(
	#[prop(into)] scene: Signal<GraphScene>,
	#[prop(into)] mode: Signal<RenderMode>,
) -> impl IntoView {
	move || match mode.get() {
		RenderMode::Canvas => view! { <RiskGraphCanvas scene=scene /> }.into_any(),
		RenderMode::Document => view! { <RiskGraphDocument scene=scene /> }.into_any(),
	}
}

#[component]
pub fn RiskGraphDocument(#[prop(into)] scene: Signal<GraphScene>) -> impl IntoView {
	let rendered = Signal::derive(move || -> Result<(String, String), RenderError> {
		let scene = scene.get();
		let body = render_document(&scene)?;
		let page = export_document(&scene, APP_TITLE)?;
		debug!("graph document rendered ({} bytes)", body.len());
		Ok((body, page))
	});

	move || match rendered.get() {
		Ok((body, page)) => {
			let href = format!(
				"data:text/html;charset=utf-8,{}",
				String::from(js_sys::encode_uri_component(&page))
			);
			view! {
				<div class="graph-host" inner_html=body></div>
				<div class="graph-actions">
					<a href=href download="risk-graph.html">"Export HTML"</a>
				</div>
			}
			.into_any()
		}
		Err(e) => {
			warn!("graph document render failed: {}", e);
			view! { <p class="render-error">{e.user_message()}</p> }.into_any()
		}
	}
}

#[component]
pub fn RiskGraphCanvas(
	#[prop(into)] scene: Signal<GraphScene>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let error = RwSignal::new(None::<RenderError>);
	let png_href = RwSignal::new(None::<String>);
	let state: SharedState = Rc::new(RefCell::new(None));
	let frames: SharedFrames = Rc::new(RefCell::new(FrameLoop::default()));
	let (state_init, frames_init) = (state.clone(), frames.clone());

	let handles = StoredValue::new_local((state.clone(), frames.clone()));
	on_cleanup(move || {
		handles.try_with_value(|(state, frames)| stop(state, frames));
	});

	Effect::new(move |_| {
		let scene = scene.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let running = frames_init.borrow().is_running();
		let result = if !running {
			start(&canvas, &scene, (width, height), &state_init, &frames_init)
		} else {
			rebuild(&scene, &state_init)
		};
		png_href.set(None);
		match result {
			Ok(()) => {
				debug!("graph canvas rebuilt");
				error.set(None);
			}
			Err(e) => {
				warn!("graph canvas render failed: {}", e);
				error.set(Some(e));
			}
		}
	});

	let on_export = move |_: MouseEvent| {
		let result = canvas_ref
			.get()
			.ok_or(RenderError::CanvasMissing)
			.and_then(|canvas| {
				let canvas: HtmlCanvasElement = canvas.into();
				canvas
					.to_data_url_with_type("image/png")
					.map_err(RenderError::export)
			});
		match result {
			Ok(url) => png_href.set(Some(url)),
			Err(e) => {
				warn!("png export failed: {}", e);
				error.set(Some(e));
			}
		}
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, ev.client_x(), ev.client_y()) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(idx) = s.node_at_position(x, y) {
				s.drag.active = true;
				s.drag.node_idx = Some(idx);
				s.drag.start_x = x;
				s.drag.start_y = y;
				s.graph.visit_nodes(|node| {
					if node.index() == idx {
						s.drag.node_start_x = node.x();
						s.drag.node_start_y = node.y();
					}
				});
			} else {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, ev.client_x(), ev.client_y()) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if !s.drag.active {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}

			if s.drag.active {
				if let Some(idx) = s.drag.node_idx {
					let (dx, dy) = (
						(x - s.drag.start_x) / s.transform.k,
						(y - s.drag.start_y) / s.transform.k,
					);
					let (nx, ny) = (
						s.drag.node_start_x + dx as f32,
						s.drag.node_start_y + dy as f32,
					);
					s.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
						}
					});
				}
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
			s.set_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_point(canvas_ref, ev.client_x(), ev.client_y()) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (s.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / s.transform.k;
			s.transform.x = x - (x - s.transform.x) * ratio;
			s.transform.y = y - (y - s.transform.y) * ratio;
			s.transform.k = new_k;
		}
	};

	view! {
		<div class="risk-graph-canvas">
			<canvas
				node_ref=canvas_ref
				class="force-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
			<div class="graph-actions">
				<button on:click=on_export>"Export PNG"</button>
				{move || {
					png_href
						.get()
						.map(|href| {
							view! {
								<a href=href download="risk-graph.png">
									"Download PNG"
								</a>
							}
						})
				}}
			</div>
			{move || {
				error
					.get()
					.map(|e| {
						view! { <p class="render-error">{e.user_message()}</p> }
					})
			}}
		</div>
	}
}

/// Sizes the canvas, builds the state and starts the frame loop.
fn start(
	canvas: &HtmlCanvasElement,
	scene: &GraphScene,
	(width, height): (Option<f64>, Option<f64>),
	state: &SharedState,
	frames: &SharedFrames,
) -> Result<(), RenderError> {
	let parent = canvas.parent_element();
	let w = width.unwrap_or_else(|| {
		parent
			.as_ref()
			.map(|p| p.client_width() as f64)
			.filter(|w| *w > 0.0)
			.unwrap_or(800.0)
	});
	let h = height.unwrap_or(600.0);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.map_err(RenderError::context)?
		.ok_or_else(|| RenderError::Context("canvas returned no 2d context".into()))?
		.dyn_into()
		.map_err(|obj| RenderError::context(obj.into()))?;
	let graph = ForceGraphState::new(scene, w, h)?;

	let window =
		web_sys::window().ok_or_else(|| RenderError::Context("no browser window".into()))?;
	let (state_anim, frames_anim, canvas_anim) = (state.clone(), frames.clone(), canvas.clone());
	let callback: Closure<dyn FnMut()> = Closure::new(move || {
		// Detached without the owner being cleaned up.
		if !canvas_anim.is_connected() {
			return;
		}
		if let Some(ref mut s) = *state_anim.borrow_mut() {
			s.tick(0.016);
			render::render(s, &ctx);
		}
		let Some(win) = web_sys::window() else {
			return;
		};
		let next = frames_anim
			.borrow_mut()
			.schedule(|cb: &Closure<dyn FnMut()>| {
				win.request_animation_frame(cb.as_ref().unchecked_ref())
			});
		if let Err(e) = next {
			warn!("graph frame loop stopped: {}", RenderError::context(e));
		}
	});
	frames
		.borrow_mut()
		.launch(callback, |cb| {
			window.request_animation_frame(cb.as_ref().unchecked_ref())
		})
		.map_err(RenderError::context)?;
	*state.borrow_mut() = Some(graph);
	Ok(())
}

/// Cancels the pending frame, then drops the frame callback and the graph state.
fn stop(state: &SharedState, frames: &SharedFrames) {
	let (callback, pending) = frames.borrow_mut().stop();
	if let (Some(id), Some(win)) = (pending, web_sys::window()) {
		let _ = win.cancel_animation_frame(id);
	}
	drop(callback);
	state.borrow_mut().take();
	debug!("graph canvas stopped");
}

fn rebuild(scene: &GraphScene, state: &SharedState) -> Result<(), RenderError> {
	let mut slot = state.borrow_mut();
	let next = match slot.as_ref() {
		Some(current) => current.rebuild(scene)?,
		None => return Err(RenderError::CanvasMissing),
	};
	*slot = Some(next);
	Ok(())
}

fn local_point(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	client_x: i32,
	client_y: i32,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((client_x as f64 - rect.left(), client_y as f64 - rect.top()))
}
