use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::ForceGraphState;

const BACKGROUND: &str = "#f8fbff";
const EDGE_RGB: &str = "122, 139, 168";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
	draw_tooltip(state, ctx);
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (dash, gap) = (10.0 / k, 5.0 / k);
	let dash_offset = -(state.flow_time * 20.0) % (dash + gap);
	let t = ease_out_cubic(state.hover.highlight_t);
	let has_highlight = state.has_active_highlight();

	state.graph.visit_edges(|n1, n2, _| {
		let (src, tgt) = (&n1.data.user_data, &n2.data.user_data);
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		let width = state.edge_width(src.indicator, tgt.indicator);
		let arrow_size = 6.0 + 2.0 * width;
		let is_highlighted = state.is_hovered(n1.index()) || state.is_hovered(n2.index());
		let alpha = match (has_highlight, is_highlighted) {
			(false, _) => 0.7,
			(true, true) => 0.7 + 0.3 * t,
			(true, false) => 0.7 - 0.55 * t,
		};

		ctx.set_stroke_style_str(&format!("rgba({}, {})", EDGE_RGB, alpha));
		ctx.set_line_width(width);
		if is_highlighted && has_highlight {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(dash_offset);
		}

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * src.radius, y1 + uy * src.radius);
		ctx.line_to(
			x2 - ux * (tgt.radius + arrow_size),
			y2 - uy * (tgt.radius + arrow_size),
		);
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());

		ctx.set_fill_style_str(&format!("rgba({}, {})", EDGE_RGB, alpha));
		let (tip_x, tip_y) = (x2 - ux * tgt.radius, y2 - uy * tgt.radius);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	});
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let alpha = if has_highlight && !state.is_highlighted(idx) {
			1.0 - 0.7 * t
		} else {
			1.0
		};

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, info.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(info.color);
		ctx.fill();

		if state.is_hovered(idx) && t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(x, y, info.radius + 2.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(12, 22, 37, {})", 0.8 * t));
			ctx.set_line_width(2.0 / k);
			ctx.stroke();
		}

		ctx.set_fill_style_str("#0c1625");
		ctx.set_font(&format!("{}px sans-serif", 12.0 / k.max(0.5)));
		let _ = ctx.fill_text(info.indicator.name(), x + info.radius + 4.0, y + 4.0);
		ctx.set_global_alpha(1.0);
	});
}

/// Description box next to the hovered node, drawn in screen space.
fn draw_tooltip(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let Some(hovered) = state.hover.node else {
		return;
	};
	let t = ease_out_cubic(state.hover.highlight_t);
	if t < 0.05 {
		return;
	}

	state.graph.visit_nodes(|node| {
		if node.index() != hovered {
			return;
		}
		let info = &node.data.user_data;
		let (sx, sy) = (
			node.x() as f64 * state.transform.k + state.transform.x,
			node.y() as f64 * state.transform.k + state.transform.y,
		);
		let lines = [
			format!("{} ({:+.2})", info.indicator.name(), info.weight),
			info.indicator.description().to_string(),
		];

		ctx.set_font("12px sans-serif");
		let text_w = lines
			.iter()
			.filter_map(|l| ctx.measure_text(l).ok())
			.map(|m| m.width())
			.fold(0.0, f64::max);
		let (pad, line_h) = (6.0, 16.0);
		let (box_w, box_h) = (text_w + 2.0 * pad, line_h * lines.len() as f64 + pad);
		let bx = (sx + info.radius * state.transform.k + 8.0).min(state.width - box_w - 4.0);
		let by = (sy - box_h / 2.0).clamp(4.0, (state.height - box_h - 4.0).max(4.0));

		ctx.set_global_alpha(t);
		ctx.set_fill_style_str("rgba(12, 22, 37, 0.9)");
		ctx.fill_rect(bx, by, box_w, box_h);
		ctx.set_fill_style_str("white");
		for (i, line) in lines.iter().enumerate() {
			let _ = ctx.fill_text(line, bx + pad, by + pad + line_h * (i as f64 + 0.7));
		}
		ctx.set_global_alpha(1.0);
	});
}
