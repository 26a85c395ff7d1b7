//! Interactive document rendering: the scene as an inline SVG with hover
//! tooltips on every node and edge.

use std::fmt::Write;

use super::error::RenderError;
use super::types::{GraphScene, LAYOUT_SPACING, SceneNode};

const LABEL_ROOM: f64 = 90.0;
const EDGE_COLOR: &str = "#7a8ba8";

const DOCUMENT_CSS: &str = "\
.risk-graph-document svg { width: 100%; height: auto; font-family: sans-serif; }
.risk-graph-document .edge line { stroke: #7a8ba8; }
.risk-graph-document .edge:hover line { stroke: #2563eb; }
.risk-graph-document .node circle { stroke: #ffffff; stroke-width: 1.5; }
.risk-graph-document .node:hover circle { stroke: #0c1625; stroke-width: 3; }
.risk-graph-document .node text { font-size: 12px; fill: #0c1625; pointer-events: none; }
";

fn escape(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			c => out.push(c),
		}
	}
	out
}

fn px(node: &SceneNode) -> (f64, f64) {
	(
		node.position.0 * LAYOUT_SPACING,
		node.position.1 * LAYOUT_SPACING,
	)
}

/// Inline fragment: a styled container with the SVG graph.
pub fn render_document(scene: &GraphScene) -> Result<String, RenderError> {
	scene.check_positions()?;

	let max_radius = scene.nodes.iter().map(|n| n.radius).fold(0.0, f64::max);
	let margin = max_radius + 12.0;
	let (x0, y0, x1, y1) = scene.bounds();
	let (vx, vy) = (x0 * LAYOUT_SPACING - margin, y0 * LAYOUT_SPACING - margin);
	let (vw, vh) = (
		(x1 - x0) * LAYOUT_SPACING + 2.0 * margin + LABEL_ROOM,
		(y1 - y0) * LAYOUT_SPACING + 2.0 * margin,
	);

	let mut out = String::new();
	write!(out, "<div class=\"risk-graph-document\"><style>{}</style>", DOCUMENT_CSS)?;
	write!(
		out,
		"<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{:.1} {:.1} {:.1} {:.1}\" role=\"img\" aria-label=\"Indicator relationship graph\">",
		vx, vy, vw, vh
	)?;
	write!(
		out,
		"<defs><marker id=\"arrow\" viewBox=\"0 0 10 10\" refX=\"10\" refY=\"5\" markerWidth=\"4\" markerHeight=\"4\" orient=\"auto-start-reverse\"><path d=\"M0,0 L10,5 L0,10 z\" fill=\"{}\"/></marker></defs>",
		EDGE_COLOR
	)?;

	out.push_str("<g class=\"edges\">");
	for edge in &scene.edges {
		let (src, tgt) = (scene.node(edge.source), scene.node(edge.target));
		let ((sx, sy), (tx, ty)) = (px(src), px(tgt));
		let (dx, dy) = (tx - sx, ty - sy);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);
		write!(
			out,
			"<g class=\"edge\"><line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke-width=\"{:.2}\" marker-end=\"url(#arrow)\"/><title>{} \u{2192} {}: {}</title></g>",
			sx + ux * src.radius,
			sy + uy * src.radius,
			tx - ux * tgt.radius,
			ty - uy * tgt.radius,
			edge.width,
			escape(src.label()),
			escape(tgt.label()),
			escape(edge.tooltip)
		)?;
	}
	out.push_str("</g>");

	out.push_str("<g class=\"nodes\">");
	for node in &scene.nodes {
		let (x, y) = px(node);
		write!(
			out,
			"<g class=\"node\" data-indicator=\"{}\"><circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"{}\"/><text x=\"{:.1}\" y=\"{:.1}\">{}</text><title>{} ({:+.2}): {}</title></g>",
			escape(node.label()),
			x,
			y,
			node.radius,
			node.tone.color(),
			x + node.radius + 4.0,
			y + 4.0,
			escape(node.label()),
			escape(node.label()),
			node.weight,
			escape(node.tooltip())
		)?;
	}
	out.push_str("</g></svg></div>");
	Ok(out)
}

/// Standalone HTML page wrapping [`render_document`], for download.
pub fn export_document(scene: &GraphScene, title: &str) -> Result<String, RenderError> {
	let body = render_document(scene)?;
	let mut out = String::new();
	write!(
		out,
		"<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\"><title>{}</title></head><body>{}</body></html>",
		escape(title),
		body
	)?;
	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::risk_graph::scale::VisualScale;
	use crate::model::{Indicator, RELATIONSHIPS, WeightMap};

	fn doc(weights: &WeightMap) -> String {
		render_document(&GraphScene::build(weights, &VisualScale::NETWORK)).expect("render")
	}

	#[test]
	fn every_node_and_edge_is_serialized() {
		let html = doc(&WeightMap::new());
		assert_eq!(html.matches("<circle ").count(), Indicator::COUNT);
		assert_eq!(html.matches("<line ").count(), RELATIONSHIPS.len());
		for rel in RELATIONSHIPS {
			assert!(html.contains(&escape(rel.description)), "{}", rel.description);
		}
	}

	#[test]
	fn colors_follow_weight_sign() {
		let html = doc(&WeightMap::new().with(Indicator::Equities, -0.4));
		assert_eq!(html.matches("fill=\"red\"").count(), 1);
		assert_eq!(html.matches("fill=\"green\"").count(), Indicator::COUNT - 1);
		assert!(html.contains("Equities (-0.40)"));
	}

	#[test]
	fn outgoing_edges_widen_with_source_weight() {
		let html = doc(&WeightMap::new().with(Indicator::Gold, 1.0));
		// Gold has no outgoing edges, so every width stays at the floor.
		assert_eq!(html.matches("stroke-width=\"1.00\"").count(), RELATIONSHIPS.len());

		let html = doc(&WeightMap::new().with(Indicator::InterestRates, -1.0));
		assert_eq!(html.matches("stroke-width=\"5.00\"").count(), 3);
	}

	#[test]
	fn markup_is_escaped() {
		assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
		assert!(doc(&WeightMap::new()).contains("Purchasing managers&#39; survey"));
	}

	#[test]
	fn invalid_position_surfaces_as_error() {
		let mut scene = GraphScene::build(&WeightMap::new(), &VisualScale::PLOT);
		scene.nodes[0].position.0 = f64::INFINITY;
		assert_eq!(
			render_document(&scene),
			Err(RenderError::InvalidPosition("Oil Prices"))
		);
	}

	#[test]
	#[should_panic(expected = "scene has no node for Gold")]
	fn edge_to_a_missing_node_is_not_skipped() {
		let mut scene = GraphScene::build(&WeightMap::new(), &VisualScale::NETWORK);
		scene.nodes.retain(|n| n.indicator != Indicator::Gold);
		let _ = render_document(&scene);
	}

	#[test]
	fn export_is_a_full_page() {
		let scene = GraphScene::build(&WeightMap::new(), &VisualScale::NETWORK);
		let page = export_document(&scene, "Risk <Graph>").expect("export");
		assert!(page.starts_with("<!DOCTYPE html>"));
		assert!(page.contains("<title>Risk &lt;Graph&gt;</title>"));
		assert!(page.ends_with("</body></html>"));
	}
}
