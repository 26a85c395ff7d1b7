use std::collections::{HashMap, HashSet};

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::model::Indicator;

use super::error::RenderError;
use super::types::{GraphScene, LAYOUT_SPACING};

/// Extra pick distance around a node, in world space.
pub const HIT_SLOP: f64 = 4.0;

#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub indicator: Indicator,
	pub color: &'static str,
	pub radius: f64,
	pub weight: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
}

/// Canvas-side copy of a [`GraphScene`] with view and pointer state.
///
/// Every node is an anchor pinned at its layout position, so the simulation
/// never moves anything; dragging a node re-pins it where it is dropped.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	edge_widths: HashMap<(Indicator, Indicator), f64>,
	edge_min: f64,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

impl ForceGraphState {
	pub fn new(scene: &GraphScene, width: f64, height: f64) -> Result<Self, RenderError> {
		scene.check_positions()?;

		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();

		for node in &scene.nodes {
			let idx = graph.add_node(NodeData {
				x: (node.position.0 * LAYOUT_SPACING) as f32,
				y: (node.position.1 * LAYOUT_SPACING) as f32,
				mass: 10.0,
				is_anchor: true,
				user_data: NodeInfo {
					indicator: node.indicator,
					color: node.tone.color(),
					radius: node.radius,
					weight: node.weight,
				},
			});
			id_to_idx.insert(node.indicator, idx);
		}

		let node_idx = |indicator: Indicator| match id_to_idx.get(&indicator) {
			Some(&idx) => idx,
			None => panic!("scene has no node for {}", indicator.name()),
		};
		let mut edge_widths = HashMap::new();
		for edge in &scene.edges {
			let (src, tgt) = (node_idx(edge.source), node_idx(edge.target));
			graph.add_edge(src, tgt, EdgeData::default());
			edges.push((src, tgt));
			edge_widths.insert((edge.source, edge.target), edge.width);
		}

		Ok(Self {
			graph,
			edges,
			edge_widths,
			edge_min: scene.scale.edge_min,
			transform: fit_transform(scene, width, height),
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			flow_time: 0.0,
		})
	}

	/// Rebuilds from a new scene while keeping the user's pan and zoom.
	pub fn rebuild(&self, scene: &GraphScene) -> Result<Self, RenderError> {
		let mut next = Self::new(scene, self.width, self.height)?;
		next.transform = self.transform.clone();
		next.flow_time = self.flow_time;
		Ok(next)
	}

	/// Stroke width for `source -> target`; pairs without an edge get the scale's floor.
	pub fn edge_width(&self, source: Indicator, target: Indicator) -> f64 {
		self.edge_widths
			.get(&(source, target))
			.copied()
			.unwrap_or(self.edge_min)
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < node.data.user_data.radius + HIT_SLOP {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		let (target, speed) = if self.hover.node.is_some() {
			(1.0, 1.8)
		} else {
			(0.0, 1.26)
		};
		self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
		if self.hover.node.is_none() && self.hover.highlight_t < 0.01 {
			self.hover.highlight_t = 0.0;
		}
	}
}

/// Centers the layout bounding box in a `width` x `height` viewport.
fn fit_transform(scene: &GraphScene, width: f64, height: f64) -> ViewTransform {
	let (x0, y0, x1, y1) = scene.bounds();
	let (gw, gh) = ((x1 - x0) * LAYOUT_SPACING, (y1 - y0) * LAYOUT_SPACING);
	let margin = 80.0;
	let k = ((width - 2.0 * margin) / gw.max(1.0))
		.min((height - 2.0 * margin) / gh.max(1.0))
		.clamp(0.1, 1.5);
	let (cx, cy) = (
		(x0 + x1) / 2.0 * LAYOUT_SPACING,
		(y0 + y1) / 2.0 * LAYOUT_SPACING,
	);
	ViewTransform {
		x: width / 2.0 - cx * k,
		y: height / 2.0 - cy * k,
		k,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::risk_graph::scale::VisualScale;
	use crate::model::WeightMap;

	fn state(weights: &WeightMap) -> ForceGraphState {
		let scene = GraphScene::build(weights, &VisualScale::NETWORK);
		ForceGraphState::new(&scene, 800.0, 600.0).expect("state")
	}

	fn positions(s: &ForceGraphState) -> Vec<(Indicator, f32, f32)> {
		let mut out = Vec::new();
		s.graph
			.visit_nodes(|n| out.push((n.data.user_data.indicator, n.x(), n.y())));
		out
	}

	#[test]
	fn nodes_start_at_layout_positions_and_stay_pinned() {
		let mut s = state(&WeightMap::new());
		let before = positions(&s);
		assert_eq!(before.len(), Indicator::COUNT);
		for &(ind, x, y) in &before {
			let (lx, ly) = ind.position();
			assert_eq!((x, y), ((lx * LAYOUT_SPACING) as f32, (ly * LAYOUT_SPACING) as f32));
		}
		for _ in 0..30 {
			s.tick(0.016);
		}
		assert_eq!(positions(&s), before);
	}

	#[test]
	fn node_styles_come_from_the_scene() {
		let s = state(&WeightMap::new().with(Indicator::Gold, -1.0));
		s.graph.visit_nodes(|n| {
			let info = &n.data.user_data;
			if info.indicator == Indicator::Gold {
				assert_eq!(info.color, "red");
				assert_eq!(info.radius, 35.0);
			} else {
				assert_eq!(info.color, "green");
				assert_eq!(info.radius, 10.0);
			}
		});
	}

	#[test]
	fn edge_widths_follow_the_source() {
		let s = state(&WeightMap::new().with(Indicator::UsDollar, 1.0));
		assert_eq!(s.edge_width(Indicator::UsDollar, Indicator::Gold), 5.0);
		assert_eq!(s.edge_width(Indicator::UsDollar, Indicator::CorporateEarnings), 5.0);
		assert_eq!(s.edge_width(Indicator::VolatilityIndex, Indicator::Gold), 1.0);
	}

	#[test]
	fn unknown_pair_falls_back_to_the_scale_floor() {
		let scale = VisualScale {
			edge_min: 2.5,
			..VisualScale::PLOT
		};
		let scene = GraphScene::build(&WeightMap::new(), &scale);
		let s = ForceGraphState::new(&scene, 800.0, 600.0).expect("state");
		assert_eq!(s.edge_width(Indicator::Gold, Indicator::UsDollar), 2.5);
		assert_eq!(s.edge_width(Indicator::UsDollar, Indicator::Gold), 2.5);
	}

	#[test]
	#[should_panic(expected = "scene has no node for Gold")]
	fn edge_to_a_missing_node_is_not_skipped() {
		let mut scene = GraphScene::build(&WeightMap::new(), &VisualScale::NETWORK);
		scene.nodes.retain(|n| n.indicator != Indicator::Gold);
		let _ = ForceGraphState::new(&scene, 800.0, 600.0);
	}

	#[test]
	fn hit_testing_and_hover_neighbours() {
		let mut s = state(&WeightMap::new());
		let (lx, ly) = Indicator::InterestRates.position();
		let (gx, gy) = (lx * LAYOUT_SPACING, ly * LAYOUT_SPACING);
		let (sx, sy) = (
			gx * s.transform.k + s.transform.x,
			gy * s.transform.k + s.transform.y,
		);

		let hit = s.node_at_position(sx, sy).expect("node under cursor");
		s.set_hover(Some(hit));
		assert!(s.is_hovered(hit));
		// Central Bank Policy upstream, three downstream.
		assert_eq!(s.hover.neighbors.len(), 4);
		assert!(s.has_active_highlight());

		s.set_hover(None);
		assert!(s.hover.neighbors.is_empty());
		assert_eq!(s.node_at_position(-10_000.0, -10_000.0), None);
	}

	#[test]
	fn rebuild_keeps_the_view() {
		let mut s = state(&WeightMap::new());
		s.transform = ViewTransform {
			x: 12.0,
			y: -4.0,
			k: 2.5,
		};
		let scene = GraphScene::build(
			&WeightMap::new().with(Indicator::Equities, 0.5),
			&VisualScale::NETWORK,
		);
		let next = s.rebuild(&scene).expect("rebuild");
		assert_eq!(next.transform.k, 2.5);
		assert_eq!(next.transform.x, 12.0);
		assert_eq!(next.edge_width(Indicator::Equities, Indicator::BondPrices), 3.0);
	}

	#[test]
	fn fit_transform_centers_the_layout() {
		let s = state(&WeightMap::new());
		let (x0, y0, x1, y1) = GraphScene::build(&WeightMap::new(), &VisualScale::NETWORK).bounds();
		let cx = (x0 + x1) / 2.0 * LAYOUT_SPACING * s.transform.k + s.transform.x;
		let cy = (y0 + y1) / 2.0 * LAYOUT_SPACING * s.transform.k + s.transform.y;
		assert!((cx - 400.0).abs() < 1e-9);
		assert!((cy - 300.0).abs() < 1e-9);
	}
}
