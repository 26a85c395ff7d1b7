use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;
use crate::model::{Indicator, RELATIONSHIPS, WeightMap};

use super::error::RenderError;
use super::scale::{Tone, VisualScale};

/// Pixels per layout unit.
pub const LAYOUT_SPACING: f64 = 160.0;

/// Which artifact the renderer produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
	/// Raster drawing on a canvas element.
	#[default]
	Canvas,
	/// Serialized HTML document with an embedded SVG and tooltips.
	Document,
}

impl RenderMode {
	pub const ALL: [RenderMode; 2] = [RenderMode::Canvas, RenderMode::Document];

	pub fn key(self) -> &'static str {
		match self {
			RenderMode::Canvas => "canvas",
			RenderMode::Document => "document",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			RenderMode::Canvas => "Static image",
			RenderMode::Document => "Interactive document",
		}
	}
}

impl fmt::Display for RenderMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

impl FromStr for RenderMode {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"canvas" | "image" => Ok(RenderMode::Canvas),
			"document" | "html" => Ok(RenderMode::Document),
			other => Err(ConfigError::UnknownMode(other.to_string())),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
	pub indicator: Indicator,
	pub weight: f64,
	pub size: f64,
	pub radius: f64,
	pub tone: Tone,
	/// Layout coordinate, in layout units.
	pub position: (f64, f64),
}

impl SceneNode {
	pub fn label(&self) -> &'static str {
		self.indicator.name()
	}

	pub fn tooltip(&self) -> &'static str {
		self.indicator.description()
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneEdge {
	pub source: Indicator,
	pub target: Indicator,
	pub width: f64,
	pub tooltip: &'static str,
}

/// Styled nodes and edges, rebuilt in full from the weights on every change.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphScene {
	pub nodes: Vec<SceneNode>,
	pub edges: Vec<SceneEdge>,
	pub scale: VisualScale,
}

impl GraphScene {
	pub fn build(weights: &WeightMap, scale: &VisualScale) -> Self {
		let nodes = weights
			.iter()
			.map(|(indicator, weight)| {
				let size = scale.node_size(weight);
				SceneNode {
					indicator,
					weight,
					size,
					radius: scale.radius(size),
					tone: Tone::of(weight),
					position: indicator.position(),
				}
			})
			.collect();

		// Edges have no weight of their own; the source node drives the width.
		let edges = RELATIONSHIPS
			.iter()
			.map(|rel| SceneEdge {
				source: rel.source,
				target: rel.target,
				width: scale.edge_width(weights.get(rel.source)),
				tooltip: rel.description,
			})
			.collect();

		Self {
			nodes,
			edges,
			scale: *scale,
		}
	}

	/// Nodes are stored in catalogue order, one per indicator.
	///
	/// # Panics
	///
	/// If the scene has no node for `indicator`; [`GraphScene::build`] always
	/// emits all of them.
	pub fn node(&self, indicator: Indicator) -> &SceneNode {
		match self.nodes.get(indicator.index()) {
			Some(node) if node.indicator == indicator => node,
			_ => panic!("scene has no node for {}", indicator.name()),
		}
	}

	/// Every position must be finite before anything is drawn.
	pub fn check_positions(&self) -> Result<(), RenderError> {
		match self
			.nodes
			.iter()
			.find(|n| !(n.position.0.is_finite() && n.position.1.is_finite()))
		{
			Some(node) => Err(RenderError::InvalidPosition(node.label())),
			None => Ok(()),
		}
	}

	/// Layout-unit bounding box as `(min_x, min_y, max_x, max_y)`.
	pub fn bounds(&self) -> (f64, f64, f64, f64) {
		self.nodes.iter().fold(
			(f64::MAX, f64::MAX, f64::MIN, f64::MIN),
			|(x0, y0, x1, y1), n| {
				let (x, y) = n.position;
				(x0.min(x), y0.min(y), x1.max(x), y1.max(y))
			},
		)
	}
}
