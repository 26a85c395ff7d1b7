//! Mapping from an indicator weight to node size, node tone and edge width.

use std::f64::consts::PI;
use std::str::FromStr;

use crate::config::ConfigError;

/// How a node size converts into a drawn radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeMetric {
	/// Size is the node diameter in pixels.
	Diameter,
	/// Size is the marker area in square pixels.
	Area,
}

/// Linear-with-floor size and width formulas, `max(base + scale * |w|, min)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualScale {
	pub node_base: f64,
	pub node_scale: f64,
	pub node_min: f64,
	pub metric: SizeMetric,
	pub edge_base: f64,
	pub edge_scale: f64,
	pub edge_min: f64,
}

impl Default for VisualScale {
	fn default() -> Self {
		Self::NETWORK
	}
}

impl VisualScale {
	/// Diameter-sized nodes for the interactive network look.
	pub const NETWORK: VisualScale = VisualScale {
		node_base: 20.0,
		node_scale: 50.0,
		node_min: 20.0,
		metric: SizeMetric::Diameter,
		edge_base: 1.0,
		edge_scale: 4.0,
		edge_min: 1.0,
	};

	/// Area-sized markers for the static plot look.
	pub const PLOT: VisualScale = VisualScale {
		node_base: 500.0,
		node_scale: 1000.0,
		node_min: 500.0,
		metric: SizeMetric::Area,
		edge_base: 1.0,
		edge_scale: 5.0,
		edge_min: 1.0,
	};

	pub fn node_size(&self, weight: f64) -> f64 {
		(self.node_base + self.node_scale * weight.abs()).max(self.node_min)
	}

	pub fn edge_width(&self, source_weight: f64) -> f64 {
		(self.edge_base + self.edge_scale * source_weight.abs()).max(self.edge_min)
	}

	/// Largest size a weight in `[-1, 1]` can produce.
	pub fn max_node_size(&self) -> f64 {
		self.node_size(1.0)
	}

	pub fn max_edge_width(&self) -> f64 {
		self.edge_width(1.0)
	}

	pub fn radius(&self, size: f64) -> f64 {
		match self.metric {
			SizeMetric::Diameter => size / 2.0,
			SizeMetric::Area => (size / PI).sqrt(),
		}
	}
}

impl FromStr for VisualScale {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"network" => Ok(VisualScale::NETWORK),
			"plot" => Ok(VisualScale::PLOT),
			other => Err(ConfigError::UnknownScale(other.to_string())),
		}
	}
}

/// Node color class: green for non-negative weights, red otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
	Positive,
	Negative,
}

impl Tone {
	pub fn of(weight: f64) -> Self {
		if weight >= 0.0 { Tone::Positive } else { Tone::Negative }
	}

	pub fn color(self) -> &'static str {
		match self {
			Tone::Positive => "green",
			Tone::Negative => "red",
		}
	}
}
