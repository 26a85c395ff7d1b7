//! Startup configuration taken from the page URL, e.g. `?mode=document&scale=plot`.

use log::{info, warn};
use thiserror::Error;

use crate::components::risk_graph::{RenderMode, VisualScale};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
	#[error("unknown render mode `{0}` (expected canvas or document)")]
	UnknownMode(String),

	#[error("unknown visual scale `{0}` (expected network or plot)")]
	UnknownScale(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AppConfig {
	pub mode: RenderMode,
	pub scale: VisualScale,
}

impl AppConfig {
	/// Resolves the raw query values. Unknown values fall back to the default.
	pub fn from_query(mode: Option<&str>, scale: Option<&str>) -> Self {
		let defaults = Self::default();
		let config = Self {
			mode: parse_or(mode, defaults.mode),
			scale: parse_or(scale, defaults.scale),
		};
		info!("render mode {}, scale {:?}", config.mode, config.scale.metric);
		config
	}
}

fn parse_or<T>(raw: Option<&str>, fallback: T) -> T
where
	T: std::str::FromStr<Err = ConfigError>,
{
	match raw.map(str::parse::<T>) {
		Some(Ok(value)) => value,
		Some(Err(e)) => {
			warn!("{}; using default", e);
			fallback
		}
		None => fallback,
	}
}
