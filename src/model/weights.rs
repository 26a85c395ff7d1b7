use super::catalogue::Indicator;

pub const MIN_WEIGHT: f64 = -1.0;
pub const MAX_WEIGHT: f64 = 1.0;

/// Current slider value for every indicator, each in `[-1.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightMap {
	values: [f64; Indicator::COUNT],
}

impl Default for WeightMap {
	fn default() -> Self {
		Self::new()
	}
}

impl WeightMap {
	pub fn new() -> Self {
		Self {
			values: [0.0; Indicator::COUNT],
		}
	}

	pub fn get(&self, indicator: Indicator) -> f64 {
		self.values[indicator.index()]
	}

	/// Stores `value` clamped into range. NaN leaves the current value untouched.
	pub fn set(&mut self, indicator: Indicator, value: f64) {
		if value.is_nan() {
			return;
		}
		self.values[indicator.index()] = value.clamp(MIN_WEIGHT, MAX_WEIGHT);
	}

	pub fn with(mut self, indicator: Indicator, value: f64) -> Self {
		self.set(indicator, value);
		self
	}

	pub fn reset(&mut self) {
		self.values = [0.0; Indicator::COUNT];
	}

	/// Every `(indicator, weight)` pair in catalogue order.
	pub fn iter(&self) -> impl Iterator<Item = (Indicator, f64)> + '_ {
		Indicator::ALL.iter().map(|&ind| (ind, self.get(ind)))
	}
}
