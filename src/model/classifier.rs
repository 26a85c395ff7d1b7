//! Composite risk score and the binary Risk-On/Risk-Off classification.

use super::catalogue::Indicator;
use super::weights::WeightMap;

/// Fixed contribution of each classifier input. Sums to 1.0.
pub const SCORE_WEIGHTS: [(Indicator, f64); 3] = [
	(Indicator::InterestRates, 0.5),
	(Indicator::ConsumerConfidence, 0.3),
	(Indicator::GdpGrowth, 0.2),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Regime {
	RiskOn,
	RiskOff,
}

impl Regime {
	/// Strictly positive scores are Risk-On; zero is Risk-Off.
	pub fn from_score(score: f64) -> Self {
		if score > 0.0 { Regime::RiskOn } else { Regime::RiskOff }
	}

	pub fn label(self) -> &'static str {
		match self {
			Regime::RiskOn => "Risk-On",
			Regime::RiskOff => "Risk-Off",
		}
	}

	pub fn headline(self) -> &'static str {
		match self {
			Regime::RiskOn => "Risk-On Environment",
			Regime::RiskOff => "Risk-Off Environment",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
	pub score: f64,
	pub regime: Regime,
}

pub fn composite_score(weights: &WeightMap) -> f64 {
	SCORE_WEIGHTS
		.iter()
		.fold(0.0, |acc, &(ind, w)| acc + weights.get(ind) * w)
}

pub fn classify(weights: &WeightMap) -> Classification {
	let score = composite_score(weights);
	Classification {
		score,
		regime: Regime::from_score(score),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn score_weights_sum_to_one() {
		let total: f64 = SCORE_WEIGHTS.iter().map(|(_, w)| w).sum();
		assert!((total - 1.0).abs() < 1e-12);
	}

	#[test]
	fn interest_rates_alone_is_risk_on() {
		let c = classify(&WeightMap::new().with(Indicator::InterestRates, 1.0));
		assert!((c.score - 0.5).abs() < 1e-12);
		assert_eq!(c.regime.headline(), "Risk-On Environment");
	}

	#[test]
	fn offsetting_inputs_land_on_zero_and_stay_risk_off() {
		let w = WeightMap::new()
			.with(Indicator::InterestRates, -1.0)
			.with(Indicator::ConsumerConfidence, 1.0)
			.with(Indicator::GdpGrowth, 1.0);
		let c = classify(&w);
		assert!(c.score.abs() < 1e-12);
		assert_eq!(c.regime, Regime::RiskOff);
		assert_eq!(c.regime.headline(), "Risk-Off Environment");
	}

	#[test]
	fn all_zero_is_risk_off() {
		let c = classify(&WeightMap::new());
		assert_eq!(c.score, 0.0);
		assert_eq!(c.regime, Regime::RiskOff);
	}

	#[test]
	fn boundary_is_strict() {
		assert_eq!(Regime::from_score(0.0), Regime::RiskOff);
		assert_eq!(Regime::from_score(-0.0), Regime::RiskOff);
		assert_eq!(Regime::from_score(f64::MIN_POSITIVE), Regime::RiskOn);
		assert_eq!(Regime::from_score(1e-9), Regime::RiskOn);
		assert_eq!(Regime::from_score(-1e-9), Regime::RiskOff);
	}

	#[test]
	fn other_indicators_never_change_the_label() {
		let base = WeightMap::new()
			.with(Indicator::InterestRates, 0.2)
			.with(Indicator::ConsumerConfidence, -0.4)
			.with(Indicator::GdpGrowth, 0.1);
		let expected = classify(&base);
		for ind in Indicator::ALL {
			if SCORE_WEIGHTS.iter().any(|(k, _)| *k == ind) {
				continue;
			}
			for v in [-1.0, -0.5, 0.5, 1.0] {
				assert_eq!(classify(&base.with(ind, v)), expected, "{}", ind.name());
			}
		}
	}

	#[test]
	fn labels() {
		assert_eq!(Regime::RiskOn.label(), "Risk-On");
		assert_eq!(Regime::RiskOff.label(), "Risk-Off");
	}
}
