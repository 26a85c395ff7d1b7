//! Fixed catalogue of indicators, their layout coordinates and the directed
//! relationships between them.

/// A named macro-financial factor shown as one node of the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Indicator {
	OilPrices,
	Inflation,
	CentralBankPolicy,
	InterestRates,
	ManufacturingPmi,
	GdpGrowth,
	Unemployment,
	ConsumerConfidence,
	UsDollar,
	HousingMarket,
	CorporateEarnings,
	CreditSpreads,
	Equities,
	BondPrices,
	VolatilityIndex,
	Gold,
}

impl Indicator {
	pub const COUNT: usize = 16;

	/// Every indicator in catalogue order.
	pub const ALL: [Indicator; Indicator::COUNT] = [
		Indicator::OilPrices,
		Indicator::Inflation,
		Indicator::CentralBankPolicy,
		Indicator::InterestRates,
		Indicator::ManufacturingPmi,
		Indicator::GdpGrowth,
		Indicator::Unemployment,
		Indicator::ConsumerConfidence,
		Indicator::UsDollar,
		Indicator::HousingMarket,
		Indicator::CorporateEarnings,
		Indicator::CreditSpreads,
		Indicator::Equities,
		Indicator::BondPrices,
		Indicator::VolatilityIndex,
		Indicator::Gold,
	];

	/// Position in [`Indicator::ALL`].
	pub fn index(self) -> usize {
		self as usize
	}

	/// Display name, also used as the node label.
	pub fn name(self) -> &'static str {
		match self {
			Indicator::OilPrices => "Oil Prices",
			Indicator::Inflation => "Inflation",
			Indicator::CentralBankPolicy => "Central Bank Policy",
			Indicator::InterestRates => "Interest Rates",
			Indicator::ManufacturingPmi => "Manufacturing PMI",
			Indicator::GdpGrowth => "GDP Growth",
			Indicator::Unemployment => "Unemployment",
			Indicator::ConsumerConfidence => "Consumer Confidence",
			Indicator::UsDollar => "US Dollar",
			Indicator::HousingMarket => "Housing Market",
			Indicator::CorporateEarnings => "Corporate Earnings",
			Indicator::CreditSpreads => "Credit Spreads",
			Indicator::Equities => "Equities",
			Indicator::BondPrices => "Bond Prices",
			Indicator::VolatilityIndex => "Volatility Index",
			Indicator::Gold => "Gold",
		}
	}

	/// Label of the slider that drives this indicator's weight.
	pub fn slider_label(self) -> String {
		match self {
			Indicator::InterestRates => "Interest Rate Impact".to_string(),
			other => format!("{} Impact", other.name()),
		}
	}

	pub fn description(self) -> &'static str {
		match self {
			Indicator::OilPrices => "Crude oil benchmark price, a key input cost for the economy",
			Indicator::Inflation => "Rate of change of consumer prices",
			Indicator::CentralBankPolicy => "Stance of monetary policy, from easing to tightening",
			Indicator::InterestRates => "Level of short-term borrowing costs",
			Indicator::ManufacturingPmi => "Purchasing managers' survey of factory activity",
			Indicator::GdpGrowth => "Growth rate of aggregate economic output",
			Indicator::Unemployment => "Share of the labour force without work",
			Indicator::ConsumerConfidence => "Household sentiment about income and spending",
			Indicator::UsDollar => "Trade-weighted strength of the US dollar",
			Indicator::HousingMarket => "Home sales, prices and residential construction",
			Indicator::CorporateEarnings => "Aggregate profits reported by listed companies",
			Indicator::CreditSpreads => "Yield premium of corporate debt over government debt",
			Indicator::Equities => "Broad stock market performance",
			Indicator::BondPrices => "Prices of government bonds",
			Indicator::VolatilityIndex => "Implied volatility of equity index options",
			Indicator::Gold => "Price of gold, a traditional safe-haven asset",
		}
	}

	/// Fixed layout coordinate in layout units (x grows right, y grows down).
	pub fn position(self) -> (f64, f64) {
		match self {
			Indicator::OilPrices => (0.0, 0.0),
			Indicator::Inflation => (1.0, 0.0),
			Indicator::CentralBankPolicy => (2.0, 0.0),
			Indicator::InterestRates => (3.0, 0.0),
			Indicator::ManufacturingPmi => (0.0, 1.0),
			Indicator::GdpGrowth => (1.0, 1.0),
			Indicator::Unemployment => (2.0, 1.0),
			Indicator::ConsumerConfidence => (3.0, 1.0),
			Indicator::UsDollar => (4.0, 0.5),
			Indicator::HousingMarket => (3.5, 2.0),
			Indicator::CorporateEarnings => (1.5, 2.0),
			Indicator::CreditSpreads => (2.5, 2.5),
			Indicator::Equities => (1.0, 3.0),
			Indicator::BondPrices => (3.5, 3.0),
			Indicator::VolatilityIndex => (2.0, 3.5),
			Indicator::Gold => (4.5, 2.5),
		}
	}
}

/// A directed, described connection between two indicators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Relationship {
	pub source: Indicator,
	pub target: Indicator,
	pub description: &'static str,
}

const fn rel(source: Indicator, target: Indicator, description: &'static str) -> Relationship {
	Relationship {
		source,
		target,
		description,
	}
}

use Indicator::*;

/// Every relationship. A source always precedes its target in catalogue order.
pub static RELATIONSHIPS: &[Relationship] = &[
	rel(OilPrices, Inflation, "Energy costs feed through to consumer prices"),
	rel(OilPrices, ManufacturingPmi, "Input costs weigh on factory activity"),
	rel(Inflation, CentralBankPolicy, "Rising prices prompt monetary tightening"),
	rel(Inflation, ConsumerConfidence, "Eroding purchasing power dampens sentiment"),
	rel(Inflation, Gold, "Gold is sought as a hedge against inflation"),
	rel(CentralBankPolicy, InterestRates, "Policy decisions set short-term interest rates"),
	rel(CentralBankPolicy, UsDollar, "Tighter policy attracts capital inflows to the dollar"),
	rel(InterestRates, HousingMarket, "Higher borrowing costs cool mortgage demand"),
	rel(InterestRates, BondPrices, "Rising rates push existing bond prices lower"),
	rel(InterestRates, Equities, "Higher discount rates compress equity valuations"),
	rel(ManufacturingPmi, GdpGrowth, "Factory activity leads aggregate output"),
	rel(GdpGrowth, Unemployment, "Stronger output growth reduces joblessness"),
	rel(GdpGrowth, CorporateEarnings, "Economic expansion lifts corporate revenues"),
	rel(Unemployment, ConsumerConfidence, "Job security underpins consumer sentiment"),
	rel(ConsumerConfidence, HousingMarket, "Confident households commit to home purchases"),
	rel(ConsumerConfidence, CorporateEarnings, "Consumer spending drives company sales"),
	rel(UsDollar, CorporateEarnings, "A strong dollar reduces overseas earnings"),
	rel(UsDollar, Gold, "A strong dollar makes gold dearer for foreign buyers"),
	rel(HousingMarket, CreditSpreads, "Mortgage stress spills into credit markets"),
	rel(CorporateEarnings, Equities, "Earnings growth supports stock prices"),
	rel(CorporateEarnings, CreditSpreads, "Healthy profits tighten credit spreads"),
	rel(CreditSpreads, VolatilityIndex, "Widening spreads signal stress and lift volatility"),
	rel(Equities, VolatilityIndex, "Falling stocks coincide with volatility spikes"),
	rel(Equities, BondPrices, "Risk-off selling rotates into government bonds"),
	rel(VolatilityIndex, Gold, "Market stress drives safe-haven demand"),
];

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn all_is_in_index_order() {
		for (i, ind) in Indicator::ALL.iter().enumerate() {
			assert_eq!(ind.index(), i);
		}
	}

	#[test]
	fn names_are_unique() {
		let names: HashSet<_> = Indicator::ALL.iter().map(|i| i.name()).collect();
		assert_eq!(names.len(), Indicator::COUNT);
	}

	#[test]
	fn classifier_inputs_keep_their_slider_labels() {
		assert_eq!(Indicator::InterestRates.slider_label(), "Interest Rate Impact");
		assert_eq!(
			Indicator::ConsumerConfidence.slider_label(),
			"Consumer Confidence Impact"
		);
		assert_eq!(Indicator::GdpGrowth.slider_label(), "GDP Growth Impact");
	}

	#[test]
	fn positions_are_finite_and_distinct() {
		let mut seen = HashSet::new();
		for ind in Indicator::ALL {
			let (x, y) = ind.position();
			assert!(x.is_finite() && y.is_finite(), "{}", ind.name());
			assert!(seen.insert((x.to_bits(), y.to_bits())), "{} overlaps", ind.name());
		}
	}

	#[test]
	fn relationships_form_a_dag_without_duplicates() {
		let mut pairs = HashSet::new();
		for r in RELATIONSHIPS {
			assert!(
				r.source.index() < r.target.index(),
				"{} -> {}",
				r.source.name(),
				r.target.name()
			);
			assert!(pairs.insert((r.source, r.target)));
			assert!(!r.description.is_empty());
		}
		assert_eq!(RELATIONSHIPS.len(), 25);
	}

	#[test]
	fn every_indicator_is_connected() {
		for ind in Indicator::ALL {
			assert!(
				RELATIONSHIPS
					.iter()
					.any(|r| r.source == ind || r.target == ind),
				"{} is isolated",
				ind.name()
			);
		}
	}
}
