use leptos::prelude::*;

use crate::components::risk_graph::{RenderMode, VisualScale};
use crate::model::weights::{MAX_WEIGHT, MIN_WEIGHT};
use crate::model::{Classification, Indicator, Regime, WeightMap};

const SLIDER_STEP: f64 = 0.05;

/// One range slider per catalogue indicator.
#[component]
pub fn WeightPanel(weights: RwSignal<WeightMap>) -> impl IntoView {
	let sliders = Indicator::ALL
		.iter()
		.map(|&indicator| view! { <IndicatorSlider indicator=indicator weights=weights /> })
		.collect_view();

	view! {
		<section class="weight-panel">
			<h2>"Indicators"</h2>
			{sliders}
			<button class="reset" on:click=move |_| weights.update(|w| w.reset())>
				"Reset"
			</button>
		</section>
	}
}

#[component]
fn IndicatorSlider(indicator: Indicator, weights: RwSignal<WeightMap>) -> impl IntoView {
	let id = format!("weight-{}", indicator.index());
	let value = move || weights.with(|w| w.get(indicator));

	view! {
		<div class="slider" title=indicator.description()>
			<label for=id.clone()>{indicator.slider_label()}</label>
			<input
				id=id
				type="range"
				min=MIN_WEIGHT.to_string()
				max=MAX_WEIGHT.to_string()
				step=SLIDER_STEP.to_string()
				prop:value=move || value().to_string()
				on:input=move |ev| {
					if let Ok(v) = event_target_value(&ev).parse::<f64>() {
						weights.update(|w| w.set(indicator, v));
					}
				}
			/>
			<output>{move || format!("{:+.2}", value())}</output>
		</div>
	}
}

/// Headline for the current regime plus the composite score.
#[component]
pub fn RegimeBanner(#[prop(into)] classification: Signal<Classification>) -> impl IntoView {
	let class = move || match classification.get().regime {
		Regime::RiskOn => "regime risk-on",
		Regime::RiskOff => "regime risk-off",
	};

	view! {
		<div class=class>
			<strong>{move || classification.get().regime.headline()}</strong>
			<span class="score">{move || format!("score {:+.2}", classification.get().score)}</span>
		</div>
	}
}

/// Render mode and scale preset pickers.
#[component]
pub fn RenderSettings(mode: RwSignal<RenderMode>, scale: RwSignal<VisualScale>) -> impl IntoView {
	let modes = RenderMode::ALL
		.iter()
		.map(|&m| {
			view! {
				<label>
					<input
						type="radio"
						name="render-mode"
						prop:checked=move || mode.get() == m
						on:change=move |_| mode.set(m)
					/>
					{m.label()}
				</label>
			}
		})
		.collect_view();

	let scales = [("network", VisualScale::NETWORK), ("plot", VisualScale::PLOT)]
		.into_iter()
		.map(|(name, preset)| {
			view! {
				<label>
					<input
						type="radio"
						name="visual-scale"
						prop:checked=move || scale.get() == preset
						on:change=move |_| scale.set(preset)
					/>
					{name}
				</label>
			}
		})
		.collect_view();

	view! {
		<fieldset class="render-settings">
			<legend>"Rendering"</legend>
			<div>{modes}</div>
			<div>{scales}</div>
		</fieldset>
	}
}
