use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use log::debug;

use crate::APP_TITLE;
use crate::components::controls::{RegimeBanner, RenderSettings, WeightPanel};
use crate::components::risk_graph::{GraphScene, RiskGraph};
use crate::config::AppConfig;
use crate::model::{WeightMap, classify};

/// Simulator page: sliders, regime headline and the indicator graph.
///
/// Each page instance owns its own weights; the classification and the scene
/// are recomputed in full whenever they change.
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let config = query.with_untracked(|q| {
		AppConfig::from_query(q.get("mode").as_deref(), q.get("scale").as_deref())
	});

	let weights = RwSignal::new(WeightMap::new());
	let mode = RwSignal::new(config.mode);
	let scale = RwSignal::new(config.scale);

	let classification = Signal::derive(move || {
		let c = weights.with(classify);
		debug!("score {:.3} -> {}", c.score, c.regime.label());
		c
	});
	let scene = Signal::derive(move || GraphScene::build(&weights.get(), &scale.get()));

	view! {
		<main class="simulator">
			<header>
				<h1>{APP_TITLE}</h1>
				<RegimeBanner classification=classification />
			</header>
			<div class="layout">
				<aside>
					<WeightPanel weights=weights />
					<RenderSettings mode=mode scale=scale />
				</aside>
				<section class="graph">
					<RiskGraph scene=scene mode=mode />
				</section>
			</div>
		</main>
	}
}
