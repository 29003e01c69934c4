use leptos::prelude::*;

use crate::components::knowledge_graph::{
	GraphData, GraphLink, GraphNode, KnowledgeGraphCanvas, NodeKind,
};

fn node(id: &str, label: &str, kind: NodeKind) -> GraphNode {
	GraphNode {
		id: id.to_string(),
		label: label.to_string(),
		kind,
		highlighted: false,
		selected: false,
	}
}

fn link(source: &str, target: &str, color: Option<&str>, dashed: bool) -> GraphLink {
	GraphLink {
		source: source.to_string(),
		target: target.to_string(),
		color: color.map(|c| c.to_string()),
		dashed,
		selected: false,
	}
}

/// Sample care-ministry graph: one focal intervention surrounded by the
/// care domains, recipes, scriptures and EGW references it draws on.
/// Dashed links mark thematic (inferred) relations, solid ones direct.
fn sample_graph() -> GraphData {
	let mut nodes = vec![
		node(
			"wind-down",
			"Evening wind-down routine",
			NodeKind::Intervention {
				care_domain: Some("Rest".into()),
				center: true,
			},
		),
		node(
			"walk",
			"Morning walk plan",
			NodeKind::Intervention {
				care_domain: Some("Exercise".into()),
				center: false,
			},
		),
		node(
			"menu",
			"Plant-based menu week",
			NodeKind::Intervention {
				care_domain: Some("Nutrition".into()),
				center: false,
			},
		),
		node(
			"rest",
			"Rest",
			NodeKind::CareDomain {
				topic: Some("Sleep hygiene".into()),
			},
		),
		node(
			"nutrition",
			"Nutrition",
			NodeKind::CareDomain {
				topic: Some("Whole-food eating".into()),
			},
		),
		node(
			"exercise",
			"Exercise",
			NodeKind::CareDomain {
				topic: Some("Daily movement".into()),
			},
		),
		node(
			"trust",
			"Trust in God",
			NodeKind::CareDomain { topic: None },
		),
		node(
			"shepherds-pie",
			"Lentil shepherd's pie",
			NodeKind::Recipe {
				dietary_tags: vec![
					"vegan".into(),
					"oil-free".into(),
					"gluten-free".into(),
					"soy-free".into(),
					"nut-free".into(),
				],
			},
		),
		node(
			"oats",
			"Overnight oats",
			NodeKind::Recipe {
				dietary_tags: vec!["vegan".into(), "no-added-sugar".into()],
			},
		),
		node(
			"ps127",
			"Psalm 127:2",
			NodeKind::Scripture {
				theme: Some("Rest".into()),
				preview: Some("He giveth his beloved sleep.".into()),
			},
		),
		node(
			"prov17",
			"Proverbs 17:22",
			NodeKind::Scripture {
				theme: Some("Cheerfulness".into()),
				preview: Some("A merry heart doeth good like a medicine.".into()),
			},
		),
		node(
			"moh-rest",
			"True rest",
			NodeKind::EgwReference {
				book: Some("The Ministry of Healing".into()),
				preview: Some("In quietness and confidence is strength.".into()),
			},
		),
		node(
			"cdf-regularity",
			"Regularity in eating",
			NodeKind::EgwReference {
				book: Some("Counsels on Diet and Foods".into()),
				preview: None,
			},
		),
	];

	// demo a transient search match
	if let Some(n) = nodes.iter_mut().find(|n| n.id == "ps127") {
		n.highlighted = true;
	}

	let links = vec![
		link("wind-down", "rest", Some("#2ca02c"), false),
		link("walk", "exercise", Some("#2ca02c"), false),
		link("menu", "nutrition", Some("#2ca02c"), false),
		link("moh-rest", "wind-down", Some("#9467bd"), false),
		link("cdf-regularity", "menu", Some("#9467bd"), false),
		link("ps127", "wind-down", Some("#1f77b4"), true),
		link("prov17", "trust", Some("#1f77b4"), true),
		link("shepherds-pie", "menu", Some("#d62728"), true),
		link("oats", "menu", Some("#d62728"), true),
		link("wind-down", "trust", None, true),
	];

	GraphData { nodes, links }
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = Signal::derive(move || sample_graph());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<KnowledgeGraphCanvas data=graph_data fullscreen=true />
				<div class="graph-overlay">
					<h1>"Care Ministry Knowledge Graph"</h1>
					<p class="subtitle">
						"Click a card to select it. Drag cards to reposition. Scroll to zoom. Drag the background to pan."
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
