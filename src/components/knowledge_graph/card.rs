use super::types::{GraphNode, NodeKind};

pub const LABEL_BUDGET: usize = 28;
pub const BOOK_BUDGET: usize = 15;
pub const PREVIEW_BUDGET: usize = 40;
pub const TAG_CAP: usize = 3;

pub const CARD_WIDTH: f64 = 172.0;
pub const CENTER_SCALE: f64 = 1.25;
const HEADER_HEIGHT: f64 = 24.0;
const LABEL_HEIGHT: f64 = 20.0;
const BADGE_HEIGHT: f64 = 18.0;
const PADDING: f64 = 8.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Badge {
	pub text: String,
}

/// Fully resolved visual for one node card. Built once per attribute
/// snapshot and replayed by the painter every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CardVisual {
	pub header: &'static str,
	pub icon: &'static str,
	pub accent: &'static str,
	pub label: String,
	pub badges: Vec<Badge>,
	pub width: f64,
	pub height: f64,
	pub selected: bool,
	pub highlighted: bool,
	pub center: bool,
}

/// Clamp to a char budget with an ellipsis. Counted in chars, never bytes,
/// so multi-byte labels cannot split a code point.
pub fn truncate(text: &str, budget: usize) -> String {
	if text.chars().count() <= budget {
		return text.to_string();
	}
	let mut out: String = text.chars().take(budget).collect();
	out.push('…');
	out
}

fn badges_for(kind: &NodeKind) -> Vec<Badge> {
	let mut badges = Vec::new();
	let mut push = |text: String| badges.push(Badge { text });

	match kind {
		NodeKind::CareDomain { topic } => {
			if let Some(topic) = topic {
				push(topic.clone());
			}
		}
		NodeKind::EgwReference { book, preview } => {
			if let Some(book) = book {
				push(truncate(book, BOOK_BUDGET));
			}
			if let Some(preview) = preview {
				push(truncate(preview, PREVIEW_BUDGET));
			}
		}
		NodeKind::Intervention { care_domain, .. } => {
			if let Some(domain) = care_domain {
				push(domain.clone());
			}
		}
		NodeKind::Recipe { dietary_tags } => {
			for tag in dietary_tags.iter().take(TAG_CAP) {
				push(tag.clone());
			}
			if dietary_tags.len() > TAG_CAP {
				push(format!("+{} more", dietary_tags.len() - TAG_CAP));
			}
		}
		NodeKind::Scripture { theme, preview } => {
			if let Some(theme) = theme {
				push(theme.clone());
			}
			if let Some(preview) = preview {
				push(truncate(preview, PREVIEW_BUDGET));
			}
		}
	}
	badges
}

pub fn build_card(node: &GraphNode) -> CardVisual {
	let center = matches!(node.kind, NodeKind::Intervention { center: true, .. });
	let badges = badges_for(&node.kind);
	let width = if center {
		CARD_WIDTH * CENTER_SCALE
	} else {
		CARD_WIDTH
	};
	let height =
		HEADER_HEIGHT + LABEL_HEIGHT + badges.len() as f64 * BADGE_HEIGHT + PADDING * 2.0;

	CardVisual {
		header: node.kind.header(),
		icon: node.kind.icon(),
		accent: node.kind.accent(),
		label: truncate(&node.label, LABEL_BUDGET),
		badges,
		width,
		height,
		selected: node.selected,
		highlighted: node.highlighted,
		center,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(kind: NodeKind) -> GraphNode {
		GraphNode {
			id: "n".into(),
			label: "Label".into(),
			kind,
			highlighted: false,
			selected: false,
		}
	}

	#[test]
	fn truncate_respects_char_budget() {
		assert_eq!(truncate("short", 15), "short");
		assert_eq!(truncate("exactly fifteen", 15), "exactly fifteen");
		assert_eq!(
			truncate("The Ministry of Healing", 15),
			"The Ministry of…"
		);
		// char-counted, not byte-counted
		assert_eq!(truncate("Gesundheitsrät", 15), "Gesundheitsrät");
	}

	#[test]
	fn book_badge_truncated_to_fifteen_chars() {
		let visual = build_card(&node(NodeKind::EgwReference {
			book: Some("Counsels on Diet and Foods".into()),
			preview: None,
		}));
		assert_eq!(visual.badges.len(), 1);
		assert_eq!(visual.badges[0].text, "Counsels on Die…");
	}

	#[test]
	fn preview_budget_is_independent_of_book_budget() {
		let long_preview = "a".repeat(PREVIEW_BUDGET + 5);
		let visual = build_card(&node(NodeKind::EgwReference {
			book: Some("Short Book".into()),
			preview: Some(long_preview),
		}));
		assert_eq!(visual.badges[0].text, "Short Book");
		assert_eq!(
			visual.badges[1].text.chars().count(),
			PREVIEW_BUDGET + 1 // budget plus the ellipsis
		);
	}

	#[test]
	fn tag_cap_with_overflow_badge() {
		let tags: Vec<String> = ["vegan", "gluten-free", "oil-free", "raw", "no-sugar"]
			.iter()
			.map(|t| t.to_string())
			.collect();
		let visual = build_card(&node(NodeKind::Recipe {
			dietary_tags: tags,
		}));
		assert_eq!(visual.badges.len(), TAG_CAP + 1);
		assert_eq!(visual.badges[TAG_CAP].text, "+2 more");

		let visual = build_card(&node(NodeKind::Recipe {
			dietary_tags: vec!["vegan".into(), "raw".into()],
		}));
		assert_eq!(visual.badges.len(), 2);
		assert!(visual.badges.iter().all(|b| !b.text.contains("more")));

		let visual = build_card(&node(NodeKind::Recipe {
			dietary_tags: vec!["a".into(), "b".into(), "c".into()],
		}));
		assert_eq!(visual.badges.len(), 3);
	}

	#[test]
	fn missing_metadata_omits_badges() {
		let visual = build_card(&node(NodeKind::Scripture {
			theme: None,
			preview: None,
		}));
		assert!(visual.badges.is_empty());
		assert_eq!(visual.header, "Scripture");
	}

	#[test]
	fn center_intervention_is_enlarged() {
		let focal = build_card(&node(NodeKind::Intervention {
			care_domain: Some("Rest".into()),
			center: true,
		}));
		let plain = build_card(&node(NodeKind::Intervention {
			care_domain: Some("Rest".into()),
			center: false,
		}));
		assert!(focal.center);
		assert!(focal.width > plain.width);
		assert_eq!(focal.width, CARD_WIDTH * CENTER_SCALE);
	}

	#[test]
	fn building_is_idempotent() {
		let n = GraphNode {
			id: "r1".into(),
			label: "A very long recipe label that exceeds the budget".into(),
			kind: NodeKind::Recipe {
				dietary_tags: vec!["vegan".into(), "raw".into(), "nut-free".into(), "x".into()],
			},
			highlighted: true,
			selected: true,
		};
		assert_eq!(build_card(&n), build_card(&n));
	}

	#[test]
	fn emphasis_flags_carry_independently() {
		let mut n = node(NodeKind::CareDomain {
			topic: Some("Fresh air".into()),
		});
		n.highlighted = true;
		let visual = build_card(&n);
		assert!(visual.highlighted);
		assert!(!visual.selected);

		n.selected = true;
		let visual = build_card(&n);
		assert!(visual.highlighted);
		assert!(visual.selected);
	}

	#[test]
	fn label_clamped_to_budget() {
		let mut n = node(NodeKind::CareDomain { topic: None });
		n.label = "x".repeat(LABEL_BUDGET + 10);
		let visual = build_card(&n);
		assert_eq!(visual.label.chars().count(), LABEL_BUDGET + 1);
		assert!(visual.label.ends_with('…'));
	}

	#[test]
	fn height_grows_with_badges() {
		let none = build_card(&node(NodeKind::Recipe {
			dietary_tags: vec![],
		}));
		let three = build_card(&node(NodeKind::Recipe {
			dietary_tags: vec!["a".into(), "b".into(), "c".into()],
		}));
		assert!(three.height > none.height);
	}
}
