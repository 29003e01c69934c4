/// Domain variant of a graph node. Each variant carries its own metadata
/// shape; missing metadata omits the matching badge, it is never an error.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
	CareDomain {
		topic: Option<String>,
	},
	EgwReference {
		book: Option<String>,
		preview: Option<String>,
	},
	Intervention {
		care_domain: Option<String>,
		center: bool,
	},
	Recipe {
		dietary_tags: Vec<String>,
	},
	Scripture {
		theme: Option<String>,
		preview: Option<String>,
	},
}

impl NodeKind {
	pub fn header(&self) -> &'static str {
		match self {
			NodeKind::CareDomain { .. } => "Care Domain",
			NodeKind::EgwReference { .. } => "EGW Reference",
			NodeKind::Intervention { .. } => "Intervention",
			NodeKind::Recipe { .. } => "Recipe",
			NodeKind::Scripture { .. } => "Scripture",
		}
	}

	pub fn icon(&self) -> &'static str {
		match self {
			NodeKind::CareDomain { .. } => "🌿",
			NodeKind::EgwReference { .. } => "📖",
			NodeKind::Intervention { .. } => "🎯",
			NodeKind::Recipe { .. } => "🧑‍🍳",
			NodeKind::Scripture { .. } => "📜",
		}
	}

	pub fn accent(&self) -> &'static str {
		match self {
			NodeKind::CareDomain { .. } => "#2ca02c",
			NodeKind::EgwReference { .. } => "#9467bd",
			NodeKind::Intervention { .. } => "#ff7f0e",
			NodeKind::Recipe { .. } => "#d62728",
			NodeKind::Scripture { .. } => "#1f77b4",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	pub kind: NodeKind,
	pub highlighted: bool,
	pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
	pub color: Option<String>,
	pub dashed: bool,
	pub selected: bool,
}

#[derive(Clone, Debug, Default)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn header_and_icon_follow_variant() {
		let recipe = NodeKind::Recipe {
			dietary_tags: vec![],
		};
		assert_eq!(recipe.header(), "Recipe");
		assert_eq!(recipe.icon(), "🧑‍🍳");

		let scripture = NodeKind::Scripture {
			theme: None,
			preview: None,
		};
		assert_eq!(scripture.header(), "Scripture");
		assert_eq!(scripture.icon(), "📜");

		let egw = NodeKind::EgwReference {
			book: None,
			preview: None,
		};
		assert_eq!(egw.header(), "EGW Reference");
	}

	#[test]
	fn accents_are_distinct_per_variant() {
		let kinds = [
			NodeKind::CareDomain { topic: None },
			NodeKind::EgwReference {
				book: None,
				preview: None,
			},
			NodeKind::Intervention {
				care_domain: None,
				center: false,
			},
			NodeKind::Recipe {
				dietary_tags: vec![],
			},
			NodeKind::Scripture {
				theme: None,
				preview: None,
			},
		];
		for (i, a) in kinds.iter().enumerate() {
			for b in kinds.iter().skip(i + 1) {
				assert_ne!(a.accent(), b.accent());
			}
		}
	}
}
