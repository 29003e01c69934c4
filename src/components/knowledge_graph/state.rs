use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::card::{CardVisual, build_card};
use super::types::{GraphData, GraphLink, GraphNode, NodeKind};

/// Pixels of mouse travel before a press counts as a drag, not a click.
pub const CLICK_SLOP: f64 = 4.0;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub emphasis_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

/// Per-node memo of the built card visual, keyed by the attribute snapshot.
/// The builder reruns only when a node's attributes actually changed, so
/// steady-state frames do no string shaping.
#[derive(Default)]
pub struct CardCache {
	entries: HashMap<DefaultNodeIdx, (GraphNode, CardVisual)>,
	rebuilds: usize,
}

impl CardCache {
	pub fn visual(&mut self, idx: DefaultNodeIdx, node: &GraphNode) -> &CardVisual {
		match self.entries.entry(idx) {
			Entry::Occupied(mut slot) => {
				if slot.get().0 != *node {
					self.rebuilds += 1;
					slot.insert((node.clone(), build_card(node)));
				}
				&slot.into_mut().1
			}
			Entry::Vacant(slot) => {
				self.rebuilds += 1;
				&slot.insert((node.clone(), build_card(node))).1
			}
		}
	}

	pub fn rebuilds(&self) -> usize {
		self.rebuilds
	}
}

pub struct EdgeInstance {
	pub src: DefaultNodeIdx,
	pub tgt: DefaultNodeIdx,
	pub link: GraphLink,
}

pub struct KnowledgeGraphState {
	pub graph: ForceGraph<GraphNode, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub cards: CardCache,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	pub edges: Vec<EdgeInstance>,
}

impl KnowledgeGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 350.0,
			force_spring: 0.04,
			force_max: 120.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();

		for (i, node) in data.nodes.iter().enumerate() {
			// the focal intervention pins to the viewport center
			let focal = matches!(node.kind, NodeKind::Intervention { center: true, .. });
			let angle = (i as f64) * 2.0 * PI / data.nodes.len().max(1) as f64;
			let (x, y) = if focal {
				(0.0, 0.0)
			} else {
				((260.0 * angle.cos()) as f32, (220.0 * angle.sin()) as f32)
			};

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: focal,
				user_data: node.clone(),
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push(EdgeInstance {
					src,
					tgt,
					link: link.clone(),
				});
			}
		}

		Self {
			graph,
			edges,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			cards: CardCache::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Card-rect hit test in world space. Needs the cache because card
	/// dimensions depend on the built visual.
	pub fn node_at_position(&mut self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let cards = &mut self.cards;
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let visual = cards.visual(node.index(), &node.data.user_data);
			let (dx, dy) = (gx - node.x() as f64, gy - node.y() as f64);
			if dx.abs() <= visual.width / 2.0 && dy.abs() <= visual.height / 2.0 {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn toggle_select(&mut self, idx: DefaultNodeIdx) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.user_data.selected = !node.data.user_data.selected;
			}
		});
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for edge in &self.edges {
				if edge.src == idx {
					self.hover.neighbors.insert(edge.tgt);
				} else if edge.tgt == idx {
					self.hover.neighbors.insert(edge.src);
				}
			}
		}
	}

	pub fn is_emphasized(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_emphasis(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.emphasis_t += (target - self.hover.emphasis_t) * speed * dt as f64;
			}
		} else {
			self.hover.emphasis_t += (target - self.hover.emphasis_t) * speed * dt as f64;
			if self.hover.emphasis_t < 0.01 {
				self.hover.emphasis_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
