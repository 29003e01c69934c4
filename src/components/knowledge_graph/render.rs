use std::collections::HashMap;

use force_graph::DefaultNodeIdx;
use web_sys::CanvasRenderingContext2d;

use super::edge;
use super::node;
use super::path::{self, Anchor};
use super::state::KnowledgeGraphState;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &mut KnowledgeGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	let anchors = collect_anchors(state);
	draw_edges(state, ctx, &anchors);
	draw_cards(state, ctx);
	ctx.restore();
}

/// One pass over the layout to resolve every card's sink/source anchors at
/// its current position. Also warms the card cache for the frame.
fn collect_anchors(
	state: &mut KnowledgeGraphState,
) -> HashMap<DefaultNodeIdx, (Anchor, Anchor)> {
	let cards = &mut state.cards;
	let mut map = HashMap::new();
	state.graph.visit_nodes(|n| {
		let visual = cards.visual(n.index(), &n.data.user_data);
		map.insert(
			n.index(),
			node::anchors(n.x() as f64, n.y() as f64, visual),
		);
	});
	map
}

fn draw_edges(
	state: &KnowledgeGraphState,
	ctx: &CanvasRenderingContext2d,
	anchors: &HashMap<DefaultNodeIdx, (Anchor, Anchor)>,
) {
	let t = ease_out_cubic(state.hover.emphasis_t);
	let has_emphasis = state.has_active_emphasis();

	for edge_inst in &state.edges {
		let (Some(&(_, src_out)), Some(&(tgt_in, _))) =
			(anchors.get(&edge_inst.src), anchors.get(&edge_inst.tgt))
		else {
			continue;
		};

		let points = path::route(src_out, tgt_in, path::FIRST_TURN_OFFSET);
		let cmds = path::with_rounded_corners(&points, path::CORNER_RADIUS);
		let style = edge::resolve_style(&edge_inst.link);

		// hovered subgraph keeps full strength, the rest fades back
		let emphasized =
			state.is_emphasized(edge_inst.src) && state.is_emphasized(edge_inst.tgt);
		let alpha = if !has_emphasis || emphasized {
			1.0
		} else {
			1.0 - 0.75 * t
		};
		ctx.set_global_alpha(alpha);
		edge::draw_edge(ctx, &cmds, &style, state.flow_time, state.transform.k);
	}
	ctx.set_global_alpha(1.0);
}

fn draw_cards(state: &mut KnowledgeGraphState, ctx: &CanvasRenderingContext2d) {
	let KnowledgeGraphState {
		graph,
		cards,
		hover,
		flow_time,
		transform,
		..
	} = state;
	let t = ease_out_cubic(hover.emphasis_t);
	let has_emphasis = hover.node.is_some() || hover.prev_node.is_some();
	let pulse_t = *flow_time * 4.0;
	let k = transform.k;

	let emphasized = |idx: DefaultNodeIdx| {
		hover.node == Some(idx)
			|| hover.neighbors.contains(&idx)
			|| hover.prev_node == Some(idx)
			|| hover.prev_neighbors.contains(&idx)
	};
	let hovered = |idx: DefaultNodeIdx| hover.node == Some(idx) || hover.prev_node == Some(idx);

	graph.visit_nodes(|n| {
		let idx = n.index();
		if has_emphasis && emphasized(idx) {
			return;
		}
		let visual = cards.visual(idx, &n.data.user_data);
		let alpha = 1.0 - 0.7 * t;
		node::draw_card(ctx, visual, n.x() as f64, n.y() as f64, alpha, pulse_t);
	});

	if !has_emphasis {
		return;
	}

	graph.visit_nodes(|n| {
		let idx = n.index();
		if !emphasized(idx) {
			return;
		}
		let visual = cards.visual(idx, &n.data.user_data);
		let (x, y) = (n.x() as f64, n.y() as f64);
		node::draw_card(ctx, visual, x, y, 1.0, pulse_t);
		if hovered(idx) && t > 0.01 {
			node::draw_hover_ring(ctx, visual, x, y, t, k);
		}
	});
}
