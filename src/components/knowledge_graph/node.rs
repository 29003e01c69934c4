use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::card::CardVisual;
use super::edge::hex_with_alpha;
use super::path::{Anchor, Side};

const BODY_FILL: &str = "#16213e";
const BODY_RADIUS: f64 = 8.0;
const PAD: f64 = 8.0;
const HIGHLIGHT_RING: &str = "#ffe08a";

/// Edge attachment points for a card centered at (x, y): sink on top,
/// source at the bottom.
pub fn anchors(x: f64, y: f64, visual: &CardVisual) -> (Anchor, Anchor) {
	(
		Anchor {
			x,
			y: y - visual.height / 2.0,
			side: Side::Top,
		},
		Anchor {
			x,
			y: y + visual.height / 2.0,
			side: Side::Bottom,
		},
	)
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, left: f64, top: f64, w: f64, h: f64, r: f64) {
	let r = r.min(w / 2.0).min(h / 2.0);
	ctx.begin_path();
	ctx.move_to(left + r, top);
	ctx.line_to(left + w - r, top);
	ctx.quadratic_curve_to(left + w, top, left + w, top + r);
	ctx.line_to(left + w, top + h - r);
	ctx.quadratic_curve_to(left + w, top + h, left + w - r, top + h);
	ctx.line_to(left + r, top + h);
	ctx.quadratic_curve_to(left, top + h, left, top + h - r);
	ctx.line_to(left, top + r);
	ctx.quadratic_curve_to(left, top, left + r, top);
	ctx.close_path();
}

/// Paint one card at its layout position. `alpha` comes from the hover
/// dim/brighten pass, `pulse_t` from the frame clock (drives the highlight
/// ring only).
pub fn draw_card(
	ctx: &CanvasRenderingContext2d,
	visual: &CardVisual,
	x: f64,
	y: f64,
	alpha: f64,
	pulse_t: f64,
) {
	let (w, h) = (visual.width, visual.height);
	let (left, top) = (x - w / 2.0, y - h / 2.0);

	ctx.set_global_alpha(alpha);

	if visual.highlighted {
		let pulse = (pulse_t.sin() + 1.0) / 2.0;
		let grow = 3.0 + 4.0 * pulse;
		rounded_rect(
			ctx,
			left - grow,
			top - grow,
			w + grow * 2.0,
			h + grow * 2.0,
			BODY_RADIUS + grow,
		);
		ctx.set_stroke_style_str(&hex_with_alpha(HIGHLIGHT_RING, 0.3 + 0.4 * pulse));
		ctx.set_line_width(2.5);
		ctx.stroke();
	}

	rounded_rect(ctx, left, top, w, h, BODY_RADIUS);
	if visual.selected {
		ctx.set_shadow_blur(12.0);
		ctx.set_shadow_color(visual.accent);
	}
	ctx.set_fill_style_str(BODY_FILL);
	ctx.fill();
	ctx.set_shadow_blur(0.0);

	if visual.selected {
		ctx.set_stroke_style_str(visual.accent);
		ctx.set_line_width(2.5);
	} else {
		ctx.set_stroke_style_str(&hex_with_alpha(visual.accent, 0.45));
		ctx.set_line_width(1.0);
	}
	ctx.stroke();

	// header row: icon glyph plus variant name in the accent color
	ctx.set_fill_style_str(visual.accent);
	ctx.set_font("10px sans-serif");
	let _ = ctx.fill_text(visual.icon, left + PAD, top + 16.0);
	let _ = ctx.fill_text(visual.header, left + PAD + 16.0, top + 16.0);

	ctx.set_fill_style_str("white");
	ctx.set_font("12px sans-serif");
	let _ = ctx.fill_text(&visual.label, left + PAD, top + 36.0);

	ctx.set_font("9px sans-serif");
	for (i, badge) in visual.badges.iter().enumerate() {
		let badge_top = top + 44.0 + i as f64 * 18.0;
		rounded_rect(ctx, left + PAD, badge_top, w - PAD * 2.0, 14.0, 6.0);
		ctx.set_fill_style_str(&hex_with_alpha(visual.accent, 0.15));
		ctx.fill();
		ctx.set_fill_style_str("rgba(255, 255, 255, 0.85)");
		let _ = ctx.fill_text(&badge.text, left + PAD + 6.0, badge_top + 10.0);
	}

	// corner marker for the focal intervention of a query
	if visual.center {
		ctx.begin_path();
		let _ = ctx.arc(left + w - 2.0, top + 2.0, 5.0, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(visual.accent);
		ctx.fill();
		ctx.begin_path();
		let _ = ctx.arc(left + w - 2.0, top + 2.0, 2.0, 0.0, 2.0 * PI);
		ctx.set_fill_style_str("white");
		ctx.fill();
	}

	ctx.set_global_alpha(1.0);
}

/// White ring around the hovered card; width stays constant on screen.
pub fn draw_hover_ring(
	ctx: &CanvasRenderingContext2d,
	visual: &CardVisual,
	x: f64,
	y: f64,
	t: f64,
	k: f64,
) {
	let grow = 2.0;
	rounded_rect(
		ctx,
		x - visual.width / 2.0 - grow,
		y - visual.height / 2.0 - grow,
		visual.width + grow * 2.0,
		visual.height + grow * 2.0,
		BODY_RADIUS + grow,
	);
	ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.7 * t));
	ctx.set_line_width(1.5 / k);
	ctx.stroke();
}

#[cfg(test)]
mod tests {
	use super::*;
	use super::super::card::build_card;
	use super::super::types::{GraphNode, NodeKind};

	#[test]
	fn anchors_sit_on_the_card_boundary() {
		let visual = build_card(&GraphNode {
			id: "n".into(),
			label: "Hydrotherapy".into(),
			kind: NodeKind::Intervention {
				care_domain: Some("Water".into()),
				center: false,
			},
			highlighted: false,
			selected: false,
		});
		let (sink, source) = anchors(100.0, 200.0, &visual);
		assert_eq!(sink.side, Side::Top);
		assert_eq!(source.side, Side::Bottom);
		assert_eq!(sink.x, 100.0);
		assert_eq!(source.x, 100.0);
		assert_eq!(sink.y, 200.0 - visual.height / 2.0);
		assert_eq!(source.y, 200.0 + visual.height / 2.0);
	}
}
