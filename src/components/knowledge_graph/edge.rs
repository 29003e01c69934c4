use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::path::PathCmd;
use super::types::GraphLink;

pub const DEFAULT_COLOR: &str = "#64b4ff";

const BASE_WIDTH: f64 = 1.5;
const SELECTED_WIDTH: f64 = 2.5;
const GLOW_SCALE: f64 = 3.5;
const GLOW_ALPHA: f64 = 0.18;
const DASH: (f64, f64) = (8.0, 4.0);
const SELECTED_SHADOW: f64 = 8.0;

/// Resolved stroke styling for one edge; both passes share the hue.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
	pub primary: String,
	pub glow: String,
	pub width: f64,
	pub glow_width: f64,
	pub dash: Option<(f64, f64)>,
	pub shadow_blur: f64,
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
	let hex = color.strip_prefix('#')?;
	if hex.len() != 6 {
		return None;
	}
	let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
	let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
	let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
	Some((r, g, b))
}

/// Compose a `#rrggbb` color with an alpha. Malformed colors fall back to
/// the default edge hue instead of faulting.
pub fn hex_with_alpha(color: &str, alpha: f64) -> String {
	let (r, g, b) = parse_hex(color)
		.or_else(|| parse_hex(DEFAULT_COLOR))
		.unwrap_or((100, 180, 255));
	format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

pub fn resolve_style(link: &GraphLink) -> StrokeStyle {
	let color = link.color.as_deref().unwrap_or(DEFAULT_COLOR);
	let (width, alpha, shadow_blur) = if link.selected {
		(SELECTED_WIDTH, 0.95, SELECTED_SHADOW)
	} else {
		(BASE_WIDTH, 0.8, 0.0)
	};

	StrokeStyle {
		primary: hex_with_alpha(color, alpha),
		glow: hex_with_alpha(color, GLOW_ALPHA),
		width,
		glow_width: width * GLOW_SCALE,
		dash: link.dashed.then_some(DASH),
		shadow_blur,
	}
}

fn trace(ctx: &CanvasRenderingContext2d, cmds: &[PathCmd]) {
	ctx.begin_path();
	for cmd in cmds {
		match cmd {
			PathCmd::MoveTo(p) => ctx.move_to(p.x, p.y),
			PathCmd::LineTo(p) => ctx.line_to(p.x, p.y),
			PathCmd::Quad { ctrl, to } => {
				ctx.quadratic_curve_to(ctrl.x, ctrl.y, to.x, to.y)
			}
		}
	}
}

/// Stroke the routed path twice: glow first, then the primary stroke on top.
/// Widths are divided by the zoom factor so edges keep their screen weight.
pub fn draw_edge(
	ctx: &CanvasRenderingContext2d,
	cmds: &[PathCmd],
	style: &StrokeStyle,
	flow_time: f64,
	k: f64,
) {
	if cmds.is_empty() {
		return;
	}

	trace(ctx, cmds);
	ctx.set_stroke_style_str(&style.glow);
	ctx.set_line_width(style.glow_width / k);
	ctx.stroke();

	trace(ctx, cmds);
	ctx.set_stroke_style_str(&style.primary);
	ctx.set_line_width(style.width / k);
	if let Some((dash, gap)) = style.dash {
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(dash / k),
			&JsValue::from_f64(gap / k),
		));
		ctx.set_line_dash_offset(-(flow_time * 30.0) % ((dash + gap) / k));
	}
	if style.shadow_blur > 0.0 {
		ctx.set_shadow_blur(style.shadow_blur);
		ctx.set_shadow_color(&style.primary);
	}
	ctx.stroke();
	ctx.set_shadow_blur(0.0);
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}
