/// Default distance an edge travels away from its anchor before the first
/// turn, in world units.
pub const FIRST_TURN_OFFSET: f64 = 24.0;
/// Corner rounding radius, clamped to half the shorter adjacent leg.
pub const CORNER_RADIUS: f64 = 8.0;

const DETOUR: f64 = 40.0;
const EPS: f64 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
	Top,
	Bottom,
	Left,
	Right,
}

impl Side {
	/// Outward unit direction from a card boundary.
	pub fn direction(self) -> (f64, f64) {
		match self {
			Side::Top => (0.0, -1.0),
			Side::Bottom => (0.0, 1.0),
			Side::Left => (-1.0, 0.0),
			Side::Right => (1.0, 0.0),
		}
	}
}

/// Attachment point on a card boundary. The top anchor is the sink for
/// incoming edges, the bottom anchor the source for outgoing ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
	pub x: f64,
	pub y: f64,
	pub side: Side,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Stroke command replayed by the canvas painter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
	MoveTo(Point),
	LineTo(Point),
	/// Quadratic corner curve; the control point is the original corner.
	Quad { ctrl: Point, to: Point },
}

fn push_point(points: &mut Vec<Point>, p: Point) {
	if let Some(last) = points.last() {
		if (last.x - p.x).abs() < EPS && (last.y - p.y).abs() < EPS {
			return;
		}
	}
	points.push(p);
}

/// Drop interior points that sit on the segment between their neighbours.
fn coalesce(points: Vec<Point>) -> Vec<Point> {
	let mut out: Vec<Point> = Vec::with_capacity(points.len());
	for p in points {
		if out.len() >= 2 {
			let a = out[out.len() - 2];
			let b = out[out.len() - 1];
			let collinear_x = (a.x - b.x).abs() < EPS && (b.x - p.x).abs() < EPS;
			let collinear_y = (a.y - b.y).abs() < EPS && (b.y - p.y).abs() < EPS;
			if collinear_x || collinear_y {
				out.pop();
			}
		}
		push_point(&mut out, p);
	}
	out
}

/// Orthogonal route between two anchors. Each anchor's first leg runs along
/// its side's outward direction for `offset` before any turn; the legs in
/// between are axis-aligned. Targets that lie behind the source get a detour
/// around the midpoint between the two cards.
pub fn route(from: Anchor, to: Anchor, offset: f64) -> Vec<Point> {
	let start = Point { x: from.x, y: from.y };
	let end = Point { x: to.x, y: to.y };
	let (fdx, fdy) = from.side.direction();
	let (tdx, tdy) = to.side.direction();
	let exit = Point {
		x: start.x + fdx * offset,
		y: start.y + fdy * offset,
	};
	let entry = Point {
		x: end.x + tdx * offset,
		y: end.y + tdy * offset,
	};

	let mut points = vec![start, exit];

	// Vertical-to-vertical is the only pairing the card anchors produce;
	// other pairings take the generic elbow below.
	match (from.side, to.side) {
		(Side::Bottom, Side::Top) | (Side::Top, Side::Bottom) => {
			let forward = match from.side {
				Side::Bottom => entry.y >= exit.y,
				_ => entry.y <= exit.y,
			};
			if forward {
				let mid_y = (exit.y + entry.y) / 2.0;
				push_point(&mut points, Point { x: exit.x, y: mid_y });
				push_point(&mut points, Point { x: entry.x, y: mid_y });
			} else {
				// Target behind the source: detour sideways around both cards.
				let mid_x = if (end.x - start.x).abs() > DETOUR * 2.0 {
					(exit.x + entry.x) / 2.0
				} else {
					exit.x.max(entry.x) + DETOUR
				};
				push_point(&mut points, Point { x: mid_x, y: exit.y });
				push_point(&mut points, Point { x: mid_x, y: entry.y });
			}
		}
		_ => {
			push_point(&mut points, Point { x: entry.x, y: exit.y });
		}
	}

	push_point(&mut points, entry);
	push_point(&mut points, end);
	coalesce(points)
}

/// Turn an orthogonal polyline into stroke commands with rounded interior
/// corners. The curve control point is the corner itself; the radius shrinks
/// to half the shorter adjacent leg when the legs are tight.
pub fn with_rounded_corners(points: &[Point], radius: f64) -> Vec<PathCmd> {
	let mut cmds = Vec::new();
	let Some(first) = points.first() else {
		return cmds;
	};
	cmds.push(PathCmd::MoveTo(*first));

	for i in 1..points.len() {
		let curr = points[i];
		if i + 1 >= points.len() {
			cmds.push(PathCmd::LineTo(curr));
			break;
		}
		let prev = points[i - 1];
		let next = points[i + 1];
		let leg_in = (curr.x - prev.x).abs() + (curr.y - prev.y).abs();
		let leg_out = (next.x - curr.x).abs() + (next.y - curr.y).abs();
		let r = radius.min(leg_in / 2.0).min(leg_out / 2.0);
		if r < EPS {
			cmds.push(PathCmd::LineTo(curr));
			continue;
		}

		let before = shift_toward(curr, prev, r);
		let after = shift_toward(curr, next, r);
		cmds.push(PathCmd::LineTo(before));
		cmds.push(PathCmd::Quad {
			ctrl: curr,
			to: after,
		});
	}
	cmds
}

fn shift_toward(from: Point, toward: Point, dist: f64) -> Point {
	let (dx, dy) = (toward.x - from.x, toward.y - from.y);
	let len = (dx * dx + dy * dy).sqrt();
	if len < EPS {
		return from;
	}
	Point {
		x: from.x + dx / len * dist,
		y: from.y + dy / len * dist,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_orthogonal(points: &[Point]) {
		for pair in points.windows(2) {
			let same_x = (pair[0].x - pair[1].x).abs() < EPS;
			let same_y = (pair[0].y - pair[1].y).abs() < EPS;
			assert!(
				same_x || same_y,
				"segment {:?} -> {:?} is not axis-aligned",
				pair[0],
				pair[1]
			);
		}
	}

	#[test]
	fn forward_route_is_orthogonal_with_offset_first_leg() {
		let from = Anchor {
			x: 100.0,
			y: 200.0,
			side: Side::Bottom,
		};
		let to = Anchor {
			x: 300.0,
			y: 400.0,
			side: Side::Top,
		};
		let points = route(from, to, FIRST_TURN_OFFSET);
		assert_orthogonal(&points);
		assert_eq!(points[0], Point { x: 100.0, y: 200.0 });
		assert_eq!(*points.last().unwrap(), Point { x: 300.0, y: 400.0 });
		// first turn stays on the exit axis and never before the offset
		assert_eq!(points[1].x, 100.0);
		assert!(points[1].y >= 200.0 + FIRST_TURN_OFFSET);
	}

	#[test]
	fn backward_route_detours_and_stays_orthogonal() {
		let from = Anchor {
			x: 100.0,
			y: 400.0,
			side: Side::Bottom,
		};
		let to = Anchor {
			x: 120.0,
			y: 100.0,
			side: Side::Top,
		};
		let points = route(from, to, FIRST_TURN_OFFSET);
		assert_orthogonal(&points);
		assert_eq!(points[0], Point { x: 100.0, y: 400.0 });
		assert_eq!(*points.last().unwrap(), Point { x: 120.0, y: 100.0 });
		// still exits downward before turning back up
		assert_eq!(points[1].y, 400.0 + FIRST_TURN_OFFSET);
	}

	#[test]
	fn straight_drop_coalesces_to_a_single_segment() {
		let from = Anchor {
			x: 50.0,
			y: 0.0,
			side: Side::Bottom,
		};
		let to = Anchor {
			x: 50.0,
			y: 300.0,
			side: Side::Top,
		};
		let points = route(from, to, FIRST_TURN_OFFSET);
		assert_eq!(points.len(), 2);
	}

	#[test]
	fn corners_become_quadratic_commands() {
		let points = vec![
			Point { x: 0.0, y: 0.0 },
			Point { x: 0.0, y: 100.0 },
			Point { x: 100.0, y: 100.0 },
		];
		let cmds = with_rounded_corners(&points, CORNER_RADIUS);
		assert_eq!(cmds[0], PathCmd::MoveTo(Point { x: 0.0, y: 0.0 }));
		assert_eq!(
			cmds[1],
			PathCmd::LineTo(Point {
				x: 0.0,
				y: 100.0 - CORNER_RADIUS
			})
		);
		match cmds[2] {
			PathCmd::Quad { ctrl, to } => {
				assert_eq!(ctrl, Point { x: 0.0, y: 100.0 });
				assert_eq!(to, Point { x: CORNER_RADIUS, y: 100.0 });
			}
			other => panic!("expected corner curve, got {:?}", other),
		}
		assert_eq!(
			*cmds.last().unwrap(),
			PathCmd::LineTo(Point { x: 100.0, y: 100.0 })
		);
	}

	#[test]
	fn corner_radius_clamps_to_short_legs() {
		let points = vec![
			Point { x: 0.0, y: 0.0 },
			Point { x: 0.0, y: 6.0 },
			Point { x: 100.0, y: 6.0 },
		];
		let cmds = with_rounded_corners(&points, CORNER_RADIUS);
		match (cmds[1], cmds[2]) {
			(PathCmd::LineTo(before), PathCmd::Quad { to, .. }) => {
				assert_eq!(before, Point { x: 0.0, y: 3.0 });
				assert_eq!(to, Point { x: 3.0, y: 6.0 });
			}
			other => panic!("unexpected commands {:?}", other),
		}
	}

	#[test]
	fn empty_and_two_point_inputs_round_trip() {
		assert!(with_rounded_corners(&[], CORNER_RADIUS).is_empty());
		let line = vec![Point { x: 0.0, y: 0.0 }, Point { x: 10.0, y: 0.0 }];
		let cmds = with_rounded_corners(&line, CORNER_RADIUS);
		assert_eq!(cmds.len(), 2);
		assert!(matches!(cmds[1], PathCmd::LineTo(_)));
	}
}
