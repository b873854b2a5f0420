//! Geometry for the pointer-evading no button.
//!
//! The behavior itself runs in the browser (`static/dodging.js`); this
//! module owns the tuning constants injected into every question page and
//! a pure mirror of the reposition math. The script and the mirror share
//! the constants through [`script_constants`], so they cannot drift, and
//! the guarantees (the button always escapes the pointer, always stays on
//! screen, never covers the yes button) are pinned by the tests here.
//!
//! All coordinates are viewport-relative CSS pixels; positions are the
//! element's top-left corner, matching `getBoundingClientRect`.

/// Pointer distance below which the button flees.
pub const PROXIMITY_PX: f64 = 100.0;

/// Half-width of the wander box centered on the origin.
pub const BOUND_PX: f64 = 250.0;

/// Minimum gap kept between the button and the viewport edge.
pub const EDGE_MARGIN_PX: f64 = 5.0;

/// Padding around the yes button the no button may never enter.
pub const OVERLAP_PAD_PX: f64 = 10.0;

/// Wander-box shrink applied when snapping back after a click.
pub const SNAP_PAD_PX: f64 = 20.0;

/// Gap between the yes button's bottom edge and the no button's origin.
pub const ORIGIN_DROP_PX: f64 = 20.0;

/// Full spread (radians) of the random perturbation on the flee angle.
pub const ANGLE_JITTER_RAD: f64 = 0.8;

// Jump length range. The base exceeds the proximity radius so a single
// hop always puts the pointer back out of range.
const JUMP_BASE_PX: f64 = PROXIMITY_PX + 50.0;
const JUMP_SPREAD_PX: f64 = 50.0;

/// An element's bounding box, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// The `EVADE` constants block injected ahead of `static/dodging.js`.
pub fn script_constants() -> String {
    format!(
        "var EVADE = {{ proximity: {PROXIMITY_PX}, bound: {BOUND_PX}, \
         edgeMargin: {EDGE_MARGIN_PX}, overlapPad: {OVERLAP_PAD_PX}, \
         snapPad: {SNAP_PAD_PX}, originDrop: {ORIGIN_DROP_PX}, \
         angleJitter: {ANGLE_JITTER_RAD} }};"
    )
}

/// Compute the flee destination (new top-left) for a proximity trigger.
///
/// The button's center moves directly away from the pointer, with the
/// angle perturbed by up to ±[`ANGLE_JITTER_RAD`]/2 and a jump length
/// strictly greater than [`PROXIMITY_PX`]. A pointer exactly on the
/// center falls back to fleeing along +x.
///
/// `angle_roll` and `jump_roll` are uniform samples in `[0, 1)`; the
/// browser draws them from `Math.random()`.
pub fn flee(
    no: &Rect,
    pointer: (f64, f64),
    origin: (f64, f64),
    yes: &Rect,
    viewport: &Viewport,
    angle_roll: f64,
    jump_roll: f64,
) -> (f64, f64) {
    let (cx, cy) = no.center();
    let mut dx = cx - pointer.0;
    let dy = cy - pointer.1;
    if dx == 0.0 && dy == 0.0 {
        dx = 1.0;
    }
    let angle = dy.atan2(dx) + (angle_roll - 0.5) * ANGLE_JITTER_RAD;
    let jump = JUMP_BASE_PX + jump_roll * JUMP_SPREAD_PX;
    let x = cx + angle.cos() * jump - no.width / 2.0;
    let y = cy + angle.sin() * jump - no.height / 2.0;
    clamp_position(x, y, no, origin, yes, viewport, 0.0)
}

/// Compute the snap destination after a click or tap: half-way toward the
/// point opposite the origin. Deterministic, and clamped with an extra
/// [`SNAP_PAD_PX`] inside the wander box.
pub fn snap_opposite(
    no: &Rect,
    origin: (f64, f64),
    yes: &Rect,
    viewport: &Viewport,
) -> (f64, f64) {
    let x = origin.0 - (no.left - origin.0) / 2.0;
    let y = origin.1 - (no.top - origin.1) / 2.0;
    clamp_position(x, y, no, origin, yes, viewport, SNAP_PAD_PX)
}

/// Clamp a candidate position into the wander box, then the viewport,
/// then out of the yes button's padded box.
fn clamp_position(
    x: f64,
    y: f64,
    no: &Rect,
    origin: (f64, f64),
    yes: &Rect,
    viewport: &Viewport,
    pad: f64,
) -> (f64, f64) {
    let mut x = x.clamp(origin.0 - BOUND_PX + pad, origin.0 + BOUND_PX - pad);
    let mut y = y.clamp(origin.1 - BOUND_PX + pad, origin.1 + BOUND_PX - pad);
    x = x.clamp(EDGE_MARGIN_PX, viewport.width - no.width - EDGE_MARGIN_PX);
    y = y.clamp(EDGE_MARGIN_PX, viewport.height - no.height - EDGE_MARGIN_PX);
    let overlaps = x < yes.right() + OVERLAP_PAD_PX
        && x + no.width > yes.left - OVERLAP_PAD_PX
        && y < yes.bottom() + OVERLAP_PAD_PX
        && y + no.height > yes.top - OVERLAP_PAD_PX;
    if overlaps {
        y = yes.bottom() + ORIGIN_DROP_PX;
    }
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const VIEWPORT: Viewport = Viewport {
        width: 1920.0,
        height: 1080.0,
    };

    // Yes button tucked in the top-left corner, far from the wander box.
    const YES_FAR: Rect = Rect {
        left: 10.0,
        top: 10.0,
        width: 100.0,
        height: 40.0,
    };

    fn no_at(left: f64, top: f64) -> Rect {
        Rect {
            left,
            top,
            width: 120.0,
            height: 48.0,
        }
    }

    fn dist(a: (f64, f64), b: (f64, f64)) -> f64 {
        ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
    }

    #[test]
    fn flee_always_escapes_pointer_and_stays_on_screen() {
        let mut rng = rand::rng();
        let origin = (900.0, 516.0);
        let no = no_at(origin.0, origin.1);
        let center = no.center();

        for _ in 0..1000 {
            // Random trigger position inside the proximity radius.
            let theta = rng.random_range(0.0..std::f64::consts::TAU);
            let r = rng.random_range(0.0..PROXIMITY_PX);
            let pointer = (center.0 + r * theta.cos(), center.1 + r * theta.sin());

            let (x, y) = flee(
                &no,
                pointer,
                origin,
                &YES_FAR,
                &VIEWPORT,
                rng.random_range(0.0..1.0),
                rng.random_range(0.0..1.0),
            );
            let moved = no_at(x, y);

            assert!(
                dist(moved.center(), pointer) > PROXIMITY_PX,
                "pointer {pointer:?} still within proximity of {:?}",
                moved.center()
            );
            assert!(x >= EDGE_MARGIN_PX && x <= VIEWPORT.width - no.width - EDGE_MARGIN_PX);
            assert!(y >= EDGE_MARGIN_PX && y <= VIEWPORT.height - no.height - EDGE_MARGIN_PX);
            assert!(x >= origin.0 - BOUND_PX && x <= origin.0 + BOUND_PX);
            assert!(y >= origin.1 - BOUND_PX && y <= origin.1 + BOUND_PX);
        }
    }

    #[test]
    fn pointer_on_center_flees_along_positive_x() {
        let origin = (900.0, 516.0);
        let no = no_at(origin.0, origin.1);
        let center = no.center();

        // angle_roll 0.5 → no jitter; jump_roll 0 → minimum jump.
        let (x, y) = flee(&no, center, origin, &YES_FAR, &VIEWPORT, 0.5, 0.0);
        let moved = no_at(x, y);

        assert!((moved.center().0 - (center.0 + JUMP_BASE_PX)).abs() < 1e-9);
        assert!((moved.center().1 - center.1).abs() < 1e-9);
    }

    #[test]
    fn flee_is_clamped_to_the_wander_box() {
        let origin = (500.0, 400.0);
        // Button already at the right edge of the wander box.
        let no = no_at(origin.0 + 200.0, origin.1);
        let center = no.center();
        let pointer = (center.0 - 80.0, center.1);

        let (x, _) = flee(&no, pointer, origin, &YES_FAR, &VIEWPORT, 0.5, 0.0);
        assert_eq!(x, origin.0 + BOUND_PX);
    }

    #[test]
    fn flee_is_clamped_to_the_viewport() {
        let viewport = Viewport {
            width: 1000.0,
            height: 600.0,
        };
        let origin = (900.0, 300.0);
        let no = no_at(origin.0, origin.1);
        let center = no.center();
        let pointer = (center.0 - 80.0, center.1);

        let (x, y) = flee(&no, pointer, origin, &YES_FAR, &viewport, 0.5, 0.0);
        assert_eq!(x, viewport.width - no.width - EDGE_MARGIN_PX);
        assert!((y - no.top).abs() < 1e-9);
    }

    #[test]
    fn landing_on_the_yes_button_is_forced_below_it() {
        let yes = Rect {
            left: 940.0,
            top: 60.0,
            width: 100.0,
            height: 120.0,
        };
        let origin = (950.0, yes.bottom() + ORIGIN_DROP_PX);
        let no = no_at(origin.0, origin.1);
        let center = no.center();
        // Pointer below the button so it flees straight up into the yes box.
        let pointer = (center.0, center.1 + 80.0);

        let (x, y) = flee(&no, pointer, origin, &yes, &VIEWPORT, 0.5, 0.0);
        assert!((x - origin.0).abs() < 1e-9);
        assert_eq!(y, yes.bottom() + ORIGIN_DROP_PX);
    }

    #[test]
    fn snap_opposite_halves_the_origin_offset() {
        let origin = (500.0, 400.0);
        let no = no_at(origin.0 + 100.0, origin.1 + 80.0);

        let (x, y) = snap_opposite(&no, origin, &YES_FAR, &VIEWPORT);
        assert_eq!((x, y), (450.0, 360.0));
    }

    #[test]
    fn snap_opposite_respects_the_viewport_edge() {
        let viewport = Viewport {
            width: 800.0,
            height: 600.0,
        };
        let origin = (20.0, 300.0);
        let no = no_at(origin.0 + 240.0, origin.1);

        // Target would be x = 20 - 120 = -100; the edge margin wins.
        let (x, y) = snap_opposite(&no, origin, &YES_FAR, &viewport);
        assert_eq!(x, EDGE_MARGIN_PX);
        assert_eq!(y, origin.1);
    }

    #[test]
    fn script_constants_carry_the_tuning_values() {
        let block = script_constants();
        assert!(block.starts_with("var EVADE = {"));
        assert!(block.contains("proximity: 100"));
        assert!(block.contains("bound: 250"));
        assert!(block.contains("angleJitter: 0.8"));
    }
}
