//! Placement and geometry of self-loops.
//!
//! The other edges at a node split the circle around it into angular gaps.
//! Loops go into those gaps when they fit and are spread evenly around the
//! node when they do not.

use std::f32::consts::TAU;

use meshwork_core::geometry::{Point, normalize_angle};

use crate::routing::{RouterConfig, route::RoutedEdge};

/// Extra room a loop needs on top of its aperture to count as fitting a gap.
const LOOP_MARGIN: f32 = 1.2;

/// Outcome of [`place_loops`]: one angle per loop, tagged with how it was chosen.
///
/// Angles are in radians, in `[0, 2π)`, and are listed in the order the loops
/// should receive them.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopPlacement {
    /// Each loop bisects its own gap, widest gaps first.
    OneLoopPerGap(Vec<f32>),
    /// Gaps were filled widest first with as many loops as each could hold,
    /// spaced evenly inside the gap.
    PackedLoopsPerGap(Vec<f32>),
    /// Loops are spread evenly around the whole circle, ignoring other edges.
    EvenSplitFallback(Vec<f32>),
}

impl LoopPlacement {
    /// The chosen angles, whatever the case
    pub fn angles(&self) -> &[f32] {
        match self {
            Self::OneLoopPerGap(angles)
            | Self::PackedLoopsPerGap(angles)
            | Self::EvenSplitFallback(angles) => angles,
        }
    }

    /// Short name of the case, for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Self::OneLoopPerGap(_) => "one_loop_per_gap",
            Self::PackedLoopsPerGap(_) => "packed_loops_per_gap",
            Self::EvenSplitFallback(_) => "even_split_fallback",
        }
    }
}

/// Angular interval between two adjacent edges.
#[derive(Debug, Clone, Copy)]
struct Gap {
    start: f32,
    width: f32,
}

impl Gap {
    fn bisector(self) -> f32 {
        normalize_angle(self.start + self.width / 2.0)
    }

    /// Number of loops that fit in the gap when they share it
    fn capacity(self, footprint: f32) -> usize {
        (self.width / footprint).floor() as usize
    }
}

/// Chooses the angles of `loop_count` self-loops around a node.
///
/// `edge_angles` are the departure angles, in radians, of the node's other
/// edges; `loop_aperture` is the angle one loop spans. The cases are tried in
/// order:
///
/// 1. if there are at least as many gaps wider than `1.2 × loop_aperture` as
///    there are loops, each loop bisects one of the widest such gaps;
/// 2. if the gaps together can hold every loop, they are packed widest gap
///    first with equal spacing around each loop;
/// 3. otherwise the loops are spread every `2π / loop_count`, starting at
///    the bisector of the widest gap, or at angle 0 when the node has no
///    other edges.
///
/// # Examples
///
/// ```
/// use std::f32::consts::{FRAC_PI_2, PI};
/// use meshwork::routing::{LoopPlacement, place_loops};
///
/// let placement = place_loops(&[0.0, PI], 1, 60f32.to_radians());
/// assert!(matches!(placement, LoopPlacement::OneLoopPerGap(_)));
/// assert!((placement.angles()[0] - FRAC_PI_2).abs() < 1e-5);
/// ```
pub fn place_loops(edge_angles: &[f32], loop_count: usize, loop_aperture: f32) -> LoopPlacement {
    let gaps = gaps_widest_first(edge_angles);
    let Some(widest) = gaps.first().copied() else {
        return LoopPlacement::EvenSplitFallback(even_split(0.0, loop_count));
    };

    let footprint = loop_aperture * LOOP_MARGIN;
    let separated: Vec<Gap> = gaps
        .iter()
        .copied()
        .filter(|gap| gap.width > footprint)
        .collect();
    if loop_count <= separated.len() {
        return LoopPlacement::OneLoopPerGap(
            separated
                .iter()
                .take(loop_count)
                .map(|gap| gap.bisector())
                .collect(),
        );
    }

    let total_capacity: usize = gaps.iter().map(|gap| gap.capacity(footprint)).sum();
    if loop_count <= total_capacity {
        return LoopPlacement::PackedLoopsPerGap(pack(&gaps, loop_count, loop_aperture, footprint));
    }

    LoopPlacement::EvenSplitFallback(even_split(widest.bisector(), loop_count))
}

/// Gaps between consecutive edge angles, sorted by decreasing width.
///
/// The sort is stable, so equal gaps keep their counter-clockwise order
/// starting from the smallest edge angle.
fn gaps_widest_first(edge_angles: &[f32]) -> Vec<Gap> {
    let mut angles: Vec<f32> = edge_angles.iter().copied().map(normalize_angle).collect();
    angles.sort_by(f32::total_cmp);
    let Some(&first) = angles.first() else {
        return Vec::new();
    };
    angles.push(first + TAU);

    let mut gaps: Vec<Gap> = angles
        .windows(2)
        .map(|pair| Gap {
            start: pair[0],
            width: pair[1] - pair[0],
        })
        .collect();
    gaps.sort_by(|a, b| b.width.total_cmp(&a.width));
    gaps
}

fn pack(gaps: &[Gap], loop_count: usize, loop_aperture: f32, footprint: f32) -> Vec<f32> {
    let mut angles = Vec::with_capacity(loop_count);
    let mut remaining = loop_count;

    for gap in gaps {
        if remaining == 0 {
            break;
        }
        let count = gap.capacity(footprint).min(remaining);
        if count == 0 {
            continue;
        }
        let extra_space = gap.width - loop_aperture * count as f32;
        let intra_space = extra_space / (count + 1) as f32;
        angles.extend((0..count).map(|j| {
            normalize_angle(
                gap.start
                    + intra_space * (j + 1) as f32
                    + loop_aperture * j as f32
                    + loop_aperture / 2.0,
            )
        }));
        remaining -= count;
    }
    angles
}

fn even_split(start: f32, count: usize) -> Vec<f32> {
    (0..count)
        .map(|i| normalize_angle(start + TAU * i as f32 / count as f32))
        .collect()
}

/// Routes a loop at `node` pointing toward `angle`.
///
/// Both sides leave the node through fork points `fork_length` away at
/// `angle ± loop_aperture / 2` and meet at a midpoint `loop_distance` away
/// along `angle`.
pub(super) fn route_loop(node: Point, angle: f32, config: &RouterConfig) -> RoutedEdge {
    let half_aperture = config.loop_aperture() / 2.0;
    let fork1 = node.add_point(Point::from_polar(
        angle - half_aperture,
        config.fork_length(),
    ));
    let fork2 = node.add_point(Point::from_polar(
        angle + half_aperture,
        config.fork_length(),
    ));
    let midpoint = node.add_point(Point::from_polar(angle, config.loop_distance()));
    RoutedEdge::forked(node, fork1, node, fork2, midpoint)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use float_cmp::assert_approx_eq;

    use super::*;

    fn loop_aperture() -> f32 {
        60f32.to_radians()
    }

    fn degrees(angles: &[f32]) -> Vec<f32> {
        angles.iter().map(|angle| angle.to_degrees()).collect()
    }

    #[test]
    fn test_loop_bisects_widest_gap() {
        let placement = place_loops(&[0.0, PI], 1, loop_aperture());

        let LoopPlacement::OneLoopPerGap(angles) = &placement else {
            panic!("expected one loop per gap, got {placement:?}");
        };
        assert_eq!(angles.len(), 1);
        assert_approx_eq!(f32, angles[0], FRAC_PI_2, epsilon = 1e-5);
    }

    #[test]
    fn test_loops_prefer_widest_gaps() {
        // gaps of 45°, 135° and 180°
        let edges = [0.0, 45f32.to_radians(), 180f32.to_radians()];
        let placement = place_loops(&edges, 2, loop_aperture());

        assert!(matches!(placement, LoopPlacement::OneLoopPerGap(_)));
        let angles = degrees(placement.angles());
        assert_approx_eq!(f32, angles[0], 270.0, epsilon = 1e-3);
        assert_approx_eq!(f32, angles[1], 112.5, epsilon = 1e-3);
    }

    #[test]
    fn test_loops_packed_into_shared_gaps() {
        let placement = place_loops(&[0.0, PI], 3, loop_aperture());

        let LoopPlacement::PackedLoopsPerGap(angles) = &placement else {
            panic!("expected packed loops, got {placement:?}");
        };
        // first gap holds two loops with 20° around each, second holds one centred
        let angles = degrees(angles);
        assert_eq!(angles.len(), 3);
        assert_approx_eq!(f32, angles[0], 50.0, epsilon = 1e-3);
        assert_approx_eq!(f32, angles[1], 130.0, epsilon = 1e-3);
        assert_approx_eq!(f32, angles[2], 270.0, epsilon = 1e-3);
    }

    #[test]
    fn test_too_many_loops_fall_back_to_even_split() {
        let placement = place_loops(&[0.0, PI], 10, loop_aperture());

        let LoopPlacement::EvenSplitFallback(angles) = &placement else {
            panic!("expected even split, got {placement:?}");
        };
        assert_eq!(angles.len(), 10);
        assert_approx_eq!(f32, angles[0], FRAC_PI_2, epsilon = 1e-5);
        for (i, &angle) in angles.iter().enumerate() {
            let expected = normalize_angle(FRAC_PI_2 + (36.0 * i as f32).to_radians());
            assert_approx_eq!(f32, angle, expected, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_loops_without_other_edges_start_at_zero() {
        let placement = place_loops(&[], 3, loop_aperture());

        assert!(matches!(placement, LoopPlacement::EvenSplitFallback(_)));
        let angles = degrees(placement.angles());
        assert_approx_eq!(f32, angles[0], 0.0);
        assert_approx_eq!(f32, angles[1], 120.0, epsilon = 1e-3);
        assert_approx_eq!(f32, angles[2], 240.0, epsilon = 1e-3);
    }

    #[test]
    fn test_single_other_edge_leaves_whole_circle() {
        let placement = place_loops(&[FRAC_PI_2], 1, loop_aperture());

        assert!(matches!(placement, LoopPlacement::OneLoopPerGap(_)));
        assert_approx_eq!(f32, placement.angles()[0], 1.5 * PI, epsilon = 1e-5);
    }

    #[test]
    fn test_unnormalised_edge_angles() {
        let wrapped = place_loops(&[-FRAC_PI_2, 3.0 * PI], 1, loop_aperture());
        let plain = place_loops(&[1.5 * PI, PI], 1, loop_aperture());

        assert_approx_eq!(f32, wrapped.angles()[0], plain.angles()[0], epsilon = 1e-5);
    }

    #[test]
    fn test_zero_loops() {
        assert!(place_loops(&[0.0], 0, loop_aperture()).angles().is_empty());
        assert!(place_loops(&[], 0, loop_aperture()).angles().is_empty());
    }

    #[test]
    fn test_placement_names() {
        assert_eq!(
            LoopPlacement::EvenSplitFallback(Vec::new()).name(),
            "even_split_fallback"
        );
        assert_eq!(LoopPlacement::OneLoopPerGap(Vec::new()).name(), "one_loop_per_gap");
    }

    #[test]
    fn test_loop_route_geometry() {
        let config = RouterConfig::default();
        let node = Point::new(5.0, 5.0);
        let route = route_loop(node, 0.0, &config);

        assert_eq!(route.side1()[0], node);
        assert_eq!(route.side2()[0], node);
        assert_approx_eq!(f32, route.midpoint().x(), 125.0, epsilon = 1e-3);
        assert_approx_eq!(f32, route.midpoint().y(), 5.0, epsilon = 1e-3);

        // forks at ±30° and fork_length from the node
        assert_approx_eq!(f32, route.after_start1().distance(node), 80.0, epsilon = 1e-3);
        assert_approx_eq!(
            f32,
            node.angle_to(route.after_start1()),
            -30f32.to_radians(),
            epsilon = 1e-5
        );
        assert_approx_eq!(
            f32,
            node.angle_to(route.after_start2()),
            30f32.to_radians(),
            epsilon = 1e-5
        );
    }
}
