//! Geometry of single and parallel edges.

use std::f32::consts::PI;

use meshwork_core::geometry::Point;

use crate::routing::{RouterConfig, route::RoutedEdge};

/// Routes `count` edges between `start1` and `start2`, in bundle order.
///
/// A single edge is straight. A bundle fans its edges across the fork
/// aperture, centred on the line between the nodes; with an odd count the
/// centre edge stays straight. Fork points sit `fork_length` away from their
/// node and each edge's midpoint is the midpoint of its two fork points.
pub(super) fn route_bundle(
    start1: Point,
    start2: Point,
    count: usize,
    config: &RouterConfig,
) -> Vec<RoutedEdge> {
    if count <= 1 {
        return (0..count)
            .map(|_| RoutedEdge::straight(start1, start2))
            .collect();
    }

    let angle = start1.angle_to(start2);
    let aperture = config.fork_aperture();
    let step = aperture / (count - 1) as f32;

    (0..count)
        .map(|i| {
            if 2 * i + 1 == count {
                return RoutedEdge::straight(start1, start2);
            }
            let alpha = -aperture / 2.0 + i as f32 * step;
            let fork1 = start1.add_point(Point::from_polar(angle - alpha, config.fork_length()));
            let fork2 =
                start2.add_point(Point::from_polar(angle + PI + alpha, config.fork_length()));
            RoutedEdge::forked(start1, fork1, start2, fork2, fork1.midpoint(fork2))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use float_cmp::{approx_eq, assert_approx_eq};

    use super::*;

    fn distance_from_x_axis(point: Point) -> f32 {
        point.y().abs()
    }

    #[test]
    fn test_single_edge_is_straight() {
        let routes = route_bundle(
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            1,
            &RouterConfig::default(),
        );

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].midpoint(), Point::new(1.0, 0.0));
        assert_eq!(routes[0].side1().last(), Some(&Point::new(1.0, 0.0)));
        assert_eq!(routes[0].side2().last(), Some(&Point::new(1.0, 0.0)));
    }

    #[test]
    fn test_empty_bundle() {
        let routes = route_bundle(Point::ZERO, Point::new(1.0, 0.0), 0, &RouterConfig::default());
        assert!(routes.is_empty());
    }

    #[test]
    fn test_three_parallel_edges_are_symmetric() {
        let start1 = Point::new(0.0, 0.0);
        let start2 = Point::new(400.0, 0.0);
        let routes = route_bundle(start1, start2, 3, &RouterConfig::default());

        assert_eq!(routes.len(), 3);

        // centre edge
        assert_eq!(routes[1].side1().len(), 2);
        assert_eq!(routes[1].midpoint(), Point::new(200.0, 0.0));

        // outer edges mirror each other about the centreline
        let (outer_a, outer_b) = (&routes[0], &routes[2]);
        assert_eq!(outer_a.side1().len(), 3);
        assert_eq!(outer_b.side1().len(), 3);
        assert_approx_eq!(
            f32,
            distance_from_x_axis(outer_a.after_start1()),
            distance_from_x_axis(outer_b.after_start1()),
            epsilon = 1e-3
        );
        assert_approx_eq!(
            f32,
            outer_a.after_start1().x(),
            outer_b.after_start1().x(),
            epsilon = 1e-3
        );
        assert!(outer_a.after_start1().y() * outer_b.after_start1().y() < 0.0);
        assert_approx_eq!(
            f32,
            outer_a.midpoint().y(),
            -outer_b.midpoint().y(),
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_fork_points_at_fork_length() {
        let config = RouterConfig::default();
        let start1 = Point::new(10.0, 20.0);
        let start2 = Point::new(-150.0, 300.0);
        let routes = route_bundle(start1, start2, 4, &config);

        for route in &routes {
            assert_approx_eq!(
                f32,
                route.after_start1().distance(start1),
                config.fork_length(),
                epsilon = 1e-3
            );
            assert_approx_eq!(
                f32,
                route.after_start2().distance(start2),
                config.fork_length(),
                epsilon = 1e-3
            );
            let fork_mid = route.after_start1().midpoint(route.after_start2());
            assert!(approx_eq!(f32, fork_mid.x(), route.midpoint().x(), epsilon = 1e-3));
            assert!(approx_eq!(f32, fork_mid.y(), route.midpoint().y(), epsilon = 1e-3));
        }
    }

    #[test]
    fn test_outer_forks_span_the_aperture() {
        let config = RouterConfig::default();
        let start1 = Point::ZERO;
        let start2 = Point::new(500.0, 0.0);
        let routes = route_bundle(start1, start2, 2, &config);

        let first = start1.angle_to(routes[0].after_start1());
        let last = start1.angle_to(routes[1].after_start1());
        assert_approx_eq!(f32, (first - last).abs(), config.fork_aperture(), epsilon = 1e-4);
        assert!(routes.iter().all(|route| route.side1().len() == 3));
    }
}
