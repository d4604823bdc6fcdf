//! Routed edge geometry.

use indexmap::IndexMap;
use serde::Serialize;

use meshwork_core::geometry::Point;

use crate::structure::Handle;

/// The drawn shape of one edge, split at its midpoint.
///
/// `side1` runs from the edge's first node to the midpoint and `side2` from
/// its second node to the midpoint. Both lists end with the midpoint, so each
/// half can be styled on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutedEdge {
    side1: Vec<Point>,
    side2: Vec<Point>,
    midpoint: Point,
}

impl RoutedEdge {
    /// A straight edge split at the midpoint of its endpoints.
    pub(super) fn straight(start1: Point, start2: Point) -> Self {
        let midpoint = start1.midpoint(start2);
        Self {
            side1: vec![start1, midpoint],
            side2: vec![start2, midpoint],
            midpoint,
        }
    }

    /// An edge bent through one fork point on each side.
    pub(super) fn forked(
        start1: Point,
        fork1: Point,
        start2: Point,
        fork2: Point,
        midpoint: Point,
    ) -> Self {
        Self {
            side1: vec![start1, fork1, midpoint],
            side2: vec![start2, fork2, midpoint],
            midpoint,
        }
    }

    /// Exchanges the two sides, for an edge stored against its bundle's orientation.
    pub(super) fn swap_sides(mut self) -> Self {
        std::mem::swap(&mut self.side1, &mut self.side2);
        self
    }

    /// Points from the first node to the midpoint
    pub fn side1(&self) -> &[Point] {
        &self.side1
    }

    /// Points from the second node to the midpoint
    pub fn side2(&self) -> &[Point] {
        &self.side2
    }

    /// Seam point shared by both sides
    pub fn midpoint(&self) -> Point {
        self.midpoint
    }

    /// The point following the first node, which gives the edge's departure direction there
    pub fn after_start1(&self) -> Point {
        self.side1[1]
    }

    /// The point following the second node
    pub fn after_start2(&self) -> Point {
        self.side2[1]
    }

    /// The whole edge as one polyline from the first node to the second.
    pub fn polyline(&self) -> Vec<Point> {
        let mut points = self.side1.clone();
        points.extend(self.side2.iter().rev().skip(1));
        points
    }
}

/// Routed edges keyed by edge handle, in edge insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Routes<E: Handle> {
    edges: IndexMap<E, RoutedEdge>,
}

impl<E: Handle> Routes<E> {
    pub(super) fn new(edges: IndexMap<E, RoutedEdge>) -> Self {
        Self { edges }
    }

    /// Route of `edge`, if it was part of the routed graph.
    pub fn get(&self, edge: E) -> Option<&RoutedEdge> {
        self.edges.get(&edge)
    }

    /// Iterates over the routes in edge insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (E, &RoutedEdge)> + '_ {
        self.edges.iter().map(|(edge, route)| (*edge, route))
    }

    /// Number of routed edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if no edge was routed
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Consumes the routes, returning the underlying map.
    pub fn into_inner(self) -> IndexMap<E, RoutedEdge> {
        self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_edge_meets_at_midpoint() {
        let route = RoutedEdge::straight(Point::new(0.0, 0.0), Point::new(2.0, 0.0));

        assert_eq!(route.midpoint(), Point::new(1.0, 0.0));
        assert_eq!(route.side1(), &[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert_eq!(route.side2(), &[Point::new(2.0, 0.0), Point::new(1.0, 0.0)]);
        assert_eq!(route.after_start1(), route.midpoint());
    }

    #[test]
    fn test_swap_sides_keeps_midpoint() {
        let route = RoutedEdge::forked(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(4.0, 0.0),
            Point::new(3.0, 1.0),
            Point::new(2.0, 1.0),
        )
        .swap_sides();

        assert_eq!(route.side1()[0], Point::new(4.0, 0.0));
        assert_eq!(route.after_start2(), Point::new(1.0, 1.0));
        assert_eq!(route.midpoint(), Point::new(2.0, 1.0));
    }

    #[test]
    fn test_polyline_joins_sides_once_at_midpoint() {
        let route = RoutedEdge::forked(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(4.0, 0.0),
            Point::new(3.0, 1.0),
            Point::new(2.0, 1.0),
        );

        assert_eq!(
            route.polyline(),
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 1.0),
                Point::new(3.0, 1.0),
                Point::new(4.0, 0.0),
            ]
        );
    }
}
