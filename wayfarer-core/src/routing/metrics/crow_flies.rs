use geo::HaversineDistance;

use super::Metric;
use crate::model::RoadNode;
use crate::Cost;

/// Straight-line travel-time lower bound.
///
/// Great-circle distance in meters divided by the maximum legal road
/// speed gives the fastest conceivable traversal in seconds, which is
/// admissible on any graph whose edge costs respect that speed limit.
pub struct AsTheCrowFlies {
    max_speed_ms: f64,
}

impl AsTheCrowFlies {
    pub fn new(max_speed_kmh: f64) -> Self {
        Self {
            max_speed_ms: kmh_to_ms(max_speed_kmh),
        }
    }
}

impl Metric for AsTheCrowFlies {
    fn distance(&self, a: &RoadNode, b: &RoadNode) -> Cost {
        a.point().haversine_distance(&b.point()) / self.max_speed_ms
    }
}

fn kmh_to_ms(kmh: f64) -> f64 {
    kmh / 3.6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_nodes_are_zero_seconds_apart() {
        let metric = AsTheCrowFlies::new(130.0);
        let node = RoadNode::new(1, 48.0, 7.8);
        assert_eq!(metric.distance(&node, &node), 0.0);
    }

    #[test]
    fn estimate_is_symmetric() {
        let metric = AsTheCrowFlies::new(130.0);
        let a = RoadNode::new(1, 48.00, 7.80);
        let b = RoadNode::new(2, 48.01, 7.85);
        let forward = metric.distance(&a, &b);
        let backward = metric.distance(&b, &a);
        assert!(forward > 0.0);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude_takes_about_51_minutes_at_130() {
        let metric = AsTheCrowFlies::new(130.0);
        let a = RoadNode::new(1, 48.0, 7.8);
        let b = RoadNode::new(2, 49.0, 7.8);
        // ~111 km at 130 km/h is a bit over 3000 seconds
        let seconds = metric.distance(&a, &b);
        assert!((2900.0..3300.0).contains(&seconds), "got {seconds}");
    }
}
