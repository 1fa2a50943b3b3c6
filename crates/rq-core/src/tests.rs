//! Unit tests for rq-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(EdgeId(0) < EdgeId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod point {
    use crate::Point;

    #[test]
    fn euclidean_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn bearing_cardinal_directions() {
        let o = Point::new(0.0, 0.0);
        let close = |got: f64, want: f64| (got - want).abs() < 1e-9;
        assert!(close(o.bearing_deg(Point::new(10.0, 0.0)), 0.0)); // east
        assert!(close(o.bearing_deg(Point::new(0.0, 10.0)), 90.0)); // north
        assert!(close(o.bearing_deg(Point::new(-10.0, 0.0)), 180.0)); // west
        assert!(close(o.bearing_deg(Point::new(0.0, -10.0)), -90.0)); // south
    }

    #[test]
    fn bearing_quadrants() {
        let o = Point::new(0.0, 0.0);
        let ne = o.bearing_deg(Point::new(1.0, 1.0));
        let sw = o.bearing_deg(Point::new(-1.0, -1.0));
        assert!((ne - 45.0).abs() < 1e-12);
        assert!((sw + 135.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod rng {
    use crate::TrainRng;

    #[test]
    fn same_seed_same_stream_is_reproducible() {
        let mut a = TrainRng::new(42, 0);
        let mut b = TrainRng::new(42, 0);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0u32..1000), b.gen_range(0u32..1000));
        }
    }

    #[test]
    fn streams_are_independent() {
        let mut a = TrainRng::new(42, 0);
        let mut b = TrainRng::new(42, 1);
        let draws_a: Vec<u32> = (0..16).map(|_| a.gen_range(0..1000)).collect();
        let draws_b: Vec<u32> = (0..16).map(|_| b.gen_range(0..1000)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = TrainRng::new(1, 0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
