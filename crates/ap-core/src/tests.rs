//! Unit tests for ap-core primitives.

#[cfg(test)]
mod geo {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::Point2D;

    #[test]
    fn offset_polar_cardinal_directions() {
        let east = Point2D::ORIGIN.offset_polar(0.0, 2.0);
        assert!((east.x - 2.0).abs() < 1e-12 && east.y.abs() < 1e-12);

        let north = Point2D::ORIGIN.offset_polar(FRAC_PI_2, 1.0);
        assert!(north.x.abs() < 1e-12 && (north.y - 1.0).abs() < 1e-12);

        let west = Point2D::new(1.0, 1.0).offset_polar(PI, 1.0);
        assert!(west.x.abs() < 1e-12 && (west.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Point2D::new(-2.0, 1.0);
        let b = Point2D::new(4.0, -5.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point2D::new(1.0, -2.0));
    }

    #[test]
    fn display() {
        assert_eq!(Point2D::new(1.0, -0.5).to_string(), "(1.000, -0.500)");
    }
}

#[cfg(test)]
mod trajectory {
    use crate::{HomingVector, Point2D, Trajectory};

    #[test]
    fn from_points_rejects_empty() {
        assert!(Trajectory::from_points(vec![]).is_none());
        let t = Trajectory::from_points(vec![Point2D::ORIGIN]).unwrap();
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn first_and_last() {
        let mut t = Trajectory::at(Point2D::ORIGIN);
        assert_eq!(t.first(), t.last());
        t.push(Point2D::new(1.0, 2.0));
        assert_eq!(t.first(), Point2D::ORIGIN);
        assert_eq!(t.last(), Point2D::new(1.0, 2.0));
    }

    #[test]
    fn extend_keeps_join_point() {
        let mut a = Trajectory::at(Point2D::ORIGIN);
        a.push(Point2D::new(1.0, 0.0));
        let mut b = Trajectory::at(Point2D::new(1.0, 0.0));
        b.push(Point2D::ORIGIN);

        a.extend_from(&b);
        assert_eq!(a.len(), 4);
        assert_eq!(a.points()[1], a.points()[2]);
    }

    #[test]
    fn homing_vector_endpoints() {
        let mut t = Trajectory::at(Point2D::new(5.0, 5.0));
        t.push(Point2D::ORIGIN);
        let v = HomingVector::from_trajectory(t);
        assert_eq!(v.start(), Point2D::new(5.0, 5.0));
        assert_eq!(v.end(), Point2D::ORIGIN);
        assert_eq!(v.len(), 2);
    }
}

#[cfg(test)]
mod ids {
    use crate::{AgentId, AgentRole, Mode};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(2);
        assert_eq!(id.index(), 2);
        assert_eq!(AgentId::try_from(2usize).unwrap(), id);
    }

    #[test]
    fn labels() {
        assert_eq!(AgentRole::Scout.to_string(), "Scout");
        assert_eq!(AgentRole::Lost.to_string(), "Lost");
        assert_eq!(Mode::DirectNavigation.to_string(), "direct_navigation");
        assert_eq!(Mode::FallbackSearch.as_str(), "fallback_search");
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn defaults() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.steps, 150);
        assert_eq!(cfg.step_size, 1.0);
        assert_eq!(cfg.homing_samples, 50);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.round_trip_len(), 201);
    }

    #[test]
    fn non_finite_step_size_rejected() {
        let cfg = SimConfig { step_size: f64::NAN, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { step_size: f64::INFINITY, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn degenerate_counts_accepted() {
        let cfg = SimConfig { steps: 0, homing_samples: 0, ..SimConfig::seeded(1) };
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.round_trip_len(), 2);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(0));
        for _ in 0..100 {
            assert_eq!(a.heading(), b.heading());
        }
    }

    #[test]
    fn agent_streams_differ() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(2));
        let va: Vec<f64> = (0..10).map(|_| a.heading()).collect();
        let vb: Vec<f64> = (0..10).map(|_| b.heading()).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn heading_in_half_open_turn() {
        let mut rng = AgentRng::new(7, AgentId(1));
        for _ in 0..10_000 {
            let h = rng.heading();
            assert!((0.0..std::f64::consts::TAU).contains(&h), "got {h}");
        }
    }

    #[test]
    fn sim_rng_hands_out_agent_streams() {
        let sim = SimRng::new(99);
        assert_eq!(sim.seed(), 99);
        let mut from_sim = sim.agent(AgentId(1));
        let mut direct = AgentRng::new(99, AgentId(1));
        assert_eq!(from_sim.heading(), direct.heading());
    }

    #[test]
    fn resolve_prefers_explicit_seed() {
        assert_eq!(SimRng::resolve(Some(5)).seed(), 5);
    }
}
