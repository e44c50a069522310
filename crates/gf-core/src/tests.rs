//! Unit tests for gf-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Cell, Frame, Grid};

    #[test]
    fn rejects_zero_dimensions() {
        assert!(Grid::new(0, 3, vec![]).is_err());
        assert!(Grid::new(3, 0, vec![]).is_err());
    }

    #[test]
    fn rejects_length_mismatch() {
        assert!(Grid::new(2, 2, vec![0; 3]).is_err());
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![vec![1, 2], vec![3]];
        assert!(Grid::from_rows(&rows).is_err());
    }

    #[test]
    fn from_rows_is_row_major() {
        let grid = Grid::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(grid.count(Cell::new(0, 0)), 1);
        assert_eq!(grid.count(Cell::new(0, 1)), 2);
        assert_eq!(grid.count(Cell::new(1, 0)), 3);
        assert_eq!(grid.count(Cell::new(1, 1)), 4);
    }

    #[test]
    fn total_population() {
        let grid = Grid::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(grid.total_population(), 10);
    }

    #[test]
    fn neighbor_bounds() {
        let grid = Grid::from_rows(&[vec![0, 0], vec![0, 0]]).unwrap();
        let c = Cell::new(0, 0);
        assert_eq!(grid.neighbor(c, 1, 1), Some(Cell::new(1, 1)));
        assert_eq!(grid.neighbor(c, 0, 0), Some(c));
        assert_eq!(grid.neighbor(c, -1, 0), None);
        assert_eq!(grid.neighbor(c, 0, -1), None);
        assert_eq!(grid.neighbor(Cell::new(1, 1), 1, 0), None);
        assert_eq!(grid.neighbor(Cell::new(1, 1), 0, 1), None);
    }

    #[test]
    fn populated_skips_empty_cells() {
        let grid = Grid::from_rows(&[vec![0, 2], vec![1, 0]]).unwrap();
        let cells: Vec<_> = grid.populated().collect();
        assert_eq!(cells, vec![(Cell::new(0, 1), 2), (Cell::new(1, 0), 1)]);
    }

    #[test]
    fn frame_increment_and_total() {
        let mut frame = Frame::zeroed(2, 2);
        frame.increment(Cell::new(1, 0));
        frame.increment(Cell::new(1, 0));
        assert_eq!(frame.count(Cell::new(1, 0)), 2);
        assert_eq!(frame.count(Cell::new(0, 0)), 0);
        assert_eq!(frame.total(), 2);
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(35.088699, 139.067851);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(35.0, 139.0);
        let b = GeoPoint::new(36.0, 139.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }
}

#[cfg(test)]
mod time {
    use chrono::{TimeZone, Utc};

    use crate::FrameClock;

    #[test]
    fn rejects_non_positive_interval() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert!(FrameClock::new(start, 0).is_err());
        assert!(FrameClock::new(start, -5).is_err());
    }

    #[test]
    fn frame_bounds() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let clock = FrameClock::new(start, 2).unwrap();
        assert_eq!(clock.frame_start(0), start);
        assert_eq!(clock.frame_end(0), clock.frame_start(1));
        assert_eq!((clock.frame_start(3) - start).num_seconds(), 6);
    }

    #[test]
    fn iso_has_explicit_offset() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(FrameClock::iso(start), "2020-01-01T00:00:00+00:00");
    }

    #[test]
    fn interval_strings() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let clock = FrameClock::new(start, 1).unwrap();
        assert_eq!(
            clock.frame_interval(0),
            "2020-01-01T00:00:00+00:00/2020-01-01T00:00:01+00:00"
        );
        assert_eq!(
            clock.span_interval(1),
            "2020-01-01T00:00:00+00:00/2020-01-01T00:00:01+00:00"
        );
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1000);
            let b: u32 = r2.gen_range(0..1000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.gen_range(0..u64::MAX);
        let b: u64 = r1.gen_range(0..u64::MAX);
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = AgentRng::new(7, AgentId(0));
        let mut v = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        rng.shuffle(&mut v);
        let mut sorted = v;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
