//! Tests for dp-fleet.

// ── Helpers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod helpers {
    use dp_core::{FleetConfig, ModeSet};
    use dp_network::{Link, Network, NetworkBuilder};

    /// Three links; only `B` allows car.
    pub fn abc() -> Network {
        let mut b = NetworkBuilder::new();
        b.add_link(Link::new("A", "n1", "n2", ModeSet::parse("walk")))
            .add_link(Link::new("B", "n2", "n3", ModeSet::parse("car,walk")))
            .add_link(Link::new("C", "n3", "n1", ModeSet::parse("pt")));
        b.build().unwrap()
    }

    /// `n` links, all allowing car.
    pub fn grid(n: usize) -> Network {
        let mut b = NetworkBuilder::with_capacity(n);
        for i in 0..n {
            b.add_link(Link::new(format!("l{i}"), format!("n{i}"), format!("n{}", i + 1), ModeSet::parse("car")));
        }
        b.build().unwrap()
    }

    pub fn config(n: usize, seed: u64) -> FleetConfig {
        FleetConfig { vehicle_count: n, seed, ..FleetConfig::default() }
    }
}

// ── Synthesis ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod synthesis {
    use dp_core::{ScenarioRng, ServiceWindow};

    use super::helpers::{abc, config, grid};
    use crate::{synthesize_fleet, FleetError, FleetObserver, NoopFleetObserver, VehicleSpecification};

    fn run(network: &dp_network::Network, cfg: &dp_core::FleetConfig) -> Vec<VehicleSpecification> {
        let mut fleet = Vec::new();
        let mut rng = ScenarioRng::new(cfg.seed);
        synthesize_fleet(&mut fleet, network, cfg, &mut rng, &mut NoopFleetObserver).unwrap();
        fleet
    }

    #[test]
    fn only_eligible_link_used() {
        let fleet = run(&abc(), &config(5, 0));
        assert_eq!(fleet.len(), 5);
        assert!(fleet.iter().all(|v| v.start_link.as_str() == "B"));
    }

    #[test]
    fn ids_capacity_and_window() {
        let fleet = run(&grid(10), &config(12, 3));
        for (i, v) in fleet.iter().enumerate() {
            assert_eq!(v.id.as_str(), format!("drt{i}"));
            assert_eq!(v.capacity, 4);
            assert_eq!(v.service_begin, 0.0);
            assert_eq!(v.service_end, 30.0 * 3600.0);
            assert_eq!(v.service_window(), ServiceWindow::DEFAULT);
        }
    }

    #[test]
    fn custom_prefix_capacity_window() {
        let cfg = dp_core::FleetConfig {
            id_prefix:      "av_".into(),
            capacity:       8,
            service_window: ServiceWindow::new(3_600.0, 7_200.0).unwrap(),
            ..config(2, 0)
        };
        let fleet = run(&grid(3), &cfg);
        assert_eq!(fleet[1].id.as_str(), "av_1");
        assert_eq!(fleet[1].capacity, 8);
        assert_eq!(fleet[1].service_begin, 3_600.0);
        assert_eq!(fleet[1].service_end, 7_200.0);
    }

    #[test]
    fn deterministic_for_same_seed() {
        let net = grid(50);
        assert_eq!(run(&net, &config(100, 9)), run(&net, &config(100, 9)));
    }

    #[test]
    fn seed_changes_placement() {
        let net = grid(50);
        assert_ne!(run(&net, &config(100, 1)), run(&net, &config(100, 2)));
    }

    #[test]
    fn placement_follows_rng_stream() {
        let net = grid(20);
        let fleet = run(&net, &config(30, 7));
        let mut rng = ScenarioRng::new(7);
        for v in &fleet {
            let i = rng.index(20).unwrap();
            assert_eq!(v.start_link.as_str(), format!("l{i}"));
        }
    }

    #[test]
    fn one_draw_per_vehicle() {
        let mut rng = ScenarioRng::new(0);
        synthesize_fleet(&mut Vec::<VehicleSpecification>::new(), &grid(5), &config(17, 0), &mut rng, &mut NoopFleetObserver).unwrap();
        assert_eq!(rng.draws(), 17);
    }

    #[test]
    fn zero_vehicles_is_empty_fleet() {
        let mut fleet: Vec<VehicleSpecification> = Vec::new();
        let summary = synthesize_fleet(
            &mut fleet,
            &grid(0),
            &config(0, 0),
            &mut ScenarioRng::new(0),
            &mut NoopFleetObserver,
        )
        .unwrap();
        assert!(fleet.is_empty());
        assert_eq!(summary.vehicles, 0);
        assert_eq!(summary.eligible_links, 0);
    }

    #[test]
    fn no_eligible_links_is_config_error() {
        let cfg = dp_core::FleetConfig { link_mode: "drt".into(), ..config(3, 0) };
        let mut fleet: Vec<VehicleSpecification> = Vec::new();
        let err = synthesize_fleet(&mut fleet, &abc(), &cfg, &mut ScenarioRng::new(0), &mut NoopFleetObserver)
            .unwrap_err();
        assert!(matches!(err, FleetError::NoEligibleLinks { ref mode } if *mode == "drt"));
        assert!(err.is_config());
        assert!(fleet.is_empty());
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = dp_core::FleetConfig { capacity: 0, ..config(3, 0) };
        let err = synthesize_fleet(&mut Vec::<VehicleSpecification>::new(), &abc(), &cfg, &mut ScenarioRng::new(0), &mut NoopFleetObserver)
            .unwrap_err();
        assert!(matches!(err, FleetError::Config(_)));
    }

    #[derive(Default)]
    struct Counting {
        eligible: Option<usize>,
        placed:   usize,
        ended:    Option<crate::FleetSummary>,
    }

    impl FleetObserver for Counting {
        fn on_eligible_links(&mut self, _mode: &dp_core::Mode, count: usize) {
            self.eligible = Some(count);
        }
        fn on_vehicle_placed(&mut self, _vehicle: &VehicleSpecification) {
            self.placed += 1;
        }
        fn on_fleet_end(&mut self, summary: &crate::FleetSummary) {
            self.ended = Some(*summary);
        }
    }

    #[test]
    fn observer_and_summary() {
        let mut obs = Counting::default();
        let summary = synthesize_fleet(&mut Vec::<VehicleSpecification>::new(), &abc(), &config(5, 0), &mut ScenarioRng::new(0), &mut obs)
            .unwrap();
        assert_eq!(obs.eligible, Some(1));
        assert_eq!(obs.placed, 5);
        assert_eq!(obs.ended, Some(summary));
        assert_eq!(summary.vehicles, 5);
        assert_eq!(summary.eligible_links, 1);
        assert_eq!(summary.distinct_start_links, 1);
    }
}

// ── CSV descriptor ────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::helpers::{abc, config, grid};
    use crate::{write_fleet, CsvFleetSink, FleetSink, HEADER};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn records(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn header_row() {
        let dir = tmp();
        let path = dir.path().join("fleet.csv");
        write_fleet(&path, &abc(), &config(1, 0)).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, HEADER);
    }

    #[test]
    fn five_vehicles_on_b() {
        let dir = tmp();
        let path = dir.path().join("fleet.csv");
        write_fleet(&path, &abc(), &config(5, 0)).unwrap();

        let rows = records(&path);
        assert_eq!(rows.len(), 5);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(&row[0], format!("drt{i}"));
            assert_eq!(&row[1], "B");
            assert_eq!(&row[2], "4");
            assert_eq!(&row[3], "0");
            assert_eq!(&row[4], "108000");
        }
    }

    #[test]
    fn identical_files_for_same_seed() {
        let dir = tmp();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        write_fleet(&a, &grid(30), &config(40, 5)).unwrap();
        write_fleet(&b, &grid(30), &config(40, 5)).unwrap();
        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tmp();
        let path = dir.path().join("fleet.csv");
        std::fs::write(&path, "stale contents\nmore\nmore\nmore\n").unwrap();
        write_fleet(&path, &abc(), &config(2, 0)).unwrap();
        assert_eq!(records(&path).len(), 2);
        assert!(!dir.path().join("fleet.csv.tmp").exists());
    }

    #[test]
    fn empty_fleet_writes_header_only() {
        let dir = tmp();
        let path = dir.path().join("fleet.csv");
        write_fleet(&path, &grid(0), &config(0, 0)).unwrap();
        assert!(path.exists());
        assert!(records(&path).is_empty());
    }

    #[test]
    fn config_error_writes_nothing() {
        let dir = tmp();
        let path = dir.path().join("fleet.csv");
        let cfg = dp_core::FleetConfig { link_mode: "rail".into(), ..config(5, 0) };
        assert!(write_fleet(&path, &abc(), &cfg).is_err());
        assert!(!path.exists());
        assert!(!dir.path().join("fleet.csv.tmp").exists());
    }

    #[test]
    fn missing_directory_fails_cleanly() {
        let dir = tmp();
        let path = dir.path().join("missing").join("fleet.csv");
        let mut sink = CsvFleetSink::new(&path);
        assert!(sink.write_fleet(&[]).is_err());
        assert!(!path.exists());
        assert_eq!(sink.path(), path.as_path());
    }
}

// ── Atomic replacement ────────────────────────────────────────────────────────

#[cfg(test)]
mod replace {
    use std::fs;

    use crate::sink::replace_file;
    use crate::FleetError;

    #[test]
    fn error_after_partial_write_keeps_target() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("fleet.bin");
        fs::write(&path, "previous fleet").unwrap();

        let result = replace_file(&path, |tmp| {
            fs::write(tmp, "half a fle")?;
            Err(FleetError::Config("writer failed on close".into()))
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous fleet");
        assert!(!dir.path().join("fleet.bin.tmp").exists());
    }

    #[test]
    fn success_renames_over_target() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("fleet.bin");
        fs::write(&path, "previous fleet").unwrap();

        replace_file(&path, |tmp| Ok(fs::write(tmp, "new fleet")?)).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new fleet");
        assert!(!dir.path().join("fleet.bin.tmp").exists());
    }
}

// ── SQLite descriptor ─────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use dp_core::ScenarioRng;
    use rusqlite::Connection;

    use super::helpers::{abc, config, grid};
    use crate::{synthesize_fleet, NoopFleetObserver, SqliteFleetSink};

    fn count(conn: &Connection) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM vehicles", [], |r| r.get(0)).unwrap()
    }

    #[test]
    fn vehicles_table_filled() {
        let mut sink = SqliteFleetSink::from_connection(Connection::open_in_memory().unwrap()).unwrap();
        synthesize_fleet(&mut sink, &abc(), &config(5, 0), &mut ScenarioRng::new(0), &mut NoopFleetObserver)
            .unwrap();

        let conn = sink.connection().unwrap();
        assert_eq!(count(conn), 5);
        let links: i64 = conn
            .query_row("SELECT COUNT(*) FROM vehicles WHERE start_link = 'B' AND capacity = 4", [], |r| r.get(0))
            .unwrap();
        assert_eq!(links, 5);
        let end: f64 = conn
            .query_row("SELECT service_end_time FROM vehicles WHERE id = 'drt3'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(end, 108_000.0);
    }

    #[test]
    fn rewrite_replaces_rows() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("fleet.db");
        let mut sink = SqliteFleetSink::new(&path);
        synthesize_fleet(&mut sink, &grid(10), &config(8, 0), &mut ScenarioRng::new(0), &mut NoopFleetObserver)
            .unwrap();
        synthesize_fleet(&mut sink, &grid(10), &config(3, 0), &mut ScenarioRng::new(0), &mut NoopFleetObserver)
            .unwrap();
        assert_eq!(count(sink.connection().unwrap()), 3);
        assert_eq!(count(&Connection::open(&path).unwrap()), 3);
    }

    #[test]
    fn failed_synthesis_creates_no_database() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("fleet.db");
        let mut sink = SqliteFleetSink::new(&path);
        let cfg = dp_core::FleetConfig { link_mode: "rail".into(), ..config(5, 0) };
        let err = synthesize_fleet(&mut sink, &abc(), &cfg, &mut ScenarioRng::new(0), &mut NoopFleetObserver)
            .unwrap_err();
        assert!(err.is_config());
        assert!(sink.connection().is_none());
        assert!(!path.exists());
    }
}

// ── Parquet descriptor ────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parquet"))]
mod parquet_tests {
    use arrow::datatypes::DataType;
    use dp_core::ScenarioRng;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    use super::helpers::{config, grid};
    use crate::{synthesize_fleet, NoopFleetObserver, ParquetFleetSink, HEADER};

    #[test]
    fn schema_and_rows() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("fleet.parquet");
        let mut sink = ParquetFleetSink::new(&path);
        synthesize_fleet(&mut sink, &grid(4), &config(6, 0), &mut ScenarioRng::new(0), &mut NoopFleetObserver)
            .unwrap();

        let file = std::fs::File::open(&path).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
        let schema = builder.schema().clone();
        let reader = builder.build().unwrap();
        let total_rows: usize = reader.map(|b| b.unwrap().num_rows()).sum();
        assert_eq!(total_rows, 6);

        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, HEADER);
        assert_eq!(*schema.field_with_name("capacity").unwrap().data_type(), DataType::UInt32);
    }

    #[test]
    fn stale_file_replaced_without_leftovers() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("fleet.parquet");
        std::fs::write(&path, b"not a parquet file").unwrap();

        let mut sink = ParquetFleetSink::new(&path);
        synthesize_fleet(&mut sink, &grid(4), &config(3, 0), &mut ScenarioRng::new(0), &mut NoopFleetObserver)
            .unwrap();

        let file = std::fs::File::open(&path).unwrap();
        let reader = ParquetRecordBatchReaderBuilder::try_new(file).unwrap().build().unwrap();
        assert_eq!(reader.map(|b| b.unwrap().num_rows()).sum::<usize>(), 3);
        assert!(!dir.path().join("fleet.parquet.tmp").exists());
    }

    #[test]
    fn failed_write_leaves_nothing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("missing").join("fleet.parquet");
        let mut sink = ParquetFleetSink::new(&path);
        assert!(crate::FleetSink::write_fleet(&mut sink, &[]).is_err());
        assert!(!path.exists());
        assert!(!dir.path().join("missing").join("fleet.parquet.tmp").exists());
    }
}
