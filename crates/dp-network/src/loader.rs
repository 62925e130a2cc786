//! CSV link-table loader.
//!
//! # CSV format
//!
//! One row per directed link.  `modes` is a comma-separated list and must be
//! quoted when it holds more than one mode.
//!
//! ```csv
//! id,from,to,length,freespeed,capacity,lanes,modes
//! l1,n1,n2,120.5,13.89,1800,1,"car,ride"
//! l2,n2,n1,120.5,13.89,1800,1,car
//! l3,n2,n3,80,1.4,9999,1,walk
//! ```
//!
//! Links are kept in file order.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use dp_core::{LinkId, ModeSet, NodeId};

use crate::{Link, Network, NetworkBuilder, NetworkError, NetworkResult};

#[derive(Deserialize)]
struct LinkRecord {
    id:        String,
    from:      String,
    to:        String,
    length:    f64,
    freespeed: f64,
    capacity:  f64,
    lanes:     f64,
    modes:     String,
}

/// Load a [`Network`] from a CSV link table.
pub fn load_network_csv(path: &Path) -> NetworkResult<Network> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_network_reader(file)
}

/// Like [`load_network_csv`] but accepts any `Read` source.
pub fn load_network_reader<R: Read>(reader: R) -> NetworkResult<Network> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = NetworkBuilder::new();

    for result in csv_reader.deserialize::<LinkRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        builder.add_link(Link {
            id:            LinkId::new(row.id),
            from:          NodeId::new(row.from),
            to:            NodeId::new(row.to),
            length_m:      row.length,
            freespeed:     row.freespeed,
            capacity:      row.capacity,
            lanes:         row.lanes,
            allowed_modes: ModeSet::parse(&row.modes),
        });
    }

    builder.build()
}
