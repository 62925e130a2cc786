//! Unit tests for dp-network.
//!
//! All tests use hand-crafted networks or in-memory CSV.

#[cfg(test)]
mod helpers {
    use dp_core::ModeSet;

    use crate::{Link, Network, NetworkBuilder};

    /// Three links a→b→c→a; only `b_c` allows cars.
    pub fn triangle() -> Network {
        let mut b = NetworkBuilder::new();
        b.add_link(Link::new("a_b", "a", "b", ModeSet::parse("walk,bike")))
            .add_link(Link::new("b_c", "b", "c", ModeSet::parse("car,walk")))
            .add_link(Link::new("c_a", "c", "a", ModeSet::parse("pt")));
        b.build().unwrap()
    }
}

#[cfg(test)]
mod builder {
    use dp_core::{LinkId, ModeSet};

    use crate::{Link, NetworkBuilder, NetworkError};

    #[test]
    fn empty_build() {
        let net = NetworkBuilder::new().build().unwrap();
        assert_eq!(net.link_count(), 0);
        assert_eq!(net.node_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn nodes_in_first_seen_order() {
        let net = super::helpers::triangle();
        let nodes: Vec<_> = net.nodes().iter().map(|n| n.as_str()).collect();
        assert_eq!(nodes, ["a", "b", "c"]);
    }

    #[test]
    fn duplicate_link_rejected() {
        let mut b = NetworkBuilder::new();
        b.add_link(Link::new("x", "a", "b", ModeSet::new()))
            .add_link(Link::new("x", "b", "a", ModeSet::new()));
        assert!(matches!(b.build(), Err(NetworkError::DuplicateLink(id)) if id == LinkId::from("x")));
    }

    #[test]
    fn lookup_by_id() {
        let net = super::helpers::triangle();
        let l = net.link(&LinkId::from("b_c")).unwrap();
        assert_eq!(l.from.as_str(), "b");
        assert!(l.allows("car"));
        assert!(net.link(&LinkId::from("zz")).is_none());
    }
}

#[cfg(test)]
mod eligibility {
    #[test]
    fn filters_by_mode() {
        let net = super::helpers::triangle();
        let car: Vec<_> = net.links_allowing("car").map(|l| l.id.as_str()).collect();
        assert_eq!(car, ["b_c"]);
        let walk: Vec<_> = net.links_allowing("walk").map(|l| l.id.as_str()).collect();
        assert_eq!(walk, ["a_b", "b_c"]);
        assert_eq!(net.links_allowing("drt").count(), 0);
    }
}

#[cfg(test)]
mod csv_loader {
    use std::io::Cursor;

    use crate::{load_network_csv, load_network_reader, NetworkError};

    const SAMPLE: &str = "\
id,from,to,length,freespeed,capacity,lanes,modes
l1,n1,n2,120.5,13.89,1800,1,\"car,ride\"
l2,n2,n1,120.5,13.89,1800,1,car
l3,n2,n3,80,1.4,9999,1,walk
";

    #[test]
    fn loads_sample() {
        let net = load_network_reader(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(net.link_count(), 3);
        assert_eq!(net.node_count(), 3);
        let l1 = &net.links()[0];
        assert_eq!(l1.id.as_str(), "l1");
        assert_eq!(l1.length_m, 120.5);
        assert!(l1.allows("car") && l1.allows("ride"));
        let car: Vec<_> = net.links_allowing("car").map(|l| l.id.as_str()).collect();
        assert_eq!(car, ["l1", "l2"]);
    }

    #[test]
    fn bad_number_is_parse_error() {
        let csv = "id,from,to,length,freespeed,capacity,lanes,modes\nl1,a,b,long,1,1,1,car\n";
        assert!(matches!(load_network_reader(Cursor::new(csv)), Err(NetworkError::Parse(_))));
    }

    #[test]
    fn duplicate_in_file() {
        let csv = "id,from,to,length,freespeed,capacity,lanes,modes\nl1,a,b,1,1,1,1,car\nl1,b,a,1,1,1,1,car\n";
        assert!(matches!(
            load_network_reader(Cursor::new(csv)),
            Err(NetworkError::DuplicateLink(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_network_csv(std::path::Path::new("/nonexistent/links.csv")).unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
    }
}
