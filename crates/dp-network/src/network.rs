//! Road network representation and builder.
//!
//! # Data layout
//!
//! Links are stored in a single `Vec` in the order they were added, which is
//! the order every query iterates in.  A `HashMap<LinkId, usize>` gives O(1)
//! lookup by id.  Nodes are kept only as ids, in order of first appearance.
//!
//! Iteration order matters: fleet placement draws an index into the list of
//! mode-eligible links, so the same network file must always produce the
//! same list.

use std::collections::{HashMap, HashSet};

use dp_core::{LinkId, ModeSet, NodeId};

use crate::{NetworkError, NetworkResult};

// ── Link ──────────────────────────────────────────────────────────────────────

/// One directed road link.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub id: LinkId,
    pub from: NodeId,
    pub to: NodeId,
    /// Length in metres.
    pub length_m: f64,
    /// Free-flow speed in m/s.
    pub freespeed: f64,
    /// Flow capacity in vehicles per hour.
    pub capacity: f64,
    pub lanes: f64,
    pub allowed_modes: ModeSet,
}

impl Link {
    /// A link with unit attributes, convenient for tests and synthetic
    /// networks.
    pub fn new(id: impl Into<LinkId>, from: impl Into<NodeId>, to: impl Into<NodeId>, modes: ModeSet) -> Self {
        Self {
            id:            id.into(),
            from:          from.into(),
            to:            to.into(),
            length_m:      1.0,
            freespeed:     1.0,
            capacity:      1.0,
            lanes:         1.0,
            allowed_modes: modes,
        }
    }

    #[inline]
    pub fn allows(&self, mode: &str) -> bool {
        self.allowed_modes.contains(mode)
    }
}

// ── Network ───────────────────────────────────────────────────────────────────

/// Read-only road network.  Do not construct directly; use
/// [`NetworkBuilder`].
#[derive(Debug, Default)]
pub struct Network {
    links: Vec<Link>,
    index: HashMap<LinkId, usize>,
    nodes: Vec<NodeId>,
}

impl Network {
    /// A network with no links.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// All links in insertion order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn link(&self, id: &LinkId) -> Option<&Link> {
        self.index.get(id).map(|&i| &self.links[i])
    }

    /// Links whose allowed-mode set contains `mode`, in insertion order.
    pub fn links_allowing<'a>(&'a self, mode: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |l| l.allows(mode))
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Construct a [`Network`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use dp_core::ModeSet;
/// use dp_network::{Link, NetworkBuilder};
///
/// let mut b = NetworkBuilder::new();
/// b.add_link(Link::new("ab", "a", "b", ModeSet::parse("car,bike")));
/// b.add_link(Link::new("ba", "b", "a", ModeSet::parse("bike")));
/// let net = b.build().unwrap();
/// assert_eq!(net.link_count(), 2);
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.links_allowing("car").count(), 1);
/// ```
pub struct NetworkBuilder {
    links: Vec<Link>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Pre-allocate for the expected number of links.
    pub fn with_capacity(links: usize) -> Self {
        Self { links: Vec::with_capacity(links) }
    }

    pub fn add_link(&mut self, link: Link) -> &mut Self {
        self.links.push(link);
        self
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Consume the builder and index the links.
    ///
    /// Fails with [`NetworkError::DuplicateLink`] if two links share an id.
    pub fn build(self) -> NetworkResult<Network> {
        let mut index = HashMap::with_capacity(self.links.len());
        let mut seen_nodes = HashSet::new();
        let mut nodes = Vec::new();

        for (i, link) in self.links.iter().enumerate() {
            if index.insert(link.id.clone(), i).is_some() {
                return Err(NetworkError::DuplicateLink(link.id.clone()));
            }
            for node in [&link.from, &link.to] {
                if seen_nodes.insert(node.clone()) {
                    nodes.push(node.clone());
                }
            }
        }

        Ok(Network { links: self.links, index, nodes })
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
