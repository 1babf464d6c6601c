//! Definition of [`NodeRecordSet`], the bookkeeping container of the
//! shortest path search.
//!
//! The same container plays three roles:
//! * the frontier, holding tentative distances of nodes not yet settled;
//! * the visited set, holding the final distances of settled nodes;
//! * the returned path, an ordered chain of predecessor links.
//!
//! Records are kept in a [`Vec`] in insertion order and every lookup
//! is a linear scan. Lookups of absent nodes never fail: they answer
//! `f32::INFINITY` for the distance and [`NodeId::NO_ID`] for the
//! predecessor. The relaxation step of the search depends on that.

use crate::node::{NodeId, NodeRecord};

/// An insertion-ordered collection of [`NodeRecord`]s, unique per node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeRecordSet {
    records: Vec<NodeRecord>,
}

impl NodeRecordSet {
    /// Creates an empty set.
    pub fn new() -> NodeRecordSet {
        NodeRecordSet {
            records: Vec::new(),
        }
    }

    /// Returns true if the set holds no record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in the set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if a record for `node` exists.
    pub fn contains(&self, node: NodeId) -> bool {
        self.position(node).is_some()
    }

    /// Returns true if the edge `(source, destination)` belongs to the
    /// set, that is if `destination` is stored with `source` as its
    /// predecessor.
    pub fn contains_edge(&self, source: NodeId, destination: NodeId) -> bool {
        self.records
            .iter()
            .any(|record| record.node == destination && record.predecessor == source)
    }

    /// Returns the record stored for `node`.
    pub fn get(&self, node: NodeId) -> Option<&NodeRecord> {
        self.records.iter().find(|record| record.node == node)
    }

    /// Returns the distance stored for `node`, or `f32::INFINITY` if
    /// `node` is absent.
    pub fn distance(&self, node: NodeId) -> f32 {
        self.get(node)
            .map(|record| record.distance)
            .unwrap_or(f32::INFINITY)
    }

    /// Returns the predecessor stored for `node`, or
    /// [`NodeId::NO_ID`] if `node` is absent.
    ///
    /// Note that the origin of a search is stored with `NO_ID` as its
    /// predecessor too, so this is not a membership test.
    pub fn predecessor(&self, node: NodeId) -> NodeId {
        self.get(node)
            .map(|record| record.predecessor)
            .unwrap_or(NodeId::NO_ID)
    }

    /// Finds the node with the smallest distance.
    ///
    /// When several records share the smallest distance, the one
    /// inserted first wins.
    ///
    /// # Returns
    /// The node minimizing the distance, or [`NodeId::NO_ID`] if the
    /// set is empty.
    ///
    /// # Time Complexity
    /// *O*(*n*), the whole set is scanned.
    pub fn min(&self) -> NodeId {
        let mut records = self.records.iter();
        let Some(first) = records.next() else {
            return NodeId::NO_ID;
        };

        records
            .fold(first, |best, record| {
                if record.distance < best.distance {
                    record
                } else {
                    best
                }
            })
            .node
    }

    /// Appends a record for `node`.
    ///
    /// The caller must make sure `node` is not already stored: a
    /// second record for the same node would be shadowed by the first
    /// one on every lookup. Use [`NodeRecordSet::update_or_insert`]
    /// when the node may be present.
    pub fn insert(&mut self, node: NodeId, predecessor: NodeId, distance: f32) {
        self.insert_record(NodeRecord {
            node,
            predecessor,
            distance,
        });
    }

    /// Appends `record`. Same contract as [`NodeRecordSet::insert`].
    pub fn insert_record(&mut self, record: NodeRecord) {
        debug_assert!(!self.contains(record.node), "node {} inserted twice", record.node);
        self.records.push(record);
    }

    /// Overwrites the predecessor and distance of `node` in place, or
    /// appends a new record if `node` is absent.
    pub fn update_or_insert(&mut self, node: NodeId, predecessor: NodeId, distance: f32) {
        match self.records.iter_mut().find(|record| record.node == node) {
            Some(record) => {
                record.predecessor = predecessor;
                record.distance = distance;
            }
            None => self.insert(node, predecessor, distance),
        }
    }

    /// Deletes the record of `node`. Does nothing if `node` is absent.
    ///
    /// The relative order of the remaining records is unchanged.
    pub fn remove(&mut self, node: NodeId) {
        if let Some(index) = self.position(node) {
            self.records.remove(index);
        }
    }

    /// Removes every record, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeRecord> {
        self.records.iter()
    }

    /// Returns the stored nodes in insertion order.
    pub fn nodes(&self) -> Vec<NodeId> {
        self.records.iter().map(|record| record.node).collect()
    }

    /// Returns the last inserted record.
    pub fn last(&self) -> Option<&NodeRecord> {
        self.records.last()
    }

    fn position(&self, node: NodeId) -> Option<usize> {
        self.records.iter().position(|record| record.node == node)
    }
}

impl<'a> IntoIterator for &'a NodeRecordSet {
    type Item = &'a NodeRecord;
    type IntoIter = std::slice::Iter<'a, NodeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
