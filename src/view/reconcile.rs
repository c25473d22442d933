// src/view/reconcile.rs
//
// Generic keyed diff over one container of nodes. Nodes carry a
// stable numeric id so callers (and tests) can tell "updated in
// place" apart from "destroyed and recreated". Surviving nodes keep
// their relative order; new nodes append at the end. There is no move
// operation.

use std::collections::{HashMap, HashSet};

/// One materialized presentation unit: stable identity + mutable value.
#[derive(Clone, Debug)]
pub struct Node<V> {
    id: u64,
    key: String,
    pub value: V,
}

impl<V> Node<V> {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Tallies from one sync pass. `updated` counts nodes whose update
/// closure reported an actual field change, so re-applying identical
/// data is a visible no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
}

impl SyncStats {
    pub fn is_noop(&self) -> bool {
        self.created == 0 && self.updated == 0 && self.removed == 0
    }

    pub fn merge(&mut self, other: SyncStats) {
        self.created += other.created;
        self.updated += other.updated;
        self.removed += other.removed;
    }
}

/// The set of currently materialized nodes for one container.
#[derive(Clone, Debug, Default)]
pub struct Snapshot<V> {
    nodes: Vec<Node<V>>,
    next_id: u64,
}

impl<V: Default> Snapshot<V> {
    pub fn nodes(&self) -> &[Node<V>] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Bring this container in line with `items`.
    ///
    /// - key match → update the existing node's value in place;
    /// - no match → create a node, populate it, append it;
    /// - keys absent from `items` → destroy those nodes.
    ///
    /// `update` returns whether it changed anything; creations count
    /// as created only, regardless of what `update` reports.
    pub fn sync<T, K, U>(&mut self, items: &[T], mut key_of: K, mut update: U) -> SyncStats
    where
        K: FnMut(usize, &T) -> String,
        U: FnMut(&mut V, usize, &T) -> bool,
    {
        let mut stats = SyncStats::default();

        let index: HashMap<String, usize> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(pos, n)| (n.key.clone(), pos))
            .collect();

        let mut seen: HashSet<String> = HashSet::with_capacity(items.len());
        let mut fresh: Vec<Node<V>> = Vec::new();

        for (i, item) in items.iter().enumerate() {
            let key = key_of(i, item);
            match index.get(&key) {
                Some(&pos) => {
                    if update(&mut self.nodes[pos].value, i, item) {
                        stats.updated += 1;
                    }
                }
                None => {
                    let mut value = V::default();
                    update(&mut value, i, item);
                    fresh.push(Node {
                        id: self.next_id,
                        key: key.clone(),
                        value,
                    });
                    self.next_id += 1;
                    stats.created += 1;
                }
            }
            seen.insert(key);
        }

        let before = self.nodes.len();
        self.nodes.retain(|n| seen.contains(&n.key));
        stats.removed = before - self.nodes.len();

        self.nodes.append(&mut fresh);
        stats
    }
}
