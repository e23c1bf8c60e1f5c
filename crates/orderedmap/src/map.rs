//! Ordered map implementation
//!
//! Entries live in an arena of slots; the chain links are slot indices, so the
//! hash table only ever stores `key -> slot`.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use ahash::RandomState;

use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter, Keys, Values};
use crate::null_key::NullKey;

/// Node in the ordering chain
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

/// Hash map that remembers insertion order or access order
///
/// The chain runs from the eldest entry (head) to the most recent one (tail).
/// With access order enabled, [`get`](Self::get) and friends move the entry
/// they find to the tail, so the head is always the least-recently-used key.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    map: HashMap<K, usize, RandomState>,
    nodes: Vec<Option<Node<K, V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    access_order: bool,
}

impl<K, V> OrderedMap<K, V> {
    /// Create an empty map in insertion order
    pub fn new() -> Self {
        Self::with_access_order(false)
    }

    /// Create an empty map, choosing access order or insertion order
    pub fn with_access_order(access_order: bool) -> Self {
        Self::with_capacity(0, access_order)
    }

    /// Create an empty map with room for `capacity` entries
    pub fn with_capacity(capacity: usize, access_order: bool) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_list: Vec::new(),
            access_order,
        }
    }

    /// Whether successful reads move entries to the tail
    pub fn access_order(&self) -> bool {
        self.access_order
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Eldest entry, i.e. the next eviction candidate
    pub fn eldest(&self) -> Option<(&K, &V)> {
        self.entry_at(self.head)
    }

    /// Most recently inserted (or accessed) entry
    pub fn newest(&self) -> Option<(&K, &V)> {
        self.entry_at(self.tail)
    }

    /// Iterate from eldest to most recent
    ///
    /// The iterator borrows the map, so the chain cannot change underneath it.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.nodes, self.head, self.len())
    }

    /// Keys from eldest to most recent
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Values from eldest to most recent
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.map.clear();
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
    }

    fn entry_at(&self, idx: Option<usize>) -> Option<(&K, &V)> {
        self.nodes[idx?]
            .as_ref()
            .map(|node| (&node.key, &node.value))
    }

    /// Move a node to the tail if access order is on
    fn after_access(&mut self, idx: usize) {
        if !self.access_order || self.tail == Some(idx) {
            return;
        }

        self.unlink(idx);
        self.link_last(idx);
    }

    fn link_last(&mut self, idx: usize) {
        let last = self.tail;

        if let Some(node) = &mut self.nodes[idx] {
            node.prev = last;
            node.next = None;
        }

        match last {
            Some(last_idx) => {
                if let Some(last_node) = &mut self.nodes[last_idx] {
                    last_node.next = Some(idx);
                }
            }
            None => {
                self.head = Some(idx);
            }
        }

        self.tail = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = if let Some(node) = &self.nodes[idx] {
            (node.prev, node.next)
        } else {
            return;
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    fn alloc_node(&mut self, node: Node<K, V>) -> usize {
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx] = Some(node);
            idx
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        }
    }

    /// Unlink a slot and hand back its node, recycling the slot
    fn release(&mut self, idx: usize) -> Option<Node<K, V>> {
        self.unlink(idx);
        let node = self.nodes[idx].take()?;
        self.free_list.push(idx);
        Some(node)
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq,
{
    /// Look up a value, moving it to the tail in access-order mode
    ///
    /// `None` only ever means the key is absent.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.map.get(key)?;
        self.after_access(idx);
        self.nodes[idx].as_ref().map(|node| &node.value)
    }

    /// Mutable lookup, with the same reordering as [`get`](Self::get)
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.map.get(key)?;
        self.after_access(idx);
        self.nodes[idx].as_mut().map(|node| &mut node.value)
    }

    /// Look up a value without touching the chain
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.map.get(key)?;
        self.nodes[idx].as_ref().map(|node| &node.value)
    }

    /// Membership test through the hash table
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Remove a key, splicing its neighbours together
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Remove a key, returning the stored key along with its value
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.map.remove(key)?;
        self.release(idx).map(|node| (node.key, node.value))
    }

    /// Remove and return the eldest entry
    pub fn pop_eldest(&mut self) -> Option<(K, V)> {
        let idx = self.head?;
        let node = self.release(idx)?;
        self.map.remove(&node.key);
        Some((node.key, node.value))
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Append an entry at the tail
    ///
    /// Any existing entry for `key` is dropped from the chain first, so the key
    /// always ends up most recent. Returns the replaced value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.remove(&key);
        self.push_last(key, value);
        previous
    }

    /// Checked read that rejects null/empty keys
    ///
    /// Unlike [`get`](Self::get), a null/empty key and a missing key are errors.
    pub fn fetch<Q>(&mut self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + NullKey + ?Sized,
    {
        if key.is_null_key() {
            return Err(Error::NullKey);
        }

        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Checked write that rejects null/empty keys
    ///
    /// Removes any existing entry for `key`, then appends `value` at the tail.
    /// Passing `None` leaves the key removed. Returns the previous value.
    pub fn assign(&mut self, key: K, value: Option<V>) -> Result<Option<V>>
    where
        K: NullKey,
    {
        if key.is_null_key() {
            return Err(Error::NullKey);
        }

        let previous = self.remove(&key);
        if let Some(value) = value {
            self.push_last(key, value);
        }

        Ok(previous)
    }

    fn push_last(&mut self, key: K, value: V) {
        let idx = self.alloc_node(Node {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        });
        self.link_last(idx);
        self.map.insert(key, idx);
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Extend<(K, V)> for OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len();
        IntoIter::new(self.nodes, self.head, len)
    }
}

#[cfg(test)]
impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq,
{
    /// Walk the chain both ways and check it against the hash table
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.head.is_none(), self.map.is_empty());
        assert_eq!(self.tail.is_none(), self.map.is_empty());

        let mut seen = 0;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.nodes[idx].as_ref().expect("linked slot is empty");
            assert_eq!(node.prev, prev, "broken back link at slot {}", idx);
            assert_eq!(self.map.get(&node.key), Some(&idx));
            seen += 1;
            prev = Some(idx);
            cursor = node.next;
        }

        assert_eq!(prev, self.tail);
        assert_eq!(seen, self.map.len());
        assert_eq!(
            self.nodes.iter().filter(|slot| slot.is_some()).count(),
            self.map.len()
        );
    }
}
