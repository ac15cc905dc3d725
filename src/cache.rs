use hashbrown::HashMap as FastHashMap;
use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

const NIL: usize = usize::MAX;

#[derive(Debug)]
struct CacheEntry<K, V> {
    key: K,
    value: V,
    prev: usize,
    next: usize,
}

/// Fixed-capacity least-recently-used store.
///
/// Entries live in a slab; recency is an intrusive doubly linked list threaded
/// through slab indices, so `get` and `insert` never shift other entries.
#[derive(Debug)]
pub struct LruCache<K, V> {
    capacity: usize,
    map: FastHashMap<K, usize>,
    entries: Vec<CacheEntry<K, V>>,
    head: usize,
    tail: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    pub fn new(capacity: usize) -> Self {
        let cap = capacity.max(1);
        Self {
            capacity: cap,
            map: FastHashMap::with_capacity(cap),
            entries: Vec::with_capacity(cap),
            head: NIL,
            tail: NIL,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value and marks it most recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = *self.map.get(key)?;
        self.promote(slot);
        Some(&self.entries[slot].value)
    }

    /// Returns the value without touching recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).map(|&slot| &self.entries[slot].value)
    }

    pub fn insert(&mut self, key: K, value: V) {
        if let Some(&slot) = self.map.get(&key) {
            self.entries[slot].value = value;
            self.promote(slot);
            return;
        }

        if self.entries.len() == self.capacity {
            let slot = self.tail;
            self.detach(slot);
            let evicted = std::mem::replace(
                &mut self.entries[slot],
                CacheEntry {
                    key: key.clone(),
                    value,
                    prev: NIL,
                    next: NIL,
                },
            );
            self.map.remove(&evicted.key);
            self.map.insert(key, slot);
            self.attach_front(slot);
            return;
        }

        let slot = self.entries.len();
        self.entries.push(CacheEntry {
            key: key.clone(),
            value,
            prev: NIL,
            next: NIL,
        });
        self.map.insert(key, slot);
        self.attach_front(slot);
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.entries.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    fn promote(&mut self, slot: usize) {
        if self.head == slot {
            return;
        }
        self.detach(slot);
        self.attach_front(slot);
    }

    fn detach(&mut self, slot: usize) {
        let (prev, next) = {
            let entry = &self.entries[slot];
            (entry.prev, entry.next)
        };

        if prev == NIL {
            self.head = next;
        } else {
            self.entries[prev].next = next;
        }

        if next == NIL {
            self.tail = prev;
        } else {
            self.entries[next].prev = prev;
        }

        let entry = &mut self.entries[slot];
        entry.prev = NIL;
        entry.next = NIL;
    }

    fn attach_front(&mut self, slot: usize) {
        let old_head = self.head;
        {
            let entry = &mut self.entries[slot];
            entry.prev = NIL;
            entry.next = old_head;
        }
        if old_head != NIL {
            self.entries[old_head].prev = slot;
        }
        self.head = slot;
        if self.tail == NIL {
            self.tail = slot;
        }
    }
}

#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheStats {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}
