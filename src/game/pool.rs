//! Fixed-size object pool
//!
//! Slots are allocated once up front. `acquire` fills the first free slot
//! or refuses when all are in use, which is what caps the number of stones
//! the player can have in the air at once.

/// A pool of at most `capacity` live items.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<Option<T>>,
}

impl<T> Pool<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots }
    }

    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Place `item` in a free slot, returning the slot index.
    /// Returns `None` (and drops `item`) when the pool is exhausted.
    pub fn acquire(&mut self, item: T) -> Option<usize> {
        let idx = self.slots.iter().position(|slot| slot.is_none())?;
        self.slots[idx] = Some(item);
        Some(idx)
    }

    pub fn release(&mut self, idx: usize) -> Option<T> {
        self.slots.get_mut(idx).and_then(|slot| slot.take())
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|item| (idx, item)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_mut().map(|item| (idx, item)))
    }

    /// Release every live item for which `keep` returns false
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        for slot in &mut self.slots {
            if slot.as_ref().is_some_and(|item| !keep(item)) {
                *slot = None;
            }
        }
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_until_full() {
        let mut pool = Pool::with_capacity(3);
        assert_eq!(pool.acquire('a'), Some(0));
        assert_eq!(pool.acquire('b'), Some(1));
        assert_eq!(pool.acquire('c'), Some(2));
        assert_eq!(pool.acquire('d'), None);
        assert_eq!(pool.active_count(), 3);
    }

    #[test]
    fn test_released_slot_is_reused() {
        let mut pool = Pool::with_capacity(2);
        pool.acquire(10);
        pool.acquire(20);
        assert_eq!(pool.release(0), Some(10));
        assert_eq!(pool.acquire(30), Some(0));
        assert_eq!(pool.iter().next(), Some((0, &30)));
        assert_eq!(pool.release(5), None);
    }

    #[test]
    fn test_retain_frees_rejected_items() {
        let mut pool = Pool::with_capacity(4);
        for n in 1..=4 {
            pool.acquire(n);
        }
        pool.retain(|n| n % 2 == 0);
        let left: Vec<_> = pool.iter().map(|(_, n)| *n).collect();
        assert_eq!(left, vec![2, 4]);
        assert_eq!(pool.acquire(5), Some(0));
    }
}
