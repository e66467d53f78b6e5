use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// A bounded double-ended priority queue. Reads the best (maximum priority) entry and evicts the
/// worst (minimum priority) entry once the capacity is exceeded.
///
/// Entries with equal priority are ordered by insertion: among equals, the oldest is treated as
/// the best and the newest as the worst. NaN priorities rank above every number.
#[derive(Clone, Debug)]
pub struct Frontier<T> {
    entries: BTreeMap<(OrderedFloat<f64>, u64), T>,
    capacity: usize,
    next_seq: u64,
}

impl<T> Frontier<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            capacity,
            next_seq: 0,
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

    /// Inserts `value`, then evicts the worst entry if the frontier is over capacity. Returns the
    /// evicted entry, which may be the one just inserted.
    pub fn insert(&mut self, priority: f64, value: T) -> Option<(f64, T)> {
        // Reverse the sequence so that, among equal priorities, older entries sort higher.
        let seq = u64::MAX - self.next_seq;
        self.next_seq += 1;
        self.entries.insert((OrderedFloat(priority), seq), value);

        if self.entries.len() > self.capacity {
            self.pop_min()
        } else {
            None
        }
    }

    pub fn peek_max(&self) -> Option<(f64, &T)> {
        self.entries
            .iter()
            .next_back()
            .map(|((priority, _), value)| (priority.into_inner(), value))
    }

    pub fn peek_min(&self) -> Option<(f64, &T)> {
        self.entries
            .iter()
            .next()
            .map(|((priority, _), value)| (priority.into_inner(), value))
    }

    pub fn pop_min(&mut self) -> Option<(f64, T)> {
        let key = *self.entries.keys().next()?;
        self.entries.remove(&key).map(|value| (key.0.into_inner(), value))
    }

    /// Entries from best to worst.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &T)> {
        self.entries
            .iter()
            .rev()
            .map(|((priority, _), value)| (priority.into_inner(), value))
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_keeps_highest_priorities() {
        let mut frontier = Frontier::new(3);
        let mut evicted = Vec::new();
        for (i, cost) in [5.0, 1.0, 4.0, 2.0, 3.0, 0.5].iter().enumerate() {
            if let Some((priority, id)) = frontier.insert(-cost, i) {
                evicted.push((priority, id));
            }
            assert!(frontier.len() <= 3);
        }

        assert_eq!(frontier.len(), 3);
        let survivors: Vec<usize> = frontier.iter().map(|(_, id)| *id).collect();
        assert_eq!(survivors, vec![5, 1, 3]);
        assert_eq!(evicted, vec![(-5.0, 0), (-4.0, 2), (-3.0, 4)]);
        assert_eq!(frontier.peek_max(), Some((-0.5, &5)));
        assert_eq!(frontier.peek_min(), Some((-2.0, &3)));
    }

    #[test]
    fn test_insert_can_evict_itself() {
        let mut frontier = Frontier::new(1);

        assert_eq!(frontier.insert(1.0, "good"), None);
        assert_eq!(frontier.insert(0.0, "bad"), Some((0.0, "bad")));
        assert_eq!(frontier.peek_max(), Some((1.0, &"good")));
    }

    #[test]
    fn test_ties_prefer_older_entries() {
        let mut frontier = Frontier::new(2);
        frontier.insert(1.0, 'a');
        frontier.insert(1.0, 'b');

        assert_eq!(frontier.peek_max(), Some((1.0, &'a')));
        assert_eq!(frontier.insert(1.0, 'c'), Some((1.0, 'c')));
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let mut frontier = Frontier::new(1);
        frontier.insert(0.0, "first");

        assert_eq!(frontier.insert(-0.0, "second"), Some((-0.0, "second")));
        assert_eq!(frontier.peek_max(), Some((0.0, &"first")));
    }

    #[test]
    fn test_empty() {
        let mut frontier: Frontier<()> = Frontier::new(4);

        assert!(frontier.is_empty());
        assert_eq!(frontier.peek_max(), None);
        assert_eq!(frontier.pop_min(), None);
    }
}
