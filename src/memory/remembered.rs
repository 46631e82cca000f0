/// Fixed-size set of remembered item indices.
///
/// Backed by one flag per item, so membership checks and inserts are O(1)
/// and iteration order is always ascending by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RememberedSet {
    flags: Vec<bool>,
    count: usize,
}

impl RememberedSet {
    pub fn new(total: usize) -> Self {
        Self {
            flags: vec![false; total],
            count: 0,
        }
    }

    /// Mark an index as remembered. Returns false if it was already present
    /// or lies outside the set.
    pub fn insert(&mut self, index: usize) -> bool {
        match self.flags.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of items the set can hold
    pub fn capacity(&self) -> usize {
        self.flags.len()
    }

    pub fn is_full(&self) -> bool {
        self.count == self.flags.len()
    }

    /// Indices in `0..end` that are not remembered, ascending
    pub fn missing_below(&self, end: usize) -> impl Iterator<Item = usize> + '_ {
        (0..end.min(self.flags.len())).filter(move |&index| !self.contains(index))
    }

    pub fn clear(&mut self) {
        self.flags.iter_mut().for_each(|flag| *flag = false);
        self.count = 0;
    }
}
