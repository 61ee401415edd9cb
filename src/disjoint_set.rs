//! Union-find over arbitrary hashable identifiers.
//!
//! Elements are interned into a dense arena on [`DisjointSet::make_set`];
//! `find` uses path compression and `union` uses union by rank, giving near
//! constant amortized cost per operation.

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use derivative::Derivative;

#[derive(Derivative)]
#[derivative(
    Default(bound = ""),
    Clone(bound = "T: Clone"),
    Debug(bound = "T: Debug")
)]
pub struct DisjointSet<T> {
    index: HashMap<T, usize>,
    elements: Vec<T>,
    /// Parent pointers (`parent[i] == i` for a representative).
    parent: Vec<usize>,
    /// Upper bound on tree height, only meaningful for representatives.
    rank: Vec<u8>,
    num_sets: usize,
}

impl<T> DisjointSet<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of disjoint sets.
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Adds `element` as a singleton set.  Does nothing if it is already
    /// present.
    pub fn make_set(&mut self, element: T) {
        if self.index.contains_key(&element) {
            return;
        }
        let i = self.elements.len();
        self.index.insert(element.clone(), i);
        self.elements.push(element);
        self.parent.push(i);
        self.rank.push(0);
        self.num_sets += 1;
    }

    /// Finds the representative of the set containing `element`, or `None`
    /// if `element` was never added.
    pub fn find(&mut self, element: &T) -> Option<T> {
        let &i = self.index.get(element)?;
        let root = self.find_index(i);
        Some(self.elements[root].clone())
    }

    fn find_index(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `a` and `b`.  Returns `true` if a merge
    /// happened, `false` if they were already in the same set or either was
    /// never added.
    pub fn union(&mut self, a: &T, b: &T) -> bool {
        let (Some(&a), Some(&b)) = (self.index.get(a), self.index.get(b)) else {
            return false;
        };
        let (root_a, root_b) = (self.find_index(a), self.find_index(b));
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        self.num_sets -= 1;
        true
    }

    /// Checks whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: &T, b: &T) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(root_a), Some(root_b)) => root_a == root_b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn test_singletons() {
        let mut sets = DisjointSet::new();
        for c in ['a', 'b', 'c'] {
            sets.make_set(c);
        }
        sets.make_set('a');
        assert_eq!(sets.len(), 3);
        assert_eq!(sets.num_sets(), 3);
        assert_eq!(sets.find(&'b'), Some('b'));
        assert_eq!(sets.find(&'z'), None);
    }

    #[test]
    fn test_union() {
        let mut sets = DisjointSet::new();
        for n in 0..5 {
            sets.make_set(n);
        }
        assert!(sets.union(&0, &1));
        assert!(sets.union(&3, &4));
        assert!(sets.union(&1, &4));
        assert!(!sets.union(&0, &3));
        assert!(!sets.union(&0, &9));
        assert_eq!(sets.num_sets(), 2);
        assert!(sets.connected(&0, &4));
        assert!(!sets.connected(&2, &4));
        assert_eq!(sets.find(&0), sets.find(&3));
    }

    #[quickcheck]
    fn prop_num_sets_matches_distinct_roots(pairs: Vec<(u8, u8)>) -> bool {
        let mut sets = DisjointSet::new();
        for &(a, b) in &pairs {
            sets.make_set(a);
            sets.make_set(b);
            sets.union(&a, &b);
        }
        let elements: Vec<u8> = sets.elements.clone();
        let mut roots: Vec<u8> = elements.iter().filter_map(|e| sets.find(e)).collect();
        roots.sort();
        roots.dedup();
        roots.len() == sets.num_sets()
    }
}
