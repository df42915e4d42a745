//! Bulk-built binary search tree.
//!
//! When every element is known up front we can skip incremental insertion
//! entirely: stable-sort the pairs, then hang the middle element of each
//! index range as the root of that range. The result has minimal height,
//! `ceil(log2(n + 1))`.
//!
//! Operations:
//! - build: O(n log n) for the sort, O(n) for the construction
//! - max / min / get / remove: O(height)
//! - iter (ascending) / descending: O(n)
//!
//! Nothing rebalances after construction. Removal never makes the tree
//! taller, so a tree that is only drained keeps its logarithmic height.

use std::cmp::Ordering;

type Link<K, I> = Option<Box<Node<K, I>>>;

#[derive(Debug)]
struct Node<K, I> {
    key: K,
    item: I,
    left: Link<K, I>,
    right: Link<K, I>,
}

/// A binary search tree where every node's key is `>=` every key in its left
/// subtree and `<=` every key in its right subtree.
#[derive(Debug)]
pub struct BalancedTree<K, I> {
    root: Link<K, I>,
    len: usize,
}

impl<K: Ord, I> BalancedTree<K, I> {
    /// Build a height-balanced tree from pairs in any order.
    ///
    /// The sort is stable, so pairs with equal keys keep their input order
    /// in the tree's in-order traversal.
    pub fn build(mut elements: Vec<(K, I)>) -> Self {
        elements.sort_by(|a, b| a.0.cmp(&b.0));
        let len = elements.len();
        let mut sorted = elements.into_iter();
        let root = build_range(&mut sorted, 0, len);
        return BalancedTree { root, len };
    }

    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.root.is_none();
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node<K, I>, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        return deepest;
    }

    /// The rightmost pair, holding the largest key.
    pub fn max(&self) -> Option<(&K, &I)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        return Some((&node.key, &node.item));
    }

    /// The leftmost pair, holding the smallest key.
    pub fn min(&self) -> Option<(&K, &I)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        return Some((&node.key, &node.item));
    }

    pub fn get(&self, key: &K) -> Option<&I> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.item),
            };
        }
        return None;
    }

    pub fn contains_key(&self, key: &K) -> bool {
        return self.get(key).is_some();
    }

    /// Remove the node holding `key` and return its item.
    ///
    /// With duplicate keys, the first equal node met on the way down is the
    /// one removed. A node with two children is replaced by its in-order
    /// successor.
    ///
    /// # Panics
    ///
    /// If `key` is not in the tree. Callers remove keys they just looked up,
    /// so a miss means the tree and its caller disagree.
    pub fn remove(&mut self, key: &K) -> I {
        let mut link = &mut self.root;
        loop {
            let ord = match link.as_deref() {
                Some(node) => key.cmp(&node.key),
                None => panic!("remove: key not present in tree of {} elements", self.len),
            };
            if ord == Ordering::Equal {
                break;
            }
            let Some(node) = link.as_mut() else { unreachable!() };
            link = if ord == Ordering::Less { &mut node.left } else { &mut node.right };
        }

        let Some(mut node) = link.take() else { unreachable!() };
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(only), None) | (None, Some(only)) => Some(only),
            (Some(left), Some(right)) => {
                let (mut successor, rest) = detach_min(right);
                successor.left = Some(left);
                successor.right = rest;
                Some(successor)
            }
        };
        self.len -= 1;
        return node.item;
    }

    /// Ascending in-order traversal.
    pub fn iter(&self) -> Iter<'_, K, I> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        return iter;
    }

    /// Descending traversal: the ascending traversal pushed through a stack
    /// and popped back off, no re-sorting.
    pub fn descending(&self) -> impl Iterator<Item = (&K, &I)> {
        let mut stack = Vec::with_capacity(self.len);
        for pair in self.iter() {
            stack.push(pair);
        }
        return std::iter::from_fn(move || stack.pop());
    }
}

/// Build the subtree for the half-open index range `[lo, end)`, consuming
/// `sorted` in order. The root is the element at `(lo + hi) / 2` where
/// `hi = end - 1`.
fn build_range<K, I, S>(sorted: &mut S, lo: usize, end: usize) -> Link<K, I>
where
    S: Iterator<Item = (K, I)>,
{
    if lo >= end {
        return None;
    }
    let mid = (lo + end - 1) / 2;
    let left = build_range(sorted, lo, mid);
    let (key, item) = sorted.next().expect("sorted run shorter than its index range");
    let right = build_range(sorted, mid + 1, end);
    return Some(Box::new(Node { key, item, left, right }));
}

/// Unhook the leftmost node of a subtree. Returns it along with what is left
/// of the subtree.
fn detach_min<K, I>(mut node: Box<Node<K, I>>) -> (Box<Node<K, I>>, Link<K, I>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            return (node, rest);
        }
        Some(left) => {
            let (min, rest) = detach_min(left);
            node.left = rest;
            return (min, Some(node));
        }
    }
}

/// Ascending in-order iterator over a [`BalancedTree`].
pub struct Iter<'a, K, I> {
    stack: Vec<&'a Node<K, I>>,
}

impl<'a, K, I> Iter<'a, K, I> {
    fn push_left(&mut self, mut link: Option<&'a Node<K, I>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, K, I> Iterator for Iter<'a, K, I> {
    type Item = (&'a K, &'a I);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        return Some((&node.key, &node.item));
    }
}
