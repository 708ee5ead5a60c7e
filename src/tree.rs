// src/tree.rs
// FREQUENCY TREE
// Unbalanced binary search tree keyed by (frequency, triplet).
//
// Nodes live in an arena and refer to their children by id. The tree is bulk-loaded
// once per load cycle, after the index is complete, and is read-only afterwards.
//
// There is NO rebalancing and NO deletion. Height is O(log n) on average for
// insertion orders uncorrelated with frequency, but degrades to O(n) when keys
// arrive sorted (e.g. ascending frequency). Insert, traversal and height are all
// iterative so a degenerate tree cannot overflow the call stack.

use tracing::warn;

use crate::index::TripletIndex;
use crate::sequence::Triplet;

#[derive(Debug, Clone)]
struct FrequencyNode {
    triplet: Triplet,
    frequency: usize,
    left: Option<usize>,
    right: Option<usize>,
}

impl FrequencyNode {
    fn key(&self) -> (usize, Triplet) {
        (self.frequency, self.triplet)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FrequencyTree {
    nodes: Vec<FrequencyNode>,
    root: Option<usize>,
}

impl FrequencyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every distinct triplet of `index` with its final frequency,
    /// in the index's bucket/chain order.
    pub fn from_index(index: &TripletIndex) -> Self {
        let mut tree = Self::new();
        for entry in index.entries() {
            tree.insert(entry.triplet(), entry.frequency());
        }
        tree
    }

    /// Plain BST insertion: smaller keys go left, everything else goes right.
    ///
    /// A key equal to an existing one is kept as a separate node on the right.
    /// The load protocol inserts each triplet once, so this only happens on misuse.
    pub fn insert(&mut self, triplet: Triplet, frequency: usize) {
        let id = self.nodes.len();
        let key = (frequency, triplet);

        let Some(mut cursor) = self.root else {
            self.nodes.push(FrequencyNode { triplet, frequency, left: None, right: None });
            self.root = Some(id);
            return;
        };

        loop {
            let node = &self.nodes[cursor];
            let node_key = node.key();
            if key == node_key {
                warn!(%triplet, frequency, "duplicate key inserted into frequency tree");
            }

            let go_left = key < node_key;
            let child = if go_left { node.left } else { node.right };
            match child {
                Some(next) => cursor = next,
                None => {
                    self.nodes.push(FrequencyNode { triplet, frequency, left: None, right: None });
                    let parent = &mut self.nodes[cursor];
                    if go_left {
                        parent.left = Some(id);
                    } else {
                        parent.right = Some(id);
                    }
                    return;
                }
            }
        }
    }

    /// Ascending (frequency, triplet) traversal.
    pub fn iter(&self) -> InOrder<'_> {
        let mut iter = InOrder { nodes: &self.nodes, stack: Vec::new() };
        iter.push_left_spine(self.root);
        iter
    }

    pub fn in_order(&self) -> Vec<(Triplet, usize)> {
        self.iter().collect()
    }

    /// Highest frequency first.
    pub fn descending(&self) -> Vec<(Triplet, usize)> {
        let mut entries = self.in_order();
        entries.reverse();
        entries
    }

    /// Rightmost node. O(height); `None` on an empty tree.
    pub fn most_frequent(&self) -> Option<(Triplet, usize)> {
        self.walk(|n| n.right)
    }

    /// Leftmost node. O(height); `None` on an empty tree.
    pub fn least_frequent(&self) -> Option<(Triplet, usize)> {
        self.walk(|n| n.left)
    }

    fn walk(&self, step: impl Fn(&FrequencyNode) -> Option<usize>) -> Option<(Triplet, usize)> {
        let mut node = &self.nodes[self.root?];
        while let Some(next) = step(node) {
            node = &self.nodes[next];
        }
        Some((node.triplet, node.frequency))
    }

    /// Nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|c| (c, depth + 1)));
            stack.extend(node.right.map(|c| (c, depth + 1)));
        }
        max_depth
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

/// In-order iterator driven by an explicit stack of pending ancestors.
pub struct InOrder<'a> {
    nodes: &'a [FrequencyNode],
    stack: Vec<usize>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut cursor: Option<usize>) {
        while let Some(id) = cursor {
            self.stack.push(id);
            cursor = self.nodes[id].left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = (Triplet, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let nodes = self.nodes;
        let node = &nodes[id];
        self.push_left_spine(node.right);
        Some((node.triplet, node.frequency))
    }
}
