/// Weighted union-find (disjoint-set) with full path compression.
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// Create a union-find with `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Find the representative of the set containing `id`.
    ///
    /// Every node visited on the way up is re-pointed directly at the root.
    pub fn find(&mut self, mut id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while id != root {
            let next = self.parent[id];
            self.parent[id] = root;
            id = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `false` if they were already in the same set. The larger tree
    /// becomes the root.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            self.parent[ra] = rb;
            self.size[rb] += self.size[ra];
        } else {
            self.parent[rb] = ra;
            self.size[ra] += self.size[rb];
        }
        true
    }

    /// Size of the set containing `id` (including `id` itself).
    pub fn set_size(&mut self, id: usize) -> usize {
        let r = self.find(id);
        self.size[r]
    }
}
