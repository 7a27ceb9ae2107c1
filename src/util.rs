/// The parts of a tree node that traversal and extremal lookups need. Both tree variants store
/// their children differently (the balanced one also tracks a height) but walk them the same way.
pub(crate) trait Branch {
    /// The element type stored in each node.
    type Item;

    fn item(&self) -> &Self::Item;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
}

/// Follows left children from `node` until there are none. The result holds the smallest element
/// of the subtree.
pub(crate) fn leftmost<N: Branch>(mut node: &N) -> &N {
    while let Some(left) = node.left() {
        node = left;
    }
    node
}

/// Follows right children from `node` until there are none. The result holds the largest element
/// of the subtree.
pub(crate) fn rightmost<N: Branch>(mut node: &N) -> &N {
    while let Some(right) = node.right() {
        node = right;
    }
    node
}

/// A lazy in-order walk. The stack holds the nodes whose left subtrees have been entered but
/// which haven't been yielded yet, so it never grows past the height of the tree.
pub(crate) struct InOrder<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: Branch> InOrder<'a, N> {
    pub(crate) fn new(root: Option<&'a N>) -> Self {
        let mut walk = Self { stack: Vec::new() };
        walk.push_left_spine(root);
        walk
    }

    fn push_left_spine(&mut self, mut node: Option<&'a N>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, N: Branch> Iterator for InOrder<'a, N> {
    type Item = &'a N::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.item())
    }
}

impl<N> Clone for InOrder<'_, N> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}
