//! A plain BST that never rebalances. It keeps the same contract as
//! [`balanced::Tree`][crate::balanced::Tree] so the two can be compared directly, but its shape
//! depends entirely on insertion order: ascending inserts build a chain.
//!
//! # Examples
//!
//! ```
//! use avl::unbalanced::Tree;
//!
//! let tree: Tree<_> = (0..8).collect();
//!
//! // Every node only has a right child.
//! assert_eq!(tree.height(), 7);
//! assert!(!tree.is_balanced());
//!
//! assert_eq!(tree.find_min(), Ok(&0));
//! assert_eq!(tree.find_max(), Ok(&7));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

use crate::util::{self, Branch, InOrder};
use crate::UnderflowError;

type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree. Operations take `O(height)` which, depending on the order of
/// insertion, may be `O(N)`. Nothing here recurses per level, so a chain of any length can be
/// built, walked, cloned and dropped.
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        unlink(self.root.take());
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        let root = fold(&self.root, || None, |node, left, right| {
            Some(Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            }))
        });
        Self { root }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.traverse()).finish()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts `value` into the tree. Returns `false`, leaving the tree as it was, when an equal
    /// element is already present.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let inserted = insert(&mut self.root, value);
        if !inserted {
            log::debug!("insert: element already in the tree, ignoring");
        }
        inserted
    }

    /// Removes the element equal to `value` from the tree. Returns `false`, leaving the tree as it
    /// was, when there is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::unbalanced::Tree;
    ///
    /// let mut tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.traverse().collect::<Vec<_>>(), [&1, &3]);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let removed = remove(&mut self.root, value);
        if !removed {
            log::debug!("remove: element not in the tree, ignoring");
        }
        removed
    }

    /// Returns whether an element equal to `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => &node.right,
            };
        }
        false
    }

    /// Returns the smallest element in the tree.
    ///
    /// # Errors
    ///
    /// [`UnderflowError`] if the tree is empty.
    pub fn find_min(&self) -> Result<&T, UnderflowError> {
        self.root()
            .map(|root| util::leftmost(root).item())
            .ok_or(UnderflowError)
    }

    /// Returns the largest element in the tree.
    ///
    /// # Errors
    ///
    /// [`UnderflowError`] if the tree is empty.
    pub fn find_max(&self) -> Result<&T, UnderflowError> {
        self.root()
            .map(|root| util::rightmost(root).item())
            .ok_or(UnderflowError)
    }

    /// Returns whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every element from the tree.
    pub fn make_empty(&mut self) {
        unlink(self.root.take());
    }

    /// Returns a lazy iterator over the elements of the tree in ascending order.
    pub fn traverse(&self) -> Iter<'_, T> {
        Iter(InOrder::new(self.root()))
    }

    /// The length of the longest path from the root to an empty subtree, not counting the empty
    /// subtree. Nothing is cached so this walks the whole tree.
    pub fn height(&self) -> isize {
        fold(&self.root, || -1, |_, left, right| left.max(right) + 1)
    }

    /// Returns whether every node's children differ in height by at most one. Nothing keeps this
    /// true; it's here to compare against [`balanced::Tree`][crate::balanced::Tree].
    pub fn is_balanced(&self) -> bool {
        let balanced_height = fold(&self.root, || Some(-1isize), |_, left, right| match (left, right) {
            (Some(left), Some(right)) if (left - right).abs() <= 1 => Some(left.max(right) + 1),
            _ => None,
        });
        balanced_height.is_some()
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Empty tree");
        }
        for value in self.traverse() {
            writeln!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

/// An in-order iterator over the elements of a [`Tree`], created by [`Tree::traverse`].
pub struct Iter<'a, T>(InOrder<'a, Node<T>>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

fn insert<T: Ord>(link: &mut Link<T>, value: T) -> bool {
    let link = search(link, &value);
    if link.is_some() {
        return false;
    }
    *link = Some(Box::new(Node::new(value)));
    true
}

fn remove<T: Ord>(link: &mut Link<T>, value: &T) -> bool {
    let link = search(link, value);
    let node = match link {
        Some(node) => node,
        None => return false,
    };

    if node.left.is_some() && node.right.is_some() {
        if let Some(successor) = take_min(&mut node.right) {
            node.value = successor;
        }
    } else if let Some(spliced) = link.take() {
        let Node { left, right, .. } = *spliced;
        *link = left.or(right);
    }
    true
}

/// Walks down from `link` and returns the link holding `value`, or the empty link where it would
/// be inserted.
fn search<'a, T: Ord>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
    loop {
        let ordering = match link.as_deref() {
            Some(node) => value.cmp(&node.value),
            None => Ordering::Equal,
        };
        link = match (ordering, link) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, found) => return found,
        };
    }
}

/// Detaches the leftmost node under `link` and returns its value.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = match { link } {
            Some(node) => &mut node.left,
            None => return None,
        };
    }

    let Node { value, right, .. } = *link.take()?;
    *link = right;
    Some(value)
}

/// Drops every node under `link` one at a time, detaching children first so no drop recurses.
fn unlink<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Folds the subtree under `link` bottom-up with an explicit stack. `combine` sees each node
/// after the results for both of its children; `empty` is the result for an empty subtree.
fn fold<'a, T, R>(
    link: &'a Link<T>,
    empty: impl Fn() -> R,
    mut combine: impl FnMut(&'a Node<T>, R, R) -> R,
) -> R {
    enum Frame<'a, T> {
        Visit(&'a Link<T>),
        Combine(&'a Node<T>),
    }

    let mut frames = vec![Frame::Visit(link)];
    let mut results = Vec::new();
    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Visit(None) => results.push(empty()),
            Frame::Visit(Some(node)) => {
                frames.push(Frame::Combine(&**node));
                frames.push(Frame::Visit(&node.right));
                frames.push(Frame::Visit(&node.left));
            }
            Frame::Combine(node) => {
                let right = results.pop();
                let left = results.pop();
                if let (Some(left), Some(right)) = (left, right) {
                    results.push(combine(node, left, right));
                }
            }
        }
    }
    results.pop().unwrap_or_else(empty)
}

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Branch for Node<T> {
    type Item = T;

    fn item(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}
