//! A self-balancing BST (specifically, an AVL tree) of unique elements. Every node owns its
//! children outright and stores its own height so that, after each insert or remove, the nodes
//! on the path back to the root can detect and correct any imbalance on the way up.
//!
//! # Examples
//!
//! ```
//! use avl::balanced::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(tree.find_min().is_err());
//!
//! // Ascending inserts would make a chain without rebalancing.
//! assert!(tree.insert(10));
//! assert!(tree.insert(20));
//! assert!(tree.insert(30));
//! assert_eq!(tree.height(), 1);
//!
//! // Duplicates are ignored.
//! assert!(!tree.insert(20));
//! assert_eq!(tree.traverse().collect::<Vec<_>>(), [&10, &20, &30]);
//!
//! assert!(tree.remove(&20));
//! assert!(!tree.contains(&20));
//! assert_eq!(tree.find_min(), Ok(&10));
//! assert_eq!(tree.find_max(), Ok(&30));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::mem;

use crate::util::{self, Branch, InOrder};
use crate::UnderflowError;

/// How much taller one child of a node may be than the other before the node is rotated.
const ALLOWED_IMBALANCE: isize = 1;

type Link<T> = Option<Box<Node<T>>>;

/// A self-balancing Binary Search Tree. This can be used for inserting, finding, and removing
/// elements. Inserting an element that is already present leaves the tree unchanged.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
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
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::balanced::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.traverse().count(), 1);
    /// ```
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
    /// use avl::balanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert!(tree.is_empty());
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
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::balanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
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
        self.root = None;
    }

    /// Returns a lazy iterator over the elements of the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::balanced::Tree;
    ///
    /// let tree: Tree<_> = vec![3, 1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn traverse(&self) -> Iter<'_, T> {
        Iter(InOrder::new(self.root()))
    }

    /// The length of the longest path from the root to an empty subtree, not counting the empty
    /// subtree. An empty tree has a height of -1 and a tree with a single element has a height
    /// of 0.
    pub fn height(&self) -> isize {
        height(&self.root)
    }

    /// Walks the whole tree and checks that every node's stored height matches its children and
    /// that no node's children differ in height by more than one.
    pub fn is_balanced(&self) -> bool {
        checked_height(&self.root).is_some()
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

/// Inserts `value` somewhere under `link`, creating a leaf at the first empty position, and
/// rebalances every node on the way back up. Returns whether a node was created.
fn insert<T: Ord>(link: &mut Link<T>, value: T) -> bool {
    let node = match link {
        Some(node) => node,
        None => {
            *link = Some(Box::new(Node::new(value)));
            return true;
        }
    };

    let inserted = match value.cmp(&node.value) {
        Ordering::Less => insert(&mut node.left, value),
        Ordering::Equal => false,
        Ordering::Greater => insert(&mut node.right, value),
    };
    if inserted {
        node.balance();
    }

    if cfg!(debug_assertions) {
        if let Some(left) = node.left.as_deref() {
            assert!(node.value > left.value);
        }
        if let Some(right) = node.right.as_deref() {
            assert!(node.value < right.value);
        }
    }
    inserted
}

/// Removes the node holding `value` from under `link` and rebalances every node on the way back
/// up. Returns whether a node was removed.
fn remove<T: Ord>(link: &mut Link<T>, value: &T) -> bool {
    let node = match link {
        Some(node) => node,
        None => return false,
    };

    match value.cmp(&node.value) {
        Ordering::Less => {
            if !remove(&mut node.left, value) {
                return false;
            }
        }
        Ordering::Greater => {
            if !remove(&mut node.right, value) {
                return false;
            }
        }
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            // Promote the in-order successor: the smallest element of the right subtree.
            if let Some(successor) = take_min(&mut node.right) {
                node.value = successor;
            }
        }
        Ordering::Equal => {
            // Zero or one child: the surviving child (if any) takes this node's place and is
            // already balanced.
            if let Some(spliced) = link.take() {
                let Node { left, right, .. } = *spliced;
                *link = left.or(right);
            }
            return true;
        }
    }

    node.balance();
    true
}

/// Detaches the leftmost node under `link`, rebalancing every node on the path to it, and returns
/// its value.
fn take_min<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        let min = take_min(&mut node.left);
        node.balance();
        return min;
    }

    let Node { value, right, .. } = *link.take()?;
    *link = right;
    Some(value)
}

fn height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(-1, |n| n.height)
}

/// Recomputes heights from scratch, returning `None` if any node is unbalanced or stores a stale
/// height.
fn checked_height<T>(link: &Link<T>) -> Option<isize> {
    let node = match link {
        Some(node) => node,
        None => return Some(-1),
    };
    let left = checked_height(&node.left)?;
    let right = checked_height(&node.right)?;
    let actual = left.max(right) + 1;

    if (left - right).abs() > ALLOWED_IMBALANCE || node.height != actual {
        None
    } else {
        Some(actual)
    }
}

/// A `Node` holds one element, the height of the subtree it roots, and up to two children.
#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,

    /// The longest path from this node to an empty subtree. A node with no children has a
    /// height of 0.
    height: isize,
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
            height: 0,
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// Restores the height invariant at this node, assuming its children differ in height by at
    /// most two and are themselves balanced. The node stays the root of its subtree; rotations
    /// move values between nodes instead of replacing it.
    ///
    /// Ties between the two grandchildren on the taller side must go to the single rotation. A
    /// double rotation on a tie (only possible after a removal) can leave one of the new children
    /// unbalanced.
    fn balance(&mut self) {
        if self.is_leaf() {
            self.height = 0;
            return;
        }

        let left_height = height(&self.left);
        let right_height = height(&self.right);
        if left_height - right_height > ALLOWED_IMBALANCE {
            let (outer, inner) = self
                .left
                .as_ref()
                .map_or((-1, -1), |l| (height(&l.left), height(&l.right)));
            if outer >= inner {
                log::trace!("balance: single rotation with left child");
                self.rotate_with_left_child();
            } else {
                log::trace!("balance: double rotation with left child");
                self.double_with_left_child();
            }
        } else if right_height - left_height > ALLOWED_IMBALANCE {
            let (outer, inner) = self
                .right
                .as_ref()
                .map_or((-1, -1), |r| (height(&r.right), height(&r.left)));
            if outer >= inner {
                log::trace!("balance: single rotation with right child");
                self.rotate_with_right_child();
            } else {
                log::trace!("balance: double rotation with right child");
                self.double_with_right_child();
            }
        }
        self.fix_height();

        if cfg!(debug_assertions) {
            let left_height = height(&self.left);
            let right_height = height(&self.right);
            assert_eq!(self.height, left_height.max(right_height) + 1);
            assert!((left_height - right_height).abs() <= ALLOWED_IMBALANCE);
        }
    }

    /// Lifts the left child's value into this node. Used when the left child's left subtree is
    /// too tall. Does nothing without a left child.
    ///
    /// # Diagram
    ///
    /// Node shells keep their position in the tree; `a` and `b` are the values they hold.
    ///
    /// ```text
    ///        b                 a
    ///       / \               / \
    ///      a   z   rotate ->  x   b
    ///     / \                    / \
    ///    x   y                  y   z
    /// ```
    fn rotate_with_left_child(&mut self) {
        let Some(mut child) = self.left.take() else {
            return;
        };
        self.left = child.left.take();
        child.left = child.right.take();
        child.right = self.right.take();
        mem::swap(&mut self.value, &mut child.value);
        child.fix_height();
        self.right = Some(child);
        self.fix_height();
    }

    /// Mirror image of [`Node::rotate_with_left_child`].
    ///
    /// ```text
    ///      a                     b
    ///     / \                   / \
    ///    x   b     rotate ->   a   z
    ///       / \               / \
    ///      y   z             x   y
    /// ```
    fn rotate_with_right_child(&mut self) {
        let Some(mut child) = self.right.take() else {
            return;
        };
        self.right = child.right.take();
        child.right = child.left.take();
        child.left = self.left.take();
        mem::swap(&mut self.value, &mut child.value);
        child.fix_height();
        self.left = Some(child);
        self.fix_height();
    }

    /// Lifts the left child's right child's value into this node. Used when the left child's
    /// right subtree is too tall, where a single rotation would just move the problem to the
    /// other side. Does nothing unless that grandchild exists.
    ///
    /// ```text
    ///        c                      b
    ///       / \                   /   \
    ///      a   z                 a     c
    ///     / \       rotate ->   / \   / \
    ///    w   b                 w   x y   z
    ///       / \
    ///      x   y
    /// ```
    fn double_with_left_child(&mut self) {
        let Some(mut child) = self.left.take() else {
            return;
        };
        let Some(mut grandchild) = child.right.take() else {
            self.left = Some(child);
            return;
        };
        child.right = grandchild.left.take();
        grandchild.left = grandchild.right.take();
        grandchild.right = self.right.take();
        mem::swap(&mut self.value, &mut grandchild.value);
        child.fix_height();
        grandchild.fix_height();
        self.left = Some(child);
        self.right = Some(grandchild);
        self.fix_height();
    }

    /// Mirror image of [`Node::double_with_left_child`].
    ///
    /// ```text
    ///      a                        b
    ///     / \                     /   \
    ///    w   c                   a     c
    ///       / \     rotate ->   / \   / \
    ///      b   z               w   x y   z
    ///     / \
    ///    x   y
    /// ```
    fn double_with_right_child(&mut self) {
        let Some(mut child) = self.right.take() else {
            return;
        };
        let Some(mut grandchild) = child.left.take() else {
            self.right = Some(child);
            return;
        };
        child.left = grandchild.right.take();
        grandchild.right = grandchild.left.take();
        grandchild.left = self.left.take();
        mem::swap(&mut self.value, &mut grandchild.value);
        child.fix_height();
        grandchild.fix_height();
        self.left = Some(grandchild);
        self.right = Some(child);
        self.fix_height();
    }
}
