use thiserror::Error;

/// Returned when asking an empty tree for its smallest or largest element.
///
/// # Examples
///
/// ```
/// use avl::{balanced::Tree, UnderflowError};
///
/// let tree: Tree<i32> = Tree::new();
///
/// assert_eq!(tree.find_min(), Err(UnderflowError));
/// assert_eq!(tree.find_max(), Err(UnderflowError));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot take an extremal element of an empty tree")]
pub struct UnderflowError;
