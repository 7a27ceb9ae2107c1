use avl::{balanced, unbalanced};
use quickcheck_macros::quickcheck;

use crate::Op;

/// Both trees must agree on everything except their shape, otherwise timing one against the
/// other means nothing.
#[quickcheck]
fn trees_agree(ops: Vec<Op<i8>>, probes: Vec<i8>) -> bool {
    let mut avl = balanced::Tree::new();
    let mut bst = unbalanced::Tree::new();

    for op in &ops {
        let agrees = match op {
            Op::Insert(x) => avl.insert(*x) == bst.insert(*x),
            Op::Remove(x) => avl.remove(x) == bst.remove(x),
        };
        if !agrees {
            return false;
        }
    }

    avl.traverse().eq(bst.traverse())
        && avl.find_min() == bst.find_min()
        && avl.find_max() == bst.find_max()
        && avl.is_empty() == bst.is_empty()
        && probes.iter().all(|x| avl.contains(x) == bst.contains(x))
}

/// An AVL tree with `n` nodes has fewer than `1.4405 * lg(n + 2)` levels, whatever order the
/// elements arrive in.
#[quickcheck]
fn balanced_height_is_logarithmic(xs: Vec<u8>) -> bool {
    let avl: balanced::Tree<_> = xs.iter().copied().collect();
    let n = avl.traverse().count();

    (avl.height() + 1) as f64 <= 1.4405 * ((n + 2) as f64).log2()
}

#[test]
fn sorted_input_degenerates_only_without_balancing() {
    let n = 512;
    let avl: balanced::Tree<_> = (0..n).collect();
    let bst: unbalanced::Tree<_> = (0..n).collect();

    assert_eq!(bst.height(), n as isize - 1);
    assert!(avl.height() <= 12);
    assert!(avl.is_balanced());
    assert!(!bst.is_balanced());
}
