use avl::balanced::Tree;
use avl::UnderflowError;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same elements in both, and that both
/// agree on which inserts were duplicates and which removes found nothing.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => assert_eq!(tree.insert(x.clone()), set.insert(x.clone())),
            Op::Remove(x) => assert_eq!(tree.remove(x), set.remove(x)),
        }
        assert!(tree.is_balanced());
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.traverse().eq(set.iter())
}

#[quickcheck]
fn reinserting_and_removing_twice_report_no_change(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| !tree.insert(*x))
        && xs.iter().all(|x| {
            let was_present = tree.contains(x);
            tree.remove(x) == was_present && !tree.remove(x) && !tree.contains(x)
        })
        && tree.is_empty()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.is_balanced()
}

#[quickcheck]
fn inserting_twice_changes_nothing(xs: Vec<i16>) -> bool {
    let once: Tree<_> = xs.iter().copied().collect();
    let mut twice = once.clone();
    twice.extend(xs.iter().copied());

    once.traverse().eq(twice.traverse()) && once.height() == twice.height()
}

#[quickcheck]
fn min_and_max_match_the_elements(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    match (xs.iter().min(), xs.iter().max()) {
        (Some(min), Some(max)) => tree.find_min() == Ok(min) && tree.find_max() == Ok(max),
        _ => tree.find_min() == Err(UnderflowError) && tree.find_max() == Err(UnderflowError),
    }
}
