use avl::Tree;

use std::collections::BTreeSet;

use crate::common::init_logging;
use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], mut tree: Tree<K>, set: &mut BTreeSet<K>) -> Tree<K>
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree = tree.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Delete(k) => {
                tree = tree.delete(k);
                set.remove(k);
            }
        }
        assert_eq!(tree.validate(), Ok(()));
    }

    tree
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut set = BTreeSet::new();

    let tree = do_ops(&ops, Tree::new(), &mut set);
    tree.iter().eq(set.iter()) && tree.len() == set.len()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree = tree.delete(delete);
    }

    let inserted: BTreeSet<_> = xs.into_iter().collect();
    let deleted: BTreeSet<_> = deletes.into_iter().collect();
    let still_present = inserted.difference(&deleted);

    tree.iter().eq(still_present) && tree.validate().is_ok()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn duplicate_insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let once: Tree<_> = xs.iter().copied().chain(Some(x)).collect();
    let shape = format!("{:?}", once);
    let twice = once.clone().insert(x);

    twice == once && twice.len() == once.len() && format!("{:?}", twice) == shape
}

#[quickcheck]
fn deleting_missing_key_keeps_shape(xs: Vec<i8>, missing: i8) -> bool {
    let tree: Tree<_> = xs.iter().copied().filter(|x| *x != missing).collect();
    let shape = format!("{:?}", tree);
    let tree = tree.delete(&missing);

    format!("{:?}", tree) == shape
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<u16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let n = tree.len() as f64;

    tree.height() as f64 <= 1.44 * (n + 2.0).log2()
}

#[quickcheck]
fn insertion_order_is_irrelevant(xs: Vec<i16>) -> bool {
    let forwards: Tree<_> = xs.iter().copied().collect();
    let backwards: Tree<_> = xs.iter().rev().copied().collect();

    forwards == backwards
}

#[quickcheck]
fn deleting_every_key_empties_the_tree(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for x in &xs {
        tree = tree.delete(x);
        if tree.validate().is_err() {
            return false;
        }
    }

    tree.is_empty() && tree.root().is_none()
}
