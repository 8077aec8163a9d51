//! Algebraic laws of union in place, checked with quickcheck

use quickcheck_macros::quickcheck;
use uniqset::sets::Set;

fn build(values: Vec<u16>) -> Set<u16> {
    Set::from_values(values)
}

#[quickcheck]
fn union_is_commutative(a: Vec<u16>, b: Vec<u16>) -> bool {
    let (a, b) = (build(a), build(b));
    a.union(&b) == b.union(&a)
}

#[quickcheck]
fn union_is_associative(a: Vec<u16>, b: Vec<u16>, c: Vec<u16>) -> bool {
    let (a, b, c) = (build(a), build(b), build(c));
    a.union(&b).union(&c) == a.union(&b.union(&c))
}

#[quickcheck]
fn union_is_idempotent(a: Vec<u16>) -> bool {
    let a = build(a);
    a.union(&a) == a
}

#[quickcheck]
fn add_set_matches_union(a: Vec<u16>, b: Vec<u16>) -> bool {
    let (mut a, b) = (build(a), build(b));
    let expected = a.union(&b);
    a.add_set(&b);
    a == expected
}

#[quickcheck]
fn remove_all_then_contains_none(a: Vec<u16>, removed: Vec<u16>) -> bool {
    let mut set = build(a);
    set.remove_all(&removed);
    removed.iter().all(|value| !set.contains(value))
}
