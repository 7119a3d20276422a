#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_from_sequence() {
    let list = LinkedList::from([1, 2, 3, 4, 5]);
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [1, 2, 3, 4, 5],
        "Constructing from a sequence should preserve its order."
    );
    assert_eq!(list.len(), 5);

    let list = LinkedList::from(&["a", "b"][..]);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["a", "b"]);

    let list = (0..3).collect::<LinkedList<_>>();
    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&0));

    let sequences: [&[i32]; 4] = [&[], &[7], &[3, 1, 2], &[5, 5, 5, 5]];
    for values in sequences {
        let list = values.iter().copied().collect::<LinkedList<_>>();
        assert_eq!(list.len(), values.len(), "The length should match the source sequence.");
        assert!(list.iter().eq(values), "Every element should be kept, in order.");
        assert_eq!(list, LinkedList::from(values));
    }

    let list = LinkedList::<u8>::from([]);
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list, std::iter::empty().collect::<LinkedList<u8>>());
}

#[test]
fn test_empty() {
    let list = LinkedList::<u8>::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.front(), None);
    assert_eq!(list.iter().next(), None);
    assert_eq!(list.begin(), list.end(), "An empty list should begin at its end.");

    let list = LinkedList::<u8>::default();
    assert!(list.is_empty());
}

#[test]
fn test_push_pop() {
    let mut list = LinkedList::from([1, 2, 3]);
    let before = list.clone();

    list.push_front(0);
    assert_eq!(list.len(), 4);
    assert_eq!(list.front(), Some(&0));

    assert_eq!(list.pop_front(), 0);
    assert_eq!(list, before, "Push then pop should restore the list.");
    assert_eq!(list.len(), 3);

    *list.front_mut().unwrap() = 10;
    assert_eq!(list.pop_front(), 10);
    assert_eq!(list.pop_front(), 2);
    assert_eq!(list.pop_front(), 3);
    assert!(list.is_empty());
}

#[test]
fn test_pop_empty() {
    let mut list = LinkedList::<u8>::new();
    assert_eq!(list.try_pop_front(), Err(ListError::EmptyList));
    assert_eq!(list.len(), 0, "A failed pop shouldn't change the length.");
    assert_eq!(ListError::EmptyList.to_string(), "Operation requires a non-empty list!");

    assert_panics!({
        let mut list = LinkedList::<u8>::new();
        list.pop_front();
    }, ListError::EmptyList);
}

#[test]
fn test_clear() {
    let counter = CountedDrop::counter();
    let mut list = (0..4).map(|_| CountedDrop::new(&counter)).collect::<LinkedList<_>>();

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(counter.get(), 4, "Clearing should drop every element.");

    list.clear();
    assert!(list.is_empty(), "Clearing an empty list should do nothing.");
    assert_eq!(counter.get(), 4);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::counter();
    let list = (0..5).map(|_| CountedDrop::new(&counter)).collect::<LinkedList<_>>();
    assert_eq!(counter.get(), 0);

    drop(list);
    assert_eq!(counter.get(), 5, "Dropping the list should drop every element exactly once.");

    // Dropping doesn't recurse through the chain.
    let list = (0..1_000_000).collect::<LinkedList<u32>>();
    drop(list);
}

#[test]
fn test_swap() {
    let mut a = LinkedList::from([1, 2, 3]);
    let mut b = LinkedList::from([4, 5]);

    a.swap(&mut b);
    assert_eq!(a, LinkedList::from([4, 5]));
    assert_eq!(b, LinkedList::from([1, 2, 3]));
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 3);

    swap(&mut a, &mut b);
    assert_eq!(a, LinkedList::from([1, 2, 3]), "Swapping twice should restore both lists.");
    assert_eq!(b, LinkedList::from([4, 5]), "Swapping twice should restore both lists.");

    let mut empty = LinkedList::new();
    a.swap(&mut empty);
    assert!(a.is_empty());
    assert_eq!(empty.len(), 3);
}

#[test]
fn test_clone() {
    let original = LinkedList::from([1, 2, 3]);
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.push_front(0);
    copy.pop_front();
    copy.pop_front();
    assert_eq!(copy, LinkedList::from([2, 3]));
    assert_eq!(
        original,
        LinkedList::from([1, 2, 3]),
        "Mutating a clone shouldn't affect the original."
    );

    let mut list = LinkedList::from([1, 2]);
    list = list.clone();
    assert_eq!(list, LinkedList::from([1, 2]), "Assigning a list its own clone changes nothing.");
}

#[test]
fn test_clone_from() {
    let old_counter = CountedDrop::counter();
    let source_counter = CountedDrop::counter();

    let mut target = (0..3).map(|_| CountedDrop::new(&old_counter)).collect::<LinkedList<_>>();
    let source = (0..2).map(|_| CountedDrop::new(&source_counter)).collect::<LinkedList<_>>();

    target.clone_from(&source);
    assert_eq!(target.len(), 2);
    assert_eq!(source.len(), 2);
    assert_eq!(old_counter.get(), 3, "The previous contents should be dropped.");
    assert_eq!(source_counter.get(), 0, "No copied element should be dropped.");

    drop(target);
    assert_eq!(source_counter.get(), 2);
}

#[test]
fn test_equality() {
    let a = LinkedList::from([1, 2, 3]);
    let b = LinkedList::from([1, 2, 3]);
    assert_eq!(a, b);
    assert!(!(a < b) && !(b < a), "Equal lists shouldn't be ordered.");

    let shorter = LinkedList::from([1, 2]);
    assert_ne!(a, shorter);
    assert_ne!(shorter, a, "Equality should account for length in both directions.");

    assert_ne!(a, LinkedList::from([1, 2, 4]));
    assert_eq!(LinkedList::<u8>::new(), LinkedList::new());
}

#[test]
fn test_ordering() {
    let a = LinkedList::from([1, 2, 3]);
    let b = LinkedList::from([1, 2]);
    assert!(b < a, "A prefix should sort first.");
    assert!(b <= a);
    assert!(a > b);
    assert!(a >= b);
    assert!(!(a < b));

    let c = LinkedList::from([1, 3]);
    assert!(c > a, "Comparison should be lexicographical.");
    assert!(LinkedList::new() < b);
    assert_eq!(a.cmp(&a.clone()), std::cmp::Ordering::Equal);

    let mut lists = vec![c.clone(), a.clone(), b.clone()];
    lists.sort();
    assert_eq!(lists, [b, a, c]);
}

#[test]
#[allow(clippy::eq_op)]
fn test_ordering_unordered_elements() {
    let a = LinkedList::from([f64::NAN, 1.0]);
    let b = LinkedList::from([f64::NAN, 2.0]);
    assert!(a < b, "Elements unordered both ways should be skipped over.");
    assert!(!(b < a));
    assert!(a <= b);
    assert!(b > a);
    assert!(b >= a);
    assert!(!(a > b) && !(a >= b));
    assert_eq!(a.partial_cmp(&b), Some(std::cmp::Ordering::Less));

    let c = LinkedList::from([f64::NAN]);
    assert!(!(c < c));
    assert!(c <= c, "<= should be the negation of the flipped <.");
    assert!(c >= c);
    assert_ne!(c, c);
    assert_eq!(c.partial_cmp(&c), None);

    for (l, r) in [(&a, &b), (&b, &a), (&c, &c), (&a, &c)] {
        assert_eq!(l <= r, !(r < l));
        assert_eq!(l > r, r < l);
        assert_eq!(l >= r, !(l < r));
    }
}

#[test]
fn test_iter() {
    let mut list = LinkedList::from([1, 2, 3]);

    let mut iter = list.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.size_hint(), (2, Some(2)));

    for value in list.iter_mut() {
        *value *= 10;
    }
    assert_eq!(list, LinkedList::from([10, 20, 30]));

    let mut into_iter = list.into_iter();
    assert_eq!(into_iter.len(), 3);
    assert_eq!(into_iter.next(), Some(10));
    assert_eq!(into_iter.collect::<Vec<_>>(), [20, 30]);
}

#[test]
fn test_extend() {
    let mut list = LinkedList::from([1, 2]);
    list.extend([3, 4]);
    assert_eq!(list, LinkedList::from([1, 2, 3, 4]), "Extending should append at the back.");
    assert_eq!(list.len(), 4);

    let mut list = LinkedList::new();
    list.extend([5]);
    assert_eq!(list, LinkedList::from([5]));
}

#[test]
fn test_contains() {
    let list = LinkedList::from(["zero", "one", "two"]);
    assert!(list.contains(&"one"));
    assert!(!list.contains(&"three"));
    assert!(!LinkedList::<&str>::new().contains(&"zero"));
}

#[test]
fn test_hash() {
    let state = RandomState::new();
    let a = LinkedList::from([1, 2, 3]);
    let b = a.clone();
    assert_eq!(state.hash_one(&a), state.hash_one(&b), "Equal lists should hash equally.");
}

#[test]
fn test_fmt() {
    let list = LinkedList::from([1, 2, 3]);
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
    assert_eq!(format!("{list:?}"), "LinkedList { contents: [1, 2, 3], len: 3 }");
    assert_eq!(format!("{}", LinkedList::<u8>::new()), "()");
}
