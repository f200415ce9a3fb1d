use containers::{
    dynamic_array, errors::Error, linked_list, DoublyLinkedList, DynamicArray, Sequence,
    SortStrategy,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn contents<S>(sequence: &S) -> Vec<S::Item>
where
    S: Sequence,
    S::Item: Clone,
{
    (0..sequence.count())
        .map(|i| sequence.get(i).unwrap().clone())
        .collect()
}

fn check_append<S: Sequence<Item = u32> + Default>() {
    let mut sequence = S::default();
    for value in 0..=10 {
        sequence.append(value);
    }

    assert_eq!(sequence.count(), 11);
    assert_eq!(sequence.get(10), Ok(&10));
    assert_eq!(contents(&sequence), (0..=10).collect::<Vec<_>>());
}

fn check_insert_and_remove<S: Sequence<Item = u32> + Default>() {
    let mut sequence = S::default();
    for value in [10, 20, 30, 40] {
        sequence.append(value);
    }

    sequence.insert(25, 2).unwrap();
    assert_eq!(contents(&sequence), [10, 20, 25, 30, 40]);

    assert_eq!(sequence.remove(1), Ok(20));
    assert_eq!(contents(&sequence), [10, 25, 30, 40]);
    assert_eq!(sequence.count(), 4);

    assert_eq!(
        sequence.insert(1, 5),
        Err(Error::IndexOutOfRange { index: 5, len: 4 })
    );
    assert_eq!(
        sequence.remove(4),
        Err(Error::IndexOutOfRange { index: 4, len: 4 })
    );

    sequence.prepend(5);
    assert_eq!(sequence.first(), Some(&5));
    assert_eq!(sequence.pop_last(), Some(40));
    assert_eq!(sequence.last(), Some(&30));
}

fn check_clear<S: Sequence<Item = u32> + Default>() {
    let mut sequence = S::default();
    sequence.append(1);
    sequence.append(2);
    sequence.clear();

    assert_eq!(sequence.count(), 0);
    assert!(sequence.is_empty());
    assert_eq!(
        sequence.get(0),
        Err(Error::IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(sequence.pop_last(), None);
}

fn check_sort<S: Sequence<Item = u32> + Default>() {
    let mut sequence = S::default();
    for value in [5, 3, 8] {
        sequence.append(value);
    }
    sequence.sort();
    assert_eq!(contents(&sequence), [3, 5, 8]);
}

#[test]
fn dynamic_array_follows_the_contract() {
    check_append::<DynamicArray<u32>>();
    check_insert_and_remove::<DynamicArray<u32>>();
    check_clear::<DynamicArray<u32>>();
    check_sort::<DynamicArray<u32>>();
}

#[test]
fn linked_list_follows_the_contract() {
    check_append::<DoublyLinkedList<u32>>();
    check_insert_and_remove::<DoublyLinkedList<u32>>();
    check_clear::<DoublyLinkedList<u32>>();
    check_sort::<DoublyLinkedList<u32>>();
}

#[test]
fn both_containers_print_the_same() {
    let mut array = dynamic_array![5, 3, 8];
    let mut list = linked_list![5, 3, 8];
    array.sort();
    list.sort();

    assert_eq!(array.to_string(), "[3, 5, 8]");
    assert_eq!(list.to_string(), array.to_string());
}

/// Replays the same random operations on a container and on a `Vec`.
fn differential<S: Sequence<Item = u32> + Default>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sequence = S::default();
    let mut reference: Vec<u32> = Vec::new();

    for _ in 0..2_000 {
        let value = rng.random_range(0..=100);
        match rng.random_range(0..4) {
            0 => {
                sequence.append(value);
                reference.push(value);
            }
            1 => {
                let at = rng.random_range(0..=reference.len());
                sequence.insert(value, at).unwrap();
                reference.insert(at, value);
            }
            2 if !reference.is_empty() => {
                let at = rng.random_range(0..reference.len());
                assert_eq!(sequence.remove(at), Ok(reference.remove(at)));
            }
            _ if !reference.is_empty() => {
                let at = rng.random_range(0..reference.len());
                assert_eq!(sequence.get(at), Ok(&reference[at]));
            }
            _ => {}
        }
        assert_eq!(sequence.count(), reference.len());
    }

    assert_eq!(contents(&sequence), reference);

    sequence.sort();
    reference.sort_unstable();
    assert_eq!(contents(&sequence), reference);
}

#[test]
fn dynamic_array_matches_vec_under_random_operations() {
    for seed in 0..4 {
        differential::<DynamicArray<u32>>(seed);
    }
}

#[test]
fn linked_list_matches_vec_under_random_operations() {
    for seed in 0..4 {
        differential::<DoublyLinkedList<u32>>(seed);
    }
}

#[test]
fn head_inserts_across_growth_keep_every_element() {
    let mut rng = StdRng::seed_from_u64(42);
    let values: Vec<u32> = (0..1_000).map(|_| rng.random_range(0..=100)).collect();

    let mut array = DynamicArray::new();
    for &value in &values {
        array.insert(value, 0).unwrap();
    }

    let expected: Vec<u32> = values.iter().rev().copied().collect();
    assert_eq!(contents(&array), expected);
}

#[test]
fn quick_and_bubble_paths_agree_around_the_threshold() {
    let mut rng = StdRng::seed_from_u64(101);

    for len in [99, 100, 101, 150] {
        let values: Vec<u32> = (0..len).map(|_| rng.random_range(0..=100)).collect();

        let mut by_threshold: DynamicArray<u32> = values.iter().copied().collect();
        let expected_strategy = if len > 100 {
            SortStrategy::Quick
        } else {
            SortStrategy::Bubble
        };
        assert_eq!(by_threshold.sort_strategy(), expected_strategy);
        by_threshold.sort();

        let mut quick: DynamicArray<u32> = values.iter().copied().collect();
        quick.sort_with(SortStrategy::Quick);
        let mut bubble: DynamicArray<u32> = values.iter().copied().collect();
        bubble.sort_with(SortStrategy::Bubble);
        let mut list: DoublyLinkedList<u32> = values.iter().copied().collect();
        list.sort();

        let mut expected = values;
        expected.sort_unstable();
        assert_eq!(contents(&by_threshold), expected);
        assert_eq!(quick, bubble);
        assert_eq!(contents(&list), expected);
    }
}

#[test]
fn trim_drops_only_absent_slots() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut array = DynamicArray::new();
    let mut present = Vec::new();

    for _ in 0..300 {
        if rng.random_bool(0.3) {
            array.append(None);
        } else {
            let value: u32 = rng.random_range(0..=100);
            array.append(Some(value));
            present.push(Some(value));
        }
    }

    let absent = array.count() - present.len();
    assert_eq!(array.trim(), absent);
    assert_eq!(contents(&array), present);
}
