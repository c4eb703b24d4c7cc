use common::{astar::Score, IndexedHeap};

#[test]
fn pop_returns_smallest_first() {
    let mut heap = IndexedHeap::new();
    for (key, priority) in [('a', 5), ('b', 1), ('c', 4), ('d', 2), ('e', 3)] {
        heap.upsert(key, priority);
    }

    let mut popped = Vec::new();
    while let Some((key, _)) = heap.pop() {
        popped.push(key);
    }
    assert_eq!(popped, vec!['b', 'd', 'e', 'c', 'a']);
    assert!(heap.is_empty());
}

#[test]
fn pop_on_empty_heap_is_none() {
    let mut heap: IndexedHeap<u32, u32> = IndexedHeap::new();
    assert_eq!(heap.pop(), None);
}

#[test]
fn upsert_existing_key_replaces_priority() {
    let mut heap = IndexedHeap::new();
    heap.upsert("x", 10);
    heap.upsert("y", 5);
    heap.upsert("z", 7);
    assert_eq!(heap.len(), 3);

    heap.upsert("x", 1);
    assert_eq!(heap.len(), 3);
    assert!(heap.contains(&"x"));
    assert_eq!(heap.priority(&"x"), Some(&1));
    assert_eq!(heap.peek(), Some((&"x", &1)));

    heap.upsert("x", 20);
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.pop(), Some(("y", 5)));
    assert_eq!(heap.pop(), Some(("z", 7)));
    assert_eq!(heap.pop(), Some(("x", 20)));
    assert!(!heap.contains(&"x"));
}

#[test]
fn score_breaks_ties_with_smaller_g() {
    let mut heap = IndexedHeap::new();
    heap.upsert("far", Score::new(6u32, 0));
    heap.upsert("near", Score::new(2u32, 4));
    heap.upsert("cheap", Score::new(1u32, 1));

    assert_eq!(heap.pop().map(|(k, _)| k), Some("cheap"));
    assert_eq!(heap.pop().map(|(k, _)| k), Some("near"));
    assert_eq!(heap.pop().map(|(k, _)| k), Some("far"));
}

#[test]
fn many_updates_keep_heap_order() {
    let mut heap = IndexedHeap::new();
    let mut expected = vec![None; 64];
    let mut seed = 0x2545_f491_u64;
    for round in 0..1000 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let key = (seed >> 33) as usize % expected.len();
        let priority = (seed >> 13) % 10_000 + round;
        expected[key] = Some(priority);
        heap.upsert(key, priority);
        assert!(heap.contains(&key));
    }

    let mut last = 0;
    let mut popped_n = 0;
    while let Some((key, priority)) = heap.pop() {
        assert!(priority >= last);
        assert_eq!(Some(priority), expected[key]);
        last = priority;
        popped_n += 1;
    }
    assert_eq!(popped_n, expected.iter().flatten().count());
}
