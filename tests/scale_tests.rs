use digitsort::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

#[test]
fn test_seeded_short_keys() {
    // Short rows repeatedly hit the sentinel path ([] vs [0] vs [0, b]).
    let mut rng = StdRng::seed_from_u64(42);

    for _iter in 0..10 {
        let len = rng.random_range(2000..5000);
        let d = rng.random_range(0..4);
        let mut input: Vec<Vec<u8>> = Vec::new();

        for _ in 0..len {
            let row_len = rng.random_range(0..4);
            let mut row = vec![0u8; row_len];
            rng.fill(&mut row[..]);
            input.push(row);
        }

        let mut expected = input.clone();
        expected.sort_by_key(|row| row.get(d).copied());

        DigitSorter::new().sort_by_position_mut(&mut input, d);

        assert_eq!(input, expected);
    }
}

#[test]
fn test_sort_100k() {
    let count = 100_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut input: Vec<Vec<u8>> = Vec::with_capacity(count);

    for _ in 0..count {
        let len = rng.random_range(4..16);
        let mut row = vec![0u8; len];
        rng.fill(&mut row[..]);
        input.push(row);
    }

    println!("Sorting {} elements by position 0...", count);
    let mut sorter = DigitSorter::new();
    let start = Instant::now();
    sorter.sort_by_position_mut(&mut input, 0);
    let duration = start.elapsed();
    println!("Sorted {} elements in {:?}", count, duration);

    assert_eq!(input.len(), count);
    assert_eq!(sorter.accesses(), 2 * count as u64);
    assert!(sorter.is_sorted_by_position(&input, 0));

    for pair in input.windows(2) {
        assert!(pair[0].first() <= pair[1].first());
    }
}
