use digitsort::core::KeyAccessor;
use digitsort::prelude::*;

// Simulate an external struct (like from apache-arrow)
struct MockArrowArray {
    data: Vec<u8>,
    offsets: Vec<usize>,
}

impl MockArrowArray {
    fn new(strings: &[&str]) -> Self {
        let mut data = Vec::new();
        let mut offsets = vec![0];
        for s in strings {
            data.extend_from_slice(s.as_bytes());
            offsets.push(data.len());
        }
        Self { data, offsets }
    }
}

// Implement KeyAccessor for the external struct.
// This proves the trait is implementable by "outside crates".
impl KeyAccessor for MockArrowArray {
    fn get_key(&self, index: usize) -> &[u8] {
        let start = self.offsets[index];
        let end = self.offsets[index + 1];
        &self.data[start..end]
    }

    fn len(&self) -> usize {
        self.offsets.len() - 1
    }
}

#[test]
fn test_external_struct_compatibility() {
    let mock = MockArrowArray::new(&["foo", "bar", "baz"]);
    let mut sorter = DigitSorter::new();

    // Position 0: bar and baz tie on 'b' and keep input order.
    let indices = sorter.sort_by_position(&mock, 0);
    assert_eq!(indices, vec![1, 2, 0]);

    // Position 2: 'o' < 'r' < 'z', input order already sorted.
    let indices = sorter.sort_by_position(&mock, 2);
    assert_eq!(indices, vec![0, 1, 2]);
    assert!(sorter.is_sorted_by_position(&mock, 2));
}

#[test]
fn test_external_struct_past_end() {
    let mock = MockArrowArray::new(&["long-enough", "ab", ""]);
    let mut sorter = DigitSorter::new();

    // At position 5 only the first key has a byte; the other two tie on the
    // sentinel and keep input order.
    let indices = sorter.sort_by_position(&mock, 5);
    assert_eq!(indices, vec![1, 2, 0]);
}
