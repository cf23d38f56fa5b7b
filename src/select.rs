use crate::mmheap::MmHeap;

/// Select the k smallest values from a stream in O(n log(k)) time and O(k)
/// space, which beats sorting the whole input whenever k is much smaller
/// than n.
/// Returns at most min(n, k) (value, position) pairs in ascending value
/// order, where position is the 0-based index the value had in the input.
/// Only strictly smaller values displace a retained one, so among equal
/// values the earliest-seen instances are kept.
pub fn k_smallest<V: Ord>(values: impl IntoIterator<Item = V>, k: usize) -> Vec<(V, usize)> {
    if k == 0
        { return Vec::new() }
    let mut heap = MmHeap::with_capacity(k);
    for (i, v) in values.into_iter().enumerate() {
        if heap.is_full() {
            // the largest retained value is the one at stake
            if heap.peek_max_value().is_ok_and(|m|&v < m) {
                heap.remove_max().unwrap();
                heap.insert(v, i).unwrap();
            }
        } else {
            heap.insert(v, i).unwrap();
        }
    }
    let mut res = Vec::with_capacity(heap.len());
    while let Ok(pair) = heap.remove_min() {
        res.push(pair)
    }
    res
}

/// Select the k largest values from a stream, the mirror image of
/// `k_smallest`: the result is in descending value order and among equal
/// values the earliest-seen instances are kept.
pub fn k_largest<V: Ord>(values: impl IntoIterator<Item = V>, k: usize) -> Vec<(V, usize)> {
    if k == 0
        { return Vec::new() }
    let mut heap = MmHeap::with_capacity(k);
    for (i, v) in values.into_iter().enumerate() {
        if heap.is_full() {
            if heap.peek_min_value().is_ok_and(|m|&v > m) {
                heap.remove_min().unwrap();
                heap.insert(v, i).unwrap();
            }
        } else {
            heap.insert(v, i).unwrap();
        }
    }
    let mut res = Vec::with_capacity(heap.len());
    while let Ok(pair) = heap.remove_max() {
        res.push(pair)
    }
    res
}
