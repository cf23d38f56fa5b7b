use std::cmp::Ordering;

use crate::HeapError;

// Nodes with 0-based index i sit on a min level iff the bit length of i + 1
// is odd, which can be read off the leading zero count.  On min levels an
// element must be <= all of its descendants, on max levels >=.  The returned
// Ordering is the direction a comparison must come out for the invariant at
// that level to be violated, which lets the min and max sides of every repair
// walk share one code path.
fn level_ord(i: usize) -> Ordering {
    match (i + 1).leading_zeros() & 1
        { 1 => Ordering::Less, _ => Ordering::Greater }
}

/// A fixed-capacity implicit min-max heap over (value, tag) pairs.
/// The heap order is determined entirely by the value; the tag is an opaque
/// payload (typically the position of the value in some input stream) that
/// travels with its value through every reordering.
/// - Find min / find max: O(1)
/// - Pop min / pop max: O(log(n))
/// - Push: O(log(n))
/// The capacity is chosen at construction and never changes: the backing
/// buffer is allocated once and inserting into a full heap is an error rather
/// than a reallocation.  This is the shape wanted for bounded top-k selection,
/// where a heap of capacity k sees a stream of n >> k candidates.
#[derive(Debug)]
pub struct MmHeap<V, I> {
    buf: Vec<(V, I)>,
    cap: usize
}

impl<V: Ord, I> MmHeap<V, I> {
	/// Create an empty MmHeap holding at most `cap` pairs.
	/// A requested capacity of zero is treated as one, so a freshly built heap
	/// can always accept at least one insert.
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.max(1);
        Self{buf: Vec::with_capacity(cap), cap}
    }

	/// Get the number of pairs currently in the heap
    pub fn len(&self) -> usize {
        self.buf.len()
    }

	/// Get the fixed capacity the heap was created with
    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buf.len() == self.cap
    }

	/// Get the minimal pair without removing it, or `HeapError::Empty`
    pub fn peek_min(&self) -> Result<(&V, &I), HeapError> {
        self.buf.first().map(|(v, i)|(v, i)).ok_or(HeapError::Empty)
    }

	/// Get the maximal pair without removing it, or `HeapError::Empty`
    pub fn peek_max(&self) -> Result<(&V, &I), HeapError> {
        let (v, i) = &self.buf[self.max_pos().ok_or(HeapError::Empty)?];
        Ok((v, i))
    }

	/// Get the minimal value without removing it
    pub fn peek_min_value(&self) -> Result<&V, HeapError> {
        self.peek_min().map(|(v, _)|v)
    }

	/// Get the tag paired with the minimal value
    pub fn peek_min_tag(&self) -> Result<&I, HeapError> {
        self.peek_min().map(|(_, i)|i)
    }

	/// Get the maximal value without removing it
    pub fn peek_max_value(&self) -> Result<&V, HeapError> {
        self.peek_max().map(|(v, _)|v)
    }

	/// Get the tag paired with the maximal value
    pub fn peek_max_tag(&self) -> Result<&I, HeapError> {
        self.peek_max().map(|(_, i)|i)
    }

	/// Insert a pair into the heap, or fail with `HeapError::CapacityExceeded`
	/// if the heap is full.  A failed insert does not change the heap.
	/// Values that compare equal are fine, but their order will be unspecified
    pub fn insert(&mut self, value: V, tag: I) -> Result<(), HeapError> {
        if self.buf.len() == self.cap {
            return Err(HeapError::CapacityExceeded)
        }
        self.buf.push((value, tag));
        self.sift_up(self.buf.len() - 1);
        Ok(())
    }

	/// Remove and return the minimal pair, or fail with `HeapError::Empty`
    pub fn remove_min(&mut self) -> Result<(V, I), HeapError> {
        self.pop_at(0).ok_or(HeapError::Empty)
    }

	/// Remove and return the maximal pair, or fail with `HeapError::Empty`
    pub fn remove_max(&mut self) -> Result<(V, I), HeapError> {
        self.max_pos().and_then(|i|self.pop_at(i)).ok_or(HeapError::Empty)
    }

    // The min is always at the root, but the max is only known to be one of
    // the root's children, which are the topmost max level.  With two
    // children, ties go to index 1, the earlier of the two.
    fn max_pos(&self) -> Option<usize> {
        match self.buf.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ => Some(if self.buf[2].0 > self.buf[1].0 { 2 } else { 1 })
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        if i == 0 || i >= self.buf.len()
            { return }
        let mut ord = level_ord(i);
        // A new element can violate the opposite-parity invariant against its
        // parent; if it does, it crosses over and the rest of the walk runs
        // with the parent's parity.  From there only same-parity levels are
        // left to fix, so the walk follows the grandparent chain.
        let mut i1 = (i - 1) >> 1;
        if self.buf[i1].0.cmp(&self.buf[i].0) == ord {
            self.buf.swap(i, i1);
            i = i1;
            ord = ord.reverse()
        }
        while i > 2 {
            i1 = (i - 3) >> 2;
            if self.buf[i].0.cmp(&self.buf[i1].0) == ord {
                self.buf.swap(i, i1);
                i = i1
            } else { break }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let ord = level_ord(i);
        while 2*i + 1 < self.buf.len() {
            // Find m, the extremal element among the children and
            // grandchildren of i: minimal on min levels, maximal on max
            // levels.  Requiring a strict improvement to displace m keeps the
            // earliest candidate on ties.  Grandchildren can only exist when
            // both children do, so the take_while never skips a live slot.
            let mut m = 2*i + 1;
            for j in [2*i + 2, 4*i + 3, 4*i + 4, 4*i + 5, 4*i + 6].into_iter().take_while(|&j|j < self.buf.len()) {
                if self.buf[j].0.cmp(&self.buf[m].0) == ord
                    { m = j }
            }
            if m > 2*i + 2 {
                // m is a grandchild (the common case), so after swapping, the
                // displaced element may upset m's immediate parent and the
                // walk may have to continue below m
                if self.buf[m].0.cmp(&self.buf[i].0) == ord {
                    self.buf.swap(m, i);
                    let p = (m - 1) >> 1;
                    if self.buf[p].0.cmp(&self.buf[m].0) == ord
                        { self.buf.swap(m, p) }
                    i = m;
                } else { break }
            } else {
                // m is a direct child, so it must be a leaf or its own
                // invariant would already be broken; one swap settles it
                if self.buf[m].0.cmp(&self.buf[i].0) == ord
                    { self.buf.swap(m, i) }
                break
            }
        }
    }

    // Remove the pair at index i by overwriting it with the last occupied
    // slot and repairing downward from i over the shortened buffer
    fn pop_at(&mut self, i: usize) -> Option<(V, I)> {
        let l = self.buf.len();
        if i + 1 >= l
            { return self.buf.pop() }
        self.buf.swap(i, l - 1);
        let res = self.buf.pop();
        self.sift_down(i);
        res
    }

    #[cfg(test)]
    pub(crate) fn check_heap(&self) -> bool {
        // Each node must respect the level parity of its parent and (when one
        // exists) its grandparent; together these imply full min-max
        // dominance along every root path
        for i in 1..self.buf.len() {
            let p = (i - 1) >> 1;
            if self.buf[p].0.cmp(&self.buf[i].0) == level_ord(p).reverse() {
                return false
            }
            if i > 2 {
                let g = (i - 3) >> 2;
                if self.buf[g].0.cmp(&self.buf[i].0) == level_ord(g).reverse() {
                    return false
                }
            }
        }
        true
    }
}

impl<V: Ord + Clone, I: Clone> Clone for MmHeap<V, I> {
    // A clone must be fully independent, including keeping the original's
    // fixed capacity rather than shrinking to the occupied prefix
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.cap);
        buf.extend(self.buf.iter().cloned());
        Self{buf, cap: self.cap}
    }
}

impl<'a, V, I> IntoIterator for &'a MmHeap<V, I> {
    type Item = &'a (V, I);
    type IntoIter = <&'a Vec<(V, I)> as IntoIterator>::IntoIter;
    fn into_iter(self) -> Self::IntoIter {
        (&self.buf).into_iter()
    }
}

impl<V, I> From<MmHeap<V, I>> for Vec<(V, I)> {
    fn from(heap: MmHeap<V, I>) -> Self {
        heap.buf
    }
}
