/// Array-backed binary min-heap used transiently during Huffman tree
/// construction.
///
/// The element at `slots[i]` is never greater than its children at
/// `slots[2i + 1]` and `slots[2i + 2]`. Ties never reach the heap here:
/// Huffman nodes order by `(frequency, min_symbol)` and the minimum
/// symbols of live subtrees are pairwise distinct, so pop order is fully
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct MinHeap<T> {
    slots: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.slots.push(value);
        self.sift_up(self.slots.len() - 1);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.slots.is_empty() {
            return None;
        }
        let last = self.slots.len() - 1;
        self.slots.swap(0, last);
        let smallest = self.slots.pop();
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        smallest
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.slots[parent] <= self.slots[child] {
                break;
            }
            self.slots.swap(parent, child);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        loop {
            let left = 2 * parent + 1;
            let right = left + 1;
            let mut smallest = parent;

            if left < self.slots.len() && self.slots[left] < self.slots[smallest] {
                smallest = left;
            }
            if right < self.slots.len() && self.slots[right] < self.slots[smallest] {
                smallest = right;
            }
            if smallest == parent {
                break;
            }
            self.slots.swap(parent, smallest);
            parent = smallest;
        }
    }
}
