/*!
# Binary Min-Heaps

Two array-backed binary min-heaps sharing the same sift operations:

- [`ScalarHeap`] orders plain integers and keeps a fixed-capacity slot array
  that is doubled when full.
- [`EdgeHeap`] orders [`WeightedEdge`](crate::WeightedEdge)s by weight, breaking ties by
  insertion order, and drives Prim's algorithm as well as the heap-based Dijkstra.

The element at index `i` has its children at `2i + 1` and `2i + 2`. Elements only move
if their key is strictly smaller (sift up) or strictly larger (sift down) than the key they
are compared against; when both children have equal keys, the left child is preferred.
*/

mod edge;
mod scalar;

pub use edge::*;
pub use scalar::*;

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

/// Moves the element at `pos` towards the root until its parent's key is not larger
fn sift_up<T, K: Ord>(items: &mut [T], mut pos: usize, key: impl Fn(&T) -> K) {
    while pos > 0 {
        let p = parent(pos);
        if key(&items[p]) <= key(&items[pos]) {
            break;
        }
        items.swap(p, pos);
        pos = p;
    }
}

/// Moves the element at `pos` towards the leaves until no child has a smaller key
fn sift_down<T, K: Ord>(items: &mut [T], mut pos: usize, key: impl Fn(&T) -> K) {
    let len = items.len();
    loop {
        let l = left(pos);
        if l >= len {
            break;
        }

        let r = l + 1;
        let best = if r < len && key(&items[r]) < key(&items[l]) {
            r
        } else {
            l
        };

        if key(&items[best]) >= key(&items[pos]) {
            break;
        }
        items.swap(best, pos);
        pos = best;
    }
}

/// Returns *true* if no element has a smaller key than its parent
fn is_heap<T, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> bool {
    (1..items.len()).all(|i| key(&items[parent(i)]) <= key(&items[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sift_prefers_left_child_on_ties() {
        let mut items = [(9, 'r'), (1, 'a'), (1, 'b')];
        sift_down(&mut items, 0, |x| x.0);
        assert_eq!(items, [(1, 'a'), (9, 'r'), (1, 'b')]);
        assert!(is_heap(&items, |x| x.0));
    }

    #[test]
    fn sift_up_stops_at_equal_keys() {
        let mut items = [(1, 'a'), (2, 'b'), (3, 'c'), (2, 'd')];
        sift_up(&mut items, 3, |x| x.0);
        assert_eq!(items, [(1, 'a'), (2, 'b'), (3, 'c'), (2, 'd')]);
        assert!(is_heap(&items, |x| x.0));
        assert!(!is_heap(&[(2, 'a'), (1, 'b')], |x: &(i32, char)| x.0));
    }
}
