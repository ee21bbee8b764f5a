//! List reorder and move engine.
//!
//! Pure functions that compute the new arrangement of one or two ordered
//! lists after a drag-and-drop. Inputs are never mutated; every call returns
//! freshly allocated lists. Out-of-range indices are rejected with
//! [`ProtocolError::InvalidIndex`] rather than clamped.
//!
//! # Examples
//!
//! ```
//! use tasklane_protocol::reorder::{move_item, reorder};
//!
//! let list = ["a", "b", "c"];
//! assert_eq!(reorder(&list, 0, 2).unwrap(), ["b", "c", "a"]);
//!
//! let (source, destination) = move_item(&["a", "b"], &["x"], 1, 0).unwrap();
//! assert_eq!(source, ["a"]);
//! assert_eq!(destination, ["b", "x"]);
//! ```

use crate::error::{ProtocolError, Result};
use crate::task::{Task, TaskStatus};

/// Moves the element at `start_index` to `end_index` within one list.
///
/// The element is removed first and then inserted, so `end_index` refers to
/// a position in the shortened list. `end_index == list.len()` appends.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidIndex`] if `start_index >= list.len()` or
/// `end_index > list.len()`.
///
/// # Examples
///
/// ```
/// use tasklane_protocol::reorder::reorder;
///
/// assert_eq!(reorder(&[1, 2, 3], 2, 0).unwrap(), [3, 1, 2]);
/// assert_eq!(reorder(&[1, 2, 3], 1, 1).unwrap(), [1, 2, 3]);
/// assert!(reorder(&[1, 2, 3], 3, 0).is_err());
/// ```
pub fn reorder<T: Clone>(list: &[T], start_index: usize, end_index: usize) -> Result<Vec<T>> {
    check_index("start", start_index, list.len(), false)?;
    check_index("end", end_index, list.len(), true)?;

    let mut result = list.to_vec();
    let removed = result.remove(start_index);
    let end_index = end_index.min(result.len());
    result.insert(end_index, removed);
    Ok(result)
}

/// Moves the element at `source_index` of `source` into `destination` at
/// `dest_index`.
///
/// Returns the new `(source, destination)` pair.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidIndex`] if `source_index >= source.len()`
/// or `dest_index > destination.len()`.
pub fn move_item<T: Clone>(
    source: &[T],
    destination: &[T],
    source_index: usize,
    dest_index: usize,
) -> Result<(Vec<T>, Vec<T>)> {
    check_index("source", source_index, source.len(), false)?;
    check_index("destination", dest_index, destination.len(), true)?;

    let mut source = source.to_vec();
    let mut destination = destination.to_vec();
    let removed = source.remove(source_index);
    destination.insert(dest_index, removed);
    Ok((source, destination))
}

/// Moves a task between columns and assigns it the destination status.
///
/// This is [`move_item`] plus the status write: the destination column is
/// authoritative for the moved task's status.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidIndex`] under the same conditions as
/// [`move_item`].
///
/// # Examples
///
/// ```
/// use tasklane_protocol::reorder::move_task;
/// use tasklane_protocol::{Task, TaskStatus};
///
/// let done = [Task::new("task1", "B", TaskStatus::Done)];
/// let todo = [Task::new("task0", "A", TaskStatus::Todo)];
///
/// let (done, todo) = move_task(&done, &todo, 0, 0, TaskStatus::Todo).unwrap();
/// assert!(done.is_empty());
/// assert_eq!(todo[0].key.as_str(), "task1");
/// assert_eq!(todo[0].status, TaskStatus::Todo);
/// ```
pub fn move_task(
    source: &[Task],
    destination: &[Task],
    source_index: usize,
    dest_index: usize,
    status: TaskStatus,
) -> Result<(Vec<Task>, Vec<Task>)> {
    let (source, mut destination) = move_item(source, destination, source_index, dest_index)?;
    destination[dest_index].status = status;
    Ok((source, destination))
}

/// Validates `index` against `len`; `inclusive` allows `index == len`.
fn check_index(role: &'static str, index: usize, len: usize, inclusive: bool) -> Result<()> {
    let in_range = if inclusive { index <= len } else { index < len };
    if in_range {
        Ok(())
    } else {
        Err(ProtocolError::InvalidIndex { role, index, len })
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted(mut v: Vec<u32>) -> Vec<u32> {
        v.sort_unstable();
        v
    }

    fn arb_list_and_indices() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
        prop::collection::vec(any::<u32>(), 1..20).prop_flat_map(|list| {
            let len = list.len();
            (Just(list), 0..len, 0..=len)
        })
    }

    fn arb_move_input() -> impl Strategy<Value = (Vec<u32>, Vec<u32>, usize, usize)> {
        (
            prop::collection::vec(any::<u32>(), 1..20),
            prop::collection::vec(any::<u32>(), 0..20),
        )
            .prop_flat_map(|(source, destination)| {
                let (s, d) = (source.len(), destination.len());
                (Just(source), Just(destination), 0..s, 0..=d)
            })
    }

    fn arb_status() -> impl Strategy<Value = TaskStatus> {
        prop_oneof![Just(TaskStatus::Todo), Just(TaskStatus::Done)]
    }

    proptest! {
        /// Reordering an element onto its own position changes nothing.
        #[test]
        fn reorder_same_index_is_identity((list, start, _) in arb_list_and_indices()) {
            prop_assert_eq!(reorder(&list, start, start).unwrap(), list);
        }

        /// Reordering keeps the length and the multiset of elements.
        #[test]
        fn reorder_preserves_elements((list, start, end) in arb_list_and_indices()) {
            let result = reorder(&list, start, end).unwrap();
            prop_assert_eq!(result.len(), list.len());
            prop_assert_eq!(sorted(result.clone()), sorted(list.clone()));
        }

        /// The moved element lands at the requested (shortened-list) position.
        #[test]
        fn reorder_places_moved_element((list, start, end) in arb_list_and_indices()) {
            let result = reorder(&list, start, end).unwrap();
            let landed = end.min(list.len() - 1);
            prop_assert_eq!(result[landed], list[start]);
        }

        /// All other elements keep their relative order.
        #[test]
        fn reorder_keeps_relative_order((list, start, end) in arb_list_and_indices()) {
            let result = reorder(&list, start, end).unwrap();
            let landed = end.min(list.len() - 1);

            let mut expected = list.clone();
            expected.remove(start);
            let mut remaining = result.clone();
            remaining.remove(landed);
            prop_assert_eq!(remaining, expected);
        }

        /// Moving conserves elements across the two lists.
        #[test]
        fn move_conserves_union((source, destination, si, di) in arb_move_input()) {
            let (new_source, new_destination) = move_item(&source, &destination, si, di).unwrap();

            prop_assert_eq!(new_source.len(), source.len() - 1);
            prop_assert_eq!(new_destination.len(), destination.len() + 1);

            let before = sorted(source.iter().chain(&destination).copied().collect());
            let after = sorted(new_source.iter().chain(&new_destination).copied().collect());
            prop_assert_eq!(before, after);
            prop_assert_eq!(new_destination[di], source[si]);
        }

        /// The moved task always carries the destination status.
        #[test]
        fn move_task_assigns_status(
            (source, destination, si, di) in arb_move_input(),
            from in arb_status(),
            to in arb_status(),
        ) {
            let to_tasks = |values: &[u32], status| -> Vec<Task> {
                values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| Task::new(format!("k{i}-{v}").as_str(), v.to_string(), status))
                    .collect()
            };
            let source = to_tasks(&source, from);
            let destination = to_tasks(&destination, to);

            let (_, new_destination) = move_task(&source, &destination, si, di, to).unwrap();
            prop_assert!(new_destination.iter().all(|t| t.status == to));
            prop_assert_eq!(&new_destination[di].key, &source[si].key);
        }
    }
}
