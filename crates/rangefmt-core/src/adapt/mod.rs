//! Range adaptation shim.
//!
//! Container adaptors restrict element access to their front or top, which
//! is not enough to render them as a sequence. [`Sequence`] is a non-owning
//! read-only view over the adaptor's backing store: length plus element
//! access by position, in removal order, without mutating or copying the
//! container. [`Option`] adapts as a zero-or-one-element range.

use std::collections::VecDeque;

use crate::spec::SpecKind;
use crate::value::{ToValue, Value};

/// Read-only positional access over an adapted sequence.
///
/// `len` must be consistent with the positions `get` accepts: every index
/// in `0..len()` is valid, in the order elements would be removed.
pub trait Sequence {
    fn len(&self) -> usize;

    /// Element at `index` as a borrowed [`Value`].
    fn get(&self, index: usize) -> Value<'_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Spec category of the elements, when the element type maps to a
    /// single scalar category. Used to validate an element spec against
    /// an empty sequence, where no element is available to dispatch on.
    fn elem_kind(&self) -> Option<SpecKind> {
        None
    }
}

/// A borrowed, type-erased sequence handed to the formatting engine.
#[derive(Clone, Copy)]
pub struct SeqRef<'a> {
    items: &'a dyn Sequence,
}

impl<'a> SeqRef<'a> {
    #[must_use]
    pub fn new(items: &'a dyn Sequence) -> Self {
        SeqRef { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Value<'_> {
        self.items.get(index)
    }

    #[must_use]
    pub fn elem_kind(&self) -> Option<SpecKind> {
        self.items.elem_kind()
    }
}

impl<T: ToValue> Sequence for [T] {
    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Value<'_> {
        self[index].to_value()
    }

    fn elem_kind(&self) -> Option<SpecKind> {
        T::spec_kind()
    }
}

impl<T: ToValue> Sequence for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Value<'_> {
        self[index].to_value()
    }

    fn elem_kind(&self) -> Option<SpecKind> {
        T::spec_kind()
    }
}

impl<T: ToValue> Sequence for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Value<'_> {
        self[index].to_value()
    }

    fn elem_kind(&self) -> Option<SpecKind> {
        T::spec_kind()
    }
}

/// An optional value viewed as a range: size 0 when empty, size 1 when
/// populated, yielding exactly the held value.
impl<T: ToValue> Sequence for Option<T> {
    fn len(&self) -> usize {
        usize::from(self.is_some())
    }

    fn get(&self, index: usize) -> Value<'_> {
        debug_assert_eq!(index, 0);
        match self.as_ref() {
            Some(value) => value.to_value(),
            // `get` is only valid for indices in 0..len().
            None => unreachable!("get on an empty option"),
        }
    }

    fn elem_kind(&self) -> Option<SpecKind> {
        T::spec_kind()
    }
}

/// First-in, first-out adaptor. Public access is limited to the ends;
/// formatting reaches the backing store through [`Sequence`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    #[must_use]
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only iteration in removal (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: ToValue> Sequence for Queue<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Value<'_> {
        self.items[index].to_value()
    }

    fn elem_kind(&self) -> Option<SpecKind> {
        T::spec_kind()
    }
}

/// Last-in, first-out adaptor. Iteration order is bottom to top, matching
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    #[must_use]
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only iteration from the bottom of the stack to the top.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: ToValue> Sequence for Stack<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Value<'_> {
        self.items[index].to_value()
    }

    fn elem_kind(&self) -> Option<SpecKind> {
        T::spec_kind()
    }
}

/// Priority adaptor backed by a sorted vector: `pop` removes the smallest
/// element, and iteration follows removal order (ascending). A sorted
/// backing makes the rendered order deterministic instead of an accident
/// of heap layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityQueue<T: Ord> {
    items: Vec<T>,
}

impl<T: Ord> PriorityQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        PriorityQueue { items: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        let at = self.items.partition_point(|e| *e <= value);
        self.items.insert(at, value);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only iteration in removal (ascending) order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        items.sort();
        PriorityQueue { items }
    }
}

impl<T: Ord + ToValue> Sequence for PriorityQueue<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Value<'_> {
        self.items[index].to_value()
    }

    fn elem_kind(&self) -> Option<SpecKind> {
        T::spec_kind()
    }
}

impl<T: ToValue> ToValue for Queue<T> {
    fn to_value(&self) -> Value<'_> {
        Value::Seq(SeqRef::new(self))
    }
}

impl<T: ToValue> ToValue for Stack<T> {
    fn to_value(&self) -> Value<'_> {
        Value::Seq(SeqRef::new(self))
    }
}

impl<T: Ord + ToValue> ToValue for PriorityQueue<T> {
    fn to_value(&self) -> Value<'_> {
        Value::Seq(SeqRef::new(self))
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value<'_> {
        Value::Seq(SeqRef::new(self))
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value<'_> {
        Value::Seq(SeqRef::new(self))
    }
}
