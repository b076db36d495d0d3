//! `Bag<T>` — an unordered collection that permits duplicates.
//!
//! # Representation
//!
//! Storage is a dense `Vec<T>` holding every occurrence individually, not
//! a value → count map. Two consequences drive that choice:
//!
//! - Elements only need `PartialEq`. A count map would demand `Eq + Hash`
//!   (or `Ord`), which rules out element types like floats and closures
//!   over floats that the dense form handles fine.
//! - `map` and `retain` keep a position correspondence between input and
//!   output occurrences, which is meaningless in a count map.
//!
//! The price is O(n) membership and counting. Callers with `Eq + Hash`
//! elements that need the grouped view can take a [`counts`](Bag::counts)
//! snapshot.
//!
//! # Randomness
//!
//! The draw operations ([`pick_one`](Bag::pick_one),
//! [`pick_many`](Bag::pick_many)) take a caller-scoped `rand::Rng`, so
//! the container itself holds no RNG state. Seed a
//! [`DrawRng`](crate::DrawRng) for reproducible draws.

use std::hash::Hash;

use rand::Rng;
use rustc_hash::FxHashMap;

use crate::error::{BagError, BagResult};
use crate::set::Set;

/// An unordered multiset of values of an equatable element type.
///
/// ```
/// use tombola::{Bag, DrawRng};
///
/// let mut bag: Bag<&str> = ["ada", "ada", "grace"].into_iter().collect();
/// assert_eq!(bag.multiplicity(&"ada"), 2);
/// assert_eq!(bag.len(), 3);
///
/// let mut rng = DrawRng::new(7);
/// let drawn = bag.pick_one(rng.inner()).unwrap();
/// assert!(["ada", "grace"].contains(&drawn));
/// assert_eq!(bag.len(), 2);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bag<T> {
    elements: Vec<T>,
}

impl<T> Bag<T> {
    pub fn new() -> Self {
        Bag { elements: Vec::new() }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Total number of elements, duplicates counted individually.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Snapshot view of all elements (duplicates included).
    ///
    /// The order is unspecified but stable between mutations.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    // ── In-place mutators ─────────────────────────────────────────────────

    /// Append one occurrence of `value`. Never fails.
    pub fn add(&mut self, value: T) {
        self.elements.push(value);
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Keep only the elements satisfying `pred`, preserving the relative
    /// order of kept elements and all duplicate counts of retained values.
    pub fn retain<F>(&mut self, pred: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.retain(pred);
    }

    /// Transform every element, consuming the bag.
    ///
    /// Occurrence `i` of the result is `transform` applied to occurrence
    /// `i` of the input, so the element count is always preserved. The
    /// result may contain new duplicates (or lose old ones) wherever
    /// `transform` collides distinct inputs.
    pub fn map<U, F>(self, transform: F) -> Bag<U>
    where
        F: FnMut(T) -> U,
    {
        Bag {
            elements: self.elements.into_iter().map(transform).collect(),
        }
    }

    // ── Random extraction ─────────────────────────────────────────────────

    /// Remove and return one element chosen uniformly at random.
    ///
    /// Fails with [`BagError::NotEnoughElements`] on an empty bag, leaving
    /// the bag unchanged.
    pub fn pick_one<R>(&mut self, rng: &mut R) -> BagResult<T>
    where
        R: Rng + ?Sized,
    {
        if self.elements.is_empty() {
            return Err(BagError::NotEnoughElements {
                requested: 1,
                available: 0,
            });
        }
        let index = rng.gen_range(0..self.elements.len());
        Ok(self.elements.swap_remove(index))
    }

    /// Remove and return exactly `quantity` elements chosen uniformly at
    /// random, without replacement. A value's distinct occurrences are
    /// independent draws.
    ///
    /// Fails with [`BagError::ZeroPick`] when `quantity == 0` and with
    /// [`BagError::NotEnoughElements`] when `quantity` exceeds
    /// [`len`](Bag::len); an over-large request is an explicit error,
    /// never a silent truncation. On failure the bag is untouched.
    pub fn pick_many<R>(&mut self, quantity: usize, rng: &mut R) -> BagResult<Vec<T>>
    where
        R: Rng + ?Sized,
    {
        if quantity == 0 {
            return Err(BagError::ZeroPick);
        }
        if quantity > self.elements.len() {
            return Err(BagError::NotEnoughElements {
                requested: quantity,
                available: self.elements.len(),
            });
        }
        let mut drawn = Vec::with_capacity(quantity);
        for _ in 0..quantity {
            let index = rng.gen_range(0..self.elements.len());
            drawn.push(self.elements.swap_remove(index));
        }
        Ok(drawn)
    }
}

impl<T: PartialEq> Bag<T> {
    /// Number of elements equal to `value`. Zero iff the value is absent.
    pub fn multiplicity(&self, value: &T) -> usize {
        self.elements.iter().filter(|v| *v == value).count()
    }

    /// `true` iff at least one element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    /// Remove **every** occurrence of `value`, returning how many were
    /// removed. A missing value is a no-op returning 0, not an error.
    pub fn remove(&mut self, value: &T) -> usize {
        let before = self.elements.len();
        self.elements.retain(|v| v != value);
        before - self.elements.len()
    }
}

impl<T: Clone> Bag<T> {
    /// Additive multiset union: a full copy of `self` plus every element
    /// of `other`.
    ///
    /// For every value `v`, the result's multiplicity is the *sum* of the
    /// operands' multiplicities (multiset union, not set union's max).
    /// Neither operand's storage is mutated.
    pub fn union<I>(&self, other: I) -> Bag<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut result = self.clone();
        result.extend(other);
        result
    }
}

impl<T: PartialEq + Clone> Bag<T> {
    /// The set of distinct values present, each represented once,
    /// independent of duplicate counts and input order.
    pub fn to_set(&self) -> Set<T> {
        self.elements.iter().cloned().collect()
    }

    /// Every occurrence in `self` whose value also appears in `other`.
    ///
    /// The membership test is per occurrence and does not consume the
    /// right operand's multiplicities: three copies of `v` in `self`
    /// against one copy in `other` yield three copies in the result.
    pub fn intersection<I>(&self, other: I) -> Bag<T>
    where
        I: IntoIterator<Item = T>,
    {
        let probe: Vec<T> = other.into_iter().collect();
        let mut result = Bag::new();
        for value in &self.elements {
            if probe.contains(value) {
                result.add(value.clone());
            }
        }
        result
    }

    /// Every occurrence in `self` whose value does **not** appear in
    /// `other`. Values shared with `other` vanish from the result
    /// entirely, whatever their multiplicity on either side.
    pub fn difference<I>(&self, other: I) -> Bag<T>
    where
        I: IntoIterator<Item = T>,
    {
        let probe: Vec<T> = other.into_iter().collect();
        let mut result = Bag::new();
        for value in &self.elements {
            if !probe.contains(value) {
                result.add(value.clone());
            }
        }
        result
    }

    /// Multiplicity-aware symmetric difference: for each distinct value,
    /// the result holds `|multiplicity_self − multiplicity_other|` copies,
    /// contributing only when that gap is nonzero.
    pub fn symmetric_difference<I>(&self, other: I) -> Bag<T>
    where
        I: IntoIterator<Item = T>,
    {
        let other: Bag<T> = other.into_iter().collect();
        let mut distinct = self.to_set();
        for value in other.iter() {
            distinct.insert(value.clone());
        }
        let mut result = Bag::new();
        for value in distinct {
            let gap = self.multiplicity(&value).abs_diff(other.multiplicity(&value));
            for _ in 0..gap {
                result.add(value.clone());
            }
        }
        result
    }
}

impl<T: Eq + Hash> Bag<T> {
    /// Grouped multiplicity view: each distinct value mapped to its
    /// occurrence count. A snapshot, not a live view.
    pub fn counts(&self) -> FxHashMap<&T, usize> {
        let mut map = FxHashMap::default();
        for value in &self.elements {
            *map.entry(value).or_insert(0) += 1;
        }
        map
    }
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Bag::new()
    }
}

impl<T> From<Vec<T>> for Bag<T> {
    fn from(elements: Vec<T>) -> Self {
        Bag { elements }
    }
}

/// Collecting preserves every occurrence; the source's iteration order
/// carries no meaning once inside the bag.
impl<T> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Bag {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for Bag<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

/// Borrowed iteration is restartable: each `&bag` loop yields the current
/// snapshot, duplicates included.
impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Two bags are equal iff every distinct value has identical multiplicity
/// in both; storage order never matters.
impl<T: PartialEq> PartialEq for Bag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements.len() == other.elements.len()
            && self
                .elements
                .iter()
                .all(|value| self.multiplicity(value) == other.multiplicity(value))
    }
}

impl<T: Eq> Eq for Bag<T> {}
