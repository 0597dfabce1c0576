//! Ordered equipment collections.
//!
//! Index 0 of a [`Loadout`] is always the equipped item. The only operation
//! that reorders a loadout is [`Loadout::equip`], which swaps the chosen slot
//! with slot 0; every other item keeps its position.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadoutError {
    #[error("slot {index} is out of range for a loadout of {len} items")]
    OutOfRange { index: usize, len: usize },
    #[error("{name} is not in the loadout")]
    NotFound { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loadout<T> {
    items: Vec<T>,
}

impl<T> Default for Loadout<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Loadout<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the back; the equipped item is unchanged unless the
    /// loadout was empty.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Moves the item at `index` into slot 0 and the old slot 0 into `index`.
    ///
    /// Returns `Ok(None)` when there is nothing to equip.
    pub fn equip(&mut self, index: usize) -> Result<Option<&T>, LoadoutError> {
        if self.items.is_empty() {
            return Ok(None);
        }
        self.check(index)?;
        self.items.swap(0, index);
        Ok(self.items.first())
    }

    pub fn equipped(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn equipped_mut(&mut self) -> Option<&mut T> {
        self.items.first_mut()
    }

    pub fn get(&self, index: usize) -> Result<&T, LoadoutError> {
        self.check(index)?;
        Ok(&self.items[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, LoadoutError> {
        self.check(index)?;
        Ok(&mut self.items[index])
    }

    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(predicate)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn check(&self, index: usize) -> Result<(), LoadoutError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(LoadoutError::OutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

impl<T> FromIterator<T> for Loadout<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Loadout<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
