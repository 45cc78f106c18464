//! Declaration-ordered symbol table.
//!
//! Variables live in a slot arena and are chained in order through slot
//! indices, so inserting at either end and removing a known entry are O(1).
//! Removed slots are recycled; each slot carries a generation so that a
//! [`VarId`] for a removed variable never resolves to its replacement.
//!
//! There is no name index. Finding a variable by name means walking
//! [`SymbolTable::iter`]. Duplicate names are accepted.

use crate::Variable;

/// Handle to a variable stored in a [`SymbolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarId {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Entry {
    var: Variable,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// Ordered collection of [`Variable`] records.
///
/// # Examples
///
/// ```
/// use core_types::{SymbolTable, Variable, VarValue};
///
/// let mut table = SymbolTable::new();
/// let b = table.push_back(Variable::new("b", VarValue::Integer(2)));
/// table.push_front(Variable::new("a", VarValue::Integer(1)));
/// table.push_back(Variable::new("c", VarValue::Integer(3)));
///
/// table.remove(b);
/// let names: Vec<_> = table.iter().map(|v| v.name.as_str()).collect();
/// assert_eq!(names, ["a", "c"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    slots: Vec<Slot>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of variables in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table holds no variables.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a variable before all others.
    pub fn push_front(&mut self, var: Variable) -> VarId {
        let id = self.alloc(var, None, self.head);
        match self.head {
            Some(old) => self.entry_mut(old).prev = Some(id.index),
            None => self.tail = Some(id.index),
        }
        self.head = Some(id.index);
        id
    }

    /// Insert a variable after all others.
    pub fn push_back(&mut self, var: Variable) -> VarId {
        let id = self.alloc(var, self.tail, None);
        match self.tail {
            Some(old) => self.entry_mut(old).next = Some(id.index),
            None => self.head = Some(id.index),
        }
        self.tail = Some(id.index);
        id
    }

    /// Remove the variable behind `id`, returning it.
    ///
    /// Returns `None` if the handle is stale.
    pub fn remove(&mut self, id: VarId) -> Option<Variable> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;

        match entry.prev {
            Some(prev) => self.entry_mut(prev).next = entry.next,
            None => self.head = entry.next,
        }
        match entry.next {
            Some(next) => self.entry_mut(next).prev = entry.prev,
            None => self.tail = entry.prev,
        }

        Some(entry.var)
    }

    /// Borrow the variable behind `id`.
    pub fn get(&self, id: VarId) -> Option<&Variable> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_ref())
            .map(|entry| &entry.var)
    }

    /// Mutably borrow the variable behind `id`.
    pub fn get_mut(&mut self, id: VarId) -> Option<&mut Variable> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_mut())
            .map(|entry| &mut entry.var)
    }

    /// Iterate over variables in table order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            table: self,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Remove every variable. Outstanding handles become stale.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.entry.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index);
            }
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn alloc(&mut self, var: Variable, prev: Option<usize>, next: Option<usize>) -> VarId {
        let entry = Some(Entry { var, prev, next });
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.entry = entry;
                VarId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    entry,
                });
                VarId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    // Links only ever point at occupied slots.
    fn entry_mut(&mut self, index: usize) -> &mut Entry {
        match self.slots[index].entry.as_mut() {
            Some(entry) => entry,
            None => unreachable!("symbol table link to vacant slot {}", index),
        }
    }
}

/// Iterator over a [`SymbolTable`] in table order.
pub struct Iter<'a> {
    table: &'a SymbolTable,
    next: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Variable;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.table.slots[self.next?].entry.as_ref()?;
        self.next = entry.next;
        self.remaining -= 1;
        Some(&entry.var)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Variable;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
