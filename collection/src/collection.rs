//! Collection - the ordered record sequence and its query operations.
//!
//! A [`Collection`] owns an insertion-ordered sequence of records plus an
//! optional primary-key field name used for identity lookups. Non-mutating
//! operations build a fresh collection and never touch the receiver; the few
//! in-place mutators are explicit about it.

use crate::error::{Error, Result};
use crate::query::WhereClause;
use crate::record::{DeepClone, Record, ToArray};
use crate::value::loose_eq;
use crate::FieldName;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// An ordered sequence of records with query-style operations.
///
/// Operations that never touch record fields (`filter`, `each`, `take`,
/// `slice`, `chunk`, `transform`, the mutators and accessors) are available
/// for any cloneable item type. Field-addressed operations (`where_`,
/// `pluck`, `unique`, `get`, `has`, `diff`, `pull`) require [`Record`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection<T> {
    /// Records in insertion order
    items: Vec<T>,
    /// Field name used for identity lookups, if any
    primary_key: Option<FieldName>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            primary_key: None,
        }
    }
}

impl<T> Collection<T> {
    /// Create an empty collection with no primary key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from an initial sequence of records.
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items,
            primary_key: None,
        }
    }

    /// Create a collection with a primary-key field name for identity
    /// lookups. The key is not validated against record shape.
    pub fn with_primary_key(items: Vec<T>, primary_key: impl Into<FieldName>) -> Self {
        Self {
            items,
            primary_key: Some(primary_key.into()),
        }
    }

    /// The primary-key field name, if one is configured.
    pub fn primary_key(&self) -> Option<&str> {
        self.primary_key.as_deref()
    }

    /// Number of items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The first item, or `None` on an empty collection.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// All items, in order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Consume the collection, returning its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Append an item to the end.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove all items. Chainable.
    pub fn truncate(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Append all elements of another sequence or collection to the end, in
    /// order. Chainable.
    pub fn merge(&mut self, items: impl IntoIterator<Item = T>) -> &mut Self {
        self.items.extend(items);
        self
    }

    /// Sort items in place with a caller-supplied comparator. Chainable.
    ///
    /// Uses the standard stable sort, so items that compare equal keep their
    /// relative order.
    pub fn sort_by<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
        self
    }
}

impl<T: Clone> Collection<T> {
    /// Empty derived collection carrying the receiver's primary key.
    fn derived(&self) -> Self {
        Self {
            items: Vec::new(),
            primary_key: self.primary_key.clone(),
        }
    }

    /// Iterate items in order, passing the callback the 0-based index and an
    /// isolated copy of each item.
    ///
    /// Mutating the copy inside the callback cannot affect the collection.
    /// Iteration stops early, without error, the first time the callback
    /// returns `false`.
    pub fn each<F>(&self, mut callback: F)
    where
        T: DeepClone,
        F: FnMut(usize, T) -> bool,
    {
        for (index, item) in self.items.iter().enumerate() {
            if !callback(index, item.deep_clone()) {
                break;
            }
        }
    }

    /// Build a new collection containing, in original order, every item for
    /// which the predicate returns true. The receiver is never altered.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        let mut results = self.derived();
        for item in &self.items {
            if predicate(item) {
                results.push(item.clone());
            }
        }
        results
    }

    /// Remove every item matching the predicate, returning the removed items
    /// as a new collection. The receiver keeps the rest.
    pub fn pull_where<F>(&mut self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        let mut pulled = self.derived();
        self.items.retain(|item| {
            if predicate(item) {
                pulled.push(item.clone());
                false
            } else {
                true
            }
        });
        pulled
    }

    /// A new collection with the first `n` items, or fewer if the collection
    /// is shorter. Out-of-range `n` is not an error.
    pub fn take(&self, n: usize) -> Self {
        Self {
            items: self.items.iter().take(n).cloned().collect(),
            primary_key: self.primary_key.clone(),
        }
    }

    /// Exactly `size` consecutive items starting at the resolved offset, or
    /// fewer if the source runs out first.
    ///
    /// A negative offset resolves relative to the requested size, not the
    /// collection length: `start = size + offset`. Callers expecting
    /// length-relative offsets will be surprised whenever `|offset|` strays
    /// from `size`; the behavior is kept as-is for compatibility.
    pub fn slice(&self, offset: i64, size: i64) -> Result<Self> {
        if size <= 0 {
            return Err(Error::OutOfRange(format!(
                "slice size must be positive, got {size}"
            )));
        }
        if offset.unsigned_abs() > self.count() as u64 {
            return Err(Error::OutOfRange(format!(
                "offset {offset} out of range for a collection of {} items",
                self.count()
            )));
        }

        let start = if offset >= 0 { offset } else { size + offset };
        let start = usize::try_from(start).unwrap_or(0);

        Ok(Self {
            items: self
                .items
                .iter()
                .skip(start)
                .take(size as usize)
                .cloned()
                .collect(),
            primary_key: self.primary_key.clone(),
        })
    }

    /// A new collection of mapped items, in order, with the primary key reset.
    ///
    /// The mapping receives an owned copy of each item, so in-place mutation
    /// inside `map_fn` never reaches the receiver.
    pub fn transform<U, F>(&self, map_fn: F) -> Collection<U>
    where
        F: FnMut(T) -> U,
    {
        Collection {
            items: self.items.iter().cloned().map(map_fn).collect(),
            primary_key: None,
        }
    }

    /// Split into consecutive sub-collections of up to `max_size` items each.
    ///
    /// The primary key carries through to every sub-collection. The last
    /// chunk may be smaller; `max_size >= count()` yields a single chunk and
    /// a zero `max_size` yields no chunks.
    pub fn chunk(&self, max_size: usize) -> Collection<Collection<T>> {
        let mut chunks = Collection {
            items: Vec::new(),
            primary_key: self.primary_key.clone(),
        };
        if max_size == 0 {
            return chunks;
        }
        for run in self.items.chunks(max_size) {
            chunks.push(Self {
                items: run.to_vec(),
                primary_key: self.primary_key.clone(),
            });
        }
        chunks
    }
}

impl<T: Record> Collection<T> {
    /// Filter with a where clause; see [`WhereClause`] for the accepted
    /// shapes and [`crate::Operator`] for the operator table.
    pub fn where_(&self, clause: WhereClause<'_, T>) -> Result<Self> {
        let mut predicate = clause.into_predicate()?;
        Ok(self.filter(|item| predicate(item)))
    }

    /// The first item whose primary-key field loosely equals `id`, or `None`
    /// if there is no match or no primary key configured.
    pub fn get(&self, id: impl Into<Value>) -> Option<&T> {
        let key = self.primary_key.as_deref()?;
        let id = id.into();
        self.items
            .iter()
            .find(|item| loose_eq(&item.field(key).unwrap_or(Value::Null), &id))
    }

    /// Whether an item with the given id is present.
    pub fn has(&self, id: impl Into<Value>) -> bool {
        self.get(id).is_some()
    }

    /// Items of the receiver whose primary-key value is not present as an id
    /// in `other`.
    ///
    /// Meaningful only with a primary key configured; without one every
    /// lookup misses and the result equals the receiver.
    pub fn diff(&self, other: &Self) -> Self {
        self.filter(|item| match self.primary_key.as_deref() {
            Some(key) => other.get(item.field(key).unwrap_or(Value::Null)).is_none(),
            None => true,
        })
    }

    /// Remove all items whose primary-key field loosely equals `id`,
    /// returning the first removed item. With no primary key configured,
    /// nothing matches and nothing is removed.
    pub fn pull(&mut self, id: impl Into<Value>) -> Option<T> {
        let key = self.primary_key.clone()?;
        let id = id.into();
        let mut pulled = Vec::new();
        self.items.retain(|item| {
            if loose_eq(&item.field(&key).unwrap_or(Value::Null), &id) {
                pulled.push(item.clone());
                false
            } else {
                true
            }
        });
        pulled.into_iter().next()
    }

    /// Project one attribute from each item into a new collection keyed by
    /// `key` when given, else by `attribute`. When `key` is given and differs
    /// from `attribute`, the key field is carried alongside.
    ///
    /// Absent fields are omitted from the emitted record rather than being an
    /// error.
    pub fn pluck(&self, attribute: &str, key: Option<&str>) -> Self {
        let mut results = Self {
            items: Vec::new(),
            primary_key: Some(key.unwrap_or(attribute).to_string()),
        };
        for item in &self.items {
            let mut fields = Vec::new();
            if let Some(value) = item.field(attribute) {
                fields.push((attribute.to_string(), value));
            }
            if let Some(key) = key {
                if key != attribute {
                    if let Some(value) = item.field(key) {
                        fields.push((key.to_string(), value));
                    }
                }
            }
            results.push(T::from_fields(fields));
        }
        results
    }

    /// Keep only the first item seen for each distinct value of `key`,
    /// defaulting to the primary key. With no key resolved, whole items dedup
    /// by equality. The relative order of kept items is preserved.
    ///
    /// All items missing the key field share one "absent" slot, so only the
    /// first of them survives.
    pub fn unique(&self, key: Option<&str>) -> Self {
        match key.or(self.primary_key.as_deref()) {
            Some(key) => {
                let mut seen: Vec<Option<Value>> = Vec::new();
                self.filter(|item| {
                    let value = item.field(key);
                    if seen.contains(&value) {
                        false
                    } else {
                        seen.push(value);
                        true
                    }
                })
            }
            None => {
                let mut seen: Vec<T> = Vec::new();
                self.filter(|item| {
                    if seen.contains(item) {
                        false
                    } else {
                        seen.push(item.clone());
                        true
                    }
                })
            }
        }
    }
}

impl<T: ToArray> Collection<T> {
    /// A plain ordered sequence of the items as JSON values. Items that are
    /// themselves collections flatten to arrays of their items, so nested
    /// collections come out as nested arrays.
    pub fn to_array(&self) -> Vec<Value> {
        self.items.iter().map(ToArray::to_array).collect()
    }
}

impl<T: ToArray> ToArray for Collection<T> {
    fn to_array(&self) -> Value {
        Value::Array(self.items.iter().map(ToArray::to_array).collect())
    }
}

impl<T: DeepClone> DeepClone for Collection<T> {}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(items)
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
