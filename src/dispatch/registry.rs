//! Runtime multiple dispatch.
//!
//! A [`Dispatcher`] maps `(operation, lhs type, rhs type)` to an
//! implementation and picks one from the dynamic types of the two operands
//! at call time. Matching is exact: no fallback to other types and no
//! commutation, so `(A, B)` and `(B, A)` are distinct entries.

use crate::error::LaError;
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;

type DynImpl<R> = Box<dyn Fn(&dyn Any, &dyn Any) -> Result<R, LaError> + Send + Sync>;

type Key = (String, TypeId, TypeId);

struct Entry<R> {
    lhs: &'static str,
    rhs: &'static str,
    f: DynImpl<R>,
}

const UNREGISTERED: &str = "<unregistered type>";

/// Registry of binary operations returning `R`.
pub struct Dispatcher<R> {
    table: HashMap<Key, Entry<R>>,
    names: HashMap<TypeId, &'static str>,
}

impl<R: 'static> Dispatcher<R> {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
            names: HashMap::new(),
        }
    }

    /// Register `f` as the implementation of `op` for operands of exactly
    /// types `A` and `B`. A previous entry for the same triple is replaced.
    pub fn register<A, B, F>(&mut self, op: &str, f: F) -> &mut Self
    where
        A: Any,
        B: Any,
        F: Fn(&A, &B) -> Result<R, LaError> + Send + Sync + 'static,
    {
        let (lhs, rhs) = (type_name::<A>(), type_name::<B>());
        self.names.insert(TypeId::of::<A>(), lhs);
        self.names.insert(TypeId::of::<B>(), rhs);
        let op_name = op.to_string();
        let f: DynImpl<R> = Box::new(move |a: &dyn Any, b: &dyn Any| {
            match (a.downcast_ref::<A>(), b.downcast_ref::<B>()) {
                (Some(a), Some(b)) => f(a, b),
                _ => Err(LaError::NoMatchingImplementation {
                    op: op_name.clone(),
                    lhs,
                    rhs,
                }),
            }
        });
        let key = (op.to_string(), TypeId::of::<A>(), TypeId::of::<B>());
        if self.table.insert(key, Entry { lhs, rhs, f }).is_some() {
            log::debug!("`{op}` for ({lhs}, {rhs}) re-registered, previous implementation replaced");
        }
        self
    }

    /// Call the implementation of `op` registered for the dynamic types of
    /// `a` and `b`.
    ///
    /// Pass the values themselves (`&v`), not boxes or references to
    /// references: a `&Box<dyn Any>` is dispatched as a `Box`.
    pub fn invoke(&self, op: &str, a: &dyn Any, b: &dyn Any) -> Result<R, LaError> {
        let key = (op.to_string(), a.type_id(), b.type_id());
        match self.table.get(&key) {
            Some(entry) => {
                log::trace!("dispatching `{op}` to ({}, {})", entry.lhs, entry.rhs);
                (entry.f)(a, b)
            }
            None => Err(LaError::NoMatchingImplementation {
                op: op.to_string(),
                lhs: self.name_of(a.type_id()),
                rhs: self.name_of(b.type_id()),
            }),
        }
    }

    pub fn contains(&self, op: &str, lhs: TypeId, rhs: TypeId) -> bool {
        self.table.contains_key(&(op.to_string(), lhs, rhs))
    }

    /// Number of registered `(operation, lhs, rhs)` entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Registered entries as `(operation, lhs, rhs)`, sorted.
    pub fn operations(&self) -> Vec<(&str, &'static str, &'static str)> {
        let mut ops: Vec<_> = self
            .table
            .iter()
            .map(|((op, _, _), e)| (op.as_str(), e.lhs, e.rhs))
            .collect();
        ops.sort_unstable();
        ops
    }

    fn name_of(&self, id: TypeId) -> &'static str {
        self.names.get(&id).copied().unwrap_or(UNREGISTERED)
    }
}

impl<R: 'static> Default for Dispatcher<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Dispatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.table.iter().map(|((op, _, _), e)| (op, e.lhs, e.rhs)))
            .finish()
    }
}
