use std::{
    any::{Any, TypeId, type_name},
    marker::PhantomData,
};

use hashbrown::HashMap;

use crate::{contract::Comparable, relations::Relation};

type ErasedHash = Box<dyn Fn(&dyn Any) -> Option<u64> + Send + Sync>;

/// Free hash functions associated with types, looked up by [`TypeId`].
///
/// Lets a type that cannot (or should not) carry its own hash be placed in hash-based
/// containers that consult the registry instead.
#[derive(Default)]
pub struct HashRegistry {
    functions: HashMap<TypeId, (&'static str, ErasedHash)>,
}

impl HashRegistry {
    pub fn new() -> Self {
        HashRegistry::default()
    }

    /// Registers `hash` for `T`. Returns true if it replaced an earlier registration.
    pub fn register<T: Any>(&mut self, hash: fn(&T) -> u64) -> bool {
        let erased: ErasedHash = Box::new(move |value: &dyn Any| value.downcast_ref::<T>().map(hash));
        self.functions
            .insert(TypeId::of::<T>(), (type_name::<T>(), erased))
            .is_some()
    }

    /// Registers the type's own [`Comparable::hash_value`].
    pub fn register_comparable<T: Comparable + Any>(&mut self) -> bool {
        self.register::<T>(T::hash_value)
    }

    pub fn hash_of<T: Any>(&self, value: &T) -> Option<u64> {
        let (_, hash) = self.functions.get(&TypeId::of::<T>())?;
        hash(value as &dyn Any)
    }

    pub fn is_registered<T: Any>(&self) -> bool {
        self.functions.contains_key(&TypeId::of::<T>())
    }

    /// Names of the registered types, in no particular order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.values().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// The canonical equality and ordering of `T` paired with its registered hash, so the
    /// registered function can be checked for consistency with equality.
    pub fn relation<T: Comparable + Any>(&self) -> RegisteredRelation<'_, T> {
        RegisteredRelation {
            registry: self,
            marker: PhantomData,
        }
    }
}

/// See [`HashRegistry::relation`]. Unregistered types hash to 0.
pub struct RegisteredRelation<'r, T> {
    registry: &'r HashRegistry,
    marker: PhantomData<fn(&T)>,
}

impl<T: Comparable + Any> Relation<T> for RegisteredRelation<'_, T> {
    fn name(&self) -> &str {
        "registered"
    }

    fn equal(&self, lhs: &T, rhs: &T) -> bool {
        lhs.equals(rhs)
    }

    fn less(&self, lhs: &T, rhs: &T) -> bool {
        lhs.less(rhs)
    }

    fn hash_of(&self, value: &T) -> u64 {
        self.registry.hash_of(value).unwrap_or(0)
    }
}
