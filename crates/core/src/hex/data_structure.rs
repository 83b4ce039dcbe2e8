use crate::hex::Cube;
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};

/// A set of cubes
pub type CubeSet = HashSet<Cube, FnvBuildHasher>;
/// A map of cubes to some `T`
pub type CubeMap<T> = HashMap<Cube, T, FnvBuildHasher>;
/// An ORDERED set of cubes, iterated in insertion order. This has some extra
/// memory overhead, so we should only use it when we actually need the
/// ordering.
pub type CubeIndexSet = IndexSet<Cube, FnvBuildHasher>;
