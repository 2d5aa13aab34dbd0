//! The per-entity contract behind every CRUD resource.
//!
//! A resource decides only three things: its field list (the record type and
//! its create parameters), its identifier type, and the names it is exposed
//! under. Everything else (lookup, not-found reporting, full-replace update,
//! delete acknowledgement) is shared.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ModelError;

/// Identifier of a record within one collection.
pub trait ResourceId:
    Clone + Debug + Display + Eq + Ord + Hash + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// `true` when the store assigns the identifier on insert.
    const GENERATED: bool;

    /// Identifier for the `n`-th generated record, if this kind is generated.
    fn from_sequence(n: i64) -> Option<Self>;

    /// Position in the generated sequence, for stores seeded with existing rows.
    fn sequence_value(&self) -> Option<i64>;
}

impl ResourceId for i64 {
    const GENERATED: bool = true;

    fn from_sequence(n: i64) -> Option<Self> {
        Some(n)
    }

    fn sequence_value(&self) -> Option<i64> {
        Some(*self)
    }
}

/// Short string codes supplied by the caller on create.
impl ResourceId for String {
    const GENERATED: bool = false;

    fn from_sequence(_n: i64) -> Option<Self> {
        None
    }

    fn sequence_value(&self) -> Option<i64> {
        None
    }
}

/// A flat record exposed through the list/get/create/update/delete contract.
pub trait Resource:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Id: ResourceId;

    /// Discrete named parameters accepted by create (everything but a
    /// generated identifier).
    type Params: DeserializeOwned + Debug + Send + 'static;

    /// Display name used in messages, e.g. `HelpRequest with id 7 not found`.
    const NAME: &'static str;

    /// Path segment under `/api/`.
    const PATH: &'static str;

    fn id(&self) -> Self::Id;

    /// Same record with its identifier replaced.
    fn with_id(self, id: Self::Id) -> Self;

    /// New record from create parameters. Generated identifiers are left
    /// unassigned for the store to fill in.
    fn from_params(params: Self::Params) -> Self;

    /// Field-level checks run before create and update.
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}
