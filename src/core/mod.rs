//! Core module containing the ship model, validation, querying and the service

pub mod error;
pub mod filter;
pub mod order;
pub mod query;
pub mod rating;
pub mod service;
pub mod ship;
pub mod store;
pub mod validation;

pub use error::{ErrorKind, ShipError};
pub use filter::{Condition, Predicate, PredicateBuilder, ShipFilter};
pub use order::{OrderSpec, ShipOrder, SortDirection};
pub use query::{ListParams, Page, PageRequest};
pub use service::ShipQueryService;
pub use ship::{Ship, ShipId, ShipPayload, ShipType};
pub use store::{ShipPatch, ShipStore};
pub use validation::{ValidationError, ValidationMode};
