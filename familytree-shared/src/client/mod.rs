//! # Client
//!
//! HTTP access to the family-tree API and the binder that maps user actions
//! onto it. Front ends supply a [`View`] and translate their input into
//! [`Action`]s; everything else lives here.

pub mod api;
pub mod binder;
pub mod errors;
pub mod session;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{ApiClient, DEFAULT_BASE_URL, TOKEN_HEADER};
pub use binder::{Action, Binder, Credentials, NO_TREE_ALERT, PersonForm, TreeForm};
pub use errors::ClientError;
pub use session::Session;
pub use view::{View, person_line};
