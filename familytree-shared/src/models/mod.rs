pub mod auth;
pub mod ids;
pub mod person;
pub mod relationship;
pub mod tree;

pub use auth::{SigninRequest, SignupRequest, TokenResponse};
pub use ids::{PersonId, RelationshipId, TreeId};
pub use person::{Gender, PersonCreate, PersonResponse};
pub use relationship::{RelationshipCreate, RelationshipResponse, RelationshipType};
pub use tree::{TreeCreate, TreeResponse};
