//! Resource DTOs and the small vocabularies the client reasons about.
//!
//! DTO shapes belong to the backend. Every field is optional so a missing
//! relation or column never fails deserialization; consumers go through the
//! defaulting accessors.

mod resources;
mod role;
mod status;

pub use self::resources::*;
pub use self::role::Role;
pub use self::status::*;
