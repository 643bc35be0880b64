mod aliases;
mod card;
pub mod errors;
pub mod ports;
mod route;
mod wish;

// Re-export the domain boundary types.
pub use aliases::{CanonicalField, WISH_FIELD_ALIASES};
pub use card::WishCard;
pub use route::FetchRoute;
pub use wish::{WishRecord, parse_timestamp};
