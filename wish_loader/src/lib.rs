pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{FetchRoute, WishCard, WishRecord};
pub use frameworks::runtime::{load_and_render, run};
pub use use_cases::{LoadOutcome, PageSession, SessionPhase, WishLoader};
