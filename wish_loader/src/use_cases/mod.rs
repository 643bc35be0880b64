pub mod load_wishes;
pub mod normalize;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use load_wishes::{LoadOutcome, WishLoader, fallback_wishes};
pub use session::{PageSession, SessionPhase};
