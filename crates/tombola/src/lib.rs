//! `tombola` — a duplicate-aware bag (multiset) with uniform random draws
//! and multiset algebra.
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`bag`]    | `Bag<T>` — the container and its operation set        |
//! | [`set`]    | `Set<T>` — distinct-value companion view              |
//! | [`rng`]    | `DrawRng` — seeded source for reproducible draws      |
//! | [`error`]  | `BagError`, `BagResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `Bag` and `Set`.      |

pub mod bag;
pub mod error;
pub mod rng;
pub mod set;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bag::Bag;
pub use error::{BagError, BagResult};
pub use rng::DrawRng;
pub use set::Set;
