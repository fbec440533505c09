//! FFI-safe optional values.
//!
//! [`Maybe<T>`] is a two-variant tagged union with a `#[repr(C, u8)]`
//! layout that C callers can destructure, together with the combinators
//! for transforming and composing optional values without manual presence
//! checks. `From` impls hop between [`Maybe`] and [`std::option::Option`]
//! at the boundary, and `build.rs` emits the matching C header via
//! cbindgen.

pub mod maybe;

pub use crate::maybe::{InvalidState, Maybe};
