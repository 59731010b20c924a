//! Implementations of [`Rlgl`](super::Rlgl) for the supported frameworks.
#[cfg(feature = "raylib")]
pub mod raylib;
