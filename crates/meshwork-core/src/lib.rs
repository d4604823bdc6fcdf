//! Meshwork Core Types
//!
//! This crate provides the foundational types shared by the Meshwork layout
//! engine and its collaborators:
//!
//! - **Geometry**: 2D points/vectors and angle helpers ([`geometry`] module)

pub mod geometry;
