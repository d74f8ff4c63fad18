//! Subway shortest path finder.
//!
//! Answers: "what is the shortest way from this station to that one?"
//! across a network assembled from independently operated lines.

pub mod domain;
pub mod network;
pub mod path;
