//! Synthetic smart-office sensor data.
//!
//! Generates one week of temperature, illuminance and occupancy readings on a
//! fixed-interval timeline and writes them out as a single CSV. Values follow
//! smooth daily curves with Gaussian noise on top; the random source is passed
//! in explicitly so runs can be reproduced from a seed.

pub mod dataset;
pub mod signals;
pub mod timeline;
pub mod writer;
