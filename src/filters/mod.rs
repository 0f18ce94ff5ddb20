//! Raster filters feeding the outline pipeline.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | RGBA8 | (H, W, 4) | u8 | Decoded source image, 0-255 |
//! | Gray RGBA8 | (H, W, 4) | u8 | R=G=B=luma, A=255 |
//! | Edge map | (H, W, 4) | u8 | 0 or 255 in every channel |
//!
//! ## Architecture
//!
//! - **Pure** - every filter takes an `ArrayView3` and returns a new array
//! - **Deterministic** - integer kernels and fixed constants only
//! - **Single-threaded** - one run never spawns work; parallelism lives in
//!   the batch API

pub mod core;
pub mod grayscale;
pub mod blur;
pub mod edge;
pub mod resize;
