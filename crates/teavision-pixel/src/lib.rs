//! Pixel-level analysis for tea-leaf images
//!
//! This crate owns everything that happens to an image after it is decoded
//! to RGBA bytes:
//! - PixelBuffer: owned RGBA8 bitmap with bilinear resizing
//! - ChannelMeans: mean R/G/B over non-transparent pixels
//! - GrayBuffer: 8-bit luma plane used by the texture features
//! - HsvMeans, TextureStats, LbpHistogram, EdgeStats: the handcrafted
//!   feature blocks
//! - FeatureVector: the 267-value vector classical classifiers consume
//!
//! All computations are pure and synchronous. With the `decode` feature,
//! [`PixelBuffer::decode`] turns encoded bytes (PNG, JPEG) into a buffer.

pub mod buffer;
pub mod color;
pub mod edge;
pub mod error;
pub mod features;
pub mod gray;
pub mod lbp;
pub mod means;
pub mod texture;

#[cfg(feature = "decode")]
mod decode;

pub use buffer::*;
pub use color::*;
pub use edge::*;
pub use error::*;
pub use features::*;
pub use gray::*;
pub use lbp::*;
pub use means::*;
pub use texture::*;
