//! # pixel_nest 库
//!
//! 本库包含图像隐写工具的核心逻辑：把一张图像隐藏在另一张图像的低 4 位中。

// 声明库包含的所有模块。

pub mod bits;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod handler;
pub mod steganography;

pub use error::StegoError;
pub use steganography::{decode, encode};
