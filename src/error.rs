//! # 错误类型模块
//!
//! 隐写核心与图像读写过程中可能出现的所有错误。
//! 命令处理层会在此基础上使用 `anyhow` 附加上下文信息。

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    #[error("Channel value {0} does not fit in 8 bits (0-255).")]
    InvalidChannelValue(u32),

    #[error("Dimension {0} does not fit in 12 bits (0-4095).")]
    InvalidDimension(u32),

    #[error("Invalid character '{0}' in bit string, only '0' and '1' are allowed.")]
    InvalidBitString(char),

    #[error(
        "Not enough space in the carrier image to hide the secret image. \nRequired: {required} bits, Available: {available} bits"
    )]
    InsufficientCarrierCapacity { required: usize, available: usize },

    #[error(
        "The hidden payload is truncated. \nThe image declares {required} bits but can only supply {available} bits."
    )]
    TruncatedPayload { required: usize, available: usize },

    #[error("Unable to open image file: {path}")]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unable to save image file: {path}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Output file already exists: {0}. Use --force to overwrite.")]
    OutputExists(PathBuf),
}
