//! # 命令处理逻辑模块
//!
//! 包含处理 `encode`、`decode` 与 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调图像读写、调用核心隐写算法以及向用户报告结果。

use crate::cli::CapacityArgs;
use crate::config::{DecodeConfig, EncodeConfig};
use crate::error::StegoError;
use crate::steganography::{capacity_bits, decode, encode, max_secret_pixels};
use anyhow::{Context, Result};
use colored::Colorize;
use image::{ImageFormat, RgbImage};
use log::info;
use std::fs;
use std::path::Path;

/// 打开任意受支持格式的图像并转换为 RGB8。
fn open_rgb(path: &Path) -> Result<RgbImage, StegoError> {
    let image = image::open(path).map_err(|source| StegoError::ImageOpen {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Opened {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image.to_rgb8())
}

/// 创建缺失的父目录后以 PNG 格式保存图像。
fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| {
            format!(
                "Unable to create output directory: {}",
                parent.to_string_lossy().red().bold()
            )
        })?;
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| StegoError::ImageSave {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Saved {}", path.display());
    Ok(())
}

/// 输出文件已存在且未指定 `--force` 时拒绝继续。
fn check_output(path: &Path, force: bool) -> Result<(), StegoError> {
    if path.exists() && !force {
        return Err(StegoError::OutputExists(path.to_path_buf()));
    }
    Ok(())
}

/// 处理 'Encode' 命令的执行逻辑。
///
/// 负责读取载体与秘密图像、调用隐写核心函数，最后将结果保存为 PNG。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 无法打开载体或秘密图像。
/// * 秘密图像尺寸超过 4095，或载体容量不足。
/// * 无法写入输出文件。
pub fn handle_encode(config: EncodeConfig) -> Result<()> {
    check_output(&config.output, config.force)?;

    let carrier = open_rgb(&config.carrier).with_context(|| {
        format!(
            "Unable to read carrier image: {}",
            config.carrier.to_string_lossy().red().bold()
        )
    })?;

    let secret = open_rgb(&config.secret).with_context(|| {
        format!(
            "Unable to read secret image: {}",
            config.secret.to_string_lossy().red().bold()
        )
    })?;

    let encoded = encode(&carrier, &secret).with_context(|| {
        format!(
            "Failed to hide {} inside {}.",
            config.secret.to_string_lossy().red().bold(),
            config.carrier.to_string_lossy().red().bold()
        )
    })?;

    save_png(&encoded, &config.output)?;

    println!(
        "The image has been successfully hidden and saved: {}",
        config.output.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像、恢复隐藏的图像并保存为 PNG。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 无法打开输入图像。
/// * 图像声明的尺寸超出其可提供的负载。
/// * 无法写入输出文件。
pub fn handle_decode(config: DecodeConfig) -> Result<()> {
    check_output(&config.output, config.force)?;

    let carrier = open_rgb(&config.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            config.image.to_string_lossy().red().bold()
        )
    })?;

    let decoded = decode(&carrier).with_context(|| {
        format!(
            "Failed to recover a hidden image from '{}'. \nThe image may not contain a hidden image or is corrupted.",
            config.image.to_string_lossy().red().bold()
        )
    })?;

    save_png(&decoded, &config.output)?;

    println!(
        "The hidden image ({}x{}) has been successfully recovered and saved: {}",
        decoded.width().to_string().green(),
        decoded.height().to_string().green(),
        config.output.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑，报告载体可承载的负载位数与秘密图像像素数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let carrier = open_rgb(&args.carrier).with_context(|| {
        format!(
            "Unable to read carrier image: {}",
            args.carrier.to_string_lossy().red().bold()
        )
    })?;
    let (width, height) = carrier.dimensions();

    println!(
        "Carrier {} ({}x{}) can hold {} bits, i.e. up to {} secret pixels.",
        args.carrier.to_string_lossy().bold(),
        width,
        height,
        capacity_bits(width, height).to_string().green().bold(),
        max_secret_pixels(width, height).to_string().green().bold()
    );

    Ok(())
}
