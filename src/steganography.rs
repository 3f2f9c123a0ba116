//! # 隐写核心模块
//!
//! 在载体图像的低 4 位中嵌入完整的秘密图像，或从中恢复。
//!
//! 载体左上角像素 (0, 0) 存放秘密图像的宽与高 (各 12 bits，共 24 bits，
//! 直接作为三个通道的完整取值)。其余像素按列优先顺序 (外层为列 x，内层为行 y)
//! 依次承载负载：每个通道保留高 4 位，低 4 位替换为负载中的下一个半字节。
//! 秘密图像的每个像素以完整的 8-bit R, G, B 存储，即占用两个载体像素。

use crate::bits::{BitString, from_binary, to_binary8, to_binary12};
use crate::constants::{
    BITS_PER_CARRIER_PIXEL, BITS_PER_SECRET_PIXEL, CHANNEL_BITS, DIMENSION_BITS,
    HIGH_NIBBLE_MASK, LOW_NIBBLE_MASK, NIBBLE_BITS,
};
use crate::error::StegoError;
use image::{Rgb, RgbImage};
use log::debug;

/// 存放在像素 (0, 0) 中的秘密图像尺寸。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    pub width: u32,
    pub height: u32,
}

impl Metadata {
    /// 将宽、高打包为像素 (0, 0) 的三个通道值。
    ///
    /// # Errors
    ///
    /// 宽或高超过 4095 时返回 [`StegoError::InvalidDimension`]。
    pub fn pack(&self) -> Result<[u8; 3], StegoError> {
        let mut bits = to_binary12(self.width)?;
        bits.push_bits(&to_binary12(self.height)?);

        let mut channels = [0u8; 3];
        for (channel, group) in channels.iter_mut().zip(bits.chunks_exact(CHANNEL_BITS)) {
            *channel = channel_from_bits(group)?;
        }
        Ok(channels)
    }

    pub fn unpack(channels: [u8; 3]) -> Self {
        let mut bits = BitString::with_capacity(BITS_PER_SECRET_PIXEL);
        for channel in channels {
            bits.push_value(u32::from(channel), CHANNEL_BITS);
        }
        Self {
            width: from_binary(&bits[..DIMENSION_BITS]),
            height: from_binary(&bits[DIMENSION_BITS..]),
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// 载体可承载的负载位数 (不含元数据像素)。
pub fn capacity_bits(width: u32, height: u32) -> usize {
    (width as usize * height as usize).saturating_sub(1) * BITS_PER_CARRIER_PIXEL
}

/// 隐藏一张 `width` x `height` 的秘密图像所需的负载位数。
pub fn required_bits(width: u32, height: u32) -> usize {
    width as usize * height as usize * BITS_PER_SECRET_PIXEL
}

/// 载体最多能隐藏的秘密图像像素数。
pub fn max_secret_pixels(width: u32, height: u32) -> usize {
    capacity_bits(width, height) / BITS_PER_SECRET_PIXEL
}

/// 列优先遍历所有坐标，编码与解码必须共用此顺序。
fn column_major(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    (0..width).flat_map(move |x| (0..height).map(move |y| (x, y)))
}

/// 承载负载的载体坐标，跳过元数据像素 (0, 0)。
fn payload_positions(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    column_major(width, height).skip(1)
}

fn channel_from_bits(bits: &[bool]) -> Result<u8, StegoError> {
    let value = from_binary(bits);
    u8::try_from(value).map_err(|_| StegoError::InvalidChannelValue(value))
}

/// 按列优先顺序把秘密图像展开为负载位串，每像素 24 bits。
fn flatten_pixels(secret: &RgbImage) -> Result<BitString, StegoError> {
    let (width, height) = secret.dimensions();
    let mut payload = BitString::with_capacity(required_bits(width, height));
    for (x, y) in column_major(width, height) {
        for &channel in &secret.get_pixel(x, y).0 {
            payload.push_bits(&to_binary8(u32::from(channel))?);
        }
    }
    Ok(payload)
}

/// 将 `secret` 隐藏到 `carrier` 的副本中并返回该副本。
///
/// 在修改任何像素之前先检查尺寸与容量，因此失败时不会产生半成品。
/// 负载写完后立即停止，其余载体像素保持原样。
///
/// # Errors
///
/// * 秘密图像的宽或高超过 4095：[`StegoError::InvalidDimension`]。
/// * 载体为空或容量不足：[`StegoError::InsufficientCarrierCapacity`]。
pub fn encode(carrier: &RgbImage, secret: &RgbImage) -> Result<RgbImage, StegoError> {
    let (carrier_width, carrier_height) = carrier.dimensions();
    let (secret_width, secret_height) = secret.dimensions();

    let header = Metadata {
        width: secret_width,
        height: secret_height,
    }
    .pack()?;

    let required = required_bits(secret_width, secret_height);
    let available = capacity_bits(carrier_width, carrier_height);
    debug!(
        "encode: carrier {carrier_width}x{carrier_height}, secret {secret_width}x{secret_height}, {required}/{available} bits"
    );

    if carrier.is_empty() || required > available {
        return Err(StegoError::InsufficientCarrierCapacity {
            required,
            available,
        });
    }

    let payload = flatten_pixels(secret)?;
    let mut output = carrier.clone();
    output.put_pixel(0, 0, Rgb(header));

    for ((x, y), chunk) in
        payload_positions(carrier_width, carrier_height).zip(payload.chunks(BITS_PER_CARRIER_PIXEL))
    {
        let pixel = output.get_pixel_mut(x, y);
        for (channel, nibble) in pixel.0.iter_mut().zip(chunk.chunks(NIBBLE_BITS)) {
            *channel = (*channel & HIGH_NIBBLE_MASK) | channel_from_bits(nibble)?;
        }
    }

    Ok(output)
}

/// 从经过 [`encode`] 处理的载体中恢复秘密图像。
///
/// 只读取覆盖 `width * height * 24` 个负载位所需的像素。
///
/// # Errors
///
/// 载体为空，或像素 (0, 0) 声明的尺寸超出载体所能提供的负载时，
/// 返回 [`StegoError::TruncatedPayload`]。
pub fn decode(carrier: &RgbImage) -> Result<RgbImage, StegoError> {
    let (carrier_width, carrier_height) = carrier.dimensions();
    if carrier.is_empty() {
        return Err(StegoError::TruncatedPayload {
            required: BITS_PER_SECRET_PIXEL,
            available: 0,
        });
    }

    let metadata = Metadata::unpack(carrier.get_pixel(0, 0).0);
    let required = required_bits(metadata.width, metadata.height);
    let available = capacity_bits(carrier_width, carrier_height);
    debug!(
        "decode: carrier {carrier_width}x{carrier_height}, secret {}x{}, {required}/{available} bits",
        metadata.width, metadata.height
    );

    if required > available {
        return Err(StegoError::TruncatedPayload {
            required,
            available,
        });
    }

    let mut payload = BitString::with_capacity(required);
    for (x, y) in payload_positions(carrier_width, carrier_height) {
        if payload.len() >= required {
            break;
        }
        for &channel in &carrier.get_pixel(x, y).0 {
            payload.push_value(u32::from(channel & LOW_NIBBLE_MASK), NIBBLE_BITS);
        }
    }

    reconstruct(&payload, metadata)
}

/// 按列优先顺序从负载位串重建图像，每像素消耗 24 bits。
fn reconstruct(payload: &[bool], metadata: Metadata) -> Result<RgbImage, StegoError> {
    let mut image = RgbImage::new(metadata.width, metadata.height);
    let mut pixels = payload.chunks_exact(BITS_PER_SECRET_PIXEL);

    for (x, y) in column_major(metadata.width, metadata.height) {
        let bits = pixels.next().ok_or(StegoError::TruncatedPayload {
            required: metadata.pixel_count() * BITS_PER_SECRET_PIXEL,
            available: payload.len(),
        })?;

        let mut rgb = [0u8; 3];
        for (channel, group) in rgb.iter_mut().zip(bits.chunks_exact(CHANNEL_BITS)) {
            *channel = channel_from_bits(group)?;
        }
        image.put_pixel(x, y, Rgb(rgb));
    }

    Ok(image)
}
