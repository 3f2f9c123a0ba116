//! # 位串编解码模块
//!
//! 将 8 位通道值与 12 位尺寸值转换为定宽的大端位串，以及反向解析。
//! 嵌入与提取两侧共享这一套转换规则。

use crate::constants::{CHANNEL_BITS, DIMENSION_BITS, MAX_CHANNEL_VALUE, MAX_DIMENSION};
use crate::error::StegoError;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// 有序的位序列，最高位在前。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitString(Vec<bool>);

impl BitString {
    pub fn with_capacity(bits: usize) -> Self {
        Self(Vec::with_capacity(bits))
    }

    /// 以 `width` 位大端形式追加 `value`，高位不足时补 0。
    ///
    /// 调用方需保证 `value` 可以用 `width` 位表示。
    pub fn push_value(&mut self, value: u32, width: usize) {
        debug_assert!(width <= u32::BITS as usize);
        self.0
            .extend((0..width).rev().map(|shift| (value >> shift) & 1 == 1));
    }

    pub fn push_bits(&mut self, bits: &[bool]) {
        self.0.extend_from_slice(bits);
    }
}

impl Deref for BitString {
    type Target = [bool];

    fn deref(&self) -> &[bool] {
        &self.0
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .try_for_each(|&bit| f.write_str(if bit { "1" } else { "0" }))
    }
}

impl FromStr for BitString {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(StegoError::InvalidBitString(other)),
            })
            .collect::<Result<Vec<bool>, _>>()
            .map(Self)
    }
}

/// 将通道值转换为 8 位位串。
///
/// # Errors
///
/// 当 `value` 大于 255 时返回 [`StegoError::InvalidChannelValue`]。
pub fn to_binary8(value: u32) -> Result<BitString, StegoError> {
    if value > MAX_CHANNEL_VALUE {
        return Err(StegoError::InvalidChannelValue(value));
    }
    let mut bits = BitString::with_capacity(CHANNEL_BITS);
    bits.push_value(value, CHANNEL_BITS);
    Ok(bits)
}

/// 将图像尺寸转换为 12 位位串。
///
/// # Errors
///
/// 当 `value` 大于 4095 时返回 [`StegoError::InvalidDimension`]。
pub fn to_binary12(value: u32) -> Result<BitString, StegoError> {
    if value > MAX_DIMENSION {
        return Err(StegoError::InvalidDimension(value));
    }
    let mut bits = BitString::with_capacity(DIMENSION_BITS);
    bits.push_value(value, DIMENSION_BITS);
    Ok(bits)
}

/// 按大端顺序把位序列解析为无符号整数。
pub fn from_binary(bits: &[bool]) -> u32 {
    debug_assert!(bits.len() <= u32::BITS as usize);
    bits.iter().fold(0, |acc, &bit| (acc << 1) | u32::from(bit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary8_is_left_padded() {
        assert_eq!(to_binary8(0).unwrap().to_string(), "00000000");
        assert_eq!(to_binary8(5).unwrap().to_string(), "00000101");
        assert_eq!(to_binary8(255).unwrap().to_string(), "11111111");
    }

    #[test]
    fn binary12_is_left_padded() {
        assert_eq!(to_binary12(2).unwrap().to_string(), "000000000010");
        assert_eq!(to_binary12(4095).unwrap().to_string(), "111111111111");
    }

    #[test]
    fn channel_values_round_trip() {
        for v in 0..=255 {
            let bits = to_binary8(v).unwrap();
            assert_eq!(bits.len(), 8);
            assert_eq!(from_binary(&bits), v);
        }
    }

    #[test]
    fn dimensions_round_trip() {
        for v in 0..=4095 {
            let bits = to_binary12(v).unwrap();
            assert_eq!(bits.len(), 12);
            assert_eq!(from_binary(&bits), v);
        }
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(
            to_binary8(256),
            Err(StegoError::InvalidChannelValue(256))
        ));
        assert!(matches!(
            to_binary12(4096),
            Err(StegoError::InvalidDimension(4096))
        ));
    }

    #[test]
    fn parses_textual_form() {
        let bits: BitString = "00100000".parse().unwrap();
        assert_eq!(from_binary(&bits), 32);
        assert!(matches!(
            "0102".parse::<BitString>(),
            Err(StegoError::InvalidBitString('2'))
        ));
    }

    #[test]
    fn from_binary_of_empty_is_zero() {
        assert_eq!(from_binary(&[]), 0);
    }
}
