/// 每个通道值的二进制位宽。
pub const CHANNEL_BITS: usize = 8;

/// 元数据中宽、高各自占用的位宽。
pub const DIMENSION_BITS: usize = 12;

/// 每个载体通道写入的负载位数 (低半字节)。
pub const NIBBLE_BITS: usize = 4;

/// 每个像素的颜色通道数 (R, G, B)。
pub const CHANNELS: usize = 3;

/// 秘密图像每个像素占用的负载位数 (完整保留 8-bit 的 R, G, B)。
pub const BITS_PER_SECRET_PIXEL: usize = CHANNEL_BITS * CHANNELS;

/// 每个载体像素可承载的负载位数。
pub const BITS_PER_CARRIER_PIXEL: usize = NIBBLE_BITS * CHANNELS;

/// 元数据可表示的最大宽度或高度 (12 bits)。
pub const MAX_DIMENSION: u32 = (1 << DIMENSION_BITS) - 1;

/// 通道值的最大取值。
pub const MAX_CHANNEL_VALUE: u32 = u8::MAX as u32;

/// 保留载体通道高 4 位的掩码。
pub const HIGH_NIBBLE_MASK: u8 = 0xF0;

/// 提取载体通道低 4 位的掩码。
pub const LOW_NIBBLE_MASK: u8 = 0x0F;

/// 未指定输出路径时 `encode` 的默认输出。
pub const DEFAULT_ENCODED_OUTPUT: &str = "encoded_image.png";

/// 未指定输出路径时 `decode` 的默认输出。
pub const DEFAULT_DECODED_OUTPUT: &str = "images/decoded_image.png";

/// 输出图像统一使用的扩展名。
pub const OUTPUT_EXTENSION: &str = "png";
