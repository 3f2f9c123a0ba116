//! # 运行配置模块
//!
//! 将解析后的命令行参数整理为一次性校验过的配置结构，
//! 填充默认输出路径并把输出扩展名统一为 `.png`。

use crate::cli::{DecodeArgs, EncodeArgs};
use crate::constants::{DEFAULT_DECODED_OUTPUT, DEFAULT_ENCODED_OUTPUT, OUTPUT_EXTENSION};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeConfig {
    pub carrier: PathBuf,
    pub secret: PathBuf,
    pub output: PathBuf,
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeConfig {
    pub image: PathBuf,
    pub output: PathBuf,
    pub force: bool,
}

impl From<EncodeArgs> for EncodeConfig {
    fn from(args: EncodeArgs) -> Self {
        Self {
            carrier: args.carrier,
            secret: args.secret,
            output: resolve_output(args.output, DEFAULT_ENCODED_OUTPUT),
            force: args.force,
        }
    }
}

impl From<DecodeArgs> for DecodeConfig {
    fn from(args: DecodeArgs) -> Self {
        Self {
            image: args.image,
            output: resolve_output(args.output, DEFAULT_DECODED_OUTPUT),
            force: args.force,
        }
    }
}

fn resolve_output(output: Option<PathBuf>, default: &str) -> PathBuf {
    output.map_or_else(|| PathBuf::from(default), |path| normalize_png(&path))
}

/// 将任意输出路径的扩展名替换为 `.png`，没有扩展名时追加。
pub fn normalize_png(path: &Path) -> PathBuf {
    path.with_extension(OUTPUT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_normalized() {
        assert_eq!(normalize_png(Path::new("out.jpg")), PathBuf::from("out.png"));
        assert_eq!(normalize_png(Path::new("dir/out")), PathBuf::from("dir/out.png"));
        assert_eq!(normalize_png(Path::new("out.png")), PathBuf::from("out.png"));
    }

    #[test]
    fn encode_defaults() {
        let config = EncodeConfig::from(EncodeArgs {
            carrier: "vis.jpg".into(),
            secret: "hid.jpg".into(),
            output: None,
            force: false,
        });
        assert_eq!(config.output, PathBuf::from("encoded_image.png"));
    }

    #[test]
    fn decode_defaults_and_explicit_output() {
        let config = DecodeConfig::from(DecodeArgs {
            image: "out.png".into(),
            output: None,
            force: false,
        });
        assert_eq!(config.output, PathBuf::from("images/decoded_image.png"));

        let config = DecodeConfig::from(DecodeArgs {
            image: "out.png".into(),
            output: Some("res.bmp".into()),
            force: true,
        });
        assert_eq!(config.output, PathBuf::from("res.png"));
        assert!(config.force);
    }
}
