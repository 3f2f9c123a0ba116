//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 参数个数不符合要求时打印用法后正常返回，不视为致命错误。

use clap::{ArgAction, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于将一张图像隐藏在另一张图像中。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于将一张图像隐藏在另一张图像中。\n载体图像的像素数至少需要为 2 * 秘密图像像素数 + 1。"
)]
pub struct Cli {
    /// 提高日志详细程度 (-v 为 info，-vv 为 debug)。
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// 解析命令行参数。
    ///
    /// 参数有误 (或请求 `--help`、`--version`) 时打印 `clap` 生成的用法信息并返回 `None`，
    /// 调用方随后以状态码 0 退出。
    pub fn parse_or_usage<I, T>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Some(cli),
            Err(err) => {
                let _ = err.print();
                None
            }
        }
    }
}

/// 可用的子命令：encode (隐藏)、decode (恢复) 与 capacity (容量查询)。
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 将秘密图像隐藏到载体图像中，结果保存为 PNG。
    Encode(EncodeArgs),

    /// 从经过隐写的图像中恢复隐藏的图像。
    Decode(DecodeArgs),

    /// 查询载体图像可以隐藏的最大秘密图像像素数。
    Capacity(CapacityArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 用于隐藏的载体图像路径 (如 PNG, JPEG)。
    pub carrier: PathBuf,

    /// 要隐藏的秘密图像路径。
    pub secret: PathBuf,

    /// 输出路径，扩展名会被统一为 .png。默认为 encoded_image.png。
    pub output: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 含有隐藏图像的图像路径。
    pub image: PathBuf,

    /// 恢复图像的输出路径，扩展名会被统一为 .png。默认为 images/decoded_image.png。
    pub output: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 载体图像路径。
    pub carrier: PathBuf,
}
