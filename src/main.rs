use env_logger::Builder;
use log::LevelFilter;

use pixel_nest::{
    cli::{Cli, Commands},
    handler::{handle_capacity, handle_decode, handle_encode},
};

/// 根据 `-v` 的次数初始化日志，`RUST_LOG` 可覆盖默认级别。
fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`encode`、`decode` 或 `capacity`）
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let Some(cli) = Cli::parse_or_usage(std::env::args_os()) else {
        return Ok(());
    };
    init_logger(cli.verbose);

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Encode(args) => handle_encode(args.into()),
        Commands::Decode(args) => handle_decode(args.into()),
        Commands::Capacity(args) => handle_capacity(args),
    }
}
