use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use lsb_sentinel::{
    cli::{Cli, Command},
    handler::{handle_hide, handle_reveal},
};

/// 初始化日志系统
///
/// 日志写入标准错误，标准输出只保留结果。
/// 级别由 `-v` 次数决定，`RUST_LOG` 可覆盖
fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(level)
        .format_target(false)
        .parse_default_env()
        .init();
}

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据模式（隐藏或恢复）
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.into_command()? {
        Command::Hide(args) => handle_hide(args),
        Command::Reveal(args) => handle_reveal(args),
    }
}
