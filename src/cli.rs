//! # 命令行接口模块
//!
//! 使用 `clap` 定义命令行参数，并将其解析为 `hide` 或 `reveal` 两种模式。

use crate::steganography::CapacityPolicy;
use clap::Parser;
use std::path::PathBuf;

/// 基于 LSB (最低有效位) 隐写术的命令行工具：把文本写入无损图像 (如 PNG, BMP) 的红色通道，或从中恢复。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "基于 LSB (最低有效位) 隐写术的命令行工具。消息按 8 位字符编码、以 16 位结束标记收尾，逐位写入每个像素第一个通道的最低位。"
)]
pub struct Cli {
    /// 输入图像路径。隐藏模式下作为载体，恢复模式下作为扫描对象。
    #[arg(short, long)]
    pub input: PathBuf,

    /// 隐藏完成后保存结果图像的路径 (隐藏模式必填)。
    #[arg(short, long, required_unless_present = "getmessage")]
    pub output: Option<PathBuf>,

    /// 要隐藏的文本 (隐藏模式必填)。
    #[arg(short, long, required_unless_present = "getmessage")]
    pub message: Option<String>,

    /// 切换到恢复模式，从 `--input` 中读取隐藏的消息。
    #[arg(short, long, conflicts_with_all = ["output", "message"])]
    pub getmessage: bool,

    /// 若输出文件已存在则强制覆盖。
    #[arg(short, long)]
    pub force: bool,

    /// 图像容量不足时不报错，写入尽可能多的位后照常保存。
    #[arg(long)]
    pub truncate: bool,

    /// 输出更详细的日志 (可重复，如 -vv)。
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// 解析后的运行模式。
#[derive(Debug)]
pub enum Command {
    Hide(HideArgs),
    Reveal(RevealArgs),
}

/// 隐藏模式所需的参数。
#[derive(Debug)]
pub struct HideArgs {
    pub image: PathBuf,
    pub dest: PathBuf,
    pub message: String,
    pub force: bool,
    pub policy: CapacityPolicy,
}

/// 恢复模式所需的参数。
#[derive(Debug)]
pub struct RevealArgs {
    pub image: PathBuf,
}

impl Cli {
    /// 将命令行参数转换为具体的运行模式。
    ///
    /// # Errors
    ///
    /// 隐藏模式下缺少 `--output` 或 `--message` 时返回错误。
    /// 正常情况下 `clap` 已经拦截了这种输入。
    pub fn into_command(self) -> anyhow::Result<Command> {
        if self.getmessage {
            return Ok(Command::Reveal(RevealArgs { image: self.input }));
        }

        let dest = self
            .output
            .ok_or_else(|| anyhow::anyhow!("--output is required when hiding a message"))?;
        let message = self
            .message
            .ok_or_else(|| anyhow::anyhow!("--message is required when hiding a message"))?;

        Ok(Command::Hide(HideArgs {
            image: self.input,
            dest,
            message,
            force: self.force,
            policy: if self.truncate {
                CapacityPolicy::Truncate
            } else {
                CapacityPolicy::Strict
            },
        }))
    }
}
