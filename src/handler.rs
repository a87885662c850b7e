//! # 命令处理逻辑模块
//!
//! 包含处理隐藏与恢复两种模式的高级业务逻辑。
//! 本模块负责检查输出路径、调用核心隐写函数以及向用户报告结果。

use crate::cli::{HideArgs, RevealArgs};
use crate::constants::NO_MESSAGE;
use crate::steganography::{hide, reveal};
use anyhow::{Context, Result};
use colored::Colorize;

/// 处理隐藏模式的执行逻辑。
///
/// 检查目标文件是否可写、调用 [`hide`] 把消息写入图像并保存，最后报告结果。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与消息的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入图像，或其像素格式不受支持。
/// * 消息中含有无法用 8 位表示的字符。
/// * 图像空间不足 (未指定 `--truncate` 时)。
/// * 无法写入目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    anyhow::ensure!(
        args.force || !args.dest.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        args.dest.to_string_lossy().red().bold()
    );

    let report = hide(&args.image, &args.dest, &args.message, args.policy).with_context(|| {
        format!(
            "Failed to hide the message in {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    if report.is_truncated() {
        println!(
            "Warning: only {} of {} bits fit in the image, the message cannot be recovered.",
            report.bits_written.to_string().red().bold(),
            report.bits_required.to_string().green().bold()
        );
    }

    println!(
        "The message has been successfully hidden and saved: {}",
        args.dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理恢复模式的执行逻辑。
///
/// 读取图像并打印恢复的消息；未找到结束标记时打印 `ERROR`，
/// 这种情况不视为错误。
///
/// # Errors
///
/// 无法读取输入图像或其像素格式不受支持时返回错误。
pub fn handle_reveal(args: RevealArgs) -> Result<()> {
    let message = reveal(&args.image).with_context(|| {
        format!(
            "Failed to read a message from {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    println!("{}", message.as_deref().unwrap_or(NO_MESSAGE));

    Ok(())
}
