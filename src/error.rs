//! # 错误类型模块
//!
//! 库层的所有失败情形都汇总在 [`StegoError`] 中。
//! "未找到消息" 不属于错误，由 `Option::None` 表示。

use image::{ColorType, ImageError};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StegoError>;

#[derive(Debug, Error)]
pub enum StegoError {
    /// 源图像不存在、不可读或格式无法识别。
    #[error("Unable to load image file: {}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    /// 目标图像无法写入 (权限、目录不存在、磁盘已满或格式不支持)。
    #[error("Unable to save image file: {}", path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    /// 字符的码点超出 8 位范围。
    #[error(
        "Character {character:?} (U+{:04X}) at index {index} does not fit in 8 bits",
        u32::from(*character)
    )]
    CharacterRange { character: char, index: usize },

    /// 图像像素数不足以容纳消息与结束标记。
    #[error("Not enough space in the image to hide the message. Required: {required}, Available: {available}")]
    Capacity { required: usize, available: usize },

    /// 浮点通道无法按位修改。
    #[error("Unsupported pixel format {0:?}: only 8-bit and 16-bit integer channels can carry a message")]
    UnsupportedPixelFormat(ColorType),
}
