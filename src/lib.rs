//! # lsb_sentinel 库
//!
//! 本库包含以结束标记收尾的 LSB 文本隐写的核心逻辑。

// 声明库包含的所有模块。

pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod handler;
pub mod steganography;

pub use error::{Result, StegoError};
pub use steganography::{CapacityPolicy, EmbedReport, hide, reveal};
