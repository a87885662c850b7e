/// 消息结束标记：15 个 `1` 后跟一个 `0` (`1111111111111110`)。
/// 隐藏与恢复共享此协议常量，修改它会导致旧图像无法恢复。
pub const SENTINEL: [bool; 16] = [
    true, true, true, true, true, true, true, true, //
    true, true, true, true, true, true, true, false,
];

/// 每个字符编码为固定的 8 位。
pub const BITS_PER_CHAR: usize = 8;

/// 承载消息的通道下标 (通常为红色通道)。其余通道永不读写。
pub const EMBEDDING_CHANNEL: usize = 0;

/// 未找到隐藏消息时命令行输出的字面量。
pub const NO_MESSAGE: &str = "ERROR";
