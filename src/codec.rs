//! # 文本编解码模块
//!
//! 在文本与定长二进制位序列之间转换：每个字符对应一个 8 位码元，高位在前，
//! 字符之间没有分隔符。

use crate::constants::{BITS_PER_CHAR, SENTINEL};
use crate::error::{Result, StegoError};

/// 将消息编码为位序列。
///
/// # Errors
///
/// 任一字符的码点大于 255 时返回 [`StegoError::CharacterRange`]，
/// 而不是静默截断。
pub fn encode(message: &str) -> Result<Vec<bool>> {
    let mut bits = Vec::with_capacity(message.len() * BITS_PER_CHAR);

    for (index, character) in message.chars().enumerate() {
        let byte = u8::try_from(character)
            .map_err(|_| StegoError::CharacterRange { character, index })?;
        bits.extend((0..BITS_PER_CHAR).rev().map(|shift| (byte >> shift) & 1 == 1));
    }

    Ok(bits)
}

/// 将位序列解码为文本。
///
/// 按 8 位一组向下取整分组，末尾不足 8 位的部分被丢弃。
/// 每组映射到码点相同的字符 (U+0000..=U+00FF)。
pub fn decode(bits: &[bool]) -> String {
    bits.chunks_exact(BITS_PER_CHAR)
        .map(|group| {
            let byte = group
                .iter()
                .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit));
            char::from(byte)
        })
        .collect()
}

/// 编码消息并追加结束标记，得到要写入图像的完整位流。
pub fn bitstream(message: &str) -> Result<Vec<bool>> {
    let mut bits = encode(message)?;
    bits.extend_from_slice(&SENTINEL);
    Ok(bits)
}

/// 承载 `char_count` 个字符所需的像素数 (含结束标记)。
pub fn required_pixels(char_count: usize) -> usize {
    char_count * BITS_PER_CHAR + SENTINEL.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_of(pattern: &str) -> Vec<bool> {
        pattern.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn encodes_msb_first_without_separators() {
        assert_eq!(encode("Hi").unwrap(), bits_of("0100100001101001"));
    }

    #[test]
    fn empty_message_is_only_the_sentinel() {
        assert!(encode("").unwrap().is_empty());
        assert_eq!(bitstream("").unwrap(), SENTINEL.to_vec());
    }

    #[test]
    fn latin1_characters_fit_in_one_code_unit() {
        let bits = encode("é\u{ff}").unwrap();
        assert_eq!(bits, bits_of("1110100111111111"));
        assert_eq!(decode(&bits), "é\u{ff}");
    }

    #[test]
    fn rejects_characters_wider_than_eight_bits() {
        match encode("ok€") {
            Err(StegoError::CharacterRange { character, index }) => {
                assert_eq!(character, '€');
                assert_eq!(index, 2);
            }
            other => panic!("expected CharacterRange, got {other:?}"),
        }
    }

    #[test]
    fn decode_drops_trailing_partial_group() {
        let mut bits = bits_of("01000001");
        bits.extend(bits_of("01"));
        assert_eq!(decode(&bits), "A");
        assert_eq!(decode(&bits_of("0100000")), "");
    }

    #[test]
    fn required_pixels_counts_sentinel() {
        assert_eq!(required_pixels(0), 16);
        assert_eq!(required_pixels(2), 32);
    }
}
