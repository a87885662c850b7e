//! # LSB 隐写核心模块
//!
//! 按固定扫描顺序遍历像素网格，在承载通道的最低有效位上写入或读出消息位。
//!
//! 扫描顺序：第一轴 (x, 列) 在外层，第二轴 (y, 行) 在内层，即
//! `(0,0), (0,1), ..., (0,H-1), (1,0), ...`。隐藏与恢复使用同一个迭代器，
//! 并在同一坐标上读写。

use crate::codec;
use crate::constants::{EMBEDDING_CHANNEL, SENTINEL};
use crate::error::{Result, StegoError};
use image::{DynamicImage, ImageBuffer, Pixel};
use log::{debug, info, warn};
use std::path::Path;

/// 载体容量不足时的处理策略。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// 在修改任何像素之前检查容量，不足时返回 [`StegoError::Capacity`]。
    #[default]
    Strict,
    /// 尽可能写入，超出部分被丢弃，图像照常保存。得到的消息通常无法恢复。
    Truncate,
}

/// 一次隐藏操作的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedReport {
    pub bits_written: usize,
    pub bits_required: usize,
    pub pixels_available: usize,
}

impl EmbedReport {
    pub fn is_truncated(&self) -> bool {
        self.bits_written < self.bits_required
    }
}

/// 可以按最低有效位读写的整数通道。
pub trait LsbChannel: Copy {
    fn lsb(self) -> bool;
    fn with_lsb(self, bit: bool) -> Self;
}

macro_rules! impl_lsb_channel {
    ($($t:ty),*) => {
        $(
            impl LsbChannel for $t {
                #[inline]
                fn lsb(self) -> bool {
                    self & 1 == 1
                }

                #[inline]
                fn with_lsb(self, bit: bool) -> Self {
                    (self & !1) | <$t>::from(bit)
                }
            }
        )*
    };
}

impl_lsb_channel!(u8, u16);

/// 返回 `width × height` 网格的扫描顺序。
pub fn scan_order(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    (0..width).flat_map(move |x| (0..height).map(move |y| (x, y)))
}

/// 将 `bits` 依次写入网格，返回实际写入的位数。
///
/// 位用尽后立即停止，剩余像素不会被触碰；网格不足时静默停在最后一个像素。
pub fn embed_bits<P>(grid: &mut ImageBuffer<P, Vec<P::Subpixel>>, bits: &[bool]) -> usize
where
    P: Pixel,
    P::Subpixel: LsbChannel,
{
    let (width, height) = grid.dimensions();
    let mut written = 0;

    for ((x, y), &bit) in scan_order(width, height).zip(bits) {
        let channel = &mut grid.get_pixel_mut(x, y).channels_mut()[EMBEDDING_CHANNEL];
        *channel = channel.with_lsb(bit);
        written += 1;
    }

    written
}

/// 按扫描顺序读出位，直到尾部 16 位与结束标记相同。
///
/// 返回去掉结束标记后的消息位；遍历完整个网格仍未匹配则返回 `None`。
/// 第一个匹配的窗口生效。
pub fn extract_bits<P>(grid: &ImageBuffer<P, Vec<P::Subpixel>>) -> Option<Vec<bool>>
where
    P: Pixel,
    P::Subpixel: LsbChannel,
{
    let (width, height) = grid.dimensions();
    let mut bits = Vec::new();

    for (x, y) in scan_order(width, height) {
        bits.push(grid.get_pixel(x, y).channels()[EMBEDDING_CHANNEL].lsb());

        if bits.ends_with(&SENTINEL) {
            bits.truncate(bits.len() - SENTINEL.len());
            debug!("Sentinel matched after {} pixels", bits.len() + SENTINEL.len());
            return Some(bits);
        }
    }

    debug!("Scanned {} pixels without matching the sentinel", bits.len());
    None
}

/// 将消息隐藏到已加载的图像中。
///
/// # Errors
///
/// * 消息含有超出 8 位的字符时返回 [`StegoError::CharacterRange`]。
/// * `Strict` 策略下容量不足时返回 [`StegoError::Capacity`]，图像保持不变。
/// * 浮点图像返回 [`StegoError::UnsupportedPixelFormat`]。
pub fn embed_message(
    image: &mut DynamicImage,
    message: &str,
    policy: CapacityPolicy,
) -> Result<EmbedReport> {
    let bits = codec::bitstream(message)?;
    let pixels_available = image.width() as usize * image.height() as usize;

    if policy == CapacityPolicy::Strict && pixels_available < bits.len() {
        return Err(StegoError::Capacity {
            required: bits.len(),
            available: pixels_available,
        });
    }

    let bits_written = match image {
        DynamicImage::ImageLuma8(grid) => embed_bits(grid, &bits),
        DynamicImage::ImageLumaA8(grid) => embed_bits(grid, &bits),
        DynamicImage::ImageRgb8(grid) => embed_bits(grid, &bits),
        DynamicImage::ImageRgba8(grid) => embed_bits(grid, &bits),
        DynamicImage::ImageLuma16(grid) => embed_bits(grid, &bits),
        DynamicImage::ImageLumaA16(grid) => embed_bits(grid, &bits),
        DynamicImage::ImageRgb16(grid) => embed_bits(grid, &bits),
        DynamicImage::ImageRgba16(grid) => embed_bits(grid, &bits),
        other => return Err(StegoError::UnsupportedPixelFormat(other.color())),
    };

    let report = EmbedReport {
        bits_written,
        bits_required: bits.len(),
        pixels_available,
    };

    if report.is_truncated() {
        warn!(
            "Message truncated: wrote {} of {} bits, the hidden message will not be recoverable",
            report.bits_written, report.bits_required
        );
    } else {
        debug!(
            "Embedded {} bits into {} available pixels",
            report.bits_written, report.pixels_available
        );
    }

    Ok(report)
}

/// 从已加载的图像中恢复消息，未找到结束标记时返回 `Ok(None)`。
pub fn extract_message(image: &DynamicImage) -> Result<Option<String>> {
    let bits = match image {
        DynamicImage::ImageLuma8(grid) => extract_bits(grid),
        DynamicImage::ImageLumaA8(grid) => extract_bits(grid),
        DynamicImage::ImageRgb8(grid) => extract_bits(grid),
        DynamicImage::ImageRgba8(grid) => extract_bits(grid),
        DynamicImage::ImageLuma16(grid) => extract_bits(grid),
        DynamicImage::ImageLumaA16(grid) => extract_bits(grid),
        DynamicImage::ImageRgb16(grid) => extract_bits(grid),
        DynamicImage::ImageRgba16(grid) => extract_bits(grid),
        other => return Err(StegoError::UnsupportedPixelFormat(other.color())),
    };

    Ok(bits.map(|bits| codec::decode(&bits)))
}

fn load(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| StegoError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// 读取 `image_path`，隐藏 `message`，并将结果保存到 `output_path`。
///
/// 输入文件不会被修改；保存格式由 `output_path` 的扩展名决定，必须是无损格式。
pub fn hide(
    image_path: &Path,
    output_path: &Path,
    message: &str,
    policy: CapacityPolicy,
) -> Result<EmbedReport> {
    let mut image = load(image_path)?;
    debug!(
        "Loaded {} ({}x{}, {:?})",
        image_path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    let report = embed_message(&mut image, message, policy)?;

    image.save(output_path).map_err(|source| StegoError::ImageSave {
        path: output_path.to_path_buf(),
        source,
    })?;
    info!("Saved stego image to {}", output_path.display());

    Ok(report)
}

/// 读取 `image_path` 并恢复其中的消息；没有隐藏消息时返回 `Ok(None)`。
pub fn reveal(image_path: &Path) -> Result<Option<String>> {
    let image = load(image_path)?;
    extract_message(&image)
}
