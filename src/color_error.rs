/*
 * Copyright (c) Radzivon Bartoshyk, 11/2024. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::color_support::ChromaSubsampling;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    DestinationSizeMismatch(MismatchedSize),
    MinimumDestinationSizeMismatch(MismatchedSize),
    PointerOverflow,
    ZeroBaseSize,
    PlaneSizeMismatch(MismatchedSize),
    PlaneMinimumSizeMismatch(MismatchedSize),
    /// Two images handed to the same kernel disagree on dimensions.
    ImagesSizeMismatch(ImageDimensions, ImageDimensions),
    InvalidShift(i32),
    InvalidChannelPosition { position: usize, channels: usize },
    InvalidFactor(f32),
    BatchSizeMismatch(MismatchedSize),
    /// Channel count of the source and destination batches differs.
    LayoutMismatch(MismatchedSize),
    InvalidRoi { index: usize, width: u32, height: u32 },
    NodeNotCreated,
}

impl Display for ColorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorError::PlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Plane have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            ColorError::PlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            ColorError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            ColorError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            ColorError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            ColorError::MinimumDestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
            ColorError::ImagesSizeMismatch(a, b) => f.write_fmt(format_args!(
                "Images dimensions must match, but they are {}x{} and {}x{}",
                a.width, a.height, b.width, b.height
            )),
            ColorError::InvalidShift(shift) => f.write_fmt(format_args!(
                "Depth shift must be in range [0, 8), but it was {}",
                shift
            )),
            ColorError::InvalidChannelPosition { position, channels } => f.write_fmt(
                format_args!(
                    "Channel position {} does not exist in image with {} channels",
                    position, channels
                ),
            ),
            ColorError::InvalidFactor(factor) => f.write_fmt(format_args!(
                "Saturation factor must be finite and non negative, but it was {}",
                factor
            )),
            ColorError::BatchSizeMismatch(size) => f.write_fmt(format_args!(
                "Batch size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            ColorError::LayoutMismatch(size) => f.write_fmt(format_args!(
                "Batch layouts must match, expected {} channels, received {}",
                size.expected, size.received
            )),
            ColorError::InvalidRoi {
                index,
                width,
                height,
            } => f.write_fmt(format_args!(
                "ROI {}x{} of image {} is empty or exceeds the image bounds",
                width, height, index
            )),
            ColorError::NodeNotCreated => {
                f.write_str("Node must be created before it is updated or executed")
            }
        }
    }
}

impl Error for ColorError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<(), ColorError> {
    let (_, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(ColorError::PointerOverflow);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<(), ColorError> {
    let (product0, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(ColorError::PointerOverflow);
    }
    let (_, overflow) = product0.overflowing_mul(v2);
    if overflow {
        return Err(ColorError::PointerOverflow);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_zero_size(width: u32, height: u32) -> Result<(), ColorError> {
    if width == 0 || height == 0 {
        return Err(ColorError::ZeroBaseSize);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_same_dimensions(
    width0: u32,
    height0: u32,
    width1: u32,
    height1: u32,
) -> Result<(), ColorError> {
    if width0 != width1 || height0 != height1 {
        return Err(ColorError::ImagesSizeMismatch(
            ImageDimensions {
                width: width0,
                height: height0,
            },
            ImageDimensions {
                width: width1,
                height: height1,
            },
        ));
    }
    Ok(())
}

/// Checks interleaved image, `row_elements` is amount of meaningful elements in one row.
#[inline]
pub(crate) fn check_packed_channel<V>(
    arr: &[V],
    stride: u32,
    row_elements: usize,
    height: u32,
) -> Result<(), ColorError> {
    check_overflow_v2(row_elements, height as usize)?;
    check_overflow_v2(stride as usize, height as usize)?;
    if arr.len() != stride as usize * height as usize {
        return Err(ColorError::DestinationSizeMismatch(MismatchedSize {
            expected: stride as usize * height as usize,
            received: arr.len(),
        }));
    }
    if (stride as usize) < row_elements {
        return Err(ColorError::MinimumDestinationSizeMismatch(MismatchedSize {
            expected: row_elements * height as usize,
            received: stride as usize * height as usize,
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_rgba_destination<V>(
    arr: &[V],
    rgba_stride: u32,
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), ColorError> {
    check_zero_size(width, height)?;
    check_overflow_v3(width as usize, height as usize, channels)?;
    check_packed_channel(arr, rgba_stride, width as usize * channels, height)
}

/// Packed 4:2:2 row stores 4 bytes per each pair of pixels.
#[inline]
pub(crate) fn check_yuv_packed422<V>(
    arr: &[V],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), ColorError> {
    check_zero_size(width, height)?;
    check_packed_channel(arr, stride, (width as usize).div_ceil(2) * 4, height)
}

#[inline]
pub(crate) fn check_y8_channel<V>(
    data: &[V],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), ColorError> {
    check_zero_size(width, height)?;
    check_overflow_v2(stride as usize, height as usize)?;
    check_overflow_v2(width as usize, height as usize)?;
    if (stride as usize) < (width as usize) {
        return Err(ColorError::PlaneMinimumSizeMismatch(MismatchedSize {
            expected: width as usize * height as usize,
            received: stride as usize * height as usize,
        }));
    }
    if stride as usize * height as usize != data.len() {
        return Err(ColorError::PlaneSizeMismatch(MismatchedSize {
            expected: stride as usize * height as usize,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_chroma_channel<V>(
    data: &[V],
    stride: u32,
    image_width: u32,
    image_height: u32,
    sampling: ChromaSubsampling,
) -> Result<(), ColorError> {
    let chroma_min_width = sampling.chroma_width(image_width);
    let chroma_height = sampling.chroma_height(image_height);
    check_overflow_v2(stride as usize, chroma_height as usize)?;
    check_overflow_v2(chroma_min_width as usize, chroma_height as usize)?;
    if (stride as usize) < (chroma_min_width as usize) {
        return Err(ColorError::PlaneMinimumSizeMismatch(MismatchedSize {
            expected: chroma_min_width as usize * chroma_height as usize,
            received: stride as usize * chroma_height as usize,
        }));
    }
    if stride as usize * chroma_height as usize != data.len() {
        return Err(ColorError::PlaneSizeMismatch(MismatchedSize {
            expected: stride as usize * chroma_height as usize,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_interleaved_chroma_channel<V>(
    data: &[V],
    stride: u32,
    image_width: u32,
    image_height: u32,
    sampling: ChromaSubsampling,
) -> Result<(), ColorError> {
    let chroma_min_width = sampling.chroma_width(image_width) as usize * 2;
    let chroma_height = sampling.chroma_height(image_height);
    check_overflow_v2(stride as usize, chroma_height as usize)?;
    check_overflow_v2(chroma_min_width, chroma_height as usize)?;
    if (stride as usize) < chroma_min_width {
        return Err(ColorError::PlaneMinimumSizeMismatch(MismatchedSize {
            expected: chroma_min_width * chroma_height as usize,
            received: stride as usize * chroma_height as usize,
        }));
    }
    if stride as usize * chroma_height as usize != data.len() {
        return Err(ColorError::PlaneSizeMismatch(MismatchedSize {
            expected: stride as usize * chroma_height as usize,
            received: data.len(),
        }));
    }
    Ok(())
}
