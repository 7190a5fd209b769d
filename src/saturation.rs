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
#![forbid(unsafe_code)]
use crate::color_error::{
    check_overflow_v2, check_overflow_v3, check_rgba_destination, check_same_dimensions,
    MismatchedSize,
};
use crate::color_support::RgbChannels;
use crate::images::BufferStoreMut;
use crate::numerics::pack_u8;
use crate::shuffle::copy_rows;
use crate::ColorError;
use num_traits::{AsPrimitive, Float};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

/// Region of interest anchored at the top-left corner of an image
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Roi {
    pub width: u32,
    pub height: u32,
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BatchLayout {
    Gray = 0,
    Rgb = 1,
    Rgbx = 2,
}

impl BatchLayout {
    #[inline]
    pub const fn get_channels_count(&self) -> usize {
        match self {
            BatchLayout::Gray => 1,
            BatchLayout::Rgb => 3,
            BatchLayout::Rgbx => 4,
        }
    }
}

/// Batch of equally sized images stored one after another, each takes `stride * height` elements.
#[derive(Debug, Clone)]
pub struct ImageBatch<'a> {
    pub data: &'a [u8],
    /// Stride here always means Elements per row.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
    pub layout: BatchLayout,
    pub batch_size: usize,
    /// One region per image
    pub rois: &'a [Roi],
}

#[derive(Debug)]
pub struct ImageBatchMut<'a> {
    pub data: BufferStoreMut<'a, u8>,
    /// Stride here always means Elements per row.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
    pub layout: BatchLayout,
    pub batch_size: usize,
}

impl ImageBatch<'_> {
    pub fn check_constraints(&self) -> Result<(), ColorError> {
        check_batch_storage(
            self.data,
            self.stride,
            self.width,
            self.height,
            self.layout,
            self.batch_size,
        )?;
        if self.rois.len() != self.batch_size {
            return Err(ColorError::BatchSizeMismatch(MismatchedSize {
                expected: self.batch_size,
                received: self.rois.len(),
            }));
        }
        for (index, roi) in self.rois.iter().enumerate() {
            if roi.width == 0
                || roi.height == 0
                || roi.width > self.width
                || roi.height > self.height
            {
                return Err(ColorError::InvalidRoi {
                    index,
                    width: roi.width,
                    height: roi.height,
                });
            }
        }
        Ok(())
    }
}

impl ImageBatchMut<'_> {
    pub fn check_constraints(&self) -> Result<(), ColorError> {
        check_batch_storage(
            self.data.borrow(),
            self.stride,
            self.width,
            self.height,
            self.layout,
            self.batch_size,
        )
    }

    /// Allocates tightly packed batch, the row must fit into `u32` elements
    pub fn alloc(
        width: u32,
        height: u32,
        layout: BatchLayout,
        batch_size: usize,
    ) -> Result<Self, ColorError> {
        let row = (width as usize)
            .checked_mul(layout.get_channels_count())
            .ok_or(ColorError::PointerOverflow)?;
        check_overflow_v3(row, height as usize, batch_size)?;
        let stride = u32::try_from(row).map_err(|_| ColorError::PointerOverflow)?;
        Ok(ImageBatchMut {
            data: BufferStoreMut::Owned(vec![
                0u8;
                stride as usize * height as usize * batch_size
            ]),
            stride,
            width,
            height,
            layout,
            batch_size,
        })
    }
}

#[inline]
fn check_batch_storage(
    data: &[u8],
    stride: u32,
    width: u32,
    height: u32,
    layout: BatchLayout,
    batch_size: usize,
) -> Result<(), ColorError> {
    check_overflow_v2(height as usize, batch_size)?;
    let total_height = u32::try_from(height as usize * batch_size)
        .map_err(|_| ColorError::PointerOverflow)?;
    check_rgba_destination(
        data,
        stride,
        width,
        total_height,
        layout.get_channels_count(),
    )
}

#[inline]
fn check_factor(factor: f32) -> Result<(), ColorError> {
    if !factor.is_finite() || factor < 0. {
        return Err(ColorError::InvalidFactor(factor));
    }
    Ok(())
}

/// RGB in `[0, 1]` to HSV, hue is in sextants `[0, 6)`
#[inline(always)]
fn rgb_to_hsv<T>(r: T, g: T, b: T) -> (T, T, T)
where
    T: Float + 'static,
    f32: AsPrimitive<T>,
{
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let saturation = if max > T::zero() {
        delta / max
    } else {
        T::zero()
    };
    if delta <= T::zero() {
        return (T::zero(), saturation, max);
    }
    let mut hue = if max == r {
        (g - b) / delta
    } else if max == g {
        (b - r) / delta + 2f32.as_()
    } else {
        (r - g) / delta + 4f32.as_()
    };
    if hue < T::zero() {
        hue = hue + 6f32.as_();
    }
    (hue, saturation, max)
}

#[inline(always)]
fn hsv_to_rgb<T>(hue: T, saturation: T, value: T) -> (T, T, T)
where
    T: Float + AsPrimitive<i32>,
{
    let sector = hue.floor();
    let f = hue - sector;
    let p = value * (T::one() - saturation);
    let q = value * (T::one() - saturation * f);
    let t = value * (T::one() - saturation * (T::one() - f));
    let sector: i32 = sector.as_();
    match sector.rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    }
}

#[inline(always)]
fn saturate_pixel(px: &mut [u8], src: &[u8], factor: f32) {
    const SCALE: f32 = 1. / 255.;
    let (h, s, v) = rgb_to_hsv::<f32>(
        src[0] as f32 * SCALE,
        src[1] as f32 * SCALE,
        src[2] as f32 * SCALE,
    );
    let s = (s * factor).clamp(0., 1.);
    let (r, g, b) = hsv_to_rgb::<f32>(h, s, v);
    px[0] = pack_u8(r * 255.);
    px[1] = pack_u8(g * 255.);
    px[2] = pack_u8(b * 255.);
}

/// Saturates first `width` pixels of a row, padding channel is copied
#[inline]
fn saturate_row(dst: &mut [u8], src: &[u8], channels: usize, width: usize, factor: f32) {
    for (dst, src) in dst[..width * channels]
        .chunks_exact_mut(channels)
        .zip(src[..width * channels].chunks_exact(channels))
    {
        saturate_pixel(dst, src, factor);
        if channels == 4 {
            dst[3] = src[3];
        }
    }
}

fn adjust_saturation_impl<const CHANNELS: u8>(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    factor: f32,
) -> Result<(), ColorError> {
    let chans: RgbChannels = CHANNELS.into();
    let channels = chans.get_channels_count();
    check_factor(factor)?;
    check_rgba_destination(src, src_stride, width, height, channels)?;
    check_rgba_destination(dst, dst_stride, width, height, channels)?;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst
            .par_chunks_exact_mut(dst_stride as usize)
            .zip(src.par_chunks_exact(src_stride as usize));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst
            .chunks_exact_mut(dst_stride as usize)
            .zip(src.chunks_exact(src_stride as usize));
    }

    iter.for_each(|(dst, src)| {
        saturate_row(dst, src, channels, width as usize, factor);
    });

    Ok(())
}

/// Scales saturation of RGB or RGBX image in HSV space.
///
/// Each pixel is converted to HSV, saturation becomes `clamp(S * factor, 0, 1)`, then it is
/// converted back. Padding channel of RGBX is copied unchanged.
///
/// # Arguments
///
/// * `src`: Source image
/// * `src_stride`: Source stride (elements per row)
/// * `dst`: Destination image
/// * `dst_stride`: Destination stride (elements per row)
/// * `width`: Image width
/// * `height`: Image height
/// * `channels`: Layout of both images
/// * `factor`: Saturation multiplier, must be finite and non negative
///
/// returns: Result<(), ColorError>
///
#[allow(clippy::too_many_arguments)]
pub fn adjust_saturation(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    channels: RgbChannels,
    factor: f32,
) -> Result<(), ColorError> {
    match channels {
        RgbChannels::Rgb => adjust_saturation_impl::<{ RgbChannels::Rgb as u8 }>(
            src, src_stride, dst, dst_stride, width, height, factor,
        ),
        RgbChannels::Rgbx => adjust_saturation_impl::<{ RgbChannels::Rgbx as u8 }>(
            src, src_stride, dst, dst_stride, width, height, factor,
        ),
    }
}

/// Adjusts saturation of every image in the batch.
///
/// Image `i` is processed with `factors[i]` inside `input.rois[i]`, pixels outside the region
/// are copied. Gray batches are copied unchanged.
///
/// # Arguments
///
/// * `input`: Source batch with one region per image
/// * `output`: Destination batch, must match the source geometry
/// * `factors`: One saturation factor per image
///
/// returns: Result<(), ColorError>
///
pub fn saturation_batch(
    input: &ImageBatch,
    output: &mut ImageBatchMut,
    factors: &[f32],
) -> Result<(), ColorError> {
    input.check_constraints()?;
    output.check_constraints()?;
    check_same_dimensions(input.width, input.height, output.width, output.height)?;
    if output.batch_size != input.batch_size {
        return Err(ColorError::BatchSizeMismatch(MismatchedSize {
            expected: input.batch_size,
            received: output.batch_size,
        }));
    }
    if output.layout != input.layout {
        return Err(ColorError::LayoutMismatch(MismatchedSize {
            expected: input.layout.get_channels_count(),
            received: output.layout.get_channels_count(),
        }));
    }
    if factors.len() != input.batch_size {
        return Err(ColorError::BatchSizeMismatch(MismatchedSize {
            expected: input.batch_size,
            received: factors.len(),
        }));
    }
    for &factor in factors.iter() {
        check_factor(factor)?;
    }

    let channels = input.layout.get_channels_count();
    let layout = input.layout;
    let src_stride = input.stride;
    let dst_stride = output.stride;
    let src_image_size = input.stride as usize * input.height as usize;
    let dst_image_size = output.stride as usize * output.height as usize;
    let width = input.width as usize;
    let dst_data = output.data.borrow_mut();

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst_data
            .par_chunks_exact_mut(dst_image_size)
            .zip(input.data.par_chunks_exact(src_image_size))
            .zip(factors.par_iter())
            .zip(input.rois.par_iter());
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst_data
            .chunks_exact_mut(dst_image_size)
            .zip(input.data.chunks_exact(src_image_size))
            .zip(factors.iter())
            .zip(input.rois.iter());
    }

    iter.for_each(|(((dst, src), &factor), roi)| {
        copy_rows(src, src_stride, dst, dst_stride, width * channels);
        if layout == BatchLayout::Gray {
            return;
        }
        for (dst, src) in dst
            .chunks_exact_mut(dst_stride as usize)
            .zip(src.chunks_exact(src_stride as usize))
            .take(roi.height as usize)
        {
            saturate_row(dst, src, channels, roi.width as usize, factor);
        }
    });

    Ok(())
}
