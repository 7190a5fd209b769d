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
use crate::color_error::check_rgba_destination;
use crate::color_support::RgbChannels;
use crate::ColorError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

#[inline]
fn shuffle_row<const SRC: u8, const DST: u8>(src: &[u8], dst: &mut [u8]) {
    let src_channels: RgbChannels = SRC.into();
    let dst_channels: RgbChannels = DST.into();
    for (dst, src) in dst
        .chunks_exact_mut(dst_channels.get_channels_count())
        .zip(src.chunks_exact(src_channels.get_channels_count()))
    {
        dst[dst_channels.get_r_channel_offset()] = src[src_channels.get_r_channel_offset()];
        dst[dst_channels.get_g_channel_offset()] = src[src_channels.get_g_channel_offset()];
        dst[dst_channels.get_b_channel_offset()] = src[src_channels.get_b_channel_offset()];
        if dst_channels.has_padding() {
            let x = if src_channels.has_padding() {
                src[src_channels.get_x_channel_offset()]
            } else {
                255
            };
            dst[dst_channels.get_x_channel_offset()] = x;
        }
    }
}

/// Channel reshuffling implementation
fn shuffle_impl<const SRC: u8, const DST: u8>(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), ColorError> {
    let src_channels: RgbChannels = SRC.into();
    let dst_channels: RgbChannels = DST.into();
    check_rgba_destination(
        src,
        src_stride,
        width,
        height,
        src_channels.get_channels_count(),
    )?;
    check_rgba_destination(
        dst,
        dst_stride,
        width,
        height,
        dst_channels.get_channels_count(),
    )?;

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
        let dst = &mut dst[0..dst_channels.get_channels_count() * width as usize];
        let src = &src[0..src_channels.get_channels_count() * width as usize];
        shuffle_row::<SRC, DST>(src, dst);
    });

    Ok(())
}

/// Converts RGBX8 to RGB8, padding byte is dropped
///
/// # Arguments
///
/// * `src`: Source slice
/// * `src_stride`: Source slice stride
/// * `dst`: Destination slice
/// * `dst_stride`: Destination slice stride
/// * `width`: Image width
/// * `height`: Image height
///
/// returns: Result<(), ColorError>
///
pub fn rgbx_to_rgb(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), ColorError> {
    shuffle_impl::<{ RgbChannels::Rgbx as u8 }, { RgbChannels::Rgb as u8 }>(
        src, src_stride, dst, dst_stride, width, height,
    )
}

/// Converts RGB8 to RGBX8, padding byte is set to 255
///
/// # Arguments
///
/// * `src`: Source slice
/// * `src_stride`: Source slice stride
/// * `dst`: Destination slice
/// * `dst_stride`: Destination slice stride
/// * `width`: Image width
/// * `height`: Image height
///
/// returns: Result<(), ColorError>
///
pub fn rgb_to_rgbx(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), ColorError> {
    shuffle_impl::<{ RgbChannels::Rgb as u8 }, { RgbChannels::Rgbx as u8 }>(
        src, src_stride, dst, dst_stride, width, height,
    )
}

pub(crate) fn copy_rows(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    row_len: usize,
) {
    for (dst, src) in dst
        .chunks_exact_mut(dst_stride as usize)
        .zip(src.chunks_exact(src_stride as usize))
    {
        dst[..row_len].copy_from_slice(&src[..row_len]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn rgb_to_rgbx_sets_opaque_padding() {
        let width = 7u32;
        let height = 5u32;
        let mut rng = rand::rng();
        let src: Vec<u8> = (0..width * height * 3).map(|_| rng.random()).collect();
        let mut dst = vec![0u8; (width * height * 4) as usize];
        rgb_to_rgbx(&src, width * 3, &mut dst, width * 4, width, height).unwrap();
        for (d, s) in dst.chunks_exact(4).zip(src.chunks_exact(3)) {
            assert_eq!(&d[..3], s);
            assert_eq!(d[3], 255);
        }
    }

    #[test]
    fn rgbx_round_trip_with_padded_stride() {
        let width = 3u32;
        let height = 4u32;
        let src_stride = width * 4 + 5;
        let mut rng = rand::rng();
        let src: Vec<u8> = (0..src_stride * height).map(|_| rng.random()).collect();
        let mut rgb = vec![0u8; (width * 3 * height) as usize];
        rgbx_to_rgb(&src, src_stride, &mut rgb, width * 3, width, height).unwrap();
        let mut back = vec![0u8; (width * 4 * height) as usize];
        rgb_to_rgbx(&rgb, width * 3, &mut back, width * 4, width, height).unwrap();
        for y in 0..height as usize {
            let src_row = &src[y * src_stride as usize..];
            let back_row = &back[y * width as usize * 4..];
            for x in 0..width as usize {
                assert_eq!(&src_row[x * 4..x * 4 + 3], &back_row[x * 4..x * 4 + 3]);
            }
        }
    }

    #[test]
    fn rejects_short_destination() {
        let src = vec![0u8; 12];
        let mut dst = vec![0u8; 8];
        assert!(rgbx_to_rgb(&src, 12, &mut dst, 9, 3, 1).is_err());
    }
}
