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
use crate::color_error::{check_rgba_destination, check_yuv_packed422};
use crate::color_support::{ColorMatrix, PackedYuvLayout, RgbChannels};
use crate::numerics::yuv_to_rgb;
use crate::ColorError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

fn packed422_to_rgb_impl<const DESTINATION_CHANNELS: u8, const LAYOUT: u8>(
    packed_store: &[u8],
    packed_stride: u32,
    rgb_store: &mut [u8],
    rgb_stride: u32,
    width: u32,
    height: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    let layout: PackedYuvLayout = LAYOUT.into();
    let dst_chans: RgbChannels = DESTINATION_CHANNELS.into();
    let channels = dst_chans.get_channels_count();

    check_yuv_packed422(packed_store, packed_stride, width, height)?;
    check_rgba_destination(rgb_store, rgb_stride, width, height, channels)?;

    let transform = matrix.inverse_transform();
    let width = width as usize;
    let pairs = width.div_ceil(2);

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = rgb_store
            .par_chunks_exact_mut(rgb_stride as usize)
            .zip(packed_store.par_chunks_exact(packed_stride as usize));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = rgb_store
            .chunks_exact_mut(rgb_stride as usize)
            .zip(packed_store.chunks_exact(packed_stride as usize));
    }

    iter.for_each(|(rgb_store, packed_store)| {
        let rgb_store = &mut rgb_store[..width * channels];
        let packed_store = &packed_store[..pairs * 4];

        for (rgb_dst, packed) in rgb_store
            .chunks_mut(channels * 2)
            .zip(packed_store.chunks_exact(4))
        {
            let u_value = packed[layout.get_u_position()];
            let v_value = packed[layout.get_v_position()];
            let first_y = packed[layout.get_first_y_position()];
            let second_y = packed[layout.get_second_y_position()];

            for (dst, y_value) in rgb_dst.chunks_exact_mut(channels).zip([first_y, second_y]) {
                let rgb = yuv_to_rgb(&transform, y_value, u_value, v_value);
                dst[dst_chans.get_r_channel_offset()] = rgb[0];
                dst[dst_chans.get_g_channel_offset()] = rgb[1];
                dst[dst_chans.get_b_channel_offset()] = rgb[2];
                if dst_chans.has_padding() {
                    dst[dst_chans.get_x_channel_offset()] = 255;
                }
            }
        }
    });

    Ok(())
}

/// Convert UYVY format to RGB image.
///
/// Every pair of pixels shares one U and one V sample.
///
/// # Arguments
///
/// * `uyvy_store` - A slice with packed UYVY data.
/// * `uyvy_stride` - The stride (bytes per row) for the UYVY plane.
/// * `rgb` - A mutable slice to store the converted RGB data.
/// * `rgb_stride` - The stride (bytes per row) for the RGB image data.
/// * `width` - The width of the image.
/// * `height` - The height of the image.
/// * `matrix` - Color matrix, [ColorMatrix::Bt709] is the usual choice.
///
pub fn uyvy_to_rgb(
    uyvy_store: &[u8],
    uyvy_stride: u32,
    rgb: &mut [u8],
    rgb_stride: u32,
    width: u32,
    height: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    packed422_to_rgb_impl::<{ RgbChannels::Rgb as u8 }, { PackedYuvLayout::Uyvy as u8 }>(
        uyvy_store,
        uyvy_stride,
        rgb,
        rgb_stride,
        width,
        height,
        matrix,
    )
}

/// Convert UYVY format to RGBX image, padding byte is set to 255.
///
/// # Arguments
///
/// * `uyvy_store` - A slice with packed UYVY data.
/// * `uyvy_stride` - The stride (bytes per row) for the UYVY plane.
/// * `rgbx` - A mutable slice to store the converted RGBX data.
/// * `rgbx_stride` - The stride (bytes per row) for the RGBX image data.
/// * `width` - The width of the image.
/// * `height` - The height of the image.
/// * `matrix` - Color matrix.
///
pub fn uyvy_to_rgbx(
    uyvy_store: &[u8],
    uyvy_stride: u32,
    rgbx: &mut [u8],
    rgbx_stride: u32,
    width: u32,
    height: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    packed422_to_rgb_impl::<{ RgbChannels::Rgbx as u8 }, { PackedYuvLayout::Uyvy as u8 }>(
        uyvy_store,
        uyvy_stride,
        rgbx,
        rgbx_stride,
        width,
        height,
        matrix,
    )
}

/// Convert YUYV format to RGB image.
///
/// # Arguments
///
/// * `yuyv_store` - A slice with packed YUYV data.
/// * `yuyv_stride` - The stride (bytes per row) for the YUYV plane.
/// * `rgb` - A mutable slice to store the converted RGB data.
/// * `rgb_stride` - The stride (bytes per row) for the RGB image data.
/// * `width` - The width of the image.
/// * `height` - The height of the image.
/// * `matrix` - Color matrix.
///
pub fn yuyv_to_rgb(
    yuyv_store: &[u8],
    yuyv_stride: u32,
    rgb: &mut [u8],
    rgb_stride: u32,
    width: u32,
    height: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    packed422_to_rgb_impl::<{ RgbChannels::Rgb as u8 }, { PackedYuvLayout::Yuyv as u8 }>(
        yuyv_store,
        yuyv_stride,
        rgb,
        rgb_stride,
        width,
        height,
        matrix,
    )
}

/// Convert YUYV format to RGBX image, padding byte is set to 255.
///
/// # Arguments
///
/// * `yuyv_store` - A slice with packed YUYV data.
/// * `yuyv_stride` - The stride (bytes per row) for the YUYV plane.
/// * `rgbx` - A mutable slice to store the converted RGBX data.
/// * `rgbx_stride` - The stride (bytes per row) for the RGBX image data.
/// * `width` - The width of the image.
/// * `height` - The height of the image.
/// * `matrix` - Color matrix.
///
pub fn yuyv_to_rgbx(
    yuyv_store: &[u8],
    yuyv_stride: u32,
    rgbx: &mut [u8],
    rgbx_stride: u32,
    width: u32,
    height: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    packed422_to_rgb_impl::<{ RgbChannels::Rgbx as u8 }, { PackedYuvLayout::Yuyv as u8 }>(
        yuyv_store,
        yuyv_stride,
        rgbx,
        rgbx_stride,
        width,
        height,
        matrix,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grey_uyvy_decodes_to_grey() {
        let uyvy = [128u8, 60, 128, 200, 128, 0, 128, 255];
        let mut rgb = [0u8; 12];
        uyvy_to_rgb(&uyvy, 8, &mut rgb, 12, 4, 1, ColorMatrix::Bt709).unwrap();
        assert_eq!(rgb, [60, 60, 60, 200, 200, 200, 0, 0, 0, 255, 255, 255]);
    }

    #[test]
    fn pair_shares_chroma() {
        // Y0 = 81, U = 90, Y1 = 81, V = 240 is red in BT.709 full range
        let yuyv = [81u8, 90, 81, 240];
        let mut rgbx = [0u8; 8];
        yuyv_to_rgbx(&yuyv, 4, &mut rgbx, 8, 2, 1, ColorMatrix::Bt709).unwrap();
        assert_eq!(&rgbx[0..4], &rgbx[4..8]);
        assert!(rgbx[0] > 200);
        assert!(rgbx[1] < 80);
        assert_eq!(rgbx[3], 255);
    }

    #[test]
    fn odd_width_ignores_second_luma() {
        let yuyv = [100u8, 128, 7, 128, 50, 128, 9, 128];
        let mut rgb = [0u8; 9];
        yuyv_to_rgb(&yuyv, 8, &mut rgb, 9, 3, 1, ColorMatrix::Bt709).unwrap();
        assert_eq!(rgb, [100, 100, 100, 7, 7, 7, 50, 50, 50]);
    }

    #[test]
    fn rejects_short_packed_row() {
        let yuyv = [0u8; 4];
        let mut rgb = [0u8; 9];
        assert!(yuyv_to_rgb(&yuyv, 4, &mut rgb, 9, 3, 1, ColorMatrix::Bt709).is_err());
    }
}
