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
use crate::color_error::check_rgba_destination;
use crate::color_support::{ChromaSubsampling, ColorMatrix, InverseTransform, RgbChannels, UvOrder};
use crate::images::{YuvBiPlanarImage, YuvPlanarImage};
use crate::numerics::yuv_to_rgb;
use crate::ColorError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

#[inline(always)]
fn store_rgb<const DESTINATION_CHANNELS: u8>(
    dst: &mut [u8],
    transform: &InverseTransform<f32>,
    y: u8,
    u: u8,
    v: u8,
) {
    let dst_chans: RgbChannels = DESTINATION_CHANNELS.into();
    let rgb = yuv_to_rgb(transform, y, u, v);
    dst[dst_chans.get_r_channel_offset()] = rgb[0];
    dst[dst_chans.get_g_channel_offset()] = rgb[1];
    dst[dst_chans.get_b_channel_offset()] = rgb[2];
    if dst_chans.has_padding() {
        dst[dst_chans.get_x_channel_offset()] = 255;
    }
}

fn yuv_planar_to_rgb_impl<const DESTINATION_CHANNELS: u8, const SAMPLING: u8>(
    planar_image: &YuvPlanarImage<u8>,
    rgb: &mut [u8],
    rgb_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    let dst_chans: RgbChannels = DESTINATION_CHANNELS.into();
    let chroma_subsampling: ChromaSubsampling = SAMPLING.into();
    let channels = dst_chans.get_channels_count();

    planar_image.check_constraints(chroma_subsampling)?;
    check_rgba_destination(
        rgb,
        rgb_stride,
        planar_image.width,
        planar_image.height,
        channels,
    )?;

    let transform = matrix.inverse_transform();
    let width = planar_image.width as usize;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = rgb.par_chunks_exact_mut(rgb_stride as usize);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = rgb.chunks_exact_mut(rgb_stride as usize);
    }

    iter.enumerate().for_each(|(y, rgb)| {
        let uv_y = match chroma_subsampling {
            ChromaSubsampling::Yuv420 => y >> 1,
            ChromaSubsampling::Yuv422 | ChromaSubsampling::Yuv444 => y,
        };
        let y_src = &planar_image.y_plane[y * planar_image.y_stride as usize..][..width];
        let u_src = &planar_image.u_plane[uv_y * planar_image.u_stride as usize..];
        let v_src = &planar_image.v_plane[uv_y * planar_image.v_stride as usize..];

        for (x, (dst, &y_value)) in rgb[..width * channels]
            .chunks_exact_mut(channels)
            .zip(y_src.iter())
            .enumerate()
        {
            let uv_x = match chroma_subsampling {
                ChromaSubsampling::Yuv420 | ChromaSubsampling::Yuv422 => x >> 1,
                ChromaSubsampling::Yuv444 => x,
            };
            store_rgb::<DESTINATION_CHANNELS>(
                dst,
                &transform,
                y_value,
                u_src[uv_x],
                v_src[uv_x],
            );
        }
    });

    Ok(())
}

fn yuv_nv_to_rgb_impl<const DESTINATION_CHANNELS: u8, const UV_ORDER: u8>(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    rgb: &mut [u8],
    rgb_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    let dst_chans: RgbChannels = DESTINATION_CHANNELS.into();
    let order: UvOrder = UV_ORDER.into();
    let channels = dst_chans.get_channels_count();

    bi_planar_image.check_constraints(ChromaSubsampling::Yuv420)?;
    check_rgba_destination(
        rgb,
        rgb_stride,
        bi_planar_image.width,
        bi_planar_image.height,
        channels,
    )?;

    let transform = matrix.inverse_transform();
    let width = bi_planar_image.width as usize;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = rgb.par_chunks_exact_mut(rgb_stride as usize);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = rgb.chunks_exact_mut(rgb_stride as usize);
    }

    iter.enumerate().for_each(|(y, rgb)| {
        let y_src = &bi_planar_image.y_plane[y * bi_planar_image.y_stride as usize..][..width];
        let uv_src = &bi_planar_image.uv_plane[(y >> 1) * bi_planar_image.uv_stride as usize..];

        for ((rgb_dst, y_src), uv) in rgb[..width * channels]
            .chunks_mut(channels * 2)
            .zip(y_src.chunks(2))
            .zip(uv_src.chunks_exact(2))
        {
            let u_value = uv[order.get_u_position()];
            let v_value = uv[order.get_v_position()];
            for (dst, &y_value) in rgb_dst.chunks_exact_mut(channels).zip(y_src.iter()) {
                store_rgb::<DESTINATION_CHANNELS>(dst, &transform, y_value, u_value, v_value);
            }
        }
    });

    Ok(())
}

/// Convert IYUV (planar 4:2:0) image to RGB.
///
/// Chroma is sampled with nearest neighbour, pixel `(x, y)` uses chroma `(x / 2, y / 2)`.
///
/// # Arguments
///
/// * `planar_image` - Source planar image.
/// * `rgb` - A mutable slice to store the converted RGB data.
/// * `rgb_stride` - The stride (elements per row) for the RGB image data.
/// * `matrix` - Color matrix.
///
pub fn iyuv_to_rgb(
    planar_image: &YuvPlanarImage<u8>,
    rgb: &mut [u8],
    rgb_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    yuv_planar_to_rgb_impl::<{ RgbChannels::Rgb as u8 }, { ChromaSubsampling::Yuv420 as u8 }>(
        planar_image,
        rgb,
        rgb_stride,
        matrix,
    )
}

/// Convert IYUV (planar 4:2:0) image to RGBX, padding byte is set to 255.
///
/// # Arguments
///
/// * `planar_image` - Source planar image.
/// * `rgbx` - A mutable slice to store the converted RGBX data.
/// * `rgbx_stride` - The stride (elements per row) for the RGBX image data.
/// * `matrix` - Color matrix.
///
pub fn iyuv_to_rgbx(
    planar_image: &YuvPlanarImage<u8>,
    rgbx: &mut [u8],
    rgbx_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    yuv_planar_to_rgb_impl::<{ RgbChannels::Rgbx as u8 }, { ChromaSubsampling::Yuv420 as u8 }>(
        planar_image,
        rgbx,
        rgbx_stride,
        matrix,
    )
}

/// Convert YUV4 (planar 4:4:4) image to RGB.
pub fn yuv4_to_rgb(
    planar_image: &YuvPlanarImage<u8>,
    rgb: &mut [u8],
    rgb_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    yuv_planar_to_rgb_impl::<{ RgbChannels::Rgb as u8 }, { ChromaSubsampling::Yuv444 as u8 }>(
        planar_image,
        rgb,
        rgb_stride,
        matrix,
    )
}

/// Convert YUV4 (planar 4:4:4) image to RGBX, padding byte is set to 255.
pub fn yuv4_to_rgbx(
    planar_image: &YuvPlanarImage<u8>,
    rgbx: &mut [u8],
    rgbx_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    yuv_planar_to_rgb_impl::<{ RgbChannels::Rgbx as u8 }, { ChromaSubsampling::Yuv444 as u8 }>(
        planar_image,
        rgbx,
        rgbx_stride,
        matrix,
    )
}

/// Convert NV12 image to RGB.
///
/// # Arguments
///
/// * `bi_planar_image` - Source bi-planar image, chroma interleaved as UV.
/// * `rgb` - A mutable slice to store the converted RGB data.
/// * `rgb_stride` - The stride (elements per row) for the RGB image data.
/// * `matrix` - Color matrix.
///
pub fn nv12_to_rgb(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    rgb: &mut [u8],
    rgb_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    yuv_nv_to_rgb_impl::<{ RgbChannels::Rgb as u8 }, { UvOrder::Uv as u8 }>(
        bi_planar_image,
        rgb,
        rgb_stride,
        matrix,
    )
}

/// Convert NV12 image to RGBX, padding byte is set to 255.
pub fn nv12_to_rgbx(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    rgbx: &mut [u8],
    rgbx_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    yuv_nv_to_rgb_impl::<{ RgbChannels::Rgbx as u8 }, { UvOrder::Uv as u8 }>(
        bi_planar_image,
        rgbx,
        rgbx_stride,
        matrix,
    )
}

/// Convert NV21 image to RGB.
///
/// # Arguments
///
/// * `bi_planar_image` - Source bi-planar image, chroma interleaved as VU.
/// * `rgb` - A mutable slice to store the converted RGB data.
/// * `rgb_stride` - The stride (elements per row) for the RGB image data.
/// * `matrix` - Color matrix.
///
pub fn nv21_to_rgb(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    rgb: &mut [u8],
    rgb_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    yuv_nv_to_rgb_impl::<{ RgbChannels::Rgb as u8 }, { UvOrder::Vu as u8 }>(
        bi_planar_image,
        rgb,
        rgb_stride,
        matrix,
    )
}

/// Convert NV21 image to RGBX, padding byte is set to 255.
pub fn nv21_to_rgbx(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    rgbx: &mut [u8],
    rgbx_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    yuv_nv_to_rgb_impl::<{ RgbChannels::Rgbx as u8 }, { UvOrder::Vu as u8 }>(
        bi_planar_image,
        rgbx,
        rgbx_stride,
        matrix,
    )
}
