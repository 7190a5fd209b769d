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
use crate::color_support::{ChromaSubsampling, ColorMatrix, ForwardTransform, RgbChannels, UvOrder};
use crate::images::{YuvBiPlanarImageMut, YuvPlanarImageMut};
use crate::numerics::{avg_round, rgb_to_u, rgb_to_v, rgb_to_y};
use crate::ColorError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

#[inline(always)]
fn pixel_at<const ORIGIN_CHANNELS: u8>(rgb: &[u8], x: usize) -> (f32, f32, f32) {
    let src_chans: RgbChannels = ORIGIN_CHANNELS.into();
    let px = &rgb[x * src_chans.get_channels_count()..];
    (
        px[src_chans.get_r_channel_offset()] as f32,
        px[src_chans.get_g_channel_offset()] as f32,
        px[src_chans.get_b_channel_offset()] as f32,
    )
}

#[inline(always)]
fn chroma_at<const ORIGIN_CHANNELS: u8>(
    transform: &ForwardTransform<f32>,
    rgb: &[u8],
    x: usize,
) -> (u8, u8) {
    let (r, g, b) = pixel_at::<ORIGIN_CHANNELS>(rgb, x);
    (rgb_to_u(transform, r, g, b), rgb_to_v(transform, r, g, b))
}

/// Chroma of the 2x2 block at `cx`, per pixel chroma is packed first and then averaged
/// horizontally before vertically. Missing right column replicates the edge pixel.
#[inline(always)]
fn chroma_420_at<const ORIGIN_CHANNELS: u8>(
    transform: &ForwardTransform<f32>,
    rgb0: &[u8],
    rgb1: &[u8],
    cx: usize,
    width: usize,
) -> (u8, u8) {
    let x0 = cx * 2;
    let x1 = (x0 + 1).min(width - 1);
    let (u00, v00) = chroma_at::<ORIGIN_CHANNELS>(transform, rgb0, x0);
    let (u01, v01) = chroma_at::<ORIGIN_CHANNELS>(transform, rgb0, x1);
    let (u10, v10) = chroma_at::<ORIGIN_CHANNELS>(transform, rgb1, x0);
    let (u11, v11) = chroma_at::<ORIGIN_CHANNELS>(transform, rgb1, x1);
    (
        avg_round(avg_round(u00, u01), avg_round(u10, u11)),
        avg_round(avg_round(v00, v01), avg_round(v10, v11)),
    )
}

fn luma_pass<const ORIGIN_CHANNELS: u8>(
    transform: &ForwardTransform<f32>,
    y_plane: &mut [u8],
    y_stride: u32,
    rgb: &[u8],
    rgb_stride: u32,
    width: usize,
) {
    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = y_plane
            .par_chunks_exact_mut(y_stride as usize)
            .zip(rgb.par_chunks_exact(rgb_stride as usize));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = y_plane
            .chunks_exact_mut(y_stride as usize)
            .zip(rgb.chunks_exact(rgb_stride as usize));
    }

    iter.for_each(|(y_dst, rgb)| {
        for (x, y_dst) in y_dst[..width].iter_mut().enumerate() {
            let (r, g, b) = pixel_at::<ORIGIN_CHANNELS>(rgb, x);
            *y_dst = rgb_to_y(transform, r, g, b);
        }
    });
}

/// Pair of source rows covered by chroma row `cy`, the last row of odd heights is used twice.
#[inline]
fn rgb_rows_420<'a>(
    rgb: &'a [u8],
    rgb_stride: u32,
    cy: usize,
    height: usize,
) -> (&'a [u8], &'a [u8]) {
    let y0 = cy * 2;
    let y1 = (y0 + 1).min(height - 1);
    (
        &rgb[y0 * rgb_stride as usize..],
        &rgb[y1 * rgb_stride as usize..],
    )
}

fn rgbx_to_planar_impl<const ORIGIN_CHANNELS: u8, const SAMPLING: u8>(
    planar_image: &mut YuvPlanarImageMut<u8>,
    rgb: &[u8],
    rgb_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    let src_chans: RgbChannels = ORIGIN_CHANNELS.into();
    let chroma_subsampling: ChromaSubsampling = SAMPLING.into();
    let channels = src_chans.get_channels_count();

    check_rgba_destination(
        rgb,
        rgb_stride,
        planar_image.width,
        planar_image.height,
        channels,
    )?;
    planar_image.check_constraints(chroma_subsampling)?;

    let transform = matrix.forward_transform();
    let width = planar_image.width as usize;
    let height = planar_image.height as usize;
    let chroma_width = chroma_subsampling.chroma_width(planar_image.width) as usize;

    luma_pass::<ORIGIN_CHANNELS>(
        &transform,
        planar_image.y_plane.borrow_mut(),
        planar_image.y_stride,
        rgb,
        rgb_stride,
        width,
    );

    let u_stride = planar_image.u_stride as usize;
    let v_stride = planar_image.v_stride as usize;
    let u_plane = planar_image.u_plane.borrow_mut();
    let v_plane = planar_image.v_plane.borrow_mut();

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = u_plane
            .par_chunks_exact_mut(u_stride)
            .zip(v_plane.par_chunks_exact_mut(v_stride));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = u_plane
            .chunks_exact_mut(u_stride)
            .zip(v_plane.chunks_exact_mut(v_stride));
    }

    iter.enumerate().for_each(|(cy, (u_dst, v_dst))| {
        let u_dst = &mut u_dst[..chroma_width];
        let v_dst = &mut v_dst[..chroma_width];
        match chroma_subsampling {
            ChromaSubsampling::Yuv420 => {
                let (rgb0, rgb1) = rgb_rows_420(rgb, rgb_stride, cy, height);
                for (cx, (u_dst, v_dst)) in u_dst.iter_mut().zip(v_dst.iter_mut()).enumerate() {
                    let (u, v) = chroma_420_at::<ORIGIN_CHANNELS>(&transform, rgb0, rgb1, cx, width);
                    *u_dst = u;
                    *v_dst = v;
                }
            }
            ChromaSubsampling::Yuv422 => {
                let rgb0 = &rgb[cy * rgb_stride as usize..];
                for (cx, (u_dst, v_dst)) in u_dst.iter_mut().zip(v_dst.iter_mut()).enumerate() {
                    let (u, v) = chroma_420_at::<ORIGIN_CHANNELS>(&transform, rgb0, rgb0, cx, width);
                    *u_dst = u;
                    *v_dst = v;
                }
            }
            ChromaSubsampling::Yuv444 => {
                let rgb0 = &rgb[cy * rgb_stride as usize..];
                for (x, (u_dst, v_dst)) in u_dst.iter_mut().zip(v_dst.iter_mut()).enumerate() {
                    let (u, v) = chroma_at::<ORIGIN_CHANNELS>(&transform, rgb0, x);
                    *u_dst = u;
                    *v_dst = v;
                }
            }
        }
    });

    Ok(())
}

fn rgbx_to_nv_impl<const ORIGIN_CHANNELS: u8, const UV_ORDER: u8>(
    bi_planar_image: &mut YuvBiPlanarImageMut<u8>,
    rgb: &[u8],
    rgb_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    let src_chans: RgbChannels = ORIGIN_CHANNELS.into();
    let order: UvOrder = UV_ORDER.into();
    let channels = src_chans.get_channels_count();

    check_rgba_destination(
        rgb,
        rgb_stride,
        bi_planar_image.width,
        bi_planar_image.height,
        channels,
    )?;
    bi_planar_image.check_constraints(ChromaSubsampling::Yuv420)?;

    let transform = matrix.forward_transform();
    let width = bi_planar_image.width as usize;
    let height = bi_planar_image.height as usize;
    let chroma_width = ChromaSubsampling::Yuv420.chroma_width(bi_planar_image.width) as usize;

    luma_pass::<ORIGIN_CHANNELS>(
        &transform,
        bi_planar_image.y_plane.borrow_mut(),
        bi_planar_image.y_stride,
        rgb,
        rgb_stride,
        width,
    );

    let uv_stride = bi_planar_image.uv_stride as usize;
    let uv_plane = bi_planar_image.uv_plane.borrow_mut();

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = uv_plane.par_chunks_exact_mut(uv_stride);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = uv_plane.chunks_exact_mut(uv_stride);
    }

    iter.enumerate().for_each(|(cy, uv_dst)| {
        let (rgb0, rgb1) = rgb_rows_420(rgb, rgb_stride, cy, height);
        for (cx, uv_dst) in uv_dst[..chroma_width * 2]
            .chunks_exact_mut(2)
            .enumerate()
        {
            let (u, v) = chroma_420_at::<ORIGIN_CHANNELS>(&transform, rgb0, rgb1, cx, width);
            uv_dst[order.get_u_position()] = u;
            uv_dst[order.get_v_position()] = v;
        }
    });

    Ok(())
}

/// Convert RGB image data to IYUV (planar 4:2:0).
///
/// Luma is computed per pixel. Chroma is computed per pixel, packed to 8 bit and
/// then averaged with rounding over each 2x2 block.
///
/// # Arguments
///
/// * `planar_image` - Target planar image with 4:2:0 chroma.
/// * `rgb` - The input RGB image data slice.
/// * `rgb_stride` - The stride (elements per row) for the RGB image data.
/// * `matrix` - Color matrix.
///
pub fn rgb_to_iyuv(
    planar_image: &mut YuvPlanarImageMut<u8>,
    rgb: &[u8],
    rgb_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    rgbx_to_planar_impl::<{ RgbChannels::Rgb as u8 }, { ChromaSubsampling::Yuv420 as u8 }>(
        planar_image,
        rgb,
        rgb_stride,
        matrix,
    )
}

/// Convert RGBX image data to IYUV (planar 4:2:0), padding byte is ignored.
///
/// # Arguments
///
/// * `planar_image` - Target planar image with 4:2:0 chroma.
/// * `rgbx` - The input RGBX image data slice.
/// * `rgbx_stride` - The stride (elements per row) for the RGBX image data.
/// * `matrix` - Color matrix.
///
pub fn rgbx_to_iyuv(
    planar_image: &mut YuvPlanarImageMut<u8>,
    rgbx: &[u8],
    rgbx_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    rgbx_to_planar_impl::<{ RgbChannels::Rgbx as u8 }, { ChromaSubsampling::Yuv420 as u8 }>(
        planar_image,
        rgbx,
        rgbx_stride,
        matrix,
    )
}

/// Convert RGB image data to YUV4 (planar 4:4:4), chroma is not averaged.
pub fn rgb_to_yuv4(
    planar_image: &mut YuvPlanarImageMut<u8>,
    rgb: &[u8],
    rgb_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    rgbx_to_planar_impl::<{ RgbChannels::Rgb as u8 }, { ChromaSubsampling::Yuv444 as u8 }>(
        planar_image,
        rgb,
        rgb_stride,
        matrix,
    )
}

/// Convert RGBX image data to YUV4 (planar 4:4:4).
pub fn rgbx_to_yuv4(
    planar_image: &mut YuvPlanarImageMut<u8>,
    rgbx: &[u8],
    rgbx_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    rgbx_to_planar_impl::<{ RgbChannels::Rgbx as u8 }, { ChromaSubsampling::Yuv444 as u8 }>(
        planar_image,
        rgbx,
        rgbx_stride,
        matrix,
    )
}

/// Convert RGB image data to planar 4:2:2, chroma is averaged over horizontal pairs.
///
/// # Arguments
///
/// * `planar_image` - Target planar image with 4:2:2 chroma.
/// * `rgb` - The input RGB image data slice.
/// * `rgb_stride` - The stride (elements per row) for the RGB image data.
/// * `matrix` - Color matrix.
///
pub fn rgb_to_yuv422(
    planar_image: &mut YuvPlanarImageMut<u8>,
    rgb: &[u8],
    rgb_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    rgbx_to_planar_impl::<{ RgbChannels::Rgb as u8 }, { ChromaSubsampling::Yuv422 as u8 }>(
        planar_image,
        rgb,
        rgb_stride,
        matrix,
    )
}

/// Convert RGBX image data to planar 4:2:2.
pub fn rgbx_to_yuv422(
    planar_image: &mut YuvPlanarImageMut<u8>,
    rgbx: &[u8],
    rgbx_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    rgbx_to_planar_impl::<{ RgbChannels::Rgbx as u8 }, { ChromaSubsampling::Yuv422 as u8 }>(
        planar_image,
        rgbx,
        rgbx_stride,
        matrix,
    )
}

/// Convert RGB image data to NV12.
///
/// # Arguments
///
/// * `bi_planar_image` - Target bi-planar image, chroma is interleaved as UV.
/// * `rgb` - The input RGB image data slice.
/// * `rgb_stride` - The stride (elements per row) for the RGB image data.
/// * `matrix` - Color matrix.
///
pub fn rgb_to_nv12(
    bi_planar_image: &mut YuvBiPlanarImageMut<u8>,
    rgb: &[u8],
    rgb_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    rgbx_to_nv_impl::<{ RgbChannels::Rgb as u8 }, { UvOrder::Uv as u8 }>(
        bi_planar_image,
        rgb,
        rgb_stride,
        matrix,
    )
}

/// Convert RGBX image data to NV12.
pub fn rgbx_to_nv12(
    bi_planar_image: &mut YuvBiPlanarImageMut<u8>,
    rgbx: &[u8],
    rgbx_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    rgbx_to_nv_impl::<{ RgbChannels::Rgbx as u8 }, { UvOrder::Uv as u8 }>(
        bi_planar_image,
        rgbx,
        rgbx_stride,
        matrix,
    )
}

/// Convert RGB image data to NV21, chroma is interleaved as VU.
pub fn rgb_to_nv21(
    bi_planar_image: &mut YuvBiPlanarImageMut<u8>,
    rgb: &[u8],
    rgb_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    rgbx_to_nv_impl::<{ RgbChannels::Rgb as u8 }, { UvOrder::Vu as u8 }>(
        bi_planar_image,
        rgb,
        rgb_stride,
        matrix,
    )
}

/// Convert RGBX image data to NV21.
pub fn rgbx_to_nv21(
    bi_planar_image: &mut YuvBiPlanarImageMut<u8>,
    rgbx: &[u8],
    rgbx_stride: u32,
    matrix: ColorMatrix,
) -> Result<(), ColorError> {
    rgbx_to_nv_impl::<{ RgbChannels::Rgbx as u8 }, { UvOrder::Vu as u8 }>(
        bi_planar_image,
        rgbx,
        rgbx_stride,
        matrix,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yuv_to_rgb::{iyuv_to_rgb, nv12_to_rgb, nv21_to_rgbx, yuv4_to_rgb};
    use rand::Rng;

    fn flat_image(width: u32, height: u32, channels: usize, color: [u8; 3]) -> Vec<u8> {
        let mut image = vec![255u8; width as usize * height as usize * channels];
        for px in image.chunks_exact_mut(channels) {
            px[..3].copy_from_slice(&color);
        }
        image
    }

    fn assert_close(a: &[u8], b: &[u8], tolerance: i32) {
        for (i, (&a, &b)) in a.iter().zip(b.iter()).enumerate() {
            let diff = (a as i32 - b as i32).abs();
            assert!(
                diff <= tolerance,
                "Diff {} exceeds tolerance at {}, expected {}, received {}",
                diff,
                i,
                a,
                b
            );
        }
    }

    #[test]
    fn known_values_bt709() {
        let rgb = [255u8, 255, 255, 0, 0, 0, 255, 0, 0];
        let mut planar = YuvPlanarImageMut::<u8>::alloc(3, 1, ChromaSubsampling::Yuv444);
        rgb_to_yuv4(&mut planar, &rgb, 9, ColorMatrix::Bt709).unwrap();
        assert_eq!(planar.y_plane.borrow(), &[255, 0, 54]);
        assert_eq!(planar.u_plane.borrow(), &[128, 128, 99]);
        assert_eq!(planar.v_plane.borrow(), &[128, 128, 255]);
    }

    #[test]
    fn yuv4_round_trip() {
        let width = 33u32;
        let height = 17u32;
        let mut rng = rand::rng();
        let src: Vec<u8> = (0..width * height * 3).map(|_| rng.random()).collect();
        for matrix in [ColorMatrix::Bt709, ColorMatrix::Bt601] {
            let mut planar =
                YuvPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv444);
            rgb_to_yuv4(&mut planar, &src, width * 3, matrix).unwrap();
            let mut dst = vec![0u8; src.len()];
            yuv4_to_rgb(&planar.to_fixed(), &mut dst, width * 3, matrix).unwrap();
            // Saturated colors may leave the YUV gamut after 8-bit quantization
            for (s, d) in src.chunks_exact(3).zip(dst.chunks_exact(3)) {
                let lo = *s.iter().min().unwrap_or(&0);
                let hi = *s.iter().max().unwrap_or(&0);
                if lo > 20 && hi < 235 {
                    assert_close(s, d, 2);
                }
            }
        }
    }

    #[test]
    fn flat_color_round_trips_through_subsampled_formats() {
        let mut rng = rand::rng();
        for (width, height) in [(8u32, 6u32), (7, 5), (1, 1)] {
            let color = [
                rng.random_range(40..215u8),
                rng.random_range(40..215u8),
                rng.random_range(40..215u8),
            ];
            let src = flat_image(width, height, 3, color);

            let mut planar = YuvPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv420);
            rgb_to_iyuv(&mut planar, &src, width * 3, ColorMatrix::Bt709).unwrap();
            let mut dst = vec![0u8; src.len()];
            iyuv_to_rgb(&planar.to_fixed(), &mut dst, width * 3, ColorMatrix::Bt709).unwrap();
            assert_close(&src, &dst, 3);

            let mut nv12 = YuvBiPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv420);
            rgb_to_nv12(&mut nv12, &src, width * 3, ColorMatrix::Bt709).unwrap();
            let mut dst = vec![0u8; src.len()];
            nv12_to_rgb(&nv12.to_fixed(), &mut dst, width * 3, ColorMatrix::Bt709).unwrap();
            assert_close(&src, &dst, 3);

            let src_x = flat_image(width, height, 4, color);
            let mut nv21 = YuvBiPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv420);
            rgbx_to_nv21(&mut nv21, &src_x, width * 4, ColorMatrix::Bt709).unwrap();
            let mut dst_x = vec![0u8; src_x.len()];
            nv21_to_rgbx(&nv21.to_fixed(), &mut dst_x, width * 4, ColorMatrix::Bt709).unwrap();
            assert_close(&src_x, &dst_x, 3);
        }
    }

    #[test]
    fn chroma_averages_horizontally_then_vertically() {
        // Column 0 is black, column 1 is white, chroma stays neutral
        let rgb = [0u8, 0, 0, 255, 255, 255, 0, 0, 0, 255, 255, 255];
        let mut planar = YuvPlanarImageMut::<u8>::alloc(2, 2, ChromaSubsampling::Yuv420);
        rgb_to_iyuv(&mut planar, &rgb, 6, ColorMatrix::Bt709).unwrap();
        assert_eq!(planar.y_plane.borrow(), &[0, 255, 0, 255]);
        assert_eq!(planar.u_plane.borrow(), &[128]);
        assert_eq!(planar.v_plane.borrow(), &[128]);

        // Only the top-left pixel is red: V = avg(avg(255, 128), avg(128, 128))
        let rgb = [255u8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        rgb_to_iyuv(&mut planar, &rgb, 6, ColorMatrix::Bt709).unwrap();
        assert_eq!(planar.v_plane.borrow(), &[160]);
        // U = avg(avg(99, 128), avg(128, 128))
        assert_eq!(planar.u_plane.borrow(), &[121]);
    }

    #[test]
    fn odd_edges_replicate() {
        // 3x3 image, right column and bottom row blocks contain a single distinct pixel
        let mut rgb = vec![0u8; 3 * 3 * 3];
        rgb[(2 * 3 + 2) * 3] = 255;
        let mut nv12 = YuvBiPlanarImageMut::<u8>::alloc(3, 3, ChromaSubsampling::Yuv420);
        rgb_to_nv12(&mut nv12, &rgb, 9, ColorMatrix::Bt709).unwrap();
        let uv = nv12.uv_plane.borrow();
        assert_eq!(&uv[0..4], &[128, 128, 128, 128]);
        assert_eq!(&uv[4..6], &[128, 128]);
        // Bottom right block is the red pixel alone
        assert_eq!(&uv[6..8], &[99, 255]);
    }

    #[test]
    fn rejects_short_rgb() {
        let rgb = vec![0u8; 10];
        let mut planar = YuvPlanarImageMut::<u8>::alloc(2, 2, ChromaSubsampling::Yuv420);
        assert!(rgb_to_iyuv(&mut planar, &rgb, 6, ColorMatrix::Bt709).is_err());
    }

    #[test]
    fn yuv422_averages_horizontal_pairs() {
        // Row 0: red, black, red. Row 1: black, black, black
        let mut rgb = vec![0u8; 3 * 2 * 4];
        rgb[0] = 255;
        rgb[8] = 255;
        let mut planar = YuvPlanarImageMut::<u8>::alloc(3, 2, ChromaSubsampling::Yuv422);
        rgbx_to_yuv422(&mut planar, &rgb, 12, ColorMatrix::Bt709).unwrap();
        assert_eq!(planar.y_plane.borrow(), &[54, 0, 54, 0, 0, 0]);
        // avg(255, 128) for the pair, last odd column pairs with itself
        assert_eq!(planar.v_plane.borrow(), &[192, 255, 128, 128]);
        assert_eq!(planar.u_plane.borrow(), &[114, 99, 128, 128]);
    }

    #[test]
    fn yuv422_feeds_packed_combine() {
        let width = 6u32;
        let height = 3u32;
        let color = [90u8, 160, 30];
        let src = flat_image(width, height, 3, color);
        let mut planar = YuvPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv422);
        rgb_to_yuv422(&mut planar, &src, width * 3, ColorMatrix::Bt601).unwrap();
        let mut uyvy = vec![0u8; width as usize * 2 * height as usize];
        crate::channel_combine::combine_uyvy(&planar.to_fixed(), &mut uyvy, width * 2).unwrap();
        let mut dst = vec![0u8; src.len()];
        crate::packed_to_rgb::uyvy_to_rgb(
            &uyvy,
            width * 2,
            &mut dst,
            width * 3,
            width,
            height,
            ColorMatrix::Bt601,
        )
        .unwrap();
        assert_close(&src, &dst, 3);
    }
}
