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
use crate::color_error::{check_rgba_destination, check_same_dimensions, check_yuv_packed422};
use crate::color_support::{ChromaSubsampling, PackedYuvLayout};
use crate::images::{PlaneImage, YuvPlanarImage};
use crate::ColorError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

fn combine_impl<const CHANNELS: usize>(
    planes: [&PlaneImage<u8>; CHANNELS],
    dst: &mut [u8],
    dst_stride: u32,
) -> Result<(), ColorError> {
    let first = planes[0];
    for plane in planes.iter() {
        plane.check_constraints()?;
        check_same_dimensions(first.width, first.height, plane.width, plane.height)?;
    }
    check_rgba_destination(dst, dst_stride, first.width, first.height, CHANNELS)?;

    let width = first.width as usize;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.par_chunks_exact_mut(dst_stride as usize);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.chunks_exact_mut(dst_stride as usize);
    }

    iter.enumerate().for_each(|(y, dst)| {
        for (channel, plane) in planes.iter().enumerate() {
            let src = &plane.plane[y * plane.stride as usize..][..width];
            for (dst, &src) in dst[..width * CHANNELS]
                .chunks_exact_mut(CHANNELS)
                .zip(src.iter())
            {
                dst[channel] = src;
            }
        }
    });

    Ok(())
}

/// Interleaves two planes into two channel 8-bit image.
///
/// # Arguments
///
/// * `src0`: Plane stored in channel 0
/// * `src1`: Plane stored in channel 1
/// * `dst`: Destination interleaved image
/// * `dst_stride`: Destination stride (elements per row)
///
/// returns: Result<(), ColorError>
///
pub fn combine_u16(
    src0: &PlaneImage<u8>,
    src1: &PlaneImage<u8>,
    dst: &mut [u8],
    dst_stride: u32,
) -> Result<(), ColorError> {
    combine_impl::<2>([src0, src1], dst, dst_stride)
}

/// Interleaves three planes into RGB image.
///
/// # Arguments
///
/// * `r`: Plane stored in channel 0
/// * `g`: Plane stored in channel 1
/// * `b`: Plane stored in channel 2
/// * `dst`: Destination RGB image
/// * `dst_stride`: Destination stride (elements per row)
///
/// returns: Result<(), ColorError>
///
pub fn combine_u24(
    r: &PlaneImage<u8>,
    g: &PlaneImage<u8>,
    b: &PlaneImage<u8>,
    dst: &mut [u8],
    dst_stride: u32,
) -> Result<(), ColorError> {
    combine_impl::<3>([r, g, b], dst, dst_stride)
}

/// Interleaves four planes into RGBX image.
///
/// # Arguments
///
/// * `r`: Plane stored in channel 0
/// * `g`: Plane stored in channel 1
/// * `b`: Plane stored in channel 2
/// * `x`: Plane stored in channel 3
/// * `dst`: Destination RGBX image
/// * `dst_stride`: Destination stride (elements per row)
///
/// returns: Result<(), ColorError>
///
pub fn combine_u32(
    r: &PlaneImage<u8>,
    g: &PlaneImage<u8>,
    b: &PlaneImage<u8>,
    x: &PlaneImage<u8>,
    dst: &mut [u8],
    dst_stride: u32,
) -> Result<(), ColorError> {
    combine_impl::<4>([r, g, b, x], dst, dst_stride)
}

fn combine_packed422_impl<const LAYOUT: u8>(
    planar_image: &YuvPlanarImage<u8>,
    packed: &mut [u8],
    packed_stride: u32,
) -> Result<(), ColorError> {
    let layout: PackedYuvLayout = LAYOUT.into();
    planar_image.check_constraints(ChromaSubsampling::Yuv422)?;
    check_yuv_packed422(
        packed,
        packed_stride,
        planar_image.width,
        planar_image.height,
    )?;

    let width = planar_image.width as usize;
    let pairs = width.div_ceil(2);

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = packed.par_chunks_exact_mut(packed_stride as usize);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = packed.chunks_exact_mut(packed_stride as usize);
    }

    iter.enumerate().for_each(|(y, packed)| {
        let y_src = &planar_image.y_plane[y * planar_image.y_stride as usize..][..width];
        let u_src = &planar_image.u_plane[y * planar_image.u_stride as usize..][..pairs];
        let v_src = &planar_image.v_plane[y * planar_image.v_stride as usize..][..pairs];

        for (((dst, y_src), &u), &v) in packed[..pairs * 4]
            .chunks_exact_mut(4)
            .zip(y_src.chunks(2))
            .zip(u_src.iter())
            .zip(v_src.iter())
        {
            let y0 = y_src[0];
            let y1 = y_src.get(1).copied().unwrap_or(y0);
            dst[layout.get_first_y_position()] = y0;
            dst[layout.get_u_position()] = u;
            dst[layout.get_second_y_position()] = y1;
            dst[layout.get_v_position()] = v;
        }
    });

    Ok(())
}

/// Packs planar 4:2:2 image into UYVY.
///
/// U and V planes are half width and full height. For odd widths the last group repeats
/// its luma sample.
///
/// # Arguments
///
/// * `planar_image`: Source planar image with 4:2:2 chroma
/// * `uyvy`: Destination packed image
/// * `uyvy_stride`: Destination stride (elements per row)
///
/// returns: Result<(), ColorError>
///
pub fn combine_uyvy(
    planar_image: &YuvPlanarImage<u8>,
    uyvy: &mut [u8],
    uyvy_stride: u32,
) -> Result<(), ColorError> {
    combine_packed422_impl::<{ PackedYuvLayout::Uyvy as u8 }>(planar_image, uyvy, uyvy_stride)
}

/// Packs planar 4:2:2 image into YUYV.
///
/// # Arguments
///
/// * `planar_image`: Source planar image with 4:2:2 chroma
/// * `yuyv`: Destination packed image
/// * `yuyv_stride`: Destination stride (elements per row)
///
/// returns: Result<(), ColorError>
///
pub fn combine_yuyv(
    planar_image: &YuvPlanarImage<u8>,
    yuyv: &mut [u8],
    yuyv_stride: u32,
) -> Result<(), ColorError> {
    combine_packed422_impl::<{ PackedYuvLayout::Yuyv as u8 }>(planar_image, yuyv, yuyv_stride)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel_extract::{extract_channel_u16, split_u32_to_planes};
    use crate::images::{PlaneImageMut, YuvPlanarImageMut};
    use rand::Rng;

    fn plane(data: &[u8], width: u32, height: u32) -> PlaneImage<'_, u8> {
        PlaneImage {
            plane: data,
            stride: width,
            width,
            height,
        }
    }

    #[test]
    fn combine_u16_inverts_extract() {
        let width = 6u32;
        let height = 3u32;
        let mut rng = rand::rng();
        let src: Vec<u8> = (0..width * height * 2).map(|_| rng.random()).collect();
        let mut c0 = PlaneImageMut::<u8>::alloc(width, height);
        let mut c1 = PlaneImageMut::<u8>::alloc(width, height);
        extract_channel_u16(&mut c0, &src, width * 2, 0).unwrap();
        extract_channel_u16(&mut c1, &src, width * 2, 1).unwrap();
        let mut dst = vec![0u8; src.len()];
        combine_u16(&c0.to_fixed(), &c1.to_fixed(), &mut dst, width * 2).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn combine_u32_inverts_split() {
        let width = 5u32;
        let height = 4u32;
        let mut rng = rand::rng();
        let src: Vec<u8> = (0..width * height * 4).map(|_| rng.random()).collect();
        let mut p0 = PlaneImageMut::<u8>::alloc(width, height);
        let mut p1 = PlaneImageMut::<u8>::alloc(width, height);
        let mut p2 = PlaneImageMut::<u8>::alloc(width, height);
        let mut p3 = PlaneImageMut::<u8>::alloc(width, height);
        split_u32_to_planes(&src, width * 4, &mut p0, &mut p1, &mut p2, &mut p3).unwrap();
        let mut dst = vec![0u8; src.len()];
        combine_u32(
            &p0.to_fixed(),
            &p1.to_fixed(),
            &p2.to_fixed(),
            &p3.to_fixed(),
            &mut dst,
            width * 4,
        )
        .unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn combine_u24_places_rgb() {
        let r = [1u8, 2];
        let g = [3u8, 4];
        let b = [5u8, 6];
        let mut dst = [0u8; 6];
        combine_u24(
            &plane(&r, 2, 1),
            &plane(&g, 2, 1),
            &plane(&b, 2, 1),
            &mut dst,
            6,
        )
        .unwrap();
        assert_eq!(dst, [1, 3, 5, 2, 4, 6]);
    }

    #[test]
    fn uyvy_byte_order() {
        let y = [10u8, 11, 12, 13];
        let u = [20u8, 21];
        let v = [30u8, 31];
        let image = YuvPlanarImage {
            y_plane: &y,
            y_stride: 4,
            u_plane: &u,
            u_stride: 2,
            v_plane: &v,
            v_stride: 2,
            width: 4,
            height: 1,
        };
        let mut uyvy = [0u8; 8];
        combine_uyvy(&image, &mut uyvy, 8).unwrap();
        assert_eq!(uyvy, [20, 10, 30, 11, 21, 12, 31, 13]);
        let mut yuyv = [0u8; 8];
        combine_yuyv(&image, &mut yuyv, 8).unwrap();
        assert_eq!(yuyv, [10, 20, 11, 30, 12, 21, 13, 31]);
    }

    #[test]
    fn odd_width_repeats_last_luma() {
        let mut planar = YuvPlanarImageMut::<u8>::alloc(3, 2, ChromaSubsampling::Yuv422);
        planar
            .y_plane
            .borrow_mut()
            .copy_from_slice(&[1, 2, 3, 4, 5, 6]);
        planar.u_plane.borrow_mut().copy_from_slice(&[7, 8, 9, 10]);
        planar
            .v_plane
            .borrow_mut()
            .copy_from_slice(&[11, 12, 13, 14]);
        let mut yuyv = [0u8; 16];
        combine_yuyv(&planar.to_fixed(), &mut yuyv, 8).unwrap();
        assert_eq!(
            yuyv,
            [1, 7, 2, 11, 3, 8, 3, 12, 4, 9, 5, 13, 6, 10, 6, 14]
        );
    }
}
