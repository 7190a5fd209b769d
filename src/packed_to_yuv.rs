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
use crate::color_error::check_yuv_packed422;
use crate::color_support::{ChromaSubsampling, PackedYuvLayout, UvOrder};
use crate::images::{YuvBiPlanarImageMut, YuvPlanarImageMut};
use crate::numerics::avg_round;
use crate::ColorError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

fn copy_luma<const LAYOUT: u8>(
    y_plane: &mut [u8],
    y_stride: u32,
    packed: &[u8],
    packed_stride: u32,
    width: usize,
) {
    let layout: PackedYuvLayout = LAYOUT.into();

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = y_plane
            .par_chunks_exact_mut(y_stride as usize)
            .zip(packed.par_chunks_exact(packed_stride as usize));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = y_plane
            .chunks_exact_mut(y_stride as usize)
            .zip(packed.chunks_exact(packed_stride as usize));
    }

    iter.for_each(|(y_dst, packed)| {
        for (y_dst, packed) in y_dst[..width]
            .chunks_mut(2)
            .zip(packed.chunks_exact(4))
        {
            y_dst[0] = packed[layout.get_first_y_position()];
            if let Some(second) = y_dst.get_mut(1) {
                *second = packed[layout.get_second_y_position()];
            }
        }
    });
}

/// Rows of packed image averaged into chroma row `cy`, odd last row stands alone.
#[inline]
fn packed_rows_420<'a>(
    packed: &'a [u8],
    packed_stride: u32,
    cy: usize,
    height: usize,
) -> (&'a [u8], &'a [u8]) {
    let y0 = cy * 2;
    let y1 = (y0 + 1).min(height - 1);
    (
        &packed[y0 * packed_stride as usize..],
        &packed[y1 * packed_stride as usize..],
    )
}

#[inline(always)]
fn chroma_pair<const LAYOUT: u8>(packed0: &[u8], packed1: &[u8]) -> (u8, u8) {
    let layout: PackedYuvLayout = LAYOUT.into();
    (
        avg_round(
            packed0[layout.get_u_position()],
            packed1[layout.get_u_position()],
        ),
        avg_round(
            packed0[layout.get_v_position()],
            packed1[layout.get_v_position()],
        ),
    )
}

fn packed422_to_planar_impl<const LAYOUT: u8>(
    planar_image: &mut YuvPlanarImageMut<u8>,
    packed: &[u8],
    packed_stride: u32,
) -> Result<(), ColorError> {
    planar_image.check_constraints(ChromaSubsampling::Yuv420)?;
    check_yuv_packed422(
        packed,
        packed_stride,
        planar_image.width,
        planar_image.height,
    )?;

    let width = planar_image.width as usize;
    let height = planar_image.height as usize;
    let pairs = width.div_ceil(2);

    copy_luma::<LAYOUT>(
        planar_image.y_plane.borrow_mut(),
        planar_image.y_stride,
        packed,
        packed_stride,
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
        let (packed0, packed1) = packed_rows_420(packed, packed_stride, cy, height);
        for (((u_dst, v_dst), packed0), packed1) in u_dst[..pairs]
            .iter_mut()
            .zip(v_dst[..pairs].iter_mut())
            .zip(packed0[..pairs * 4].chunks_exact(4))
            .zip(packed1[..pairs * 4].chunks_exact(4))
        {
            let (u, v) = chroma_pair::<LAYOUT>(packed0, packed1);
            *u_dst = u;
            *v_dst = v;
        }
    });

    Ok(())
}

fn packed422_to_nv_impl<const LAYOUT: u8, const UV_ORDER: u8>(
    bi_planar_image: &mut YuvBiPlanarImageMut<u8>,
    packed: &[u8],
    packed_stride: u32,
) -> Result<(), ColorError> {
    let order: UvOrder = UV_ORDER.into();
    bi_planar_image.check_constraints(ChromaSubsampling::Yuv420)?;
    check_yuv_packed422(
        packed,
        packed_stride,
        bi_planar_image.width,
        bi_planar_image.height,
    )?;

    let width = bi_planar_image.width as usize;
    let height = bi_planar_image.height as usize;
    let pairs = width.div_ceil(2);

    copy_luma::<LAYOUT>(
        bi_planar_image.y_plane.borrow_mut(),
        bi_planar_image.y_stride,
        packed,
        packed_stride,
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
        let (packed0, packed1) = packed_rows_420(packed, packed_stride, cy, height);
        for ((uv_dst, packed0), packed1) in uv_dst[..pairs * 2]
            .chunks_exact_mut(2)
            .zip(packed0[..pairs * 4].chunks_exact(4))
            .zip(packed1[..pairs * 4].chunks_exact(4))
        {
            let (u, v) = chroma_pair::<LAYOUT>(packed0, packed1);
            uv_dst[order.get_u_position()] = u;
            uv_dst[order.get_v_position()] = v;
        }
    });

    Ok(())
}

/// Convert UYVY to IYUV (planar 4:2:0).
///
/// Luma is copied, chroma of each pair is averaged with rounding over two rows.
///
/// # Arguments
///
/// * `planar_image` - Target planar image with 4:2:0 chroma.
/// * `uyvy` - Source packed UYVY image.
/// * `uyvy_stride` - The stride (bytes per row) for the UYVY image.
///
pub fn uyvy_to_iyuv(
    planar_image: &mut YuvPlanarImageMut<u8>,
    uyvy: &[u8],
    uyvy_stride: u32,
) -> Result<(), ColorError> {
    packed422_to_planar_impl::<{ PackedYuvLayout::Uyvy as u8 }>(planar_image, uyvy, uyvy_stride)
}

/// Convert YUYV to IYUV (planar 4:2:0).
///
/// # Arguments
///
/// * `planar_image` - Target planar image with 4:2:0 chroma.
/// * `yuyv` - Source packed YUYV image.
/// * `yuyv_stride` - The stride (bytes per row) for the YUYV image.
///
pub fn yuyv_to_iyuv(
    planar_image: &mut YuvPlanarImageMut<u8>,
    yuyv: &[u8],
    yuyv_stride: u32,
) -> Result<(), ColorError> {
    packed422_to_planar_impl::<{ PackedYuvLayout::Yuyv as u8 }>(planar_image, yuyv, yuyv_stride)
}

/// Convert UYVY to NV12.
pub fn uyvy_to_nv12(
    bi_planar_image: &mut YuvBiPlanarImageMut<u8>,
    uyvy: &[u8],
    uyvy_stride: u32,
) -> Result<(), ColorError> {
    packed422_to_nv_impl::<{ PackedYuvLayout::Uyvy as u8 }, { UvOrder::Uv as u8 }>(
        bi_planar_image,
        uyvy,
        uyvy_stride,
    )
}

/// Convert YUYV to NV12.
pub fn yuyv_to_nv12(
    bi_planar_image: &mut YuvBiPlanarImageMut<u8>,
    yuyv: &[u8],
    yuyv_stride: u32,
) -> Result<(), ColorError> {
    packed422_to_nv_impl::<{ PackedYuvLayout::Yuyv as u8 }, { UvOrder::Uv as u8 }>(
        bi_planar_image,
        yuyv,
        yuyv_stride,
    )
}

/// Convert UYVY to NV21.
pub fn uyvy_to_nv21(
    bi_planar_image: &mut YuvBiPlanarImageMut<u8>,
    uyvy: &[u8],
    uyvy_stride: u32,
) -> Result<(), ColorError> {
    packed422_to_nv_impl::<{ PackedYuvLayout::Uyvy as u8 }, { UvOrder::Vu as u8 }>(
        bi_planar_image,
        uyvy,
        uyvy_stride,
    )
}

/// Convert YUYV to NV21.
pub fn yuyv_to_nv21(
    bi_planar_image: &mut YuvBiPlanarImageMut<u8>,
    yuyv: &[u8],
    yuyv_stride: u32,
) -> Result<(), ColorError> {
    packed422_to_nv_impl::<{ PackedYuvLayout::Yuyv as u8 }, { UvOrder::Vu as u8 }>(
        bi_planar_image,
        yuyv,
        yuyv_stride,
    )
}
