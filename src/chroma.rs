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
use crate::color_error::{check_rgba_destination, check_same_dimensions};
use crate::images::{PlaneImage, PlaneImageMut};
use crate::ColorError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Writes `u` and `v` planes, row `y` of the planes reads interleaved row `y >> SHIFT`
/// and column `x` reads pair `x >> SHIFT`.
fn split_uv_impl<const SHIFT: usize>(
    uv: &[u8],
    uv_stride: u32,
    u: &mut PlaneImageMut<u8>,
    v: &mut PlaneImageMut<u8>,
) -> Result<(), ColorError> {
    u.check_constraints()?;
    v.check_constraints()?;
    check_same_dimensions(u.width, u.height, v.width, v.height)?;
    let uv_width = (u.width as usize).div_ceil(1 << SHIFT) as u32;
    let uv_height = (u.height as usize).div_ceil(1 << SHIFT) as u32;
    check_rgba_destination(uv, uv_stride, uv_width, uv_height, 2)?;

    let width = u.width as usize;
    let u_stride = u.stride as usize;
    let v_stride = v.stride as usize;
    let u_plane = u.plane.borrow_mut();
    let v_plane = v.plane.borrow_mut();

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

    iter.enumerate().for_each(|(y, (u_dst, v_dst))| {
        let uv_src = &uv[(y >> SHIFT) * uv_stride as usize..];
        for (x, (u_dst, v_dst)) in u_dst[..width]
            .iter_mut()
            .zip(v_dst[..width].iter_mut())
            .enumerate()
        {
            let pair = (x >> SHIFT) * 2;
            *u_dst = uv_src[pair];
            *v_dst = uv_src[pair + 1];
        }
    });

    Ok(())
}

/// Splits interleaved UV plane into separate U and V planes of the same resolution.
///
/// # Arguments
///
/// * `uv`: Interleaved UV plane
/// * `uv_stride`: Interleaved plane stride (elements per row)
/// * `u`: Destination U plane, its dimensions describe the UV plane as well
/// * `v`: Destination V plane
///
/// returns: Result<(), ColorError>
///
pub fn deinterleave_uv(
    uv: &[u8],
    uv_stride: u32,
    u: &mut PlaneImageMut<u8>,
    v: &mut PlaneImageMut<u8>,
) -> Result<(), ColorError> {
    split_uv_impl::<0>(uv, uv_stride, u, v)
}

/// Splits half resolution interleaved UV plane into full resolution U and V planes,
/// each chroma sample covers a 2x2 block.
///
/// # Arguments
///
/// * `uv`: Interleaved UV plane with `ceil(width / 2)` pairs and `ceil(height / 2)` rows
/// * `uv_stride`: Interleaved plane stride (elements per row)
/// * `u`: Destination full resolution U plane
/// * `v`: Destination full resolution V plane
///
/// returns: Result<(), ColorError>
///
pub fn upsample_uv(
    uv: &[u8],
    uv_stride: u32,
    u: &mut PlaneImageMut<u8>,
    v: &mut PlaneImageMut<u8>,
) -> Result<(), ColorError> {
    split_uv_impl::<1>(uv, uv_stride, u, v)
}

/// Interleaves U and V planes into one UV plane.
///
/// # Arguments
///
/// * `u`: Source U plane
/// * `v`: Source V plane, must match U dimensions
/// * `uv`: Destination interleaved plane
/// * `uv_stride`: Destination stride (elements per row)
///
/// returns: Result<(), ColorError>
///
pub fn interleave_uv(
    u: &PlaneImage<u8>,
    v: &PlaneImage<u8>,
    uv: &mut [u8],
    uv_stride: u32,
) -> Result<(), ColorError> {
    u.check_constraints()?;
    v.check_constraints()?;
    check_same_dimensions(u.width, u.height, v.width, v.height)?;
    check_rgba_destination(uv, uv_stride, u.width, u.height, 2)?;

    let width = u.width as usize;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = uv.par_chunks_exact_mut(uv_stride as usize);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = uv.chunks_exact_mut(uv_stride as usize);
    }

    iter.enumerate().for_each(|(y, uv_dst)| {
        let u_src = &u.plane[y * u.stride as usize..][..width];
        let v_src = &v.plane[y * v.stride as usize..][..width];
        for ((uv_dst, &u_value), &v_value) in uv_dst[..width * 2]
            .chunks_exact_mut(2)
            .zip(u_src.iter())
            .zip(v_src.iter())
        {
            uv_dst[0] = u_value;
            uv_dst[1] = v_value;
        }
    });

    Ok(())
}

/// Nearest neighbour 2x upscale, `dst(x, y) = src(x / 2, y / 2)`.
///
/// Source must be `ceil(dst.width / 2)` x `ceil(dst.height / 2)`.
pub fn scale_up_2x2(src: &PlaneImage<u8>, dst: &mut PlaneImageMut<u8>) -> Result<(), ColorError> {
    src.check_constraints()?;
    dst.check_constraints()?;
    check_same_dimensions(
        src.width,
        src.height,
        dst.width.div_ceil(2),
        dst.height.div_ceil(2),
    )?;

    let width = dst.width as usize;
    let dst_stride = dst.stride as usize;
    let dst_plane = dst.plane.borrow_mut();

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst_plane.par_chunks_exact_mut(dst_stride);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst_plane.chunks_exact_mut(dst_stride);
    }

    iter.enumerate().for_each(|(y, dst)| {
        let src_row = &src.plane[(y >> 1) * src.stride as usize..];
        for (x, dst) in dst[..width].iter_mut().enumerate() {
            *dst = src_row[x >> 1];
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn interleave_inverts_deinterleave() {
        let width = 7u32;
        let height = 5u32;
        let mut rng = rand::rng();
        let uv: Vec<u8> = (0..width * height * 2).map(|_| rng.random()).collect();
        let mut u = PlaneImageMut::<u8>::alloc(width, height);
        let mut v = PlaneImageMut::<u8>::alloc(width, height);
        deinterleave_uv(&uv, width * 2, &mut u, &mut v).unwrap();
        for (i, pair) in uv.chunks_exact(2).enumerate() {
            assert_eq!(u.plane.borrow()[i], pair[0]);
            assert_eq!(v.plane.borrow()[i], pair[1]);
        }
        let mut back = vec![0u8; uv.len()];
        interleave_uv(&u.to_fixed(), &v.to_fixed(), &mut back, width * 2).unwrap();
        assert_eq!(back, uv);
    }

    #[test]
    fn upsample_repeats_blocks() {
        // 3x3 destination from 2x2 pairs
        let uv = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let mut u = PlaneImageMut::<u8>::alloc(3, 3);
        let mut v = PlaneImageMut::<u8>::alloc(3, 3);
        upsample_uv(&uv, 4, &mut u, &mut v).unwrap();
        assert_eq!(u.plane.borrow(), &[1, 1, 3, 1, 1, 3, 5, 5, 7]);
        assert_eq!(v.plane.borrow(), &[2, 2, 4, 2, 2, 4, 6, 6, 8]);
    }

    #[test]
    fn scale_up_doubles() {
        let src = [1u8, 2, 3, 4];
        let src = PlaneImage {
            plane: &src,
            stride: 2,
            width: 2,
            height: 2,
        };
        let mut dst = PlaneImageMut::<u8>::alloc(4, 4);
        scale_up_2x2(&src, &mut dst).unwrap();
        assert_eq!(
            dst.plane.borrow(),
            &[1, 1, 2, 2, 1, 1, 2, 2, 3, 3, 4, 4, 3, 3, 4, 4]
        );
    }

    #[test]
    fn scale_up_rejects_wrong_source() {
        let src = [0u8; 9];
        let src = PlaneImage {
            plane: &src,
            stride: 3,
            width: 3,
            height: 3,
        };
        let mut dst = PlaneImageMut::<u8>::alloc(4, 4);
        assert!(matches!(
            scale_up_2x2(&src, &mut dst),
            Err(ColorError::ImagesSizeMismatch(_, _))
        ));
    }
}
