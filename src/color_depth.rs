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
use crate::color_error::check_same_dimensions;
use crate::images::{PlaneImage, PlaneImageMut};
use crate::ColorError;
use num_traits::AsPrimitive;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};
use std::fmt::Debug;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum DepthPolicy {
    Wrap = 0,
    Saturate = 1,
    Widen = 2,
}

impl From<u8> for DepthPolicy {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => DepthPolicy::Wrap,
            1 => DepthPolicy::Saturate,
            2 => DepthPolicy::Widen,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

#[inline]
fn check_shift(shift: i32) -> Result<(), ColorError> {
    if !(0..8).contains(&shift) {
        return Err(ColorError::InvalidShift(shift));
    }
    Ok(())
}

#[inline(always)]
fn convert_sample<const POLICY: u8, S, D>(v: S, shift: i32) -> D
where
    S: AsPrimitive<i32>,
    i32: AsPrimitive<D>,
    D: Copy + 'static,
{
    let policy: DepthPolicy = POLICY.into();
    let v: i32 = v.as_();
    match policy {
        DepthPolicy::Wrap => ((v >> shift) & 0xff).as_(),
        DepthPolicy::Saturate => (v >> shift).clamp(0, 255).as_(),
        DepthPolicy::Widen => (v << shift).as_(),
    }
}

fn convert_depth_impl<const POLICY: u8, S, D>(
    dst: &mut PlaneImageMut<D>,
    src: &PlaneImage<S>,
    shift: i32,
) -> Result<(), ColorError>
where
    S: Copy + Debug + Send + Sync + AsPrimitive<i32>,
    D: Copy + Debug + Send + Sync + 'static,
    i32: AsPrimitive<D>,
{
    check_shift(shift)?;
    src.check_constraints()?;
    dst.check_constraints()?;
    check_same_dimensions(src.width, src.height, dst.width, dst.height)?;

    let width = dst.width as usize;
    let dst_stride = dst.stride as usize;
    let dst_plane = dst.plane.borrow_mut();

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst_plane
            .par_chunks_exact_mut(dst_stride)
            .zip(src.plane.par_chunks_exact(src.stride as usize));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst_plane
            .chunks_exact_mut(dst_stride)
            .zip(src.plane.chunks_exact(src.stride as usize));
    }

    iter.for_each(|(dst, src)| {
        for (dst, &src) in dst[..width].iter_mut().zip(src[..width].iter()) {
            *dst = convert_sample::<POLICY, S, D>(src, shift);
        }
    });

    Ok(())
}

/// Converts signed 16-bit plane to 8-bit plane keeping only the low byte after the shift.
///
/// Each element becomes `(src >> shift) & 0xFF`, shift is arithmetic.
///
/// # Arguments
///
/// * `dst`: Destination 8-bit plane
/// * `src`: Source 16-bit plane, must have the same dimensions
/// * `shift`: Right shift, must be in range `0..8`
///
/// returns: Result<(), ColorError>
///
pub fn convert_depth_u8_s16_wrap(
    dst: &mut PlaneImageMut<u8>,
    src: &PlaneImage<i16>,
    shift: i32,
) -> Result<(), ColorError> {
    convert_depth_impl::<{ DepthPolicy::Wrap as u8 }, i16, u8>(dst, src, shift)
}

/// Converts signed 16-bit plane to 8-bit plane clamping the shifted value to `[0, 255]`.
///
/// # Arguments
///
/// * `dst`: Destination 8-bit plane
/// * `src`: Source 16-bit plane, must have the same dimensions
/// * `shift`: Right shift, must be in range `0..8`
///
/// returns: Result<(), ColorError>
///
pub fn convert_depth_u8_s16_saturate(
    dst: &mut PlaneImageMut<u8>,
    src: &PlaneImage<i16>,
    shift: i32,
) -> Result<(), ColorError> {
    convert_depth_impl::<{ DepthPolicy::Saturate as u8 }, i16, u8>(dst, src, shift)
}

/// Widens 8-bit plane into signed 16-bit plane, each element becomes `src << shift`.
///
/// # Arguments
///
/// * `dst`: Destination 16-bit plane
/// * `src`: Source 8-bit plane, must have the same dimensions
/// * `shift`: Left shift, must be in range `0..8`
///
/// returns: Result<(), ColorError>
///
pub fn convert_depth_s16_u8(
    dst: &mut PlaneImageMut<i16>,
    src: &PlaneImage<u8>,
    shift: i32,
) -> Result<(), ColorError> {
    convert_depth_impl::<{ DepthPolicy::Widen as u8 }, u8, i16>(dst, src, shift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::BufferStoreMut;
    use rand::Rng;

    fn plane_i16(data: &[i16], width: u32, height: u32) -> PlaneImage<'_, i16> {
        PlaneImage {
            plane: data,
            stride: width,
            width,
            height,
        }
    }

    #[test]
    fn wrap_keeps_low_byte() {
        let src = [-1i16, 256, 300, 1024, -256, 255];
        let mut dst = PlaneImageMut::<u8>::alloc(3, 2);
        convert_depth_u8_s16_wrap(&mut dst, &plane_i16(&src, 3, 2), 0).unwrap();
        assert_eq!(dst.plane.borrow(), &[255, 0, 44, 0, 0, 255]);
    }

    #[test]
    fn saturate_clamps() {
        let src = [-1i16, 256, 300, 1024, -256, 255];
        let mut dst = PlaneImageMut::<u8>::alloc(3, 2);
        convert_depth_u8_s16_saturate(&mut dst, &plane_i16(&src, 3, 2), 0).unwrap();
        assert_eq!(dst.plane.borrow(), &[0, 255, 255, 255, 0, 255]);
        convert_depth_u8_s16_saturate(&mut dst, &plane_i16(&src, 3, 2), 2).unwrap();
        assert_eq!(dst.plane.borrow(), &[0, 64, 75, 255, 0, 63]);
    }

    #[test]
    fn arithmetic_shift_on_negative() {
        let src = [-16i16, -1];
        let mut dst = PlaneImageMut::<u8>::alloc(2, 1);
        convert_depth_u8_s16_wrap(&mut dst, &plane_i16(&src, 2, 1), 2).unwrap();
        // -16 >> 2 = -4 = 0xFC, -1 >> 2 = -1
        assert_eq!(dst.plane.borrow(), &[252, 255]);
    }

    #[test]
    fn widen_then_narrow_is_identity() {
        let width = 13u32;
        let height = 7u32;
        let mut rng = rand::rng();
        let src: Vec<u8> = (0..width * height).map(|_| rng.random()).collect();
        let src_plane = PlaneImage {
            plane: &src,
            stride: width,
            width,
            height,
        };
        for shift in 0..8 {
            let mut wide = PlaneImageMut::<i16>::alloc(width, height);
            convert_depth_s16_u8(&mut wide, &src_plane, shift).unwrap();
            let mut narrow = PlaneImageMut::<u8>::alloc(width, height);
            convert_depth_u8_s16_saturate(&mut narrow, &wide.to_fixed(), shift).unwrap();
            assert_eq!(narrow.plane.borrow(), src.as_slice());
        }
    }

    #[test]
    fn rejects_invalid_shift() {
        let src = [0i16; 4];
        let mut dst = PlaneImageMut::<u8>::alloc(2, 2);
        for shift in [-1, 8, 15] {
            assert_eq!(
                convert_depth_u8_s16_wrap(&mut dst, &plane_i16(&src, 2, 2), shift),
                Err(ColorError::InvalidShift(shift))
            );
        }
    }

    #[test]
    fn respects_destination_stride() {
        let src = [1i16, 2, 3, 4];
        let mut storage = vec![7u8; 6];
        {
            let mut dst = PlaneImageMut {
                plane: BufferStoreMut::Borrowed(&mut storage),
                stride: 3,
                width: 2,
                height: 2,
            };
            convert_depth_u8_s16_wrap(&mut dst, &plane_i16(&src, 2, 2), 0).unwrap();
        }
        assert_eq!(storage, [1, 2, 7, 3, 4, 7]);
    }

    #[test]
    fn rejects_mismatched_dimensions() {
        let src = [0i16; 6];
        let mut dst = PlaneImageMut::<u8>::alloc(2, 2);
        assert!(matches!(
            convert_depth_u8_s16_wrap(&mut dst, &plane_i16(&src, 3, 2), 0),
            Err(ColorError::ImagesSizeMismatch(_, _))
        ));
    }
}
