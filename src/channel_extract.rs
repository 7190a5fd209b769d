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
use crate::images::PlaneImageMut;
use crate::ColorError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

fn extract_impl<const CHANNELS: usize>(
    dst: &mut PlaneImageMut<u8>,
    src: &[u8],
    src_stride: u32,
    position: usize,
) -> Result<(), ColorError> {
    if position >= CHANNELS {
        return Err(ColorError::InvalidChannelPosition {
            position,
            channels: CHANNELS,
        });
    }
    dst.check_constraints()?;
    check_rgba_destination(src, src_stride, dst.width, dst.height, CHANNELS)?;

    let width = dst.width as usize;
    let dst_stride = dst.stride as usize;
    let dst_plane = dst.plane.borrow_mut();

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst_plane
            .par_chunks_exact_mut(dst_stride)
            .zip(src.par_chunks_exact(src_stride as usize));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst_plane
            .chunks_exact_mut(dst_stride)
            .zip(src.chunks_exact(src_stride as usize));
    }

    iter.for_each(|(dst, src)| {
        for (dst, src) in dst[..width]
            .iter_mut()
            .zip(src[..width * CHANNELS].chunks_exact(CHANNELS))
        {
            *dst = src[position];
        }
    });

    Ok(())
}

fn split_impl<const CHANNELS: usize>(
    src: &[u8],
    src_stride: u32,
    planes: &mut [&mut PlaneImageMut<'_, u8>],
) -> Result<(), ColorError> {
    if let Some(first) = planes.first() {
        let (width, height) = (first.width, first.height);
        check_rgba_destination(src, src_stride, width, height, CHANNELS)?;
        for plane in planes.iter() {
            check_same_dimensions(width, height, plane.width, plane.height)?;
            plane.check_constraints()?;
        }
    }
    for (position, plane) in planes.iter_mut().enumerate() {
        extract_impl::<CHANNELS>(plane, src, src_stride, position)?;
    }
    Ok(())
}

/// Copies one channel of interleaved two channel 8-bit image into a plane.
///
/// # Arguments
///
/// * `dst`: Destination plane, its dimensions describe the source as well
/// * `src`: Source interleaved image
/// * `src_stride`: Source stride (elements per row)
/// * `position`: Channel index, `0` or `1`
///
/// returns: Result<(), ColorError>
///
pub fn extract_channel_u16(
    dst: &mut PlaneImageMut<u8>,
    src: &[u8],
    src_stride: u32,
    position: usize,
) -> Result<(), ColorError> {
    extract_impl::<2>(dst, src, src_stride, position)
}

/// Copies one channel of interleaved three channel 8-bit image into a plane.
///
/// # Arguments
///
/// * `dst`: Destination plane, its dimensions describe the source as well
/// * `src`: Source interleaved image
/// * `src_stride`: Source stride (elements per row)
/// * `position`: Channel index in range `0..3`
///
/// returns: Result<(), ColorError>
///
pub fn extract_channel_u24(
    dst: &mut PlaneImageMut<u8>,
    src: &[u8],
    src_stride: u32,
    position: usize,
) -> Result<(), ColorError> {
    extract_impl::<3>(dst, src, src_stride, position)
}

/// Copies one channel of interleaved four channel 8-bit image into a plane.
///
/// # Arguments
///
/// * `dst`: Destination plane, its dimensions describe the source as well
/// * `src`: Source interleaved image
/// * `src_stride`: Source stride (elements per row)
/// * `position`: Channel index in range `0..4`
///
/// returns: Result<(), ColorError>
///
pub fn extract_channel_u32(
    dst: &mut PlaneImageMut<u8>,
    src: &[u8],
    src_stride: u32,
    position: usize,
) -> Result<(), ColorError> {
    extract_impl::<4>(dst, src, src_stride, position)
}

/// Splits interleaved three channel image into three planes of the same size.
pub fn split_u24_to_planes<'a>(
    src: &[u8],
    src_stride: u32,
    dst0: &mut PlaneImageMut<'a, u8>,
    dst1: &mut PlaneImageMut<'a, u8>,
    dst2: &mut PlaneImageMut<'a, u8>,
) -> Result<(), ColorError> {
    split_impl::<3>(src, src_stride, &mut [dst0, dst1, dst2])
}

/// Splits first three channels of interleaved four channel image, last channel is skipped.
pub fn split_u32_to_three_planes<'a>(
    src: &[u8],
    src_stride: u32,
    dst0: &mut PlaneImageMut<'a, u8>,
    dst1: &mut PlaneImageMut<'a, u8>,
    dst2: &mut PlaneImageMut<'a, u8>,
) -> Result<(), ColorError> {
    split_impl::<4>(src, src_stride, &mut [dst0, dst1, dst2])
}

/// Splits interleaved four channel image into four planes of the same size.
pub fn split_u32_to_planes<'a>(
    src: &[u8],
    src_stride: u32,
    dst0: &mut PlaneImageMut<'a, u8>,
    dst1: &mut PlaneImageMut<'a, u8>,
    dst2: &mut PlaneImageMut<'a, u8>,
    dst3: &mut PlaneImageMut<'a, u8>,
) -> Result<(), ColorError> {
    split_impl::<4>(src, src_stride, &mut [dst0, dst1, dst2, dst3])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::BufferStoreMut;
    use rand::Rng;

    #[test]
    fn extracts_every_position() {
        let width = 9u32;
        let height = 4u32;
        let mut rng = rand::rng();
        let src: Vec<u8> = (0..width * height * 4).map(|_| rng.random()).collect();
        for position in 0..4 {
            let mut dst = PlaneImageMut::<u8>::alloc(width, height);
            extract_channel_u32(&mut dst, &src, width * 4, position).unwrap();
            for (v, px) in dst.plane.borrow().iter().zip(src.chunks_exact(4)) {
                assert_eq!(*v, px[position]);
            }
        }
    }

    #[test]
    fn u16_extract_with_padded_source() {
        let src = [1u8, 2, 3, 4, 0, 0, 5, 6, 7, 8, 0, 0];
        let mut dst = PlaneImageMut::<u8>::alloc(2, 2);
        extract_channel_u16(&mut dst, &src, 6, 1).unwrap();
        assert_eq!(dst.plane.borrow(), &[2, 4, 6, 8]);
    }

    #[test]
    fn rejects_missing_position() {
        let src = [0u8; 12];
        let mut dst = PlaneImageMut::<u8>::alloc(2, 2);
        assert_eq!(
            extract_channel_u24(&mut dst, &src, 6, 3),
            Err(ColorError::InvalidChannelPosition {
                position: 3,
                channels: 3
            })
        );
    }

    #[test]
    fn split_u24_matches_extract() {
        let width = 5u32;
        let height = 3u32;
        let mut rng = rand::rng();
        let src: Vec<u8> = (0..width * height * 3).map(|_| rng.random()).collect();
        let mut r = PlaneImageMut::<u8>::alloc(width, height);
        let mut g = PlaneImageMut::<u8>::alloc(width, height);
        let mut b = PlaneImageMut::<u8>::alloc(width, height);
        split_u24_to_planes(&src, width * 3, &mut r, &mut g, &mut b).unwrap();
        for (i, px) in src.chunks_exact(3).enumerate() {
            assert_eq!(r.plane.borrow()[i], px[0]);
            assert_eq!(g.plane.borrow()[i], px[1]);
            assert_eq!(b.plane.borrow()[i], px[2]);
        }
    }

    #[test]
    fn split_u32_to_three_skips_last_channel() {
        let src = [10u8, 20, 30, 40, 11, 21, 31, 41];
        let mut p0 = PlaneImageMut::<u8>::alloc(2, 1);
        let mut p1 = PlaneImageMut::<u8>::alloc(2, 1);
        let mut p2 = PlaneImageMut::<u8>::alloc(2, 1);
        split_u32_to_three_planes(&src, 8, &mut p0, &mut p1, &mut p2).unwrap();
        assert_eq!(p0.plane.borrow(), &[10, 11]);
        assert_eq!(p1.plane.borrow(), &[20, 21]);
        assert_eq!(p2.plane.borrow(), &[30, 31]);
    }

    #[test]
    fn split_rejects_mismatched_planes() {
        let src = [0u8; 16];
        let mut p0 = PlaneImageMut::<u8>::alloc(2, 2);
        let mut p1 = PlaneImageMut::<u8>::alloc(2, 2);
        let mut p2 = PlaneImageMut::<u8>::alloc(2, 2);
        let mut p3 = PlaneImageMut::<u8>::alloc(1, 2);
        assert!(split_u32_to_planes(&src, 8, &mut p0, &mut p1, &mut p2, &mut p3).is_err());
    }

    #[test]
    fn split_leaves_planes_untouched_on_bad_plane() {
        let src = [7u8; 12];
        let mut p0 = PlaneImageMut::<u8>::alloc(2, 2);
        let mut p1 = PlaneImageMut::<u8>::alloc(2, 2);
        let mut p2 = PlaneImageMut {
            plane: BufferStoreMut::Owned(vec![0u8; 3]),
            stride: 2,
            width: 2,
            height: 2,
        };
        assert!(split_u24_to_planes(&src, 6, &mut p0, &mut p1, &mut p2).is_err());
        assert_eq!(p0.plane.borrow(), &[0; 4]);
        assert_eq!(p1.plane.borrow(), &[0; 4]);
    }
}
