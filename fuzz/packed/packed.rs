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

#![no_main]

use libfuzzer_sys::fuzz_target;
use vxcolor::{
    combine_uyvy, combine_yuyv, uyvy_to_nv12, uyvy_to_rgbx, yuyv_to_iyuv, yuyv_to_rgb,
    ChromaSubsampling, ColorMatrix, YuvBiPlanarImageMut, YuvPlanarImageMut,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8)| {
    fuzz_packed(data.0, data.1, data.2, data.3, data.4);
});

fn fuzz_packed(i_width: u8, i_height: u8, y_value: u8, u_value: u8, v_value: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let width = i_width as u32;
    let height = i_height as u32;
    let mut planar422 = YuvPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv422);
    planar422.y_plane.borrow_mut().fill(y_value);
    planar422.u_plane.borrow_mut().fill(u_value);
    planar422.v_plane.borrow_mut().fill(v_value);

    let packed_stride = width.div_ceil(2) * 4;
    let mut uyvy = vec![0u8; packed_stride as usize * height as usize];
    let mut yuyv = vec![0u8; packed_stride as usize * height as usize];
    combine_uyvy(&planar422.to_fixed(), &mut uyvy, packed_stride).unwrap();
    combine_yuyv(&planar422.to_fixed(), &mut yuyv, packed_stride).unwrap();

    let mut rgb = vec![0u8; width as usize * height as usize * 3];
    yuyv_to_rgb(
        &yuyv,
        packed_stride,
        &mut rgb,
        width * 3,
        width,
        height,
        ColorMatrix::Bt709,
    )
    .unwrap();
    let mut rgbx = vec![0u8; width as usize * height as usize * 4];
    uyvy_to_rgbx(
        &uyvy,
        packed_stride,
        &mut rgbx,
        width * 4,
        width,
        height,
        ColorMatrix::Bt601,
    )
    .unwrap();

    let mut planar420 = YuvPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv420);
    yuyv_to_iyuv(&mut planar420, &yuyv, packed_stride).unwrap();
    let mut bi_planar = YuvBiPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv420);
    uyvy_to_nv12(&mut bi_planar, &uyvy, packed_stride).unwrap();
}
