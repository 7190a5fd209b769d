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
    iyuv_to_rgb, iyuv_to_rgbx, nv12_to_rgb, nv21_to_rgbx, yuv4_to_rgb, BufferStoreMut,
    ChromaSubsampling, ColorMatrix, YuvBiPlanarImageMut, YuvPlanarImageMut,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8)| {
    fuzz_iyuv(data.0, data.1, data.2, data.3, data.4);
    fuzz_yuv4(data.0, data.1, data.2, data.3, data.4);
    fuzz_nv(data.0, data.1, data.2, data.3, data.4);
});

fn fuzz_iyuv(i_width: u8, i_height: u8, y_value: u8, u_value: u8, v_value: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let chroma_size = (i_width as usize).div_ceil(2) * (i_height as usize).div_ceil(2);
    let planar_image = YuvPlanarImageMut {
        y_plane: BufferStoreMut::Owned(vec![y_value; i_width as usize * i_height as usize]),
        y_stride: i_width as u32,
        u_plane: BufferStoreMut::Owned(vec![u_value; chroma_size]),
        u_stride: (i_width as u32).div_ceil(2),
        v_plane: BufferStoreMut::Owned(vec![v_value; chroma_size]),
        v_stride: (i_width as u32).div_ceil(2),
        width: i_width as u32,
        height: i_height as u32,
    };

    let mut target_rgb = vec![0u8; i_width as usize * i_height as usize * 3];
    iyuv_to_rgb(
        &planar_image.to_fixed(),
        &mut target_rgb,
        i_width as u32 * 3,
        ColorMatrix::Bt709,
    )
    .unwrap();

    let mut target_rgbx = vec![0u8; i_width as usize * i_height as usize * 4];
    iyuv_to_rgbx(
        &planar_image.to_fixed(),
        &mut target_rgbx,
        i_width as u32 * 4,
        ColorMatrix::Bt601,
    )
    .unwrap();
}

fn fuzz_yuv4(i_width: u8, i_height: u8, y_value: u8, u_value: u8, v_value: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let mut planar_image =
        YuvPlanarImageMut::<u8>::alloc(i_width as u32, i_height as u32, ChromaSubsampling::Yuv444);
    planar_image.y_plane.borrow_mut().fill(y_value);
    planar_image.u_plane.borrow_mut().fill(u_value);
    planar_image.v_plane.borrow_mut().fill(v_value);

    let mut target_rgb = vec![0u8; i_width as usize * i_height as usize * 3];
    yuv4_to_rgb(
        &planar_image.to_fixed(),
        &mut target_rgb,
        i_width as u32 * 3,
        ColorMatrix::Bt709,
    )
    .unwrap();
}

fn fuzz_nv(i_width: u8, i_height: u8, y_value: u8, u_value: u8, v_value: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let mut bi_planar_image = YuvBiPlanarImageMut::<u8>::alloc(
        i_width as u32,
        i_height as u32,
        ChromaSubsampling::Yuv420,
    );
    bi_planar_image.y_plane.borrow_mut().fill(y_value);
    for pair in bi_planar_image.uv_plane.borrow_mut().chunks_exact_mut(2) {
        pair[0] = u_value;
        pair[1] = v_value;
    }

    let mut target_rgb = vec![0u8; i_width as usize * i_height as usize * 3];
    nv12_to_rgb(
        &bi_planar_image.to_fixed(),
        &mut target_rgb,
        i_width as u32 * 3,
        ColorMatrix::Bt709,
    )
    .unwrap();

    let mut target_rgbx = vec![0u8; i_width as usize * i_height as usize * 4];
    nv21_to_rgbx(
        &bi_planar_image.to_fixed(),
        &mut target_rgbx,
        i_width as u32 * 4,
        ColorMatrix::Bt709,
    )
    .unwrap();
}
