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
    rgb_to_iyuv, rgb_to_nv12, rgb_to_nv21, rgb_to_yuv4, rgbx_to_iyuv, rgbx_to_nv12,
    rgbx_to_yuv4, ChromaSubsampling, ColorMatrix, YuvBiPlanarImageMut, YuvPlanarImageMut,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8, bool)| {
    let matrix = if data.5 {
        ColorMatrix::Bt601
    } else {
        ColorMatrix::Bt709
    };
    fuzz_planar(data.0, data.1, [data.2, data.3, data.4], matrix, ChromaSubsampling::Yuv420);
    fuzz_planar(data.0, data.1, [data.2, data.3, data.4], matrix, ChromaSubsampling::Yuv444);
    fuzz_bi_planar(data.0, data.1, [data.2, data.3, data.4], matrix);
});

fn fuzz_planar(
    i_width: u8,
    i_height: u8,
    rgb: [u8; 3],
    matrix: ColorMatrix,
    subsampling: ChromaSubsampling,
) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let mut planar_image =
        YuvPlanarImageMut::<u8>::alloc(i_width as u32, i_height as u32, subsampling);

    let src_rgb = rgb.repeat(i_width as usize * i_height as usize);
    let src_rgbx = [rgb[0], rgb[1], rgb[2], 255].repeat(i_width as usize * i_height as usize);

    if subsampling == ChromaSubsampling::Yuv420 {
        rgb_to_iyuv(&mut planar_image, &src_rgb, i_width as u32 * 3, matrix).unwrap();
        rgbx_to_iyuv(&mut planar_image, &src_rgbx, i_width as u32 * 4, matrix).unwrap();
    } else {
        rgb_to_yuv4(&mut planar_image, &src_rgb, i_width as u32 * 3, matrix).unwrap();
        rgbx_to_yuv4(&mut planar_image, &src_rgbx, i_width as u32 * 4, matrix).unwrap();
    }
}

fn fuzz_bi_planar(i_width: u8, i_height: u8, rgb: [u8; 3], matrix: ColorMatrix) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let mut bi_planar_image = YuvBiPlanarImageMut::<u8>::alloc(
        i_width as u32,
        i_height as u32,
        ChromaSubsampling::Yuv420,
    );

    let src_rgb = rgb.repeat(i_width as usize * i_height as usize);
    let src_rgbx = [rgb[0], rgb[1], rgb[2], 0].repeat(i_width as usize * i_height as usize);

    rgb_to_nv12(&mut bi_planar_image, &src_rgb, i_width as u32 * 3, matrix).unwrap();
    rgb_to_nv21(&mut bi_planar_image, &src_rgb, i_width as u32 * 3, matrix).unwrap();
    rgbx_to_nv12(&mut bi_planar_image, &src_rgbx, i_width as u32 * 4, matrix).unwrap();
}
