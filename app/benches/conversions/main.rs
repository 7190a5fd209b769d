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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use vxcolor::{
    adjust_saturation, combine_uyvy, extract_channel_u24, iyuv_to_rgb, nv12_to_rgb, rgb_to_iyuv,
    rgb_to_nv12, rgb_to_rgbx, uyvy_to_iyuv, uyvy_to_rgb, ChromaSubsampling, ColorMatrix,
    PlaneImageMut, RgbChannels, YuvBiPlanarImageMut, YuvPlanarImageMut,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920u32;
    let height = 1080u32;
    let stride = width * 3;
    let mut rng = rand::rng();
    let src_bytes: Vec<u8> = (0..stride as usize * height as usize)
        .map(|_| rng.random())
        .collect();

    let mut planar_image =
        YuvPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv420);
    rgb_to_iyuv(&mut planar_image, &src_bytes, stride, ColorMatrix::Bt709).unwrap();
    let fixed_planar = planar_image.to_fixed();

    let mut bi_planar_image =
        YuvBiPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv420);
    rgb_to_nv12(&mut bi_planar_image, &src_bytes, stride, ColorMatrix::Bt709).unwrap();
    let fixed_bi_planar = bi_planar_image.to_fixed();

    let mut planar422 = YuvPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv422);
    planar422.u_plane.borrow_mut().fill(90);
    planar422.v_plane.borrow_mut().fill(170);
    let uyvy_stride = width.div_ceil(2) * 4;
    let mut uyvy = vec![0u8; uyvy_stride as usize * height as usize];
    combine_uyvy(&planar422.to_fixed(), &mut uyvy, uyvy_stride).unwrap();

    c.bench_function("vxcolor RGB -> IYUV", |b| {
        let mut test_planar =
            YuvPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv420);
        b.iter(|| {
            rgb_to_iyuv(&mut test_planar, &src_bytes, stride, ColorMatrix::Bt709).unwrap();
        })
    });

    c.bench_function("vxcolor IYUV -> RGB", |b| {
        let mut rgb_bytes = vec![0u8; src_bytes.len()];
        b.iter(|| {
            iyuv_to_rgb(&fixed_planar, &mut rgb_bytes, stride, ColorMatrix::Bt709).unwrap();
        })
    });

    c.bench_function("vxcolor RGB -> NV12", |b| {
        let mut test_bi_planar =
            YuvBiPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv420);
        b.iter(|| {
            rgb_to_nv12(&mut test_bi_planar, &src_bytes, stride, ColorMatrix::Bt709).unwrap();
        })
    });

    c.bench_function("vxcolor NV12 -> RGB", |b| {
        let mut rgb_bytes = vec![0u8; src_bytes.len()];
        b.iter(|| {
            nv12_to_rgb(&fixed_bi_planar, &mut rgb_bytes, stride, ColorMatrix::Bt709).unwrap();
        })
    });

    c.bench_function("vxcolor UYVY -> RGB", |b| {
        let mut rgb_bytes = vec![0u8; src_bytes.len()];
        b.iter(|| {
            uyvy_to_rgb(
                &uyvy,
                uyvy_stride,
                &mut rgb_bytes,
                stride,
                width,
                height,
                ColorMatrix::Bt709,
            )
            .unwrap();
        })
    });

    c.bench_function("vxcolor UYVY -> IYUV", |b| {
        let mut test_planar =
            YuvPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv420);
        b.iter(|| {
            uyvy_to_iyuv(&mut test_planar, &uyvy, uyvy_stride).unwrap();
        })
    });

    c.bench_function("vxcolor RGB -> RGBX", |b| {
        let mut rgbx_bytes = vec![0u8; width as usize * 4 * height as usize];
        b.iter(|| {
            rgb_to_rgbx(&src_bytes, stride, &mut rgbx_bytes, width * 4, width, height).unwrap();
        })
    });

    c.bench_function("vxcolor extract G", |b| {
        let mut plane = PlaneImageMut::<u8>::alloc(width, height);
        b.iter(|| {
            extract_channel_u24(&mut plane, &src_bytes, stride, 1).unwrap();
        })
    });

    c.bench_function("vxcolor saturation x1.5", |b| {
        let mut rgb_bytes = vec![0u8; src_bytes.len()];
        b.iter(|| {
            adjust_saturation(
                &src_bytes,
                stride,
                &mut rgb_bytes,
                stride,
                width,
                height,
                RgbChannels::Rgb,
                1.5,
            )
            .unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
