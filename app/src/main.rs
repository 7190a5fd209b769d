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
mod max_divergence;

use max_divergence::max_divergence;
use rand::Rng;
use std::time::Instant;
use vxcolor::node::{FloatParam, SaturationNode};
use vxcolor::{
    iyuv_to_rgb, nv12_to_rgb, rgb_to_iyuv, rgb_to_nv12, rgb_to_yuv4, yuv4_to_rgb, BatchLayout,
    ChromaSubsampling, ColorMatrix, ImageBatch, ImageBatchMut, Roi, YuvBiPlanarImageMut,
    YuvPlanarImageMut,
};

fn gradient(width: u32, height: u32) -> Vec<u8> {
    let mut rng = rand::rng();
    let mut rgb = vec![0u8; width as usize * height as usize * 3];
    for (y, row) in rgb.chunks_exact_mut(width as usize * 3).enumerate() {
        for (x, px) in row.chunks_exact_mut(3).enumerate() {
            px[0] = (x * 255 / width as usize) as u8;
            px[1] = (y * 255 / height as usize) as u8;
            px[2] = rng.random_range(96..160);
        }
    }
    rgb
}

fn main() {
    let width = 1921u32;
    let height = 1081u32;
    let stride = width * 3;
    let src = gradient(width, height);
    let mut restored = vec![0u8; src.len()];

    let mut planar = YuvPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv444);
    let start = Instant::now();
    rgb_to_yuv4(&mut planar, &src, stride, ColorMatrix::Bt709).unwrap();
    yuv4_to_rgb(&planar.to_fixed(), &mut restored, stride, ColorMatrix::Bt709).unwrap();
    println!(
        "YUV4 round trip {:?}, max divergence {:?}",
        start.elapsed(),
        max_divergence(&src, &restored, 3)
    );

    let mut planar = YuvPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv420);
    let start = Instant::now();
    rgb_to_iyuv(&mut planar, &src, stride, ColorMatrix::Bt709).unwrap();
    iyuv_to_rgb(&planar.to_fixed(), &mut restored, stride, ColorMatrix::Bt709).unwrap();
    println!(
        "IYUV round trip {:?}, max divergence {:?}",
        start.elapsed(),
        max_divergence(&src, &restored, 3)
    );

    let mut bi_planar = YuvBiPlanarImageMut::<u8>::alloc(width, height, ChromaSubsampling::Yuv420);
    let start = Instant::now();
    rgb_to_nv12(&mut bi_planar, &src, stride, ColorMatrix::Bt601).unwrap();
    nv12_to_rgb(&bi_planar.to_fixed(), &mut restored, stride, ColorMatrix::Bt601).unwrap();
    println!(
        "NV12 round trip {:?}, max divergence {:?}",
        start.elapsed(),
        max_divergence(&src, &restored, 3)
    );

    let batch_size = 4usize;
    let batch_data = src.repeat(batch_size);
    let rois = vec![
        Roi {
            width: width / 2,
            height: height / 2,
        };
        batch_size
    ];
    let input = ImageBatch {
        data: &batch_data,
        stride,
        width,
        height,
        layout: BatchLayout::Rgb,
        batch_size,
        rois: &rois,
    };
    let mut output = ImageBatchMut::alloc(width, height, BatchLayout::Rgb, batch_size).unwrap();

    let mut node = SaturationNode::new(batch_size);
    node.init_param(FloatParam::Uniform { min: 0.5, max: 2. })
        .unwrap();
    node.create().unwrap();
    for _ in 0..3 {
        node.update().unwrap();
        let start = Instant::now();
        node.run(&input, &mut output).unwrap();
        println!(
            "Saturation batch {:?} with factors {:?}",
            start.elapsed(),
            node.factors()
        );
    }
}
