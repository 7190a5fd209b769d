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
use vxcolor::node::SaturationNode;
use vxcolor::{BatchLayout, ImageBatch, ImageBatchMut, Roi};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u64)| {
    fuzz_saturation(data.0, data.1, data.2, data.3, data.4, data.5);
});

fn fuzz_saturation(i_width: u8, i_height: u8, batch: u8, roi_w: u8, value: u8, seed: u64) {
    if i_height == 0 || i_width == 0 || batch == 0 {
        return;
    }
    let batch_size = (batch % 4) as usize + 1;
    let width = i_width as u32;
    let height = i_height as u32;
    let stride = width * 3;
    let data = vec![value; stride as usize * height as usize * batch_size];
    let rois = vec![
        Roi {
            width: (roi_w as u32 % width) + 1,
            height,
        };
        batch_size
    ];
    let input = ImageBatch {
        data: &data,
        stride,
        width,
        height,
        layout: BatchLayout::Rgb,
        batch_size,
        rois: &rois,
    };
    let mut output = ImageBatchMut::alloc(width, height, BatchLayout::Rgb, batch_size).unwrap();
    let mut node = SaturationNode::with_seed(batch_size, seed);
    node.create().unwrap();
    node.update().unwrap();
    node.run(&input, &mut output).unwrap();
}
