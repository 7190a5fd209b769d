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
mod channel_combine;
mod channel_extract;
mod chroma;
mod color_depth;
mod color_error;
mod color_support;
mod images;
pub mod node;
mod numerics;
mod packed_to_rgb;
mod packed_to_yuv;
mod rgb_to_yuv;
mod saturation;
mod shuffle;
mod yuv_to_rgb;

pub use color_error::{ColorError, ImageDimensions, MismatchedSize};

pub use color_support::ChromaSubsampling;
pub use color_support::ColorMatrix;
pub use color_support::ForwardTransform;
pub use color_support::InverseTransform;
pub use color_support::PackedYuvLayout;
pub use color_support::RgbChannels;
pub use color_support::UvOrder;

pub use images::BufferStoreMut;
pub use images::{PlaneImage, PlaneImageMut};
pub use images::{YuvBiPlanarImage, YuvBiPlanarImageMut};
pub use images::{YuvPlanarImage, YuvPlanarImageMut};

pub use color_depth::convert_depth_s16_u8;
pub use color_depth::convert_depth_u8_s16_saturate;
pub use color_depth::convert_depth_u8_s16_wrap;

pub use channel_extract::extract_channel_u16;
pub use channel_extract::extract_channel_u24;
pub use channel_extract::extract_channel_u32;
pub use channel_extract::split_u24_to_planes;
pub use channel_extract::split_u32_to_planes;
pub use channel_extract::split_u32_to_three_planes;

pub use channel_combine::combine_u16;
pub use channel_combine::combine_u24;
pub use channel_combine::combine_u32;
pub use channel_combine::combine_uyvy;
pub use channel_combine::combine_yuyv;

pub use shuffle::rgb_to_rgbx;
pub use shuffle::rgbx_to_rgb;

pub use packed_to_rgb::uyvy_to_rgb;
pub use packed_to_rgb::uyvy_to_rgbx;
pub use packed_to_rgb::yuyv_to_rgb;
pub use packed_to_rgb::yuyv_to_rgbx;

pub use yuv_to_rgb::iyuv_to_rgb;
pub use yuv_to_rgb::iyuv_to_rgbx;
pub use yuv_to_rgb::nv12_to_rgb;
pub use yuv_to_rgb::nv12_to_rgbx;
pub use yuv_to_rgb::nv21_to_rgb;
pub use yuv_to_rgb::nv21_to_rgbx;
pub use yuv_to_rgb::yuv4_to_rgb;
pub use yuv_to_rgb::yuv4_to_rgbx;

pub use rgb_to_yuv::rgb_to_iyuv;
pub use rgb_to_yuv::rgb_to_nv12;
pub use rgb_to_yuv::rgb_to_nv21;
pub use rgb_to_yuv::rgb_to_yuv4;
pub use rgb_to_yuv::rgbx_to_iyuv;
pub use rgb_to_yuv::rgbx_to_nv12;
pub use rgb_to_yuv::rgbx_to_nv21;
pub use rgb_to_yuv::rgbx_to_yuv4;
pub use rgb_to_yuv::rgb_to_yuv422;
pub use rgb_to_yuv::rgbx_to_yuv422;

pub use packed_to_yuv::uyvy_to_iyuv;
pub use packed_to_yuv::uyvy_to_nv12;
pub use packed_to_yuv::uyvy_to_nv21;
pub use packed_to_yuv::yuyv_to_iyuv;
pub use packed_to_yuv::yuyv_to_nv12;
pub use packed_to_yuv::yuyv_to_nv21;

pub use chroma::deinterleave_uv;
pub use chroma::interleave_uv;
pub use chroma::scale_up_2x2;
pub use chroma::upsample_uv;

pub use saturation::adjust_saturation;
pub use saturation::saturation_batch;
pub use saturation::{BatchLayout, ImageBatch, ImageBatchMut, Roi};
