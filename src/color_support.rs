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
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct ForwardTransform<T> {
    pub yr: T,
    pub yg: T,
    pub yb: T,
    pub cb_r: T,
    pub cb_g: T,
    pub cb_b: T,
    pub cr_r: T,
    pub cr_g: T,
    pub cr_b: T,
}

/// Inverse transform, green is reconstructed as `Y - g_coeff_1 * Cr - g_coeff_2 * Cb`
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct InverseTransform<T> {
    pub cr_coef: T,
    pub cb_coef: T,
    pub g_coeff_1: T,
    pub g_coeff_2: T,
}

/// Full range matrices, chroma is centered at 128.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Default)]
pub enum ColorMatrix {
    #[default]
    Bt709,
    Bt601,
}

impl ColorMatrix {
    pub const fn forward_transform(&self) -> ForwardTransform<f32> {
        match self {
            ColorMatrix::Bt709 => ForwardTransform {
                yr: 0.2126,
                yg: 0.7152,
                yb: 0.0722,
                cb_r: -0.1146,
                cb_g: -0.3854,
                cb_b: 0.5,
                cr_r: 0.5,
                cr_g: -0.4542,
                cr_b: -0.0458,
            },
            ColorMatrix::Bt601 => ForwardTransform {
                yr: 0.299,
                yg: 0.587,
                yb: 0.114,
                cb_r: -0.1687,
                cb_g: -0.3313,
                cb_b: 0.5,
                cr_r: 0.5,
                cr_g: -0.4187,
                cr_b: -0.0813,
            },
        }
    }

    pub const fn inverse_transform(&self) -> InverseTransform<f32> {
        match self {
            ColorMatrix::Bt709 => InverseTransform {
                cr_coef: 1.5748,
                cb_coef: 1.8556,
                g_coeff_1: 0.4681,
                g_coeff_2: 0.1873,
            },
            ColorMatrix::Bt601 => InverseTransform {
                cr_coef: 1.402,
                cb_coef: 1.772,
                g_coeff_1: 0.7141,
                g_coeff_2: 0.3441,
            },
        }
    }
}

pub(crate) const CHROMA_BIAS: f32 = 128.;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RgbChannels {
    Rgb = 0,
    Rgbx = 1,
}

impl From<u8> for RgbChannels {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => RgbChannels::Rgb,
            1 => RgbChannels::Rgbx,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl RgbChannels {
    #[inline(always)]
    pub const fn get_channels_count(&self) -> usize {
        match self {
            RgbChannels::Rgb => 3,
            RgbChannels::Rgbx => 4,
        }
    }

    #[inline(always)]
    pub const fn has_padding(&self) -> bool {
        match self {
            RgbChannels::Rgb => false,
            RgbChannels::Rgbx => true,
        }
    }

    #[inline(always)]
    pub const fn get_r_channel_offset(&self) -> usize {
        0
    }

    #[inline(always)]
    pub const fn get_g_channel_offset(&self) -> usize {
        1
    }

    #[inline(always)]
    pub const fn get_b_channel_offset(&self) -> usize {
        2
    }

    #[inline(always)]
    pub const fn get_x_channel_offset(&self) -> usize {
        3
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PackedYuvLayout {
    Yuyv = 0,
    Uyvy = 1,
}

impl From<u8> for PackedYuvLayout {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => PackedYuvLayout::Yuyv,
            1 => PackedYuvLayout::Uyvy,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl PackedYuvLayout {
    #[inline]
    pub(crate) const fn get_u_position(&self) -> usize {
        match self {
            PackedYuvLayout::Yuyv => 1,
            PackedYuvLayout::Uyvy => 0,
        }
    }

    #[inline]
    pub(crate) const fn get_v_position(&self) -> usize {
        match self {
            PackedYuvLayout::Yuyv => 3,
            PackedYuvLayout::Uyvy => 2,
        }
    }

    #[inline(always)]
    pub(crate) const fn get_first_y_position(&self) -> usize {
        match self {
            PackedYuvLayout::Yuyv => 0,
            PackedYuvLayout::Uyvy => 1,
        }
    }

    #[inline]
    pub(crate) const fn get_second_y_position(&self) -> usize {
        match self {
            PackedYuvLayout::Yuyv => 2,
            PackedYuvLayout::Uyvy => 3,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum UvOrder {
    Uv = 0,
    Vu = 1,
}

impl From<u8> for UvOrder {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => UvOrder::Uv,
            1 => UvOrder::Vu,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl UvOrder {
    #[inline(always)]
    pub const fn get_u_position(&self) -> usize {
        match self {
            UvOrder::Uv => 0,
            UvOrder::Vu => 1,
        }
    }

    #[inline(always)]
    pub const fn get_v_position(&self) -> usize {
        match self {
            UvOrder::Uv => 1,
            UvOrder::Vu => 0,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChromaSubsampling {
    Yuv420 = 0,
    Yuv422 = 1,
    Yuv444 = 2,
}

impl From<u8> for ChromaSubsampling {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => ChromaSubsampling::Yuv420,
            1 => ChromaSubsampling::Yuv422,
            2 => ChromaSubsampling::Yuv444,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl ChromaSubsampling {
    /// Width of one chroma plane, odd widths round up
    #[inline]
    pub const fn chroma_width(&self, width: u32) -> u32 {
        match self {
            ChromaSubsampling::Yuv420 | ChromaSubsampling::Yuv422 => width.div_ceil(2),
            ChromaSubsampling::Yuv444 => width,
        }
    }

    #[inline]
    pub const fn chroma_height(&self, height: u32) -> u32 {
        match self {
            ChromaSubsampling::Yuv420 => height.div_ceil(2),
            ChromaSubsampling::Yuv422 | ChromaSubsampling::Yuv444 => height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_rows_keep_grey_neutral() {
        for matrix in [ColorMatrix::Bt709, ColorMatrix::Bt601] {
            let t = matrix.forward_transform();
            assert!((t.yr + t.yg + t.yb - 1.).abs() < 1e-3);
            assert!((t.cb_r + t.cb_g + t.cb_b).abs() < 1e-3);
            assert!((t.cr_r + t.cr_g + t.cr_b).abs() < 1e-3);
        }
    }

    #[test]
    fn odd_dimensions_round_up() {
        assert_eq!(ChromaSubsampling::Yuv420.chroma_width(5), 3);
        assert_eq!(ChromaSubsampling::Yuv420.chroma_height(5), 3);
        assert_eq!(ChromaSubsampling::Yuv422.chroma_height(5), 5);
        assert_eq!(ChromaSubsampling::Yuv444.chroma_width(5), 5);
    }

    #[test]
    fn packed_layout_positions() {
        let uyvy = PackedYuvLayout::Uyvy;
        assert_eq!(
            [
                uyvy.get_u_position(),
                uyvy.get_first_y_position(),
                uyvy.get_v_position(),
                uyvy.get_second_y_position()
            ],
            [0, 1, 2, 3]
        );
        let yuyv = PackedYuvLayout::Yuyv;
        assert_eq!(
            [
                yuyv.get_first_y_position(),
                yuyv.get_u_position(),
                yuyv.get_second_y_position(),
                yuyv.get_v_position()
            ],
            [0, 1, 2, 3]
        );
    }
}
