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
use crate::color_support::{ForwardTransform, InverseTransform, CHROMA_BIAS};

#[inline(always)]
/// Saturating conversion to u8, rounds to nearest with ties to even, NaN becomes 0
pub(crate) fn pack_u8(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round_ties_even().clamp(0., 255.) as u8
}

#[inline(always)]
/// Rounding average of two bytes
pub(crate) fn avg_round(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16 + 1) >> 1) as u8
}

#[inline(always)]
pub(crate) fn rgb_to_y(transform: &ForwardTransform<f32>, r: f32, g: f32, b: f32) -> u8 {
    pack_u8(transform.yr * r + transform.yg * g + transform.yb * b)
}

#[inline(always)]
pub(crate) fn rgb_to_u(transform: &ForwardTransform<f32>, r: f32, g: f32, b: f32) -> u8 {
    pack_u8(transform.cb_r * r + transform.cb_g * g + transform.cb_b * b + CHROMA_BIAS)
}

#[inline(always)]
pub(crate) fn rgb_to_v(transform: &ForwardTransform<f32>, r: f32, g: f32, b: f32) -> u8 {
    pack_u8(transform.cr_r * r + transform.cr_g * g + transform.cr_b * b + CHROMA_BIAS)
}

#[inline(always)]
/// Evaluates inverse matrix with fused multiply-add, returns packed `[R, G, B]`
pub(crate) fn yuv_to_rgb(transform: &InverseTransform<f32>, y: u8, u: u8, v: u8) -> [u8; 3] {
    let y = y as f32;
    let u = u as f32 - CHROMA_BIAS;
    let v = v as f32 - CHROMA_BIAS;
    let r = transform.cr_coef.mul_add(v, y);
    let g = (-transform.g_coeff_1).mul_add(v, (-transform.g_coeff_2).mul_add(u, y));
    let b = transform.cb_coef.mul_add(u, y);
    [pack_u8(r), pack_u8(g), pack_u8(b)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorMatrix;

    #[test]
    fn pack_rounds_half_to_even() {
        assert_eq!(pack_u8(0.5), 0);
        assert_eq!(pack_u8(1.5), 2);
        assert_eq!(pack_u8(2.5), 2);
        assert_eq!(pack_u8(2.51), 3);
        assert_eq!(pack_u8(254.5), 254);
    }

    #[test]
    fn pack_saturates() {
        assert_eq!(pack_u8(-3.7), 0);
        assert_eq!(pack_u8(255.6), 255);
        assert_eq!(pack_u8(1e9), 255);
        assert_eq!(pack_u8(f32::NAN), 0);
    }

    #[test]
    fn average_rounds_up() {
        assert_eq!(avg_round(0, 1), 1);
        assert_eq!(avg_round(2, 3), 3);
        assert_eq!(avg_round(255, 255), 255);
        assert_eq!(avg_round(0, 255), 128);
    }

    #[test]
    fn neutral_chroma_is_grey() {
        let inverse = ColorMatrix::Bt709.inverse_transform();
        for y in [0u8, 17, 128, 255] {
            assert_eq!(yuv_to_rgb(&inverse, y, 128, 128), [y, y, y]);
        }
    }

    #[test]
    fn bt709_known_values() {
        let forward = ColorMatrix::Bt709.forward_transform();
        assert_eq!(rgb_to_y(&forward, 255., 255., 255.), 255);
        assert_eq!(rgb_to_u(&forward, 255., 255., 255.), 128);
        assert_eq!(rgb_to_v(&forward, 255., 255., 255.), 128);
        // 0.2126 * 255 = 54.213
        assert_eq!(rgb_to_y(&forward, 255., 0., 0.), 54);
        // -0.1146 * 255 + 128 = 98.777
        assert_eq!(rgb_to_u(&forward, 255., 0., 0.), 99);
        assert_eq!(rgb_to_v(&forward, 255., 0., 0.), 255);
    }

    #[test]
    fn bt601_known_values() {
        let forward = ColorMatrix::Bt601.forward_transform();
        assert_eq!(rgb_to_y(&forward, 255., 255., 255.), 255);
        assert_eq!(rgb_to_u(&forward, 255., 255., 255.), 128);
        assert_eq!(rgb_to_v(&forward, 255., 255., 255.), 128);
        // 0.299 * 255 = 76.245, -0.1687 * 255 + 128 = 84.98
        assert_eq!(rgb_to_y(&forward, 255., 0., 0.), 76);
        assert_eq!(rgb_to_u(&forward, 255., 0., 0.), 85);
        assert_eq!(rgb_to_v(&forward, 255., 0., 0.), 255);
        // 0.587 * 255 = 149.685, -0.3313 * 255 + 128 = 43.52, -0.4187 * 255 + 128 = 21.23
        assert_eq!(rgb_to_y(&forward, 0., 255., 0.), 150);
        assert_eq!(rgb_to_u(&forward, 0., 255., 0.), 44);
        assert_eq!(rgb_to_v(&forward, 0., 255., 0.), 21);
        // 0.114 * 255 = 29.07, -0.0813 * 255 + 128 = 107.27
        assert_eq!(rgb_to_y(&forward, 0., 0., 255.), 29);
        assert_eq!(rgb_to_u(&forward, 0., 0., 255.), 255);
        assert_eq!(rgb_to_v(&forward, 0., 0., 255.), 107);

        let inverse = ColorMatrix::Bt601.inverse_transform();
        // R = 76 + 1.402 * 127, B = 76 - 1.772 * 43
        assert_eq!(yuv_to_rgb(&inverse, 76, 85, 255), [254, 0, 0]);
        for y in [0u8, 17, 128, 255] {
            assert_eq!(yuv_to_rgb(&inverse, y, 128, 128), [y, y, y]);
        }
    }
}
