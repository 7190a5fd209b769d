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
use crate::ColorError;
use rand::distr::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scalar parameter of an augmentation node, either fixed or drawn per image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FloatParam {
    Fixed(f32),
    Uniform { min: f32, max: f32 },
}

impl FloatParam {
    /// Values and the width of a uniform range must be finite.
    pub fn check(&self) -> Result<(), ColorError> {
        match *self {
            FloatParam::Fixed(value) => check_finite(value),
            FloatParam::Uniform { min, max } => {
                check_finite(min)?;
                check_finite(max)?;
                if min < max {
                    check_finite(max - min)?;
                }
                Ok(())
            }
        }
    }

    /// Current value, uniform parameters produce a fresh draw each call.
    pub fn core<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f32, ColorError> {
        match *self {
            FloatParam::Fixed(value) => Ok(value),
            FloatParam::Uniform { min, max } => {
                if min < max {
                    let range = Uniform::new_inclusive(min, max)
                        .map_err(|_| ColorError::InvalidFactor(max - min))?;
                    Ok(rng.sample(range))
                } else {
                    Ok(min)
                }
            }
        }
    }
}

#[inline]
fn check_finite(value: f32) -> Result<(), ColorError> {
    if !value.is_finite() {
        return Err(ColorError::InvalidFactor(value));
    }
    Ok(())
}

/// Per image values of one node parameter.
#[derive(Debug)]
pub struct ParameterArray {
    param: FloatParam,
    values: Vec<f32>,
    rng: StdRng,
}

impl ParameterArray {
    pub fn new(param: FloatParam) -> Self {
        ParameterArray {
            param,
            values: Vec::new(),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Deterministic draws, used for reproducible pipelines
    pub fn with_seed(param: FloatParam, seed: u64) -> Self {
        ParameterArray {
            param,
            values: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn create_array(&mut self, batch_size: usize) -> Result<(), ColorError> {
        if batch_size == 0 {
            return Err(ColorError::ZeroBaseSize);
        }
        self.values = vec![0.; batch_size];
        self.update_array()
    }

    /// Replaces the parameter, an invalid one leaves the previous in place.
    pub fn set_param(&mut self, param: FloatParam) -> Result<(), ColorError> {
        param.check()?;
        self.param = param;
        Ok(())
    }

    pub fn param(&self) -> FloatParam {
        self.param
    }

    pub fn update_array(&mut self) -> Result<(), ColorError> {
        let param = self.param;
        for value in self.values.iter_mut() {
            *value = param.core(&mut self.rng)?;
        }
        Ok(())
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}
