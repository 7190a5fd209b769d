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
use crate::color_error::MismatchedSize;
use crate::node::param::{FloatParam, ParameterArray};
use crate::saturation::{saturation_batch, ImageBatch, ImageBatchMut};
use crate::ColorError;
use tracing::{debug, trace};

/// Range of the randomly drawn saturation factor
pub const SAT_RANGE: [f32; 2] = [0.1, 10.];

/// Batch saturation stage of an augmentation graph.
///
/// Lifecycle is `new` -> `init`/`init_param` -> `create` -> (`update` -> `run`)*.
#[derive(Debug)]
pub struct SaturationNode {
    batch_size: usize,
    sat: ParameterArray,
    created: bool,
}

impl SaturationNode {
    /// Node with factors drawn uniformly from [SAT_RANGE]
    pub fn new(batch_size: usize) -> Self {
        SaturationNode {
            batch_size,
            sat: ParameterArray::new(Self::default_param()),
            created: false,
        }
    }

    pub fn with_seed(batch_size: usize, seed: u64) -> Self {
        SaturationNode {
            batch_size,
            sat: ParameterArray::with_seed(Self::default_param(), seed),
            created: false,
        }
    }

    fn default_param() -> FloatParam {
        FloatParam::Uniform {
            min: SAT_RANGE[0],
            max: SAT_RANGE[1],
        }
    }

    pub fn init(&mut self, sat: f32) -> Result<(), ColorError> {
        self.init_param(FloatParam::Fixed(sat))
    }

    /// Factors must be finite and non negative, a rejected parameter keeps the previous one.
    pub fn init_param(&mut self, sat: FloatParam) -> Result<(), ColorError> {
        let lowest = match sat {
            FloatParam::Fixed(value) => value,
            FloatParam::Uniform { min, max } => min.min(max),
        };
        if lowest < 0. {
            return Err(ColorError::InvalidFactor(lowest));
        }
        self.sat.set_param(sat)
    }

    /// Allocates per image factors, repeated calls do nothing.
    pub fn create(&mut self) -> Result<(), ColorError> {
        if self.created {
            return Ok(());
        }
        self.sat.create_array(self.batch_size)?;
        self.created = true;
        debug!(
            batch_size = self.batch_size,
            param = ?self.sat.param(),
            "Saturation node created"
        );
        Ok(())
    }

    /// Draws new factors for the next batch.
    pub fn update(&mut self) -> Result<(), ColorError> {
        if !self.created {
            return Err(ColorError::NodeNotCreated);
        }
        self.sat.update_array()?;
        trace!(factors = ?self.sat.values(), "Saturation factors updated");
        Ok(())
    }

    pub fn run(&self, input: &ImageBatch, output: &mut ImageBatchMut) -> Result<(), ColorError> {
        if !self.created {
            return Err(ColorError::NodeNotCreated);
        }
        if input.batch_size != self.batch_size {
            return Err(ColorError::BatchSizeMismatch(MismatchedSize {
                expected: self.batch_size,
                received: input.batch_size,
            }));
        }
        saturation_batch(input, output, self.sat.values())
    }

    pub fn factors(&self) -> &[f32] {
        self.sat.values()
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::saturation::{BatchLayout, Roi};

    #[test]
    fn run_requires_create() {
        let node = SaturationNode::new(1);
        let src = [10u8, 20, 30];
        let rois = [Roi {
            width: 1,
            height: 1,
        }];
        let input = ImageBatch {
            data: &src,
            stride: 3,
            width: 1,
            height: 1,
            layout: BatchLayout::Rgb,
            batch_size: 1,
            rois: &rois,
        };
        let mut output = ImageBatchMut::alloc(1, 1, BatchLayout::Rgb, 1).unwrap();
        assert_eq!(
            node.run(&input, &mut output),
            Err(ColorError::NodeNotCreated)
        );
        let mut node = node;
        assert_eq!(node.update(), Err(ColorError::NodeNotCreated));
        node.create().unwrap();
        node.run(&input, &mut output).unwrap();
    }

    #[test]
    fn fixed_factor_is_shared() {
        let mut node = SaturationNode::new(3);
        node.init(0.).unwrap();
        node.create().unwrap();
        assert_eq!(node.factors(), &[0.; 3]);
        node.update().unwrap();
        assert_eq!(node.factors(), &[0.; 3]);

        let src = [200u8, 50, 50].repeat(3);
        let rois = [Roi {
            width: 1,
            height: 1,
        }; 3];
        let input = ImageBatch {
            data: &src,
            stride: 3,
            width: 1,
            height: 1,
            layout: BatchLayout::Rgb,
            batch_size: 3,
            rois: &rois,
        };
        let mut output = ImageBatchMut::alloc(1, 1, BatchLayout::Rgb, 3).unwrap();
        node.run(&input, &mut output).unwrap();
        assert!(output
            .data
            .borrow()
            .chunks_exact(3)
            .all(|px| px == [200, 200, 200]));
    }

    #[test]
    fn default_factors_in_range() {
        let mut node = SaturationNode::with_seed(16, 3);
        node.create().unwrap();
        for _ in 0..4 {
            assert!(node
                .factors()
                .iter()
                .all(|&v| (SAT_RANGE[0]..=SAT_RANGE[1]).contains(&v)));
            node.update().unwrap();
        }
    }

    #[test]
    fn create_is_idempotent() {
        let mut node = SaturationNode::with_seed(2, 9);
        node.init_param(FloatParam::Uniform { min: 1., max: 2. })
            .unwrap();
        node.create().unwrap();
        let first = node.factors().to_vec();
        node.create().unwrap();
        assert_eq!(node.factors(), first.as_slice());
    }

    #[test]
    fn rejects_zero_batch() {
        let mut node = SaturationNode::new(0);
        assert_eq!(node.create(), Err(ColorError::ZeroBaseSize));
    }

    #[test]
    fn rejects_foreign_batch_size() {
        let mut node = SaturationNode::new(2);
        node.create().unwrap();
        let src = [0u8; 3];
        let rois = [Roi {
            width: 1,
            height: 1,
        }];
        let input = ImageBatch {
            data: &src,
            stride: 3,
            width: 1,
            height: 1,
            layout: BatchLayout::Rgb,
            batch_size: 1,
            rois: &rois,
        };
        let mut output = ImageBatchMut::alloc(1, 1, BatchLayout::Rgb, 1).unwrap();
        assert!(matches!(
            node.run(&input, &mut output),
            Err(ColorError::BatchSizeMismatch(_))
        ));
    }

    #[test]
    fn rejects_unusable_factors() {
        let mut node = SaturationNode::with_seed(2, 5);
        assert!(matches!(
            node.init_param(FloatParam::Uniform {
                min: 0.,
                max: f32::INFINITY,
            }),
            Err(ColorError::InvalidFactor(_))
        ));
        assert!(matches!(
            node.init_param(FloatParam::Uniform {
                min: -f32::MAX,
                max: f32::MAX,
            }),
            Err(ColorError::InvalidFactor(_))
        ));
        assert!(matches!(
            node.init(-1.),
            Err(ColorError::InvalidFactor(_))
        ));
        assert!(matches!(
            node.init(f32::NAN),
            Err(ColorError::InvalidFactor(_))
        ));
        node.create().unwrap();
        assert!(node
            .factors()
            .iter()
            .all(|&v| (SAT_RANGE[0]..=SAT_RANGE[1]).contains(&v)));
    }
}
