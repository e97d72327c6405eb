//! Actor-critic network using Burn framework

use std::path::Path;

use burn::module::Module;
use burn::nn::conv::{Conv2d, Conv2dConfig};
use burn::nn::pool::{AdaptiveAvgPool2d, AdaptiveAvgPool2dConfig};
use burn::nn::{Linear, LinearConfig, PaddingConfig2d, Relu};
use burn::prelude::*;
use burn::record::{FullPrecisionSettings, NamedMpkFileRecorder};
use burn::tensor::TensorData;
use burn::tensor::activation::{sigmoid, softmax};
use ndarray::{Array2, Array4};

use crate::infra::AgentError;

use super::encoder::{SCALAR_FEATURES, SPATIAL_CHANNELS};
use super::policy::{PolicyModel, PolicyOutput};

/// Configuration for the actor-critic network
#[derive(Config, Debug)]
pub struct ActorCriticConfig {
    /// Size of the discrete action space
    pub n_actions: usize,
    /// Hidden layer size of the shared trunk
    #[config(default = 128)]
    pub hidden_size: usize,
    /// Output channels of the spatial convolution
    #[config(default = 16)]
    pub conv_channels: usize,
}

impl ActorCriticConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> ActorCritic<B> {
        ActorCritic {
            scalar_input: LinearConfig::new(SCALAR_FEATURES, self.hidden_size).init(device),
            conv: Conv2dConfig::new([SPATIAL_CHANNELS, self.conv_channels], [3, 3])
                .with_padding(PaddingConfig2d::Same)
                .init(device),
            pool: AdaptiveAvgPool2dConfig::new([1, 1]).init(),
            trunk: LinearConfig::new(self.hidden_size + self.conv_channels, self.hidden_size)
                .init(device),
            value_head: LinearConfig::new(self.hidden_size, 1).init(device),
            policy_head: LinearConfig::new(self.hidden_size, self.n_actions).init(device),
            x_head: LinearConfig::new(self.hidden_size, 1).init(device),
            y_head: LinearConfig::new(self.hidden_size, 1).init(device),
            activation: Relu::new(),
        }
    }
}

/// Shared-trunk actor-critic with a scalar branch and a convolutional
/// spatial branch
#[derive(Module, Debug)]
pub struct ActorCritic<B: Backend> {
    scalar_input: Linear<B>,
    conv: Conv2d<B>,
    pool: AdaptiveAvgPool2d,
    trunk: Linear<B>,
    value_head: Linear<B>,
    policy_head: Linear<B>,
    x_head: Linear<B>,
    y_head: Linear<B>,
    activation: Relu,
}

impl<B: Backend> ActorCritic<B> {
    /// scalar: [batch, SCALAR_FEATURES], spatial: [batch, height, width, SPATIAL_CHANNELS]
    /// Returns (value [batch, 1], action probabilities [batch, n_actions],
    /// x [batch, 1], y [batch, 1]).
    pub fn forward(
        &self,
        scalar: Tensor<B, 2>,
        spatial: Tensor<B, 4>,
    ) -> (Tensor<B, 2>, Tensor<B, 2>, Tensor<B, 2>, Tensor<B, 2>) {
        let scalar = self.activation.forward(self.scalar_input.forward(scalar));

        // channels-last to channels-first for the convolution
        let spatial = spatial.permute([0, 3, 1, 2]);
        let spatial = self.activation.forward(self.conv.forward(spatial));
        let spatial: Tensor<B, 2> = self.pool.forward(spatial).flatten(1, 3);

        let x = Tensor::cat(vec![scalar, spatial], 1);
        let x = self.activation.forward(self.trunk.forward(x));

        let value = self.value_head.forward(x.clone());
        let probs = softmax(self.policy_head.forward(x.clone()), 1);
        let coord_x = sigmoid(self.x_head.forward(x.clone()));
        let coord_y = sigmoid(self.y_head.forward(x));

        (value, probs, coord_x, coord_y)
    }
}

/// `PolicyModel` backed by a Burn actor-critic network
pub struct BurnPolicy<B: Backend> {
    model: ActorCritic<B>,
    device: B::Device,
}

impl<B: Backend> BurnPolicy<B> {
    pub fn new(device: B::Device, config: &ActorCriticConfig) -> Self {
        Self {
            model: config.init(&device),
            device,
        }
    }

    pub fn model(&self) -> &ActorCritic<B> {
        &self.model
    }

    fn to_vec<const D: usize>(tensor: Tensor<B, D>) -> Result<Vec<f32>, AgentError> {
        tensor
            .into_data()
            .convert::<f32>()
            .to_vec::<f32>()
            .map_err(|err| AgentError::InvalidDistribution(format!("{:?}", err)))
    }

    fn first(values: Vec<f32>, what: &'static str) -> Result<f32, AgentError> {
        values.first().copied().ok_or(AgentError::ShapeMismatch {
            what,
            expected: vec![1],
            actual: vec![0],
        })
    }
}

impl<B: Backend> PolicyModel for BurnPolicy<B> {
    fn forward(
        &self,
        scalar: &Array2<f32>,
        spatial: &Array4<f32>,
    ) -> Result<PolicyOutput, AgentError> {
        let scalar_data =
            TensorData::new(scalar.iter().copied().collect::<Vec<f32>>(), scalar.shape());
        let spatial_data =
            TensorData::new(spatial.iter().copied().collect::<Vec<f32>>(), spatial.shape());
        let scalar = Tensor::<B, 2>::from_data(scalar_data, &self.device);
        let spatial = Tensor::<B, 4>::from_data(spatial_data, &self.device);

        let (value, probs, x, y) = self.model.forward(scalar, spatial);

        Ok(PolicyOutput {
            value: Self::first(Self::to_vec(value)?, "value")?,
            action_probs: Self::to_vec(probs)?,
            x: Self::first(Self::to_vec(x)?, "x coordinate")?,
            y: Self::first(Self::to_vec(y)?, "y coordinate")?,
        })
    }

    fn save(&self, path: &Path) -> Result<(), AgentError> {
        let recorder = NamedMpkFileRecorder::<FullPrecisionSettings>::new();
        self.model
            .clone()
            .save_file(path.to_path_buf(), &recorder)
            .map_err(|err| AgentError::Checkpoint {
                path: path.display().to_string(),
                message: format!("{:?}", err),
            })?;
        tracing::info!("Saved model to {}", path.display());
        Ok(())
    }

    fn load(&mut self, path: &Path) -> Result<(), AgentError> {
        let recorder = NamedMpkFileRecorder::<FullPrecisionSettings>::new();
        self.model = self
            .model
            .clone()
            .load_file(path.to_path_buf(), &recorder, &self.device)
            .map_err(|err| AgentError::Checkpoint {
                path: path.display().to_string(),
                message: format!("{:?}", err),
            })?;
        tracing::info!("Loaded model from {}", path.display());
        Ok(())
    }
}
