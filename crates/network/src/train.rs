use crate::net::Network;

/// Hyperparameters of the convergence loop.
#[derive(Clone, Copy, Debug)]
pub struct TrainConfig {
    /// Step size for every weight update.
    pub learning_rate: f32,
    /// Training stops once the pass MSE drops to this level.
    pub error_goal: f32,
    /// Upper bound on iterations; exhausting it is `TrainError::NoConvergence`.
    pub max_epochs: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            error_goal: 0.01,
            max_epochs: 10_000,
        }
    }
}

/// Errors raised by the trainer.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TrainError {
    /// The training set has no samples.
    #[error("empty training set")]
    EmptyDataset,
    /// An input or target row does not match the network's dimensions.
    #[error("sample {sample} does not match the network dimensions")]
    ShapeMismatch {
        /// Index of the offending sample.
        sample: usize,
    },
    /// The error goal was not reached within the epoch cap.
    #[error("did not converge after {epochs} epochs (mse {error})")]
    NoConvergence {
        /// Epochs actually run.
        epochs: usize,
        /// MSE after the last epoch.
        error: f32,
    },
}

/// Outcome of a converged training run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrainSummary {
    /// Epochs it took to reach the goal.
    pub epochs: usize,
    /// MSE of the final epoch.
    pub error: f32,
}

/// Online backpropagation driver over a fixed training set.
///
/// Each `iteration` makes one pass over every sample in order, updating all
/// weights after each sample, and returns the mean squared error of the pass
/// (measured on each sample's pre-update forward output).
pub struct Backprop<'a> {
    net: &'a mut Network,
    inputs: &'a [Vec<f32>],
    targets: &'a [Vec<f32>],
    learning_rate: f32,
}

impl<'a> Backprop<'a> {
    /// Bind a trainer to a network and dataset, validating shapes up front.
    pub fn new(
        net: &'a mut Network,
        inputs: &'a [Vec<f32>],
        targets: &'a [Vec<f32>],
        learning_rate: f32,
    ) -> Result<Self, TrainError> {
        if inputs.is_empty() && targets.is_empty() {
            return Err(TrainError::EmptyDataset);
        }
        if inputs.len() != targets.len() {
            return Err(TrainError::ShapeMismatch {
                sample: inputs.len().min(targets.len()),
            });
        }
        let in_dim = net.input_dim();
        let out_dim = net.output_dim();
        for (sample, (x, y)) in inputs.iter().zip(targets).enumerate() {
            if x.len() != in_dim || y.len() != out_dim {
                return Err(TrainError::ShapeMismatch { sample });
            }
        }
        Ok(Self {
            net,
            inputs,
            targets,
            learning_rate,
        })
    }

    /// One pass over the whole training set; returns the pass MSE.
    pub fn iteration(&mut self) -> f32 {
        let mut squared_sum = 0.0_f64;
        let mut terms = 0usize;

        for (x, y) in self.inputs.iter().zip(self.targets) {
            let activations = self.net.forward_trace(x);
            let Some(output) = activations.last() else {
                continue;
            };

            for (a, t) in output.iter().zip(y) {
                let diff = (a - t) as f64;
                squared_sum += diff * diff;
                terms += 1;
            }

            // Output delta for squared error through the sigmoid.
            let mut delta: Vec<f32> = output
                .iter()
                .zip(y)
                .map(|(a, t)| (a - t) * a * (1.0 - a))
                .collect();

            // Backward sweep: compute the upstream delta from the pre-update
            // weights, then apply this layer's update.
            for l in (0..self.net.layers().len()).rev() {
                let prev_act = &activations[l];

                let prev_delta = if l > 0 {
                    let layer = &self.net.layers()[l];
                    prev_act
                        .iter()
                        .enumerate()
                        .map(|(i, &a)| {
                            let mut sum = 0.0_f32;
                            for (o, d) in delta.iter().enumerate() {
                                sum += d * layer.weights[o * layer.in_dim + i];
                            }
                            sum * a * (1.0 - a)
                        })
                        .collect()
                } else {
                    Vec::new()
                };

                let lr = self.learning_rate;
                let layer = &mut self.net.layers_mut()[l];
                for (o, &d) in delta.iter().enumerate() {
                    let base = o * layer.in_dim;
                    for (i, &a) in prev_act.iter().enumerate() {
                        layer.weights[base + i] -= lr * d * a;
                    }
                    layer.bias[o] -= lr * d;
                }

                delta = prev_delta;
            }
        }

        if terms == 0 {
            return 0.0;
        }
        (squared_sum / terms as f64) as f32
    }
}

/// Run backpropagation until the pass MSE reaches `cfg.error_goal`.
///
/// `on_epoch` is called with every epoch number and its error, so callers
/// can report progress. Exceeding `cfg.max_epochs` without reaching the goal
/// is a `TrainError::NoConvergence` rather than a silent infinite loop.
pub fn train_until(
    net: &mut Network,
    inputs: &[Vec<f32>],
    targets: &[Vec<f32>],
    cfg: TrainConfig,
    mut on_epoch: impl FnMut(usize, f32),
) -> Result<TrainSummary, TrainError> {
    let mut trainer = Backprop::new(net, inputs, targets, cfg.learning_rate)?;
    let mut error = f32::INFINITY;
    for epoch in 1..=cfg.max_epochs {
        error = trainer.iteration();
        log::debug!("epoch {epoch}: mse {error}");
        on_epoch(epoch, error);
        if error <= cfg.error_goal {
            return Ok(TrainSummary {
                epochs: epoch,
                error,
            });
        }
    }
    Err(TrainError::NoConvergence {
        epochs: cfg.max_epochs,
        error,
    })
}
