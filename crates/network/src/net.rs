use crate::dense::Dense;
use rand::Rng;

/// Logistic activation.
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid feed-forward network: a stack of dense layers, sigmoid after
/// every affine step.
pub struct Network {
    layers: Vec<Dense>,
}

impl Network {
    /// Build a network from consecutive layer sizes, e.g. `&[16, 80, 80, 12]`
    /// for 16 inputs, two hidden layers of 80 and 12 outputs. Weights are
    /// Xavier-uniform from `rng`; `sizes` must name at least two layers.
    pub fn random<R: Rng>(sizes: &[usize], rng: &mut R) -> Self {
        let layers = sizes
            .windows(2)
            .map(|pair| Dense::random(pair[0], pair[1], rng))
            .collect();
        Self { layers }
    }

    /// Number of input units.
    pub fn input_dim(&self) -> usize {
        self.layers.first().map(|l| l.in_dim).unwrap_or(0)
    }

    /// Number of output units.
    pub fn output_dim(&self) -> usize {
        self.layers.last().map(|l| l.out_dim).unwrap_or(0)
    }

    /// Read-only forward pass; no training-time side effects.
    pub fn predict(&self, input: &[f32]) -> Vec<f32> {
        self.forward_trace(input)
            .pop()
            .unwrap_or_else(|| input.to_vec())
    }

    /// Forward pass keeping every layer's activation, the input included.
    /// The trainer needs the full trace for the backward sweep.
    pub(crate) fn forward_trace(&self, input: &[f32]) -> Vec<Vec<f32>> {
        let mut activations = Vec::with_capacity(self.layers.len() + 1);
        activations.push(input.to_vec());
        for layer in &self.layers {
            let prev = activations.last().map(Vec::as_slice).unwrap_or(input);
            let mut z = layer.forward(prev);
            for v in z.iter_mut() {
                *v = sigmoid(*v);
            }
            activations.push(z);
        }
        activations
    }

    pub(crate) fn layers(&self) -> &[Dense] {
        &self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [Dense] {
        &mut self.layers
    }
}
