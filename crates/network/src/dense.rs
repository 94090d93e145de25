use rand::Rng;

/// Dense (fully connected) layer: out = W * in + b.
pub struct Dense {
    /// input dimension
    pub in_dim: usize,
    /// output dimension
    pub out_dim: usize,
    /// weights in row-major order: out_dim x in_dim
    pub weights: Vec<f32>,
    /// bias vector of length out_dim
    pub bias: Vec<f32>,
}

impl Dense {
    /// Create a layer with Xavier-uniform random weights and zero biases.
    ///
    /// Weights are drawn from `±sqrt(6 / (fan_in + fan_out))`, which keeps
    /// early sigmoid activations away from saturation and breaks symmetry
    /// between units.
    pub fn random<R: Rng>(in_dim: usize, out_dim: usize, rng: &mut R) -> Self {
        let limit = (6.0_f32 / (in_dim + out_dim) as f32).sqrt();
        let weights = (0..in_dim * out_dim)
            .map(|_| rng.gen_range(-limit..=limit))
            .collect();
        Self {
            in_dim,
            out_dim,
            weights,
            bias: vec![0.0; out_dim],
        }
    }

    /// Affine forward pass for a single input vector.
    ///
    /// Input shorter than `in_dim` is treated as zero-padded; extra elements
    /// are ignored.
    pub fn forward(&self, input: &[f32]) -> Vec<f32> {
        let mut out = vec![0.0_f32; self.out_dim];
        for (o, cell) in out.iter_mut().enumerate() {
            let base = o * self.in_dim;
            let mut sum = self.bias[o];
            for (i, &x) in input.iter().take(self.in_dim).enumerate() {
                sum += self.weights[base + i] * x;
            }
            *cell = sum;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn forward_with_known_weights() {
        let layer = Dense {
            in_dim: 2,
            out_dim: 2,
            weights: vec![1.0, 2.0, 3.0, 4.0],
            bias: vec![0.5, -0.5],
        };
        let out = layer.forward(&[1.0, 1.0]);
        assert_eq!(out, vec![3.5, 6.5]);
    }

    #[test]
    fn random_init_stays_inside_xavier_limit() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let layer = Dense::random(16, 80, &mut rng);
        let limit = (6.0_f32 / 96.0).sqrt();
        assert_eq!(layer.weights.len(), 16 * 80);
        assert!(layer.weights.iter().all(|w| w.abs() <= limit));
        assert!(layer.bias.iter().all(|&b| b == 0.0));
    }

    #[test]
    fn random_init_breaks_symmetry() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let layer = Dense::random(4, 4, &mut rng);
        let first = layer.weights[0];
        assert!(layer.weights.iter().any(|&w| w != first));
    }
}
