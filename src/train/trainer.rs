use crate::{
    loss::HalfSquaredError,
    network::{forward, Weights},
    optim::{OutputGradients, Sgd},
    train::{epoch_stats::EpochStats, train_config::SessionConfig},
};

/// Runs one epoch: forward pass, error, output deltas, output-layer update.
///
/// `weights` is modified in place; the returned stats describe the state
/// *before* the update, which is what the traces record.
pub fn train_epoch(
    config: &SessionConfig,
    weights: &mut Weights,
    optimizer: &Sgd,
    epoch: usize,
) -> EpochStats {
    let pass = forward(config.x1, config.x2, weights);

    let e1 = HalfSquaredError::loss(config.y1, pass.o1);
    let e2 = HalfSquaredError::loss(config.y2, pass.o2);

    let gradients = OutputGradients::compute(&pass, config.y1, config.y2);
    optimizer.step(weights, &gradients, &pass);

    EpochStats {
        epoch,
        pass,
        e1,
        e2,
        total_error: e1 + e2,
        gradients,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_epoch_of_worked_example() {
        let cfg = SessionConfig::default();
        let mut w = cfg.weights;
        let stats = train_epoch(&cfg, &mut w, &Sgd::new(cfg.learning_rate), 1);

        assert_eq!(stats.epoch, 1);
        assert!((stats.total_error - 0.024108).abs() < 1e-6);
        assert_eq!(stats.total_error, stats.e1 + stats.e2);
        assert!((w.w5 - 0.436830).abs() < 1e-6);
        assert_eq!(w.hidden(), cfg.weights.hidden());
    }

    #[test]
    fn stats_reflect_weights_before_the_update() {
        let cfg = SessionConfig::default();
        let mut w = cfg.weights;
        let sgd = Sgd::new(cfg.learning_rate);
        let first = train_epoch(&cfg, &mut w, &sgd, 1);
        let second = train_epoch(&cfg, &mut w, &sgd, 2);

        assert!((first.pass.o1 - 0.609891).abs() < 1e-6);
        assert!((second.pass.o1 - 0.606604).abs() < 1e-6);
        assert!((second.pass.o2 - 0.663626).abs() < 1e-6);
        // Hidden activations never move.
        assert_eq!(first.pass.h1, second.pass.h1);
        assert_eq!(first.pass.h2, second.pass.h2);
    }
}
