/// Configuration for a pipeline run.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Gradient magnitude (0-255 luma scale) above which a cell becomes
    /// an edge glyph.
    pub edge_cutoff: f32,
    /// Spread of the narrow Gaussian in the DoG filter.
    pub sigma1: f32,
    /// Spread of the wide Gaussian in the DoG filter.
    pub sigma2: f32,
    /// Sample source colors into the frame's parallel color grid.
    pub enable_color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            edge_cutoff: 95.0,
            sigma1: 0.5,
            sigma2: 1.5,
            enable_color: false,
        }
    }
}

impl RenderConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if !self.edge_cutoff.is_finite() || self.edge_cutoff < 0.0 {
            return Err(format!(
                "edge_cutoff must be a non-negative number, got {}",
                self.edge_cutoff
            ));
        }
        for (name, sigma) in [("sigma1", self.sigma1), ("sigma2", self.sigma2)] {
            if !sigma.is_finite() || sigma <= 0.0 || sigma > 10.0 {
                return Err(format!("{name} must be in (0.0, 10.0], got {sigma}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.edge_cutoff, 95.0);
        assert_eq!((config.sigma1, config.sigma2), (0.5, 1.5));
    }

    #[test]
    fn test_invalid_edge_cutoff() {
        let mut config = RenderConfig::default();
        config.edge_cutoff = -1.0;
        assert!(config.validate().is_err());

        config.edge_cutoff = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_sigma() {
        let mut config = RenderConfig::default();
        config.sigma1 = 0.0;
        assert!(config.validate().is_err());

        config.sigma1 = 0.5;
        config.sigma2 = 11.0;
        assert!(config.validate().is_err());
    }
}
