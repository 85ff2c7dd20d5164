//! Mock chart data for demo/development

use chrono::Utc;
use rand::Rng;

use deck_core::{ChartConfig, Record};

/// Spacing between generated samples
const SAMPLE_INTERVAL_MS: i64 = 60_000;

/// Probability that a generated value is `null`
const GAP_PROBABILITY: f64 = 0.05;

/// Bounded random walk
struct MockSeries {
    value: f64,
    volatility: f64,
    min: f64,
    max: f64,
}

impl MockSeries {
    fn new(initial: f64, volatility: f64, min: f64, max: f64) -> Self {
        Self {
            value: initial,
            volatility,
            min,
            max,
        }
    }

    fn tick(&mut self, rng: &mut impl Rng) -> f64 {
        let step = (rng.r#gen::<f64>() - 0.5) * 2.0 * self.volatility;
        self.value = (self.value + step).clamp(self.min, self.max);
        self.value
    }

    /// Next value, occasionally replaced by a gap
    fn sample(&mut self, rng: &mut impl Rng) -> Option<f64> {
        let value = self.tick(rng);
        if rng.gen_bool(GAP_PROBABILITY) {
            None
        } else {
            Some((value * 100.0).round() / 100.0)
        }
    }
}

/// Timestamps (epoch ms) for `points` samples ending now, oldest first
fn timestamps(points: usize) -> Vec<f64> {
    let now = Utc::now().timestamp_millis();
    (0..points)
        .rev()
        .map(|i| (now - i as i64 * SAMPLE_INTERVAL_MS) as f64)
        .collect()
}

/// One scalar chart and one three-slot vector chart
pub fn generate_charts(points: usize) -> Vec<ChartConfig> {
    let mut rng = rand::thread_rng();
    let times = timestamps(points);

    let mut temperature = MockSeries::new(21.0, 0.4, 15.0, 30.0);
    let scalar = times
        .iter()
        .map(|&t| Record::scalar(t, temperature.sample(&mut rng)))
        .collect();

    let mut axes = [
        MockSeries::new(0.0, 0.2, -2.0, 2.0),
        MockSeries::new(0.5, 0.2, -2.0, 2.0),
        MockSeries::new(9.8, 0.1, 8.0, 11.0),
    ];
    let vector = times
        .iter()
        .map(|&t| {
            let slots = axes.iter_mut().map(|s| s.sample(&mut rng)).collect();
            Record::vector(t, slots)
        })
        .collect();

    tracing::debug!("generated {} samples per chart", points);

    vec![
        ChartConfig::new("Temperature (°C)", scalar),
        ChartConfig::new("Acceleration x / y / z", vector),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::SeriesValue;

    #[test]
    fn test_generate_charts_shapes() {
        let charts = generate_charts(24);
        assert_eq!(charts.len(), 2);

        assert_eq!(charts[0].data.len(), 24);
        assert!(charts[0].data.iter().all(|r| r.value.is_scalar()));

        assert_eq!(charts[1].data.len(), 24);
        assert!(charts[1].data.iter().all(|r| match &r.value {
            SeriesValue::Vector(slots) => slots.len() == 3,
            _ => false,
        }));
    }

    #[test]
    fn test_timestamps_ascend_by_interval() {
        let times = timestamps(5);
        assert_eq!(times.len(), 5);
        for pair in times.windows(2) {
            assert_eq!(pair[1] - pair[0], SAMPLE_INTERVAL_MS as f64);
        }
    }

    #[test]
    fn test_random_walk_stays_in_bounds() {
        let mut rng = rand::thread_rng();
        let mut series = MockSeries::new(0.0, 5.0, -1.0, 1.0);
        for _ in 0..200 {
            let v = series.tick(&mut rng);
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_payload_passes_loader_validation() {
        let json = serde_json::to_string(&generate_charts(6)).unwrap();
        assert!(json.contains("\"data\":[["));

        let parsed = deck_core::parse_chart_configs(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].data.len(), 6);
    }
}
