use std::time::{Instant, UNIX_EPOCH};

use chrono::DateTime;

use crate::server::{
    config::Config,
    error::health::HealthError,
    model::health::{HealthReport, Platform},
    state::Clock,
};

pub struct HealthService<'a> {
    config: &'a Config,
    started_at: Instant,
    clock: Clock,
}

impl<'a> HealthService<'a> {
    pub fn new(config: &'a Config, started_at: Instant, clock: Clock) -> Self {
        Self {
            config,
            started_at,
            clock,
        }
    }

    /// Builds the health report for the running process.
    ///
    /// # Returns
    /// - `Ok(HealthReport)` - Report with the current timestamp and uptime
    /// - `Err(HealthError)` - The clock could not be turned into a timestamp
    pub fn report(&self) -> Result<HealthReport, HealthError> {
        let since_epoch = (self.clock)().duration_since(UNIX_EPOCH)?;
        let secs = since_epoch.as_secs();
        let timestamp = i64::try_from(secs)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, since_epoch.subsec_nanos()))
            .ok_or(HealthError::TimestampOutOfRange(secs))?;

        Ok(HealthReport {
            timestamp,
            uptime_secs: self.started_at.elapsed().as_secs_f64(),
            environment: self.config.environment.as_str().to_string(),
            version: self.config.version.clone(),
            render_mode: self.config.site.render_mode.as_str().to_string(),
            platform: Platform::current(),
        })
    }
}

#[cfg(test)]
mod test {
    use std::time::{Duration, SystemTime};

    use super::*;

    fn config(vars: &[(&'static str, &'static str)]) -> Config {
        let vars = vars.to_vec();
        Config::from_lookup(move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        })
        .unwrap()
    }

    fn fixed_clock() -> SystemTime {
        UNIX_EPOCH + Duration::from_millis(1_700_000_000_123)
    }

    fn broken_clock() -> SystemTime {
        UNIX_EPOCH - Duration::from_secs(1)
    }

    /// Tests a report built from a working clock.
    ///
    /// Verifies timestamp, environment, render mode, version and platform are
    /// taken from the clock, configuration and process.
    ///
    /// Expected: Ok(HealthReport) with the fixed timestamp
    #[test]
    fn reports_configuration_and_clock() {
        let config = config(&[("NODE_ENV", "production"), ("RENDER_MODE", "static")]);

        let report = HealthService::new(&config, Instant::now(), fixed_clock)
            .report()
            .unwrap();

        assert_eq!(report.timestamp.timestamp_millis(), 1_700_000_000_123);
        assert_eq!(report.environment, "production");
        assert_eq!(report.render_mode, "static");
        assert_eq!(report.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(report.platform.pid, std::process::id());
        assert!(report.uptime_secs >= 0.0);
    }

    /// Tests that uptime counts from the given start instant.
    ///
    /// Expected: uptime of at least the elapsed sleep
    #[test]
    fn uptime_counts_from_start() {
        let config = config(&[]);
        let started_at = Instant::now();
        std::thread::sleep(Duration::from_millis(20));

        let report = HealthService::new(&config, started_at, fixed_clock)
            .report()
            .unwrap();

        assert!(report.uptime_secs >= 0.02);
    }

    /// Tests a clock that reports a time before the Unix epoch.
    ///
    /// Expected: Err(HealthError::ClockBeforeEpoch)
    #[test]
    fn clock_before_epoch_fails() {
        let config = config(&[]);

        let result = HealthService::new(&config, Instant::now(), broken_clock).report();

        assert!(matches!(result, Err(HealthError::ClockBeforeEpoch(_))));
    }
}
