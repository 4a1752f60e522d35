use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Tracks how fast the world evolves, for the status line
pub struct Stats {
    generation: u64,
    alive: usize,
    gens_in_report: usize,
    last_report: Instant,
}
impl Stats {
    pub fn new(alive: usize) -> Self {
        Self {
            generation: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }

    pub fn record(&mut self, generation: u64, alive: usize) {
        self.generation = generation;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    /// Updates the population without counting a generation, after edits
    pub fn set_alive(&mut self, alive: usize) {
        self.alive = alive;
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }
    pub fn report(&mut self) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        self.summary(gens_per_sec)
    }

    fn summary(&self, gens_per_sec: f64) -> String {
        format!(
            "{:.02}gen/s gen:{}, alive:{}",
            gens_per_sec, self.generation, self.alive
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_stats_have_no_report() {
        assert!(!Stats::new(0).has_report());
    }

    #[test]
    fn summary_shows_latest_record() {
        let mut stats = Stats::new(10);
        stats.record(1, 8);
        stats.record(2, 5);
        stats.set_alive(6);

        assert_eq!(stats.summary(4.0), "4.00gen/s gen:2, alive:6");
    }

    #[test]
    fn report_resets_rate() {
        let mut stats = Stats::new(0);
        stats.record(1, 0);
        stats.report();

        assert_eq!(stats.gens_in_report, 0);
        assert!(!stats.has_report());
    }
}
