use crate::types::{GanttSegment, Time};

/// Builds the Gantt timeline out of dispatch events.
///
/// Every dispatch (and every idle jump) is reported with `record`; the
/// builder closes the previously open segment at the new start and opens a
/// new one. Consecutive records for the same job collapse into a single
/// segment, which is what keeps preemptive policies from producing a chain
/// of back-to-back one-slice segments for the same job.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    open: Option<(Time, Option<String>)>,
    segments: Vec<GanttSegment>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Report that `job` (or idle time, for `None`) occupies the CPU from
    /// `now` on.
    pub fn record(&mut self, now: Time, job: Option<String>) {
        match &self.open {
            Some((_, open_job)) if *open_job == job => {
                // same job, no gap: extend the open segment
            }
            _ => {
                self.close(now);
                self.open = Some((now, job));
            }
        }
    }

    /// Close the trailing open segment at `end` and hand the segments over.
    pub fn finish(mut self, end: Time) -> Vec<GanttSegment> {
        self.close(end);
        self.segments
    }

    fn close(&mut self, end: Time) {
        if let Some((start, job)) = self.open.take() {
            if start < end {
                self.segments.push(GanttSegment { start, end, job });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: u64, end: u64, job: Option<&str>) -> GanttSegment {
        GanttSegment {
            start: Time(start),
            end: Time(end),
            job: job.map(|s| s.to_owned()),
        }
    }

    #[test]
    fn closes_on_job_change() {
        let mut tl = TimelineBuilder::new();
        tl.record(Time(0), Some("P1".into()));
        tl.record(Time(4), Some("P2".into()));
        assert_eq!(
            tl.finish(Time(6)),
            vec![seg(0, 4, Some("P1")), seg(4, 6, Some("P2"))]
        );
    }

    #[test]
    fn merges_contiguous_same_job() {
        let mut tl = TimelineBuilder::new();
        tl.record(Time(0), Some("P1".into()));
        tl.record(Time(2), Some("P1".into()));
        tl.record(Time(4), Some("P1".into()));
        assert_eq!(tl.finish(Time(5)), vec![seg(0, 5, Some("P1"))]);
    }

    #[test]
    fn same_job_after_interruption_stays_split() {
        let mut tl = TimelineBuilder::new();
        tl.record(Time(0), Some("P1".into()));
        tl.record(Time(2), Some("P2".into()));
        tl.record(Time(4), Some("P1".into()));
        assert_eq!(
            tl.finish(Time(7)),
            vec![seg(0, 2, Some("P1")), seg(2, 4, Some("P2")), seg(4, 7, Some("P1"))]
        );
    }

    #[test]
    fn idle_is_its_own_segment() {
        let mut tl = TimelineBuilder::new();
        tl.record(Time(0), None);
        tl.record(Time(10), Some("P1".into()));
        assert_eq!(tl.finish(Time(12)), vec![seg(0, 10, None), seg(10, 12, Some("P1"))]);
    }

    #[test]
    fn empty_run_yields_no_segments() {
        let tl = TimelineBuilder::new();
        assert!(tl.finish(Time(0)).is_empty());
    }
}
