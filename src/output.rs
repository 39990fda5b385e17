use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};

use serde_json::json;

use crate::config::AppConfigExt;
use crate::metrics::Summary;
use crate::types::SimOutcome;
use crate::utils::prelude::*;
use crate::SimConfig;

fn event_line(writer: impl io::Write, val: serde_json::Value) -> Result<()> {
    event_line_with_ending(writer, val, true)
}

fn event_line_with_ending(mut writer: impl io::Write, val: serde_json::Value, ending: bool) -> Result<()> {
    serde_json::to_writer(&mut writer, &val)?;
    if ending {
        writer.write_all(b",\n")?;
    }
    Ok(())
}

/// Render the merged Gantt timeline as a chrome trace (load in
/// `chrome://tracing` or Perfetto). One lane for the CPU; each segment
/// becomes a complete event, idle intervals included.
pub fn render_chrome_trace(outcome: &SimOutcome) -> Result<()> {
    let path = config().output_dir()?.file("trace.json")?;
    info!(path = %path.display(), "writing chrome trace");
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(b"{\"traceEvents\":[\n")?;

    for seg in &outcome.timeline {
        let name = seg.job.as_deref().unwrap_or("idle");
        event_line(
            &mut file,
            json!({
                "name": name,
                "ph": "X",
                "cat": if seg.is_idle() { "idle" } else { "exec" },
                "ts": seg.start.0,
                "dur": seg.duration().0,
                "tid": 0,
                "pid": 0,
                "args": {
                    "job_id": &seg.job,
                }
            }),
        )?;
    }

    event_line_with_ending(
        &mut file,
        json!({
            "name": "process_name",
            "ph": "M",
            "pid": 0,
            "args": {
                "name": "CPU"
            }
        }),
        false,
    )?;
    file.write_all(b"\n],\"config\":")?;

    let cfg: SimConfig = config().fetch()?;
    serde_json::to_writer(&mut file, &cfg)?;
    file.write_all(b"\n}")?;
    Ok(())
}

/// Write the per-job metrics table, one row per finalized process, with a
/// trailing `average` row for the aggregate turnaround/waiting times.
pub fn render_metrics_csv(outcome: &SimOutcome) -> Result<()> {
    let path = config().output_dir()?.file("metrics.csv")?;
    info!(path = %path.display(), "writing metrics table");
    write_metrics(outcome, File::create(path)?)
}

fn write_metrics(outcome: &SimOutcome, writer: impl io::Write) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(&[
        "id",
        "arrival",
        "burst",
        "priority",
        "start",
        "completion",
        "turnaround",
        "waiting",
    ])?;
    for p in &outcome.processes {
        writer.write_record(&[
            p.job.id.clone(),
            p.job.arrival.to_string(),
            p.job.burst.to_string(),
            p.job.priority.to_string(),
            opt(p.start.map(|t| t.0)),
            opt(p.completion.map(|t| t.0)),
            opt(p.turnaround.map(|d| d.0)),
            opt(p.waiting.map(|d| d.0)),
        ])?;
    }

    let summary = Summary::from_run(&outcome.processes, outcome.makespan);
    writer.write_record(&[
        "average".to_owned(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("{:.2}", summary.avg_turnaround),
        format!("{:.2}", summary.avg_waiting),
    ])?;
    writer.flush()?;

    info!(
        jobs = summary.jobs,
        avg_waiting = summary.avg_waiting,
        avg_turnaround = summary.avg_turnaround,
        makespan = %summary.makespan,
        "run summary"
    );
    Ok(())
}

fn opt(v: Option<u64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}
