//! Progress reporting for coordinator runs
//!
//! Both reporters write to stderr so stdout stays clean for results.

use colored::Colorize;
use duet_application::ports::progress::ProgressNotifier;
use duet_domain::{Model, Stage};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;

/// Reports progress with one indicatif bar per running stage
///
/// Concept and practice may run at the same time, so bars are keyed by
/// stage rather than kept in a single slot.
pub struct ProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<Stage, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }

    fn stage_label(stage: Stage) -> String {
        match stage {
            Stage::Query => "Query".to_string(),
            Stage::Fanout => "Stage 1: Ask Both Models".to_string(),
            Stage::Synthesis => "Stage 2: Synthesis".to_string(),
            Stage::Concept => "Stage 1: Concept".to_string(),
            Stage::Practice => "Stage 2: Practice".to_string(),
            Stage::Integration => "Stage 3: Integration".to_string(),
        }
    }

    /// Number of stages with a bar still open
    pub fn active_stages(&self) -> usize {
        self.bars.lock().map(|bars| bars.len()).unwrap_or(0)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: Stage, total_calls: usize) {
        let pb = self.multi.add(ProgressBar::new(total_calls as u64));
        pb.set_style(Self::stage_style());
        pb.set_prefix(Self::stage_label(stage));
        pb.set_message("waiting for model...");
        pb.enable_steady_tick(std::time::Duration::from_millis(120));

        if let Ok(mut bars) = self.bars.lock() {
            bars.insert(stage, pb);
        }
    }

    fn on_call_complete(&self, stage: Stage, model: &Model, success: bool) {
        if let Ok(bars) = self.bars.lock()
            && let Some(pb) = bars.get(&stage)
        {
            let status = if success {
                format!("{} {}", "v".green(), model)
            } else {
                format!("{} {}", "x".red(), model)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, stage: Stage) {
        let pb = self.bars.lock().ok().and_then(|mut bars| bars.remove(&stage));
        if let Some(pb) = pb {
            pb.finish_with_message("done".green().to_string());
        }
    }
}

/// Line-based progress for non-interactive stderr (pipes, log capture)
///
/// Spinners redraw in place, which turns into noise when stderr is not a
/// terminal; this writes one line per event instead.
pub struct SimpleProgress {
    out: Mutex<Box<dyn Write + Send>>,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self::with_writer(std::io::stderr())
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", text);
        }
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: Stage, total_calls: usize) {
        self.line(format!(
            "{} {} ({} call{})",
            "->".cyan(),
            ProgressReporter::stage_label(stage).bold(),
            total_calls,
            if total_calls == 1 { "" } else { "s" }
        ));
    }

    fn on_call_complete(&self, _stage: Stage, model: &Model, success: bool) {
        if success {
            self.line(format!("  {} {}", "v".green(), model));
        } else {
            self.line(format!("  {} {} (failed)", "x".red(), model));
        }
    }

    fn on_stage_complete(&self, _stage: Stage) {}
}
