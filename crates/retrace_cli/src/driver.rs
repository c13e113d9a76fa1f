//! Headless session driver
//!
//! Feeds scripted input into a capture controller and prints every render
//! call and source transition, one per line.

use anyhow::{Context, Result};
use retrace_core::{InputEvent, RecordingSink, RenderCall};
use retrace_recorder::{CaptureController, CommandOutcome, RecorderError, Transition};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::keymap::Keymap;

/// Counters reported at the end of a run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub ticks: u64,
    pub samples: usize,
    pub replays: usize,
    pub exports: usize,
}

/// Drives one recording session from a stream of input events.
pub struct Driver<W: Write> {
    controller: CaptureController,
    keymap: Keymap,
    sink: RecordingSink,
    out: W,
    export_path: Option<PathBuf>,
    stats: RunStats,
}

impl<W: Write> Driver<W> {
    pub fn new(controller: CaptureController, keymap: Keymap, out: W) -> Self {
        Self {
            controller,
            keymap,
            sink: RecordingSink::new(),
            out,
            export_path: None,
            stats: RunStats::default(),
        }
    }

    /// Write exports to a file instead of the output stream
    pub fn with_export_path(mut self, path: Option<PathBuf>) -> Self {
        self.export_path = path;
        self
    }

    /// Handle every event in order and return the run's counters
    pub fn run(&mut self, events: impl IntoIterator<Item = InputEvent>) -> Result<RunStats> {
        for event in events {
            self.handle(event)?;
        }
        self.stats.samples = self.controller.buffer().len();
        self.out.flush()?;
        Ok(self.stats)
    }

    pub fn handle(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::Tick => {
                let outcome = self.controller.tick(&mut self.sink);
                self.stats.ticks = outcome.frame;
                self.flush_render()?;
                if outcome.transition == Some(Transition::ReplayFinished) {
                    writeln!(self.out, "replay finished")?;
                }
            }
            InputEvent::PointerDown(point) | InputEvent::PointerMove(point) => {
                self.controller.capture(point);
            }
            InputEvent::KeyDown { key, modifiers } => {
                let Some(command) = self.keymap.lookup(key, modifiers) else {
                    tracing::trace!(%key, "unbound key");
                    return Ok(());
                };

                match self.controller.apply(command, &mut self.sink) {
                    Ok(outcome) => {
                        self.flush_render()?;
                        self.report(outcome)?;
                    }
                    Err(RecorderError::EmptyBufferReplay) => {
                        writeln!(self.out, "replay skipped: nothing recorded")?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
        Ok(())
    }

    fn report(&mut self, outcome: CommandOutcome) -> Result<()> {
        match outcome {
            CommandOutcome::Reset { .. } => writeln!(self.out, "reset")?,
            CommandOutcome::Cleared => {}
            CommandOutcome::ReplayStarted { samples, .. } => {
                self.stats.replays += 1;
                writeln!(self.out, "replay started ({samples} samples)")?;
            }
            CommandOutcome::Exported(text) => {
                self.stats.exports += 1;
                match &self.export_path {
                    Some(path) => {
                        fs::write(path, &text)
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                        tracing::info!("Exported path to {}", path.display());
                    }
                    None => writeln!(self.out, "export {text}")?,
                }
            }
        }
        Ok(())
    }

    fn flush_render(&mut self) -> Result<()> {
        for call in self.sink.take() {
            match call {
                RenderCall::Clear => writeln!(self.out, "clear")?,
                RenderCall::Marker { at, radius } => {
                    writeln!(self.out, "draw {} {} {}", at.x, at.y, radius)?
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeysConfig;
    use crate::script;
    use retrace_recorder::CaptureConfig;

    fn run_script(text: &str) -> (String, RunStats) {
        let keymap = Keymap::from_config(&KeysConfig::default()).unwrap();
        let controller = CaptureController::new(CaptureConfig::default());
        let mut out = Vec::new();
        let stats = Driver::new(controller, keymap, &mut out)
            .run(script::parse(text).unwrap())
            .unwrap();
        (String::from_utf8(out).unwrap(), stats)
    }

    #[test]
    fn test_record_then_replay() {
        let (output, stats) = run_script(
            r#"[
                {"type": "tick"},
                {"type": "pointer_move", "x": 10, "y": 10},
                {"type": "tick"},
                {"type": "pointer_move", "x": 20, "y": 20},
                {"type": "key_down", "key": "space"},
                {"type": "tick"},
                {"type": "tick"},
                {"type": "tick"}
            ]"#,
        );

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "draw 10 10 50",
                "clear",
                "replay started (2 samples)",
                "draw 10 10 50",
                "draw 20 20 50",
                "draw 20 20 50",
                "replay finished",
            ]
        );
        assert_eq!(stats.ticks, 5);
        assert_eq!(stats.samples, 2);
        assert_eq!(stats.replays, 1);
    }

    #[test]
    fn test_export_and_empty_replay() {
        let (output, stats) = run_script(
            r#"[
                {"type": "key_down", "key": "space"},
                {"type": "tick"},
                {"type": "pointer_down", "x": 1, "y": 2},
                {"type": "key_down", "key": "c", "ctrl": true},
                {"type": "key_down", "key": "c"},
                {"type": "key_down", "key": "z"},
                {"type": "tick"}
            ]"#,
        );

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "replay skipped: nothing recorded",
                r#"export [{"x":1.0,"y":2.0}]"#,
                "clear",
            ]
        );
        assert_eq!(stats.exports, 1);
        assert_eq!(stats.samples, 1);
    }
}
