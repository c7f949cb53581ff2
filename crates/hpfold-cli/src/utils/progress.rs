use hpfold::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 100;

/// Renders core [`Progress`] events on stderr with a single `indicatif` bar.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
    quiet: bool,
}

impl CliProgressHandler {
    pub fn new(quiet: bool) -> Self {
        let target = if quiet {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        };
        let pb = ProgressBar::with_draw_target(Some(0), target).with_style(spinner_style());
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
            quiet,
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = Arc::clone(&self.pb);
        let quiet = self.quiet;

        Box::new(move |progress: Progress| {
            let Ok(pb) = pb.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name } => {
                    pb.reset();
                    pb.set_length(0);
                    pb.set_style(spinner_style());
                    pb.set_message(name);
                    if !quiet {
                        pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    }
                }
                Progress::PhaseFinish => {
                    pb.disable_steady_tick();
                    let phase = pb.message();
                    pb.finish_with_message(format!("{} ... done", phase));
                }
                Progress::TaskStart { total_steps } => {
                    pb.disable_steady_tick();
                    pb.reset();
                    pb.set_length(total_steps);
                    pb.set_position(0);
                    pb.set_style(bar_style());
                }
                Progress::TaskIncrement => pb.inc(1),
                Progress::TaskFinish => {
                    if let Some(len) = pb.length() {
                        pb.set_position(len);
                    }
                    pb.finish();
                }
                Progress::Message(msg) => {
                    if pb.is_finished() {
                        pb.set_message(msg);
                    } else {
                        pb.println(format!("  {}", msg));
                    }
                }
            }
        })
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg:<24} [{bar:40.cyan/blue}] {human_pos}/{human_len} ({per_sec}, {eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn handler_starts_finished_and_empty() {
        let handler = CliProgressHandler::new(true);
        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.length(), Some(0));
        assert!(pb.is_finished());
    }

    #[test]
    fn enumeration_events_drive_the_bar() {
        let handler = CliProgressHandler::new(true);
        let callback = handler.get_callback();

        callback(Progress::PhaseStart {
            name: "Enumerating sequences",
        });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.message(), "Enumerating sequences");
            assert!(!pb.is_finished());
        }

        callback(Progress::TaskStart { total_steps: 64 });
        callback(Progress::TaskIncrement);
        callback(Progress::TaskIncrement);
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.length(), Some(64));
            assert_eq!(pb.position(), 2);
        }

        callback(Progress::TaskFinish);
        {
            let pb = handler.pb.lock().unwrap();
            assert!(pb.is_finished());
            assert_eq!(pb.position(), 64);
        }

        callback(Progress::PhaseFinish);
        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.message(), "Enumerating sequences ... done");
    }

    #[test]
    fn message_after_finish_replaces_the_label() {
        let handler = CliProgressHandler::new(true);
        let callback = handler.get_callback();
        callback(Progress::PhaseStart { name: "Folding" });
        callback(Progress::PhaseFinish);
        callback(Progress::Message("Best score 3 after 120 nodes".to_string()));

        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.message(), "Best score 3 after 120 nodes");
    }

    #[test]
    fn callback_can_be_used_from_worker_threads() {
        let handler = CliProgressHandler::new(true);
        let callback = Arc::new(handler.get_callback());

        callback(Progress::TaskStart { total_steps: 8 });
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let callback = Arc::clone(&callback);
                thread::spawn(move || {
                    callback(Progress::TaskIncrement);
                    callback(Progress::TaskIncrement);
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.position(), 8);
    }
}
