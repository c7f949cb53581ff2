/// Events emitted by the workflows while they run.
///
/// A fold reports one phase with a closing `Message` carrying the best score. An
/// enumeration wraps one task of `2^n` increments, one per folded sequence, inside a
/// phase, and may follow it with a second phase re-folding the best sequences.
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    /// One unit of work finished. Sent from rayon workers during enumeration.
    TaskIncrement,
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `work` between a `PhaseStart` and a `PhaseFinish` event.
    pub fn phase<T>(&self, name: &'static str, work: impl FnOnce() -> T) -> T {
        self.report(Progress::PhaseStart { name });
        let output = work();
        self.report(Progress::PhaseFinish);
        output
    }

    /// Wraps `work` in a task of `total_steps` increments. `work` reports each increment.
    pub fn task<T>(&self, total_steps: u64, work: impl FnOnce() -> T) -> T {
        self.report(Progress::TaskStart { total_steps });
        let output = work();
        self.report(Progress::TaskFinish);
        output
    }
}

impl std::fmt::Debug for ProgressReporter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressReporter")
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::TaskIncrement);
    }

    #[test]
    fn reporter_forwards_events_in_order() {
        let seen = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            seen.lock().unwrap().push(format!("{:?}", event));
        }));

        reporter.report(Progress::PhaseStart { name: "Folding" });
        reporter.report(Progress::Message("best 3".to_string()));
        reporter.report(Progress::PhaseFinish);
        drop(reporter);

        let seen = seen.into_inner().unwrap();
        assert_eq!(
            seen,
            vec![
                "PhaseStart { name: \"Folding\" }",
                "Message(\"best 3\")",
                "PhaseFinish"
            ]
        );
    }

    #[test]
    fn phase_and_task_bracket_the_work() {
        let seen = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            seen.lock().unwrap().push(format!("{:?}", event));
        }));

        let value = reporter.phase("Enumerating sequences", || {
            reporter.task(2, || {
                reporter.report(Progress::TaskIncrement);
                reporter.report(Progress::TaskIncrement);
                7
            })
        });
        drop(reporter);

        assert_eq!(value, 7);
        assert_eq!(
            seen.into_inner().unwrap(),
            vec![
                "PhaseStart { name: \"Enumerating sequences\" }",
                "TaskStart { total_steps: 2 }",
                "TaskIncrement",
                "TaskIncrement",
                "TaskFinish",
                "PhaseFinish"
            ]
        );
    }

    #[test]
    fn debug_shows_whether_a_callback_is_installed() {
        assert_eq!(
            format!("{:?}", ProgressReporter::new()),
            "ProgressReporter { has_callback: false }"
        );
    }
}
