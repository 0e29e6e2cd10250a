use std::fmt::{Debug, Display, Formatter};

/// Step of the encoding pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Stage {
    Classification,
    Interleaving,
    Translation,
}

impl Stage {
    pub const VALUES: [Stage; 3] = [Stage::Classification, Stage::Interleaving, Stage::Translation];
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Classification => "Classifying differences",
            Stage::Interleaving => "Interleaving strands",
            Stage::Translation => "Translating codons",
        };
        write!(f, "{}", name)
    }
}

pub trait ProgressNotifier: Debug + Send + Sync {
    fn stage_started(&self, stage: Stage);

    fn set_iter_num(&self, num_iter: u64);

    fn inc_iter(&self);
}

impl<T: ProgressNotifier> ProgressNotifier for &T {
    fn stage_started(&self, stage: Stage) {
        T::stage_started(self, stage)
    }

    fn set_iter_num(&self, num_iter: u64) {
        T::set_iter_num(self, num_iter)
    }

    fn inc_iter(&self) {
        T::inc_iter(self)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct DummyProgressNotifier;

impl ProgressNotifier for DummyProgressNotifier {
    fn stage_started(&self, _stage: Stage) {
        // do nothing
    }

    fn set_iter_num(&self, _num_iter: u64) {
        // do nothing
    }

    fn inc_iter(&self) {
        // do nothing
    }
}

#[cfg(test)]
mod tests {
    use crate::progress::{DummyProgressNotifier, ProgressNotifier, Stage};

    #[test]
    fn test_dummy_progress_notifier() {
        let notifier = DummyProgressNotifier;
        notifier.stage_started(Stage::Classification);
        let notifier_2 = notifier;
        notifier_2.inc_iter();
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(format!("{}", Stage::Translation), "Translating codons");
    }
}
