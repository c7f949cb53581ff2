use hpfold::core::scoring::ContactPolicy;

pub struct DefaultsConfig {
    pub contact_policy: ContactPolicy,
    pub bound_pruning: bool,
    pub show_best: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            contact_policy: ContactPolicy::NonConsecutive,
            bound_pruning: true,
            show_best: 1,
        }
    }
}
