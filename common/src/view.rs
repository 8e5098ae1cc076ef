use std::collections::{BTreeMap, BTreeSet};

/// Text regions the panel writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Target {
    Toast,
    Msg,
    State,
    Temp,
    Left,
}

impl Target {
    pub const ALL: [Target; 5] = [
        Target::Toast,
        Target::Msg,
        Target::State,
        Target::Temp,
        Target::Left,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Toast => "toast",
            Self::Msg => "msg",
            Self::State => "state",
            Self::Temp => "temp",
            Self::Left => "left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Input {
    Mins,
}

impl Input {
    pub fn id(self) -> &'static str {
        match self {
            Self::Mins => "mins",
        }
    }
}

/// Which of the three AC status regions are currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcTargets {
    pub state: bool,
    pub temp: bool,
    pub left: bool,
}

impl AcTargets {
    pub fn of<V: View + ?Sized>(view: &V) -> Self {
        Self {
            state: view.has(Target::State),
            temp: view.has(Target::Temp),
            left: view.has(Target::Left),
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.state || self.temp || self.left)
    }
}

/// The display the panel drives. Every lookup is optional: writing to a
/// region that is not shown is silently ignored by callers.
pub trait View: Send + 'static {
    fn has(&self, target: Target) -> bool;

    fn text(&self, target: Target) -> Option<&str>;

    fn set_text(&mut self, target: Target, text: &str);

    fn input_value(&self, input: Input) -> Option<String>;

    fn apply(&mut self, updates: &[(Target, String)]) {
        for (target, text) in updates {
            if self.has(*target) {
                self.set_text(*target, text);
            }
        }
    }
}

/// A view that keeps region text in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    regions: BTreeMap<Target, String>,
    inputs: BTreeMap<Input, String>,
}

impl MemoryView {
    pub fn with_targets(targets: impl IntoIterator<Item = Target>) -> Self {
        Self {
            regions: targets
                .into_iter()
                .map(|target| (target, String::new()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn full() -> Self {
        let mut view = Self::with_targets(Target::ALL);
        view.inputs.insert(Input::Mins, String::new());
        view
    }

    pub fn set_input(&mut self, input: Input, value: impl Into<String>) {
        self.inputs.insert(input, value.into());
    }

    pub fn remove_input(&mut self, input: Input) {
        self.inputs.remove(&input);
    }

    /// Replaces the set of shown regions. Regions that stay shown keep their text.
    pub fn show_only(&mut self, targets: impl IntoIterator<Item = Target>) {
        let keep: BTreeSet<Target> = targets.into_iter().collect();
        self.regions.retain(|target, _| keep.contains(target));
        for target in keep {
            self.regions.entry(target).or_default();
        }
    }

    pub fn regions(&self) -> impl Iterator<Item = (Target, &str)> {
        self.regions
            .iter()
            .map(|(target, text)| (*target, text.as_str()))
    }
}

impl View for MemoryView {
    fn has(&self, target: Target) -> bool {
        self.regions.contains_key(&target)
    }

    fn text(&self, target: Target) -> Option<&str> {
        self.regions.get(&target).map(String::as_str)
    }

    fn set_text(&mut self, target: Target, text: &str) {
        if let Some(region) = self.regions.get_mut(&target) {
            region.clear();
            region.push_str(text);
        }
    }

    fn input_value(&self, input: Input) -> Option<String> {
        self.inputs.get(&input).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_to_missing_regions_are_ignored() {
        let mut view = MemoryView::with_targets([Target::Msg]);
        view.set_text(Target::Temp, "23");

        assert!(!view.has(Target::Temp));
        assert_eq!(view.text(Target::Temp), None);
    }

    #[test]
    fn ac_targets_reflect_presence() {
        let view = MemoryView::with_targets([Target::Toast, Target::Msg]);
        assert!(AcTargets::of(&view).is_empty());

        let view = MemoryView::with_targets([Target::Left]);
        let targets = AcTargets::of(&view);
        assert!(!targets.is_empty());
        assert!(targets.left && !targets.state && !targets.temp);
    }

    #[test]
    fn show_only_keeps_surviving_text() {
        let mut view = MemoryView::full();
        view.set_text(Target::Msg, "hello");
        view.set_text(Target::Temp, "23");

        view.show_only([Target::Toast, Target::Msg]);

        assert_eq!(view.text(Target::Msg), Some("hello"));
        assert!(!view.has(Target::Temp));

        view.show_only(Target::ALL);
        assert_eq!(view.text(Target::Temp), Some(""));
    }

    #[test]
    fn removed_input_reads_as_none() {
        let mut view = MemoryView::full();
        view.set_input(Input::Mins, "15");
        assert_eq!(view.input_value(Input::Mins), Some("15".to_string()));

        view.remove_input(Input::Mins);
        assert_eq!(view.input_value(Input::Mins), None);
    }
}
