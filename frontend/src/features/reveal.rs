//! One-shot entrance bookkeeping for observed elements.

pub const GALLERY_STAGGER_MS: u32 = 120;
pub const GALLERY_ROOT_MARGIN: &str = "-10% 0px -20% 0px";
pub const HISTORY_ROOT_MARGIN: &str = "-20% 0px -60% 0px";

/// Entrance progress of one element. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Entrance {
    #[default]
    Unseen,
    /// Seen; waiting on its stagger delay.
    Scheduled,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealPlan {
    pub index: usize,
    pub delay_ms: u32,
}

/// A group of elements that reveal once each, staggered by declared order.
#[derive(Clone, Debug)]
pub struct RevealGroup {
    states: Vec<Entrance>,
    stagger_ms: u32,
}

impl RevealGroup {
    pub fn new(len: usize, stagger_ms: u32) -> Self {
        Self {
            states: vec![Entrance::Unseen; len],
            stagger_ms,
        }
    }

    /// Indices that intersected in one observer callback. Each returned plan
    /// should be revealed after its delay and dropped from observation.
    pub fn observe_batch(&mut self, intersecting: &[usize]) -> Vec<RevealPlan> {
        let mut plans = Vec::new();
        for &index in intersecting {
            let Some(state) = self.states.get_mut(index) else {
                continue;
            };
            if *state == Entrance::Unseen {
                *state = Entrance::Scheduled;
                plans.push(RevealPlan {
                    index,
                    delay_ms: index as u32 * self.stagger_ms,
                });
            }
        }
        plans
    }

    pub fn confirm(&mut self, index: usize) {
        if let Some(state) = self.states.get_mut(index) {
            if *state < Entrance::Revealed {
                *state = Entrance::Revealed;
            }
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.states.iter().filter(|s| **s == Entrance::Revealed).count()
    }

    pub fn is_complete(&self) -> bool {
        self.revealed_count() == self.states.len()
    }
}

/// History modules: a sticky `in-view` flag per module plus the year label,
/// which follows whichever module intersected last.
#[derive(Clone, Debug)]
pub struct Timeline {
    years: Vec<Option<String>>,
    in_view: Vec<bool>,
    label: Option<String>,
}

impl Timeline {
    pub fn new(years: Vec<Option<String>>) -> Self {
        let in_view = vec![false; years.len()];
        Self {
            years,
            in_view,
            label: None,
        }
    }

    /// Returns the indices that entered view for the first time.
    pub fn on_entries(&mut self, entries: &[(usize, bool)]) -> Vec<usize> {
        let mut entered = Vec::new();
        for &(index, intersecting) in entries {
            if !intersecting || index >= self.years.len() {
                continue;
            }
            if !self.in_view[index] {
                self.in_view[index] = true;
                entered.push(index);
            }
            if let Some(year) = &self.years[index] {
                self.label = Some(year.clone());
            }
        }
        entered
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_staggers_by_declared_position() {
        let mut group = RevealGroup::new(6, GALLERY_STAGGER_MS);
        let plans = group.observe_batch(&[4, 1, 2]);
        assert_eq!(
            plans,
            vec![
                RevealPlan { index: 4, delay_ms: 480 },
                RevealPlan { index: 1, delay_ms: 120 },
                RevealPlan { index: 2, delay_ms: 240 },
            ]
        );
        assert_eq!(group.states[4], Entrance::Scheduled);
        assert_eq!(group.states[0], Entrance::Unseen);
    }

    #[test]
    fn entrance_is_one_shot() {
        let mut group = RevealGroup::new(3, 100);
        assert_eq!(group.observe_batch(&[0]).len(), 1);
        assert!(group.observe_batch(&[0]).is_empty());

        group.confirm(0);
        assert_eq!(group.states[0], Entrance::Revealed);
        assert!(group.observe_batch(&[0, 0]).is_empty());
        assert_eq!(group.states[0], Entrance::Revealed);
    }

    #[test]
    fn duplicate_index_in_one_batch_plans_once() {
        let mut group = RevealGroup::new(2, 50);
        assert_eq!(group.observe_batch(&[1, 1]).len(), 1);
    }

    #[test]
    fn confirm_never_regresses_and_ignores_bad_indices() {
        let mut group = RevealGroup::new(2, 0);
        group.confirm(1);
        group.confirm(1);
        group.confirm(9);
        assert_eq!(group.revealed_count(), 1);
        assert!(!group.is_complete());
        assert!(group.observe_batch(&[7]).is_empty());

        group.confirm(0);
        assert!(group.is_complete());
    }

    #[test]
    fn timeline_keeps_in_view_and_updates_year_every_time() {
        let mut timeline = Timeline::new(vec![
            Some("1998".to_string()),
            None,
            Some("2012".to_string()),
        ]);

        assert_eq!(timeline.on_entries(&[(0, true)]), vec![0]);
        assert_eq!(timeline.label(), Some("1998"));

        assert_eq!(timeline.on_entries(&[(2, true), (0, false)]), vec![2]);
        assert_eq!(timeline.label(), Some("2012"));
        assert!(timeline.in_view[0]);

        // scrolling back up re-labels without re-entering
        assert!(timeline.on_entries(&[(0, true)]).is_empty());
        assert_eq!(timeline.label(), Some("1998"));

        // a module without a year leaves the label alone
        timeline.on_entries(&[(1, true)]);
        assert_eq!(timeline.label(), Some("1998"));
        assert!(timeline.in_view[1]);
    }
}
