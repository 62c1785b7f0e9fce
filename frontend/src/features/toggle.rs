use std::rc::Rc;
use yew::prelude::*;

/// Open/closed state for the mobile menu and anything else that toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Toggle {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Toggle,
    OutsideClick,
    Escape,
    Navigate,
}

impl Toggle {
    pub fn apply(self, action: ToggleAction) -> Toggle {
        match action {
            ToggleAction::Toggle => match self {
                Toggle::Closed => Toggle::Open,
                Toggle::Open => Toggle::Closed,
            },
            ToggleAction::OutsideClick | ToggleAction::Escape | ToggleAction::Navigate => {
                Toggle::Closed
            }
        }
    }

    pub fn is_open(self) -> bool {
        self == Toggle::Open
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}

impl Reducible for Toggle {
    type Action = ToggleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(Toggle::Closed.apply(ToggleAction::Toggle), Toggle::Open);
        assert_eq!(Toggle::Open.apply(ToggleAction::Toggle), Toggle::Closed);
    }

    #[test]
    fn dismissals_close_an_open_menu() {
        for action in [
            ToggleAction::OutsideClick,
            ToggleAction::Escape,
            ToggleAction::Navigate,
        ] {
            assert_eq!(Toggle::Open.apply(action), Toggle::Closed, "{:?}", action);
        }
    }

    #[test]
    fn dismissals_are_no_ops_when_closed() {
        for action in [
            ToggleAction::OutsideClick,
            ToggleAction::Escape,
            ToggleAction::Navigate,
        ] {
            assert_eq!(Toggle::Closed.apply(action), Toggle::Closed);
        }
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let closed = Rc::new(Toggle::Closed);
        let after = closed.clone().reduce(ToggleAction::Escape);
        assert!(Rc::ptr_eq(&closed, &after));

        let opened = closed.reduce(ToggleAction::Toggle);
        assert_eq!(*opened, Toggle::Open);
    }

    #[test]
    fn aria_expanded_follows_state() {
        assert_eq!(Toggle::Open.aria_expanded(), "true");
        assert_eq!(Toggle::Closed.aria_expanded(), "false");
    }
}
