pub const NAV_OPEN_CLASS: &str = "open";
pub const OVERLAY_SHOW_CLASS: &str = "show";
pub const ESCAPE_KEY: &str = "Escape";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent<'a> {
    ToggleClicked,
    OverlayClicked,
    KeyDown(&'a str),
    LinkClicked { narrow_viewport: bool },
}

/// Every DOM flag the navigation touches, so open and close stay in lockstep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavFlags {
    pub nav_open: bool,
    pub aria_expanded: bool,
    pub overlay_shown: bool,
    pub overlay_hidden: bool,
    pub scroll_locked: bool,
}

impl NavFlags {
    pub fn aria_expanded_value(&self) -> &'static str {
        if self.aria_expanded {
            "true"
        } else {
            "false"
        }
    }

    pub fn root_overflow(&self) -> &'static str {
        if self.scroll_locked {
            "hidden"
        } else {
            ""
        }
    }
}

impl NavState {
    pub fn is_open(self) -> bool {
        self == NavState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            NavState::Open => NavState::Closed,
            NavState::Closed => NavState::Open,
        }
    }

    pub fn flags(self) -> NavFlags {
        let open = self.is_open();
        NavFlags {
            nav_open: open,
            aria_expanded: open,
            overlay_shown: open,
            overlay_hidden: !open,
            scroll_locked: open,
        }
    }

    /// The state to apply after `event`, or `None` when the DOM stays as is.
    pub fn next(self, event: NavEvent<'_>) -> Option<NavState> {
        match event {
            NavEvent::ToggleClicked => Some(self.toggled()),
            NavEvent::OverlayClicked => Some(NavState::Closed),
            NavEvent::KeyDown(key) if key == ESCAPE_KEY && self.is_open() => Some(NavState::Closed),
            NavEvent::KeyDown(_) => None,
            NavEvent::LinkClicked { narrow_viewport } => narrow_viewport.then_some(NavState::Closed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_after_open_restores_closed_flags() {
        let open = NavState::Closed.next(NavEvent::ToggleClicked).expect("toggle applies");
        assert!(open.flags().scroll_locked);
        let closed = open.next(NavEvent::KeyDown("Escape")).expect("escape closes");
        assert_eq!(closed.flags(), NavState::Closed.flags());
        assert_eq!(closed.flags().aria_expanded_value(), "false");
        assert_eq!(closed.flags().root_overflow(), "");
        assert!(closed.flags().overlay_hidden);
    }

    #[test]
    fn escape_while_closed_is_ignored() {
        assert_eq!(NavState::Closed.next(NavEvent::KeyDown("Escape")), None);
        assert_eq!(NavState::Open.next(NavEvent::KeyDown("Enter")), None);
    }

    #[test]
    fn link_click_closes_only_on_narrow_viewports() {
        let wide = NavEvent::LinkClicked {
            narrow_viewport: false,
        };
        let narrow = NavEvent::LinkClicked {
            narrow_viewport: true,
        };
        assert_eq!(NavState::Open.next(wide), None);
        assert_eq!(NavState::Open.next(narrow), Some(NavState::Closed));
    }

    #[test]
    fn overlay_click_always_closes() {
        assert_eq!(NavState::Open.next(NavEvent::OverlayClicked), Some(NavState::Closed));
        assert_eq!(NavState::Closed.next(NavEvent::OverlayClicked), Some(NavState::Closed));
    }
}
