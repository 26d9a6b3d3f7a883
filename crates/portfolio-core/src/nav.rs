//! Mobile navigation drawer state.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationController {
    open: bool,
}

/// What triggered a possible close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent<'a> {
    Toggle,
    Key(&'a str),
    LinkActivated,
    /// A click somewhere on the page; flags say whether it hit the drawer or its toggle.
    Click { in_nav: bool, in_toggle: bool },
}

impl NavigationController {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Apply an event; returns true when the open state changed.
    pub fn handle(&mut self, event: NavEvent<'_>) -> bool {
        let before = self.open;
        match event {
            NavEvent::Toggle => {
                self.toggle();
            }
            NavEvent::Key("Escape") | NavEvent::LinkActivated => self.close(),
            NavEvent::Key(_) => {}
            NavEvent::Click { in_nav, in_toggle } => {
                if self.open && !in_nav && !in_toggle {
                    self.close();
                }
            }
        }
        before != self.open
    }

    #[inline]
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Body `overflow` while the drawer is in this state.
    #[inline]
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}
