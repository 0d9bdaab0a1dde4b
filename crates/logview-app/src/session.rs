//! Viewer session: active tab, auto-scroll and theme.

/// Top-level tabs. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Realtime,
    History,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Realtime => "Realtime",
            Tab::History => "History",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Realtime => 0,
            Tab::History => 1,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Tab::Realtime => Tab::History,
            Tab::History => Tab::Realtime,
        }
    }
}

/// View preferences for one run of the viewer.
///
/// Whether streaming is enabled, and whether the user disconnected manually,
/// live on [`ConnectionSupervisor`](crate::supervisor::ConnectionSupervisor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    active_tab: Tab,
    auto_scroll_enabled: bool,
    theme_dark: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl Session {
    pub fn new(auto_scroll_enabled: bool, theme_dark: bool) -> Self {
        Self {
            active_tab: Tab::Realtime,
            auto_scroll_enabled,
            theme_dark,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn auto_scroll_enabled(&self) -> bool {
        self.auto_scroll_enabled
    }

    pub fn theme_dark(&self) -> bool {
        self.theme_dark
    }

    /// Make `tab` the active tab. Never triggers a fetch.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Flip auto-scroll. Returns `true` when the live view should jump to the
    /// bottom right away.
    pub fn toggle_auto_scroll(&mut self) -> bool {
        self.auto_scroll_enabled = !self.auto_scroll_enabled;
        self.auto_scroll_enabled
    }

    pub fn toggle_theme(&mut self) {
        self.theme_dark = !self.theme_dark;
    }

    /// New live entries should pull the view to the bottom.
    pub fn should_follow_live(&self) -> bool {
        self.auto_scroll_enabled && self.active_tab == Tab::Realtime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let session = Session::default();
        assert_eq!(session.active_tab(), Tab::Realtime);
        assert!(session.auto_scroll_enabled());
        assert!(session.theme_dark());
    }

    #[test]
    fn test_switch_tab_is_exclusive() {
        let mut session = Session::default();
        session.switch_tab(Tab::History);
        assert_eq!(session.active_tab(), Tab::History);
        session.switch_tab(Tab::History);
        assert_eq!(session.active_tab(), Tab::History);
        session.switch_tab(session.active_tab().other());
        assert_eq!(session.active_tab(), Tab::Realtime);
    }

    #[test]
    fn test_toggle_auto_scroll_signals_scroll_on_enable() {
        let mut session = Session::new(false, true);
        assert!(session.toggle_auto_scroll());
        assert!(!session.toggle_auto_scroll());
        assert!(!session.auto_scroll_enabled());
    }

    #[test]
    fn test_follow_only_on_realtime_tab() {
        let mut session = Session::default();
        assert!(session.should_follow_live());
        session.switch_tab(Tab::History);
        assert!(!session.should_follow_live());
    }

    #[test]
    fn test_toggle_theme() {
        let mut session = Session::default();
        session.toggle_theme();
        assert!(!session.theme_dark());
    }

    #[test]
    fn test_tab_labels_and_indices() {
        assert_eq!(Tab::Realtime.label(), "Realtime");
        assert_eq!(Tab::History.index(), 1);
    }
}
