use crate::common::TabKey;
use std::ops::ControlFlow;

/// State of the simulated installer download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DownloadState {
    pub progress: u8,
    pub is_downloading: bool,
}

impl DownloadState {
    /// Begin a new run. Returns false, changing nothing, while a run is active.
    pub fn start(&mut self) -> bool {
        if self.is_downloading {
            return false;
        }
        self.progress = 0;
        self.is_downloading = true;
        true
    }

    /// Advance by `step` percent, clamped to 100. Completion stops the run in the same tick.
    pub fn tick(&mut self, step: u8) -> ControlFlow<()> {
        if !self.is_downloading {
            return ControlFlow::Break(());
        }
        self.progress = self.progress.saturating_add(step.max(1)).min(100);
        if self.progress >= 100 {
            self.is_downloading = false;
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.is_downloading && self.progress >= 100
    }
}

// Tabs next to the download card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallTab {
    #[default]
    Requirements,
    Installation,
}

impl TabKey for InstallTab {
    const ALL: &'static [Self] = &[InstallTab::Requirements, InstallTab::Installation];

    fn key(self) -> &'static str {
        match self {
            InstallTab::Requirements => "requirements",
            InstallTab::Installation => "installation",
        }
    }

    fn label(self) -> &'static str {
        match self {
            InstallTab::Requirements => "System Requirements",
            InstallTab::Installation => "Installation Guide",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::TabSwitch;

    #[test]
    fn test_install_tabs_closed_set() {
        assert_eq!(InstallTab::default(), InstallTab::Requirements);
        assert_eq!(InstallTab::parse("requirements"), Some(InstallTab::Requirements));
        assert_eq!(InstallTab::parse("installation"), Some(InstallTab::Installation));
        assert_eq!(InstallTab::parse("troubleshooting"), None);
    }

    #[test]
    fn test_exactly_one_install_tab_active() {
        let mut tabs = TabSwitch::new(InstallTab::default());
        for &selected in InstallTab::ALL {
            tabs.select(selected);
            let active: Vec<_> = InstallTab::ALL
                .iter()
                .copied()
                .filter(|&tab| tabs.is_active(tab))
                .collect();
            assert_eq!(active, vec![selected]);
        }

        assert!(!tabs.select_key("Installation"));
        assert_eq!(tabs.active(), InstallTab::Installation);
    }

    #[test]
    fn test_completed_run_can_restart_from_zero() {
        let mut state = DownloadState {
            progress: 95,
            is_downloading: true,
        };
        assert!(state.tick(5).is_break());
        assert!(state.is_complete());

        assert!(state.start());
        assert_eq!(state.progress, 0);
        assert!(!state.is_complete());
    }
}
