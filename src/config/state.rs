// src/config/state.rs
use super::options::AppOptions;

/// Sidebar navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NavMode {
    #[default]
    IndividualStudent,
    BulkDownload,
}

/// Tabs inside the individual student view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StudentTab {
    #[default]
    LeetCode,
    HackerRank,
    Summary,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active page index into router::PAGES
    pub current_page_index: usize,
    pub student_tab: StudentTab,

    pub window_w: u32,
    pub window_h: u32,
    pub last_browse_dir: String,

    /// Show the column requirements panel under the upload bar
    pub show_requirements: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            student_tab: StudentTab::default(),
            window_w: 1100,
            window_h: 760,
            last_browse_dir: s!(),
            show_requirements: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
