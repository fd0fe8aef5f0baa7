#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub font_family: Option<String>,
    /// Set once the mode has been chosen, by the OS preference or a toggle.
    pub theme_seeded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Seed the mode from the OS preference. Ignored after the first time.
    InitTheme { prefers_dark: bool },
    ToggleTheme,
    SetFont(String),
}

pub fn reduce(state: UiState, action: UiAction) -> UiState {
    match action {
        UiAction::InitTheme { prefers_dark } if !state.theme_seeded => UiState {
            dark_mode: prefers_dark,
            theme_seeded: true,
            ..state
        },
        UiAction::InitTheme { .. } => state,
        UiAction::ToggleTheme => UiState {
            dark_mode: !state.dark_mode,
            theme_seeded: true,
            ..state
        },
        UiAction::SetFont(font) => UiState {
            font_family: Some(font),
            ..state
        },
    }
}
