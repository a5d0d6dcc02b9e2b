//! Screen State Machine
//!
//! Title -> Game -> (PlayerWin | PlayerLose) -> Title, with an optional
//! Credits detour from Title.

use pong_proto::{InputFrame, Screen};

/// Actions that trigger screen transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Begin,
    OpenCredits,
    CloseCredits,
    PlayerWon,
    PlayerLost,
    Restart,
}

/// Result of a screen transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: Screen,
    pub to_state: Screen,
    pub action: ScreenAction,
}

/// Screen Finite State Machine
#[derive(Debug, Clone)]
pub struct ScreenFsm {
    state: Screen,
}

impl ScreenFsm {
    pub fn new() -> Self {
        Self {
            state: Screen::Title,
        }
    }

    /// Get current screen
    pub fn state(&self) -> Screen {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: ScreenAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: ScreenAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            log::info!("Screen {:?} -> {:?} on {:?}", from_state, next_state, action);
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next screen for a given action (if valid)
    fn get_next_state(&self, action: ScreenAction) -> Option<Screen> {
        match (self.state, action) {
            // From Title
            (Screen::Title, ScreenAction::Begin) => Some(Screen::Game),
            (Screen::Title, ScreenAction::OpenCredits) => Some(Screen::Credits),

            // From Credits
            (Screen::Credits, ScreenAction::CloseCredits) => Some(Screen::Title),

            // From Game
            (Screen::Game, ScreenAction::PlayerWon) => Some(Screen::PlayerWin),
            (Screen::Game, ScreenAction::PlayerLost) => Some(Screen::PlayerLose),

            // From the end screens
            (Screen::PlayerWin, ScreenAction::Restart) => Some(Screen::Title),
            (Screen::PlayerLose, ScreenAction::Restart) => Some(Screen::Title),

            // Invalid transition
            _ => None,
        }
    }

    /// Reset to Title
    pub fn reset(&mut self) {
        self.state = Screen::Title;
    }

    /// Check if the simulation should run
    pub fn is_playing(&self) -> bool {
        self.state == Screen::Game
    }

    /// Check if on an end screen
    pub fn is_game_over(&self) -> bool {
        matches!(self.state, Screen::PlayerWin | Screen::PlayerLose)
    }
}

impl Default for ScreenFsm {
    fn default() -> Self {
        Self::new()
    }
}

/// Map the inputs held on `screen` to at most one action.
///
/// Game has no input-driven transitions; the score decides when it ends.
/// On Title the credits key wins when both it and begin are held.
pub fn action_for(
    screen: Screen,
    input: &InputFrame,
    credits_enabled: bool,
) -> Option<ScreenAction> {
    match screen {
        Screen::Title => {
            if credits_enabled && input.credits_open {
                Some(ScreenAction::OpenCredits)
            } else if input.begin {
                Some(ScreenAction::Begin)
            } else {
                None
            }
        }
        Screen::Credits => input.credits_close.then_some(ScreenAction::CloseCredits),
        Screen::Game => None,
        Screen::PlayerWin | Screen::PlayerLose => input.restart.then_some(ScreenAction::Restart),
    }
}
