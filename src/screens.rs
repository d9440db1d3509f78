//! Screen navigation state machine
//!
//! Menu, rules, high score, game, and game over screens. The host shows the
//! screen the navigator reports and forwards button presses as actions.

use serde::Serialize;

/// Visible screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Menu,
    Rules,
    HighScore,
    Game,
    GameOver,
}

/// Navigation triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Menu "Play"
    Play,
    ShowRules,
    ShowHighScore,
    /// Close rules or high score
    Close,
    /// Session reached the win score
    GameEnded,
    /// Game over "Restart"
    Restart,
    /// "Menu" from the game or game over screen
    BackToMenu,
}

/// Result of applying an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub changed: bool,
    pub from: Screen,
    pub to: Screen,
    pub action: NavAction,
}

/// Screen navigation FSM
#[derive(Debug, Clone)]
pub struct Navigator {
    screen: Screen,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            screen: Screen::Menu,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn can_apply(&self, action: NavAction) -> bool {
        self.next_screen(action).is_some()
    }

    /// Apply an action; invalid actions leave the screen unchanged
    pub fn apply(&mut self, action: NavAction) -> Transition {
        let from = self.screen;
        match self.next_screen(action) {
            Some(to) => {
                self.screen = to;
                log::debug!("Screen {:?} -> {:?} via {:?}", from, to, action);
                Transition {
                    changed: true,
                    from,
                    to,
                    action,
                }
            }
            None => {
                log::debug!("Ignoring {:?} on {:?}", action, from);
                Transition {
                    changed: false,
                    from,
                    to: from,
                    action,
                }
            }
        }
    }

    fn next_screen(&self, action: NavAction) -> Option<Screen> {
        use NavAction::*;
        use Screen::*;

        match (self.screen, action) {
            (Menu, Play) => Some(Game),
            (Menu, ShowRules) => Some(Rules),
            (Menu, ShowHighScore) => Some(HighScore),
            (Rules | HighScore, Close) => Some(Menu),
            (Game, GameEnded) => Some(GameOver),
            (GameOver, Restart) => Some(Game),
            (Game | GameOver, BackToMenu) => Some(Menu),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_round() {
        let mut nav = Navigator::new();
        assert_eq!(nav.screen(), Screen::Menu);

        assert!(nav.apply(NavAction::Play).changed);
        assert_eq!(nav.screen(), Screen::Game);

        assert!(nav.apply(NavAction::GameEnded).changed);
        assert_eq!(nav.screen(), Screen::GameOver);

        assert!(nav.apply(NavAction::Restart).changed);
        assert_eq!(nav.screen(), Screen::Game);

        nav.apply(NavAction::GameEnded);
        assert!(nav.apply(NavAction::BackToMenu).changed);
        assert_eq!(nav.screen(), Screen::Menu);
    }

    #[test]
    fn test_info_screens_close_to_menu() {
        let mut nav = Navigator::new();
        nav.apply(NavAction::ShowRules);
        assert_eq!(nav.screen(), Screen::Rules);
        nav.apply(NavAction::Close);
        assert_eq!(nav.screen(), Screen::Menu);

        nav.apply(NavAction::ShowHighScore);
        assert_eq!(nav.screen(), Screen::HighScore);
        nav.apply(NavAction::Close);
        assert_eq!(nav.screen(), Screen::Menu);
    }

    #[test]
    fn test_leave_mid_game_then_play_again() {
        let mut nav = Navigator::new();
        nav.apply(NavAction::Play);

        let t = nav.apply(NavAction::BackToMenu);
        assert!(t.changed);
        assert_eq!(nav.screen(), Screen::Menu);

        assert!(nav.apply(NavAction::Play).changed);
        assert_eq!(nav.screen(), Screen::Game);
    }

    #[test]
    fn test_invalid_actions_ignored() {
        let mut nav = Navigator::new();
        let t = nav.apply(NavAction::Restart);
        assert!(!t.changed);
        assert_eq!(t.to, Screen::Menu);

        nav.apply(NavAction::Play);
        assert!(!nav.can_apply(NavAction::ShowRules));
        assert!(!nav.apply(NavAction::Play).changed);
        assert_eq!(nav.screen(), Screen::Game);
    }
}
