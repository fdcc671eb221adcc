//! Game action definitions

/// Everything the player can do with the keyboard
///
/// Keyboard mapping:
/// - Left / A  = MoveLeft
/// - Right / D = MoveRight
/// - Up / W    = Jump
/// - Space     = Shoot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Shoot,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::MoveLeft, Action::MoveRight, Action::Jump, Action::Shoot];
}

/// Held state of every action for one simulation step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub shoot: bool,
}

impl Controls {
    pub fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::MoveLeft => self.left = held,
            Action::MoveRight => self.right = held,
            Action::Jump => self.up = held,
            Action::Shoot => self.shoot = held,
        }
    }

    #[cfg(test)]
    pub fn is_held(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.left,
            Action::MoveRight => self.right,
            Action::Jump => self.up,
            Action::Shoot => self.shoot,
        }
    }
}
