use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::One,
            Player::Two => Cell::Two,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player One",
            Player::Two => "Player Two",
        }
    }

    /// Token used when rendering the board as text
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }

    /// The player who moves after `moves_played` plies from the empty board.
    pub fn to_move_after(moves_played: usize) -> Player {
        if moves_played % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::One.name(), "Player One");
        assert_eq!(Player::Two.name(), "Player Two");
    }

    #[test]
    fn test_to_move_after() {
        assert_eq!(Player::to_move_after(0), Player::One);
        assert_eq!(Player::to_move_after(1), Player::Two);
        assert_eq!(Player::to_move_after(42), Player::One);
    }
}
