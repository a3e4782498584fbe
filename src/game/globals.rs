use lazy_static::lazy_static;
use std::collections::HashSet;

/// The number of squares on the game board.
pub const NUM_SQUARES: u8 = 40;

/// The histogram slot that counts jail entries. Jail gets its own slot
/// so that being sent to jail isn't conflated with landing on the
/// "just visiting" square.
pub const JAIL_SLOT: usize = NUM_SQUARES as usize;

/// The position of the 'Go to Jail' square.
pub const GO_TO_JAIL_POSITION: u8 = 30;

/// The square a token released from jail moves from.
pub const JUST_VISITING_POSITION: u8 = 10;

/// The number of cards in each deck.
pub const DECK_SIZE: usize = 16;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// The movement effect printed on a Chance or Community Chest card.
pub enum CardEffect {
    /// The card doesn't move the token (fines, bonuses and the like).
    NoMovement,
    /// Move directly to the specified square.
    AdvanceTo(u8),
    /// Move forward to the nearest utility.
    AdvanceToUtility,
    /// Move forward to the nearest railroad.
    AdvanceToRailroad,
    /// Move back three squares.
    GoBack3,
    /// Go directly to jail, without passing 'Go'.
    GoToJail,
}

/// The full Chance card set. 9 of the 16 cards move the token.
pub const CHANCE_CARDS: [CardEffect; DECK_SIZE] = [
    CardEffect::AdvanceTo(0),
    CardEffect::AdvanceTo(5),
    CardEffect::AdvanceTo(11),
    CardEffect::AdvanceTo(24),
    CardEffect::AdvanceTo(39),
    CardEffect::GoToJail,
    CardEffect::AdvanceToUtility,
    CardEffect::AdvanceToRailroad,
    CardEffect::GoBack3,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
];

/// The full Community Chest card set. Only 2 of the 16 cards move the token.
pub const CHEST_CARDS: [CardEffect; DECK_SIZE] = [
    CardEffect::AdvanceTo(0),
    CardEffect::GoToJail,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
    CardEffect::NoMovement,
];

lazy_static! {
    /// Positions of the Chance tiles on the game board.
    pub static ref CHANCE_POSITIONS: HashSet<u8> = HashSet::from([7, 22, 36]);

    /// Positions of the Community Chest tiles on the game board.
    pub static ref CHEST_POSITIONS: HashSet<u8> = HashSet::from([2, 17, 33]);

    /// Positions of the railroad tiles on the game board.
    pub static ref RAILROAD_POSITIONS: HashSet<u8> = HashSet::from([5, 15, 25, 35]);

    /// Positions of the utility tiles on the game board.
    pub static ref UTILITY_POSITIONS: HashSet<u8> = HashSet::from([12, 28]);
}
