use rand::Rng;

use super::deck::Deck;
use super::globals::*;
use crate::histogram::Histogram;

#[derive(Debug, Copy, Clone)]
/// The outcome of rolling two dice.
pub struct DiceRoll {
    /// The sum of the two dice.
    pub sum: u8,
    /// Whether both the dice resulted in the same number.
    pub is_double: bool,
}

impl DiceRoll {
    /// Roll two independent six-sided dice. Summing two fair dice is
    /// what gives the sums their triangular distribution, so the dice
    /// are sampled separately rather than picking a sum directly.
    pub fn random<R: Rng>(rng: &mut R) -> DiceRoll {
        let first: u8 = rng.gen_range(1..=6);
        let second: u8 = rng.gen_range(1..=6);

        DiceRoll {
            sum: first + second,
            is_double: first == second,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Where the token is. Being in jail is not the same as standing on
/// the "just visiting" square.
pub enum Position {
    /// On the square with this index (0 is 'Go').
    OnBoard(u8),
    /// Locked up in jail.
    InJail,
}

/// A single token's walk around the board: its position and its run
/// of consecutive doubles.
pub struct Board {
    position: Position,
    doubles_rolled: u8,
}

impl Board {
    /// Create a board with the token on 'Go'.
    pub fn new() -> Board {
        Board {
            position: Position::OnBoard(0),
            doubles_rolled: 0,
        }
    }

    /// The token's current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Play out one turn: roll the dice, move, apply whatever the
    /// square we landed on triggers, and record where we ended up.
    pub fn take_turn<R: Rng>(
        &mut self,
        rng: &mut R,
        chance: &mut Deck,
        chest: &mut Deck,
        results: &mut Histogram,
    ) {
        let roll = DiceRoll::random(rng);
        self.apply_roll(roll, rng, chance, chest, results);
    }

    /// Apply one already-rolled turn. Split out from `take_turn` so the
    /// dice can be forced.
    fn apply_roll<R: Rng>(
        &mut self,
        roll: DiceRoll,
        rng: &mut R,
        chance: &mut Deck,
        chest: &mut Deck,
        results: &mut Histogram,
    ) {
        if roll.is_double {
            self.doubles_rolled += 1;
        } else {
            self.doubles_rolled = 0;
        }

        if self.doubles_rolled == 3 {
            // Speeding: straight to jail, and the roll's distance is
            // forfeit. No square trigger fires on the way.
            self.doubles_rolled = 0;
            self.send_to_jail();
        } else {
            let landed = self.move_by(roll.sum);

            // At most one trigger fires per landing, in this priority
            if landed == GO_TO_JAIL_POSITION {
                self.send_to_jail();
            } else if CHEST_POSITIONS.contains(&landed) {
                let card = chest.draw(rng);
                self.apply_card(card);
            } else if CHANCE_POSITIONS.contains(&landed) {
                let card = chance.draw(rng);
                self.apply_card(card);
            }
        }

        results.record(self.histogram_slot());
    }

    /// Apply a card's movement effect. Wherever the card puts the
    /// token, the square it ends up on does not trigger another card
    /// draw or the 'Go to Jail' check.
    pub fn apply_card(&mut self, card: CardEffect) {
        match card {
            CardEffect::NoMovement => (),
            CardEffect::AdvanceTo(square) => self.move_to(square),
            CardEffect::AdvanceToUtility => self.advance_to_utility(),
            CardEffect::AdvanceToRailroad => self.advance_to_railroad(),
            CardEffect::GoBack3 => self.move_back(3),
            CardEffect::GoToJail => self.send_to_jail(),
        }
    }

    /// The square the next move counts from. A jailed token is
    /// released to the "just visiting" square and moves from there,
    /// with no free distance for having been in jail.
    fn departure_square(&self) -> u8 {
        match self.position {
            Position::OnBoard(square) => square,
            Position::InJail => JUST_VISITING_POSITION,
        }
    }

    /// Move forward by `spaces` tiles, wrapping around past 'Go'.
    /// Return the square landed on.
    fn move_by(&mut self, spaces: u8) -> u8 {
        let landed = (self.departure_square() + spaces) % NUM_SQUARES;
        self.position = Position::OnBoard(landed);
        landed
    }

    /// Move backward by `spaces` tiles, wrapping around behind 'Go'.
    fn move_back(&mut self, spaces: u8) {
        self.move_by(NUM_SQUARES - spaces);
    }

    /// Put the token directly on the specified square.
    fn move_to(&mut self, square: u8) {
        self.position = Position::OnBoard(square);
    }

    /// Lock the token up. This does not touch the doubles counter.
    fn send_to_jail(&mut self) {
        self.position = Position::InJail;
    }

    /// Move forward to the nearest utility (Electric Company at 12 or
    /// Water Works at 28).
    fn advance_to_utility(&mut self) {
        let square = self.departure_square();

        if square > 12 && square < 28 {
            self.move_to(28);
        } else {
            self.move_to(12);
        }
    }

    /// Move forward to the nearest railroad. Railroads sit at every
    /// position ending in 5, so the distance to travel only depends
    /// on the last digit of the current position.
    fn advance_to_railroad(&mut self) {
        let past_railroad = (self.departure_square() + 5) % 10;
        let distance = if past_railroad == 0 {
            0
        } else {
            10 - past_railroad
        };

        self.move_by(distance);
    }

    /// The histogram slot for the current position.
    fn histogram_slot(&self) -> usize {
        match self.position {
            Position::OnBoard(square) => square as usize,
            Position::InJail => JAIL_SLOT,
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}
