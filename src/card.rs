//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::CardParseError;

/// Card suit.
///
/// Suits carry no ordering that matters to the rules; the ordinal is only
/// used for display and for the canonical deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades = 1,
    /// Hearts.
    Hearts = 2,
    /// Diamonds.
    Diamonds = 3,
    /// Clubs.
    Clubs = 4,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the display ordinal (1 = Spades .. 4 = Clubs).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }

    const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'S' | 's' | '♠' => Some(Self::Spades),
            'H' | 'h' | '♥' => Some(Self::Hearts),
            'D' | 'd' | '♦' => Some(Self::Diamonds),
            'C' | 'c' | '♣' => Some(Self::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, valued 2 through 14 with the ace high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce.
    Two = 2,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the numeric value (2..=14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "Deuce",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    fn from_symbol(s: &str) -> Option<Self> {
        let rank = match s {
            "2" => Self::Two,
            "3" => Self::Three,
            "4" => Self::Four,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            "8" => Self::Eight,
            "9" => Self::Nine,
            "T" | "t" | "10" => Self::Ten,
            "J" | "j" => Self::Jack,
            "Q" | "q" => Self::Queen,
            "K" | "k" => Self::King,
            "A" | "a" => Self::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|rank| rank.value() == value)
            .ok_or(CardParseError::InvalidRank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the two-character short form, e.g. `AS` or `TH`.
    #[must_use]
    pub fn short(&self) -> [char; 2] {
        [self.rank.symbol(), self.suit.symbol()]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses short notation: a rank (`2`-`9`, `T`/`10`, `J`, `Q`, `K`, `A`)
    /// followed by a suit letter or symbol (`S`, `H`, `D`, `C`, `♠`...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or(CardParseError::InvalidLength)?;
        let rank_part = chars.as_str();
        if rank_part.is_empty() || rank_part.len() > 2 {
            return Err(CardParseError::InvalidLength);
        }

        let rank = Rank::from_symbol(rank_part).ok_or(CardParseError::InvalidRank)?;
        let suit = Suit::from_symbol(suit_char).ok_or(CardParseError::InvalidSuit)?;
        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn rank_values_run_two_through_fourteen() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::try_from(13), Ok(Rank::King));
        assert_eq!(Rank::try_from(1), Err(CardParseError::InvalidRank));
        assert_eq!(Rank::try_from(15), Err(CardParseError::InvalidRank));
    }

    #[test]
    fn suit_ordinals() {
        assert_eq!(Suit::Spades.ordinal(), 1);
        assert_eq!(Suit::Hearts.ordinal(), 2);
        assert_eq!(Suit::Clubs.ordinal(), 4);
    }

    #[test]
    fn parses_short_notation() {
        assert_eq!("AS".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("th".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("10D".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!("8♣".parse::<Card>(), Ok(Card::new(Rank::Eight, Suit::Clubs)));
        assert_eq!("".parse::<Card>(), Err(CardParseError::InvalidLength));
        assert_eq!("S".parse::<Card>(), Err(CardParseError::InvalidLength));
        assert_eq!("1S".parse::<Card>(), Err(CardParseError::InvalidRank));
        assert_eq!("AX".parse::<Card>(), Err(CardParseError::InvalidSuit));
    }

    #[test]
    fn display_and_short_form() {
        let card = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(card.to_string(), "Ace of Spades");
        assert_eq!(card.short(), ['A', 'S']);
        assert_eq!(Card::new(Rank::Two, Suit::Hearts).to_string(), "Deuce of Hearts");
    }
}
