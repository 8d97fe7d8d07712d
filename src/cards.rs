//! Card primitives: ranks, suits, and compact-notation parsing.
//!
//! Notation: rank char + suit char, e.g. "As" = Ace of spades,
//! "7d" = Seven of diamonds. Boards concatenate cards: "Ks9d4c".

use std::fmt;

use crate::error::{AnalyzeError, AnalyzeResult};

/// Card rank. Discriminants are the poker rank values (Ace high = 14).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

impl Rank {
    /// Numeric rank value, 2-14.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

/// Card suit. Enum order doubles as the deterministic tie-break order
/// for dominant-suit detection in the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

impl Suit {
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            's' => Some(Suit::Spades),
            'h' => Some(Suit::Hearts),
            'd' => Some(Suit::Diamonds),
            'c' => Some(Suit::Clubs),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }
}

/// A playing card. Immutable value type; equality requires both fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

/// Parse a single card from compact notation ("As", "7d").
pub fn parse_card(s: &str) -> AnalyzeResult<Card> {
    let mut chars = s.chars();
    let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(AnalyzeError::InvalidCard(s.to_string()));
    };
    match (Rank::from_char(r), Suit::from_char(su)) {
        (Some(rank), Some(suit)) => Ok(Card::new(rank, suit)),
        _ => Err(AnalyzeError::InvalidCard(s.to_string())),
    }
}

/// Parse a board from concatenated compact notation ("Ks9d4c").
/// Rejects odd-length input and duplicate cards.
pub fn parse_board(s: &str) -> AnalyzeResult<Vec<Card>> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(AnalyzeError::InvalidBoard(format!(
            "'{}' is not a sequence of 2-character cards",
            s
        )));
    }

    let mut cards = Vec::with_capacity(chars.len() / 2);
    for pair in chars.chunks(2) {
        let card_str: String = pair.iter().collect();
        let card = parse_card(&card_str)?;
        if cards.contains(&card) {
            return Err(AnalyzeError::InvalidBoard(format!(
                "duplicate card '{}'",
                card
            )));
        }
        cards.push(card);
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_cards() {
        assert_eq!(
            parse_card("As").unwrap(),
            Card::new(Rank::Ace, Suit::Spades)
        );
        assert_eq!(
            parse_card("2c").unwrap(),
            Card::new(Rank::Two, Suit::Clubs)
        );
        assert_eq!(
            parse_card("Td").unwrap(),
            Card::new(Rank::Ten, Suit::Diamonds)
        );
    }

    #[test]
    fn display_roundtrip() {
        for &rank in &ALL_RANKS {
            for &suit in &ALL_SUITS {
                let card = Card::new(rank, suit);
                assert_eq!(parse_card(&card.to_string()).unwrap(), card);
            }
        }
    }

    #[test]
    fn rejects_bad_notation() {
        assert!(parse_card("").is_err());
        assert!(parse_card("A").is_err());
        assert!(parse_card("Asx").is_err());
        assert!(parse_card("1s").is_err()); // no rank '1'
        assert!(parse_card("Az").is_err()); // no suit 'z'
    }

    #[test]
    fn parse_flop_board() {
        let board = parse_board("Ks9d4c").unwrap();
        assert_eq!(board.len(), 3);
        assert_eq!(board[0], Card::new(Rank::King, Suit::Spades));
        assert_eq!(board[2], Card::new(Rank::Four, Suit::Clubs));
    }

    #[test]
    fn board_rejects_duplicates_and_odd_length() {
        assert!(parse_board("KsKs4c").is_err());
        assert!(parse_board("Ks9d4").is_err());
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ace.value(), 14);
    }
}
