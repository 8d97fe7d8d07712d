//! Hand-strength classification for a hole pair against a flop.
//!
//! Made hands are mutually exclusive and follow a strict precedence; draw
//! categories stack independently on top. A straight flush is reported as
//! plain "Flush"; the category list deliberately stops short of a full
//! showdown ranking.

use crate::cards::{Card, Rank, Suit, ALL_SUITS};

/// A hand-strength or draw category. Declared in display-precedence
/// order so the discriminant doubles as histogram index and sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StrengthCategory {
    Quads = 0,
    FullHouse = 1,
    Flush = 2,
    Straight = 3,
    Trips = 4,
    TwoPair = 5,
    TopPair = 6,
    MiddlePair = 7,
    BottomPair = 8,
    WeakPair = 9,
    Overcards = 10,
    NutFlushDraw = 11,
    SecondNutFlushDraw = 12,
    FlushDraw = 13,
    OpenEndedStraightDraw = 14,
    Gutshot = 15,
    NoMadeHand = 16,
}

impl StrengthCategory {
    pub const COUNT: usize = 17;

    pub const ALL: [StrengthCategory; Self::COUNT] = [
        StrengthCategory::Quads,
        StrengthCategory::FullHouse,
        StrengthCategory::Flush,
        StrengthCategory::Straight,
        StrengthCategory::Trips,
        StrengthCategory::TwoPair,
        StrengthCategory::TopPair,
        StrengthCategory::MiddlePair,
        StrengthCategory::BottomPair,
        StrengthCategory::WeakPair,
        StrengthCategory::Overcards,
        StrengthCategory::NutFlushDraw,
        StrengthCategory::SecondNutFlushDraw,
        StrengthCategory::FlushDraw,
        StrengthCategory::OpenEndedStraightDraw,
        StrengthCategory::Gutshot,
        StrengthCategory::NoMadeHand,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StrengthCategory::Quads => "Quads",
            StrengthCategory::FullHouse => "Full House",
            StrengthCategory::Flush => "Flush",
            StrengthCategory::Straight => "Straight",
            StrengthCategory::Trips => "Trips",
            StrengthCategory::TwoPair => "Two Pair",
            StrengthCategory::TopPair => "Top Pair",
            StrengthCategory::MiddlePair => "Middle Pair",
            StrengthCategory::BottomPair => "Bottom Pair",
            StrengthCategory::WeakPair => "Weak Pair",
            StrengthCategory::Overcards => "Overcards",
            StrengthCategory::NutFlushDraw => "Nut FD",
            StrengthCategory::SecondNutFlushDraw => "Second Nut FD",
            StrengthCategory::FlushDraw => "Flush Draw",
            StrengthCategory::OpenEndedStraightDraw => "Open Ended Straight Draw",
            StrengthCategory::Gutshot => "Gutshot",
            StrengthCategory::NoMadeHand => "No Made Hand",
        }
    }
}

/// Fixed-width bitset over the 17 categories. The per-hand result is a
/// set: a combo can hold a made hand and several draws at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySet(u32);

impl CategorySet {
    pub fn insert(&mut self, cat: StrengthCategory) {
        self.0 |= 1 << cat as u32;
    }

    pub fn contains(self, cat: StrengthCategory) -> bool {
        self.0 & (1 << cat as u32) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Categories present, in display-precedence order.
    pub fn iter(self) -> impl Iterator<Item = StrengthCategory> {
        StrengthCategory::ALL
            .iter()
            .copied()
            .filter(move |&c| self.contains(c))
    }
}

/// Classify one hole pair against a board of 0-3 cards.
///
/// Returns every category the combo belongs to. Exactly one made-hand
/// category is assigned (or none, when the only pair on the table sits
/// entirely on the board); draw categories are added independently;
/// "Overcards" fires only into an otherwise empty set, and "No Made
/// Hand" fills a set that ends empty.
pub fn classify_hand(hole: [Card; 2], board: &[Card]) -> CategorySet {
    let mut cats = CategorySet::default();

    let all: Vec<Card> = hole.iter().chain(board.iter()).copied().collect();
    let hole_ranks = [hole[0].rank.value(), hole[1].rank.value()];

    // Dominant suit: highest count, ties resolved toward the lower suit
    // discriminant (Spades < Hearts < Diamonds < Clubs).
    let mut suit_counts = [0u8; 4];
    for c in &all {
        suit_counts[c.suit as usize] += 1;
    }
    let mut dominant = Suit::Spades;
    for &s in &ALL_SUITS {
        if suit_counts[s as usize] > suit_counts[dominant as usize] {
            dominant = s;
        }
    }
    let dominant_count = suit_counts[dominant as usize];

    // Distinct ranks, descending. Shared by straight and draw detection.
    let mut uniq: Vec<u8> = all.iter().map(|c| c.rank.value()).collect();
    uniq.sort_unstable_by(|a, b| b.cmp(a));
    uniq.dedup();

    let is_straight = uniq.len() >= 5
        && (uniq.windows(5).any(|w| w[0] - w[4] == 4)
            // Wheel: Ace plays low in A-2-3-4-5 only
            || (uniq.contains(&14) && [5u8, 4, 3, 2].iter().all(|r| uniq.contains(r))));

    // Rank multiplicity profile, descending: [3, 2] = full house etc.
    let mut rank_counts = [0u8; 15];
    for c in &all {
        rank_counts[c.rank.value() as usize] += 1;
    }
    let mut profile: Vec<u8> = rank_counts.iter().copied().filter(|&n| n > 0).collect();
    profile.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = dominant_count >= 5;

    // Made hands: first match wins. Straight flush collapses into Flush.
    if is_straight && is_flush {
        cats.insert(StrengthCategory::Flush);
    } else if profile[0] == 4 {
        cats.insert(StrengthCategory::Quads);
    } else if profile[0] == 3 && profile.get(1).is_some_and(|&n| n >= 2) {
        cats.insert(StrengthCategory::FullHouse);
    } else if is_flush {
        cats.insert(StrengthCategory::Flush);
    } else if is_straight {
        cats.insert(StrengthCategory::Straight);
    } else if profile[0] == 3 {
        cats.insert(StrengthCategory::Trips);
    } else if profile[0] == 2 && profile.get(1) == Some(&2) {
        cats.insert(StrengthCategory::TwoPair);
    } else if profile[0] == 2 {
        // Exactly one paired rank on the table.
        if let Some(pair_rank) = (2..=14u8).find(|&r| rank_counts[r as usize] == 2) {
            // A pair the hole cards take no part in (two board cards of
            // one rank) says nothing about this combo's strength.
            if hole_ranks.contains(&pair_rank) {
                let mut board_ranks: Vec<u8> = board.iter().map(|c| c.rank.value()).collect();
                board_ranks.sort_unstable_by(|a, b| b.cmp(a));

                let cat = if board_ranks.first() == Some(&pair_rank) {
                    StrengthCategory::TopPair
                } else if board_ranks.get(1) == Some(&pair_rank) {
                    StrengthCategory::MiddlePair
                } else if board_ranks.get(2) == Some(&pair_rank) {
                    StrengthCategory::BottomPair
                } else {
                    // Pocket pair missing the board entirely (overpairs
                    // and underpairs both land here).
                    StrengthCategory::WeakPair
                };
                cats.insert(cat);
            }
        }
    }

    // Flush draw: exactly four of the dominant suit with at least one in
    // the hole. Sub-label by the best hole card of that suit.
    if dominant_count == 4 {
        let our_best = hole
            .iter()
            .filter(|c| c.suit == dominant)
            .map(|c| c.rank.value())
            .max();
        if let Some(our_rank) = our_best {
            let ace_on_board = board
                .iter()
                .any(|c| c.suit == dominant && c.rank == Rank::Ace);
            let cat = if our_rank == 14 && !ace_on_board {
                StrengthCategory::NutFlushDraw
            } else if our_rank == 13 && !ace_on_board {
                StrengthCategory::SecondNutFlushDraw
            } else {
                StrengthCategory::FlushDraw
            };
            cats.insert(cat);
        }
    }

    // Straight draws over every 4-card window of distinct ranks. A
    // span-3 window qualifies for both labels; the overlap is kept.
    if uniq.len() >= 4 {
        for w in uniq.windows(4) {
            let span = w[0] - w[3];
            if span == 3 && (hole_ranks.contains(&w[0]) || hole_ranks.contains(&w[3])) {
                cats.insert(StrengthCategory::OpenEndedStraightDraw);
            }
            if span <= 4 {
                cats.insert(StrengthCategory::Gutshot);
            }
        }
    }

    // Overcards only count for a combo that has nothing else going.
    if cats.is_empty() {
        let top_board = board.iter().map(|c| c.rank.value()).max().unwrap_or(0);
        if hole_ranks.iter().any(|&r| r > top_board) {
            cats.insert(StrengthCategory::Overcards);
        }
    }

    if cats.is_empty() {
        cats.insert(StrengthCategory::NoMadeHand);
    }

    cats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_card;

    fn hole(a: &str, b: &str) -> [Card; 2] {
        [parse_card(a).unwrap(), parse_card(b).unwrap()]
    }

    fn board(cards: &[&str]) -> Vec<Card> {
        cards.iter().map(|s| parse_card(s).unwrap()).collect()
    }

    fn assert_single(cats: CategorySet, expected: StrengthCategory) {
        assert!(cats.contains(expected), "missing {:?} in {:?}", expected, cats);
        assert_eq!(cats.len(), 1, "expected only {:?}, got {:?}", expected, cats);
    }

    #[test]
    fn quads() {
        let cats = classify_hand(hole("As", "Ah"), &board(&["Ad", "Ac", "Ks"]));
        assert_single(cats, StrengthCategory::Quads);
    }

    #[test]
    fn full_house() {
        let cats = classify_hand(hole("As", "Ah"), &board(&["Ad", "Ks", "Kh"]));
        assert_single(cats, StrengthCategory::FullHouse);
    }

    #[test]
    fn flush_beats_straight_when_both() {
        // Straight flush reports as plain Flush
        let cats = classify_hand(hole("9h", "8h"), &board(&["7h", "6h", "5h"]));
        assert!(cats.contains(StrengthCategory::Flush));
        assert!(!cats.contains(StrengthCategory::Straight));
    }

    #[test]
    fn straight_on_flop() {
        let cats = classify_hand(hole("9s", "8h"), &board(&["7d", "6c", "5s"]));
        assert!(cats.contains(StrengthCategory::Straight));
    }

    #[test]
    fn wheel_straight() {
        let cats = classify_hand(hole("As", "2h"), &board(&["3d", "4c", "5s"]));
        assert!(cats.contains(StrengthCategory::Straight));
    }

    #[test]
    fn trips_with_pocket_pair() {
        let cats = classify_hand(hole("Ah", "Ad"), &board(&["As", "2h", "3d"]));
        assert_single(cats, StrengthCategory::Trips);
    }

    #[test]
    fn two_pair() {
        let cats = classify_hand(hole("As", "Kh"), &board(&["Ad", "Kc", "2s"]));
        assert!(cats.contains(StrengthCategory::TwoPair));
    }

    #[test]
    fn pair_ladder_top_middle_bottom() {
        let b = board(&["Ks", "9d", "4c"]);
        assert!(classify_hand(hole("Kh", "2d"), &b).contains(StrengthCategory::TopPair));
        assert!(classify_hand(hole("9h", "2d"), &b).contains(StrengthCategory::MiddlePair));
        assert!(classify_hand(hole("4h", "2d"), &b).contains(StrengthCategory::BottomPair));
    }

    #[test]
    fn overpair_classifies_weak_pair() {
        // Pocket pair above the board matches no board rank slot
        let cats = classify_hand(hole("As", "Ah"), &board(&["Ks", "9d", "4c"]));
        assert!(cats.contains(StrengthCategory::WeakPair));
    }

    #[test]
    fn board_pair_alone_is_not_a_made_hand() {
        // The deuces pair the board, not the hole cards
        let cats = classify_hand(hole("As", "Kh"), &board(&["2d", "2c", "7s"]));
        assert!(cats.contains(StrengthCategory::Overcards));
        assert!(!cats.contains(StrengthCategory::TopPair));
        assert!(!cats.contains(StrengthCategory::WeakPair));
    }

    #[test]
    fn nut_flush_draw() {
        let cats = classify_hand(hole("As", "7s"), &board(&["Ks", "9s", "4c"]));
        assert!(cats.contains(StrengthCategory::NutFlushDraw));
        assert!(!cats.contains(StrengthCategory::FlushDraw));
    }

    #[test]
    fn second_nut_flush_draw() {
        let cats = classify_hand(hole("Ks", "7s"), &board(&["Qs", "9s", "4c"]));
        assert!(cats.contains(StrengthCategory::SecondNutFlushDraw));
    }

    #[test]
    fn king_draw_is_plain_when_ace_on_board() {
        let cats = classify_hand(hole("Ks", "7s"), &board(&["As", "9s", "4c"]));
        assert!(cats.contains(StrengthCategory::FlushDraw));
        assert!(!cats.contains(StrengthCategory::SecondNutFlushDraw));
    }

    #[test]
    fn flush_draw_needs_a_hole_card_of_the_suit() {
        // Three spades on board + 0 in hole: no draw for this combo
        let cats = classify_hand(hole("Ah", "7d"), &board(&["Ks", "9s", "4s"]));
        assert!(!cats.contains(StrengthCategory::FlushDraw));
        assert!(!cats.contains(StrengthCategory::NutFlushDraw));
    }

    #[test]
    fn oesd_also_registers_gutshot() {
        // 9-8 on 7-6-x: ranks 9,8,7,6 span 3 with a hole endpoint
        let cats = classify_hand(hole("9s", "8h"), &board(&["7d", "6c", "2s"]));
        assert!(cats.contains(StrengthCategory::OpenEndedStraightDraw));
        assert!(cats.contains(StrengthCategory::Gutshot));
    }

    #[test]
    fn pure_gutshot() {
        // 9-8 on 6-5-x: ranks 9,8,6,5 span 4, no span-3 window
        let cats = classify_hand(hole("9s", "8h"), &board(&["6d", "5c", "Ks"]));
        assert!(cats.contains(StrengthCategory::Gutshot));
        assert!(!cats.contains(StrengthCategory::OpenEndedStraightDraw));
    }

    #[test]
    fn made_hand_and_draw_stack() {
        // Top pair plus a nut flush draw on a two-spade board
        let cats = classify_hand(hole("As", "Ks"), &board(&["Kd", "9s", "4s"]));
        assert!(cats.contains(StrengthCategory::TopPair));
        assert!(cats.contains(StrengthCategory::NutFlushDraw));
    }

    #[test]
    fn overcards_only_when_nothing_else() {
        let cats = classify_hand(hole("Ah", "Kd"), &board(&["9s", "6c", "2d"]));
        assert_single(cats, StrengthCategory::Overcards);
    }

    #[test]
    fn no_made_hand_fallback() {
        let cats = classify_hand(hole("7h", "2d"), &board(&["Ah", "Ks", "Qd"]));
        assert_single(cats, StrengthCategory::NoMadeHand);
    }

    #[test]
    fn empty_board_pocket_pair_is_weak_pair() {
        let cats = classify_hand(hole("As", "Ah"), &[]);
        assert!(cats.contains(StrengthCategory::WeakPair));
    }

    #[test]
    fn category_set_iterates_in_display_order() {
        let mut set = CategorySet::default();
        set.insert(StrengthCategory::Gutshot);
        set.insert(StrengthCategory::TopPair);
        let order: Vec<_> = set.iter().collect();
        assert_eq!(
            order,
            vec![StrengthCategory::TopPair, StrengthCategory::Gutshot]
        );
    }
}
