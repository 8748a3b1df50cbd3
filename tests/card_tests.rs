//! Card helper integration tests: from a card code to its pip layout.

use card_pips::cards::{CardMeta, CardMode, CardRank, FaceContent, Suit};
use card_pips::core::{IconCount, LayoutError};

#[test]
fn test_full_deck_faces() {
    for suit in Suit::standard() {
        for value in 1..=13u8 {
            let card = CardMeta::new(value, suit.clone());
            match card.face() {
                FaceContent::LargeImage => {
                    assert!(value == 1 || value > 10, "{} should draw pips", card);
                    assert!(card.pip_layout().is_none());
                }
                FaceContent::Pips(count) => {
                    assert_eq!(count, IconCount::new(u32::from(value)));
                    let layout = card.pip_layout().unwrap();
                    assert_eq!(layout.positions().len(), usize::from(value));
                }
            }
        }
    }
}

#[test]
fn test_parse_codes() {
    let cases = [
        ("AS", CardRank::ACE, Suit::spade()),
        ("TH", CardRank::TEN, Suit::heart()),
        ("kd", CardRank::KING, Suit::diamond()),
        ("5C", CardRank::new(5), Suit::club()),
    ];

    for (code, rank, suit) in cases {
        let card: CardMeta = code.parse().unwrap();
        assert_eq!(card.rank, rank, "rank of {}", code);
        assert_eq!(card.suit, suit, "suit of {}", code);
    }
}

#[test]
fn test_invalid_codes() {
    assert!(matches!(
        "QHS".parse::<CardMeta>(),
        Err(LayoutError::InvalidCardCode(_))
    ));
    assert!(matches!(
        "1H".parse::<CardMeta>(),
        Err(LayoutError::UnknownRank('1'))
    ));
}

#[test]
fn test_slot_modes() {
    let card: CardMeta = "8S".parse().unwrap();

    assert_eq!(CardMode::resolve(Some(&card), true), CardMode::Card);
    assert_eq!(CardMode::resolve(Some(&card), false), CardMode::UnknownCard);
    assert_eq!(CardMode::resolve(None, true), CardMode::EmptySlot);
}

#[test]
fn test_custom_suit_and_high_rank() {
    // Ranks past the standard deck still resolve.
    let card = CardMeta::new(20u8, "rainbow");
    assert_eq!(card.face(), FaceContent::LargeImage);

    let card = CardMeta::new(9u8, "star");
    assert_eq!(card.suit.name(), "star");
    assert_eq!(card.pip_layout().unwrap().columns().as_slice(), &[4, 1, 4]);
}
