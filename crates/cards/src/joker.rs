// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jokers and card tokens.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, Color, InvalidCardError, Rank, Suit};

/// A joker that can stand for any card of its color.
///
/// The black joker `?B` substitutes clubs or spades of any rank, the red joker
/// `?R` hearts or diamonds of any rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Joker {
    /// The black joker.
    Black,
    /// The red joker.
    Red,
}

impl Joker {
    /// Number of cards a joker can stand for.
    pub const SUBSTITUTES: usize = 26;

    /// The joker color.
    pub fn color(&self) -> Color {
        match self {
            Joker::Black => Color::Black,
            Joker::Red => Color::Red,
        }
    }

    /// The suits this joker can take.
    pub fn suits(&self) -> [Suit; 2] {
        match self {
            Joker::Black => [Suit::Clubs, Suit::Spades],
            Joker::Red => [Suit::Hearts, Suit::Diamonds],
        }
    }

    /// Returns the nth card this joker can stand for.
    ///
    /// Substitutes are ordered by rank first and then by suit, panics if
    /// `n >= Joker::SUBSTITUTES`.
    pub fn substitute(&self, n: usize) -> Card {
        assert!(n < Self::SUBSTITUTES, "n={n} must be < {}", Self::SUBSTITUTES);
        Card::new(Rank::ALL[n / 2], self.suits()[n % 2])
    }

    /// Returns all the cards this joker can stand for.
    pub fn substitutes(self) -> impl Iterator<Item = Card> + Clone {
        (0..Self::SUBSTITUTES).map(move |n| self.substitute(n))
    }

    /// Checks if this joker can stand for the given card.
    pub fn matches(&self, card: Card) -> bool {
        card.suit().color() == self.color()
    }
}

impl fmt::Display for Joker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Joker::Black => write!(f, "?B"),
            Joker::Red => write!(f, "?R"),
        }
    }
}

/// A parsed hand token, either a concrete card or a joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// A concrete card.
    Card(Card),
    /// A joker to be resolved before evaluation.
    Joker(Joker),
}

impl Token {
    /// Returns the card if this token is not a joker.
    pub fn card(&self) -> Option<Card> {
        match self {
            Token::Card(card) => Some(*card),
            Token::Joker(_) => None,
        }
    }

    /// Returns the joker if this token is a joker.
    pub fn joker(&self) -> Option<Joker> {
        match self {
            Token::Card(_) => None,
            Token::Joker(joker) => Some(*joker),
        }
    }
}

impl From<Card> for Token {
    fn from(card: Card) -> Self {
        Token::Card(card)
    }
}

impl From<Joker> for Token {
    fn from(joker: Joker) -> Self {
        Token::Joker(joker)
    }
}

impl FromStr for Token {
    type Err = InvalidCardError;

    /// Parses a two characters token, case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars().map(|c| c.to_ascii_uppercase());
        let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(InvalidCardError::Length(s.to_string()));
        };

        if first == '?' {
            return match second {
                'B' => Ok(Token::Joker(Joker::Black)),
                'R' => Ok(Token::Joker(Joker::Red)),
                _ => Err(InvalidCardError::Joker(s.to_string())),
            };
        }

        let rank = Rank::from_char(first).ok_or_else(|| InvalidCardError::Rank(s.to_string()))?;
        let suit = Suit::from_char(second).ok_or_else(|| InvalidCardError::Suit(s.to_string()))?;

        Ok(Token::Card(Card::new(rank, suit)))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Card(card) => write!(f, "{card}"),
            Token::Joker(joker) => write!(f, "{joker}"),
        }
    }
}

/// Parses a token, same as `token.parse::<Token>()`.
pub fn parse_token(token: &str) -> Result<Token, InvalidCardError> {
    token.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn parse_cards() {
        let tc = Token::Card(Card::new(Rank::Ten, Suit::Clubs));
        assert_eq!(parse_token("TC"), Ok(tc));
        assert_eq!(parse_token("tc"), Ok(tc));
        assert_eq!(parse_token("tC"), Ok(tc));
        assert_eq!(parse_token("2d").map(|t| t.to_string()), Ok("2D".to_string()));
        assert_eq!(parse_token("as").map(|t| t.to_string()), Ok("AS".to_string()));
    }

    #[test]
    fn parse_jokers() {
        assert_eq!(parse_token("?B"), Ok(Token::Joker(Joker::Black)));
        assert_eq!(parse_token("?r"), Ok(Token::Joker(Joker::Red)));
        assert_eq!(parse_token("?r").map(|t| t.to_string()), Ok("?R".to_string()));
    }

    #[test]
    fn parse_errors() {
        use InvalidCardError as E;

        assert_eq!(parse_token(""), Err(E::Length("".to_string())));
        assert_eq!(parse_token("A"), Err(E::Length("A".to_string())));
        assert_eq!(parse_token("10H"), Err(E::Length("10H".to_string())));
        assert_eq!(parse_token("XX"), Err(E::Rank("XX".to_string())));
        assert_eq!(parse_token("1H"), Err(E::Rank("1H".to_string())));
        assert_eq!(parse_token("AX"), Err(E::Suit("AX".to_string())));
        assert_eq!(parse_token("?X"), Err(E::Joker("?X".to_string())));
        assert_eq!(parse_token("?C"), Err(E::Joker("?C".to_string())));
        assert_eq!(parse_token("B?"), Err(E::Rank("B?".to_string())));
    }

    #[test]
    fn joker_substitutes() {
        for joker in [Joker::Black, Joker::Red] {
            let cards = joker.substitutes().collect::<HashSet<_>>();
            assert_eq!(cards.len(), Joker::SUBSTITUTES);
            assert!(cards.iter().all(|&c| joker.matches(c)));
            assert!(cards.iter().all(|c| joker.suits().contains(&c.suit())));
        }

        // Rank first then suit.
        assert_eq!(Joker::Black.substitute(0), Card::new(Rank::Deuce, Suit::Clubs));
        assert_eq!(Joker::Black.substitute(1), Card::new(Rank::Deuce, Suit::Spades));
        assert_eq!(Joker::Red.substitute(25), Card::new(Rank::Ace, Suit::Diamonds));
    }

    #[test]
    #[should_panic]
    fn joker_substitute_out_of_range() {
        Joker::Red.substitute(Joker::SUBSTITUTES);
    }
}
