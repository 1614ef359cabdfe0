use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Card values in catalog order, Ace first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Value {
    pub const ALL: [Value; 13] = [
        Value::Ace,
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Value::Ace => "ACE",
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "JACK",
            Value::Queen => "QUEEN",
            Value::King => "KING",
        }
    }

    /// First character of the value name. `Ten` maps to `'1'`.
    pub const fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => '1',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValueParseError {
    #[error("invalid card value: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Value {
    type Error = ValueParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' => Ok(Value::Ace),
            '2' => Ok(Value::Two),
            '3' => Ok(Value::Three),
            '4' => Ok(Value::Four),
            '5' => Ok(Value::Five),
            '6' => Ok(Value::Six),
            '7' => Ok(Value::Seven),
            '8' => Ok(Value::Eight),
            '9' => Ok(Value::Nine),
            '1' => Ok(Value::Ten),
            'J' => Ok(Value::Jack),
            'Q' => Ok(Value::Queen),
            'K' => Ok(Value::King),
            _ => Err(ValueParseError::Invalid(c.to_string())),
        }
    }
}

/// Four suits in catalog order: spades, diamonds, clubs, hearts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "SPADES",
            Suit::Diamonds => "DIAMONDS",
            Suit::Clubs => "CLUBS",
            Suit::Hearts => "HEARTS",
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Suit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'S' => Ok(Suit::Spades),
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            'H' => Ok(Suit::Hearts),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card. Serializes as `{"suit", "value", "code"}`.
///
/// ```
/// use deck_service::cards::{Card, Suit, Value};
///
/// let card = Card::new(Value::King, Suit::Diamonds);
/// assert_eq!(card.code(), "KD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    value: Value,
    suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    pub const fn value(self) -> Value {
        self.value
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Two-character code: value initial followed by suit initial.
    pub fn code(self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.value.to_char());
        s.push(self.suit.to_char());
        s
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut st = serializer.serialize_struct("Card", 3)?;
        st.serialize_field("suit", &self.suit)?;
        st.serialize_field("value", &self.value)?;
        st.serialize_field("code", &self.code())?;
        st.end()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card code: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Value(#[from] ValueParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses an exact two-character code such as `AS` or `1H`. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(v), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        Ok(Card::new(Value::try_from(v)?, Suit::try_from(su)?))
    }
}
