#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Pinky,
    Ring,
    Middle,
    Index,
    Thumb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FingerAssignment {
    pub hand: Hand,
    pub finger: Finger,
}

impl FingerAssignment {
    pub const fn new(hand: Hand, finger: Finger) -> Self {
        Self { hand, finger }
    }

    pub fn glyph(self) -> char {
        match (self.hand, self.finger) {
            (Hand::Left, Finger::Thumb) => '/',
            (Hand::Right, Finger::Thumb) => '\\',
            _ => '|',
        }
    }
}

/// Both hands, left pinky to right pinky, as drawn on screen.
pub const FINGER_SEQUENCE: [FingerAssignment; 10] = [
    FingerAssignment::new(Hand::Left, Finger::Pinky),
    FingerAssignment::new(Hand::Left, Finger::Ring),
    FingerAssignment::new(Hand::Left, Finger::Middle),
    FingerAssignment::new(Hand::Left, Finger::Index),
    FingerAssignment::new(Hand::Left, Finger::Thumb),
    FingerAssignment::new(Hand::Right, Finger::Thumb),
    FingerAssignment::new(Hand::Right, Finger::Index),
    FingerAssignment::new(Hand::Right, Finger::Middle),
    FingerAssignment::new(Hand::Right, Finger::Ring),
    FingerAssignment::new(Hand::Right, Finger::Pinky),
];

const BOTH_THUMBS: &[FingerAssignment] = &[FINGER_SEQUENCE[4], FINGER_SEQUENCE[5]];

/// Enter and backspace.
pub const RIGHT_PINKY: FingerAssignment = FINGER_SEQUENCE[9];

/// Fingers used for `ch` on a QWERTY board. Empty when the character has
/// no home finger.
pub fn qwerty_fingers(ch: char) -> &'static [FingerAssignment] {
    use Finger::*;
    use Hand::*;

    const LEFT_PINKY: &[FingerAssignment] = &[FingerAssignment::new(Left, Pinky)];
    const LEFT_RING: &[FingerAssignment] = &[FingerAssignment::new(Left, Ring)];
    const LEFT_MIDDLE: &[FingerAssignment] = &[FingerAssignment::new(Left, Middle)];
    const LEFT_INDEX: &[FingerAssignment] = &[FingerAssignment::new(Left, Index)];
    const RIGHT_INDEX: &[FingerAssignment] = &[FingerAssignment::new(Right, Index)];
    const RIGHT_MIDDLE: &[FingerAssignment] = &[FingerAssignment::new(Right, Middle)];
    const RIGHT_RING: &[FingerAssignment] = &[FingerAssignment::new(Right, Ring)];
    const RIGHT_PINKIES: &[FingerAssignment] = &[FingerAssignment::new(Right, Pinky)];

    match ch.to_ascii_lowercase() {
        'q' | 'a' | 'z' | '1' => LEFT_PINKY,
        'w' | 's' | 'x' | '2' => LEFT_RING,
        'e' | 'd' | 'c' | '3' => LEFT_MIDDLE,
        'r' | 'f' | 'v' | 't' | 'g' | 'b' | '4' | '5' => LEFT_INDEX,
        'y' | 'h' | 'n' | 'u' | 'j' | 'm' | '6' | '7' => RIGHT_INDEX,
        'i' | 'k' | ',' | '8' => RIGHT_MIDDLE,
        'o' | 'l' | '.' | '9' => RIGHT_RING,
        'p' | ';' | '/' | '0' | '-' | '=' | '[' | ']' | '\'' | '\\' => RIGHT_PINKIES,
        ' ' => BOTH_THUMBS,
        _ => &[],
    }
}

/// Fingers to highlight for the next keystroke; `None` means Enter.
pub fn hint_for(next: Option<char>) -> &'static [FingerAssignment] {
    const ENTER: &[FingerAssignment] = &[RIGHT_PINKY];
    match next {
        Some(ch) => qwerty_fingers(ch),
        None => ENTER,
    }
}
