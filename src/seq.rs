//! Data model and 2D layout for the handshake sequence diagram.
//!
//! Two lifelines at fixed x positions, a fixed ordered message script, and a
//! fixed vertical step per message. The cryptographic expressions in the
//! labels are inert text; nothing here computes key material.

/// The two participants of the illustrated exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Actor {
    /// "Central A", drawn in black on the left lifeline.
    Central,
    /// "Peripheral B", drawn in blue on the right lifeline.
    Peripheral,
}

impl Actor {
    pub fn index(self) -> usize {
        match self {
            Actor::Central => 0,
            Actor::Peripheral => 1,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Actor::Central => "Central A",
            Actor::Peripheral => "Peripheral B",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Actor::Central => "paired with B, shares the link key PK",
            Actor::Peripheral => "paired with A, shares the link key PK",
        }
    }
}

/// One entry of the message script. `to == None` is a label-only annotation
/// under the sender's lifeline; `to == Some(from)` is a self-note placed just
/// right of it; anything else is a unicast arrow.
#[derive(Clone, Copy, Debug)]
pub struct Message {
    pub from: Actor,
    pub to: Option<Actor>,
    pub text: &'static str,
}

impl Message {
    const fn arrow(from: Actor, to: Actor, text: &'static str) -> Self {
        Self {
            from,
            to: Some(to),
            text,
        }
    }

    const fn note(from: Actor, text: &'static str) -> Self {
        Self {
            from,
            to: None,
            text,
        }
    }
}

/// Fixed x positions of the two lifelines, far apart so labels fit between.
pub const LIFELINE_X: [f64; 2] = [0.5, 4.5];
/// Vertical advance per message (downward).
pub const Y_STEP: f64 = -2.0;
/// Labels sit this far above their message line.
pub const LABEL_RAISE: f64 = 0.5;
/// The final message is nudged further down so it clears the lifeline ends.
pub const FINAL_EXTRA_OFFSET: f64 = -0.3;

use Actor::{Central, Peripheral};

/// The LSC challenge/response script, in order. Labels are plain text.
pub fn handshake_script() -> Vec<Message> {
    vec![
        Message::arrow(
            Central,
            Peripheral,
            "1. BA_A (48-bit Bluetooth address of A), LSC (request LSC capabilities)",
        ),
        Message::arrow(
            Peripheral,
            Central,
            "2. BA_B (48-bit Bluetooth address of B), LSC/SC (B supports both, agrees on LSC)",
        ),
        Message::arrow(
            Central,
            Peripheral,
            "3. AC_A = random_128bit() (A's authentication challenge, aka AU_RAND, to B)",
        ),
        Message::note(
            Peripheral,
            "X = e1(PK, AC_A, BA_B) (128 bits)\nCR_B = MSB_32(X)",
        ),
        Message::note(
            Central,
            "X = e1(PK, AC_A, BA_B) (128 bits)\nCR_B' = MSB_32(X)",
        ),
        Message::arrow(
            Peripheral,
            Central,
            "4. CR_B (challenge response, aka SRES, from B)",
        ),
        Message::note(Central, "A verifies CR_B if CR_B' = CR_B"),
        Message::arrow(
            Central,
            Peripheral,
            "5. SE_A (A's session entropy needed for SK)\ncontroller.RNG.generate(128), 128 bits",
        ),
        Message::arrow(Peripheral, Central, "6. Accept entropy"),
        Message::arrow(
            Central,
            Peripheral,
            "7. SD_A (A's session diversifier, aka EN_RAND)\ncontroller.RNG.generate(128), 128 bits",
        ),
        Message::arrow(Peripheral, Central, "8. Accept diversifier"),
        Message::note(
            Central,
            "SK = f_KDF-LSC(PK, BA_B, AC_A, SE_A, SD_A)\nCOF = LSB_96(X)\nISK = e3(PK, SD_A, COF)\nSK = es(ISK, SE_A)",
        ),
        Message::note(
            Peripheral,
            "SK = f_KDF-LSC(PK, BA_B, AC_A, SE_A, SD_A)\nCOF = LSB_96(X)\nISK = e3(PK, SD_A, COF)\nSK = es(ISK, SE_A)",
        ),
        Message::arrow(
            Central,
            Peripheral,
            "9. ciphertext ct1 = E0(m1, SK)\nwhere m1 message, E0 encryption algorithm",
        ),
        Message::arrow(
            Peripheral,
            Central,
            "10. ciphertext ct2 = E0(m2, SK)\nwhere m2 message, E0 encryption algorithm",
        ),
    ]
}

/// Geometry of one laid-out message.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlacedShape {
    /// Text just right of the sender's lifeline, left-aligned.
    SelfNote { x: f64 },
    /// Text centered on the sender's lifeline, no arrow.
    Note { x: f64 },
    /// Horizontal arrow between lifelines, label centered above it.
    Arrow { x_from: f64, x_to: f64 },
}

#[derive(Clone, Copy, Debug)]
pub struct PlacedMessage {
    pub from: Actor,
    pub shape: PlacedShape,
    /// Baseline of the message (arrow height).
    pub y: f64,
    pub label_x: f64,
    pub label_y: f64,
    pub text: &'static str,
}

/// Bottom of the lifelines and of the drawing range for a script of `n`
/// messages: two extra steps of margin below the last one.
pub fn lifeline_bottom(n_messages: usize) -> f64 {
    Y_STEP * (n_messages as f64 + 2.0)
}

/// Place every message of the script. Pure layout arithmetic; rendering
/// happens elsewhere.
pub fn layout(messages: &[Message]) -> Vec<PlacedMessage> {
    let mut placed = Vec::with_capacity(messages.len());
    let mut y = 0.0f64;

    for (idx, msg) in messages.iter().enumerate() {
        y += Y_STEP;
        let extra = if idx + 1 == messages.len() {
            FINAL_EXTRA_OFFSET
        } else {
            0.0
        };
        let label_y = y + LABEL_RAISE + extra;
        let from_x = LIFELINE_X[msg.from.index()];

        let (shape, label_x) = match msg.to {
            Some(to) if to == msg.from => (PlacedShape::SelfNote { x: from_x }, from_x + 0.1),
            None => (PlacedShape::Note { x: from_x }, from_x),
            Some(to) => {
                let to_x = LIFELINE_X[to.index()];
                (
                    PlacedShape::Arrow {
                        x_from: from_x,
                        x_to: to_x,
                    },
                    (from_x + to_x) / 2.0,
                )
            }
        };

        placed.push(PlacedMessage {
            from: msg.from,
            shape,
            y,
            label_x,
            label_y,
            text: msg.text,
        });
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_shape_counts() {
        let script = handshake_script();
        assert_eq!(script.len(), 15);
        let notes = script.iter().filter(|m| m.to.is_none()).count();
        let arrows = script.iter().filter(|m| m.to.is_some()).count();
        assert_eq!(notes, 5);
        assert_eq!(arrows, 10);
    }

    #[test]
    fn layout_steps_down_uniformly() {
        let placed = layout(&handshake_script());
        for (i, p) in placed.iter().enumerate() {
            assert_eq!(p.y, Y_STEP * (i + 1) as f64);
        }
    }

    #[test]
    fn final_message_gets_extra_offset() {
        let placed = layout(&handshake_script());
        let last = placed.last().unwrap();
        let second_last = &placed[placed.len() - 2];
        assert_eq!(second_last.label_y, second_last.y + LABEL_RAISE);
        assert_eq!(last.label_y, last.y + LABEL_RAISE + FINAL_EXTRA_OFFSET);
    }

    #[test]
    fn arrows_span_the_lifelines() {
        for p in layout(&handshake_script()) {
            if let PlacedShape::Arrow { x_from, x_to } = p.shape {
                assert!(LIFELINE_X.contains(&x_from));
                assert!(LIFELINE_X.contains(&x_to));
                assert_ne!(x_from, x_to);
                assert_eq!(p.label_x, (x_from + x_to) / 2.0);
            }
        }
    }

    #[test]
    fn self_note_sits_right_of_lifeline() {
        let script = [Message::arrow(Central, Central, "note to self")];
        let placed = layout(&script);
        match placed[0].shape {
            PlacedShape::SelfNote { x } => {
                assert_eq!(x, LIFELINE_X[0]);
                assert_eq!(placed[0].label_x, x + 0.1);
            }
            other => panic!("expected self-note, got {other:?}"),
        }
    }

    #[test]
    fn lifelines_outlast_the_script() {
        let script = handshake_script();
        let placed = layout(&script);
        let bottom = lifeline_bottom(script.len());
        assert!(bottom < placed.last().unwrap().y);
    }
}
