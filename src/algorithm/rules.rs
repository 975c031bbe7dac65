//! Rule tables governing which finger states and links are anatomically valid
//!
//! The tables are configuration data: the standard hand is built once and
//! shared, while tests and callers may construct alternative tables through
//! [`PoseRules::new`], which rejects inconsistent data up front.

use crate::hand::{Assignment, Finger, FingerSet, State, StateSet};
use crate::io::error::{Result, invalid_rules};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// An accepted add/abd pairing between two proximate fingers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimpleLink {
    /// Finger holding `AddLink`
    pub add: Finger,
    /// Finger that must hold `AbdLink` for the link to be valid
    pub abd: Finger,
}

impl SimpleLink {
    /// Pair an add-link finger with its abd-link partner
    pub const fn new(add: Finger, abd: Finger) -> Self {
        Self { add, abd }
    }
}

/// Per-finger accepted states, finger proximity and accepted add/abd pairings
///
/// The thumb never appears in the accepted-state table; its state is
/// composed from the other four fingers by the generator.
#[derive(Clone, Debug)]
pub struct PoseRules {
    accepted_states: BTreeMap<Finger, StateSet>,
    proximate_fingers: BTreeMap<Finger, FingerSet>,
    simple_links: Vec<SimpleLink>,
}

static STANDARD_RULES: LazyLock<PoseRules> = LazyLock::new(PoseRules::standard_tables);

impl PoseRules {
    /// Build rules from custom tables
    ///
    /// # Errors
    ///
    /// Returns `InvalidRules` if the thumb has an accepted-state entry or any
    /// proximate finger, a non-thumb finger has no accepted-state entry,
    /// proximity is asymmetric, or a pairing joins non-proximate fingers,
    /// involves the thumb, or repeats an add-link finger.
    pub fn new(
        accepted_states: BTreeMap<Finger, StateSet>,
        proximate_fingers: BTreeMap<Finger, FingerSet>,
        simple_links: Vec<SimpleLink>,
    ) -> Result<Self> {
        let rules = Self {
            accepted_states,
            proximate_fingers,
            simple_links,
        };
        rules.validate()?;
        Ok(rules)
    }

    /// The standard hand, shared across callers
    pub fn standard() -> &'static Self {
        &STANDARD_RULES
    }

    /// Tables for the standard hand
    ///
    /// Index cannot abduct and pinky cannot adduct, since each has a
    /// neighbour on one side only.
    pub fn standard_tables() -> Self {
        let accepted_states = BTreeMap::from([
            (
                Finger::Index,
                StateSet::from_iter([State::Up, State::Down, State::AddLink, State::MultiLink]),
            ),
            (Finger::Middle, StateSet::all()),
            (Finger::Ring, StateSet::all()),
            (
                Finger::Pinky,
                StateSet::from_iter([State::Up, State::Down, State::AbdLink, State::MultiLink]),
            ),
        ]);

        let proximate_fingers = BTreeMap::from([
            (Finger::Thumb, FingerSet::new()),
            (Finger::Index, FingerSet::from_iter([Finger::Middle])),
            (
                Finger::Middle,
                FingerSet::from_iter([Finger::Index, Finger::Ring]),
            ),
            (
                Finger::Ring,
                FingerSet::from_iter([Finger::Middle, Finger::Pinky]),
            ),
            (Finger::Pinky, FingerSet::from_iter([Finger::Ring])),
        ]);

        let simple_links = vec![
            SimpleLink::new(Finger::Index, Finger::Middle),
            SimpleLink::new(Finger::Middle, Finger::Ring),
            SimpleLink::new(Finger::Ring, Finger::Pinky),
        ];

        Self {
            accepted_states,
            proximate_fingers,
            simple_links,
        }
    }

    /// Decompose into the raw tables, e.g. to derive a modified rule set
    pub fn into_tables(
        self,
    ) -> (
        BTreeMap<Finger, StateSet>,
        BTreeMap<Finger, FingerSet>,
        Vec<SimpleLink>,
    ) {
        (
            self.accepted_states,
            self.proximate_fingers,
            self.simple_links,
        )
    }

    /// States `finger` may legally take; `None` for the thumb
    pub fn accepted_states(&self, finger: Finger) -> Option<&StateSet> {
        self.accepted_states.get(&finger)
    }

    /// True when the assignment's state is in its finger's accepted set
    pub fn accepts(&self, assignment: Assignment) -> bool {
        self.accepted_states(assignment.finger)
            .is_some_and(|states| states.contains(assignment.state))
    }

    /// Fingers adjacent to `finger`
    pub fn proximate_fingers(&self, finger: Finger) -> FingerSet {
        self.proximate_fingers
            .get(&finger)
            .cloned()
            .unwrap_or_default()
    }

    /// Accepted add/abd pairings in table order
    pub fn simple_links(&self) -> &[SimpleLink] {
        &self.simple_links
    }

    /// The finger that must hold `AbdLink` when `add` holds `AddLink`
    pub fn abd_partner(&self, add: Finger) -> Option<Finger> {
        self.simple_links()
            .iter()
            .find(|link| link.add == add)
            .map(|link| link.abd)
    }

    fn validate(&self) -> Result<()> {
        if self.accepted_states.contains_key(&Finger::Thumb) {
            return Err(invalid_rules(
                &"the thumb is composed separately and takes no accepted states",
            ));
        }

        for finger in Finger::NON_THUMB {
            if !self.accepted_states.contains_key(&finger) {
                return Err(invalid_rules(&format!(
                    "finger '{finger}' has no accepted states"
                )));
            }
        }

        if !self.proximate_fingers(Finger::Thumb).is_empty() {
            return Err(invalid_rules(&"the thumb has no proximate fingers"));
        }

        for (&finger, neighbours) in &self.proximate_fingers {
            for neighbour in neighbours.iter() {
                if neighbour == finger {
                    return Err(invalid_rules(&format!(
                        "finger '{finger}' cannot be proximate to itself"
                    )));
                }
                if !self.proximate_fingers(neighbour).contains(finger) {
                    return Err(invalid_rules(&format!(
                        "proximity between '{finger}' and '{neighbour}' is not symmetric"
                    )));
                }
            }
        }

        let mut add_fingers = FingerSet::new();
        for link in self.simple_links() {
            if link.add == Finger::Thumb || link.abd == Finger::Thumb {
                return Err(invalid_rules(&"the thumb cannot take part in a simple link"));
            }
            if !self.proximate_fingers(link.add).contains(link.abd) {
                return Err(invalid_rules(&format!(
                    "linked fingers '{}' and '{}' are not proximate",
                    link.add, link.abd
                )));
            }
            if add_fingers.contains(link.add) {
                return Err(invalid_rules(&format!(
                    "finger '{}' has more than one abd-link partner",
                    link.add
                )));
            }
            add_fingers.insert(link.add);
        }

        Ok(())
    }
}

impl Default for PoseRules {
    fn default() -> Self {
        Self::standard().clone()
    }
}
