use crate::algorithm::rules::PoseRules;
use crate::algorithm::validity::{
    is_legal_per_finger, passes_multi_link_policy, passes_simple_link_policy,
};
use crate::hand::pose::{candidate, is_all_down};
use crate::hand::{Candidate, Pose, State};
use tracing::{debug, info};

/// Which optional link families may appear in generated poses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Include poses with three or more fingers joined
    pub allow_multi_link: bool,
    /// Include poses with two fingers joined by an add/abd link
    pub allow_simple_link: bool,
}

impl GenerationOptions {
    /// Options with both link families set explicitly
    pub const fn new(allow_multi_link: bool, allow_simple_link: bool) -> Self {
        Self {
            allow_multi_link,
            allow_simple_link,
        }
    }
}

/// Cartesian product of states over index, middle, ring and pinky
///
/// Lexicographic in canonical state order with pinky varying fastest.
/// Each call starts a fresh sequence.
pub fn candidates() -> impl Iterator<Item = Candidate> {
    State::ALL.into_iter().flat_map(|index| {
        State::ALL.into_iter().flat_map(move |middle| {
            State::ALL.into_iter().flat_map(move |ring| {
                State::ALL
                    .into_iter()
                    .map(move |pinky| candidate([index, middle, ring, pinky]))
            })
        })
    })
}

/// Attach the thumb to a surviving candidate
///
/// The thumb is folded only when every other finger is folded.
pub fn compose_pose(candidate: Candidate) -> Pose {
    let thumb = if is_all_down(&candidate) {
        State::Down
    } else {
        State::Up
    };
    Pose::new(thumb, candidate)
}

/// Enumerates every valid hand pose under a rule set
#[derive(Clone, Copy, Debug)]
pub struct PoseGenerator<'a> {
    rules: &'a PoseRules,
    options: GenerationOptions,
}

impl<'a> PoseGenerator<'a> {
    /// Create a generator over the given rules
    pub const fn new(rules: &'a PoseRules, options: GenerationOptions) -> Self {
        Self { rules, options }
    }

    /// Rules this generator filters with
    pub const fn rules(&self) -> &'a PoseRules {
        self.rules
    }

    /// Link options this generator filters with
    pub const fn options(&self) -> GenerationOptions {
        self.options
    }

    /// True when the candidate passes per-finger legality and both link policies
    pub fn accepts(&self, candidate: &Candidate) -> bool {
        is_legal_per_finger(candidate, self.rules)
            && passes_multi_link_policy(candidate, self.options.allow_multi_link)
            && passes_simple_link_policy(candidate, self.options.allow_simple_link, self.rules)
    }

    /// Lazily yield poses in output order
    ///
    /// Poses with at least one non-thumb finger up or linked come first in
    /// cartesian order, followed by the all-down pose. Every call restarts
    /// from the beginning.
    pub fn poses(&self) -> impl Iterator<Item = Pose> + use<'a> {
        let generator = *self;
        let open = candidates().filter(move |c| !is_all_down(c) && generator.accepts(c));
        let closed = candidates().filter(move |c| is_all_down(c) && generator.accepts(c));
        open.chain(closed).map(compose_pose)
    }

    /// Materialize every pose, filtering stage by stage
    pub fn generate(&self) -> Vec<Pose> {
        let raw: Vec<Candidate> = candidates().collect();
        debug!(candidates = raw.len(), "Computed all finger state combinations");

        let legal: Vec<Candidate> = raw
            .into_iter()
            .filter(|c| is_legal_per_finger(c, self.rules))
            .collect();
        debug!(survivors = legal.len(), "Applied per-finger legality");

        let multi: Vec<Candidate> = legal
            .into_iter()
            .filter(|c| passes_multi_link_policy(c, self.options.allow_multi_link))
            .collect();
        debug!(
            survivors = multi.len(),
            allow_multi_link = self.options.allow_multi_link,
            "Applied multi-link policy"
        );

        let simple: Vec<Candidate> = multi
            .into_iter()
            .filter(|c| {
                passes_simple_link_policy(c, self.options.allow_simple_link, self.rules)
            })
            .collect();
        debug!(
            survivors = simple.len(),
            allow_simple_link = self.options.allow_simple_link,
            "Applied add/abd-link policy"
        );

        let (closed, open): (Vec<Candidate>, Vec<Candidate>) =
            simple.into_iter().partition(|c| is_all_down(c));

        let poses: Vec<Pose> = open.into_iter().chain(closed).map(compose_pose).collect();
        info!(poses = poses.len(), "Generated hand poses");
        poses
    }
}

/// Every valid pose of the standard hand
pub fn generate(allow_multi_link: bool, allow_simple_link: bool) -> Vec<Pose> {
    PoseGenerator::new(
        PoseRules::standard(),
        GenerationOptions::new(allow_multi_link, allow_simple_link),
    )
    .generate()
}
