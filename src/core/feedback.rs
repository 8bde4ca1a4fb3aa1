//! Feedback evaluation and representation
//!
//! Per-slot feedback is encoded in base 3, one digit per slot:
//! - 0 = Wrong (digit absent, or all its occurrences already accounted for)
//! - 1 = Partial (digit present elsewhere)
//! - 2 = Correct (exact digit, exact slot)
//!
//! The encoded value is a single u8 in 0-80, where slot `i` contributes
//! `tag × 3^i`.

use super::code::{CODE_LENGTH, Code};
use std::fmt;
use std::str::FromStr;

/// Number of distinct per-slot feedback values (3^4)
pub const FEEDBACK_COUNT: usize = 81;

/// Feedback tag for a single slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Wrong,
    Partial,
    Correct,
}

impl Tag {
    const fn digit(self) -> u8 {
        match self {
            Self::Wrong => 0,
            Self::Partial => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Partial,
            _ => Self::Wrong,
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts `C`/`G`/`●` for Correct, `P`/`Y`/`○` for Partial and
    /// `W`/`-`/`_`/`·` for Wrong (letters are case-insensitive).
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'C' | 'c' | 'G' | 'g' | '●' => Some(Self::Correct),
            'P' | 'p' | 'Y' | 'y' | '○' => Some(Self::Partial),
            'W' | 'w' | '-' | '_' | '·' => Some(Self::Wrong),
            _ => None,
        }
    }

    /// Single-letter symbol used in plain-text output
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'C',
            Self::Partial => 'P',
            Self::Wrong => 'W',
        }
    }
}

/// Error type for malformed feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// Aggregate correct + partial exceeds the code length
    TooManyPegs { correct: u8, partial: u8 },
    /// Per-slot feedback with the wrong number of tags
    WrongLength(usize),
    /// Unrecognised symbol in a feedback string
    InvalidSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPegs { correct, partial } => write!(
                f,
                "Feedback {correct} correct + {partial} partial exceeds {CODE_LENGTH} slots"
            ),
            Self::WrongLength(len) => {
                write!(f, "Feedback must have exactly {CODE_LENGTH} tags, got {len}")
            }
            Self::InvalidSymbol(ch) => write!(f, "Invalid feedback symbol '{ch}'"),
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Per-slot feedback for a guess, packed into one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Feedback(u8);

impl Feedback {
    /// All slots Correct
    pub const PERFECT: Self = Self(80); // 2 + 2×3 + 2×9 + 2×27

    /// Build feedback from one tag per slot
    #[must_use]
    pub const fn from_tags(tags: [Tag; CODE_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        let mut i = 0;
        while i < CODE_LENGTH {
            value += tags[i].digit() * multiplier;
            multiplier *= 3;
            i += 1;
        }
        Self(value)
    }

    /// Build feedback from a tag slice, checking its length
    ///
    /// # Errors
    /// Returns `FeedbackError::WrongLength` unless exactly 4 tags are given.
    pub fn from_slice(tags: &[Tag]) -> Result<Self, FeedbackError> {
        let tags: [Tag; CODE_LENGTH] = tags
            .try_into()
            .map_err(|_| FeedbackError::WrongLength(tags.len()))?;
        Ok(Self::from_tags(tags))
    }

    /// Get the raw encoded value (0-80)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Tag at a slot (0-3)
    #[must_use]
    pub const fn tag_at(self, slot: usize) -> Tag {
        let mut val = self.0;
        let mut i = 0;
        while i < slot {
            val /= 3;
            i += 1;
        }
        Tag::from_digit(val % 3)
    }

    /// All four tags in slot order
    #[must_use]
    pub fn tags(self) -> [Tag; CODE_LENGTH] {
        std::array::from_fn(|slot| self.tag_at(slot))
    }

    /// Check if every slot is Correct
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Count of Correct slots
    #[must_use]
    pub fn count_correct(self) -> u8 {
        self.tags().iter().filter(|&&t| t == Tag::Correct).count() as u8
    }

    /// Count of Partial slots
    #[must_use]
    pub fn count_partial(self) -> u8 {
        self.tags().iter().filter(|&&t| t == Tag::Partial).count() as u8
    }

    /// Collapse to (correct, partial) counts
    #[must_use]
    pub fn aggregate(self) -> AggregateFeedback {
        AggregateFeedback {
            correct: self.count_correct(),
            partial: self.count_partial(),
        }
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse a string like `"CPWW"`, `"GY--"` or `"●○··"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tags = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|ch| Tag::from_symbol(ch).ok_or(FeedbackError::InvalidSymbol(ch)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_slice(&tags)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in self.tags() {
            write!(f, "{}", tag.symbol())?;
        }
        Ok(())
    }
}

/// Classic peg-count feedback: how many Correct and how many Partial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AggregateFeedback {
    correct: u8,
    partial: u8,
}

impl AggregateFeedback {
    /// Create aggregate feedback
    ///
    /// # Errors
    /// Returns `FeedbackError::TooManyPegs` if `correct + partial > 4`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::AggregateFeedback;
    ///
    /// assert!(AggregateFeedback::new(2, 1).is_ok());
    /// assert!(AggregateFeedback::new(3, 2).is_err());
    /// ```
    pub fn new(correct: u8, partial: u8) -> Result<Self, FeedbackError> {
        if usize::from(correct) + usize::from(partial) > CODE_LENGTH {
            return Err(FeedbackError::TooManyPegs { correct, partial });
        }
        Ok(Self { correct, partial })
    }

    #[must_use]
    pub const fn correct(self) -> u8 {
        self.correct
    }

    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.correct as usize == CODE_LENGTH
    }
}

impl FromStr for AggregateFeedback {
    type Err = FeedbackError;

    /// Parse `"2/1"` or `"2,1"` as 2 correct, 1 partial
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(['/', ',']).map(str::trim);
        let mut next_count = || -> Result<u8, FeedbackError> {
            let part = parts.next().unwrap_or("");
            part.parse::<u8>().map_err(|_| {
                FeedbackError::InvalidSymbol(part.chars().next().unwrap_or(' '))
            })
        };
        let correct = next_count()?;
        let partial = next_count()?;
        if parts.next().is_some() {
            return Err(FeedbackError::InvalidSymbol(','));
        }
        Self::new(correct, partial)
    }
}

impl fmt::Display for AggregateFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.partial)
    }
}

/// What the code-maker reported for a guess, in either form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Response {
    Slots(Feedback),
    Counts(AggregateFeedback),
}

impl Response {
    /// Whether the guess was the secret
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        match self {
            Self::Slots(feedback) => feedback.is_perfect(),
            Self::Counts(counts) => counts.is_perfect(),
        }
    }

    /// Whether `candidate` would have produced this response to `guess`
    #[must_use]
    pub fn admits(self, rule: FeedbackRule, guess: Code, candidate: Code) -> bool {
        let produced = rule.evaluate(guess, candidate);
        match self {
            Self::Slots(feedback) => produced == feedback,
            Self::Counts(counts) => produced.aggregate() == counts,
        }
    }
}

impl From<Feedback> for Response {
    fn from(feedback: Feedback) -> Self {
        Self::Slots(feedback)
    }
}

impl From<AggregateFeedback> for Response {
    fn from(counts: AggregateFeedback) -> Self {
        Self::Counts(counts)
    }
}

impl FromStr for Response {
    type Err = FeedbackError;

    /// Aggregate form if the string contains `/` or `,`, per-slot otherwise
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(['/', ',']) {
            s.parse().map(Self::Counts)
        } else {
            s.parse().map(Self::Slots)
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slots(feedback) => write!(f, "{feedback}"),
            Self::Counts(counts) => write!(f, "{counts}"),
        }
    }
}

/// The rule used to turn (guess, secret) into per-slot feedback
///
/// Exactly one rule is used for a whole solver; outcomes differ between them
/// whenever a digit repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeedbackRule {
    /// Partial whenever the digit occurs anywhere in the secret
    Membership,
    /// Partial only if an occurrence remains that Correct slots of the same
    /// digit have not already claimed
    #[default]
    DuplicateAware,
    /// Classic peg counting: each secret occurrence is consumed at most once,
    /// exact matches first, then partial hits from left to right
    PegCounting,
}

impl FeedbackRule {
    /// Resolve a rule by name
    ///
    /// Supported names: "membership"/"simple", "duplicate-aware"/"duplicate",
    /// "peg-counting"/"classic". Unrecognised names give `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "membership" | "simple" => Some(Self::Membership),
            "duplicate-aware" | "duplicate" => Some(Self::DuplicateAware),
            "peg-counting" | "classic" => Some(Self::PegCounting),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Membership => "membership",
            Self::DuplicateAware => "duplicate-aware",
            Self::PegCounting => "peg-counting",
        }
    }

    /// Feedback for `guess` when the secret is `secret`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback, FeedbackRule};
    ///
    /// let guess: Code = "7890".parse().unwrap();
    /// let secret: Code = "1467".parse().unwrap();
    /// let feedback = FeedbackRule::DuplicateAware.evaluate(guess, secret);
    ///
    /// assert_eq!(feedback, "PWWW".parse::<Feedback>().unwrap());
    /// ```
    #[must_use]
    // Allow: slot index addresses guess, secret and tags together
    #[allow(clippy::needless_range_loop)]
    pub fn evaluate(self, guess: Code, secret: Code) -> Feedback {
        let g = guess.digits();
        let s = secret.digits();
        let mut tags = [Tag::Wrong; CODE_LENGTH];

        for i in 0..CODE_LENGTH {
            if g[i] == s[i] {
                tags[i] = Tag::Correct;
            }
        }

        match self {
            Self::Membership => {
                for i in 0..CODE_LENGTH {
                    if tags[i] != Tag::Correct && secret.contains(g[i]) {
                        tags[i] = Tag::Partial;
                    }
                }
            }
            Self::DuplicateAware => {
                for i in 0..CODE_LENGTH {
                    if tags[i] == Tag::Correct {
                        continue;
                    }
                    let digit = g[i];
                    let total_in_secret = secret.count_of(digit);
                    let claimed = (0..CODE_LENGTH)
                        .filter(|&j| tags[j] == Tag::Correct && g[j] == digit)
                        .count();
                    if total_in_secret > claimed {
                        tags[i] = Tag::Partial;
                    }
                }
            }
            Self::PegCounting => {
                let mut available = secret.digit_counts();
                for i in 0..CODE_LENGTH {
                    if tags[i] == Tag::Correct {
                        available[g[i] as usize] -= 1;
                    }
                }
                for i in 0..CODE_LENGTH {
                    let slot = &mut available[g[i] as usize];
                    if tags[i] != Tag::Correct && *slot > 0 {
                        tags[i] = Tag::Partial;
                        *slot -= 1;
                    }
                }
            }
        }

        Feedback::from_tags(tags)
    }
}

impl FromStr for FeedbackRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!("Unknown feedback rule '{s}' (membership, duplicate-aware, peg-counting)")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    fn feedback(s: &str) -> Feedback {
        s.parse().unwrap()
    }

    const RULES: [FeedbackRule; 3] = [
        FeedbackRule::Membership,
        FeedbackRule::DuplicateAware,
        FeedbackRule::PegCounting,
    ];

    #[test]
    fn perfect_constant() {
        assert_eq!(Feedback::PERFECT.value(), 80);
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count_correct(), 4);
        assert_eq!(Feedback::PERFECT.tags(), [Tag::Correct; 4]);
    }

    #[test]
    fn tags_round_trip_through_encoding() {
        let tags = [Tag::Partial, Tag::Wrong, Tag::Correct, Tag::Partial];
        let fb = Feedback::from_tags(tags);
        // 1 + 0×3 + 2×9 + 1×27 = 46
        assert_eq!(fb.value(), 46);
        assert_eq!(fb.tags(), tags);
        assert_eq!(fb.to_string(), "PWCP");
    }

    #[test]
    fn scenario_partial_seven() {
        let fb = FeedbackRule::DuplicateAware.evaluate(code("7890"), code("1467"));
        assert_eq!(fb.tags(), [Tag::Partial, Tag::Wrong, Tag::Wrong, Tag::Wrong]);
    }

    #[test]
    fn guess_equals_secret_is_perfect_for_every_rule() {
        for rule in RULES {
            for s in ["0000", "1467", "9999", "1122"] {
                assert!(rule.evaluate(code(s), code(s)).is_perfect());
            }
        }
    }

    #[test]
    fn perfect_only_when_equal() {
        for rule in RULES {
            assert!(!rule.evaluate(code("1467"), code("1468")).is_perfect());
            assert!(!rule.evaluate(code("1467"), code("7641")).is_perfect());
        }
    }

    #[test]
    fn duplicate_aware_exhausted_digit_is_wrong() {
        // Secret has one 1, already claimed by slot 0
        let fb = FeedbackRule::DuplicateAware.evaluate(code("1123"), code("1456"));
        assert_eq!(fb, feedback("CWWW"));
    }

    #[test]
    fn duplicate_aware_unclaimed_occurrence_is_partial() {
        // Secret has two 1s; slot 0 claims one, slot 1 sees the other
        let fb = FeedbackRule::DuplicateAware.evaluate(code("1123"), code("1451"));
        assert_eq!(fb, feedback("CPWW"));
    }

    #[test]
    fn membership_overstates_partial() {
        let fb = FeedbackRule::Membership.evaluate(code("1123"), code("1456"));
        assert_eq!(fb, feedback("CPWW"));
    }

    #[test]
    fn peg_counting_consumes_occurrences() {
        // One 1 in secret, guess has three 1s, none in place
        let fb = FeedbackRule::PegCounting.evaluate(code("1113"), code("4441"));
        assert_eq!(fb, feedback("PWWW"));

        // Duplicate-aware rule flags every unmatched 1
        let fb = FeedbackRule::DuplicateAware.evaluate(code("1113"), code("4441"));
        assert_eq!(fb, feedback("PPPW"));
    }

    /// Every secret against a strided sample of guesses, for every rule
    #[test]
    fn perfect_and_peg_bounds_hold_across_universe() {
        use crate::core::UNIVERSE_SIZE;
        use rayon::prelude::*;

        for rule in RULES {
            let violations: usize = (0..UNIVERSE_SIZE as u16)
                .into_par_iter()
                .step_by(7)
                .map(|g| {
                    let guess = Code::from_index(g);
                    (0..UNIVERSE_SIZE as u16)
                        .map(Code::from_index)
                        .filter(|&secret| {
                            let fb = rule.evaluate(guess, secret);
                            fb.is_perfect() != (guess == secret)
                                || fb.count_correct() + fb.count_partial() > 4
                        })
                        .count()
                })
                .sum();
            assert_eq!(violations, 0, "{} rule", rule.name());
        }
    }

    #[test]
    fn counts_stay_within_code_length() {
        for rule in RULES {
            for (g, s) in [("1123", "1451"), ("0000", "0101"), ("9876", "6789")] {
                let fb = rule.evaluate(code(g), code(s));
                assert!(fb.count_correct() + fb.count_partial() <= 4);
            }
        }
    }

    #[test]
    fn feedback_parse_symbols() {
        assert_eq!(feedback("CPWW"), feedback("gy--"));
        assert_eq!(feedback("CPWW"), feedback("●○··"));
        assert!(matches!(
            "CPW".parse::<Feedback>(),
            Err(FeedbackError::WrongLength(3))
        ));
        assert!(matches!(
            "CPWX".parse::<Feedback>(),
            Err(FeedbackError::InvalidSymbol('X'))
        ));
    }

    #[test]
    fn from_slice_rejects_length_mismatch() {
        assert!(matches!(
            Feedback::from_slice(&[Tag::Correct; 5]),
            Err(FeedbackError::WrongLength(5))
        ));
        assert!(Feedback::from_slice(&[Tag::Wrong; 4]).is_ok());
    }

    #[test]
    fn aggregate_validation() {
        assert!(AggregateFeedback::new(4, 0).unwrap().is_perfect());
        assert!(matches!(
            AggregateFeedback::new(2, 3),
            Err(FeedbackError::TooManyPegs {
                correct: 2,
                partial: 3
            })
        ));
    }

    #[test]
    fn aggregate_parse() {
        let counts: AggregateFeedback = "2/1".parse().unwrap();
        assert_eq!((counts.correct(), counts.partial()), (2, 1));
        assert_eq!("2,1".parse::<AggregateFeedback>().unwrap(), counts);
        assert!("3/2".parse::<AggregateFeedback>().is_err());
        assert!("x/1".parse::<AggregateFeedback>().is_err());
        assert!("1/1/1".parse::<AggregateFeedback>().is_err());
    }

    #[test]
    fn aggregate_from_per_slot() {
        let counts = feedback("CPWC").aggregate();
        assert_eq!(counts, AggregateFeedback::new(2, 1).unwrap());
    }

    #[test]
    fn response_parse_picks_form() {
        assert!(matches!("CPWW".parse::<Response>(), Ok(Response::Slots(_))));
        assert!(matches!("1/1".parse::<Response>(), Ok(Response::Counts(_))));
    }

    #[test]
    fn response_admits_matching_candidate() {
        let rule = FeedbackRule::DuplicateAware;
        let slots = Response::from(feedback("PWWW"));
        assert!(slots.admits(rule, code("7890"), code("1467")));
        assert!(!slots.admits(rule, code("7890"), code("1468")));

        let counts = Response::from(AggregateFeedback::new(0, 1).unwrap());
        assert!(counts.admits(rule, code("7890"), code("1467")));
        assert!(counts.admits(rule, code("7890"), code("1468")));
    }

    #[test]
    fn rule_from_name() {
        assert_eq!(FeedbackRule::from_name("simple"), Some(FeedbackRule::Membership));
        assert_eq!(
            FeedbackRule::from_name("classic"),
            Some(FeedbackRule::PegCounting)
        );
        assert_eq!(FeedbackRule::from_name("whatever"), None);
        assert_eq!(FeedbackRule::from_name("duplicat-aware"), None);
    }

    #[test]
    fn rule_parse_rejects_unknown_names() {
        for rule in RULES {
            assert_eq!(rule.name().parse::<FeedbackRule>(), Ok(rule));
        }
        assert_eq!(
            " Peg-Counting ".parse::<FeedbackRule>(),
            Ok(FeedbackRule::PegCounting)
        );
        assert!("dupe".parse::<FeedbackRule>().is_err());
    }
}
