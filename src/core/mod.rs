//! Core domain types for 4-digit Mastermind
//!
//! This module contains the code and feedback types plus the candidate space.
//! Nothing here knows about scoring or recommendation.

mod candidates;
mod code;
mod feedback;

pub use candidates::{filter, group_by_feedback, partition, universe};
pub use code::{ALPHABET_SIZE, CODE_LENGTH, Code, CodeError, UNIVERSE_SIZE};
pub use feedback::{
    AggregateFeedback, FEEDBACK_COUNT, Feedback, FeedbackError, FeedbackRule, Response, Tag,
};
