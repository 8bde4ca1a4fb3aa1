//! Suggestion command
//!
//! Replays a recorded game and ranks guesses for the next move.

use crate::core::{Code, Response};
use crate::solver::{GameSession, Solver, Suggestion};

/// Result of asking for suggestions
pub struct SuggestResult {
    pub session: GameSession,
    pub suggestions: Vec<Suggestion>,
}

/// Parse one recorded turn: `"0123:CPWW"`, `"0123=2/1"` or `"0123 CPWW"`
///
/// # Errors
///
/// Returns an error if either half fails to parse.
pub fn parse_turn(text: &str) -> Result<(Code, Response), String> {
    let (guess, feedback) = text
        .split_once([':', '='])
        .or_else(|| text.trim().split_once(char::is_whitespace))
        .ok_or_else(|| format!("Expected GUESS:FEEDBACK, got '{text}'"))?;

    let guess: Code = guess
        .parse()
        .map_err(|e| format!("Invalid guess '{guess}': {e}"))?;
    let response: Response = feedback
        .trim()
        .parse()
        .map_err(|e| format!("Invalid feedback '{feedback}': {e}"))?;

    Ok((guess, response))
}

/// Replay `turns` through the solver from a fresh session
///
/// # Errors
///
/// Returns an error if a turn fails to parse or the history is rejected.
pub fn replay_history(solver: &Solver, turns: &[String]) -> Result<GameSession, String> {
    turns.iter().try_fold(solver.new_session(), |session, turn| {
        let (guess, response) = parse_turn(turn)?;
        solver
            .submit(&session, guess, response)
            .map_err(|e| format!("Turn '{turn}': {e}"))
    })
}

/// Rank next guesses after `turns`
///
/// # Errors
///
/// Returns an error if the history cannot be replayed.
pub fn suggest(
    solver: &Solver,
    turns: &[String],
    max_suggestions: usize,
) -> Result<SuggestResult, String> {
    let session = replay_history(solver, turns)?;
    let suggestions = solver.recommend(&session, max_suggestions);
    Ok(SuggestResult {
        session,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::GameStatus;

    fn turns(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parse_turn_forms() {
        let (guess, response) = parse_turn("7890:PWWW").unwrap();
        assert_eq!(guess, "7890".parse().unwrap());
        assert_eq!(response, "PWWW".parse().unwrap());

        assert!(matches!(parse_turn("1234=2/1"), Ok((_, Response::Counts(_)))));
        assert!(parse_turn("1234 CPWW").is_ok());
        assert!(parse_turn("1234").is_err());
        assert!(parse_turn("12x4:CPWW").is_err());
        assert!(parse_turn("1234:CPQ").is_err());
    }

    #[test]
    fn replay_builds_session() {
        let solver = Solver::default();
        let session = replay_history(&solver, &turns(&["1460:CCCW", "7809:0/1"])).unwrap();
        assert_eq!(session.move_count(), 2);
        assert_eq!(session.candidates().len(), 2);
        assert_eq!(session.status(), GameStatus::AwaitingNextGuess);
    }

    #[test]
    fn replay_reports_contradiction() {
        let solver = Solver::default();
        let err = replay_history(&solver, &turns(&["1467:CCCW", "1467:WWWW"])).unwrap_err();
        assert!(err.contains("1467:WWWW"));
    }

    #[test]
    fn suggest_after_history() {
        let solver = Solver::default();
        let result = suggest(&solver, &turns(&["1460:CCCW"]), 3).unwrap();

        assert_eq!(result.session.candidates().len(), 9);
        assert_eq!(result.suggestions.len(), 3);
    }

    #[test]
    fn suggest_fresh_game() {
        let solver = Solver::default();
        let result = suggest(&solver, &[], 5).unwrap();
        assert_eq!(result.suggestions[0].guess, "0123".parse().unwrap());
    }
}
