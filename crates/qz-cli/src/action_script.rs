use qz_core::{QuizError, UserAction};
use regex::Regex;

/// Parses `d,c1,s0` style action lists. Commas and whitespace both separate.
pub(crate) fn parse_action_script(raw: &str) -> Result<Vec<UserAction>, QuizError> {
    let token_regex = Regex::new(r"^(?:(d)|([cs])(\d+))$").expect("action regex must compile");

    raw.split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            let invalid = || {
                QuizError::new(
                    "CLI_ACTIONS_INVALID",
                    format!("Invalid action \"{}\". Use d, cN or sN.", token),
                )
            };
            let caps = token_regex.captures(token).ok_or_else(invalid)?;
            if caps.get(1).is_some() {
                return Ok(UserAction::Dismiss);
            }
            let index = caps
                .get(3)
                .and_then(|digits| digits.as_str().parse::<usize>().ok())
                .ok_or_else(invalid)?;
            match caps.get(2).map(|kind| kind.as_str()) {
                Some("c") => Ok(UserAction::Choose(index)),
                Some("s") => Ok(UserAction::Select(index)),
                _ => Err(invalid()),
            }
        })
        .collect()
}
