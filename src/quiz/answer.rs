use crate::dictionary::Capital;

fn normalize(text: &str) -> String
{
    text.trim().to_uppercase()
}

/// Case-insensitive, whitespace-trimmed match against any accepted spelling.
/// A missing capital never matches.
pub fn is_correct(raw_answer: &str, accepted: Option<&Capital>) -> bool
{
    let Some(capital) = accepted else {
        return false;
    };
    let answer = normalize(raw_answer);
    capital.answers().iter().any(|candidate| normalize(candidate) == answer)
}
