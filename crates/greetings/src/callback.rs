//! Caller-supplied callbacks invoked with fixed arguments.

/// Invoke `speak` once per speaker, in order: Dave says "Hello", then Andy
/// says "Hi".
pub fn who_says_what<F>(mut speak: F)
where
    F: FnMut(&str, &str),
{
    for (person, phrase) in [("Dave", "Hello"), ("Andy", "Hi")] {
        tracing::trace!(person, phrase, "invoking callback");
        speak(person, phrase);
    }
}

/// `"<person> says <phrase>"`.
pub fn says(person: &str, phrase: &str) -> String {
    format!("{person} says {phrase}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_sees_both_speakers_in_order() {
        let mut heard = Vec::new();
        who_says_what(|person, phrase| heard.push(says(person, phrase)));
        assert_eq!(heard, vec!["Dave says Hello", "Andy says Hi"]);
    }

    #[test]
    fn callback_is_invoked_exactly_twice() {
        let mut calls = 0;
        who_says_what(|_, _| calls += 1);
        assert_eq!(calls, 2);
    }
}
