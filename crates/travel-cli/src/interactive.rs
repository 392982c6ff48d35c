//! Line-driven front end for the search/reset controller.
use std::io::{BufRead, Write};
use travel_core::prelude::*;

/// A parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Line {
    /// `search <term>`: sets the input field, then searches.
    Search(String),
    Reset,
    Quit,
    Unknown(String),
}

fn parse_line(line: &str) -> Line {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    match word.to_ascii_lowercase().as_str() {
        "search" => Line::Search(rest.to_string()),
        "reset" => Line::Reset,
        "quit" | "exit" => Line::Quit,
        _ => Line::Unknown(line.to_string()),
    }
}

/// Feed lines from `input` to `controller`, printing the view after each
/// command. Notices are printed with a `!` prefix.
pub fn run<S, C>(
    controller: &Controller<S, C>,
    input: impl BufRead,
    mut out: impl Write,
) -> std::io::Result<()>
where
    S: DatasetSource,
    C: Clock,
{
    let mut state = UiState::default();
    writeln!(out, "Commands: search <term> | reset | quit")?;
    for line in input.lines() {
        let command = match parse_line(&line?) {
            Line::Search(term) => {
                state.input = term;
                Command::Search
            }
            Line::Reset => Command::Reset,
            Line::Quit => break,
            Line::Unknown(l) if l.is_empty() => continue,
            Line::Unknown(l) => {
                writeln!(out, "Unknown command: {l}")?;
                continue;
            }
        };
        let Transition { state: next, notice } = controller.handle(state, command);
        state = next;
        if let Some(n) = notice {
            writeln!(out, "! {}", n.message())?;
        }
        if command == Command::Search {
            write!(out, "{}", state.view)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const DOC: &str = r#"{"beaches": [
        {"name": "A", "imageUrl": "a.jpg", "description": "first", "timeZone": "UTC"},
        {"name": "B", "imageUrl": "b.jpg", "description": "second"},
        {"name": "C", "imageUrl": "c.jpg", "description": "third"}
    ]}"#;

    fn session(script: &str) -> String {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 15, 4, 5).unwrap());
        let controller = Controller::new(JsonSource(DOC.into()), clock);
        let mut out = Vec::new();
        run(&controller, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_line("search Japan"), Line::Search("Japan".into()));
        assert_eq!(parse_line("SEARCH  beaches "), Line::Search(" beaches".into()));
        assert_eq!(parse_line("search"), Line::Search(String::new()));
        assert_eq!(parse_line("reset"), Line::Reset);
        assert_eq!(parse_line("exit"), Line::Quit);
        assert_eq!(parse_line("dance"), Line::Unknown("dance".into()));
    }

    #[test]
    fn search_prints_two_cards() {
        let out = session("search beaches\n");
        assert!(out.contains("A\n  first"));
        assert!(out.contains("Current Time: 3:04:05 PM"));
        assert!(out.contains("B\n  second"));
        assert!(out.contains("Time zone not available"));
        assert!(!out.contains("third"));
    }

    #[test]
    fn empty_search_warns() {
        assert!(session("search   \n").contains("! Please enter a search term."));
    }

    #[test]
    fn reset_confirms_and_quit_stops() {
        let out = session("reset\nquit\nsearch beach\n");
        assert!(out.contains("! Search results cleared."));
        assert!(!out.contains("first"));
    }
}
