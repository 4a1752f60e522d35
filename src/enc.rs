use crate::{
    error::{Error, Result},
    pos::Pos2,
};
use regex::Regex;
use std::sync::OnceLock;

/// Decodes a textual pattern into the positions of its living cells
pub trait PatternDecoder {
    fn decode(&self, value: &str) -> Result<Vec<Pos2>>;
}

/// The Run Length Encoded pattern format
///
/// Only the cell data is read. Comment lines (`#`) and the `x = .., y = ..`
/// header are skipped, so the rule named in the header is not checked.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunLengthEncoded;

fn run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // the pattern is a literal, it always compiles
    RE.get_or_init(|| Regex::new(r"(\d*)(\S)").expect("valid run regex"))
}

fn is_header(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with('#') || line.starts_with('x')
}

impl PatternDecoder for RunLengthEncoded {
    fn decode(&self, value: &str) -> Result<Vec<Pos2>> {
        let mut alive = Vec::new();
        let mut cursor = Pos2::default();
        'lines_loop: for (line_no, line) in value.lines().enumerate() {
            if is_header(line) {
                continue;
            }

            for (_, [run_str, tag]) in run_regex().captures_iter(line).map(|c| c.extract()) {
                let run = match run_str {
                    "" => 1,
                    digits => digits.parse::<i32>().map_err(|err| Error::Pattern {
                        line: line_no + 1,
                        message: format!("bad run length {digits:?}: {err}"),
                    })?,
                };
                match tag {
                    "!" => break 'lines_loop,
                    "o" => {
                        for _ in 0..run {
                            alive.push(cursor);
                            cursor.x += 1;
                        }
                    }
                    "b" => cursor.x += run,
                    "$" => {
                        cursor.x = 0;
                        cursor.y += run;
                    }
                    other => {
                        return Err(Error::Pattern {
                            line: line_no + 1,
                            message: format!("unknown tag {other:?}"),
                        });
                    }
                }
            }
        }

        Ok(alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2 { x, y }
    }

    #[test]
    fn decodes_glider() {
        let text = "#N Glider\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!\n";
        let cells = RunLengthEncoded.decode(text).expect("valid glider");

        assert_eq!(
            cells,
            vec![pos(1, 0), pos(2, 1), pos(0, 2), pos(1, 2), pos(2, 2)]
        );
    }

    #[test]
    fn runs_span_lines() {
        let text = "2o\n3b\no$$o!";
        let cells = RunLengthEncoded.decode(text).expect("valid pattern");

        assert_eq!(cells, vec![pos(0, 0), pos(1, 0), pos(5, 0), pos(0, 2)]);
    }

    #[test]
    fn stops_at_terminator() {
        let cells = RunLengthEncoded.decode("o!\n3o").expect("valid pattern");
        assert_eq!(cells, vec![pos(0, 0)]);
    }

    #[test]
    fn rejects_unknown_tags() {
        let err = RunLengthEncoded.decode("x = 1, y = 1\n2oz!").unwrap_err();
        assert_eq!(
            err,
            Error::Pattern {
                line: 2,
                message: "unknown tag \"z\"".to_owned()
            }
        );
    }

    #[test]
    fn rejects_overflowing_runs() {
        let err = RunLengthEncoded.decode("99999999999o!").unwrap_err();
        assert!(matches!(err, Error::Pattern { line: 1, .. }));
    }
}
