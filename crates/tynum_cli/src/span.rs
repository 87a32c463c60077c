/// Which part of the command line an error points at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Span {
    // index of `raw_args`, flags included
    Exact(usize),

    // index of the positional arguments, flags not included
    NthArg(usize),
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedSpan {
    pub args: String,
    pub underline_start: usize,
    pub underline_end: usize,
}

impl Span {
    pub fn render(&self, raw_args: &[String], skip_first_n: usize, positional: &[usize]) -> RenderedSpan {
        let index = match self {
            Span::Exact(n) => Some(*n),
            Span::NthArg(n) => positional.get(*n).map(|i| *i + skip_first_n),
            Span::End => None,
        };

        let quoted = raw_args.iter().map(
            |arg| if arg.contains(' ') || arg.contains('"') || arg.contains('\'') || arg.is_empty() {
                format!("{arg:?}")
            } else {
                arg.to_string()
            }
        ).collect::<Vec<String>>();

        // trailing whitespace, so that `Span::End` has something to point at
        let args = format!("{} ", quoted.join(" "));

        let (underline_start, underline_end) = match index {
            Some(i) if i < quoted.len() => {
                let start = quoted[..i].iter().map(|arg| arg.len() + 1).sum::<usize>();

                (start, start + quoted[i].len().max(1))
            },
            _ => (args.len() - 1, args.len()),
        };

        RenderedSpan {
            args,
            underline_start,
            underline_end,
        }
    }
}

pub fn underline_span(s: &RenderedSpan) -> String {
    format!(
        "{}\n{}{}",
        s.args.trim_end(),
        " ".repeat(s.underline_start),
        "^".repeat(s.underline_end - s.underline_start),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_test() {
        let raw_args = vec!["tynum", "add", "3", "--prity", "4"].into_iter().map(
            |s| s.to_string()
        ).collect::<Vec<String>>();

        let samples = vec![
            (Span::Exact(3), "tynum add 3 --prity 4\n            ^^^^^^^"),
            (Span::NthArg(1), "tynum add 3 --prity 4\n                    ^"),
            (Span::End, "tynum add 3 --prity 4\n                     ^"),
        ];

        // `3` and `4` are the positional arguments, `tynum` and `add` are skipped
        for (span, expected) in samples.into_iter() {
            let rendered = span.render(&raw_args, 2, &[0, 2]);
            assert_eq!(underline_span(&rendered), expected);
        }
    }
}
