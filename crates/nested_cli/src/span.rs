#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Span {
    Exact(usize),  // index in raw args, including flags
    NthArg(usize),  // index in positional args
    End,
    None,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedSpan {
    pub args: String,
    pub underline_start: usize,
    pub underline_end: usize,
}

impl Span {
    pub fn render(&self, args: &[String], skip_first_n: usize) -> Option<RenderedSpan> {
        let index = match self {
            Span::None => { return None; },
            Span::Exact(n) => Some(*n),
            Span::NthArg(n) => args.iter().enumerate().skip(skip_first_n).filter(
                |(_, arg)| !arg.starts_with("-")
            ).nth(*n).map(|(index, _)| index),
            Span::End => None,
        };
        let rendered_args = args[skip_first_n.min(args.len())..].iter().map(
            |arg| if arg.contains(|c: char| c == ' ' || c == '"' || c == '\'' || c == '\n') {
                format!("{arg:?}")
            } else {
                arg.to_string()
            }
        ).collect::<Vec<_>>();

        // append a whitespace so that `Span::End` is visible
        let joined_args = format!("{} ", rendered_args.join(" "));

        let (start, end) = match index {
            Some(index) if index >= skip_first_n && index - skip_first_n < rendered_args.len() => {
                let index = index - skip_first_n;
                let start = rendered_args[..index].iter().map(|arg| arg.len() + 1).sum::<usize>();

                (start, start + rendered_args[index].len())
            },
            _ => (joined_args.len() - 1, joined_args.len()),
        };

        Some(RenderedSpan {
            args: joined_args,
            underline_start: start,
            underline_end: end,
        })
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

    fn args(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn render_test() {
        let raw = args(&["nested", "--verbose", "3", "add"]);

        assert_eq!(
            underline_span(&Span::Exact(2).render(&raw, 1).unwrap()),
            "--verbose 3 add\n          ^",
        );
        assert_eq!(
            underline_span(&Span::NthArg(1).render(&raw, 1).unwrap()),
            "--verbose 3 add\n            ^^^",
        );
        assert_eq!(
            underline_span(&Span::End.render(&raw, 1).unwrap()),
            "--verbose 3 add\n               ^",
        );
        assert_eq!(Span::None.render(&raw, 1), None);
    }
}
