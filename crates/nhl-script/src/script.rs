/// One non-blank line of a placement script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine<'a> {
    /// 1-based line number in the source text.
    pub number: usize,
    pub tokens: Vec<&'a str>,
}

impl ScriptLine<'_> {
    /// Tokens joined back into command text, for diagnostics.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Split script text into commands. `#` starts a comment that runs to the
/// end of the line; lines with no tokens left are dropped.
pub fn parse_script(text: &str) -> Vec<ScriptLine<'_>> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let code = line.split_once('#').map_or(line, |(code, _)| code);
            let tokens: Vec<&str> = code.split_whitespace().collect();
            (!tokens.is_empty()).then_some(ScriptLine {
                number: index + 1,
                tokens,
            })
        })
        .collect()
}
