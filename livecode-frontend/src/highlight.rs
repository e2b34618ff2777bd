use std::path::Path;

use livecode_buffer::hook::Highlighter;
use syntect::{
    easy::HighlightLines,
    highlighting::{Style, Theme, ThemeSet},
    parsing::{SyntaxReference, SyntaxSet},
    util::{as_24_bit_terminal_escaped, LinesWithEndings},
};

use crate::error::AppError;

const DEFAULT_SYNTAX: &str = "py";

pub struct SyntectHighlighter {
    syntax: SyntaxReference,
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl SyntectHighlighter {
    pub fn new(syntax: Option<&str>, path: Option<&Path>, theme: &str) -> Result<Self, AppError> {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let mut themes = ThemeSet::load_defaults();
        let theme = themes
            .themes
            .remove(theme)
            .ok_or_else(|| AppError::ThemeNotFound(theme.to_string()))?;

        let syntax = resolve_syntax(&syntaxes, syntax, path).clone();
        tracing::debug!("syntax: {:?}", syntax.name);

        Ok(Self {
            syntax,
            syntaxes,
            theme,
        })
    }
}

impl Highlighter for SyntectHighlighter {
    fn decorate(&self, text: &str) -> String {
        let mut highlighter = HighlightLines::new(&self.syntax, &self.theme);

        let mut result = String::with_capacity(text.len());
        for line in LinesWithEndings::from(text) {
            let ranges: Vec<(Style, &str)> = match highlighter.highlight_line(line, &self.syntaxes)
            {
                Ok(ranges) => ranges,
                Err(err) => {
                    tracing::warn!("highlighting line failed: {:?}", err);
                    return text.to_string();
                }
            };

            result.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }

        result
    }
}

fn resolve_syntax<'a>(
    syntaxes: &'a SyntaxSet,
    syntax: Option<&str>,
    path: Option<&Path>,
) -> &'a SyntaxReference {
    let by_setting = syntax.and_then(|name| {
        syntaxes
            .find_syntax_by_extension(name)
            .or_else(|| syntaxes.find_syntax_by_name(name))
    });

    let by_path = || {
        path.and_then(|path| path.extension())
            .map(|ext| ext.to_string_lossy())
            .and_then(|ext| syntaxes.find_syntax_by_extension(&ext))
    };

    by_setting
        .or_else(by_path)
        .or_else(|| syntaxes.find_syntax_by_extension(DEFAULT_SYNTAX))
        .unwrap_or_else(|| syntaxes.find_syntax_plain_text())
}
