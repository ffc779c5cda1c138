use crate::canvas::Grid;

/// Array notation used when printing a grid
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatStyle {
    /// Nested `[...]` lists
    #[default]
    Bracket,
    /// Nested `{...}` initializer ending in `;`
    C,
}

impl FormatStyle {
    fn delimiters(self) -> (char, char, &'static str) {
        match self {
            FormatStyle::Bracket => ('[', ']', ""),
            FormatStyle::C => ('{', '}', ";"),
        }
    }
}

/// Render a grid as an embeddable array literal.
///
/// Rows are separated by `",\n"` and cells by `", "`; every cell is a
/// six-digit lowercase `0x` literal. There is no trailing newline.
pub fn format_grid(grid: &Grid, style: FormatStyle) -> String {
    let (open, close, terminator) = style.delimiters();

    let rows: Vec<String> = grid
        .iter_rows()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|color| color.to_string()).collect();
            format!("{}{}{}", open, cells.join(", "), close)
        })
        .collect();

    format!("{}{}{}{}", open, rows.join(",\n"), close, terminator)
}
