//! Line renderers for dependency trees.
//!
//! A renderer is any `Fn(usize, &str) -> String` taking the depth of a
//! package and its name. The renderers here produce one line per package in
//! the form `<indent> - <name>\n`.

/// Indents with one tab per depth level.
///
/// # Example
///
/// ```
/// use deptree::format::tab_format;
///
/// assert_eq!(tab_format(0, "x"), " - x\n");
/// assert_eq!(tab_format(2, "x"), "\t\t - x\n");
/// ```
pub fn tab_format(depth: usize, name: &str) -> String {
    indent_line('\t', depth, name)
}

/// Widest per-level indentation the command line accepts.
pub const MAX_INDENT_WIDTH: usize = 1024;

/// Indents with `spaces` spaces per depth level.
///
/// # Panics
///
/// Panics if the indentation does not fit in memory.
pub fn space_format(spaces: usize, depth: usize, name: &str) -> String {
    indent_line(' ', spaces.saturating_mul(depth), name)
}

/// Returns a renderer that indents with `spaces` spaces per depth level.
///
/// # Example
///
/// ```
/// use deptree::format::make_space_formatter;
///
/// let render = make_space_formatter(2);
/// assert_eq!(render(1, "x"), "   - x\n");
/// ```
pub fn make_space_formatter(spaces: usize) -> impl Fn(usize, &str) -> String {
    move |depth, name| space_format(spaces, depth, name)
}

/// Returns a renderer that indents with `width` copies of `unit` per depth level.
pub fn make_indent_formatter(unit: char, width: usize) -> impl Fn(usize, &str) -> String {
    move |depth, name| indent_line(unit, width.saturating_mul(depth), name)
}

fn indent_line(unit: char, count: usize, name: &str) -> String {
    let capacity = count
        .saturating_mul(unit.len_utf8())
        .saturating_add(name.len() + 4);
    let mut line = String::with_capacity(capacity);
    line.extend(std::iter::repeat(unit).take(count));
    line.push_str(" - ");
    line.push_str(name);
    line.push('\n');
    line
}

/// Indentation style chosen by `--tabs` / `--spaces`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStyle {
    /// One tab per level
    #[default]
    Tabs,
    /// The given number of spaces per level
    Spaces(usize),
}

impl IndentStyle {
    /// Renders a single line in this style.
    pub fn render(&self, depth: usize, name: &str) -> String {
        match *self {
            IndentStyle::Tabs => tab_format(depth, name),
            IndentStyle::Spaces(width) => space_format(width, depth, name),
        }
    }

    /// Returns this style as a renderer closure.
    pub fn renderer(self) -> impl Fn(usize, &str) -> String {
        move |depth, name| self.render(depth, name)
    }
}

impl std::fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndentStyle::Tabs => write!(f, "tabs"),
            IndentStyle::Spaces(width) => write!(f, "spaces:{}", width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_formatter() {
        assert_eq!(space_format(2, 10, "x"), format!("{} - x\n", " ".repeat(20)));
    }

    #[test]
    fn test_space_formatter_factory() {
        let render = make_space_formatter(2);
        assert_eq!(render(1, "x"), "   - x\n");
    }

    #[test]
    fn test_zero_width_spaces_flatten_tree() {
        let render = make_space_formatter(0);
        assert_eq!(render(5, "x"), " - x\n");
    }

    #[test]
    fn test_tab_format() {
        assert_eq!(tab_format(20, "x"), format!("{} - x\n", "\t".repeat(20)));
    }

    #[test]
    fn test_indent_formatter_custom_unit() {
        let render = make_indent_formatter('.', 3);
        assert_eq!(render(2, "pkg"), "...... - pkg\n");
        assert_eq!(render(0, "pkg"), " - pkg\n");
    }

    #[test]
    fn test_indent_formatter_multibyte_unit() {
        let render = make_indent_formatter('│', 1);
        assert_eq!(render(2, "a"), "││ - a\n");
    }

    #[test]
    fn test_indent_style_render() {
        assert_eq!(IndentStyle::Tabs.render(1, "a"), "\t - a\n");
        assert_eq!(IndentStyle::Spaces(4).render(1, "a"), "     - a\n");
        assert_eq!(IndentStyle::default(), IndentStyle::Tabs);
    }

    #[test]
    fn test_widths_within_cli_limit_render() {
        let render = make_space_formatter(MAX_INDENT_WIDTH);
        let line = render(2, "x");
        assert_eq!(line.len(), 2 * MAX_INDENT_WIDTH + " - x\n".len());
        assert!(line.ends_with(" - x\n"));
    }

    #[test]
    fn test_huge_width_at_root_depth_does_not_overflow() {
        assert_eq!(space_format(usize::MAX, 0, "x"), " - x\n");
        assert_eq!(make_indent_formatter('\t', usize::MAX)(0, "x"), " - x\n");
    }

    #[test]
    fn test_indent_style_display() {
        assert_eq!(format!("{}", IndentStyle::Tabs), "tabs");
        assert_eq!(format!("{}", IndentStyle::Spaces(3)), "spaces:3");
    }
}
