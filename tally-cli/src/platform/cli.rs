//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use std::io::{self, Write};

use tally_api::TallyError;

/// 打印错误，可选地显示出错的源码行
pub fn write_error_with_source<W: Write>(w: &mut W, e: &TallyError, show_source: bool) -> io::Result<()> {
    writeln!(w, "{}", e)?;

    if !show_source {
        return Ok(());
    }

    if let (Some(line), Some(col), Some(text)) = (e.line(), e.column(), e.source_line()) {
        write!(w, "{}", format_source_context(text, line, col))?;
    }
    Ok(())
}

/// Render one source line with a caret under `error_col` (both 1-based)
///
/// ```text
///   |--
/// 1 | 1 + @
///   |     ^
///   |--
/// ```
pub fn format_source_context(line_text: &str, error_line: usize, error_col: usize) -> String {
    let line_str = error_line.to_string();
    let gutter = " ".repeat(line_str.len());
    let marker = " ".repeat(error_col.saturating_sub(1));

    let mut out = String::new();
    out.push_str(&format!("{} |--\n", gutter));
    out.push_str(&format!("{} | {}\n", line_str, line_text));
    out.push_str(&format!("{} | {}^\n", gutter, marker));
    out.push_str(&format!("{} |--\n", gutter));
    out
}
