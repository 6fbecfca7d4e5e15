//! Booklet assembly.
//!
//! Thin HTML writer; everything interesting happens upstream in the
//! pipeline. Produces a single self-contained artifact: diagrams are
//! embedded as base64 data URIs and page breaks are plain print CSS.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Local;

use crate::models::{BookBuild, BookConfig, PageBreakPolicy};
use crate::Result;

const STYLE: &str = "\
body { font-family: Georgia, serif; max-width: 48em; margin: 2em auto; }\n\
h1 { text-align: center; margin-top: 4em; }\n\
h2 { border-bottom: 1px solid #999; padding-bottom: 0.2em; }\n\
img.board { display: block; margin: 1em auto; }\n\
pre.pgn { white-space: pre-wrap; background: #f5f2ea; padding: 1em; }\n\
.page-break { page-break-after: always; }\n";

/// Writes the assembled booklet to `path`.
pub fn write_book(path: &Path, title: &str, build: &BookBuild, config: &BookConfig) -> Result<()> {
    let html = render_book(title, build, config);
    fs::write(path, html)?;
    Ok(())
}

fn render_book(title: &str, build: &BookBuild, config: &BookConfig) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(title)));
    out.push_str(&format!("<style>\n{}</style>\n</head>\n<body>\n", STYLE));

    out.push_str(&format!("<h1>{}</h1>\n", escape(title)));
    out.push_str("<div class=\"page-break\"></div>\n");

    let mut current_group = None;
    for (idx, puzzle) in build.puzzles.iter().enumerate() {
        if puzzle.group != current_group {
            if let Some(group) = puzzle.group {
                out.push_str(&format!("<h2>Day {}</h2>\n", group));
            }
            current_group = puzzle.group;
        }

        out.push_str(&format!("<h3>{}</h3>\n", escape(&puzzle.caption())));
        out.push_str(&format!(
            "<img class=\"board\" alt=\"{}\" src=\"data:image/png;base64,{}\">\n",
            escape(&puzzle.caption()),
            BASE64.encode(&puzzle.image_png)
        ));

        if breaks_after(build, config, idx) {
            out.push_str("<div class=\"page-break\"></div>\n");
        }
    }

    if !build.solutions.is_empty() {
        out.push_str("<h2>Solutions</h2>\n");
        for solution in &build.solutions {
            out.push_str(&format!("<h3>{}</h3>\n", escape(&solution.caption())));
            out.push_str(&format!(
                "<pre class=\"pgn\">{}</pre>\n",
                escape(&solution.pgn)
            ));
            out.push_str("<div class=\"page-break\"></div>\n");
        }
    }

    out.push_str(&format!(
        "<p class=\"footer\">Generated on {}</p>\n",
        Local::now().format("%Y-%m-%d")
    ));
    out.push_str("</body>\n</html>\n");
    out
}

/// Per-puzzle policy breaks after every puzzle; per-group policy breaks
/// only after the last puzzle of each band (and after the final one).
fn breaks_after(build: &BookBuild, config: &BookConfig, idx: usize) -> bool {
    match config.page_breaks {
        PageBreakPolicy::PerPuzzle => true,
        PageBreakPolicy::PerGroup => match build.puzzles.get(idx + 1) {
            Some(next) => next.group != build.puzzles[idx].group,
            None => true,
        },
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
