// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal HTML index linking every demo figure.

use std::fmt::Write as _;

/// One demo figure and its caption.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    /// File name of the standalone SVG, relative to the index.
    pub(crate) file: &'static str,
    pub(crate) svg: String,
}

/// Renders every section with its SVG inlined and a link to the standalone file.
pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(title));
    out.push_str(
        "<style>\
         body{font-family:sans-serif;margin:2em;background:#f4f4f4}\
         section{background:#fff;padding:1em;margin-bottom:2em;border-radius:4px}\
         </style>\n</head>\n<body>\n",
    );
    let _ = writeln!(out, "<h1>{}</h1>", escape_html(title));
    for section in sections {
        out.push_str("<section>\n");
        let _ = writeln!(out, "<h2>{}</h2>", escape_html(section.title));
        let _ = writeln!(out, "<p>{}</p>", escape_html(section.description));
        out.push_str(&section.svg);
        let _ = writeln!(
            out,
            "<p><a href=\"{0}\">{0}</a></p>",
            escape_html(section.file)
        );
        out.push_str("</section>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
