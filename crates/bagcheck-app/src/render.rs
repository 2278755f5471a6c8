//! Render use cases: Markdown and plain text from in-memory reports.

use bagcheck_types::CheckReport;

use crate::to_renderable;

pub fn render_markdown(report: &CheckReport) -> String {
    bagcheck_render::render_markdown(&to_renderable(report))
}

pub fn render_text(report: &CheckReport) -> String {
    bagcheck_render::render_text(&to_renderable(report))
}
