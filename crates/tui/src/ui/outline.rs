//! Plain-text roadmap outline for `--outline`.
//!
//! Writes the whole topic tree without touching the terminal, one phase per
//! section, so the content can be piped or diffed.

use std::fmt::Write;

use crate::content::{ContentStore, Phase, Topic};

pub const APP_TITLE: &str = "Business Analyst Roadmap with AI Integration";
pub const APP_SUBTITLE: &str = "Build the skills recruiters look for, stage by stage";

/// Render every phase of `content` as an indented outline.
pub fn render_outline(content: &ContentStore) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{APP_TITLE}");
    let _ = writeln!(out, "{APP_SUBTITLE}");

    for phase in Phase::ALL {
        let section = content.phase(phase);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Stage {}: {} ({})",
            phase.stage(),
            section.label,
            section.heading
        );
        let _ = writeln!(out, "  {}", section.summary);
        for topic in &section.topics {
            write_topic(&mut out, topic, 1);
        }
        let _ = writeln!(out, "  Tip: {}", section.tip);
    }
    out
}

fn write_topic(out: &mut String, topic: &Topic, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = writeln!(
        out,
        "{indent}{} {}: {}",
        topic.icon.glyph(),
        topic.title,
        topic.description
    );
    for sub in &topic.sub_items {
        write_topic(out, sub, depth + 1);
    }
}
