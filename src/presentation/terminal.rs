// Plain-text rendering of the dashboard for a terminal
use crate::domain::dashboard::{DashboardView, Region, RegionContent, RegionUpdate};
use crate::presentation::controller::Notifier;
use std::fmt::Write as _;

pub fn render_content(content: &RegionContent) -> String {
    let mut out = String::new();
    match content {
        RegionContent::Text(text) | RegionContent::Placeholder(text) => {
            out.push_str(text);
            out.push('\n');
        }
        RegionContent::Items(items) => {
            for item in items {
                if let Some(link) = &item.link {
                    writeln!(out, "  - {} <{}>", item.text, link).ok();
                } else {
                    writeln!(out, "  - {}", item.text).ok();
                }
            }
        }
        RegionContent::Sections(sections) => {
            for section in sections {
                writeln!(out, "{}", section.title).ok();
                for (i, step) in section.steps.iter().enumerate() {
                    writeln!(out, "  {}. {}", i + 1, step).ok();
                }
            }
        }
    }
    out
}

fn heading(region: Region) -> String {
    format!("== {} ==\n", region.title())
}

pub fn render_update(update: &RegionUpdate) -> String {
    format!("{}{}", heading(update.region), render_content(&update.content))
}

/// Every region in display order; regions never written show "Loading...".
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    for region in Region::ALL {
        out.push_str(&heading(region));
        match view.region(region) {
            Some(state) => {
                out.push_str(&render_content(&state.content));
                writeln!(out, "  (updated {})", state.updated_at.format("%H:%M:%S UTC")).ok();
            }
            None => out.push_str("Loading...\n"),
        }
        out.push('\n');
    }
    out
}

/// Notifications go to stderr so they interrupt the dashboard on stdout.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        eprintln!("! {}", message);
    }
}
