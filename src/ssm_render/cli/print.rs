use colored::Colorize;
use ssm_render::api::{MessageLevel, RenderReport};
use ssm_render::error::RenderError;
use std::io::IsTerminal;

/// Pipeline runners grep for these; keep them stable.
pub const SUCCESS_MARKER: &str = "SUCCESS:";
pub const FAILURE_MARKER: &str = "FAILURE:";

pub fn print_report(report: &RenderReport) {
    for message in &report.messages {
        match message.level {
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Success => {
                println!("{} {}", SUCCESS_MARKER.green().bold(), message.content)
            }
        }
    }
}

pub fn print_failure(error: &RenderError) {
    let mut lines = failure_lines(error).into_iter();
    if let Some(headline) = lines.next() {
        eprintln!("{}", format_headline(&headline, std::io::stderr().is_terminal()));
    }
    for line in lines {
        eprintln!("{}", line);
    }
}

/// `colored` decides from stdout, so stderr output is only coloured when
/// stderr itself is a terminal. Piped stderr must start with the bare marker.
fn format_headline(headline: &str, colorize: bool) -> String {
    if colorize {
        headline.red().to_string()
    } else {
        headline.to_string()
    }
}

/// The failure headline, followed by one ` - <name>` line per missing parameter.
fn failure_lines(error: &RenderError) -> Vec<String> {
    let mut lines = vec![format!("{} {}", FAILURE_MARKER, error)];
    if let RenderError::InvalidParameters(names) = error {
        lines.extend(names.iter().map(|name| format!(" - {}", name)));
    }
    lines
}
