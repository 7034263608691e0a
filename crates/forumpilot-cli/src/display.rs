//! Human-readable rendering of analysis results.

use forumpilot_core::{AnalyzedPost, ClassificationResult, Settings, SummaryResult};

use crate::health::HealthReport;

const LABEL_WIDTH: usize = 12;
const WRAP_WIDTH: usize = 76;

fn row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  {:<width$} {}\n", label, value, width = LABEL_WIDTH));
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("── {title} "));
    out.push_str(&"─".repeat(WRAP_WIDTH.saturating_sub(title.chars().count() + 4)));
    out.push('\n');
}

pub fn classification(result: &ClassificationResult) -> String {
    let mut out = String::new();
    section(&mut out, "Analysis");
    row(&mut out, "sentiment", result.sentiment.as_str());
    row(&mut out, "toxicity", result.toxicity.as_str());
    out
}

pub fn post(post: &AnalyzedPost) -> String {
    let mut out = String::new();
    section(&mut out, "Post");
    row(&mut out, "id", &post.id);
    row(&mut out, "author", &post.author);
    row(&mut out, "timestamp", &post.timestamp);
    row(&mut out, "sentiment", post.sentiment.as_str());
    row(&mut out, "toxicity", post.toxicity.as_str());
    for line in wrap(&post.content, WRAP_WIDTH - 2) {
        out.push_str(&format!("  {line}\n"));
    }
    out
}

pub fn summary(result: &SummaryResult) -> String {
    let mut out = String::new();
    section(&mut out, "Summary");
    for paragraph in result.summary.lines() {
        for line in wrap(paragraph, WRAP_WIDTH - 2) {
            out.push_str(&format!("  {line}\n"));
        }
    }
    out
}

pub fn health(report: &HealthReport, settings: &Settings) -> String {
    let mut out = String::new();
    section(&mut out, "Health");
    row(&mut out, "status", &report.status);
    row(&mut out, "message", &report.message);
    row(&mut out, "timestamp", &report.timestamp);
    section(&mut out, "Environment");
    row(&mut out, "remote", &settings.use_remote_inference.to_string());
    row(&mut out, "mock", &settings.use_mock_provider.to_string());
    row(&mut out, "endpoint", &settings.inference_url);
    row(
        &mut out,
        "timeout",
        &format!("{} ms", settings.request_timeout.as_millis()),
    );
    row(
        &mut out,
        "retries",
        &format!(
            "{} × {} ms",
            settings.max_retries,
            settings.retry_backoff.as_millis()
        ),
    );
    row(
        &mut out,
        "cache ttl",
        &format!("{} s", settings.cache_ttl.as_secs()),
    );
    out
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
