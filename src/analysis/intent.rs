use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Keywords that indicate plot/visualization requests.
const PLOT_KEYWORDS: [&str; 18] = [
    "plot",
    "chart",
    "graph",
    "visualize",
    "visualization",
    "visualise",
    "visualisation",
    "bar chart",
    "line chart",
    "pie chart",
    "scatter plot",
    "histogram",
    "heatmap",
    "box plot",
    "boxplot",
    "draw",
    "show me",
    "create a",
];

static VISUALIZATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"show.*\b(distribution|trend|comparison|correlation)\b",
        r"compare.*\b(using|with|via)\b",
        r"display.*\b(data|results|analysis)\b.*visually",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("visualization pattern is valid"))
    .collect()
});

/// Whether the prompt appears to request a plot/visualization.
///
/// Keyword-based with a few phrase patterns on top; a rough classifier, nothing more.
pub fn requires_plot(prompt: &str) -> bool {
    if prompt.trim().is_empty() {
        return false;
    }

    let lowered = prompt.to_lowercase();

    if let Some(keyword) = PLOT_KEYWORDS.iter().find(|keyword| lowered.contains(*keyword)) {
        debug!(keyword, "plot request detected");
        return true;
    }

    for pattern in VISUALIZATION_PATTERNS.iter() {
        if pattern.is_match(&lowered) {
            debug!(pattern = pattern.as_str(), "plot request detected");
            return true;
        }
    }

    false
}
