//! Static tables shared by the canned reply provider and the dashboard.
//!
//! Nothing here is ever mutated. The summary card figures are literals and
//! are intentionally not derived from the chart rows.

/// Replies returned regardless of what the user typed.
pub const CANNED_RESPONSES: &[&str] = &[
    "I'd be happy to help you with that! Here's what I think about your request...",
    "That's a great question! Let me break this down for you step by step.",
    "I can definitely assist you with this. Based on what you've described, here's my recommendation...",
    "Interesting topic! Here's a comprehensive overview of what you're asking about...",
    "I understand what you're looking for. Let me provide you with a detailed explanation...",
    "Great question! Here's how I would approach this problem...",
    "I can help you with that. Here's a structured response to your inquiry...",
    "That's something I can definitely help with. Let me walk you through this...",
];

/// Prompts offered on the landing pane.
pub const SUGGESTED_PROMPTS: &[&str] = &[
    "Help me write a professional email",
    "Explain a complex topic simply",
    "Review my code for improvements",
    "Brainstorm creative ideas",
];

/// One period of the sample chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleChartRow {
    pub period: &'static str,
    pub desktop: u64,
    pub mobile: u64,
}

impl SampleChartRow {
    /// Three-letter axis label ("January" -> "Jan").
    pub fn short_label(&self) -> &'static str {
        match self.period.char_indices().nth(3) {
            Some((idx, _)) => &self.period[..idx],
            None => self.period,
        }
    }
}

pub const SERIES_A_LABEL: &str = "Desktop";
pub const SERIES_B_LABEL: &str = "Mobile";

pub const CHART_ROWS: &[SampleChartRow] = &[
    SampleChartRow {
        period: "January",
        desktop: 186,
        mobile: 80,
    },
    SampleChartRow {
        period: "February",
        desktop: 305,
        mobile: 200,
    },
    SampleChartRow {
        period: "March",
        desktop: 237,
        mobile: 120,
    },
    SampleChartRow {
        period: "April",
        desktop: 173,
        mobile: 190,
    },
    SampleChartRow {
        period: "May",
        desktop: 209,
        mobile: 130,
    },
    SampleChartRow {
        period: "June",
        desktop: 214,
        mobile: 140,
    },
];

/// Headline figures shown under the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub description: &'static str,
    pub total: &'static str,
    pub delta: &'static str,
}

pub const SUMMARY_CARDS: [SummaryCard; 2] = [
    SummaryCard {
        label: SERIES_A_LABEL,
        description: "Total desktop users",
        total: "24,828",
        delta: "+12% from last month",
    },
    SummaryCard {
        label: SERIES_B_LABEL,
        description: "Total mobile users",
        total: "25,010",
        delta: "+8% from last month",
    },
];
