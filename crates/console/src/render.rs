//! Text rendering for console output.
//!
//! Maps the core [`Tone`] categories onto ANSI colors and lays out list
//! pages, detail views, and audit trails as plain text. Pure functions
//! returning strings; printing is `main`'s business.

use steward_client::detail::ContentDetailView;
use steward_core::display::{risk_tone, state_tone, Tone};
use steward_core::model::{ContentEvent, ContentListPage, TransitionOutcome};
use steward_core::query::{has_next, has_prev, next_offset, prev_offset, ListQuery};
use steward_core::risk::risk_label;

const RESET: &str = "\x1b[0m";

fn tone_code(tone: Tone) -> &'static str {
    match tone {
        Tone::Green => "\x1b[32m",
        Tone::Amber => "\x1b[33m",
        Tone::Red => "\x1b[31m",
        Tone::Blue => "\x1b[34m",
        Tone::Slate => "\x1b[90m",
    }
}

/// Wrap text in the ANSI color for a tone.
pub fn badge(text: &str, tone: Tone) -> String {
    format!("{}{}{}", tone_code(tone), text, RESET)
}

/// Render one page of a content listing with navigation hints.
pub fn page(page: &ContentListPage, query: &ListQuery) -> String {
    let mut out = String::new();

    let first = page.total.min(page.offset + 1);
    let last = page.total.min(page.offset + page.limit);
    out.push_str(&format!(
        "Showing {first}-{last} of {} (sort: {})\n\n",
        page.total, query.sort
    ));

    for item in &page.items {
        out.push_str(&format!(
            "{:<12} {:<44} {:<18} {:<8} {}\n",
            item.id,
            item.title,
            badge(&item.state, state_tone(&item.state)),
            badge(&risk_label(item.risk_tier), risk_tone(item.risk_tier)),
            item.created_at.format("%Y-%m-%d %H:%M"),
        ));
    }

    let mut nav = Vec::new();
    if has_prev(page.offset) {
        nav.push(format!(
            "prev: --offset {}",
            prev_offset(page.offset, page.limit, page.total)
        ));
    }
    if has_next(page.offset, page.limit, page.total) {
        nav.push(format!(
            "next: --offset {}",
            next_offset(page.offset, page.limit, page.total)
        ));
    }
    if !nav.is_empty() {
        out.push('\n');
        out.push_str(&nav.join("   "));
        out.push('\n');
    }

    out
}

/// Render a full detail view: current state, allowed transitions, events.
pub fn detail(view: &ContentDetailView) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}  {}\n", view.item.id, view.item.title));
    out.push_str(&format!(
        "from_state: {}   {}\n",
        badge(&view.allowed.from_state, Tone::Blue),
        badge(
            &risk_label(view.allowed.risk_tier),
            risk_tone(view.allowed.risk_tier)
        ),
    ));
    out.push_str(&format!(
        "created: {}   updated: {}\n\n",
        view.item.created_at.format("%Y-%m-%d %H:%M"),
        view.item.updated_at.format("%Y-%m-%d %H:%M"),
    ));

    if view.allowed.allowed.is_empty() {
        out.push_str("No allowed transitions available.\n");
    } else {
        let states: Vec<String> = view
            .allowed
            .allowed
            .iter()
            .map(|s| badge(s, state_tone(s)))
            .collect();
        out.push_str(&format!("Allowed next states: {}\n", states.join(" ")));
    }

    out.push('\n');
    out.push_str(&events(&view.events));
    out
}

/// Render an audit trail, newest-policy untouched: the backend's order is
/// the display order.
pub fn events(events: &[ContentEvent]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Events ({} total)\n", events.len()));

    for event in events {
        let actor = match &event.actor_id {
            Some(actor_id) => format!("{} ({actor_id})", event.actor_type),
            None => event.actor_type.clone(),
        };
        out.push_str(&format!(
            "  {} actor: {}  {}\n",
            badge(&event.event_type, Tone::Slate),
            actor,
            event.created_at.format("%Y-%m-%d %H:%M"),
        ));

        let payload = serde_json::to_string_pretty(&event.payload)
            .expect("event payload is always serialisable");
        for line in payload.lines() {
            out.push_str(&format!("    {line}\n"));
        }
    }

    out
}

/// Render a successful transition outcome.
pub fn outcome(outcome: &TransitionOutcome) -> String {
    format!(
        "Transitioned: {} → {} ({})\n",
        outcome.from_state,
        outcome.to_state,
        risk_label(outcome.risk_tier),
    )
}
