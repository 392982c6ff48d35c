// crates/travel-core/src/render.rs

//! # Presentation
//!
//! [`render`] turns query results into a [`View`] value. It touches no UI;
//! the browser and terminal front ends decide how to display the view
//! ([`View::to_html`], or `Display` for plain text).

use crate::model::ResultRecord;
use crate::time::{display_time, Clock};
use serde::Serialize;
use std::fmt;

/// Shown in the output area when a search matched nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results found. Try another search.";

/// One recommendation card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub image_url: String,
    pub name: String,
    pub description: String,
    pub current_time: String,
}

/// What the output area shows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "cards", rename_all = "camelCase")]
pub enum View {
    /// Nothing rendered yet, or cleared by a reset.
    #[default]
    Cleared,
    NoResults,
    Cards(Vec<Card>),
}

/// Build the view for `results`, stamping each card with the current time in
/// its destination's zone.
pub fn render(results: &[ResultRecord], clock: &dyn Clock) -> View {
    if results.is_empty() {
        return View::NoResults;
    }
    let cards = results
        .iter()
        .map(|r| Card {
            image_url: r.image_url.clone(),
            name: r.name.clone(),
            description: r.description.clone(),
            current_time: display_time(r.time_zone(), clock),
        })
        .collect();
    View::Cards(cards)
}

impl View {
    pub fn is_cleared(&self) -> bool {
        matches!(self, View::Cleared)
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            View::Cards(cards) => cards,
            _ => &[],
        }
    }

    /// Markup for the output container. All dataset text is escaped.
    pub fn to_html(&self) -> String {
        match self {
            View::Cleared => String::new(),
            View::NoResults => format!("<p>{}</p>", escape_html(NO_RESULTS_MESSAGE)),
            View::Cards(cards) => cards.iter().map(Card::to_html).collect(),
        }
    }
}

impl Card {
    pub fn to_html(&self) -> String {
        format!(
            concat!(
                "<div class=\"recommendation-card\">",
                "<img src=\"{src}\" alt=\"{name}\">",
                "<h3>{name}</h3>",
                "<p>{description}</p>",
                "<p><strong>Current Time:</strong> {time}</p>",
                "</div>"
            ),
            src = escape_html(&self.image_url),
            name = escape_html(&self.name),
            description = escape_html(&self.description),
            time = escape_html(&self.current_time),
        )
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Cleared => Ok(()),
            View::NoResults => writeln!(f, "{NO_RESULTS_MESSAGE}"),
            View::Cards(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{card}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "  Image: {}", self.image_url)?;
        writeln!(f, "  Current Time: {}", self.current_time)
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
