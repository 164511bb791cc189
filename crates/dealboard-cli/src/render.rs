//! Plain-text rendering of the board.

use std::fmt::Write as _;

use dealboard_core::{Board, DisplayState, Offer};

const CARD_WIDTH: usize = 28;
const BAR_WIDTH: usize = 20;
const GUTTER: &str = " | ";

/// Renders the full screen: filters, the active top-deals group and the
/// main listing.
pub(crate) fn render_board(board: &Board) -> String {
    let mut out = String::new();
    let columns = board.breakpoint().columns_per_row().unwrap_or(1);

    let _ = writeln!(out, "=== Supermarket Offers ===");
    let filter = board.filter();
    let _ = writeln!(
        out,
        "search: \"{}\" | store: {} | {} | {} ({}px)",
        filter.search,
        filter.supermarket.as_deref().unwrap_or("all supermarkets"),
        if board.offers_only() {
            "offers only"
        } else {
            "all products"
        },
        board.breakpoint(),
        board.width(),
    );

    let stores = board.stores();
    if !stores.is_empty() {
        let _ = writeln!(out, "stores: {}", stores.join(", "));
    }
    if let Some(fetched_at) = board.fetched_at() {
        let _ = writeln!(out, "updated {}", fetched_at.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    if let Some(error) = board.last_error() {
        let _ = writeln!(out, "! refresh failed: {error}");
    }

    if let Some(group) = board.active_group() {
        let rotation = board.rotation();
        let _ = writeln!(
            out,
            "\n🔥 Top Deals ({}/{})",
            rotation.active_index() + 1,
            rotation.group_count()
        );
        let cards: Vec<&Offer> = group.iter().collect();
        out.push_str(&render_grid(&cards, columns));
    }

    let _ = writeln!(out, "\n🛒 All Products");
    match board.display_state() {
        DisplayState::Loading => {
            let _ = writeln!(out, "Loading offers...");
        }
        DisplayState::Empty => {
            let _ = writeln!(out, "No products found.");
        }
        DisplayState::Populated => out.push_str(&render_grid(&board.main_view(), columns)),
    }

    out
}

/// Lays cards out `columns` per row.
pub(crate) fn render_grid(offers: &[&Offer], columns: usize) -> String {
    let mut out = String::new();
    for row in offers.chunks(columns.max(1)) {
        let cards: Vec<Vec<String>> = row.iter().map(|o| card_lines(o)).collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);
        for line in 0..height {
            let cells: Vec<String> = cards
                .iter()
                .map(|card| fit(card.get(line).map_or("", String::as_str), CARD_WIDTH))
                .collect();
            let _ = writeln!(out, "{}", cells.join(GUTTER).trim_end());
        }
        out.push('\n');
    }
    out
}

/// The text of one offer card.
pub(crate) fn card_lines(offer: &Offer) -> Vec<String> {
    let mut lines = vec![offer.name().to_owned()];

    if offer.is_deal() {
        let was = offer
            .old_price()
            .map_or_else(String::new, |old| format!("  was {old} лв"));
        lines.push(format!("{} лв{was}", offer.price()));
        lines.push(format!("-{}%", offer.discount()));
        lines.push(progress_bar(offer.discount()));
    } else {
        lines.push(format!("{} лв.", offer.price()));
    }

    if let Some(quantity) = offer.quantity().filter(|q| !q.is_empty()) {
        lines.push(quantity.to_owned());
    }
    lines.push(format!("Supermarket: {}", offer.supermarket()));
    lines
}

fn progress_bar(discount: u8) -> String {
    let filled = usize::from(discount.min(100)) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Pads or truncates `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}
