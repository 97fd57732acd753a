//! Research-memo prompt text for a generative model.

use crate::adapters::text_report::{format_dollars, group_thousands};
use crate::domain::disclosure::DisclosureRecord;
use crate::domain::selection::select_trading_day;
use chrono::NaiveDate;

pub const NO_TRADES: &str = "No insider trades found recently.";

const LONG_DATE: &str = "%B %d, %Y";

const MEMO_BRIEF: &str = "\
Cover every insider purchase below, answering its analysis questions in order. \
Use precise financial language and cite the data behind each point.

Insider trade summary:";

/// Questions asked of every trade, in order.
const ANALYSIS_STEPS: [&str; 7] = [
    "Describe the business in two or three sentences.",
    "Give the next earnings date and flag it if it falls within 21 days.",
    "Note any recent trades by this insider and how the stock moved afterwards.",
    "Review the six-month chart for breakouts, consolidations or gaps.",
    "Judge the conviction behind the trade from the insider's role, the trade size and the price paid against the current price.",
    "Check RSI and the 50-day and 200-day moving averages. Say whether the stock is overbought, oversold or near a crossover.",
    "Recommend an entry price and a target exit price from momentum, valuation and technical levels.",
];

const MEMO_CLOSING: &str = "\
Return a bullet-point summary per stock with cited data and a bolded final \
opinion: **Buy**, **Watch**, or **Avoid**.";

fn render_trade(r: &DisclosureRecord) -> String {
    let mut out = format!(
        "\n---\n**{ticker}**\n\
         - Trade Date: {date}\n\
         - Insider: {insider} ({title})\n\
         - Shares Purchased: {shares} @ ${price:.2}\n\
         - Total Trade Value: {value}\n",
        ticker = r.ticker,
        date = r.trade_date.format(LONG_DATE),
        insider = r.insider_name,
        title = r.title,
        shares = group_thousands(r.shares),
        price = r.price,
        value = format_dollars(r.total_value()),
    );
    out.push_str(&format!("\nAnalysis Instructions for {}:\n", r.ticker));
    for (i, step) in ANALYSIS_STEPS.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, step));
    }
    out
}

/// Build the memo prompt for `today`'s trades, or for the busiest recent
/// trade date when nothing traded today.
pub fn build_prompt(records: &[DisclosureRecord], today: NaiveDate) -> String {
    let Some(selection) = select_trading_day(records, today) else {
        return NO_TRADES.to_string();
    };

    let header_date = selection.date.format(LONG_DATE);
    let mut prompt = format!(
        "You are an equity research analyst at a hedge fund. Write an investment memo \
         from the insider trading data for {}.\n",
        header_date
    );
    if selection.fallback {
        prompt.push_str(&format!(
            "\nNote: no insider trades were found for {}. Using the most active recent \
             trade date, {}, instead.\n",
            today.format(LONG_DATE),
            header_date
        ));
    }
    prompt.push('\n');
    prompt.push_str(MEMO_BRIEF);
    prompt.push('\n');

    for r in &selection.trades {
        prompt.push_str(&render_trade(r));
    }

    prompt.push('\n');
    prompt.push_str(MEMO_CLOSING);
    prompt
}
