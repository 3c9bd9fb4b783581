use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use portfolio_tracker_core::models::holding::Holding;
use portfolio_tracker_core::models::performance::{PerformanceRecord, PortfolioReport};
use portfolio_tracker_core::models::portfolio::COLUMNS;

const EMPTY_NOTICE: &str = "(no holdings)";

/// Console summary: holdings table, total value, performance table, in that order.
pub fn render_report(report: &PortfolioReport) -> String {
    let mut out = String::new();

    out.push_str("\nCurrent Portfolio:\n");
    out.push_str(&holdings_table(&report.holdings));
    out.push('\n');
    out.push_str(&format!(
        "Total Portfolio Value: {}{:.2}\n",
        report.currency_symbol, report.total_value
    ));

    out.push_str("\nPerformance:\n");
    out.push_str(&performance_table(&report.performance));
    out.push('\n');
    if !report.performance.is_empty() {
        out.push_str(&format!(
            "Total Gain/Loss: {}{:.2}\n",
            report.currency_symbol,
            report.total_gain_loss()
        ));
    }

    out
}

/// The raw holdings rows as stored.
pub fn holdings_table(holdings: &[Holding]) -> String {
    if holdings.is_empty() {
        return EMPTY_NOTICE.to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(COLUMNS.to_vec());
    for h in holdings {
        table.add_row(vec![
            Cell::new(&h.ticker),
            number(format!("{}", h.shares)),
            number(format!("{:.2}", h.purchase_price)),
        ]);
    }
    table.to_string()
}

/// One line per holding row with its latest price and gain/loss.
pub fn performance_table(records: &[PerformanceRecord]) -> String {
    if records.is_empty() {
        return EMPTY_NOTICE.to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Ticker",
        "Shares",
        "Purchase Price",
        "Current Price",
        "Market Value",
        "Gain/Loss",
        "Return %",
    ]);
    for r in records {
        table.add_row(vec![
            Cell::new(&r.ticker),
            number(format!("{}", r.shares)),
            number(format!("{:.2}", r.purchase_price)),
            number(format!("{:.2}", r.current_price)),
            number(format!("{:.2}", r.market_value)),
            number(format!("{:+.2}", r.gain_loss)),
            number(format!("{:+.2}%", r.return_pct)),
        ]);
    }
    table.to_string()
}

fn number(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}
