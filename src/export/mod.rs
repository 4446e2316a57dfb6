//! Display formatting and tabular export

pub mod exporter;
pub mod format;

pub use exporter::{bet_rows, export_bets, export_data, to_records, ExportFormat, Record};
pub use format::{
    format_currency, format_date, format_date_time, format_number, format_odds,
    format_percentage, format_profit_loss, format_relative_time, format_roi, format_streak,
    truncate_text, DateStyle, Locale, ProfitLossDisplay, RoiDisplay, Tone, Trend,
};
