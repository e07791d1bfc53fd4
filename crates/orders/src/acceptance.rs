//! Order acceptance input: delivery commitment for an existing order.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use supplydesk_core::{FieldError, FieldErrors, FieldSpec, FormData, Widget};

use crate::record::{OrderRecord, OrderUpdate};

pub const EXPECTED_DELIVERY_DATE: FieldSpec =
    FieldSpec::text("expected_delivery_date", "Expected delivery date").widget(Widget::Date);
pub const DELIVERY_NOTES: FieldSpec = FieldSpec::text("delivery_notes", "Delivery notes")
    .optional()
    .widget(Widget::TextArea { rows: Some(3) })
    .help_text("Add any delivery instructions for the vendor");

/// Accepted date layouts, tried in order.
pub const DATE_INPUT_FORMATS: [&str; 11] = [
    "%Y-%m-%d",  // 2024-03-15
    "%m/%d/%Y",  // 03/15/2024
    "%m/%d/%y",  // 03/15/24
    "%b %d %Y",  // Mar 15 2024
    "%b %d, %Y", // Mar 15, 2024
    "%d %b %Y",  // 15 Mar 2024
    "%d %b, %Y", // 15 Mar, 2024
    "%B %d %Y",  // March 15 2024
    "%B %d, %Y", // March 15, 2024
    "%d %B %Y",  // 15 March 2024
    "%d %B, %Y", // 15 March, 2024
];

/// Parse a submitted date against [`DATE_INPUT_FORMATS`].
///
/// `%Y` layouts only match a year written with exactly four digits, so
/// `03/15/24` falls through to the two-digit layout instead of landing in
/// year 24, while `0999-01-01` is still year 999.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_INPUT_FORMATS.iter().find_map(|fmt| {
        let date = NaiveDate::parse_from_str(value, fmt).ok()?;
        if fmt.contains("%Y") && !year_written_in_four_digits(value, date.year()) {
            return None;
        }
        Some(date)
    })
}

fn year_written_in_four_digits(value: &str, year: i32) -> bool {
    let year = format!("{year:04}");
    year.len() == 4
        && value
            .split(|c: char| !c.is_ascii_digit())
            .any(|digits| digits == year)
}

/// A validated delivery commitment for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAcceptanceRequest {
    expected_delivery_date: NaiveDate,
    delivery_notes: Option<String>,
}

impl OrderAcceptanceRequest {
    pub fn expected_delivery_date(&self) -> NaiveDate {
        self.expected_delivery_date
    }

    pub fn delivery_notes(&self) -> Option<&str> {
        self.delivery_notes.as_deref()
    }

    /// Explicit mapping onto the persistent fields being changed.
    pub fn into_update(self) -> OrderUpdate {
        OrderUpdate {
            expected_delivery_date: self.expected_delivery_date,
            delivery_notes: self.delivery_notes,
        }
    }
}

/// Order acceptance form: field table, validation, and prefill.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderAcceptanceInput;

impl OrderAcceptanceInput {
    pub const FIELDS: [FieldSpec; 2] = [EXPECTED_DELIVERY_DATE, DELIVERY_NOTES];

    /// Validate a raw submission. The target order is identified by the caller.
    pub fn validate(data: &FormData) -> Result<OrderAcceptanceRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let expected_delivery_date = EXPECTED_DELIVERY_DATE
            .clean(data, &mut errors)
            .and_then(|raw| {
                let date = parse_date(&raw);
                if date.is_none() {
                    errors.add(EXPECTED_DELIVERY_DATE.name, FieldError::malformed_date());
                }
                date
            });
        let delivery_notes = DELIVERY_NOTES.clean(data, &mut errors);

        errors.finish(|| {
            Some(OrderAcceptanceRequest {
                expected_delivery_date: expected_delivery_date?,
                delivery_notes,
            })
        })
    }

    /// Raw form values for an existing record, for pre-populating an edit view.
    pub fn initial(record: &OrderRecord) -> FormData {
        let mut data = FormData::new();
        data.insert(
            EXPECTED_DELIVERY_DATE.name,
            record
                .expected_delivery_date()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );
        data.insert(
            DELIVERY_NOTES.name,
            record.delivery_notes().unwrap_or_default(),
        );
        data
    }
}
