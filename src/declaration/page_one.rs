use super::blocks::{draw_checklist, draw_labelled, OPTION_TEXT_X};
use super::catalog::{INVESTMENTS, INVESTMENTS_ON_FIRST_PAGE, PURPOSES};
use super::record::DeclarationRecord;
use crate::font::FontStyle;
use crate::layout::{
    draw_field, format_date, justify_line, pad, underline, Cursor, FieldValue, Margins,
    PAGE_WIDTH,
};
use crate::surface::{DrawingSurface, TextAlign, DEFAULT_FONT_SIZE};
use crate::units::{Mm, Pt};

pub const TITLE: &str = "Customer Declaration - ESOP/Portfolio Investment Inward Wire Remittances";
pub const SUBTITLE: &str = "(For repatriation within 180 days)";

/// Blank for the foreign company and the fund source, which get a line of their own
pub const LONG_PLACEHOLDER: &str = "___________________________________________";

const DATE_X: Mm = Mm(150.0);
const ADDRESS: [&str; 4] = [
    "To,",
    "Asst General Manager",
    "State Bank of India",
    "Tanuku Branch.",
];
const ACCOUNT_PREFIX: &str = "I hold the account number ";
const ACCOUNT_SUFFIX: &str = " with State Bank of India,";
const BRANCH_SUFFIX: &str =
    " Branch. This is to confirm that I will be receiving inward wire remittances in the";
const PURPOSE_INTRO: &str =
    "aforementioned account and the purpose of the remittance would be: (tick wherever applicable)";

/// Lay out the first page of the declaration onto the surface's current page: the
/// addressed letter, the remittance purposes, the remittance details and the first
/// part of the investment checklist.
///
/// Returns the cursor as it stands after the last row.
pub fn compose_first_page<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    record: &DeclarationRecord,
) -> Cursor {
    let mut cursor = Cursor::new(Margins::declaration());
    let left = cursor.margins().left;
    let column = cursor.margins().content_width();

    surface.set_font(FontStyle::Bold);
    surface.set_font_size(Pt(14.0));
    surface.draw_text(TITLE, PAGE_WIDTH / 2.0, cursor.y(), TextAlign::Center);
    cursor.next_line();
    surface.set_font_size(Pt(11.0));
    surface.draw_text(SUBTITLE, PAGE_WIDTH / 2.0, cursor.y(), TextAlign::Center);
    cursor.advance(Mm(15.0));

    surface.set_font(FontStyle::Normal);
    surface.set_font_size(DEFAULT_FONT_SIZE);
    let date = FieldValue::new(format_date(record.today_date.as_deref()).as_deref());
    draw_labelled(surface, "Date: ", &date, DATE_X, cursor.y());
    cursor.advance(Mm(10.0));

    for (index, line) in ADDRESS.iter().enumerate() {
        if index > 0 {
            cursor.next_line();
        }
        surface.draw_text(line, left, cursor.y(), TextAlign::Left);
    }
    cursor.advance(Mm(12.0));
    surface.draw_text("Dear Sir/Madam,", left, cursor.y(), TextAlign::Left);
    cursor.advance(Mm(10.0));

    // the account and branch sit inside justified lines, so their underlines are
    // measured separately from where the words actually land
    let account = FieldValue::new(record.account_number.as_deref());
    let line = format!("{ACCOUNT_PREFIX}{}{ACCOUNT_SUFFIX}", account.text);
    justify_line(surface, &line, left, cursor.y(), column);
    if account.is_filled {
        let start = left + surface.measure_width(ACCOUNT_PREFIX);
        let width = surface.measure_width(&pad(&account.text));
        underline(surface, start, cursor.y(), width);
    }
    cursor.next_line();

    let branch = FieldValue::new(record.branch_name.as_deref());
    let line = format!("{}{BRANCH_SUFFIX}", branch.text);
    justify_line(surface, &line, left, cursor.y(), column);
    if branch.is_filled {
        let width = surface.measure_width(&pad(&branch.text));
        underline(surface, left, cursor.y(), width);
    }
    cursor.next_line();

    justify_line(surface, PURPOSE_INTRO, left, cursor.y(), column);
    cursor.advance(Mm(10.0));

    draw_checklist(surface, &mut cursor, &PURPOSES, &record.purposes, true);
    surface.draw_text("and investment fund shares", OPTION_TEXT_X, cursor.y(), TextAlign::Left);
    cursor.advance(Mm(10.0));

    compose_remittance_details(surface, &mut cursor, record);

    surface.draw_text(
        "I further confirm that the underlying investments were: (tick wherever applicable)",
        left,
        cursor.y(),
        TextAlign::Left,
    );
    cursor.advance(Mm(10.0));
    draw_checklist(
        surface,
        &mut cursor,
        &INVESTMENTS[..INVESTMENTS_ON_FIRST_PAGE],
        &record.investments,
        false,
    );

    log::debug!("composed first page, cursor at {:?}", cursor.y());
    cursor
}

fn compose_remittance_details<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    cursor: &mut Cursor,
    record: &DeclarationRecord,
) {
    let left = cursor.margins().left;

    surface.draw_text(
        "Details of the remittances are as below:",
        left,
        cursor.y(),
        TextAlign::Left,
    );
    cursor.advance(Mm(10.0));

    surface.draw_text(
        "\u{2022} Name of the foreign company (Applicable for ESOP transactions only):",
        left,
        cursor.y(),
        TextAlign::Left,
    );
    cursor.next_line();
    surface.set_font(FontStyle::Bold);
    let company = FieldValue::format(record.foreign_company.as_deref(), LONG_PLACEHOLDER);
    draw_field(surface, &company, left, cursor.y());
    surface.set_font(FontStyle::Normal);
    cursor.advance(Mm(10.0));

    surface.draw_text(
        "\u{2022} Fund Transfer from overseas broking account maintained with (Applicable for Portfolio Investments",
        left,
        cursor.y(),
        TextAlign::Left,
    );
    cursor.next_line();
    let fund = FieldValue::format(record.fund_transfer.as_deref(), LONG_PLACEHOLDER);
    draw_labelled(surface, "only): ", &fund, left, cursor.y());
    cursor.advance(Mm(10.0));

    let sale_date = format_date(record.sale_date.as_deref());
    let details = [
        ("\u{2022} Currency of remittance: ", record.currency.as_deref()),
        ("\u{2022} Amount: ", record.amount.as_deref()),
        ("\u{2022} Received from: ", record.received_from.as_deref()),
        (
            "\u{2022} Date of sale of ESOPs/ESUs/RSUs/Portfolio investments: ",
            sale_date.as_deref(),
        ),
    ];
    for (index, (label, raw)) in details.into_iter().enumerate() {
        if index > 0 {
            cursor.advance(Mm(10.0));
        }
        draw_labelled(surface, label, &FieldValue::new(raw), left, cursor.y());
    }
    cursor.advance(Mm(12.0));
}
