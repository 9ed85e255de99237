use super::blocks::{draw_checklist, draw_labelled, OPTION_TEXT_X};
use super::catalog::{INVESTMENTS, INVESTMENTS_ON_FIRST_PAGE};
use super::record::DeclarationRecord;
use crate::font::FontStyle;
use crate::layout::{
    draw_field, format_date, justify_line, layout_paragraph, Cursor, FieldValue, Margins,
};
use crate::surface::{DrawingSurface, TextAlign, DEFAULT_FONT_SIZE};
use crate::units::{Mm, Pt};

/// Blank for the Indian company and the signature
pub const SIGNATURE_RULE: &str = "_____________________________";

/// Header and width of each column of the outward remittance table
pub const REMITTANCE_COLUMNS: [(&str, Mm); 4] = [
    ("Amount Remitted (in FCY)", Mm(45.0)),
    ("Date of remittance", Mm(40.0)),
    ("Name of the Bank", Mm(50.0)),
    ("Bank Branch Name", Mm(45.0)),
];

const TABLE_FONT_SIZE: Pt = Pt(9.0);

pub const FEMA_UNDERTAKING: &str = "I hereby declare that the transaction does not involve and is not designed for the purpose of any contravention or evasion of the provision of the aforesaid act or any rule, regulation, notification, direction, or order made there under. I also understand that if I refuse to comply with any such requirement or make any unsatisfactory compliance therewith, the Bank shall refuse in writing to undertake the transaction and shall, if it has reason to believe that any contravention/evasion is contemplated by me, report the matter to RBI. I also hereby agree and undertake to give such information/documents as will reasonably satisfy the Bank about this transaction in terms of the above declaration.";

pub const REPATRIATION_NOTE: &str = "Any unused forex amount (unless reinvested) / proceed of shares acquired under ESOP scheme, should be repatriated immediately within a period of 180 days, from the date of realization or date of return to India (applicable for the date of realization after August 22, 2022. The repatriation period prior to August 22, 2022, is 90 days only), as the case may be.";

/// Lay out the second page of the declaration onto the surface's current page: the
/// rest of the investment checklist, the outward remittance table, the buy-back
/// undertaking, the FEMA undertaking, the repatriation note and the signature block.
///
/// The two long paragraphs break onto new pages if they run past the bottom margin.
/// Returns the cursor as it stands after the signature block.
pub fn compose_second_page<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    record: &DeclarationRecord,
) -> Cursor {
    let mut cursor = Cursor::new(Margins::declaration());
    let left = cursor.margins().left;
    let column = cursor.margins().content_width();

    surface.set_font(FontStyle::Normal);
    surface.set_font_size(DEFAULT_FONT_SIZE);
    draw_checklist(
        surface,
        &mut cursor,
        &INVESTMENTS[INVESTMENTS_ON_FIRST_PAGE..],
        &record.investments,
        false,
    );
    surface.draw_text("(LRS) limit", OPTION_TEXT_X, cursor.y(), TextAlign::Left);
    cursor.advance(Mm(10.0));

    surface.draw_text(
        "Details of outward remittance are as under:",
        left,
        cursor.y(),
        TextAlign::Left,
    );
    cursor.advance(Mm(10.0));
    compose_remittance_table(surface, &mut cursor, record);

    let company = FieldValue::format(record.indian_company.as_deref(), SIGNATURE_RULE);
    let end = draw_labelled(
        surface,
        "I undertake to inform the Indian company ",
        &company,
        left,
        cursor.y(),
    );
    surface.draw_text(" to comply", end, cursor.y(), TextAlign::Left);
    cursor.next_line();
    justify_line(
        surface,
        "with the applicable regulatory reporting requirements in case of buy-back of ESOPs (Applicable for",
        left,
        cursor.y(),
        column,
    );
    cursor.next_line();
    surface.draw_text("Buy-back ESOP transactions only).", left, cursor.y(), TextAlign::Left);
    cursor.advance(Mm(15.0));

    draw_heading(surface, &cursor, "Undertaking Under FEMA, 1999");
    cursor.advance(Mm(10.0));
    layout_paragraph(surface, &mut cursor, FEMA_UNDERTAKING, left, column);
    cursor.advance(Mm(10.0));

    draw_heading(surface, &cursor, "Please note:");
    cursor.next_line();
    layout_paragraph(surface, &mut cursor, REPATRIATION_NOTE, left, column);
    cursor.advance(Mm(15.0));

    compose_signature(surface, &mut cursor, record);

    log::debug!("composed second page, cursor at {:?}", cursor.y());
    cursor
}

fn draw_heading<S: DrawingSurface + ?Sized>(surface: &mut S, cursor: &Cursor, text: &str) {
    surface.set_font(FontStyle::Bold);
    surface.draw_text(text, cursor.margins().left, cursor.y(), TextAlign::Left);
    surface.set_font(FontStyle::Normal);
}

/// Header row, then a single row of answers; unanswered cells stay empty
fn compose_remittance_table<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    cursor: &mut Cursor,
    record: &DeclarationRecord,
) {
    surface.set_font_size(TABLE_FONT_SIZE);

    let mut x = cursor.margins().left;
    for (header, width) in REMITTANCE_COLUMNS {
        surface.draw_text(header, x, cursor.y(), TextAlign::Left);
        x += width;
    }
    cursor.next_line();

    let remittance_date = format_date(record.remittance_date.as_deref());
    let cells = [
        record.amount_remitted.as_deref(),
        remittance_date.as_deref(),
        record.bank_name.as_deref(),
        record.bank_branch.as_deref(),
    ];
    let mut x = cursor.margins().left;
    for (raw, (_, width)) in cells.into_iter().zip(REMITTANCE_COLUMNS) {
        let cell = FieldValue::format(raw, "");
        if cell.is_filled {
            draw_field(surface, &cell, x, cursor.y());
        }
        x += width;
    }
    cursor.advance(Mm(15.0));

    surface.set_font_size(DEFAULT_FONT_SIZE);
}

fn compose_signature<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    cursor: &mut Cursor,
    record: &DeclarationRecord,
) {
    let left = cursor.margins().left;

    surface.draw_text("Regards,", left, cursor.y(), TextAlign::Left);
    cursor.advance(Mm(20.0));
    surface.draw_text(SIGNATURE_RULE, left, cursor.y(), TextAlign::Left);
    cursor.next_line();

    if let Some(name) = record.declarant() {
        let name = FieldValue::new(Some(name));
        let end = draw_labelled(surface, "(", &name, left, cursor.y());
        surface.draw_text(")", end, cursor.y(), TextAlign::Left);
    }
    cursor.next_line();
    surface.draw_text("(Name & Signature)", left, cursor.y(), TextAlign::Left);
}
