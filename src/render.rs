//! Console table rendering for the contact listing.
//!
//! Pure projection of records into text: the first phone and email share the
//! record's row, further ones go on continuation rows under their columns.

use crate::models::Record;

const INDEX_WIDTH: usize = 5;
const NAME_WIDTH: usize = 20;
const PHONE_WIDTH: usize = 20;
const EMAIL_WIDTH: usize = 30;
const BIRTHDAY_WIDTH: usize = 20;
const ADDRESS_WIDTH: usize = 20;

/// Inner width of the frame: the columns plus the separators between them.
const TABLE_WIDTH: usize =
    INDEX_WIDTH + NAME_WIDTH + PHONE_WIDTH + EMAIL_WIDTH + BIRTHDAY_WIDTH + ADDRESS_WIDTH + 5;

struct Row<'a> {
    index: String,
    name: &'a str,
    phone: &'a str,
    email: &'a str,
    birthday: String,
    address: &'a str,
}

impl Row<'_> {
    fn format(&self) -> String {
        format!(
            "|{:^iw$}|{:^nw$}|{:^pw$}|{:^ew$}|{:^bw$}|{:^aw$}|",
            self.index,
            self.name,
            self.phone,
            self.email,
            self.birthday,
            self.address,
            iw = INDEX_WIDTH,
            nw = NAME_WIDTH,
            pw = PHONE_WIDTH,
            ew = EMAIL_WIDTH,
            bw = BIRTHDAY_WIDTH,
            aw = ADDRESS_WIDTH,
        )
    }
}

/// Render `records` as a framed table, numbered from 1.
pub fn render_table<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    let rule = "-".repeat(TABLE_WIDTH + 2);
    let mut lines = vec![
        "_".repeat(TABLE_WIDTH + 2),
        format!("|{:^width$}|", "List of contact", width = TABLE_WIDTH),
        rule.clone(),
        Row {
            index: "#".to_string(),
            name: "Name",
            phone: "Phones",
            email: "email",
            birthday: "Birthday".to_string(),
            address: "Address",
        }
        .format(),
    ];

    for (position, record) in records.into_iter().enumerate() {
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        let emails: Vec<&str> = record.emails().iter().map(|e| e.as_str()).collect();

        lines.push(rule.clone());
        lines.push(
            Row {
                index: (position + 1).to_string(),
                name: record.name().map(|n| n.as_str()).unwrap_or_default(),
                phone: phones.first().copied().unwrap_or_default(),
                email: emails.first().copied().unwrap_or_default(),
                birthday: record.birthday().map(|b| b.to_string()).unwrap_or_default(),
                address: record.address().map(|a| a.as_str()).unwrap_or_default(),
            }
            .format(),
        );

        let extra = phones.len().max(emails.len()).saturating_sub(1);
        for i in 1..=extra {
            lines.push(
                Row {
                    index: String::new(),
                    name: "",
                    phone: phones.get(i).copied().unwrap_or_default(),
                    email: emails.get(i).copied().unwrap_or_default(),
                    birthday: String::new(),
                    address: "",
                }
                .format(),
            );
        }
    }

    lines.push(rule);
    let mut table = lines.join("\n");
    table.push('\n');
    table
}
