//! Delimited tabular export of the transfer list, and the restore path back.
//!
//! Semicolon-delimited, one transfer per record after a fixed header row.
//! Fields containing the delimiter, quotes, or newlines are wrapped in
//! double quotes with inner quotes doubled, so a record may span several
//! physical lines. Restore accepts canonical and
//! Portuguese transport labels, since exported files may have been produced
//! under either language.

use chrono::{NaiveDate, NaiveTime};

use crate::constants::export::{
    DATE_FORMAT, DELIMITER, FIELD_COUNT, FLAG_NO, FLAG_YES, HEADER, TIME_FORMAT,
};
use crate::data::{Transfer, TransportMode, WorkerKind};
use crate::errors::BoardError;
use crate::identity::normalized_name;

fn encode_field(value: &str) -> String {
    if value.contains(DELIMITER) || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        FLAG_YES
    } else {
        FLAG_NO
    }
}

/// Encode transfers into the delimited export format.
pub fn export_delimited(transfers: &[Transfer]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for t in transfers {
        let fields = [
            t.last_name.clone(),
            t.first_name.clone(),
            t.kind.as_str().to_string(),
            t.origin_city.clone(),
            t.destination_city.clone(),
            t.origin_area.clone(),
            t.destination_area.clone(),
            t.companion.clone(),
            t.transport.as_str().to_string(),
            t.date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default(),
            t.time.map(|tm| tm.format(TIME_FORMAT).to_string()).unwrap_or_default(),
            t.instructions.clone(),
            flag(t.is_new).to_string(),
            flag(t.leader).to_string(),
        ];
        let encoded: Vec<String> = fields.iter().map(|f| encode_field(f)).collect();
        out.push_str(&encoded.join(&DELIMITER.to_string()));
        out.push('\n');
    }
    out
}

/// Split an exported document into records, honoring quoted sections.
/// A newline inside quotes belongs to the field (multiline instructions);
/// only an unquoted newline terminates a record.
fn split_records(input: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut buffer = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    buffer.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                buffer.push(ch);
            }
        } else if ch == '"' && buffer.is_empty() {
            in_quotes = true;
        } else if ch == DELIMITER {
            fields.push(std::mem::take(&mut buffer));
        } else if ch == '\n' {
            fields.push(std::mem::take(&mut buffer));
            records.push(std::mem::take(&mut fields));
        } else if ch != '\r' {
            buffer.push(ch);
        }
    }
    if !buffer.is_empty() || !fields.is_empty() {
        fields.push(buffer);
        records.push(fields);
    }
    records
}

/// Decode an exported document back into transfers.
///
/// The first record is treated as the header and skipped; blank records are
/// ignored. A non-blank record with the wrong field count is malformed input
/// and fails the whole restore — partial restores would silently lose rows.
pub fn restore_delimited(input: &str) -> Result<Vec<Transfer>, BoardError> {
    let mut transfers = Vec::new();
    for (row_no, fields) in split_records(input).into_iter().enumerate().skip(1) {
        if fields.len() == 1 && fields[0].trim().is_empty() {
            continue;
        }
        if fields.len() != FIELD_COUNT {
            return Err(BoardError::Restore(format!(
                "row {}: expected {} fields, found {}",
                row_no + 1,
                FIELD_COUNT,
                fields.len()
            )));
        }
        let last_name = fields[0].trim().to_string();
        let first_name = fields[1].trim().to_string();
        let name = if first_name.is_empty() {
            last_name.clone()
        } else {
            format!("{last_name}, {first_name}")
        };
        let transport = TransportMode::parse(&fields[8]).unwrap_or(TransportMode::Bus);
        transfers.push(Transfer {
            id: normalized_name(&name),
            name,
            last_name,
            first_name,
            kind: WorkerKind::parse(&fields[2]),
            companion: fields[7].clone(),
            origin_city: fields[3].trim().to_string(),
            origin_zone: String::new(),
            origin_district: String::new(),
            origin_area: fields[5].clone(),
            destination_city: fields[4].trim().to_string(),
            destination_zone: String::new(),
            destination_district: String::new(),
            destination_area: fields[6].clone(),
            transport,
            date: NaiveDate::parse_from_str(fields[9].trim(), DATE_FORMAT).ok(),
            time: NaiveTime::parse_from_str(fields[10].trim(), TIME_FORMAT).ok(),
            instructions: fields[11].clone(),
            is_new: fields[12].trim().eq_ignore_ascii_case(FLAG_YES),
            leader: fields[13].trim().eq_ignore_ascii_case(FLAG_YES),
        });
    }
    Ok(transfers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(name: &str) -> Transfer {
        let (last_name, first_name) = crate::identity::split_name(name);
        Transfer {
            id: normalized_name(name),
            name: name.to_string(),
            last_name,
            first_name,
            kind: WorkerKind::Elder,
            companion: "Costa, Ana".to_string(),
            origin_city: "Tete".to_string(),
            origin_zone: "ZONA TETE".to_string(),
            origin_district: String::new(),
            origin_area: "Centro".to_string(),
            destination_city: "Beira".to_string(),
            destination_zone: "ZONA BEIRA".to_string(),
            destination_district: String::new(),
            destination_area: "Munhava".to_string(),
            transport: TransportMode::Taxi,
            date: NaiveDate::from_ymd_opt(2024, 8, 14),
            time: NaiveTime::from_hms_opt(7, 30, 0),
            instructions: "Meet at the chapel; bring documents".to_string(),
            leader: true,
            is_new: false,
        }
    }

    #[test]
    fn fields_with_delimiters_are_quoted() {
        let encoded = export_delimited(&[transfer("Silva, João")]);
        assert!(encoded.contains("\"Meet at the chapel; bring documents\""));
        assert!(encoded.contains("\"Costa, Ana\"") || encoded.contains("Costa, Ana"));
    }

    #[test]
    fn export_restore_round_trips() {
        let original = vec![transfer("Silva, João"), {
            let mut t = transfer("Novo, Pedro");
            t.is_new = true;
            t.date = None;
            t.time = None;
            t.transport = TransportMode::Plane;
            t
        }];
        let restored = restore_delimited(&export_delimited(&original)).unwrap();
        assert_eq!(restored.len(), original.len());
        for (a, b) in original.iter().zip(&restored) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.origin_city, b.origin_city);
            assert_eq!(a.destination_city, b.destination_city);
            assert_eq!(a.transport, b.transport);
            assert_eq!(a.date, b.date);
            assert_eq!(a.time, b.time);
            assert_eq!(a.is_new, b.is_new);
            assert_eq!(a.leader, b.leader);
            assert_eq!(a.instructions, b.instructions);
        }
    }

    #[test]
    fn restore_accepts_portuguese_transport_labels() {
        let doc = format!(
            "{HEADER}\nSilva;João;Elder;Tete;Beira;;;;Autocarro;;;;no;no\n"
        );
        let restored = restore_delimited(&doc).unwrap();
        assert_eq!(restored[0].transport, TransportMode::Bus);
        assert!(restored[0].is_tbd());
    }

    #[test]
    fn restore_rejects_short_rows() {
        let doc = format!("{HEADER}\nSilva;João;Elder\n");
        let err = restore_delimited(&doc).unwrap_err();
        assert!(matches!(err, BoardError::Restore(_)));
    }

    #[test]
    fn multiline_instructions_survive_the_round_trip() {
        let mut t = transfer("Silva, João");
        t.instructions = "bring documents\nmeet at chapel".to_string();
        let restored = restore_delimited(&export_delimited(&[t.clone()])).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].instructions, t.instructions);
        assert_eq!(restored[0].name, t.name);
    }

    #[test]
    fn quoted_instructions_survive_the_round_trip() {
        let mut t = transfer("Silva, João");
        t.instructions = "say \"hello\"; then wait".to_string();
        let restored = restore_delimited(&export_delimited(&[t.clone()])).unwrap();
        assert_eq!(restored[0].instructions, t.instructions);
    }
}
