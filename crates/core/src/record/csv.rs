use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    keyframe::{Keyframe, MoveType, Pose},
    ChoreoError, EnergyTier, Result,
};

/// Column order is a compatibility contract with downstream replay tools.
pub const CSV_COLUMNS: [&str; 16] = [
    "frame_number",
    "timestamp",
    "move_type",
    "energy_level",
    "sequence_type",
    "sequence_variation",
    "sequence_position",
    "sequence_repetition",
    "head_movement_name",
    "x_cm",
    "y_cm",
    "z_cm",
    "roll_deg",
    "pitch_deg",
    "yaw_deg",
    "body_yaw_deg",
];

pub fn write_csv<W: Write>(mut writer: W, keyframes: &[Keyframe]) -> Result<()> {
    writeln!(writer, "{}", CSV_COLUMNS.join(","))?;
    for keyframe in keyframes {
        let pose = &keyframe.pose;
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            keyframe.frame_number,
            keyframe.timestamp,
            keyframe.move_type,
            keyframe.energy_level,
            keyframe.sequence_type,
            csv_escape(&keyframe.sequence_variation.to_string()),
            keyframe.sequence_position,
            keyframe.sequence_repetition,
            csv_escape(&keyframe.head_movement_name),
            pose.x,
            pose.y,
            pose.z,
            pose.roll,
            pose.pitch,
            pose.yaw,
            pose.body_yaw,
        )?;
    }
    writer.flush()?;
    Ok(())
}

pub fn to_csv_string(keyframes: &[Keyframe]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, keyframes)?;
    String::from_utf8(buffer).map_err(|err| ChoreoError::msg(err.to_string()))
}

pub fn save_csv(path: impl AsRef<Path>, keyframes: &[Keyframe]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(BufWriter::new(file), keyframes)
}

/// Re-imports an exported keyframe table. Lines are numbered from 1, the
/// header being line 1; errors point at the line a row starts on.
pub fn read_csv<R: BufRead>(reader: R) -> Result<Vec<Keyframe>> {
    let mut records = Records::new(reader);

    let (header_line, header) = loop {
        match records.next_record()? {
            Some((_, row)) if row.trim().is_empty() => continue,
            Some(record) => break record,
            None => return Err(ChoreoError::replay(1, "missing header row")),
        }
    };
    let columns = split_row(header.trim_start_matches('\u{feff}').trim_end());
    if columns != CSV_COLUMNS {
        return Err(ChoreoError::replay(
            header_line,
            format!(
                "unexpected header `{}`, expected `{}`",
                columns.join(","),
                CSV_COLUMNS.join(",")
            ),
        ));
    }

    let mut keyframes: Vec<Keyframe> = Vec::new();
    while let Some((number, row)) = records.next_record()? {
        if row.trim().is_empty() {
            continue;
        }
        let keyframe = parse_row(number, &row)?;
        if let Some(previous) = keyframes.last() {
            if keyframe.timestamp <= previous.timestamp {
                return Err(ChoreoError::replay(
                    number,
                    format!(
                        "timestamp {} does not follow {}",
                        keyframe.timestamp, previous.timestamp
                    ),
                ));
            }
        }
        keyframes.push(keyframe);
    }
    Ok(keyframes)
}

pub fn parse_csv(source: &str) -> Result<Vec<Keyframe>> {
    read_csv(source.as_bytes())
}

pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Keyframe>> {
    let file = File::open(path.as_ref())?;
    read_csv(BufReader::new(file))
}

fn parse_row(line: usize, row: &str) -> Result<Keyframe> {
    let fields = split_row(row);
    if fields.len() != CSV_COLUMNS.len() {
        return Err(ChoreoError::replay(
            line,
            format!(
                "expected {} fields, found {}",
                CSV_COLUMNS.len(),
                fields.len()
            ),
        ));
    }

    let field = |index: usize| fields[index].trim();
    let number = |index: usize| -> Result<f32> {
        let value: f32 = parse(line, index, field(index))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ChoreoError::replay(
                line,
                format!("`{}` is not finite", CSV_COLUMNS[index]),
            ))
        }
    };

    let timestamp: f64 = parse(line, 1, field(1))?;
    if !timestamp.is_finite() {
        return Err(ChoreoError::replay(line, "timestamp is not finite"));
    }
    let move_type: MoveType = field(2)
        .parse()
        .map_err(|err: ChoreoError| ChoreoError::replay(line, err.to_string()))?;
    let sequence_type: EnergyTier = field(4)
        .parse()
        .map_err(|err: ChoreoError| ChoreoError::replay(line, err.to_string()))?;
    let mut letters = field(5).chars();
    let sequence_variation = match (letters.next(), letters.next()) {
        (Some(letter), None) => letter,
        _ => {
            return Err(ChoreoError::replay(
                line,
                format!("sequence_variation `{}` is not a single letter", field(5)),
            ))
        }
    };

    Ok(Keyframe {
        frame_number: parse(line, 0, field(0))?,
        timestamp,
        move_type,
        energy_level: number(3)?,
        sequence_type,
        sequence_variation,
        sequence_position: parse(line, 6, field(6))?,
        sequence_repetition: parse(line, 7, field(7))?,
        head_movement_name: fields[8].clone(),
        pose: Pose {
            x: number(9)?,
            y: number(10)?,
            z: number(11)?,
            roll: number(12)?,
            pitch: number(13)?,
            yaw: number(14)?,
            body_yaw: number(15)?,
        },
    })
}

fn parse<T: std::str::FromStr>(line: usize, column: usize, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        ChoreoError::replay(
            line,
            format!("cannot parse `{value}` as {}", CSV_COLUMNS[column]),
        )
    })
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Logical rows of a CSV source. A row runs on over line breaks while a
/// quoted field is open, so quoted newlines survive a round trip.
struct Records<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> Records<R> {
    fn new(reader: R) -> Self {
        Self { reader, line: 0 }
    }

    /// Next row without its terminator, with the line it starts on.
    fn next_record(&mut self) -> Result<Option<(usize, String)>> {
        let start = self.line + 1;
        let mut record = String::new();
        loop {
            let read = self.reader.read_line(&mut record)?;
            if read == 0 {
                if record.is_empty() {
                    return Ok(None);
                }
                if quote_open(&record) {
                    return Err(ChoreoError::replay(start, "unterminated quoted field"));
                }
                return Ok(Some((start, record)));
            }
            self.line += 1;
            if !quote_open(&record) {
                let end = record.trim_end_matches(['\n', '\r']).len();
                record.truncate(end);
                return Ok(Some((start, record)));
            }
        }
    }
}

/// `""` escapes come in pairs, so an odd quote count means a field is open.
fn quote_open(record: &str) -> bool {
    record.bytes().filter(|&b| b == b'"').count() % 2 == 1
}

/// Splits one row, honouring double-quoted fields with `""` escapes.
fn split_row(row: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, quoted) {
            ('"', true) if chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            ('"', true) => quoted = false,
            ('"', false) if current.is_empty() => quoted = true,
            (',', false) => fields.push(std::mem::take(&mut current)),
            (c, _) => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keyframe(frame: u32, timestamp: f64, name: &str) -> Keyframe {
        Keyframe {
            frame_number: frame,
            timestamp,
            move_type: MoveType::HalfBeatHold,
            energy_level: 0.73,
            sequence_type: EnergyTier::High,
            sequence_variation: 'C',
            sequence_position: 5,
            sequence_repetition: 1,
            head_movement_name: name.to_string(),
            pose: Pose {
                x: 1.25,
                y: -3.5,
                z: 0.1,
                roll: 12.0,
                pitch: -7.3,
                yaw: 45.0,
                body_yaw: -30.5,
            },
        }
    }

    #[test]
    fn writes_header_in_contract_order() {
        let csv = to_csv_string(&[]).unwrap();
        assert_eq!(
            csv.trim_end(),
            "frame_number,timestamp,move_type,energy_level,sequence_type,sequence_variation,\
             sequence_position,sequence_repetition,head_movement_name,x_cm,y_cm,z_cm,roll_deg,\
             pitch_deg,yaw_deg,body_yaw_deg"
        );
    }

    #[test]
    fn writes_one_row_per_keyframe() {
        let csv = to_csv_string(&[keyframe(1, 0.5, "Nod down (C-Forward Beat6/8)")]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "1,0.5,half_beat_hold,0.73,high_energy,C,5,1,Nod down (C-Forward Beat6/8),\
             1.25,-3.5,0.1,12,-7.3,45,-30.5"
        );
    }

    #[test]
    fn round_trips_exactly() {
        let keyframes = vec![
            keyframe(1, 0.5, "plain"),
            keyframe(2, 0.75, "with, comma and \"quotes\""),
        ];
        let csv = to_csv_string(&keyframes).unwrap();
        assert_eq!(parse_csv(&csv).unwrap(), keyframes);
    }

    #[test]
    fn round_trips_names_with_line_breaks() {
        let keyframes = vec![
            keyframe(1, 0.5, "Nod\ndown (A-Custom Beat1/8)"),
            keyframe(2, 0.75, "Tilt\r\nleft, then \"right\""),
            keyframe(3, 1.0, "plain"),
        ];
        let csv = to_csv_string(&keyframes).unwrap();
        assert_eq!(parse_csv(&csv).unwrap(), keyframes);
    }

    #[test]
    fn counts_lines_across_quoted_line_breaks() {
        let csv = to_csv_string(&[keyframe(1, 0.5, "two\nlines"), keyframe(2, 1.0, "b")]).unwrap();
        let broken = csv.replace("high_energy,C,5,1,b", "loud,C,5,1,b");
        assert!(matches!(parse_csv(&broken), Err(ChoreoError::Replay { line: 4, .. })));
    }

    #[test]
    fn rejects_unterminated_quote() {
        let header = CSV_COLUMNS.join(",");
        let csv = format!("{header}\n1,0.5,main_beat,0.5,low_energy,A,0,0,\"open\n");
        match parse_csv(&csv) {
            Err(ChoreoError::Replay { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("unterminated"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn tolerates_crlf_and_bom() {
        let csv = to_csv_string(&[keyframe(1, 0.5, "x")]).unwrap();
        let windows = format!("\u{feff}{}", csv.replace('\n', "\r\n"));
        assert_eq!(parse_csv(&windows).unwrap().len(), 1);
    }

    #[test]
    fn rejects_wrong_header() {
        let result = parse_csv("frame,timestamp\n1,0.5\n");
        assert!(matches!(result, Err(ChoreoError::Replay { line: 1, .. })));
        assert!(matches!(parse_csv(""), Err(ChoreoError::Replay { line: 1, .. })));
    }

    #[test]
    fn reports_the_offending_line() {
        let mut csv = to_csv_string(&[keyframe(1, 0.5, "a"), keyframe(2, 1.0, "b")]).unwrap();
        csv = csv.replace("high_energy,C,5,1,b", "loud,C,5,1,b");
        match parse_csv(&csv) {
            Err(ChoreoError::Replay { line, reason }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("loud"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_short_rows_and_bad_numbers() {
        let header = CSV_COLUMNS.join(",");
        let short = format!("{header}\n1,0.5,main_beat\n");
        assert!(matches!(parse_csv(&short), Err(ChoreoError::Replay { line: 2, .. })));

        let csv = to_csv_string(&[keyframe(1, 0.5, "a")]).unwrap();
        let broken = csv.replace(",1.25,", ",abc,");
        assert!(matches!(parse_csv(&broken), Err(ChoreoError::Replay { line: 2, .. })));
    }

    #[test]
    fn rejects_non_increasing_timestamps() {
        let csv = to_csv_string(&[keyframe(1, 1.0, "a"), keyframe(2, 1.0, "b")]).unwrap();
        assert!(matches!(parse_csv(&csv), Err(ChoreoError::Replay { line: 3, .. })));
    }

    #[test]
    fn splits_quoted_fields() {
        assert_eq!(
            split_row(r#"a,"b,c","say ""hi""",,d"#),
            vec!["a", "b,c", "say \"hi\"", "", "d"]
        );
    }

    #[test]
    fn escapes_only_when_needed() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
