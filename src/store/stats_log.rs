use crate::clock::{Timestamp, between};
use crate::engine::scoring;
use crate::error::{Result, TypistError};
use crate::session::mode::Mode;
use crate::session::phrase::Phrase;
use crate::store::schema::{RECORD_VERSION, StatsRecord};

/// Seconds, characters per second and words per minute for typing `text`
/// between `started_at` and `finished_at`.
pub fn compute_stats(
    text: &str,
    started_at: Option<Timestamp>,
    finished_at: Timestamp,
) -> (f64, f64, f64) {
    let Some(start) = started_at else {
        return (0.0, 0.0, 0.0);
    };
    let seconds = between(start, finished_at).as_secs_f64();
    if seconds <= 0.0 {
        return (seconds, 0.0, 0.0);
    }
    let cps = text.chars().count() as f64 / seconds;
    let wpm = text.split(' ').count() as f64 * 60.0 / seconds;
    (seconds, cps, wpm)
}

/// Record for the phrase's current round, finished at `now`.
pub fn record_for(phrase: &Phrase, now: Timestamp) -> StatsRecord {
    let round = phrase.round();
    let (seconds, cps, wpm) = compute_stats(&phrase.text, round.started_at, now);
    StatsRecord {
        text: phrase.text.clone(),
        started_at: round.started_at.unwrap_or(now),
        finished_at: now,
        errors: round.errors,
        typos: round.typos.clone(),
        mode: phrase.mode,
        seconds,
        cps,
        wpm,
        version: RECORD_VERSION,
    }
}

/// Newline-terminated JSON line ready to be appended to the stats file.
pub fn format_record(record: &StatsRecord) -> Vec<u8> {
    // A struct of strings, numbers and timestamps always serializes.
    let mut line = serde_json::to_vec(record).unwrap_or_default();
    line.push(b'\n');
    line
}

/// Parse a stats file. Blank lines are skipped; anything else that is not a
/// record is an error.
pub fn parse_records(data: &[u8]) -> Result<Vec<StatsRecord>> {
    let text = std::str::from_utf8(data).map_err(|_| TypistError::NotUtf8)?;
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line.trim()).map_err(|source| TypistError::StatsRecord {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

/// Sum the final score of every fast, slow, normal run of the same text.
pub fn compute_total_score(records: &[StatsRecord]) -> f64 {
    records
        .windows(3)
        .filter_map(|w| match w {
            [fast, slow, normal]
                if fast.mode == Mode::Fast
                    && slow.mode == Mode::Slow
                    && normal.mode == Mode::Normal
                    && fast.text == slow.text
                    && slow.text == normal.text =>
            {
                Some(scoring::final_score(
                    &fast.text,
                    scoring::speed_score(&fast.text, between(fast.started_at, fast.finished_at)),
                    scoring::error_score(&slow.text, slow.errors),
                    scoring::round_score(
                        &normal.text,
                        between(normal.started_at, normal.finished_at),
                        normal.errors,
                    ),
                ))
            }
            _ => None,
        })
        .sum()
}

pub fn total_score(data: &[u8]) -> Result<f64> {
    Ok(compute_total_score(&parse_records(data)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::after;
    use chrono::{TimeZone, Utc};
    use std::time::Duration;

    fn t(ms: u64) -> Timestamp {
        after(Utc.timestamp_opt(1_700_000_000, 0).unwrap(), Duration::from_millis(ms))
    }

    fn record(text: &str, mode: Mode, start: u64, end: u64, errors: u32) -> StatsRecord {
        let (seconds, cps, wpm) = compute_stats(text, Some(t(start)), t(end));
        StatsRecord {
            text: text.to_string(),
            started_at: t(start),
            finished_at: t(end),
            errors,
            typos: Vec::new(),
            mode,
            seconds,
            cps,
            wpm,
            version: RECORD_VERSION,
        }
    }

    #[test]
    fn test_compute_stats() {
        let (seconds, cps, wpm) = compute_stats("ab cd", Some(t(0)), t(2000));
        assert_eq!(seconds, 2.0);
        assert_eq!(cps, 2.5);
        assert_eq!(wpm, 60.0);
        assert_eq!(compute_stats("ab", None, t(10)), (0.0, 0.0, 0.0));
        assert_eq!(compute_stats("ab", Some(t(10)), t(10)), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_total_score_counts_complete_triples() {
        let records = vec![
            record("cat", Mode::Fast, 0, 1000, 2),
            record("cat", Mode::Slow, 2000, 5000, 1),
            record("cat", Mode::Normal, 6000, 8000, 0),
        ];
        let expected = scoring::final_score(
            "cat",
            scoring::speed_score("cat", Duration::from_secs(1)),
            scoring::error_score("cat", 1),
            scoring::round_score("cat", Duration::from_secs(2), 0),
        );
        assert!((compute_total_score(&records) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_total_score_skips_broken_triples() {
        let records = vec![
            record("cat", Mode::Fast, 0, 1000, 0),
            record("dog", Mode::Slow, 0, 1000, 0),
            record("dog", Mode::Normal, 0, 1000, 0),
            record("cat", Mode::Slow, 0, 1000, 0),
        ];
        assert_eq!(compute_total_score(&records), 0.0);
        assert_eq!(compute_total_score(&records[..2]), 0.0);
    }

    #[test]
    fn test_parse_tolerates_blank_lines() {
        let mut data = format_record(&record("cat", Mode::Fast, 0, 1000, 0));
        data.extend_from_slice(b"\n\n");
        data.extend(format_record(&record("cat", Mode::Slow, 0, 1000, 0)));
        data.extend_from_slice(b"\n   \n");
        assert_eq!(parse_records(&data).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_rejects_malformed_line() {
        let mut data = format_record(&record("cat", Mode::Fast, 0, 1000, 0));
        data.extend_from_slice(b"{not json}\n");
        match parse_records(&data) {
            Err(TypistError::StatsRecord { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected StatsRecord error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_accepts_legacy_records() {
        let line = br#"{"text":"cat","started_at":"2019-03-01T12:00:00.5+01:00","finished_at":"2019-03-01T12:00:02.5+01:00","errors":0,"mode":2,"seconds":2,"cps":1.5,"wpm":30}"#;
        let records = parse_records(line).unwrap();
        assert_eq!(records[0].mode, Mode::Normal);
        assert!(records[0].typos.is_empty());
        assert_eq!(records[0].version, 0);
        assert_eq!(
            between(records[0].started_at, records[0].finished_at),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn test_record_line_shape() {
        let line = format_record(&record("cat", Mode::Slow, 0, 1500, 1));
        assert_eq!(line.last(), Some(&b'\n'));
        let value: serde_json::Value = serde_json::from_slice(&line).unwrap();
        assert_eq!(value["mode"], 1);
        assert_eq!(value["version"], 1);
        assert_eq!(value["typos"], serde_json::json!([]));
        assert_eq!(value["seconds"], 1.5);
    }
}
