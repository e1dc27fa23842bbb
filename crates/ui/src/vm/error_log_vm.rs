use spell_core::model::ErrorLog;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorRowVm {
    pub word: String,
    pub count_label: Option<String>,
}

/// Flagged words, once each, with a count when flagged more than once.
#[must_use]
pub fn map_error_rows(log: &ErrorLog) -> Vec<ErrorRowVm> {
    log.tally()
        .into_iter()
        .map(|flagged| ErrorRowVm {
            count_label: (flagged.count > 1).then(|| format!("×{}", flagged.count)),
            word: flagged.word,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_flags_get_a_count() {
        let mut log = ErrorLog::new();
        log.push("rhythm");
        log.push("weird");
        log.push("rhythm");

        let rows = map_error_rows(&log);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].word, "rhythm");
        assert_eq!(rows[0].count_label.as_deref(), Some("×2"));
        assert!(rows[1].count_label.is_none());
    }
}
