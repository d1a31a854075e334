use crate::models::Entry;
use crate::utils::date::date_key;
use crate::utils::period::Period;

/// Narrowing applied before any derivation. The default matches everything.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub period: Option<Period>,
    pub tag: Option<String>,
    pub journal: Option<String>,
    pub starred_only: bool,
}

impl EntryFilter {
    pub fn is_empty(&self) -> bool {
        self.period.is_none() && self.tag.is_none() && self.journal.is_none() && !self.starred_only
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(period) = &self.period {
            // undated entries never fall inside a period
            match &entry.creation_date {
                Some(dt) if period.contains(date_key(dt)) => {}
                _ => return false,
            }
        }

        if let Some(tag) = &self.tag
            && !entry.has_tag(tag)
        {
            return false;
        }

        if let Some(journal) = &self.journal {
            let same = entry
                .journal_name
                .as_deref()
                .is_some_and(|name| name.eq_ignore_ascii_case(journal));
            if !same {
                return false;
            }
        }

        !self.starred_only || entry.starred
    }
}
