//! Counting distinct mailboxes across a list of raw addresses

use crate::address::{NormalizedEmail, normalize_email};
use crate::error::{NormalizeError, Result};
use std::collections::HashSet;
use std::collections::hash_set;
use tracing::{debug, trace, warn};

/// Set of distinct normalized mailboxes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailboxSet {
    mailboxes: HashSet<NormalizedEmail>,
}

impl MailboxSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize every raw address in order and collect the mailboxes
    ///
    /// Stops at the first malformed entry; no partial set is returned.
    pub fn from_raw<I, S>(emails: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();

        for (index, raw) in emails.into_iter().enumerate() {
            let raw = raw.as_ref();
            let mailbox = normalize_email(raw).map_err(|e| {
                warn!(index, error = %e, "Rejected email entry");
                NormalizeError::InvalidEntry {
                    index,
                    source: Box::new(e),
                }
            })?;

            trace!(index, raw, normalized = %mailbox, "Normalized email");
            set.insert(mailbox);
        }

        Ok(set)
    }

    /// Add a mailbox, returning `true` if it was not already present
    pub fn insert(&mut self, mailbox: NormalizedEmail) -> bool {
        self.mailboxes.insert(mailbox)
    }

    #[must_use]
    pub fn contains(&self, mailbox: &NormalizedEmail) -> bool {
        self.mailboxes.contains(mailbox)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mailboxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mailboxes.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, NormalizedEmail> {
        self.mailboxes.iter()
    }

    /// Mailboxes in lexicographic order
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<NormalizedEmail> {
        let mut mailboxes: Vec<_> = self.mailboxes.into_iter().collect();
        mailboxes.sort_unstable();
        mailboxes
    }
}

impl Extend<NormalizedEmail> for MailboxSet {
    fn extend<T: IntoIterator<Item = NormalizedEmail>>(&mut self, iter: T) {
        self.mailboxes.extend(iter);
    }
}

impl FromIterator<NormalizedEmail> for MailboxSet {
    fn from_iter<T: IntoIterator<Item = NormalizedEmail>>(iter: T) -> Self {
        Self {
            mailboxes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MailboxSet {
    type Item = NormalizedEmail;
    type IntoIter = hash_set::IntoIter<NormalizedEmail>;

    fn into_iter(self) -> Self::IntoIter {
        self.mailboxes.into_iter()
    }
}

impl<'a> IntoIterator for &'a MailboxSet {
    type Item = &'a NormalizedEmail;
    type IntoIter = hash_set::Iter<'a, NormalizedEmail>;

    fn into_iter(self) -> Self::IntoIter {
        self.mailboxes.iter()
    }
}

/// Count the distinct mailboxes behind a list of raw addresses
pub fn count_unique_normalized_emails<I, S>(emails: I) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let set = MailboxSet::from_raw(emails)?;
    debug!(count = set.len(), "Counted unique mailboxes");
    Ok(set.len())
}
