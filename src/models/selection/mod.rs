use chrono::NaiveDate;

/// Maximum number of dates one generated script can register.
pub const MAX_DATES: usize = 8;

/// Ordered set of chosen reservation dates.
///
/// Insertion order is preserved, calendar days are unique, and the set never
/// grows past [`MAX_DATES`]. All mutation goes through [`toggle`],
/// [`remove`], and [`clear`], each reporting whether anything changed so the
/// caller can invalidate state derived from the selection.
///
/// [`toggle`]: Selection::toggle
/// [`remove`]: Selection::remove
/// [`clear`]: Selection::clear
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    dates: Vec<NaiveDate>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.dates.len() >= MAX_DATES
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Remove `date` if present, otherwise append it while below capacity.
    ///
    /// Additions beyond capacity are silently ignored; the UI stops offering
    /// unselected days once the set is full, so this is a backstop rather
    /// than an error path.
    pub fn toggle(&mut self, date: NaiveDate) -> bool {
        if let Some(pos) = self.dates.iter().position(|d| *d == date) {
            self.dates.remove(pos);
            true
        } else if self.dates.len() < MAX_DATES {
            self.dates.push(date);
            true
        } else {
            false
        }
    }

    /// Remove `date` if present; no-op otherwise.
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        match self.dates.iter().position(|d| *d == date) {
            Some(pos) => {
                self.dates.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) -> bool {
        if self.dates.is_empty() {
            return false;
        }
        self.dates.clear();
        true
    }

    /// Chosen dates in insertion order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Chosen dates sorted ascending, the order the script generator uses.
    pub fn sorted(&self) -> Vec<NaiveDate> {
        let mut sorted = self.dates.clone();
        sorted.sort();
        sorted
    }
}
